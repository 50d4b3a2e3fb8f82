/// 用户记录缓存键前缀
const USER_PREFIX: &str = "user:";

/// 生成用户记录缓存键，写入和读取使用同一格式
pub fn user_key(user_id: impl std::fmt::Display) -> String {
    format!("{}{}", USER_PREFIX, user_id)
}
