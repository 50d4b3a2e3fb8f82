// 数据库模块
// 包含建表逻辑和用户表的读写操作

pub mod schema;
pub mod user;

use async_trait::async_trait;

use crate::models::{NewUser, UserRecord};

pub use schema::ensure_schema;
pub use user::PgUserStore;

/// 关系型存储的用户操作，处理器只依赖这个 trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 插入一行并返回数据库生成的 id 和 created_at
    async fn insert_user(&self, user: &NewUser) -> Result<UserRecord, sqlx::Error>;

    /// 按 id 查找用户，id 原样作为参数交给数据库做类型转换
    async fn find_user(&self, id: &str) -> Result<Option<UserRecord>, sqlx::Error>;
}
