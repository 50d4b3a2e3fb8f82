use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::CONTENT_TYPE},
};

use crate::{
    AppState,
    cache::{USER_CACHE_TTL_SECS, user_key},
    error::AppError,
    models::{NewUser, UserRecord},
    result::ApiResult,
};

pub const INSERT_MESSAGE: &str = "Data inserted successfully";

/// 写入用户：先插入数据库，成功后再把完整记录写入缓存
#[axum::debug_handler]
pub async fn insert_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResult<UserRecord>>, AppError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    match write_through(&state, content_type, &body).await {
        Ok(user) => Ok(Json(ApiResult::success(INSERT_MESSAGE, user))),
        Err(e) => {
            tracing::error!("Insert error: {}", e);
            Err(e)
        }
    }
}

async fn write_through(
    state: &AppState,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<UserRecord, AppError> {
    let new_user = NewUser::from_body(content_type, body)?;

    let user = state.store.insert_user(&new_user).await?;

    // 缓存写入失败时不回滚数据库中的记录
    let json = serde_json::to_string(&user)?;
    state
        .cache
        .set_ex(&user_key(user.id), &json, USER_CACHE_TTL_SECS)
        .await?;

    tracing::debug!("Cached user {} for {}s", user.id, USER_CACHE_TTL_SECS);
    Ok(user)
}
