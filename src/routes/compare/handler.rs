use std::time::Instant;

use axum::{
    Json,
    extract::{Path, State},
};

use super::model::{CompareResponse, StoreReading};
use crate::{AppState, cache::user_key, error::AppError};

/// 分别从数据库和缓存读取同一条记录，比较两次读取的耗时
///
/// 每个存储只测一次，没有预热和重复，结果只代表这一次调用。
#[axum::debug_handler]
pub async fn compare_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompareResponse>, AppError> {
    match measure(&state, id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Comparison error: {}", e);
            Err(e)
        }
    }
}

async fn measure(state: &AppState, id: String) -> Result<CompareResponse, AppError> {
    let started = Instant::now();
    let row = state.store.find_user(&id).await?;
    let postgres = StoreReading::new(row, started.elapsed());

    let started = Instant::now();
    let cached = state.cache.get(&user_key(&id)).await?;
    let redis_elapsed = started.elapsed();

    let cached = cached
        .map(|raw| serde_json::from_str::<serde_json::Value>(&raw))
        .transpose()?;
    let redis = StoreReading::new(cached, redis_elapsed);

    Ok(CompareResponse::new(id, postgres, redis))
}
