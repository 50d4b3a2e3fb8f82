use std::time::Duration;

use serde::Serialize;

use crate::models::UserRecord;

/// 单个存储的一次读取结果
#[derive(Debug, Serialize)]
pub struct StoreReading<T> {
    pub data: Option<T>,
    /// 三位小数的毫秒数，以字符串形式返回
    pub latency_ms: String,
    pub found: bool,
    #[serde(skip)]
    millis: f64,
}

impl<T> StoreReading<T> {
    pub fn new(data: Option<T>, elapsed: Duration) -> Self {
        let millis = round_to(elapsed.as_secs_f64() * 1000.0, 3);
        Self {
            found: data.is_some(),
            data,
            latency_ms: format!("{:.3}", millis),
            millis,
        }
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    #[serde(rename = "PostgreSQL")]
    Postgres,
    Redis,
}

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub postgres_latency_ms: f64,
    pub redis_latency_ms: f64,
    pub difference_ms: String,
    pub redis_speedup_factor: String,
    pub winner: Winner,
}

impl Comparison {
    /// 延迟相等时判定 Redis 胜出
    pub fn new(postgres_ms: f64, redis_ms: f64) -> Self {
        Self {
            postgres_latency_ms: postgres_ms,
            redis_latency_ms: redis_ms,
            difference_ms: format!("{:.3}", postgres_ms - redis_ms),
            redis_speedup_factor: format!("{}x", format_ratio(postgres_ms / redis_ms)),
            winner: if postgres_ms < redis_ms {
                Winner::Postgres
            } else {
                Winner::Redis
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub postgres: StoreReading<UserRecord>,
    pub redis: StoreReading<serde_json::Value>,
    pub comparison: Comparison,
}

impl CompareResponse {
    pub fn new(
        user_id: String,
        postgres: StoreReading<UserRecord>,
        redis: StoreReading<serde_json::Value>,
    ) -> Self {
        let comparison = Comparison::new(postgres.millis(), redis.millis());
        Self {
            user_id,
            postgres,
            redis,
            comparison,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// Redis 耗时四舍五入为 0 时比值不是有限数
fn format_ratio(ratio: f64) -> String {
    if ratio.is_nan() {
        "NaN".to_string()
    } else if ratio == f64::INFINITY {
        "Infinity".to_string()
    } else if ratio == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:.2}", ratio)
    }
}
