#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{Duration, NaiveDateTime};
use pg_redis_bench::{
    AppState,
    cache::UserCache,
    database::UserStore,
    models::{NewUser, UserRecord},
    routes::create_router,
};
use tower::ServiceExt;

/// 内存中的 users 表，id 从 1 开始自增
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<UserRecord>>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: &NewUser) -> Result<UserRecord, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::Protocol("relation \"users\" does not exist".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        let base = NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let record = UserRecord {
            id,
            name: user.name.clone(),
            age: user.age,
            created_at: base + Duration::milliseconds(id as i64),
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn find_user(&self, id: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::Protocol("connection reset".into()));
        }
        let id: i32 = id.parse().map_err(|_| {
            sqlx::Error::Protocol(format!("invalid input syntax for type integer: \"{}\"", id))
        })?;
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }
}

/// 内存中的键值缓存，记录每个键的过期时间
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
    pub fail: bool,
}

impl MemoryCache {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn entry(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// 模拟键过期
    pub fn expire(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), 3600));
    }
}

fn cache_error() -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::IoError, "Connection refused"))
}

#[async_trait]
impl UserCache for MemoryCache {
    async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> Result<(), redis::RedisError> {
        if self.fail {
            return Err(cache_error());
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), seconds));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        if self.fail {
            return Err(cache_error());
        }
        Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
    }
}

pub fn app(store: Arc<MemoryStore>, cache: Arc<MemoryCache>) -> Router {
    create_router(AppState::new(store, cache))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn insert_request(body: &str) -> Request<Body> {
    insert_request_as("application/json", body)
}

pub fn insert_request_as(content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/insert")
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn compare_request(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/compare/{}", id))
        .body(Body::empty())
        .unwrap()
}

pub fn latency(value: &serde_json::Value) -> f64 {
    value.as_str().unwrap().parse().unwrap()
}
