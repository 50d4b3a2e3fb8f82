use async_trait::async_trait;
use sqlx::PgPool;

use super::UserStore;
use crate::models::{NewUser, UserRecord};

/// 基于 PgPool 的用户存储
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<UserRecord, sqlx::Error> {
        tracing::debug!("Inserting user: {:?}", user);

        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age, created_at
            "#,
        )
        .bind(&user.name)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_user(&self, id: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        // 非数字的 id 会在数据库端转换失败并返回错误
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, age, created_at
            FROM users
            WHERE id = $1::integer
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
