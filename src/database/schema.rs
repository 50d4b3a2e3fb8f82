use sqlx::{Executor, PgPool};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100),
        age INTEGER,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// 创建 users 表，表已存在时不做任何事，每次启动都可以安全执行
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    pool.execute(CREATE_USERS_TABLE).await?;
    tracing::info!("PostgreSQL table ready");
    Ok(())
}
