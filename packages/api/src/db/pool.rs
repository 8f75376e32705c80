//! Lazy process-wide PostgreSQL pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

const DEFAULT_POOL_SIZE: u32 = 5;

/// Get or initialize the shared connection pool.
///
/// Reads `DATABASE_URL` (via `dotenvy`) on first use. `LINKLEAF_DB_POOL_SIZE`
/// overrides the connection cap.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            sqlx::Error::Configuration("DATABASE_URL is not set".into())
        })?;

        let max_connections = std::env::var("LINKLEAF_DB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POOL_SIZE);

        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await
    })
    .await
}
