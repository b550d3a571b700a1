//! Schema setup for the posts table

use sqlx::PgPool;

/// Create the posts table if it does not exist yet.
///
/// Columns are plain nullable `TEXT`; the only constraint is the primary key.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id SERIAL PRIMARY KEY,
            name TEXT,
            image TEXT,
            body TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
