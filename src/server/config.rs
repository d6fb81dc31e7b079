/**
 * Server Configuration
 *
 * This module handles loading of server configuration, focusing on the
 * optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development when possible.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. When
 * `DATABASE_URL` is not set or the connection fails, the server falls back
 * to the in-memory store.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::users::memory::MemoryUserStore;
use crate::users::postgres::PgUserStore;
use crate::users::store::UserStore;

/// Load and initialize the user store
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - A `PgUserStore` if the database is successfully configured
/// - A `MemoryUserStore` if `DATABASE_URL` is not set or the connection
///   fails; the server keeps working, state is just not persistent
pub async fn load_store() -> Arc<dyn UserStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Falling back to in-memory user store.");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory user store.");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Database connection pool created successfully");

    // Run migrations
    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Arc::new(PgUserStore::new(pool))
}
