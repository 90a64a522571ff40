pub mod models;
pub mod test_utils;

use common::{config, database};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connects using `DATABASE_PATH` from the global configuration.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&config::database_path()).await
}

/// Connects to a `sqlite:` DSN, or to a SQLite file when given a plain path.
pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = database::database_url(path_or_url).map_err(DbErr::Custom)?;
    log::debug!("Connecting to {url}");
    Database::connect(&url).await
}
