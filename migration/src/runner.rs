use colored::*;
use common::database;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use crate::Migrator;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration one step at a time, printing a status
/// line per migration. Returns the names of the migrations applied.
pub async fn run_pending_migrations(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        println!("Nothing to migrate");
        return Ok(Vec::new());
    }

    println!("Running migrations...");
    let mut applied = Vec::with_capacity(pending.len());
    for migration in pending {
        let name = migration.name().to_owned();
        run_migration(db, &name).await?;
        applied.push(name);
    }

    Ok(applied)
}

/// Dispatches the `migration` binary's argument against `db_path`.
///
/// `None` migrates, `fresh` deletes the database file and migrates, `clean`
/// only deletes it. Returns the migrations applied.
pub async fn run_command(command: Option<&str>, db_path: &str) -> Result<Vec<String>, String> {
    match command {
        None => migrate(db_path).await,
        Some("fresh") => {
            remove_db_file(db_path)?;
            migrate(db_path).await
        }
        Some("clean") => {
            remove_db_file(db_path)?;
            Ok(Vec::new())
        }
        Some(other) => Err(format!(
            "Unknown command '{other}'. Expected 'fresh' or 'clean'."
        )),
    }
}

async fn migrate(db_path: &str) -> Result<Vec<String>, String> {
    let url = database::database_url(db_path)?;
    let db = sea_orm::Database::connect(&url)
        .await
        .map_err(|e| format!("DB connection failed: {e}"))?;
    run_pending_migrations(&db)
        .await
        .map_err(|e| format!("Migration failed: {e}"))
}

fn remove_db_file(db_path: &str) -> Result<(), String> {
    let Some(path) = database::sqlite_file_path(db_path) else {
        return Err(format!(
            "Refusing to delete '{db_path}': not a database file path"
        ));
    };

    if path.exists() {
        fs::remove_file(path).map_err(|e| format!("Failed to delete DB file: {e}"))?;
        println!("Deleted DB: {}", path.display());
    } else {
        println!("DB file does not exist: {}", path.display());
    }
    Ok(())
}

async fn run_migration(db: &DatabaseConnection, name: &str) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(Migrator::up(db, Some(1)))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            Err(err)
        }
        Err(_) => {
            println!("{}", "failed".red());
            Err(DbErr::Migration(format!("migration {name} panicked")))
        }
    }
}
