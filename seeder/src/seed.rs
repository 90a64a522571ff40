use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;
use services::service::AppError;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const STATUS_COLUMN: usize = 80;

#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("{0} seeder panicked")]
    Panicked(String),
}

/// Runs one seeder behind a `Seeding <name>..... done (elapsed)` status line.
pub async fn run_seeder<S: Seeder + Sync + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<Duration, SeedError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let elapsed = start.elapsed();
            println!("{} {}", "done".green(), format!("({:.2?})", elapsed).dimmed());
            Ok(elapsed)
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            Err(SeedError::App(err))
        }
        Err(_) => {
            println!("{}", "failed".red());
            Err(SeedError::Panicked(name.to_owned()))
        }
    }
}
