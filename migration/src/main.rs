use common::config::AppConfig;
use migration::runner;
use std::process;

#[tokio::main]
async fn main() {
    let db_path = AppConfig::global().database_path.clone();
    let command = std::env::args().nth(1);

    if let Err(err) = runner::run_command(command.as_deref(), &db_path).await {
        eprintln!("{err}");
        process::exit(1);
    }
}
