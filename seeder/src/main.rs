use crate::seed::run_seeder;
use common::{config::AppConfig, logger};
use migration::runner;
use services::{post_service::PostService, user_service::UserService};
use std::process;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let config = AppConfig::global().clone();
    if let Err(err) = logger::init_logger(&config.log_level, &config.log_file, config.log_to_stdout)
    {
        eprintln!("Failed to initialise logger: {err}");
    }
    log::info!("Seeding {} ({})", config.project_name, config.env);

    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => fail(&format!("Failed to connect to database: {err}")),
    };

    if let Err(err) = runner::run_pending_migrations(&db).await {
        fail(&format!("Migration failed: {err}"));
    }

    for (seeder, name) in seeds::all() {
        if let Err(err) = run_seeder(&*seeder, name, &db).await {
            fail(&format!("{name} seeder failed: {err}"));
        }
    }

    match (UserService::count(&db).await, PostService::count(&db).await) {
        (Ok(users), Ok(posts)) => log::info!("Seeding complete: {users} users, {posts} posts"),
        _ => log::warn!("Seeding complete, but row counts could not be read"),
    }
}

fn fail(message: &str) -> ! {
    log::error!("{message}");
    eprintln!("{message}");
    process::exit(1);
}
