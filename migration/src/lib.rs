pub mod migrations;
mod migrator;
pub mod runner;

pub use migrator::Migrator;
pub use sea_orm_migration::MigratorTrait;
