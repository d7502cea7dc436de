use core_config::Environment;
use core_config::tracing::init_tracing;
use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    init_tracing(&Environment::from_env());
    cli::run_cli(Migrator).await;
}
