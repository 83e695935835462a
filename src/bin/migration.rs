use clap::{Parser, Subcommand};
use instock_api::{config, db, migrator::Migrator};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Apply or roll back the instock-api schema
#[derive(Parser)]
#[command(name = "migration", version, about)]
struct Cli {
    /// Database URL; defaults to the configured `database_url`
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Apply all pending migrations
    #[default]
    Up,
    /// Roll back applied migrations
    Down {
        /// How many migrations to roll back (all when omitted)
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Drop every table and re-apply all migrations
    Fresh,
    /// Print which migrations have been applied
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let database_url = match cli.database_url {
        Some(url) => {
            config::init_tracing("info", false);
            url
        }
        None => {
            let cfg = config::load_config()?;
            config::init_tracing(cfg.log_level(), cfg.log_json);
            cfg.database_url
        }
    };

    let pool = db::establish_connection(&database_url).await?;

    match cli.command.unwrap_or_default() {
        Command::Up => {
            info!("Applying pending migrations");
            Migrator::up(&pool, None).await?;
        }
        Command::Down { steps } => {
            info!(?steps, "Rolling back migrations");
            Migrator::down(&pool, steps).await?;
        }
        Command::Fresh => {
            info!("Dropping all tables and re-applying migrations");
            Migrator::fresh(&pool).await?;
        }
        Command::Status => {
            Migrator::status(&pool).await?;
        }
    }

    db::close_pool(pool).await?;
    info!("Migration command completed successfully");

    Ok(())
}
