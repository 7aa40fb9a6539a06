use cadastro_idosos::{
    cli::{
        db::{db_generate, db_list, db_migrate, db_revert},
        idoso::seed_idoso,
    },
    core::db::init_pool,
    settings::get_config,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Idoso records related command
    Idoso(IdosoArgs),
}

#[derive(Debug, Args)]
struct IdosoArgs {
    #[command(subcommand)]
    command: IdosoCommands,
}

#[derive(Debug, Subcommand)]
enum IdosoCommands {
    /// Insert fake records
    Seed {
        #[arg(short, long, default_value_t = 10)]
        count: u32,
    },
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                db_generate(migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let config = get_config()?;
                db_list(&config).await?;
            }
            DbCommands::Migrate => {
                println!("run all pending migration");
                let config = get_config()?;
                println!("run migration on {}", config.database_url);
                db_migrate(&config).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let config = get_config()?;
                println!("{}", config.database_url);
                db_revert(&config).await?;
            }
        },
        Commands::Idoso(idoso_args) => match &idoso_args.command {
            IdosoCommands::Seed { count } => {
                println!("seed {count} idoso");
                let config = get_config()?;
                let pool = init_pool(&config).await?;
                seed_idoso(&pool, *count).await?;
            }
        },
    }
    Ok(())
}
