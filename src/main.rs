//! Command-line interface for bad-data-workshop
//!
//! # Usage Examples
//!
//! ```bash
//! # Set up a workshop database on PostgreSQL
//! bad-data-workshop setup \
//!   --db-type postgres --host localhost --port 5432 \
//!   --database workshop --user postgres --password secret
//!
//! # Larger dataset (~2.5GB)
//! bad-data-workshop setup \
//!   --db-type postgres --host localhost --database workshop \
//!   --user postgres --password secret --scale large
//!
//! # Complete cleanup
//! bad-data-workshop teardown \
//!   --db-type mysql --host localhost --database workshop \
//!   --user root --password secret
//!
//! # Print the diagnostic queries (no connection needed)
//! bad-data-workshop diagnose --db-type redshift
//! ```
//!
//! Exit codes: 0 on success, 1 on error, 130 on Ctrl-C.

use clap::{Args, Parser, Subcommand, ValueEnum};
use workshop_core::{BackendKind, DbConfig, Scale, DEFAULT_SEED};

#[derive(Parser)]
#[command(name = "bad-data-workshop")]
#[command(about = "Seed a database with intentionally defective data for training workshops")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up the workshop database with all fifteen problem datasets
    Setup {
        #[command(flatten)]
        conn: ConnectionArgs,

        /// Dataset scale: tiny, small, medium, large or xlarge
        /// (unknown tokens fall back to small)
        #[arg(long, default_value = "small")]
        scale: String,

        /// Random seed; runs with the same seed generate the same data
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Remove all workshop data from the target database
    Teardown {
        #[command(flatten)]
        conn: ConnectionArgs,
    },

    /// Show the diagnostic queries for every problem
    Diagnose {
        /// Database backend (affects query prefixes)
        #[arg(long = "db-type", value_enum)]
        db_type: Backend,
    },
}

/// Shared connection flags for commands that talk to a database.
#[derive(Args, Clone, Debug)]
struct ConnectionArgs {
    /// Database backend
    #[arg(long = "db-type", value_enum)]
    db_type: Backend,

    /// Database host
    #[arg(long)]
    host: String,

    /// Database port (defaults to the backend's standard port)
    #[arg(long)]
    port: Option<u16>,

    /// Database name
    #[arg(long)]
    database: String,

    /// Database user
    #[arg(long)]
    user: String,

    /// Database password
    #[arg(long, env = "WORKSHOP_DB_PASSWORD")]
    password: String,
}

impl ConnectionArgs {
    fn into_config(self) -> DbConfig {
        let kind = BackendKind::from(self.db_type);
        DbConfig {
            kind,
            host: self.host,
            port: self.port.unwrap_or_else(|| kind.default_port()),
            database: self.database,
            user: self.user,
            password: self.password,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    /// PostgreSQL
    Postgres,
    /// MySQL
    Mysql,
    /// Amazon Redshift
    Redshift,
}

impl From<Backend> for BackendKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Postgres => BackendKind::Postgres,
            Backend::Mysql => BackendKind::MySQL,
            Backend::Redshift => BackendKind::Redshift,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let code = tokio::select! {
        result = run(cli) => match result {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {e:#}");
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // Dropping the in-flight future tears down any open
            // connection before the process exits.
            eprintln!("Operation cancelled");
            130
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Setup { conn, scale, seed } => {
            let scale = match scale.parse::<Scale>() {
                Ok(scale) => scale,
                Err(e) => {
                    tracing::warn!("{e}; falling back to {}", Scale::default());
                    Scale::default()
                }
            };
            bad_data_workshop::run_setup(conn.into_config(), scale, seed).await
        }
        Commands::Teardown { conn } => bad_data_workshop::run_teardown(conn.into_config()).await,
        Commands::Diagnose { db_type } => {
            bad_data_workshop::run_diagnose(db_type.into());
            Ok(())
        }
    }
}
