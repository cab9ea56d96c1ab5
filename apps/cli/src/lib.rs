//! # Repair Intake CLI Library
//!
//! Configures logging, opens the store and dispatches one form action or an
//! interactive session.
//!
//! ## Module Organization
//! ```text
//! intake_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   └── config.rs   ◄─── AppConfig (TOML + env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── customer.rs ◄─── create / find / update / clear
//! │   └── export.rs   ◄─── PDF export
//! ├── session.rs      ◄─── Interactive form
//! ├── output.rs       ◄─── Colored status line, form printing
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod session;
pub mod state;

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::AppResult;
use session::FormSession;
use state::{AppConfig, DbState};

/// Parses the command line and runs it.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG or default filter)             │
/// │  2. Load AppConfig: defaults → intake.toml → INTAKE_* → --db            │
/// │  3. Open the store, create the table if missing                         │
/// │  4. Run the subcommand                                                  │
/// │  5. Close the pool                                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Every handled outcome, "not found" included, exits with success.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{} could not start runtime: {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(execute(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e.message);
            ExitCode::FAILURE
        }
    }
}

/// Loads config, opens the store and runs one subcommand.
pub async fn execute(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::load(cli.config.clone())?;
    if let Some(db_path) = cli.db.clone() {
        config.database.path = db_path;
    }

    info!(db = %config.database.path.display(), "Starting repair intake");
    let db = DbState::open(config.db_config()).await?;

    let result = dispatch(&db, &config, cli.command).await;
    db.close().await;
    result
}

async fn dispatch(db: &DbState, config: &AppConfig, command: Commands) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (response, json) = match command {
        Commands::Create { fields, output } => {
            (commands::create_customer(db, fields.into()).await?, output.json)
        }
        Commands::Find { fields, output } => {
            (commands::find_customer(db, fields.into()).await?, output.json)
        }
        Commands::Update { fields, output } => {
            (commands::update_customer(db, fields.into()).await?, output.json)
        }
        Commands::Export { output } => (
            commands::export_customers(db, config, Default::default()).await?,
            output.json,
        ),
        Commands::Form => {
            let stdin = io::stdin();
            let mut session = FormSession::new(db, config);
            return session.run(stdin.lock(), &mut out).await;
        }
    };

    info!(success = response.is_success(), "Command finished");
    output::write_response(&mut out, &response, json)?;
    out.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for the intake crates
/// - Default: warnings, plus info from the intake crates
///
/// Logs go to stderr so stdout carries only the form and status line.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,intake=debug,sqlx=warn"
    } else {
        "warn,intake=info,sqlx=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
