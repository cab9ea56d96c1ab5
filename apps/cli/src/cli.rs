//! Command line definitions using clap.
//!
//! One subcommand per form action, plus `form` for an interactive session
//! that keeps the form between actions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use intake_core::CustomerForm;

/// Repair shop intake: record customers and their devices
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path (default: intake.toml in the platform config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overrides the config file and INTAKE_DB_PATH
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Form actions
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new customer intake
    Create {
        #[command(flatten)]
        fields: FormArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the first customer matching name, phone or address
    Find {
        #[command(flatten)]
        fields: SearchArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Overwrite the first matching customer with the given non-empty fields
    Update {
        #[command(flatten)]
        fields: FormArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write every customer to the PDF report
    Export {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interactive form session
    Form,
}

/// The seven editable form inputs.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub address: String,

    /// Device brand
    #[arg(long, default_value = "")]
    pub brand: String,

    #[arg(long, default_value = "")]
    pub model: String,

    /// Reported problem
    #[arg(long, default_value = "")]
    pub fault: String,

    /// Free text, may span several lines
    #[arg(long, default_value = "")]
    pub note: String,
}

impl From<FormArgs> for CustomerForm {
    fn from(args: FormArgs) -> Self {
        CustomerForm {
            name: args.name,
            phone: args.phone,
            address: args.address,
            brand: args.brand,
            model: args.model,
            fault: args.fault,
            note: args.note,
            intake_timestamp: String::new(),
        }
    }
}

/// The three inputs a lookup can use. The first non-empty one wins.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub address: String,
}

impl From<SearchArgs> for CustomerForm {
    fn from(args: SearchArgs) -> Self {
        CustomerForm {
            name: args.name,
            phone: args.phone,
            address: args.address,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "intake", "create", "--name", "Ana", "--phone", "555", "--note", "revisar fuente",
        ])
        .unwrap();

        let Commands::Create { fields, output } = cli.command else {
            panic!("expected create");
        };
        let form = CustomerForm::from(fields);
        assert_eq!(form.name, "Ana");
        assert_eq!(form.phone, "555");
        assert_eq!(form.address, "");
        assert_eq!(form.note, "revisar fuente");
        assert!(!output.json);
    }

    #[test]
    fn test_parse_find_with_globals() {
        let cli = Cli::try_parse_from([
            "intake", "find", "--phone", "555", "--json", "--db", "/tmp/c.db", "-v",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/c.db")));
        assert!(cli.verbose);
        let Commands::Find { fields, output } = cli.command else {
            panic!("expected find");
        };
        assert!(output.json);
        assert_eq!(CustomerForm::from(fields).phone, "555");
    }

    #[test]
    fn test_find_rejects_device_fields() {
        assert!(Cli::try_parse_from(["intake", "find", "--brand", "Acme"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["intake"]).is_err());
    }
}
