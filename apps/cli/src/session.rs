//! # Interactive Form Session
//!
//! Keeps one form in memory and applies actions to it, the way the operator
//! would at the counter.
//!
//! ```text
//! > set name Ana
//! > set phone 555
//! > note
//! revisar fuente
//! cliente deja cargador
//! .
//! > create
//! Customer created successfully
//! > set phone 555
//! > find
//! Name:         Ana
//! ...
//! Customer found
//! ```

use colored::Colorize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::commands::{clear_form, create_customer, export_customers, find_customer, update_customer};
use crate::error::{AppError, AppResult};
use crate::output::{write_form, write_response};
use crate::state::{AppConfig, DbState};
use intake_core::{CoreError, CustomerForm, FormField, FormResponse};

const PROMPT: &str = "> ";
const NOTE_TERMINATOR: &str = ".";

const HELP: &str = "\
Commands:
  set <field> <value>   fill a field (name, phone, address, brand, model, fault, note)
  note                  type a multi-line note, end with a line holding only '.'
  create                save the form as a new customer
  find                  load the first customer matching name, phone or address
  update                overwrite the matching customer with the non-empty fields
  clear                 empty the form
  export                write every customer to the PDF report
  show                  print the form
  help                  print this help
  quit                  leave the session";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Set(FormField, String),
    Note,
    Create,
    Find,
    Update,
    Clear,
    Export,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "set" => {
                let rest = rest.trim_start();
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(AppError::validation("usage: set <field> <value>"));
                }
                let field = FormField::from_str(name).map_err(CoreError::from)?;
                Ok(SessionCommand::Set(field, value.to_string()))
            }
            "note" => Ok(SessionCommand::Note),
            "create" => Ok(SessionCommand::Create),
            "find" => Ok(SessionCommand::Find),
            "update" => Ok(SessionCommand::Update),
            "clear" => Ok(SessionCommand::Clear),
            "export" => Ok(SessionCommand::Export),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(AppError::validation(format!(
                "unknown command '{}', type 'help'",
                other
            ))),
        }
    }
}

/// A form held across actions.
pub struct FormSession<'a> {
    db: &'a DbState,
    config: &'a AppConfig,
    form: CustomerForm,
}

impl<'a> FormSession<'a> {
    pub fn new(db: &'a DbState, config: &'a AppConfig) -> Self {
        FormSession {
            db,
            config,
            form: CustomerForm::default(),
        }
    }

    /// The form as it currently stands.
    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Input mistakes are reported and the session goes on. Storage and
    /// export failures end it.
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> AppResult<()> {
        writeln!(out, "Repair intake form. Type 'help' for commands.")?;

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{}", err.message.as_str().red())?;
                    continue;
                }
            };
            debug!(?command, "Session command");

            match command {
                SessionCommand::Quit => break,
                SessionCommand::Help => writeln!(out, "{}", HELP)?,
                SessionCommand::Show => write_form(out, &self.form)?,
                SessionCommand::Set(field, value) => self.form.set_field(field, value),
                SessionCommand::Note => {
                    let note = read_note(&mut input)?;
                    self.form.set_field(FormField::Note, note);
                }
                action => {
                    let response = self.apply(action).await?;
                    write_response(out, &response, false)?;
                    self.form = response.form;
                }
            }
        }

        Ok(())
    }

    async fn apply(&self, action: SessionCommand) -> AppResult<FormResponse> {
        let form = self.form.clone();
        match action {
            SessionCommand::Create => create_customer(self.db, form).await,
            SessionCommand::Find => find_customer(self.db, form).await,
            SessionCommand::Update => update_customer(self.db, form).await,
            SessionCommand::Export => export_customers(self.db, self.config, form).await,
            SessionCommand::Clear => Ok(clear_form()),
            other => Err(AppError::internal(format!("{:?} is not a form action", other))),
        }
    }
}

/// Next input line without its line ending. `None` at end of input.
fn read_line(input: &mut impl BufRead) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Lines up to a lone "." (or end of input), joined with newlines.
fn read_note(input: &mut impl BufRead) -> AppResult<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim() == NOTE_TERMINATOR {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
