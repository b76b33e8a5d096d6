//! Command parsing for the interactive session.
//!
//! One typed line maps to one [`Command`]. Field-setting commands take the
//! rest of the line verbatim (so labels may contain spaces); everything else
//! is a single word plus, for `del`, a row number.

use thiserror::Error;

use smeta_core::models::PricingMode;

/// A form field addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Width,
    Height,
    Quantity,
    Price,
}

/// One user action. Every session iteration executes exactly one command to
/// completion before the next line is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a raw value into a form field.
    SetField(Field, String),
    /// Select the pricing mode.
    SetMode(PricingMode),
    /// Validate the form and append it to the ledger.
    Add,
    /// Reset the form fields to their defaults.
    ClearForm,
    /// Remove the row with the given 1-based display number.
    Delete(usize),
    /// Render the current table.
    Show,
    /// Write the delimited export file.
    ExportDelimited,
    /// Write the workbook export file.
    ExportWorkbook,
    /// Emit the print view of the current table.
    Print,
    /// Clear the whole ledger (asks for confirmation first).
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for the list")]
    Unknown(String),

    #[error("'mode' expects 'sqm' or 'fixed'")]
    MissingMode,

    #[error("unknown pricing mode '{0}': expected 'sqm' or 'fixed'")]
    UnknownMode(String),

    #[error("'del' expects a row number")]
    MissingRow,

    #[error("invalid row number '{0}'")]
    InvalidRow(String),
}

/// Parses one non-empty typed line into a [`Command`].
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "type" => Ok(Command::SetField(Field::Type, rest.to_string())),
        "width" => Ok(Command::SetField(Field::Width, rest.to_string())),
        "height" => Ok(Command::SetField(Field::Height, rest.to_string())),
        "qty" => Ok(Command::SetField(Field::Quantity, rest.to_string())),
        "price" => Ok(Command::SetField(Field::Price, rest.to_string())),
        "mode" => {
            if rest.is_empty() {
                return Err(CommandError::MissingMode);
            }
            PricingMode::parse(rest)
                .map(Command::SetMode)
                .ok_or_else(|| CommandError::UnknownMode(rest.to_string()))
        }
        "add" => Ok(Command::Add),
        "clear" => Ok(Command::ClearForm),
        "del" | "delete" => {
            if rest.is_empty() {
                return Err(CommandError::MissingRow);
            }
            rest.parse::<usize>()
                .ok()
                .filter(|row| *row >= 1)
                .map(Command::Delete)
                .ok_or_else(|| CommandError::InvalidRow(rest.to_string()))
        }
        "show" | "list" => Ok(Command::Show),
        "csv" => Ok(Command::ExportDelimited),
        "xlsx" => Ok(Command::ExportWorkbook),
        "print" => Ok(Command::Print),
        "reset" => Ok(Command::Reset),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
