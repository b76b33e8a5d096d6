//! Interactive command session over the estimate ledger.
//!
//! The session owns the form state and the I/O streams; the ledger is passed
//! in so the caller decides its lifetime. Every command runs to completion
//! before the next line is read; there is no background work to overlap
//! with.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use smeta_core::admission::admit;
use smeta_core::export::{self, DELIMITED_FILE_NAME, ExportError, WORKBOOK_FILE_NAME};
use smeta_core::models::{Ledger, PricingMode};
use smeta_core::projection::{EstimateView, project};

use crate::commands::{self, Command, Field};
use crate::form::FormState;
use crate::render;

const HELP: &str = "\
type <text>       set the item label
width <cm>        set the width
height <cm>       set the height
qty <n>           set the quantity (default 1)
price <amount>    set the unit price
mode <sqm|fixed>  price per m² or per unit
add               validate the form and append a row
clear             clear the form fields
del <row>         remove a row by its number
show              render the table
csv               export to Расчет.csv
xlsx              export to Расчет.xlsx
print             print the current table
reset             remove all rows (asks for confirmation)
quit              leave";

/// Runs commands read from `input` against a ledger, writing all feedback to
/// `output`. Generic over the streams so tests can script a whole session.
pub struct Session<R, W> {
    input: R,
    output: W,
    form: FormState,
    export_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self {
            input,
            output,
            form: FormState::default(),
            export_dir: PathBuf::from("."),
        }
    }

    /// Redirects the fixed-name export files away from the working
    /// directory.
    pub fn with_export_dir(
        mut self,
        dir: impl Into<PathBuf>,
    ) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Reads and executes commands until `quit` or end of input.
    pub fn run(
        &mut self,
        ledger: &mut Ledger,
    ) -> Result<()> {
        self.write_line("Estimate calculator. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break; // end of input
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match commands::parse(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, ledger)?,
                Err(error) => self.write_line(&error.to_string())?,
            }
        }
        Ok(())
    }

    fn execute(
        &mut self,
        command: Command,
        ledger: &mut Ledger,
    ) -> Result<()> {
        match command {
            Command::SetField(field, value) => {
                let slot = match field {
                    Field::Type => &mut self.form.item_type,
                    Field::Width => &mut self.form.width_cm,
                    Field::Height => &mut self.form.height_cm,
                    Field::Quantity => &mut self.form.quantity,
                    Field::Price => &mut self.form.unit_price,
                };
                *slot = value;
            }
            Command::SetMode(mode) => {
                self.form.pricing_mode = mode;
                let hint = match mode {
                    PricingMode::PerArea => "price is now per m², e.g. 300",
                    PricingMode::Fixed => "price is now per unit, e.g. 600",
                };
                self.write_line(hint)?;
            }
            Command::Add => {
                let draft = self.form.to_draft();
                match admit(ledger, &draft) {
                    Ok(item) => {
                        info!(item_type = %item.item_type, "row added");
                        self.render_table(ledger)?;
                    }
                    Err(error) => {
                        warn!(%error, "rejected line item");
                        self.write_line(&error.to_string())?;
                    }
                }
            }
            Command::ClearForm => self.form.clear(),
            Command::Delete(position) => match ledger.remove(position - 1) {
                Some(item) => {
                    info!(item_type = %item.item_type, position, "row removed");
                    self.render_table(ledger)?;
                }
                None => self.write_line(&format!("no row {position}"))?,
            },
            Command::Show => self.render_table(ledger)?,
            Command::ExportDelimited => {
                self.export_file(ledger, DELIMITED_FILE_NAME, export::to_delimited)?;
            }
            Command::ExportWorkbook => {
                self.export_file(ledger, WORKBOOK_FILE_NAME, export::to_workbook)?;
            }
            Command::Print => {
                let view = project(ledger);
                self.output.write_all(render::print_view(&view).as_bytes())?;
            }
            Command::Reset => self.reset(ledger)?,
            Command::Help => self.write_line(HELP)?,
            Command::Quit => {} // handled in run()
        }
        Ok(())
    }

    fn export_file(
        &mut self,
        ledger: &Ledger,
        file_name: &str,
        serialize: fn(&EstimateView) -> std::result::Result<Vec<u8>, ExportError>,
    ) -> Result<()> {
        let view = project(ledger);
        match serialize(&view) {
            Ok(bytes) => {
                let path = self.export_dir.join(file_name);
                fs::write(&path, bytes)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                info!(file = %path.display(), rows = view.rows.len(), "export complete");
                self.write_line(&format!("saved {}", path.display()))?;
            }
            Err(error) => {
                warn!(%error, "export refused");
                self.write_line(&error.to_string())?;
            }
        }
        Ok(())
    }

    /// Asks for confirmation before clearing; anything but `y`/`yes` leaves
    /// the ledger untouched.
    fn reset(
        &mut self,
        ledger: &mut Ledger,
    ) -> Result<()> {
        write!(self.output, "Remove all rows? [y/N] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let answer = answer.trim();

        if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
            ledger.clear();
            info!("ledger cleared");
            self.render_table(ledger)?;
        } else {
            self.write_line("reset cancelled")?;
        }
        Ok(())
    }

    fn render_table(
        &mut self,
        ledger: &Ledger,
    ) -> Result<()> {
        let view = project(ledger);
        self.output.write_all(render::table(&view).as_bytes())?;
        Ok(())
    }

    fn write_line(
        &mut self,
        text: &str,
    ) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
