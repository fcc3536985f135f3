use crate::areas::session::Session;
use crate::artifacts::comparable::SliceComparable;
use crate::artifacts::format::merge::{END_CHANGE, MIDDLE_CHANGE, START_CHANGE, merge_with};
use crate::artifacts::format::plus_minus::plus_minus_with;
use crate::artifacts::tokens::TokenMode;
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// How an edit script is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    PlusMinus,
    Merge,
}

impl Session {
    pub fn diff(
        &self,
        old: &Path,
        new: &Path,
        mode: TokenMode,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        let a = self.workspace().read_tokens(old, mode)?;
        let b = self.workspace().read_tokens(new, mode)?;
        debug!(
            a_length = a.len(),
            b_length = b.len(),
            algorithm = ?self.options().algorithm,
            "comparing files"
        );

        let results = self.algorithm().diff(&SliceComparable::new(&a, &b))?;

        match format {
            OutputFormat::PlusMinus => {
                for line in plus_minus_with(&results, &a, &b)? {
                    self.print_plus_minus_line(&line)?;
                }
            }
            OutputFormat::Merge => {
                for line in merge_with(&results, &a, &b)? {
                    self.print_merge_line(&line)?;
                }
            }
        }

        Ok(())
    }

    fn print_plus_minus_line(&self, line: &str) -> anyhow::Result<()> {
        match line.chars().next() {
            Some('+') => writeln!(self.writer(), "{}", line.green())?,
            Some('-') => writeln!(self.writer(), "{}", line.red())?,
            _ => writeln!(self.writer(), "{line}")?,
        }

        Ok(())
    }

    // A compared line may look like a marker; it is coloured like one too.
    fn print_merge_line(&self, line: &str) -> anyhow::Result<()> {
        if [START_CHANGE, MIDDLE_CHANGE, END_CHANGE].contains(&line) {
            writeln!(self.writer(), "{}", line.cyan())?;
        } else {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
