//! Command to print the pre-filter candidate list.

use std::path::PathBuf;

use clap::Args;
use scout::{expand, load_terms};

use crate::error::CliError;
use crate::utils::{format_lines, GlobalOptions, OutputFormat};

/// Print the expanded candidate list for a terms file.
///
/// Shows what the resolver would check, in order, without evaluating
/// templates or touching the filesystem. Useful for debugging term lists.
#[derive(Args)]
pub struct ExpandCommand {
    /// YAML file containing the term list
    #[arg(value_name = "TERMS_FILE")]
    pub terms_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ExpandCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let terms = load_terms(&self.terms_file)?;
        let candidates = expand(&terms);

        let rendered = format_lines(&candidates, self.format)?;
        if !rendered.is_empty() {
            println!("{rendered}");
        }

        Ok(())
    }
}
