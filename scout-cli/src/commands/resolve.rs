//! Command to resolve a term list against the filesystem.

use std::path::PathBuf;

use clap::Args;
use scout::{init_logger, load_terms, DirChain, Resolver, VarTable};

use crate::error::CliError;
use crate::utils::{format_lines, parse_var, GlobalOptions, OutputFormat};

/// Resolve terms from a YAML file and print the files that exist.
#[derive(Args)]
pub struct ResolveCommand {
    /// YAML file containing the term list
    #[arg(value_name = "TERMS_FILE")]
    pub terms_file: PathBuf,

    /// Template variable binding (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Search directory for relative candidates, most specific first (repeatable)
    #[arg(long = "dir", value_name = "PATH")]
    pub dirs: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with an error when no files are found
    #[arg(long)]
    pub strict: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);

        let terms = load_terms(&self.terms_file)?;

        let mut vars = VarTable::new();
        for binding in &self.vars {
            let (name, value) = parse_var(binding)?;
            vars.set(name, value);
        }

        let mut chain = DirChain::new();
        for dir in &self.dirs {
            chain.push_dir(dir)?;
        }
        if chain.is_empty() {
            // Fall back to searching relative to the terms file itself.
            if let Some(parent) = self.terms_file.parent() {
                chain.push_dir(parent)?;
            }
        }

        let resolver = Resolver::new(vars, chain);
        let found = resolver.resolve(&terms)?;

        logger.info(&format!("{} existing file(s) found", found.len()));

        let lines: Vec<String> = found.iter().map(|p| p.display().to_string()).collect();
        let rendered = format_lines(&lines, self.format)?;
        if !rendered.is_empty() {
            println!("{rendered}");
        }

        if self.strict && found.is_empty() {
            return Err(CliError::NoMatches);
        }

        Ok(())
    }
}
