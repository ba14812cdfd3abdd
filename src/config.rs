use std::path::{Path, PathBuf};

use crate::cli::{Cli, Dialect};
use crate::error::GenError;

/// Where the input text comes from and how it is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A `CREATE TABLE` statement, possibly still to be read.
    Ddl(Option<String>),
    /// A JSON object sample for the named struct, possibly still to be read.
    Json {
        name: String,
        sample: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Write,
    Print,
    Schema,
}

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    /// Required when writing; optional for the printing modes.
    pub target_dir: Option<PathBuf>,
    pub source: Source,
    pub dialect: Dialect,
    pub output_mode: OutputMode,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, GenError> {
        let output_mode = if cli.print {
            OutputMode::Print
        } else if cli.schema {
            OutputMode::Schema
        } else {
            OutputMode::Write
        };

        let target_dir = match cli.target {
            Some(target) => Some(Self::resolve_target_dir(&target)?),
            None if output_mode == OutputMode::Write => return Err(GenError::MissingTarget),
            None => None,
        };

        let source = match cli.name {
            Some(name) => Source::Json {
                name,
                sample: cli.json,
            },
            None => Source::Ddl(cli.ddl),
        };

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            target_dir,
            source,
            dialect: cli.dialect,
            output_mode,
        })
    }

    /// Resolves the target to the directory generated files go into.
    /// - Relative paths are resolved against the current directory
    /// - A file resolves to the directory containing it
    pub fn resolve_target_dir(target: &Path) -> Result<PathBuf, GenError> {
        let resolved = Self::resolve_path(target)?;

        if !resolved.exists() {
            return Err(GenError::Config(format!(
                "Target does not exist: {}",
                resolved.display()
            )));
        }

        let canonical = resolved.canonicalize().map_err(|e| {
            GenError::Config(format!(
                "Cannot canonicalize target {}: {}",
                resolved.display(),
                e
            ))
        })?;

        if canonical.is_dir() {
            return Ok(canonical);
        }

        canonical
            .parent()
            .map(Path::to_path_buf)
            .ok_or(GenError::MissingTarget)
    }

    pub fn resolve_path(path: &Path) -> Result<PathBuf, GenError> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().map_err(|e| {
                GenError::Config(format!("Cannot determine current directory: {}", e))
            })?;
            Ok(current_dir.join(path))
        }
    }
}
