use std::path::PathBuf;

use clap::Parser;

/// rbatis entity generator
///
/// Turns a single SQL `CREATE TABLE` statement into a Rust struct with
/// `Option`-wrapped fields and an rbatis `crud!` registration, written as
/// `<table>.rs` into the target directory.
///
/// Without --ddl the statement is read from stdin, or from an interactive
/// prompt when stdin is a terminal.
#[derive(Parser, Debug)]
#[command(name = "rbatis-gen")]
#[command(version)]
#[command(about, long_about)]
#[command(after_help = "Existing files are never overwritten.")]
pub struct Cli {
    /// File or directory to place the generated file next to / into
    #[arg(short = 't', long = "target", env = "RBATIS_GEN_TARGET")]
    pub target: Option<PathBuf>,

    /// CREATE TABLE statement to convert
    #[arg(long = "ddl", conflicts_with = "name")]
    pub ddl: Option<String>,

    /// Struct name; switches to generating from a JSON object sample
    #[arg(long = "name")]
    pub name: Option<String>,

    /// JSON object sample to convert (requires --name)
    #[arg(long = "json", requires = "name")]
    pub json: Option<String>,

    /// SQL dialect used to parse the DDL
    #[arg(short = 'd', long = "dialect", default_value = "mysql")]
    pub dialect: Dialect,

    /// Print the generated source to stdout instead of writing a file
    #[arg(short = 'p', long = "print", conflicts_with = "schema")]
    pub print: bool,

    /// Print the parsed table schema as JSON instead of writing a file
    #[arg(long = "schema", conflicts_with = "name")]
    pub schema: bool,

    /// Suppress colored output
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Dialect {
    #[default]
    Mysql,
    Postgres,
    Sqlite,
    Generic,
}
