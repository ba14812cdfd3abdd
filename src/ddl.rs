//! `CREATE TABLE` parsing.
//!
//! The statement is parsed with `sqlparser` for the selected dialect and
//! reduced to a compact schema: the table name plus an ordered list of
//! columns with lower-case type tags (`int`, `varchar`, `datetime`, ...).

use serde::Serialize;
use sqlparser::ast::{ObjectName, Statement};
use sqlparser::dialect::{
    Dialect as SqlParserDialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect,
};
use sqlparser::parser::Parser;

use crate::cli::Dialect;
use crate::error::{GenError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub datatype: String,
}

impl Dialect {
    pub fn sqlparser_dialect(&self) -> Box<dyn SqlParserDialect> {
        match self {
            Dialect::Mysql => Box::new(MySqlDialect {}),
            Dialect::Postgres => Box::new(PostgreSqlDialect {}),
            Dialect::Sqlite => Box::new(SQLiteDialect {}),
            Dialect::Generic => Box::new(GenericDialect {}),
        }
    }
}

/// Parses a single `CREATE TABLE` statement into its compact schema.
pub fn parse(ddl: &str, dialect: Dialect) -> Result<TableSchema> {
    let sql_dialect = dialect.sqlparser_dialect();
    let statements = Parser::parse_sql(sql_dialect.as_ref(), ddl)
        .map_err(|e| GenError::ParseFailure(e.to_string()))?;

    log::debug!("Parsed {} statement(s)", statements.len());

    let mut statements = statements.into_iter();
    let create = match (statements.next(), statements.next()) {
        (Some(Statement::CreateTable(create)), None) => create,
        (None, _) => return Err(GenError::ParseFailure("no statement found".to_string())),
        (Some(_), Some(_)) => {
            return Err(GenError::ParseFailure(
                "expected exactly one CREATE TABLE statement".to_string(),
            ));
        }
        (Some(_), None) => {
            return Err(GenError::ParseFailure(
                "statement is not CREATE TABLE".to_string(),
            ));
        }
    };

    let name = table_name(&create.name)
        .ok_or_else(|| GenError::ParseFailure("table has no name".to_string()))?;

    if create.columns.is_empty() {
        return Err(GenError::ParseFailure(format!(
            "table {} has no columns",
            name
        )));
    }

    let columns = create
        .columns
        .iter()
        .map(|column| ColumnDef {
            name: column.name.value.clone(),
            datatype: type_tag(&column.data_type.to_string()),
        })
        .collect();

    Ok(TableSchema { name, columns })
}

/// Last component of a possibly schema-qualified name, unquoted.
fn table_name(name: &ObjectName) -> Option<String> {
    name.0.last().map(|ident| ident.value.clone())
}

/// Reduces a rendered SQL type such as `INT(11) UNSIGNED` to its tag (`int`).
fn type_tag(rendered: &str) -> String {
    let keyword: String = rendered
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase();

    match keyword.as_str() {
        "integer" => "int".to_string(),
        _ => keyword,
    }
}
