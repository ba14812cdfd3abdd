//! SQL type mapping and identifier casing.
//!
//! Column type tags map onto a small fixed set of Rust field types; anything
//! not listed falls back to `String`. Table and column names are converted
//! from `snake_case` to `camelCase` / `PascalCase` for type names.

use std::fmt;

/// Rust scalar type of a generated field. Always rendered inside `Option<..>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    I32,
    I64,
    F64,
    Bool,
    String,
    DateTime,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::F64 => "f64",
            FieldType::Bool => "bool",
            FieldType::String => "String",
            FieldType::DateTime => "DateTime",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a lower-case SQL type tag to its field type.
pub fn map_type(datatype: &str) -> FieldType {
    match datatype {
        "tinyint" | "smallint" | "int" => FieldType::I32,
        "varchar" => FieldType::String,
        "datetime" | "timestamp" => FieldType::DateTime,
        _ => FieldType::String,
    }
}

/// Converts `snake_case` to `camelCase`, or `PascalCase` with `upper_first`.
///
/// An underscore followed by an ASCII word character is dropped and the
/// character upper-cased. Other characters are never lower-cased.
pub fn to_identifier(name: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && (next.is_ascii_alphanumeric() || next == '_') => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }

    if !upper_first {
        return result;
    }

    let mut chars = result.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => result,
    }
}
