//! Rust source rendering for generated rbatis entities.

use crate::ddl::TableSchema;
use crate::mapping::{map_type, to_identifier, FieldType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedField {
    pub name: String,
    pub ty: FieldType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStruct {
    /// File name without the `.rs` extension.
    pub file_stem: String,
    pub struct_name: String,
    pub fields: Vec<GeneratedField>,
}

impl GeneratedStruct {
    /// Builds the entity for a table, one field per column in column order.
    pub fn from_schema(schema: &TableSchema) -> Self {
        let fields = schema
            .columns
            .iter()
            .map(|column| GeneratedField {
                name: column.name.clone(),
                ty: map_type(&column.datatype),
            })
            .collect();

        Self {
            file_stem: schema.name.clone(),
            struct_name: to_identifier(&schema.name, true),
            fields,
        }
    }

    pub fn render(&self) -> String {
        render(&self.struct_name, &self.fields)
    }
}

pub fn render(struct_name: &str, fields: &[GeneratedField]) -> String {
    let mut source = String::new();
    source.push_str("use rbatis::crud;\n");
    source.push_str("use rbdc::DateTime;\n");
    source.push_str("use serde::{Deserialize, Serialize};\n\n");
    source.push_str("#[derive(Serialize, Deserialize, Clone, Debug)]\n");
    source.push_str(&format!("pub struct {} {{\n", struct_name));
    for field in fields {
        source.push_str(&format!("    {}: Option<{}>,\n", field.name, field.ty));
    }
    source.push_str("}\n\n");
    source.push_str(&format!("crud!({}{{}});\n", struct_name));
    source
}
