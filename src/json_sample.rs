//! Entity generation from a JSON object sample.
//!
//! Field types are inferred from the sample values; key order is kept as
//! written in the sample.

use serde_json::Value;

use crate::error::{GenError, Result};
use crate::mapping::{to_identifier, FieldType};
use crate::render::{GeneratedField, GeneratedStruct};

pub fn from_json(name: &str, sample: &str) -> Result<GeneratedStruct> {
    let value: Value =
        serde_json::from_str(sample).map_err(|e| GenError::InvalidJson(e.to_string()))?;

    let Value::Object(object) = value else {
        return Err(GenError::InvalidJson(
            "sample must be a JSON object".to_string(),
        ));
    };

    let fields = object
        .iter()
        .map(|(key, value)| GeneratedField {
            name: key.clone(),
            ty: infer_type(value),
        })
        .collect();

    Ok(GeneratedStruct {
        file_stem: name.to_string(),
        struct_name: to_identifier(name, true),
        fields,
    })
}

fn infer_type(value: &Value) -> FieldType {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => FieldType::I64,
        Value::Number(_) => FieldType::F64,
        Value::Bool(_) => FieldType::Bool,
        _ => FieldType::String,
    }
}
