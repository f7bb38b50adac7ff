// src/records.rs
use crate::error::LoadError;
use bson::{Bson, Document};
use serde_json::{Map, Value};
use std::path::Path;

/// Read the whole input file and turn it into the document batch.
///
/// The file must hold a single JSON array whose elements are all objects.
/// Nothing is streamed: the batch is fully built before it is returned.
pub fn read_records<P: AsRef<Path>>(path: P, extended_json: bool) -> Result<Vec<Document>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    records_from_value(value, extended_json)
}

/// Same as [`read_records`] for JSON already held in memory.
pub fn parse_records(text: &str, extended_json: bool) -> Result<Vec<Document>, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: "<memory>".into(),
        source,
    })?;
    records_from_value(value, extended_json)
}

fn records_from_value(value: Value, extended_json: bool) -> Result<Vec<Document>, LoadError> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(LoadError::Shape(format!(
                "expected an array at top level, found {}",
                json_type_name(&other)
            )))
        }
    };

    let mut docs = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let object = match element {
            Value::Object(object) => object,
            other => {
                return Err(LoadError::Shape(format!(
                    "element {} is {}, expected an object",
                    index,
                    json_type_name(&other)
                )))
            }
        };

        let doc = if extended_json {
            extended_to_document(object, index)?
        } else {
            object_to_document(object, index)?
        };
        docs.push(doc);
    }

    Ok(docs)
}

fn extended_to_document(object: Map<String, Value>, index: usize) -> Result<Document, LoadError> {
    match Bson::try_from(Value::Object(object)) {
        Ok(Bson::Document(doc)) => Ok(doc),
        Ok(other) => Err(LoadError::Shape(format!(
            "element {} decodes to {:?}, expected a document",
            index,
            other.element_type()
        ))),
        Err(e) => Err(LoadError::Shape(format!(
            "element {} is not valid Extended JSON: {}",
            index, e
        ))),
    }
}

fn object_to_document(object: Map<String, Value>, index: usize) -> Result<Document, LoadError> {
    let mut doc = Document::new();
    for (key, value) in object {
        let bson = json_to_bson(value)
            .map_err(|reason| LoadError::Shape(format!("element {}, field '{}': {}", index, key, reason)))?;
        doc.insert(key, bson);
    }
    Ok(doc)
}

// Integers take the narrowest BSON integer type that holds them. Numbers keep
// their source text (serde_json `arbitrary_precision`), so an integer literal
// outside i64 is caught here instead of silently becoming a double.
fn json_to_bson(value: Value) -> Result<Bson, String> {
    Ok(match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map(Bson::Int32).unwrap_or(Bson::Int64(i))
            } else if is_integer_literal(&n.to_string()) {
                return Err(format!("integer {} is outside the signed 64-bit range", n));
            } else {
                n.as_f64()
                    .map(Bson::Double)
                    .ok_or_else(|| format!("unrepresentable number {}", n))?
            }
        }
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(
            items
                .into_iter()
                .map(json_to_bson)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(object) => {
            let mut doc = Document::new();
            for (key, value) in object {
                doc.insert(key, json_to_bson(value)?);
            }
            Bson::Document(doc)
        }
    })
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
