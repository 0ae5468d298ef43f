use super::{JsonRequestReader, ValidationErrors};
use crate::{
    fd::Attribute,
    relations::{ArmstrongTables, SymbolicGroup},
};
use anyhow::Result;
use serde::Serialize;

const BASELINE_GROUP_KEY: &str = "0";

/// A group of symbolic rows, as written in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolicGroupPayload {
    key: String,
    rows: Vec<Vec<String>>,
}

impl From<&SymbolicGroup> for SymbolicGroupPayload {
    fn from(group: &SymbolicGroup) -> Self {
        let key = if group.key().is_empty() {
            BASELINE_GROUP_KEY.to_string()
        } else {
            group.key().to_string()
        };
        SymbolicGroupPayload {
            key,
            rows: group.rows().to_vec(),
        }
    }
}

/// The relations computed for a valid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablesPayload {
    columns: Vec<Attribute>,
    armstrong: Vec<Vec<usize>>,
    armstrong_latex: Vec<SymbolicGroupPayload>,
    s_armstrong_paul: Vec<Vec<String>>,
    s_armstrong_product: Vec<Vec<String>>,
}

impl From<&ArmstrongTables> for TablesPayload {
    fn from(tables: &ArmstrongTables) -> Self {
        TablesPayload {
            columns: tables.regular().attributes().to_vec(),
            armstrong: tables.regular().rows().to_vec(),
            armstrong_latex: tables
                .symbolic()
                .groups()
                .iter()
                .map(SymbolicGroupPayload::from)
                .collect(),
            s_armstrong_paul: tables.strong().rows().to_vec(),
            s_armstrong_product: tables.product().rows().to_vec(),
        }
    }
}

/// The answer to a request: either the computed relations or the validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// The relations computed for a valid request
    Tables(TablesPayload),
    /// The problems found in an invalid request
    Errors {
        /// the errors, by field
        errors: ValidationErrors,
    },
}

/// Computes the response to a JSON request.
///
/// Invalid requests lead to an [Errors](ResponsePayload::Errors) payload, not to an error;
/// errors are reserved to failures of the computations themselves.
///
/// # Example
///
/// ```
/// # use strong_arms::io::process_request;
/// let response = process_request(r#"{"columns": ["A", "B"], "dependencies": {"A": "B"}}"#).unwrap();
/// let json = serde_json::to_value(&response).unwrap();
/// assert_eq!(serde_json::json!([[0, 0], [1, 1], [2, 2], [3, 2]]), json["armstrong"]);
/// ```
pub fn process_request(request: &str) -> Result<ResponsePayload> {
    let instance = match JsonRequestReader::default().read_request(request) {
        Ok(i) => i,
        Err(errors) => return Ok(ResponsePayload::Errors { errors }),
    };
    let tables = ArmstrongTables::compute(&instance)?;
    Ok(ResponsePayload::Tables(TablesPayload::from(&tables)))
}
