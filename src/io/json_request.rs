use crate::fd::{Attribute, AttributeSet, DependencyInstance, FunctionalDependencies, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fmt::Display};

const COLUMNS_FIELD: &str = "columns";
const DEPENDENCIES_FIELD: &str = "dependencies";
const REQUEST_FIELD: &str = "request";

/// The validation errors of a request, as a mapping from field names to messages.
///
/// Fields are `columns`, `dependencies`, or `request` for errors concerning the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    fn add(&mut self, field: &str, message: String) {
        self.0
            .entry(field.to_string())
            .and_modify(|m| {
                m.push_str("; ");
                m.push_str(&message)
            })
            .or_insert(message);
    }

    /// Returns `true` iff no error was raised.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message associated with a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    /// Iterates over the `(field, message)` pairs, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependentsRepr {
    Symbols(String),
    List(Vec<String>),
}

/// A reader for JSON requests.
///
/// A request is an object with two fields:
///   * `columns`: the list of attributes, as one-character strings;
///   * `dependencies`: an object mapping a determinant attribute to its dependents, given as a string (`"BC"`) or a list (`["B", "C"]`).
///
/// Requests are fully validated before an instance is built, and all the problems found are reported at once.
///
/// # Example
///
/// ```
/// # use strong_arms::io::JsonRequestReader;
/// let request = r#"{"columns": ["A", "B", "C"], "dependencies": {"A": "B", "B": ["C"]}}"#;
/// let instance = JsonRequestReader::default().read_request(request).unwrap();
/// assert_eq!(3, instance.schema().len());
///
/// let errors = JsonRequestReader::default().read_request(r#"{"columns": []}"#).unwrap_err();
/// assert!(errors.get("columns").is_some());
/// assert!(errors.get("dependencies").is_some());
/// ```
#[derive(Default)]
pub struct JsonRequestReader;

impl JsonRequestReader {
    /// Reads a request from a JSON string.
    pub fn read_request(&self, request: &str) -> Result<DependencyInstance, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let value: Value = match serde_json::from_str(request) {
            Ok(v) => v,
            Err(e) => {
                errors.add(REQUEST_FIELD, format!("invalid JSON ({})", e));
                return Err(errors);
            }
        };
        let object = match value.as_object() {
            Some(o) => o,
            None => {
                errors.add(REQUEST_FIELD, "expected a JSON object".to_string());
                return Err(errors);
            }
        };
        let schema = read_columns(object, &mut errors);
        let dependencies = read_dependencies(object, &mut errors);
        match (schema, dependencies) {
            (Some(s), Some(d)) => {
                d.unknown_attributes(&s)
                    .iter()
                    .for_each(|a| errors.add(DEPENDENCIES_FIELD, format!(r#"unknown column "{}""#, a)));
                if errors.is_empty() {
                    Ok(DependencyInstance::new(s, d))
                } else {
                    Err(errors)
                }
            }
            _ => Err(errors),
        }
    }
}

fn read_symbol(s: &str) -> Option<Attribute> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(Attribute::from(c)),
        _ => None,
    }
}

fn read_columns(object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Schema> {
    let value = match object.get(COLUMNS_FIELD) {
        Some(v) => v,
        None => {
            errors.add(COLUMNS_FIELD, "missing field".to_string());
            return None;
        }
    };
    let columns = match serde_json::from_value::<Vec<String>>(value.clone()) {
        Ok(c) => c,
        Err(_) => {
            errors.add(COLUMNS_FIELD, "expected a list of one-character strings".to_string());
            return None;
        }
    };
    if columns.is_empty() {
        errors.add(COLUMNS_FIELD, "at least one column is required".to_string());
        return None;
    }
    let mut attributes = Vec::with_capacity(columns.len());
    let mut valid = true;
    for c in columns.iter() {
        match read_symbol(c) {
            Some(a) if attributes.contains(&a) => {
                errors.add(COLUMNS_FIELD, format!(r#"duplicate column "{}""#, c));
                valid = false;
            }
            Some(a) => attributes.push(a),
            None => {
                errors.add(COLUMNS_FIELD, format!(r#"invalid column name "{}""#, c));
                valid = false;
            }
        }
    }
    if !valid {
        return None;
    }
    match Schema::new(attributes) {
        Ok(s) => Some(s),
        Err(e) => {
            errors.add(COLUMNS_FIELD, e.to_string());
            None
        }
    }
}

fn read_dependencies(
    object: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<FunctionalDependencies> {
    let value = match object.get(DEPENDENCIES_FIELD) {
        Some(v) => v,
        None => {
            errors.add(DEPENDENCIES_FIELD, "missing field".to_string());
            return None;
        }
    };
    let rules = match serde_json::from_value::<BTreeMap<String, DependentsRepr>>(value.clone()) {
        Ok(r) => r,
        Err(_) => {
            errors.add(
                DEPENDENCIES_FIELD,
                "expected an object mapping a column to its dependent columns".to_string(),
            );
            return None;
        }
    };
    let mut dependencies = FunctionalDependencies::new();
    let mut valid = true;
    for (lhs, rhs) in rules.iter() {
        let determinant = match read_symbol(lhs) {
            Some(a) => a,
            None => {
                errors.add(
                    DEPENDENCIES_FIELD,
                    format!(
                        r#"invalid determinant "{}" (determinants are single columns)"#,
                        lhs
                    ),
                );
                valid = false;
                continue;
            }
        };
        let dependents = match rhs {
            DependentsRepr::Symbols(s) => Some(
                s.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Attribute::from)
                    .collect::<AttributeSet>(),
            ),
            DependentsRepr::List(l) => l.iter().map(|s| read_symbol(s)).collect(),
        };
        match dependents {
            Some(d) => dependencies.add_dependency(determinant, &d),
            None => {
                errors.add(
                    DEPENDENCIES_FIELD,
                    format!(r#"invalid dependent columns for "{}""#, lhs),
                );
                valid = false;
            }
        }
    }
    if valid {
        Some(dependencies)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(request: &str) -> Result<DependencyInstance, ValidationErrors> {
        JsonRequestReader::default().read_request(request)
    }

    #[test]
    fn test_read_ok() {
        let instance =
            read(r#"{"columns": ["A", "B", "C"], "dependencies": {"A": "BC", "C": ["A"]}}"#)
                .unwrap();
        assert_eq!(Schema::try_from("ABC").unwrap(), *instance.schema());
        assert_eq!(
            FunctionalDependencies::new_with_rules(&[('A', "BC"), ('C', "A")]),
            *instance.dependencies()
        );
    }

    #[test]
    fn test_read_no_dependency() {
        let instance = read(r#"{"columns": ["A"], "dependencies": {}}"#).unwrap();
        assert!(instance.dependencies().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let errors = read("{").unwrap_err();
        assert!(errors.get("request").unwrap().starts_with("invalid JSON"));
    }

    #[test]
    fn test_not_an_object() {
        let errors = read("[]").unwrap_err();
        assert_eq!(Some("expected a JSON object"), errors.get("request"));
    }

    #[test]
    fn test_missing_fields() {
        let errors = read("{}").unwrap_err();
        assert_eq!(Some("missing field"), errors.get("columns"));
        assert_eq!(Some("missing field"), errors.get("dependencies"));
    }

    #[test]
    fn test_wrong_types() {
        let errors = read(r#"{"columns": "ABC", "dependencies": ["A"]}"#).unwrap_err();
        assert_eq!(
            Some("expected a list of one-character strings"),
            errors.get("columns")
        );
        assert_eq!(
            Some("expected an object mapping a column to its dependent columns"),
            errors.get("dependencies")
        );
    }

    #[test]
    fn test_invalid_columns() {
        let errors = read(r#"{"columns": ["A", "BC", "A"], "dependencies": {}}"#).unwrap_err();
        assert_eq!(
            Some(r#"invalid column name "BC"; duplicate column "A""#),
            errors.get("columns")
        );
        assert!(errors.get("dependencies").is_none());
    }

    #[test]
    fn test_empty_columns() {
        let errors = read(r#"{"columns": [], "dependencies": {}}"#).unwrap_err();
        assert_eq!(Some("at least one column is required"), errors.get("columns"));
    }

    #[test]
    fn test_composite_determinant() {
        let errors = read(r#"{"columns": ["A", "B", "C"], "dependencies": {"AB": "C"}}"#)
            .unwrap_err();
        assert!(errors
            .get("dependencies")
            .unwrap()
            .contains("invalid determinant"));
    }

    #[test]
    fn test_unknown_column() {
        let errors =
            read(r#"{"columns": ["A", "B"], "dependencies": {"A": "BZ"}}"#).unwrap_err();
        assert_eq!(Some(r#"unknown column "Z""#), errors.get("dependencies"));
    }

    #[test]
    fn test_invalid_dependent_list() {
        let errors =
            read(r#"{"columns": ["A", "B"], "dependencies": {"A": ["B", "BB"]}}"#).unwrap_err();
        assert_eq!(
            Some(r#"invalid dependent columns for "A""#),
            errors.get("dependencies")
        );
    }

    #[test]
    fn test_display_and_serialize() {
        let errors = read("{}").unwrap_err();
        assert_eq!(
            "columns: missing field, dependencies: missing field",
            errors.to_string()
        );
        assert_eq!(
            r#"{"columns":"missing field","dependencies":"missing field"}"#,
            serde_json::to_string(&errors).unwrap()
        );
    }
}
