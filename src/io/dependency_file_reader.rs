use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::fd::{Attribute, AttributeSet, DependencyInstance, FunctionalDependencies, Schema};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref SCHEMA_LINE_START_PATTERN: Regex = Regex::new(r"\bR\s*=").unwrap();
    static ref SCHEMA_LINE_PATTERN: Regex = Regex::new(r"\bR\s*=\s*\(([^()]*)\)\s*$").unwrap();
    static ref DEPENDENCIES_LINE_START_PATTERN: Regex = Regex::new(r"\bF\s*=").unwrap();
    static ref DEPENDENCIES_LINE_PATTERN: Regex =
        Regex::new(r"\bF\s*=\s*\{([^{}]*)\}\s*$").unwrap();
    static ref ATTRIBUTE_PATTERN: Regex = Regex::new(r"^[A-Z]$").unwrap();
    static ref RULE_PATTERN: Regex = Regex::new(r"^([A-Z]+)\s*->\s*([A-Z]+)$").unwrap();
}

fn read_attribute(s: &str) -> Result<Attribute> {
    if ATTRIBUTE_PATTERN.is_match(s) {
        s.chars()
            .next()
            .map(Attribute::from)
            .ok_or_else(|| anyhow!("empty attribute name"))
    } else {
        Err(anyhow!(
            r#"invalid attribute name "{}" (expected a single uppercase letter)"#,
            s
        ))
    }
}

fn try_read_schema_line(l: &str) -> Result<Option<WarningResult<Vec<Attribute>, String>>> {
    if !SCHEMA_LINE_START_PATTERN.is_match(l) {
        return Ok(None);
    }
    let captures = SCHEMA_LINE_PATTERN
        .captures(l)
        .ok_or_else(|| anyhow!("invalid schema declaration {}", l.trim()))?;
    let mut attributes = Vec::new();
    let mut warnings = Vec::new();
    for item in captures[1].split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let a = read_attribute(item)?;
        if attributes.contains(&a) {
            warnings.push(format!("attribute {} is declared more than once", a));
        } else {
            attributes.push(a);
        }
    }
    if attributes.is_empty() {
        return Err(anyhow!("the schema must declare at least one attribute"));
    }
    Ok(Some(WarningResult::new(attributes, warnings)))
}

type Rule = (Attribute, AttributeSet);

fn try_read_dependencies_line(l: &str) -> Result<Option<WarningResult<Vec<Rule>, String>>> {
    if !DEPENDENCIES_LINE_START_PATTERN.is_match(l) {
        return Ok(None);
    }
    let captures = DEPENDENCIES_LINE_PATTERN
        .captures(l)
        .ok_or_else(|| anyhow!("invalid dependency set declaration {}", l.trim()))?;
    let mut rules = Vec::new();
    let mut warnings = Vec::new();
    for item in captures[1].split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let rule_captures = RULE_PATTERN
            .captures(item)
            .ok_or_else(|| anyhow!(r#"invalid dependency "{}""#, item))?;
        let lhs = &rule_captures[1];
        if lhs.len() > 1 {
            return Err(anyhow!(
                r#"composite determinant "{}" in "{}" is not supported (determinants are single attributes)"#,
                lhs,
                item
            ));
        }
        let determinant = read_attribute(lhs)?;
        let dependents = AttributeSet::from(&rule_captures[2]);
        if dependents.is_subset(&std::iter::once(determinant).collect()) {
            warnings.push(format!("trivial dependency {}", item));
        }
        rules.push((determinant, dependents));
    }
    Ok(Some(WarningResult::new(rules, warnings)))
}

/// A reader for plain-text dependency files.
///
/// The schema is declared on a line containing `R =`, followed by its attributes between parentheses.
/// The dependencies are declared on a line containing `F =`, followed by the rules between braces.
/// Any text before these markers is ignored.
/// Attributes are single uppercase letters, and dependencies are written `X->YZ`.
/// Rules sharing the same determinant are merged.
/// Other lines are ignored.
///
/// Determinants must be single attributes; a composite determinant like `AB->C` is an error.
/// Dependencies referring to undeclared attributes only trigger warnings, since this is checked again when closures are computed.
///
/// # Example
///
/// The following content defines a schema with three attributes `A`, `B` and `C`, and the dependencies `A->B` and `B->C`.
///
/// ```text
/// R = (A, B, C)
/// F = {A->B, B->C}
/// ```
///
/// ```
/// # use strong_arms::fd::DependencyInstance;
/// # use strong_arms::io::{DependencyFileReader, InstanceReader};
/// let reader = DependencyFileReader::default();
/// let instance = reader.read(&mut "R = (A, B, C)\nF = {A->B, B->C}\n".as_bytes()).unwrap();
/// assert_eq!(3, instance.schema().len());
/// assert_eq!(2, instance.dependencies().len());
/// ```
#[derive(Default)]
pub struct DependencyFileReader {
    warning_handlers: Vec<WarningHandler>,
}

impl DependencyFileReader {
    fn warn(&self, line: usize, message: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, message.to_string()));
    }
}

impl InstanceReader for DependencyFileReader {
    fn read(&self, reader: &mut dyn Read) -> Result<DependencyInstance> {
        let mut attributes: Option<Vec<Attribute>> = None;
        let mut dependencies: Option<(usize, FunctionalDependencies)> = None;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let warning_consumer = |warnings: Vec<String>| {
                warnings.iter().for_each(|w| self.warn(1 + i, w));
            };
            let l = &line.with_context(context)?;
            if let Some(r) = try_read_schema_line(l).with_context(context)? {
                if attributes.is_some() {
                    return Err(anyhow!("the schema is declared more than once"))
                        .with_context(context);
                }
                attributes = Some(r.consume_warnings(warning_consumer));
                continue;
            }
            if let Some(r) = try_read_dependencies_line(l).with_context(context)? {
                if dependencies.is_some() {
                    return Err(anyhow!("the dependency set is declared more than once"))
                        .with_context(context);
                }
                let mut deps = FunctionalDependencies::new();
                r.consume_warnings(warning_consumer)
                    .into_iter()
                    .for_each(|(lhs, rhs)| deps.add_dependency(lhs, &rhs));
                dependencies = Some((i, deps));
            }
        }
        let schema = Schema::new(attributes.ok_or_else(|| anyhow!("no schema declaration"))?)?;
        let dependencies = match dependencies {
            Some((i, deps)) => {
                deps.unknown_attributes(&schema).iter().for_each(|a| {
                    self.warn(
                        1 + i,
                        &format!("attribute {} is not declared in the schema", a),
                    )
                });
                deps
            }
            None => {
                self.warn(0, "no dependency set declaration");
                FunctionalDependencies::new()
            }
        };
        Ok(DependencyInstance::new(schema, dependencies))
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
