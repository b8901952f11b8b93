//! Declarative schema consumed by the list generator.
//!
//! ```toml
//! [kinds.marks]
//! type = "Mark"
//!
//! [lookups.marks]
//! type = "Mark"
//! fields = ["code"]
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KindSpec {
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSpec {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Natural-key fields, in lookup argument order.
    pub fields: Vec<String>,
}

/// Record kinds to generate lists for, keyed by kind name (e.g. `installedSensors`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    #[serde(default)]
    pub kinds: BTreeMap<String, KindSpec>,
    #[serde(default)]
    pub lookups: BTreeMap<String, LookupSpec>,
}

/// Template view of one record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindEntry {
    pub kind: String,
    pub type_name: String,
    /// Snake-case kind name, used for the set field and accessor.
    pub field: String,
    pub file: String,
    pub lookup: Option<LookupEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    /// Snake-case type name, used for the lookup method.
    pub method: String,
    pub fields: Vec<String>,
}

impl Schema {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let schema: Schema = toml::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.kinds.is_empty() {
            return Err(AppError::Schema("no record kinds declared".into()));
        }

        for (kind, spec) in &self.kinds {
            if !is_kind_name(kind) {
                return Err(AppError::Schema(format!(
                    "kind '{kind}' must be camelCase starting with a lowercase letter"
                )));
            }
            if !is_type_name(&spec.type_name) {
                return Err(AppError::Schema(format!(
                    "type '{}' of kind '{kind}' must be CamelCase starting with an uppercase \
                     letter",
                    spec.type_name
                )));
            }
            let alias = format!("{}List", spec.type_name);
            if RESERVED_TYPES.contains(&spec.type_name.as_str())
                || RESERVED_TYPES.contains(&alias.as_str())
            {
                return Err(AppError::Schema(format!(
                    "type '{}' of kind '{kind}' clashes with a generated item",
                    spec.type_name
                )));
            }
            ensure_identifier(&to_snake_case(kind), &format!("kind '{kind}' accessor"))?;
        }

        let accessors: BTreeSet<String> = self.kinds.keys().map(|k| to_snake_case(k)).collect();

        for (kind, lookup) in &self.lookups {
            let Some(spec) = self.kinds.get(kind) else {
                return Err(AppError::Schema(format!("lookup '{kind}' has no matching kind")));
            };
            if spec.type_name != lookup.type_name {
                return Err(AppError::Schema(format!(
                    "lookup '{kind}' type '{}' does not match kind type '{}'",
                    lookup.type_name, spec.type_name
                )));
            }
            if lookup.fields.is_empty() {
                return Err(AppError::Schema(format!("lookup '{kind}' declares no fields")));
            }
            let mut seen = BTreeSet::new();
            for field in &lookup.fields {
                if !is_field_name(field) {
                    return Err(AppError::Schema(format!(
                        "lookup '{kind}' field '{field}' must be a snake_case identifier"
                    )));
                }
                if !seen.insert(field) {
                    return Err(AppError::Schema(format!(
                        "lookup '{kind}' repeats field '{field}'"
                    )));
                }
                ensure_identifier(field, &format!("lookup '{kind}' field"))?;
            }
            let method = to_snake_case(&lookup.type_name);
            ensure_identifier(&method, &format!("lookup '{kind}' method"))?;
            if accessors.contains(&method) {
                return Err(AppError::Schema(format!(
                    "lookup '{kind}' method '{method}' clashes with a kind accessor"
                )));
            }
        }

        Ok(())
    }

    /// Template entries in kind-name order.
    pub fn entries(&self) -> Vec<KindEntry> {
        self.kinds
            .iter()
            .map(|(kind, spec)| KindEntry {
                kind: kind.clone(),
                type_name: spec.type_name.clone(),
                field: to_snake_case(kind),
                file: format!("{kind}.csv"),
                lookup: self.lookups.get(kind).map(|lookup| LookupEntry {
                    method: to_snake_case(&lookup.type_name),
                    fields: lookup.fields.clone(),
                }),
            })
            .collect()
    }
}

/// `installedSensors` → `installed_sensors`, `InstalledSensor` → `installed_sensor`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rust keywords, strict and reserved, that cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names the generated `Set` already defines for itself.
const RESERVED_METHODS: &[&str] = &["load"];

/// Type names the generated module already declares or imports.
const RESERVED_TYPES: &[&str] =
    &["Set", "Self", "AppError", "MetaList", "NaturalKey", "Path", "TableSource", "TimeFormat"];

fn ensure_identifier(name: &str, what: &str) -> Result<(), AppError> {
    if KEYWORDS.contains(&name) {
        return Err(AppError::Schema(format!("{what} '{name}' is a Rust keyword")));
    }
    if RESERVED_METHODS.contains(&name) {
        return Err(AppError::Schema(format!("{what} '{name}' clashes with Set::{name}")));
    }
    Ok(())
}

fn is_kind_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
