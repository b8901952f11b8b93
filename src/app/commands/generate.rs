//! Render the record-set glue for a schema of record kinds.
//!
//! Each kind becomes a `MetaList` alias and a field of a `Set` that loads every list from a
//! snapshot directory. Kinds with a lookup also get a `NaturalKey` impl and a find method.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::info;
use minijinja::context;

use crate::adapters::embedded_assets::{builtin_schema, templates};
use crate::adapters::template_engine::{build_template_environment, render_template_by_name};
use crate::domain::{AppError, Schema};

#[cfg(test)]
mod fixture_records;
#[cfg(test)]
#[allow(dead_code)]
mod fixture_set;

const SET_TEMPLATE: &str = "set.rs";

/// Module path the generated code imports record types from.
pub const DEFAULT_TYPES_PATH: &str = "crate::domain";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Schema file; the built-in schema when absent.
    pub schema: Option<PathBuf>,
    /// Output file; standard output when absent.
    pub output: Option<PathBuf>,
    pub types_path: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { schema: None, output: None, types_path: DEFAULT_TYPES_PATH.to_string() }
    }
}

/// Execute the generate command.
pub fn execute(options: &GenerateOptions) -> Result<(), AppError> {
    let schema = match &options.schema {
        Some(path) => Schema::parse_toml(&fs::read_to_string(path)?)?,
        None => builtin_schema()?,
    };
    let source = render(&schema, &options.types_path)?;

    match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(path)?;
            write(&mut file, &source)?;
            info!("generated {} record lists into {}", schema.kinds.len(), path.display());
        }
        None => write(&mut std::io::stdout().lock(), &source)?,
    }
    Ok(())
}

/// Render the set module for `schema`, importing record types from `types_path`.
pub fn render(schema: &Schema, types_path: &str) -> Result<String, AppError> {
    if !is_module_path(types_path) {
        return Err(AppError::Schema(format!("'{types_path}' is not a Rust module path")));
    }
    let env = build_template_environment(&templates())?;
    render_template_by_name(
        &env,
        SET_TEMPLATE,
        &context! { types_path => types_path, entries => schema.entries() },
    )
}

/// Write generated source. A failed write is an error; partial output is never reported as
/// success.
pub fn write<W: Write>(out: &mut W, source: &str) -> Result<(), AppError> {
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn is_module_path(path: &str) -> bool {
    !path.is_empty()
        && path.split("::").all(|segment| {
            let mut chars = segment.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
