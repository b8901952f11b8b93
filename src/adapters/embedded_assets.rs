//! Generator assets compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Schema};

/// Embedded generator directory: the built-in schema and the source templates.
static GENERATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/generate");

const SCHEMA_FILE: &str = "schema.toml";
const TEMPLATE_SUFFIX: &str = ".jinja";

/// An embedded template, named by its file name without the `.jinja` suffix.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplate {
    pub name: &'static str,
    pub content: &'static str,
}

/// The schema listing every record kind of the metadata repository.
pub fn builtin_schema() -> Result<Schema, AppError> {
    let content = GENERATE_DIR
        .get_file(SCHEMA_FILE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::config_error(format!("embedded {SCHEMA_FILE} is missing")))?;
    Schema::parse_toml(content)
}

/// All embedded templates.
pub fn templates() -> Vec<EmbeddedTemplate> {
    GENERATE_DIR
        .files()
        .filter_map(|file| {
            let file_name = file.path().file_name()?.to_str()?;
            let name = file_name.strip_suffix(TEMPLATE_SUFFIX)?;
            Some(EmbeddedTemplate { name, content: file.contents_utf8()? })
        })
        .collect()
}
