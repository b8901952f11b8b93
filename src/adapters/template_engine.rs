use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

use super::embedded_assets::EmbeddedTemplate;

/// Build an environment for rendering Rust source.
///
/// Undefined variables are errors, so a schema view missing a field fails generation instead of
/// emitting code with a hole in it.
pub fn build_template_environment(
    templates: &[EmbeddedTemplate],
) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for template in templates {
        env.add_template(template.name, template.content).map_err(|e| {
            AppError::Template(format!("cannot register '{}': {}", template.name, e))
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    env.get_template(template_name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| AppError::Template(format!("cannot render '{}': {}", template_name, e)))
}
