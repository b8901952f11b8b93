use std::path::PathBuf;

use serde::Serialize;

use super::RecordKind;
use crate::app::AppContext;
use crate::domain::{AppError, Gain, MetaRecord, Stream, load_sorted};
use crate::ports::TableSource;

#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub kind: RecordKind,
    /// Table to read; defaults to the configured location for `kind`.
    pub path: Option<PathBuf>,
    /// Split multi-component gains into one entry per component.
    pub expand: bool,
}

/// Execute the inspect command, returning the records as pretty JSON.
pub fn execute<S: TableSource>(
    ctx: &AppContext<S>,
    options: &InspectOptions,
) -> Result<String, AppError> {
    let files = &ctx.config().files;
    let relative = match (&options.path, options.kind) {
        (Some(path), _) => path.clone(),
        (None, RecordKind::Gains) => files.gains.clone(),
        (None, RecordKind::Streams) => files.streams.clone(),
    };
    let path = ctx.root().join(relative);

    match options.kind {
        RecordKind::Gains => {
            let gains: Vec<Gain> = load_sorted(ctx.source(), &path, ctx.format())?;
            if options.expand {
                let mut expanded: Vec<Gain> = gains.iter().flat_map(Gain::gains).collect();
                expanded.sort_by(|a, b| a.order(b));
                to_json(&expanded)
            } else {
                to_json(&gains)
            }
        }
        RecordKind::Streams => {
            let streams: Vec<Stream> = load_sorted(ctx.source(), &path, ctx.format())?;
            to_json(&streams)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
