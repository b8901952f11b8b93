pub mod check;
pub mod fmt;
pub mod generate;
pub mod inspect;

use clap::ValueEnum;

/// Record kinds with a typed list implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Gains,
    Streams,
}

impl RecordKind {
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Gains => "gains",
            RecordKind::Streams => "streams",
        }
    }
}
