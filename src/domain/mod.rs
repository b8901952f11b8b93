pub mod catalog;
pub mod configuration;
pub mod error;
pub mod expr;
pub mod gain;
pub mod list;
pub mod scale;
pub mod schema;
pub mod span;
pub mod stream;
pub mod table;

pub use catalog::{Catalog, GainOverlap};
pub use configuration::{CONFIG_FILE, MetaConfig, MetaFiles};
pub use error::AppError;
pub use expr::ExprError;
pub use gain::{Gain, GainList};
pub use list::{MetaList, MetaRecord, NaturalKey, join_key, load_list, load_sorted, store_sorted};
pub use scale::{Number, Scale};
pub use schema::{KindEntry, KindSpec, LookupEntry, LookupSpec, Schema};
pub use span::{DEFAULT_DATETIME_FORMAT, Span, TimeFormat};
pub use stream::{Stream, StreamList, parse_bool};
pub use table::Table;
