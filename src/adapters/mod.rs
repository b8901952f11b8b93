pub mod config_file;
pub mod csv_table_store;
pub mod embedded_assets;
pub mod memory_table_store;
pub mod template_engine;

pub use config_file::load_meta_config;
pub use csv_table_store::CsvTableStore;
pub use memory_table_store::MemoryTableStore;
