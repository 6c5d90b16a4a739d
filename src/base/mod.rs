pub mod barchart;
mod cents;
mod charset;
mod config;
mod dashboard;
pub mod date;
mod dimension;
mod export;
mod filter;
pub mod fs;
pub mod interval;
pub mod kpiprinter;
mod loader;
mod record;
mod rollup;
mod session;
mod summary;
mod table;
mod trend;
pub mod util;

pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use dashboard::Dashboard;
pub use date::Date;
pub use dimension::Dimension;
pub use export::FILE_NAME;
pub use export::MIME_TYPE;
pub use export::export;
pub use filter::FilterState;
pub use filter::filter;
pub use fs::Fs;
pub use interval::Interval;
pub use loader::LoadError;
pub use loader::load;
pub use loader::load_from_reader;
pub use record::Record;
pub use rollup::Rollup;
pub use session::Session;
pub use summary::Kpis;
pub use summary::group_by;
pub use summary::monthly_series;
pub use summary::summarize;
pub use table::Column;
pub use table::Columns;
pub use table::Field;
pub use table::Table;
pub use trend::mom_growth;
