pub mod export;
pub mod init;
pub mod options;
pub mod regions;
pub mod root;
pub mod summary;
pub mod trend;
