// libpicc/src/reader/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod shared;
pub mod sink;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{PollResult, Reader};
pub use shared::SharedReader;
pub use sink::ReportSink;
