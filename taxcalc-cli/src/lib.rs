pub mod cli;
pub mod input;
pub mod logging;
pub mod report;

pub use cli::Cli;
pub use input::{TaxRequest, acquire};
pub use report::{OutputFormat, write_report};
