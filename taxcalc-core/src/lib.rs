pub mod calculations;
pub mod error;
pub mod models;
pub mod schedules;

pub use calculations::{TaxCalculator, compute_tax};
pub use error::TaxError;
pub use models::*;
