//! Country lookup and postal code formats.

mod data;
mod directory;
mod postal;

pub use directory::{Country, CountryDirectory, StaticDirectory};
pub use postal::{PostalCodeTable, PostalCodeValidator};
