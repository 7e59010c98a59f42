mod csv;
mod json;

pub use csv::*;
pub use json::*;
