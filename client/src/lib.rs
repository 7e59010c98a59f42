pub mod chain;
pub mod classify;
pub mod error;
pub mod fetch;
pub mod price;
pub mod summary;
pub mod types;
pub mod walker;

pub use chain::*;
pub use classify::*;
pub use error::*;
pub use fetch::*;
pub use price::*;
pub use summary::*;
pub use types::*;
pub use walker::*;
