//! Header-addressed table over a grid (UI-agnostic).

mod aggregate;
mod column;
pub mod filter;
mod ops;
mod resolve;
mod state;

pub use aggregate::{Aggregate, to_integer, to_number};
pub use column::Column;
pub use ops::Rows;
pub use resolve::{Accessor, FieldValue};
pub use state::Table;

/// One grid row as cell text.
pub type Row = Vec<String>;
