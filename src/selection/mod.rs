//! Single-select view projection.
//!
//! Each interactive section of the homepage is one instance of the same
//! shape: an immutable [`Catalog`], a [`Selection`] holding one key, and a
//! pure projection from the two to what gets rendered.
//!
//! - project grid: [`filter`] by the active tag
//! - app tabs: [`pick`] the active record
//! - FAQ accordion: [`expansions`] flag the open entry

pub mod catalog;
pub mod projection;
pub mod state;
pub mod style;

pub use catalog::{Catalog, FilterTag, Record, Tagged};
pub use projection::{expansion_map, expansions, filter, filter_records, pick, Expansion};
pub use state::Selection;
pub use style::StyleTable;

#[cfg(test)]
mod proptests;
