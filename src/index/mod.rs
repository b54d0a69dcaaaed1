//! Secondary indexes over the org chart
//!
//! The identifier index lives inside the chart itself; this module holds the
//! name index used for lookups by employee name.

pub mod name_index;

pub use name_index::NameIndex;
