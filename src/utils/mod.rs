//! Shared helpers: dates, paths, counts.

pub mod date;
pub mod path;
pub mod plural;

pub use plural::plural_count;
