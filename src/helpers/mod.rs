//! Support containers used by layers built on top of the matching core.

mod frozen;

pub use frozen::FreezableMap;
