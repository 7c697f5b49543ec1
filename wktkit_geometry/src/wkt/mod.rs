//! Reading and writing the WKT subset exchanged with the backend:
//! `POINT`, `MULTIPOINT`, `POLYGON` and `LINESTRING`.
//!
//! Keywords are case-insensitive and whitespace is tolerated between tokens.
//! Readers never panic on bad text; see [`crate::WktError`] for the failure kinds.

mod grammar;
mod read;
mod write;

pub use read::*;
pub use write::*;

pub(crate) use grammar::{parse_pair, parse_pair_list, parse_rings};
pub(crate) use write::join_pairs;
