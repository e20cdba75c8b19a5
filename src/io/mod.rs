//! File I/O for energy models.

pub mod hbjson;

pub use hbjson::{read_hbjson, to_hbjson_string, write_hbjson};
