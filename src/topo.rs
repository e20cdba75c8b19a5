//! Topological input model.
//!
//! Hierarchy: CellComplex → Cell → Face → vertices. Faces may host
//! apertures (openings), and cells, faces, and apertures may carry a
//! key-value dictionary with semantic attributes. All of it is read-only
//! input for the conversion: nothing here is mutated by the converter.

pub mod cell;
pub mod complex;
pub mod dictionary;
pub mod face;

pub use cell::Cell;
pub use complex::{CellComplex, Cluster};
pub use dictionary::{AttrValue, Dictionary};
pub use face::{Aperture, Face};
