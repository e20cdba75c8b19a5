pub mod point;
pub mod vector;

/// Geometric precision
pub(crate) const EPS: f64 = 1e-10;

/// Normals with |z| below this are treated as vertical surfaces.
pub(crate) const VERTICAL_EPS: f64 = 1e-6;
