use crate::Vector;
use crate::geom::EPS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns true if both points are very close to each other.
    pub fn is_close(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS
            && (self.y - other.y).abs() < EPS
            && (self.z - other.z).abs() < EPS
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// Mean of a set of points. Returns the origin for an empty slice.
    pub fn mean(pts: &[Point]) -> Self {
        if pts.is_empty() {
            return Self::new(0., 0., 0.);
        }
        let n = pts.len() as f64;
        let (mut x, mut y, mut z) = (0., 0., 0.);
        for p in pts {
            x += p.x;
            y += p.y;
            z += p.z;
        }
        Self::new(x / n, y / n, z / n)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(
            f,
            "Point({:.prec$}, {:.prec$}, {:.prec$})",
            self.x,
            self.y,
            self.z,
            prec = prec
        )
    }
}

// Implement +
// (Sub is NOT implemented)
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, other: Vector) -> Self {
        Self {
            x: self.x + other.dx,
            y: self.y + other.dy,
            z: self.z + other.dz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_close() {
        let pa = Point::new(5., 5., 5.);
        let pb = Point::new(5.00000000001, 5., 5.);
        let pc = Point::new(5.0001, 5., 5.);
        assert!(pa.is_close(&pb));
        assert!(!pa.is_close(&pc));
    }

    #[test]
    fn test_distance() {
        let pa = Point::new(0., 0., 0.);
        let pb = Point::new(3., 4., 0.);
        assert!((pa.distance(&pb) - 5.).abs() < EPS);
    }

    #[test]
    fn test_mean() {
        let pts = vec![
            Point::new(0., 0., 0.),
            Point::new(2., 0., 0.),
            Point::new(2., 2., 0.),
            Point::new(0., 2., 0.),
        ];
        assert!(Point::mean(&pts).is_close(&Point::new(1., 1., 0.)));
        assert!(Point::mean(&[]).is_close(&Point::new(0., 0., 0.)));
    }

    #[test]
    fn test_add_vector() {
        let p = Point::new(1., 2., 3.) + Vector::new(1., 1., 1.);
        assert!(p.is_close(&Point::new(2., 3., 4.)));
    }
}
