//! Planar faces bounding a cell, with optional hosted apertures.

use crate::Point;
use crate::Vector;
use crate::geom::VERTICAL_EPS;
use crate::topo::dictionary::Dictionary;
use anyhow::{Result, anyhow};

/// An opening (window or door) hosted on a face.
///
/// The hosting face's dictionary key `type` decides how the converter
/// interprets the opening; the aperture itself only carries geometry
/// and an optional dictionary of its own.
#[derive(Debug, Clone)]
pub struct Aperture {
    vertices: Vec<Point>,
    pub dictionary: Option<Dictionary>,
}

impl Aperture {
    pub fn new(vertices: Vec<Point>, dictionary: Option<Dictionary>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(anyhow!(
                "Aperture needs at least 3 vertices, got {}",
                vertices.len()
            ));
        }
        Ok(Self {
            vertices,
            dictionary,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

/// A planar face given by its external boundary vertices.
#[derive(Debug, Clone)]
pub struct Face {
    vertices: Vec<Point>,
    apertures: Vec<Aperture>,
    pub dictionary: Option<Dictionary>,
}

impl Face {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(anyhow!(
                "Face needs at least 3 vertices, got {}",
                vertices.len()
            ));
        }
        Ok(Self {
            vertices,
            apertures: Vec::new(),
            dictionary: None,
        })
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn add_aperture(&mut self, aperture: Aperture) {
        self.apertures.push(aperture);
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn apertures(&self) -> &[Aperture] {
        &self.apertures
    }

    /// Center of the face (mean of the boundary vertices).
    pub fn center(&self) -> Point {
        Point::mean(&self.vertices)
    }

    /// Unit normal of the face (Newell's method).
    ///
    /// Robust against collinear leading vertices. Returns None for
    /// degenerate (zero-area) boundaries.
    pub fn normal(&self) -> Option<Vector> {
        self.newell().normalize()
    }

    /// Face area from the Newell normal magnitude.
    pub fn area(&self) -> f64 {
        self.newell().length() / 2.0
    }

    fn newell(&self) -> Vector {
        let n = self.vertices.len();
        let mut vn = Vector::new(0., 0., 0.);
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            vn.dx += (p.y - q.y) * (p.z + q.z);
            vn.dy += (p.z - q.z) * (p.x + q.x);
            vn.dz += (p.x - q.x) * (p.y + q.y);
        }
        vn
    }

    /// True for walls: the normal has no meaningful z component.
    pub fn is_vertical(&self) -> bool {
        match self.normal() {
            Some(vn) => vn.dz.abs() < VERTICAL_EPS,
            None => false,
        }
    }
}
