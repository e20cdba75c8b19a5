//! Closed solid regions (rooms) of the topological model.

use crate::Point;
use crate::topo::dictionary::Dictionary;
use crate::topo::face::Face;
use anyhow::{Result, anyhow};

/// A closed solid region bounded by faces.
///
/// Cells are opaque inputs: the converter only queries their faces and
/// dictionary, it never mutates them.
#[derive(Debug, Clone)]
pub struct Cell {
    faces: Vec<Face>,
    pub dictionary: Option<Dictionary>,
}

impl Cell {
    pub fn new(faces: Vec<Face>, dictionary: Option<Dictionary>) -> Result<Self> {
        if faces.is_empty() {
            return Err(anyhow!("Cell has no faces"));
        }
        Ok(Self { faces, dictionary })
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Floor elevation of the cell: the minimum face-center z coordinate,
    /// rounded to 2 decimal places.
    pub fn floor_elevation(&self) -> f64 {
        let z_min = self
            .faces
            .iter()
            .map(|f| f.center().z)
            .fold(f64::INFINITY, f64::min);
        (z_min * 100.0).round() / 100.0
    }

    /// Returns an axis-aligned box cell with the given dimensions.
    ///
    /// `x`, `y`, `z` are the dimensions along the respective axes and the
    /// corner `(min(x), min(y), min(z))` sits at `origin`. All face normals
    /// point outwards. Mostly useful for tests and demos.
    pub fn from_box(
        x: f64,
        y: f64,
        z: f64,
        origin: Option<(f64, f64, f64)>,
        dictionary: Option<Dictionary>,
    ) -> Result<Self> {
        let (ox, oy, oz) = origin.unwrap_or((0., 0., 0.));

        let p0 = Point::new(ox, oy, oz);
        let p1 = Point::new(ox + x, oy, oz);
        let p2 = Point::new(ox + x, oy + y, oz);
        let p3 = Point::new(ox, oy + y, oz);
        let p4 = Point::new(ox, oy, oz + z);
        let p5 = Point::new(ox + x, oy, oz + z);
        let p6 = Point::new(ox + x, oy + y, oz + z);
        let p7 = Point::new(ox, oy + y, oz + z);

        let faces = vec![
            Face::new(vec![p0, p3, p2, p1])?, // floor, normal down
            Face::new(vec![p0, p1, p5, p4])?, // wall at ymin
            Face::new(vec![p1, p2, p6, p5])?, // wall at xmax
            Face::new(vec![p3, p7, p6, p2])?, // wall at ymax
            Face::new(vec![p0, p4, p7, p3])?, // wall at xmin
            Face::new(vec![p4, p5, p6, p7])?, // ceiling, normal up
        ];

        Self::new(faces, dictionary)
    }

    /// Replaces one face of the cell (used by tests to host apertures).
    pub fn with_face(mut self, index: usize, face: Face) -> Result<Self> {
        if index >= self.faces.len() {
            return Err(anyhow!("Face index out of bounds: {}", index));
        }
        self.faces[index] = face;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    #[test]
    fn test_empty_cell_error() {
        assert!(Cell::new(vec![], None).is_err());
    }

    #[test]
    fn test_from_box_faces_point_outward() -> Result<()> {
        let cell = Cell::from_box(1., 1., 1., None, None)?;
        assert_eq!(cell.faces().len(), 6);

        let center = Point::new(0.5, 0.5, 0.5);
        for face in cell.faces() {
            let vn = face.normal().unwrap();
            let out = Vector::from_points(center, face.center());
            assert!(vn.dot(out) > 0.0, "face normal points inward");
        }
        Ok(())
    }

    #[test]
    fn test_floor_elevation() -> Result<()> {
        let cell = Cell::from_box(2., 2., 3., Some((0., 0., 6.0)), None)?;
        assert_eq!(cell.floor_elevation(), 6.0);
        Ok(())
    }

    #[test]
    fn test_floor_elevation_rounds_to_2_decimals() -> Result<()> {
        let cell = Cell::from_box(1., 1., 1., Some((0., 0., 2.999)), None)?;
        assert_eq!(cell.floor_elevation(), 3.0);
        Ok(())
    }
}
