//! Containers for the topological model: cell complexes and face clusters.

use crate::topo::cell::Cell;
use crate::topo::face::Face;
use anyhow::{Result, anyhow};

/// A named collection of cells forming a building.
///
/// Cells keep their insertion order; the converter decides its own
/// processing order (ascending floor elevation).
#[derive(Debug, Clone)]
pub struct CellComplex {
    pub name: String,
    cells: Vec<Cell>,
}

impl CellComplex {
    pub fn new(name: &str, cells: Vec<Cell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(anyhow!("CellComplex '{}' has no cells", name));
        }
        Ok(Self {
            name: name.to_string(),
            cells,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

/// A flat collection of faces without solid structure, used for
/// context/shading geometry around the building.
#[derive(Debug, Clone, Default)]
pub struct Cluster {
    faces: Vec<Face>,
}

impl Cluster {
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_needs_cells() {
        assert!(CellComplex::new("empty", vec![]).is_err());
    }

    #[test]
    fn test_complex_keeps_insertion_order() -> Result<()> {
        let upper = Cell::from_box(1., 1., 1., Some((0., 0., 3.)), None)?;
        let lower = Cell::from_box(1., 1., 1., None, None)?;
        let complex = CellComplex::new("two_rooms", vec![upper, lower])?;
        assert_eq!(complex.cells().len(), 2);
        assert_eq!(complex.cells()[0].floor_elevation(), 3.0);
        assert_eq!(complex.cells()[1].floor_elevation(), 0.0);
        Ok(())
    }

    #[test]
    fn test_cluster() -> Result<()> {
        use crate::Point;
        let mut cluster = Cluster::default();
        assert!(cluster.is_empty());
        cluster.add_face(Face::new(vec![
            Point::new(0., 0., 0.),
            Point::new(1., 0., 0.),
            Point::new(1., 0., 1.),
        ])?);
        assert_eq!(cluster.faces().len(), 1);
        Ok(())
    }
}
