//! Room faces, openings, and shades of the energy model.

use crate::Point;
use crate::Vector;
use crate::name::HasName;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Faces within this angle from straight up are roofs/ceilings [deg].
const ROOF_ANGLE: f64 = 30.0;
/// Faces beyond this angle from straight up are floors [deg].
const FLOOR_ANGLE: f64 = 150.0;

/// Thermal role of a face, derived from its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceType {
    Wall,
    Floor,
    RoofCeiling,
}

impl FaceType {
    /// Classifies a face by the angle between its outward normal and the
    /// up axis: up to 30° is a roof/ceiling, beyond 150° is a floor,
    /// anything in between is a wall.
    pub fn from_normal(vn: &Vector) -> Self {
        let up = Vector::new(0., 0., 1.);
        match vn.angle(&up) {
            Some(angle) => {
                let deg = angle.to_degrees();
                if deg <= ROOF_ANGLE {
                    FaceType::RoofCeiling
                } else if deg >= FLOOR_ANGLE {
                    FaceType::Floor
                } else {
                    FaceType::Wall
                }
            }
            None => FaceType::Wall,
        }
    }
}

/// Boundary condition on the outside of a face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundaryCondition {
    Outdoors,
    Ground,
    /// Interface to a face of another room (solved adjacency).
    Surface {
        face: String,
        room: String,
    },
}

/// A window opening hosted on a face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aperture {
    pub name: String,
    pub vertices: Vec<Point>,
}

/// A door opening hosted on a face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    pub name: String,
    pub vertices: Vec<Point>,
}

/// Context/shading geometry not belonging to any room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shade {
    pub name: String,
    pub vertices: Vec<Point>,
}

/// A single face of a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    pub name: String,
    pub vertices: Vec<Point>,
    pub face_type: FaceType,
    pub boundary_condition: BoundaryCondition,
    pub apertures: Vec<Aperture>,
    pub doors: Vec<Door>,
}

impl HasName for Face {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Face {
    /// Creates a face with the type derived from its normal and an
    /// `Outdoors` boundary condition.
    pub fn new(name: &str, vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(anyhow!(
                "Face '{}' needs at least 3 vertices, got {}",
                name,
                vertices.len()
            ));
        }
        let face_type = match normal_of(&vertices) {
            Some(vn) => FaceType::from_normal(&vn),
            None => return Err(anyhow!("Face '{}' has a degenerate boundary", name)),
        };
        Ok(Self {
            name: name.to_string(),
            vertices,
            face_type,
            boundary_condition: BoundaryCondition::Outdoors,
            apertures: Vec::new(),
            doors: Vec::new(),
        })
    }

    pub fn add_aperture(&mut self, aperture: Aperture) {
        self.apertures.push(aperture);
    }

    pub fn add_door(&mut self, door: Door) {
        self.doors.push(door);
    }

    pub fn center(&self) -> Point {
        Point::mean(&self.vertices)
    }

    pub fn normal(&self) -> Option<Vector> {
        normal_of(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        newell(&self.vertices).length() / 2.0
    }

    /// Adds a single centered aperture covering `ratio` of the face area.
    ///
    /// The aperture boundary is the face boundary scaled towards the face
    /// center by the square root of the ratio.
    pub fn apertures_by_ratio(&mut self, ratio: f64) -> Result<()> {
        if !(0.0..1.0).contains(&ratio) || ratio <= 0.0 {
            return Err(anyhow!(
                "Aperture ratio must be in (0, 1), got {} on face '{}'",
                ratio,
                self.name
            ));
        }
        let center = self.center();
        let scale = ratio.sqrt();
        let vertices: Vec<Point> = self
            .vertices
            .iter()
            .map(|v| center + Vector::from_points(center, *v) * scale)
            .collect();
        let name = format!("{}_Glz_{}", self.name, self.apertures.len());
        self.apertures.push(Aperture { name, vertices });
        Ok(())
    }
}

fn newell(vertices: &[Point]) -> Vector {
    let n = vertices.len();
    let mut vn = Vector::new(0., 0., 0.);
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        vn.dx += (p.y - q.y) * (p.z + q.z);
        vn.dy += (p.z - q.z) * (p.x + q.x);
        vn.dz += (p.x - q.x) * (p.y + q.y);
    }
    vn
}

fn normal_of(vertices: &[Point]) -> Option<Vector> {
    newell(vertices).normalize()
}
