//! Rooms: closed volumes of faces plus their energy attributes.

use crate::energy::face::{BoundaryCondition, Face, FaceType};
use crate::energy::library::{self, ConstructionSet, ProgramType};
use crate::energy::loads::{IdealAirSystem, ServiceHotWater, Setpoint};
use crate::name::HasName;
use crate::uid::UID;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// A single room of the energy model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub uid: UID,
    /// Story label the room belongs to.
    pub story: Option<String>,
    pub faces: Vec<Face>,
    pub program_type: ProgramType,
    pub construction_set: ConstructionSet,
    pub setpoint: Option<Setpoint>,
    pub service_hot_water: Option<ServiceHotWater>,
    pub ideal_air: Option<IdealAirSystem>,
}

impl HasName for Room {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Room {
    /// Creates a room from its faces.
    ///
    /// Floor faces lying entirely at or below ground elevation (z within
    /// `tolerance` of zero or lower) get a `Ground` boundary condition;
    /// every other face starts as `Outdoors`. Program type and
    /// construction set start at the library defaults.
    pub fn new(name: &str, mut faces: Vec<Face>, tolerance: f64) -> Result<Self> {
        if faces.is_empty() {
            return Err(anyhow!("Room '{}' has no faces", name));
        }
        for face in faces.iter_mut() {
            let grounded = face.face_type == FaceType::Floor
                && face.vertices.iter().all(|v| v.z <= tolerance);
            if grounded {
                face.boundary_condition = BoundaryCondition::Ground;
            }
        }
        Ok(Self {
            name: name.to_string(),
            uid: UID::new(),
            story: None,
            faces,
            program_type: library::office_program(),
            construction_set: library::generic_construction_set(),
            setpoint: None,
            service_hot_water: None,
            ideal_air: None,
        })
    }

    /// Total area of the room's Floor-typed faces.
    pub fn floor_area(&self) -> f64 {
        self.faces
            .iter()
            .filter(|f| f.face_type == FaceType::Floor)
            .map(|f| f.area())
            .sum()
    }

    pub fn get_face(&self, name: &str) -> Option<&Face> {
        self.faces.iter().find(|f| f.name == name)
    }
}

/// Pairs coincident opposite-facing faces of different rooms and rewrites
/// both boundary conditions to `Surface` references.
///
/// Faces match when their centers are within `tolerance`, their areas
/// differ by at most `tolerance`, and their normals are anti-parallel.
pub fn solve_adjacency(rooms: &mut [Room], tolerance: f64) {
    let mut pairs: Vec<((usize, usize), (usize, usize))> = Vec::new();
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            for (fi, face_i) in rooms[i].faces.iter().enumerate() {
                for (fj, face_j) in rooms[j].faces.iter().enumerate() {
                    if faces_interface(face_i, face_j, tolerance) {
                        pairs.push(((i, fi), (j, fj)));
                    }
                }
            }
        }
    }
    for ((i, fi), (j, fj)) in pairs {
        let here = (rooms[i].faces[fi].name.clone(), rooms[i].name.clone());
        let there = (rooms[j].faces[fj].name.clone(), rooms[j].name.clone());
        rooms[i].faces[fi].boundary_condition = BoundaryCondition::Surface {
            face: there.0,
            room: there.1,
        };
        rooms[j].faces[fj].boundary_condition = BoundaryCondition::Surface {
            face: here.0,
            room: here.1,
        };
    }
}

fn faces_interface(a: &Face, b: &Face, tolerance: f64) -> bool {
    let (Some(na), Some(nb)) = (a.normal(), b.normal()) else {
        return false;
    };
    na.dot(nb) < -1.0 + 1e-6
        && a.center().distance(&b.center()) <= tolerance
        && (a.area() - b.area()).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topo::Cell;

    /// Builds energy faces from a box cell, named `{room}_Face_{k}`.
    fn box_faces(room: &str, origin: (f64, f64, f64)) -> Vec<Face> {
        let cell = Cell::from_box(1., 1., 1., Some(origin), None).unwrap();
        cell.faces()
            .iter()
            .enumerate()
            .map(|(k, f)| Face::new(&format!("{}_Face_{}", room, k + 1), f.vertices().to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_room_ground_boundary() -> Result<()> {
        let room = Room::new("A", box_faces("A", (0., 0., 0.)), 0.01)?;
        let floor = room
            .faces
            .iter()
            .find(|f| f.face_type == FaceType::Floor)
            .unwrap();
        assert_eq!(floor.boundary_condition, BoundaryCondition::Ground);

        let walls = room.faces.iter().filter(|f| f.face_type == FaceType::Wall);
        for wall in walls {
            assert_eq!(wall.boundary_condition, BoundaryCondition::Outdoors);
        }
        Ok(())
    }

    #[test]
    fn test_elevated_floor_stays_outdoors() -> Result<()> {
        let room = Room::new("B", box_faces("B", (0., 0., 3.)), 0.01)?;
        let floor = room
            .faces
            .iter()
            .find(|f| f.face_type == FaceType::Floor)
            .unwrap();
        assert_eq!(floor.boundary_condition, BoundaryCondition::Outdoors);
        Ok(())
    }

    #[test]
    fn test_floor_area() -> Result<()> {
        let room = Room::new("A", box_faces("A", (0., 0., 0.)), 0.01)?;
        assert!((room.floor_area() - 1.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_solve_adjacency_pairs_shared_faces() -> Result<()> {
        let mut rooms = vec![
            Room::new("A", box_faces("A", (0., 0., 0.)), 0.01)?,
            Room::new("B", box_faces("B", (1., 0., 0.)), 0.01)?,
        ];
        solve_adjacency(&mut rooms, 0.01);

        let surfaces_a: Vec<&Face> = rooms[0]
            .faces
            .iter()
            .filter(|f| matches!(f.boundary_condition, BoundaryCondition::Surface { .. }))
            .collect();
        assert_eq!(surfaces_a.len(), 1);

        let BoundaryCondition::Surface { face, room } = &surfaces_a[0].boundary_condition else {
            unreachable!();
        };
        assert_eq!(room, "B");
        // The paired face points back at this one.
        let back = rooms[1].get_face(face).unwrap();
        let BoundaryCondition::Surface { face: back_face, room: back_room } =
            &back.boundary_condition
        else {
            panic!("pair not rewritten");
        };
        assert_eq!(back_room, "A");
        assert_eq!(back_face, &surfaces_a[0].name);
        Ok(())
    }

    #[test]
    fn test_solve_adjacency_ignores_detached_rooms() -> Result<()> {
        let mut rooms = vec![
            Room::new("A", box_faces("A", (0., 0., 0.)), 0.01)?,
            Room::new("B", box_faces("B", (5., 0., 0.)), 0.01)?,
        ];
        solve_adjacency(&mut rooms, 0.01);
        let any_surface = rooms.iter().flat_map(|r| r.faces.iter()).any(|f| {
            matches!(f.boundary_condition, BoundaryCondition::Surface { .. })
        });
        assert!(!any_surface);
        Ok(())
    }
}
