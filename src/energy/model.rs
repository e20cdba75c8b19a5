//! Model container - the top level of the energy hierarchy.
//!
//! Hierarchy: Model → Room → Face → Aperture/Door. Shades and sensor
//! grids hang off the model directly.

use crate::energy::face::{BoundaryCondition, Shade};
use crate::energy::grid::SensorGrid;
use crate::energy::room::Room;
use crate::name::HasName;
use crate::uid::UID;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub uid: UID,
    rooms: Vec<Room>,
    orphaned_shades: Vec<Shade>,
    sensor_grids: Vec<SensorGrid>,
}

impl HasName for Model {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Model {
    pub fn new(
        name: &str,
        rooms: Vec<Room>,
        orphaned_shades: Vec<Shade>,
        sensor_grids: Vec<SensorGrid>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }
        let model = Self {
            name: name.to_string(),
            uid: UID::new(),
            rooms,
            orphaned_shades,
            sensor_grids,
        };
        model.validate()?;
        Ok(model)
    }

    /// Rooms in conversion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn orphaned_shades(&self) -> &[Shade] {
        &self.orphaned_shades
    }

    pub fn sensor_grids(&self) -> &[SensorGrid] {
        &self.sensor_grids
    }

    pub fn get_room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Validates the structural integrity of the model.
    ///
    /// Checks for:
    /// - Duplicate room names
    /// - Duplicate face names across all rooms
    /// - Surface boundary conditions pointing at missing rooms or faces
    pub fn validate(&self) -> Result<()> {
        let mut room_names: HashSet<&str> = HashSet::new();
        for room in &self.rooms {
            if !room_names.insert(&room.name) {
                return Err(anyhow!("Duplicate room name: {}", room.name));
            }
        }

        let mut face_names: HashSet<&str> = HashSet::new();
        for room in &self.rooms {
            for face in &room.faces {
                if !face_names.insert(&face.name) {
                    return Err(anyhow!("Duplicate face name: {}", face.name));
                }
            }
        }

        for room in &self.rooms {
            for face in &room.faces {
                if let BoundaryCondition::Surface {
                    face: other_face,
                    room: other_room,
                } = &face.boundary_condition
                {
                    let target = self
                        .get_room(other_room)
                        .and_then(|r| r.get_face(other_face));
                    if target.is_none() {
                        return Err(anyhow!(
                            "Face '{}' references missing boundary '{}' in room '{}'",
                            face.name,
                            other_face,
                            other_room
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
