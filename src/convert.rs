//! Conversion of a topological cell complex into an energy model.

use crate::energy::face::{Aperture, Door, Face, Shade};
use crate::energy::grid::SensorGrid;
use crate::energy::library::{self, ConstructionSet, ProgramType};
use crate::energy::loads::{IdealAirSystem, ServiceHotWater, Setpoint};
use crate::energy::model::Model;
use crate::energy::room::{self, Room};
use crate::energy::schedule::{ScheduleDay, ScheduleRuleset, ScheduleTypeLimit};
use crate::levels::levels_from_elevations;
use crate::name::unique_name;
use crate::topo::{Cell, CellComplex, Cluster, Dictionary};
use anyhow::{Result, anyhow};
use std::collections::HashSet;
use tracing::warn;

/// Conversion parameters. The defaults reproduce a generic conditioned
/// office building.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub building_name: String,
    /// Program type used when a cell names none.
    pub default_program: String,
    /// Construction set used when a cell names none.
    pub default_construction_set: String,
    /// Cooling setpoint [°C].
    pub cooling_setpoint: f64,
    /// Heating setpoint [°C].
    pub heating_setpoint: f64,
    /// Humidifying setpoint [% RH].
    pub humidifying_setpoint: f64,
    /// Dehumidifying setpoint [% RH].
    pub dehumidifying_setpoint: f64,
    /// Dictionary key carrying the room name.
    pub room_name_key: String,
    /// Dictionary key carrying the program type identifier.
    pub room_type_key: String,
    /// Elevation tolerance for story clustering [m].
    pub story_tolerance: f64,
    /// Distance tolerance for face adjacency and ground detection [m].
    pub adjacency_tolerance: f64,
    /// Sensor grid cell size [m].
    pub grid_dimension: f64,
    /// Sensor grid height above the floor [m].
    pub grid_offset: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            building_name: "Generic_Building".to_string(),
            default_program: "Generic Office Program".to_string(),
            default_construction_set: "Default Generic Construction Set".to_string(),
            cooling_setpoint: 25.0,
            heating_setpoint: 20.0,
            humidifying_setpoint: 30.0,
            dehumidifying_setpoint: 55.0,
            room_name_key: "Name".to_string(),
            room_type_key: "Type".to_string(),
            story_tolerance: 2.0,
            adjacency_tolerance: 0.01,
            grid_dimension: 0.5,
            grid_offset: 1.0,
        }
    }
}

/// Converts a cell complex (and optional shading cluster) into an energy
/// model.
///
/// Cells are processed in ascending floor-elevation order. Each cell
/// becomes one conditioned room: its story comes from the `Story`
/// dictionary key or the clustered floor label, its name from the
/// configured name key (made collision-free) or a generated
/// `{story}_SPACE_{n}` fallback, and its program type and construction
/// set from the dictionary with silent fallback to the configured
/// defaults. Inter-room adjacencies are solved at the end.
pub fn convert(
    complex: &CellComplex,
    shading: Option<&Cluster>,
    opts: &ConvertOptions,
) -> Result<Model> {
    let mut cells: Vec<&Cell> = complex.cells().iter().collect();
    cells.sort_by(|a, b| a.floor_elevation().total_cmp(&b.floor_elevation()));

    let elevations: Vec<f64> = cells.iter().map(|c| c.floor_elevation()).collect();
    let labels = levels_from_elevations(&elevations, opts.story_tolerance);

    let mut used_names: HashSet<String> = HashSet::new();
    let mut rooms: Vec<Room> = Vec::with_capacity(cells.len());
    let mut grids: Vec<SensorGrid> = Vec::with_capacity(cells.len());

    for (i, cell) in cells.iter().enumerate() {
        let label = labels[i].clone().ok_or_else(|| {
            anyhow!(
                "Cell {} has no floor level within tolerance {}",
                i,
                opts.story_tolerance
            )
        })?;
        let dict = cell.dictionary.as_ref();

        let story = match dict.and_then(|d| d.get_str("Story")) {
            Some(s) => s.replace(' ', "_"),
            None => label,
        };

        let room_name = match dict.and_then(|d| d.get_str(&opts.room_name_key)) {
            Some(name) => unique_name(&name.replace(' ', "_"), &used_names, 1),
            None => format!("{}_SPACE_{}", story, i + 1),
        };
        used_names.insert(room_name.clone());

        let faces = convert_faces(cell, &room_name)?;
        let mut room = Room::new(&room_name, faces, opts.adjacency_tolerance)?;

        grids.push(SensorGrid::from_floor_faces(
            &format!("{room_name}_SG"),
            &room.faces,
            opts.grid_dimension,
            opts.grid_offset,
        )?);

        room.setpoint = Some(room_setpoint(opts));
        room.service_hot_water = Some(office_hot_water()?);
        room.ideal_air = Some(IdealAirSystem::default_for_room(&room_name));
        room.program_type = resolve_program(dict, opts);
        room.construction_set = resolve_construction_set(dict, opts);
        room.story = Some(story);

        rooms.push(room);
    }

    room::solve_adjacency(&mut rooms, opts.adjacency_tolerance);

    let mut shades: Vec<Shade> = Vec::new();
    if let Some(cluster) = shading {
        for (i, sface) in cluster.faces().iter().enumerate() {
            shades.push(Shade {
                name: format!("SHADINGSURFACE_{}", i + 1),
                vertices: sface.vertices().to_vec(),
            });
        }
    }

    Model::new(&opts.building_name, rooms, shades, grids)
}

/// Maps a cell's faces, hosting openings along the way.
///
/// Hosted apertures become doors or windows depending on their `type`
/// dictionary value. Vertical faces without hosted apertures get ratio
/// glazing when they carry an `apertureRatio` value.
fn convert_faces(cell: &Cell, room_name: &str) -> Result<Vec<Face>> {
    let mut faces = Vec::with_capacity(cell.faces().len());
    for (k, tface) in cell.faces().iter().enumerate() {
        let mut face = Face::new(
            &format!("{}_Face_{}", room_name, k + 1),
            tface.vertices().to_vec(),
        )?;

        if tface.apertures().is_empty() {
            if tface.is_vertical() {
                if let Some(ratio) = tface.dictionary.as_ref().and_then(|d| d.get_f64("apertureRatio")) {
                    if let Err(err) = face.apertures_by_ratio(ratio) {
                        warn!("Skipping ratio glazing on '{}': {err}", face.name);
                    }
                }
            }
        } else {
            for (j, ap) in tface.apertures().iter().enumerate() {
                let ap_type = ap.dictionary.as_ref().and_then(|d| d.get_str("type"));
                let is_door = ap_type.is_some_and(|t| t.to_lowercase().contains("door"));
                if is_door {
                    face.add_door(Door {
                        name: format!("{}_Door_{}", face.name, j),
                        vertices: ap.vertices().to_vec(),
                    });
                } else {
                    face.add_aperture(Aperture {
                        name: format!("{}_Window_{}", face.name, j),
                        vertices: ap.vertices().to_vec(),
                    });
                }
            }
        }
        faces.push(face);
    }
    Ok(faces)
}

fn resolve_program(dict: Option<&Dictionary>, opts: &ConvertOptions) -> ProgramType {
    match dict.and_then(|d| d.get_str(&opts.room_type_key)) {
        Some(id) => library::program_type_by_identifier(id).unwrap_or_else(|| {
            warn!("Unknown program type '{id}', falling back to the office program");
            library::office_program()
        }),
        None => library::program_type_by_identifier(&opts.default_program).unwrap_or_else(|| {
            warn!(
                "Unknown default program '{}', falling back to the office program",
                opts.default_program
            );
            library::office_program()
        }),
    }
}

fn resolve_construction_set(dict: Option<&Dictionary>, opts: &ConvertOptions) -> ConstructionSet {
    match dict.and_then(|d| d.get_str("construction_set")) {
        Some(id) => library::construction_set_by_identifier(id).unwrap_or_else(|| {
            warn!("Unknown construction set '{id}', falling back to the generic set");
            library::generic_construction_set()
        }),
        None => library::construction_set_by_identifier(&opts.default_construction_set)
            .unwrap_or_else(|| {
                warn!(
                    "Unknown default construction set '{}', falling back to the generic set",
                    opts.default_construction_set
                );
                library::generic_construction_set()
            }),
    }
}

fn room_setpoint(opts: &ConvertOptions) -> Setpoint {
    let heat = ScheduleRuleset::from_constant_value(
        "Room Heating",
        opts.heating_setpoint,
        ScheduleTypeLimit::temperature(),
    );
    let cool = ScheduleRuleset::from_constant_value(
        "Room Cooling",
        opts.cooling_setpoint,
        ScheduleTypeLimit::temperature(),
    );
    let humidify = ScheduleRuleset::from_constant_value(
        "Room Humidifying",
        opts.humidifying_setpoint,
        ScheduleTypeLimit::humidity(),
    );
    let dehumidify = ScheduleRuleset::from_constant_value(
        "Room Dehumidifying",
        opts.dehumidifying_setpoint,
        ScheduleTypeLimit::humidity(),
    );
    Setpoint::new("Room Setpoint", heat, cool, humidify, dehumidify)
}

fn office_hot_water() -> Result<ServiceHotWater> {
    let weekday = ScheduleDay::new(
        "Simple Weekday",
        vec![0.0, 1.0, 0.0],
        vec![(0, 0), (9, 0), (17, 0)],
    )?;
    let schedule = ScheduleRuleset::new("Office Water Use", weekday, ScheduleTypeLimit::fractional());
    Ok(ServiceHotWater::new("Office Hot Water", 0.1, schedule))
}
