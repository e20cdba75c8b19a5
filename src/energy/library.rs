//! Built-in program types and construction sets.
//!
//! A small standard library resolved by identifier during conversion.
//! Unknown identifiers return None; the converter decides the fallback.

use crate::energy::schedule::{ScheduleDay, ScheduleRuleset, ScheduleTypeLimit};
use serde::{Deserialize, Serialize};

/// Usage profile of a room: occupant density and internal loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramType {
    pub identifier: String,
    /// Occupants per m2 of floor area.
    pub people_per_area: f64,
    /// Lighting power density in W/m2.
    pub lighting_power_density: f64,
    /// Equipment power density in W/m2.
    pub equipment_power_density: f64,
    pub occupancy: ScheduleRuleset,
}

/// A single material layer of an opaque construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Thickness in m.
    pub thickness: f64,
    /// Thermal conductivity in W/(m*K).
    pub conductivity: f64,
    /// Density in kg/m3.
    pub density: f64,
    /// Specific heat in J/(kg*K).
    pub specific_heat: f64,
}

/// An opaque construction defined by material layers (outside to inside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    pub identifier: String,
    pub layers: Vec<Material>,
    /// External surface resistance in m2*K/W.
    pub r_se: f64,
    /// Internal surface resistance in m2*K/W.
    pub r_si: f64,
}

impl Construction {
    pub fn new(identifier: &str, layers: Vec<Material>) -> Self {
        Self {
            identifier: identifier.to_string(),
            layers,
            r_se: 0.04,
            r_si: 0.13,
        }
    }

    /// Creates a construction for a floor (downward heat flow).
    pub fn floor(identifier: &str, layers: Vec<Material>) -> Self {
        Self {
            r_si: 0.17,
            ..Self::new(identifier, layers)
        }
    }

    /// Creates a construction for a roof/ceiling (upward heat flow).
    pub fn roof(identifier: &str, layers: Vec<Material>) -> Self {
        Self {
            r_si: 0.10,
            ..Self::new(identifier, layers)
        }
    }

    /// Total thermal resistance in m2*K/W (including surface resistances).
    pub fn total_resistance(&self) -> f64 {
        let r_layers: f64 = self
            .layers
            .iter()
            .map(|l| {
                if l.conductivity > 0.0 {
                    l.thickness / l.conductivity
                } else {
                    0.0
                }
            })
            .sum();
        self.r_se + r_layers + self.r_si
    }

    /// U-value in W/(m2*K).
    pub fn u_value(&self) -> f64 {
        let r = self.total_resistance();
        if r > 0.0 { 1.0 / r } else { 0.0 }
    }
}

/// A glazed construction, reduced to its performance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConstruction {
    pub identifier: String,
    /// U-factor in W/(m2*K).
    pub u_factor: f64,
    /// Solar heat gain coefficient (0-1).
    pub shgc: f64,
}

/// Constructions for every face role of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionSet {
    pub identifier: String,
    pub wall: Construction,
    pub floor: Construction,
    pub roof_ceiling: Construction,
    pub window: WindowConstruction,
}

fn concrete(thickness: f64) -> Material {
    Material {
        name: "concrete".to_string(),
        thickness,
        conductivity: 1.4,
        density: 2300.0,
        specific_heat: 880.0,
    }
}

fn mineral_wool(thickness: f64) -> Material {
    Material {
        name: "mineral_wool".to_string(),
        thickness,
        conductivity: 0.04,
        density: 60.0,
        specific_heat: 850.0,
    }
}

fn plasterboard() -> Material {
    Material {
        name: "plasterboard".to_string(),
        thickness: 0.0125,
        conductivity: 0.25,
        density: 900.0,
        specific_heat: 1000.0,
    }
}

/// The office program used when nothing better is known.
pub fn office_program() -> ProgramType {
    let day = ScheduleDay::new(
        "Generic Office Occupancy",
        vec![0.0, 1.0, 0.0],
        vec![(0, 0), (8, 0), (18, 0)],
    )
    .unwrap_or_else(|_| ScheduleDay::constant("Generic Office Occupancy", 1.0));
    ProgramType {
        identifier: "Generic Office Program".to_string(),
        people_per_area: 0.1,
        lighting_power_density: 10.0,
        equipment_power_density: 15.0,
        occupancy: ScheduleRuleset::new(
            "Generic Office Occupancy",
            day,
            ScheduleTypeLimit::fractional(),
        ),
    }
}

fn residential_program() -> ProgramType {
    let day = ScheduleDay::new(
        "Generic Residential Occupancy",
        vec![1.0, 0.5, 0.2, 0.8, 1.0],
        vec![(0, 0), (7, 0), (9, 0), (17, 0), (22, 0)],
    )
    .unwrap_or_else(|_| ScheduleDay::constant("Generic Residential Occupancy", 1.0));
    ProgramType {
        identifier: "Generic Residential Program".to_string(),
        people_per_area: 0.035,
        lighting_power_density: 5.0,
        equipment_power_density: 8.0,
        occupancy: ScheduleRuleset::new(
            "Generic Residential Occupancy",
            day,
            ScheduleTypeLimit::fractional(),
        ),
    }
}

/// The construction set used when nothing better is known.
pub fn generic_construction_set() -> ConstructionSet {
    ConstructionSet {
        identifier: "Default Generic Construction Set".to_string(),
        wall: Construction::new(
            "Generic Insulated Wall",
            vec![concrete(0.15), mineral_wool(0.10), plasterboard()],
        ),
        floor: Construction::floor("Generic Ground Slab", vec![concrete(0.20)]),
        roof_ceiling: Construction::roof(
            "Generic Insulated Roof",
            vec![concrete(0.15), mineral_wool(0.15), plasterboard()],
        ),
        window: WindowConstruction {
            identifier: "Generic Double Pane".to_string(),
            u_factor: 2.7,
            shgc: 0.64,
        },
    }
}

fn heavy_mass_construction_set() -> ConstructionSet {
    ConstructionSet {
        identifier: "Heavy Mass Construction Set".to_string(),
        wall: Construction::new("Heavy Concrete Wall", vec![concrete(0.20)]),
        floor: Construction::floor("Heavy Concrete Slab", vec![concrete(0.25)]),
        roof_ceiling: Construction::roof("Heavy Concrete Roof", vec![concrete(0.20)]),
        window: WindowConstruction {
            identifier: "Generic Single Pane".to_string(),
            u_factor: 5.8,
            shgc: 0.82,
        },
    }
}

/// Looks up a built-in program type by its identifier.
pub fn program_type_by_identifier(identifier: &str) -> Option<ProgramType> {
    [office_program(), residential_program()]
        .into_iter()
        .find(|p| p.identifier == identifier)
}

/// Looks up a built-in construction set by its identifier.
pub fn construction_set_by_identifier(identifier: &str) -> Option<ConstructionSet> {
    [generic_construction_set(), heavy_mass_construction_set()]
        .into_iter()
        .find(|c| c.identifier == identifier)
}
