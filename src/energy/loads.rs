//! Room conditioning loads: setpoints, service hot water, ideal air.

use crate::energy::schedule::ScheduleRuleset;
use serde::{Deserialize, Serialize};

/// Temperature and humidity targets for a conditioned room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setpoint {
    pub name: String,
    pub heating_schedule: ScheduleRuleset,
    pub cooling_schedule: ScheduleRuleset,
    pub humidifying_schedule: ScheduleRuleset,
    pub dehumidifying_schedule: ScheduleRuleset,
}

impl Setpoint {
    pub fn new(
        name: &str,
        heating_schedule: ScheduleRuleset,
        cooling_schedule: ScheduleRuleset,
        humidifying_schedule: ScheduleRuleset,
        dehumidifying_schedule: ScheduleRuleset,
    ) -> Self {
        Self {
            name: name.to_string(),
            heating_schedule,
            cooling_schedule,
            humidifying_schedule,
            dehumidifying_schedule,
        }
    }
}

/// Hot water demand of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHotWater {
    pub name: String,
    /// Peak flow in L/h per m2 of floor area.
    pub flow_per_area: f64,
    pub schedule: ScheduleRuleset,
}

impl ServiceHotWater {
    pub fn new(name: &str, flow_per_area: f64, schedule: ScheduleRuleset) -> Self {
        Self {
            name: name.to_string(),
            flow_per_area,
            schedule,
        }
    }
}

/// Idealized air system keeping a room within its setpoints without
/// modelling real HVAC equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealAirSystem {
    pub name: String,
    /// Supply air temperature for heating [°C].
    pub heating_air_temperature: f64,
    /// Supply air temperature for cooling [°C].
    pub cooling_air_temperature: f64,
    pub economizer: bool,
}

impl IdealAirSystem {
    /// Default ideal air exchange for a room.
    pub fn default_for_room(room_name: &str) -> Self {
        Self {
            name: format!("{room_name}_IdealAir"),
            heating_air_temperature: 50.0,
            cooling_air_temperature: 13.0,
            economizer: true,
        }
    }
}
