//! Energy model representation.
//!
//! Hierarchy: Model → Room → Face → Aperture/Door. Rooms carry the
//! semantic attributes the simulation needs (story, program type,
//! construction set, setpoints, service hot water, ideal air) and the
//! model additionally holds orphaned shades and sensor grids. Everything
//! is serializable; the model is what gets written to `.hbjson`.

pub mod face;
pub mod grid;
pub mod library;
pub mod loads;
pub mod model;
pub mod room;
pub mod schedule;

pub use face::{Aperture, BoundaryCondition, Door, Face, FaceType, Shade};
pub use grid::{Sensor, SensorGrid};
pub use library::{Construction, ConstructionSet, Material, ProgramType, WindowConstruction};
pub use loads::{IdealAirSystem, ServiceHotWater, Setpoint};
pub use model::Model;
pub use room::Room;
pub use schedule::{ScheduleDay, ScheduleRuleset, ScheduleTypeLimit};
