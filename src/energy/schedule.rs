//! Schedules: time-varying values for setpoints and loads.

use serde::{Deserialize, Serialize};

/// Value domain of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTypeLimit {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

impl ScheduleTypeLimit {
    pub fn temperature() -> Self {
        Self {
            name: "Temperature".to_string(),
            min: -273.15,
            max: 200.0,
        }
    }

    pub fn humidity() -> Self {
        Self {
            name: "Humidity".to_string(),
            min: 0.0,
            max: 100.0,
        }
    }

    pub fn fractional() -> Self {
        Self {
            name: "Fractional".to_string(),
            min: 0.0,
            max: 1.0,
        }
    }
}

/// A day profile: values applied from the paired `(hour, minute)` times
/// until the next time in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub name: String,
    values: Vec<f64>,
    /// Start time of each value as (hour, minute); the first entry is
    /// expected to be (0, 0).
    times: Vec<(u8, u8)>,
}

impl ScheduleDay {
    pub fn new(name: &str, values: Vec<f64>, times: Vec<(u8, u8)>) -> anyhow::Result<Self> {
        if values.is_empty() || values.len() != times.len() {
            anyhow::bail!(
                "ScheduleDay '{}' needs matching non-empty values and times ({} vs {})",
                name,
                values.len(),
                times.len()
            );
        }
        Ok(Self {
            name: name.to_string(),
            values,
            times,
        })
    }

    pub fn constant(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            values: vec![value],
            times: vec![(0, 0)],
        }
    }

    /// Value in effect at the given hour of the day (0-23).
    pub fn value_at(&self, hour: u8) -> f64 {
        let minutes = u16::from(hour) * 60;
        let mut value = self.values[0];
        for (val, (h, m)) in self.values.iter().zip(self.times.iter()) {
            let start = u16::from(*h) * 60 + u16::from(*m);
            if start <= minutes {
                value = *val;
            }
        }
        value
    }
}

/// A named schedule: a day profile plus the value domain it lives in.
///
/// Repeats the same day profile every day; that is all the conversion
/// needs for constant setpoints and the weekday hot-water profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRuleset {
    pub name: String,
    pub default_day: ScheduleDay,
    pub type_limit: ScheduleTypeLimit,
}

impl ScheduleRuleset {
    pub fn new(name: &str, default_day: ScheduleDay, type_limit: ScheduleTypeLimit) -> Self {
        Self {
            name: name.to_string(),
            default_day,
            type_limit,
        }
    }

    /// Creates a schedule holding one value at all times.
    pub fn from_constant_value(name: &str, value: f64, type_limit: ScheduleTypeLimit) -> Self {
        Self::new(name, ScheduleDay::constant(name, value), type_limit)
    }

    /// Schedule value at a given hour of the year.
    pub fn value_at(&self, hour_of_year: usize) -> f64 {
        self.default_day.value_at((hour_of_year % 24) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_schedule() {
        let sched =
            ScheduleRuleset::from_constant_value("Room Heating", 20.0, ScheduleTypeLimit::temperature());
        assert_eq!(sched.value_at(0), 20.0);
        assert_eq!(sched.value_at(5000), 20.0);
    }

    #[test]
    fn test_day_schedule_transitions() -> anyhow::Result<()> {
        // Off before 9:00, on 9:00-17:00, off after.
        let day = ScheduleDay::new(
            "Simple Weekday",
            vec![0., 1., 0.],
            vec![(0, 0), (9, 0), (17, 0)],
        )?;
        assert_eq!(day.value_at(0), 0.0);
        assert_eq!(day.value_at(8), 0.0);
        assert_eq!(day.value_at(9), 1.0);
        assert_eq!(day.value_at(16), 1.0);
        assert_eq!(day.value_at(17), 0.0);
        assert_eq!(day.value_at(23), 0.0);
        Ok(())
    }

    #[test]
    fn test_day_schedule_validation() {
        assert!(ScheduleDay::new("bad", vec![0., 1.], vec![(0, 0)]).is_err());
        assert!(ScheduleDay::new("empty", vec![], vec![]).is_err());
    }

    #[test]
    fn test_ruleset_repeats_daily() -> anyhow::Result<()> {
        let day = ScheduleDay::new(
            "Simple Weekday",
            vec![0., 1., 0.],
            vec![(0, 0), (9, 0), (17, 0)],
        )?;
        let sched = ScheduleRuleset::new("Office Water Use", day, ScheduleTypeLimit::fractional());
        // Hour 33 = day 2, 09:00.
        assert_eq!(sched.value_at(33), 1.0);
        // Hour 42 = day 2, 18:00.
        assert_eq!(sched.value_at(42), 0.0);
        Ok(())
    }

    #[test]
    fn test_type_limits() {
        assert_eq!(ScheduleTypeLimit::fractional().max, 1.0);
        assert_eq!(ScheduleTypeLimit::humidity().max, 100.0);
        assert!(ScheduleTypeLimit::temperature().min < -200.0);
    }
}
