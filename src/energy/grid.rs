//! Sensor grids: measurement points laid out over room floors.

use crate::Point;
use crate::energy::face::{Face, FaceType};
use crate::name::HasName;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// A single sensor: position and viewing direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub pos: [f64; 3],
    pub dir: [f64; 3],
}

/// A named set of sensors belonging to one room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorGrid {
    pub name: String,
    pub sensors: Vec<Sensor>,
}

impl HasName for SensorGrid {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl SensorGrid {
    /// Lays out an upward-looking sensor grid over the Floor-typed faces.
    ///
    /// Sensors sit at the centers of a `dim` x `dim` raster covering each
    /// floor face's bounding rectangle, `offset` above the face, and are
    /// kept only where they fall inside the face boundary. Floors are
    /// assumed flat (the grid plane sits at the face's mean elevation).
    pub fn from_floor_faces(name: &str, faces: &[Face], dim: f64, offset: f64) -> Result<Self> {
        if dim <= 0.0 {
            return Err(anyhow!("Sensor grid dimension must be positive, got {dim}"));
        }
        let mut sensors = Vec::new();
        for face in faces.iter().filter(|f| f.face_type == FaceType::Floor) {
            let z = face.center().z + offset;
            let (x_min, x_max, y_min, y_max) = bbox_xy(&face.vertices);

            let mut x = x_min + dim / 2.0;
            while x < x_max {
                let mut y = y_min + dim / 2.0;
                while y < y_max {
                    if point_in_polygon_xy(x, y, &face.vertices) {
                        sensors.push(Sensor {
                            pos: [x, y, z],
                            dir: [0.0, 0.0, 1.0],
                        });
                    }
                    y += dim;
                }
                x += dim;
            }
        }
        Ok(Self {
            name: name.to_string(),
            sensors,
        })
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

fn bbox_xy(pts: &[Point]) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in pts {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    (x_min, x_max, y_min, y_max)
}

/// Even-odd test in the XY projection (floors are flat).
fn point_in_polygon_xy(x: f64, y: f64, pts: &[Point]) -> bool {
    let n = pts.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (pts[i], pts[j]);
        if ((pi.y > y) != (pj.y > y))
            && (x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
