use std::fmt;

use nalgebra::Vector2;

/// A point of the projection plane. Both components are unrestricted.
#[derive(Debug, Clone, Copy)]
pub struct CartesianCoordinates {
    xy: Vector2<f64>,
}

impl CartesianCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        CartesianCoordinates {
            xy: Vector2::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.xy.x
    }

    pub fn y(&self) -> f64 {
        self.xy.y
    }

    pub fn as_vector(&self) -> &Vector2<f64> {
        &self.xy
    }

    /// Euclidean distance between two points of the plane.
    pub fn distance_to(&self, that: &CartesianCoordinates) -> f64 {
        (self.xy - that.xy).norm()
    }
}

impl From<Vector2<f64>> for CartesianCoordinates {
    fn from(xy: Vector2<f64>) -> Self {
        CartesianCoordinates { xy }
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={:.4}, y={:.4})", self.x(), self.y())
    }
}
