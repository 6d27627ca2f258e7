use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneCount {
    Single,
    Triple,
}

impl PlaneCount {
    pub fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Triple => 3,
        }
    }
}

/// Geometry used for shape-compatibility checks between two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageShape {
    pub width: u32,
    pub height: u32,
    pub planes: PlaneCount,
}

impl ImageShape {
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.planes.count()
    }
}

impl fmt::Display for ImageShape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}x{}x{}",
            self.width,
            self.height,
            self.planes.count()
        )
    }
}
