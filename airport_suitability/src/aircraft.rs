use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WeightCategory {
    Light,
    #[default]
    Typical,
    Heavy,
}

/// Required runway length in feet for each loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayRequirements {
    pub light: u32,
    pub typical: u32,
    pub heavy: u32,
}

impl RunwayRequirements {
    pub fn for_weight(&self, weight: WeightCategory) -> u32 {
        match weight {
            WeightCategory::Light => self.light,
            WeightCategory::Typical => self.typical,
            WeightCategory::Heavy => self.heavy,
        }
    }
}

/// An aircraft type and the limits it is operated within.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub type_code: String,
    pub name: String,
    /// SEP, MEP, JET and so on.
    pub category: String,
    pub min_runway_ft: u32,
    #[serde(default)]
    pub min_runway_by_weight: Option<RunwayRequirements>,
    pub max_crosswind_kt: u32,
    pub max_tailwind_kt: u32,
    pub vfr_only: bool,
    pub min_visibility_sm: f64,
    pub min_ceiling_ft: u32,
}

impl Aircraft {
    pub fn min_runway_ft_for(&self, weight: WeightCategory) -> u32 {
        self.min_runway_by_weight
            .map(|requirements| requirements.for_weight(weight))
            .unwrap_or(self.min_runway_ft)
    }
}
