use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::VehicleSpec;

#[derive(Debug)]
pub enum ProfilesError {
    FileRead { error: io::Error },
    JsonParse { error: serde_json::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteCriterion {
    Fastest,
    BestSurface,
    Safest,
    TruckCompatible,
}

impl Display for RouteCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RouteCriterion::Fastest => "fastest",
            RouteCriterion::BestSurface => "best_surface",
            RouteCriterion::Safest => "safest",
            RouteCriterion::TruckCompatible => "truck_compatible",
        };
        write!(f, "{name}")
    }
}

/// Weight vector applied over the edge penalty tables. `hard_exclusion`
/// additionally removes edges the vehicle may not legally or physically use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaProfile {
    pub distance: f64,
    pub highway: f64,
    pub surface: f64,
    pub smoothness: f64,
    pub safety: f64,
    pub hard_exclusion: bool,
}

fn fastest_profile() -> CriteriaProfile {
    CriteriaProfile {
        distance: 1.0,
        highway: 0.5,
        surface: 0.1,
        smoothness: 0.1,
        safety: 0.0,
        hard_exclusion: false,
    }
}

fn best_surface_profile() -> CriteriaProfile {
    CriteriaProfile {
        distance: 1.0,
        highway: 0.3,
        surface: 2.0,
        smoothness: 2.0,
        safety: 0.1,
        hard_exclusion: false,
    }
}

fn safest_profile() -> CriteriaProfile {
    CriteriaProfile {
        distance: 1.0,
        highway: 0.5,
        surface: 0.5,
        smoothness: 0.5,
        safety: 3.0,
        hard_exclusion: false,
    }
}

fn truck_compatible_profile() -> CriteriaProfile {
    CriteriaProfile {
        distance: 1.0,
        highway: 1.0,
        surface: 1.5,
        smoothness: 1.0,
        safety: 0.5,
        hard_exclusion: true,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaProfiles {
    #[serde(default = "fastest_profile")]
    pub fastest: CriteriaProfile,

    #[serde(default = "best_surface_profile")]
    pub best_surface: CriteriaProfile,

    #[serde(default = "safest_profile")]
    pub safest: CriteriaProfile,

    #[serde(default = "truck_compatible_profile")]
    pub truck_compatible: CriteriaProfile,
}

impl Default for CriteriaProfiles {
    fn default() -> Self {
        Self {
            fastest: fastest_profile(),
            best_surface: best_surface_profile(),
            safest: safest_profile(),
            truck_compatible: truck_compatible_profile(),
        }
    }
}

impl CriteriaProfiles {
    #[tracing::instrument]
    pub fn read_from_file(file: PathBuf) -> Result<Self, ProfilesError> {
        let text = std::fs::read_to_string(file).map_err(|error| ProfilesError::FileRead { error })?;
        let profiles: CriteriaProfiles =
            serde_json::from_str(&text).map_err(|error| ProfilesError::JsonParse { error })?;

        Ok(profiles)
    }

    pub fn read(file: Option<PathBuf>) -> Result<Self, ProfilesError> {
        match file {
            None => Ok(CriteriaProfiles::default()),
            Some(file) => Self::read_from_file(file),
        }
    }

    pub fn get(&self, criterion: RouteCriterion) -> &CriteriaProfile {
        match criterion {
            RouteCriterion::Fastest => &self.fastest,
            RouteCriterion::BestSurface => &self.best_surface,
            RouteCriterion::Safest => &self.safest,
            RouteCriterion::TruckCompatible => &self.truck_compatible,
        }
    }

    /// Three criteria for everyone, truck legality only when the request is
    /// for a truck.
    pub fn applicable(&self, vehicle: Option<&VehicleSpec>) -> Vec<RouteCriterion> {
        let mut criteria = vec![
            RouteCriterion::Fastest,
            RouteCriterion::BestSurface,
            RouteCriterion::Safest,
        ];
        if vehicle.map_or(false, |vehicle| vehicle.is_truck()) {
            criteria.push(RouteCriterion::TruckCompatible);
        }
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::VehicleType;

    #[test]
    fn truck_criterion_only_for_trucks() {
        let profiles = CriteriaProfiles::default();
        assert_eq!(profiles.applicable(None).len(), 3);

        let car = VehicleSpec {
            vehicle_type: VehicleType::Car,
            height: None,
            weight: None,
        };
        assert_eq!(profiles.applicable(Some(&car)).len(), 3);

        let truck = VehicleSpec {
            vehicle_type: VehicleType::Truck,
            height: Some(4.0),
            weight: Some(12.0),
        };
        let criteria = profiles.applicable(Some(&truck));
        assert_eq!(criteria.len(), 4);
        assert_eq!(criteria[3], RouteCriterion::TruckCompatible);
    }

    #[test]
    fn partial_override_file_falls_back_to_defaults() {
        let parsed: CriteriaProfiles =
            serde_json::from_str(r#"{"safest": {"distance": 1.0, "highway": 0.2, "surface": 0.2, "smoothness": 0.2, "safety": 5.0, "hard_exclusion": false}}"#)
                .expect("profiles to parse");
        assert_eq!(parsed.safest.safety, 5.0);
        assert_eq!(parsed.fastest.highway, 0.5);
        assert!(parsed.truck_compatible.hard_exclusion);
    }
}
