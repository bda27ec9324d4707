pub mod alerts;
pub mod generator;
pub mod navigator;
pub mod profile;
pub mod route;
pub mod weights;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RouterError {
    #[error("Map data contains no routable points")]
    EmptyGraph,

    #[error("{name} does not match any point in the loaded map area")]
    PointNotFound { name: &'static str },

    #[error("No criterion produced a route between origin and destination")]
    NoRoutesFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleType::Car => "car",
            VehicleType::Truck => "truck",
            VehicleType::Motorcycle => "motorcycle",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub vehicle_type: VehicleType,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl VehicleSpec {
    pub fn is_truck(&self) -> bool {
        self.vehicle_type == VehicleType::Truck
    }

    /// Height in meters, non-positive values count as no constraint.
    pub fn constraint_height(&self) -> Option<f64> {
        self.height.filter(|height| *height > 0.0)
    }

    /// Weight in tons, non-positive values count as no constraint.
    pub fn constraint_weight(&self) -> Option<f64> {
        self.weight.filter(|weight| *weight > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}
