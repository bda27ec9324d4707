use serde::{Deserialize, Serialize};

use crate::map_data::graph::MapDataGraph;
use crate::map_data::tags::{Access, HgvAccess, Lit, RoadTags, Smoothness, Surface};

use super::route::Route;
use super::{Coordinate, VehicleSpec};

pub const NO_WARNINGS_SUMMARY: &str = "Route is clear with no warnings";

/// Speed limits above this are flagged regardless of criterion.
const HIGH_SPEED_KMH: u16 = 100;

/// Within 10% of a declared height/weight limit counts as marginal clearance.
const CLEARANCE_MARGIN: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Caution,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub location: Coordinate,
}

/// Scans a resolved route against absolute tag state. Each traversed line
/// yields at most one alert, at its highest applicable severity, in walk
/// order; a run of lines repeating the same message is reported once.
pub fn generate_alerts(
    map_data: &MapDataGraph,
    route: &Route,
    vehicle: Option<&VehicleSpec>,
) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = Vec::new();
    for segment in route.iter() {
        let line = map_data.line(segment.get_line());
        let Some((level, message)) = classify_line(&line.tags, vehicle) else {
            continue;
        };
        if alerts.last().map_or(false, |last| last.message == message) {
            continue;
        }
        let end_point = map_data.point(segment.get_end_point());
        alerts.push(Alert {
            level,
            message,
            location: Coordinate {
                lat: end_point.lat,
                lon: end_point.lon,
            },
        });
    }
    alerts
}

pub fn summarize_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return NO_WARNINGS_SUMMARY.to_string();
    }
    let critical_count = alerts
        .iter()
        .filter(|alert| alert.level == AlertLevel::Critical)
        .count();
    if critical_count > 0 {
        return format!("{critical_count} critical alert(s)");
    }
    format!("{} caution(s)", alerts.len())
}

fn classify_line(tags: &RoadTags, vehicle: Option<&VehicleSpec>) -> Option<(AlertLevel, String)> {
    if let Some(message) = critical_message(tags, vehicle) {
        return Some((AlertLevel::Critical, message));
    }
    if let Some(message) = caution_message(tags, vehicle) {
        return Some((AlertLevel::Caution, message));
    }
    None
}

fn critical_message(tags: &RoadTags, vehicle: Option<&VehicleSpec>) -> Option<String> {
    if let Some(vehicle) = vehicle {
        if let (Some(limit), Some(height)) = (tags.maxheight, vehicle.constraint_height()) {
            if height > limit {
                return Some(format!(
                    "Height restriction: {limit}m (vehicle: {height}m)"
                ));
            }
        }
        if let (Some(limit), Some(weight)) = (tags.maxweight, vehicle.constraint_weight()) {
            if weight > limit {
                return Some(format!(
                    "Weight restriction: {limit}t (vehicle: {weight}t)"
                ));
            }
        }
        if vehicle.is_truck() {
            if tags.hgv == HgvAccess::No {
                return Some("Trucks not allowed (HGV restriction)".to_string());
            }
            if matches!(tags.access, Access::Private | Access::No) {
                return Some(format!("Access restricted: {}", tags.access));
            }
        }
    }
    if matches!(tags.surface, Surface::Mud | Surface::Sand) {
        return Some(format!("Poor surface condition: {}", tags.surface));
    }
    if matches!(
        tags.smoothness,
        Smoothness::Horrible | Smoothness::VeryHorrible | Smoothness::Impassable
    ) {
        return Some(format!("Very poor road quality: {}", tags.smoothness));
    }
    None
}

fn caution_message(tags: &RoadTags, vehicle: Option<&VehicleSpec>) -> Option<String> {
    if let Some(vehicle) = vehicle {
        if let (Some(limit), Some(height)) = (tags.maxheight, vehicle.constraint_height()) {
            if height > limit * CLEARANCE_MARGIN {
                return Some(format!("Tight clearance: {limit}m (vehicle: {height}m)"));
            }
        }
        if let (Some(limit), Some(weight)) = (tags.maxweight, vehicle.constraint_weight()) {
            if weight > limit * CLEARANCE_MARGIN {
                return Some(format!("Near weight limit: {limit}t (vehicle: {weight}t)"));
            }
        }
        if vehicle.is_truck() {
            if tags.hgv == HgvAccess::Destination {
                return Some("Destination traffic only for trucks".to_string());
            }
            if matches!(tags.access, Access::Delivery | Access::Destination) {
                return Some(format!("Limited access: {}", tags.access));
            }
        }
    }
    if matches!(
        tags.surface,
        Surface::Gravel | Surface::Unpaved | Surface::Dirt | Surface::Ground | Surface::Grass
    ) {
        return Some(format!("Unpaved road: {}", tags.surface));
    }
    if matches!(tags.smoothness, Smoothness::Bad | Smoothness::VeryBad) {
        return Some(format!("Road quality: {}", tags.smoothness));
    }
    if tags.lit == Lit::No {
        return Some("No street lighting".to_string());
    }
    if let Some(speed) = tags.maxspeed {
        if speed > HIGH_SPEED_KMH {
            return Some(format!("High speed road: {speed} km/h"));
        }
    }
    None
}
