use crate::map_data::line::MapDataLine;
use crate::map_data::tags::{Access, HgvAccess, HighwayClass, Lit, RoadTags, Smoothness, Surface};

use super::profile::CriteriaProfile;
use super::VehicleSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineWeight {
    Passable(f64),
    Impassable,
}

pub fn highway_penalty(highway: HighwayClass) -> f64 {
    match highway {
        HighwayClass::Motorway => 0.0,
        HighwayClass::MotorwayLink => 0.1,
        HighwayClass::Trunk => 0.2,
        HighwayClass::TrunkLink => 0.3,
        HighwayClass::Primary => 0.4,
        HighwayClass::PrimaryLink => 0.5,
        HighwayClass::Secondary => 0.6,
        HighwayClass::SecondaryLink => 0.7,
        HighwayClass::Tertiary => 0.8,
        HighwayClass::TertiaryLink => 0.9,
        HighwayClass::Unclassified => 1.0,
        HighwayClass::Residential => 1.1,
        HighwayClass::LivingStreet => 1.5,
        HighwayClass::Service => 2.0,
        HighwayClass::Track => 4.0,
        HighwayClass::Unknown => 0.0,
    }
}

pub fn surface_penalty(surface: Surface) -> f64 {
    match surface {
        Surface::Asphalt | Surface::Concrete => 0.0,
        Surface::Paved => 0.1,
        Surface::ConcretePlates => 0.3,
        Surface::PavingStones => 0.4,
        Surface::Compacted => 1.0,
        Surface::FineGravel => 1.2,
        Surface::Gravel => 2.0,
        Surface::Unpaved => 2.5,
        Surface::Dirt => 3.0,
        Surface::Ground => 3.5,
        Surface::Grass => 4.0,
        Surface::Sand => 5.0,
        Surface::Mud => 7.0,
        Surface::Unknown => 0.0,
    }
}

pub fn smoothness_penalty(smoothness: Smoothness) -> f64 {
    match smoothness {
        Smoothness::Excellent => 0.0,
        Smoothness::Good => 0.2,
        Smoothness::Intermediate => 0.5,
        Smoothness::Bad => 2.0,
        Smoothness::VeryBad => 4.0,
        Smoothness::Horrible => 7.0,
        Smoothness::VeryHorrible => 9.0,
        Smoothness::Impassable => 99.0,
        Smoothness::Unknown => 0.0,
    }
}

pub fn speed_penalty(maxspeed: Option<u16>) -> f64 {
    match maxspeed {
        None => 0.0,
        Some(speed) if speed <= 40 => 0.0,
        Some(speed) if speed <= 60 => 0.2,
        Some(speed) if speed <= 80 => 0.5,
        Some(speed) if speed <= 100 => 1.0,
        Some(_) => 2.0,
    }
}

pub fn safety_penalty(tags: &RoadTags) -> f64 {
    let lit_penalty = match tags.lit {
        Lit::No => 0.3,
        Lit::Yes | Lit::Unknown => 0.0,
    };
    lit_penalty + speed_penalty(tags.maxspeed)
}

fn is_excluded(tags: &RoadTags, vehicle: &VehicleSpec) -> bool {
    if let (Some(limit), Some(height)) = (tags.maxheight, vehicle.constraint_height()) {
        if limit < height {
            return true;
        }
    }
    if let (Some(limit), Some(weight)) = (tags.maxweight, vehicle.constraint_weight()) {
        if limit < weight {
            return true;
        }
    }
    if tags.hgv == HgvAccess::No {
        return true;
    }
    matches!(tags.access, Access::Private | Access::No)
}

/// Roads that are legal but discouraged for restricted vehicles.
fn clearance_multiplier(tags: &RoadTags) -> f64 {
    let mut multiplier = 1.0;
    if tags.hgv == HgvAccess::Destination {
        multiplier *= 2.0;
    }
    if tags.access == Access::Delivery {
        multiplier *= 1.5;
    }
    multiplier
}

/// Pure per-edge cost under one criteria profile. Never mutates anything, so
/// the same line can be evaluated under all profiles concurrently.
pub fn calc_line_weight(
    line: &MapDataLine,
    profile: &CriteriaProfile,
    vehicle: Option<&VehicleSpec>,
) -> LineWeight {
    let tags = &line.tags;

    if profile.hard_exclusion {
        if let Some(vehicle) = vehicle {
            if is_excluded(tags, vehicle) {
                return LineWeight::Impassable;
            }
        }
    }

    let mut cost = line.len_m
        * profile.distance
        * (1.0
            + highway_penalty(tags.highway) * profile.highway
            + surface_penalty(tags.surface) * profile.surface
            + smoothness_penalty(tags.smoothness) * profile.smoothness
            + safety_penalty(tags) * profile.safety);

    if profile.hard_exclusion && vehicle.is_some() {
        cost *= clearance_multiplier(tags);
    }

    LineWeight::Passable(cost)
}
