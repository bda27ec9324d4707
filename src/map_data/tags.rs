use std::collections::HashMap;
use std::fmt::Display;

use smartstring::alias::String as TagString;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighwayClass {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
    Track,
    Unknown,
}

impl HighwayClass {
    pub fn from_tag(value: &str) -> Self {
        match value {
            "motorway" => HighwayClass::Motorway,
            "motorway_link" => HighwayClass::MotorwayLink,
            "trunk" => HighwayClass::Trunk,
            "trunk_link" => HighwayClass::TrunkLink,
            "primary" => HighwayClass::Primary,
            "primary_link" => HighwayClass::PrimaryLink,
            "secondary" => HighwayClass::Secondary,
            "secondary_link" => HighwayClass::SecondaryLink,
            "tertiary" => HighwayClass::Tertiary,
            "tertiary_link" => HighwayClass::TertiaryLink,
            "unclassified" => HighwayClass::Unclassified,
            "residential" => HighwayClass::Residential,
            "living_street" => HighwayClass::LivingStreet,
            "service" => HighwayClass::Service,
            "track" => HighwayClass::Track,
            _ => HighwayClass::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Asphalt,
    Concrete,
    ConcretePlates,
    Paved,
    PavingStones,
    Compacted,
    FineGravel,
    Gravel,
    Unpaved,
    Dirt,
    Ground,
    Grass,
    Sand,
    Mud,
    Unknown,
}

impl Surface {
    pub fn from_tag(value: &str) -> Self {
        match value {
            "asphalt" => Surface::Asphalt,
            "concrete" => Surface::Concrete,
            "concrete:plates" => Surface::ConcretePlates,
            "paved" => Surface::Paved,
            "paving_stones" => Surface::PavingStones,
            "compacted" => Surface::Compacted,
            "fine_gravel" => Surface::FineGravel,
            "gravel" => Surface::Gravel,
            "unpaved" => Surface::Unpaved,
            "dirt" => Surface::Dirt,
            "ground" => Surface::Ground,
            "grass" => Surface::Grass,
            "sand" => Surface::Sand,
            "mud" => Surface::Mud,
            _ => Surface::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Asphalt => "asphalt",
            Surface::Concrete => "concrete",
            Surface::ConcretePlates => "concrete:plates",
            Surface::Paved => "paved",
            Surface::PavingStones => "paving_stones",
            Surface::Compacted => "compacted",
            Surface::FineGravel => "fine_gravel",
            Surface::Gravel => "gravel",
            Surface::Unpaved => "unpaved",
            Surface::Dirt => "dirt",
            Surface::Ground => "ground",
            Surface::Grass => "grass",
            Surface::Sand => "sand",
            Surface::Mud => "mud",
            Surface::Unknown => "unknown",
        }
    }
}

impl Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Smoothness {
    Excellent,
    Good,
    Intermediate,
    Bad,
    VeryBad,
    Horrible,
    VeryHorrible,
    Impassable,
    Unknown,
}

impl Smoothness {
    pub fn from_tag(value: &str) -> Self {
        match value {
            "excellent" => Smoothness::Excellent,
            "good" => Smoothness::Good,
            "intermediate" => Smoothness::Intermediate,
            "bad" => Smoothness::Bad,
            "very_bad" => Smoothness::VeryBad,
            "horrible" => Smoothness::Horrible,
            "very_horrible" => Smoothness::VeryHorrible,
            "impassable" => Smoothness::Impassable,
            _ => Smoothness::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Smoothness::Excellent => "excellent",
            Smoothness::Good => "good",
            Smoothness::Intermediate => "intermediate",
            Smoothness::Bad => "bad",
            Smoothness::VeryBad => "very_bad",
            Smoothness::Horrible => "horrible",
            Smoothness::VeryHorrible => "very_horrible",
            Smoothness::Impassable => "impassable",
            Smoothness::Unknown => "unknown",
        }
    }
}

impl Display for Smoothness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lit {
    Yes,
    No,
    Unknown,
}

impl Lit {
    pub fn from_tag(value: &str) -> Self {
        match value {
            "yes" => Lit::Yes,
            "no" => Lit::No,
            _ => Lit::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Private,
    No,
    Destination,
    Delivery,
    Unknown,
}

impl Access {
    pub fn from_tag(value: &str) -> Self {
        match value {
            "yes" | "permissive" | "public" => Access::Allowed,
            "private" => Access::Private,
            "no" => Access::No,
            "destination" => Access::Destination,
            "delivery" => Access::Delivery,
            _ => Access::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Allowed => "yes",
            Access::Private => "private",
            Access::No => "no",
            Access::Destination => "destination",
            Access::Delivery => "delivery",
            Access::Unknown => "unknown",
        }
    }
}

impl Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HgvAccess {
    Yes,
    No,
    Destination,
    Unknown,
}

impl HgvAccess {
    pub fn from_tag(value: &str) -> Self {
        match value {
            "yes" | "designated" => HgvAccess::Yes,
            "no" => HgvAccess::No,
            "destination" => HgvAccess::Destination,
            _ => HgvAccess::Unknown,
        }
    }
}

/// Closed set of road attributes relevant for routing. Anything outside the
/// known vocabulary collapses to an Unknown value that carries no penalty.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadTags {
    pub highway: HighwayClass,
    pub surface: Surface,
    pub smoothness: Smoothness,
    pub lit: Lit,
    pub access: Access,
    pub hgv: HgvAccess,
    pub maxspeed: Option<u16>,
    pub maxheight: Option<f64>,
    pub maxweight: Option<f64>,
    pub name: Option<TagString>,
}

impl RoadTags {
    pub fn from_osm_tags(tags: &HashMap<String, String>) -> Self {
        let get = |key: &str| tags.get(key).map(|v| v.as_str());
        Self {
            highway: get("highway").map_or(HighwayClass::Unknown, HighwayClass::from_tag),
            surface: get("surface").map_or(Surface::Unknown, Surface::from_tag),
            smoothness: get("smoothness").map_or(Smoothness::Unknown, Smoothness::from_tag),
            lit: get("lit").map_or(Lit::Unknown, Lit::from_tag),
            access: get("access").map_or(Access::Unknown, Access::from_tag),
            hgv: get("hgv").map_or(HgvAccess::Unknown, HgvAccess::from_tag),
            maxspeed: get("maxspeed").and_then(parse_maxspeed),
            maxheight: get("maxheight").and_then(parse_metric),
            maxweight: get("maxweight").and_then(parse_metric),
            name: tags.get("name").map(|name| TagString::from(name.as_str())),
        }
    }
}

/// Parses "50", "50 km/h" or "30 mph" into km/h.
fn parse_maxspeed(value: &str) -> Option<u16> {
    let first = value.split_whitespace().next()?;
    let speed: u16 = first.parse().ok()?;
    if value.to_lowercase().contains("mph") {
        return Some((f64::from(speed) * 1.60934) as u16);
    }
    Some(speed)
}

/// Parses metric limits like "4.2", "4.2 m" or "3.5t".
fn parse_metric(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic() || c.is_whitespace())
        .parse()
        .ok()
}
