use std::fmt::{Debug, Display};

use super::graph::MapDataPointId;
use super::tags::RoadTags;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDirection {
    BothWays,
    OneWay,
    Roundabout,
}

/// One routable junction-to-junction run of a source way. Non-junction nodes
/// of the run survive only as `geometry` coordinates.
#[derive(Clone)]
pub struct MapDataLine {
    pub way_id: u64,
    pub points: (MapDataPointId, MapDataPointId),
    pub direction: LineDirection,
    pub len_m: f64,
    pub geometry: Vec<(f64, f64)>,
    pub tags: RoadTags,
}

impl MapDataLine {
    pub fn is_one_way(&self) -> bool {
        self.direction == LineDirection::OneWay || self.direction == LineDirection::Roundabout
    }

    pub fn is_roundabout(&self) -> bool {
        self.direction == LineDirection::Roundabout
    }
}

impl PartialEq for MapDataLine {
    fn eq(&self, other: &Self) -> bool {
        self.points.0 == other.points.0 && self.points.1 == other.points.1
    }
}

impl Display for MapDataLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tags.name {
            Some(name) => write!(
                f,
                "Line(way {} \"{}\": {:?}-{:?})",
                self.way_id, name, self.points.0, self.points.1
            ),
            None => write!(
                f,
                "Line(way {}: {:?}-{:?})",
                self.way_id, self.points.0, self.points.1
            ),
        }
    }
}

impl Debug for MapDataLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MapDataLine
    way_id={}
    points=({:?},{:?})
    len_m={}
    one_way={}
    roundabout={}",
            self.way_id,
            self.points.0,
            self.points.1,
            self.len_m,
            self.is_one_way(),
            self.is_roundabout(),
        )
    }
}
