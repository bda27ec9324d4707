use geo::Distance;
use geo::Haversine;
use geo::Point;

use std::fmt::Debug;
use std::fmt::Display;

use super::graph::MapDataLineId;

#[derive(Clone)]
pub struct MapDataPoint {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
    pub lines: Vec<MapDataLineId>,
}

impl MapDataPoint {
    pub fn distance_to(&self, lat: f64, lon: f64) -> f64 {
        let self_geo = Point::new(self.lon, self.lat);
        let other_geo = Point::new(lon, lat);
        Haversine::distance(self_geo, other_geo)
    }

    pub fn is_junction(&self) -> bool {
        self.lines.len() > 2
    }
}

impl PartialEq for MapDataPoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Debug for MapDataPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MapDataPoint
    id={}
    lat={}
    lon={}
    lines={:?}
    junction={}",
            self.id,
            self.lat,
            self.lon,
            self.lines,
            self.is_junction(),
        )
    }
}

impl Display for MapDataPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}: {}, {})", self.id, self.lat, self.lon)
    }
}
