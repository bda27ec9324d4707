use crate::map_data::graph::{MapDataLineId, MapDataPointId};

/// One step of a walk: the line taken and the point it arrives at.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Segment {
    line: MapDataLineId,
    end_point: MapDataPointId,
}

impl Segment {
    pub fn new(line: MapDataLineId, end_point: MapDataPointId) -> Self {
        Self { line, end_point }
    }

    pub fn get_end_point(&self) -> MapDataPointId {
        self.end_point
    }

    pub fn get_line(&self) -> MapDataLineId {
        self.line
    }
}

impl From<(MapDataLineId, MapDataPointId)> for Segment {
    fn from(value: (MapDataLineId, MapDataPointId)) -> Self {
        Segment::new(value.0, value.1)
    }
}
