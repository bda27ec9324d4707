pub mod segment;

use crate::map_data::graph::{MapDataGraph, MapDataPointId};

use self::segment::Segment;

/// A connected walk from an origin point, one segment per traversed line.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    start_point: MapDataPointId,
    route_segments: Vec<Segment>,
}

impl Route {
    pub fn new(start_point: MapDataPointId) -> Self {
        Route {
            start_point,
            route_segments: Vec::new(),
        }
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.route_segments.push(segment)
    }

    pub fn iter(&self) -> std::slice::Iter<Segment> {
        self.route_segments.iter()
    }

    pub fn total_len_m(&self, map_data: &MapDataGraph) -> f64 {
        self.route_segments
            .iter()
            .map(|segment| map_data.line(segment.get_line()).len_m)
            .sum()
    }

    /// Full rendering geometry as (lat, lon) pairs: every junction point plus
    /// the folded intermediate coordinates of each traversed line, in walk
    /// order.
    pub fn geometry(&self, map_data: &MapDataGraph) -> Vec<(f64, f64)> {
        let start = map_data.point(self.start_point);
        let mut coords = vec![(start.lat, start.lon)];
        let mut at_point = self.start_point;
        for segment in &self.route_segments {
            let line = map_data.line(segment.get_line());
            let forward = line.points.0 == at_point;
            if forward {
                coords.extend(line.geometry.iter().copied());
            } else {
                coords.extend(line.geometry.iter().rev().copied());
            }
            let end = map_data.point(segment.get_end_point());
            coords.push((end.lat, end.lon));
            at_point = segment.get_end_point();
        }
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{graph_from_data, point_by_osm_id, test_dataset_1};

    #[test]
    fn geometry_includes_folded_intermediate_nodes() {
        let (nodes, ways) = test_dataset_1();
        let graph = graph_from_data(nodes, ways);
        let p1 = point_by_osm_id(&graph, 1);
        let p3 = point_by_osm_id(&graph, 3);

        let (line_id, _) = graph
            .lines_iter()
            .find(|(_, line)| line.points == (p1, p3))
            .expect("line 1-3 to exist");

        let mut forward = Route::new(p1);
        forward.add_segment((line_id, p3).into());
        let coords = forward.geometry(&graph);
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], (57.03, 25.02));
        assert_eq!(coords[1], (57.02, 25.02));
        assert_eq!(coords[2], (57.01, 25.02));

        // walking the same line the other way reverses its folded geometry
        let mut backward = Route::new(p3);
        backward.add_segment((line_id, p1).into());
        let coords = backward.geometry(&graph);
        assert_eq!(coords, vec![(57.01, 25.02), (57.02, 25.02), (57.03, 25.02)]);
    }
}
