use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::mem;

use tracing::{debug, error, info};

use super::line::{LineDirection, MapDataLine};
use super::osm::{OsmNode, OsmWay};
use super::point::MapDataPoint;
use super::tags::RoadTags;
use super::MapDataError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapDataPointId(usize);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapDataLineId(usize);

impl Debug for MapDataPointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl Debug for MapDataLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "l{}", self.0)
    }
}

/// Request-scoped road graph. Raw nodes and ways are staged with the insert
/// calls and become points and lines in `build_topology`; after that the
/// graph is read-only.
pub struct MapDataGraph {
    points: Vec<MapDataPoint>,
    points_map: HashMap<u64, MapDataPointId>,
    lines: Vec<MapDataLine>,
    raw_nodes: HashMap<u64, OsmNode>,
    pending_ways: Vec<OsmWay>,
}

impl MapDataGraph {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            points_map: HashMap::new(),
            lines: Vec::new(),
            raw_nodes: HashMap::new(),
            pending_ways: Vec::new(),
        }
    }

    pub fn insert_node(&mut self, node: OsmNode) {
        self.raw_nodes.insert(node.id, node);
    }

    pub fn insert_way(&mut self, way: OsmWay) {
        if !way_is_routable(&way) {
            return;
        }
        self.pending_ways.push(way);
    }

    /// Resolves the staged ways into junction-to-junction lines. A node shared
    /// by two ways, or sitting at either end of a way, is a junction and
    /// becomes a point; every other way node is folded into line geometry.
    #[tracing::instrument(skip(self))]
    pub fn build_topology(&mut self) {
        let pending_ways = mem::take(&mut self.pending_ways);
        let ways = pending_ways
            .into_iter()
            .filter(|way| match self.validate_way(way) {
                Ok(()) => true,
                Err(error) => {
                    error!(error = ?error, "skipping way");
                    false
                }
            })
            .collect::<Vec<_>>();

        let mut use_count: HashMap<u64, u32> = HashMap::new();
        let mut endpoints: HashSet<u64> = HashSet::new();
        for way in &ways {
            for node_id in &way.node_ids {
                *use_count.entry(*node_id).or_insert(0) += 1;
            }
            endpoints.insert(way.node_ids[0]);
            endpoints.insert(*way.node_ids.last().expect("validated way has nodes"));
        }
        let is_junction =
            |node_id: u64| use_count.get(&node_id).is_some_and(|count| *count > 1) || endpoints.contains(&node_id);

        for way in &ways {
            self.add_way_lines(way, &is_junction);
        }

        info!(
            points = self.point_count(),
            lines = self.line_count(),
            "topology built"
        );
        self.raw_nodes = HashMap::new();
    }

    fn validate_way(&self, way: &OsmWay) -> Result<(), MapDataError> {
        if way.node_ids.len() < 2 {
            return Err(MapDataError::WayTooShort { way_id: way.id });
        }
        for node_id in &way.node_ids {
            if !self.raw_nodes.contains_key(node_id) {
                return Err(MapDataError::MissingNode {
                    way_id: way.id,
                    node_id: *node_id,
                });
            }
        }
        Ok(())
    }

    fn add_way_lines<F: Fn(u64) -> bool>(&mut self, way: &OsmWay, is_junction: &F) {
        let tags = RoadTags::from_osm_tags(&way.tags);
        let direction = if way.is_roundabout() {
            LineDirection::Roundabout
        } else if way.is_one_way() {
            LineDirection::OneWay
        } else {
            LineDirection::BothWays
        };

        let mut run_start = way.node_ids[0];
        let mut run_len = 0.0;
        let mut run_geometry: Vec<(f64, f64)> = Vec::new();
        let mut prev_id = way.node_ids[0];
        for node_id in way.node_ids.iter().skip(1).copied() {
            let prev = self.raw_nodes[&prev_id].clone();
            let node = self.raw_nodes[&node_id].clone();
            run_len += haversine_m(&prev, &node);

            if is_junction(node_id) {
                if run_len > 0.0 {
                    let run_start_point = self.get_or_add_point(run_start);
                    let run_end_point = self.get_or_add_point(node_id);
                    self.add_line(MapDataLine {
                        way_id: way.id,
                        points: (run_start_point, run_end_point),
                        direction,
                        len_m: run_len,
                        geometry: mem::take(&mut run_geometry),
                        tags: tags.clone(),
                    });
                } else {
                    debug!(way_id = way.id, node_id, "dropping zero length line");
                    run_geometry.clear();
                }
                run_start = node_id;
                run_len = 0.0;
            } else {
                run_geometry.push((node.lat, node.lon));
            }
            prev_id = node_id;
        }
    }

    fn get_or_add_point(&mut self, osm_id: u64) -> MapDataPointId {
        if let Some(point_id) = self.points_map.get(&osm_id) {
            return *point_id;
        }
        let node = self.raw_nodes[&osm_id].clone();
        let point_id = MapDataPointId(self.points.len());
        self.points.push(MapDataPoint {
            id: node.id,
            lat: node.lat,
            lon: node.lon,
            lines: Vec::new(),
        });
        self.points_map.insert(osm_id, point_id);
        point_id
    }

    fn add_line(&mut self, line: MapDataLine) {
        let line_id = MapDataLineId(self.lines.len());
        let (point_0, point_1) = line.points;
        self.lines.push(line);
        self.points[point_0.0].lines.push(line_id);
        if point_1 != point_0 {
            self.points[point_1.0].lines.push(line_id);
        }
    }

    pub fn point(&self, point_id: MapDataPointId) -> &MapDataPoint {
        &self.points[point_id.0]
    }

    pub fn line(&self, line_id: MapDataLineId) -> &MapDataLine {
        &self.lines[line_id.0]
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub fn lines_iter(&self) -> impl Iterator<Item = (MapDataLineId, &MapDataLine)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (MapDataLineId(idx), line))
    }

    #[cfg(test)]
    pub fn point_id_by_osm_id(&self, osm_id: u64) -> Option<MapDataPointId> {
        self.points_map.get(&osm_id).copied()
    }

    /// Neighbors reachable from `center_point`, one-way lines already
    /// filtered to their legal direction.
    pub fn get_adjacent(
        &self,
        center_point: MapDataPointId,
    ) -> impl Iterator<Item = (MapDataLineId, MapDataPointId)> + '_ {
        self.point(center_point)
            .lines
            .iter()
            .filter_map(move |line_id| {
                let line = self.line(*line_id);
                if line.points.0 == center_point {
                    Some((*line_id, line.points.1))
                } else if !line.is_one_way() {
                    Some((*line_id, line.points.0))
                } else {
                    None
                }
            })
    }

    pub fn closest_point_to(&self, lat: f64, lon: f64) -> Option<MapDataPointId> {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, point)| (point.distance_to(lat, lon), point.id, idx))
            .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
            .map(|(_, _, idx)| MapDataPointId(idx))
    }
}

fn way_is_routable(osm_way: &OsmWay) -> bool {
    match osm_way.tags.get("highway") {
        None => false,
        Some(highway) => {
            highway != "footway"
                && highway != "path"
                && highway != "steps"
                && highway != "cycleway"
                && highway != "bridleway"
                && highway != "construction"
                && highway != "proposed"
        }
    }
}

fn haversine_m(from: &OsmNode, to: &OsmNode) -> f64 {
    use geo::{Distance, Haversine, Point};
    Haversine::distance(Point::new(from.lon, from.lat), Point::new(to.lon, to.lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{graph_from_data, osm_tags, point_by_osm_id, test_dataset_1, test_node};

    #[test]
    fn junctions_become_points_intermediate_nodes_fold_into_geometry() {
        let (nodes, ways) = test_dataset_1();
        let graph = graph_from_data(nodes, ways);

        // node 2 sits mid-way on a single way and must not become a point
        assert_eq!(graph.point_count(), 10);
        assert_eq!(graph.line_count(), 9);
        assert!(graph.point_id_by_osm_id(2).is_none());

        let p1 = point_by_osm_id(&graph, 1);
        let p3 = point_by_osm_id(&graph, 3);
        let folded = graph
            .lines_iter()
            .find(|(_, line)| line.points == (p1, p3))
            .map(|(_, line)| line)
            .expect("line 1-3 to exist");
        assert_eq!(folded.geometry.len(), 1);
        let node_2 = test_node(2, 57.02, 25.02);
        assert_eq!(folded.geometry[0], (node_2.lat, node_2.lon));
        let leg_a = haversine_m(&test_node(1, 57.03, 25.02), &node_2);
        let leg_b = haversine_m(&node_2, &test_node(3, 57.01, 25.02));
        assert!((folded.len_m - (leg_a + leg_b)).abs() < 0.01);
    }

    #[test]
    fn line_endpoints_exist_and_reference_back() {
        let (nodes, ways) = test_dataset_1();
        let graph = graph_from_data(nodes, ways);

        for (line_id, line) in graph.lines_iter() {
            assert!(line.len_m > 0.0);
            let point_0 = graph.point(line.points.0);
            let point_1 = graph.point(line.points.1);
            assert!(point_0.lines.contains(&line_id));
            assert!(point_1.lines.contains(&line_id));
        }
    }

    #[test]
    fn way_with_missing_node_is_skipped() {
        let (nodes, mut ways) = test_dataset_1();
        ways.push(OsmWay {
            id: 666,
            node_ids: vec![1, 999999, 3],
            tags: osm_tags(&[("highway", "residential")]),
        });
        let graph = graph_from_data(nodes, ways);
        assert_eq!(graph.line_count(), 9);
    }

    #[test]
    fn short_and_non_routable_ways_are_skipped() {
        let nodes = vec![
            test_node(1, 57.0, 25.0),
            test_node(2, 57.001, 25.0),
        ];
        let ways = vec![
            OsmWay {
                id: 1,
                node_ids: vec![1],
                tags: osm_tags(&[("highway", "residential")]),
            },
            OsmWay {
                id: 2,
                node_ids: vec![1, 2],
                tags: osm_tags(&[("highway", "footway")]),
            },
            OsmWay {
                id: 3,
                node_ids: vec![1, 2],
                tags: osm_tags(&[("waterway", "stream")]),
            },
        ];
        let graph = graph_from_data(nodes, ways);
        assert!(graph.is_empty());
        assert_eq!(graph.line_count(), 0);
    }

    #[test]
    fn coincident_duplicate_nodes_produce_no_zero_length_line() {
        let nodes = vec![
            test_node(1, 57.0, 25.0),
            test_node(2, 57.0, 25.0),
            test_node(3, 57.001, 25.0),
        ];
        let ways = vec![OsmWay {
            id: 1,
            node_ids: vec![1, 2, 3],
            tags: osm_tags(&[("highway", "residential")]),
        }];
        let graph = graph_from_data(nodes, ways);
        for (_, line) in graph.lines_iter() {
            assert!(line.len_m > 0.0);
        }
    }

    #[test]
    fn one_way_adjacency_is_directional() {
        let nodes = vec![
            test_node(1, 57.0, 25.0),
            test_node(2, 57.001, 25.0),
        ];
        let ways = vec![OsmWay {
            id: 1,
            node_ids: vec![1, 2],
            tags: osm_tags(&[("highway", "residential"), ("oneway", "yes")]),
        }];
        let graph = graph_from_data(nodes, ways);
        let p1 = point_by_osm_id(&graph, 1);
        let p2 = point_by_osm_id(&graph, 2);
        assert_eq!(graph.get_adjacent(p1).count(), 1);
        assert_eq!(graph.get_adjacent(p2).count(), 0);
    }

    #[test]
    fn closest_point_lookup() {
        let (nodes, ways) = test_dataset_1();
        let graph = graph_from_data(nodes, ways);
        let closest = graph
            .closest_point_to(57.012, 25.021)
            .expect("graph is not empty");
        assert_eq!(graph.point(closest).id, 3);
    }
}
