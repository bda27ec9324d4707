use std::collections::HashMap;

use crate::map_data::graph::{MapDataGraph, MapDataPointId};
use crate::map_data::osm::{OsmNode, OsmWay};

pub fn osm_tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn test_node(id: u64, lat: f64, lon: f64) -> OsmNode {
    OsmNode { id, lat, lon }
}

pub fn graph_from_data(nodes: Vec<OsmNode>, ways: Vec<OsmWay>) -> MapDataGraph {
    let mut map_data = MapDataGraph::new();
    for node in nodes {
        map_data.insert_node(node);
    }
    for way in ways {
        map_data.insert_way(way);
    }
    map_data.build_topology();
    map_data
}

pub fn point_by_osm_id(map_data: &MapDataGraph, osm_id: u64) -> MapDataPointId {
    map_data
        .point_id_by_osm_id(osm_id)
        .expect("node to be a graph point")
}

//       1
//       |
//       2
//       |
// 5 - - 3 - - 6 - - 7
//       |     |
//       4 - - 8 - - 9
//
//       11 - 12
//
// node 2 is interior to a single way and folds into line geometry; nodes
// 11/12 form a disconnected component
pub fn test_dataset_1() -> (Vec<OsmNode>, Vec<OsmWay>) {
    (
        vec![
            test_node(1, 57.03, 25.02),
            test_node(2, 57.02, 25.02),
            test_node(3, 57.01, 25.02),
            test_node(4, 57.00, 25.02),
            test_node(5, 57.01, 25.01),
            test_node(6, 57.01, 25.03),
            test_node(7, 57.01, 25.04),
            test_node(8, 57.00, 25.03),
            test_node(9, 57.00, 25.04),
            test_node(11, 56.98, 25.01),
            test_node(12, 56.98, 25.02),
        ],
        vec![
            OsmWay {
                id: 1234,
                node_ids: vec![1, 2, 3, 4],
                tags: osm_tags(&[("highway", "residential")]),
            },
            OsmWay {
                id: 5367,
                node_ids: vec![5, 3, 6, 7],
                tags: osm_tags(&[("highway", "residential")]),
            },
            OsmWay {
                id: 489,
                node_ids: vec![4, 8, 9],
                tags: osm_tags(&[("highway", "residential")]),
            },
            OsmWay {
                id: 68,
                node_ids: vec![6, 8],
                tags: osm_tags(&[("highway", "residential")]),
            },
            OsmWay {
                id: 1112,
                node_ids: vec![11, 12],
                tags: osm_tags(&[("highway", "residential")]),
            },
        ],
    )
}

/// One straight road of ~10km between nodes 101 and 102, tagged as given.
pub fn single_road_graph(tags: &[(&str, &str)]) -> MapDataGraph {
    graph_from_data(
        vec![
            test_node(101, 57.0, 25.0),
            test_node(102, 57.089932, 25.0),
        ],
        vec![OsmWay {
            id: 100,
            node_ids: vec![101, 102],
            tags: osm_tags(tags),
        }],
    )
}

// 1 ===== 2     direct way 11 (shorter)
//  \     /
//   - 3 -       detour way 12 via folded node 3 (longer)
pub fn detour_graph(direct_tags: &[(&str, &str)], detour_tags: &[(&str, &str)]) -> MapDataGraph {
    graph_from_data(
        vec![
            test_node(1, 57.0, 25.0),
            test_node(2, 57.01, 25.0),
            test_node(3, 57.005, 25.005),
        ],
        vec![
            OsmWay {
                id: 11,
                node_ids: vec![1, 2],
                tags: osm_tags(direct_tags),
            },
            OsmWay {
                id: 12,
                node_ids: vec![1, 3, 2],
                tags: osm_tags(detour_tags),
            },
        ],
    )
}
