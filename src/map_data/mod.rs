pub mod graph;
pub mod line;
pub mod osm;
pub mod point;
pub mod tags;

#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum MapDataError {
    #[error("Way {way_id} references missing node {node_id}")]
    MissingNode { way_id: u64, node_id: u64 },

    #[error("Way {way_id} has fewer than two usable nodes")]
    WayTooShort { way_id: u64 },
}
