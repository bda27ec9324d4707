use crate::map_data::graph::MapDataGraph;

use super::{json_reader::JsonReader, DataSource, OsmDataReaderError};

pub struct OsmDataReader {
    source: DataSource,
    map_data: MapDataGraph,
}

impl OsmDataReader {
    pub fn new(data_source: DataSource) -> Self {
        Self {
            map_data: MapDataGraph::new(),
            source: data_source,
        }
    }

    pub fn read_data(mut self) -> Result<MapDataGraph, OsmDataReaderError> {
        match self.source {
            DataSource::JsonFile { ref file } => {
                JsonReader::new(&mut self.map_data, file).read()?;
            }
        };
        Ok(self.map_data)
    }
}
