use std::{collections::HashMap, fs::File, io::BufReader, path::PathBuf, time::Instant};

use serde::Deserialize;
use tracing::trace;

use crate::map_data::{
    graph::MapDataGraph,
    osm::{OsmNode, OsmWay},
};

use super::OsmDataReaderError;

/// Overpass-style element list: `{"elements": [{"type": "node", ...}, ...]}`.
#[derive(Debug, Deserialize)]
struct OsmJsonDocument {
    elements: Vec<OsmJsonElement>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OsmJsonElement {
    Node {
        id: u64,
        lat: f64,
        lon: f64,
    },
    Way {
        id: u64,
        #[serde(default)]
        nodes: Vec<u64>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    #[serde(other)]
    Unsupported,
}

pub struct JsonReader<'a> {
    map_data: &'a mut MapDataGraph,
    file_name: &'a PathBuf,
}

impl<'a> JsonReader<'a> {
    pub fn new(map_data: &'a mut MapDataGraph, file_name: &'a PathBuf) -> Self {
        Self {
            map_data,
            file_name,
        }
    }

    pub fn read(self) -> Result<(), OsmDataReaderError> {
        let read_start = Instant::now();

        let file =
            File::open(self.file_name).map_err(|error| OsmDataReaderError::FileError { error })?;
        let document: OsmJsonDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|error| OsmDataReaderError::JsonError { error })?;

        for element in document.elements {
            match element {
                OsmJsonElement::Node { id, lat, lon } => {
                    self.map_data.insert_node(OsmNode { id, lat, lon });
                }
                OsmJsonElement::Way { id, nodes, tags } => {
                    self.map_data.insert_way(OsmWay {
                        id,
                        node_ids: nodes,
                        tags,
                    });
                }
                OsmJsonElement::Unsupported => {}
            }
        }

        self.map_data.build_topology();

        let read_duration = read_start.elapsed();
        trace!(
            read_duration_secs = read_duration.as_secs(),
            "File read done"
        );

        Ok(())
    }
}
