use std::{io, path::PathBuf};

pub mod data_reader;
pub mod json_reader;

#[derive(Debug, thiserror::Error)]
pub enum OsmDataReaderError {
    #[error("Failed to open map data file: {error}")]
    FileError { error: io::Error },

    #[error("Map data JSON error: {error}")]
    JsonError { error: serde_json::Error },
}

#[derive(Debug, PartialEq, Clone)]
pub enum DataSource {
    JsonFile { file: PathBuf },
}
