use std::{
    io::{self, Write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{
    gpx_writer::{GpxWriter, GpxWriterError},
    router::{generator::RouteAlternative, Coordinate},
};

#[derive(Debug, thiserror::Error)]
pub enum ResultWriterError {
    #[error("JSON Serialization error {error}")]
    SerializeJson { error: serde_json::Error },

    #[error("GPX writing failed: {error:?}")]
    Gpx { error: GpxWriterError },

    #[error("Failed to write to stdout: {error}")]
    Stdout { error: io::Error },

    #[error("Failed to write to file: {error}")]
    FileWrite { error: io::Error },
}

#[derive(Debug, Clone)]
pub enum DataDestination {
    Stdout,
    Gpx { file: PathBuf },
    Json { file: PathBuf },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub routes: Vec<RouteAlternative>,
    pub origin: Coordinate,
    pub destination: Coordinate,
}

pub struct ResultWriter;
impl ResultWriter {
    #[tracing::instrument(skip(response))]
    pub fn write(
        dest: DataDestination,
        response: RouteResponse,
    ) -> Result<(), ResultWriterError> {
        match dest {
            DataDestination::Stdout => {
                let json = serde_json::to_string(&response)
                    .map_err(|error| ResultWriterError::SerializeJson { error })?;

                trace!(bytes_len = json.as_bytes().len(), "Writing json to stdout");

                std::io::stdout()
                    .write_all(json.as_bytes())
                    .map_err(|error| ResultWriterError::Stdout { error })?;
                Ok(())
            }
            DataDestination::Gpx { file } => {
                info!(file = ?file, "Writing gpx");

                GpxWriter::new(response.routes, file.clone())
                    .write_gpx()
                    .map_err(|error| ResultWriterError::Gpx { error })?;

                Ok(())
            }
            DataDestination::Json { file } => {
                let json = serde_json::to_string(&response)
                    .map_err(|error| ResultWriterError::SerializeJson { error })?;

                trace!(
                    bytes_len = json.as_bytes().len(),
                    destination = ?file,
                    "Writing json"
                );

                std::fs::write(file, json)
                    .map_err(|error| ResultWriterError::FileWrite { error })?;

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::alerts::{Alert, AlertLevel};
    use crate::router::profile::RouteCriterion;

    #[test]
    fn response_serializes_with_original_field_names() {
        let response = RouteResponse {
            routes: vec![RouteAlternative {
                criterion: RouteCriterion::BestSurface,
                distance_km: 10.0,
                geometry: vec![(25.0, 57.0), (25.0, 57.09)],
                alerts: vec![Alert {
                    level: AlertLevel::Caution,
                    message: "No street lighting".to_string(),
                    location: Coordinate {
                        lat: 57.09,
                        lon: 25.0,
                    },
                }],
                summary: "1 caution(s)".to_string(),
            }],
            origin: Coordinate {
                lat: 57.0,
                lon: 25.0,
            },
            destination: Coordinate {
                lat: 57.09,
                lon: 25.0,
            },
        };
        let json = serde_json::to_value(&response).expect("response to serialize");
        assert_eq!(json["routes"][0]["type"], "best_surface");
        assert_eq!(json["routes"][0]["alerts"][0]["level"], "caution");
        assert_eq!(json["routes"][0]["geometry"][0][0], 25.0);
        assert_eq!(json["origin"]["lat"], 57.0);
    }
}
