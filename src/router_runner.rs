use std::{num::ParseFloatError, path::PathBuf, time::Instant};

use clap::Parser;
use tracing::info;

use crate::{
    osm_data::{data_reader::OsmDataReader, DataSource, OsmDataReaderError},
    result_writer::{DataDestination, ResultWriter, ResultWriterError, RouteResponse},
    router::{
        generator::Generator,
        profile::{CriteriaProfiles, ProfilesError},
        Coordinate, RouterError, VehicleSpec, VehicleType,
    },
};

#[derive(Debug)]
pub enum RouterRunnerError {
    InputFileFormatIncorrect {
        filename: PathBuf,
    },
    OutputFileFormatIncorrect {
        filename: PathBuf,
    },
    Coords {
        name: String,
        cause: String,
        error: Option<ParseFloatError>,
    },
    Profiles {
        error: ProfilesError,
    },
    DataRead {
        error: OsmDataReaderError,
    },
    Router {
        error: RouterError,
    },
    ResultWrite {
        error: ResultWriterError,
    },
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    #[arg(long, value_name = "LAT,LON")]
    start: String,

    #[arg(long, value_name = "LAT,LON")]
    finish: String,

    #[arg(long, value_enum, default_value_t = VehicleType::Car)]
    vehicle: VehicleType,

    #[arg(long, value_name = "METERS", help = "Vehicle height in meters")]
    height: Option<f64>,

    #[arg(long, value_name = "TONS", help = "Vehicle weight in metric tons")]
    weight: Option<f64>,

    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    profile_file: Option<PathBuf>,
}

pub struct RouterRunner {
    data_source: DataSource,
    data_destination: DataDestination,
    start: Coordinate,
    finish: Coordinate,
    vehicle: VehicleSpec,
    profile_file: Option<PathBuf>,
}

impl RouterRunner {
    pub fn init() -> Self {
        let cli = Cli::parse();
        Self {
            data_source: get_data_source(cli.input).expect("could not get data source"),
            data_destination: get_data_destination(cli.output)
                .expect("could not get data destination"),
            start: get_coords("Start", &cli.start).expect("could not get start coordinates"),
            finish: get_coords("Finish", &cli.finish).expect("could not get finish coordinates"),
            vehicle: VehicleSpec {
                vehicle_type: cli.vehicle,
                height: cli.height,
                weight: cli.weight,
            },
            profile_file: cli.profile_file,
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn run(&self) -> Result<(), RouterRunnerError> {
        let startup_start = Instant::now();

        let profiles = CriteriaProfiles::read(self.profile_file.clone())
            .map_err(|error| RouterRunnerError::Profiles { error })?;

        let map_data = OsmDataReader::new(self.data_source.clone())
            .read_data()
            .map_err(|error| RouterRunnerError::DataRead { error })?;
        if map_data.is_empty() {
            return Err(RouterRunnerError::Router {
                error: RouterError::EmptyGraph,
            });
        }

        let from = map_data
            .closest_point_to(self.start.lat, self.start.lon)
            .ok_or(RouterRunnerError::Router {
                error: RouterError::PointNotFound {
                    name: "Start point",
                },
            })?;
        info!("Start point {}", map_data.point(from));

        let to = map_data
            .closest_point_to(self.finish.lat, self.finish.lon)
            .ok_or(RouterRunnerError::Router {
                error: RouterError::PointNotFound {
                    name: "Finish point",
                },
            })?;
        info!("Finish point {}", map_data.point(to));

        let startup_end = startup_start.elapsed();
        info!("startup took {}ms", startup_end.as_millis());

        let generator = Generator::new(
            &map_data,
            from,
            to,
            Some(self.vehicle.clone()),
            &profiles,
        );
        let routes = generator
            .generate_routes()
            .map_err(|error| RouterRunnerError::Router { error })?;

        ResultWriter::write(
            self.data_destination.clone(),
            RouteResponse {
                routes,
                origin: self.start,
                destination: self.finish,
            },
        )
        .map_err(|error| RouterRunnerError::ResultWrite { error })?;
        Ok(())
    }
}

fn get_coords(name: &str, value: &str) -> Result<Coordinate, RouterRunnerError> {
    let mut parts = value.split(",");
    let lat = parts
        .next()
        .ok_or_else(|| RouterRunnerError::Coords {
            name: format!("{name} LAT"),
            cause: "missing".to_string(),
            error: None,
        })?
        .trim()
        .parse()
        .map_err(|error| RouterRunnerError::Coords {
            name: format!("{name} LAT"),
            cause: "not parsable as f64".to_string(),
            error: Some(error),
        })?;
    let lon = parts
        .next()
        .ok_or_else(|| RouterRunnerError::Coords {
            name: format!("{name} LON"),
            cause: "missing".to_string(),
            error: None,
        })?
        .trim()
        .parse()
        .map_err(|error| RouterRunnerError::Coords {
            name: format!("{name} LON"),
            cause: "not parsable as f64".to_string(),
            error: Some(error),
        })?;
    Ok(Coordinate { lat, lon })
}

fn get_data_source(file: PathBuf) -> Result<DataSource, RouterRunnerError> {
    if let Some(ext) = file.extension() {
        if ext == "json" {
            return Ok(DataSource::JsonFile { file });
        }
    }
    Err(RouterRunnerError::InputFileFormatIncorrect { filename: file })
}

fn get_data_destination(output: Option<PathBuf>) -> Result<DataDestination, RouterRunnerError> {
    if let Some(output) = output {
        if let Some(ext) = output.extension() {
            if ext == "json" {
                return Ok(DataDestination::Json { file: output });
            } else if ext == "gpx" {
                return Ok(DataDestination::Gpx { file: output });
            }
        }
        return Err(RouterRunnerError::OutputFileFormatIncorrect { filename: output });
    }

    Ok(DataDestination::Stdout)
}
