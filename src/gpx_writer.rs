use geo::Point;
use gpx::{write, Gpx, GpxVersion, Route as GpxRoute, Waypoint};
use std::{fs::File, io::Error, path::PathBuf};

use crate::router::generator::RouteAlternative;

#[derive(Debug)]
pub enum GpxWriterError {
    FileCreateError { error: Error },
    GpxWriteError { error: gpx::errors::GpxError },
}

pub struct GpxWriter {
    routes: Vec<RouteAlternative>,
    file_name: PathBuf,
}

impl GpxWriter {
    pub fn new(routes: Vec<RouteAlternative>, file_name: PathBuf) -> Self {
        Self { routes, file_name }
    }

    pub fn write_gpx(self) -> Result<(), GpxWriterError> {
        let mut gpx = Gpx::default();
        gpx.version = GpxVersion::Gpx11;

        for route in self.routes {
            let mut gpx_route = GpxRoute::new();
            gpx_route.name = Some(route.criterion.to_string());

            let mut description = String::new();
            description.push_str(&format!("Length: {}km\n", route.distance_km));
            description.push_str(&format!("{}\n", route.summary));
            for alert in &route.alerts {
                description.push_str(&format!(" - {:?}: {}\n", alert.level, alert.message));
            }
            gpx_route.description = Some(description);

            for (lon, lat) in route.geometry {
                let waypoint = Waypoint::new(Point::new(lon, lat));
                gpx_route.points.push(waypoint);
            }

            gpx.routes.push(gpx_route);
        }

        let file = File::create(self.file_name)
            .map_err(|error| GpxWriterError::FileCreateError { error })?;

        write(&gpx, file).map_err(|error| GpxWriterError::GpxWriteError { error })?;

        Ok(())
    }
}
