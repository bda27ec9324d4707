use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::map_data::graph::{MapDataGraph, MapDataPointId};

use super::alerts::{generate_alerts, summarize_alerts, Alert};
use super::navigator::{NavigationResult, Navigator};
use super::profile::{CriteriaProfiles, RouteCriterion};
use super::weights::calc_line_weight;
use super::{RouterError, VehicleSpec};

/// One resolved route, in the shape the transport layer serializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAlternative {
    #[serde(rename = "type")]
    pub criterion: RouteCriterion,
    pub distance_km: f64,
    /// Ordered (lon, lat) pairs.
    pub geometry: Vec<(f64, f64)>,
    pub alerts: Vec<Alert>,
    pub summary: String,
}

/// Runs the per-criterion search and alert pipelines over one shared,
/// read-only graph and collects whatever succeeds.
pub struct Generator<'a> {
    map_data: &'a MapDataGraph,
    from: MapDataPointId,
    to: MapDataPointId,
    vehicle: Option<VehicleSpec>,
    profiles: &'a CriteriaProfiles,
}

impl<'a> Generator<'a> {
    pub fn new(
        map_data: &'a MapDataGraph,
        from: MapDataPointId,
        to: MapDataPointId,
        vehicle: Option<VehicleSpec>,
        profiles: &'a CriteriaProfiles,
    ) -> Self {
        Self {
            map_data,
            from,
            to,
            vehicle,
            profiles,
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn generate_routes(&self) -> Result<Vec<RouteAlternative>, RouterError> {
        if self.map_data.is_empty() {
            return Err(RouterError::EmptyGraph);
        }

        let criteria = self.profiles.applicable(self.vehicle.as_ref());
        let routes = criteria
            .par_iter()
            .filter_map(|criterion| self.generate_route(*criterion))
            .collect::<Vec<_>>();

        if routes.is_empty() {
            return Err(RouterError::NoRoutesFound);
        }
        info!(
            requested = criteria.len(),
            resolved = routes.len(),
            "route generation done"
        );
        Ok(routes)
    }

    fn generate_route(&self, criterion: RouteCriterion) -> Option<RouteAlternative> {
        let profile = self.profiles.get(criterion);
        let vehicle = self.vehicle.as_ref();
        let navigator = Navigator::new(self.map_data, self.from, self.to);

        let route = match navigator.find_route(|line| calc_line_weight(line, profile, vehicle)) {
            NavigationResult::NoRoute => {
                debug!(criterion = %criterion, "no route for criterion");
                return None;
            }
            NavigationResult::Route(route) => route,
        };

        let alerts = generate_alerts(self.map_data, &route, vehicle);
        let summary = summarize_alerts(&alerts);
        let distance_km = (route.total_len_m(self.map_data) / 10.0).round() / 100.0;
        let geometry = route
            .geometry(self.map_data)
            .into_iter()
            .map(|(lat, lon)| (lon, lat))
            .collect();

        Some(RouteAlternative {
            criterion,
            distance_km,
            geometry,
            alerts,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_data::osm::OsmWay;
    use crate::router::alerts::{AlertLevel, NO_WARNINGS_SUMMARY};
    use crate::router::profile::CriteriaProfiles;
    use crate::router::{VehicleSpec, VehicleType};
    use crate::test_utils::{
        detour_graph, graph_from_data, osm_tags, point_by_osm_id, single_road_graph, test_dataset_1,
    };

    fn car() -> VehicleSpec {
        VehicleSpec {
            vehicle_type: VehicleType::Car,
            height: None,
            weight: None,
        }
    }

    fn truck() -> VehicleSpec {
        VehicleSpec {
            vehicle_type: VehicleType::Truck,
            height: Some(4.2),
            weight: Some(12.0),
        }
    }

    #[test]
    fn clean_road_yields_three_clear_routes() {
        let graph = single_road_graph(&[
            ("highway", "primary"),
            ("surface", "asphalt"),
            ("lit", "yes"),
        ]);
        let from = point_by_osm_id(&graph, 101);
        let to = point_by_osm_id(&graph, 102);
        let profiles = CriteriaProfiles::default();

        let routes = Generator::new(&graph, from, to, Some(car()), &profiles)
            .generate_routes()
            .expect("routes to resolve");

        assert_eq!(routes.len(), 3);
        for route in &routes {
            assert!((route.distance_km - 10.0).abs() < 0.05);
            assert!(route.alerts.is_empty());
            assert_eq!(route.summary, NO_WARNINGS_SUMMARY);
            assert_eq!(route.geometry.first(), Some(&(25.0, 57.0)));
        }
        assert_eq!(routes[0].criterion, RouteCriterion::Fastest);
        assert_eq!(routes[1].criterion, RouteCriterion::BestSurface);
        assert_eq!(routes[2].criterion, RouteCriterion::Safest);
    }

    #[test]
    fn mud_road_carries_the_critical_alert_on_every_criterion() {
        let graph = single_road_graph(&[("highway", "primary"), ("surface", "mud")]);
        let from = point_by_osm_id(&graph, 101);
        let to = point_by_osm_id(&graph, 102);
        let profiles = CriteriaProfiles::default();

        let routes = Generator::new(&graph, from, to, Some(car()), &profiles)
            .generate_routes()
            .expect("routes to resolve");

        assert_eq!(routes.len(), 3);
        for route in &routes {
            // alerts reflect the edge itself, not the criterion that chose it
            assert_eq!(route.alerts.len(), 1);
            assert_eq!(route.alerts[0].level, AlertLevel::Critical);
            assert_eq!(route.summary, "1 critical alert(s)");
        }
    }

    #[test]
    fn truck_routes_around_a_height_limit_cars_do_not() {
        let graph = detour_graph(
            &[("highway", "primary"), ("maxheight", "4.0")],
            &[("highway", "primary")],
        );
        let from = point_by_osm_id(&graph, 1);
        let to = point_by_osm_id(&graph, 2);
        let profiles = CriteriaProfiles::default();

        let routes = Generator::new(&graph, from, to, Some(truck()), &profiles)
            .generate_routes()
            .expect("routes to resolve");
        assert_eq!(routes.len(), 4);

        let truck_route = routes
            .iter()
            .find(|route| route.criterion == RouteCriterion::TruckCompatible)
            .expect("truck route to resolve");
        let fastest_route = routes
            .iter()
            .find(|route| route.criterion == RouteCriterion::Fastest)
            .expect("fastest route to resolve");
        // the restricted direct line is shorter; only the truck criterion
        // must detour around it
        assert!(truck_route.distance_km > fastest_route.distance_km);
    }

    #[test]
    fn truck_with_no_legal_line_omits_only_that_criterion() {
        let graph = single_road_graph(&[("highway", "primary"), ("maxheight", "4.0")]);
        let from = point_by_osm_id(&graph, 101);
        let to = point_by_osm_id(&graph, 102);
        let profiles = CriteriaProfiles::default();

        let routes = Generator::new(&graph, from, to, Some(truck()), &profiles)
            .generate_routes()
            .expect("unrestricted criteria still resolve");
        assert_eq!(routes.len(), 3);
        assert!(routes
            .iter()
            .all(|route| route.criterion != RouteCriterion::TruckCompatible));
    }

    #[test]
    fn disconnected_endpoints_fail_with_no_routes_found() {
        let (nodes, ways) = test_dataset_1();
        let graph = graph_from_data(nodes, ways);
        let from = point_by_osm_id(&graph, 1);
        let to = point_by_osm_id(&graph, 11);
        let profiles = CriteriaProfiles::default();

        let result = Generator::new(&graph, from, to, None, &profiles).generate_routes();
        assert_eq!(result, Err(RouterError::NoRoutesFound));
    }

    #[test]
    fn empty_graph_is_a_hard_failure() {
        let graph = graph_from_data(Vec::new(), Vec::new());
        let profiles = CriteriaProfiles::default();
        // ids cannot exist in an empty graph; resolve them on a throwaway
        let filled = single_road_graph(&[("highway", "primary")]);
        let from = point_by_osm_id(&filled, 101);
        let to = point_by_osm_id(&filled, 102);

        let result = Generator::new(&graph, from, to, None, &profiles).generate_routes();
        assert_eq!(result, Err(RouterError::EmptyGraph));
    }

    #[test]
    fn safest_route_is_no_less_safe_than_fastest_under_safety_weights() {
        // grid with an unlit shortcut and a lit detour
        let nodes = vec![
            crate::map_data::osm::OsmNode {
                id: 1,
                lat: 57.0,
                lon: 25.0,
            },
            crate::map_data::osm::OsmNode {
                id: 2,
                lat: 57.01,
                lon: 25.0,
            },
            crate::map_data::osm::OsmNode {
                id: 3,
                lat: 57.005,
                lon: 25.005,
            },
        ];
        let ways = vec![
            OsmWay {
                id: 31,
                node_ids: vec![1, 2],
                tags: osm_tags(&[("highway", "residential"), ("lit", "no")]),
            },
            OsmWay {
                id: 32,
                node_ids: vec![1, 3],
                tags: osm_tags(&[("highway", "residential"), ("lit", "yes")]),
            },
            OsmWay {
                id: 33,
                node_ids: vec![3, 2],
                tags: osm_tags(&[("highway", "residential"), ("lit", "yes")]),
            },
        ];
        let graph = graph_from_data(nodes, ways);
        let from = point_by_osm_id(&graph, 1);
        let to = point_by_osm_id(&graph, 2);
        let profiles = CriteriaProfiles::default();

        let routes = Generator::new(&graph, from, to, None, &profiles)
            .generate_routes()
            .expect("routes to resolve");
        let fastest = routes
            .iter()
            .find(|route| route.criterion == RouteCriterion::Fastest)
            .expect("fastest route");
        let safest = routes
            .iter()
            .find(|route| route.criterion == RouteCriterion::Safest)
            .expect("safest route");

        assert!(fastest.alerts.iter().any(|a| a.message == "No street lighting"));
        assert!(safest.alerts.is_empty());
        assert!(safest.distance_km > fastest.distance_km);
    }
}
