use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::map_data::graph::{MapDataGraph, MapDataPointId};
use crate::map_data::line::MapDataLine;

use super::route::segment::Segment;
use super::route::Route;
use super::weights::LineWeight;

#[derive(Debug, PartialEq)]
pub enum NavigationResult {
    Route(Route),
    NoRoute,
}

#[derive(Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    point: MapDataPointId,
    osm_id: u64,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); cost ties settle
// the lower original node id first so searches are reproducible.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.osm_id.cmp(&self.osm_id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest path over one criterion's line costs. All search
/// state is local to the call; concurrent searches share the graph read-only.
pub struct Navigator<'a> {
    map_data: &'a MapDataGraph,
    from: MapDataPointId,
    to: MapDataPointId,
}

impl<'a> Navigator<'a> {
    pub fn new(map_data: &'a MapDataGraph, from: MapDataPointId, to: MapDataPointId) -> Self {
        Self { map_data, from, to }
    }

    pub fn find_route<F>(&self, line_weight: F) -> NavigationResult
    where
        F: Fn(&MapDataLine) -> LineWeight,
    {
        let mut distances: HashMap<MapDataPointId, f64> = HashMap::new();
        let mut predecessors: HashMap<MapDataPointId, (MapDataPointId, Segment)> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        distances.insert(self.from, 0.0);
        frontier.push(State {
            cost: 0.0,
            point: self.from,
            osm_id: self.map_data.point(self.from).id,
        });

        while let Some(State { cost, point, .. }) = frontier.pop() {
            if distances.get(&point).is_some_and(|best| cost > *best) {
                continue;
            }
            if point == self.to {
                trace!(cost, "destination settled");
                return NavigationResult::Route(self.reconstruct(&predecessors));
            }

            for (line_id, next) in self.map_data.get_adjacent(point) {
                let line = self.map_data.line(line_id);
                let step_cost = match line_weight(line) {
                    LineWeight::Impassable => continue,
                    LineWeight::Passable(step_cost) => step_cost,
                };
                let next_cost = cost + step_cost;
                if distances.get(&next).map_or(true, |best| next_cost < *best) {
                    distances.insert(next, next_cost);
                    predecessors.insert(next, (point, Segment::new(line_id, next)));
                    frontier.push(State {
                        cost: next_cost,
                        point: next,
                        osm_id: self.map_data.point(next).id,
                    });
                }
            }
        }

        NavigationResult::NoRoute
    }

    fn reconstruct(
        &self,
        predecessors: &HashMap<MapDataPointId, (MapDataPointId, Segment)>,
    ) -> Route {
        let mut segments = Vec::new();
        let mut current = self.to;
        while current != self.from {
            let (prev, segment) = predecessors[&current];
            segments.push(segment);
            current = prev;
        }
        let mut route = Route::new(self.from);
        for segment in segments.into_iter().rev() {
            route.add_segment(segment);
        }
        route
    }
}
