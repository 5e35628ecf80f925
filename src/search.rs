use crate::error::SearchError;
use crate::frontier::{Frontier, HeapFrontier, Relaxation};
use crate::grid::Grid;
use crate::node::{Cost, Distance, Node};
use crate::N_SMALLVEC_SIZE;
use grid_util::point::Point;
use log::{debug, trace, warn};
use smallvec::SmallVec;

/// How a call to [GridSearch::run] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The finish was popped from the frontier.
    ReachedFinish,
    /// The next node on the frontier had infinite distance: nothing left is reachable.
    Trapped,
    /// Every node was popped without either of the above.
    Exhausted,
}

/// Result of a search: the processed nodes in the order they were finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration<C = u32> {
    pub visited_in_order: Vec<Point>,
    pub termination: Termination,
    /// Distance of the finish when the search stopped. Infinite means it was never reached.
    pub finish_distance: Distance<C>,
}

impl<C: Cost> Exploration<C> {
    pub fn reached_finish(&self) -> bool {
        self.finish_distance.is_finite()
    }

    pub fn is_trapped(&self) -> bool {
        self.termination == Termination::Trapped
    }
}

/// Dijkstra relaxation search over a [Grid] where entering a cell costs that cell's
/// [cost](Node::cost).
#[derive(Clone, Debug)]
pub struct GridSearch {
    /// Stop as soon as the finish is popped. When disabled the search finalizes every node
    /// reachable from the start.
    pub early_exit: bool,
}

impl Default for GridSearch {
    fn default() -> Self {
        GridSearch::new()
    }
}

impl GridSearch {
    pub fn new() -> GridSearch {
        GridSearch { early_exit: true }
    }

    /// Runs the search from `start` towards `finish` with a [HeapFrontier].
    ///
    /// The start must already carry distance zero and every other node an infinite distance,
    /// see [Grid::reset]. Distances, predecessors and visited flags are updated in place.
    pub fn run<C: Cost>(
        &self,
        grid: &mut Grid<C>,
        start: Point,
        finish: Point,
    ) -> Result<Exploration<C>, SearchError> {
        self.run_with::<HeapFrontier<C>, C>(grid, start, finish)
    }

    /// Same as [run](Self::run) with a chosen [Frontier]. All frontiers produce the same visited
    /// order.
    pub fn run_with<F, C>(
        &self,
        grid: &mut Grid<C>,
        start: Point,
        finish: Point,
    ) -> Result<Exploration<C>, SearchError>
    where
        F: Frontier<C>,
        C: Cost,
    {
        let start_ix = grid.checked_index(&start)?;
        let finish_ix = grid.checked_index(&finish)?;
        if grid.node_at(start_ix).distance().is_infinite() {
            warn!("Start {} has infinite distance, was the grid reset?", start);
        }
        debug!("Searching from {} to {}", start, finish);

        let mut frontier = F::from_grid(grid);
        let mut visited_in_order = Vec::new();
        let termination = loop {
            let Some(ix) = frontier.pop_min(grid) else {
                break Termination::Exhausted;
            };
            let node = grid.node_at(ix);
            if node.is_wall() {
                continue;
            }
            let distance = node.distance();
            if distance.is_infinite() {
                break Termination::Trapped;
            }
            if self.early_exit && ix == finish_ix {
                break Termination::ReachedFinish;
            }

            let point = grid.point_of(ix);
            grid.node_at_mut(ix).is_visited = true;
            visited_in_order.push(point);
            trace!("Visiting {} at distance {}", point, distance);

            let mut round: SmallVec<[Relaxation<C>; N_SMALLVEC_SIZE]> = SmallVec::new();
            for neighbour_ix in grid.open_neighbours(&point) {
                let neighbour = grid.node_at_mut(neighbour_ix);
                let relaxed = distance.step(neighbour.cost);
                if relaxed < neighbour.distance {
                    round.push(Relaxation {
                        index: neighbour_ix,
                        previous: neighbour.distance,
                        distance: relaxed,
                    });
                    neighbour.distance = relaxed;
                    neighbour.predecessor = Some(point);
                }
            }
            if !round.is_empty() {
                frontier.lowered(&mut round);
            }
        };

        let finish_distance = grid.node_at(finish_ix).distance();
        debug!(
            "Search ended {:?} after visiting {} nodes, finish distance {}",
            termination,
            visited_in_order.len(),
            finish_distance
        );
        Ok(Exploration {
            visited_in_order,
            termination,
            finish_distance,
        })
    }

    /// Follows predecessor links back from `finish` after a [run](Self::run). The path is
    /// returned finish first and ends at the start. Returns [None] if the finish was never
    /// reached.
    pub fn reconstruct_path<C: Cost>(
        grid: &Grid<C>,
        finish: Point,
    ) -> Result<Option<Vec<Point>>, SearchError> {
        let finish_ix = grid.checked_index(&finish)?;
        if grid.node_at(finish_ix).distance().is_infinite() {
            return Ok(None);
        }
        let path = std::iter::successors(Some(finish), |point| {
            grid.node(point).and_then(Node::predecessor)
        })
        .take(grid.len())
        .collect();
        Ok(Some(path))
    }
}
