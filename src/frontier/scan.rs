use itertools::Itertools;

use crate::frontier::{ArrivalOrder, Frontier, Relaxation};
use crate::grid::Grid;
use crate::node::Cost;

/// Keeps the unpopped scan indices in a plain list and scans it for the minimum on every pop.
/// Quadratic in the number of nodes, but needs no heap bookkeeping on relaxation.
#[derive(Clone, Debug)]
pub struct ScanFrontier {
    remaining: Vec<usize>,
    order: ArrivalOrder,
}

impl<C: Cost> Frontier<C> for ScanFrontier {
    fn from_grid(grid: &Grid<C>) -> Self {
        ScanFrontier {
            remaining: (0..grid.len()).collect(),
            order: ArrivalOrder::new(grid.len()),
        }
    }

    fn pop_min(&mut self, grid: &Grid<C>) -> Option<usize> {
        let order = &self.order;
        let position = self
            .remaining
            .iter()
            .position_min_by_key(|&&ix| (grid.node_at(ix).distance(), order.arrival(ix)))?;
        // Arrivals are unique, so order in the list does not matter
        Some(self.remaining.swap_remove(position))
    }

    fn lowered(&mut self, round: &mut [Relaxation<C>]) {
        self.order.stamp(round);
    }
}
