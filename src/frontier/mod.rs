//! The set of nodes a search has not finalized yet.
//!
//! Every implementation pops in the same order, the order of a list that is stably re-sorted
//! by distance after each processed node:
//!
//! - smallest distance first;
//! - initially, equal distances pop in row-major order;
//! - a node whose distance is lowered queues behind every node already at its new distance;
//! - nodes lowered by the same processed node keep their previous relative order.
//!
//! [ArrivalOrder] tracks the resulting tie-break key, so the visited order of a search is the
//! same no matter which frontier backs it.
use crate::grid::Grid;
use crate::node::{Cost, Distance};

pub mod heap;
pub mod scan;

pub use heap::HeapFrontier;
pub use scan::ScanFrontier;

/// A distance lowered while processing one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relaxation<C> {
    pub index: usize,
    pub previous: Distance<C>,
    pub distance: Distance<C>,
}

pub trait Frontier<C: Cost> {
    /// Seeds the frontier with every node of the grid, walls included.
    fn from_grid(grid: &Grid<C>) -> Self;

    /// Removes and returns the scan index of the next node that has not been popped yet.
    /// Distances are read from the grid.
    fn pop_min(&mut self, grid: &Grid<C>) -> Option<usize>;

    /// Records every distance lowered while processing one node. The grid already holds the
    /// new distances.
    fn lowered(&mut self, round: &mut [Relaxation<C>]);
}

/// Tie-break key between nodes at equal distance: lower arrival pops first.
#[derive(Clone, Debug)]
pub struct ArrivalOrder {
    arrival: Vec<usize>,
    next: usize,
}

impl ArrivalOrder {
    /// Arrivals start out as the scan indices.
    pub fn new(len: usize) -> ArrivalOrder {
        ArrivalOrder {
            arrival: (0..len).collect(),
            next: len,
        }
    }

    pub fn arrival(&self, index: usize) -> usize {
        self.arrival[index]
    }

    /// Gives every lowered node a fresh arrival, later than all existing ones. Within the round
    /// the previous `(distance, arrival)` order is kept. The round is left sorted in that order.
    pub fn stamp<C: Cost>(&mut self, round: &mut [Relaxation<C>]) {
        round.sort_by_key(|r| (r.previous, self.arrival[r.index]));
        for relaxation in round.iter() {
            self.arrival[relaxation.index] = self.next;
            self.next += 1;
        }
    }
}
