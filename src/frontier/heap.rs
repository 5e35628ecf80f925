use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::frontier::{ArrivalOrder, Frontier, Relaxation};
use crate::grid::Grid;
use crate::node::{Cost, Distance};

struct SmallestDistanceHolder<C> {
    distance: Distance<C>,
    arrival: usize,
    index: usize,
}

impl<C: PartialEq> Eq for SmallestDistanceHolder<C> {}

impl<C: PartialEq> PartialEq for SmallestDistanceHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.distance.eq(&other.distance) && self.arrival == other.arrival
    }
}

impl<C: Ord> PartialOrd for SmallestDistanceHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestDistanceHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the smallest distance, then the
        // earliest arrival, ends up on top
        match other.distance.cmp(&self.distance) {
            Ordering::Equal => other.arrival.cmp(&self.arrival),
            s => s,
        }
    }
}

/// Binary heap with lazy decrease-key: a relaxation pushes a fresh entry and outdated entries
/// are dropped when they surface.
pub struct HeapFrontier<C> {
    to_see: BinaryHeap<SmallestDistanceHolder<C>>,
    order: ArrivalOrder,
    popped: Vec<bool>,
}

impl<C: Cost> Frontier<C> for HeapFrontier<C> {
    fn from_grid(grid: &Grid<C>) -> Self {
        let order = ArrivalOrder::new(grid.len());
        let to_see = grid
            .nodes()
            .enumerate()
            .map(|(index, (_, node))| SmallestDistanceHolder {
                distance: node.distance(),
                arrival: order.arrival(index),
                index,
            })
            .collect::<BinaryHeap<_>>();
        HeapFrontier {
            to_see,
            order,
            popped: vec![false; grid.len()],
        }
    }

    fn pop_min(&mut self, _: &Grid<C>) -> Option<usize> {
        while let Some(SmallestDistanceHolder { arrival, index, .. }) = self.to_see.pop() {
            // A node is pushed again every time it is lowered. Only the entry with its latest
            // arrival is live; it surfaces before the older, larger ones.
            if self.popped[index] || self.order.arrival(index) != arrival {
                continue;
            }
            self.popped[index] = true;
            return Some(index);
        }
        None
    }

    fn lowered(&mut self, round: &mut [Relaxation<C>]) {
        self.order.stamp(round);
        for relaxation in round.iter() {
            self.to_see.push(SmallestDistanceHolder {
                distance: relaxation.distance,
                arrival: self.order.arrival(relaxation.index),
                index: relaxation.index,
            });
        }
    }
}
