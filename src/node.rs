use core::fmt;
use grid_util::point::Point;
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Entry cost of a cell. Restricted to unsigned integers so that negative weights cannot be
/// expressed.
pub trait Cost: PrimInt + Unsigned + Debug {}

impl<T: PrimInt + Unsigned + Debug> Cost for T {}

/// Best known distance from the start. Every finite value orders below [Distance::Infinite].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<C> {
    Finite(C),
    Infinite,
}

impl<C: Cost> Distance<C> {
    pub fn zero() -> Self {
        Distance::Finite(C::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    pub fn finite(&self) -> Option<C> {
        match self {
            Distance::Finite(c) => Some(*c),
            Distance::Infinite => None,
        }
    }

    /// Distance after entering a cell of the given cost. Overflow saturates to
    /// [Distance::Infinite].
    pub fn step(&self, cost: C) -> Self {
        match self {
            Distance::Finite(d) => d
                .checked_add(&cost)
                .map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<C: Cost> Default for Distance<C> {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl<C: Cost> fmt::Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{:?}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// A single grid cell. Its identity is its position in the owning [Grid](crate::Grid); the
/// record itself only carries search state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<C = u32> {
    pub(crate) distance: Distance<C>,
    pub(crate) cost: C,
    pub(crate) predecessor: Option<Point>,
    pub(crate) is_wall: bool,
    pub(crate) is_visited: bool,
}

impl<C: Cost> Node<C> {
    /// A passable cell that costs `cost` to enter.
    pub fn open(cost: C) -> Self {
        Node {
            distance: Distance::Infinite,
            cost,
            predecessor: None,
            is_wall: false,
            is_visited: false,
        }
    }

    /// An impassable cell. Its cost is never read.
    pub fn wall() -> Self {
        Node {
            is_wall: true,
            ..Node::open(C::one())
        }
    }

    pub fn distance(&self) -> Distance<C> {
        self.distance
    }
    pub fn cost(&self) -> C {
        self.cost
    }
    /// The cell the best known path to this node arrives from.
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    /// Set once the search has finalized this node's distance.
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }

    /// Clears search state, keeping cost and wall flag.
    pub(crate) fn clear(&mut self) {
        self.distance = Distance::Infinite;
        self.predecessor = None;
        self.is_visited = false;
    }
}
