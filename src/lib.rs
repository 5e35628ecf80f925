//! # grid_search
//!
//! Shortest paths on a 4-connected grid using
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm). Every cell
//! carries the cost of entering it, walls are impassable, and the search reports the order in
//! which it finalized cells so a front-end can animate the exploration.
//!
//! ```
//! use grid_search::{GridSearch, Grid};
//! use grid_util::point::Point;
//!
//! let mut grid: Grid = "...\n.#.\n...".parse().unwrap();
//! let (start, finish) = (Point::new(0, 0), Point::new(2, 2));
//! grid.reset(&start).unwrap();
//! let exploration = GridSearch::new().run(&mut grid, start, finish).unwrap();
//! assert!(exploration.reached_finish());
//! let path = GridSearch::reconstruct_path(&grid, finish).unwrap().unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! Visited order is deterministic: nodes pop by smallest distance, ties in the order the nodes
//! reached their current distance (row-major for untouched nodes), and neighbours are relaxed in
//! [NEIGHBOUR_ORDER].
pub mod components;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod node;
pub mod search;

pub use components::Components;
pub use error::SearchError;
pub use frontier::{Frontier, HeapFrontier, ScanFrontier};
pub use grid::{Grid, Side};
pub use node::{Cost, Distance, Node};
pub use search::{Exploration, GridSearch, Termination};

/// Order in which the neighbours of a node are relaxed. Only affects tie-breaking between
/// equally short paths, never the distances themselves.
pub const NEIGHBOUR_ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

/// Inline capacity of neighbour buffers, a cell has at most four cardinal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
