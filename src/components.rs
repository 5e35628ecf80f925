use crate::grid::{scan_index, Grid, Side};
use crate::node::Cost;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Connected components of the open cells of a [Grid] under 4-connectivity, kept in a
/// [UnionFind] so reachability can be answered without running a search.
#[derive(Clone, Debug)]
pub struct Components {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    components: UnionFind<usize>,
}

impl Components {
    /// Links every open cell to its open right and bottom neighbours.
    pub fn new<C: Cost>(grid: &Grid<C>) -> Components {
        info!("Generating connected components");
        let mut components = UnionFind::new(grid.len());
        let walls = grid
            .nodes()
            .map(|(_, node)| node.is_wall())
            .collect::<Vec<bool>>();
        for (parent_ix, (point, _)) in grid.nodes().enumerate() {
            if walls[parent_ix] {
                continue;
            }
            [Side::Right, Side::Bottom]
                .iter()
                .filter_map(|side| grid.index_of(&side.of(&point)))
                .filter(|&ix| !walls[ix])
                .for_each(|ix| {
                    components.union(parent_ix, ix);
                });
        }
        Components {
            width: grid.width(),
            height: grid.height(),
            walls,
            components,
        }
    }

    fn open_index(&self, point: &Point) -> Option<usize> {
        scan_index(self.width, self.height, point).filter(|&ix| !self.walls[ix])
    }

    /// Retrieves the component id a given open [Point] belongs to.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.open_index(point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.open_index(start), self.open_index(goal)) {
            (Some(start_ix), Some(goal_ix)) => self.components.equiv(start_ix, goal_ix),
            _ => false,
        }
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}
