use crate::error::SearchError;
use crate::node::{Cost, Distance, Node};
use crate::{NEIGHBOUR_ORDER, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;
use std::str::FromStr;

/// One of the four cardinal neighbours of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Column and row offset of the neighbour on this side.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Side::Top => (0, -1),
            Side::Right => (1, 0),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
        }
    }

    pub fn of(self, point: &Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx, point.y + dy)
    }
}

/// Rectangular, row-major arrangement of [Node]s. Points use `x` for the column and `y` for the
/// row, so the top neighbour of a cell has a smaller `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C = u32> {
    width: usize,
    height: usize,
    nodes: Vec<Node<C>>,
}

impl<C: Cost> Grid<C> {
    /// A grid of open cells that all cost `cost` to enter.
    pub fn new(width: usize, height: usize, cost: C) -> Result<Self, SearchError> {
        if width == 0 || height == 0 {
            return Err(SearchError::InvalidGrid {
                reason: "grid has no cells",
            });
        }
        let len = width.checked_mul(height).ok_or(SearchError::InvalidGrid {
            reason: "grid size overflows",
        })?;
        Ok(Grid {
            width,
            height,
            nodes: vec![Node::open(cost); len],
        })
    }

    /// Builds a grid from rows of nodes, top row first. Rows must be non-empty and of equal
    /// length.
    pub fn from_rows(rows: Vec<Vec<Node<C>>>) -> Result<Self, SearchError> {
        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            Some(_) => {
                return Err(SearchError::InvalidGrid {
                    reason: "first row is empty",
                })
            }
            None => {
                return Err(SearchError::InvalidGrid {
                    reason: "grid has no rows",
                })
            }
        };
        if rows.iter().any(|row| row.len() != width) {
            return Err(SearchError::InvalidGrid {
                reason: "rows have unequal lengths",
            });
        }
        let height = rows.len();
        Ok(Grid {
            width,
            height,
            nodes: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        self.index_of(point).is_some()
    }

    /// Row-major scan index of a point, if it lies in the grid.
    pub fn index_of(&self, point: &Point) -> Option<usize> {
        scan_index(self.width, self.height, point)
    }

    pub fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub(crate) fn checked_index(&self, point: &Point) -> Result<usize, SearchError> {
        self.index_of(point)
            .ok_or(SearchError::NodeNotInGrid { point: *point })
    }

    pub fn node(&self, point: &Point) -> Option<&Node<C>> {
        self.index_of(point).map(|ix| &self.nodes[ix])
    }

    pub fn node_mut(&mut self, point: &Point) -> Option<&mut Node<C>> {
        self.index_of(point).map(move |ix| &mut self.nodes[ix])
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node<C> {
        &self.nodes[index]
    }

    pub(crate) fn node_at_mut(&mut self, index: usize) -> &mut Node<C> {
        &mut self.nodes[index]
    }

    /// All cells in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = (Point, &Node<C>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(ix, node)| (self.point_of(ix), node))
    }

    pub fn set_wall(&mut self, point: &Point, is_wall: bool) -> Result<(), SearchError> {
        let ix = self.checked_index(point)?;
        self.nodes[ix].is_wall = is_wall;
        Ok(())
    }

    pub fn set_cost(&mut self, point: &Point, cost: C) -> Result<(), SearchError> {
        let ix = self.checked_index(point)?;
        self.nodes[ix].cost = cost;
        Ok(())
    }

    pub fn set_distance(&mut self, point: &Point, distance: Distance<C>) -> Result<(), SearchError> {
        let ix = self.checked_index(point)?;
        self.nodes[ix].distance = distance;
        Ok(())
    }

    /// Puts the grid into the state a search expects: every distance infinite except the start,
    /// no predecessors and nothing visited. Costs and walls are kept.
    pub fn reset(&mut self, start: &Point) -> Result<(), SearchError> {
        let start_ix = self.checked_index(start)?;
        self.nodes.iter_mut().for_each(Node::clear);
        self.nodes[start_ix].distance = Distance::zero();
        Ok(())
    }

    /// In-bounds cardinal neighbours of a point in [NEIGHBOUR_ORDER].
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEIGHBOUR_ORDER
            .iter()
            .map(|side| side.of(point))
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// Neighbours a search may relax into: in bounds, not a wall and not yet visited.
    pub fn open_neighbours(&self, point: &Point) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        self.neighborhood_points(point)
            .iter()
            .filter_map(|p| self.index_of(p))
            .filter(|&ix| {
                let node = &self.nodes[ix];
                !node.is_wall && !node.is_visited
            })
            .collect()
    }
}

/// Row-major index of `point` in a `width` by `height` grid, if it lies inside.
pub(crate) fn scan_index(width: usize, height: usize, point: &Point) -> Option<usize> {
    let in_bounds = point.x >= 0
        && point.y >= 0
        && (point.x as usize) < width
        && (point.y as usize) < height;
    in_bounds.then(|| point.y as usize * width + point.x as usize)
}

impl<C: Cost> FromStr for Grid<C> {
    type Err = SearchError;

    /// Parses one row per line: `#` is a wall, `.` an open cell of cost 1 and a digit an open
    /// cell of that cost. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, tile)| parse_tile(tile).ok_or(SearchError::InvalidTile { row, col, tile }))
                    .collect::<Result<Vec<Node<C>>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

fn parse_tile<C: Cost>(tile: char) -> Option<Node<C>> {
    match tile {
        '#' => Some(Node::wall()),
        '.' => Some(Node::open(C::one())),
        _ => tile
            .to_digit(10)
            .and_then(num_traits::cast::<u32, C>)
            .map(Node::open),
    }
}

fn render_tile<C: Cost>(node: &Node<C>) -> char {
    if node.is_wall {
        return '#';
    }
    match node.cost.to_u32() {
        Some(1) => '.',
        Some(c) if c <= 9 => char::from_digit(c, 10).unwrap_or('+'),
        _ => '+',
    }
}

impl<C: Cost> fmt::Display for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.width) {
            let line = row.iter().map(render_tile).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
