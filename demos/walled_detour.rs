use grid_search::{Grid, GridSearch};
use grid_util::point::Point;

// In this example a path is found on a 5x4 weighted grid with shape
//  _____
// |S..#.|
// |.9.#.|
// |.2...|
// |...#F|
//  _____
// where
// - # marks a wall
// - digits mark cells that are more expensive to enter
// - S marks the start
// - F marks the finish
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut grid: Grid = "...#.\n.9.#.\n.2...\n...#.".parse().unwrap();
    let start = Point::new(0, 0);
    let finish = Point::new(4, 3);
    grid.set_cost(&start, 0).unwrap();
    grid.reset(&start).unwrap();
    print!("{}", grid);

    let search = GridSearch::new();
    let exploration = search.run(&mut grid, start, finish).unwrap();
    println!(
        "Visited {} nodes, ended {:?}",
        exploration.visited_in_order.len(),
        exploration.termination
    );
    match GridSearch::reconstruct_path(&grid, finish).unwrap() {
        Some(mut path) => {
            path.reverse();
            println!("Path of cost {}:", exploration.finish_distance);
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("No path"),
    }
}
