/// Fuzzes the search by checking on many random weighted grids that distances are optimal,
/// reconstructed paths are valid, both frontiers follow the order of a stably re-sorted list
/// and the trapped signal matches the connected components.
use grid_search::{Components, Distance, Grid, GridSearch, Node, ScanFrontier};
use grid_util::point::Point;
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let rows = (0..h)
        .map(|_| {
            (0..w)
                .map(|_| {
                    if rng.gen_bool(0.3) {
                        Node::wall()
                    } else {
                        Node::open(rng.gen_range(0..10))
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    let rendered = grid.to_string();
    for (y, line) in rendered.lines().enumerate() {
        for (x, tile) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("F");
            } else {
                print!("{}", tile);
            }
        }
        println!();
    }
}

/// Independent shortest distances by repeated relaxation of every cell until nothing changes.
fn relaxation_distances(grid: &Grid, start: &Point) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; grid.len()];
    dist[grid.index_of(start).unwrap()] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for (p, node) in grid.nodes() {
            if node.is_wall() {
                continue;
            }
            for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
                let q = Point::new(p.x + dx, p.y + dy);
                let Some(q_ix) = grid.index_of(&q) else {
                    continue;
                };
                let q_node = grid.node(&q).unwrap();
                if q_node.is_wall() {
                    continue;
                }
                if let Some(d) = dist[grid.index_of(&p).unwrap()] {
                    let candidate = d + q_node.cost();
                    if dist[q_ix].map_or(true, |current| candidate < current) {
                        dist[q_ix] = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
    }
    dist
}

/// Visited order of a list that holds every node and is stably re-sorted by distance after
/// each processed node.
fn resorted_visit_order(grid: &Grid, start: &Point, finish: &Point) -> Vec<Point> {
    let mut dist: Vec<Distance<u32>> = vec![Distance::Infinite; grid.len()];
    dist[grid.index_of(start).unwrap()] = Distance::Finite(0);
    let mut visited = vec![false; grid.len()];
    let finish_ix = grid.index_of(finish).unwrap();
    let mut queue: Vec<usize> = (0..grid.len()).collect();
    queue.sort_by_key(|&ix| dist[ix]);
    let mut order = Vec::new();
    while !queue.is_empty() {
        let ix = queue.remove(0);
        let p = grid.point_of(ix);
        if grid.node(&p).unwrap().is_wall() {
            continue;
        }
        if dist[ix].is_infinite() || ix == finish_ix {
            break;
        }
        visited[ix] = true;
        order.push(p);
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let q = Point::new(p.x + dx, p.y + dy);
            let Some(q_ix) = grid.index_of(&q) else {
                continue;
            };
            let q_node = grid.node(&q).unwrap();
            if q_node.is_wall() || visited[q_ix] {
                continue;
            }
            let candidate = dist[ix].step(q_node.cost());
            if candidate < dist[q_ix] {
                dist[q_ix] = candidate;
            }
        }
        queue.sort_by_key(|&ix| dist[ix]);
    }
    order
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let search = GridSearch::new();
    let exhaustive = GridSearch { early_exit: false };

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set_wall(&start, false).unwrap();
        grid.set_wall(&end, false).unwrap();
        let reachable = Components::new(&grid).reachable(&start, &end);
        let expected = relaxation_distances(&grid, &start);

        // Full exploration matches the brute-force distances everywhere
        let mut full = grid.clone();
        full.reset(&start).unwrap();
        exhaustive.run(&mut full, start, end).unwrap();
        for (ix, (p, node)) in full.nodes().enumerate() {
            let found = node.distance().finite();
            if found != expected[ix] {
                visualize_grid(&grid, &start, &end);
                println!("Mismatch at {}: {:?} vs {:?}", p, found, expected[ix]);
            }
            assert_eq!(found, expected[ix]);
        }

        let mut heap_grid = grid.clone();
        heap_grid.reset(&start).unwrap();
        let exploration = search.run(&mut heap_grid, start, end).unwrap();
        let mut scan_grid = grid.clone();
        scan_grid.reset(&start).unwrap();
        let scanned = search
            .run_with::<ScanFrontier, _>(&mut scan_grid, start, end)
            .unwrap();
        assert_eq!(exploration, scanned);
        assert_eq!(heap_grid, scan_grid);
        assert_eq!(
            exploration.visited_in_order,
            resorted_visit_order(&grid, &start, &end)
        );

        // Show the grid if the search disagrees with the components
        if exploration.reached_finish() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(exploration.reached_finish(), reachable);
        assert_eq!(exploration.is_trapped(), !reachable);
        assert!(exploration
            .visited_in_order
            .iter()
            .all(|p| !grid.node(p).unwrap().is_wall()));

        let path = GridSearch::reconstruct_path(&heap_grid, end).unwrap();
        match path {
            None => assert!(!reachable),
            Some(mut path) => {
                path.reverse();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                for (a, b) in path.iter().tuple_windows() {
                    assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
                    assert!(!grid.node(b).unwrap().is_wall());
                }
                let cost: u32 = path[1..]
                    .iter()
                    .map(|p| grid.node(p).unwrap().cost())
                    .sum();
                assert_eq!(Distance::Finite(cost), exploration.finish_distance);
                assert_eq!(Some(cost), expected[grid.index_of(&end).unwrap()]);
            }
        }
    }
}
