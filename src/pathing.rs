use itertools::Itertools;
use petgraph::{
    algo::{connected_components, is_cyclic_undirected},
    graph::{NodeIndex, UnGraph},
};
use smallvec::SmallVec;

use crate::cells::Cell;
use crate::maze::Maze;
use crate::utils::{self, FnvHashMap};

/// Breadth first flood fill distances from a start cell, following open passages.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl Distances {
    /// `None` if `start` is not a cell of the maze.
    pub fn new(maze: &Maze, start: Cell) -> Option<Distances> {

        if !maze.dimensions().contains(start) {
            return None;
        }

        let mut max: u32 = 0;
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start, 0);

        // Every passage costs one step, so the first time a cell is reached is
        // its shortest distance. The distances map doubles as the visited set.
        let mut frontier = vec![start];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell in &frontier {
                let distance_to_cell = distances[cell];
                max = max.max(distance_to_cell);

                for link in maze.links(*cell) {
                    if !distances.contains_key(&link) {
                        distances.insert(link, distance_to_cell + 1);
                        new_frontier.push(link);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// `None` for cells unreachable from the start or outside the maze.
    #[inline(always)]
    pub fn distance_from_start_to(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// All cells at the maximum distance, in row major order.
    pub fn furthest_cells(&self) -> SmallVec<[Cell; 8]> {
        self.distances
            .iter()
            .filter(|&(_, d)| *d == self.max_distance)
            .map(|(cell, _)| *cell)
            .sorted()
            .collect()
    }
}

/// Walk back from `end` to the start of `distances`, always stepping to the
/// linked neighbour closest to the start. The returned path runs start to end.
///
/// `None` if `end` is unreachable.
pub fn shortest_path(maze: &Maze, distances_from_start: &Distances, end: Cell) -> Option<Vec<Cell>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end)?;
    let mut path = vec![end];
    let start = distances_from_start.start();
    let mut current = end;

    while current != start {
        let closest = maze.links(current)
            .iter()
            .filter_map(|link| distances_from_start.distance_from_start_to(*link).map(|d| (*link, d)))
            .min_by_key(|&(_, d)| d);

        match closest {
            Some((closer, closer_distance)) if closer_distance < current_distance => {
                current = closer;
                current_distance = closer_distance;
                path.push(current);
            }
            // No progress towards the start, the distances do not belong to this maze.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// Path between the first cell (ball) and the last cell (goal).
pub fn solution(maze: &Maze) -> Option<Vec<Cell>> {
    let distances = Distances::new(maze, maze.first_cell())?;
    shortest_path(maze, &distances, maze.last_cell())
}

/// The maze as an undirected graph: one node per cell in row major order, one
/// edge per open passage.
pub fn passage_graph(maze: &Maze) -> UnGraph<Cell, ()> {
    let columns = maze.columns();
    let mut graph = UnGraph::with_capacity(maze.size(), maze.passages_count());
    for cell in maze.dimensions().iter() {
        let _ = graph.add_node(cell);
    }
    for (a, b) in maze.iter_passages() {
        let _ = graph.add_edge(NodeIndex::new(a.row_major_index(columns)),
                               NodeIndex::new(b.row_major_index(columns)),
                               ());
    }
    graph
}

/// A perfect maze: connected, no cycles, so exactly one route between any two cells.
pub fn is_spanning_tree(maze: &Maze) -> bool {
    let graph = passage_graph(maze);
    graph.edge_count() + 1 == graph.node_count() &&
    connected_components(&graph) == 1 &&
    !is_cyclic_undirected(&graph)
}
