use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;

use crate::direction::Direction;
use crate::grid::{Coordinate, Grid};
use crate::mapper::{admissible, FloodLevel};

/// Every single hop the survey is allowed to take on a grid, as a directed
/// graph with one node per cell. Nodes are indexed row-major.
pub struct AccessGraph {
    graph: DiGraph<(), (), usize>,
    size: (usize, usize),
}

pub fn access_graph(grid: &Grid, flood_level: FloodLevel) -> AccessGraph {
    let size = grid.size();
    let (_, columns) = size;

    let mut graph = DiGraph::<(), (), usize>::default();
    for _ in grid.cells() {
        graph.add_node(());
    }

    for (pos, from) in grid.cells() {
        for direction in Direction::all_directions() {
            let Some(new_pos) = direction.offset_pos(pos, size) else {
                continue;
            };
            let Some(to) = grid.get(new_pos) else {
                continue;
            };
            // Marked cells are never expanded, so they have no outgoing hops.
            if admissible(to, from, flood_level) {
                graph.add_edge(
                    NodeIndex::new(pos.row * columns + pos.column),
                    NodeIndex::new(new_pos.row * columns + new_pos.column),
                    (),
                );
            }
        }
    }

    AccessGraph { graph, size }
}

impl AccessGraph {
    /// Cells reachable from `start` by admissible hops, `start` excluded.
    pub fn reachable_from(&self, start: Coordinate) -> BTreeSet<Coordinate> {
        let (rows, columns) = self.size;
        let mut reachable = BTreeSet::new();
        if start.row >= rows || start.column >= columns {
            return reachable;
        }

        let start_i = NodeIndex::new(start.row * columns + start.column);
        let mut bfs = Bfs::new(&self.graph, start_i);
        while let Some(node) = bfs.next(&self.graph) {
            if node != start_i {
                let i = node.index();
                reachable.insert(Coordinate::new(i / columns, i % columns));
            }
        }
        reachable
    }
}
