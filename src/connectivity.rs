use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::{Dfs, VisitMap};

use crate::board::Board;
use crate::location::Location;
use crate::shape::SquareStep;

/// The letters of a [`Board`], partitioned into groups of orthogonally adjacent cells.
///
/// Groups are ordered by their first cell in row-major order. The order of locations within a group is unspecified.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Components {
    groups: Vec<Vec<Location>>,
}

impl Components {
    /// Every group, as a list of its locations.
    pub fn groups(&self) -> &[Vec<Location>] {
        &self.groups
    }

    /// The number of locations in each group, in group order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect_vec()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the board holds no letters at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether every letter can reach every other letter, i.e. there is at most one group.
    pub fn is_connected(&self) -> bool {
        self.groups.len() <= 1
    }
}

impl Board {
    /// The adjacency graph of placed letters: one node per letter, one edge per orthogonally adjacent pair.
    fn letter_graph(&self) -> UnGraphMap<Location, ()> {
        let mut graph = UnGraphMap::with_capacity(
            self.cells.len(),
            // "horizontal" edges
            (self.width() - 1) * self.height()
                // "vertical" edges
                + (self.height() - 1) * self.width(),
        );

        for (index, cell) in self.cells.indexed_iter() {
            if cell.is_empty() {
                continue;
            }
            let location = Location::from(index);
            graph.add_node(location);

            // add edges down and to the right, if possible
            for step in SquareStep::FORWARD_VARIANTS {
                let neighbor = step.attempt_from(location);
                if self.cells.get(neighbor.as_index()).is_some_and(|other| other.is_letter()) {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }

        graph
    }

    /// Partition the placed letters into connected [`Components`].
    ///
    /// Each unvisited letter, taken in row-major order, seeds an iterative depth-first search collecting its group.
    pub fn components(&self) -> Components {
        let graph = self.letter_graph();
        let mut dfs = Dfs::empty(&graph);
        let mut groups = Vec::new();

        for (index, cell) in self.cells.indexed_iter() {
            let seed = Location::from(index);
            if cell.is_empty() || dfs.discovered.is_visited(&seed) {
                continue;
            }

            dfs.move_to(seed);
            let mut group = Vec::new();
            while let Some(location) = dfs.next(&graph) {
                group.push(location);
            }
            groups.push(group);
        }

        Components { groups }
    }
}
