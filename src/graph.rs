//! Game graphs for the learning machine.
//!
//! Both supported game families produce directed acyclic graphs where every
//! edge destination has a strictly smaller node index than its source. That
//! rank invariant is what lets the solver run a single forward pass and what
//! guarantees simulated games terminate.

use serde::{Deserialize, Serialize};

/// A labelled move from one position to another.
///
/// `label` is a small integer identifying *which* legal move this is; its
/// meaning is shared across nodes (in the subtraction game, label `m - 1`
/// means "take `m`"), so legends and token colors can key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub label: usize,
    pub dest: usize,
}

/// Directed game graph: one outgoing edge list per node.
///
/// A node with no outgoing edges is a terminal position; the player to move
/// there loses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Vec<Edge>>,
}

impl Graph {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing edges of a node.
    pub fn edges(&self, node: usize) -> &[Edge] {
        &self.nodes[node]
    }
}

/// Build the graph of a single-pile subtraction game.
///
/// Nodes are pile sizes `0..=limit`. From pile `i` the mover may take any
/// `m` in `moves` with `i - m >= 0`, landing on `i - m`; the edge is
/// labelled `m - 1`. An empty move set yields an all-terminal graph; callers
/// are responsible for rejecting such configurations.
pub fn subtraction_graph(limit: usize, moves: &[usize]) -> Graph {
    let mut nodes = Vec::with_capacity(limit + 1);
    for i in 0..=limit {
        let node = moves
            .iter()
            .filter(|&&m| m > 0 && i >= m)
            .map(|&m| Edge {
                label: m - 1,
                dest: i - m,
            })
            .collect();
        nodes.push(node);
    }
    Graph { nodes }
}

/// Build the King's-move graph on a `width x height` grid.
///
/// Node `(x, y)` has index `y * width + x` and moves west (label 0),
/// southwest (label 1), and south (label 2) where the board allows. Every
/// move decreases the index, and `(0, 0)` is the terminal corner.
pub fn grid_graph(width: usize, height: usize) -> Graph {
    let mut nodes = vec![Vec::new(); width * height];
    for y in 0..height {
        for x in 0..width {
            let node = &mut nodes[y * width + x];
            if x > 0 {
                node.push(Edge {
                    label: 0,
                    dest: y * width + x - 1,
                });
            }
            if x > 0 && y > 0 {
                node.push(Edge {
                    label: 1,
                    dest: (y - 1) * width + x - 1,
                });
            }
            if y > 0 {
                node.push(Edge {
                    label: 2,
                    dest: (y - 1) * width + x,
                });
            }
        }
    }
    Graph { nodes }
}
