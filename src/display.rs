//! Layout contract consumed by presentation layers.
//!
//! The core never renders anything; it only promises stable move labels and
//! hands the view a per-family layout: node coordinates, a legend keyed by
//! move label, and optional vertex captions.

use serde::{Deserialize, Serialize};

/// One legend row: which move a token color stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: usize,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Layout {
    /// Pile sizes laid out in two rows of eight; node 0 is the off-screen sink.
    Rows,
    /// Grid cells at 180px pitch; node 0 is the terminal corner.
    Cells { width: usize, height: usize },
}

/// Per-game-family display contract: canvas size, node positions, legend,
/// and vertex labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDisplay {
    pub canvas_width: f64,
    pub canvas_height: f64,
    legend: Vec<LegendEntry>,
    layout: Layout,
}

impl GraphDisplay {
    /// Layout for a subtraction game with the given move set.
    pub fn subtraction(moves: &[usize]) -> Self {
        let legend = moves
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| LegendEntry {
                label: m - 1,
                name: m.to_string(),
            })
            .collect();
        GraphDisplay {
            canvas_width: 800.0,
            canvas_height: 400.0,
            legend,
            layout: Layout::Rows,
        }
    }

    /// Layout for a King's-move grid game.
    pub fn grid(width: usize, height: usize) -> Self {
        let maxdim = width.max(height) as f64;
        let legend = [(0, "\u{21d0}"), (1, "\u{21d9}"), (2, "\u{21d3}")]
            .into_iter()
            .map(|(label, name)| LegendEntry {
                label,
                name: name.to_string(),
            })
            .collect();
        GraphDisplay {
            canvas_width: 180.0 * maxdim,
            canvas_height: 180.0 * maxdim,
            legend,
            layout: Layout::Cells { width, height },
        }
    }

    /// Screen coordinate of a node, or `None` for the designated origin node.
    pub fn position(&self, node: usize) -> Option<(f64, f64)> {
        if node == 0 {
            return None;
        }
        match self.layout {
            Layout::Rows => {
                if node <= 8 {
                    Some(((node - 1) as f64 * 100.0, 0.0))
                } else {
                    Some(((node - 9) as f64 * 100.0, 200.0))
                }
            }
            Layout::Cells { width, height } => {
                let x = 50.0 + 180.0 * (node % width) as f64;
                let y = 20.0 + 180.0 * (height - 1 - node / width) as f64;
                Some((x, y))
            }
        }
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Caption shown inside a node, where the family uses one.
    pub fn vertex_label(&self, node: usize) -> Option<String> {
        match self.layout {
            Layout::Rows => Some(node.to_string()),
            Layout::Cells { .. } => None,
        }
    }
}
