//! The learning machine: one box of weighted tokens per game position.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// One move option inside a box: the edge it plays and its token count.
///
/// The `(label, dest)` pair is fixed at construction; only `tokens` changes
/// over the machine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub label: usize,
    pub dest: usize,
    pub tokens: u32,
}

/// The box of tokens held at a single position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBox {
    slots: Vec<Slot>,
}

impl TokenBox {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn total_tokens(&self) -> u32 {
        self.slots.iter().map(|slot| slot.tokens).sum()
    }

    /// A box with moves but no tokens left; terminal boxes never count.
    pub fn is_depleted(&self) -> bool {
        !self.slots.is_empty() && self.total_tokens() == 0
    }

    /// Adjust the token count of the slot playing `label`, saturating at zero.
    pub fn adjust(&mut self, label: usize, delta: i32) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.label == label) {
            slot.tokens = if delta >= 0 {
                slot.tokens.saturating_add(delta as u32)
            } else {
                slot.tokens.saturating_sub(delta.unsigned_abs())
            };
        }
    }

    /// Set every slot back to `tokens`.
    pub fn refill(&mut self, tokens: u32) {
        for slot in &mut self.slots {
            slot.tokens = tokens;
        }
    }
}

/// The whole machine: one box per graph node, same shape as the graph it was
/// built from. Exclusively owned by a simulation session and mutated in place
/// by the reinforcement engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    boxes: Vec<TokenBox>,
    initial_tokens: u32,
}

impl Machine {
    /// Build a machine from a graph, giving every slot `initial_tokens`.
    pub fn from_graph(graph: &Graph, initial_tokens: u32) -> Self {
        let boxes = graph
            .nodes
            .iter()
            .map(|node| TokenBox {
                slots: node
                    .iter()
                    .map(|edge| Slot {
                        label: edge.label,
                        dest: edge.dest,
                        tokens: initial_tokens,
                    })
                    .collect(),
            })
            .collect();
        Machine {
            boxes,
            initial_tokens,
        }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn boxes(&self) -> &[TokenBox] {
        &self.boxes
    }

    pub fn token_box(&self, position: usize) -> &TokenBox {
        &self.boxes[position]
    }

    pub fn token_box_mut(&mut self, position: usize) -> &mut TokenBox {
        &mut self.boxes[position]
    }

    /// The weight each slot starts with, also used when refilling.
    pub fn initial_tokens(&self) -> u32 {
        self.initial_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::subtraction_graph;

    #[test]
    fn from_graph_mirrors_shape_and_weights() {
        let graph = subtraction_graph(3, &[1, 2]);
        let machine = Machine::from_graph(&graph, 6);
        assert_eq!(machine.len(), 4);
        assert!(machine.token_box(0).slots().is_empty());
        let box3 = machine.token_box(3);
        assert_eq!(
            box3.slots(),
            &[
                Slot {
                    label: 0,
                    dest: 2,
                    tokens: 6
                },
                Slot {
                    label: 1,
                    dest: 1,
                    tokens: 6
                }
            ]
        );
    }

    #[test]
    fn machines_from_same_graph_are_independent() {
        let graph = subtraction_graph(3, &[1, 2]);
        let mut first = Machine::from_graph(&graph, 4);
        let second = Machine::from_graph(&graph, 4);
        first.token_box_mut(2).adjust(0, -3);
        assert_eq!(first.token_box(2).slots()[0].tokens, 1);
        assert_eq!(second.token_box(2).slots()[0].tokens, 4);
    }

    #[test]
    fn adjust_saturates_at_zero() {
        let graph = subtraction_graph(2, &[1]);
        let mut machine = Machine::from_graph(&graph, 2);
        machine.token_box_mut(1).adjust(0, -5);
        assert_eq!(machine.token_box(1).slots()[0].tokens, 0);
        assert!(machine.token_box(1).is_depleted());
        machine.token_box_mut(1).refill(2);
        assert!(!machine.token_box(1).is_depleted());
    }

    #[test]
    fn terminal_box_is_never_depleted() {
        let graph = subtraction_graph(2, &[1]);
        let machine = Machine::from_graph(&graph, 2);
        assert!(!machine.token_box(0).is_depleted());
    }
}
