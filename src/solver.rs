//! Backward induction over the machine's adjacency shape.

use crate::machine::Machine;

/// Label every position as losing or not for the player to move there.
///
/// `losing[i]` is true when every move from `i` hands the opponent a
/// non-losing position, i.e. there is no move into a losing position. A
/// terminal node is vacuously losing (the mover cannot move). Because every
/// edge destination has a smaller index than its source, a single pass in
/// increasing index order visits each node after all of its destinations;
/// no queue or explicit topological sort is needed.
///
/// This is the standard P-position computation from combinatorial game
/// theory. Only the adjacency shape is read; token weights play no part.
pub fn losing_positions(machine: &Machine) -> Vec<bool> {
    let mut losing = vec![false; machine.len()];
    for i in 0..machine.len() {
        losing[i] = machine
            .token_box(i)
            .slots()
            .iter()
            .all(|slot| !losing[slot.dest]);
    }
    losing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{grid_graph, subtraction_graph};

    #[test]
    fn classic_nim_loses_on_multiples_of_three() {
        // Ground truth for the {1, 2} subtraction game.
        let graph = subtraction_graph(30, &[1, 2]);
        let machine = Machine::from_graph(&graph, 1);
        let losing = losing_positions(&machine);
        for (i, &is_losing) in losing.iter().enumerate() {
            assert_eq!(is_losing, i % 3 == 0, "position {i}");
        }
    }

    #[test]
    fn limit_four_scenario_matches_rule() {
        let graph = subtraction_graph(4, &[1, 2]);
        let machine = Machine::from_graph(&graph, 1);
        let losing = losing_positions(&machine);
        assert_eq!(losing, vec![true, false, false, true, false]);
    }

    #[test]
    fn labeling_satisfies_defining_recurrence() {
        let graph = grid_graph(4, 3);
        let machine = Machine::from_graph(&graph, 1);
        let losing = losing_positions(&machine);
        for i in 0..machine.len() {
            let slots = machine.token_box(i).slots();
            let expected = slots.iter().all(|slot| !losing[slot.dest]);
            assert_eq!(losing[i], expected, "position {i}");
        }
    }

    #[test]
    fn terminal_positions_are_losing() {
        let graph = subtraction_graph(3, &[]);
        let machine = Machine::from_graph(&graph, 1);
        assert!(losing_positions(&machine).iter().all(|&l| l));
    }
}
