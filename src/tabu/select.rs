//! Candidate selection with and without tabu filtering.
//!
//! Every selector is a single linear scan: a candidate replaces the
//! incumbent only if it is strictly cheaper, so among equal costs the
//! earliest candidate in neighborhood order wins.

use super::memory::TabuMemory;
use super::types::{Candidate, MoveSignature};
use crate::tour::Tour;

/// Cheapest candidate, earliest on ties. `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::{select_best, Candidate, MoveSignature};
/// use u_tsp::tour::Tour;
///
/// let a = Candidate { tour: Tour::identity(3), signature: MoveSignature::new(0, 1), cost: 5.0 };
/// let b = Candidate { tour: Tour::identity(3), signature: MoveSignature::new(0, 2), cost: 5.0 };
/// let pool = [a, b];
/// assert_eq!(select_best(&pool).unwrap().signature, MoveSignature::new(0, 1));
/// assert!(select_best(&[]).is_none());
/// ```
pub fn select_best(candidates: &[Candidate]) -> Option<&Candidate> {
    select_admissible(candidates, |_| true)
}

/// Cheapest candidate among those passing `admissible`, earliest on ties.
pub fn select_admissible<F>(candidates: &[Candidate], mut admissible: F) -> Option<&Candidate>
where
    F: FnMut(&Candidate) -> bool,
{
    let mut best: Option<&Candidate> = None;
    for c in candidates {
        if !admissible(c) {
            continue;
        }
        match best {
            Some(b) if c.cost >= b.cost => {}
            _ => best = Some(c),
        }
    }
    best
}

/// Best candidate whose tour is not remembered in `memory`.
pub fn select_with_solution_memory<'a>(
    candidates: &'a [Candidate],
    memory: &TabuMemory<Tour>,
) -> Option<&'a Candidate> {
    select_admissible(candidates, |c| !memory.contains(&c.tour))
}

/// Best candidate whose move signature is not remembered in `memory`.
///
/// With `aspiration = Some(best_cost)`, a remembered move is admitted
/// anyway when its cost is strictly below `best_cost`. With `None`, every
/// remembered move is rejected.
pub fn select_with_move_memory<'a>(
    candidates: &'a [Candidate],
    memory: &TabuMemory<MoveSignature>,
    aspiration: Option<f64>,
) -> Option<&'a Candidate> {
    select_admissible(candidates, |c| {
        if aspiration.is_some_and(|best_cost| c.cost < best_cost) {
            return true;
        }
        !memory.contains(&c.signature)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::tabu::{NeighborhoodSeeding, TwoOptNeighborhood};

    fn candidate(i: usize, j: usize, cost: f64) -> Candidate {
        Candidate {
            tour: Tour::identity(4).two_opt(i, j),
            signature: MoveSignature::new(i, j),
            cost,
        }
    }

    /// Weights from the 4-node worked example: identity tour costs 12.
    fn four_nodes() -> Graph {
        Graph::new(vec![
            vec![0.0, 1.0, 4.0, 6.0],
            vec![1.0, 0.0, 2.0, 5.0],
            vec![4.0, 2.0, 0.0, 3.0],
            vec![6.0, 5.0, 3.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_select_best_strict_improvement() {
        let pool = vec![candidate(0, 1, 9.0), candidate(0, 2, 7.0), candidate(0, 3, 8.0)];
        assert_eq!(select_best(&pool).unwrap().signature, MoveSignature::new(0, 2));
    }

    #[test]
    fn test_select_best_tie_keeps_first() {
        let pool = vec![candidate(1, 2, 17.0), candidate(1, 3, 12.0), candidate(2, 3, 12.0)];
        assert_eq!(select_best(&pool).unwrap().signature, MoveSignature::new(1, 3));
    }

    #[test]
    fn test_four_node_neighborhood_tie_break() {
        let g = four_nodes();
        let mut hood = TwoOptNeighborhood::new(0.0, 42, NeighborhoodSeeding::PerCall);
        let pool = hood.generate(&Tour::identity(4), &g);

        let by_sig = |i, j| pool.iter().find(|c| c.signature == MoveSignature::new(i, j)).unwrap();
        assert_eq!(by_sig(1, 2).tour.as_slice(), &[0, 2, 1, 3]);
        assert_eq!(by_sig(1, 2).cost, 17.0);
        assert_eq!(by_sig(1, 3).tour.as_slice(), &[0, 3, 2, 1]);
        assert_eq!(by_sig(1, 3).cost, 12.0);

        // (0, 2), (0, 3) and (1, 3) all cost 12; the first enumerated wins.
        let best = select_best(&pool).unwrap();
        assert_eq!(best.signature, MoveSignature::new(0, 2));
        assert_eq!(best.cost, 12.0);
    }

    #[test]
    fn test_solution_memory_vetoes_cheapest() {
        let pool = vec![candidate(0, 1, 3.0), candidate(0, 2, 5.0)];
        let mut memory = TabuMemory::new(2);
        memory.record(pool[0].tour.clone());

        let chosen = select_with_solution_memory(&pool, &memory).unwrap();
        assert_eq!(chosen.signature, MoveSignature::new(0, 2));
    }

    #[test]
    fn test_solution_memory_all_tabu() {
        let pool = vec![candidate(0, 1, 3.0)];
        let mut memory = TabuMemory::new(1);
        memory.record(pool[0].tour.clone());
        assert!(select_with_solution_memory(&pool, &memory).is_none());
    }

    #[test]
    fn test_solution_memory_rotation_not_tabu() {
        let pool = vec![candidate(0, 1, 3.0)];
        let mut memory = TabuMemory::new(1);
        let rotated: Vec<usize> = pool[0].tour.iter().cycle().skip(1).take(4).copied().collect();
        memory.record(Tour::from(rotated));
        assert!(select_with_solution_memory(&pool, &memory).is_some());
    }

    #[test]
    fn test_move_memory_without_aspiration() {
        let pool = vec![candidate(0, 1, 1.0), candidate(1, 2, 6.0)];
        let mut memory = TabuMemory::new(3);
        memory.record(MoveSignature::new(0, 1));

        let chosen = select_with_move_memory(&pool, &memory, None).unwrap();
        assert_eq!(chosen.signature, MoveSignature::new(1, 2));
    }

    #[test]
    fn test_move_memory_aspiration_overrides() {
        let pool = vec![candidate(0, 1, 1.0), candidate(1, 2, 6.0)];
        let mut memory = TabuMemory::new(3);
        memory.record(MoveSignature::new(0, 1));

        let chosen = select_with_move_memory(&pool, &memory, Some(2.0)).unwrap();
        assert_eq!(chosen.signature, MoveSignature::new(0, 1));
    }

    #[test]
    fn test_move_memory_aspiration_requires_strict() {
        let pool = vec![candidate(0, 1, 2.0), candidate(1, 2, 6.0)];
        let mut memory = TabuMemory::new(3);
        memory.record(MoveSignature::new(0, 1));

        let chosen = select_with_move_memory(&pool, &memory, Some(2.0)).unwrap();
        assert_eq!(chosen.signature, MoveSignature::new(1, 2));
    }

    #[test]
    fn test_move_memory_evicted_signature_allowed() {
        let pool = vec![candidate(0, 1, 1.0), candidate(1, 2, 6.0)];
        let mut memory = TabuMemory::new(2);
        memory.record(MoveSignature::new(0, 1));
        memory.record(MoveSignature::new(2, 3));
        memory.record(MoveSignature::new(0, 3));

        let chosen = select_with_move_memory(&pool, &memory, None).unwrap();
        assert_eq!(chosen.signature, MoveSignature::new(0, 1));
    }

    #[test]
    fn test_empty_pool() {
        let memory = TabuMemory::new(1);
        assert!(select_best(&[]).is_none());
        assert!(select_with_move_memory(&[], &memory, Some(0.0)).is_none());
    }
}
