use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one unseen question id uniformly at random, or `None` when every
/// candidate has already been asked.
///
/// The difference set is computed up front and sampled once, so a large
/// `asked` list can never send this into a retry loop.
pub fn next_question<R: Rng + ?Sized>(
    candidates: &[i64],
    asked: &[i64],
    rng: &mut R,
) -> Option<i64> {
    let asked: HashSet<i64> = asked.iter().copied().collect();
    let remaining: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|id| !asked.contains(id))
        .collect();
    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_is_never_a_repeat() {
        let candidates = vec![1, 2, 3, 4, 5];
        let asked = vec![1, 3, 5];
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let picked = next_question(&candidates, &asked, &mut rng).unwrap();
            assert!(picked == 2 || picked == 4);
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let candidates = vec![1, 2, 3];
        let asked = vec![3, 2, 1];
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            assert_eq!(next_question(&candidates, &asked, &mut rng), None);
        }
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = rand::thread_rng();
        assert_eq!(next_question(&[], &[], &mut rng), None);
    }

    #[test]
    fn asked_ids_outside_the_pool_are_ignored() {
        let candidates = vec![7];
        let asked = vec![100, 200, 300];
        let mut rng = rand::thread_rng();
        assert_eq!(next_question(&candidates, &asked, &mut rng), Some(7));
    }

    // Uniform sampling over a 2-element remainder: 1000 draws missing either
    // side has probability 2^-999.
    #[test]
    fn both_remaining_ids_get_drawn() {
        let candidates = vec![10, 20, 30, 40];
        let asked = vec![20, 40];
        let mut rng = rand::thread_rng();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(next_question(&candidates, &asked, &mut rng).unwrap());
        }
        assert_eq!(seen, HashSet::from([10, 30]));
    }
}
