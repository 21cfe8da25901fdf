use threaded_bst::Tree;

use std::collections::BTreeSet;

/// Turns an arbitrary byte into a size for a tree that's small enough to fuzz quickly.
fn size(n: u8) -> i32 {
    i32::from(n % 128) + 1
}

quickcheck::quickcheck! {
    fn built_in_order(n: u8) -> bool {
        let n = size(n);
        let tree = Tree::new(n).unwrap();

        tree.len() == n as usize && tree.iter().eq(1..=n)
    }
}

quickcheck::quickcheck! {
    fn remove_even_leaves_odds(n: u8) -> bool {
        let n = size(n);
        let mut tree = Tree::new(n).unwrap();

        tree.remove_even() && tree.iter().eq((1..=n).filter(|v| v % 2 == 1))
    }
}

quickcheck::quickcheck! {
    fn copy_matches_then_diverges(n: u8) -> bool {
        let n = size(n);
        let tree = Tree::new(n).unwrap();
        let mut copy = tree.clone();
        let same = copy.to_string() == tree.to_string();

        copy.remove_even();
        same && tree.iter().eq(1..=n)
    }
}

quickcheck::quickcheck! {
    fn missing_values_change_nothing(n: u8, targets: Vec<i16>) -> bool {
        let n = size(n);
        let mut tree = Tree::new(n).unwrap();
        let before = tree.to_string();

        targets
            .into_iter()
            .map(i32::from)
            .filter(|t| !(1..=n).contains(t))
            .all(|t| !tree.remove(t))
            && tree.to_string() == before
    }
}

quickcheck::quickcheck! {
    fn removals_match_a_set(n: u8, targets: Vec<i8>) -> bool {
        let n = size(n);
        let mut tree = Tree::new(n).unwrap();
        let mut set: BTreeSet<i32> = (1..=n).collect();

        for target in targets.into_iter().map(i32::from) {
            if tree.remove(target) != set.remove(&target) {
                return false;
            }
        }

        // Each remaining value is visited once and the walk ends.
        tree.iter().take(set.len() + 1).eq(set.iter().copied()) && tree.len() == set.len()
    }
}

quickcheck::quickcheck! {
    fn removing_everything_empties(n: u8, seed: Vec<u8>) -> bool {
        let n = size(n);
        let mut tree = Tree::new(n).unwrap();

        // Remove the values in an order shuffled by `seed`.
        let mut order: Vec<i32> = (1..=n).collect();
        for (i, s) in seed.iter().enumerate() {
            let len = order.len();
            order.swap(i % len, usize::from(*s) % len);
        }

        let all_removed = order.iter().all(|v| tree.remove(*v));
        let mut cleared = Tree::new(n).unwrap();
        cleared.clear();

        all_removed
            && tree.is_empty()
            && tree.to_string().is_empty()
            && tree.to_string() == cleared.to_string()
    }
}
