use std::{
    collections::{BTreeMap, HashSet},
    hash::Hash,
};

/// Walk parent references back from `goal` and return the route in start to
/// goal order. The walk stops at the first node without a parent, or at a
/// node it has already seen if the map contains a cycle.
pub fn reconstruct_path<S: Copy + Ord + Hash>(parents: &BTreeMap<S, S>, goal: S) -> Vec<S> {
    let mut path = vec![goal];
    let mut seen = HashSet::from([goal]);
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        if !seen.insert(parent) {
            break;
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_parents_to_root() {
        let parents = BTreeMap::from([('b', 'a'), ('c', 'b'), ('d', 'a')]);
        assert_eq!(reconstruct_path(&parents, 'c'), vec!['a', 'b', 'c']);
        assert_eq!(reconstruct_path(&parents, 'd'), vec!['a', 'd']);
        assert_eq!(reconstruct_path(&parents, 'a'), vec!['a']);
    }

    #[test]
    fn stops_on_cycles() {
        let parents = BTreeMap::from([('a', 'c'), ('b', 'a'), ('c', 'b')]);
        assert_eq!(reconstruct_path(&parents, 'c'), vec!['a', 'b', 'c']);
    }
}
