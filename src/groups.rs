use crate::union_find::Forest;
use alloc::vec::Vec;
use rustc_hash::FxHashMap;

impl Forest {
    /// Lists every group, each in ascending order. Groups are ordered by their smallest element.
    pub fn groups(&mut self) -> Vec<Vec<u32>> {
        let mut group_of_leader: FxHashMap<u32, usize> = FxHashMap::default();
        let mut groups: Vec<Vec<u32>> = Vec::with_capacity(self.group_count());
        for index in 0..self.size() {
            let leader = self.resolve(index);
            let group = *group_of_leader.entry(leader).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(index);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    #[test]
    fn basic() {
        assert!(Forest::new(0).groups().is_empty());
        assert_eq!(Forest::new(3).groups(), [[0], [1], [2]]);

        let mut forest = Forest::new(6);
        forest.merge(5, 1).unwrap();
        forest.merge(3, 0).unwrap();
        forest.merge(4, 1).unwrap();
        assert_eq!(
            forest.groups(),
            [vec![0, 3], vec![1, 4, 5], vec![2]]
        );
    }

    #[test]
    fn matches_elements_of() {
        let mut rng = SmallRng::seed_from_u64(7);
        let len = 100;
        let mut forest = Forest::new(len);
        for _ in 0..60 {
            forest
                .merge(rng.random_range(0..len), rng.random_range(0..len))
                .unwrap();
        }

        let groups = forest.groups();
        assert_eq!(groups.len(), forest.group_count());
        assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), len as usize);
        for group in &groups {
            for &index in group {
                assert_eq!(forest.elements_of(index).as_ref(), Ok(group));
            }
        }
        assert!(groups.windows(2).all(|pair| pair[0][0] < pair[1][0]));
    }
}
