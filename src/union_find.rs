use alloc::vec::Vec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Element {index} is out of range for a forest of {len} elements")]
pub struct OutOfRangeError {
    pub index: u32,
    pub len: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Node {
    // `None` for roots. Always an index into the owning forest.
    parent: Option<u32>,
    rank: u32,
}

/// A partition of the elements `0..len` into disjoint groups, with path compression and union by
/// rank.
///
/// Parents are stored as indices into the forest's own node vector, so a clone never refers back
/// into the forest it was cloned from.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<Node>,
}

impl Forest {
    pub fn new(len: u32) -> Self {
        Self {
            nodes: vec![Node::default(); len as usize],
        }
    }

    pub fn size(&self) -> u32 {
        self.nodes.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn check(&self, index: u32) -> Result<(), OutOfRangeError> {
        if (index as usize) < self.nodes.len() {
            Ok(())
        } else {
            Err(OutOfRangeError {
                index,
                len: self.size(),
            })
        }
    }

    /// Number of groups, i.e. nodes without a parent. Scans the whole forest.
    pub fn group_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.parent.is_none()).count()
    }

    /// Whether all elements belong to one group. `false` for an empty forest.
    pub fn is_single_group(&self) -> bool {
        self.group_count() == 1
    }

    pub fn is_root(&self, index: u32) -> Result<bool, OutOfRangeError> {
        self.check(index)?;
        Ok(self.nodes[index as usize].parent.is_none())
    }

    /// Rank of `index`. Only meaningful while `index` is a root; frozen afterwards.
    pub fn rank(&self, index: u32) -> Result<u32, OutOfRangeError> {
        self.check(index)?;
        Ok(self.nodes[index as usize].rank)
    }

    /// Returns the representative of the group containing `index`, re-pointing every node on the
    /// way directly at it.
    pub fn representative_of(&mut self, index: u32) -> Result<u32, OutOfRangeError> {
        self.check(index)?;
        Ok(self.resolve(index))
    }

    // Caller has checked `index`.
    pub(crate) fn resolve(&mut self, mut index: u32) -> u32 {
        let mut leader = index;
        while let Some(parent) = self.nodes[leader as usize].parent {
            leader = parent;
        }
        while index != leader {
            index = self.nodes[index as usize]
                .parent
                .replace(leader)
                .unwrap_or(leader);
        }
        leader
    }

    /// Same result as [`Forest::representative_of`], but leaves the forest untouched.
    pub fn root_of(&self, index: u32) -> Result<u32, OutOfRangeError> {
        self.check(index)?;
        let mut leader = index;
        while let Some(parent) = self.nodes[leader as usize].parent {
            leader = parent;
        }
        Ok(leader)
    }

    /// Returns `index` if it is a root and its immediate parent otherwise.
    ///
    /// This only follows a single link, so it is the representative only while the path from
    /// `index` is at most one edge long. Use [`Forest::representative_of`] or
    /// [`Forest::root_of`] when a canonical answer is needed.
    pub fn shallow_representative(&self, index: u32) -> Result<u32, OutOfRangeError> {
        self.check(index)?;
        Ok(self.nodes[index as usize].parent.unwrap_or(index))
    }

    pub fn same_set(&mut self, a: u32, b: u32) -> Result<bool, OutOfRangeError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.resolve(a) == self.resolve(b))
    }

    /// Unites the groups of `a` and `b`. Returns `false` if they were already one group.
    ///
    /// On equal ranks, `b`'s representative is attached under `a`'s.
    pub fn merge(&mut self, a: u32, b: u32) -> Result<bool, OutOfRangeError> {
        self.check(a)?;
        self.check(b)?;

        let mut a = self.resolve(a);
        let mut b = self.resolve(b);
        if a == b {
            return Ok(false);
        }

        let rank_a = self.nodes[a as usize].rank;
        let rank_b = self.nodes[b as usize].rank;
        if rank_a < rank_b {
            core::mem::swap(&mut a, &mut b);
        } else if rank_a == rank_b {
            self.nodes[a as usize].rank += 1;
        }
        self.nodes[b as usize].parent = Some(a);

        log::trace!(
            "attached root {b} under {a} (rank {})",
            self.nodes[a as usize].rank
        );
        Ok(true)
    }

    /// All members of the group containing `index`, in ascending order.
    pub fn elements_of(&mut self, index: u32) -> Result<Vec<u32>, OutOfRangeError> {
        self.check(index)?;
        let leader = self.resolve(index);
        Ok((0..self.size())
            .filter(|&i| self.resolve(i) == leader)
            .collect())
    }
}

impl Clone for Forest {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.nodes.clone_from(&source.nodes);
    }
}
