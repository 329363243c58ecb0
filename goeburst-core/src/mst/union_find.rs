//! Union-find (disjoint set union) used to reject cycle-forming edges.
//!
//! `find` compresses paths by halving: every visited node is re-pointed at its
//! grandparent. `union` attaches the lower-rank root beneath the higher-rank
//! one; on equal ranks the second argument's root goes beneath the first's.

/// Partition of `0..n` into disjoint components.
///
/// # Examples
/// ```
/// use goeburst_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert_eq!(set.count(), 4);
/// assert!(set.union(0, 1));
/// assert!(set.union(2, 3));
/// assert!(!set.union(1, 0));
/// assert!(set.connected(0, 1));
/// assert!(!set.connected(1, 2));
/// assert_eq!(set.count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the set has no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.components }

    /// Returns the representative of the component containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    /// Returns `true` when both nodes belong to the same component.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` when they were already merged.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }

        self.components -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn equal_ranks_keep_the_left_root() {
        let mut set = DisjointSet::new(2);
        assert!(set.union(0, 1));
        assert_eq!(set.find(1), 0);
        assert_eq!(set.rank[0], 1);
    }

    #[rstest]
    fn lower_rank_root_moves_under_higher() {
        let mut set = DisjointSet::new(3);
        set.union(1, 2);
        set.union(0, 1);
        assert_eq!(set.find(0), 1);
        assert_eq!(set.find(2), 1);
    }

    #[rstest]
    fn count_tracks_successful_unions() {
        let mut set = DisjointSet::new(6);
        let merges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 3)];
        let successful = merges
            .iter()
            .filter(|(left, right)| set.union(*left, *right))
            .count();
        assert_eq!(successful, 3);
        assert_eq!(set.count(), 6 - successful);
    }

    #[rstest]
    fn find_halves_long_paths() {
        let mut set = DisjointSet::new(5);
        set.parent = vec![0, 0, 1, 2, 3];
        assert_eq!(set.find(4), 0);
        assert!(set.parent[4] < 3, "path halving must shorten the chain");
    }

    #[rstest]
    fn empty_set_has_no_components() {
        let set = DisjointSet::new(0);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
    }
}
