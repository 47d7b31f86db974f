use crate::util::ceil_log2;

/// Implicit complete binary tree counting a subset of `0..n`.
///
/// Node `1` is the root, node `i` has children `2i` and `2i+1`, and the
/// `2^depth` leaves start at index `2^depth`. Each node stores how many
/// members of the subset lie below it.
#[derive(Debug, Clone)]
pub(crate) struct CountTree {
  depth: u32,
  counts: Vec<usize>,
}

impl CountTree {
  /// A tree over `0..n` that contains nothing.
  pub fn empty(n: usize) -> Self {
    let depth = ceil_log2(n);
    let counts = vec![0; 1 << (depth + 1)];
    Self { depth, counts }
  }

  /// A tree over `0..n` that contains every value.
  pub fn full(n: usize) -> Self {
    let mut tree = Self::empty(n);
    let nleaves = tree.nleaves();
    tree.counts[nleaves..nleaves + n].fill(1);
    for node in (1..nleaves).rev() {
      tree.counts[node] = tree.counts[2 * node] + tree.counts[2 * node + 1];
    }
    tree
  }

  fn nleaves(&self) -> usize {
    1 << self.depth
  }

  /// Adds `value` and returns how many values below it were already present.
  pub fn insert(&mut self, value: usize) -> usize {
    let mut node = self.nleaves() + value;
    let mut nless = 0;
    for _ in 0..self.depth {
      if node & 1 == 1 {
        nless += self.counts[node ^ 1];
      }
      self.counts[node] += 1;
      node >>= 1;
    }
    self.counts[node] += 1;
    nless
  }

  /// Removes and returns the `rank`-th smallest present value.
  ///
  /// Requires `rank < self.len()`.
  pub fn take(&mut self, mut rank: usize) -> usize {
    debug_assert!(rank < self.len());
    let mut node = 1;
    for _ in 0..self.depth {
      self.counts[node] -= 1;
      node <<= 1;
      if rank >= self.counts[node] {
        rank -= self.counts[node];
        node += 1;
      }
    }
    self.counts[node] -= 1;
    node - self.nleaves()
  }

  pub fn len(&self) -> usize {
    self.counts[1]
  }
}
