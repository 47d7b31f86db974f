//! Lexicographic order.
//!
//! Successor stepping works on any sequence of totally ordered elements,
//! including multisets. Ranking and unranking are restricted to [`ZPerm`]s
//! and run in `O(n log n)` element operations using a [`CountTree`].

mod tree;

use tree::CountTree;

use crate::{error::PermResult, factoradic::Fact, zperm::ZPerm};

use num_bigint::BigUint;
use std::collections::VecDeque;

/// Reorders `p` in place into its lexicographic successor.
///
/// The element at index `0` is the most significant. Elements need not be
/// distinct: for a multiset every distinct arrangement is produced once.
///
/// Returns `false` and leaves `p` unmodified if it is already the last
/// (descending) arrangement.
pub fn next<T: Ord>(p: &mut [T]) -> bool {
  let len = p.len();
  if len <= 1 {
    return false;
  }
  let last = len - 1;
  let mut k = last - 1;
  while p[k] >= p[k + 1] {
    if k == 0 {
      return false;
    }
    k -= 1;
  }
  let mut l = last;
  while p[k] >= p[l] {
    l -= 1;
  }
  p.swap(k, l);
  p[k + 1..].reverse();
  true
}

/// An indexable sequence that can be compared and swapped in place.
pub trait Sequence {
  fn len(&self) -> usize;
  /// Whether the element at `i` orders strictly before the one at `j`.
  fn less(&self, i: usize, j: usize) -> bool;
  fn swap(&mut self, i: usize, j: usize);

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl<T: Ord> Sequence for [T] {
  fn len(&self) -> usize {
    <[T]>::len(self)
  }
  fn less(&self, i: usize, j: usize) -> bool {
    self[i] < self[j]
  }
  fn swap(&mut self, i: usize, j: usize) {
    <[T]>::swap(self, i, j)
  }
}
impl<T: Ord> Sequence for VecDeque<T> {
  fn len(&self) -> usize {
    VecDeque::len(self)
  }
  fn less(&self, i: usize, j: usize) -> bool {
    self[i] < self[j]
  }
  fn swap(&mut self, i: usize, j: usize) {
    VecDeque::swap(self, i, j)
  }
}

/// [`next`] for any [`Sequence`].
pub fn next_seq<S: Sequence + ?Sized>(s: &mut S) -> bool {
  let len = s.len();
  if len <= 1 {
    return false;
  }
  let last = len - 1;
  let mut k = last - 1;
  while !s.less(k, k + 1) {
    if k == 0 {
      return false;
    }
    k -= 1;
  }
  let mut l = last;
  while !s.less(k, l) {
    l -= 1;
  }
  s.swap(k, l);
  let (mut lo, mut hi) = (k + 1, last);
  while lo < hi {
    s.swap(lo, hi);
    lo += 1;
    hi -= 1;
  }
  true
}

/// Iterator over the arrangements of a sequence in lexicographic order.
///
/// Starts from the given arrangement, so pass a sorted vector to get all of
/// them.
pub struct LexPermutations<T: Ord + Clone> {
  vec: Vec<T>,
  first: bool,
}

impl<T: Ord + Clone> LexPermutations<T> {
  pub fn new(vec: Vec<T>) -> Self {
    Self { vec, first: true }
  }
}

impl<T: Ord + Clone> Iterator for LexPermutations<T> {
  type Item = Vec<T>;
  fn next(&mut self) -> Option<Self::Item> {
    if std::mem::take(&mut self.first) || next(&mut self.vec) {
      Some(self.vec.clone())
    } else {
      None
    }
  }
}

/// Lexicographic rank of `p` in `0..n!`.
pub fn rank(p: &ZPerm) -> BigUint {
  let n = p.len();
  let mut tree = CountTree::empty(n);
  let mut r = BigUint::default();
  for (i, &x) in p.iter().enumerate() {
    // number of values not yet placed that are smaller than x
    let digit = x - tree.insert(x);
    r *= n - i;
    r += digit;
  }
  r
}

/// The permutation of length `n` with lexicographic rank `rank`.
///
/// Fails if `rank >= n!`.
pub fn unrank(rank: &BigUint, n: usize) -> PermResult<ZPerm> {
  let f = Fact::from_integer(rank, n)?;
  let digits = f.digits();
  let mut tree = CountTree::full(n);
  let p = (0..n)
    .map(|i| {
      // the last position has a single candidate left
      let digit = if i + 1 < n { digits[n - 2 - i] } else { 0 };
      tree.take(digit)
    })
    .collect();
  Ok(ZPerm::new_unchecked(p))
}
