use crate::{
  error::{PermError, PermResult},
  factoradic::Fact,
  lex, mr,
  sign::Sign,
  sjt::PlainChanges,
};

use itertools::Itertools as _;
use num_bigint::BigUint;

/// A permutation of the integers `0..n`.
///
/// Contains every integer from `0` to `n-1` exactly once.
/// The only ways to rearrange one in place are the lexicographic successor
/// and plain changes stepping, both of which only ever swap elements.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZPerm(Vec<usize>);

/// constructors
impl ZPerm {
  /// The integers `0..n` in ascending order.
  pub fn identity(n: usize) -> Self {
    Self((0..n).collect())
  }

  /// Wraps a vector already known to be a bijection of `0..n`.
  pub(crate) fn new_unchecked(elements: Vec<usize>) -> Self {
    debug_assert!(is_bijection(&elements));
    Self(elements)
  }
}

impl ZPerm {
  pub fn len(&self) -> usize {
    self.0.len()
  }
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// The permutation mapping each value to its position in `self`.
  pub fn inverse(&self) -> Self {
    let mut inv = vec![0; self.len()];
    for (i, &x) in self.0.iter().enumerate() {
      inv[x] = i;
    }
    Self(inv)
  }

  /// Parity of the permutation.
  ///
  /// A permutation of `n` elements with `c` cycles is a product of `n - c`
  /// transpositions.
  pub fn sign(&self) -> Sign {
    let n = self.len();
    let mut visited = vec![false; n];
    let mut ncycles = 0;
    for start in 0..n {
      if visited[start] {
        continue;
      }
      ncycles += 1;
      let mut i = start;
      while !visited[i] {
        visited[i] = true;
        i = self.0[i];
      }
    }
    Sign::from_parity(n - ncycles)
  }

  /// Overwrites `self` with the permutation encoded by the Lehmer code `f`.
  ///
  /// `self` is left untouched if `f` has the wrong length or an invalid digit.
  pub fn set_fact(&mut self, f: &Fact) -> PermResult<()> {
    if f.len() + 1 != self.len() {
      return Err(PermError::SizeMismatch {
        code: f.len(),
        perm: self.len(),
      });
    }
    f.validate()?;
    f.decode_into(&mut self.0);
    Ok(())
  }
}

/// ordering operations
impl ZPerm {
  /// Steps to the lexicographic successor, see [`lex::next`].
  pub fn lex_next(&mut self) -> bool {
    lex::next(&mut self.0)
  }
  pub fn lex_rank(&self) -> BigUint {
    lex::rank(self)
  }
  pub fn from_lex_rank(rank: &BigUint, n: usize) -> PermResult<Self> {
    lex::unrank(rank, n)
  }

  pub fn mr_rank(&self) -> BigUint {
    mr::rank(self)
  }
  pub fn from_mr_rank(rank: &BigUint, n: usize) -> PermResult<Self> {
    mr::unrank(rank, n)
  }

  /// A plain changes cursor driving `self` in place.
  pub fn plain_changes(&mut self) -> PlainChanges<'_, usize> {
    PlainChanges::new(&mut self.0)
  }
}

fn is_bijection(elements: &[usize]) -> bool {
  let n = elements.len();
  let mut seen = vec![false; n];
  for &x in elements {
    if x >= n || seen[x] {
      return false;
    }
    seen[x] = true;
  }
  true
}

impl TryFrom<Vec<usize>> for ZPerm {
  type Error = PermError;
  fn try_from(elements: Vec<usize>) -> PermResult<Self> {
    if !is_bijection(&elements) {
      return Err(PermError::NotAPermutation { n: elements.len() });
    }
    Ok(Self(elements))
  }
}
impl<const N: usize> TryFrom<[usize; N]> for ZPerm {
  type Error = PermError;
  fn try_from(elements: [usize; N]) -> PermResult<Self> {
    Self::try_from(elements.to_vec())
  }
}
impl From<ZPerm> for Vec<usize> {
  fn from(value: ZPerm) -> Self {
    value.0
  }
}

impl ZPerm {
  pub fn as_slice(&self) -> &[usize] {
    &self.0
  }
  pub fn iter(&self) -> std::slice::Iter<'_, usize> {
    self.0.iter()
  }
  pub fn into_vec(self) -> Vec<usize> {
    self.into()
  }
}

impl std::ops::Index<usize> for ZPerm {
  type Output = usize;
  fn index(&self, index: usize) -> &Self::Output {
    &self.0[index]
  }
}
impl PartialEq<[usize]> for ZPerm {
  fn eq(&self, other: &[usize]) -> bool {
    self.0 == *other
  }
}
impl<const N: usize> PartialEq<[usize; N]> for ZPerm {
  fn eq(&self, other: &[usize; N]) -> bool {
    self.0 == *other
  }
}

impl std::fmt::Display for ZPerm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", self.0.iter().join(" "))
  }
}

#[cfg(test)]
mod test {
  use super::ZPerm;
  use crate::{error::PermError, factoradic::Fact, sign::Sign};

  #[test]
  fn identity_and_display() {
    let p = ZPerm::identity(4);
    assert_eq!(p, [0, 1, 2, 3]);
    assert_eq!(p.to_string(), "[0 1 2 3]");
    assert!(ZPerm::identity(0).is_empty());
  }

  #[test]
  fn rejects_non_bijections() {
    assert_eq!(
      ZPerm::try_from([0, 2, 2]),
      Err(PermError::NotAPermutation { n: 3 })
    );
    assert!(ZPerm::try_from([1, 2]).is_err());
    assert!(ZPerm::try_from([2, 0, 1]).is_ok());
  }

  #[test]
  fn inverse_composes_to_identity() {
    let p = ZPerm::try_from([3, 0, 4, 1, 2]).unwrap();
    let inv = p.inverse();
    for i in 0..p.len() {
      assert_eq!(inv[p[i]], i);
    }
    assert_eq!(inv.inverse(), p);
  }

  #[test]
  fn sign_counts_transpositions() {
    assert_eq!(ZPerm::identity(5).sign(), Sign::Pos);
    assert_eq!(ZPerm::try_from([1, 0, 2]).unwrap().sign(), Sign::Neg);
    assert_eq!(ZPerm::try_from([1, 2, 0]).unwrap().sign(), Sign::Pos);
    assert_eq!(ZPerm::try_from([3, 2, 1, 0]).unwrap().sign(), Sign::Pos);
  }

  #[test]
  fn set_fact_checks_length_first() {
    let f = Fact::from(vec![1, 2]);
    let mut p = ZPerm::identity(4);
    assert_eq!(
      p.set_fact(&f),
      Err(PermError::SizeMismatch { code: 2, perm: 4 })
    );
    assert_eq!(p, [0, 1, 2, 3]);

    let mut p = ZPerm::identity(3);
    p.set_fact(&f).unwrap();
    assert_eq!(p, [2, 1, 0]);
  }

  #[test]
  fn set_fact_leaves_self_on_invalid_digit() {
    let f = Fact::from(vec![2, 0]);
    let mut p = ZPerm::try_from([1, 0, 2]).unwrap();
    assert!(matches!(
      p.set_fact(&f),
      Err(PermError::InvalidDigit { index: 0, .. })
    ));
    assert_eq!(p, [1, 0, 2]);
  }
}
