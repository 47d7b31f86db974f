//! Rank spaces.
//!
//! A rank only means something together with the order it was computed in.
//! [`Rank`] carries its [`Order`] as a type parameter, so ranks of different
//! orders cannot be mixed up.

use crate::{
  error::{PermError, PermResult},
  lex, mr,
  util::factorial,
  zperm::ZPerm,
};

use num_bigint::BigUint;
use std::{fmt::Debug, hash::Hash, marker::PhantomData};

/// A total order on the permutations of `0..n` with rank and unrank.
pub trait Order: Debug + Default + Clone + Copy + PartialEq + Eq + Hash {
  const NAME: &'static str;
  fn rank(p: &ZPerm) -> BigUint;
  fn unrank(rank: &BigUint, n: usize) -> PermResult<ZPerm>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lexicographic;
impl Order for Lexicographic {
  const NAME: &'static str = "lexicographic";
  fn rank(p: &ZPerm) -> BigUint {
    lex::rank(p)
  }
  fn unrank(rank: &BigUint, n: usize) -> PermResult<ZPerm> {
    lex::unrank(rank, n)
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MyrvoldRuskey;
impl Order for MyrvoldRuskey {
  const NAME: &'static str = "myrvold-ruskey";
  fn rank(p: &ZPerm) -> BigUint {
    mr::rank(p)
  }
  fn unrank(rank: &BigUint, n: usize) -> PermResult<ZPerm> {
    mr::unrank(rank, n)
  }
}

/// The position of a permutation of `n` elements in the order `O`.
///
/// Always lies in `0..n!`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank<O: Order> {
  n: usize,
  value: BigUint,
  _order: PhantomData<O>,
}

impl<O: Order> Rank<O> {
  pub fn new(value: BigUint, n: usize) -> PermResult<Self> {
    if value >= factorial(n) {
      return Err(PermError::OutOfRange { rank: value, n });
    }
    Ok(Self {
      n,
      value,
      _order: PhantomData,
    })
  }

  pub fn of(p: &ZPerm) -> Self {
    Self {
      n: p.len(),
      value: O::rank(p),
      _order: PhantomData,
    }
  }

  pub fn n(&self) -> usize {
    self.n
  }
  pub fn value(&self) -> &BigUint {
    &self.value
  }
  pub fn into_value(self) -> BigUint {
    self.value
  }

  pub fn permutation(&self) -> PermResult<ZPerm> {
    O::unrank(&self.value, self.n)
  }
}

impl ZPerm {
  pub fn rank_in<O: Order>(&self) -> Rank<O> {
    Rank::of(self)
  }
}

impl<O: Order> std::fmt::Display for Rank<O> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({} of {})", self.value, O::NAME, self.n)
  }
}

#[cfg(test)]
mod test {
  use super::{Lexicographic, MyrvoldRuskey, Rank};
  use crate::{error::PermError, zperm::ZPerm};

  use num_bigint::BigUint;

  #[test]
  fn same_permutation_different_ranks() {
    let p = ZPerm::try_from([2, 0, 1, 3]).unwrap();
    let lex: Rank<Lexicographic> = p.rank_in();
    let mr: Rank<MyrvoldRuskey> = p.rank_in();
    assert_eq!(lex.value(), &BigUint::from(12u32));
    assert_eq!(mr.value(), &BigUint::from(7u32));
    assert_eq!(lex.permutation().unwrap(), p);
    assert_eq!(mr.permutation().unwrap(), p);
    assert_eq!(mr.to_string(), "7 (myrvold-ruskey of 4)");
  }

  #[test]
  fn new_checks_range() {
    let r = Rank::<Lexicographic>::new(BigUint::from(5u32), 3).unwrap();
    assert_eq!(r.permutation().unwrap(), [2, 1, 0]);
    assert_eq!(
      Rank::<MyrvoldRuskey>::new(BigUint::from(6u32), 3),
      Err(PermError::OutOfRange {
        rank: BigUint::from(6u32),
        n: 3
      })
    );
  }
}
