//! Myrvold–Ruskey order.
//!
//! A rank is read as mixed-radix digits `d_n, d_{n-1}, ..., d_1` with
//! `d_m < m`. Unranking starts from the identity and for `m = n, ..., 1` swaps
//! positions `m-1` and `d_m`. Both directions take `O(n)` swaps.

use crate::{
  error::{PermError, PermResult},
  util::div_rem_digit,
  zperm::ZPerm,
};

use num_bigint::BigUint;
use num_traits::Zero as _;

/// The permutation of length `n` with Myrvold–Ruskey rank `rank`.
///
/// Fails if `rank >= n!`.
pub fn unrank(rank: &BigUint, n: usize) -> PermResult<ZPerm> {
  let mut p: Vec<usize> = (0..n).collect();
  let mut quo = rank.clone();
  for m in (1..=n).rev() {
    let d = div_rem_digit(&mut quo, m);
    p.swap(m - 1, d);
  }
  if !quo.is_zero() {
    tracing::debug!("myrvold-ruskey rank {rank} does not fit {n} elements");
    return Err(PermError::OutOfRange {
      rank: rank.clone(),
      n,
    });
  }
  Ok(ZPerm::new_unchecked(p))
}

/// Myrvold–Ruskey rank of `p` in `0..n!`.
///
/// Undoes the swaps of [`unrank`] on a private copy, tracking the inverse to
/// locate each element in constant time.
pub fn rank(p: &ZPerm) -> BigUint {
  let mut p = p.as_slice().to_vec();
  let mut inv = vec![0; p.len()];
  for (i, &x) in p.iter().enumerate() {
    inv[x] = i;
  }
  // afterwards p[m-1] holds the digit for radix m
  for i in (1..p.len()).rev() {
    let s = p[i];
    p[inv[i]] = s;
    inv[s] = inv[i];
  }
  let mut r = BigUint::zero();
  for (i, &digit) in p.iter().enumerate().skip(1) {
    r *= i + 1;
    r += digit;
  }
  r
}

#[cfg(test)]
mod test {
  use super::{rank, unrank};
  use crate::{error::PermError, util::factorial, zperm::ZPerm};

  use num_bigint::BigUint;
  use std::collections::HashSet;

  #[test]
  fn four_elements_rank_seven() {
    let seven = BigUint::from(7u32);
    let p = unrank(&seven, 4).unwrap();
    assert_eq!(p, [2, 0, 1, 3]);
    assert_eq!(rank(&p), seven);
  }

  #[test]
  fn two_elements() {
    assert_eq!(unrank(&BigUint::from(0u32), 2).unwrap(), [1, 0]);
    assert_eq!(unrank(&BigUint::from(1u32), 2).unwrap(), [0, 1]);
  }

  #[test]
  fn bijection_on_small_n() {
    for n in 0..=6 {
      let total = factorial(n);
      let mut seen = HashSet::new();
      let mut r = BigUint::from(0u32);
      while r < total {
        let p = unrank(&r, n).unwrap();
        assert_eq!(rank(&p), r, "n={n}");
        seen.insert(p);
        r += 1u32;
      }
      assert_eq!(BigUint::from(seen.len()), total);
    }
  }

  #[test]
  fn rank_leaves_input_alone() {
    let p = ZPerm::try_from([4, 2, 0, 3, 1]).unwrap();
    let copy = p.clone();
    let r = rank(&p);
    assert_eq!(p, copy);
    assert_eq!(unrank(&r, 5).unwrap(), p);
  }

  #[test]
  fn out_of_range() {
    let total = factorial(5);
    assert_eq!(
      unrank(&total, 5),
      Err(PermError::OutOfRange { rank: total.clone(), n: 5 })
    );
    assert!(unrank(&BigUint::from(1u32), 1).is_err());
    assert_eq!(unrank(&BigUint::from(0u32), 0).unwrap(), ZPerm::identity(0));
  }
}
