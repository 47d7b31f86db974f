//! Factorial number system.
//!
//! A [`Fact`] of length `n-1` holds a Lehmer code for permutations of `n`
//! elements. Digit `i` is the coefficient of the place value `(i+1)!` and must
//! lie in `0..i+2`, so the representable integers are exactly `0..n!`.

use crate::{
  error::{PermError, PermResult},
  util::div_rem_digit,
  zperm::ZPerm,
};

use itertools::Itertools as _;
use num_bigint::BigUint;
use num_traits::Zero as _;

/// A non-negative integer in factoradic form, least significant digit first.
///
/// Digits out of their bound are representable, which makes the value
/// invalid. See [`Fact::is_valid`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Fact(Vec<usize>);

impl Fact {
  /// The Lehmer code of `x` sized for permutations of `n` elements.
  ///
  /// Fails if `x >= n!`.
  pub fn from_integer(x: &BigUint, n: usize) -> PermResult<Self> {
    match mixed_radix_digits(x, n.saturating_sub(1)) {
      Some(digits) => Ok(Self(digits)),
      None => {
        tracing::debug!("factoradic value {x} does not fit {n} elements");
        Err(PermError::OutOfRange {
          rank: x.clone(),
          n,
        })
      }
    }
  }

  /// Reassigns `self` to `x`, keeping the length.
  ///
  /// On failure `self` is unchanged.
  pub fn set(&mut self, x: &BigUint) -> PermResult<()> {
    let n = self.len() + 1;
    *self = Self::from_integer(x, n)?;
    Ok(())
  }

  /// Evaluates the digits by Horner's rule, most significant digit first.
  ///
  /// Fails on an invalid digit, whose value would not be below `n!`.
  pub fn to_integer(&self) -> PermResult<BigUint> {
    self.validate()?;
    let Some(&msd) = self.0.last() else {
      return Ok(BigUint::zero());
    };
    let mut s = BigUint::from(msd);
    for i in (1..self.len()).rev() {
      s *= i + 1;
      s += self.0[i - 1];
    }
    Ok(s)
  }

  /// Decodes the Lehmer code into its permutation.
  ///
  /// The most significant digit `d` selects the `d`-th smallest value for
  /// position `0`, the next digit selects among the remaining values, and so on.
  pub fn to_permutation(&self) -> PermResult<ZPerm> {
    self.validate()?;
    let mut p = vec![0; self.len() + 1];
    self.decode_into(&mut p);
    Ok(ZPerm::new_unchecked(p))
  }

  pub fn is_valid(&self) -> bool {
    self.validate().is_ok()
  }

  pub(crate) fn validate(&self) -> PermResult<()> {
    for (index, &digit) in self.0.iter().enumerate() {
      let bound = index + 2;
      if digit >= bound {
        return Err(PermError::InvalidDigit {
          index,
          digit,
          bound,
        });
      }
    }
    Ok(())
  }

  /// Writes the permutation for a valid code into `buf`.
  pub(crate) fn decode_into(&self, buf: &mut [usize]) {
    debug_assert_eq!(buf.len(), self.len() + 1);
    for (i, x) in buf.iter_mut().enumerate() {
      *x = i;
    }
    let last = self.len();
    for i in 0..last {
      let dx = i + self.0[last - 1 - i];
      buf[i..=dx].rotate_right(1);
    }
  }
}

fn mixed_radix_digits(x: &BigUint, len: usize) -> Option<Vec<usize>> {
  let mut digits = vec![0; len];
  let mut quo = x.clone();
  for (i, digit) in digits.iter_mut().enumerate() {
    if quo.is_zero() {
      break;
    }
    *digit = div_rem_digit(&mut quo, i + 2);
  }
  quo.is_zero().then_some(digits)
}

impl Fact {
  pub fn len(&self) -> usize {
    self.0.len()
  }
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
  pub fn digits(&self) -> &[usize] {
    &self.0
  }
}

impl From<Vec<usize>> for Fact {
  fn from(digits: Vec<usize>) -> Self {
    Self(digits)
  }
}
impl From<Fact> for Vec<usize> {
  fn from(value: Fact) -> Self {
    value.0
  }
}

/// Most significant digit first, with a trailing `0` for the `0!` place.
/// Appends `invalid` if any digit exceeds its bound.
impl std::fmt::Display for Fact {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let digits = self.0.iter().rev().chain(std::iter::once(&0)).join(" ");
    write!(f, "Fact({digits})")?;
    if !self.is_valid() {
      write!(f, "invalid")?;
    }
    Ok(())
  }
}
