use num_bigint::BigUint;

pub type PermResult<T> = Result<T, PermError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermError {
  /// The rank (or factoradic value) is not below `n!`.
  #[error("rank {rank} is out of range for permutations of length {n}")]
  OutOfRange { rank: BigUint, n: usize },
  #[error("lehmer code of length {code} does not fit a permutation of length {perm}")]
  SizeMismatch { code: usize, perm: usize },
  #[error("lehmer digit {digit} at index {index} is not below {bound}")]
  InvalidDigit {
    index: usize,
    digit: usize,
    bound: usize,
  },
  #[error("sequence is not a permutation of 0..{n}")]
  NotAPermutation { n: usize },
}
