/// A sign of `±1`.
///
/// Serves both as the parity of a permutation and as the direction
/// an element travels in plain changes order, where [`Sign::Neg`] points
/// towards index `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
  #[default]
  Pos = 1,
  Neg = -1,
}

impl Sign {
  /// Even counts are positive, odd counts negative.
  pub fn from_parity(n: usize) -> Self {
    match n % 2 {
      0 => Self::Pos,
      1 => Self::Neg,
      _ => unreachable!(),
    }
  }

  pub fn other(self) -> Self {
    match self {
      Sign::Pos => Sign::Neg,
      Sign::Neg => Sign::Pos,
    }
  }
  pub fn flip(&mut self) {
    *self = self.other()
  }

  /// Moves `idx` one step in this direction.
  ///
  /// The caller guarantees that stepping [`Sign::Neg`] never starts at `0`.
  pub fn step(self, idx: usize) -> usize {
    match self {
      Sign::Pos => idx + 1,
      Sign::Neg => idx - 1,
    }
  }
}
impl From<Sign> for char {
  fn from(o: Sign) -> Self {
    match o {
      Sign::Pos => '+',
      Sign::Neg => '-',
    }
  }
}
impl std::fmt::Display for Sign {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
    write!(fmt, "{}", char::from(*self))
  }
}
