use crate::{sign::Sign, zperm::ZPerm};

/// Plain changes generator tracking a direction per value.
///
/// Each step swaps the largest mobile value with the neighbor it points at,
/// then reverses the direction of every larger value. A value is mobile if the
/// neighbor it points at is smaller.
///
/// Starts at the identity. Once no value is mobile, the generator resets to
/// the identity and stays exhausted until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct DirectedPlainChanges {
  /// The permutation framed by the sentinel value `n` on both ends.
  /// A sentinel is larger than every value, so nothing moves onto it.
  slots: Vec<usize>,
  /// Direction of travel, indexed by value.
  dirs: Vec<Sign>,
  exhausted: bool,
}

impl DirectedPlainChanges {
  pub fn new(n: usize) -> Self {
    let slots = std::iter::once(n)
      .chain(0..n)
      .chain(std::iter::once(n))
      .collect();
    let dirs = vec![Sign::Neg; n];
    Self {
      slots,
      dirs,
      exhausted: false,
    }
  }

  pub fn len(&self) -> usize {
    self.dirs.len()
  }
  pub fn is_empty(&self) -> bool {
    self.dirs.is_empty()
  }

  /// The current arrangement.
  pub fn current(&self) -> &[usize] {
    &self.slots[1..=self.len()]
  }
  pub fn permutation(&self) -> ZPerm {
    ZPerm::new_unchecked(self.current().to_vec())
  }

  pub fn is_exhausted(&self) -> bool {
    self.exhausted
  }

  /// Moves to the next arrangement.
  ///
  /// Returns `false` if the current one was the last.
  pub fn advance(&mut self) -> bool {
    if self.exhausted {
      return false;
    }

    let mut mobile: Option<(usize, usize)> = None;
    for pos in 1..=self.len() {
      let value = self.slots[pos];
      let neighbor = self.slots[self.dirs[value].step(pos)];
      if value > neighbor && mobile.is_none_or(|(_, max)| value > max) {
        mobile = Some((pos, value));
      }
    }

    let Some((pos, value)) = mobile else {
      tracing::trace!("plain changes of {} elements exhausted", self.len());
      self.restart();
      self.exhausted = true;
      return false;
    };

    self.slots.swap(pos, self.dirs[value].step(pos));
    for dir in &mut self.dirs[value + 1..] {
      dir.flip();
    }
    true
  }

  /// Starts a new cycle from the identity.
  pub fn reset(&mut self) {
    self.restart();
    self.exhausted = false;
  }

  fn restart(&mut self) {
    let n = self.len();
    for (value, slot) in self.slots[1..=n].iter_mut().enumerate() {
      *slot = value;
    }
    self.dirs.fill(Sign::Neg);
  }
}
