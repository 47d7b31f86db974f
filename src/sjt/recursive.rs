use crate::sign::Sign;

/// State of one recursion level, which sweeps the last element of its
/// window across the window.
#[derive(Debug, Clone, Copy)]
struct Level {
  /// Sweep position in `0..=size`. `size` and `0` are the two resting ends
  /// where the inner level takes a step instead.
  pos: usize,
  dir: Sign,
  more: bool,
}

impl Level {
  fn new(size: usize) -> Self {
    Self {
      pos: size,
      dir: Sign::Neg,
      more: true,
    }
  }
}

/// Loopless plain changes cursor over a borrowed slice.
///
/// The first [`advance`](Self::advance) reports the initial arrangement
/// without touching it. Every further call performs a single adjacent swap,
/// amortized O(1). After all `n!` arrangements the slice is back in its
/// initial order and `advance` keeps returning `false` without touching it.
///
/// Elements are moved by position only, so they need not be distinct or
/// comparable.
#[derive(Debug)]
pub struct PlainChanges<'a, T> {
  buf: &'a mut [T],
  /// `levels[k]` drives windows of size `k+1`.
  levels: Vec<Level>,
}

impl<'a, T> PlainChanges<'a, T> {
  pub fn new(buf: &'a mut [T]) -> Self {
    let levels = (1..=buf.len().max(1)).map(Level::new).collect();
    Self { buf, levels }
  }

  /// Moves to the next arrangement. Returns `false` once exhausted.
  pub fn advance(&mut self) -> bool {
    let more = advance(&mut self.levels, self.buf);
    if !more {
      tracing::trace!("plain changes of {} elements exhausted", self.buf.len());
    }
    more
  }

  pub fn current(&self) -> &[T] {
    self.buf
  }

  pub fn is_exhausted(&self) -> bool {
    self.levels.last().is_some_and(|level| !level.more)
  }
}

/// One step of the outermost level in `levels` on the window `buf`.
fn advance<T>(levels: &mut [Level], buf: &mut [T]) -> bool {
  let n = buf.len();
  let Some((level, inner)) = levels.split_last_mut() else {
    return false;
  };

  // single shot
  if n <= 1 {
    return std::mem::replace(&mut level.more, false);
  }
  if !level.more {
    return false;
  }

  if level.pos == n {
    level.pos -= 1;
    level.more = advance(inner, &mut buf[..n - 1]);
    level.dir = Sign::Neg;
  } else if level.pos == 0 {
    level.pos = 1;
    level.more = advance(inner, &mut buf[1..]);
    level.dir = Sign::Pos;
    if !level.more {
      // restore the initial order
      buf.swap(0, 1);
    }
  } else {
    buf.swap(level.pos, level.pos - 1);
    level.pos = level.dir.step(level.pos);
  }
  level.more
}
