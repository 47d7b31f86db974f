/// An ordered set of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
  pub fn new(symbols: Vec<char>) -> Self {
    Self(symbols)
  }

  pub fn symbols(&self) -> &[char] {
    &self.0
  }

  /// Permutations with repetition: all `len(self)^n` words of length `n`.
  ///
  /// Counts in base `len(self)` with index `0` most significant, so words come
  /// in lexical order with respect to the alphabet. `visit` receives a buffer
  /// that is reused between calls. Enumeration stops as soon as `visit`
  /// returns `false`.
  ///
  /// Returns `false` if it was stopped early.
  pub fn count<F>(&self, n: usize, mut visit: F) -> bool
  where
    F: FnMut(&[char]) -> bool,
  {
    let mut word = vec![char::default(); n];
    self.fill(&mut word, 0, &mut visit)
  }

  fn fill<F>(&self, word: &mut [char], pos: usize, visit: &mut F) -> bool
  where
    F: FnMut(&[char]) -> bool,
  {
    if pos == word.len() {
      return visit(word);
    }
    for &symbol in &self.0 {
      word[pos] = symbol;
      if !self.fill(word, pos + 1, visit) {
        return false;
      }
    }
    true
  }
}

impl From<&str> for Alphabet {
  fn from(symbols: &str) -> Self {
    Self(symbols.chars().collect())
  }
}

#[cfg(test)]
mod test {
  use super::Alphabet;

  #[test]
  fn stops_when_asked() {
    let mut words = Vec::new();
    let completed = Alphabet::from("01").count(3, |w| {
      let s: String = w.iter().collect();
      let more = s != "011";
      words.push(s);
      more
    });
    assert!(!completed);
    assert_eq!(words, ["000", "001", "010", "011"]);
  }

  #[test]
  fn counts_all_words() {
    let mut words = Vec::new();
    assert!(Alphabet::from("abc").count(2, |w| {
      words.push(w.iter().collect::<String>());
      true
    }));
    assert_eq!(words.len(), 9);
    assert_eq!(words.first().map(String::as_str), Some("aa"));
    assert_eq!(words.last().map(String::as_str), Some("cc"));
    assert!(words.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn degenerate() {
    let mut calls = 0;
    Alphabet::from("xy").count(0, |w| {
      assert!(w.is_empty());
      calls += 1;
      true
    });
    assert_eq!(calls, 1);

    let mut calls = 0;
    Alphabet::new(Vec::new()).count(2, |_| {
      calls += 1;
      true
    });
    assert_eq!(calls, 0);
  }
}
