use itertools::Itertools as _;
use permute::{lex, BigUint, ZPerm};

#[test]
fn stepping_matches_itertools() {
  for n in 0..=6 {
    let expected: Vec<Vec<usize>> = (0..n).permutations(n).collect();
    let mut p = ZPerm::identity(n);
    let mut visited = vec![p.clone().into_vec()];
    while p.lex_next() {
      visited.push(p.clone().into_vec());
    }
    assert_eq!(visited, expected, "n={n}");
    // the final failed step leaves the last arrangement in place
    let descending: Vec<usize> = (0..n).rev().collect();
    assert_eq!(p.as_slice(), descending.as_slice());
  }
}

#[test]
fn multiset_has_no_duplicates_or_gaps() {
  let start = vec![1, 1, 2, 2, 2, 5];
  let visited: Vec<_> = lex::LexPermutations::new(start.clone()).collect();
  let expected: Vec<Vec<i32>> = start
    .iter()
    .copied()
    .permutations(start.len())
    .sorted()
    .dedup()
    .collect();
  // 6! / (2! 3!)
  assert_eq!(visited.len(), 60);
  assert_eq!(visited, expected);
}

#[test]
fn rank_is_position_in_enumeration() {
  for n in 0..=6 {
    for (i, elements) in (0..n).permutations(n).enumerate() {
      let p = ZPerm::try_from(elements).unwrap();
      assert_eq!(p.lex_rank(), BigUint::from(i), "n={n}");
      assert_eq!(ZPerm::from_lex_rank(&BigUint::from(i), n).unwrap(), p);
    }
  }
}

#[test]
fn unrank_at_scale() {
  let n = 100;
  let rank: BigUint = "123456789012345678901234567890123456789012345678901234567890"
    .parse()
    .unwrap();
  let p = ZPerm::from_lex_rank(&rank, n).unwrap();
  assert_eq!(p.len(), n);
  assert_eq!(p.lex_rank(), rank);

  let lehmer = permute::Fact::from_integer(&rank, n).unwrap();
  assert_eq!(lehmer.to_permutation().unwrap(), p);
}
