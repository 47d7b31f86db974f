use permute::{lex, util::factorial, BigUint, Fact, Lexicographic, MyrvoldRuskey, Rank, ZPerm};

fn main() {
  tracing_subscriber::fmt::init();

  let mut p = ZPerm::identity(3);
  loop {
    let lex: Rank<Lexicographic> = p.rank_in();
    let mr: Rank<MyrvoldRuskey> = p.rank_in();
    println!("{p}  {lex}  {mr}");
    if !p.lex_next() {
      break;
    }
  }

  let mut multiset = vec!['a', 'b', 'b'];
  println!("{multiset:?}");
  while lex::next(&mut multiset) {
    println!("{multiset:?}");
  }

  let n = 25;
  let rank = factorial(n) / BigUint::from(3u32);
  let f = match Fact::from_integer(&rank, n) {
    Ok(f) => f,
    Err(err) => {
      eprintln!("{err}");
      return;
    }
  };
  println!("{rank} = {f}");
  match f.to_permutation() {
    Ok(p) => println!("{p}"),
    Err(err) => eprintln!("{err}"),
  }

  // out of range ranks are reported, not wrapped
  if let Err(err) = ZPerm::from_mr_rank(&factorial(n), n) {
    println!("{err}");
  }
}
