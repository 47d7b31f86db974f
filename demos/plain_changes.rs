use permute::{DirectedPlainChanges, PlainChanges, ZPerm};

fn main() {
  tracing_subscriber::fmt::init();

  let mut colors = ["blue", "green", "red"];
  let mut it = PlainChanges::new(&mut colors);
  while it.advance() {
    println!("{:?}", it.current());
  }
  println!("final contents: {colors:?}");

  let n = 4;
  let mut it = DirectedPlainChanges::new(n);
  println!("{}", it.permutation());
  while it.advance() {
    let p: ZPerm = it.permutation();
    println!("{p} sign={}", p.sign());
  }
}
