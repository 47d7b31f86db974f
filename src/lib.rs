//! Permutation generators and rankings.
//!
//! Three total orders on the permutations of `0..n` are supported:
//!
//! - lexicographic: [`lex::next`] steps sets and multisets, [`lex::rank`] and
//!   [`lex::unrank`] convert in `O(n log n)`.
//! - Steinhaus–Johnson–Trotter (plain changes): [`PlainChanges`] and
//!   [`DirectedPlainChanges`].
//! - Myrvold–Ruskey: [`mr::rank`] and [`mr::unrank`] in a linear number of
//!   swaps.
//!
//! Ranks grow like `n!` and are always [`BigUint`]s.

pub mod error;
pub mod factoradic;
pub mod lex;
pub mod mr;
pub mod order;
pub mod repetition;
pub mod sign;
pub mod sjt;
pub mod util;
pub mod zperm;

pub use error::{PermError, PermResult};
pub use factoradic::Fact;
pub use order::{Lexicographic, MyrvoldRuskey, Order, Rank};
pub use repetition::Alphabet;
pub use sign::Sign;
pub use sjt::{DirectedPlainChanges, PlainChanges};
pub use zperm::ZPerm;

pub use num_bigint::BigUint;
