//! Steinhaus–Johnson–Trotter order, also called plain changes.
//!
//! Consecutive arrangements differ by a swap of two adjacent elements, so
//! their parity alternates. Two generators produce this order:
//!
//! - [`PlainChanges`]: the loopless recursive formulation, driving any
//!   borrowed slice in place.
//! - [`DirectedPlainChanges`]: the classical formulation with a direction per
//!   value, owning a [`ZPerm`](crate::ZPerm).

mod iterative;
mod recursive;

pub use iterative::DirectedPlainChanges;
pub use recursive::PlainChanges;
