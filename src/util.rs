use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::ToPrimitive as _;

/// `n!` as an arbitrary-precision integer.
///
/// Already `21!` overflows a `u64`, so every rank computation goes through this.
pub fn factorial(n: usize) -> BigUint {
  (2..=n).map(BigUint::from).product()
}

/// Divides `x` by `radix` in place and returns the remainder.
pub fn div_rem_digit(x: &mut BigUint, radix: usize) -> usize {
  let (quo, rem) = x.div_rem(&BigUint::from(radix));
  *x = quo;
  // rem < radix, so it always fits
  rem.to_usize().unwrap_or_default()
}

/// Returns `⌈log₂ n⌉` for `n > 0` and `0` for `n == 0`.
pub fn ceil_log2(n: usize) -> u32 {
  match n {
    0 | 1 => 0,
    _ => n.next_power_of_two().trailing_zeros(),
  }
}
