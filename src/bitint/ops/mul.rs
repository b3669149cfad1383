use super::*;

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Wrapping multiplication at `N` bits.
  ///
  /// As with addition, the low `N` bits of a product only depend on the low `N` bits of the
  /// factors, and are the same whether they are read as signed or unsigned. So a wrapping `u32`
  /// multiplication of the carriers, followed by canonicalisation, is exact.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<6>::wrapping_new(-5).mul(SInt::<6>::wrapping_new(7)).value(), -35 + 64);
  /// assert_eq!(UInt::<6>::wrapping_new(9).mul(UInt::<6>::wrapping_new(9)).value(), 81 - 64);
  /// ```
  #[inline]
  pub const fn mul(self, other: Self) -> Self {
    Self::from_bits(self.0.wrapping_mul(other.0))
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}

#[cfg(test)]
mod tests {
  super::mk_tests!{*, *=}

  #[test]
  fn min_times_minus_one() {
    // -2^(N-1) * -1 = 2^(N-1), which wraps back to -2^(N-1).
    let m1 = BitInt::<7, true>::wrapping_new(-1);
    assert_eq!(BitInt::<7, true>::MIN * m1, BitInt::<7, true>::MIN);
    let m1 = BitInt::<32, true>::wrapping_new(-1);
    assert_eq!(BitInt::<32, true>::MIN * m1, BitInt::<32, true>::MIN);
  }

  #[test]
  fn unsigned_32_no_sign_confusion() {
    let a = BitInt::<32, false>::MAX;
    assert_eq!((a * a).value(), 1);
    assert_eq!((a * BitInt::wrapping_new(2)).value(), u32::MAX as i64 - 1);
  }
}
