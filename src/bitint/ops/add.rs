use super::*;

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Wrapping addition at `N` bits.
  ///
  /// The low `N` bits of a sum depend only on the low `N` bits of the addends, so we can add the
  /// carriers as `u32`s (with whatever carry lands in the junk bits) and re-canonicalise. This is
  /// the same for signed and unsigned.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<4>::wrapping_new(7).add(SInt::<4>::ONE).value(), -8);
  /// assert_eq!(UInt::<4>::MAX.add(UInt::<4>::ONE).value(), 0);
  /// ```
  #[inline]
  pub const fn add(self, other: Self) -> Self {
    Self::from_bits(self.0.wrapping_add(other.0))
  }

  /// Wrapping subtraction at `N` bits.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<4>::MIN.sub(SInt::<4>::ONE).value(), 7);
  /// assert_eq!(UInt::<4>::ZERO.sub(UInt::<4>::ONE).value(), 15);
  /// ```
  #[inline]
  pub const fn sub(self, other: Self) -> Self {
    Self::from_bits(self.0.wrapping_sub(other.0))
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}



#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wraps_at_width_not_carrier() {
    // 7 + 1 in 4-bit signed is -8, not 8.
    let a = BitInt::<4, true>::wrapping_new(7);
    assert_eq!((a + BitInt::ONE).value(), -8);
    assert_eq!((a + BitInt::ONE).to_bits(), 0xffff_fff8);
  }

  #[test]
  fn signed_1_bit() {
    // -1 + -1 = -2, which wraps to 0 in the two-value domain {-1, 0}.
    let m1 = BitInt::<1, true>::MIN;
    assert_eq!(m1.value(), -1);
    assert_eq!((m1 + m1).value(), 0);
    assert_eq!((m1 - m1).value(), 0);
    assert_eq!((BitInt::<1, true>::ZERO - m1).value(), -1);
  }

  #[test]
  fn full_width() {
    assert_eq!(BitInt::<32, true>::MAX + BitInt::ONE, BitInt::<32, true>::MIN);
    assert_eq!(BitInt::<32, false>::MAX + BitInt::ONE, BitInt::<32, false>::ZERO);
    assert_eq!(BitInt::<32, false>::ZERO - BitInt::ONE, BitInt::<32, false>::MAX);
  }
}
