use super::*;

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Wrapping division at `N` bits, truncating toward zero.
  ///
  /// Unlike the other operations, the quotient depends on more than the low bits, so we divide
  /// logical values. These are at most 33 bits wide in an `i64`, so the division itself cannot
  /// overflow; the single case where the quotient is out of the domain, `MIN / -1` (signed),
  /// wraps back to `MIN` like every other overflow.
  ///
  /// Division by zero does not panic: the result has every logical bit set, i.e. it is `-1` if
  /// signed and [`Self::MAX`] if unsigned. This is what the RISC-V `div`/`divu` instructions do.
  /// Use [`Self::checked_div`] to tell this case apart.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<8>::wrapping_new(-7).div(SInt::<8>::wrapping_new(2)).value(), -3);
  /// assert_eq!(SInt::<8>::MIN.div(SInt::<8>::wrapping_new(-1)), SInt::<8>::MIN);
  /// assert_eq!(SInt::<8>::ONE.div(SInt::<8>::ZERO).value(), -1);
  /// assert_eq!(UInt::<8>::ONE.div(UInt::<8>::ZERO), UInt::<8>::MAX);
  /// ```
  #[inline]
  pub const fn div(self, other: Self) -> Self {
    if other.0 == 0 {
      return Self::from_bits(!0)
    }
    Self::wrapping_new(self.value() / other.value())
  }

  /// As [`Self::div`], but returns `None` when dividing by zero.
  #[inline]
  pub const fn checked_div(self, other: Self) -> Option<Self> {
    if other.0 == 0 {
      None
    } else {
      Some(self.div(other))
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
