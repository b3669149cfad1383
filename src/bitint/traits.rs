use super::*;

// Equality is derived: two canonical carriers are equal iff the values are. Ordering, however,
// cannot be derived from the carrier, since a signed carrier compared as a `u32` puts negative
// values above positive ones. So we compare logical values instead.

impl<const N: u32, const SIGNED: bool>
PartialOrd for BitInt<N, SIGNED> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<const N: u32, const SIGNED: bool>
Ord for BitInt<N, SIGNED> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.value().cmp(&other.value())
  }
}

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Returns the greater of `self` and `other`, under signed or unsigned ordering according to
  /// [`Self::SIGNED`]. If they are equal, returns `self`.
  ///
  /// Unlike [`Ord::max`], which returns the second operand on ties.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<4>::wrapping_new(-3).max(SInt::<4>::wrapping_new(2)).value(), 2);
  /// assert_eq!(UInt::<4>::wrapping_new(-3).max(UInt::<4>::wrapping_new(2)).value(), 13);
  /// ```
  #[inline]
  pub const fn max(self, other: Self) -> Self {
    if other.value() > self.value() { other } else { self }
  }

  /// Returns the lesser of `self` and `other`; if they are equal, returns `self`.
  #[inline]
  pub const fn min(self, other: Self) -> Self {
    if other.value() < self.value() { other } else { self }
  }
}
