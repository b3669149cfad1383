use super::*;

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Wrapping negation at `N` bits, i.e. `0 - self`. For signed types `-MIN` is `MIN`; for
  /// unsigned types `-x` is `2^N - x` (and `-0` is `0`).
  #[inline]
  pub const fn neg(self) -> Self {
    Self::from_bits(self.0.wrapping_neg())
  }
}

impl<const N: u32, const SIGNED: bool>
core::ops::Neg for BitInt<N, SIGNED> {
  type Output = BitInt<N, SIGNED>;

  #[inline]
  fn neg(self) -> Self::Output { BitInt::neg(self) }
}

impl<const N: u32, const SIGNED: bool>
core::ops::Neg for &BitInt<N, SIGNED> {
  type Output = BitInt<N, SIGNED>;

  #[inline]
  fn neg(self) -> Self::Output { BitInt::neg(*self) }
}
