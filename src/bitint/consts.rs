use super::*;
use crate::carrier;

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(0);

  /// One (`1`), the multiplicative identity element.
  ///
  /// Note that `1` is not in the domain of `BitInt<1, true>` (which is `{-1, 0}`); there, this
  /// constant wraps to `-1`, like any other 1-bit signed arithmetic would.
  pub const ONE: Self = Self::from_bits(1);

  /// Smallest representable value: `0` if unsigned, `-2^(N-1)` if signed.
  //
  // Represented by the bit pattern `0b000...0` or `0b100...0` respectively.
  pub const MIN: Self = Self(carrier::min_value(Self::BITS, SIGNED));

  /// Largest representable value: `2^N - 1` if unsigned, `2^(N-1) - 1` if signed.
  //
  // Represented by the bit pattern `0b111...1` or `0b011...1` respectively.
  pub const MAX: Self = Self(carrier::max_value(Self::BITS, SIGNED));

  /// The [`Key`](crate::Key) naming this family in the dispatch surface.
  pub const KEY: crate::Key = crate::Key::new(Self::BITS, SIGNED);
}
