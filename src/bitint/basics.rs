use super::*;
use crate::carrier::{self, Carrier, CARRIER_BITS};

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// The size of this type in bits (i.e. parameter `N`).
  ///
  /// Note: this is the logical size, the value is always stored in a 32-bit [`Carrier`].
  pub const BITS: u32 = {
    assert!(
      N >= 1,
      "A BitInt cannot have fewer than 1 bit",
    );
    assert!(
      N <= CARRIER_BITS,
      "Cannot represent an N-bit BitInt in a 32-bit carrier for N > 32",
    );
    N
  };

  /// Whether this type is signed (i.e. parameter `SIGNED`).
  pub const SIGNED: bool = SIGNED;

  /// When representing an `N`-bit int in the 32-bit carrier, the leftmost `32 - N` bits are
  /// junk; they are always the same as bit `N-1` if signed, and 0 if unsigned (the function
  /// [`Self::from_bits`] maintains this invariant).
  ///
  /// If [`Self::BITS`] is 32, this is `0`.
  pub(crate) const JUNK_BITS: u32 = CARRIER_BITS - Self::BITS;

  /// Construct a `BitInt` from a carrier. Bits higher (more significant) than the lowest `N`
  /// ([`Self::BITS`]) bits, if any, are ignored.
  #[inline]
  pub const fn from_bits(bits: Carrier) -> Self {
    Self(carrier::extend(bits, Self::BITS, SIGNED))
  }

  /// As [`Self::from_bits`], but does not canonicalise `bits`.
  ///
  /// # Safety
  ///
  /// `bits` has to be a result of a [`Self::to_bits`] call, i.e. its junk bits have to be
  /// canonical already. Note that if `N == 32` this always holds. Passing anything else breaks
  /// the invariants every other method relies on (though it is not memory-unsafe).
  #[inline]
  pub const unsafe fn from_bits_unchecked(bits: Carrier) -> Self {
    Self(bits)
  }

  /// Return the carrier of `self`. Bits higher (more significant) than the lowest `N`
  /// ([`Self::BITS`]) bits, if any, are canonical: a copy of bit `N-1` if [`Self::SIGNED`], else
  /// 0.
  #[inline]
  pub const fn to_bits(self) -> Carrier {
    self.0
  }

  /// As [`Self::to_bits`], but with the junk bits cleared, i.e. just the `N` significant bits.
  #[inline]
  pub const fn to_bits_unsigned(self) -> Carrier {
    carrier::mask_lsb(self.0, Self::BITS)
  }

  /// Construct a `BitInt` from just its `N` significant bits, as returned by
  /// [`Self::to_bits_unsigned`]. Since [`Self::from_bits`] ignores junk bits anyway, this is the
  /// same function; it exists to make roundtrips read symmetrically.
  #[inline]
  pub const fn from_bits_unsigned(bits: Carrier) -> Self {
    Self::from_bits(bits)
  }

  /// Construct a `BitInt` holding exactly `value`, if it lies in the domain of this type.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<4>::new(-8), Some(SInt::<4>::MIN));
  /// assert_eq!(SInt::<4>::new(8), None);
  /// assert_eq!(UInt::<4>::new(-1), None);
  /// ```
  #[inline]
  pub const fn new(value: i64) -> Option<Self> {
    if carrier::in_domain(value, Self::BITS, SIGNED) {
      Some(Self::wrapping_new(value))
    } else {
      None
    }
  }

  /// Construct a `BitInt` from the low `N` bits of `value`, i.e. reduce `value` modulo 2^N.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(SInt::<4>::wrapping_new(8).value(), -8);
  /// assert_eq!(UInt::<4>::wrapping_new(-1).value(), 15);
  /// ```
  #[inline]
  pub const fn wrapping_new(value: i64) -> Self {
    Self(carrier::pack(value, Self::BITS, SIGNED))
  }

  /// The logical value of `self`.
  #[inline]
  pub const fn value(self) -> i64 {
    carrier::unpack(self.0, Self::BITS, SIGNED)
  }

  /// Whether `self` is negative (only ever true if [`Self::SIGNED`]).
  #[inline]
  pub const fn is_negative(self) -> bool {
    SIGNED && (self.0 as i32) < 0
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use soft_bitint::BitInt;
  /// pub fn foo() -> u32 { BitInt::<0, true>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_signed_few() {}

  /// ```compile_fail
  /// use soft_bitint::BitInt;
  /// pub fn foo() -> u32 { BitInt::<0, false>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_unsigned_few() {}

  /// ```compile_fail
  /// use soft_bitint::BitInt;
  /// pub fn foo() -> u32 { BitInt::<33, true>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_signed_many() {}

  /// ```compile_fail
  /// use soft_bitint::BitInt;
  /// pub fn foo() -> u32 { BitInt::<33, false>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_unsigned_many() {}

  /// ```compile_fail
  /// use soft_bitint::BitInt;
  /// const _: i64 = BitInt::<40, false>::from_bits(0).value();
  /// ```
  #[allow(dead_code)]
  fn from_bits_fail_many() {}
}
