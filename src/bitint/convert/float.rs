use super::*;

use crate::carrier::Carrier;

/// Truncate a finite [`f64`] toward zero and return the low 32 bits of the result, in two's
/// complement.
///
/// This decodes the IEEE 754 fields directly rather than going through an `as` cast, which
/// saturates at the bounds of the target type instead of wrapping. Any float with magnitude
/// `>= 2^53` is an integer multiple of `2^(exponent - 52)`, so once that is `>= 2^32` its low 32
/// bits are all 0.
fn truncate_finite_f64(num: f64) -> Carrier {
  debug_assert!(num.is_finite());
  const MANTISSA_DIGITS_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;
  const EXP_BIAS: i32 = f64::MAX_EXP - 1;
  const HIDDEN_BIT: u64 = 1 << MANTISSA_DIGITS_EXPLICIT;

  // Extract sign, mantissa, and exponent.
  let bits = num.to_bits();
  let sign = bits >> 63 != 0;
  let mantissa = bits & (HIDDEN_BIT - 1);
  let exponent = ((bits << 1) >> (MANTISSA_DIGITS_EXPLICIT + 1)) as i32;

  // Subnormals, and normals with an unbiased exponent < 0, are less than 1 in magnitude: they
  // truncate to 0.
  if exponent < EXP_BIAS {
    return 0
  }

  // The value is `(HIDDEN_BIT | mantissa) * 2^shift`. We only need the integer part of it,
  // modulo 2^32.
  let frac = HIDDEN_BIT | mantissa;
  let shift = exponent - EXP_BIAS - MANTISSA_DIGITS_EXPLICIT as i32;
  let magnitude = if shift < 0 {
    // Here `-shift <= 52`, so never shifts out the whole `u64`.
    (frac >> -shift) as Carrier
  } else if shift < Carrier::BITS as i32 {
    (frac << shift) as Carrier
  } else {
    0
  };

  if sign { magnitude.wrapping_neg() } else { magnitude }
}

impl<
  const N: u32,
  const SIGNED: bool,
> BitInt<N, SIGNED> {
  /// Convert to an [`f64`]. This is always exact.
  #[inline]
  pub const fn to_f64(self) -> f64 {
    self.value() as f64
  }

  /// Convert to an [`f32`], rounding to nearest (ties to even) if `|self| > 2^24`.
  ///
  /// ```
  /// # use soft_bitint::{SInt, UInt};
  /// assert_eq!(UInt::<8>::MAX.to_f32(), 255.0);
  /// assert_eq!(SInt::<32>::MIN.to_f32(), -2147483648.0);
  /// assert_eq!(UInt::<25>::MAX.to_f32(), 33554432.0);
  /// ```
  #[inline]
  pub const fn to_f32(self) -> f32 {
    // `i64 → f64` is exact for any value in the domain, so there's no double rounding.
    self.to_f64() as f32
  }
}

impl<const N: u32, const SIGNED: bool>
From<BitInt<N, SIGNED>> for f64 {
  /// See [`BitInt::to_f64`].
  #[inline]
  fn from(value: BitInt<N, SIGNED>) -> Self {
    value.to_f64()
  }
}

impl<const N: u32, const SIGNED: bool>
From<BitInt<N, SIGNED>> for f32 {
  /// See [`BitInt::to_f32`].
  #[inline]
  fn from(value: BitInt<N, SIGNED>) -> Self {
    value.to_f32()
  }
}

impl<
  const N: u32,
  const SIGNED: bool,
> WrapFrom<f64> for BitInt<N, SIGNED> {
  /// Convert an `f64` into a `BitInt`:
  ///
  /// - If the value is any infinity or any NaN, it converts to [`BitInt::ZERO`].
  /// - Otherwise, the value is truncated toward zero, then reduced modulo 2^N.
  ///
  /// Note that the reduction is exact at any magnitude: `2^40 + 3.0` converts to `3`, not to
  /// [`BitInt::MAX`].
  fn wrap_from(value: f64) -> Self {
    use core::num::FpCategory;
    match value.classify() {
      FpCategory::Nan | FpCategory::Infinite => Self::ZERO,
      FpCategory::Zero | FpCategory::Subnormal => Self::ZERO,
      FpCategory::Normal => Self::from_bits(truncate_finite_f64(value)),
    }
  }
}

impl<
  const N: u32,
  const SIGNED: bool,
> WrapFrom<f32> for BitInt<N, SIGNED> {
  /// Convert an `f32` into a `BitInt`:
  ///
  /// - If the value is any infinity or any NaN, it converts to [`BitInt::ZERO`].
  /// - Otherwise, the value is truncated toward zero, then reduced modulo 2^N.
  fn wrap_from(value: f32) -> Self {
    // `f32 → f64` is exact.
    Self::wrap_from(f64::from(value))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_small() {
    assert_eq!(truncate_finite_f64(0.0), 0);
    assert_eq!(truncate_finite_f64(-0.0), 0);
    assert_eq!(truncate_finite_f64(0.999), 0);
    assert_eq!(truncate_finite_f64(-0.999), 0);
    assert_eq!(truncate_finite_f64(f64::MIN_POSITIVE), 0);
    assert_eq!(truncate_finite_f64(1.0), 1);
    assert_eq!(truncate_finite_f64(-1.0), 0xffff_ffff);
    assert_eq!(truncate_finite_f64(2.5), 2);
    assert_eq!(truncate_finite_f64(-2.5), (-2_i32) as u32);
  }

  #[test]
  fn truncate_large() {
    assert_eq!(truncate_finite_f64(4294967295.0), 0xffff_ffff);
    assert_eq!(truncate_finite_f64(4294967296.0), 0);
    assert_eq!(truncate_finite_f64(4294967297.0), 1);
    assert_eq!(truncate_finite_f64(-4294967297.0), 0xffff_ffff);
    assert_eq!(truncate_finite_f64(9007199254740993.0), 0);  // Rounds to 2^53 when parsed
    assert_eq!(truncate_finite_f64(9007199254740994.0), 2);
    assert_eq!(truncate_finite_f64(1e300), 0);
    assert_eq!(truncate_finite_f64(f64::MAX), 0);
    assert_eq!(truncate_finite_f64(f64::MIN), 0);
  }

  #[test]
  fn from_float_in_range() {
    assert_eq!(BitInt::<8, false>::wrap_from(255.0_f32).value(), 255);
    assert_eq!(BitInt::<8, true>::wrap_from(-128.0_f32).value(), -128);
    assert_eq!(BitInt::<8, true>::wrap_from(127.9_f32).value(), 127);
    assert_eq!(BitInt::<8, true>::wrap_from(-127.9_f64).value(), -127);
    assert_eq!(BitInt::<32, true>::wrap_from(-2147483648.0_f64), BitInt::<32, true>::MIN);
    assert_eq!(BitInt::<32, false>::wrap_from(4294967295.0_f64), BitInt::<32, false>::MAX);
  }

  #[test]
  fn from_float_wraps() {
    assert_eq!(BitInt::<8, false>::wrap_from(300.0_f32).value(), 44);
    assert_eq!(BitInt::<8, false>::wrap_from(-1.0_f32).value(), 255);
    assert_eq!(BitInt::<8, true>::wrap_from(128.0_f32).value(), -128);
    assert_eq!(BitInt::<4, true>::wrap_from(-9.5_f64).value(), 7);
    assert_eq!(BitInt::<1, true>::wrap_from(1.0_f64).value(), -1);
    assert_eq!(BitInt::<1, false>::wrap_from(3.0_f64).value(), 1);
    assert_eq!(BitInt::<16, true>::wrap_from(1099511627779.0_f64).value(), 3);  // 2^40 + 3
  }

  #[test]
  fn from_float_non_finite() {
    assert_eq!(BitInt::<8, true>::wrap_from(f32::NAN), BitInt::ZERO);
    assert_eq!(BitInt::<8, true>::wrap_from(f32::INFINITY), BitInt::ZERO);
    assert_eq!(BitInt::<8, true>::wrap_from(f32::NEG_INFINITY), BitInt::ZERO);
    assert_eq!(BitInt::<32, false>::wrap_from(f64::NAN), BitInt::ZERO);
    assert_eq!(BitInt::<32, false>::wrap_from(-f64::NAN), BitInt::ZERO);
    assert_eq!(BitInt::<32, false>::wrap_from(f64::INFINITY), BitInt::ZERO);
  }

  #[test]
  fn to_float() {
    assert_eq!(f32::from(BitInt::<8, false>::MAX), 255.0);
    assert_eq!(f32::from(BitInt::<8, true>::MIN), -128.0);
    assert_eq!(f32::from(BitInt::<1, true>::MIN), -1.0);
    assert_eq!(f64::from(BitInt::<32, false>::MAX), 4294967295.0);
    assert_eq!(f32::from(BitInt::<32, false>::MAX), 4294967296.0);
    assert_eq!(f32::from(BitInt::<32, true>::MAX), 2147483648.0);
    // 2^24 + 1 is not representable in an f32: ties to even.
    assert_eq!(f32::from(BitInt::<26, false>::wrapping_new(16777217)), 16777216.0);
    assert_eq!(f32::from(BitInt::<26, false>::wrapping_new(16777219)), 16777220.0);
  }

  #[test]
  fn to_float_from_float_roundtrip() {
    for x in BitInt::<12, true>::cases_exhaustive() {
      assert_eq!(BitInt::<12, true>::wrap_from(x.to_f32()), x);
    }
    for x in BitInt::<12, false>::cases_exhaustive() {
      assert_eq!(BitInt::<12, false>::wrap_from(x.to_f32()), x);
    }
  }

  /// Instantiate a suite of tests against the oracle: truncate the exact rational value of the
  /// float toward zero, then reduce it modulo 2^N.
  macro_rules! make_tests {
    ($float:ty, $n:literal) => {
      use super::*;
      use malachite::{Integer, rational::Rational};
      use malachite::base::num::arithmetic::traits::RoundToMultiple;
      use malachite::base::rounding_modes::RoundingMode;
      use proptest::prelude::*;

      fn is_correct_wrapped<const N: u32, const SIGNED: bool>(
        float: $float,
        int: BitInt<N, SIGNED>,
      ) -> bool {
        match Rational::try_from(float) {
          Ok(exact) => {
            let truncated = exact.round_to_multiple(Rational::from(1), RoundingMode::Down).0;
            let truncated = Integer::try_from(truncated).unwrap();
            int.value() == crate::bitint::test::wrap_exact::<N, SIGNED>(truncated)
          },
          Err(_) => int == BitInt::ZERO,
        }
      }

      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
        #[test]
        fn any_float(float: $float) {
          assert!(is_correct_wrapped(float, BitInt::<$n, true>::wrap_from(float)), "{float:?}");
          assert!(is_correct_wrapped(float, BitInt::<$n, false>::wrap_from(float)), "{float:?}");
        }

        #[test]
        fn near_integer(int: i64, frac in -1.0 .. 1.0_f64) {
          // Floats near integers of moderate size, which is where most inputs actually lie.
          let float = (int >> (int & 0x3f)) as $float + frac as $float;
          assert!(is_correct_wrapped(float, BitInt::<$n, true>::wrap_from(float)), "{float:?}");
          assert!(is_correct_wrapped(float, BitInt::<$n, false>::wrap_from(float)), "{float:?}");
        }
      }
    };
  }

  mod from_f64 {
    use super::*;

    mod bits_1 { make_tests!{f64, 1} }
    mod bits_8 { make_tests!{f64, 8} }
    mod bits_13 { make_tests!{f64, 13} }
    mod bits_31 { make_tests!{f64, 31} }
    mod bits_32 { make_tests!{f64, 32} }
  }

  mod from_f32 {
    use super::*;

    mod bits_1 { make_tests!{f32, 1} }
    mod bits_8 { make_tests!{f32, 8} }
    mod bits_13 { make_tests!{f32, 13} }
    mod bits_31 { make_tests!{f32, 31} }
    mod bits_32 { make_tests!{f32, 32} }
  }
}
