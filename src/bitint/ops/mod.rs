use super::*;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const N: u32, const SIGNED: bool>
    $trait<BitInt<N, SIGNED>> for BitInt<N, SIGNED> {
      type Output = BitInt<N, SIGNED>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { BitInt::$name(self, rhs) }
    }

    impl<const N: u32, const SIGNED: bool>
    $trait<&BitInt<N, SIGNED>> for BitInt<N, SIGNED> {
      type Output = BitInt<N, SIGNED>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { BitInt::$name(self, *rhs) }
    }

    impl<const N: u32, const SIGNED: bool>
    $trait<BitInt<N, SIGNED>> for &BitInt<N, SIGNED> {
      type Output = BitInt<N, SIGNED>;

      #[inline]
      fn $name(self, rhs: BitInt<N, SIGNED>) -> Self::Output { BitInt::$name(*self, rhs) }
    }

    impl<const N: u32, const SIGNED: bool>
    $trait<&BitInt<N, SIGNED>> for &BitInt<N, SIGNED> {
      type Output = BitInt<N, SIGNED>;

      #[inline]
      fn $name(self, rhs: &BitInt<N, SIGNED>) -> Self::Output { BitInt::$name(*self, *rhs) }
    }

    impl<const N: u32, const SIGNED: bool>
    $trait_assign<BitInt<N, SIGNED>> for BitInt<N, SIGNED> {
      #[inline]
      fn $name_assign(&mut self, rhs: BitInt<N, SIGNED>) { *self = BitInt::$name(*self, rhs) }
    }

    impl<const N: u32, const SIGNED: bool>
    $trait_assign<&BitInt<N, SIGNED>> for BitInt<N, SIGNED> {
      #[inline]
      fn $name_assign(&mut self, rhs: &BitInt<N, SIGNED>) { *self = BitInt::$name(*self, *rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::BitInt;
    use malachite::Integer;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::SInt::<8>::ONE;
      let mut b = crate::SInt::<8>::MAX;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is the exact result, wrapped to N bits.
    fn is_correct_wrapped<const N: u32, const SIGNED: bool>(
      a: BitInt<N, SIGNED>,
      b: BitInt<N, SIGNED>,
    ) -> bool {
      let result = a $op b;
      if stringify!($op) == "/" && b == BitInt::ZERO {
        return result == BitInt::from_bits(!0)
      }
      let exact = Integer::from(a.value()) $op Integer::from(b.value());
      result.value() == crate::bitint::test::wrap_exact::<N, SIGNED>(exact)
    }

    macro_rules! test_exhaustive {
      ($name:ident, $n:literal) => {
        #[test]
        fn $name() {
          for a in BitInt::<$n, true>::cases_exhaustive() {
            for b in BitInt::<$n, true>::cases_exhaustive() {
              assert!(is_correct_wrapped(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
          for a in BitInt::<$n, false>::cases_exhaustive() {
            for b in BitInt::<$n, false>::cases_exhaustive() {
              assert!(is_correct_wrapped(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $n:literal) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in BitInt::<$n, true>::cases_proptest(),
            b in BitInt::<$n, true>::cases_proptest(),
            c in BitInt::<$n, false>::cases_proptest(),
            d in BitInt::<$n, false>::cases_proptest(),
          ) {
            assert!(is_correct_wrapped(a, b), "{:?} ⋅ {:?}", a, b);
            assert!(is_correct_wrapped(c, d), "{:?} ⋅ {:?}", c, d)
          }
        }
      };
    }

    test_exhaustive!{bits_1_exhaustive, 1}
    test_exhaustive!{bits_2_exhaustive, 2}
    test_exhaustive!{bits_3_exhaustive, 3}
    test_exhaustive!{bits_4_exhaustive, 4}
    test_exhaustive!{bits_5_exhaustive, 5}
    test_exhaustive!{bits_7_exhaustive, 7}

    // Above ~8 bits = 2^16 pairs per signedness, it's too slow to go through the oracle
    // exhaustively in a debug build.
    test_exhaustive!{bits_8_exhaustive, 8}
    test_proptest!{bits_9_proptest, 9}
    test_proptest!{bits_12_proptest, 12}
    test_proptest!{bits_16_proptest, 16}
    test_proptest!{bits_23_proptest, 23}
    test_proptest!{bits_24_proptest, 24}
    test_proptest!{bits_31_proptest, 31}
    test_proptest!{bits_32_proptest, 32}
  }
}

pub(crate) use mk_tests;
