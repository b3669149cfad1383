use super::*;

use crate::carrier::Carrier;

macro_rules! make_impl {
  ($int:ty) => {
    impl<
      const N: u32,
      const SIGNED: bool,
    > WrapFrom<$int> for BitInt<N, SIGNED> {
      #[doc = concat!("Convert an `", stringify!($int), "` into a `BitInt`, reducing it modulo 2^N.")]
      ///
      /// Since `N <= 32`, only the low 32 bits of the input matter; any wider bits are
      /// discarded, and narrower signed inputs are sign-extended first.
      #[inline]
      fn wrap_from(value: $int) -> Self {
        Self::from_bits(value as Carrier)
      }
    }
  }
}

make_impl!{i8}
make_impl!{i16}
make_impl!{i32}
make_impl!{i64}
make_impl!{i128}
make_impl!{isize}
make_impl!{u8}
make_impl!{u16}
make_impl!{u32}
make_impl!{u64}
make_impl!{u128}
make_impl!{usize}

impl<const N: u32, const SIGNED: bool>
From<BitInt<N, SIGNED>> for i64 {
  /// See [`BitInt::value`]. This is always exact.
  #[inline]
  fn from(value: BitInt<N, SIGNED>) -> Self {
    value.value()
  }
}
