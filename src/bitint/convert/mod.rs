use super::*;

/// Used to do value-to-value conversions that *wrap*: the input is reduced modulo 2^N into the
/// domain of the target type, exactly as a cast to `N`-bit two's complement hardware would. It
/// is the reciprocal of [`WrapInto`].
///
/// The interface is identical to the standard [`From`], but unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not lossless_: out-of-range inputs wrap around rather than fail. Use
/// [`BitInt::new`] for the checked version.
///
/// For the exact meaning of each conversion, **consult the documentation of the specific
/// implementations of `wrap_from`**. As with `From`, prefer implementing [`WrapFrom`] (which
/// provides [`WrapInto`] for free) and bounding on [`WrapInto`]. There's also a blanket
/// implementation of `WrapFrom<T> for T`.
///
/// # Examples
///
/// ```
/// # use soft_bitint::*;
/// assert_eq!(SInt::<8>::wrap_from(200_i32).value(), -56);
/// assert_eq!(UInt::<8>::wrap_from(-1_i64).value(), 255);
/// assert_eq!(UInt::<8>::wrap_from(300.9_f64).value(), 44);
/// assert_eq!(SInt::<8>::wrap_from(-2.5_f32).value(), -2);
/// assert_eq!(SInt::<8>::wrap_from(f32::NAN), SInt::<8>::ZERO);
/// ```
pub trait WrapFrom<T> {
  /// Converts to this type from the input type, reducing modulo 2^N if out of range.
  #[must_use]
  fn wrap_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that *wrap*; the reciprocal of [`WrapFrom`].
///
/// The interface is identical to the standard [`Into`]. There's a blanket implementation of
/// `WrapInto<T> for T`, and `WrapFrom<T> for U` implies `WrapInto<U> for T`.
///
/// # Examples
///
/// ```
/// # use soft_bitint::*;
/// let a: UInt<4> = 17_u8.wrap_into();
/// assert_eq!(a.value(), 1);
/// let b: SInt<16> = 40000.0_f64.wrap_into();
/// assert_eq!(b.value(), 40000 - 65536);
/// ```
pub trait WrapInto<T> {
  /// Converts this type into the (usually inferred) input type, reducing modulo 2^N if out of
  /// range.
  #[must_use]
  fn wrap_into(self) -> T;
}

impl<T> WrapFrom<T> for T {
  fn wrap_from(value: T) -> Self {
    value
  }
}

impl<T, U> WrapInto<U> for T where U: WrapFrom<T> {
  fn wrap_into(self) -> U {
    U::wrap_from(self)
  }
}

mod float;
mod int;
