//! This module and its submodules contain the const-generic [`BitInt`] type: an `N`-bit signed or
//! unsigned integer (`1 <= N <= 32`) stored in a 32-bit [`Carrier`](crate::Carrier), whose
//! arithmetic wraps at `N` bits.
//!
//! Everything here is a thin layer of types over the bit-level functions of the `carrier`
//! module; with `N` and `SIGNED` known at compile time, those fold down to a couple
//! of shifts per operation.
//!
//! Some notation used in the comments:
//!
//!   - **Logical value**: the integer denoted by a `BitInt`, in `-2^(N-1) ..= 2^(N-1) - 1` if
//!     signed, or `0 ..= 2^N - 1` if unsigned.
//!   - **Junk bits**: bits `N..32` of the carrier. `BitInt` keeps them *canonical*: a copy of bit
//!     `N-1` if signed, 0 if unsigned.
//!   - **Wrap**: reduce modulo 2^N, like two's complement hardware of width `N`.

/// An integer with `N` bits, signed if `SIGNED` is true, using a [`u32`] carrier as its
/// underlying storage.
///
/// Examples:
///
/// ```
/// # use soft_bitint::BitInt;
/// type Foo = BitInt::<32, true>;  // Same domain as an `i32`
/// type Bar = BitInt::<6, false>;  // 0 ..= 63, stored in the low 6 bits of a `u32`
/// type Baz = BitInt::<1, true>;   // -1 ..= 0, not a boolean!
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash, Default)]  // Eq on the canonical carrier is Eq on the value
pub struct BitInt<
  const N: u32,
  const SIGNED: bool,
> (crate::Carrier);

/// Basics
mod basics;

/// Constants (zero, one, min, max)
mod consts;

/// Ordering, and `max`/`min`
mod traits;

/// Arithmetic
mod ops;

/// Negation
mod unary;

/// Conversions to and from ints and floats
pub(crate) mod convert;

/// Debug and Display
mod fmt;
