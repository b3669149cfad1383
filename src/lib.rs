#![cfg_attr(not(test), no_std)]
//! This crate provides a bit-exact software implementation of *custom integer datatypes*: signed
//! and unsigned integers of any width from 1 to 32 bits, as a tensor compiler sees them when it
//! lowers arithmetic on a non-native type to calls into a fixed bundle of pure functions.
//!
//! # Introduction
//!
//! Every value, whatever its logical width `N`, is boxed in a 32-bit [`Carrier`]. Arithmetic is
//! carried out at the logical width, so that overflow wraps modulo 2<sup>N</sup> exactly as
//! `N`-bit hardware would, and never modulo 2<sup>32</sup>.
//!
//! There are two ways to use it:
//!
//!   - From Rust, through the const-generic [`BitInt<N, SIGNED>`](BitInt) type (or its aliases
//!     [`SInt<N>`] and [`UInt<N>`]), with the usual operators.
//!   - From generated code, through the `extern "C"` entry points: eight per family (`MinSINT8`,
//!     `SINT8ToFloat`, `FloatToSINT8`, `SINT8Max`, `SINT8Add`, `SINT8Sub`, `SINT8Mul`,
//!     `SINT8Div`, and so on for every width and signedness). These are generated from the cross
//!     product by the build script, and are also reachable at run time via [`entry_point`] and
//!     [`resolve`].
//!
//! # Usage
//!
//! ```
//! use soft_bitint::{BitInt, SInt, UInt, WrapFrom, WrapInto};
//!
//! // Values wrap at their own width.
//! let a = SInt::<4>::wrapping_new(7);
//! assert_eq!((a + SInt::<4>::ONE).value(), -8);
//!
//! // Float conversions truncate toward zero, then wrap.
//! let b = UInt::<8>::wrap_from(300.0_f32);
//! assert_eq!(b.value(), 44);
//! assert_eq!(f32::from(UInt::<8>::MAX), 255.0);
//!
//! // The carrier is what crosses the ABI boundary.
//! let c: BitInt<12, true> = (-3_i32).wrap_into();
//! assert_eq!(c.to_bits(), 0xffff_fffd);
//! ```
//!
//! # Semantics at the edges
//!
//!   - Division truncates toward zero. Dividing by zero yields the value with every logical bit
//!     set (`-1` if signed, [`BitInt::MAX`] if unsigned), and `MIN / -1` wraps to `MIN`.
//!   - Converting from a float truncates toward zero and reduces modulo 2<sup>N</sup>; NaN and
//!     infinities convert to zero.
//!   - [`BitInt::max`] returns the first operand on ties.
//!
//! The build-time configuration (which widths get exported entry points, and whether their
//! symbols are unmangled) is described in the documentation of [`entry_points`].

mod carrier;
mod bitint;
mod dispatch;

pub use carrier::{Carrier, CARRIER_BITS, extend, pack, unpack, min_value, max_value, in_domain};
pub use bitint::BitInt;
pub use bitint::convert::{WrapFrom, WrapInto};
pub use dispatch::{Key, Op, Symbol, Func, EntryPoint, ParseError};
pub use dispatch::{keys, entry_points, entry_point, resolve, TYPE_CODE_BASE};

/// The named `extern "C"` entry points, one per exported (family, operation).
pub mod symbols {
  pub use crate::dispatch::symbols::*;
}

/// A signed integer of `N` bits.
pub type SInt<const N: u32> = BitInt<N, true>;

/// An unsigned integer of `N` bits.
pub type UInt<const N: u32> = BitInt<N, false>;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x1_0000};
