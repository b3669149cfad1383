//! One `extern "C"` function per operation, generic over the family. The named entry points in
//! [`super::symbols`] each forward to one instantiation of these.
//!
//! Arguments arrive as raw carriers whose junk bits are not trusted: every function goes through
//! [`BitInt::from_bits`] first, which ignores them, and returns a canonical carrier.

use crate::{BitInt, Carrier, WrapFrom};

#[inline(always)]
pub(crate) extern "C" fn min<const N: u32, const SIGNED: bool>() -> Carrier {
  BitInt::<N, SIGNED>::MIN.to_bits()
}

#[inline(always)]
pub(crate) extern "C" fn to_float<const N: u32, const SIGNED: bool>(a: Carrier) -> f32 {
  BitInt::<N, SIGNED>::from_bits(a).to_f32()
}

#[inline(always)]
pub(crate) extern "C" fn from_float<const N: u32, const SIGNED: bool>(a: f32) -> Carrier {
  BitInt::<N, SIGNED>::wrap_from(a).to_bits()
}

#[inline(always)]
pub(crate) extern "C" fn max<const N: u32, const SIGNED: bool>(a: Carrier, b: Carrier) -> Carrier {
  BitInt::<N, SIGNED>::from_bits(a).max(BitInt::from_bits(b)).to_bits()
}

#[inline(always)]
pub(crate) extern "C" fn add<const N: u32, const SIGNED: bool>(a: Carrier, b: Carrier) -> Carrier {
  (BitInt::<N, SIGNED>::from_bits(a) + BitInt::from_bits(b)).to_bits()
}

#[inline(always)]
pub(crate) extern "C" fn sub<const N: u32, const SIGNED: bool>(a: Carrier, b: Carrier) -> Carrier {
  (BitInt::<N, SIGNED>::from_bits(a) - BitInt::from_bits(b)).to_bits()
}

#[inline(always)]
pub(crate) extern "C" fn mul<const N: u32, const SIGNED: bool>(a: Carrier, b: Carrier) -> Carrier {
  (BitInt::<N, SIGNED>::from_bits(a) * BitInt::from_bits(b)).to_bits()
}

#[inline(always)]
pub(crate) extern "C" fn div<const N: u32, const SIGNED: bool>(a: Carrier, b: Carrier) -> Carrier {
  (BitInt::<N, SIGNED>::from_bits(a) / BitInt::from_bits(b)).to_bits()
}
