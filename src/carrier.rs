//! The 32-bit carrier that every custom datatype value travels in, and the bit-level packing and
//! unpacking between a carrier and the logical `width`-bit value it holds.
//!
//! All functions here take `width` and `signed` as plain arguments, so they serve both the
//! const-generic [`BitInt`](crate::BitInt) (where they are constant-folded) and runtime callers
//! holding a [`Key`](crate::Key). `width` must be in `1..=32`; this is a precondition checked
//! only by `debug_assert!`, never at run time in release builds.
//!
//! Notation: bits are numbered from 0 (least significant) to 31. For a `width`-bit value, bits
//! `width..32` of the carrier are *junk*: ignored on input, and on output always equal to bit
//! `width - 1` (signed) or to 0 (unsigned). We call a carrier in that form *canonical*.

/// The fixed 32-bit storage cell used to pass and return any boxed value, regardless of width.
pub type Carrier = u32;

/// Width of the [`Carrier`] in bits.
pub const CARRIER_BITS: u32 = Carrier::BITS;

/// Number of junk bits above a `width`-bit value in a [`Carrier`].
#[inline]
pub(crate) const fn junk_bits(width: u32) -> u32 {
  debug_assert!(width >= 1 && width <= CARRIER_BITS);
  CARRIER_BITS - width
}

/// Set all bits at position `width` or higher to 0.
///
/// ```ignore
/// assert_eq!(mask_lsb(0xabcd_1234, 12), 0x0000_0234)
/// ```
#[inline]
pub(crate) const fn mask_lsb(bits: Carrier, width: u32) -> Carrier {
  // Shifting by the full width is not allowed, so go via the junk bits instead.
  (bits << junk_bits(width)) >> junk_bits(width)
}

/// Take a carrier whose bits above `width - 1` are arbitrary, and return the canonical carrier:
/// sign-extended from bit `width - 1` if `signed`, zero-extended otherwise.
///
/// ```
/// # use soft_bitint::extend;
/// assert_eq!(extend(0xdead_beef, 4, true), 0xffff_ffff);   // 0b1111 is -1
/// assert_eq!(extend(0xdead_beef, 4, false), 0x0000_000f);  // 0b1111 is 15
/// assert_eq!(extend(0x0000_0080, 8, true), 0xffff_ff80);   // 0x80 is -128
/// ```
#[inline]
pub const fn extend(bits: Carrier, width: u32, signed: bool) -> Carrier {
  let junk = junk_bits(width);
  if signed {
    // Arithmetic shift right replicates bit 31, which after the left shift is bit `width - 1`.
    (((bits << junk) as i32) >> junk) as Carrier
  } else {
    (bits << junk) >> junk
  }
}

/// Pack a logical value into a canonical carrier. Only the low `width` bits of `value` are
/// kept, i.e. values outside the domain of `(width, signed)` wrap modulo 2^`width`.
///
/// ```
/// # use soft_bitint::{pack, unpack};
/// assert_eq!(pack(-8, 4, true), 0xffff_fff8);
/// assert_eq!(pack(300, 8, false), 44);
/// assert_eq!(unpack(pack(-1, 1, true), 1, true), -1);
/// ```
#[inline]
pub const fn pack(value: i64, width: u32, signed: bool) -> Carrier {
  extend(value as Carrier, width, signed)
}

/// Recover the logical value held in `carrier`, ignoring its junk bits.
///
/// The result is in `-2^(width-1) ..= 2^(width-1) - 1` if `signed`, and in `0 ..= 2^width - 1`
/// otherwise; `i64` is wide enough for both.
#[inline]
pub const fn unpack(carrier: Carrier, width: u32, signed: bool) -> i64 {
  let bits = extend(carrier, width, signed);
  if signed {
    bits as i32 as i64
  } else {
    bits as i64
  }
}

/// The canonical carrier of the smallest value of `(width, signed)`: `0` if unsigned,
/// `-2^(width-1)` if signed.
#[inline]
pub const fn min_value(width: u32, signed: bool) -> Carrier {
  if signed {
    !0 << (width - 1)
  } else {
    0
  }
}

/// The canonical carrier of the largest value of `(width, signed)`: `2^width - 1` if unsigned,
/// `2^(width-1) - 1` if signed.
#[inline]
pub const fn max_value(width: u32, signed: bool) -> Carrier {
  if signed {
    !min_value(width, signed)
  } else {
    mask_lsb(!0, width)
  }
}

/// Whether `value` lies in the domain of `(width, signed)`, i.e. survives `pack`/`unpack`.
#[inline]
pub const fn in_domain(value: i64, width: u32, signed: bool) -> bool {
  unpack(pack(value, width, signed), width, signed) == value
}

#[cfg(test)]
#[allow(overflowing_literals)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn mask_lsb() {
    assert_eq!(super::mask_lsb(0b01111110, 3), 0b00000110);
    assert_eq!(super::mask_lsb(0xabcd, 4), 0x000d);
    assert_eq!(super::mask_lsb(0xabcdabcd, 4), 0x0000000d);
    assert_eq!(super::mask_lsb(0xdeadbeef, 32), 0xdeadbeef);
    assert_eq!(super::mask_lsb(0xdeadbeef, 1), 1);
  }

  #[test]
  fn extend_signed() {
    assert_eq!(extend(0b0111, 4, true), 0b0111);
    assert_eq!(extend(0b1000, 4, true), 0xfffffff8);
    assert_eq!(extend(0xfffffff0 | 0b0111, 4, true), 0b0111);
    assert_eq!(extend(0x80000000, 32, true), 0x80000000);
    assert_eq!(extend(0x12345678, 32, true), 0x12345678);
    assert_eq!(extend(0b1, 1, true), 0xffffffff);
    assert_eq!(extend(0b10, 1, true), 0);
  }

  #[test]
  fn extend_unsigned() {
    assert_eq!(extend(0b1000, 4, false), 0b1000);
    assert_eq!(extend(0xfffffff8, 4, false), 0b1000);
    assert_eq!(extend(0xffffffff, 32, false), 0xffffffff);
    assert_eq!(extend(0xffffffff, 1, false), 1);
  }

  #[test]
  fn extend_idempotent() {
    for width in 1 ..= 32 {
      for signed in [true, false] {
        for bits in [0, 1, 0x55555555, 0xaaaaaaaa, 0x7fffffff, 0x80000000, 0xffffffff] {
          let once = extend(bits, width, signed);
          assert_eq!(extend(once, width, signed), once, "w={width} s={signed} {bits:#x}");
        }
      }
    }
  }

  #[test]
  fn unpack_ignores_junk() {
    assert_eq!(unpack(0xdead_bee7, 4, true), 7);
    assert_eq!(unpack(0xdead_beef, 4, true), -1);
    assert_eq!(unpack(0xdead_beef, 4, false), 15);
    assert_eq!(unpack(0xffff_ffff, 32, false), u32::MAX as i64);
    assert_eq!(unpack(0xffff_ffff, 32, true), -1);
  }

  #[test]
  fn signed_1_bit() {
    // Two values, -1 and 0; not a boolean.
    assert_eq!(unpack(1, 1, true), -1);
    assert_eq!(unpack(0, 1, true), 0);
    assert_eq!(unpack(min_value(1, true), 1, true), -1);
    assert_eq!(unpack(max_value(1, true), 1, true), 0);
    assert!(!in_domain(1, 1, true));
  }

  #[test]
  fn extremes() {
    for width in 1 ..= 32 {
      let half = 1i64 << (width - 1);
      assert_eq!(unpack(min_value(width, true), width, true), -half);
      assert_eq!(unpack(max_value(width, true), width, true), half - 1);
      assert_eq!(unpack(min_value(width, false), width, false), 0);
      assert_eq!(unpack(max_value(width, false), width, false), 2 * half - 1);
    }
  }

  #[test]
  fn roundtrip_exhaustive_small() {
    for width in 1 ..= 12 {
      let half = 1i64 << (width - 1);
      for v in -half .. half {
        assert_eq!(unpack(pack(v, width, true), width, true), v);
      }
      for v in 0 .. 2 * half {
        assert_eq!(unpack(pack(v, width, false), width, false), v);
      }
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn roundtrip_signed(width in 1 ..= 32u32, raw: i64) {
      // Fold `raw` into the domain first.
      let v = unpack(raw as u32, width, true);
      prop_assert!(in_domain(v, width, true));
      prop_assert_eq!(unpack(pack(v, width, true), width, true), v);
    }

    #[test]
    fn roundtrip_unsigned(width in 1 ..= 32u32, raw: i64) {
      let v = unpack(raw as u32, width, false);
      prop_assert!(in_domain(v, width, false));
      prop_assert_eq!(unpack(pack(v, width, false), width, false), v);
    }

    #[test]
    fn pack_wraps(width in 1 ..= 32u32, signed: bool, v: i64) {
      // Reducing modulo 2^width is the same as keeping the low `width` bits.
      let modulus = 1i128 << width;
      let reduced = (v as i128).rem_euclid(modulus);
      let expected = if signed && reduced >= modulus / 2 { reduced - modulus } else { reduced };
      prop_assert_eq!(unpack(pack(v, width, signed), width, signed) as i128, expected);
    }
  }
}
