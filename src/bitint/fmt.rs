use super::*;

use core::fmt::{Debug, Display};
use crate::carrier::mask_lsb;

impl<
  const N: u32,
  const SIGNED: bool,
> Debug for BitInt<N, SIGNED> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let name = if SIGNED {"SInt"} else {"UInt"};
    if const { Self::JUNK_BITS == 0 } {
      let bits = self.0;
      f.debug_tuple(name)
        .field(&format_args!("0b{bits:032b}"))
        .finish()
    } else {
      let bits_junk = mask_lsb(self.0 >> Self::BITS, Self::JUNK_BITS);
      let bits_significant = mask_lsb(self.0, Self::BITS);
      f.debug_tuple(name)
        .field(&format_args!("0b{bits_junk:0wj$b}_{bits_significant:0ws$b}", wj=Self::JUNK_BITS as usize, ws=Self::BITS as usize))
        .finish()
    }
  }
}

impl<
  const N: u32,
  const SIGNED: bool,
> Display for BitInt<N, SIGNED> {
  /// Formats the logical value, like the underlying native integer would.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.value(), f)
  }
}
