//! The run-time surface: naming the 64 families and their eight operations, and reaching the
//! `extern "C"` entry points either by symbol name or through a table.
//!
//! The entry points themselves live in [`symbols`]; they (and the tables behind [`keys`] and
//! [`entry_points`]) are generated by the build script from the cross product of the
//! configured widths, both signednesses, and [`Op::ALL`]. Each one is a one-line forward to the
//! generic function of the same operation in [`abi`], so there is exactly one implementation per
//! operation no matter how many families are exported.

use crate::carrier::{self, Carrier, CARRIER_BITS};

/// Generic `extern "C"` kernels.
mod abi;

/// Names and parsing.
mod name;

/// Generated entry points and tables.
pub(crate) mod symbols;

pub use name::ParseError;

/// The type code of the first family in [`keys`]; each following family gets the next code.
pub const TYPE_CODE_BASE: u32 = 150;

/// Identifies one of the 64 logical integer families: a width from 1 to 32, and a signedness.
///
/// A `Key` is the run-time counterpart of the type parameters of
/// [`BitInt<N, SIGNED>`](crate::BitInt); see [`BitInt::KEY`](crate::BitInt::KEY).
///
/// ```
/// # use soft_bitint::Key;
/// let key = Key::new(8, true);
/// assert_eq!(key.to_string(), "SINT8");
/// assert_eq!(key.dtype().to_string(), "custom[SINT8]32");
/// assert_eq!("UINT3".parse::<Key>(), Ok(Key::new(3, false)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
  width: u32,
  signed: bool,
}

// Ordered as registered: width ascending, signed before unsigned.

impl PartialOrd for Key {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Key {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    (self.width, !self.signed).cmp(&(other.width, !other.signed))
  }
}

impl Key {
  /// Every family, in registration order: width ascending, signed before unsigned.
  pub const ALL: [Key; 2 * CARRIER_BITS as usize] = {
    let mut all = [Key { width: 1, signed: true }; 2 * CARRIER_BITS as usize];
    let mut i = 0;
    while i < all.len() {
      all[i] = Key { width: i as u32 / 2 + 1, signed: i % 2 == 0 };
      i += 1;
    }
    all
  };

  /// Construct a key.
  ///
  /// # Panics
  ///
  /// If `width` is not in `1..=32`. In a const context, that is a compile-time error.
  ///
  /// ```compile_fail
  /// # use soft_bitint::Key;
  /// const KEY: Key = Key::new(33, false);
  /// ```
  pub const fn new(width: u32, signed: bool) -> Self {
    assert!(width >= 1 && width <= CARRIER_BITS, "width must be in 1..=32");
    Self { width, signed }
  }

  /// Construct a key, or return [`ParseError::InvalidWidth`] if `width` is not in `1..=32`.
  pub const fn try_new(width: u32, signed: bool) -> Result<Self, ParseError> {
    if width >= 1 && width <= CARRIER_BITS {
      Ok(Self { width, signed })
    } else {
      Err(ParseError::InvalidWidth(width))
    }
  }

  /// The logical width, in `1..=32`.
  #[inline]
  pub const fn width(self) -> u32 {
    self.width
  }

  /// Whether this family is signed.
  #[inline]
  pub const fn signed(self) -> bool {
    self.signed
  }

  /// The type code of this family in the host's datatype registry, or `None` if this family has
  /// no exported entry points (see [`keys`]).
  pub fn type_code(self) -> Option<u32> {
    keys().iter().position(|&key| key == self).map(|i| TYPE_CODE_BASE + i as u32)
  }

  /// The inverse of [`Self::type_code`].
  pub fn from_type_code(code: u32) -> Option<Self> {
    let index = code.checked_sub(TYPE_CODE_BASE)?;
    keys().get(index as usize).copied()
  }

  /// As [`crate::pack`], at this key's width and signedness.
  #[inline]
  pub const fn pack(self, value: i64) -> Carrier {
    carrier::pack(value, self.width, self.signed)
  }

  /// As [`crate::unpack`], at this key's width and signedness.
  #[inline]
  pub const fn unpack(self, bits: Carrier) -> i64 {
    carrier::unpack(bits, self.width, self.signed)
  }
}

/// One of the eight operations every family exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
  /// The smallest value of the family, as a carrier.
  Min,
  /// Carrier to `f32`.
  ToFloat,
  /// `f32` to carrier, truncating and wrapping.
  FromFloat,
  /// The greater of two values; the first on ties.
  Max,
  /// Wrapping addition.
  Add,
  /// Wrapping subtraction.
  Sub,
  /// Wrapping multiplication.
  Mul,
  /// Wrapping division, truncating toward zero.
  Div,
}

impl Op {
  /// Every operation, in the order the entry points of each family appear in
  /// [`entry_points`].
  pub const ALL: [Op; 8] = [
    Op::Min, Op::ToFloat, Op::FromFloat, Op::Max,
    Op::Add, Op::Sub, Op::Mul, Op::Div,
  ];

  /// The name of this operation, as it appears in symbol names.
  pub const fn name(self) -> &'static str {
    match self {
      Op::Min => "Min",
      Op::ToFloat => "ToFloat",
      Op::FromFloat => "FromFloat",
      Op::Max => "Max",
      Op::Add => "Add",
      Op::Sub => "Sub",
      Op::Mul => "Mul",
      Op::Div => "Div",
    }
  }
}

/// The exported name of one operation on one family, e.g. `SINT8Add`. Its
/// [`Display`](core::fmt::Display) and [`FromStr`](core::str::FromStr) impls go to and from the
/// symbol string.
///
/// ```
/// # use soft_bitint::{Key, Op, Symbol};
/// let symbol = Symbol { key: Key::new(8, true), op: Op::Min };
/// assert_eq!(symbol.to_string(), "MinSINT8");
/// assert_eq!("FloatToUINT3".parse(), Ok(Symbol { key: Key::new(3, false), op: Op::FromFloat }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
  pub key: Key,
  pub op: Op,
}

impl Symbol {
  /// The entry point exported under this name, or [`ParseError::NotExported`] if its family
  /// was left out of the build (see [`entry_points`]).
  pub fn entry_point(self) -> Result<&'static EntryPoint, ParseError> {
    entry_point(self.key, self.op).ok_or(ParseError::NotExported)
  }
}

/// A pointer to an entry point, tagged with its calling convention. All values cross the
/// boundary as 32-bit [`Carrier`]s; floats cross as `f32`.
#[derive(Clone, Copy, Debug)]
pub enum Func {
  /// `Min<T>`
  Min(extern "C" fn() -> Carrier),
  /// `<T>ToFloat`
  ToFloat(extern "C" fn(Carrier) -> f32),
  /// `FloatTo<T>`
  FromFloat(extern "C" fn(f32) -> Carrier),
  /// `<T>Max`, `<T>Add`, `<T>Sub`, `<T>Mul`, `<T>Div`
  Binary(extern "C" fn(Carrier, Carrier) -> Carrier),
}

/// One row of the dispatch table.
#[derive(Clone, Copy, Debug)]
pub struct EntryPoint {
  pub key: Key,
  pub op: Op,
  pub func: Func,
}

impl EntryPoint {
  /// The name this entry point is exported under.
  pub const fn symbol(&self) -> Symbol {
    Symbol { key: self.key, op: self.op }
  }
}

/// Every family with exported entry points, in registration order (width ascending, signed
/// before unsigned).
///
/// By default this is [`Key::ALL`]. Setting the environment variable `SOFT_BITINT_WIDTHS` at
/// build time (to a comma-separated list of widths and ranges, e.g. `2-10,12,14,16`) restricts
/// it to those widths; the type codes of [`Key::type_code`] are then assigned over this smaller
/// set. With the `export` feature (on by default) every entry point is exported under its
/// unmangled name; without it, they are only reachable through this module.
pub fn keys() -> &'static [Key] {
  &symbols::KEYS
}

/// Every exported entry point: for each key of [`keys`] in order, one per operation of
/// [`Op::ALL`] in order.
pub fn entry_points() -> &'static [EntryPoint] {
  &symbols::ENTRY_POINTS
}

/// The entry point for `op` on the family `key`, if that family is exported.
pub fn entry_point(key: Key, op: Op) -> Option<&'static EntryPoint> {
  let i = keys().iter().position(|&k| k == key)?;
  let entry = &entry_points()[i * Op::ALL.len() + op as usize];
  debug_assert!(entry.key == key && entry.op == op);
  Some(entry)
}

/// Find an entry point by its exported symbol name, e.g. `"SINT8Add"` or `"FloatToUINT16"`.
///
/// ```
/// # use soft_bitint::{resolve, Func};
/// let Some(entry) = resolve("SINT4Add") else { panic!() };
/// let Func::Binary(add) = entry.func else { panic!() };
/// assert_eq!(add(7, 1), 0xffff_fff8);  // 7 + 1 = -8 in 4 bits
/// assert!(resolve("SINT33Add").is_none());
/// ```
pub fn resolve(name: &str) -> Option<&'static EntryPoint> {
  match name.parse::<Symbol>().and_then(Symbol::entry_point) {
    Ok(entry) => {
      log::trace!("resolved {name} to {:?} {:?}", entry.key, entry.op);
      Some(entry)
    },
    Err(err) => {
      log::debug!("cannot resolve {name:?}: {err}");
      None
    },
  }
}
