use super::{Key, Op, Symbol};

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

/// Error returned when a type name, dtype string, or symbol name doesn't denote an exported
/// entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
  /// The type name does not start with `SINT` or `UINT` (or the dtype string is not of the form
  /// `custom[...]32`).
  #[error("expected a type name starting with SINT or UINT")]
  UnknownPrefix,
  /// The type name has no width after its prefix, or the width is not a plain decimal number.
  #[error("expected a decimal width after SINT or UINT")]
  MissingWidth,
  /// The width is not in `1..=32`.
  #[error("width {0} is outside 1..=32")]
  InvalidWidth(u32),
  /// A symbol name does not match the name of any operation.
  #[error("unknown operation")]
  UnknownOp,
  /// The name is well formed, but its family was not selected at build time.
  #[error("no entry points were built for this family")]
  NotExported,
}

impl Display for Key {
  /// The type name, e.g. `SINT8` or `UINT32`.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let prefix = if self.signed {"SINT"} else {"UINT"};
    write!(f, "{prefix}{}", self.width)
  }
}

impl FromStr for Key {
  type Err = ParseError;

  /// Parse a type name, e.g. `SINT8` or `UINT32`. The width must be written without leading
  /// zeros, so that this is the exact inverse of [`Display`].
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (signed, digits) = if let Some(digits) = s.strip_prefix("SINT") {
      (true, digits)
    } else if let Some(digits) = s.strip_prefix("UINT") {
      (false, digits)
    } else {
      return Err(ParseError::UnknownPrefix)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(ParseError::MissingWidth)
    }
    // Only digits: the parse can only fail by overflow.
    let width = digits.parse::<u32>().unwrap_or(u32::MAX);
    if digits.len() > 1 && digits.starts_with('0') {
      return Err(ParseError::InvalidWidth(width))
    }
    Key::try_new(width, signed)
  }
}

/// The dtype string of a [`Key`]; see [`Key::dtype`].
struct Dtype(Key);

impl Display for Dtype {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "custom[{}]32", self.0)
  }
}

impl Key {
  /// The dtype string the host uses for this family, e.g. `custom[SINT8]32`: the type name and
  /// the width of the carrier every value is stored in.
  pub fn dtype(self) -> impl Display {
    Dtype(self)
  }

  /// Parse a dtype string, the inverse of [`Self::dtype`].
  ///
  /// ```
  /// # use soft_bitint::{Key, ParseError};
  /// assert_eq!(Key::from_dtype("custom[UINT12]32"), Ok(Key::new(12, false)));
  /// assert_eq!(Key::from_dtype("custom[UINT12]16"), Err(ParseError::UnknownPrefix));
  /// ```
  pub fn from_dtype(s: &str) -> Result<Self, ParseError> {
    s.strip_prefix("custom[")
      .and_then(|s| s.strip_suffix("]32"))
      .ok_or(ParseError::UnknownPrefix)?
      .parse()
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let key = self.key;
    match self.op {
      Op::Min => write!(f, "Min{key}"),
      Op::FromFloat => write!(f, "FloatTo{key}"),
      op => write!(f, "{key}{}", op.name()),
    }
  }
}

impl FromStr for Symbol {
  type Err = ParseError;

  /// Parse a symbol name: `Min<T>`, `FloatTo<T>`, or `<T>` followed by `ToFloat`, `Max`, `Add`,
  /// `Sub`, `Mul`, or `Div`, where `<T>` is a type name.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some(key) = s.strip_prefix("Min") {
      return Ok(Symbol { key: key.parse()?, op: Op::Min })
    }
    if let Some(key) = s.strip_prefix("FloatTo") {
      return Ok(Symbol { key: key.parse()?, op: Op::FromFloat })
    }
    for op in Op::ALL {
      if matches!(op, Op::Min | Op::FromFloat) {
        continue
      }
      if let Some(key) = s.strip_suffix(op.name()) {
        return Ok(Symbol { key: key.parse()?, op })
      }
    }
    // Tell "a type name with a bad suffix" apart from "not a type name at all".
    match s.parse::<Key>() {
      Err(ParseError::UnknownPrefix) => Err(ParseError::UnknownPrefix),
      _ => Err(ParseError::UnknownOp),
    }
  }
}
