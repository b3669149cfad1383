//! Generates the named entry points and the dispatch table from the cross product of the
//! configured widths, both signednesses, and the eight operations.
//!
//! The set of widths defaults to `1..=32` and can be narrowed at build time with the
//! `SOFT_BITINT_WIDTHS` environment variable, a comma-separated list of widths and inclusive
//! ranges (e.g. `2-10,12,14,16`).

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::PathBuf;

const WIDTHS_VAR: &str = "SOFT_BITINT_WIDTHS";
const MAX_WIDTH: u32 = 32;

/// Signed families come first, as in the registration order of the host.
const SIGNEDNESS: [bool; 2] = [true, false];

fn main() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-env-changed={WIDTHS_VAR}");

  let widths = match std::env::var(WIDTHS_VAR) {
    Ok(list) => {
      let widths = parse_widths(&list).unwrap_or_else(|err| {
        panic!("invalid {WIDTHS_VAR}={list:?}: {err}")
      });
      println!("cargo:warning=exporting custom datatypes for widths {widths:?} only");
      widths
    }
    Err(_) => (1 ..= MAX_WIDTH).collect(),
  };

  let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
  let path = out_dir.join("entry_points.rs");
  std::fs::write(&path, generate(&widths)).expect("failed to write entry_points.rs");
}

/// Parse a width list such as `1-8,12,16`.
fn parse_widths(list: &str) -> Result<BTreeSet<u32>, String> {
  let mut widths = BTreeSet::new();
  for item in list.split(',').map(str::trim).filter(|item| !item.is_empty()) {
    let (lo, hi) = match item.split_once('-') {
      Some((lo, hi)) => (parse_width(lo)?, parse_width(hi)?),
      None => {
        let w = parse_width(item)?;
        (w, w)
      }
    };
    if lo > hi {
      return Err(format!("empty range {item:?}"))
    }
    widths.extend(lo ..= hi);
  }
  if widths.is_empty() {
    return Err("no widths selected".into())
  }
  Ok(widths)
}

fn parse_width(s: &str) -> Result<u32, String> {
  let w: u32 = s.trim().parse().map_err(|_| format!("{s:?} is not a width"))?;
  if !(1 ..= MAX_WIDTH).contains(&w) {
    return Err(format!("width {w} is outside 1..={MAX_WIDTH}"))
  }
  Ok(w)
}

fn type_name(width: u32, signed: bool) -> String {
  format!("{}INT{width}", if signed {"S"} else {"U"})
}

/// Emit the wrappers and tables. Each wrapper is a one-line forward to the generic function in
/// `abi`, instantiated at `<width, signed>`.
fn generate(widths: &BTreeSet<u32>) -> String {
  let mut keys = String::new();
  let mut fns = String::new();
  let mut table = String::new();
  let mut n_keys = 0;

  for &w in widths {
    for s in SIGNEDNESS {
      let t = type_name(w, s);
      let key = format!("Key::new({w}, {s})");
      n_keys += 1;
      writeln!(keys, "  {key},").unwrap();

      // (op, symbol, signature, body)
      let entries = [
        ("Min", format!("Min{t}"), "() -> u32", format!("abi::min::<{w}, {s}>()")),
        ("ToFloat", format!("{t}ToFloat"), "(a: u32) -> f32", format!("abi::to_float::<{w}, {s}>(a)")),
        ("FromFloat", format!("FloatTo{t}"), "(a: f32) -> u32", format!("abi::from_float::<{w}, {s}>(a)")),
        ("Max", format!("{t}Max"), "(a: u32, b: u32) -> u32", format!("abi::max::<{w}, {s}>(a, b)")),
        ("Add", format!("{t}Add"), "(a: u32, b: u32) -> u32", format!("abi::add::<{w}, {s}>(a, b)")),
        ("Sub", format!("{t}Sub"), "(a: u32, b: u32) -> u32", format!("abi::sub::<{w}, {s}>(a, b)")),
        ("Mul", format!("{t}Mul"), "(a: u32, b: u32) -> u32", format!("abi::mul::<{w}, {s}>(a, b)")),
        ("Div", format!("{t}Div"), "(a: u32, b: u32) -> u32", format!("abi::div::<{w}, {s}>(a, b)")),
      ];
      for (op, symbol, signature, body) in entries {
        let func = match op {
          "Min" => "Min",
          "ToFloat" => "ToFloat",
          "FromFloat" => "FromFloat",
          _ => "Binary",
        };
        writeln!(fns, "#[cfg_attr(feature = \"export\", unsafe(no_mangle))]").unwrap();
        writeln!(fns, "pub extern \"C\" fn {symbol}{signature} {{ {body} }}").unwrap();
        writeln!(
          table,
          "  EntryPoint {{ key: {key}, op: Op::{op}, func: Func::{func}({symbol}) }},",
        ).unwrap();
      }
    }
  }

  let mut out = String::new();
  writeln!(out, "// @generated by build.rs; widths: {widths:?}").unwrap();
  writeln!(out).unwrap();
  writeln!(out, "/// Every family with exported entry points, in registration order.").unwrap();
  writeln!(out, "pub(crate) static KEYS: [Key; {n_keys}] = [\n{keys}];").unwrap();
  writeln!(out).unwrap();
  out.push_str(&fns);
  writeln!(out).unwrap();
  writeln!(out, "/// One entry per (family, operation), grouped by family in registration order.").unwrap();
  writeln!(out, "pub(crate) static ENTRY_POINTS: [EntryPoint; {}] = [\n{table}];", n_keys * 8).unwrap();
  out
}
