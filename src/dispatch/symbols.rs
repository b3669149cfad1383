//! The named entry points, generated by `build.rs`: `MinSINT8`, `SINT8ToFloat`, `FloatToSINT8`,
//! `SINT8Max`, `SINT8Add`, `SINT8Sub`, `SINT8Mul`, `SINT8Div`, and so on for every exported
//! family.
//!
//! All of them take and return values as 32-bit carriers; arguments may carry arbitrary junk
//! bits above the logical width, and results always have canonical ones (see
//! [`crate::extend`]).
#![allow(non_snake_case)]

use super::{abi, EntryPoint, Func, Key, Op};

include!(concat!(env!("OUT_DIR"), "/entry_points.rs"));
