//! Rendering of converted numerals, one tab separated line each.

use std::fmt::Write;
use std::str::FromStr;

use dec2flt::{Literal, Path};
use thiserror::Error;

use crate::{Conversion, Value};

/// A column of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// The value, shortest representation that reads back the same.
    Value,
    /// The IEEE-754 bit pattern, or the two's complement of an integer.
    Bits,
    /// `w` and `q` of a finite float.
    Parts,
    /// Which evaluator produced the value.
    Path,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output `{0}`, expected one of value, bits, parts, path")]
pub struct UnknownEmit(pub String);

impl FromStr for Emit {
    type Err = UnknownEmit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(Emit::Value),
            "bits" => Ok(Emit::Bits),
            "parts" => Ok(Emit::Parts),
            "path" => Ok(Emit::Path),
            _ => Err(UnknownEmit(s.to_owned())),
        }
    }
}

/// Parses a comma separated list of columns.
///
/// # Errors
/// names the first unknown column
pub fn parse_emit_list(list: &str) -> Result<Vec<Emit>, UnknownEmit> {
    list.split(',').map(|s| s.trim().parse()).collect()
}

fn write_value(out: &mut String, value: Value) {
    let written = match value {
        Value::Float(lit) => write!(out, "{:?}", lit.to_f64()),
        Value::Integer(i) => write!(out, "{}", i),
    };
    written.ok();
}

fn write_bits(out: &mut String, value: Value) {
    let bits = match value {
        Value::Float(lit) => lit.to_f64().to_bits(),
        #[allow(clippy::cast_sign_loss)]
        Value::Integer(i) => i as u64,
    };
    write!(out, "0x{:016x}", bits).ok();
}

fn write_parts(out: &mut String, value: Value) {
    match value {
        Value::Float(Literal::Nan) => out.push_str("nan"),
        Value::Float(Literal::Infinity { negative }) => {
            out.push_str(if negative { "-inf" } else { "inf" });
        }
        Value::Float(Literal::Finite(num)) => {
            let sign = if num.negative { "-" } else { "" };
            write!(out, "{}{}e{}", sign, num.significand, num.exponent).ok();
        }
        Value::Integer(i) => {
            write!(out, "{}", i).ok();
        }
    }
}

fn path_name(value: Value) -> &'static str {
    match value {
        Value::Float(Literal::Finite(num)) => match num.path() {
            Path::Fast => "fast",
            Path::Slow => "slow",
        },
        Value::Float(_) => "special",
        Value::Integer(_) => "int",
    }
}

impl Conversion<'_> {
    /// The requested columns, tab separated.
    pub fn render(&self, emit: &[Emit]) -> String {
        let mut out = String::new();
        for (i, &column) in emit.iter().enumerate() {
            if i > 0 {
                out.push('\t');
            }
            match column {
                Emit::Value => write_value(&mut out, self.value),
                Emit::Bits => write_bits(&mut out, self.value),
                Emit::Parts => write_parts(&mut out, self.value),
                Emit::Path => out.push_str(path_name(self.value)),
            }
        }
        out
    }
}
