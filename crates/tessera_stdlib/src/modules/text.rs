//! The `text` module: string helpers.
//!
//! Positions returned by `index` are byte offsets.

use thiserror::Error;

use tessera_foundation::{Arity, CallError, FromObject, NativeFn, Object};

use crate::adapters::{
    error_object, func_ai_rs, func_as_rbe, func_as_rie, func_as_rs, func_as_rvs, func_ass_rb,
    func_ass_ri, func_ass_rvs, func_assi_rvs, func_avss_rs, func_ay_rs,
};
use crate::module::ModuleBuilder;

/// Longest string `repeat` will build, in bytes.
pub const MAX_STRING_LEN: usize = 1 << 30;

/// Failures reported to scripts as error objects.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The input is not a decimal integer.
    #[error("invalid integer: {0:?}")]
    InvalidInt(String),

    /// The input is not a recognised boolean spelling.
    #[error("invalid bool: {0:?}")]
    InvalidBool(String),

    /// The result would exceed [`MAX_STRING_LEN`].
    #[error("string length exceeds limit of {limit} bytes")]
    StringLimit {
        /// The limit in bytes.
        limit: usize,
    },
}

/// Adds the `text` members to `builder`.
#[must_use]
pub fn register(builder: ModuleBuilder) -> ModuleBuilder {
    builder
        .function("contains", func_ass_rb(|s, sub| s.contains(&sub)))
        .function("has_prefix", func_ass_rb(|s, p| s.starts_with(&p)))
        .function("has_suffix", func_ass_rb(|s, p| s.ends_with(&p)))
        .function("index", func_ass_ri(index))
        .function("repeat", NativeFn::new(Arity::Exact(2), repeat))
        .function("split", func_ass_rvs(|s, sep| split(&s, &sep, None)))
        .function("split_n", func_assi_rvs(split_n))
        .function("fields", func_as_rvs(fields))
        .function("join", func_avss_rs(|parts, sep| parts.join(&sep)))
        .function("to_upper", func_as_rs(|s| s.to_uppercase()))
        .function("to_lower", func_as_rs(|s| s.to_lowercase()))
        .function("trim_space", func_as_rs(|s| s.trim().to_string()))
        .function("format_int", func_ai_rs(|n| n.to_string()))
        .function("atoi", func_as_rie(atoi))
        .function("parse_bool", func_as_rbe(parse_bool))
        .function("from_bytes", func_ay_rs(|b| String::from_utf8_lossy(&b).into_owned()))
}

/// Byte offset of the first `sub` in `s`, or -1.
#[allow(clippy::needless_pass_by_value)]
fn index(s: String, sub: String) -> i64 {
    s.find(&sub)
        .and_then(|i| i64::try_from(i).ok())
        .unwrap_or(-1)
}

/// `repeat(s, count)`: a negative count yields the empty string.
///
/// Hand-written rather than adapted so the length limit can be checked
/// before allocating.
fn repeat(args: &[Object]) -> Result<Object, CallError> {
    let s = String::from_arg(0, &args[0])?;
    let count = i64::from_arg(1, &args[1])?;
    let count = usize::try_from(count).unwrap_or(0);

    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_STRING_LEN => Ok(Object::from(s.repeat(count))),
        _ => Ok(error_object(TextError::StringLimit {
            limit: MAX_STRING_LEN,
        })),
    }
}

/// Splits `s` around `sep`, producing at most `limit` pieces.
///
/// An empty separator splits after each character.
fn split(s: &str, sep: &str, limit: Option<usize>) -> Vec<String> {
    let limit = limit.unwrap_or(usize::MAX);
    if limit == 0 {
        return Vec::new();
    }
    if sep.is_empty() {
        let mut pieces: Vec<String> = Vec::new();
        for (i, c) in s.char_indices() {
            if pieces.len() + 1 == limit {
                pieces.push(s[i..].to_string());
                return pieces;
            }
            pieces.push(c.to_string());
        }
        return pieces;
    }
    s.splitn(limit, sep).map(str::to_owned).collect()
}

/// `split_n(s, sep, n)`: `n < 0` means no limit, `n == 0` yields nothing.
#[allow(clippy::needless_pass_by_value)]
fn split_n(s: String, sep: String, n: i64) -> Vec<String> {
    let limit = usize::try_from(n).ok();
    split(&s, &sep, limit)
}

#[allow(clippy::needless_pass_by_value)]
fn fields(s: String) -> Vec<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

fn atoi(s: String) -> Result<i64, TextError> {
    s.parse().map_err(|_| TextError::InvalidInt(s))
}

fn parse_bool(s: String) -> Result<bool, TextError> {
    match s.as_str() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(TextError::InvalidBool(s)),
    }
}
