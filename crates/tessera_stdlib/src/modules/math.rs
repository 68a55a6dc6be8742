//! The `math` module: floating-point helpers over `f64`.
//!
//! Arguments are never coerced. `math.abs(1)` is rejected because `1` is an
//! `int`; scripts convert explicitly.

use std::f64::consts;

use crate::adapters::{
    func_af_rb, func_af_rf, func_af_ri, func_afi_rb, func_afi_rf, func_aff_rf, func_ai_rf,
};
use crate::module::ModuleBuilder;

/// Adds the `math` members to `builder`.
#[must_use]
pub fn register(builder: ModuleBuilder) -> ModuleBuilder {
    builder
        .constant("pi", consts::PI)
        .constant("e", consts::E)
        .function("abs", func_af_rf(f64::abs))
        .function("ceil", func_af_rf(f64::ceil))
        .function("floor", func_af_rf(f64::floor))
        .function("round", func_af_rf(f64::round))
        .function("sqrt", func_af_rf(f64::sqrt))
        .function("trunc", func_af_rf(f64::trunc))
        .function("pow", func_aff_rf(f64::powf))
        .function("hypot", func_aff_rf(f64::hypot))
        .function("ldexp", func_afi_rf(ldexp))
        .function("is_nan", func_af_rb(f64::is_nan))
        .function("is_inf", func_afi_rb(is_inf))
        .function("signbit", func_af_rb(f64::is_sign_negative))
        .function("inf", func_ai_rf(inf))
        .function("to_int", func_af_ri(to_int))
}

/// `frac * 2^exp`.
fn ldexp(frac: f64, exp: i64) -> f64 {
    if frac == 0.0 || !frac.is_finite() {
        return frac;
    }
    let exp = i32::try_from(exp.clamp(i64::from(i32::MIN), i64::from(i32::MAX)))
        .unwrap_or_default();
    // Split the scale so that subnormal results are not flushed to zero.
    let half = exp / 2;
    frac * 2f64.powi(half) * 2f64.powi(exp - half)
}

/// Tests for positive infinity when `sign > 0`, negative infinity when
/// `sign < 0`, and either when `sign == 0`.
#[allow(clippy::float_cmp)]
fn is_inf(f: f64, sign: i64) -> bool {
    (sign >= 0 && f == f64::INFINITY) || (sign <= 0 && f == f64::NEG_INFINITY)
}

fn inf(sign: i64) -> f64 {
    if sign >= 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

/// Truncates toward zero, saturating at the `i64` bounds. NaN becomes 0.
#[allow(clippy::cast_possible_truncation)]
fn to_int(f: f64) -> i64 {
    f as i64
}
