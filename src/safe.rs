//! Domain-checked transcendentals over the substrate.
//!
//! The substrate only gives us field arithmetic and exponent surgery, so
//! `exp2` is rebuilt by Newton iteration from a power-of-two seed and
//! `log2` from the mercator series on the normalized mantissa. Everything
//! else is a change of base through precomputed 40-digit constants.

use once_cell::sync::Lazy;

use crate::hpf::Hpf;

/// ln 2 to 40 decimal digits.
pub(crate) static LN_2: Lazy<Hpf> =
    Lazy::new(|| constant("0.6931471805599453094172321214581765680755"));
/// log2 10 to 40 decimal digits.
pub(crate) static LOG2_10: Lazy<Hpf> =
    Lazy::new(|| constant("3.321928094887362347870319429489390175865"));
/// log2 e to 40 decimal digits.
pub(crate) static LOG2_E: Lazy<Hpf> =
    Lazy::new(|| constant("1.442695040888963407359924681001892137427"));
/// log2 5, for the letter-J reparameterization.
pub(crate) static LOG2_5: Lazy<Hpf> = Lazy::new(|| *LOG2_10 - Hpf::one());

/// Machine epsilon of the substrate, 2^-113.
static EPSILON: Lazy<Hpf> = Lazy::new(|| Hpf::one().scale_b(-113));
/// Series cutoff, 2^-120.
static SERIES_CUTOFF: Lazy<Hpf> = Lazy::new(|| Hpf::one().scale_b(-120));

const NEWTON_ROUNDS: usize = 10;
const SERIES_ROUNDS: u64 = 200;

fn constant(digits: &str) -> Hpf {
    digits.parse().expect("transcendental constant literal must parse")
}

/// 2^y, saturating to zero or infinity outside the substrate's exponent
/// range.
///
/// Seeds with `2^floor(y)` through exponent scaling, then Newton-iterates
/// `x <- x + x*ln2*(y - log2 x)` until the step falls under machine epsilon
/// or the round cap is hit.
pub(crate) fn safe_exp2(y: Hpf) -> Hpf {
    if y.is_nan() {
        return Hpf::NAN;
    }
    if y.is_infinite() {
        return if y.is_negative() { Hpf::ZERO } else { Hpf::INFINITY };
    }
    let whole = y.floor();
    if whole >= Hpf::from_i64(16_384) {
        return Hpf::INFINITY;
    }
    if whole < Hpf::from_i64(-16_494) {
        return Hpf::ZERO;
    }
    let mut x = Hpf::one().scale_b(whole.to_i128() as i32);
    for _ in 0..NEWTON_ROUNDS {
        let step = (x * *LN_2).mul_add(y - safe_log2(x), x);
        if !step.is_finite() {
            return Hpf::INFINITY;
        }
        let delta = step - x;
        x = step;
        if delta.abs() < *EPSILON {
            break;
        }
    }
    x
}

/// log2 x for x > 0.
///
/// Decomposes `x = m * 2^e` with `m` in `[0.5, 1)`, then sums
/// `ln(1 + eps)` for `eps = m - 1` term by term until the tail falls under
/// the series cutoff.
///
/// # Panics
///
/// Panics when `x` is zero or negative; the caller screens the domain.
pub(crate) fn safe_log2(x: Hpf) -> Hpf {
    if x.is_nan() {
        return Hpf::NAN;
    }
    if x.is_zero() || x.is_negative() {
        panic!("logarithm of a non-positive value");
    }
    if x.is_infinite() {
        return Hpf::INFINITY;
    }
    let exponent = x.ilogb() + 1;
    let mantissa = x.scale_b(-exponent);
    // Exact powers of two fall straight out of the decomposition; the
    // series would smear log2(1) across the encoder's zero.
    if mantissa == Hpf::one().scale_b(-1) {
        return Hpf::from_i64(exponent as i64 - 1);
    }
    let eps = mantissa - Hpf::one();

    let mut power = eps;
    let mut sum = eps;
    let mut k = 1u64;
    while k < SERIES_ROUNDS {
        k += 1;
        power = power * -eps;
        let term = power / Hpf::from_u64(k);
        sum = sum + term;
        if term.abs() < *SERIES_CUTOFF {
            break;
        }
    }
    Hpf::from_i64(exponent as i64) + sum / *LN_2
}

#[inline]
pub(crate) fn safe_log10(x: Hpf) -> Hpf {
    safe_log2(x) / *LOG2_10
}

#[inline]
pub(crate) fn safe_log(x: Hpf) -> Hpf {
    safe_log2(x) / *LOG2_E
}

#[inline]
pub(crate) fn safe_exp10(y: Hpf) -> Hpf {
    safe_exp2(y * *LOG2_10)
}

#[inline]
pub(crate) fn safe_exp(y: Hpf) -> Hpf {
    safe_exp2(y * *LOG2_E)
}

/// x^y for non-negative x.
pub(crate) fn safe_pow(x: Hpf, y: Hpf) -> Hpf {
    if x.is_nan() || y.is_nan() {
        return Hpf::NAN;
    }
    if y.is_zero() {
        return Hpf::one();
    }
    if x.is_zero() {
        return if y.is_negative() { Hpf::INFINITY } else { Hpf::ZERO };
    }
    if x.is_negative() {
        return Hpf::NAN;
    }
    safe_exp2(y * safe_log2(x))
}
