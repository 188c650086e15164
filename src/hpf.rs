//! The high-precision floating-point substrate.
//!
//! Everything above this module computes on [`Hpf`], a thin wrapper around
//! [`rustc_apfloat`]'s IEEE binary128 soft-float (113-bit significand).
//! The wrapper narrows the substrate to the operations the encoder and the
//! transcendental layers actually need: field arithmetic, ordered compare,
//! `floor`/`round`/`abs`, exponent access via `ilogb`/`scale_b`, a fused
//! multiply-add, and decimal parse/format.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

use once_cell::sync::Lazy;
use rustc_apfloat::ieee::{Double, Quad};
use rustc_apfloat::{Float, FloatConvert, ParseError, Round, StatusAnd};

/// A 113-bit-mantissa binary floating-point value.
#[derive(Clone, Copy)]
pub struct Hpf(Quad);

/// Euler's number to 40 decimal digits.
static E: Lazy<Hpf> = Lazy::new(|| Hpf::parse_const("2.718281828459045235360287471352662497757"));
/// Pi to 40 decimal digits.
static PI: Lazy<Hpf> = Lazy::new(|| Hpf::parse_const("3.141592653589793238462643383279502884197"));
/// Tau (2*Pi) to 40 decimal digits.
static TAU: Lazy<Hpf> = Lazy::new(|| Hpf::parse_const("6.283185307179586476925286766559005768394"));

impl Hpf {
    pub const ZERO: Self = Self(Quad::ZERO);
    pub const INFINITY: Self = Self(Quad::INFINITY);
    pub const NAN: Self = Self(Quad::NAN);

    #[inline]
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    pub fn e() -> Self {
        *E
    }

    pub fn pi() -> Self {
        *PI
    }

    pub fn tau() -> Self {
        *TAU
    }

    /// The smallest positive normal value, 2^-16382.
    pub fn min_normal() -> Self {
        Self(Quad::smallest_normalized())
    }

    /// The largest finite value.
    pub fn max_finite() -> Self {
        Self(Quad::largest())
    }

    fn parse_const(digits: &str) -> Self {
        digits.parse().expect("constant literal must parse")
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self(Quad::from_u128(value as u128).value)
    }

    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self(Quad::from_i128(value as i128).value)
    }

    #[inline]
    pub fn from_u128(value: u128) -> Self {
        Self(Quad::from_u128(value).value)
    }

    pub fn from_f64(value: f64) -> Self {
        let wide: StatusAnd<Quad> =
            Double::from_bits(value.to_bits() as u128).convert(&mut false);
        Self(wide.value)
    }

    /// Narrows to an `f64`, saturating to `±f64::INFINITY` when out of range.
    pub fn to_f64(self) -> f64 {
        let narrow: StatusAnd<Double> = self.0.convert(&mut false);
        f64::from_bits(narrow.value.to_bits() as u64)
    }

    /// Truncates toward zero into a `u128`. The value must be non-negative;
    /// values beyond 2^128 saturate.
    pub fn to_u128(self) -> u128 {
        self.0.to_u128(128).value
    }

    /// Truncates toward zero into an `i128`, saturating at the ends.
    pub fn to_i128(self) -> i128 {
        self.0.to_i128(128).value
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0.round_to_integral(Round::TowardNegative).value)
    }

    #[inline]
    pub fn round(self) -> Self {
        Self(self.0.round_to_integral(Round::NearestTiesToAway).value)
    }

    #[inline]
    pub fn trunc(self) -> Self {
        Self(self.0.round_to_integral(Round::TowardZero).value)
    }

    /// `self * multiplicand + addend` with a single rounding.
    #[inline]
    pub fn mul_add(self, multiplicand: Self, addend: Self) -> Self {
        Self(self.0.mul_add(multiplicand.0, addend.0).value)
    }

    /// The unbiased binary exponent: `floor(log2(|self|))` for finite
    /// nonzero values. The caller must exclude zero, infinities and NaN.
    #[inline]
    pub fn ilogb(self) -> i32 {
        self.0.ilogb() as i32
    }

    /// `self * 2^exp`, saturating to zero or infinity at the ends of the
    /// exponent range.
    pub fn scale_b(self, exp: i32) -> Self {
        let clamped = exp.clamp(i16::MIN as i32, i16::MAX as i32);
        Self(self.0.scalbn(clamped as rustc_apfloat::ExpInt))
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::one() / self
    }
}

impl Add for Hpf {
    type Output = Hpf;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0).value)
    }
}

impl Sub for Hpf {
    type Output = Hpf;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).value)
    }
}

impl Mul for Hpf {
    type Output = Hpf;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self((self.0 * rhs.0).value)
    }
}

impl Div for Hpf {
    type Output = Hpf;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self((self.0 / rhs.0).value)
    }
}

impl Neg for Hpf {
    type Output = Hpf;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl PartialEq for Hpf {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Hpf {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl FromStr for Hpf {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Quad::from_str_r(s, Round::NearestTiesToEven).map(|parsed| Self(parsed.value))
    }
}

impl fmt::Display for Hpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Hpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hpf({})", self.0)
    }
}

impl From<f64> for Hpf {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Hpf> for f64 {
    fn from(value: Hpf) -> f64 {
        value.to_f64()
    }
}
