//! Fixed-width big numbers spanning linear, exponential and
//! super-exponential regimes.
//!
//! A [`LetterNum`] packs sign, a reciprocal flag, a six-bit regime
//! selector (the *letter*) and a Q3.85 operand into one 96-bit word. The
//! letter names the rule that turns the operand into a magnitude, from
//! plain linear ranges through `10^operand` up to iterated power towers,
//! so a single copyable value covers everything from the reciprocal of a
//! power tower to the tower itself.
//!
//! ```
//! use letternum::LetterNum;
//!
//! let a = LetterNum::from(2.0);
//! let b = LetterNum::from(3.0);
//! assert_eq!(a + b, LetterNum::from(5.0));
//!
//! let googol: LetterNum = "1e100".parse().unwrap();
//! assert_eq!(googol.log10(), LetterNum::HUNDRED);
//! assert_eq!(googol.to_string(), "1e+100");
//! ```
//!
//! Arithmetic follows IEEE 754 conventions for NaN, infinities and signed
//! zero; overflow past the largest letter saturates to infinity and
//! underflow saturates to zero.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::{ConstOne, ConstZero, Num, One, Signed, Zero};

mod codec;
mod constants;
mod convert;
mod fmt;
mod hpf;
mod hyper;
mod math;
mod parsing;
mod safe;

pub use convert::TryFromLetterNumError;
pub use hpf::Hpf;
pub use parsing::ParseLetterNumError;

use codec::{FRACTION_MASK, SIGN_BIT};
use constants::*;

/// A 96-bit packed big number. See the crate documentation for the
/// encoding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy)]
pub struct LetterNum {
    lo: u32,
    mid: u32,
    hi: u32,
}

impl LetterNum {
    pub const NAN: Self = Self::pack(false, true, LETTER_SPECIAL, 1, 0);
    pub const INFINITY: Self = Self::pack(false, false, LETTER_SPECIAL, 0, 0);
    pub const NEG_INFINITY: Self = Self::pack(true, false, LETTER_SPECIAL, 0, 0);
    pub const ZERO: Self = Self::pack(false, true, LETTER_SPECIAL, 0, 0);
    pub const NEG_ZERO: Self = Self::pack(true, true, LETTER_SPECIAL, 0, 0);
    pub const ONE: Self = Self::pack(false, false, LETTER_UNIT, 0, 0);
    pub const NEG_ONE: Self = Self::pack(true, false, LETTER_UNIT, 0, 0);
    pub const TWO: Self = Self::pack(false, false, LETTER_DOUBLE, 0, 0);
    pub const TEN: Self = Self::pack(false, false, LETTER_SCALED, 3, 0);
    pub const HUNDRED: Self = Self::pack(false, false, LETTER_EXP, 0, 0);
    /// The largest finite value: the top of the letter-J operand range.
    pub const MAX: Self = Self::pack(false, false, LETTER_J, 7, FRACTION_MASK);
    pub const MIN: Self = Self::pack(true, false, LETTER_J, 7, FRACTION_MASK);
    /// The smallest positive value, the reciprocal of [`Self::MAX`].
    pub const EPSILON: Self = Self::pack(false, true, LETTER_J, 7, FRACTION_MASK);

    pub fn e() -> Self {
        *BIG_E
    }

    pub fn pi() -> Self {
        *BIG_PI
    }

    pub fn tau() -> Self {
        *BIG_TAU
    }

    pub fn ln_10() -> Self {
        *BIG_LN_10
    }

    pub fn log2_10() -> Self {
        *BIG_LOG2_10
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.letter() == LETTER_SPECIAL && !(self.integer_part() == 0 && self.fraction() == 0)
    }

    /// Whether this is the quiet flavor of NaN.
    #[inline]
    pub const fn is_quiet_nan(self) -> bool {
        self.is_nan() && self.reciprocal_bit()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.letter() == LETTER_SPECIAL
            && self.integer_part() == 0
            && self.fraction() == 0
            && self.reciprocal_bit()
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.letter() == LETTER_SPECIAL
            && self.integer_part() == 0
            && self.fraction() == 0
            && !self.reciprocal_bit()
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        !(self.is_nan() || self.is_infinite())
    }

    #[inline]
    pub fn is_positive_infinity(self) -> bool {
        self.is_infinite() && !self.sign_bit()
    }

    #[inline]
    pub fn is_negative_infinity(self) -> bool {
        self.is_infinite() && self.sign_bit()
    }

    /// Whether the sign bit is set. True for negative zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.sign_bit()
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.sign_bit()
    }

    /// Whether the encoded magnitude is carried as a reciprocal, i.e. the
    /// value is finite, nonzero and below one in magnitude.
    #[inline]
    pub fn is_reciprocal(self) -> bool {
        self.letter() != LETTER_SPECIAL && self.reciprocal_bit()
    }

    /// Finite and nonzero. There are no gradual-underflow encodings, so
    /// this is the complement of zero among finite values.
    #[inline]
    pub fn is_normal(self) -> bool {
        self.is_finite() && !self.is_zero()
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        false
    }

    #[inline]
    pub fn is_real_number(self) -> bool {
        !self.is_nan()
    }

    #[inline]
    pub const fn is_complex_number(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_imaginary_number(self) -> bool {
        false
    }

    /// Whether the word is already in its canonical form.
    #[inline]
    pub fn is_canonical(self) -> bool {
        self.word() == self.normalized().word()
    }

    pub fn is_integer(self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.is_zero() {
            return true;
        }
        if self.letter() >= LETTER_TOWER {
            return !self.reciprocal_bit();
        }
        let decoded = self.to_hpf();
        decoded == decoded.floor()
    }

    /// Integral and divisible by two. Values past the exponential letters
    /// are divisible by ten at every representable step.
    pub fn is_even_integer(self) -> bool {
        if !self.is_integer() {
            return false;
        }
        if self.is_zero() {
            return true;
        }
        if self.letter() >= LETTER_TOWER {
            return true;
        }
        let decoded = self.to_hpf().abs();
        decoded == decoded.scale_b(-1).floor().scale_b(1)
    }

    pub fn is_odd_integer(self) -> bool {
        self.is_integer() && !self.is_even_integer()
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.sign_bit() {
            -self
        } else {
            self
        }
    }

    /// Canonical form: special values collapse to their canonical words
    /// and a reciprocal of exactly one collapses to one. Equality and
    /// hashing compare canonical forms.
    pub fn normalized(self) -> Self {
        if self.letter() == LETTER_SPECIAL {
            if self.is_nan() {
                return Self::NAN;
            }
            if self.is_zero() {
                return if self.sign_bit() { Self::NEG_ZERO } else { Self::ZERO };
            }
            return if self.sign_bit() { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        if self.reciprocal_bit()
            && self.letter() == LETTER_UNIT
            && self.integer_part() == 0
            && self.fraction() == 0
        {
            return if self.sign_bit() { Self::NEG_ONE } else { Self::ONE };
        }
        self
    }

    /// The larger of the two values; NaN if either is NaN.
    pub fn max(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self < other {
            other
        } else {
            self
        }
    }

    /// The smaller of the two values; NaN if either is NaN.
    pub fn min(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if other < self {
            other
        } else {
            self
        }
    }

    /// The value with the larger magnitude; NaN if either is NaN.
    pub fn max_magnitude(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.abs() < other.abs() {
            other
        } else {
            self
        }
    }

    /// The value with the larger magnitude, ignoring NaN operands.
    pub fn max_magnitude_number(self, other: Self) -> Self {
        if self.is_nan() {
            return other;
        }
        if other.is_nan() {
            return self;
        }
        if self.abs() < other.abs() {
            other
        } else {
            self
        }
    }

    /// The value with the smaller magnitude; NaN if either is NaN.
    pub fn min_magnitude(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if other.abs() < self.abs() {
            other
        } else {
            self
        }
    }

    /// The value with the smaller magnitude, ignoring NaN operands.
    pub fn min_magnitude_number(self, other: Self) -> Self {
        if self.is_nan() {
            return other;
        }
        if other.is_nan() {
            return self;
        }
        if other.abs() < self.abs() {
            other
        } else {
            self
        }
    }

    fn sign_class(self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign_bit() {
            -1
        } else {
            1
        }
    }

    /// Magnitude order for positive, nonzero, canonical words: reciprocals
    /// sort below non-reciprocals, then the packed (letter, operand) pair
    /// orders lexicographically, reversed under the reciprocal flag.
    fn cmp_magnitudes(lhs: Self, rhs: Self) -> Ordering {
        match (lhs.is_infinite(), rhs.is_infinite()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match (lhs.reciprocal_bit(), rhs.reciprocal_bit()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (flip, _) => {
                    let order = (lhs.letter(), lhs.operand_floored(), lhs.fraction())
                        .cmp(&(rhs.letter(), rhs.operand_floored(), rhs.fraction()));
                    if flip {
                        order.reverse()
                    } else {
                        order
                    }
                }
            },
        }
    }

    /// Sum of two positive finite values: directly on the substrate while
    /// it fits, otherwise in log space via
    /// `log10(a+b) = log10(a) + log10(1 + 10^(log10(b) - log10(a)))`.
    ///
    /// The offset `log10(b) - log10(a)` is taken in the substrate; once
    /// either logarithm leaves the substrate's range the smaller operand
    /// is below the larger one's resolution and the larger is returned
    /// unchanged.
    fn add_magnitudes(lhs: Self, rhs: Self) -> Self {
        let (big, small) = if lhs < rhs { (rhs, lhs) } else { (lhs, rhs) };
        if let (Some(x), Some(y)) = (big.to_finite_hpf(), small.to_finite_hpf()) {
            let sum = x + y;
            if sum.is_finite() {
                return Self::from_hpf(sum);
            }
        }
        let big_log = big.log10();
        let (Some(x), Some(y)) = (big_log.to_finite_hpf(), small.log10().to_finite_hpf())
        else {
            return big;
        };
        let ratio = safe::safe_exp10(y - x);
        if ratio.is_nan() || ratio.is_zero() {
            return big;
        }
        let one = Hpf::one();
        // Cancellation noise in the offset can push the ratio past one;
        // the operands are then equal at the encoding's resolution.
        let ratio = if ratio < one { ratio } else { one };
        let shifted = x + safe::safe_log10(one + ratio);
        if !(x < shifted) {
            return big;
        }
        Self::from_hpf(shifted).exp10()
    }

    /// Difference of two positive finite values; may come out negative.
    /// Direct substrate subtraction while the larger magnitude is at
    /// least the substrate's smallest normal, log space below and beyond.
    fn sub_magnitudes(lhs: Self, rhs: Self) -> Self {
        if lhs == rhs {
            return Self::ZERO;
        }
        if lhs < rhs {
            return -Self::sub_magnitudes(rhs, lhs);
        }
        if let (Some(x), Some(y)) = (lhs.to_finite_hpf(), rhs.to_finite_hpf()) {
            if !(x < Hpf::min_normal()) {
                return Self::from_hpf(x - y);
            }
        }
        let big_log = lhs.log10();
        let (Some(x), Some(y)) = (big_log.to_finite_hpf(), rhs.log10().to_finite_hpf())
        else {
            return lhs;
        };
        let ratio = safe::safe_exp10(y - x);
        if ratio.is_nan() || ratio.is_zero() {
            return lhs;
        }
        let one = Hpf::one();
        if !(ratio < one) {
            return Self::ZERO;
        }
        let shifted = x + safe::safe_log10(one - ratio);
        if !(shifted < x) {
            return lhs;
        }
        Self::from_hpf(shifted).exp10()
    }

    fn mul_magnitudes(lhs: Self, rhs: Self) -> Self {
        let (big, small) = if lhs < rhs { (rhs, lhs) } else { (lhs, rhs) };
        if let (Some(x), Some(y)) = (big.to_finite_hpf(), small.to_finite_hpf()) {
            let product = x * y;
            if product.is_finite() && !product.is_zero() {
                return Self::from_hpf(product);
            }
        }
        (big.log10() + small.log10()).exp10()
    }

    fn div_magnitudes(lhs: Self, rhs: Self) -> Self {
        if let (Some(x), Some(y)) = (lhs.to_finite_hpf(), rhs.to_finite_hpf()) {
            let quotient = x / y;
            if quotient.is_finite() && !quotient.is_zero() {
                return Self::from_hpf(quotient);
            }
        }
        (lhs.log10() - rhs.log10()).exp10()
    }
}

impl Add for LetterNum {
    type Output = LetterNum;

    fn add(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() || other.is_infinite() {
            if self.is_infinite() && other.is_infinite() {
                return if self.sign_bit() != other.sign_bit() { Self::NAN } else { self };
            }
            return if self.is_infinite() { self } else { other };
        }
        if self.is_zero() && other.is_zero() {
            // IEEE signed zero: only -0 + -0 keeps the sign
            return if self.sign_bit() && other.sign_bit() { Self::NEG_ZERO } else { Self::ZERO };
        }
        if other.is_zero() {
            return self;
        }
        if self.is_zero() {
            return other;
        }
        match (self.sign_bit(), other.sign_bit()) {
            (false, false) => Self::add_magnitudes(self, other),
            (true, true) => -Self::add_magnitudes(-self, -other),
            (false, true) => Self::sub_magnitudes(self, -other),
            (true, false) => Self::sub_magnitudes(other, -self),
        }
    }
}

impl Sub for LetterNum {
    type Output = LetterNum;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl Mul for LetterNum {
    type Output = LetterNum;

    fn mul(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        let negative = self.sign_bit() ^ other.sign_bit();
        let lhs = self.abs();
        let rhs = other.abs();
        if (lhs.is_zero() && rhs.is_infinite()) || (lhs.is_infinite() && rhs.is_zero()) {
            return Self::NAN;
        }
        if lhs.is_zero() || rhs.is_zero() {
            return if negative { Self::NEG_ZERO } else { Self::ZERO };
        }
        if lhs.is_infinite() || rhs.is_infinite() {
            return if negative { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        let magnitude = if rhs == Self::ONE {
            lhs
        } else if lhs == Self::ONE {
            rhs
        } else {
            Self::mul_magnitudes(lhs, rhs)
        };
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Div for LetterNum {
    type Output = LetterNum;

    fn div(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        let negative = self.sign_bit() ^ other.sign_bit();
        let lhs = self.abs();
        let rhs = other.abs();
        if (lhs.is_infinite() && rhs.is_infinite()) || (lhs.is_zero() && rhs.is_zero()) {
            return Self::NAN;
        }
        if rhs.is_zero() || lhs.is_infinite() {
            return if negative { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        if lhs.is_zero() || rhs.is_infinite() {
            return if negative { Self::NEG_ZERO } else { Self::ZERO };
        }
        let magnitude = if rhs == Self::ONE {
            lhs
        } else if lhs == rhs {
            Self::ONE
        } else {
            Self::div_magnitudes(lhs, rhs)
        };
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Rem for LetterNum {
    type Output = LetterNum;

    /// Floored remainder, `self - other * floor(self / other)`.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn rem(self, other: Self) -> Self {
        if other.is_zero() {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        if self.is_nan() || other.is_nan() || self.is_infinite() {
            return Self::NAN;
        }
        if other.is_infinite() {
            return self;
        }
        let quotient = (self / other).floor();
        self - other * quotient
    }
}

impl Neg for LetterNum {
    type Output = LetterNum;

    #[inline]
    fn neg(self) -> Self {
        self.with_word_bits(SIGN_BIT)
    }
}

macro_rules! forward_binop_impl {
    ($($assign_trait:ident: $assign_fn:ident, $binop_trait:ident: $binop_fn:ident);* $(;)?) => {$(
        impl $assign_trait for LetterNum {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $binop_trait::$binop_fn(*self, rhs);
            }
        }

        impl $binop_trait<f64> for LetterNum {
            type Output = LetterNum;

            fn $binop_fn(self, rhs: f64) -> LetterNum {
                $binop_trait::$binop_fn(self, LetterNum::from(rhs))
            }
        }

        impl $assign_trait<f64> for LetterNum {
            fn $assign_fn(&mut self, rhs: f64) {
                *self = $binop_trait::$binop_fn(*self, LetterNum::from(rhs));
            }
        }

        impl $binop_trait<LetterNum> for f64 {
            type Output = LetterNum;

            fn $binop_fn(self, rhs: LetterNum) -> LetterNum {
                $binop_trait::$binop_fn(LetterNum::from(self), rhs)
            }
        }
    )*};
}

forward_binop_impl! {
    AddAssign: add_assign, Add: add;
    SubAssign: sub_assign, Sub: sub;
    MulAssign: mul_assign, Mul: mul;
    DivAssign: div_assign, Div: div;
    RemAssign: rem_assign, Rem: rem;
}

impl PartialEq for LetterNum {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }
        self.normalized().word() == other.normalized().word()
    }
}

impl PartialOrd for LetterNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        let lhs = self.normalized();
        let rhs = other.normalized();
        let class = lhs.sign_class().cmp(&rhs.sign_class());
        if class != Ordering::Equal {
            return Some(class);
        }
        if lhs.is_zero() {
            return Some(Ordering::Equal);
        }
        let magnitudes = Self::cmp_magnitudes(lhs.abs(), rhs.abs());
        Some(if lhs.sign_bit() { magnitudes.reverse() } else { magnitudes })
    }
}

impl PartialEq<f64> for LetterNum {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::from(*other)
    }
}

impl PartialOrd<f64> for LetterNum {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&Self::from(*other))
    }
}

impl Hash for LetterNum {
    fn hash<S: Hasher>(&self, state: &mut S) {
        let canonical = if self.is_zero() { Self::ZERO } else { self.normalized() };
        canonical.lo.hash(state);
        canonical.mid.hash(state);
        canonical.hi.hash(state);
    }
}

impl Zero for LetterNum {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        LetterNum::is_zero(*self)
    }
}

impl ConstZero for LetterNum {
    const ZERO: Self = Self::ZERO;
}

impl One for LetterNum {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl ConstOne for LetterNum {
    const ONE: Self = Self::ONE;
}

impl Signed for LetterNum {
    fn abs(&self) -> Self {
        LetterNum::abs(*self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            return Self::ZERO;
        }
        *self - *other
    }

    fn signum(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if LetterNum::is_zero(*self) {
            return Self::ZERO;
        }
        if self.sign_bit() {
            Self::NEG_ONE
        } else {
            Self::ONE
        }
    }

    fn is_positive(&self) -> bool {
        LetterNum::is_positive(*self)
    }

    fn is_negative(&self) -> bool {
        LetterNum::is_negative(*self)
    }
}

impl Num for LetterNum {
    type FromStrRadixErr = ParseLetterNumError;

    fn from_str_radix(string: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(ParseLetterNumError::IncorrectRadix(radix));
        }
        string.parse()
    }
}

impl Default for LetterNum {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}
