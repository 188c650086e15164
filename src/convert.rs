//! Conversions between the packed word, the substrate, and machine
//! numerics.

use num_traits::{FromPrimitive, ToPrimitive};
use thiserror::Error;

use crate::codec::{encode_operand, snap_to_integer};
use crate::constants::*;
use crate::hpf::Hpf;
use crate::hyper;
use crate::safe;
use crate::LetterNum;

/// Error for checked conversions out of a [`LetterNum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryFromLetterNumError {
    #[error("cannot convert NaN to an integer")]
    NotANumber,
    #[error("value out of range for the target type")]
    OutOfRange,
}

impl LetterNum {
    /// Encodes a substrate value: record sign and reciprocity, pick the
    /// letter from the magnitude range, and re-express the magnitude as
    /// that letter's operand.
    pub fn from_hpf(value: Hpf) -> Self {
        if value.is_nan() {
            return Self::NAN;
        }
        if value.is_infinite() {
            return if value.is_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        if value.is_zero() {
            return if value.is_negative() { Self::NEG_ZERO } else { Self::ZERO };
        }
        let negative = value.is_negative();
        let mut magnitude = value.abs();
        let one = Hpf::one();
        let reciprocal = magnitude < one;
        if reciprocal {
            magnitude = magnitude.recip();
            if magnitude.is_infinite() {
                // Inverting a deep subnormal overflows the substrate;
                // recover the operand through the logarithm instead.
                let exponent = -safe::safe_log10(value.abs());
                let operand = one + hyper::super_log10(exponent);
                let (int_part, fraction) = encode_operand(operand);
                return Self::pack(negative, true, LETTER_TOWER, int_part, fraction);
            }
        }
        let (mut letter, mut operand) = if magnitude < *TWO {
            (LETTER_UNIT, *TWO + (magnitude - one).scale_b(3))
        } else if magnitude < *FOUR {
            (LETTER_DOUBLE, *TWO + (magnitude - *TWO).scale_b(2))
        } else if magnitude < *TWENTY {
            (LETTER_SCALED, magnitude.scale_b(-1))
        } else if magnitude < *HUNDRED {
            (LETTER_TENS, magnitude / *TEN)
        } else if magnitude < *TEN_BILLION {
            (LETTER_EXP, safe::safe_log10(magnitude))
        } else {
            (LETTER_TOWER, hyper::super_log10(magnitude))
        };
        // An operand that snaps to the top of its range is exactly the
        // next letter's starting operand.
        if letter < LETTER_TOWER && !(snap_to_integer(operand) < *TEN) {
            letter += 1;
            operand = *TWO;
        }
        let (int_part, fraction) = encode_operand(operand);
        Self::pack(negative, reciprocal, letter, int_part, fraction).normalized()
    }

    /// Decodes back into the substrate. Letters whose magnitude exceeds
    /// the substrate's range saturate to infinity (or zero under the
    /// reciprocal flag); reserved letters decode as NaN.
    pub fn to_hpf(self) -> Hpf {
        if self.is_nan() {
            return Hpf::NAN;
        }
        if self.is_infinite() {
            return if self.is_negative() { -Hpf::INFINITY } else { Hpf::INFINITY };
        }
        if self.is_zero() {
            return if self.is_negative() { -Hpf::ZERO } else { Hpf::ZERO };
        }
        let operand = self.operand();
        let one = Hpf::one();
        let magnitude = match self.letter() {
            LETTER_UNIT => one + (operand - *TWO).scale_b(-3),
            LETTER_DOUBLE => *TWO + (operand - *TWO).scale_b(-2),
            LETTER_SCALED => operand.scale_b(1),
            LETTER_TENS => operand * *TEN,
            LETTER_EXP => safe::safe_exp10(operand),
            LETTER_TOWER => hyper::letter_f(operand),
            LETTER_J => hyper::letter_g(hyper::letter_j_to_g(operand)),
            _ => return Hpf::NAN,
        };
        // Post-decode integer snap: exponent letters store integer
        // magnitudes through transcendentals, so a freshly decoded 10^5
        // must read back as exactly 100000.
        let magnitude = snap_to_integer(magnitude);
        let magnitude = if self.reciprocal_bit() { magnitude.recip() } else { magnitude };
        if self.sign_bit() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The decoded value when it fits the substrate's finite range.
    pub(crate) fn to_finite_hpf(self) -> Option<Hpf> {
        let decoded = self.to_hpf();
        decoded.is_finite().then_some(decoded)
    }

    /// Narrows to an `f64`, saturating to `±f64::INFINITY` beyond its
    /// range.
    pub fn to_f64(self) -> f64 {
        self.to_hpf().to_f64()
    }

    /// Saturating conversion to `i64`; NaN maps to zero and the
    /// fractional part truncates toward zero.
    pub fn to_i64_saturating(self) -> i64 {
        let narrowed = self.to_f64();
        if narrowed.is_nan() {
            0
        } else {
            narrowed as i64
        }
    }

    /// Saturating conversion to `u64`; NaN and negative values map to
    /// zero and the fractional part truncates toward zero.
    pub fn to_u64_saturating(self) -> u64 {
        let narrowed = self.to_f64();
        if narrowed.is_nan() {
            0
        } else {
            narrowed as u64
        }
    }
}

impl From<Hpf> for LetterNum {
    fn from(value: Hpf) -> Self {
        Self::from_hpf(value)
    }
}

impl From<f64> for LetterNum {
    fn from(value: f64) -> Self {
        Self::from_hpf(Hpf::from_f64(value))
    }
}

impl From<f32> for LetterNum {
    fn from(value: f32) -> Self {
        Self::from(value as f64)
    }
}

impl From<i32> for LetterNum {
    fn from(value: i32) -> Self {
        Self::from_hpf(Hpf::from_i64(value as i64))
    }
}

impl From<i64> for LetterNum {
    fn from(value: i64) -> Self {
        Self::from_hpf(Hpf::from_i64(value))
    }
}

impl From<u32> for LetterNum {
    fn from(value: u32) -> Self {
        Self::from_hpf(Hpf::from_u64(value as u64))
    }
}

impl From<u64> for LetterNum {
    fn from(value: u64) -> Self {
        Self::from_hpf(Hpf::from_u64(value))
    }
}

impl From<LetterNum> for f64 {
    fn from(value: LetterNum) -> f64 {
        value.to_f64()
    }
}

impl From<LetterNum> for Hpf {
    fn from(value: LetterNum) -> Hpf {
        value.to_hpf()
    }
}

impl ToPrimitive for LetterNum {
    fn to_f64(&self) -> Option<f64> {
        Some(LetterNum::to_f64(*self))
    }

    fn to_i64(&self) -> Option<i64> {
        LetterNum::to_f64(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() && !self.is_zero() {
            return None;
        }
        LetterNum::to_f64(*self).to_u64()
    }
}

impl FromPrimitive for LetterNum {
    fn from_i64(value: i64) -> Option<Self> {
        Some(Self::from(value))
    }

    fn from_u64(value: u64) -> Option<Self> {
        Some(Self::from(value))
    }

    fn from_f64(value: f64) -> Option<Self> {
        Some(Self::from(value))
    }
}

macro_rules! try_from_impl {
    ($($target:ty: $via:ident),*) => {$(
        impl TryFrom<LetterNum> for $target {
            type Error = TryFromLetterNumError;

            fn try_from(value: LetterNum) -> Result<Self, Self::Error> {
                if value.is_nan() {
                    return Err(TryFromLetterNumError::NotANumber);
                }
                value.$via().ok_or(TryFromLetterNumError::OutOfRange)
            }
        }
    )*};
}

try_from_impl! {
    i32: to_i32,
    i64: to_i64,
    u32: to_u32,
    u64: to_u64
}
