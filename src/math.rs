//! Logarithms, exponentials, powers and the factorial.
//!
//! `log10` and `exp10` are the primitive pair; everything else changes
//! base through them. Below the exponential letter they round-trip
//! through the substrate, above it they move the operand between letters
//! directly, so the same code path serves every regime.

use crate::codec::encode_operand;
use crate::constants::*;
use crate::hpf::Hpf;
use crate::hyper;
use crate::safe;
use crate::LetterNum;

/// Lanczos coefficients, g = 7, nine terms.
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

impl LetterNum {
    /// Base-10 logarithm.
    ///
    /// NaN for NaN, negative or zero inputs; zero for negative infinity,
    /// matching the reference semantics rather than IEEE 754.
    pub fn log10(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return if self.is_negative() { Self::ZERO } else { Self::INFINITY };
        }
        if self.is_zero() {
            return Self::NAN;
        }
        if self.is_negative() {
            return Self::NAN;
        }
        if self.reciprocal_bit() {
            return -self.inverted_magnitude().log10();
        }
        match self.letter() {
            LETTER_UNIT..=LETTER_TENS => Self::from_hpf(safe::safe_log10(self.to_hpf())),
            // The operand of the exponential letter is its own log10.
            LETTER_EXP => Self::from_hpf(self.operand()),
            LETTER_TOWER => {
                let lowered = self.operand() - Hpf::one();
                if lowered < *TWO {
                    Self::from_exp_operand(safe::safe_exp10(lowered - Hpf::one()))
                } else {
                    let (int_part, fraction) = encode_operand(lowered);
                    Self::pack(false, false, LETTER_TOWER, int_part, fraction)
                }
            }
            LETTER_J => self.log10_letter_j(),
            _ => Self::NAN,
        }
    }

    /// Ten raised to this value.
    pub fn exp10(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return if self.is_negative() { Self::ZERO } else { Self::INFINITY };
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_negative() {
            return (-self).exp10().recip();
        }
        if self.reciprocal_bit() || self.letter() < LETTER_EXP {
            return Self::from_hpf(safe::safe_exp10(self.to_hpf()));
        }
        match self.letter() {
            LETTER_EXP => {
                let operand = *TWO + safe::safe_log10(self.operand());
                let (int_part, fraction) = encode_operand(operand);
                Self::pack(false, false, LETTER_TOWER, int_part, fraction)
            }
            LETTER_TOWER => {
                let operand = self.operand();
                if operand < Hpf::from_u64(9) {
                    let (int_part, fraction) = encode_operand(operand + Hpf::one());
                    Self::pack(false, false, LETTER_TOWER, int_part, fraction)
                } else {
                    let g = *TWO
                        + safe::safe_log10(hyper::super_log10(operand + Hpf::one()));
                    let (int_part, fraction) = encode_operand(hyper::letter_g_to_j(g));
                    Self::pack(false, false, LETTER_J, int_part, fraction)
                }
            }
            LETTER_J => self.exp10_letter_j(),
            _ => Self::NAN,
        }
    }

    /// log10 of a letter-J value: re-express through the g-scale, peel one
    /// exponential off the tower, then either step down a letter or
    /// renormalize in place. Once the tower leaves the substrate a single
    /// log10 is below the operand's resolution and the value is returned
    /// unchanged.
    fn log10_letter_j(self) -> Self {
        let g = hyper::letter_j_to_g(self.operand());
        if !(g < Hpf::from_u64(3)) {
            return self;
        }
        let tower = hyper::letter_f(hyper::letter_f(g - *TWO));
        if !tower.is_finite() {
            return self;
        }
        let lowered = tower - Hpf::one();
        if lowered < *TEN {
            let (int_part, fraction) = encode_operand(lowered);
            Self::pack(false, false, LETTER_TOWER, int_part, fraction)
        } else {
            let renormalized =
                *TWO + safe::safe_log10(hyper::super_log10(lowered));
            let (int_part, fraction) =
                encode_operand(hyper::letter_g_to_j(renormalized));
            Self::pack(false, false, LETTER_J, int_part, fraction)
        }
    }

    /// Mirror of [`Self::log10_letter_j`]; saturates in place once the
    /// tower height can no longer move under the substrate's precision.
    fn exp10_letter_j(self) -> Self {
        let g = hyper::letter_j_to_g(self.operand());
        if !(g < Hpf::from_u64(3)) {
            return self;
        }
        let tower = hyper::letter_f(hyper::letter_f(g - *TWO));
        if !tower.is_finite() {
            return self;
        }
        let renormalized =
            *TWO + safe::safe_log10(hyper::super_log10(tower + Hpf::one()));
        let (int_part, fraction) =
            encode_operand(hyper::letter_g_to_j(renormalized));
        Self::pack(false, false, LETTER_J, int_part, fraction)
    }

    /// Builds a positive value from its base-10 logarithm expressed as an
    /// exponential-letter operand; falls back to full construction below
    /// that letter's range and promotes at its top.
    fn from_exp_operand(operand: Hpf) -> Self {
        let operand = crate::codec::snap_to_integer(operand);
        if !(operand < *TEN) {
            let (int_part, fraction) = encode_operand(*TWO);
            return Self::pack(false, false, LETTER_TOWER, int_part, fraction);
        }
        if operand < *TWO {
            return Self::from_hpf(safe::safe_exp10(operand));
        }
        let (int_part, fraction) = encode_operand(operand);
        Self::pack(false, false, LETTER_EXP, int_part, fraction)
    }

    /// The packed word with the reciprocal flag cleared: `1/self` for a
    /// finite reciprocal value.
    fn inverted_magnitude(self) -> Self {
        self.with_word_bits(crate::codec::RECIPROCAL_BIT)
    }

    /// Base-2 logarithm.
    pub fn log2(self) -> Self {
        self.log10() * Self::log2_10()
    }

    /// Two raised to this value.
    pub fn exp2(self) -> Self {
        (self / Self::log2_10()).exp10()
    }

    /// Natural logarithm.
    pub fn ln(self) -> Self {
        if let Some(decoded) = self.to_finite_hpf() {
            if !decoded.is_zero() && !decoded.is_negative() {
                return Self::from_hpf(safe::safe_log(decoded));
            }
        }
        self.log10() * Self::ln_10()
    }

    /// Natural exponential.
    pub fn exp(self) -> Self {
        if let Some(decoded) = self.to_finite_hpf() {
            let direct = safe::safe_exp(decoded);
            if direct.is_finite() && !direct.is_zero() {
                return Self::from_hpf(direct);
            }
        }
        (self / Self::ln_10()).exp10()
    }

    /// Logarithm in an arbitrary base.
    pub fn log(self, base: Self) -> Self {
        self.log10() / base.log10()
    }

    /// Raises this value to the given power.
    pub fn pow(self, exponent: Self) -> Self {
        if self.is_nan() || exponent.is_nan() {
            return Self::NAN;
        }
        if exponent.is_zero() {
            return Self::ONE;
        }
        if exponent == Self::ONE {
            return self;
        }
        if exponent.is_negative() {
            return self.pow(-exponent).recip();
        }
        if self.is_negative() && !self.is_zero() {
            if exponent.is_integer() {
                let flipped = self.abs().pow(exponent);
                return if exponent.is_odd_integer() { -flipped } else { flipped };
            }
            return Self::NAN;
        }
        if self == Self::ONE {
            return Self::ONE;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        if self == Self::TEN {
            return exponent.exp10();
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        if let (Some(base), Some(power)) = (self.to_finite_hpf(), exponent.to_finite_hpf())
        {
            let direct = safe::safe_pow(base, power);
            if direct.is_finite() && !direct.is_zero() {
                return Self::from_hpf(direct);
            }
        }
        (self.log10() * exponent).exp10()
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        self.pow(Self::from(0.5))
    }

    pub fn cbrt(self) -> Self {
        if self.is_negative() && !self.is_zero() {
            return -(-self).cbrt();
        }
        self.pow(Self::ONE / Self::from(3))
    }

    /// Multiplicative inverse. `1/0` is signed infinity and the inverse
    /// of an infinity is the correspondingly signed zero.
    pub fn recip(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return if self.is_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        if self.is_infinite() {
            return if self.is_negative() { Self::NEG_ZERO } else { Self::ZERO };
        }
        self.with_word_bits(crate::codec::RECIPROCAL_BIT).normalized()
    }

    /// Largest integer less than or equal to this value.
    pub fn floor(self) -> Self {
        if !self.is_finite() || self.is_integer() {
            return self;
        }
        Self::from_hpf(self.to_hpf().floor())
    }

    /// Smallest integer greater than or equal to this value.
    pub fn ceil(self) -> Self {
        if !self.is_finite() || self.is_integer() {
            return self;
        }
        -(-self).floor()
    }

    /// Nearest integer, ties away from zero.
    pub fn round(self) -> Self {
        if !self.is_finite() || self.is_integer() {
            return self;
        }
        Self::from_hpf(self.to_hpf().round())
    }

    /// Integer part, truncating toward zero.
    pub fn trunc(self) -> Self {
        if !self.is_finite() || self.is_integer() {
            return self;
        }
        Self::from_hpf(self.to_hpf().trunc())
    }

    /// Fractional part left over by [`Self::trunc`].
    pub fn fract(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if !self.is_finite() || self.is_integer() {
            return Self::ZERO;
        }
        let decoded = self.to_hpf();
        Self::from_hpf(decoded - decoded.trunc())
    }

    /// The factorial, exact up to 20! and through a nine-term Lanczos
    /// gamma beyond.
    ///
    /// # Panics
    ///
    /// Panics for negative arguments.
    pub fn factorial(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_negative() && !self.is_zero() {
            panic!("factorial of a negative value");
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        if self.is_integer() && self <= Self::from(20) {
            let n = self.to_u64_saturating();
            let mut product = 1u64;
            for factor in 2..=n {
                product *= factor;
            }
            return Self::from(product);
        }
        let x = self.to_f64();
        if !x.is_finite() {
            return Self::INFINITY;
        }
        Self::from(ln_gamma(x + 1.0)).exp()
    }
}

/// Natural log of the gamma function via the Lanczos approximation, with
/// reflection below one half.
fn ln_gamma(z: f64) -> f64 {
    use std::f64::consts::PI;
    if z < 0.5 {
        return PI.ln() - (PI * z).sin().ln() - ln_gamma(1.0 - z);
    }
    let z = z - 1.0;
    let mut acc = LANCZOS[0];
    for (i, coefficient) in LANCZOS.iter().enumerate().skip(1) {
        acc += coefficient / (z + i as f64);
    }
    let t = z + 7.5;
    0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + acc.ln()
}
