//! Bit layout of the 96-bit word and the Q3.85 operand codec.
//!
//! Most significant to least: sign (1), reciprocal (1), letter (6),
//! operand integer part minus two (3), operand fraction (85). The three
//! `u32` lanes are shuffled through a `u128` intermediate.

use crate::constants::{FRACTION_SCALE, SNAP_TOLERANCE, TWO};
use crate::hpf::Hpf;
use crate::LetterNum;

pub(crate) const FRACTION_BITS: u32 = 85;
pub(crate) const FRACTION_MASK: u128 = (1u128 << FRACTION_BITS) - 1;
pub(crate) const INTEGER_SHIFT: u32 = 85;
pub(crate) const LETTER_SHIFT: u32 = 88;
pub(crate) const RECIPROCAL_BIT: u128 = 1 << 94;
pub(crate) const SIGN_BIT: u128 = 1 << 95;

impl LetterNum {
    pub(crate) const fn from_word(word: u128) -> Self {
        Self {
            lo: word as u32,
            mid: (word >> 32) as u32,
            hi: (word >> 64) as u32,
        }
    }

    pub(crate) const fn word(self) -> u128 {
        (self.hi as u128) << 64 | (self.mid as u128) << 32 | self.lo as u128
    }

    pub(crate) const fn pack(
        negative: bool,
        reciprocal: bool,
        letter: u8,
        int_part: u8,
        fraction: u128,
    ) -> Self {
        let mut word = fraction & FRACTION_MASK;
        word |= ((int_part & 0x7) as u128) << INTEGER_SHIFT;
        word |= ((letter & 0x3F) as u128) << LETTER_SHIFT;
        if reciprocal {
            word |= RECIPROCAL_BIT;
        }
        if negative {
            word |= SIGN_BIT;
        }
        Self::from_word(word)
    }

    #[inline]
    pub(crate) const fn sign_bit(self) -> bool {
        self.word() & SIGN_BIT != 0
    }

    #[inline]
    pub(crate) const fn reciprocal_bit(self) -> bool {
        self.word() & RECIPROCAL_BIT != 0
    }

    #[inline]
    pub(crate) const fn letter(self) -> u8 {
        (self.word() >> LETTER_SHIFT) as u8 & 0x3F
    }

    /// The three-bit stored integer part, `floor(operand) - 2`.
    #[inline]
    pub(crate) const fn integer_part(self) -> u8 {
        (self.word() >> INTEGER_SHIFT) as u8 & 0x7
    }

    /// The 85-bit operand fraction.
    #[inline]
    pub(crate) const fn fraction(self) -> u128 {
        self.word() & FRACTION_MASK
    }

    #[inline]
    pub(crate) const fn operand_floored(self) -> u8 {
        self.integer_part() + 2
    }

    /// Decodes the operand into the substrate: `I + 2 + F * 2^-85`.
    pub(crate) fn operand(self) -> Hpf {
        Hpf::from_u64(self.operand_floored() as u64)
            + Hpf::from_u128(self.fraction()).scale_b(-(FRACTION_BITS as i32))
    }

    #[inline]
    pub(crate) const fn with_word_bits(self, mask: u128) -> Self {
        Self::from_word(self.word() ^ mask)
    }
}

/// Rounds to the nearest integer when within the snap tolerance.
pub(crate) fn snap_to_integer(x: Hpf) -> Hpf {
    let rounded = x.round();
    if (x - rounded).abs() < *SNAP_TOLERANCE {
        rounded
    } else {
        x
    }
}

/// Splits an operand in `[2, 10)` into the stored integer part and the
/// 85-bit fraction, snapping near-integers and carrying an all-ones
/// fraction into the integer part. Out-of-range operands clamp to the
/// nearest representable edge.
pub(crate) fn encode_operand(operand: Hpf) -> (u8, u128) {
    let shifted = snap_to_integer(operand - *TWO);
    let whole = shifted.floor();
    let mut fraction = shifted - whole;
    if fraction.is_negative() {
        fraction = Hpf::ZERO;
    }
    let mut int_part = whole.to_i128();
    let mut scaled = (fraction * *FRACTION_SCALE).floor().to_u128();
    if scaled > FRACTION_MASK {
        scaled = 0;
        int_part += 1;
    }
    if int_part < 0 {
        return (0, 0);
    }
    if int_part > 7 {
        return (7, FRACTION_MASK);
    }
    (int_part as u8, scaled)
}
