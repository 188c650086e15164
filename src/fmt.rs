use core::fmt;

use crate::constants::*;
use crate::hpf::Hpf;
use crate::safe;

use crate::LetterNum;

/// Single-character regime tags for the debug form. G, H, I and O are
/// skipped: the first three name internal scale functions, O reads as a
/// zero.
const fn letter_tag(letter: u8) -> Option<char> {
    Some(match letter {
        1 => 'A',
        2 => 'B',
        3 => 'C',
        4 => 'D',
        5 => 'E',
        6 => 'F',
        7 => 'J',
        8 => 'K',
        9 => 'L',
        10 => 'M',
        11 => 'N',
        12 => 'P',
        _ => return None,
    })
}

impl LetterNum {
    /// Scientific form for the tower letter, while the decimal exponent
    /// still fits the substrate exactly; tag form beyond.
    fn write_tower(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mag_log = crate::codec::snap_to_integer(safe::safe_exp10(safe::safe_exp10(
            self.operand() - *TWO,
        )));
        if mag_log.is_finite() && mag_log < Hpf::from_u64(MAX_SAFE_INT) {
            let whole = mag_log.floor();
            let frac = mag_log - whole;
            let exponent = whole.to_u128() as u64;
            if self.reciprocal_bit() {
                if frac.is_zero() {
                    write!(f, "1e-{exponent}")
                } else {
                    let sig = safe::safe_exp10(Hpf::one() - frac).to_f64();
                    write!(f, "{sig}e-{}", exponent + 1)
                }
            } else {
                let sig = safe::safe_exp10(frac).to_f64();
                write!(f, "{sig}e+{exponent}")
            }
        } else {
            self.write_tagged(f)
        }
    }

    fn write_tagged(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reciprocal_bit() {
            f.write_str("1 / ")?;
        }
        let letter = self.letter();
        match letter_tag(letter) {
            Some(tag) => write!(f, "{tag}")?,
            None => write!(f, "[{letter}]")?,
        }
        write!(f, "{}", self.operand().to_f64())
    }
}

impl fmt::Display for LetterNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_infinite() {
            return f.write_str(if self.is_negative() { "-∞" } else { "∞" });
        }
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.is_negative() {
            f.write_str("-")?;
            return fmt::Display::fmt(&self.abs(), f);
        }
        match self.letter() {
            LETTER_UNIT..=LETTER_EXP => write!(f, "{}", self.to_f64()),
            LETTER_TOWER => self.write_tower(f),
            _ => self.write_tagged(f),
        }
    }
}

impl fmt::Debug for LetterNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LetterNum")
            .field("negative", &self.sign_bit())
            .field("reciprocal", &self.reciprocal_bit())
            .field("letter", &self.letter())
            .field("int_part", &self.integer_part())
            .field("fraction", &self.fraction())
            .finish()
    }
}
