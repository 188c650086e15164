use core::str::FromStr;

use thiserror::Error;

use crate::codec::encode_operand;
use crate::constants::{LETTER_TOWER, TEN};
use crate::hpf::Hpf;
use crate::hyper;
use crate::safe;
use crate::LetterNum;

/// An error that can occur when parsing a [`LetterNum`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLetterNumError {
    /// The input was empty (or all whitespace).
    #[error("cannot parse a number from an empty string")]
    Empty,
    /// The significand (or the whole input, when no exponent marker is
    /// present) was not a decimal number.
    #[error("malformed significand `{0}`")]
    InvalidSignificand(String),
    /// The part after the exponent marker was not a decimal number.
    #[error("malformed exponent `{0}`")]
    InvalidExponent(String),
    /// Tried to parse with a radix other than ten. Holds the radix that
    /// was attempted.
    #[error("can only parse numbers of radix 10 (got {0})")]
    IncorrectRadix(u32),
}

// Accepted forms:
// <root> ::= "NaN" | <sign>? <num>
// <sign> ::= "+" | "-"
// <num>  ::= "Infinity" | "∞" | <decimal> | <decimal> ("e" | "E") <sign>? <decimal>
// where <decimal> is anything the substrate's parser takes. Exponents
// beyond the substrate's own range are rebuilt from the split parts.

pub(crate) fn parse(input: &str) -> Result<LetterNum, ParseLetterNumError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseLetterNumError::Empty);
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        return parse_unsigned(rest).map(|parsed| -parsed);
    }
    if let Some(rest) = trimmed.strip_prefix('+') {
        return parse_unsigned(rest);
    }
    parse_unsigned(trimmed)
}

fn parse_unsigned(input: &str) -> Result<LetterNum, ParseLetterNumError> {
    if input.is_empty() {
        return Err(ParseLetterNumError::Empty);
    }
    if input.starts_with(['+', '-']) {
        return Err(ParseLetterNumError::InvalidSignificand(input.into()));
    }
    match input {
        "NaN" | "nan" => return Ok(LetterNum::NAN),
        "Infinity" | "∞" | "inf" => return Ok(LetterNum::INFINITY),
        _ => {}
    }

    if let Ok(direct) = input.parse::<Hpf>() {
        if direct.is_nan() {
            return Ok(LetterNum::NAN);
        }
        if direct.is_finite() && !direct.is_zero() {
            return Ok(LetterNum::from_hpf(direct));
        }
        if direct.is_zero() && !has_significant_digit(input) {
            return Ok(LetterNum::ZERO);
        }
        // Otherwise the substrate over- or underflowed; rebuild from the
        // split form below.
    }

    let (sig_text, exp_text) = input
        .split_once(['e', 'E'])
        .ok_or_else(|| ParseLetterNumError::InvalidSignificand(input.into()))?;
    let significand: Hpf = sig_text
        .parse()
        .map_err(|_| ParseLetterNumError::InvalidSignificand(sig_text.into()))?;
    let exp_digits = exp_text.strip_prefix(['+', '-']).unwrap_or(exp_text);
    if !exp_digits.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ParseLetterNumError::InvalidExponent(exp_text.into()));
    }
    let exponent: Hpf = exp_text
        .parse()
        .map_err(|_| ParseLetterNumError::InvalidExponent(exp_text.into()))?;
    if significand.is_nan() || significand.is_infinite() {
        return Err(ParseLetterNumError::InvalidSignificand(sig_text.into()));
    }
    if significand.is_zero() {
        return Ok(LetterNum::ZERO);
    }
    let negative = significand.is_negative();
    let magnitude_log = exponent + safe::safe_log10(significand.abs());
    let unsigned = from_decimal_exponent(magnitude_log);
    Ok(if negative { -unsigned } else { unsigned })
}

/// Builds `10^magnitude_log`, choosing between full construction and a
/// direct jump to the tower letter.
fn from_decimal_exponent(magnitude_log: Hpf) -> LetterNum {
    if magnitude_log.is_nan() {
        return LetterNum::NAN;
    }
    if magnitude_log.is_infinite() {
        return if magnitude_log.is_negative() {
            LetterNum::ZERO
        } else {
            LetterNum::INFINITY
        };
    }
    let reciprocal = magnitude_log.is_negative();
    let magnitude_log = magnitude_log.abs();
    let grown = if magnitude_log < *TEN {
        LetterNum::from_hpf(magnitude_log).exp10()
    } else {
        let operand = Hpf::one() + hyper::super_log10(magnitude_log);
        let (int_part, fraction) = encode_operand(operand);
        LetterNum::pack(false, false, LETTER_TOWER, int_part, fraction)
    };
    if reciprocal {
        grown.recip()
    } else {
        grown
    }
}

/// Whether the part before any exponent marker contains a nonzero digit;
/// distinguishes a written zero from substrate underflow.
fn has_significant_digit(input: &str) -> bool {
    input
        .split(['e', 'E'])
        .next()
        .unwrap_or("")
        .chars()
        .any(|c| c.is_ascii_digit() && c != '0')
}

impl FromStr for LetterNum {
    type Err = ParseLetterNumError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse(input)
    }
}
