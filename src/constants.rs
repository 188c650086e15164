use once_cell::sync::Lazy;

use crate::hpf::Hpf;
use crate::safe;
use crate::LetterNum;

/// Letters name the rule that turns an operand in `[2, 10)` into a
/// magnitude. The ranges nest: each letter picks up where the previous
/// one's magnitude range ends.
pub(crate) const LETTER_UNIT: u8 = 1; // [1, 2)
pub(crate) const LETTER_DOUBLE: u8 = 2; // [2, 4)
pub(crate) const LETTER_SCALED: u8 = 3; // [4, 20)
pub(crate) const LETTER_TENS: u8 = 4; // [20, 100)
pub(crate) const LETTER_EXP: u8 = 5; // [100, 1e10)
pub(crate) const LETTER_TOWER: u8 = 6; // [1e10, 10^10^10^8)
pub(crate) const LETTER_J: u8 = 7; // beyond, through the j/g bijections
pub(crate) const LETTER_SPECIAL: u8 = 0x3F;

pub(crate) const MAX_SAFE_INT: u64 = (1u64 << 53) - 1;

pub(crate) static TWO: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(2));
pub(crate) static FOUR: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(4));
pub(crate) static TEN: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(10));
pub(crate) static TWENTY: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(20));
pub(crate) static HUNDRED: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(100));
pub(crate) static TEN_BILLION: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(10_000_000_000));

/// Operand values this close to an integer are rounded to it before
/// encoding, bridging substrate transcendental error and the 85-bit
/// fraction.
pub(crate) static SNAP_TOLERANCE: Lazy<Hpf> = Lazy::new(|| Hpf::one().scale_b(-40));

/// 2^85, the fraction scale.
pub(crate) static FRACTION_SCALE: Lazy<Hpf> = Lazy::new(|| safe::safe_exp2(Hpf::from_u64(85)));

pub(crate) static BIG_E: Lazy<LetterNum> = Lazy::new(|| LetterNum::from_hpf(Hpf::e()));
pub(crate) static BIG_PI: Lazy<LetterNum> = Lazy::new(|| LetterNum::from_hpf(Hpf::pi()));
pub(crate) static BIG_TAU: Lazy<LetterNum> = Lazy::new(|| LetterNum::from_hpf(Hpf::tau()));
pub(crate) static BIG_LN_10: Lazy<LetterNum> =
    Lazy::new(|| LetterNum::from_hpf(*safe::LOG2_10 * *safe::LN_2));
pub(crate) static BIG_LOG2_10: Lazy<LetterNum> =
    Lazy::new(|| LetterNum::from_hpf(*safe::LOG2_10));
