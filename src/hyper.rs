//! Hyper-transcendentals: the super-logarithm and the tower growth
//! functions behind the two highest letters.
//!
//! `letter_f` and `super_log10` are exact inverses over the substrate's
//! whole finite range. `letter_g` iterates `letter_f` the way `letter_f`
//! iterates `exp10`, and the `letter_j` parameterization compresses the
//! g-scale so a `[2, 10)` operand can span it. The j/g bijections stop
//! being exact once their towers leave the substrate; arithmetic at that
//! height treats the operand as saturated.

use once_cell::sync::Lazy;

use crate::hpf::Hpf;
use crate::safe::{safe_exp10, safe_log10, safe_log2, safe_pow, LOG2_5};

static TEN_BILLION: Lazy<Hpf> = Lazy::new(|| Hpf::from_u64(10_000_000_000));

fn small(value: u64) -> Hpf {
    Hpf::from_u64(value)
}

/// Piecewise base-10 super-logarithm: linear near zero, iterated log
/// beyond. Inverse of [`letter_f`].
pub(crate) fn super_log10(v: Hpf) -> Hpf {
    if v.is_nan() {
        return Hpf::NAN;
    }
    let one = Hpf::one();
    if v < Hpf::ZERO {
        return safe_exp10(v) - small(2);
    }
    if v < one {
        return v - one;
    }
    if v < small(10) {
        return safe_log10(v);
    }
    if v < *TEN_BILLION {
        return one + safe_log10(safe_log10(v));
    }
    small(2) + safe_log10(safe_log10(safe_log10(v)))
}

/// Tower growth for the second-highest letter: `10^10^10^(v-2)` on the
/// operand range, with linear and logarithmic tails below.
pub(crate) fn letter_f(v: Hpf) -> Hpf {
    if v.is_nan() {
        return Hpf::NAN;
    }
    let one = Hpf::one();
    if v < -one {
        return safe_log10(v + small(2));
    }
    if v < Hpf::ZERO {
        return v + one;
    }
    if v < one {
        return safe_exp10(v);
    }
    if v < small(2) {
        return safe_exp10(safe_exp10(v - one));
    }
    safe_exp10(safe_exp10(safe_exp10(v - small(2))))
}

/// One growth level above [`letter_f`]: iterates `letter_f` in place of
/// `exp10`.
pub(crate) fn letter_g(v: Hpf) -> Hpf {
    if v.is_nan() {
        return Hpf::NAN;
    }
    let one = Hpf::one();
    if v < -one {
        return super_log10(v + small(2));
    }
    if v < Hpf::ZERO {
        return v + one;
    }
    if v < one {
        return letter_f(v);
    }
    if v < small(2) {
        return letter_f(letter_f(v - one));
    }
    letter_f(letter_f(letter_f(v - small(2))))
}

/// Inverse of [`letter_g`] on the substrate-representable range: the same
/// piecewise shape with the super-logarithm taking the logarithm's place.
pub(crate) fn letter_g_inv(v: Hpf) -> Hpf {
    if v.is_nan() {
        return Hpf::NAN;
    }
    let one = Hpf::one();
    if v < Hpf::ZERO {
        return letter_f(v) - small(2);
    }
    if v < one {
        return v - one;
    }
    if v < small(10) {
        return super_log10(v);
    }
    one + super_log10(super_log10(v))
}

/// Maps a letter-J operand to its g-scale value.
pub(crate) fn letter_j_to_g(v: Hpf) -> Hpf {
    if v.is_nan() {
        return Hpf::NAN;
    }
    let two = small(2);
    if v < two {
        return v;
    }
    if v < small(3) {
        return two * safe_pow(small(5), v - two);
    }
    letter_g(safe_pow(small(5), v - small(3)))
}

/// Maps a g-scale value back to a letter-J operand. Approximate inverse of
/// [`letter_j_to_g`] for large arguments.
pub(crate) fn letter_g_to_j(v: Hpf) -> Hpf {
    if v.is_nan() {
        return Hpf::NAN;
    }
    let two = small(2);
    if v < two {
        return v;
    }
    if v < small(10) {
        return two + safe_log2(v / two) / *LOG2_5;
    }
    small(3) + safe_log2(letter_g_inv(v)) / *LOG2_5
}
