use letternum::LetterNum;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn addition_commutes(a: f64, b: f64) -> bool {
    let x = LetterNum::from(a);
    let y = LetterNum::from(b);
    let left = x + y;
    let right = y + x;
    (left.is_nan() && right.is_nan()) || left == right
}

#[quickcheck]
fn multiplication_commutes(a: f64, b: f64) -> bool {
    let x = LetterNum::from(a);
    let y = LetterNum::from(b);
    let left = x * y;
    let right = y * x;
    (left.is_nan() && right.is_nan()) || left == right
}

#[quickcheck]
fn double_negation_restores_the_value(a: f64) -> bool {
    let value = LetterNum::from(a);
    let twice = -(-value);
    if value.is_nan() {
        return twice.is_nan();
    }
    twice == value && twice.is_negative() == value.is_negative()
}

#[quickcheck]
fn zero_is_an_additive_identity(a: f64) -> bool {
    let value = LetterNum::from(a);
    let summed = value + LetterNum::ZERO;
    (value.is_nan() && summed.is_nan()) || summed == value
}

#[quickcheck]
fn one_is_a_multiplicative_identity(a: f64) -> bool {
    let value = LetterNum::from(a);
    let product = value * LetterNum::ONE;
    let quotient = value / LetterNum::ONE;
    if value.is_nan() {
        return product.is_nan() && quotient.is_nan();
    }
    product == value && quotient == value
}

#[quickcheck]
fn zero_absorbs_finite_products(a: f64) -> TestResult {
    let value = LetterNum::from(a);
    if !value.is_finite() {
        return TestResult::discard();
    }
    TestResult::from_bool((value * LetterNum::ZERO).is_zero())
}

#[quickcheck]
fn zero_divided_by_nonzero_is_zero(a: f64) -> TestResult {
    let value = LetterNum::from(a);
    if value.is_nan() || value.is_zero() {
        return TestResult::discard();
    }
    TestResult::from_bool((LetterNum::ZERO / value).is_zero())
}

#[quickcheck]
fn nan_propagates_through_arithmetic(a: f64) -> bool {
    let value = LetterNum::from(a);
    let mut holds = (LetterNum::NAN + value).is_nan()
        && (LetterNum::NAN - value).is_nan()
        && (LetterNum::NAN * value).is_nan()
        && (LetterNum::NAN / value).is_nan();
    if !value.is_zero() {
        holds &= (LetterNum::NAN % value).is_nan();
    }
    holds
}

#[quickcheck]
fn reciprocal_is_an_involution(a: f64) -> TestResult {
    let value = LetterNum::from(a);
    if !value.is_finite() || value.is_zero() {
        return TestResult::discard();
    }
    TestResult::from_bool(value.recip().recip() == value)
}

#[quickcheck]
fn exp10_inverts_log10(a: f64) -> TestResult {
    if !a.is_finite() || a <= 0.0 {
        return TestResult::discard();
    }
    let round_trip = LetterNum::from(a).log10().exp10();
    let got = round_trip.to_f64();
    TestResult::from_bool((got - a).abs() <= a.abs() * 1e-4 + 1e-300)
}

#[quickcheck]
fn log10_inverts_exp10(a: f64) -> TestResult {
    if !a.is_finite() {
        return TestResult::discard();
    }
    let round_trip = LetterNum::from(a).exp10().log10();
    let got = round_trip.to_f64();
    TestResult::from_bool((got - a).abs() <= a.abs() * 1e-4 + 1e-4)
}

#[quickcheck]
fn ordering_is_trichotomous(a: f64, b: f64) -> TestResult {
    let x = LetterNum::from(a);
    let y = LetterNum::from(b);
    if x.is_nan() || y.is_nan() {
        return TestResult::discard();
    }
    let holds = [x < y, x == y, x > y].iter().filter(|held| **held).count() == 1;
    TestResult::from_bool(holds)
}

#[quickcheck]
fn ordering_is_antisymmetric(a: f64, b: f64) -> TestResult {
    let x = LetterNum::from(a);
    let y = LetterNum::from(b);
    if x.is_nan() || y.is_nan() {
        return TestResult::discard();
    }
    TestResult::from_bool(if x < y { !(y < x) } else { true })
}

#[quickcheck]
fn floored_remainder_stays_in_range(a: i32, b: i32) -> TestResult {
    if b <= 0 {
        return TestResult::discard();
    }
    let x = LetterNum::from(a);
    let y = LetterNum::from(b);
    let remainder = x % y;
    TestResult::from_bool(remainder >= LetterNum::ZERO && remainder < y)
}

#[quickcheck]
fn division_by_self_is_one(a: f64) -> TestResult {
    let value = LetterNum::from(a);
    if !value.is_finite() || value.is_zero() {
        return TestResult::discard();
    }
    TestResult::from_bool(value / value == LetterNum::ONE)
}
