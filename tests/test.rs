use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use letternum::{Hpf, LetterNum, ParseLetterNumError, TryFromLetterNumError};
use num_traits::{ConstOne, ConstZero, FromPrimitive, Num, Signed, ToPrimitive};

fn close(value: LetterNum, expected: f64) {
    let got = value.to_f64();
    assert!(
        (got - expected).abs() <= expected.abs() * 1e-10 + 1e-12,
        "expected {expected}, got {got}"
    );
}

fn coarse(value: LetterNum, expected: f64) {
    let got = value.to_f64();
    assert!(
        (got - expected).abs() <= expected.abs() * 1e-4,
        "expected {expected}, got {got}"
    );
}

fn hash_of(value: LetterNum) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_norm() {
    assert_eq!(LetterNum::ONE.recip(), LetterNum::ONE);
    assert!(LetterNum::ONE.recip().is_canonical());
    assert_eq!(LetterNum::NEG_ONE.recip(), LetterNum::NEG_ONE);

    assert_eq!(LetterNum::ZERO, LetterNum::NEG_ZERO);
    assert!(LetterNum::NEG_ZERO.is_negative());
    assert!(LetterNum::ZERO.is_positive());

    assert_eq!(hash_of(LetterNum::ZERO), hash_of(LetterNum::NEG_ZERO));
    assert_eq!(hash_of(LetterNum::ONE.recip()), hash_of(LetterNum::ONE));
}

#[test]
fn test_ops() {
    close(LetterNum::from(2) + LetterNum::from(3), 5.0);
    close(LetterNum::from(5) - LetterNum::from(2), 3.0);
    close(LetterNum::from(4) * LetterNum::from(5), 20.0);
    close(LetterNum::from(10) / LetterNum::from(2), 5.0);

    close(LetterNum::from(-2) * LetterNum::from(-3), 6.0);
    close(LetterNum::from(-4) * LetterNum::from(5), -20.0);
    close(LetterNum::from(-2) + LetterNum::from(-3), -5.0);
    close(LetterNum::from(2) - LetterNum::from(5), -3.0);

    assert_eq!(LetterNum::from(2) + LetterNum::from(3), LetterNum::from(5));
    assert_eq!(LetterNum::ONE + LetterNum::ONE, LetterNum::TWO);
    assert_eq!(LetterNum::from(2) + 3.0, LetterNum::from(5));
    assert_eq!(10.0 / LetterNum::from(2), LetterNum::from(5));
    assert_eq!(1.0 - LetterNum::ZERO, LetterNum::ONE);

    let mut acc = LetterNum::from(10);
    acc += LetterNum::from(5);
    acc -= 3.0;
    acc *= LetterNum::from(2);
    acc /= 4.0;
    close(acc, 6.0);

    assert_eq!(LetterNum::from(10) / LetterNum::ZERO, LetterNum::INFINITY);
    assert_eq!(LetterNum::from(-10) / LetterNum::ZERO, LetterNum::NEG_INFINITY);
    assert!((LetterNum::ZERO / LetterNum::from(5)).is_zero());
    close(LetterNum::from(7) + LetterNum::ZERO, 7.0);
    assert!((LetterNum::ZERO / LetterNum::ZERO).is_nan());

    assert_eq!(LetterNum::INFINITY + LetterNum::ONE, LetterNum::INFINITY);
    assert!((LetterNum::INFINITY - LetterNum::INFINITY).is_nan());
    assert!((LetterNum::INFINITY * LetterNum::ZERO).is_nan());
    assert!((LetterNum::NAN + LetterNum::from(5)).is_nan());
    assert!((LetterNum::NAN * 1.0).is_nan());
    assert_eq!(
        LetterNum::NEG_INFINITY + LetterNum::NEG_INFINITY,
        LetterNum::NEG_INFINITY
    );
    assert_eq!(
        LetterNum::INFINITY * LetterNum::NEG_INFINITY,
        LetterNum::NEG_INFINITY
    );
    assert_eq!(LetterNum::from(17) / LetterNum::INFINITY, LetterNum::ZERO);

    let negatively_zero = LetterNum::NEG_ZERO + LetterNum::NEG_ZERO;
    assert!(negatively_zero.is_zero() && negatively_zero.is_negative());
    let positively_zero = LetterNum::NEG_ZERO + LetterNum::ZERO;
    assert!(positively_zero.is_zero() && positively_zero.is_positive());
    assert!((LetterNum::NEG_ZERO * LetterNum::from(1)).is_negative());

    assert_eq!(-(-LetterNum::from(5)), LetterNum::from(5));
    assert_eq!(-LetterNum::NEG_INFINITY, LetterNum::INFINITY);
    assert_eq!(LetterNum::from(-5).abs(), LetterNum::from(5));
    assert_eq!(Signed::signum(&LetterNum::from(-5)), LetterNum::NEG_ONE);
    assert_eq!(Signed::signum(&LetterNum::from(5)), LetterNum::ONE);
    assert!(Signed::signum(&LetterNum::NAN).is_nan());
    assert_eq!(
        Signed::abs_sub(&LetterNum::from(3), &LetterNum::from(7)),
        LetterNum::ZERO
    );
    close(Signed::abs_sub(&LetterNum::from(7), &LetterNum::from(3)), 4.0);

    close(LetterNum::from(5) % LetterNum::from(3), 2.0);
    close(LetterNum::from(-7) % LetterNum::from(3), 2.0);
    close(LetterNum::from(7) % LetterNum::from(-3), -2.0);
    assert!((LetterNum::NAN % LetterNum::ONE).is_nan());
    assert!((LetterNum::INFINITY % LetterNum::ONE).is_nan());
    assert_eq!(LetterNum::from(5) % LetterNum::INFINITY, LetterNum::from(5));
}

#[test]
fn test_cmp() {
    assert!(LetterNum::NAN != LetterNum::NAN);
    assert!(!(LetterNum::NAN < LetterNum::NAN));
    assert!(!(LetterNum::NAN > LetterNum::NAN));
    assert!(LetterNum::INFINITY == LetterNum::INFINITY);
    assert!(LetterNum::ONE > LetterNum::ZERO);
    assert!(LetterNum::ZERO < LetterNum::ONE);
    assert!(LetterNum::ONE > LetterNum::NEG_ONE);
    assert!(LetterNum::NEG_ONE < LetterNum::NEG_ZERO);

    assert!(LetterNum::from(0.5) < LetterNum::ONE);
    assert!(LetterNum::from(0.5) > LetterNum::from(0.25));
    assert!(LetterNum::from(-0.5) > LetterNum::from(-2));

    let big: LetterNum = "1e1000000".parse().unwrap();
    assert!(big > LetterNum::from(1e300));
    assert!(LetterNum::from(1e300) < big);
    assert!(-big < LetterNum::from(-1e300));
    assert!(big < LetterNum::MAX);
    assert!(LetterNum::INFINITY > LetterNum::MAX);
    assert!(LetterNum::NEG_INFINITY < LetterNum::MIN);
    assert!(LetterNum::MIN < -big);

    assert!(LetterNum::EPSILON > LetterNum::ZERO);
    assert!(LetterNum::EPSILON < LetterNum::from(1e-300));
    assert!(big.recip() < LetterNum::from(1e-300));
    assert!(big.recip() > LetterNum::EPSILON);

    assert!(LetterNum::from(3) < 4.0);
    assert!(LetterNum::from(3) == 3.0);
    assert!(LetterNum::from(3) > 2.5);

    assert_eq!(LetterNum::from(3).max(LetterNum::from(7)), LetterNum::from(7));
    assert_eq!(LetterNum::from(3).min(LetterNum::from(7)), LetterNum::from(3));
    assert!(LetterNum::from(3).max(LetterNum::NAN).is_nan());
    assert_eq!(
        LetterNum::from(-9).max_magnitude(LetterNum::from(4)),
        LetterNum::from(-9)
    );
    assert_eq!(
        LetterNum::from(-9).min_magnitude(LetterNum::from(4)),
        LetterNum::from(4)
    );
    assert_eq!(
        LetterNum::NAN.max_magnitude_number(LetterNum::from(4)),
        LetterNum::from(4)
    );
    assert_eq!(
        LetterNum::NAN.min_magnitude_number(LetterNum::from(4)),
        LetterNum::from(4)
    );
}

#[test]
fn test_ident() {
    assert!(LetterNum::NAN.is_nan());
    assert!(LetterNum::NAN.is_quiet_nan());
    assert!(!LetterNum::ONE.is_nan());
    assert!(LetterNum::INFINITY.is_infinite());
    assert!(LetterNum::INFINITY.is_positive_infinity());
    assert!(LetterNum::NEG_INFINITY.is_negative_infinity());
    assert!(!LetterNum::INFINITY.is_finite());
    assert!(!LetterNum::NAN.is_finite());
    assert!(LetterNum::ONE.is_finite());
    assert!(LetterNum::ZERO.is_zero());

    assert!(LetterNum::from(5).is_integer());
    assert!(LetterNum::from(42).is_integer());
    assert!(LetterNum::from(100_000).is_integer());
    assert!(!LetterNum::from(1.5).is_integer());
    assert!(!LetterNum::from(0.5).is_integer());
    assert!(!LetterNum::INFINITY.is_integer());
    assert!(!LetterNum::NAN.is_integer());
    assert!(LetterNum::ZERO.is_integer());
    assert!(LetterNum::from(4).is_even_integer());
    assert!(!LetterNum::from(4).is_odd_integer());
    assert!(LetterNum::from(7).is_odd_integer());
    assert!(LetterNum::from(-6).is_even_integer());

    let tower: LetterNum = "1e1000000".parse().unwrap();
    assert!(tower.is_integer());
    assert!(tower.is_even_integer());
    assert!(!tower.recip().is_integer());

    assert!(LetterNum::EPSILON.is_reciprocal());
    assert!(!LetterNum::from(5).is_reciprocal());
    assert!(!LetterNum::ZERO.is_reciprocal());

    assert!(LetterNum::ONE.is_normal());
    assert!(!LetterNum::ZERO.is_normal());
    assert!(!LetterNum::ONE.is_subnormal());
    assert!(LetterNum::ONE.is_real_number());
    assert!(!LetterNum::NAN.is_real_number());
    assert!(!LetterNum::ONE.is_complex_number());
    assert!(!LetterNum::ONE.is_imaginary_number());
    assert!(LetterNum::ONE.is_canonical());

    assert!(!LetterNum::INFINITY.recip().is_infinite());
    assert_eq!(LetterNum::INFINITY.recip(), LetterNum::ZERO);
    assert_eq!(LetterNum::ZERO.recip(), LetterNum::INFINITY);
    assert_eq!(LetterNum::NEG_ZERO.recip(), LetterNum::NEG_INFINITY);
}

#[test]
fn test_conv() {
    assert_eq!(f64::from(LetterNum::ONE), 1.0);
    assert_eq!(LetterNum::from(42).to_f64(), 42.0);
    assert_eq!(LetterNum::from(2.5).to_f64(), 2.5);
    assert_eq!(LetterNum::from(-13i64).to_f64(), -13.0);
    assert_eq!(LetterNum::from(7u32).to_f64(), 7.0);
    assert_eq!(LetterNum::from(7u64).to_f64(), 7.0);
    assert_eq!(LetterNum::from(1.5f32).to_f64(), 1.5);

    assert_eq!(<LetterNum as ConstZero>::ZERO, LetterNum::ZERO);
    assert_eq!(<LetterNum as ConstOne>::ONE, LetterNum::ONE);

    assert_eq!(ToPrimitive::to_f64(&LetterNum::ONE), Some(1.0));
    assert_eq!(ToPrimitive::to_i64(&LetterNum::from(-42)), Some(-42));
    assert_eq!(ToPrimitive::to_u64(&LetterNum::from(42)), Some(42));
    assert_eq!(ToPrimitive::to_u64(&LetterNum::from(-42)), None);
    assert_eq!(LetterNum::from_i64(-3), Some(LetterNum::from(-3)));
    assert_eq!(LetterNum::from_f64(0.5), Some(LetterNum::from(0.5)));

    assert_eq!(i32::try_from(LetterNum::from(7)), Ok(7));
    assert_eq!(u64::try_from(LetterNum::from(7)), Ok(7));
    assert_eq!(
        i32::try_from(LetterNum::from(1e20)),
        Err(TryFromLetterNumError::OutOfRange)
    );
    assert_eq!(
        u32::try_from(LetterNum::from(-1)),
        Err(TryFromLetterNumError::OutOfRange)
    );
    assert_eq!(
        i64::try_from(LetterNum::NAN),
        Err(TryFromLetterNumError::NotANumber)
    );

    assert_eq!(LetterNum::from(1e30).to_i64_saturating(), i64::MAX);
    assert_eq!(LetterNum::from(-1e30).to_i64_saturating(), i64::MIN);
    assert_eq!(LetterNum::from(-5).to_u64_saturating(), 0);
    assert_eq!(LetterNum::NAN.to_u64_saturating(), 0);
    assert_eq!(LetterNum::from(3.9).to_u64_saturating(), 3);

    assert_eq!(LetterNum::from_hpf(Hpf::from_f64(3.5)).to_f64(), 3.5);
    assert_eq!(LetterNum::from(3.5).to_hpf().to_f64(), 3.5);

    let tower: LetterNum = "1e1000000".parse().unwrap();
    assert_eq!(tower.to_f64(), f64::INFINITY);
    assert_eq!((-tower).to_f64(), f64::NEG_INFINITY);
    assert_eq!(tower.recip().to_f64(), 0.0);
}

#[test]
fn test_parse() {
    assert_eq!("0".parse::<LetterNum>().unwrap(), LetterNum::ZERO);
    assert_eq!("17".parse::<LetterNum>().unwrap(), LetterNum::from(17));
    close("-13.73".parse::<LetterNum>().unwrap(), -13.73);
    close("2.5e3".parse::<LetterNum>().unwrap(), 2500.0);
    close("1e+5".parse::<LetterNum>().unwrap(), 1e5);
    close("1e-3".parse::<LetterNum>().unwrap(), 1e-3);
    close("+4.25".parse::<LetterNum>().unwrap(), 4.25);

    let zero = "-0".parse::<LetterNum>().unwrap();
    assert!(zero.is_zero() && zero.is_negative());

    assert_eq!("Infinity".parse::<LetterNum>().unwrap(), LetterNum::INFINITY);
    assert_eq!("∞".parse::<LetterNum>().unwrap(), LetterNum::INFINITY);
    assert_eq!("-∞".parse::<LetterNum>().unwrap(), LetterNum::NEG_INFINITY);
    assert_eq!(
        "-Infinity".parse::<LetterNum>().unwrap(),
        LetterNum::NEG_INFINITY
    );
    assert!("NaN".parse::<LetterNum>().unwrap().is_nan());

    close("1e100".parse::<LetterNum>().unwrap(), 1e100);
    close("1e-100".parse::<LetterNum>().unwrap(), 1e-100);

    let big: LetterNum = "1e1000000".parse().unwrap();
    assert!(big.is_finite());
    assert!(big.is_positive());
    assert!(!big.is_zero());
    let tiny: LetterNum = "1e-1000000".parse().unwrap();
    assert!(tiny.is_finite());
    assert!(!tiny.is_zero());
    assert_eq!(tiny, big.recip());
    let negative_big: LetterNum = "-3e987654".parse().unwrap();
    assert!(negative_big.is_negative() && negative_big.is_finite());

    assert_eq!("".parse::<LetterNum>(), Err(ParseLetterNumError::Empty));
    assert_eq!("   ".parse::<LetterNum>(), Err(ParseLetterNumError::Empty));
    assert_eq!("-".parse::<LetterNum>(), Err(ParseLetterNumError::Empty));
    assert_eq!("+".parse::<LetterNum>(), Err(ParseLetterNumError::Empty));
    assert!("abc".parse::<LetterNum>().is_err());
    assert!("--1".parse::<LetterNum>().is_err());
    assert!("1e".parse::<LetterNum>().is_err());
    assert!("e5".parse::<LetterNum>().is_err());
    assert!("1ee5".parse::<LetterNum>().is_err());
    assert!("10^^3".parse::<LetterNum>().is_err());

    assert_eq!(
        LetterNum::from_str_radix("250", 10),
        Ok(LetterNum::from(250))
    );
    assert_eq!(
        LetterNum::from_str_radix("ff", 16),
        Err(ParseLetterNumError::IncorrectRadix(16))
    );
}

#[test]
fn test_display() {
    assert_eq!(LetterNum::NAN.to_string(), "NaN");
    assert_eq!(LetterNum::INFINITY.to_string(), "∞");
    assert_eq!(LetterNum::NEG_INFINITY.to_string(), "-∞");
    assert_eq!(LetterNum::ZERO.to_string(), "0");
    assert_eq!(LetterNum::NEG_ZERO.to_string(), "0");

    assert_eq!(LetterNum::from(3.25).to_string(), "3.25");
    assert_eq!(LetterNum::from(-2).to_string(), "-2");
    assert_eq!(LetterNum::from(0.125).to_string(), "0.125");
    assert_eq!(LetterNum::HUNDRED.to_string(), "100");
    assert_eq!(LetterNum::from(5e9).to_string(), "5000000000");

    assert_eq!("1e100".parse::<LetterNum>().unwrap().to_string(), "1e+100");
    assert_eq!("1e-100".parse::<LetterNum>().unwrap().to_string(), "1e-100");
    assert_eq!(
        "1e1000000".parse::<LetterNum>().unwrap().to_string(),
        "1e+1000000"
    );
    assert_eq!(
        "2.5e500".parse::<LetterNum>().unwrap().to_string(),
        "2.5e+500"
    );
    assert_eq!(
        "-1e100".parse::<LetterNum>().unwrap().to_string(),
        "-1e+100"
    );

    assert!(LetterNum::MAX.to_string().starts_with('J'));
    assert!(LetterNum::EPSILON.to_string().starts_with("1 / J"));
}

#[test]
fn test_math() {
    assert_eq!(LetterNum::HUNDRED.log10(), LetterNum::TWO);
    assert_eq!(LetterNum::TEN.log10(), LetterNum::ONE);
    assert_eq!(LetterNum::ONE.log10(), LetterNum::ZERO);
    close(LetterNum::from(20).log10(), 20f64.log10());
    close(LetterNum::from(0.01).log10(), -2.0);

    assert!(LetterNum::ZERO.log10().is_nan());
    assert!(LetterNum::from(-3).log10().is_nan());
    assert!(LetterNum::NAN.log10().is_nan());
    assert_eq!(LetterNum::NEG_INFINITY.log10(), LetterNum::ZERO);
    assert_eq!(LetterNum::INFINITY.log10(), LetterNum::INFINITY);

    assert_eq!(LetterNum::ZERO.exp10(), LetterNum::ONE);
    assert_eq!(LetterNum::ONE.exp10(), LetterNum::TEN);
    assert_eq!(LetterNum::NEG_INFINITY.exp10(), LetterNum::ZERO);
    coarse(LetterNum::TWO.exp10(), 100.0);
    coarse(LetterNum::from(-2).exp10(), 0.01);

    coarse(LetterNum::from(20).log10().exp10(), 20.0);
    coarse(LetterNum::from(10).exp10(), 1e10);
    coarse(LetterNum::from(10).exp10().log10(), 10.0);

    close(LetterNum::from(8).log2(), 3.0);
    close(LetterNum::from(10).exp2(), 1024.0);
    close(LetterNum::e().ln(), 1.0);
    close(LetterNum::ONE.exp(), std::f64::consts::E);
    close(LetterNum::from(1000).log(LetterNum::TEN), 3.0);

    close(LetterNum::pi(), std::f64::consts::PI);
    close(LetterNum::tau(), std::f64::consts::TAU);
    close(LetterNum::ln_10(), std::f64::consts::LN_10);
    close(LetterNum::log2_10(), std::f64::consts::LOG2_10);

    close(LetterNum::from(2).pow(LetterNum::from(10)), 1024.0);
    assert_eq!(LetterNum::ZERO.pow(LetterNum::ZERO), LetterNum::ONE);
    assert_eq!(LetterNum::INFINITY.pow(LetterNum::ZERO), LetterNum::ONE);
    close(LetterNum::from(-2).pow(LetterNum::from(3)), -8.0);
    close(LetterNum::from(-2).pow(LetterNum::from(4)), 16.0);
    assert!(LetterNum::from(-2).pow(LetterNum::from(0.5)).is_nan());
    assert_eq!(
        LetterNum::from(2).pow(LetterNum::NEG_ONE),
        LetterNum::from(0.5)
    );
    coarse(LetterNum::TEN.pow(LetterNum::from(100)), 1e100);

    close(LetterNum::from(3.7).floor(), 3.0);
    close(LetterNum::from(-3.2).floor(), -4.0);
    close(LetterNum::from(3.2).ceil(), 4.0);
    close(LetterNum::from(2.5).round(), 3.0);
    close(LetterNum::from(-3.7).trunc(), -3.0);
    close(LetterNum::from(5.25).fract(), 0.25);
    assert_eq!(LetterNum::from(7).floor(), LetterNum::from(7));
    assert_eq!(LetterNum::INFINITY.floor(), LetterNum::INFINITY);

    close(LetterNum::from(16).sqrt(), 4.0);
    close(LetterNum::HUNDRED.sqrt(), 10.0);
    close(LetterNum::from(27).cbrt(), 3.0);
    close(LetterNum::from(-27).cbrt(), -3.0);
}

#[test]
fn test_towers() {
    // 10 -> 1e10 -> 10^1e10 -> 10^10^1e10, one letter step at a time
    let t0 = LetterNum::from(10);
    let t1 = t0.exp10();
    let t2 = t1.exp10();
    let t3 = t2.exp10();
    coarse(t1, 1e10);
    assert!(t2.is_finite() && t3.is_finite());
    assert!(t3 > t2 && t2 > t1);
    assert_eq!(t3.log10(), t2);
    assert_eq!(t2.log10(), t1);

    // climbing past the tower letter crosses into the J regime and back
    let mut high = t1;
    for _ in 0..7 {
        high = high.exp10();
    }
    let crossed = high.exp10();
    assert!(crossed > high);
    assert!(crossed.is_finite());
    assert_eq!(crossed.log10(), high);

    let big: LetterNum = "1e1000000".parse().unwrap();
    coarse(big.log10(), 1e6);
    assert_eq!(big / big, LetterNum::ONE);
    assert_eq!(big - big, LetterNum::ZERO);
    assert_eq!(big + big.recip(), big);
    assert_eq!(big * big.recip(), LetterNum::ONE);
    assert!(big * big > big);
    assert!((big * big).is_finite());

    // addition keeps the dominant operand once the gap exceeds precision
    assert_eq!(big + LetterNum::ONE, big);
    assert_eq!(LetterNum::ONE + big, big);

    assert!(LetterNum::MAX * LetterNum::MAX >= LetterNum::MAX);
    assert_eq!(LetterNum::MAX.recip(), LetterNum::EPSILON);
    assert_eq!(LetterNum::EPSILON.recip(), LetterNum::MAX);
    assert_eq!(-LetterNum::MAX, LetterNum::MIN);
}

#[test]
fn test_factorial() {
    assert_eq!(LetterNum::ZERO.factorial(), LetterNum::ONE);
    assert_eq!(LetterNum::ONE.factorial(), LetterNum::ONE);
    close(LetterNum::from(10).factorial(), 3_628_800.0);
    close(LetterNum::from(20).factorial(), 2_432_902_008_176_640_000.0);
    assert_eq!(LetterNum::INFINITY.factorial(), LetterNum::INFINITY);
    assert!(LetterNum::NAN.factorial().is_nan());

    let half = LetterNum::from(5.5).factorial();
    let got = half.to_f64();
    let expected = 287.88527781504436;
    assert!((got - expected).abs() <= expected * 1e-9, "got {got}");

    let hundred = LetterNum::from(100).factorial();
    coarse(hundred.log10(), 157.97000365471578);
}

#[test]
#[should_panic(expected = "remainder")]
fn remainder_by_zero_panics() {
    let _ = LetterNum::ONE % LetterNum::ZERO;
}

#[test]
#[should_panic(expected = "factorial")]
fn factorial_of_negative_panics() {
    let _ = LetterNum::NEG_ONE.factorial();
}
