//! Exact arithmetic in the quadratic field Q(√5).
//!
//! A [`Surd`] is `a + b·√5` with arbitrary-precision rational `a` and `b`.
//! The pulse duration (3 + √5 s) and every power of φ live in this field,
//! so dividing by a pulse never rounds. Floors are decided with an integer
//! square root of `5·b²`, which is never a perfect square for `b ≠ 0`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::constants::{PULSE_RADICAL, PULSE_RATIONAL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surd {
    rational: BigRational,
    radical: BigRational,
}

impl Surd {
    pub fn new(rational: BigRational, radical: BigRational) -> Self {
        Self { rational, radical }
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self::from_rational(BigRational::from_integer(n.into()))
    }

    pub fn from_rational(rational: BigRational) -> Self {
        Self {
            rational,
            radical: BigRational::zero(),
        }
    }

    pub fn zero() -> Self {
        Self::from_rational(BigRational::zero())
    }

    pub fn one() -> Self {
        Self::from_rational(BigRational::one())
    }

    /// √5
    pub fn sqrt5() -> Self {
        Self::new(BigRational::zero(), BigRational::one())
    }

    /// One pulse in seconds: 3 + √5.
    pub fn pulse() -> Self {
        Self::new(
            BigRational::from_integer(PULSE_RATIONAL.into()),
            BigRational::from_integer(PULSE_RADICAL.into()),
        )
    }

    /// 1 / (3 + √5) = (3 − √5) / 4, built from the field norm of the pulse.
    pub fn pulse_recip() -> Self {
        let norm = BigInt::from(PULSE_RATIONAL * PULSE_RATIONAL - 5 * PULSE_RADICAL * PULSE_RADICAL);
        Self::new(
            BigRational::new(PULSE_RATIONAL.into(), norm.clone()),
            BigRational::new((-PULSE_RADICAL).into(), norm),
        )
    }

    /// Golden ratio φ = (1 + √5) / 2.
    pub fn phi() -> Self {
        let half = BigRational::new(BigInt::one(), BigInt::from(2));
        Self::new(half.clone(), half)
    }

    pub fn is_zero(&self) -> bool {
        self.rational.is_zero() && self.radical.is_zero()
    }

    /// a − b√5
    pub fn conjugate(&self) -> Self {
        Self::new(self.rational.clone(), -self.radical.clone())
    }

    /// Field norm a² − 5b². Zero only for zero.
    pub fn norm(&self) -> BigRational {
        let five = BigRational::from_integer(BigInt::from(5));
        &self.rational * &self.rational - five * &self.radical * &self.radical
    }

    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let norm = self.norm();
        let conj = self.conjugate();
        Some(Self::new(conj.rational / &norm, conj.radical / norm))
    }

    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        rhs.recip().map(|inv| self * &inv)
    }

    /// Multiply both components by a rational.
    pub fn scale(&self, k: &BigRational) -> Self {
        Self::new(&self.rational * k, &self.radical * k)
    }

    pub fn pow(&self, exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        result
    }

    /// Sign of the value relative to zero.
    pub fn signum(&self) -> Ordering {
        let sa = self.rational.cmp(&BigRational::zero());
        let sb = self.radical.cmp(&BigRational::zero());
        match (sa, sb) {
            (s, Ordering::Equal) | (Ordering::Equal, s) => s,
            (s, t) if s == t => s,
            (s, t) => {
                // Opposite signs: the larger magnitude wins.
                let a2 = &self.rational * &self.rational;
                let b2 = BigRational::from_integer(BigInt::from(5)) * &self.radical * &self.radical;
                match a2.cmp(&b2) {
                    Ordering::Greater => s,
                    Ordering::Less => t,
                    Ordering::Equal => Ordering::Equal,
                }
            }
        }
    }

    /// Largest integer ≤ self.
    pub fn floor(&self) -> BigInt {
        let denom = self.rational.denom().lcm(self.radical.denom());
        let p = self.rational.numer() * (&denom / self.rational.denom());
        let r = self.radical.numer() * (&denom / self.radical.denom());
        if r.is_zero() {
            return p.div_floor(&denom);
        }
        // |r|·√5 lies strictly between root and root + 1.
        let root = (&r * &r * BigInt::from(5)).sqrt();
        let below = if r.is_positive() { p + root } else { p - root - 1 };
        below.div_floor(&denom)
    }

    /// floor(self × 10^places)
    pub fn floor_scaled(&self, places: u32) -> BigInt {
        let factor = BigRational::from_integer(BigInt::from(10).pow(places));
        self.scale(&factor).floor()
    }

    pub fn to_f64(&self) -> f64 {
        let a = self.rational.to_f64().unwrap_or(f64::NAN);
        let b = self.radical.to_f64().unwrap_or(f64::NAN);
        a + b * 5f64.sqrt()
    }
}

impl From<BigInt> for Surd {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Surd {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<BigRational> for Surd {
    fn from(r: BigRational) -> Self {
        Self::from_rational(r)
    }
}

impl PartialOrd for Surd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Surd {
    fn cmp(&self, other: &Self) -> Ordering {
        (self - other).signum()
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}·√5", self.rational, self.radical)
    }
}

impl Add for &Surd {
    type Output = Surd;

    fn add(self, rhs: &Surd) -> Surd {
        Surd::new(&self.rational + &rhs.rational, &self.radical + &rhs.radical)
    }
}

impl Sub for &Surd {
    type Output = Surd;

    fn sub(self, rhs: &Surd) -> Surd {
        Surd::new(&self.rational - &rhs.rational, &self.radical - &rhs.radical)
    }
}

impl Mul for &Surd {
    type Output = Surd;

    /// (a + b√5)(c + d√5) = (ac + 5bd) + (ad + bc)√5
    fn mul(self, rhs: &Surd) -> Surd {
        let five = BigRational::from_integer(BigInt::from(5));
        Surd::new(
            &self.rational * &rhs.rational + five * &self.radical * &rhs.radical,
            &self.rational * &rhs.radical + &self.radical * &rhs.rational,
        )
    }
}

impl Neg for &Surd {
    type Output = Surd;

    fn neg(self) -> Surd {
        Surd::new(-self.rational.clone(), -self.radical.clone())
    }
}

impl Neg for Surd {
    type Output = Surd;

    fn neg(self) -> Surd {
        Surd::new(-self.rational, -self.radical)
    }
}

macro_rules! forward_owned {
    ($($tr:ident :: $method:ident),*) => {
        $(
            impl $tr for Surd {
                type Output = Surd;

                fn $method(self, rhs: Surd) -> Surd {
                    (&self).$method(&rhs)
                }
            }
        )*
    };
}

forward_owned!(Add::add, Sub::sub, Mul::mul);
