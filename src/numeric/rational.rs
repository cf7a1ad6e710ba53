// ============================================================================
// Rational
// Unreduced signed fraction with lazy rendering and checked arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::render_buffer::{RenderBuffer, DEFAULT_RENDER_CAPACITY};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::IntErrorKind;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed fraction stored exactly as constructed.
///
/// Values are never reduced automatically: `1/2` and `2/4` are distinct,
/// compare unequal and render differently. Use [`reduced`](Self::reduced) or
/// [`value_eq`](Self::value_eq) when the mathematical value is what matters.
///
/// The plain constructors do not validate the denominator. A zero
/// denominator is stored as given; [`try_new`](Self::try_new) and the
/// [`Arithmetic`](crate::engine::Arithmetic) context can reject it instead.
///
/// Each instance owns a render buffer that is allocated on first
/// [`render`](Self::render) and released by [`reset`](Self::reset). Clones
/// start with an empty buffer.
///
/// # Example
/// ```
/// use rational::numeric::Rational;
///
/// let mut sum = Rational::new(1, 2) + Rational::new(1, 3);
/// assert_eq!(sum.render().unwrap(), "5/6");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rational {
    numerator: i64,
    denominator: i64,
    #[cfg_attr(feature = "serde", serde(skip))]
    buffer: RenderBuffer,
}

// ============================================================================
// Helpers
// ============================================================================

/// Narrow an i128 intermediate back into i64 range.
#[inline]
fn narrow(value: i128) -> NumericResult<i64> {
    if value > i64::MAX as i128 {
        Err(NumericError::Overflow)
    } else if value < i64::MIN as i128 {
        Err(NumericError::Underflow)
    } else {
        Ok(value as i64)
    }
}

/// Add two i128 products; only reachable overflow is when both are ±2^126.
#[inline]
fn sum128(lhs: i128, rhs: i128) -> NumericResult<i128> {
    lhs.checked_add(rhs).ok_or(if lhs > 0 {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    })
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self::new(0, 1);

    /// One (1/1)
    pub const ONE: Self = Self::new(1, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create `numerator/denominator` exactly as given.
    ///
    /// No validation and no reduction is performed.
    #[inline]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
            buffer: RenderBuffer::new(),
        }
    }

    /// Create from a whole number (`n/1`).
    #[inline]
    pub const fn from_integer(numerator: i64) -> Self {
        Self::new(numerator, 1)
    }

    /// Create `numerator/denominator`, rejecting a zero denominator.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denominator == 0`.
    #[inline]
    pub fn try_new(numerator: i64, denominator: i64) -> NumericResult<Self> {
        if denominator == 0 {
            return Err(NumericError::ZeroDenominator);
        }
        Ok(Self::new(numerator, denominator))
    }

    /// Move the value out of `source`, leaving it reset to `0/1`.
    ///
    /// The render buffer stays behind and is released with the reset; the
    /// returned value allocates its own on first render.
    pub fn take_from(source: &mut Rational) -> Self {
        let moved = Self::new(source.numerator, source.denominator);
        source.reset();
        moved
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Whether the render buffer is currently allocated.
    #[inline]
    pub fn is_render_allocated(&self) -> bool {
        self.buffer.is_allocated()
    }

    /// Check if the numerator is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if the value is a whole number. False for a zero denominator.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator != 0
            && self
                .numerator
                .checked_rem(self.denominator)
                .map_or(true, |r| r == 0)
    }

    /// Sign of the value: -1, 0 or 1. Zero for a zero denominator.
    #[inline]
    pub const fn signum(&self) -> i64 {
        self.numerator.signum() * self.denominator.signum()
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Return to `0/1` and release the render buffer. Idempotent.
    pub fn reset(&mut self) {
        self.numerator = 0;
        self.denominator = 1;
        self.buffer.release();
    }

    /// Copy-and-swap assignment.
    ///
    /// `rhs` is taken by value, so callers pass either a clone or a
    /// temporary. Fields and buffer ownership are exchanged with it and the
    /// previous buffer is released when `rhs` goes out of scope.
    pub fn assign(&mut self, mut rhs: Rational) {
        std::mem::swap(self, &mut rhs);
    }

    /// Exchange numerator and denominator with `other`.
    ///
    /// Buffers stay with their owners; their contents are rewritten on the
    /// next render.
    pub fn swap(&mut self, other: &mut Rational) {
        std::mem::swap(&mut self.numerator, &mut other.numerator);
        std::mem::swap(&mut self.denominator, &mut other.denominator);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render as `"numerator/denominator"`.
    ///
    /// The buffer is allocated on the first call after construction or
    /// reset and rewritten from the current fields on every call.
    ///
    /// # Errors
    /// Returns `AllocationFailure` if the buffer cannot be reserved.
    #[inline]
    pub fn render(&mut self) -> NumericResult<&str> {
        self.render_with_capacity(DEFAULT_RENDER_CAPACITY)
    }

    /// Like [`render`](Self::render) but reserving `capacity` bytes when the
    /// buffer is first allocated.
    pub fn render_with_capacity(&mut self, capacity: usize) -> NumericResult<&str> {
        self.buffer
            .write_fraction(self.numerator, self.denominator, capacity)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition: `(a.n*b.d + a.d*b.n) / (a.d*b.d)`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a component leaves i64 range.
    pub fn checked_add(&self, rhs: &Rational) -> NumericResult<Rational> {
        let numerator = sum128(
            self.numerator as i128 * rhs.denominator as i128,
            self.denominator as i128 * rhs.numerator as i128,
        )?;
        let denominator = self.denominator as i128 * rhs.denominator as i128;
        Ok(Self::new(narrow(numerator)?, narrow(denominator)?))
    }

    /// Checked subtraction: `(a.n*b.d - a.d*b.n) / (a.d*b.d)`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a component leaves i64 range.
    pub fn checked_sub(&self, rhs: &Rational) -> NumericResult<Rational> {
        let cross = self.denominator as i128 * rhs.numerator as i128;
        let numerator = sum128(
            self.numerator as i128 * rhs.denominator as i128,
            cross.checked_neg().ok_or(NumericError::Overflow)?,
        )?;
        let denominator = self.denominator as i128 * rhs.denominator as i128;
        Ok(Self::new(narrow(numerator)?, narrow(denominator)?))
    }

    /// Checked multiplication: `(a.n*b.n) / (a.d*b.d)`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a component leaves i64 range.
    pub fn checked_mul(&self, rhs: &Rational) -> NumericResult<Rational> {
        let numerator = self.numerator as i128 * rhs.numerator as i128;
        let denominator = self.denominator as i128 * rhs.denominator as i128;
        Ok(Self::new(narrow(numerator)?, narrow(denominator)?))
    }

    /// Checked division: `(a.n*b.d) / (a.d*b.n)`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` has a zero numerator
    /// - `Overflow` or `Underflow` if a component leaves i64 range
    pub fn checked_div(&self, rhs: &Rational) -> NumericResult<Rational> {
        if rhs.numerator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let numerator = self.numerator as i128 * rhs.denominator as i128;
        let denominator = self.denominator as i128 * rhs.numerator as i128;
        Ok(Self::new(narrow(numerator)?, narrow(denominator)?))
    }

    /// Two's-complement addition with no checks of any kind.
    pub fn wrapping_add(&self, rhs: &Rational) -> Rational {
        Self::new(
            self.numerator
                .wrapping_mul(rhs.denominator)
                .wrapping_add(self.denominator.wrapping_mul(rhs.numerator)),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Two's-complement subtraction with no checks of any kind.
    pub fn wrapping_sub(&self, rhs: &Rational) -> Rational {
        Self::new(
            self.numerator
                .wrapping_mul(rhs.denominator)
                .wrapping_sub(self.denominator.wrapping_mul(rhs.numerator)),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Two's-complement multiplication with no checks of any kind.
    pub fn wrapping_mul(&self, rhs: &Rational) -> Rational {
        Self::new(
            self.numerator.wrapping_mul(rhs.numerator),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Two's-complement division. A zero divisor yields a zero denominator.
    pub fn wrapping_div(&self, rhs: &Rational) -> Rational {
        Self::new(
            self.numerator.wrapping_mul(rhs.denominator),
            self.denominator.wrapping_mul(rhs.numerator),
        )
    }

    /// Checked negation of the numerator.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of i64::MIN.
    #[inline]
    pub fn checked_neg(&self) -> NumericResult<Rational> {
        self.numerator
            .checked_neg()
            .map(|n| Self::new(n, self.denominator))
            .ok_or(NumericError::Overflow)
    }

    /// Reciprocal (`d/n`).
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the numerator is zero.
    #[inline]
    pub fn recip(&self) -> NumericResult<Rational> {
        if self.numerator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::new(self.denominator, self.numerator))
    }

    /// Lowest terms with a positive denominator.
    ///
    /// # Errors
    /// - `ZeroDenominator` if the denominator is zero
    /// - `Overflow` when the sign flip of an i64::MIN component does not fit
    pub fn reduced(&self) -> NumericResult<Rational> {
        if self.denominator == 0 {
            return Err(NumericError::ZeroDenominator);
        }
        if self.numerator == 0 {
            return Ok(Self::ZERO);
        }

        let mut n = self.numerator as i128;
        let mut d = self.denominator as i128;
        let g = gcd(n.unsigned_abs(), d.unsigned_abs()) as i128;
        n /= g;
        d /= g;
        if d < 0 {
            n = -n;
            d = -d;
        }
        Ok(Self::new(narrow(n)?, narrow(d)?))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Equality of the represented values, so `1/2` equals `2/4`.
    ///
    /// Cross-multiplies; two zero-denominator values compare equal to
    /// everything with a zero denominator.
    #[inline]
    pub fn value_eq(&self, other: &Rational) -> bool {
        self.numerator as i128 * other.denominator as i128
            == other.numerator as i128 * self.denominator as i128
    }

    /// Order by represented value.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if either side has a zero denominator.
    pub fn cmp_value(&self, other: &Rational) -> NumericResult<Ordering> {
        if self.denominator == 0 || other.denominator == 0 {
            return Err(NumericError::ZeroDenominator);
        }
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        let ordering = lhs.cmp(&rhs);
        // Cross-multiplying by a negative product of denominators flips the order.
        if (self.denominator < 0) != (other.denominator < 0) {
            Ok(ordering.reverse())
        } else {
            Ok(ordering)
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Approximate as f64. A zero denominator yields an infinity or NaN.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Rational {
    /// Convert from rust_decimal::Decimal, in lowest terms.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the reduced fraction does not fit.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let mantissa = d.mantissa();
        if mantissa == 0 {
            return Ok(Self::ZERO);
        }

        // Scale is at most 28, so 10^scale always fits in i128.
        let scale = 10i128.pow(d.scale());
        let g = gcd(mantissa.unsigned_abs(), scale as u128) as i128;
        Ok(Self::new(narrow(mantissa / g)?, narrow(scale / g)?))
    }

    /// Convert to rust_decimal::Decimal, rounding to its 28-digit precision.
    ///
    /// # Errors
    /// - `DivisionByZero` if the denominator is zero
    /// - `Overflow` if the quotient is out of Decimal range
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        if self.denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        rust_decimal::Decimal::from(self.numerator)
            .checked_div(rust_decimal::Decimal::from(self.denominator))
            .ok_or(NumericError::Overflow)
    }

    /// Convert to rust_decimal::Decimal only if no rounding is needed.
    ///
    /// # Errors
    /// - `DivisionByZero` if the denominator is zero
    /// - `Overflow` if the quotient is out of Decimal range
    /// - `PrecisionLoss` if the quotient does not terminate within 28 digits
    pub fn to_decimal_exact(&self) -> NumericResult<rust_decimal::Decimal> {
        let quotient = self.to_decimal()?;
        let back = quotient.checked_mul(rust_decimal::Decimal::from(self.denominator));
        if back != Some(rust_decimal::Decimal::from(self.numerator)) {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(quotient)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Rational {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(numerator: i64) -> Self {
        Self::from_integer(numerator)
    }
}

impl From<(i64, i64)> for Rational {
    #[inline]
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl From<&Rational> for String {
    fn from(value: &Rational) -> Self {
        value.to_string()
    }
}

impl From<Rational> for String {
    fn from(value: Rational) -> Self {
        value.to_string()
    }
}

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Rational negation overflow")
    }
}

// Infallible operators for ergonomics (panic like integer overflow - use checked_* to recover)
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident, $msg:literal) => {
        impl $trait for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Self::Output {
                self.$checked(&rhs).expect($msg)
            }
        }

        impl<'a> $trait<&'a Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &'a Rational) -> Self::Output {
                self.$checked(rhs).expect($msg)
            }
        }
    };
}

forward_binop!(Add, add, checked_add, "Rational addition overflow");
forward_binop!(Sub, sub, checked_sub, "Rational subtraction overflow");
forward_binop!(Mul, mul, checked_mul, "Rational multiplication overflow");
forward_binop!(Div, div, checked_div, "Rational division by zero or overflow");

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rational({}, buffered={})",
            self,
            self.buffer.is_allocated()
        )
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn parse_component(s: &str) -> NumericResult<i64> {
    s.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => NumericError::Overflow,
        IntErrorKind::NegOverflow => NumericError::Underflow,
        _ => NumericError::InvalidInput,
    })
}

impl std::str::FromStr for Rational {
    type Err = NumericError;

    /// Parse from `"n/d"` or a bare integer.
    ///
    /// # Examples
    /// - "5/3" -> 5/3
    /// - "-1/2" -> -1/2
    /// - "7" -> 7/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        match s.split_once('/') {
            Some((n, d)) => {
                let numerator = parse_component(n)?;
                let denominator = parse_component(d)?;
                Self::try_new(numerator, denominator)
            },
            None => parse_component(s).map(Self::from_integer),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
