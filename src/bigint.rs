//! The `BigInt` value type.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Write};
use std::ops::{Add, Sub};
use std::str::FromStr;

use num_traits::Zero;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::limbs::{self, Limb, LimbSeq, DIGITS_PER_LIMB, RADIX};

/// An arbitrary-precision decimal integer stored as base-1000 limbs.
///
/// The magnitude lives in an ordered sequence of limbs, each spanning three
/// decimal digits, together with a sign flag. Values are built from digit
/// strings and combined with `+` and `-`; beyond arithmetic, individual
/// limbs can be inserted, removed, or overwritten by position.
///
/// ```
/// use groupnum::BigInt;
///
/// let a: BigInt = "999".parse().unwrap();
/// let b: BigInt = "1".parse().unwrap();
/// assert_eq!((a + b).to_string(), "1,000");
/// ```
///
/// Positions count from the most significant limb, which is the only limb
/// displayed without zero-padding.
#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    limbs: LimbSeq,
    negative: bool,
}

impl BigInt {
    // Builds a magnitude from pre-validated ASCII digits. Each window of
    // three digits from the least significant end becomes one limb;
    // most-significant zero windows are pruned, an all-zero input keeping
    // a single limb.
    fn from_ascii_digits(digits: &[u8]) -> BigInt {
        let mut limbs =
            LimbSeq::with_capacity((digits.len() + DIGITS_PER_LIMB - 1) / DIGITS_PER_LIMB);
        for window in digits.rchunks(DIGITS_PER_LIMB) {
            let mut value: Limb = 0;
            for &digit in window {
                value = value * 10 + (digit - b'0') as Limb;
            }
            limbs.push_high(value);
        }
        limbs.normalize();
        BigInt {
            limbs,
            negative: false,
        }
    }

    /// Number of limbs currently in the sequence.
    #[inline]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// The limb at `position`, counting from the most significant limb, or
    /// `None` past the end.
    #[inline]
    pub fn limb(&self, position: usize) -> Option<Limb> {
        self.limbs.get(position)
    }

    /// Iterates over limbs from most significant to least significant.
    pub fn limbs(&self) -> impl DoubleEndedIterator<Item = Limb> + '_ {
        self.limbs.iter()
    }

    /// True for the negative result of a subtraction. Zero is never
    /// negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Inserts a limb holding `value` at `position`: `0` prepends a new
    /// most significant limb, `limb_count()` appends a new least
    /// significant one.
    ///
    /// No range check is made on `value` and no renormalization happens
    /// afterwards, so a zero inserted at position `0` leaves a redundant
    /// leading limb. Magnitude comparison, and with it the sign of a later
    /// subtraction, takes such limbs at face value.
    pub fn insert_limb(&mut self, position: usize, value: Limb) -> Result<()> {
        if position > self.limbs.len() {
            return Err(self.position_error(position));
        }
        self.limbs.insert(position, value);
        Ok(())
    }

    /// Removes the limb at `position`. Removing the sole limb leaves an
    /// empty sequence, which displays as `0` and accepts further edits.
    pub fn remove_limb(&mut self, position: usize) -> Result<()> {
        if position >= self.limbs.len() {
            return Err(self.position_error(position));
        }
        self.limbs.remove(position);
        Ok(())
    }

    /// Overwrites the limb at `position` with `value`, which is not checked
    /// against the canonical limb range.
    pub fn set_limb(&mut self, position: usize, value: Limb) -> Result<()> {
        if position >= self.limbs.len() {
            return Err(self.position_error(position));
        }
        self.limbs.set(position, value);
        Ok(())
    }

    fn position_error(&self, position: usize) -> Error {
        Error::PositionOutOfRange {
            position,
            len: self.limbs.len(),
        }
    }

    /// The undelimited decimal digits, with a leading `-` when negative.
    ///
    /// ```
    /// use groupnum::BigInt;
    ///
    /// let n: BigInt = "1987210".parse().unwrap();
    /// assert_eq!(n.to_string(), "1,987,210");
    /// assert_eq!(n.to_plain_string(), "1987210");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.limb_count() * DIGITS_PER_LIMB + 1);
        self.write_limbs(&mut out, "")
            .expect("writing to a String never fails");
        out
    }

    // Writes the sign and the limbs most significant first, the head limb
    // unpadded and every later limb zero-padded to three digits.
    fn write_limbs(&self, out: &mut dyn Write, delimiter: &str) -> fmt::Result {
        if self.negative {
            out.write_char('-')?;
        }
        let mut buf = itoa::Buffer::new();
        let mut first = true;
        for limb in self.limbs.iter() {
            if !first {
                out.write_str(delimiter)?;
            }
            let digits = buf.format(limb);
            if !first {
                for _ in digits.len()..DIGITS_PER_LIMB {
                    out.write_char('0')?;
                }
            }
            out.write_str(digits)?;
            first = false;
        }
        if self.limbs.is_empty() {
            out.write_char('0')?;
        }
        Ok(())
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses a non-negative decimal integer.
    ///
    /// Signed literals are rejected; negative values only arise as
    /// subtraction results.
    fn from_str(s: &str) -> Result<BigInt> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat);
        }
        Ok(BigInt::from_ascii_digits(s.as_bytes()))
    }
}

/// Formats the value as comma-delimited limbs: optional `-`, then the head
/// limb unpadded and every subsequent limb zero-padded to three digits. An
/// emptied-out sequence formats as `0`.
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_limbs(f, ",")
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

/// The canonical zero: a single limb holding `0`.
impl Default for BigInt {
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> BigInt {
        BigInt::from_ascii_digits(b"0")
    }

    fn is_zero(&self) -> bool {
        self.limbs.iter().all(|limb| limb == 0)
    }
}

impl From<u64> for BigInt {
    fn from(mut n: u64) -> BigInt {
        let mut limbs = LimbSeq::with_capacity(7);
        loop {
            limbs.push_high((n % RADIX as u64) as Limb);
            n /= RADIX as u64;
            if n == 0 {
                break;
            }
        }
        BigInt {
            limbs,
            negative: false,
        }
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> BigInt {
        BigInt::from(n as u64)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    /// Magnitude addition: operand signs are ignored and the result is
    /// always non-negative.
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt {
            limbs: limbs::add_magnitudes(&self.limbs, &rhs.limbs),
            negative: false,
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        &self + rhs
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        self + &rhs
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    /// Magnitude subtraction: when `rhs` has the larger magnitude the
    /// operand roles swap and the result is flagged negative.
    fn sub(self, rhs: &BigInt) -> BigInt {
        let (larger, smaller, negative) = match self.limbs.cmp_magnitude(&rhs.limbs) {
            Ordering::Less => (&rhs.limbs, &self.limbs, true),
            _ => (&self.limbs, &rhs.limbs, false),
        };
        BigInt {
            limbs: limbs::sub_magnitudes(larger, smaller),
            negative,
        }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        &self - rhs
    }
}

impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        self - &rhs
    }
}

impl Serialize for BigInt {
    /// Serializes as the plain decimal string, e.g. `"-1987210"`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> std::result::Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal integer string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<BigInt, E>
            where
                E: de::Error,
            {
                let (digits, negative) = match value.strip_prefix('-') {
                    Some(rest) => (rest, true),
                    None => (value, false),
                };
                let mut parsed: BigInt = digits.parse().map_err(|_| {
                    de::Error::invalid_value(de::Unexpected::Str(value), &self)
                })?;
                parsed.negative = negative && !parsed.is_zero();
                Ok(parsed)
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
