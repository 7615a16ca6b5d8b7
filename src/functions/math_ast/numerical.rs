//! Arbitrary-precision reals backed by `astro-float`.
//!
//! All conversions take an explicit precision in bits. Embedding an exact
//! number is exact as long as the precision covers its magnitude and
//! rounds to nearest-even otherwise.

use astro_float::{BigFloat, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

pub const DEFAULT_PRECISION_BITS: usize = 128;
pub const ROUNDING: RoundingMode = RoundingMode::ToEven;

/// Embed an integer into a BigFloat with `bits` of mantissa precision.
pub fn bigint_to_bigfloat(n: &BigInt, bits: usize) -> BigFloat {
  let (sign, digits) = n.to_u64_digits();
  let radix = BigFloat::from_i128(1i128 << 64, bits);
  let mut acc = BigFloat::from_i128(0, bits);
  for digit in digits.iter().rev() {
    let digit = BigFloat::from_i128(*digit as i128, bits);
    acc = acc.mul(&radix, bits, ROUNDING).add(&digit, bits, ROUNDING);
  }
  if sign == Sign::Minus { acc.neg() } else { acc }
}

/// Embed `n/d` into a BigFloat. `d` must be nonzero.
pub fn rational_to_bigfloat(n: &BigInt, d: &BigInt, bits: usize) -> BigFloat {
  // Operands are converted exactly so that only the division rounds
  let wide = bits.max(n.bits() as usize).max(d.bits() as usize);
  let num = bigint_to_bigfloat(n, wide);
  let den = bigint_to_bigfloat(d, wide);
  num.div(&den, bits, ROUNDING)
}

/// Parse a decimal literal such as `2.`, `0.125` or `.5`.
pub fn parse_decimal(s: &str, bits: usize) -> Option<BigFloat> {
  let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
  let digits = format!("{}{}", int_part, frac_part);
  let mantissa = if digits.is_empty() {
    BigInt::zero()
  } else {
    BigInt::parse_bytes(digits.as_bytes(), 10)?
  };
  if frac_part.is_empty() {
    return Some(bigint_to_bigfloat(&mantissa, bits));
  }
  let scale = BigInt::from(10u32).pow(frac_part.len() as u32);
  Some(rational_to_bigfloat(&mantissa, &scale, bits))
}

pub fn compare_bigfloat(a: &BigFloat, b: &BigFloat) -> Option<Ordering> {
  a.cmp(b).map(|c| c.cmp(&0))
}

pub fn bigfloat_is_zero(f: &BigFloat) -> bool {
  f.is_zero()
}

/// Mantissa precision of a BigFloat, falling back to the default.
pub fn precision_of(f: &BigFloat) -> usize {
  f.mantissa_max_bit_len().unwrap_or(DEFAULT_PRECISION_BITS)
}

/// Integer power of a BigFloat by repeated squaring.
pub fn bigfloat_powi(base: &BigFloat, exp: &BigInt, bits: usize) -> BigFloat {
  let mut result = BigFloat::from_i128(1, bits);
  let mut square = base.clone();
  let mut e = exp.abs();
  let two = BigInt::from(2);
  while !e.is_zero() {
    if (&e % &two) == BigInt::from(1) {
      result = result.mul(&square, bits, ROUNDING);
    }
    square = square.mul(&square, bits, ROUNDING);
    e /= &two;
  }
  if exp.is_negative() {
    BigFloat::from_i128(1, bits).div(&result, bits, ROUNDING)
  } else {
    result
  }
}

/// Convert a BigFloat to a decimal string using num-bigint for the base
/// conversion, avoiding astro-float's own formatter.
/// With `max_digits` the value is rounded to that many significant digits,
/// otherwise to the digits its mantissa actually carries.
pub fn bigfloat_to_string(bf: &BigFloat, max_digits: Option<usize>) -> String {
  // Extract raw parts: mantissa words, significant bits, sign, exponent
  let Some((words, _sig_bits, sign, exponent, _inexact)) = bf.as_raw_parts()
  else {
    return "Indeterminate".to_string();
  };

  if words.iter().all(|&w| w == 0) {
    return "0.".to_string();
  }

  let mantissa = BigUint::from_bytes_le(
    &words
      .iter()
      .flat_map(|w| w.to_le_bytes())
      .collect::<Vec<u8>>(),
  );

  // value = mantissa * 2^(exponent - mantissa_bits)
  let mantissa_bits = words.len() * 64;
  let shift = exponent as i64 - mantissa_bits as i64;
  let carried_digits =
    ((mantissa_bits as f64 / std::f64::consts::LOG2_10).floor() as usize)
      .max(1);
  let target_digits = carried_digits + 2;

  let (all_digits, decimal_exp) = if shift >= 0 {
    let s = (&mantissa << (shift as u64)).to_string();
    let len = s.len() as i64;
    (s, len)
  } else {
    // Scale by 10^target_digits before shifting to keep fractional digits
    let neg_shift = (-shift) as u64;
    let scaled = &mantissa * BigUint::from(10u32).pow(target_digits as u32);
    let divisor = BigUint::from(1u32) << neg_shift;
    let result = (&scaled + (&divisor >> 1u32)) / &divisor;
    if result.is_zero() {
      return "0.".to_string();
    }
    let s = result.to_string();
    let decimal_exp = s.len() as i64 - target_digits as i64;
    (s, decimal_exp)
  };

  let keep = max_digits.unwrap_or(carried_digits).clamp(1, carried_digits);
  let (digits, carry) = round_digits(&all_digits, keep);
  let decimal_exp = if carry { decimal_exp + 1 } else { decimal_exp };
  let digits = digits.trim_end_matches('0');
  let prefix = if sign.is_negative() { "-" } else { "" };

  if digits.is_empty() {
    return format!("{}0.", prefix);
  }
  if decimal_exp <= 0 {
    format!("{}0.{}{}", prefix, "0".repeat((-decimal_exp) as usize), digits)
  } else {
    let dp = decimal_exp as usize;
    if dp >= digits.len() {
      format!("{}{}{}.", prefix, digits, "0".repeat(dp - digits.len()))
    } else {
      format!("{}{}.{}", prefix, &digits[..dp], &digits[dp..])
    }
  }
}

/// Round a digit string to `keep` leading digits (half up).
/// Returns the rounded digits and whether rounding carried into a new
/// leading digit.
fn round_digits(digits: &str, keep: usize) -> (String, bool) {
  if digits.len() <= keep {
    return (digits.to_string(), false);
  }
  let mut kept: Vec<u8> = digits.as_bytes()[..keep].to_vec();
  if digits.as_bytes()[keep] < b'5' {
    return (String::from_utf8_lossy(&kept).into_owned(), false);
  }
  let mut i = keep;
  loop {
    if i == 0 {
      kept.insert(0, b'1');
      kept.pop();
      return (String::from_utf8_lossy(&kept).into_owned(), true);
    }
    i -= 1;
    if kept[i] == b'9' {
      kept[i] = b'0';
    } else {
      kept[i] += 1;
      return (String::from_utf8_lossy(&kept).into_owned(), false);
    }
  }
}
