use astro_float::BigFloat;
use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

use super::numerical::{
  bigint_to_bigfloat, compare_bigfloat, rational_to_bigfloat,
};
use crate::syntax::Expr;

/// Reduce `n/d` to canonical form.
///
/// - `0/0` is `Indeterminate`, `n/0` is `ComplexInfinity`
/// - a zero numerator gives `Integer(0)`
/// - otherwise the result is in lowest terms with a positive denominator,
///   and an integer whenever the denominator reduces to 1
///
/// Re-applying it to a canonical rational returns an equal value.
pub fn reduce_rational(n: &BigInt, d: &BigInt) -> Expr {
  if n.is_zero() && d.is_zero() {
    return Expr::symbol("Indeterminate");
  }
  if d.is_zero() {
    return Expr::symbol("ComplexInfinity");
  }
  if n.is_zero() {
    return Expr::integer(0);
  }
  let negate = n.is_negative() != d.is_negative();
  let (abs_n, abs_d) = (n.abs(), d.abs());
  let g = abs_n.gcd(&abs_d);
  let (num, den) = (abs_n / &g, abs_d / &g);
  let num = if negate { -num } else { num };
  if den.is_one() {
    Expr::Integer(num)
  } else {
    Expr::Rational(num, den)
  }
}

/// A number pulled out of an expression for arithmetic.
#[derive(Debug, Clone)]
pub enum Number {
  /// Exact `numerator/denominator`; integers have denominator 1
  Exact(BigInt, BigInt),
  Real(BigFloat),
}

impl Number {
  pub fn from_expr(expr: &Expr) -> Option<Number> {
    match expr {
      Expr::Integer(n) => Some(Number::Exact(n.clone(), BigInt::one())),
      Expr::Rational(n, d) if !d.is_zero() => {
        Some(Number::Exact(n.clone(), d.clone()))
      }
      Expr::Real(f) => Some(Number::Real(f.clone())),
      _ => None,
    }
  }

  /// Back to a canonical expression.
  pub fn into_expr(self) -> Expr {
    match self {
      Number::Exact(n, d) => reduce_rational(&n, &d),
      Number::Real(f) => Expr::Real(f),
    }
  }

  pub fn to_bigfloat(&self, bits: usize) -> BigFloat {
    match self {
      Number::Exact(n, d) if d.is_one() => bigint_to_bigfloat(n, bits),
      Number::Exact(n, d) => rational_to_bigfloat(n, d, bits),
      Number::Real(f) => f.clone(),
    }
  }

  pub fn is_exact_zero(&self) -> bool {
    matches!(self, Number::Exact(n, _) if n.is_zero())
  }

  pub fn is_exact_one(&self) -> bool {
    matches!(self, Number::Exact(n, d) if n == d)
  }

  /// Order two real numbers. Exact pairs compare exactly; anything
  /// involving a real compares at `bits` of precision.
  pub fn compare(&self, other: &Number, bits: usize) -> Option<Ordering> {
    match (self, other) {
      (Number::Exact(an, ad), Number::Exact(bn, bd)) => {
        // Denominators of canonical values are positive
        Some((an * bd).cmp(&(bn * ad)))
      }
      _ => compare_bigfloat(&self.to_bigfloat(bits), &other.to_bigfloat(bits)),
    }
  }
}
