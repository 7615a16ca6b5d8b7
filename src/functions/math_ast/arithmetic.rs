//! Arithmetic evaluators: Plus, Times, Power, Subtract, Minus, Divide and
//! the Rational constructor.
//!
//! Every exact result is routed through `reduce_rational`.

use astro_float::BigFloat;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::numeric_utils::{Number, reduce_rational};
use super::numerical::{ROUNDING, bigfloat_is_zero, bigfloat_powi};
use crate::evaluator::Session;
use crate::syntax::Expr;

/// Collect the operands of a Flat head, splicing nested calls to it.
fn flatten_operands(name: &str, args: &[Expr]) -> Vec<Expr> {
  let mut out = Vec::with_capacity(args.len());
  for arg in args {
    match arg {
      Expr::Expression { parts, .. } if arg.has_head(name) => {
        out.extend(flatten_operands(name, parts));
      }
      _ => out.push(arg.clone()),
    }
  }
  out
}

fn add_numbers(a: Number, b: Number, bits: usize) -> Number {
  match (a, b) {
    (Number::Exact(an, ad), Number::Exact(bn, bd)) => {
      Number::Exact(&an * &bd + &bn * &ad, ad * bd)
    }
    (a, b) => Number::Real(a.to_bigfloat(bits).add(
      &b.to_bigfloat(bits),
      bits,
      ROUNDING,
    )),
  }
}

fn multiply_numbers(a: Number, b: Number, bits: usize) -> Number {
  match (a, b) {
    (Number::Exact(an, ad), Number::Exact(bn, bd)) => {
      Number::Exact(an * bn, ad * bd)
    }
    (a, b) => Number::Real(a.to_bigfloat(bits).mul(
      &b.to_bigfloat(bits),
      bits,
      ROUNDING,
    )),
  }
}

/// Rebuild `name[numeric, rest...]`, dropping the numeric part when it is
/// the identity and unwrapping single operands.
fn rebuild(
  name: &str,
  numeric: Option<Number>,
  is_identity: fn(&Number) -> bool,
  mut rest: Vec<Expr>,
  identity: Expr,
) -> Expr {
  if let Some(n) = numeric {
    if rest.is_empty() || !is_identity(&n) {
      rest.insert(0, n.into_expr());
    }
  }
  match rest.len() {
    0 => identity,
    1 => rest.remove(0),
    _ => Expr::call(name, rest),
  }
}

/// Plus[a, b, ...]
pub fn plus_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let bits = session.config.precision_bits;
  let mut numeric: Option<Number> = None;
  let mut rest = Vec::new();
  for operand in flatten_operands("Plus", args) {
    match Number::from_expr(&operand) {
      Some(n) => {
        numeric = Some(match numeric {
          Some(acc) => add_numbers(acc, n, bits),
          None => n,
        });
      }
      None => rest.push(operand),
    }
  }
  Some(rebuild(
    "Plus",
    numeric,
    Number::is_exact_zero,
    rest,
    Expr::integer(0),
  ))
}

/// Times[a, b, ...]
pub fn times_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let bits = session.config.precision_bits;
  let mut numeric: Option<Number> = None;
  let mut rest = Vec::new();
  for operand in flatten_operands("Times", args) {
    match Number::from_expr(&operand) {
      Some(n) => {
        numeric = Some(match numeric {
          Some(acc) => multiply_numbers(acc, n, bits),
          None => n,
        });
      }
      None => rest.push(operand),
    }
  }
  if numeric.as_ref().is_some_and(Number::is_exact_zero) {
    return Some(Expr::integer(0));
  }
  Some(rebuild(
    "Times",
    numeric,
    Number::is_exact_one,
    rest,
    Expr::integer(1),
  ))
}

/// Largest exact power, in bits, that Power expands. Bigger results stay
/// unevaluated.
const MAX_EXACT_POWER_BITS: u64 = 1 << 24;

/// Lower bound on the bit length of `(n/d)^k` beyond its leading bit.
fn exact_power_bits(n: &BigInt, d: &BigInt, k: u32) -> u64 {
  let widest = n.bits().max(d.bits());
  widest.saturating_sub(1).saturating_mul(u64::from(k))
}

/// Power[base, exponent] for integer exponents.
pub fn power_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let [base, exponent] = args else {
    return None;
  };
  let bits = session.config.precision_bits;
  let Expr::Integer(e) = exponent else {
    return None;
  };
  if e.is_zero() && !base.is_number() {
    return Some(Expr::integer(1));
  }
  if e.is_one() {
    return Some(base.clone());
  }
  match Number::from_expr(base)? {
    Number::Exact(n, _) if n.is_zero() && e.is_zero() => {
      Some(Expr::symbol("Indeterminate"))
    }
    Number::Exact(n, d) => {
      let k = e.abs().to_u32()?;
      if exact_power_bits(&n, &d, k) > MAX_EXACT_POWER_BITS {
        return None;
      }
      let (num, den) = (n.pow(k), d.pow(k));
      if e.is_negative() {
        Some(reduce_rational(&den, &num))
      } else {
        Some(reduce_rational(&num, &den))
      }
    }
    Number::Real(f) => {
      if bigfloat_is_zero(&f) && e.is_negative() {
        return Some(Expr::symbol("ComplexInfinity"));
      }
      Some(Expr::Real(bigfloat_powi(&f, e, bits)))
    }
  }
}

/// Subtract[a, b] -> Plus[a, Times[-1, b]]
pub fn subtract_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [a, b] = args else {
    return None;
  };
  Some(Expr::call(
    "Plus",
    vec![a.clone(), Expr::call("Times", vec![Expr::integer(-1), b.clone()])],
  ))
}

/// Minus[a] -> Times[-1, a]
pub fn minus_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [a] = args else {
    return None;
  };
  Some(Expr::call("Times", vec![Expr::integer(-1), a.clone()]))
}

/// Divide[a, b]. Exact operands reduce to a canonical value, division by
/// zero resolves to `ComplexInfinity` or `Indeterminate`. Symbolic
/// operands stay unevaluated.
pub fn divide_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let [a, b] = args else {
    return None;
  };
  let bits = session.config.precision_bits;
  let (a, b) = (Number::from_expr(a)?, Number::from_expr(b)?);
  match (a, b) {
    (Number::Exact(an, ad), Number::Exact(bn, bd)) => {
      Some(reduce_rational(&(an * bd), &(ad * bn)))
    }
    (a, b) => {
      let divisor: BigFloat = b.to_bigfloat(bits);
      if bigfloat_is_zero(&divisor) {
        let dividend_zero = match &a {
          Number::Exact(n, _) => n.is_zero(),
          Number::Real(f) => bigfloat_is_zero(f),
        };
        return Some(Expr::symbol(if dividend_zero {
          "Indeterminate"
        } else {
          "ComplexInfinity"
        }));
      }
      Some(Expr::Real(a.to_bigfloat(bits).div(&divisor, bits, ROUNDING)))
    }
  }
}

/// Rational[n, d] with integer parts reduces to canonical form;
/// anything else stays unevaluated.
pub fn rational_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  match args {
    [Expr::Integer(n), Expr::Integer(d)] => Some(reduce_rational(n, d)),
    _ => None,
  }
}
