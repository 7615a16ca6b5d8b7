//! Three-valued equality used by conditionals and the pattern matcher.

use std::cmp::Ordering;

use crate::functions::math_ast::numerical::{
  bigint_to_bigfloat, compare_bigfloat, precision_of, rational_to_bigfloat,
};
use crate::syntax::Expr;

/// Outcome of [`is_equal`]. `Unknown` means the available information
/// cannot decide the question, which callers must handle separately from
/// `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equality {
  True,
  False,
  Unknown,
}

impl Equality {
  fn from_bool(b: bool) -> Equality {
    if b { Equality::True } else { Equality::False }
  }
}

/// Decide whether two expressions are equal. Never fails.
///
/// Operands are assumed to be evaluated; rationals must be canonical.
/// An exact number compared with a real is converted at the real's
/// precision: equal means `True`, a mismatch is only `Unknown`.
pub fn is_equal(a: &Expr, b: &Expr) -> Equality {
  match (a, b) {
    (Expr::Integer(x), Expr::Integer(y)) => Equality::from_bool(x == y),
    (Expr::Rational(an, ad), Expr::Rational(bn, bd)) => {
      Equality::from_bool(an == bn && ad == bd)
    }
    (Expr::Real(x), Expr::Real(y)) => {
      Equality::from_bool(compare_bigfloat(x, y) == Some(Ordering::Equal))
    }
    // A canonical rational never equals an integer
    (Expr::Integer(_), Expr::Rational(..))
    | (Expr::Rational(..), Expr::Integer(_)) => Equality::False,
    (Expr::Integer(_) | Expr::Rational(..), Expr::Real(f)) => {
      exact_vs_real(a, f)
    }
    (Expr::Real(f), Expr::Integer(_) | Expr::Rational(..)) => {
      exact_vs_real(b, f)
    }

    (Expr::String(x), Expr::String(y)) => Equality::from_bool(x == y),
    (Expr::String(_), _) | (_, Expr::String(_)) => Equality::False,

    (Expr::Symbol(x), Expr::Symbol(y)) => Equality::from_bool(x == y),

    (
      Expr::Expression { head: ah, parts: ap },
      Expr::Expression { head: bh, parts: bp },
    ) => {
      let same = ap.len() == bp.len()
        && is_equal(ah, bh) == Equality::True
        && ap
          .iter()
          .zip(bp.iter())
          .all(|(x, y)| is_equal(x, y) == Equality::True);
      Equality::from_bool(same)
    }
    // An unevaluated compound may still rewrite to the atom
    (Expr::Expression { .. }, _) | (_, Expr::Expression { .. }) => {
      Equality::Unknown
    }

    _ => Equality::False,
  }
}

fn exact_vs_real(exact: &Expr, real: &astro_float::BigFloat) -> Equality {
  let bits = precision_of(real);
  let converted = match exact {
    Expr::Integer(n) => bigint_to_bigfloat(n, bits),
    Expr::Rational(n, d) => rational_to_bigfloat(n, d, bits),
    _ => return Equality::Unknown,
  };
  if compare_bigfloat(&converted, real) == Some(Ordering::Equal) {
    Equality::True
  } else {
    Equality::Unknown
  }
}
