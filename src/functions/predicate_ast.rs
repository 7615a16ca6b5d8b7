//! Comparisons and type predicates.

use std::cmp::Ordering;

use crate::evaluator::{Equality, Session, is_equal};
use crate::functions::math_ast::numeric_utils::Number;
use crate::syntax::Expr;

/// Values that cannot rewrite any further, so a FALSE from the oracle is
/// a real answer rather than missing information.
fn is_closed(expr: &Expr) -> bool {
  match expr {
    Expr::Integer(_) | Expr::Rational(..) | Expr::Real(_) | Expr::String(_) => {
      true
    }
    Expr::Symbol(name) => matches!(
      name.as_str(),
      "True" | "False" | "Null" | "Indeterminate" | "ComplexInfinity"
    ),
    Expr::Expression { parts, .. } if expr.has_head("List") => {
      parts.iter().all(is_closed)
    }
    Expr::Expression { .. } => false,
  }
}

/// Equality of two evaluated operands as the `Equal` evaluator sees it.
fn equal_pair(a: &Expr, b: &Expr, bits: usize) -> Equality {
  match is_equal(a, b) {
    Equality::True => Equality::True,
    Equality::False if is_closed(a) && is_closed(b) => Equality::False,
    Equality::False => Equality::Unknown,
    Equality::Unknown => match (Number::from_expr(a), Number::from_expr(b)) {
      (Some(x), Some(y)) => match x.compare(&y, bits) {
        Some(Ordering::Equal) => Equality::True,
        Some(_) => Equality::False,
        None => Equality::Unknown,
      },
      _ => Equality::Unknown,
    },
  }
}

/// Equal[a, b, ...]
pub fn equal_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  if args.len() < 2 {
    return Some(Expr::boolean(true));
  }
  let bits = session.config.precision_bits;
  let mut all_true = true;
  for pair in args.windows(2) {
    match equal_pair(&pair[0], &pair[1], bits) {
      Equality::True => {}
      Equality::False => return Some(Expr::boolean(false)),
      Equality::Unknown => all_true = false,
    }
  }
  all_true.then(|| Expr::boolean(true))
}

/// Unequal[a, b, ...] is True when no two operands are equal.
pub fn unequal_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  if args.len() < 2 {
    return Some(Expr::boolean(true));
  }
  let bits = session.config.precision_bits;
  let mut all_false = true;
  for (i, a) in args.iter().enumerate() {
    for b in &args[i + 1..] {
      match equal_pair(a, b, bits) {
        Equality::True => return Some(Expr::boolean(false)),
        Equality::False => {}
        Equality::Unknown => all_false = false,
      }
    }
  }
  all_false.then(|| Expr::boolean(true))
}

/// Shared body of the ordering comparisons: every adjacent pair of
/// numeric operands must satisfy `accept`.
fn compare_chain(
  args: &[Expr],
  session: &Session,
  accept: fn(Ordering) -> bool,
) -> Option<Expr> {
  let bits = session.config.precision_bits;
  let numbers = args
    .iter()
    .map(Number::from_expr)
    .collect::<Option<Vec<_>>>()?;
  for pair in numbers.windows(2) {
    let ordering = pair[0].compare(&pair[1], bits)?;
    if !accept(ordering) {
      return Some(Expr::boolean(false));
    }
  }
  Some(Expr::boolean(true))
}

pub fn less_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  compare_chain(args, session, Ordering::is_lt)
}

pub fn greater_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  compare_chain(args, session, Ordering::is_gt)
}

pub fn less_equal_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  compare_chain(args, session, Ordering::is_le)
}

pub fn greater_equal_ast(
  args: &[Expr],
  session: &mut Session,
) -> Option<Expr> {
  compare_chain(args, session, Ordering::is_ge)
}

/// SameQ[a, b, ...]: structural identity of all operands.
pub fn same_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  Some(Expr::boolean(args.windows(2).all(|p| p[0] == p[1])))
}

/// UnsameQ[a, b, ...]: no two operands are identical.
pub fn unsame_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let distinct = args
    .iter()
    .enumerate()
    .all(|(i, a)| args[i + 1..].iter().all(|b| a != b));
  Some(Expr::boolean(distinct))
}

pub fn number_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  match args {
    [x] => Some(Expr::boolean(x.is_number())),
    _ => None,
  }
}

pub fn integer_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  match args {
    [x] => Some(Expr::boolean(matches!(x, Expr::Integer(_)))),
    _ => None,
  }
}

pub fn string_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  match args {
    [x] => Some(Expr::boolean(matches!(x, Expr::String(_)))),
    _ => None,
  }
}

/// Head[expr]
pub fn head_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  match args {
    [x] => Some(x.head()),
    _ => None,
  }
}
