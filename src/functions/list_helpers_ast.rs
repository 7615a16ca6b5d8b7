//! Iterating constructs and list helpers.
//!
//! Table, Sum and Product evaluate a fresh copy of their held body once per
//! point of the iterator range, inside an [`IterationScope`] so the loop
//! variables never leak into or clobber the surrounding session.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::evaluator::{IterationScope, MultiIterSpec, Session, match_pattern};
use crate::syntax::Expr;

/// Apply `f` to a single argument without evaluating.
fn apply_head(f: &Expr, arg: Expr) -> Expr {
  Expr::Expression {
    head: Box::new(f.clone()),
    parts: vec![arg],
  }
}

/// Evaluate `body` at every point of the iterator range, outermost
/// iterator slowest, and return the range's dimensions. Returns None when
/// an iterator spec is malformed.
fn iterate(
  body: &Expr,
  specs: &[Expr],
  session: &mut Session,
  mut visit: impl FnMut(&mut Session, Expr),
) -> Option<Vec<BigInt>> {
  let mut multi = MultiIterSpec::from_lists(specs, session)?;
  let dimensions = multi.dimensions();
  let mut scope = IterationScope::enter(session, &multi.variables());
  while multi.cont() {
    scope.bind(multi.current());
    let value = scope.evaluate(&body.deep_copy());
    visit(&mut *scope, value);
    multi.advance();
  }
  Some(dimensions)
}

/// Shape a flat sequence of values into nested lists.
fn nest_values(
  values: &mut impl Iterator<Item = Expr>,
  dimensions: &[usize],
) -> Expr {
  match dimensions.split_first() {
    None => values.next().unwrap_or_else(Expr::null),
    Some((&n, rest)) => {
      Expr::list((0..n).map(|_| nest_values(values, rest)).collect())
    }
  }
}

/// Table[body, {i, min, max}, {j, ...}, ...]
pub fn table_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let (body, specs) = args.split_first()?;
  if specs.is_empty() {
    return None;
  }
  let mut values = Vec::new();
  let dimensions = iterate(body, specs, session, |_, v| values.push(v))?;
  let dimensions = dimensions
    .iter()
    .map(ToPrimitive::to_usize)
    .collect::<Option<Vec<_>>>()?;
  Some(nest_values(&mut values.into_iter(), &dimensions))
}

/// Combine every value of the range with `head`, starting from `init`.
/// The accumulator is re-evaluated after each step.
fn fold_range(
  args: &[Expr],
  session: &mut Session,
  head: &str,
  init: i64,
) -> Option<Expr> {
  let (body, specs) = args.split_first()?;
  if specs.is_empty() {
    return None;
  }
  let mut acc = Expr::integer(init);
  iterate(body, specs, session, |session, value| {
    let step = Expr::call(head, vec![acc.clone(), value]);
    acc = session.evaluate(&step);
  })?;
  Some(acc)
}

/// Sum[body, {i, min, max}, ...]
pub fn sum_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  fold_range(args, session, "Plus", 0)
}

/// Product[body, {i, min, max}, ...]
pub fn product_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  fold_range(args, session, "Times", 1)
}

/// Map[f, expr] applies `f` to every part of a compound term.
pub fn map_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [f, expr] = args else {
    return None;
  };
  match expr {
    Expr::Expression { head, parts } => Some(Expr::Expression {
      head: head.clone(),
      parts: parts.iter().map(|p| apply_head(f, p.clone())).collect(),
    }),
    _ => Some(expr.clone()),
  }
}

/// Array[f, n] -> {f[1], ..., f[n]}
pub fn array_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [f, Expr::Integer(n)] = args else {
    return None;
  };
  if n.is_negative() {
    return None;
  }
  let n = n.to_usize()?;
  Some(Expr::list(
    (1..=n)
      .map(|i| apply_head(f, Expr::Integer(BigInt::from(i))))
      .collect(),
  ))
}

/// Cases[list, pattern]
pub fn cases_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [list, pattern] = args else {
    return None;
  };
  let items = list.as_list()?;
  Some(Expr::list(
    items
      .iter()
      .filter(|item| match_pattern(item, pattern).is_some())
      .cloned()
      .collect(),
  ))
}

/// MemberQ[list, pattern]
pub fn member_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [list, pattern] = args else {
    return None;
  };
  let found = list.as_list().is_some_and(|items| {
    items.iter().any(|item| match_pattern(item, pattern).is_some())
  });
  Some(Expr::boolean(found))
}

/// Length[expr]: number of parts, 0 for atoms.
pub fn length_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  match args {
    [Expr::Expression { parts, .. }] => Some(Expr::integer(parts.len())),
    [_] => Some(Expr::integer(0)),
    _ => None,
  }
}
