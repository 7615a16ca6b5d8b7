use std::collections::HashMap;

use super::equality::{Equality, is_equal};
use crate::syntax::Expr;

/// Named captures of one successful match.
pub type Bindings = HashMap<String, Expr>;

/// Match `subject` against `pattern` starting from an empty dictionary.
pub fn match_pattern(subject: &Expr, pattern: &Expr) -> Option<Bindings> {
  match_with(subject, pattern, Bindings::new())
}

/// Extend `bindings` by matching `subject` against `pattern`.
///
/// The dictionary is consumed: on failure it is dropped together with
/// everything accumulated so far, so a failed attempt never leaks partial
/// bindings to the caller.
pub fn match_with(
  subject: &Expr,
  pattern: &Expr,
  mut bindings: Bindings,
) -> Option<Bindings> {
  // Pattern[name, sub]
  if let Some([Expr::Symbol(name), sub]) = call_parts(pattern, "Pattern") {
    let mut bindings = match_with(subject, sub, bindings)?;
    return match bindings.get(name) {
      Some(existing) => same_value(existing, subject).then_some(bindings),
      None => {
        bindings.insert(name.clone(), subject.clone());
        Some(bindings)
      }
    };
  }

  // Blank[] and Blank[head]
  if let Some(parts) = call_parts(pattern, "Blank") {
    return match parts {
      [] => Some(bindings),
      [kind] if subject.head() == *kind => Some(bindings),
      _ => None,
    };
  }

  match (subject, pattern) {
    // A rational value against Rational[a, b] or a / b
    (Expr::Rational(n, d), _) if is_rational_form(pattern) => {
      let parts = call_args(pattern);
      bindings = match_with(&Expr::Integer(n.clone()), &parts[0], bindings)?;
      match_with(&Expr::Integer(d.clone()), &parts[1], bindings)
    }
    (_, Expr::Rational(n, d)) if is_rational_form(subject) => {
      let parts = call_args(subject);
      bindings = match_with(&parts[0], &Expr::Integer(n.clone()), bindings)?;
      match_with(&parts[1], &Expr::Integer(d.clone()), bindings)
    }

    (
      Expr::Expression {
        head: subject_head,
        parts: subject_parts,
      },
      Expr::Expression {
        head: pattern_head,
        parts: pattern_parts,
      },
    ) => {
      if subject_parts.len() != pattern_parts.len() {
        return None;
      }
      bindings = match_with(subject_head, pattern_head, bindings)?;
      for (s, p) in subject_parts.iter().zip(pattern_parts) {
        bindings = match_with(s, p, bindings)?;
      }
      Some(bindings)
    }

    _ => (is_equal(subject, pattern) == Equality::True).then_some(bindings),
  }
}

/// Whether a repeated pattern name may bind `subject` again. The stored
/// value is compared as data, never matched as a pattern.
fn same_value(existing: &Expr, subject: &Expr) -> bool {
  if is_equal(existing, subject) == Equality::True {
    return true;
  }
  match (existing, subject) {
    (Expr::Rational(n, d), form) | (form, Expr::Rational(n, d))
      if is_rational_form(form) =>
    {
      let parts = call_args(form);
      is_equal(&parts[0], &Expr::Integer(n.clone())) == Equality::True
        && is_equal(&parts[1], &Expr::Integer(d.clone())) == Equality::True
    }
    _ => false,
  }
}

/// Whether `expr` contains `Pattern` or `Blank` anywhere.
pub fn contains_pattern(expr: &Expr) -> bool {
  match expr {
    Expr::Expression { head, parts } => {
      expr.has_head("Pattern")
        || expr.has_head("Blank")
        || contains_pattern(head)
        || parts.iter().any(contains_pattern)
    }
    _ => false,
  }
}

/// `Rational[a, b]` or `Divide[a, b]` as a compound form.
fn is_rational_form(expr: &Expr) -> bool {
  (expr.has_head("Rational") || expr.has_head("Divide"))
    && call_args(expr).len() == 2
}

fn call_args(expr: &Expr) -> &[Expr] {
  match expr {
    Expr::Expression { parts, .. } => parts,
    _ => &[],
  }
}

/// Parts of `name[...]`, or None for any other expression.
fn call_parts<'a>(expr: &'a Expr, name: &str) -> Option<&'a [Expr]> {
  if expr.has_head(name) {
    Some(call_args(expr))
  } else {
    None
  }
}

/// Replace every symbol bound in `bindings` by its value.
pub fn apply_bindings(expr: &Expr, bindings: &Bindings) -> Expr {
  match expr {
    Expr::Symbol(name) => match bindings.get(name) {
      Some(value) => value.clone(),
      None => expr.clone(),
    },
    Expr::Expression { head, parts } => Expr::Expression {
      head: Box::new(apply_bindings(head, bindings)),
      parts: parts.iter().map(|p| apply_bindings(p, bindings)).collect(),
    },
    _ => expr.clone(),
  }
}

/// Extract `(lhs, rhs)` pairs from a Rule, a RuleDelayed or a list of them.
pub fn rules_from_expr(expr: &Expr) -> Option<Vec<(Expr, Expr)>> {
  if let Some(items) = expr.as_list() {
    return items
      .iter()
      .map(single_rule)
      .collect::<Option<Vec<_>>>();
  }
  single_rule(expr).map(|rule| vec![rule])
}

fn single_rule(expr: &Expr) -> Option<(Expr, Expr)> {
  if !(expr.has_head("Rule") || expr.has_head("RuleDelayed")) {
    return None;
  }
  match call_args(expr) {
    [lhs, rhs] => Some((lhs.clone(), rhs.clone())),
    _ => None,
  }
}

/// Apply the first matching rule at the outermost positions, top-down.
/// A replaced subtree is not visited again.
pub fn apply_replace_all(expr: &Expr, rules: &[(Expr, Expr)]) -> Expr {
  for (lhs, rhs) in rules {
    if let Some(bindings) = match_pattern(expr, lhs) {
      return apply_bindings(rhs, &bindings);
    }
  }
  match expr {
    Expr::Expression { head, parts } => Expr::Expression {
      head: Box::new(apply_replace_all(head, rules)),
      parts: parts.iter().map(|p| apply_replace_all(p, rules)).collect(),
    },
    _ => expr.clone(),
  }
}
