#[allow(unused_imports)]
use super::*;

use crate::functions::math_ast::numeric_utils::reduce_rational;

impl Session {
  /// Evaluate an expression to its fixed point.
  ///
  /// Every pass evaluates the head and the non-held parts, then applies
  /// the first applicable user definition or built-in evaluator. Passes
  /// repeat until one leaves the expression structurally unchanged, so
  /// evaluating a result again returns it as is.
  pub fn evaluate(&mut self, expr: &Expr) -> Expr {
    if self.depth >= self.config.recursion_limit {
      // Only terms that could still rewrite are wrapped, so a held result
      // stays stable when the caller evaluates it again
      let rewritable = match expr {
        Expr::Symbol(name) => self.get_def(name).is_some(),
        Expr::Expression { .. } => !expr.has_head("Hold"),
        _ => false,
      };
      if !rewritable {
        return expr.clone();
      }
      self.warn_once(format!(
        "$RecursionLimit::reclim: Recursion depth of {} exceeded.",
        self.config.recursion_limit
      ));
      return Expr::call("Hold", vec![expr.clone()]);
    }
    self.depth += 1;
    let result = self.rewrite_to_fixed_point(expr.clone());
    self.depth -= 1;
    result
  }

  fn rewrite_to_fixed_point(&mut self, mut current: Expr) -> Expr {
    for _ in 0..self.config.iteration_limit {
      let next = self.rewrite_step(&current);
      if next == current {
        return current;
      }
      current = next;
    }
    self.warn_once(format!(
      "$IterationLimit::itlim: Iteration limit of {} exceeded.",
      self.config.iteration_limit
    ));
    Expr::call("Hold", vec![current])
  }

  /// One rewrite pass.
  fn rewrite_step(&mut self, expr: &Expr) -> Expr {
    match expr {
      Expr::Symbol(name) => match self.get_def(name) {
        Some(value) => value.clone(),
        None => expr.clone(),
      },
      Expr::Rational(n, d) => reduce_rational(n, d),
      Expr::Integer(_) | Expr::Real(_) | Expr::String(_) => expr.clone(),
      Expr::Expression { head, parts } => {
        let head = self.evaluate(head);
        let hold = match &head {
          Expr::Symbol(name) => hold_attribute(name),
          _ => Hold::None,
        };
        let mut evaluated = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
          if hold.holds(i) {
            evaluated.push(part.clone());
          } else {
            evaluated.push(self.evaluate(part));
          }
        }
        let current = Expr::Expression {
          head: Box::new(head),
          parts: evaluated,
        };
        self.apply_definitions(&current).unwrap_or(current)
      }
    }
  }

  /// Find the replacement for an expression whose head and parts are
  /// already evaluated: pure function application, then user
  /// definitions, then the built-in registry.
  fn apply_definitions(&mut self, expr: &Expr) -> Option<Expr> {
    let Expr::Expression { head, parts } = expr else {
      return None;
    };
    if head.has_head("Function") {
      return apply_pure_function(head, parts);
    }
    let name = match head.as_ref() {
      Expr::Symbol(name) => name,
      _ => return None,
    };
    for definition in self.definitions(name) {
      if matches!(definition.lhs, Expr::Symbol(_)) {
        continue;
      }
      if let Some(bindings) = match_pattern(expr, &definition.lhs) {
        return Some(apply_bindings(&definition.rhs, &bindings));
      }
    }
    let builtin = lookup_builtin(name)?;
    builtin(parts, self)
  }
}

/// `Function[body][args]` with `#n` slots, or `Function[x, body][arg]` and
/// `Function[{x, y}, body][args]` with named parameters.
fn apply_pure_function(function: &Expr, args: &[Expr]) -> Option<Expr> {
  let Expr::Expression { parts, .. } = function else {
    return None;
  };
  match parts.as_slice() {
    [body] => Some(substitute_slots(body, args)),
    [params, body] => {
      let names: Vec<&Expr> = match params.as_list() {
        Some(items) => items.iter().collect(),
        None => vec![params],
      };
      if names.len() > args.len() {
        return None;
      }
      let mut bindings = Bindings::new();
      for (param, arg) in names.into_iter().zip(args) {
        let Expr::Symbol(name) = param else {
          return None;
        };
        bindings.insert(name.clone(), arg.clone());
      }
      Some(apply_bindings(body, &bindings))
    }
    _ => None,
  }
}

/// Replace `Slot[n]` with the n-th argument, leaving nested functions alone.
fn substitute_slots(body: &Expr, args: &[Expr]) -> Expr {
  match body {
    Expr::Expression { parts, .. } if body.has_head("Slot") => {
      let index = match parts.as_slice() {
        [Expr::Integer(n)] => num_traits::ToPrimitive::to_usize(n),
        _ => None,
      };
      match index {
        Some(i) if i >= 1 && i <= args.len() => args[i - 1].clone(),
        _ => body.clone(),
      }
    }
    Expr::Expression { .. } if body.has_head("Function") => body.clone(),
    Expr::Expression { head, parts } => Expr::Expression {
      head: Box::new(substitute_slots(head, args)),
      parts: parts.iter().map(|p| substitute_slots(p, args)).collect(),
    },
    _ => body.clone(),
  }
}
