//! Flow control: If, While and CompoundExpression.
//!
//! Conditions are classified with the three-valued equality oracle, so
//! an undecidable test is never mistaken for `False`.

use crate::evaluator::{Equality, Session, is_equal};
use crate::syntax::Expr;

fn classify(condition: &Expr) -> Equality {
  is_equal(condition, &Expr::symbol("True"))
}

/// If[cond, then, else]
///
/// `cond` arrives evaluated, the branches held. An undecidable condition
/// leaves the call unevaluated so a later evaluation can resolve it.
pub fn if_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [condition, then, otherwise] = args else {
    return None;
  };
  match classify(condition) {
    Equality::True => Some(then.clone()),
    Equality::False => Some(otherwise.clone()),
    Equality::Unknown => None,
  }
}

/// While[test, body]
///
/// Runs until the test is `False` and returns `Null`. A test that can be
/// decided neither way aborts the loop with an `Error[...]` result.
pub fn while_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let (test, body) = match args {
    [test] => (test, None),
    [test, body] => (test, Some(body)),
    _ => return None,
  };
  loop {
    let condition = session.evaluate(&test.deep_copy());
    match classify(&condition) {
      Equality::True => {
        if let Some(body) = body {
          session.evaluate(&body.deep_copy());
        }
      }
      Equality::False => return Some(Expr::null()),
      Equality::Unknown => {
        let message = format!(
          "While::undecided: Test {} is neither True nor False.",
          condition
        );
        session.warn(message.clone());
        return Some(Expr::error(&message));
      }
    }
  }
}

/// CompoundExpression[e1, e2, ...] evaluates in order and returns the last.
pub fn compound_expression_ast(
  args: &[Expr],
  session: &mut Session,
) -> Option<Expr> {
  let Some((last, init)) = args.split_last() else {
    return Some(Expr::null());
  };
  for expr in init {
    session.evaluate(expr);
  }
  Some(session.evaluate(last))
}
