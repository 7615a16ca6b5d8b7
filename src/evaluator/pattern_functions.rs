#[allow(unused_imports)]
use super::*;

/// MatchQ[expr, pattern]
pub fn match_q_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let [subject, pattern] = args else {
    return None;
  };
  Some(Expr::boolean(match_pattern(subject, pattern).is_some()))
}

/// ReplaceAll[expr, rules] (`expr /. rules`)
pub fn replace_all_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let [expr, rules] = args else {
    return None;
  };
  let Some(rules) = rules_from_expr(rules) else {
    session.warn_once(format!(
      "ReplaceAll::reps: {} is not a valid replacement rule.",
      rules
    ));
    return None;
  };
  Some(apply_replace_all(expr, &rules))
}
