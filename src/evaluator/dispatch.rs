#[allow(unused_imports)]
use super::*;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::functions::control_flow_ast::{
  compound_expression_ast, if_ast, while_ast,
};
use crate::functions::list_helpers_ast::{
  array_ast, cases_ast, length_ast, map_ast, member_q_ast, product_ast,
  sum_ast, table_ast,
};
use crate::functions::math_ast::arithmetic::{
  divide_ast, minus_ast, plus_ast, power_ast, rational_ast, subtract_ast,
  times_ast,
};
use crate::functions::predicate_ast::{
  equal_ast, greater_ast, greater_equal_ast, head_ast, integer_q_ast,
  less_ast, less_equal_ast, number_q_ast, same_q_ast, string_q_ast,
  unequal_ast, unsame_q_ast,
};

/// A built-in evaluator. Receives the (attribute-respecting) evaluated
/// parts of a call and returns its replacement, or None when the call
/// does not apply and should stay unevaluated.
pub type BuiltinFn = fn(&[Expr], &mut Session) -> Option<Expr>;

static BUILTINS: LazyLock<HashMap<&'static str, BuiltinFn>> =
  LazyLock::new(|| {
    let entries: [(&'static str, BuiltinFn); 40] = [
      // Numbers
      ("Plus", plus_ast),
      ("Times", times_ast),
      ("Power", power_ast),
      ("Subtract", subtract_ast),
      ("Minus", minus_ast),
      ("Divide", divide_ast),
      ("Rational", rational_ast),
      // Comparison and predicates
      ("Equal", equal_ast),
      ("Unequal", unequal_ast),
      ("Less", less_ast),
      ("Greater", greater_ast),
      ("LessEqual", less_equal_ast),
      ("GreaterEqual", greater_equal_ast),
      ("SameQ", same_q_ast),
      ("UnsameQ", unsame_q_ast),
      ("NumberQ", number_q_ast),
      ("IntegerQ", integer_q_ast),
      ("StringQ", string_q_ast),
      ("Head", head_ast),
      // Flow control
      ("If", if_ast),
      ("While", while_ast),
      ("CompoundExpression", compound_expression_ast),
      // Definitions
      ("Set", set_ast),
      ("SetDelayed", set_delayed_ast),
      ("Clear", clear_ast),
      ("Attributes", attributes_ast),
      // Patterns
      ("MatchQ", match_q_ast),
      ("ReplaceAll", replace_all_ast),
      // Iteration and lists
      ("Table", table_ast),
      ("Sum", sum_ast),
      ("Product", product_ast),
      ("Map", map_ast),
      ("Array", array_ast),
      ("Cases", cases_ast),
      ("MemberQ", member_q_ast),
      ("Length", length_ast),
      // Symbols whose only behavior is their attributes
      ("Hold", inert),
      ("Function", inert),
      ("Rule", inert),
      ("RuleDelayed", inert),
    ];
    entries.into_iter().collect()
  });

fn inert(_args: &[Expr], _session: &mut Session) -> Option<Expr> {
  None
}

/// Look up the evaluator registered for a head symbol.
pub fn lookup_builtin(name: &str) -> Option<BuiltinFn> {
  BUILTINS.get(name).copied()
}

/// Names of all built-in symbols, sorted.
pub fn builtin_names() -> Vec<&'static str> {
  let mut names: Vec<_> = BUILTINS.keys().copied().collect();
  names.sort_unstable();
  names
}
