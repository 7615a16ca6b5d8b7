use astro_float::BigFloat;
use num_bigint::BigInt;
use pest::iterators::Pair;
use std::cmp::Ordering;
use std::fmt;

use crate::Rule;
use crate::functions::math_ast::numerical::{
  bigfloat_to_string, compare_bigfloat, parse_decimal,
};

/// A Wolfram Language expression.
///
/// Numeric literals are not canonical by construction: a `Rational` may
/// carry a zero or negative denominator until it is evaluated.
#[derive(Debug, Clone)]
pub enum Expr {
  Symbol(String),
  Integer(BigInt),
  Rational(BigInt, BigInt),
  Real(BigFloat),
  String(String),
  Expression { head: Box<Expr>, parts: Vec<Expr> },
}

/// Presentation mode for [`string_form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
  /// Reconstructs the expression when parsed again
  Input,
  /// What a user sees: strings unquoted, reals rounded
  Output { digits: usize },
}

impl Expr {
  pub fn symbol(name: &str) -> Expr {
    Expr::Symbol(name.to_string())
  }

  pub fn integer(n: impl Into<BigInt>) -> Expr {
    Expr::Integer(n.into())
  }

  pub fn rational(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Expr {
    Expr::Rational(n.into(), d.into())
  }

  pub fn string(s: &str) -> Expr {
    Expr::String(s.to_string())
  }

  /// `name[args...]`
  pub fn call(name: &str, parts: Vec<Expr>) -> Expr {
    Expr::Expression {
      head: Box::new(Expr::symbol(name)),
      parts,
    }
  }

  pub fn list(items: Vec<Expr>) -> Expr {
    Expr::call("List", items)
  }

  pub fn null() -> Expr {
    Expr::symbol("Null")
  }

  pub fn boolean(b: bool) -> Expr {
    Expr::symbol(if b { "True" } else { "False" })
  }

  /// Error-tagged result carrying a human readable cause.
  pub fn error(message: &str) -> Expr {
    Expr::call("Error", vec![Expr::string(message)])
  }

  /// Duplicate the whole tree. The copy shares nothing with `self`.
  pub fn deep_copy(&self) -> Expr {
    self.clone()
  }

  /// Name of the head symbol of a compound expression.
  pub fn head_name(&self) -> Option<&str> {
    match self {
      Expr::Expression { head, .. } => match head.as_ref() {
        Expr::Symbol(name) => Some(name),
        _ => None,
      },
      _ => None,
    }
  }

  pub fn has_head(&self, name: &str) -> bool {
    self.head_name() == Some(name)
  }

  /// Parts of a `List[...]` expression.
  pub fn as_list(&self) -> Option<&[Expr]> {
    match self {
      Expr::Expression { parts, .. } if self.has_head("List") => Some(parts),
      _ => None,
    }
  }

  pub fn is_number(&self) -> bool {
    matches!(self, Expr::Integer(_) | Expr::Rational(..) | Expr::Real(_))
  }

  /// The head of an expression as used by `Head` and typed blanks.
  pub fn head(&self) -> Expr {
    match self {
      Expr::Symbol(_) => Expr::symbol("Symbol"),
      Expr::Integer(_) => Expr::symbol("Integer"),
      Expr::Rational(..) => Expr::symbol("Rational"),
      Expr::Real(_) => Expr::symbol("Real"),
      Expr::String(_) => Expr::symbol("String"),
      Expr::Expression { head, .. } => head.as_ref().clone(),
    }
  }
}

/// Exact structural identity (`SameQ`). `2` and `2.` are not identical.
impl PartialEq for Expr {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Expr::Symbol(a), Expr::Symbol(b)) => a == b,
      (Expr::Integer(a), Expr::Integer(b)) => a == b,
      (Expr::Rational(an, ad), Expr::Rational(bn, bd)) => an == bn && ad == bd,
      (Expr::Real(a), Expr::Real(b)) => {
        compare_bigfloat(a, b) == Some(Ordering::Equal)
      }
      (Expr::String(a), Expr::String(b)) => a == b,
      (
        Expr::Expression { head: ah, parts: ap },
        Expr::Expression { head: bh, parts: bp },
      ) => ah == bh && ap == bp,
      _ => false,
    }
  }
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&string_form(self, Form::Input))
  }
}

/// Render an expression as text.
///
/// Compound terms use full form (`Plus[x, 1]`) except lists, which use
/// braces. Rationals render as `n/d`, reals always carry a decimal point.
pub fn string_form(expr: &Expr, form: Form) -> String {
  match expr {
    Expr::Symbol(name) => name.clone(),
    Expr::Integer(n) => n.to_string(),
    Expr::Rational(n, d) => format!("{}/{}", n, d),
    Expr::Real(f) => match form {
      Form::Input => bigfloat_to_string(f, None),
      Form::Output { digits } => bigfloat_to_string(f, Some(digits)),
    },
    Expr::String(s) => match form {
      Form::Input => quote_string(s),
      Form::Output { .. } => s.clone(),
    },
    Expr::Expression { head, parts } => {
      let inner = parts
        .iter()
        .map(|p| string_form(p, form))
        .collect::<Vec<_>>()
        .join(", ");
      if expr.has_head("List") {
        format!("{{{}}}", inner)
      } else {
        format!("{}[{}]", string_form(head, form), inner)
      }
    }
  }
}

fn quote_string(s: &str) -> String {
  let mut out = String::with_capacity(s.len() + 2);
  out.push('"');
  for c in s.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\t' => out.push_str("\\t"),
      _ => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Convert a parsed pest pair into an expression.
/// Decimal literals are rounded to `precision` bits.
pub fn pair_to_expr(pair: Pair<Rule>, precision: usize) -> Expr {
  match pair.as_rule() {
    Rule::CompoundExpression => {
      let mut statements = Vec::new();
      let mut trailing = false;
      for inner in pair.into_inner() {
        if inner.as_rule() == Rule::TrailingSemicolon {
          trailing = true;
        } else {
          statements.push(pair_to_expr(inner, precision));
        }
      }
      if trailing {
        statements.push(Expr::null());
      }
      if statements.len() == 1 {
        statements.remove(0)
      } else {
        Expr::call("CompoundExpression", statements)
      }
    }
    Rule::Statement => {
      let mut inner = pair.into_inner();
      let lhs = pair_to_expr(inner.next().unwrap(), precision);
      match inner.next() {
        Some(op) => {
          let rhs = pair_to_expr(inner.next().unwrap(), precision);
          let name = if op.as_str() == ":=" { "SetDelayed" } else { "Set" };
          Expr::call(name, vec![lhs, rhs])
        }
        None => lhs,
      }
    }
    Rule::FunctionLiteral => {
      let mut inner = pair.into_inner();
      let mut expr = pair_to_expr(inner.next().unwrap(), precision);
      for _ampersand in inner {
        expr = Expr::call("Function", vec![expr]);
      }
      expr
    }
    Rule::ReplaceExpr => {
      let mut inner = pair.into_inner();
      let mut expr = pair_to_expr(inner.next().unwrap(), precision);
      for rules in inner {
        expr = Expr::call(
          "ReplaceAll",
          vec![expr, pair_to_expr(rules, precision)],
        );
      }
      expr
    }
    Rule::RuleExpr => {
      let mut inner = pair.into_inner();
      let lhs = pair_to_expr(inner.next().unwrap(), precision);
      match inner.next() {
        Some(op) => {
          let rhs = pair_to_expr(inner.next().unwrap(), precision);
          let name = if op.as_str() == ":>" { "RuleDelayed" } else { "Rule" };
          Expr::call(name, vec![lhs, rhs])
        }
        None => lhs,
      }
    }
    Rule::Comparison => comparison_to_expr(pair, precision),
    Rule::Sum => {
      let mut inner = pair.into_inner();
      let first = pair_to_expr(inner.next().unwrap(), precision);
      let mut terms = vec![first];
      while let Some(op) = inner.next() {
        let term = pair_to_expr(inner.next().unwrap(), precision);
        if op.as_str() == "-" {
          terms.push(negate(term));
        } else {
          terms.push(term);
        }
      }
      if terms.len() == 1 {
        terms.remove(0)
      } else {
        Expr::call("Plus", terms)
      }
    }
    Rule::Product => {
      let mut inner = pair.into_inner();
      let mut factors = vec![pair_to_expr(inner.next().unwrap(), precision)];
      while let Some(op) = inner.next() {
        let rhs = pair_to_expr(inner.next().unwrap(), precision);
        if op.as_str() == "/" {
          let numerator = collapse_times(std::mem::take(&mut factors));
          factors.push(Expr::call("Divide", vec![numerator, rhs]));
        } else {
          factors.push(rhs);
        }
      }
      collapse_times(factors)
    }
    Rule::Unary => {
      let mut inner = pair.into_inner().collect::<Vec<_>>();
      let operand = pair_to_expr(inner.pop().unwrap(), precision);
      inner.iter().fold(operand, |acc, _minus| negate(acc))
    }
    Rule::PowerExpr => {
      let mut inner = pair.into_inner();
      let base = pair_to_expr(inner.next().unwrap(), precision);
      match inner.next() {
        Some(exponent) => {
          Expr::call("Power", vec![base, pair_to_expr(exponent, precision)])
        }
        None => base,
      }
    }
    Rule::Postfix => {
      let mut inner = pair.into_inner();
      let mut expr = pair_to_expr(inner.next().unwrap(), precision);
      for args in inner {
        let parts = args
          .into_inner()
          .map(|a| pair_to_expr(a, precision))
          .collect();
        expr = Expr::Expression {
          head: Box::new(expr),
          parts,
        };
      }
      expr
    }
    Rule::List => Expr::list(
      pair
        .into_inner()
        .map(|item| pair_to_expr(item, precision))
        .collect(),
    ),
    Rule::Integer => Expr::Integer(pair.as_str().parse().unwrap()),
    Rule::Real => Expr::Real(parse_decimal(pair.as_str(), precision).unwrap()),
    Rule::String => {
      let raw = pair.as_str();
      let text = snailquote::unescape(raw)
        .unwrap_or_else(|_| raw[1..raw.len() - 1].to_string());
      Expr::String(text)
    }
    Rule::Slot => {
      let index = pair.as_str()[1..].parse::<u32>().unwrap_or(1);
      Expr::call("Slot", vec![Expr::integer(index)])
    }
    Rule::Pattern => {
      let mut name = None;
      let mut blank_head = None;
      for inner in pair.into_inner() {
        match inner.as_rule() {
          Rule::PatternName => name = Some(inner.as_str()),
          Rule::PatternHead => blank_head = Some(inner.as_str()),
          _ => {}
        }
      }
      let blank = Expr::call(
        "Blank",
        blank_head.map(|h| vec![Expr::symbol(h)]).unwrap_or_default(),
      );
      match name {
        Some(n) => Expr::call("Pattern", vec![Expr::symbol(n), blank]),
        None => blank,
      }
    }
    Rule::Symbol => Expr::symbol(pair.as_str()),
    _ => {
      // Single-child wrappers produced by the grammar
      let mut inner = pair.into_inner();
      match inner.next() {
        Some(child) => pair_to_expr(child, precision),
        None => Expr::null(),
      }
    }
  }
}

/// `a == b == c` becomes `Equal[a, b, c]`; mixed operators nest left.
fn comparison_to_expr(pair: Pair<Rule>, precision: usize) -> Expr {
  let mut inner = pair.into_inner();
  let first = pair_to_expr(inner.next().unwrap(), precision);
  let mut current_op: Option<&'static str> = None;
  let mut operands = vec![first];
  while let Some(op) = inner.next() {
    let name = comparison_name(op.as_str());
    let rhs = pair_to_expr(inner.next().unwrap(), precision);
    match current_op {
      Some(prev) if prev != name => {
        let lhs = Expr::call(prev, std::mem::take(&mut operands));
        operands = vec![lhs, rhs];
      }
      _ => operands.push(rhs),
    }
    current_op = Some(name);
  }
  match current_op {
    Some(name) => Expr::call(name, operands),
    None => operands.remove(0),
  }
}

fn comparison_name(op: &str) -> &'static str {
  match op {
    "===" => "SameQ",
    "=!=" => "UnsameQ",
    "==" => "Equal",
    "!=" => "Unequal",
    "<=" => "LessEqual",
    ">=" => "GreaterEqual",
    "<" => "Less",
    _ => "Greater",
  }
}

fn collapse_times(mut factors: Vec<Expr>) -> Expr {
  if factors.len() == 1 {
    factors.remove(0)
  } else {
    Expr::call("Times", factors)
  }
}

/// Negate a parsed operand, folding numeric literals directly.
fn negate(expr: Expr) -> Expr {
  match expr {
    Expr::Integer(n) => Expr::Integer(-n),
    Expr::Real(f) => Expr::Real(f.neg()),
    other => Expr::call("Times", vec![Expr::integer(-1), other]),
  }
}
