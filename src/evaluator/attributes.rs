#[allow(unused_imports)]
use super::*;

/// Returns the built-in attributes for a given symbol name.
/// Attributes are returned in alphabetical order, matching wolframscript
/// output.
pub fn get_builtin_attributes(name: &str) -> Vec<&'static str> {
  match name {
    // Arithmetic operators
    "Plus" | "Times" => vec![
      "Flat",
      "Listable",
      "NumericFunction",
      "OneIdentity",
      "Orderless",
      "Protected",
    ],
    "Power" => vec!["Listable", "NumericFunction", "OneIdentity", "Protected"],
    "Subtract" | "Divide" | "Minus" => {
      vec!["Listable", "NumericFunction", "Protected"]
    }

    // Held scoping and iteration constructs
    "Table" | "Sum" | "Product" | "While" | "CompoundExpression" | "Hold"
    | "Function" | "Clear" | "Attributes" => vec!["HoldAll", "Protected"],
    "SetDelayed" => vec!["HoldAll", "Protected", "SequenceHold"],
    "Set" => vec!["HoldFirst", "Protected", "SequenceHold"],
    "Pattern" => vec!["HoldFirst", "Protected"],
    "If" | "RuleDelayed" => vec!["HoldRest", "Protected"],

    "Rule" => vec!["Protected", "SequenceHold"],

    _ if lookup_builtin(name).is_some() => vec!["Protected"],
    _ => vec![],
  }
}

/// Which arguments a head keeps unevaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
  None,
  First,
  Rest,
  All,
}

impl Hold {
  pub fn holds(self, index: usize) -> bool {
    match self {
      Hold::None => false,
      Hold::First => index == 0,
      Hold::Rest => index > 0,
      Hold::All => true,
    }
  }
}

pub fn hold_attribute(name: &str) -> Hold {
  let attributes = get_builtin_attributes(name);
  if attributes.contains(&"HoldAll") {
    Hold::All
  } else if attributes.contains(&"HoldFirst") {
    Hold::First
  } else if attributes.contains(&"HoldRest") {
    Hold::Rest
  } else {
    Hold::None
  }
}

/// Attributes[sym]
pub fn attributes_ast(args: &[Expr], _session: &mut Session) -> Option<Expr> {
  let name = match args {
    [Expr::Symbol(name)] => name.as_str(),
    [Expr::String(name)] => name.as_str(),
    _ => return None,
  };
  Some(Expr::list(
    get_builtin_attributes(name)
      .into_iter()
      .map(Expr::symbol)
      .collect(),
  ))
}
