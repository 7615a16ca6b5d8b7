#[allow(unused_imports)]
use super::*;

/// Symbol that owns a definition with the given left-hand side:
/// `x` for `x = ...`, `f` for `f[...] = ...`.
fn definition_owner(lhs: &Expr) -> Option<&str> {
  match lhs {
    Expr::Symbol(name) => Some(name),
    Expr::Expression { head, .. } => match head.as_ref() {
      Expr::Symbol(name) => Some(name),
      _ => None,
    },
    _ => None,
  }
}

fn is_protected(name: &str) -> bool {
  get_builtin_attributes(name).contains(&"Protected")
}

/// Store `lhs -> rhs`, refusing protected owners.
fn assign(lhs: &Expr, rhs: &Expr, session: &mut Session, op: &str) -> bool {
  let Some(owner) = definition_owner(lhs) else {
    session.warn(format!(
      "{}::setraw: Cannot assign to raw object {}.",
      op, lhs
    ));
    return false;
  };
  if is_protected(owner) {
    session.warn(format!("{}::wrsym: Symbol {} is Protected.", op, owner));
    return false;
  }
  let owner = owner.to_string();
  session.define(&owner, lhs.clone(), rhs.clone());
  true
}

/// Set[lhs, rhs]: `rhs` arrives evaluated and is returned.
pub fn set_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let [lhs, rhs] = args else {
    return None;
  };
  assign(lhs, rhs, session, "Set");
  Some(rhs.clone())
}

/// SetDelayed[lhs, rhs]: `rhs` is stored unevaluated.
pub fn set_delayed_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  let [lhs, rhs] = args else {
    return None;
  };
  if assign(lhs, rhs, session, "SetDelayed") {
    Some(Expr::null())
  } else {
    Some(Expr::symbol("$Failed"))
  }
}

/// Clear[s1, s2, ...]
pub fn clear_ast(args: &[Expr], session: &mut Session) -> Option<Expr> {
  for arg in args {
    match arg {
      Expr::Symbol(name) | Expr::String(name) => {
        if is_protected(name) {
          session.warn(format!("Clear::wrsym: Symbol {} is Protected.", name));
        } else {
          session.clear(name);
        }
      }
      other => {
        session.warn(format!(
          "Clear::ssym: {} is not a symbol or a string.",
          other
        ));
      }
    }
  }
  Some(Expr::null())
}
