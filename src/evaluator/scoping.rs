#[allow(unused_imports)]
use super::*;

use num_bigint::BigInt;
use std::ops::{Deref, DerefMut};

/// One iterator specification: `{i, max}` or `{i, min, max}`.
#[derive(Debug, Clone, PartialEq)]
pub struct IterSpec {
  pub variable: String,
  pub min: BigInt,
  pub max: BigInt,
  pub current: BigInt,
}

impl IterSpec {
  /// Parse a held iterator list. The bounds are evaluated in the current
  /// session and must come out as integers; anything else is rejected.
  pub fn from_list(spec: &Expr, session: &mut Session) -> Option<IterSpec> {
    let items = spec.as_list()?;
    let (variable, min, max) = match items {
      [Expr::Symbol(v), max] => (v, Expr::integer(1), session.evaluate(max)),
      [Expr::Symbol(v), min, max] => {
        (v, session.evaluate(min), session.evaluate(max))
      }
      _ => return None,
    };
    let (Expr::Integer(min), Expr::Integer(max)) = (min, max) else {
      return None;
    };
    Some(IterSpec {
      variable: variable.clone(),
      current: min.clone(),
      min,
      max,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.min > self.max
  }

  /// Number of values the variable takes.
  pub fn len(&self) -> BigInt {
    if self.is_empty() {
      BigInt::from(0)
    } else {
      &self.max - &self.min + 1
    }
  }
}

/// Several iterators stepped together, the last one fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiIterSpec {
  specs: Vec<IterSpec>,
  done: bool,
}

impl MultiIterSpec {
  pub fn from_lists(
    lists: &[Expr],
    session: &mut Session,
  ) -> Option<MultiIterSpec> {
    let specs = lists
      .iter()
      .map(|spec| IterSpec::from_list(spec, session))
      .collect::<Option<Vec<_>>>()?;
    let done = specs.iter().any(IterSpec::is_empty);
    Some(MultiIterSpec { specs, done })
  }

  /// Whether the current position is still inside every range.
  pub fn cont(&self) -> bool {
    !self.done
  }

  pub fn current(&self) -> &[IterSpec] {
    &self.specs
  }

  /// Advance like an odometer: bump the last iterator and carry into the
  /// previous ones when it runs past its maximum.
  pub fn advance(&mut self) {
    for spec in self.specs.iter_mut().rev() {
      if spec.current < spec.max {
        spec.current += 1;
        return;
      }
      spec.current = spec.min.clone();
    }
    self.done = true;
  }

  /// Length of each iterator's range, outermost first.
  pub fn dimensions(&self) -> Vec<BigInt> {
    self.specs.iter().map(IterSpec::len).collect()
  }

  pub fn variables(&self) -> Vec<String> {
    self.specs.iter().map(|s| s.variable.clone()).collect()
  }
}

/// Dynamic scope for iteration variables.
///
/// Entering snapshots the symbols, binding sets their own values, and
/// dropping the scope puts every snapshot back in reverse order. The
/// restore runs on every exit path, early returns included.
pub struct IterationScope<'a> {
  session: &'a mut Session,
  saved: Vec<(String, Snapshot)>,
}

impl<'a> IterationScope<'a> {
  pub fn enter(session: &'a mut Session, variables: &[String]) -> Self {
    let saved = variables
      .iter()
      .map(|name| (name.clone(), session.snapshot(name)))
      .collect();
    IterationScope { session, saved }
  }

  /// Give every iterator variable its current value.
  pub fn bind(&mut self, specs: &[IterSpec]) {
    for spec in specs {
      self
        .session
        .define_value(&spec.variable, Expr::Integer(spec.current.clone()));
    }
  }
}

impl Deref for IterationScope<'_> {
  type Target = Session;

  fn deref(&self) -> &Session {
    self.session
  }
}

impl DerefMut for IterationScope<'_> {
  fn deref_mut(&mut self) -> &mut Session {
    self.session
  }
}

impl Drop for IterationScope<'_> {
  fn drop(&mut self) {
    while let Some((name, snapshot)) = self.saved.pop() {
      self.session.restore(&name, snapshot);
    }
  }
}
