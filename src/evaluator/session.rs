use std::collections::HashMap;

use super::pattern_matching::contains_pattern;
use crate::functions::math_ast::numerical::DEFAULT_PRECISION_BITS;
use crate::syntax::{Expr, Form};

/// Tunables of an evaluation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
  /// Mantissa precision for reals, in bits. Exact numbers embedded into a
  /// real are rounded when they need more bits than this.
  pub precision_bits: usize,
  /// Significant digits shown for reals in output form
  pub display_digits: usize,
  /// Maximum rewrite steps of one fixed-point loop ($IterationLimit)
  pub iteration_limit: usize,
  /// Maximum nesting of evaluations ($RecursionLimit)
  pub recursion_limit: usize,
}

impl Default for SessionConfig {
  fn default() -> Self {
    SessionConfig {
      precision_bits: DEFAULT_PRECISION_BITS,
      display_digits: 6,
      iteration_limit: 4096,
      recursion_limit: 1024,
    }
  }
}

/// One `lhs = rhs` (or `lhs := rhs`) rule attached to a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
  pub lhs: Expr,
  pub rhs: Expr,
}

/// Everything the symbol table knows about one symbol.
/// Own values have `lhs == Symbol(name)`, down values a compound `lhs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolEntry {
  pub definitions: Vec<Definition>,
}

/// Saved state of one symbol, restored by [`Session::restore`].
pub type Snapshot = Option<SymbolEntry>;

/// An evaluation session: the symbol table plus everything else that
/// lives exactly as long as one interpreter instance.
#[derive(Debug, Default)]
pub struct Session {
  pub config: SessionConfig,
  symbols: HashMap<String, SymbolEntry>,
  warnings: Vec<String>,
  pub(crate) depth: usize,
}

impl Session {
  pub fn new() -> Self {
    Self::with_config(SessionConfig::default())
  }

  pub fn with_config(config: SessionConfig) -> Self {
    Session {
      config,
      ..Default::default()
    }
  }

  /// Install `lhs -> rhs` on `name`, replacing a definition with an
  /// identical left-hand side.
  ///
  /// Definitions are kept in lookup order: the own value, then down values
  /// without pattern syntax, then pattern down values in the order they
  /// were given.
  pub fn define(&mut self, name: &str, lhs: Expr, rhs: Expr) {
    let entry = self.symbols.entry(name.to_string()).or_default();
    if let Some(existing) = entry.definitions.iter_mut().find(|d| d.lhs == lhs)
    {
      existing.rhs = rhs;
      return;
    }
    let definitions = &mut entry.definitions;
    let index = if matches!(lhs, Expr::Symbol(_)) {
      0
    } else if contains_pattern(&lhs) {
      definitions.len()
    } else {
      // Specific values take priority over general patterns
      definitions
        .iter()
        .position(|d| contains_pattern(&d.lhs))
        .unwrap_or(definitions.len())
    };
    definitions.insert(index, Definition { lhs, rhs });
  }

  /// Set the own value of `name`.
  pub fn define_value(&mut self, name: &str, value: Expr) {
    self.define(name, Expr::symbol(name), value);
  }

  /// Remove every definition of `name`.
  pub fn clear(&mut self, name: &str) {
    self.symbols.remove(name);
  }

  /// Own value of `name`, if any.
  pub fn get_def(&self, name: &str) -> Option<&Expr> {
    self.get_rule(name, &Expr::symbol(name))
  }

  /// The right-hand side stored for exactly `lhs` on `name`.
  pub fn get_rule(&self, name: &str, lhs: &Expr) -> Option<&Expr> {
    self
      .symbols
      .get(name)?
      .definitions
      .iter()
      .find(|d| &d.lhs == lhs)
      .map(|d| &d.rhs)
  }

  pub fn definitions(&self, name: &str) -> &[Definition] {
    self
      .symbols
      .get(name)
      .map(|e| e.definitions.as_slice())
      .unwrap_or_default()
  }

  pub fn snapshot(&self, name: &str) -> Snapshot {
    self.symbols.get(name).cloned()
  }

  /// Put back a snapshot: re-create the entry if it existed, clear it if
  /// it did not.
  pub fn restore(&mut self, name: &str, snapshot: Snapshot) {
    match snapshot {
      Some(entry) => {
        self.symbols.insert(name.to_string(), entry);
      }
      None => self.clear(name),
    }
  }

  /// Record a diagnostic for the caller to surface.
  pub fn warn(&mut self, message: impl Into<String>) {
    self.warnings.push(message.into());
  }

  /// Like [`Session::warn`], skipping a message that is already pending.
  pub fn warn_once(&mut self, message: impl Into<String>) {
    let message = message.into();
    if !self.warnings.contains(&message) {
      self.warnings.push(message);
    }
  }

  pub fn take_warnings(&mut self) -> Vec<String> {
    std::mem::take(&mut self.warnings)
  }

  /// Output form configured for this session.
  pub fn output_form(&self) -> Form {
    Form::Output {
      digits: self.config.display_digits,
    }
  }
}
