use super::*;

mod own_values {
  use super::*;

  #[test]
  fn set_returns_value() {
    assert_eq!(interpret("x = 5").unwrap(), "5");
    assert_eq!(interpret("x = 5; x + 1").unwrap(), "6");
  }

  #[test]
  fn set_evaluates_rhs_once() {
    assert_eq!(interpret("a = 1; b = a; a = 2; b").unwrap(), "1");
  }

  #[test]
  fn set_delayed_evaluates_on_use() {
    assert_eq!(interpret("a = 1; b := a; a = 2; b").unwrap(), "2");
    assert_eq!(interpret("b := 1").unwrap(), "Null");
  }

  #[test]
  fn clear_removes_value() {
    assert_eq!(interpret("x = 3; Clear[x]; x").unwrap(), "x");
  }
}

mod down_values {
  use super::*;

  #[test]
  fn pattern_definition() {
    assert_eq!(interpret("f[n_] := n^2; f[4]").unwrap(), "16");
    assert_eq!(interpret("f[x_] := x + 1; f[a]").unwrap(), "Plus[1, a]");
  }

  #[test]
  fn specific_definition_before_general() {
    assert_eq!(
      interpret("fact[0] = 1; fact[n_] := n * fact[n - 1]; fact[10]").unwrap(),
      "3628800"
    );
  }

  #[test]
  fn specific_definition_after_general() {
    assert_eq!(
      interpret("fact[n_] := n * fact[n - 1]; fact[0] = 1; fact[5]").unwrap(),
      "120"
    );
  }

  #[test]
  fn typed_pattern_restricts_arguments() {
    assert_eq!(
      interpret("g[n_Integer] := n + 1; {g[1], g[x]}").unwrap(),
      "{2, g[x]}"
    );
  }

  #[test]
  fn redefinition_replaces() {
    assert_eq!(interpret("h[x_] := 1; h[x_] := 2; h[0]").unwrap(), "2");
  }
}

mod protection {
  use super::*;

  #[test]
  fn builtins_cannot_be_assigned() {
    assert_eq!(interpret("Plus = 3; 1 + 1").unwrap(), "2");
  }

  #[test]
  fn attributes_of_builtins() {
    assert_eq!(
      interpret("Attributes[Table]").unwrap(),
      "{HoldAll, Protected}"
    );
    assert_eq!(interpret("Attributes[myf]").unwrap(), "{}");
  }
}

mod pure_functions {
  use super::*;

  #[test]
  fn slots() {
    assert_eq!(interpret("(#^2 &)[3]").unwrap(), "9");
    assert_eq!(interpret("(#1 - #2 &)[5, 2]").unwrap(), "3");
  }

  #[test]
  fn named_parameters() {
    assert_eq!(interpret("Function[x, x + 1][2]").unwrap(), "3");
    assert_eq!(interpret("Function[{x, y}, x * y][3, 4]").unwrap(), "12");
  }

  #[test]
  fn hold_keeps_parts() {
    assert_eq!(interpret("Hold[1 + 1]").unwrap(), "Hold[Plus[1, 1]]");
  }
}
