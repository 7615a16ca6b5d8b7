use super::*;

mod state {
  use super::*;

  #[test]
  fn definitions_persist_across_inputs() {
    let mut session = Session::new();
    session.interpret("square[x_] := x^2").unwrap();
    assert_eq!(session.interpret("square[7]").unwrap().result, "49");
  }

  #[test]
  fn fresh_interpret_calls_are_isolated() {
    assert_eq!(interpret("y = 1").unwrap(), "1");
    assert_eq!(interpret("y").unwrap(), "y");
  }

  #[test]
  fn protected_assignment_warns() {
    let mut session = Session::new();
    let outcome = session.interpret("Plus = 3").unwrap();
    assert_eq!(outcome.result, "3");
    assert_eq!(
      outcome.warnings,
      vec!["Set::wrsym: Symbol Plus is Protected.".to_string()]
    );
  }

  #[test]
  fn parse_errors_are_reported() {
    assert!(interpret("f[").is_err());
    assert!(interpret("").is_err());
  }
}

mod limits {
  use super::*;

  #[test]
  fn iteration_limit_holds_the_term() {
    let mut session = Session::with_config(SessionConfig {
      iteration_limit: 50,
      ..SessionConfig::default()
    });
    let outcome = session.interpret("f[n_] := f[n + 1]; f[1]").unwrap();
    assert!(outcome.result.starts_with("Hold[f["), "{}", outcome.result);
    assert_eq!(
      outcome.warnings,
      vec!["$IterationLimit::itlim: Iteration limit of 50 exceeded."]
    );
  }

  #[test]
  fn recursion_limit_holds_the_term() {
    let mut session = Session::with_config(SessionConfig {
      recursion_limit: 60,
      ..SessionConfig::default()
    });
    let outcome = session.interpret("g[n_] := 1 + g[n + 1]; g[1]").unwrap();
    assert!(outcome.result.contains("Hold[g["), "{}", outcome.result);
    assert_eq!(
      outcome.warnings,
      vec!["$RecursionLimit::reclim: Recursion depth of 60 exceeded."]
    );
  }
}

mod config {
  use super::*;

  #[test]
  fn display_digits() {
    let mut session = Session::with_config(SessionConfig {
      display_digits: 10,
      ..SessionConfig::default()
    });
    assert_eq!(session.interpret("1.0/3").unwrap().result, "0.3333333333");
  }

  #[test]
  fn precision_bits_apply_to_literals() {
    let mut session = Session::with_config(SessionConfig {
      precision_bits: 64,
      ..SessionConfig::default()
    });
    assert_eq!(session.interpret("0.5 + 1/4").unwrap().result, "0.75");
  }
}
