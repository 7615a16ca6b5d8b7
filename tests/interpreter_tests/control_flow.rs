use super::*;

mod if_expression {
  use super::*;

  #[test]
  fn picks_branch() {
    assert_eq!(interpret("If[1 < 2, \"yes\", \"no\"]").unwrap(), "yes");
    assert_eq!(interpret("If[1 > 2, \"yes\", \"no\"]").unwrap(), "no");
  }

  #[test]
  fn only_the_taken_branch_runs() {
    assert_eq!(interpret("If[True, a = 1, a = 2]; a").unwrap(), "1");
  }

  #[test]
  fn undecidable_condition_stays_unevaluated() {
    assert_eq!(
      interpret("If[x == 1, a, b]").unwrap(),
      "If[Equal[x, 1], a, b]"
    );
  }

  #[test]
  fn pending_if_resolves_later() {
    assert_eq!(interpret("e := If[x == 1, a, b]; x = 1; e").unwrap(), "a");
  }
}

mod while_loop {
  use super::*;

  #[test]
  fn counts_up() {
    assert_eq!(
      interpret("n = 0; While[n < 5, n = n + 1]; n").unwrap(),
      "5"
    );
  }

  #[test]
  fn returns_null() {
    assert_eq!(interpret("While[False, 1]").unwrap(), "Null");
  }

  #[test]
  fn undecidable_test_is_an_error() {
    let result = interpret("While[x == 1, Null]").unwrap();
    assert!(result.starts_with("Error["), "got {result}");
    assert!(result.contains("Equal[x, 1]"));
  }
}

mod compound_expression {
  use super::*;

  #[test]
  fn returns_last_value() {
    assert_eq!(interpret("a = 1; b = 2; a + b").unwrap(), "3");
  }

  #[test]
  fn trailing_semicolon_gives_null() {
    assert_eq!(interpret("a = 1;").unwrap(), "Null");
  }

  #[test]
  fn newlines_separate_statements() {
    assert_eq!(interpret("a = 2\nb = 3\na * b").unwrap(), "6");
  }
}
