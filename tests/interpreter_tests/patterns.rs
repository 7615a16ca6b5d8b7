use super::*;

mod match_q {
  use super::*;

  #[test]
  fn blanks() {
    assert_eq!(interpret("MatchQ[5, _]").unwrap(), "True");
    assert_eq!(interpret("MatchQ[5, _Integer]").unwrap(), "True");
    assert_eq!(interpret("MatchQ[5, _String]").unwrap(), "False");
    assert_eq!(interpret("MatchQ[f[1], _f]").unwrap(), "True");
  }

  #[test]
  fn repeated_names_must_agree() {
    assert_eq!(interpret("MatchQ[f[1, 1], f[x_, x_]]").unwrap(), "True");
    assert_eq!(interpret("MatchQ[f[1, 2], f[x_, x_]]").unwrap(), "False");
  }

  #[test]
  fn repeated_names_compare_held_patterns_as_data() {
    assert_eq!(
      interpret("MatchQ[f[Hold[_], Hold[1]], f[x_, x_]]").unwrap(),
      "False"
    );
    assert_eq!(
      interpret("MatchQ[f[Hold[1], Hold[_]], f[x_, x_]]").unwrap(),
      "False"
    );
    assert_eq!(
      interpret("MatchQ[f[Hold[_], Hold[_]], f[x_, x_]]").unwrap(),
      "True"
    );
  }

  #[test]
  fn arity_must_agree() {
    assert_eq!(interpret("MatchQ[f[1, 2], f[x_]]").unwrap(), "False");
  }

  #[test]
  fn rational_against_division_pattern() {
    assert_eq!(
      interpret("MatchQ[2/3, a_Integer/b_Integer]").unwrap(),
      "True"
    );
    assert_eq!(interpret("MatchQ[Rational[1, 2], 1/2]").unwrap(), "True");
  }

  #[test]
  fn literal_uses_equality() {
    assert_eq!(interpret("MatchQ[2, 2.0]").unwrap(), "True");
    assert_eq!(interpret("MatchQ[\"a\", \"a\"]").unwrap(), "True");
  }
}

mod replace_all {
  use super::*;

  #[test]
  fn captures_rational_parts() {
    assert_eq!(
      interpret("2/3 /. a_Integer/b_Integer -> {a, b}").unwrap(),
      "{2, 3}"
    );
  }

  #[test]
  fn replaces_inside_lists() {
    assert_eq!(
      interpret("{1, \"a\", 2} /. x_Integer -> x + 1").unwrap(),
      "{2, a, 3}"
    );
  }

  #[test]
  fn list_of_rules() {
    assert_eq!(
      interpret("{a, b, c} /. {a -> 1, b -> 2}").unwrap(),
      "{1, 2, c}"
    );
  }

  #[test]
  fn delayed_rule() {
    assert_eq!(interpret("f[3] /. f[x_] :> x^2").unwrap(), "9");
  }

  #[test]
  fn subject_patterns_never_capture() {
    assert_eq!(
      interpret("f[Hold[y_], Hold[7]] /. f[x_, x_] -> {x, y}").unwrap(),
      "f[Hold[Pattern[y, Blank[]]], Hold[7]]"
    );
  }

  #[test]
  fn outermost_match_wins() {
    assert_eq!(interpret("f[f[1]] /. f[x_] -> x").unwrap(), "f[1]");
  }
}

mod cases_and_member_q {
  use super::*;

  #[test]
  fn cases() {
    assert_eq!(
      interpret("Cases[{1, \"a\", 2.5, 3}, _Integer]").unwrap(),
      "{1, 3}"
    );
    assert_eq!(
      interpret("Cases[{f[1], g[2], f[3]}, f[_]]").unwrap(),
      "{f[1], f[3]}"
    );
  }

  #[test]
  fn cases_needs_a_list() {
    assert_eq!(interpret("Cases[x, _]").unwrap(), "Cases[x, Blank[]]");
  }

  #[test]
  fn member_q() {
    assert_eq!(interpret("MemberQ[{1, 2, 3}, 2]").unwrap(), "True");
    assert_eq!(interpret("MemberQ[{1, 2, 3}, _String]").unwrap(), "False");
    assert_eq!(interpret("MemberQ[5, 5]").unwrap(), "False");
  }
}
