use super::*;

mod equal {
  use super::*;

  #[test]
  fn exact_against_real() {
    assert_eq!(interpret("2 == 2.0").unwrap(), "True");
    assert_eq!(interpret("2 == 2.5").unwrap(), "False");
    assert_eq!(interpret("1/2 == 0.5").unwrap(), "True");
  }

  #[test]
  fn rational_never_equals_integer() {
    assert_eq!(interpret("1/2 == 1").unwrap(), "False");
  }

  #[test]
  fn strings() {
    assert_eq!(interpret("\"a\" == \"a\"").unwrap(), "True");
    assert_eq!(interpret("\"a\" == \"b\"").unwrap(), "False");
  }

  #[test]
  fn unknown_symbols_stay_unevaluated() {
    assert_eq!(interpret("x == 1").unwrap(), "Equal[x, 1]");
    assert_eq!(interpret("x == x").unwrap(), "True");
  }

  #[test]
  fn unequal() {
    assert_eq!(interpret("1 != 2").unwrap(), "True");
    assert_eq!(interpret("1 != 1.0").unwrap(), "False");
  }
}

mod ordering {
  use super::*;

  #[test]
  fn chains() {
    assert_eq!(interpret("1 < 2 < 3").unwrap(), "True");
    assert_eq!(interpret("1 < 3 < 2").unwrap(), "False");
    assert_eq!(interpret("1/3 <= 0.5").unwrap(), "True");
    assert_eq!(interpret("3 >= 3").unwrap(), "True");
  }

  #[test]
  fn symbolic_operands_stay_unevaluated() {
    assert_eq!(interpret("x > 1").unwrap(), "Greater[x, 1]");
  }
}

mod identity {
  use super::*;

  #[test]
  fn same_q_is_structural() {
    assert_eq!(interpret("2 === 2.0").unwrap(), "False");
    assert_eq!(interpret("f[x] === f[x]").unwrap(), "True");
    assert_eq!(interpret("1 =!= 2").unwrap(), "True");
  }

  #[test]
  fn held_rational_forms_are_distinct() {
    assert_eq!(
      interpret("Hold[Rational[1, 2]] === Hold[1/2]").unwrap(),
      "False"
    );
  }
}

mod predicates {
  use super::*;

  #[test]
  fn type_tests() {
    assert_eq!(interpret("NumberQ[1/2]").unwrap(), "True");
    assert_eq!(interpret("NumberQ[x]").unwrap(), "False");
    assert_eq!(interpret("IntegerQ[4/2]").unwrap(), "True");
    assert_eq!(interpret("StringQ[\"abc\"]").unwrap(), "True");
  }

  #[test]
  fn heads() {
    assert_eq!(interpret("Head[1/2]").unwrap(), "Rational");
    assert_eq!(interpret("Head[2.5]").unwrap(), "Real");
    assert_eq!(interpret("Head[\"s\"]").unwrap(), "String");
    assert_eq!(interpret("Head[f[x]]").unwrap(), "f");
    assert_eq!(interpret("Head[{1}]").unwrap(), "List");
  }
}
