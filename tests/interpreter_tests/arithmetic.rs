use super::*;

mod rationals {
  use super::*;

  #[test]
  fn reduces_to_lowest_terms() {
    assert_eq!(interpret("6/4").unwrap(), "3/2");
    assert_eq!(interpret("-6/4").unwrap(), "-3/2");
    assert_eq!(interpret("6/-4").unwrap(), "-3/2");
  }

  #[test]
  fn whole_quotients_become_integers() {
    assert_eq!(interpret("4/2").unwrap(), "2");
    assert_eq!(interpret("0/5").unwrap(), "0");
  }

  #[test]
  fn division_by_zero() {
    assert_eq!(interpret("1/0").unwrap(), "ComplexInfinity");
    assert_eq!(interpret("0/0").unwrap(), "Indeterminate");
    assert_eq!(interpret("Rational[-1, 0]").unwrap(), "ComplexInfinity");
  }

  #[test]
  fn rational_constructor() {
    assert_eq!(interpret("Rational[10, -4]").unwrap(), "-5/2");
    assert_eq!(interpret("Rational[3, 1]").unwrap(), "3");
    assert_eq!(interpret("Rational[x, 10]").unwrap(), "Rational[x, 10]");
  }

  #[test]
  fn sums_of_rationals() {
    assert_eq!(interpret("1/2 + 1/3").unwrap(), "5/6");
    assert_eq!(interpret("1/2 + 1/2").unwrap(), "1");
  }

  #[test]
  fn reevaluating_a_result_is_stable() {
    let first = interpret("10/4").unwrap();
    assert_eq!(interpret(&first).unwrap(), first);
  }
}

mod integers {
  use super::*;

  #[test]
  fn big_integers() {
    assert_eq!(
      interpret("2^100").unwrap(),
      "1267650600228229401496703205376"
    );
  }

  #[test]
  fn negative_exponents_give_rationals() {
    assert_eq!(interpret("2^-2").unwrap(), "1/4");
    assert_eq!(interpret("0^-1").unwrap(), "ComplexInfinity");
  }

  #[test]
  fn huge_powers_stay_symbolic() {
    assert_eq!(
      interpret("2^4000000000").unwrap(),
      "Power[2, 4000000000]"
    );
    assert_eq!(interpret("1^4000000000").unwrap(), "1");
  }

  #[test]
  fn subtraction_and_negation() {
    assert_eq!(interpret("10 - 3 - 2").unwrap(), "5");
    assert_eq!(interpret("-(2 * 3)").unwrap(), "-6");
  }
}

mod reals {
  use super::*;

  #[test]
  fn exact_and_real_mix_to_real() {
    assert_eq!(interpret("2.0 + 1").unwrap(), "3.");
    assert_eq!(interpret("1.0/3").unwrap(), "0.333333");
    assert_eq!(interpret("1/2 + 0.25").unwrap(), "0.75");
  }

  #[test]
  fn real_division_by_zero() {
    assert_eq!(interpret("1.5/0").unwrap(), "ComplexInfinity");
    assert_eq!(interpret("0.0/0").unwrap(), "Indeterminate");
  }
}

mod symbolic {
  use super::*;

  #[test]
  fn numbers_fold_and_symbols_remain() {
    assert_eq!(interpret("x + 2 + 3").unwrap(), "Plus[5, x]");
    assert_eq!(interpret("2 * x * 3").unwrap(), "Times[6, x]");
    assert_eq!(interpret("0 * x").unwrap(), "0");
    assert_eq!(interpret("x^0").unwrap(), "1");
  }

  #[test]
  fn symbolic_division_stays_unevaluated() {
    assert_eq!(interpret("x/y").unwrap(), "Divide[x, y]");
  }
}
