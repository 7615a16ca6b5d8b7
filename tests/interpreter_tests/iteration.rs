use super::*;

mod table {
  use super::*;

  #[test]
  fn single_iterator() {
    assert_eq!(interpret("Table[i^2, {i, 1, 4}]").unwrap(), "{1, 4, 9, 16}");
    assert_eq!(interpret("Table[i, {i, 3}]").unwrap(), "{1, 2, 3}");
    assert_eq!(interpret("Table[x, {i, 1, 3}]").unwrap(), "{x, x, x}");
  }

  #[test]
  fn empty_range() {
    assert_eq!(interpret("Table[i, {i, 1, 0}]").unwrap(), "{}");
  }

  #[test]
  fn loop_variable_does_not_leak() {
    assert_eq!(
      interpret("i = 99; Table[i, {i, 1, 3}]").unwrap(),
      "{1, 2, 3}"
    );
    assert_eq!(interpret("i = 99; Table[i, {i, 1, 3}]; i").unwrap(), "99");
    assert_eq!(interpret("Table[i, {i, 1, 3}]; i").unwrap(), "i");
  }

  #[test]
  fn bounds_are_evaluated() {
    assert_eq!(interpret("n = 3; Table[i, {i, 2, n}]").unwrap(), "{2, 3}");
  }

  #[test]
  fn symbolic_bound_stays_unevaluated() {
    assert_eq!(
      interpret("Table[i, {i, 1, n}]").unwrap(),
      "Table[i, {i, 1, n}]"
    );
  }

  #[test]
  fn several_iterators_nest() {
    assert_eq!(
      interpret("Table[{i, j}, {i, 1, 2}, {j, 1, 2}]").unwrap(),
      "{{{1, 1}, {1, 2}}, {{2, 1}, {2, 2}}}"
    );
    assert_eq!(
      interpret("Table[i + j, {i, 1, 2}, {j, 1, 3}]").unwrap(),
      "{{2, 3, 4}, {3, 4, 5}}"
    );
  }

  #[test]
  fn body_is_fresh_each_iteration() {
    assert_eq!(
      interpret("Table[If[i == 2, \"two\", i], {i, 1, 3}]").unwrap(),
      "{1, two, 3}"
    );
  }
}

mod sum_and_product {
  use super::*;

  #[test]
  fn sum() {
    assert_eq!(interpret("Sum[k, {k, 1, 5}]").unwrap(), "15");
    assert_eq!(interpret("Sum[1/k, {k, 1, 3}]").unwrap(), "11/6");
    assert_eq!(interpret("Sum[k, {k, 1, 0}]").unwrap(), "0");
  }

  #[test]
  fn product() {
    assert_eq!(interpret("Product[k, {k, 1, 4}]").unwrap(), "24");
    assert_eq!(interpret("Product[k, {k, 3, 2}]").unwrap(), "1");
  }

  #[test]
  fn several_iterators() {
    assert_eq!(interpret("Sum[i * j, {i, 1, 2}, {j, 1, 2}]").unwrap(), "9");
  }

  #[test]
  fn symbolic_terms() {
    assert_eq!(
      interpret("Sum[a[k], {k, 1, 3}]").unwrap(),
      "Plus[a[1], a[2], a[3]]"
    );
  }

  #[test]
  fn loop_variable_is_restored() {
    assert_eq!(interpret("k = 7; Sum[k, {k, 1, 3}]; k").unwrap(), "7");
  }
}

mod mapping {
  use super::*;

  #[test]
  fn map_pure_function() {
    assert_eq!(interpret("Map[#^2 &, {1, 2, 3}]").unwrap(), "{1, 4, 9}");
  }

  #[test]
  fn map_symbol() {
    assert_eq!(interpret("Map[f, {1, 2}]").unwrap(), "{f[1], f[2]}");
    assert_eq!(interpret("Map[f, g[a, b]]").unwrap(), "g[f[a], f[b]]");
    assert_eq!(interpret("Map[f, 5]").unwrap(), "5");
  }

  #[test]
  fn array() {
    assert_eq!(interpret("Array[f, 3]").unwrap(), "{f[1], f[2], f[3]}");
    assert_eq!(interpret("Array[# * 10 &, 2]").unwrap(), "{10, 20}");
    assert_eq!(interpret("Array[f, 0]").unwrap(), "{}");
  }

  #[test]
  fn length() {
    assert_eq!(interpret("Length[{1, 2, 3}]").unwrap(), "3");
    assert_eq!(interpret("Length[f[a, b]]").unwrap(), "2");
    assert_eq!(interpret("Length[x]").unwrap(), "0");
  }
}
