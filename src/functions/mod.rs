// Built-in evaluators, grouped by category
pub mod control_flow_ast;
pub mod list_helpers_ast;
pub mod math_ast;
pub mod predicate_ast;
