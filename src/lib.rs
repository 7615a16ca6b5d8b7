use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod functions;
pub mod syntax;

use evaluator::Session;
use syntax::{Expr, pair_to_expr, string_form};

#[derive(Parser)]
#[grammar = "wolfram.pest"]
pub struct WolframParser;

#[derive(Error, Debug)]
pub enum InterpreterError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
}

/// Result of one top-level evaluation together with the diagnostics it
/// produced.
#[derive(Debug, Clone)]
pub struct InterpretResult {
  pub result: String,
  pub warnings: Vec<String>,
}

impl WolframParser {
  pub fn parse_wolfram(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  WolframParser::parse_wolfram(input)
}

/// Parse source text into a single expression. Top-level lines become
/// separate statements of one `CompoundExpression`.
pub fn parse_expr(
  input: &str,
  precision: usize,
) -> Result<Expr, InterpreterError> {
  let source = insert_statement_separators(input.trim());
  let program = parse(&source)?
    .next()
    .ok_or(InterpreterError::EmptyInput)?;
  program
    .into_inner()
    .find(|pair| pair.as_rule() == Rule::CompoundExpression)
    .map(|pair| pair_to_expr(pair, precision))
    .ok_or(InterpreterError::EmptyInput)
}

pub fn without_shebang(src: &str) -> String {
  if src.starts_with("#!") {
    src.lines().skip(1).collect::<Vec<_>>().join("\n")
  } else {
    src.to_owned()
  }
}

/// Turn top-level line breaks into `;` so a script reads as one compound
/// expression. Newlines inside brackets, strings and comments are kept, as
/// are lines that already end in `;` or in an operator that continues on
/// the next line.
fn insert_statement_separators(input: &str) -> String {
  if !input.contains('\n') {
    return input.to_string();
  }

  let mut result = String::with_capacity(input.len() + 16);
  let mut depth: i32 = 0;
  let mut in_string = false;
  let mut in_comment = false;
  let mut last_code_char: Option<char> = None;
  let chars: Vec<char> = input.chars().collect();
  let mut i = 0;

  while i < chars.len() {
    let ch = chars[i];
    let next = chars.get(i + 1).copied();

    if !in_string && !in_comment && ch == '(' && next == Some('*') {
      in_comment = true;
      result.push_str("(*");
      i += 2;
      continue;
    }
    if in_comment {
      if ch == '*' && next == Some(')') {
        in_comment = false;
        result.push_str("*)");
        i += 2;
      } else {
        result.push(ch);
        i += 1;
      }
      continue;
    }

    if in_string {
      if ch == '\\' {
        if let Some(escaped) = next {
          result.push(ch);
          result.push(escaped);
          i += 2;
          continue;
        }
      }
      if ch == '"' {
        in_string = false;
      }
      result.push(ch);
      i += 1;
      continue;
    }

    match ch {
      '"' => in_string = true,
      '[' | '(' | '{' => depth += 1,
      ']' | ')' | '}' => depth -= 1,
      _ => {}
    }

    if ch == '\n' && depth == 0 {
      let continues = matches!(
        last_code_char,
        None | Some(';' | '=' | '+' | '-' | '*' | '/' | ',' | '>' | '&')
      );
      if !continues {
        result.push(';');
      }
      result.push('\n');
      last_code_char = None;
    } else {
      if !ch.is_whitespace() {
        last_code_char = Some(ch);
      }
      result.push(ch);
    }
    i += 1;
  }

  result
}

impl Session {
  /// Parse and evaluate `input` in this session, rendering the result in
  /// output form.
  pub fn interpret(
    &mut self,
    input: &str,
  ) -> Result<InterpretResult, InterpreterError> {
    let expr = parse_expr(input, self.config.precision_bits)?;
    let value = self.evaluate(&expr);
    Ok(InterpretResult {
      result: string_form(&value, self.output_form()),
      warnings: self.take_warnings(),
    })
  }
}

/// Evaluate `input` in a fresh session and return the output form of the
/// result.
pub fn interpret(input: &str) -> Result<String, InterpreterError> {
  Session::new().interpret(input).map(|r| r.result)
}
