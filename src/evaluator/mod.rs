pub use crate::syntax::Expr;

mod assignment;
mod attributes;
mod core_eval;
mod dispatch;
mod equality;
mod pattern_functions;
mod pattern_matching;
mod scoping;
mod session;

pub use assignment::*;
pub use attributes::*;
pub use dispatch::*;
pub use equality::*;
pub use pattern_functions::*;
pub use pattern_matching::*;
pub use scoping::*;
pub use session::*;
