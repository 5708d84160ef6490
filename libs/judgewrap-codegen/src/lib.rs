//! Driver-program generation for function-style judge problems.
//!
//! Pipeline: signature text → [`signature::parse_signature`] →
//! [`router::route`] → per-language [`emitter::WrapperEmitter`] → complete
//! program text. [`merger`] runs that pipeline per test case and builds the
//! batch handed to the execution engine.

pub mod emitter;
pub mod error;
pub mod merger;
pub mod router;
pub mod signature;


pub use error::{CodegenError, Result};
pub use merger::{merge_one, prepare_submissions, require_valid, validate_user_code};
pub use signature::{parse_signature, FunctionSignature, Parameter};
