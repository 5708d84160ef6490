//! Per-language wrapper emitters.
//!
//! Each emitter turns a parsed signature plus the user's code into a complete
//! program: boilerplate, the user's code, one input-reading block per
//! parameter (in declaration order), then the invocation and printing of the
//! result. Emitters are stateless unit structs; emission is pure string
//! composition.

pub mod cpp;
pub mod java;
pub mod javascript;

use judgewrap_common::Language;

use crate::error::{CodegenError, Result};
use crate::signature::{FunctionSignature, Parameter};

pub use cpp::CppEmitter;
pub use java::JavaEmitter;
pub use javascript::JavaScriptEmitter;

pub trait WrapperEmitter {
    fn language(&self) -> Language;

    /// Build the full program for `signature` around `user_code`.
    ///
    /// The program reads its test input from stdin, so the same text is valid
    /// for every test case of a problem.
    fn emit(&self, user_code: &str, signature: &FunctionSignature) -> Result<String>;
}

/// How the return value is surfaced on stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReturnShape {
    /// Call for side effects only
    Void,
    /// Flat array of scalars, elements joined by single spaces; carries the
    /// declared type spelling
    Array(String),
    Scalar,
}

pub(crate) fn unsupported(language: Language, param: &Parameter) -> CodegenError {
    CodegenError::UnsupportedParameterType {
        language,
        parameter: param.name.clone(),
        type_name: param.type_name.clone(),
    }
}

pub(crate) fn unsupported_return(language: Language, type_name: &str) -> CodegenError {
    CodegenError::UnsupportedReturnType {
        language,
        type_name: type_name.to_string(),
    }
}

/// Allocates driver-local identifiers that cannot collide with the
/// user's function or parameter names. Deterministic for a given signature.
pub(crate) struct LocalNames {
    taken: Vec<String>,
}

impl LocalNames {
    pub(crate) fn new(signature: &FunctionSignature) -> Self {
        let mut taken = vec![signature.function_name.clone()];
        taken.extend(signature.parameters.iter().map(|p| p.name.clone()));
        Self { taken }
    }

    pub(crate) fn fresh(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        while self.taken.contains(&name) {
            name.push('_');
        }
        self.taken.push(name.clone());
        name
    }
}

/// Type spelling with all whitespace removed, so `vector< int >` and
/// `vector<int>` resolve alike. Multi-word scalars keep one space.
pub(crate) fn compact_type(type_name: &str) -> String {
    let words: Vec<&str> = type_name.split_whitespace().collect();
    let joined = words.join(" ");
    if joined.contains(['<', '>', '[', ']']) {
        joined.replace(' ', "")
    } else {
        joined
    }
}
