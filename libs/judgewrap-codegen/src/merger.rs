//! Merging user code with generated drivers.
//!
//! This is the boundary callers use: one program per (user code, test case),
//! a batch of engine submissions per attempt, and a cheap pre-flight check on
//! the user's code.

use judgewrap_common::types::{FunctionMetadata, SubmissionRequest, TestCase, ValidationResult};
use judgewrap_common::Language;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info};

use crate::error::{CodegenError, Result};
use crate::router::{resolve_language, route};
use crate::signature::parse_signature;

lazy_static! {
    static ref JAVA_SOLUTION_CLASS: Regex =
        Regex::new(r"\bclass\s+Solution\b").expect("valid Java solution regex");
    // The driver's `Main` is the file's only public class
    static ref JAVA_PUBLIC_SOLUTION: Regex =
        Regex::new(r"\bpublic\s+(?:(?:final|abstract)\s+)*class\s+Solution\b")
            .expect("valid Java public solution regex");
    static ref CPP_SOLUTION_CLASS: Regex =
        Regex::new(r"\b(?:class|struct)\s+Solution\b").expect("valid C++ solution regex");
}

/// Build the complete program for one test case.
///
/// Failures are logged here once and returned unchanged.
pub fn merge_one(
    user_code: &str,
    language_name: &str,
    metadata: &FunctionMetadata,
    test_input: &str,
) -> Result<String> {
    merge(user_code, language_name, metadata, test_input).map_err(|e| {
        error!(language = %language_name, error = %e, "Error merging code");
        e
    })
}

fn merge(
    user_code: &str,
    language_name: &str,
    metadata: &FunctionMetadata,
    test_input: &str,
) -> Result<String> {
    let language = resolve_language(language_name)?;
    let signature_text = metadata
        .signature_for(language)
        .ok_or_else(|| CodegenError::SignatureNotFound(language_name.to_string()))?;
    let signature = parse_signature(signature_text, language)?;

    route(language_name, user_code, &signature, test_input)
}

/// One engine submission per test case, in test-case order.
///
/// Each request pairs the program with that case's own input and expected
/// output. The first failing merge aborts the whole batch.
pub fn prepare_submissions(
    user_code: &str,
    language_name: &str,
    test_cases: &[TestCase],
    metadata: &FunctionMetadata,
    language_id: u32,
) -> Result<Vec<SubmissionRequest>> {
    let submissions = test_cases
        .iter()
        .map(|test_case| {
            let source_code = merge_one(user_code, language_name, metadata, &test_case.input)?;
            Ok(SubmissionRequest {
                source_code,
                language_id,
                stdin: test_case.input.clone(),
                expected_output: test_case.output.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        language = %language_name,
        language_id,
        test_cases = submissions.len(),
        "Submissions prepared"
    );

    Ok(submissions)
}

/// Structural pre-check. Passing it does not mean the code compiles; it only
/// catches a missing `Solution` container before an engine call is spent.
pub fn validate_user_code(user_code: &str, language_name: &str) -> ValidationResult {
    if user_code.trim().is_empty() {
        return ValidationResult::invalid("Code cannot be empty");
    }

    match Language::from_name(language_name) {
        Some(Language::Java) if !JAVA_SOLUTION_CLASS.is_match(user_code) => {
            ValidationResult::invalid("Java code must contain a \"Solution\" class")
        }
        Some(Language::Java) if JAVA_PUBLIC_SOLUTION.is_match(user_code) => {
            ValidationResult::invalid("Java \"Solution\" class must not be declared public")
        }
        Some(Language::Cpp) if !CPP_SOLUTION_CLASS.is_match(user_code) => {
            ValidationResult::invalid("C++ code must contain a \"Solution\" class")
        }
        // JavaScript accepts a bare function or a class
        Some(_) => ValidationResult::ok(),
        None => ValidationResult::invalid(CodegenError::UnsupportedLanguage(language_name.to_string()).to_string()),
    }
}

/// Turn a failed pre-check into [`CodegenError::InvalidUserCode`]
pub fn require_valid(validation: ValidationResult) -> Result<()> {
    match validation {
        ValidationResult { is_valid: true, .. } => Ok(()),
        ValidationResult { error, .. } => Err(CodegenError::InvalidUserCode(
            error.unwrap_or_else(|| "Invalid code".to_string()),
        )),
    }
}
