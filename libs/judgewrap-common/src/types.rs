use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language::Language;

/// One (input, expected output) pair. Visible cases carry an explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TestCase {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            explanation: None,
        }
    }
}

/// Per-problem function metadata authored by the problem setter.
///
/// Signatures are keyed by [`Language::signature_key`], e.g.
/// `{"java": "int sumOfThree(int a, int b, int c)", "javascript": "function sumOfThree(a, b, c)"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMetadata {
    #[serde(default)]
    pub function_name: String,
    #[serde(default)]
    pub function_signature: BTreeMap<String, String>,
    #[serde(default)]
    pub return_type: BTreeMap<String, String>,
}

impl FunctionMetadata {
    /// Signature text for a language; blank entries count as missing
    pub fn signature_for(&self, language: Language) -> Option<&str> {
        lookup(&self.function_signature, language)
    }

    pub fn return_type_for(&self, language: Language) -> Option<&str> {
        lookup(&self.return_type, language)
    }
}

fn lookup(map: &BTreeMap<String, String>, language: Language) -> Option<&str> {
    map.get(language.signature_key())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// The slice of a problem document the wrapper pipeline reads.
/// Unrelated fields (description, difficulty, tags...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub function_metadata: FunctionMetadata,
    #[serde(default)]
    pub visible_test_cases: Vec<TestCase>,
    #[serde(default)]
    pub hidden_test_cases: Vec<TestCase>,
}

impl Problem {
    /// Cases used for a "run" attempt
    pub fn run_cases(&self) -> Vec<TestCase> {
        self.visible_test_cases.clone()
    }

    /// Cases used for a full submission: visible first, then hidden
    pub fn submit_cases(&self) -> Vec<TestCase> {
        self.visible_test_cases
            .iter()
            .chain(self.hidden_test_cases.iter())
            .cloned()
            .collect()
    }
}

/// One element of an execution-engine batch submission.
/// Field names are the engine's wire format and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub source_code: String,
    pub language_id: u32,
    pub stdin: String,
    pub expected_output: String,
}

/// Outcome of the pre-flight structural check on user code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}
