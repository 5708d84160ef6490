//! Function signature parsing.
//!
//! Two grammars are understood:
//! - typed, return-type first: `int[] twoSum(int[] nums, int target)`
//! - name-only, for JavaScript: `function addNumbers(a, b)`
//!
//! Type spellings are kept verbatim here; each emitter decides which of them
//! it can read and print.

use judgewrap_common::Language;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::{CodegenError, Result};

/// Type assigned to every parameter (and the return value) of a name-only signature
pub const NAME_ONLY_DEFAULT_TYPE: &str = "number";

lazy_static! {
    static ref TYPED_SIGNATURE: Regex =
        Regex::new(r"^\s*(.+?)\s+([A-Za-z_]\w*)\s*\(([^)]*)\)").expect("valid typed signature regex");
    static ref NAME_ONLY_SIGNATURE: Regex =
        Regex::new(r"^\s*function\s+([A-Za-z_$][\w$]*)\s*\(([^)]*)\)").expect("valid name-only signature regex");
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_$][\w$]*$").expect("valid identifier regex");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// Parsed signature. `parameters` is in declaration order, which is also the
/// order arguments are bound and input tokens are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub return_type: String,
    pub function_name: String,
    pub parameters: Vec<Parameter>,
}

impl FunctionSignature {
    /// Comma-separated argument list for the invocation expression
    pub fn call_args(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    Typed,
    NameOnly,
}

impl SignatureStyle {
    /// JavaScript problems may use either `function f(a, b)` or a typed
    /// `number f(number a, number b)` form; every other family is typed.
    pub fn detect(text: &str, language: Language) -> Self {
        match language {
            Language::JavaScript if text.trim_start().starts_with("function") => SignatureStyle::NameOnly,
            _ => SignatureStyle::Typed,
        }
    }
}

pub fn parse_signature(text: &str, language: Language) -> Result<FunctionSignature> {
    parse_with_style(text, SignatureStyle::detect(text, language))
}

pub fn parse_with_style(text: &str, style: SignatureStyle) -> Result<FunctionSignature> {
    match style {
        SignatureStyle::Typed => parse_typed(text),
        SignatureStyle::NameOnly => parse_name_only(text),
    }
}

fn parse_typed(text: &str) -> Result<FunctionSignature> {
    let caps = TYPED_SIGNATURE
        .captures(text)
        .ok_or_else(|| malformed(text))?;

    let return_type = normalize_spaces(&caps[1]);
    let function_name = caps[2].to_string();

    let mut parameters = Vec::new();
    for raw in split_params(&caps[3]) {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        // Last word is the name, everything before it is the type
        let (name, type_parts) = match parts.split_last() {
            Some((name, type_parts)) if !type_parts.is_empty() => (name, type_parts),
            _ => return Err(malformed(text)),
        };
        parameters.push(Parameter::new(type_parts.join(" "), *name));
    }

    Ok(FunctionSignature {
        return_type,
        function_name,
        parameters,
    })
}

fn parse_name_only(text: &str) -> Result<FunctionSignature> {
    let caps = NAME_ONLY_SIGNATURE
        .captures(text)
        .ok_or_else(|| malformed(text))?;

    let function_name = caps[1].to_string();

    let mut parameters = Vec::new();
    for raw in split_params(&caps[2]) {
        let name = raw.trim();
        if !IDENTIFIER.is_match(name) {
            return Err(malformed(text));
        }
        parameters.push(Parameter::new(NAME_ONLY_DEFAULT_TYPE, name));
    }

    Ok(FunctionSignature {
        return_type: NAME_ONLY_DEFAULT_TYPE.to_string(),
        function_name,
        parameters,
    })
}

/// Split a parameter list on top-level commas, so `Map<String, Integer> m`
/// stays one parameter. An empty or blank list yields no parameters.
fn split_params(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in list.char_indices() {
        match ch {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&list[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}

fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn malformed(text: &str) -> CodegenError {
    CodegenError::MalformedSignature(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typed_three_ints() {
        let sig = parse_signature("int sumOfThree(int a, int b, int c)", Language::Java).unwrap();

        assert_eq!(sig.return_type, "int");
        assert_eq!(sig.function_name, "sumOfThree");
        assert_eq!(
            sig.parameters,
            vec![
                Parameter::new("int", "a"),
                Parameter::new("int", "b"),
                Parameter::new("int", "c"),
            ]
        );
        assert_eq!(sig.call_args(), "a, b, c");
    }

    #[test]
    fn test_zero_parameters() {
        let sig = parse_signature("int answer()", Language::Cpp).unwrap();
        assert_eq!(sig.function_name, "answer");
        assert!(sig.parameters.is_empty());

        let sig = parse_signature("int answer(   )", Language::Java).unwrap();
        assert!(sig.parameters.is_empty());
        assert_eq!(sig.call_args(), "");
    }

    #[test]
    fn test_array_types() {
        let sig = parse_signature("int[] twoSum(int[] nums, int target)", Language::Java).unwrap();
        assert_eq!(sig.return_type, "int[]");
        assert_eq!(sig.parameters[0], Parameter::new("int[]", "nums"));
        assert_eq!(sig.parameters[1], Parameter::new("int", "target"));
    }

    #[test]
    fn test_multi_word_types() {
        let sig = parse_signature(
            "long long total(long long   x, vector< int > values)",
            Language::Cpp,
        )
        .unwrap();

        assert_eq!(sig.return_type, "long long");
        assert_eq!(sig.function_name, "total");
        assert_eq!(sig.parameters[0], Parameter::new("long long", "x"));
        assert_eq!(sig.parameters[1], Parameter::new("vector< int >", "values"));
    }

    #[test]
    fn test_generic_with_comma_stays_one_parameter() {
        let sig = parse_signature("int count(Map<String, Integer> freq, int k)", Language::Java).unwrap();
        assert_eq!(sig.parameters.len(), 2);
        assert_eq!(sig.parameters[0], Parameter::new("Map<String, Integer>", "freq"));
    }

    #[test]
    fn test_name_only() {
        let sig = parse_signature("function addNumbers(a, b)", Language::JavaScript).unwrap();

        assert_eq!(sig.return_type, NAME_ONLY_DEFAULT_TYPE);
        assert_eq!(sig.function_name, "addNumbers");
        assert_eq!(
            sig.parameters,
            vec![Parameter::new("number", "a"), Parameter::new("number", "b")]
        );
    }

    #[test]
    fn test_name_only_empty() {
        let sig = parse_signature("function noop()", Language::JavaScript).unwrap();
        assert!(sig.parameters.is_empty());
    }

    #[test]
    fn test_javascript_typed_form() {
        let sig = parse_signature("number addNumbers(number a, number b)", Language::JavaScript).unwrap();
        assert_eq!(sig.parameters[1], Parameter::new("number", "b"));
    }

    #[test]
    fn test_malformed() {
        for text in ["sumOfThree(int a)", "int sumOfThree", "", "int f(int a, b)"] {
            let err = parse_signature(text, Language::Java).unwrap_err();
            assert_eq!(err, CodegenError::MalformedSignature(text.to_string()));
        }
    }

    #[test]
    fn test_name_only_malformed() {
        assert!(parse_signature("function (a, b)", Language::JavaScript).is_err());
        assert!(parse_signature("function f(a, , b)", Language::JavaScript).is_err());
    }

    #[test]
    fn test_function_keyword_only_special_for_javascript() {
        // In a typed family `function` is just a return type spelling
        let sig = parse_signature("function f(int a)", Language::Java).unwrap();
        assert_eq!(sig.return_type, "function");
    }
}
