use judgewrap_common::Language;
use tracing::debug;

use crate::emitter::{CppEmitter, JavaEmitter, JavaScriptEmitter, WrapperEmitter};
use crate::error::{CodegenError, Result};
use crate::signature::FunctionSignature;

/// Resolve a language display name (`Java`, `C++`, `cpp`, `javascript`...)
pub fn resolve_language(name: &str) -> Result<Language> {
    Language::from_name(name).ok_or_else(|| CodegenError::UnsupportedLanguage(name.to_string()))
}

pub fn emitter_for(language: Language) -> &'static dyn WrapperEmitter {
    match language {
        Language::Java => &JavaEmitter,
        Language::Cpp => &CppEmitter,
        Language::JavaScript => &JavaScriptEmitter,
    }
}

/// Generate the complete program for `language_name`.
///
/// `test_input` is not embedded in the program (the driver reads stdin); it
/// is only traced so a generated program can be matched to its case in logs.
pub fn route(
    language_name: &str,
    user_code: &str,
    signature: &FunctionSignature,
    test_input: &str,
) -> Result<String> {
    let language = resolve_language(language_name)?;
    let program = emitter_for(language).emit(user_code, signature)?;

    debug!(
        language = %language,
        function = %signature.function_name,
        params = signature.parameters.len(),
        input_tokens = test_input.split_whitespace().count(),
        program_bytes = program.len(),
        "Wrapper generated"
    );

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::parse_signature;

    #[test]
    fn test_route_by_alias() {
        let sig = parse_signature("int f(int a)", Language::Cpp).unwrap();

        let from_display = route("C++", "class Solution {};", &sig, "1").unwrap();
        let from_key = route("cpp", "class Solution {};", &sig, "1").unwrap();

        assert_eq!(from_display, from_key);
        assert!(from_key.starts_with("#include <iostream>"));
    }

    #[test]
    fn test_route_case_insensitive() {
        let sig = parse_signature("int f(int a)", Language::Java).unwrap();
        let program = route("JAVA", "class Solution {}", &sig, "1").unwrap();
        assert!(program.contains("public class Main"));
    }

    #[test]
    fn test_unsupported_language() {
        let sig = parse_signature("int f(int a)", Language::Java).unwrap();
        let err = route("python", "", &sig, "").unwrap_err();
        assert_eq!(err, CodegenError::UnsupportedLanguage("python".to_string()));
    }

    #[test]
    fn test_emitter_languages() {
        for language in Language::all() {
            assert_eq!(emitter_for(language).language(), language);
        }
    }
}
