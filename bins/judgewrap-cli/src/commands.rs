// CLI commands: thin wrappers that load files and call into judgewrap-codegen
use anyhow::{Context, Result};
use judgewrap_codegen::router::resolve_language;
use judgewrap_codegen::{merge_one, parse_signature, prepare_submissions, require_valid, validate_user_code};
use judgewrap_common::types::Problem;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::LanguageConfigManager;

/// Load a problem document (JSON)
fn load_problem(path: &Path) -> Result<Problem> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read problem file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse problem file {}", path.display()))
}

fn read_code(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read code file {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<LanguageConfigManager> {
    match path {
        Some(path) => LanguageConfigManager::load(path),
        None => LanguageConfigManager::load_default(),
    }
}

/// Print the parsed form of a signature
pub fn parse_signature_command(language: &str, signature: &str) -> Result<()> {
    let language = resolve_language(language)?;
    let parsed = parse_signature(signature, language)?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// Print the merged program for a single input.
/// Without `--input` the first visible test case is used.
pub fn wrap(problem_path: &Path, code_path: &Path, language: &str, input: Option<&str>) -> Result<()> {
    let problem = load_problem(problem_path)?;
    let code = read_code(code_path)?;

    let input = match input {
        Some(input) => input.to_string(),
        None => problem
            .visible_test_cases
            .first()
            .map(|tc| tc.input.clone())
            .unwrap_or_default(),
    };

    let program = merge_one(&code, language, &problem.function_metadata, &input)
        .with_context(|| format!("Failed to generate {} wrapper for '{}'", language, problem.title))?;

    print!("{}", program);
    Ok(())
}

/// Validate, then print the engine batch for the problem's run (or submit) cases
pub fn prepare(
    config_path: Option<&Path>,
    problem_path: &Path,
    code_path: &Path,
    language: &str,
    submit: bool,
    language_id: Option<u32>,
) -> Result<()> {
    let problem = load_problem(problem_path)?;
    let code = read_code(code_path)?;

    require_valid(validate_user_code(&code, language))?;

    let language_id = match language_id {
        Some(id) => id,
        None => {
            let config = load_config(config_path)?;
            config.language_id(&resolve_language(language)?)?
        }
    };

    let test_cases = if submit {
        problem.submit_cases()
    } else {
        problem.run_cases()
    };

    let mode = if submit { "submit" } else { "run" };
    info!(
        problem = %problem.title,
        mode,
        test_cases = test_cases.len(),
        "Preparing submissions"
    );

    let submissions = prepare_submissions(&code, language, &test_cases, &problem.function_metadata, language_id)
        .with_context(|| format!("Failed to prepare submissions for '{}'", problem.title))?;

    println!("{}", serde_json::to_string_pretty(&submissions)?);
    Ok(())
}

/// Print the validation result; returns whether the code passed
pub fn validate(code_path: &Path, language: &str) -> Result<bool> {
    let code = read_code(code_path)?;
    let result = validate_user_code(&code, language);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.is_valid)
}

/// List configured languages and their engine ids
pub fn list_languages(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    for lang in config.list_languages() {
        println!(
            "{:<12} id={:<4} ext={:<6} {}",
            lang.name, lang.language_id, lang.file_extension, lang.version
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const PROBLEM: &str = r#"{
        "title": "Sum of Three",
        "visibleTestCases": [{"input": "2 3 4", "output": "9", "explanation": "2 + 3 + 4"}],
        "hiddenTestCases": [{"input": "0 0 0", "output": "0"}],
        "functionMetadata": {
            "functionName": "sumOfThree",
            "functionSignature": {"java": "int sumOfThree(int a, int b, int c)"}
        }
    }"#;

    #[test]
    fn test_load_problem() {
        let file = write_file(PROBLEM);
        let problem = load_problem(file.path()).unwrap();
        assert_eq!(problem.submit_cases().len(), 2);
    }

    #[test]
    fn test_load_problem_bad_json() {
        let file = write_file("{ not json");
        let err = load_problem(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse problem file"));
    }

    #[test]
    fn test_prepare_rejects_invalid_code() {
        let problem = write_file(PROBLEM);
        let code = write_file("public int sumOfThree(int a, int b, int c) { return a + b + c; }");

        let err = prepare(None, problem.path(), code.path(), "java", false, Some(62)).unwrap_err();
        assert!(err.to_string().contains("\"Solution\" class"));
    }

    #[test]
    fn test_prepare_missing_signature() {
        let problem = write_file(PROBLEM);
        let code = write_file("class Solution {};");

        let err = prepare(None, problem.path(), code.path(), "cpp", true, Some(54)).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Function signature not found for language: cpp"));
    }

    #[test]
    fn test_validate_command() {
        let code = write_file("class Solution {}");
        assert!(validate(code.path(), "java").unwrap());
        assert!(!validate(code.path(), "python").unwrap());
    }

    #[test]
    fn test_parse_signature_command_errors() {
        assert!(parse_signature_command("java", "int f(int a)").is_ok());
        assert!(parse_signature_command("ruby", "def f(a)").is_err());
        assert!(parse_signature_command("java", "f(int a)").is_err());
    }
}
