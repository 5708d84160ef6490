use judgewrap_common::Language;

use super::{compact_type, unsupported, unsupported_return, LocalNames, ReturnShape, WrapperEmitter};
use crate::error::{CodegenError, Result};
use crate::signature::{FunctionSignature, Parameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsType {
    Number,
    Str,
    NumberArray,
    StringArray,
}

impl JsType {
    fn resolve(param: &Parameter) -> Result<Self> {
        match compact_type(&param.type_name).as_str() {
            "number" => Ok(JsType::Number),
            "string" => Ok(JsType::Str),
            "number[]" => Ok(JsType::NumberArray),
            "string[]" => Ok(JsType::StringArray),
            _ => Err(unsupported(Language::JavaScript, param)),
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, JsType::NumberArray | JsType::StringArray)
    }
}

fn return_shape(return_type: &str) -> Result<ReturnShape> {
    let compact = compact_type(return_type);
    if compact == "void" {
        return Ok(ReturnShape::Void);
    }
    match compact.strip_suffix("[]") {
        Some("number") | Some("string") => Ok(ReturnShape::Array(compact)),
        Some(_) => Err(unsupported_return(Language::JavaScript, return_type)),
        None => Ok(ReturnShape::Scalar),
    }
}

/// Emits a top-level script: all of stdin is split on whitespace and each
/// parameter binds the token at its position.
///
/// Array parameters take every remaining token (`values.slice(i)`), so only
/// the last parameter may be an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptEmitter;

impl WrapperEmitter for JavaScriptEmitter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn emit(&self, user_code: &str, signature: &FunctionSignature) -> Result<String> {
        let mut names = LocalNames::new(signature);
        let input = names.fresh("input");
        let values = names.fresh("values");
        let result = names.fresh("result");

        let last = signature.parameters.len().saturating_sub(1);
        let mut input_parsing = format!(
            "const {input} = require('fs').readFileSync(0, 'utf-8').trim();\n\
             const {values} = {input}.length > 0 ? {input}.split(/\\s+/) : [];\n"
        );
        for (idx, param) in signature.parameters.iter().enumerate() {
            let var = &param.name;
            let ty = JsType::resolve(param)?;
            if ty.is_array() && idx != last {
                return Err(CodegenError::ArrayParameterNotLast {
                    parameter: var.clone(),
                });
            }
            let binding = match ty {
                JsType::Number => format!("Number({values}[{idx}])"),
                JsType::Str => format!("{values}[{idx}]"),
                JsType::NumberArray => format!("{values}.slice({idx}).map(Number)"),
                JsType::StringArray => format!("{values}.slice({idx})"),
            };
            input_parsing.push_str(&format!("const {var} = {binding};\n"));
        }

        let call = format!("{}({})", signature.function_name, signature.call_args());
        let invoke_and_print = match return_shape(&signature.return_type)? {
            ReturnShape::Void => format!("{call};\n"),
            ReturnShape::Array(_) => format!("const {result} = {call};\nconsole.log({result}.join(' '));\n"),
            ReturnShape::Scalar => format!("const {result} = {call};\nconsole.log({result});\n"),
        };

        Ok(format!("{user_code}\n\n{input_parsing}{invoke_and_print}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::parse_signature;
    use pretty_assertions::assert_eq;

    const ADD_NUMBERS: &str = "function addNumbers(a, b) {\n    return a + b;\n}";

    fn emit(signature: &str, user_code: &str) -> Result<String> {
        let signature = parse_signature(signature, Language::JavaScript)?;
        JavaScriptEmitter.emit(user_code, &signature)
    }

    #[test]
    fn test_add_numbers_program() {
        let program = emit("function addNumbers(a, b)", ADD_NUMBERS).unwrap();

        let expected = format!(
            "{ADD_NUMBERS}

const input = require('fs').readFileSync(0, 'utf-8').trim();
const values = input.length > 0 ? input.split(/\\s+/) : [];
const a = Number(values[0]);
const b = Number(values[1]);
const result = addNumbers(a, b);
console.log(result);
"
        );
        assert_eq!(program, expected);
    }

    #[test]
    fn test_array_tail_parameter() {
        let program = emit("number[] firstK(number k, number[] nums)", "function firstK(k, nums) {}").unwrap();

        assert!(program.contains("const k = Number(values[0]);\n"));
        assert!(program.contains("const nums = values.slice(1).map(Number);\n"));
        assert!(program.contains("console.log(result.join(' '));\n"));
    }

    #[test]
    fn test_array_parameter_must_be_last() {
        let err = emit("number f(number[] nums, number k)", "").unwrap_err();
        assert_eq!(
            err,
            CodegenError::ArrayParameterNotLast {
                parameter: "nums".to_string()
            }
        );
    }

    #[test]
    fn test_string_parameters() {
        let program = emit("string greet(string name, string[] rest)", "").unwrap();
        assert!(program.contains("const name = values[0];\n"));
        assert!(program.contains("const rest = values.slice(1);\n"));
        assert!(program.contains("console.log(result);\n"));
    }

    #[test]
    fn test_void_return() {
        let program = emit("void log(number x)", "").unwrap();
        assert!(program.ends_with("const x = Number(values[0]);\nlog(x);\n"));
    }

    #[test]
    fn test_param_named_like_driver_local() {
        let program = emit("function f(input, result)", "").unwrap();
        assert!(program.contains("const input_ = require('fs')"));
        assert!(program.contains("const input = Number(values[0]);"));
        assert!(program.contains("const result_ = f(input, result);"));
    }

    #[test]
    fn test_function_named_like_driver_local() {
        let program = emit("function result(a)", "function result(a) { return a; }").unwrap();
        assert!(program.contains("const result_ = result(a);\nconsole.log(result_);\n"));

        let program = emit("function values(a)", "function values(a) { return a; }").unwrap();
        assert!(program.contains("const values_ = input.length > 0 ? input.split(/\\s+/) : [];"));
        assert!(program.contains("const a = Number(values_[0]);"));
        assert!(program.contains("const result = values(a);"));
    }

    #[test]
    fn test_nested_array_return_rejected() {
        let err = emit("number[][] grid(number n)", "").unwrap_err();
        assert_eq!(
            err,
            CodegenError::UnsupportedReturnType {
                language: Language::JavaScript,
                type_name: "number[][]".to_string(),
            }
        );
    }

    #[test]
    fn test_unsupported_parameter_type() {
        let err = emit("number f(object o)", "").unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedParameterType { .. }));
    }
}
