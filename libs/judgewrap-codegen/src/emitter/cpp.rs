use judgewrap_common::Language;

use super::{compact_type, unsupported, unsupported_return, LocalNames, ReturnShape, WrapperEmitter};
use crate::error::Result;
use crate::signature::{FunctionSignature, Parameter};

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CppScalar {
    Int,
    LongLong,
    Double,
    Str,
}

impl CppScalar {
    /// Expects a compacted spelling, so `long long` may arrive as `longlong`
    /// when it sat inside angle brackets.
    fn from_type(name: &str) -> Option<Self> {
        match name.strip_prefix("std::").unwrap_or(name) {
            "int" => Some(CppScalar::Int),
            "long" | "long long" | "longlong" => Some(CppScalar::LongLong),
            "double" => Some(CppScalar::Double),
            "string" => Some(CppScalar::Str),
            _ => None,
        }
    }

    fn cpp_name(&self) -> &'static str {
        match self {
            CppScalar::Int => "int",
            CppScalar::LongLong => "long long",
            CppScalar::Double => "double",
            CppScalar::Str => "string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CppType {
    Scalar(CppScalar),
    Vector(CppScalar),
}

impl CppType {
    fn resolve(param: &Parameter) -> Result<Self> {
        let compact = compact_type(&param.type_name);
        let resolved = match vector_element(&compact) {
            Some(element) => CppScalar::from_type(element).map(CppType::Vector),
            None => CppScalar::from_type(&compact).map(CppType::Scalar),
        };
        resolved.ok_or_else(|| unsupported(Language::Cpp, param))
    }
}

fn vector_element(compact: &str) -> Option<&str> {
    compact
        .strip_prefix("std::")
        .unwrap_or(compact)
        .strip_prefix("vector<")?
        .strip_suffix('>')
}

fn return_shape(return_type: &str) -> Result<ReturnShape> {
    let compact = compact_type(return_type);
    if compact == "void" {
        return Ok(ReturnShape::Void);
    }
    match vector_element(&compact) {
        // Only flat vectors of printable scalars
        Some(element) if CppScalar::from_type(element).is_none() => {
            Err(unsupported_return(Language::Cpp, return_type))
        }
        Some(_) => Ok(ReturnShape::Array(
            return_type.split_whitespace().collect::<Vec<_>>().join(" "),
        )),
        None => Ok(ReturnShape::Scalar),
    }
}

/// Emits an `int main()` that reads stdin with `cin` and calls a method on a
/// stack-allocated `Solution`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppEmitter;

impl WrapperEmitter for CppEmitter {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn emit(&self, user_code: &str, signature: &FunctionSignature) -> Result<String> {
        let mut names = LocalNames::new(signature);
        let solution = names.fresh("sol");
        let index = names.fresh("i");

        let mut input_parsing = String::new();
        for (idx, param) in signature.parameters.iter().enumerate() {
            let var = &param.name;
            match CppType::resolve(param)? {
                CppType::Scalar(scalar) => {
                    input_parsing.push_str(&format!("{INDENT}{} {var};\n", scalar.cpp_name()));
                    input_parsing.push_str(&format!("{INDENT}cin >> {var};\n"));
                }
                CppType::Vector(element) => {
                    let len = names.fresh(&format!("n{idx}"));
                    input_parsing.push_str(&format!("{INDENT}int {len};\n{INDENT}cin >> {len};\n"));
                    input_parsing.push_str(&format!(
                        "{INDENT}vector<{}> {var}({len});\n",
                        element.cpp_name()
                    ));
                    input_parsing.push_str(&format!(
                        "{INDENT}for (int {index} = 0; {index} < {len}; {index}++) cin >> {var}[{index}];\n"
                    ));
                }
            }
        }

        let call = format!("{solution}.{}({})", signature.function_name, signature.call_args());
        let print_statement = match return_shape(&signature.return_type)? {
            ReturnShape::Void => format!("{INDENT}{call};\n"),
            ReturnShape::Array(vector_type) => {
                let result = names.fresh("result");
                format!(
                    "{INDENT}{vector_type} {result} = {call};\n\
                     {INDENT}for (size_t {index} = 0; {index} < {result}.size(); {index}++) {{\n\
                     {INDENT}    cout << {result}[{index}];\n\
                     {INDENT}    if ({index} + 1 < {result}.size()) cout << \" \";\n\
                     {INDENT}}}\n"
                )
            }
            ReturnShape::Scalar => format!("{INDENT}cout << {call};\n"),
        };

        let mut main_body = String::new();
        if !input_parsing.is_empty() {
            main_body.push_str(&input_parsing);
            main_body.push('\n');
        }
        main_body.push_str(&format!("{INDENT}Solution {solution};\n"));
        main_body.push_str(&print_statement);
        main_body.push('\n');
        main_body.push_str(&format!("{INDENT}return 0;\n"));

        Ok(format!(
            "#include <iostream>\n#include <vector>\n#include <string>\nusing namespace std;\n\n\
             {user_code}\n\n\
             int main() {{\n{main_body}}}\n"
        ))
    }
}
