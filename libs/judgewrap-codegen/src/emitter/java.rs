use judgewrap_common::Language;

use super::{compact_type, unsupported, unsupported_return, LocalNames, ReturnShape, WrapperEmitter};
use crate::error::Result;
use crate::signature::{FunctionSignature, Parameter};

const INDENT: &str = "        ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JavaScalar {
    Int,
    Long,
    Double,
    Str,
}

impl JavaScalar {
    fn from_type(name: &str) -> Option<Self> {
        match name {
            "int" => Some(JavaScalar::Int),
            "long" => Some(JavaScalar::Long),
            "double" => Some(JavaScalar::Double),
            "String" => Some(JavaScalar::Str),
            _ => None,
        }
    }

    fn java_name(&self) -> &'static str {
        match self {
            JavaScalar::Int => "int",
            JavaScalar::Long => "long",
            JavaScalar::Double => "double",
            JavaScalar::Str => "String",
        }
    }

    /// Scanner call reading one token of this type
    fn read_call(&self) -> &'static str {
        match self {
            JavaScalar::Int => "nextInt()",
            JavaScalar::Long => "nextLong()",
            JavaScalar::Double => "nextDouble()",
            JavaScalar::Str => "next()",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JavaType {
    Scalar(JavaScalar),
    Array(JavaScalar),
}

impl JavaType {
    fn resolve(param: &Parameter) -> Result<Self> {
        let compact = compact_type(&param.type_name);
        let resolved = match compact.strip_suffix("[]") {
            Some(element) => JavaScalar::from_type(element).map(JavaType::Array),
            None => JavaScalar::from_type(&compact).map(JavaType::Scalar),
        };
        resolved.ok_or_else(|| unsupported(Language::Java, param))
    }
}

fn return_shape(return_type: &str) -> Result<ReturnShape> {
    let compact = compact_type(return_type);
    if compact == "void" {
        return Ok(ReturnShape::Void);
    }
    match compact.strip_suffix("[]") {
        // Only one-dimensional arrays of printable scalars
        Some(element) if JavaScalar::from_type(element).is_none() => {
            Err(unsupported_return(Language::Java, return_type))
        }
        Some(_) => Ok(ReturnShape::Array(compact)),
        None => Ok(ReturnShape::Scalar),
    }
}

/// Emits a `Main` class that reads stdin with a `Scanner` and calls into the
/// user's `Solution` class.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitter;

impl WrapperEmitter for JavaEmitter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn emit(&self, user_code: &str, signature: &FunctionSignature) -> Result<String> {
        let mut names = LocalNames::new(signature);
        let args = names.fresh("args");
        let scanner = names.fresh("sc");
        let solution = names.fresh("sol");
        let index = names.fresh("i");

        let mut input_parsing = String::new();
        for (idx, param) in signature.parameters.iter().enumerate() {
            let var = &param.name;
            match JavaType::resolve(param)? {
                JavaType::Scalar(scalar) => {
                    input_parsing.push_str(&format!(
                        "{INDENT}{} {var} = {scanner}.{};\n",
                        scalar.java_name(),
                        scalar.read_call()
                    ));
                }
                JavaType::Array(element) => {
                    let len = names.fresh(&format!("n{idx}"));
                    input_parsing.push_str(&format!("{INDENT}int {len} = {scanner}.nextInt();\n"));
                    input_parsing.push_str(&format!(
                        "{INDENT}{ty}[] {var} = new {ty}[{len}];\n",
                        ty = element.java_name()
                    ));
                    input_parsing.push_str(&format!(
                        "{INDENT}for (int {index} = 0; {index} < {len}; {index}++) {var}[{index}] = {scanner}.{};\n",
                        element.read_call()
                    ));
                }
            }
        }

        let call = format!("{solution}.{}({})", signature.function_name, signature.call_args());
        let print_statement = match return_shape(&signature.return_type)? {
            ReturnShape::Void => format!("{INDENT}{call};\n"),
            ReturnShape::Array(array_type) => {
                let result = names.fresh("result");
                format!(
                    "{INDENT}{array_type} {result} = {call};\n\
                     {INDENT}for (int {index} = 0; {index} < {result}.length; {index}++) {{\n\
                     {INDENT}    System.out.print({result}[{index}]);\n\
                     {INDENT}    if ({index} < {result}.length - 1) System.out.print(\" \");\n\
                     {INDENT}}}\n"
                )
            }
            ReturnShape::Scalar => format!("{INDENT}System.out.print({call});\n"),
        };

        let mut main_body = format!(
            "{INDENT}Scanner {scanner} = new Scanner(System.in);\n\
             {INDENT}Solution {solution} = new Solution();\n\n"
        );
        if !input_parsing.is_empty() {
            main_body.push_str(&input_parsing);
            main_body.push('\n');
        }
        main_body.push_str(&print_statement);
        main_body.push('\n');
        main_body.push_str(&format!("{INDENT}{scanner}.close();\n"));

        Ok(format!(
            "import java.util.*;\nimport java.io.*;\n\n\
             {user_code}\n\n\
             public class Main {{\n    public static void main(String[] {args}) {{\n\
             {main_body}    }}\n}}\n"
        ))
    }
}
