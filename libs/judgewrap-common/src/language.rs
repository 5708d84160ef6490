use serde::{Deserialize, Serialize};
use std::fmt;

/// Target language families a wrapper can be generated for.
///
/// The set is closed: adding a family means adding a variant here and an
/// emitter in `judgewrap-codegen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Cpp,
    JavaScript,
}

impl Language {
    /// Resolve a user-facing language name, including display aliases such as `C++`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "java" => Some(Language::Java),
            "cpp" | "c++" => Some(Language::Cpp),
            "javascript" | "js" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Key under which a problem stores this language's signature
    pub fn signature_key(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
        }
    }

    pub fn all() -> [Language; 3] {
        [Language::Java, Language::Cpp, Language::JavaScript]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature_key())
    }
}
