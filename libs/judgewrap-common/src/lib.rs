pub mod language;
pub mod types;

pub use language::Language;
