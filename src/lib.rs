//! Convert identifier-like strings between camelCase, kebab-case and dot.case.
//!
//! All conversions share one pipeline: validate, split into words on
//! delimiters and case boundaries, then re-case and join.
//!
//! ```
//! assert_eq!(caseconv::to_camel_case("hello world").unwrap(), "helloWorld");
//! assert_eq!(caseconv::to_kebab_case("HTTPServer").unwrap(), "http-server");
//! assert_eq!(caseconv::to_dot_case("SCREEN_NAME").unwrap(), "screen.name");
//! ```

pub mod batch;
pub mod case;
pub mod error;

pub use case::{
    convert_value, to_camel_case, to_dot_case, to_kebab_case, tokenize, Case, ParseCaseError,
};
pub use error::{CaseError, InvalidInput};

/// Convert `input` into `case`.
pub fn convert(case: Case, input: &str) -> error::Result<String> {
    case.convert(input)
}
