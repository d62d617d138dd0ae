//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Descriptor error taxonomy                    |
//! | `field`  | Dot-joined descriptor field paths            |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigError, LocaleNotFound, TemplateError};
pub use field::FieldPath;
