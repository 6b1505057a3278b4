use thiserror::Error;

/// A color component was outside `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("value '{value}' is not valid for '{field}': it must be between 0 and 255")]
    ComponentOutOfRange { field: &'static str, value: i32 },
}
