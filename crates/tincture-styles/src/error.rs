use std::fmt;

use thiserror::Error;

/// Native status code returned by a theme engine (an `HRESULT` on Windows).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EngineCode(pub i32);

impl EngineCode {
    pub const OK: EngineCode = EngineCode(0);
    pub const NOT_IMPLEMENTED: EngineCode = EngineCode(0x8000_4001_u32 as i32);
    pub const INVALID_ARG: EngineCode = EngineCode(0x8007_0057_u32 as i32);
    pub const ELEMENT_NOT_FOUND: EngineCode = EngineCode(0x8007_0490_u32 as i32);
}

impl fmt::Display for EngineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The engine has no theme data for the class (or visual styles are off).
    #[error("visual styles are not available for class {class:?}")]
    ThemeUnavailable { class: String },

    #[error("visual style element {class}/{part}/{state} is not defined by the current theme")]
    ElementNotDefined { class: String, part: i32, state: i32 },

    #[error("theme engine call `{operation}` failed with code {code}")]
    Engine { operation: &'static str, code: EngineCode },
}
