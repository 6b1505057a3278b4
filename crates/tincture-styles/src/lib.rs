//! Visual-style elements and a renderer over a pluggable theme engine.
//!
//! Themed controls are addressed by class name, part id, and state id. The
//! [`classes`] module lists the common ones as typed enums; anything else can be
//! built directly with [`VisualStyleElement::new`].
//!
//! Drawing itself is delegated to a [`ThemeEngine`]. [`VisualStyleRenderer`]
//! holds one open theme handle for the lifetime of the renderer and forwards
//! calls for its current element.
//!
//! ```rust
//! use tincture_styles::classes::button;
//! use tincture_styles::{NullThemeEngine, Part, StyleError, VisualStyleRenderer};
//!
//! let element = button::PushButton::Hot.element();
//! assert_eq!((element.class_name, element.part, element.state), ("BUTTON", 1, 2));
//!
//! // Without visual styles nothing can be opened.
//! let err = VisualStyleRenderer::new(&NullThemeEngine, element).err();
//! assert!(matches!(err, Some(StyleError::ThemeUnavailable { .. })));
//! ```

mod element;

pub mod classes;
pub mod engine;
pub mod properties;

mod error;
mod renderer;

pub use element::{Part, VisualStyleElement};
pub use engine::{NullThemeEngine, ThemeEngine, ThemeHandle};
pub use error::{EngineCode, StyleError};
pub use properties::{
    BooleanProperty, ColorProperty, EdgeEffects, EdgeStyle, Edges, HitTestCode, HitTestOptions,
    IntegerProperty, MarginProperty, Margins, ThemeSizeType,
};
pub use renderer::VisualStyleRenderer;
