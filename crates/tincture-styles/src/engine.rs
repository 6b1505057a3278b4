use std::num::NonZeroUsize;

use tincture_drawing::coords::{Point, Rectangle, Size};

use crate::error::EngineCode;
use crate::properties::{EdgeEffects, EdgeStyle, Edges, HitTestOptions, Margins, ThemeSizeType};

/// Opaque theme data handle issued by a [`ThemeEngine`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ThemeHandle(NonZeroUsize);

impl ThemeHandle {
    #[inline]
    pub const fn new(raw: NonZeroUsize) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> usize {
        self.0.get()
    }
}

/// The platform theming API.
///
/// Part and state ids are the native integers from [`crate::classes`];
/// colors come back as `0x00BBGGRR`. Every fallible call reports the engine's
/// own status code, which [`crate::VisualStyleRenderer`] keeps as its last
/// result.
pub trait ThemeEngine {
    /// Drawing target (a device context, a software canvas, ...).
    type Surface: ?Sized;

    /// Returns `None` when the engine has no theme data for `class_name`.
    fn open_theme(&self, class_name: &str) -> Option<ThemeHandle>;

    fn close_theme(&self, handle: ThemeHandle) -> Result<(), EngineCode>;

    fn is_part_defined(&self, handle: ThemeHandle, part: i32, state: i32) -> bool;

    fn draw_background(
        &self,
        handle: ThemeHandle,
        surface: &mut Self::Surface,
        part: i32,
        state: i32,
        bounds: Rectangle,
        clip: Option<Rectangle>,
    ) -> Result<(), EngineCode>;

    /// Draws the edge and returns the remaining content rectangle.
    #[allow(clippy::too_many_arguments)]
    fn draw_edge(
        &self,
        handle: ThemeHandle,
        surface: &mut Self::Surface,
        part: i32,
        state: i32,
        bounds: Rectangle,
        edges: Edges,
        style: EdgeStyle,
        effects: EdgeEffects,
    ) -> Result<Rectangle, EngineCode>;

    fn background_content_rect(
        &self,
        handle: ThemeHandle,
        surface: &mut Self::Surface,
        part: i32,
        state: i32,
        bounds: Rectangle,
    ) -> Result<Rectangle, EngineCode>;

    fn color(&self, handle: ThemeHandle, part: i32, state: i32, property: i32) -> Result<u32, EngineCode>;

    fn bool_property(&self, handle: ThemeHandle, part: i32, state: i32, property: i32) -> Result<bool, EngineCode>;

    fn int_property(&self, handle: ThemeHandle, part: i32, state: i32, property: i32) -> Result<i32, EngineCode>;

    fn margins(
        &self,
        handle: ThemeHandle,
        surface: &mut Self::Surface,
        part: i32,
        state: i32,
        property: i32,
    ) -> Result<Margins, EngineCode>;

    fn part_size(
        &self,
        handle: ThemeHandle,
        surface: &mut Self::Surface,
        part: i32,
        state: i32,
        kind: ThemeSizeType,
    ) -> Result<Size, EngineCode>;

    /// Returns a native hit-test code, see [`crate::HitTestCode::from_native`].
    #[allow(clippy::too_many_arguments)]
    fn hit_test_background(
        &self,
        handle: ThemeHandle,
        surface: &mut Self::Surface,
        part: i32,
        state: i32,
        options: HitTestOptions,
        bounds: Rectangle,
        point: Point,
    ) -> Result<i32, EngineCode>;

    fn is_background_partially_transparent(&self, handle: ThemeHandle, part: i32, state: i32) -> bool;
}

/// Engine used when visual styles are off: no class ever opens.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullThemeEngine;

impl ThemeEngine for NullThemeEngine {
    type Surface = ();

    fn open_theme(&self, class_name: &str) -> Option<ThemeHandle> {
        log::trace!("visual styles disabled, not opening {class_name:?}");
        None
    }

    fn close_theme(&self, _: ThemeHandle) -> Result<(), EngineCode> {
        Err(EngineCode::INVALID_ARG)
    }

    fn is_part_defined(&self, _: ThemeHandle, _: i32, _: i32) -> bool {
        false
    }

    fn draw_background(
        &self,
        _: ThemeHandle,
        _: &mut (),
        _: i32,
        _: i32,
        _: Rectangle,
        _: Option<Rectangle>,
    ) -> Result<(), EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn draw_edge(
        &self,
        _: ThemeHandle,
        _: &mut (),
        _: i32,
        _: i32,
        _: Rectangle,
        _: Edges,
        _: EdgeStyle,
        _: EdgeEffects,
    ) -> Result<Rectangle, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn background_content_rect(
        &self,
        _: ThemeHandle,
        _: &mut (),
        _: i32,
        _: i32,
        _: Rectangle,
    ) -> Result<Rectangle, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn color(&self, _: ThemeHandle, _: i32, _: i32, _: i32) -> Result<u32, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn bool_property(&self, _: ThemeHandle, _: i32, _: i32, _: i32) -> Result<bool, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn int_property(&self, _: ThemeHandle, _: i32, _: i32, _: i32) -> Result<i32, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn margins(&self, _: ThemeHandle, _: &mut (), _: i32, _: i32, _: i32) -> Result<Margins, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn part_size(
        &self,
        _: ThemeHandle,
        _: &mut (),
        _: i32,
        _: i32,
        _: ThemeSizeType,
    ) -> Result<Size, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn hit_test_background(
        &self,
        _: ThemeHandle,
        _: &mut (),
        _: i32,
        _: i32,
        _: HitTestOptions,
        _: Rectangle,
        _: Point,
    ) -> Result<i32, EngineCode> {
        Err(EngineCode::NOT_IMPLEMENTED)
    }

    fn is_background_partially_transparent(&self, _: ThemeHandle, _: i32, _: i32) -> bool {
        false
    }
}
