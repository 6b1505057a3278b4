use std::cell::Cell;

use tincture_drawing::coords::{Point, Rectangle, Size};
use tincture_drawing::paint::Color;

use crate::element::VisualStyleElement;
use crate::engine::{ThemeEngine, ThemeHandle};
use crate::error::{EngineCode, StyleError};
use crate::properties::{
    BooleanProperty, ColorProperty, EdgeEffects, EdgeStyle, Edges, HitTestCode, HitTestOptions,
    IntegerProperty, MarginProperty, Margins, ThemeSizeType,
};

/// An open theme handle, closed when dropped.
struct OpenTheme<'e, E: ThemeEngine> {
    engine: &'e E,
    class_name: &'static str,
    handle: ThemeHandle,
}

impl<'e, E: ThemeEngine> OpenTheme<'e, E> {
    fn open(engine: &'e E, class_name: &'static str) -> Result<Self, StyleError> {
        let handle = engine
            .open_theme(class_name)
            .ok_or_else(|| StyleError::ThemeUnavailable { class: class_name.to_string() })?;
        log::trace!("opened theme {class_name:?} as {:#x}", handle.raw());
        Ok(Self { engine, class_name, handle })
    }

    fn close(self) -> Result<(), EngineCode> {
        let (engine, handle) = (self.engine, self.handle);
        log::trace!("closing theme {:?} ({:#x})", self.class_name, handle.raw());
        // Nothing else to release; skip the closing `Drop`.
        std::mem::forget(self);
        engine.close_theme(handle)
    }
}

impl<E: ThemeEngine> Drop for OpenTheme<'_, E> {
    fn drop(&mut self) {
        log::trace!("closing theme {:?} ({:#x})", self.class_name, self.handle.raw());
        if let Err(code) = self.engine.close_theme(self.handle) {
            log::warn!("failed to close theme {:?}: {code}", self.class_name);
        }
    }
}

/// Draws and measures one [`VisualStyleElement`] through a [`ThemeEngine`].
///
/// The theme handle for the element's class is acquired in [`new`](Self::new)
/// and released when the renderer is dropped or [`close`](Self::close)d.
/// Every engine call records its status in [`last_code`](Self::last_code).
pub struct VisualStyleRenderer<'e, E: ThemeEngine> {
    theme: OpenTheme<'e, E>,
    element: VisualStyleElement,
    last_code: Cell<EngineCode>,
}

impl<'e, E: ThemeEngine> VisualStyleRenderer<'e, E> {
    /// Opens the element's class and checks the theme defines the element.
    pub fn new(engine: &'e E, element: impl Into<VisualStyleElement>) -> Result<Self, StyleError> {
        let element = element.into();
        let theme = OpenTheme::open(engine, element.class_name)?;
        ensure_defined(&theme, &element)?;
        Ok(Self { theme, element, last_code: Cell::new(EngineCode::OK) })
    }

    /// Whether the current theme defines `element`. Opens and closes a
    /// temporary handle.
    pub fn is_element_defined(engine: &E, element: impl Into<VisualStyleElement>) -> bool {
        let element = element.into();
        match OpenTheme::open(engine, element.class_name) {
            Ok(theme) => engine.is_part_defined(theme.handle, element.part, element.state),
            Err(_) => false,
        }
    }

    /// Switches to another element, reopening the theme only if the class
    /// differs. On error the renderer keeps its previous element and handle.
    pub fn set_parameters(&mut self, element: impl Into<VisualStyleElement>) -> Result<(), StyleError> {
        let element = element.into();
        if element.class_name.eq_ignore_ascii_case(self.element.class_name) {
            ensure_defined(&self.theme, &element)?;
        } else {
            let theme = OpenTheme::open(self.theme.engine, element.class_name)?;
            ensure_defined(&theme, &element)?;
            // The previous handle closes as it drops here.
            self.theme = theme;
        }
        self.element = element;
        Ok(())
    }

    /// Closes the handle now, reporting a failed close instead of logging it.
    pub fn close(self) -> Result<(), StyleError> {
        self.theme
            .close()
            .map_err(|code| StyleError::Engine { operation: "close_theme", code })
    }

    #[inline]
    pub fn element(&self) -> VisualStyleElement {
        self.element
    }

    #[inline]
    pub fn class_name(&self) -> &'static str {
        self.element.class_name
    }

    #[inline]
    pub fn part(&self) -> i32 {
        self.element.part
    }

    #[inline]
    pub fn state(&self) -> i32 {
        self.element.state
    }

    #[inline]
    pub fn handle(&self) -> ThemeHandle {
        self.theme.handle
    }

    /// Status of the most recent engine call.
    #[inline]
    pub fn last_code(&self) -> EngineCode {
        self.last_code.get()
    }

    fn track<T>(&self, operation: &'static str, result: Result<T, EngineCode>) -> Result<T, StyleError> {
        match result {
            Ok(value) => {
                self.last_code.set(EngineCode::OK);
                Ok(value)
            }
            Err(code) => {
                self.last_code.set(code);
                log::debug!("{operation} failed for {}: {code}", self.element);
                Err(StyleError::Engine { operation, code })
            }
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Negative-sized bounds draw nothing.
    pub fn draw_background(&self, surface: &mut E::Surface, bounds: Rectangle) -> Result<(), StyleError> {
        if bounds.width < 0 || bounds.height < 0 {
            return Ok(());
        }
        let r = self.engine().draw_background(self.handle(), surface, self.part(), self.state(), bounds, None);
        self.track("draw_background", r)
    }

    /// Like [`draw_background`](Self::draw_background), limited to `clip`.
    /// Negative-sized bounds or clip draw nothing.
    pub fn draw_background_clipped(
        &self,
        surface: &mut E::Surface,
        bounds: Rectangle,
        clip: Rectangle,
    ) -> Result<(), StyleError> {
        if bounds.width < 0 || bounds.height < 0 || clip.width < 0 || clip.height < 0 {
            return Ok(());
        }
        let r = self.engine().draw_background(
            self.handle(),
            surface,
            self.part(),
            self.state(),
            bounds,
            Some(clip),
        );
        self.track("draw_background", r)
    }

    /// Returns the content rectangle left inside the edge.
    pub fn draw_edge(
        &self,
        surface: &mut E::Surface,
        bounds: Rectangle,
        edges: Edges,
        style: EdgeStyle,
        effects: EdgeEffects,
    ) -> Result<Rectangle, StyleError> {
        let r = self.engine().draw_edge(
            self.handle(),
            surface,
            self.part(),
            self.state(),
            bounds,
            edges,
            style,
            effects,
        );
        self.track("draw_edge", r)
    }

    // ── metrics ───────────────────────────────────────────────────────────

    pub fn background_content_rect(
        &self,
        surface: &mut E::Surface,
        bounds: Rectangle,
    ) -> Result<Rectangle, StyleError> {
        let r = self
            .engine()
            .background_content_rect(self.handle(), surface, self.part(), self.state(), bounds);
        self.track("background_content_rect", r)
    }

    pub fn margins(&self, surface: &mut E::Surface, property: MarginProperty) -> Result<Margins, StyleError> {
        let r = self
            .engine()
            .margins(self.handle(), surface, self.part(), self.state(), property.id());
        self.track("margins", r)
    }

    pub fn part_size(&self, surface: &mut E::Surface, kind: ThemeSizeType) -> Result<Size, StyleError> {
        let r = self.engine().part_size(self.handle(), surface, self.part(), self.state(), kind);
        self.track("part_size", r)
    }

    pub fn hit_test_background(
        &self,
        surface: &mut E::Surface,
        bounds: Rectangle,
        point: Point,
        options: HitTestOptions,
    ) -> Result<HitTestCode, StyleError> {
        let r = self.engine().hit_test_background(
            self.handle(),
            surface,
            self.part(),
            self.state(),
            options,
            bounds,
            point,
        );
        self.track("hit_test_background", r).map(HitTestCode::from_native)
    }

    pub fn is_background_partially_transparent(&self) -> bool {
        self.engine()
            .is_background_partially_transparent(self.handle(), self.part(), self.state())
    }

    // ── properties ────────────────────────────────────────────────────────

    /// Reads a color property as an opaque [`Color`].
    pub fn color(&self, property: ColorProperty) -> Result<Color, StyleError> {
        let r = self.engine().color(self.handle(), self.part(), self.state(), property.id());
        self.track("color", r).map(color_from_native)
    }

    pub fn bool_property(&self, property: BooleanProperty) -> Result<bool, StyleError> {
        let r = self
            .engine()
            .bool_property(self.handle(), self.part(), self.state(), property.id());
        self.track("bool_property", r)
    }

    pub fn int_property(&self, property: IntegerProperty) -> Result<i32, StyleError> {
        let r = self
            .engine()
            .int_property(self.handle(), self.part(), self.state(), property.id());
        self.track("int_property", r)
    }

    #[inline]
    fn engine(&self) -> &'e E {
        self.theme.engine
    }
}

fn ensure_defined<E: ThemeEngine>(theme: &OpenTheme<'_, E>, element: &VisualStyleElement) -> Result<(), StyleError> {
    if theme.engine.is_part_defined(theme.handle, element.part, element.state) {
        Ok(())
    } else {
        Err(StyleError::ElementNotDefined {
            class: element.class_name.to_string(),
            part: element.part,
            state: element.state,
        })
    }
}

/// `0x00BBGGRR` → opaque color.
fn color_from_native(value: u32) -> Color {
    let r = (value & 0xFF) as u8;
    let g = ((value >> 8) & 0xFF) as u8;
    let b = ((value >> 16) & 0xFF) as u8;
    Color::from_argb8(255, r, g, b)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::num::NonZeroUsize;

    use super::*;
    use crate::classes::{button, edit, scroll_bar};
    use crate::element::Part;
    use crate::engine::NullThemeEngine;

    /// Records every call; defines the button and edit classes only.
    #[derive(Default)]
    struct FakeEngine {
        next: Cell<usize>,
        open: RefCell<Vec<(usize, String)>>,
        opened: Cell<usize>,
        closed: Cell<usize>,
        draws: RefCell<Vec<(i32, i32, Rectangle, Option<Rectangle>)>>,
        fail_draws: Cell<bool>,
    }

    impl FakeEngine {
        fn live_handles(&self) -> usize {
            self.open.borrow().len()
        }

        fn class_of(&self, handle: ThemeHandle) -> String {
            self.open
                .borrow()
                .iter()
                .find(|(h, _)| *h == handle.raw())
                .map(|(_, c)| c.clone())
                .expect("handle is open")
        }
    }

    #[derive(Default)]
    struct Canvas {
        strokes: usize,
    }

    impl ThemeEngine for FakeEngine {
        type Surface = Canvas;

        fn open_theme(&self, class_name: &str) -> Option<ThemeHandle> {
            let class = class_name.to_ascii_uppercase();
            if class != "BUTTON" && class != "EDIT" {
                return None;
            }
            self.next.set(self.next.get() + 1);
            self.opened.set(self.opened.get() + 1);
            self.open.borrow_mut().push((self.next.get(), class));
            NonZeroUsize::new(self.next.get()).map(ThemeHandle::new)
        }

        fn close_theme(&self, handle: ThemeHandle) -> Result<(), EngineCode> {
            let mut open = self.open.borrow_mut();
            let idx = open.iter().position(|(h, _)| *h == handle.raw()).ok_or(EngineCode::INVALID_ARG)?;
            open.remove(idx);
            self.closed.set(self.closed.get() + 1);
            Ok(())
        }

        fn is_part_defined(&self, handle: ThemeHandle, part: i32, state: i32) -> bool {
            match self.class_of(handle).as_str() {
                "BUTTON" => ((1..=4).contains(&part) && (1..=12).contains(&state)) || part == 5,
                "EDIT" => part == 1,
                _ => false,
            }
        }

        fn draw_background(
            &self,
            _: ThemeHandle,
            surface: &mut Canvas,
            part: i32,
            state: i32,
            bounds: Rectangle,
            clip: Option<Rectangle>,
        ) -> Result<(), EngineCode> {
            if self.fail_draws.get() {
                return Err(EngineCode::INVALID_ARG);
            }
            surface.strokes += 1;
            self.draws.borrow_mut().push((part, state, bounds, clip));
            Ok(())
        }

        fn draw_edge(
            &self,
            _: ThemeHandle,
            surface: &mut Canvas,
            _: i32,
            _: i32,
            bounds: Rectangle,
            edges: Edges,
            _: EdgeStyle,
            _: EdgeEffects,
        ) -> Result<Rectangle, EngineCode> {
            surface.strokes += 1;
            let mut inner = bounds;
            if edges.contains(Edges::RECT) {
                inner.inflate(-2, -2);
            }
            Ok(inner)
        }

        fn background_content_rect(
            &self,
            _: ThemeHandle,
            _: &mut Canvas,
            _: i32,
            _: i32,
            bounds: Rectangle,
        ) -> Result<Rectangle, EngineCode> {
            Ok(Rectangle::new(bounds.x + 3, bounds.y + 3, bounds.width - 6, bounds.height - 6))
        }

        fn color(&self, _: ThemeHandle, _: i32, _: i32, property: i32) -> Result<u32, EngineCode> {
            match property {
                3803 => Ok(0x0033_2211),
                _ => Err(EngineCode::ELEMENT_NOT_FOUND),
            }
        }

        fn bool_property(&self, _: ThemeHandle, _: i32, _: i32, property: i32) -> Result<bool, EngineCode> {
            Ok(property == BooleanProperty::Transparent.id())
        }

        fn int_property(&self, _: ThemeHandle, part: i32, _: i32, _: i32) -> Result<i32, EngineCode> {
            Ok(part * 10)
        }

        fn margins(&self, _: ThemeHandle, _: &mut Canvas, _: i32, _: i32, _: i32) -> Result<Margins, EngineCode> {
            Ok(Margins::new(1, 2, 3, 4))
        }

        fn part_size(
            &self,
            _: ThemeHandle,
            _: &mut Canvas,
            _: i32,
            _: i32,
            kind: ThemeSizeType,
        ) -> Result<Size, EngineCode> {
            match kind {
                ThemeSizeType::Minimum => Ok(Size::new(4, 4)),
                _ => Ok(Size::new(13, 13)),
            }
        }

        fn hit_test_background(
            &self,
            _: ThemeHandle,
            _: &mut Canvas,
            _: i32,
            _: i32,
            _: HitTestOptions,
            bounds: Rectangle,
            point: Point,
        ) -> Result<i32, EngineCode> {
            Ok(if bounds.contains_point(point) { 1 } else { 0 })
        }

        fn is_background_partially_transparent(&self, _: ThemeHandle, _: i32, state: i32) -> bool {
            state == 4
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn handle_released_on_drop() {
        let engine = FakeEngine::default();
        {
            let r = VisualStyleRenderer::new(&engine, button::PushButton::Normal).unwrap();
            assert_eq!(engine.live_handles(), 1);
            assert_eq!(r.class_name(), "BUTTON");
        }
        assert_eq!(engine.live_handles(), 0);
        assert_eq!(engine.opened.get(), engine.closed.get());
    }

    #[test]
    fn explicit_close() {
        let engine = FakeEngine::default();
        let r = VisualStyleRenderer::new(&engine, button::PushButton::Hot).unwrap();
        r.close().unwrap();
        assert_eq!((engine.opened.get(), engine.closed.get()), (1, 1));
    }

    #[test]
    fn same_class_keeps_handle() {
        let engine = FakeEngine::default();
        let mut r = VisualStyleRenderer::new(&engine, button::PushButton::Normal).unwrap();
        let handle = r.handle();
        r.set_parameters(button::CheckBox::CheckedHot).unwrap();
        assert_eq!(r.handle(), handle);
        assert_eq!((r.part(), r.state()), (3, 6));
        assert_eq!(engine.opened.get(), 1);
    }

    #[test]
    fn class_change_reopens() {
        let engine = FakeEngine::default();
        let mut r = VisualStyleRenderer::new(&engine, button::PushButton::Normal).unwrap();
        let first = r.handle();
        r.set_parameters(edit::TextBox::Focused).unwrap();
        assert_ne!(r.handle(), first);
        assert_eq!(engine.live_handles(), 1);
        assert_eq!((engine.opened.get(), engine.closed.get()), (2, 1));
        drop(r);
        assert_eq!(engine.closed.get(), 2);
    }

    #[test]
    fn failed_switch_keeps_previous_state() {
        let engine = FakeEngine::default();
        let mut r = VisualStyleRenderer::new(&engine, button::PushButton::Normal).unwrap();
        let handle = r.handle();

        let err = r.set_parameters(scroll_bar::GripperVertical::Normal).unwrap_err();
        assert_eq!(err, StyleError::ThemeUnavailable { class: "SCROLLBAR".into() });

        // Class opens but the part is undefined: the new handle is closed again.
        let err = r.set_parameters(edit::Caret::Normal).unwrap_err();
        assert!(matches!(err, StyleError::ElementNotDefined { part: 2, state: 0, .. }));

        assert_eq!(r.handle(), handle);
        assert_eq!(r.element(), button::PushButton::Normal.element());
        assert_eq!(engine.live_handles(), 1);
    }

    #[test]
    fn undefined_element_rejected_and_released() {
        let engine = FakeEngine::default();
        let err = VisualStyleRenderer::new(&engine, VisualStyleElement::new("BUTTON", 9, 1)).err();
        assert_eq!(err, Some(StyleError::ElementNotDefined { class: "BUTTON".into(), part: 9, state: 1 }));
        assert_eq!(engine.live_handles(), 0);
    }

    #[test]
    fn is_element_defined_uses_temporary_handle() {
        let engine = FakeEngine::default();
        assert!(VisualStyleRenderer::is_element_defined(&engine, button::GroupBox::Disabled));
        assert!(!VisualStyleRenderer::is_element_defined(&engine, edit::Caret::Normal));
        assert!(!VisualStyleRenderer::is_element_defined(&engine, scroll_bar::SizeBox::LeftAlign));
        assert_eq!(engine.live_handles(), 0);
        assert_eq!(engine.opened.get(), 2);
    }

    #[test]
    fn null_engine_never_opens() {
        let engine = NullThemeEngine;
        let err = VisualStyleRenderer::new(&engine, button::PushButton::Normal).err();
        assert_eq!(err, Some(StyleError::ThemeUnavailable { class: "BUTTON".into() }));
        assert!(!VisualStyleRenderer::is_element_defined(&engine, button::PushButton::Normal));
    }

    // ── forwarding ────────────────────────────────────────────────────────

    #[test]
    fn draw_background_forwards_current_element() {
        let engine = FakeEngine::default();
        let mut canvas = Canvas::default();
        let r = VisualStyleRenderer::new(&engine, button::RadioButton::CheckedPressed).unwrap();
        let bounds = Rectangle::new(0, 0, 20, 10);
        r.draw_background(&mut canvas, bounds).unwrap();
        r.draw_background_clipped(&mut canvas, bounds, Rectangle::new(0, 0, 5, 5)).unwrap();
        assert_eq!(canvas.strokes, 2);
        assert_eq!(
            *engine.draws.borrow(),
            [(2, 7, bounds, None), (2, 7, bounds, Some(Rectangle::new(0, 0, 5, 5)))]
        );
    }

    #[test]
    fn negative_bounds_draw_nothing() {
        let engine = FakeEngine::default();
        let mut canvas = Canvas::default();
        let r = VisualStyleRenderer::new(&engine, button::PushButton::Normal).unwrap();
        r.draw_background(&mut canvas, Rectangle::new(0, 0, -1, 10)).unwrap();
        r.draw_background_clipped(&mut canvas, Rectangle::new(0, 0, 5, 5), Rectangle::new(0, 0, 5, -5))
            .unwrap();
        assert_eq!(canvas.strokes, 0);
    }

    #[test]
    fn engine_failure_sets_last_code() {
        let engine = FakeEngine::default();
        let mut canvas = Canvas::default();
        let r = VisualStyleRenderer::new(&engine, button::PushButton::Normal).unwrap();
        engine.fail_draws.set(true);
        let err = r.draw_background(&mut canvas, Rectangle::new(0, 0, 4, 4)).unwrap_err();
        assert_eq!(err, StyleError::Engine { operation: "draw_background", code: EngineCode::INVALID_ARG });
        assert_eq!(r.last_code(), EngineCode::INVALID_ARG);
        assert!(err.to_string().contains("0x80070057"));

        r.part_size(&mut canvas, ThemeSizeType::True).unwrap();
        assert_eq!(r.last_code(), EngineCode::OK);
    }

    #[test]
    fn edge_and_metrics() {
        let engine = FakeEngine::default();
        let mut canvas = Canvas::default();
        let r = VisualStyleRenderer::new(&engine, button::PushButton::Disabled).unwrap();
        let bounds = Rectangle::new(10, 10, 20, 20);

        let inner = r
            .draw_edge(&mut canvas, bounds, Edges::RECT, EdgeStyle::Sunken, EdgeEffects::FILL_INTERIOR)
            .unwrap();
        assert_eq!(inner, Rectangle::new(12, 12, 16, 16));
        assert_eq!(r.background_content_rect(&mut canvas, bounds).unwrap(), Rectangle::new(13, 13, 14, 14));
        assert_eq!(r.margins(&mut canvas, MarginProperty::ContentMargins).unwrap(), Margins::new(1, 2, 3, 4));
        assert_eq!(r.part_size(&mut canvas, ThemeSizeType::Minimum).unwrap(), Size::new(4, 4));
        assert_eq!(
            r.hit_test_background(&mut canvas, bounds, Point::new(15, 15), HitTestOptions::empty()).unwrap(),
            HitTestCode::Client
        );
        assert_eq!(
            r.hit_test_background(&mut canvas, bounds, Point::new(30, 30), HitTestOptions::CAPTION).unwrap(),
            HitTestCode::Nowhere
        );
        assert!(r.is_background_partially_transparent());
    }

    #[test]
    fn properties() {
        let engine = FakeEngine::default();
        let r = VisualStyleRenderer::new(&engine, edit::TextBox::Normal).unwrap();

        let c = r.color(ColorProperty::TextColor).unwrap();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 0x11, 0x22, 0x33));
        assert!(matches!(
            r.color(ColorProperty::GlowColor),
            Err(StyleError::Engine { operation: "color", code: EngineCode::ELEMENT_NOT_FOUND })
        ));

        assert!(r.bool_property(BooleanProperty::Transparent).unwrap());
        assert!(!r.bool_property(BooleanProperty::AutoSize).unwrap());
        assert_eq!(r.int_property(IntegerProperty::BorderSize).unwrap(), 10);
    }
}
