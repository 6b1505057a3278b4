use state::InitCell;

use super::{Color, KnownColor};

/// Live ARGB values for the system colors.
///
/// System colors mirror desktop settings, so their values are looked up here on
/// every read instead of being baked into the [`Color`]. A palette can be
/// installed once per process; until then the built-in defaults apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPalette {
    values: [u32; KnownColor::COUNT],
}

static DEFAULT_PALETTE: SystemPalette = SystemPalette::defaults();
static INSTALLED: InitCell<SystemPalette> = InitCell::new();

impl SystemPalette {
    const fn defaults() -> Self {
        let mut values = [0u32; KnownColor::COUNT];
        let mut i = 0;
        while i < KnownColor::COUNT {
            values[i] = KnownColor::ALL[i].default_argb();
            i += 1;
        }
        Self { values }
    }

    /// A palette holding the built-in defaults.
    pub fn new() -> Self {
        Self::defaults()
    }

    #[inline]
    fn slot(color: KnownColor) -> usize {
        usize::from(color.id()) - 1
    }

    /// Overrides one system color. Returns `false` (and changes nothing) for
    /// non-system colors, whose values are fixed.
    pub fn set(&mut self, color: KnownColor, argb: u32) -> bool {
        if !color.is_system() {
            return false;
        }
        self.values[Self::slot(color)] = argb;
        true
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, color: KnownColor, argb: u32) -> Self {
        if !self.set(color, argb) {
            log::debug!("ignoring palette override for non-system color {}", color.name());
        }
        self
    }

    #[inline]
    pub fn argb(&self, color: KnownColor) -> u32 {
        self.values[Self::slot(color)]
    }

    /// Installs this palette for the rest of the process.
    ///
    /// Only the first call wins; later calls return `false`.
    pub fn install(self) -> bool {
        let installed = INSTALLED.set(self);
        if installed {
            log::debug!("system palette installed");
        } else {
            log::debug!("system palette already installed; keeping the existing one");
        }
        installed
    }

    /// The installed palette, or the defaults.
    pub fn current() -> &'static SystemPalette {
        INSTALLED.try_get().unwrap_or(&DEFAULT_PALETTE)
    }
}

impl Default for SystemPalette {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! system_colors {
    ($( $name:ident => $variant:ident, )*) => {
        /// Colors that track the desktop's system palette.
        pub struct SystemColors;

        impl SystemColors {
            $( pub const $name: Color = Color::from_known_const(KnownColor::$variant); )*

            /// Every system color, in table order.
            pub const ALL: &'static [Color] = &[ $( SystemColors::$name, )* ];
        }
    };
}

system_colors! {
    ACTIVE_BORDER             => ActiveBorder,
    ACTIVE_CAPTION            => ActiveCaption,
    ACTIVE_CAPTION_TEXT       => ActiveCaptionText,
    APP_WORKSPACE             => AppWorkspace,
    CONTROL                   => Control,
    CONTROL_DARK              => ControlDark,
    CONTROL_DARK_DARK         => ControlDarkDark,
    CONTROL_LIGHT             => ControlLight,
    CONTROL_LIGHT_LIGHT       => ControlLightLight,
    CONTROL_TEXT              => ControlText,
    DESKTOP                   => Desktop,
    GRAY_TEXT                 => GrayText,
    HIGHLIGHT                 => Highlight,
    HIGHLIGHT_TEXT            => HighlightText,
    HOT_TRACK                 => HotTrack,
    INACTIVE_BORDER           => InactiveBorder,
    INACTIVE_CAPTION          => InactiveCaption,
    INACTIVE_CAPTION_TEXT     => InactiveCaptionText,
    INFO                      => Info,
    INFO_TEXT                 => InfoText,
    MENU                      => Menu,
    MENU_TEXT                 => MenuText,
    SCROLL_BAR                => ScrollBar,
    WINDOW                    => Window,
    WINDOW_FRAME              => WindowFrame,
    WINDOW_TEXT               => WindowText,
    BUTTON_FACE               => ButtonFace,
    BUTTON_HIGHLIGHT          => ButtonHighlight,
    BUTTON_SHADOW             => ButtonShadow,
    GRADIENT_ACTIVE_CAPTION   => GradientActiveCaption,
    GRADIENT_INACTIVE_CAPTION => GradientInactiveCaption,
    MENU_BAR                  => MenuBar,
    MENU_HIGHLIGHT            => MenuHighlight,
}
