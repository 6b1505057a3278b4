//! Property ids and flag sets passed through to the theme engine.

use bitflags::bitflags;

macro_rules! property_ids {
    ($(#[$meta:meta])* $name:ident { $( $variant:ident = $id:literal ),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $( $variant = $id, )+
        }

        impl $name {
            #[inline]
            pub const fn id(self) -> i32 {
                self as i32
            }
        }
    };
}

property_ids! {
    /// Color-valued theme properties.
    ColorProperty {
        BorderColor = 3801,
        FillColor = 3802,
        TextColor = 3803,
        EdgeLightColor = 3804,
        EdgeHighlightColor = 3805,
        EdgeShadowColor = 3806,
        EdgeDarkShadowColor = 3807,
        EdgeFillColor = 3808,
        TransparentColor = 3809,
        GradientColor1 = 3810,
        GradientColor2 = 3811,
        GradientColor3 = 3812,
        GradientColor4 = 3813,
        GradientColor5 = 3814,
        ShadowColor = 3815,
        GlowColor = 3816,
        TextBorderColor = 3817,
        TextShadowColor = 3818,
        GlyphTextColor = 3819,
        GlyphTransparentColor = 3820,
        FillColorHint = 3821,
        BorderColorHint = 3822,
        AccentColorHint = 3823,
    }
}

property_ids! {
    BooleanProperty {
        Transparent = 2201,
        AutoSize = 2202,
        BorderOnly = 2203,
        Composited = 2204,
        BackgroundFill = 2205,
        GlyphTransparent = 2206,
        GlyphOnly = 2207,
        AlwaysShowSizingBar = 2208,
        MirrorImage = 2209,
        UniformSizing = 2210,
        IntegralSizing = 2211,
        SourceGrow = 2212,
        SourceShrink = 2213,
    }
}

property_ids! {
    IntegerProperty {
        ImageCount = 2401,
        AlphaLevel = 2402,
        BorderSize = 2403,
        RoundCornerWidth = 2404,
        RoundCornerHeight = 2405,
        GradientRatio1 = 2406,
        GradientRatio2 = 2407,
        GradientRatio3 = 2408,
        GradientRatio4 = 2409,
        GradientRatio5 = 2410,
        ProgressChunkSize = 2411,
        ProgressSpaceSize = 2412,
        Saturation = 2413,
        TextBorderSize = 2414,
        AlphaThreshold = 2415,
        Width = 2416,
        Height = 2417,
        GlyphIndex = 2418,
        TrueSizeStretchMark = 2419,
        MinDpi1 = 2420,
        MinDpi2 = 2421,
        MinDpi3 = 2422,
        MinDpi4 = 2423,
        MinDpi5 = 2424,
    }
}

property_ids! {
    MarginProperty {
        SizingMargins = 3601,
        ContentMargins = 3602,
        CaptionMargins = 3603,
    }
}

/// Which size of a part to ask for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ThemeSizeType {
    Minimum = 0,
    True = 1,
    Draw = 2,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Three-dimensional edge look passed to [`crate::ThemeEngine::draw_edge`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EdgeStyle {
    Raised = 0x5,
    Etched = 0x6,
    Bump = 0x9,
    Sunken = 0xA,
}

bitflags! {
    /// Sides of a rectangle an edge is drawn on.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Edges: i32 {
        const LEFT = 0x0001;
        const TOP = 0x0002;
        const RIGHT = 0x0004;
        const BOTTOM = 0x0008;
        const DIAGONAL = 0x0010;
        const RECT = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct EdgeEffects: i32 {
        const FILL_INTERIOR = 0x0800;
        const SOFT = 0x1000;
        const FLAT = 0x4000;
        const MONO = 0x8000;
    }
}

bitflags! {
    /// How a background hit test treats the part's borders.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct HitTestOptions: i32 {
        const FIXED_BORDER = 0x0002;
        const CAPTION = 0x0004;
        const RESIZING_BORDER_LEFT = 0x0010;
        const RESIZING_BORDER_TOP = 0x0020;
        const RESIZING_BORDER_RIGHT = 0x0040;
        const RESIZING_BORDER_BOTTOM = 0x0080;
        const RESIZING_BORDER = 0x00F0;
        const SIZING_TEMPLATE = 0x0100;
        const SYSTEM_SIZING_MARGINS = 0x0200;
    }
}

/// Result of a background hit test.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HitTestCode {
    Nowhere = 0,
    Client = 1,
    Left = 10,
    Right = 11,
    Top = 12,
    TopLeft = 13,
    TopRight = 14,
    Bottom = 15,
    BottomLeft = 16,
    BottomRight = 17,
}

impl HitTestCode {
    /// Maps a native hit-test code; unrecognised codes count as `Nowhere`.
    pub fn from_native(code: i32) -> HitTestCode {
        match code {
            1 => HitTestCode::Client,
            10 => HitTestCode::Left,
            11 => HitTestCode::Right,
            12 => HitTestCode::Top,
            13 => HitTestCode::TopLeft,
            14 => HitTestCode::TopRight,
            15 => HitTestCode::Bottom,
            16 => HitTestCode::BottomLeft,
            17 => HitTestCode::BottomRight,
            _ => HitTestCode::Nowhere,
        }
    }
}
