//! The fixed known-color table.
//!
//! Discriminants follow the classic ordering: system colors `1..=26`,
//! `Transparent = 27`, the web palette `28..=167`, then the later system colors
//! `168..=174`. The ARGB value listed for a system color is only its default;
//! the live value comes from the installed [`SystemPalette`](super::SystemPalette).

macro_rules! known_colors {
    ($( $variant:ident = $id:literal => $argb:literal, )*) => {
        /// Symbolic index into the known/system color palette.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum KnownColor {
            $( $variant = $id, )*
        }

        impl KnownColor {
            /// Every known color in discriminant order.
            pub const ALL: &'static [KnownColor] = &[ $( KnownColor::$variant, )* ];

            /// Display name, identical to the variant name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( KnownColor::$variant => stringify!($variant), )*
                }
            }

            /// Built-in ARGB value; for system colors this is the default palette entry.
            pub(crate) const fn default_argb(self) -> u32 {
                match self {
                    $( KnownColor::$variant => $argb, )*
                }
            }
        }
    };
}

known_colors! {
    ActiveBorder            =   1 => 0xFF_B4B4B4,
    ActiveCaption           =   2 => 0xFF_99B4D1,
    ActiveCaptionText       =   3 => 0xFF_000000,
    AppWorkspace            =   4 => 0xFF_ABABAB,
    Control                 =   5 => 0xFF_F0F0F0,
    ControlDark             =   6 => 0xFF_A0A0A0,
    ControlDarkDark         =   7 => 0xFF_696969,
    ControlLight            =   8 => 0xFF_E3E3E3,
    ControlLightLight       =   9 => 0xFF_FFFFFF,
    ControlText             =  10 => 0xFF_000000,
    Desktop                 =  11 => 0xFF_000000,
    GrayText                =  12 => 0xFF_6D6D6D,
    Highlight               =  13 => 0xFF_3399FF,
    HighlightText           =  14 => 0xFF_FFFFFF,
    HotTrack                =  15 => 0xFF_0066CC,
    InactiveBorder          =  16 => 0xFF_F4F7FC,
    InactiveCaption         =  17 => 0xFF_BFCDDB,
    InactiveCaptionText     =  18 => 0xFF_000000,
    Info                    =  19 => 0xFF_FFFFE1,
    InfoText                =  20 => 0xFF_000000,
    Menu                    =  21 => 0xFF_F0F0F0,
    MenuText                =  22 => 0xFF_000000,
    ScrollBar               =  23 => 0xFF_C8C8C8,
    Window                  =  24 => 0xFF_FFFFFF,
    WindowFrame             =  25 => 0xFF_646464,
    WindowText              =  26 => 0xFF_000000,
    Transparent             =  27 => 0x00_FFFFFF,
    AliceBlue               =  28 => 0xFF_F0F8FF,
    AntiqueWhite            =  29 => 0xFF_FAEBD7,
    Aqua                    =  30 => 0xFF_00FFFF,
    Aquamarine              =  31 => 0xFF_7FFFD4,
    Azure                   =  32 => 0xFF_F0FFFF,
    Beige                   =  33 => 0xFF_F5F5DC,
    Bisque                  =  34 => 0xFF_FFE4C4,
    Black                   =  35 => 0xFF_000000,
    BlanchedAlmond          =  36 => 0xFF_FFEBCD,
    Blue                    =  37 => 0xFF_0000FF,
    BlueViolet              =  38 => 0xFF_8A2BE2,
    Brown                   =  39 => 0xFF_A52A2A,
    BurlyWood               =  40 => 0xFF_DEB887,
    CadetBlue               =  41 => 0xFF_5F9EA0,
    Chartreuse              =  42 => 0xFF_7FFF00,
    Chocolate               =  43 => 0xFF_D2691E,
    Coral                   =  44 => 0xFF_FF7F50,
    CornflowerBlue          =  45 => 0xFF_6495ED,
    Cornsilk                =  46 => 0xFF_FFF8DC,
    Crimson                 =  47 => 0xFF_DC143C,
    Cyan                    =  48 => 0xFF_00FFFF,
    DarkBlue                =  49 => 0xFF_00008B,
    DarkCyan                =  50 => 0xFF_008B8B,
    DarkGoldenrod           =  51 => 0xFF_B8860B,
    DarkGray                =  52 => 0xFF_A9A9A9,
    DarkGreen               =  53 => 0xFF_006400,
    DarkKhaki               =  54 => 0xFF_BDB76B,
    DarkMagenta             =  55 => 0xFF_8B008B,
    DarkOliveGreen          =  56 => 0xFF_556B2F,
    DarkOrange              =  57 => 0xFF_FF8C00,
    DarkOrchid              =  58 => 0xFF_9932CC,
    DarkRed                 =  59 => 0xFF_8B0000,
    DarkSalmon              =  60 => 0xFF_E9967A,
    DarkSeaGreen            =  61 => 0xFF_8FBC8B,
    DarkSlateBlue           =  62 => 0xFF_483D8B,
    DarkSlateGray           =  63 => 0xFF_2F4F4F,
    DarkTurquoise           =  64 => 0xFF_00CED1,
    DarkViolet              =  65 => 0xFF_9400D3,
    DeepPink                =  66 => 0xFF_FF1493,
    DeepSkyBlue             =  67 => 0xFF_00BFFF,
    DimGray                 =  68 => 0xFF_696969,
    DodgerBlue              =  69 => 0xFF_1E90FF,
    Firebrick               =  70 => 0xFF_B22222,
    FloralWhite             =  71 => 0xFF_FFFAF0,
    ForestGreen             =  72 => 0xFF_228B22,
    Fuchsia                 =  73 => 0xFF_FF00FF,
    Gainsboro               =  74 => 0xFF_DCDCDC,
    GhostWhite              =  75 => 0xFF_F8F8FF,
    Gold                    =  76 => 0xFF_FFD700,
    Goldenrod               =  77 => 0xFF_DAA520,
    Gray                    =  78 => 0xFF_808080,
    Green                   =  79 => 0xFF_008000,
    GreenYellow             =  80 => 0xFF_ADFF2F,
    Honeydew                =  81 => 0xFF_F0FFF0,
    HotPink                 =  82 => 0xFF_FF69B4,
    IndianRed               =  83 => 0xFF_CD5C5C,
    Indigo                  =  84 => 0xFF_4B0082,
    Ivory                   =  85 => 0xFF_FFFFF0,
    Khaki                   =  86 => 0xFF_F0E68C,
    Lavender                =  87 => 0xFF_E6E6FA,
    LavenderBlush           =  88 => 0xFF_FFF0F5,
    LawnGreen               =  89 => 0xFF_7CFC00,
    LemonChiffon            =  90 => 0xFF_FFFACD,
    LightBlue               =  91 => 0xFF_ADD8E6,
    LightCoral              =  92 => 0xFF_F08080,
    LightCyan               =  93 => 0xFF_E0FFFF,
    LightGoldenrodYellow    =  94 => 0xFF_FAFAD2,
    LightGray               =  95 => 0xFF_D3D3D3,
    LightGreen              =  96 => 0xFF_90EE90,
    LightPink               =  97 => 0xFF_FFB6C1,
    LightSalmon             =  98 => 0xFF_FFA07A,
    LightSeaGreen           =  99 => 0xFF_20B2AA,
    LightSkyBlue            = 100 => 0xFF_87CEFA,
    LightSlateGray          = 101 => 0xFF_778899,
    LightSteelBlue          = 102 => 0xFF_B0C4DE,
    LightYellow             = 103 => 0xFF_FFFFE0,
    Lime                    = 104 => 0xFF_00FF00,
    LimeGreen               = 105 => 0xFF_32CD32,
    Linen                   = 106 => 0xFF_FAF0E6,
    Magenta                 = 107 => 0xFF_FF00FF,
    Maroon                  = 108 => 0xFF_800000,
    MediumAquamarine        = 109 => 0xFF_66CDAA,
    MediumBlue              = 110 => 0xFF_0000CD,
    MediumOrchid            = 111 => 0xFF_BA55D3,
    MediumPurple            = 112 => 0xFF_9370DB,
    MediumSeaGreen          = 113 => 0xFF_3CB371,
    MediumSlateBlue         = 114 => 0xFF_7B68EE,
    MediumSpringGreen       = 115 => 0xFF_00FA9A,
    MediumTurquoise         = 116 => 0xFF_48D1CC,
    MediumVioletRed         = 117 => 0xFF_C71585,
    MidnightBlue            = 118 => 0xFF_191970,
    MintCream               = 119 => 0xFF_F5FFFA,
    MistyRose               = 120 => 0xFF_FFE4E1,
    Moccasin                = 121 => 0xFF_FFE4B5,
    NavajoWhite             = 122 => 0xFF_FFDEAD,
    Navy                    = 123 => 0xFF_000080,
    OldLace                 = 124 => 0xFF_FDF5E6,
    Olive                   = 125 => 0xFF_808000,
    OliveDrab               = 126 => 0xFF_6B8E23,
    Orange                  = 127 => 0xFF_FFA500,
    OrangeRed               = 128 => 0xFF_FF4500,
    Orchid                  = 129 => 0xFF_DA70D6,
    PaleGoldenrod           = 130 => 0xFF_EEE8AA,
    PaleGreen               = 131 => 0xFF_98FB98,
    PaleTurquoise           = 132 => 0xFF_AFEEEE,
    PaleVioletRed           = 133 => 0xFF_DB7093,
    PapayaWhip              = 134 => 0xFF_FFEFD5,
    PeachPuff               = 135 => 0xFF_FFDAB9,
    Peru                    = 136 => 0xFF_CD853F,
    Pink                    = 137 => 0xFF_FFC0CB,
    Plum                    = 138 => 0xFF_DDA0DD,
    PowderBlue              = 139 => 0xFF_B0E0E6,
    Purple                  = 140 => 0xFF_800080,
    Red                     = 141 => 0xFF_FF0000,
    RosyBrown               = 142 => 0xFF_BC8F8F,
    RoyalBlue               = 143 => 0xFF_4169E1,
    SaddleBrown             = 144 => 0xFF_8B4513,
    Salmon                  = 145 => 0xFF_FA8072,
    SandyBrown              = 146 => 0xFF_F4A460,
    SeaGreen                = 147 => 0xFF_2E8B57,
    SeaShell                = 148 => 0xFF_FFF5EE,
    Sienna                  = 149 => 0xFF_A0522D,
    Silver                  = 150 => 0xFF_C0C0C0,
    SkyBlue                 = 151 => 0xFF_87CEEB,
    SlateBlue               = 152 => 0xFF_6A5ACD,
    SlateGray               = 153 => 0xFF_708090,
    Snow                    = 154 => 0xFF_FFFAFA,
    SpringGreen             = 155 => 0xFF_00FF7F,
    SteelBlue               = 156 => 0xFF_4682B4,
    Tan                     = 157 => 0xFF_D2B48C,
    Teal                    = 158 => 0xFF_008080,
    Thistle                 = 159 => 0xFF_D8BFD8,
    Tomato                  = 160 => 0xFF_FF6347,
    Turquoise               = 161 => 0xFF_40E0D0,
    Violet                  = 162 => 0xFF_EE82EE,
    Wheat                   = 163 => 0xFF_F5DEB3,
    White                   = 164 => 0xFF_FFFFFF,
    WhiteSmoke              = 165 => 0xFF_F5F5F5,
    Yellow                  = 166 => 0xFF_FFFF00,
    YellowGreen             = 167 => 0xFF_9ACD32,
    ButtonFace              = 168 => 0xFF_F0F0F0,
    ButtonHighlight         = 169 => 0xFF_FFFFFF,
    ButtonShadow            = 170 => 0xFF_A0A0A0,
    GradientActiveCaption   = 171 => 0xFF_B9D1EA,
    GradientInactiveCaption = 172 => 0xFF_D7E4F2,
    MenuBar                 = 173 => 0xFF_F0F0F0,
    MenuHighlight           = 174 => 0xFF_3399FF,
}

impl KnownColor {
    pub const COUNT: usize = KnownColor::ALL.len();

    /// Raw table index (`1..=174`).
    #[inline]
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Inverse of [`id`](Self::id).
    pub fn from_id(id: u16) -> Option<KnownColor> {
        let index = usize::from(id).checked_sub(1)?;
        KnownColor::ALL.get(index).copied()
    }

    /// Case-insensitive lookup by name (`"red"`, `"ControlDark"`).
    pub fn from_name(name: &str) -> Option<KnownColor> {
        KnownColor::ALL
            .iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// System colors follow the user's desktop settings rather than a fixed value.
    #[inline]
    pub const fn is_system(self) -> bool {
        let id = self as u16;
        id <= KnownColor::WindowText as u16 || id > KnownColor::YellowGreen as u16
    }
}
