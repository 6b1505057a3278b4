use std::fmt;

/// A themed part in a particular state.
///
/// Implemented by the generated state enums in [`crate::classes`]; each enum
/// variant is one state of one part.
pub trait Part: Copy {
    /// Theme class the part belongs to, e.g. `"BUTTON"`.
    const CLASS_NAME: &'static str;
    /// Native part id within the class.
    const PART_ID: i32;

    fn state_id(self) -> i32;

    #[inline]
    fn element(self) -> VisualStyleElement {
        VisualStyleElement::new(Self::CLASS_NAME, Self::PART_ID, self.state_id())
    }
}

/// Class name, part id, and state id identifying one themed element.
///
/// Class names compare exactly; theme engines generally match them without
/// regard to case, so stick to the spellings in [`crate::classes`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VisualStyleElement {
    pub class_name: &'static str,
    pub part: i32,
    pub state: i32,
}

impl VisualStyleElement {
    #[inline]
    pub const fn new(class_name: &'static str, part: i32, state: i32) -> Self {
        Self { class_name, part, state }
    }
}

impl<P: Part> From<P> for VisualStyleElement {
    #[inline]
    fn from(part: P) -> Self {
        part.element()
    }
}

impl fmt::Display for VisualStyleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.class_name, self.part, self.state)
    }
}

/// Declares theme classes, their parts, and each part's states.
///
/// Every part becomes a `#[repr(i32)]` enum of its states implementing
/// [`Part`]. Parts without states list a single `Normal = 0`.
macro_rules! theme_classes {
    ($(
        $(#[$cmeta:meta])*
        class $module:ident = $class:literal {
            $(
                $(#[$pmeta:meta])*
                part $part:ident = $part_id:literal {
                    $( $state:ident = $state_id:literal ),+ $(,)?
                }
            )+
        }
    )+) => {$(
        $(#[$cmeta])*
        pub mod $module {
            pub const CLASS_NAME: &str = $class;

            $(
                $(#[$pmeta])*
                #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
                #[repr(i32)]
                pub enum $part {
                    $( $state = $state_id, )+
                }

                impl $part {
                    pub const ALL: &'static [$part] = &[$( $part::$state, )+];
                }

                impl $crate::element::Part for $part {
                    const CLASS_NAME: &'static str = $class;
                    const PART_ID: i32 = $part_id;

                    #[inline]
                    fn state_id(self) -> i32 {
                        self as i32
                    }
                }
            )+
        }
    )+};
}

pub(crate) use theme_classes;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{button, scroll_bar, window};

    #[test]
    fn part_maps_to_element() {
        let e = button::PushButton::Pressed.element();
        assert_eq!(e, VisualStyleElement::new("BUTTON", 1, 3));
        assert_eq!(VisualStyleElement::from(button::CheckBox::MixedHot), VisualStyleElement::new("BUTTON", 3, 10));
    }

    #[test]
    fn stateless_parts_use_state_zero() {
        let e = scroll_bar::GripperHorizontal::Normal.element();
        assert_eq!((e.part, e.state), (8, 0));
    }

    #[test]
    fn all_lists_states_in_order() {
        let ids: Vec<i32> = window::CloseButton::ALL.iter().map(|s| s.state_id()).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(button::CheckBox::ALL.len(), 12);
    }

    #[test]
    fn display() {
        assert_eq!(window::Caption::Inactive.element().to_string(), "WINDOW/1/2");
    }
}
