//! Part and state tables for the common theme classes.
//!
//! Ids follow the values themes are authored against, so an element built here
//! can be handed to any engine that speaks the same numbering.

use crate::element::theme_classes;

theme_classes! {
    class button = "BUTTON" {
        part PushButton = 1 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Default = 5 }
        part RadioButton = 2 {
            UncheckedNormal = 1, UncheckedHot = 2, UncheckedPressed = 3, UncheckedDisabled = 4,
            CheckedNormal = 5, CheckedHot = 6, CheckedPressed = 7, CheckedDisabled = 8,
        }
        part CheckBox = 3 {
            UncheckedNormal = 1, UncheckedHot = 2, UncheckedPressed = 3, UncheckedDisabled = 4,
            CheckedNormal = 5, CheckedHot = 6, CheckedPressed = 7, CheckedDisabled = 8,
            MixedNormal = 9, MixedHot = 10, MixedPressed = 11, MixedDisabled = 12,
        }
        part GroupBox = 4 { Normal = 1, Disabled = 2 }
        part UserButton = 5 { Normal = 0 }
    }

    class edit = "EDIT" {
        part TextBox = 1 {
            Normal = 1, Hot = 2, Selected = 3, Disabled = 4, Focused = 5, ReadOnly = 6, Assist = 7,
        }
        part Caret = 2 { Normal = 0 }
    }

    class scroll_bar = "SCROLLBAR" {
        part ArrowButton = 1 {
            UpNormal = 1, UpHot = 2, UpPressed = 3, UpDisabled = 4,
            DownNormal = 5, DownHot = 6, DownPressed = 7, DownDisabled = 8,
            LeftNormal = 9, LeftHot = 10, LeftPressed = 11, LeftDisabled = 12,
            RightNormal = 13, RightHot = 14, RightPressed = 15, RightDisabled = 16,
        }
        part ThumbButtonHorizontal = 2 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4 }
        part ThumbButtonVertical = 3 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4 }
        part LeftTrackHorizontal = 4 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4 }
        part RightTrackHorizontal = 5 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4 }
        part UpperTrackVertical = 6 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4 }
        part LowerTrackVertical = 7 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4 }
        part GripperHorizontal = 8 { Normal = 0 }
        part GripperVertical = 9 { Normal = 0 }
        part SizeBox = 10 { RightAlign = 1, LeftAlign = 2 }
    }

    class progress_bar = "PROGRESS" {
        part Bar = 1 { Normal = 0 }
        part BarVertical = 2 { Normal = 0 }
        part Chunk = 3 { Normal = 0 }
        part ChunkVertical = 4 { Normal = 0 }
    }

    class tab = "TAB" {
        part TabItem = 1 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Focused = 5 }
        part TabItemLeftEdge = 2 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Focused = 5 }
        part TabItemRightEdge = 3 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Focused = 5 }
        part TabItemBothEdges = 4 { Normal = 0 }
        part TopTabItem = 5 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Focused = 5 }
        part Pane = 9 { Normal = 0 }
        part Body = 10 { Normal = 0 }
    }

    class track_bar = "TRACKBAR" {
        part Track = 1 { Normal = 1 }
        part TrackVertical = 2 { Normal = 1 }
        part Thumb = 3 { Normal = 1, Hot = 2, Pressed = 3, Focused = 4, Disabled = 5 }
        part ThumbBottom = 4 { Normal = 1, Hot = 2, Pressed = 3, Focused = 4, Disabled = 5 }
        part ThumbTop = 5 { Normal = 1, Hot = 2, Pressed = 3, Focused = 4, Disabled = 5 }
        part ThumbVertical = 6 { Normal = 1, Hot = 2, Pressed = 3, Focused = 4, Disabled = 5 }
        part ThumbLeft = 7 { Normal = 1, Hot = 2, Pressed = 3, Focused = 4, Disabled = 5 }
        part ThumbRight = 8 { Normal = 1, Hot = 2, Pressed = 3, Focused = 4, Disabled = 5 }
        part Ticks = 9 { Normal = 1 }
        part TicksVertical = 10 { Normal = 1 }
    }

    class tool_bar = "TOOLBAR" {
        part Button = 1 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Checked = 5, HotChecked = 6 }
        part DropDownButton = 2 {
            Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Checked = 5, HotChecked = 6,
        }
        part SplitButton = 3 { Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Checked = 5, HotChecked = 6 }
        part SplitButtonDropDown = 4 {
            Normal = 1, Hot = 2, Pressed = 3, Disabled = 4, Checked = 5, HotChecked = 6,
        }
        part SeparatorHorizontal = 5 { Normal = 0 }
        part SeparatorVertical = 6 { Normal = 0 }
    }

    class header = "HEADER" {
        part Item = 1 { Normal = 1, Hot = 2, Pressed = 3 }
        part ItemLeft = 2 { Normal = 1, Hot = 2, Pressed = 3 }
        part ItemRight = 3 { Normal = 1, Hot = 2, Pressed = 3 }
        part SortArrow = 4 { SortedUp = 1, SortedDown = 2 }
    }

    class window = "WINDOW" {
        part Caption = 1 { Active = 1, Inactive = 2, Disabled = 3 }
        part SmallCaption = 2 { Active = 1, Inactive = 2, Disabled = 3 }
        part MinCaption = 3 { Active = 1, Inactive = 2, Disabled = 3 }
        part FrameLeft = 7 { Active = 1, Inactive = 2 }
        part FrameRight = 8 { Active = 1, Inactive = 2 }
        part FrameBottom = 9 { Active = 1, Inactive = 2 }
        part MinButton = 15 { Normal = 1, Hot = 2, Pushed = 3, Disabled = 4 }
        part MaxButton = 17 { Normal = 1, Hot = 2, Pushed = 3, Disabled = 4 }
        part CloseButton = 18 { Normal = 1, Hot = 2, Pushed = 3, Disabled = 4 }
        part RestoreButton = 21 { Normal = 1, Hot = 2, Pushed = 3, Disabled = 4 }
        part HelpButton = 23 { Normal = 1, Hot = 2, Pushed = 3, Disabled = 4 }
    }
}
