//! Tailwind class vocabulary the server-rendered markup is styled with. The
//! scripts only ever add or remove these classes.

pub struct Theme;

impl Theme {
    /// Removes an element from the layout.
    pub const HIDDEN: &'static str = "hidden";

    /// Checklist item whose rule is not yet met.
    pub const INDICATOR_UNMET: &'static str = "text-red-500";
    /// Checklist item whose rule is met.
    pub const INDICATOR_MET: &'static str = "text-blue-500";

    pub const SUCCESS_OUTLINE: &'static str = "outline-blue-600";
    pub const SUCCESS_TEXT: &'static str = "text-blue-600";
    pub const SUCCESS_BORDER: &'static str = "border-blue-600";

    pub const ERROR_OUTLINE: &'static str = "outline-red-600";
    pub const ERROR_TEXT: &'static str = "text-red-600";

    /// Default field border before any feedback is shown.
    pub const NEUTRAL_BORDER: &'static str = "border-gray-400";
}

/// Vector path drawn inside a checklist icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconPath {
    pub d: &'static str,
    pub stroke_width: &'static str,
}

impl IconPath {
    pub const CHECK: IconPath = IconPath {
        d: "M4.5 12.75l6 6 9-13.5",
        stroke_width: "3",
    };

    pub const CROSS: IconPath = IconPath {
        d: "M6 18L18 6M6 6l12 12",
        stroke_width: "2",
    };
}
