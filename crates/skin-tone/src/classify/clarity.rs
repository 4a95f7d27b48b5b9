//! Clarity: how saturated the skin color is.

use crate::color::Lab;

const CLEAR_FROM: f64 = 10.0;
const VIVID_FROM: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clarity {
    Muted,
    Clear,
    Vivid,
}

label_enum!(Clarity, "clarity", {
    Muted => "muted",
    Clear => "clear",
    Vivid => "vivid",
});

/// Classify clarity from chroma: below 10 muted, below 20 clear, else vivid.
pub fn classify_clarity(lab: &Lab) -> Clarity {
    let chroma = lab.chroma();
    if chroma < CLEAR_FROM {
        Clarity::Muted
    } else if chroma < VIVID_FROM {
        Clarity::Clear
    } else {
        Clarity::Vivid
    }
}
