use serde::{Deserialize, Serialize};

/// The two supported document locales. Locale selection flips text
/// direction and typography; it never changes section or column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// BCP 47 language tag, as emitted in `lang` attributes.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// HTML `dir` attribute value.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}
