use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Club themes shipped with the stylesheet (`body.theme-<key>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeKey {
    #[strum(serialize = "manunited")]
    ManUnited,
    #[strum(serialize = "mancity")]
    ManCity,
    Liverpool,
    Arsenal,
    Tottenham,
    Chelsea,
    Newcastle,
    #[strum(serialize = "astonvilla")]
    AstonVilla,
}

impl ThemeKey {
    /// Name fragment that selects this theme
    fn pattern(self) -> &'static str {
        match self {
            ThemeKey::ManUnited => "manchester united",
            ThemeKey::ManCity => "manchester city",
            ThemeKey::Liverpool => "liverpool",
            ThemeKey::Arsenal => "arsenal",
            ThemeKey::Tottenham => "tottenham",
            ThemeKey::Chelsea => "chelsea",
            ThemeKey::Newcastle => "newcastle",
            ThemeKey::AstonVilla => "aston villa",
        }
    }

    /// First theme (in declaration order) whose pattern occurs in the team name
    pub fn from_team_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        ThemeKey::iter().find(|key| name.contains(key.pattern()))
    }

    pub fn body_class(self) -> String {
        format!("theme-{}", self.as_ref())
    }
}

pub const DEFAULT_PRIMARY: &str = "#222";
pub const DEFAULT_SECONDARY: &str = "#555";

/// CSS custom properties derived from a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

impl TeamColors {
    pub fn new(primary: &str, secondary: &str) -> Self {
        let pick = |value: &str, fallback: &str| {
            if value.trim().is_empty() { fallback.to_string() } else { value.to_string() }
        };
        Self {
            primary: pick(primary, DEFAULT_PRIMARY),
            secondary: pick(secondary, DEFAULT_SECONDARY),
        }
    }
}

impl Default for TeamColors {
    fn default() -> Self {
        Self::new("", "")
    }
}
