//! Theme service: palettes, the persisted preference, and the system
//! appearance fallback.

pub mod appearance;
pub mod store;

use termpage::Color;

use appearance::Appearance;

pub use store::{PreferenceStore, StoreError};

/// Preference key for the explicit theme choice, `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    Light,
    Dark,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeId::Light),
            "dark" => Some(ThemeId::Dark),
            _ => None,
        }
    }

    /// Toggle control glyph: ☀️ while dark, 🌙 while light.
    pub fn glyph(&self) -> &'static str {
        match self {
            ThemeId::Dark => "☀️",
            ThemeId::Light => "🌙",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeId::Dark => dark_palette(),
            ThemeId::Light => light_palette(),
        }
    }
}

impl From<Appearance> for ThemeId {
    fn from(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => ThemeId::Dark,
            Appearance::Light => ThemeId::Light,
        }
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub input_background: Color,
    pub input_border_focused: Color,
}

pub fn dark_palette() -> Palette {
    Palette {
        background: Color::oklch(0.15, 0.01, 280.0),
        surface: Color::oklch(0.20, 0.02, 280.0),
        border: Color::oklch(0.30, 0.02, 280.0),
        text: Color::oklch(0.90, 0.0, 0.0),
        muted: Color::oklch(0.55, 0.02, 280.0),
        accent: Color::oklch(0.60, 0.15, 280.0),
        success: Color::oklch(0.70, 0.15, 145.0),
        error: Color::oklch(0.65, 0.20, 25.0),
        input_background: Color::oklch(0.22, 0.02, 280.0),
        input_border_focused: Color::oklch(0.60, 0.15, 280.0),
    }
}

pub fn light_palette() -> Palette {
    Palette {
        background: Color::oklch(0.97, 0.005, 280.0),
        surface: Color::oklch(0.93, 0.01, 280.0),
        border: Color::oklch(0.75, 0.02, 280.0),
        text: Color::oklch(0.25, 0.01, 280.0),
        muted: Color::oklch(0.50, 0.02, 280.0),
        accent: Color::oklch(0.50, 0.17, 280.0),
        success: Color::oklch(0.55, 0.15, 145.0),
        error: Color::oklch(0.50, 0.20, 25.0),
        input_background: Color::oklch(0.99, 0.0, 0.0),
        input_border_focused: Color::oklch(0.50, 0.17, 280.0),
    }
}

/// Which theme the page shows, and why.
///
/// An explicit stored choice always wins; the live system signal only
/// steers while no choice has been stored.
#[derive(Debug, Clone)]
pub struct ThemeService {
    stored: Option<ThemeId>,
    system: Appearance,
}

impl ThemeService {
    pub fn new(system: Appearance) -> Self {
        Self {
            stored: None,
            system,
        }
    }

    /// Read the persisted choice. An absent key leaves the system signal
    /// in charge.
    pub async fn load(
        store: &PreferenceStore,
        system: Appearance,
    ) -> Result<Self, StoreError> {
        let stored = store
            .get::<String>(THEME_KEY)
            .await?
            .and_then(|value| ThemeId::parse(&value));
        Ok(Self { stored, system })
    }

    pub fn current(&self) -> ThemeId {
        self.stored.unwrap_or(self.system.into())
    }

    pub fn stored(&self) -> Option<ThemeId> {
        self.stored
    }

    /// User toggle: flips the displayed theme and makes the result the
    /// explicit choice. The caller persists the returned theme.
    pub fn toggle(&mut self) -> ThemeId {
        let next = match self.current() {
            ThemeId::Dark => ThemeId::Light,
            ThemeId::Light => ThemeId::Dark,
        };
        self.stored = Some(next);
        next
    }

    /// Live system change. Returns true when the displayed theme actually
    /// changed, which only happens while no choice is stored.
    pub fn system_changed(&mut self, appearance: Appearance) -> bool {
        let before = self.current();
        self.system = appearance;
        self.current() != before
    }

    pub fn glyph(&self) -> &'static str {
        self.current().glyph()
    }

    pub fn palette(&self) -> Palette {
        self.current().palette()
    }
}
