use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const ACCENT_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_LOCKED: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

const DARK_BACKGROUND: Color = Color::Rgb(0x11, 0x18, 0x27);
const DARK_SURFACE: Color = Color::Rgb(0x1f, 0x29, 0x37);
const DARK_BORDER: Color = Color::Rgb(0x37, 0x41, 0x51);
const DARK_TEXT: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
const DARK_MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

const LIGHT_BACKGROUND: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
const LIGHT_SURFACE: Color = Color::Rgb(0xff, 0xff, 0xff);
const LIGHT_BORDER: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
const LIGHT_TEXT: Color = Color::Rgb(0x11, 0x18, 0x27);
const LIGHT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Colour scheme handed explicitly to every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub is_dark: bool,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        Self {
            is_dark: mode == ThemeMode::Dark,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self { is_dark: true }
    }

    pub fn light() -> Self {
        Self { is_dark: false }
    }

    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }

    pub fn background(self) -> Color {
        if self.is_dark {
            DARK_BACKGROUND
        } else {
            LIGHT_BACKGROUND
        }
    }

    pub fn surface(self) -> Color {
        if self.is_dark {
            DARK_SURFACE
        } else {
            LIGHT_SURFACE
        }
    }

    pub fn border(self) -> Color {
        if self.is_dark {
            DARK_BORDER
        } else {
            LIGHT_BORDER
        }
    }

    pub fn text(self) -> Color {
        if self.is_dark {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }

    pub fn muted(self) -> Color {
        if self.is_dark {
            DARK_MUTED
        } else {
            LIGHT_MUTED
        }
    }

    pub fn base(self) -> Style {
        Style::default().fg(self.text()).bg(self.background())
    }

    /// Style of the selected filter pill; identical in both schemes.
    pub fn active_pill(self) -> Style {
        Style::default()
            .fg(ACCENT_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of unselected filter pills; follows the scheme.
    pub fn inactive_pill(self) -> Style {
        Style::default().fg(self.muted()).bg(self.surface())
    }
}

/// Mixes `to` over `from` by `amount` (0.0 = `from`, 1.0 = `to`).
///
/// Only RGB colours blend; anything else snaps at the midpoint.
pub fn blend(from: Color, to: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if amount < 0.5 => from,
        _ => to,
    }
}
