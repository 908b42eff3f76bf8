use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Font, Shadow, Vector};

pub(crate) const BOLD: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    stretch: iced::font::Stretch::Normal,
    style: iced::font::Style::Normal,
};

pub(crate) const SEMIBOLD: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Semibold,
    stretch: iced::font::Stretch::Normal,
    style: iced::font::Style::Normal,
};

/// How the theme is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub(crate) fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Convert an HSL triple (hue in degrees, saturation and lightness in
/// percent) to an iced color.
pub(crate) fn hsl(h: f32, s: f32, l: f32) -> Color {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    Color::from_rgb(f(0.0), f(8.0), f(4.0))
}

/// All colors and font sizes used throughout the app, derived from the
/// active theme.
///
/// The palette is a neutral HSL lightness ladder: in dark mode the base
/// sits at 0% lightness and every layer closer to the user is lighter
/// (cards 5%, raised elements 10%, nested surfaces 20%, text 90%+).
/// Light mode mirrors the ladder from 100% down.
pub(crate) struct ThemeColors {
    pub(crate) is_dark: bool,
    // Surfaces, deepest first
    pub(crate) base: Color,
    pub(crate) card: Color,
    pub(crate) raised: Color,
    pub(crate) nested: Color,
    // Interactive surface states
    pub(crate) hover: Color,
    pub(crate) pressed: Color,
    pub(crate) active: Color,
    // Borders
    pub(crate) border_subtle: Color,
    pub(crate) border_medium: Color,
    pub(crate) border_top: Color,
    // Text emphasis levels
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) text_disabled: Color,
    pub(crate) text_emphasized: Color,
    // Shadow
    pub(crate) shadow: Color,
    // Font sizes (logical pixels)
    /// Screen titles ("My Habits")
    pub(crate) title_size: f32,
    /// Card headings, stat lines
    pub(crate) heading_size: f32,
    /// Body copy: descriptions, form values
    pub(crate) body_text: f32,
    /// Form labels, tab labels, toggle link
    pub(crate) label_text: f32,
    /// Frequency badge, card metadata
    pub(crate) badge_text: f32,
    /// Version line at the bottom
    pub(crate) info_text: f32,
    /// Ticker digits
    pub(crate) ticker_size: f32,
}

impl ThemeColors {
    /// Dark theme — the original palette: pure-neutral grays on black.
    pub(crate) fn dark() -> Self {
        Self {
            is_dark: true,
            base: hsl(0.0, 0.0, 0.0),
            card: hsl(0.0, 0.0, 5.0),
            raised: hsl(0.0, 0.0, 10.0),
            nested: hsl(0.0, 0.0, 20.0),
            hover: hsl(0.0, 0.0, 12.0),
            pressed: hsl(0.0, 0.0, 8.0),
            active: hsl(0.0, 0.0, 14.0),
            border_subtle: hsl(0.0, 0.0, 15.0),
            border_medium: hsl(0.0, 0.0, 20.0),
            border_top: hsl(0.0, 0.0, 10.0),
            text_primary: hsl(0.0, 0.0, 90.0),
            text_secondary: hsl(0.0, 0.0, 70.0),
            text_muted: hsl(0.0, 0.0, 50.0),
            text_disabled: hsl(0.0, 0.0, 35.0),
            text_emphasized: hsl(0.0, 0.0, 95.0),
            shadow: hsl(0.0, 0.0, 0.0),
            title_size: 30.0,
            heading_size: 20.0,
            body_text: 15.0,
            label_text: 13.0,
            badge_text: 12.0,
            info_text: 10.0,
            ticker_size: 56.0,
        }
    }

    /// Light theme — the same ladder mirrored from white down.
    pub(crate) fn light() -> Self {
        Self {
            is_dark: false,
            base: hsl(0.0, 0.0, 100.0),
            card: hsl(0.0, 0.0, 95.0),
            raised: hsl(0.0, 0.0, 90.0),
            nested: hsl(0.0, 0.0, 80.0),
            hover: hsl(0.0, 0.0, 88.0),
            pressed: hsl(0.0, 0.0, 92.0),
            active: hsl(0.0, 0.0, 86.0),
            border_subtle: hsl(0.0, 0.0, 85.0),
            border_medium: hsl(0.0, 0.0, 80.0),
            border_top: hsl(0.0, 0.0, 90.0),
            text_primary: hsl(0.0, 0.0, 10.0),
            text_secondary: hsl(0.0, 0.0, 30.0),
            text_muted: hsl(0.0, 0.0, 50.0),
            text_disabled: hsl(0.0, 0.0, 65.0),
            text_emphasized: hsl(0.0, 0.0, 5.0),
            shadow: hsl(0.0, 0.0, 40.0),
            title_size: 30.0,
            heading_size: 20.0,
            body_text: 15.0,
            label_text: 13.0,
            badge_text: 12.0,
            info_text: 10.0,
            ticker_size: 56.0,
        }
    }

    fn soft_shadow(&self) -> Shadow {
        Shadow {
            color: Color { a: 0.3, ..self.shadow },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        }
    }

    fn raised_shadow(&self) -> Shadow {
        Shadow {
            color: Color { a: 0.5, ..self.shadow },
            offset: Vector::new(0.0, 3.0),
            blur_radius: 5.0,
        }
    }

    /// Main card surface with a subtle top-lit border.
    pub(crate) fn card_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let background = self.card;
        let border = self.border_top;
        let shadow = self.soft_shadow();
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 10.0.into(),
            },
            shadow,
            ..Default::default()
        }
    }

    /// Raised surface: one step closer to the user than a card.
    pub(crate) fn raised_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let background = self.raised;
        let border = self.border_subtle;
        let shadow = self.raised_shadow();
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 10.0.into(),
            },
            shadow,
            ..Default::default()
        }
    }

    /// Nested surface inside a card (frequency badge, streak strip).
    pub(crate) fn nested_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let background = self.nested;
        let border = self.border_medium;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    /// Header and tab bar chrome: card surface, no rounding.
    pub(crate) fn chrome_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let background = self.card;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        }
    }

    /// Primary action button: raised at rest, lighter on hover, pushed
    /// down (darker, shorter shadow) while pressed.
    pub(crate) fn raised_button_style(
        &self,
    ) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let raised = self.raised;
        let hover = self.hover;
        let pressed = self.pressed;
        let border = self.border_top;
        let text = self.text_emphasized;
        let disabled_text = self.text_disabled;
        let soft = self.soft_shadow();
        let lifted = self.raised_shadow();
        move |_theme: &iced::Theme, status: button::Status| {
            let (background, text_color, shadow) = match status {
                button::Status::Active => (raised, text, lifted),
                button::Status::Hovered => (hover, text, lifted),
                button::Status::Pressed => (pressed, text, soft),
                button::Status::Disabled => (raised, disabled_text, soft),
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 10.0.into(),
                },
                shadow,
                ..Default::default()
            }
        }
    }

    /// Selectable chip (frequency options): raised when selected, a
    /// plain card otherwise.
    pub(crate) fn chip_button_style(
        &self,
        selected: bool,
    ) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let rest = if selected { self.raised } else { self.card };
        let hover = self.hover;
        let pressed = self.pressed;
        let border = if selected { self.border_top } else { self.border_subtle };
        let text = if selected { self.text_emphasized } else { self.text_secondary };
        let shadow = if selected { self.raised_shadow() } else { self.soft_shadow() };
        move |_theme: &iced::Theme, status: button::Status| {
            let background = match status {
                button::Status::Hovered => hover,
                button::Status::Pressed => pressed,
                _ => rest,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: text,
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow,
                ..Default::default()
            }
        }
    }

    /// Tab bar button: the active tab gets a raised circular pill, the
    /// rest stay flat on the bar.
    pub(crate) fn tab_button_style(
        &self,
        active: bool,
    ) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let raised = self.raised;
        let hover = self.hover;
        let border = self.active;
        let text = if active { self.text_emphasized } else { self.text_muted };
        let shadow = self.raised_shadow();
        move |_theme: &iced::Theme, status: button::Status| {
            let background = if active {
                Some(Background::Color(raised))
            } else if status == button::Status::Hovered {
                Some(Background::Color(hover))
            } else {
                None
            };
            button::Style {
                background,
                text_color: text,
                border: Border {
                    color: if active { border } else { Color::TRANSPARENT },
                    width: if active { 1.0 } else { 0.0 },
                    radius: 18.0.into(),
                },
                shadow: if active { shadow } else { Shadow::default() },
                ..Default::default()
            }
        }
    }

    /// Text inputs: card surface, subtle border brightening on hover.
    pub(crate) fn input_style(
        &self,
    ) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style {
        let background = self.card;
        let border_rest = self.border_subtle;
        let border_hover = self.border_medium;
        let value = self.text_primary;
        let placeholder = self.text_muted;
        let selection = self.nested;
        move |theme: &iced::Theme, status: text_input::Status| {
            let border_color = match status {
                text_input::Status::Hovered => border_hover,
                _ => border_rest,
            };
            let mut style = text_input::default(theme, status);
            style.background = Background::Color(background);
            style.border = Border {
                color: border_color,
                width: 1.0,
                radius: 8.0.into(),
            };
            style.placeholder = placeholder;
            style.value = value;
            style.selection = selection;
            style
        }
    }
}

/// Resolve the ThemeColors for a given mode.
pub(crate) fn resolve(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_extremes() {
        let black = hsl(0.0, 0.0, 0.0);
        assert_eq!((black.r, black.g, black.b), (0.0, 0.0, 0.0));

        let white = hsl(0.0, 0.0, 100.0);
        assert_eq!((white.r, white.g, white.b), (1.0, 1.0, 1.0));
    }

    #[test]
    fn hsl_neutral_gray_has_equal_channels() {
        let gray = hsl(0.0, 0.0, 50.0);
        assert!((gray.r - 0.5).abs() < 0.001);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn hsl_saturated_red() {
        let red = hsl(0.0, 100.0, 50.0);
        assert!((red.r - 1.0).abs() < 0.001);
        assert!(red.g.abs() < 0.001);
        assert!(red.b.abs() < 0.001);
    }

    #[test]
    fn dark_ladder_gets_lighter_toward_the_user() {
        let colors = ThemeColors::dark();
        assert!(colors.base.r < colors.card.r);
        assert!(colors.card.r < colors.raised.r);
        assert!(colors.raised.r < colors.nested.r);
        assert!(colors.text_primary.r < colors.text_emphasized.r);
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert!(resolve(ThemeMode::Dark).is_dark);
        assert!(!resolve(ThemeMode::Light).is_dark);
    }
}
