use crate::app::keypad::ButtonKind;
use crate::config::ThemeKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Color palette for one [`ThemeKind`].
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
    pub operator: Color,
    pub function: Color,
    pub memory: Color,
    pub error: Color,
}

impl Theme {
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Theme {
                bg: Color::Rgb(24, 26, 32),
                surface: Color::Rgb(38, 41, 50),
                border: Color::Rgb(70, 74, 88),
                accent: Color::Rgb(80, 200, 210),
                text: Color::Rgb(225, 228, 235),
                text_muted: Color::Rgb(120, 126, 140),
                operator: Color::Rgb(230, 180, 80),
                function: Color::Rgb(175, 140, 220),
                memory: Color::Rgb(90, 210, 130),
                error: Color::Rgb(235, 95, 95),
            },
            ThemeKind::Light => Theme {
                bg: Color::Rgb(245, 245, 240),
                surface: Color::Rgb(228, 228, 222),
                border: Color::Rgb(170, 170, 160),
                accent: Color::Rgb(20, 120, 170),
                text: Color::Rgb(30, 30, 30),
                text_muted: Color::Rgb(115, 115, 110),
                operator: Color::Rgb(190, 100, 20),
                function: Color::Rgb(120, 60, 170),
                memory: Color::Rgb(30, 140, 70),
                error: Color::Rgb(200, 40, 40),
            },
            ThemeKind::Amber => Theme {
                bg: Color::Rgb(18, 12, 4),
                surface: Color::Rgb(40, 26, 8),
                border: Color::Rgb(110, 70, 20),
                accent: Color::Rgb(255, 176, 0),
                text: Color::Rgb(255, 190, 60),
                text_muted: Color::Rgb(150, 100, 30),
                operator: Color::Rgb(255, 210, 120),
                function: Color::Rgb(230, 150, 40),
                memory: Color::Rgb(255, 220, 150),
                error: Color::Rgb(255, 90, 40),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused(&self) -> BorderType {
        BorderType::Thick
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn display_text(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn indicator(&self) -> Style {
        Style::default().fg(self.memory).add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, kind: ButtonKind) -> Style {
        let fg = match kind {
            ButtonKind::Digit => self.text,
            ButtonKind::Operator => self.operator,
            ButtonKind::Edit => self.error,
            ButtonKind::Function => self.function,
            ButtonKind::Memory => self.memory,
        };
        Style::default().fg(fg).bg(self.surface)
    }

    pub fn button_selected(&self, kind: ButtonKind) -> Style {
        self.button(kind)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn button_pressed(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn history_selected(&self) -> Style {
        Style::default().fg(self.bg).bg(self.accent)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn status_error(&self) -> Style {
        Style::default().fg(self.error).bg(self.surface)
    }
}
