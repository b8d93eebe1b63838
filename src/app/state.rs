use crate::app::keypad::{Button, KeypadCursor};
use crate::calc::session::Calculator;
use crate::config::{AppConfig, CalcMode, ThemeKind};

/// Ticks a pressed button stays highlighted (ticks are 50ms apart).
const FLASH_TICKS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Keypad,
    History,
}

pub struct AppState {
    pub config: AppConfig,
    pub calc: Calculator,
    pub mode: CalcMode,
    pub theme: ThemeKind,
    pub show_history: bool,
    pub show_help: bool,
    pub focus: FocusPanel,
    pub cursor: KeypadCursor,
    /// Selected history row while the history panel has focus.
    pub history_selected: Option<usize>,
    /// Button lit by the last press and the tick at which it goes dark.
    pub flash: Option<(Button, u64)>,
    /// Terminal size, used to hit-test mouse clicks.
    pub screen: (u16, u16),
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let calc = Calculator::new(config.ui.angle_unit);
        Self {
            mode: config.ui.start_mode,
            theme: config.ui.theme,
            show_history: config.ui.show_history,
            config,
            calc,
            show_help: false,
            focus: FocusPanel::Keypad,
            cursor: KeypadCursor::default(),
            history_selected: None,
            flash: None,
            screen: (0, 0),
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Keypad if self.show_history && !self.calc.history().is_empty() => {
                self.history_selected = Some(self.calc.history().len() - 1);
                FocusPanel::History
            }
            _ => {
                self.history_selected = None;
                FocusPanel::Keypad
            }
        };
        self.dirty = true;
    }

    pub fn toggle_mode(&mut self) {
        let selected = self.cursor.button(self.mode);
        self.mode = self.mode.toggled();
        // Follow the same button across grids; scientific-only keys fall
        // back to the nearest cell.
        match selected {
            Some(button) if self.cursor.select(self.mode, button) => {}
            _ => self.cursor.clamp(self.mode),
        }
        self.sync_preferences();
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
        if !self.show_history {
            self.focus = FocusPanel::Keypad;
            self.history_selected = None;
        }
        self.sync_preferences();
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.sync_preferences();
    }

    pub fn toggle_angle_unit(&mut self) {
        let unit = self.calc.angle_unit().toggled();
        self.calc.set_angle_unit(unit);
        self.sync_preferences();
    }

    /// Copy the live preferences back into the config so it can be saved.
    fn sync_preferences(&mut self) {
        let ui = &mut self.config.ui;
        ui.start_mode = self.mode;
        ui.theme = self.theme;
        ui.show_history = self.show_history;
        ui.angle_unit = self.calc.angle_unit();
        self.dirty = true;
    }

    pub fn history_up(&mut self) {
        if let Some(i) = self.history_selected {
            self.history_selected = Some(i.saturating_sub(1));
        }
    }

    pub fn history_down(&mut self) {
        if let Some(i) = self.history_selected {
            if i + 1 < self.calc.history().len() {
                self.history_selected = Some(i + 1);
            }
        }
    }

    /// Highlight a button for a few ticks.
    pub fn flash(&mut self, button: Button) {
        self.flash = Some((button, self.tick_count + FLASH_TICKS));
    }

    pub fn is_flashing(&self, button: Button) -> bool {
        matches!(self.flash, Some((b, _)) if b == button)
    }

    /// Drop an expired highlight. Returns whether anything changed.
    pub fn expire_flash(&mut self) -> bool {
        match self.flash {
            Some((_, until)) if self.tick_count >= until => {
                self.flash = None;
                true
            }
            _ => false,
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "{} | {} | {}",
            self.mode.label(),
            self.calc.angle_unit().label(),
            self.theme.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::ops::{AngleUnit, UnaryFn};

    #[test]
    fn test_new_uses_config_preferences() {
        let mut config = AppConfig::default();
        config.ui.start_mode = CalcMode::Scientific;
        config.ui.angle_unit = AngleUnit::Degrees;
        config.ui.show_history = false;
        let state = AppState::new(config);
        assert_eq!(state.mode, CalcMode::Scientific);
        assert_eq!(state.calc.angle_unit(), AngleUnit::Degrees);
        assert!(!state.show_history);
    }

    #[test]
    fn test_preferences_flow_back_to_config() {
        let mut state = AppState::new(AppConfig::default());
        state.toggle_mode();
        state.cycle_theme();
        state.toggle_angle_unit();
        assert_eq!(state.config.ui.start_mode, CalcMode::Scientific);
        assert_eq!(state.config.ui.theme, ThemeKind::Light);
        assert_eq!(state.config.ui.angle_unit, AngleUnit::Degrees);
    }

    #[test]
    fn test_mode_switch_keeps_selected_button() {
        let mut state = AppState::new(AppConfig::default());
        assert!(state.cursor.select(state.mode, Button::Digit('8')));
        state.toggle_mode();
        assert_eq!(state.mode, CalcMode::Scientific);
        assert_eq!(state.cursor.button(state.mode), Some(Button::Digit('8')));
        state.toggle_mode();
        assert_eq!(state.cursor.button(state.mode), Some(Button::Digit('8')));
    }

    #[test]
    fn test_mode_switch_from_scientific_only_button() {
        let mut config = AppConfig::default();
        config.ui.start_mode = CalcMode::Scientific;
        let mut state = AppState::new(config);
        let tan = Button::Unary(UnaryFn::Tan);
        assert!(state.cursor.select(state.mode, tan));
        state.toggle_mode();
        assert!(state.cursor.button(state.mode).is_some());
    }

    #[test]
    fn test_focus_needs_history() {
        let mut state = AppState::new(AppConfig::default());
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Keypad);
    }

    #[test]
    fn test_flash_expires() {
        let mut state = AppState::new(AppConfig::default());
        state.flash(Button::Equals);
        assert!(state.is_flashing(Button::Equals));
        assert!(!state.expire_flash());
        state.tick_count += FLASH_TICKS;
        assert!(state.expire_flash());
        assert!(!state.is_flashing(Button::Equals));
    }
}
