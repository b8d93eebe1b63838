use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::keypad::Button;
use crate::app::state::*;
use crate::calc::error::CalcError;
use crate::calc::ops::{Operator, UnaryFn};
use crate::calc::session::MemoryOp;
use crate::ui;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Pasted(text) => {
            paste_text(state, &text);
            vec![]
        }
        AppEvent::ClipboardError(error) => {
            state.status_message = Some(format!("Clipboard unavailable: {}", error));
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.expire_flash() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Paste(text) => {
            paste_text(state, &text);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.screen = (width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    state.status_message = None;

    // Help popup captures all input when visible
    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return vec![];
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return handle_chord(state, key);
    }

    match key.code {
        KeyCode::F(1) => {
            state.show_help = true;
            vec![]
        }
        KeyCode::F(2) => {
            state.toggle_mode();
            vec![Action::SaveConfig]
        }
        KeyCode::F(3) => {
            state.toggle_history();
            vec![Action::SaveConfig]
        }
        KeyCode::F(4) => {
            state.cycle_theme();
            vec![Action::SaveConfig]
        }
        KeyCode::F(5) => {
            state.toggle_angle_unit();
            vec![Action::SaveConfig]
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Esc => press_button(state, Button::Clear),
        KeyCode::Backspace | KeyCode::Delete => press_button(state, Button::Backspace),
        KeyCode::Enter => match (state.focus, state.history_selected) {
            (FocusPanel::History, Some(index)) => {
                state.calc.reuse_history(index);
                state.focus = FocusPanel::Keypad;
                state.history_selected = None;
                vec![]
            }
            _ => press_button(state, Button::Equals),
        },
        KeyCode::Up => {
            match state.focus {
                FocusPanel::Keypad => state.cursor.move_up(state.mode),
                FocusPanel::History => state.history_up(),
            }
            vec![]
        }
        KeyCode::Down => {
            match state.focus {
                FocusPanel::Keypad => state.cursor.move_down(state.mode),
                FocusPanel::History => state.history_down(),
            }
            vec![]
        }
        KeyCode::Left => {
            state.cursor.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.cursor.move_right(state.mode);
            vec![]
        }
        KeyCode::Char(' ') => match state.cursor.button(state.mode) {
            Some(button) => press_button(state, button),
            None => vec![],
        },
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char(c) => match button_for_char(c) {
            Some(button) => press_button(state, button),
            None => vec![],
        },
        _ => vec![],
    }
}

/// Ctrl/Alt shortcuts: clipboard, memory and quit.
///
/// Most terminals send Ctrl+M as a plain Enter unless keyboard enhancement
/// is available, so Alt+M is accepted as well.
fn handle_chord(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let KeyCode::Char(c) = key.code else {
        return vec![];
    };
    let shifted = key.modifiers.contains(KeyModifiers::SHIFT) || c.is_ascii_uppercase();
    match c.to_ascii_lowercase() {
        'q' => vec![Action::Quit],
        'c' => vec![Action::CopyToClipboard {
            text: state.calc.copy_text(),
        }],
        'v' => vec![Action::PasteFromClipboard],
        'm' if shifted => press_button(state, Button::Memory(MemoryOp::Clear)),
        'm' => press_button(state, Button::Memory(MemoryOp::Store)),
        'r' => press_button(state, Button::Memory(MemoryOp::Recall)),
        'p' => press_button(state, Button::Memory(MemoryOp::Add)),
        'n' => press_button(state, Button::Memory(MemoryOp::Subtract)),
        _ => vec![],
    }
}

/// Plain character keys that stand for a keypad button.
fn button_for_char(c: char) -> Option<Button> {
    let button = match c {
        '0'..='9' => Button::Digit(c),
        '.' | ',' => Button::Decimal,
        '=' => Button::Equals,
        '~' => Button::Negate,
        'r' => Button::Unary(UnaryFn::Sqrt),
        'w' => Button::Unary(UnaryFn::Square),
        's' => Button::Unary(UnaryFn::Sin),
        'c' => Button::Unary(UnaryFn::Cos),
        't' => Button::Unary(UnaryFn::Tan),
        'l' => Button::Unary(UnaryFn::Log10),
        'n' => Button::Unary(UnaryFn::Ln),
        'i' => Button::Unary(UnaryFn::Reciprocal),
        'p' => Button::Unary(UnaryFn::Pi),
        'e' => Button::Unary(UnaryFn::E),
        _ => Button::Operator(Operator::from_char(c)?),
    };
    Some(button)
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let Some((row, col)) = ui::keypad_button_at(state, mouse.column, mouse.row) else {
        return vec![];
    };
    state.cursor.row = row;
    state.cursor.col = col;
    state.focus = FocusPanel::Keypad;
    state.history_selected = None;
    match state.cursor.button(state.mode) {
        Some(button) => press_button(state, button),
        None => vec![],
    }
}

/// Run one keypad button against the calculator.
pub fn press_button(state: &mut AppState, button: Button) -> Vec<Action> {
    state.flash(button);
    let calc = &mut state.calc;
    let outcome: Result<(), CalcError> = match button {
        Button::Digit(d) => {
            calc.press_digit(d);
            Ok(())
        }
        Button::Decimal => {
            calc.press_digit('.');
            Ok(())
        }
        Button::Operator(op) => {
            calc.press_operator(op);
            Ok(())
        }
        Button::Equals => calc.press_equals().map(|_| ()),
        Button::Clear => {
            calc.press_clear();
            Ok(())
        }
        Button::Backspace => {
            calc.press_backspace();
            Ok(())
        }
        Button::Negate => {
            calc.press_negate();
            Ok(())
        }
        Button::Unary(f) => calc.press_unary(f).map(|_| ()),
        Button::Memory(op) => {
            calc.press_memory(op);
            Ok(())
        }
    };
    debug!(button = button.label(), state = ?calc.state(), "pressed");
    if let Err(err) = outcome {
        state.status_message = Some(capitalize(&err.to_string()));
    }
    state.dirty = true;
    vec![]
}

fn paste_text(state: &mut AppState, text: &str) {
    if state.calc.paste(text) {
        state.dirty = true;
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
