//! The on-screen button grid.
//!
//! Buttons map straight onto [`Calculator`](crate::calc::session::Calculator)
//! calls; keyboard input goes through the same [`Button`] values so that a
//! key press lights up the matching button.

use crate::calc::ops::{Operator, UnaryFn};
use crate::calc::session::MemoryOp;
use crate::config::CalcMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Negate,
    Unary(UnaryFn),
    Memory(MemoryOp),
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => digit_label(d),
            Button::Decimal => ".",
            Button::Operator(Operator::Add) => "+",
            Button::Operator(Operator::Subtract) => "−",
            Button::Operator(Operator::Multiply) => "×",
            Button::Operator(Operator::Divide) => "÷",
            Button::Operator(Operator::Power) => "xʸ",
            Button::Equals => "=",
            Button::Clear => "C",
            Button::Backspace => "⌫",
            Button::Negate => "±",
            Button::Unary(f) => f.label(),
            Button::Memory(op) => op.label(),
        }
    }

    pub fn kind(self) -> ButtonKind {
        match self {
            Button::Digit(_) | Button::Decimal => ButtonKind::Digit,
            Button::Operator(_) | Button::Equals => ButtonKind::Operator,
            Button::Clear | Button::Backspace | Button::Negate => ButtonKind::Edit,
            Button::Unary(_) => ButtonKind::Function,
            Button::Memory(_) => ButtonKind::Memory,
        }
    }
}

/// Used by the theme to color groups of buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Edit,
    Function,
    Memory,
}

fn digit_label(d: char) -> &'static str {
    match d {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        _ => "?",
    }
}

const MEMORY_ROW: &[Button] = &[
    Button::Memory(MemoryOp::Clear),
    Button::Memory(MemoryOp::Recall),
    Button::Memory(MemoryOp::Add),
    Button::Memory(MemoryOp::Subtract),
    Button::Memory(MemoryOp::Store),
];

const SCIENTIFIC_ROWS: &[&[Button]] = &[
    &[
        Button::Unary(UnaryFn::Sin),
        Button::Unary(UnaryFn::Cos),
        Button::Unary(UnaryFn::Tan),
        Button::Unary(UnaryFn::Pi),
    ],
    &[
        Button::Unary(UnaryFn::Log10),
        Button::Unary(UnaryFn::Ln),
        Button::Unary(UnaryFn::Reciprocal),
        Button::Unary(UnaryFn::E),
    ],
    &[
        Button::Unary(UnaryFn::Sqrt),
        Button::Unary(UnaryFn::Square),
        Button::Operator(Operator::Power),
    ],
];

const BASIC_ROWS: &[&[Button]] = &[
    &[
        Button::Clear,
        Button::Backspace,
        Button::Negate,
        Button::Operator(Operator::Divide),
    ],
    &[
        Button::Digit('7'),
        Button::Digit('8'),
        Button::Digit('9'),
        Button::Operator(Operator::Multiply),
    ],
    &[
        Button::Digit('4'),
        Button::Digit('5'),
        Button::Digit('6'),
        Button::Operator(Operator::Subtract),
    ],
    &[
        Button::Digit('1'),
        Button::Digit('2'),
        Button::Digit('3'),
        Button::Operator(Operator::Add),
    ],
    &[Button::Digit('0'), Button::Decimal, Button::Equals],
];

/// Button rows, top to bottom, for the given mode.
pub fn rows(mode: CalcMode) -> Vec<&'static [Button]> {
    let mut rows = vec![MEMORY_ROW];
    if mode == CalcMode::Scientific {
        rows.extend_from_slice(SCIENTIFIC_ROWS);
    }
    rows.extend_from_slice(BASIC_ROWS);
    rows
}

/// Keyboard selection on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeypadCursor {
    pub row: usize,
    pub col: usize,
}

impl KeypadCursor {
    pub fn button(&self, mode: CalcMode) -> Option<Button> {
        rows(mode).get(self.row)?.get(self.col).copied()
    }

    pub fn move_up(&mut self, mode: CalcMode) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp(mode);
        }
    }

    pub fn move_down(&mut self, mode: CalcMode) {
        if self.row + 1 < rows(mode).len() {
            self.row += 1;
            self.clamp(mode);
        }
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn move_right(&mut self, mode: CalcMode) {
        let len = rows(mode).get(self.row).map_or(0, |r| r.len());
        if self.col + 1 < len {
            self.col += 1;
        }
    }

    /// Keep the cursor on a real button after a move or a mode switch.
    pub fn clamp(&mut self, mode: CalcMode) {
        let rows = rows(mode);
        self.row = self.row.min(rows.len().saturating_sub(1));
        let len = rows.get(self.row).map_or(0, |r| r.len());
        self.col = self.col.min(len.saturating_sub(1));
    }

    /// Put the cursor on `button` if it is on the grid.
    pub fn select(&mut self, mode: CalcMode, button: Button) -> bool {
        for (r, row) in rows(mode).iter().enumerate() {
            if let Some(c) = row.iter().position(|b| *b == button) {
                self.row = r;
                self.col = c;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_mode() {
        assert_eq!(rows(CalcMode::Basic).len(), 6);
        assert_eq!(rows(CalcMode::Scientific).len(), 9);
        assert_eq!(rows(CalcMode::Basic)[0][0], Button::Memory(MemoryOp::Clear));
    }

    #[test]
    fn test_every_digit_is_on_the_grid() {
        let mut cursor = KeypadCursor::default();
        for d in '0'..='9' {
            assert!(cursor.select(CalcMode::Basic, Button::Digit(d)));
            assert_eq!(cursor.button(CalcMode::Basic), Some(Button::Digit(d)));
        }
    }

    #[test]
    fn test_scientific_buttons_only_in_scientific_mode() {
        let mut cursor = KeypadCursor::default();
        let sqrt = Button::Unary(UnaryFn::Sqrt);
        assert!(!cursor.select(CalcMode::Basic, sqrt));
        assert!(cursor.select(CalcMode::Scientific, sqrt));
    }

    #[test]
    fn test_cursor_clamps_to_shorter_rows() {
        let mut cursor = KeypadCursor { row: 4, col: 3 };
        // Row 5 (0 . =) has three buttons.
        cursor.move_down(CalcMode::Basic);
        assert_eq!(cursor, KeypadCursor { row: 5, col: 2 });
        cursor.move_down(CalcMode::Basic);
        assert_eq!(cursor.row, 5);
        cursor.move_right(CalcMode::Basic);
        assert_eq!(cursor.button(CalcMode::Basic), Some(Button::Equals));
    }

    #[test]
    fn test_clamp_after_mode_switch() {
        let mut cursor = KeypadCursor { row: 8, col: 3 };
        cursor.clamp(CalcMode::Basic);
        assert_eq!(cursor, KeypadCursor { row: 5, col: 2 });
    }

    #[test]
    fn test_labels() {
        assert_eq!(Button::Digit('7').label(), "7");
        assert_eq!(Button::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Button::Unary(UnaryFn::Sqrt).label(), "√");
        assert_eq!(Button::Memory(MemoryOp::Subtract).label(), "M−");
    }
}
