//! Binary operators and single-argument scientific functions.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trig results closer to zero than this are snapped to zero, so that
/// `sin(180°)` reads `0` instead of `1.2246e-16`.
const TRIG_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Map a typed or labelled key to an operator. Accepts both the ASCII
    /// keyboard symbols and the display glyphs.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' | 'x' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
            Operator::Power => '^',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
            Operator::Divide => "division",
            Operator::Power => "power",
        }
    }

    /// Compute `lhs <op> rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
            Operator::Power => lhs.powf(rhs),
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::domain(self.name(), rhs))
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unit used for the arguments of sin, cos and tan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Radians => AngleUnit::Degrees,
            AngleUnit::Degrees => AngleUnit::Radians,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Radians => "RAD",
            AngleUnit::Degrees => "DEG",
        }
    }

    fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleUnit::Radians => x,
            AngleUnit::Degrees => x.to_radians(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sqrt,
    Square,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Reciprocal,
    Pi,
    E,
}

impl UnaryFn {
    /// Constants ignore the current entry and replace it outright.
    pub fn is_constant(self) -> bool {
        matches!(self, UnaryFn::Pi | UnaryFn::E)
    }

    /// Keypad label.
    pub fn label(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "√",
            UnaryFn::Square => "x²",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Log10 => "log",
            UnaryFn::Ln => "ln",
            UnaryFn::Reciprocal => "1/x",
            UnaryFn::Pi => "π",
            UnaryFn::E => "e",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Square => "square",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Log10 => "log",
            UnaryFn::Ln => "ln",
            UnaryFn::Reciprocal => "reciprocal",
            UnaryFn::Pi => "pi",
            UnaryFn::E => "e",
        }
    }

    pub fn apply(self, x: f64, unit: AngleUnit) -> Result<f64, CalcError> {
        let result = match self {
            UnaryFn::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::domain(self.name(), x));
                }
                x.sqrt()
            }
            UnaryFn::Square => x * x,
            UnaryFn::Sin => snap_to_zero(unit.to_radians(x).sin()),
            UnaryFn::Cos => snap_to_zero(unit.to_radians(x).cos()),
            UnaryFn::Tan => {
                // tan(90°) lands on a huge finite number instead of a pole.
                if unit == AngleUnit::Degrees && (x - 90.0).rem_euclid(180.0) == 0.0 {
                    return Err(CalcError::domain(self.name(), x));
                }
                snap_to_zero(unit.to_radians(x).tan())
            }
            UnaryFn::Log10 | UnaryFn::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::domain(self.name(), x));
                }
                if self == UnaryFn::Log10 {
                    x.log10()
                } else {
                    x.ln()
                }
            }
            UnaryFn::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                1.0 / x
            }
            UnaryFn::Pi => std::f64::consts::PI,
            UnaryFn::E => std::f64::consts::E,
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::domain(self.name(), x))
        }
    }
}

fn snap_to_zero(x: f64) -> f64 {
    if x.abs() < TRIG_EPSILON {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_from_char() {
        assert_eq!(Operator::from_char('+'), Some(Operator::Add));
        assert_eq!(Operator::from_char('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('^'), Some(Operator::Power));
        assert_eq!(Operator::from_char('='), None);
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(12.0, 8.0), Ok(20.0));
        assert_eq!(Operator::Subtract.apply(4.0, 2.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(8.0, 2.0), Ok(16.0));
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operator::Power.apply(9.0, 0.5), Ok(3.0));
        assert_eq!(Operator::Power.apply(2.0, -1.0), Ok(0.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_undefined_power_is_domain_error() {
        assert!(matches!(
            Operator::Power.apply(-8.0, 0.5),
            Err(CalcError::DomainError { function: "power", .. })
        ));
        assert!(matches!(
            Operator::Multiply.apply(1e300, 1e300),
            Err(CalcError::DomainError { .. })
        ));
    }

    #[test]
    fn test_unary_functions() {
        let rad = AngleUnit::Radians;
        assert_eq!(UnaryFn::Sqrt.apply(16.0, rad), Ok(4.0));
        assert_eq!(UnaryFn::Square.apply(-3.0, rad), Ok(9.0));
        assert_eq!(UnaryFn::Log10.apply(1000.0, rad), Ok(3.0));
        assert_eq!(UnaryFn::Ln.apply(1.0, rad), Ok(0.0));
        assert_eq!(UnaryFn::Reciprocal.apply(4.0, rad), Ok(0.25));
        assert_eq!(UnaryFn::Pi.apply(0.0, rad), Ok(std::f64::consts::PI));
        assert_eq!(UnaryFn::Sin.apply(0.0, rad), Ok(0.0));
    }

    #[test]
    fn test_unary_domain_errors() {
        let rad = AngleUnit::Radians;
        assert_eq!(
            UnaryFn::Sqrt.apply(-1.0, rad),
            Err(CalcError::domain("sqrt", -1.0))
        );
        assert!(UnaryFn::Log10.apply(0.0, rad).is_err());
        assert!(UnaryFn::Ln.apply(-2.0, rad).is_err());
        assert_eq!(
            UnaryFn::Reciprocal.apply(0.0, rad),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_trig_in_degrees() {
        let deg = AngleUnit::Degrees;
        assert_eq!(UnaryFn::Sin.apply(180.0, deg), Ok(0.0));
        assert_eq!(UnaryFn::Cos.apply(90.0, deg), Ok(0.0));
        let half = UnaryFn::Sin.apply(30.0, deg).unwrap();
        assert!((half - 0.5).abs() < 1e-12);
        assert!(UnaryFn::Tan.apply(90.0, deg).is_err());
        assert!(UnaryFn::Tan.apply(-270.0, deg).is_err());
    }
}
