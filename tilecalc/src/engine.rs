//! Accumulator state machine
//!
//! One numeric register (`value`) shown on the display, one captured
//! left-hand operand (`stack_value`), and two operator cells. An operator
//! press only records intent in `pending_op`; the next digit binds it to
//! the current value and moves it to `committed_op`, which `=` applies.

/// Binary operators on the keypad. `None` means no operator is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply to (lhs, rhs). `None` has nothing to apply.
    ///
    /// Division is unchecked: x / 0 is ±inf, 0 / 0 is NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operation::None => None,
            Operation::Add => Some(lhs + rhs),
            Operation::Subtract => Some(lhs - rhs),
            Operation::Multiply => Some(lhs * rhs),
            Operation::Divide => Some(lhs / rhs),
        }
    }
}

/// Everything a key press or click can ask the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A single decimal digit, 0 through 9. Anything larger is ignored by
    /// [`Calculator::dispatch`].
    Digit(u8),
    Operation(Operation),
    Clear,
    Equals,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    value: f64,
    stack_value: f64,
    pending_op: Operation,
    committed_op: Operation,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn stack_value(&self) -> f64 {
        self.stack_value
    }

    pub fn pending_op(&self) -> Operation {
        self.pending_op
    }

    pub fn committed_op(&self) -> Operation {
        self.committed_op
    }

    /// Apply one action. Returns true if the displayed value changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let before = self.value;
        match action {
            Action::Digit(d) => self.enter_digit(d),
            Action::Operation(op) => self.pending_op = op,
            Action::Clear => self.value = 0.0,
            Action::Equals => self.equals(),
        }
        tracing::debug!(
            ?action,
            value = self.value,
            stack = self.stack_value,
            pending = ?self.pending_op,
            committed = ?self.committed_op,
            "dispatch"
        );
        // bitwise so that NaN -> NaN counts as unchanged and 0 -> -0 as changed
        before.to_bits() != self.value.to_bits()
    }

    fn enter_digit(&mut self, digit: u8) {
        if digit > 9 {
            tracing::warn!(digit, "ignoring out-of-range digit");
            return;
        }
        let d = f64::from(digit);
        if self.pending_op == Operation::None {
            self.value = self.value * 10.0 + d;
        } else {
            self.stack_value = self.value;
            self.value = d;
            self.committed_op = self.pending_op;
            self.pending_op = Operation::None;
        }
    }

    fn equals(&mut self) {
        if let Some(result) = self.committed_op.apply(self.stack_value, self.value) {
            self.value = result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &[Action]) {
        for &key in keys {
            calc.dispatch(key);
        }
    }

    fn digits(s: &str) -> Vec<Action> {
        s.bytes().map(|b| Action::Digit(b - b'0')).collect()
    }

    #[test]
    fn test_starts_zeroed() {
        let calc = Calculator::new();
        assert_eq!(calc.value(), 0.0);
        assert_eq!(calc.stack_value(), 0.0);
        assert_eq!(calc.pending_op(), Operation::None);
        assert_eq!(calc.committed_op(), Operation::None);
    }

    #[test]
    fn test_digits_concatenate() {
        for s in ["0", "7", "42", "1234567", "900", "0012"] {
            let mut calc = Calculator::new();
            press(&mut calc, &digits(s));
            assert_eq!(calc.value(), s.parse::<f64>().unwrap(), "digits {s}");
        }
    }

    #[test]
    fn test_clear_only_touches_value() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("12"));
        press(&mut calc, &[Action::Operation(Operation::Multiply)]);
        press(&mut calc, &digits("34"));
        press(&mut calc, &[Action::Operation(Operation::Subtract)]);

        calc.dispatch(Action::Clear);

        assert_eq!(calc.value(), 0.0);
        assert_eq!(calc.stack_value(), 12.0);
        assert_eq!(calc.committed_op(), Operation::Multiply);
        assert_eq!(calc.pending_op(), Operation::Subtract);
    }

    #[test]
    fn test_add_scenario() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("78"));
        assert_eq!(calc.value(), 78.0);

        calc.dispatch(Action::Operation(Operation::Add));
        assert_eq!(calc.pending_op(), Operation::Add);
        assert_eq!(calc.value(), 78.0);

        calc.dispatch(Action::Digit(3));
        assert_eq!(calc.stack_value(), 78.0);
        assert_eq!(calc.value(), 3.0);
        assert_eq!(calc.committed_op(), Operation::Add);
        assert_eq!(calc.pending_op(), Operation::None);

        calc.dispatch(Action::Equals);
        assert_eq!(calc.value(), 81.0);
    }

    #[test]
    fn test_each_operation() {
        let cases = [
            (Operation::Add, 15.0),
            (Operation::Subtract, 9.0),
            (Operation::Multiply, 36.0),
            (Operation::Divide, 4.0),
        ];
        for (op, expected) in cases {
            let mut calc = Calculator::new();
            press(&mut calc, &digits("12"));
            press(&mut calc, &[Action::Operation(op)]);
            press(&mut calc, &digits("3"));
            press(&mut calc, &[Action::Equals]);
            assert_eq!(calc.value(), expected, "{op:?}");
        }
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("9"));
        press(&mut calc, &[Action::Operation(Operation::Divide)]);
        press(&mut calc, &digits("0"));
        press(&mut calc, &[Action::Equals]);
        assert!(calc.value().is_infinite());
        assert!(calc.value() > 0.0);
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        let mut calc = Calculator::new();
        press(&mut calc, &[Action::Operation(Operation::Divide), Action::Digit(0), Action::Equals]);
        assert!(calc.value().is_nan());
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("56"));
        let before = calc.clone();
        assert!(!calc.dispatch(Action::Equals));
        assert_eq!(calc, before);
    }

    #[test]
    fn test_equals_with_only_pending_is_noop() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("4"));
        calc.dispatch(Action::Operation(Operation::Add));
        calc.dispatch(Action::Equals);
        assert_eq!(calc.value(), 4.0);
        assert_eq!(calc.pending_op(), Operation::Add);
    }

    #[test]
    fn test_repeated_operator_last_wins() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("5"));
        press(&mut calc, &[Action::Operation(Operation::Add), Action::Operation(Operation::Add)]);
        press(&mut calc, &digits("3"));
        press(&mut calc, &[Action::Equals]);
        assert_eq!(calc.value(), 8.0);

        let mut calc = Calculator::new();
        press(&mut calc, &digits("5"));
        press(&mut calc, &[Action::Operation(Operation::Add), Action::Operation(Operation::Multiply)]);
        press(&mut calc, &digits("3"));
        press(&mut calc, &[Action::Equals]);
        assert_eq!(calc.value(), 15.0);
    }

    #[test]
    fn test_second_equals_reapplies_committed() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("2"));
        press(&mut calc, &[Action::Operation(Operation::Add)]);
        press(&mut calc, &digits("3"));
        press(&mut calc, &[Action::Equals, Action::Equals]);
        assert_eq!(calc.value(), 7.0);
    }

    #[test]
    fn test_digits_after_equals_append_to_result() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("2"));
        press(&mut calc, &[Action::Operation(Operation::Add)]);
        press(&mut calc, &digits("3"));
        press(&mut calc, &[Action::Equals]);
        press(&mut calc, &digits("1"));
        assert_eq!(calc.value(), 51.0);
    }

    #[test]
    fn test_chained_operator_uses_current_value() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("6"));
        press(&mut calc, &[Action::Operation(Operation::Multiply)]);
        press(&mut calc, &digits("7"));
        press(&mut calc, &[Action::Equals]);
        press(&mut calc, &[Action::Operation(Operation::Subtract)]);
        press(&mut calc, &digits("2"));
        press(&mut calc, &[Action::Equals]);
        assert_eq!(calc.value(), 40.0);
        assert_eq!(calc.stack_value(), 42.0);
    }

    #[test]
    fn test_dispatch_reports_change() {
        let mut calc = Calculator::new();
        assert!(calc.dispatch(Action::Digit(4)));
        assert!(!calc.dispatch(Action::Operation(Operation::Add)));
        assert!(calc.dispatch(Action::Digit(1)));
        assert!(calc.dispatch(Action::Clear));
        assert!(!calc.dispatch(Action::Clear));
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut calc = Calculator::new();
        calc.dispatch(Action::Digit(4));
        calc.dispatch(Action::Operation(Operation::Add));
        let before = calc.clone();

        assert!(!calc.dispatch(Action::Digit(12)));
        assert_eq!(calc, before);
        assert_eq!(calc.pending_op(), Operation::Add);
    }

    #[test]
    fn test_large_values_lose_precision() {
        let mut calc = Calculator::new();
        press(&mut calc, &digits("12345678901234567890"));
        assert!(calc.value().is_finite());
        assert!((calc.value() - 1.2345678901234567e19).abs() / calc.value() < 1e-12);
    }
}
