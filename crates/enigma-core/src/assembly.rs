//! Three-rotor stack and its stepping state machine
//!
//! Slots are numbered left to right: 0 = slow, 1 = middle, 2 = fast.
//! One transition happens per keystroke, before substitution:
//!
//! 1. middle at its notch: left and middle step (double step)
//! 2. otherwise right at its notch: middle steps
//! 3. right always steps
//!
//! Both notch checks read positions from before the transition.

use crate::alphabet::Letter;
use crate::rotor::Rotor;

/// Number of rotor slots in the assembly
pub const ROTOR_COUNT: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// Ordered stack of exactly three rotors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorAssembly {
    rotors: [Rotor; ROTOR_COUNT],
}

impl RotorAssembly {
    /// Assemble rotors given left to right
    #[must_use]
    pub fn new(rotors: [Rotor; ROTOR_COUNT]) -> Self {
        Self { rotors }
    }

    /// Rotors left to right
    #[must_use]
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// Window letters left to right
    #[must_use]
    pub fn positions(&self) -> [Letter; ROTOR_COUNT] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Set all window letters, left to right
    pub fn set_positions(&mut self, positions: [Letter; ROTOR_COUNT]) {
        for (rotor, position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
    }

    /// Advance the assembly by one keystroke
    pub fn step(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();

        if middle_at_notch {
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
        } else if right_at_notch {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();
    }

    /// Entry wheel towards the reflector (right to left)
    #[inline]
    #[must_use]
    pub fn forward(&self, input: Letter) -> Letter {
        self.rotors
            .iter()
            .rev()
            .fold(input, |signal, rotor| rotor.signal_forward(signal))
    }

    /// Reflector back to the entry wheel (left to right)
    #[inline]
    #[must_use]
    pub fn backward(&self, input: Letter) -> Letter {
        self.rotors
            .iter()
            .fold(input, |signal, rotor| rotor.signal_backward(signal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn letters(s: &str) -> [Letter; ROTOR_COUNT] {
        let mut out = [Letter::A; ROTOR_COUNT];
        for (slot, c) in out.iter_mut().zip(s.chars()) {
            *slot = Letter::from_char(c).unwrap();
        }
        out
    }

    fn assembly(names: [&str; ROTOR_COUNT], start: &str) -> RotorAssembly {
        let catalog = Catalog::historical();
        let start = letters(start);
        let mut rotors = Vec::new();
        for (name, position) in names.into_iter().zip(start) {
            rotors.push(catalog.rotor(name).unwrap().mount(position, Letter::A));
        }
        RotorAssembly::new(rotors.try_into().unwrap())
    }

    #[test]
    fn test_right_rotor_always_steps() {
        let mut stack = assembly(["I", "II", "III"], "AAA");
        stack.step();
        assert_eq!(stack.positions(), letters("AAB"));
    }

    #[test]
    fn test_right_notch_carries_into_middle() {
        let mut stack = assembly(["I", "II", "III"], "AAV");
        stack.step();
        assert_eq!(stack.positions(), letters("ABW"));
    }

    #[test]
    fn test_double_step() {
        let mut stack = assembly(["I", "II", "III"], "ADU");
        let mut seen = Vec::new();
        for _ in 0..3 {
            stack.step();
            seen.push(stack.positions());
        }
        assert_eq!(seen, vec![letters("ADV"), letters("AEW"), letters("BFX")]);
    }

    #[test]
    fn test_double_step_with_both_notches() {
        // Middle and right both at their notches: middle still steps once
        let mut stack = assembly(["I", "II", "III"], "AEV");
        stack.step();
        assert_eq!(stack.positions(), letters("BFW"));
    }

    #[test]
    fn test_left_notch_has_no_effect() {
        let mut stack = assembly(["I", "II", "III"], "QAA");
        stack.step();
        assert_eq!(stack.positions(), letters("QAB"));
    }

    #[test]
    fn test_forward_backward_are_inverse() {
        let stack = assembly(["IV", "V", "I"], "KZE");
        for input in Letter::all() {
            assert_eq!(stack.backward(stack.forward(input)), input);
        }
    }
}
