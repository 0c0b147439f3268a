//! Assembly: the three-rotor stack and its stepping policy.
//!
//! Rotors are held right to left: `rotors[0]` is the fast rotor next to the
//! entry wheel, `rotors[2]` sits beside the reflector. The order is fixed at
//! construction.

use tracing::trace;

use crate::alphabet::Letter;
use crate::rotor::Rotor;

/// Number of rotors in an assembly.
pub const NUM_ROTORS: usize = 3;

/// Ordered stack of exactly three rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    rotors: [Rotor; NUM_ROTORS],
}

impl Assembly {
    /// Creates an assembly from rotors given right to left.
    pub fn new(rotors: [Rotor; NUM_ROTORS]) -> Self {
        Assembly { rotors }
    }

    /// Steps the rotors for one key press, including the double step.
    ///
    /// Both notch checks use the positions from before this call:
    /// 1. middle rotor on its notch: middle and left rotors step together;
    /// 2. otherwise right rotor on its notch: middle rotor steps;
    /// 3. right rotor always steps.
    pub fn advance(&mut self) {
        let [right, middle, left] = &mut self.rotors;
        if middle.should_rotate_next() {
            trace!(middle = %middle.position(), "double step");
            middle.rotate();
            left.rotate();
        } else if right.should_rotate_next() {
            middle.rotate();
        }
        right.rotate();
        trace!(
            r0 = %right.position(),
            r1 = %middle.position(),
            r2 = %left.position(),
            "rotors advanced"
        );
    }

    /// Relays a letter right to left through every rotor.
    pub fn forward_pass(&self, letter: Letter) -> Letter {
        self.rotors
            .iter()
            .fold(letter, |signal, rotor| rotor.forward_substitute(signal))
    }

    /// Relays a letter left to right back through every rotor.
    pub fn backward_pass(&self, letter: Letter) -> Letter {
        self.rotors
            .iter()
            .rev()
            .fold(letter, |signal, rotor| rotor.backward_substitute(signal))
    }

    /// Returns every rotor to its configured starting position.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// Returns the window letters, right rotor first.
    pub fn positions(&self) -> [Letter; NUM_ROTORS] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }

    /// Returns the rotors, right rotor first.
    pub fn rotors(&self) -> &[Rotor; NUM_ROTORS] {
        &self.rotors
    }
}
