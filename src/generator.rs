//! Acceptance configurations for transformer banks.
//!
//! A bank can be wired correctly in many ways: which can serves which role, which phases each can is rolled onto,
//! and which way round each winding goes. Each of those decisions is a small closed enumeration (an "axis").
//! A generator takes the Cartesian product of its axes and turns every point of the product into one
//! [`AcceptanceConfiguration`] with a single `build` function, so each axis can be audited on its own.

use strum::VariantArray;

use crate::configuration::AcceptanceConfiguration;
use crate::terminal::Terminal;

pub use closed_delta::{ClosedDeltaBank, ClosedDeltaChoice};
pub use open_delta::{OpenDeltaBank, OpenDeltaChoice};
pub use rotated::{DeltaWyeBank, WyeWyeBank};

pub mod closed_delta;
pub mod open_delta;
pub mod rotated;

/// Expands a bank topology into every acceptance configuration a certified wiring of it could use.
///
/// Implementations are pure: the same bank always yields the same configurations, so callers may cache them.
pub trait ConfigurationGenerator {
    /// One point of the product of this generator's axes.
    type Choice: Copy;

    /// Every point of the product, each exactly once.
    fn choices(&self) -> Vec<Self::Choice>;
    /// Build the configuration for one point.
    fn build(&self, choice: Self::Choice) -> AcceptanceConfiguration;

    /// Build every configuration.
    fn generate(&self) -> Vec<AcceptanceConfiguration> {
        self.choices()
            .into_iter()
            .map(|choice| self.build(choice))
            .collect()
    }
}

/// Bus labels of a three-phase bank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankPhases {
    /// Primary phase labels in rotation order.
    pub primary: [String; 3],
    /// Primary neutral label.
    pub primary_neutral: String,
    /// Secondary phase labels in rotation order.
    pub secondary: [String; 3],
    /// Secondary neutral label.
    pub secondary_neutral: String,
}

impl Default for BankPhases {
    fn default() -> Self {
        Self {
            primary: ["A", "B", "C"].map(String::from),
            primary_neutral: "N".to_owned(),
            secondary: ["a", "b", "c"].map(String::from),
            secondary_neutral: "n".to_owned(),
        }
    }
}

impl BankPhases {
    pub(crate) fn primary_bus(&self, phase: usize) -> Terminal {
        Terminal::primary_bus(&self.primary[phase % 3])
    }

    pub(crate) fn primary_neutral_bus(&self) -> Terminal {
        Terminal::primary_bus(&self.primary_neutral)
    }

    pub(crate) fn secondary_bus(&self, phase: usize) -> Terminal {
        Terminal::secondary_bus(&self.secondary[phase % 3])
    }

    pub(crate) fn secondary_neutral_bus(&self) -> Terminal {
        Terminal::secondary_bus(&self.secondary_neutral)
    }
}

/// A pair of adjacent phases, in rotation order. Named after the default labels.
///
/// Used both for which primary phases a can is rolled onto and for which two secondary buses the lighting can spans.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum Rotation {
    /// A and B; C remains.
    Ab,
    /// B and C; A remains.
    Bc,
    /// C and A; B remains.
    Ca,
}

impl Rotation {
    fn index(self) -> usize {
        match self {
            Self::Ab => 0,
            Self::Bc => 1,
            Self::Ca => 2,
        }
    }

    /// Phase indices of the leading and lagging legs.
    pub fn legs(self) -> (usize, usize) {
        (self.index(), (self.index() + 1) % 3)
    }

    /// Phase index of the leg not in this pair; on a secondary, the high leg.
    pub fn remaining(self) -> usize {
        (self.index() + 2) % 3
    }

    /// The pair `steps` positions further round the delta.
    pub fn advanced(self, steps: usize) -> Self {
        Self::VARIANTS[(self.index() + steps) % 3]
    }
}

/// Which way round a winding is connected.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum Polarity {
    /// The marked bushing (H1 or X1) goes to the first of its two points.
    Normal,
    /// The marked bushing goes to the second point.
    Swapped,
}

impl Polarity {
    /// Order the two points a winding spans as (marked bushing, unmarked bushing).
    pub fn orient<T>(self, (first, second): (T, T)) -> (T, T) {
        match self {
            Self::Normal => (first, second),
            Self::Swapped => (second, first),
        }
    }
}

/// Which of the two power cans takes which power position in a closed delta.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum PowerOrder {
    /// Cans follow the lighting can in numbering order.
    Default,
    /// The two power cans trade places.
    Swapped,
}

impl PowerOrder {
    fn arrange<T>(self, (first, second): (T, T)) -> (T, T) {
        match self {
            Self::Default => (first, second),
            Self::Swapped => (second, first),
        }
    }
}

/// Which of the two lighting legs an open delta's power can shares.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum CommonLeg {
    /// The leading lighting leg.
    First,
    /// The lagging lighting leg.
    Second,
}

impl CommonLeg {
    fn pick<T>(self, (first, second): (T, T)) -> T {
        match self {
            Self::First => first,
            Self::Second => second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_covers_each_leg_once() {
        for rotation in Rotation::VARIANTS {
            let (lead, lag) = rotation.legs();
            let mut legs = [lead, lag, rotation.remaining()];
            legs.sort();
            assert_eq!(legs, [0, 1, 2]);
        }
    }

    #[test]
    fn rotation_advances_round_the_delta() {
        assert_eq!(Rotation::Bc.advanced(1), Rotation::Ca);
        assert_eq!(Rotation::Bc.advanced(2), Rotation::Ab);
        assert_eq!(Rotation::Ca.advanced(3), Rotation::Ca);
    }

    #[test]
    fn polarity_orients() {
        assert_eq!(Polarity::Normal.orient(("A", "B")), ("A", "B"));
        assert_eq!(Polarity::Swapped.orient(("A", "B")), ("B", "A"));
    }
}
