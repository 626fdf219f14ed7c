use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, VariantArray};
use unordered_pair::UnorderedPair;

/// An opaque identifier naming one physical connection point, such as a bus position or a transformer bushing.
///
/// Any string is a valid terminal; two terminals are the same point if and only if their identifiers are equal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Terminal(String);

impl Terminal {
    /// A terminal on the primary (overhead) bus, e.g. `BUS_P_A`.
    pub fn primary_bus(label: &str) -> Self {
        Self(format!("BUS_P_{label}"))
    }

    /// A terminal on the secondary rack, e.g. `BUS_S_a`.
    pub fn secondary_bus(label: &str) -> Self {
        Self(format!("BUS_S_{label}"))
    }

    /// A bushing on transformer number `transformer` (1-based), e.g. `T2_X3`.
    pub fn bushing(transformer: usize, bushing: Bushing) -> Self {
        Self(format!("T{transformer}_{bushing}"))
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Terminal {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Terminal {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Terminal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The bushings found on every distribution transformer can.
///
/// `H` bushings are on the primary (high voltage) side, `X` bushings on the secondary side.
/// `X2` is the center tap of a three-bushing secondary.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, StrumDisplay, VariantArray)]
pub enum Bushing {
    /// Primary, polarity marked.
    H1,
    /// Primary.
    H2,
    /// Secondary, polarity marked.
    X1,
    /// Secondary center tap.
    X2,
    /// Secondary.
    X3,
}

/// One user-drawn wire. The order of the two ends carries no meaning.
pub type Connection = UnorderedPair<Terminal>;

/// Shorthand for building a [`Connection`] from anything terminal-like.
pub fn wire(a: impl Into<Terminal>, b: impl Into<Terminal>) -> Connection {
    UnorderedPair::from((a.into(), b.into()))
}
