use strum::VariantArray;

use crate::configuration::AcceptanceConfiguration;
use crate::error::{GradeError, Result};
use crate::generator::{ClosedDeltaBank, ConfigurationGenerator, DeltaWyeBank, OpenDeltaBank, WyeWyeBank};
use crate::selector::{validate, ValidationResult};
use crate::terminal::{Bushing, Connection, Terminal};

/// Bus labels laid out along the primary feeder and the secondary rack.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BusConfig {
    /// Overhead primary buses, left to right.
    pub primary: Vec<String>,
    /// Secondary rack buses, left to right.
    pub secondary: Vec<String>,
}

impl BusConfig {
    fn new(primary: &[&str], secondary: &[&str]) -> Self {
        Self {
            primary: primary.iter().map(|l| l.to_string()).collect(),
            secondary: secondary.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// A bank to be wired, together with every wiring that counts as correct.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Stable identifier, e.g. `delta-delta-240`.
    pub id: String,
    /// Human-readable name.
    pub title: String,
    /// Instructions shown to the learner.
    pub description: String,
    /// Cans in the bank, numbered from 1.
    pub transformer_count: usize,
    /// Labels painted on the cans, in can order.
    pub transformer_hints: Vec<String>,
    /// Buses the cans are wired to.
    pub buses: BusConfig,
    /// Matching any one of these passes.
    pub configurations: Vec<AcceptanceConfiguration>,
}

impl Scenario {
    /// Grade a learner's wires against this scenario.
    pub fn validate(&self, connections: &[Connection]) -> ValidationResult {
        validate(&self.configurations, connections)
    }

    /// Every terminal the learner can wire: primary buses, secondary buses, then each can's bushings.
    pub fn terminals(&self) -> Vec<Terminal> {
        self.buses.primary.iter()
            .map(|label| Terminal::primary_bus(label))
            .chain(self.buses.secondary.iter().map(|label| Terminal::secondary_bus(label)))
            .chain((1..=self.transformer_count)
                .flat_map(|unit| Bushing::VARIANTS.iter().map(move |&bushing| Terminal::bushing(unit, bushing))))
            .collect()
    }
}

fn scenario(
    id: &str,
    title: &str,
    description: &str,
    hints: &[&str],
    buses: BusConfig,
    configurations: Vec<AcceptanceConfiguration>,
) -> Scenario {
    Scenario {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        transformer_count: hints.len(),
        transformer_hints: hints.iter().map(|h| h.to_string()).collect(),
        buses,
        configurations,
    }
}

/// The standard banks, in exam order.
///
/// Configurations are generated afresh on every call; callers grading repeatedly should keep the result.
pub fn catalog() -> Vec<Scenario> {
    vec![
        scenario(
            "wye-wye-120-208",
            "Wye - Wye Bank (120/208V)",
            "Connect a 3-transformer bank. Primary 4-wire Wye, Secondary 4-wire Wye. (Neutrals must be tied)",
            &["120/208", "120/208", "120/208"],
            BusConfig::new(&["A", "B", "C", "N"], &["a", "b", "c", "n"]),
            WyeWyeBank::default().generate(),
        ),
        scenario(
            "delta-delta-240",
            "Delta - Delta Bank (240V)",
            "Primary Delta, Secondary Delta with 120/240V High Leg. Ensure the High Leg connects to the Orange Bus (b).",
            &["XFMR", "XFMR", "XFMR"],
            BusConfig::new(&["A", "B", "C"], &["a", "b", "c", "n"]),
            ClosedDeltaBank::default().generate(),
        ),
        scenario(
            "delta-wye-120-208",
            "Delta - Wye Bank (120/208V)",
            "Connect a 3-transformer bank. Primary Delta, Secondary Wye.",
            &["120/208", "120/208", "120/208"],
            BusConfig::new(&["A", "B", "C"], &["a", "b", "c", "n"]),
            DeltaWyeBank::default().generate(),
        ),
        scenario(
            "open-wye-open-delta",
            "Open Wye - Open Delta",
            "Primary Open Wye, Secondary Open Delta (4-wire). T1 is Lighting, T2 is Power.",
            &["LIGHTING", "POWER"],
            BusConfig::new(&["A", "B", "C", "N"], &["a", "b", "c", "n"]),
            OpenDeltaBank::default().generate(),
        ),
    ]
}

/// Look up a scenario of the [`catalog`] by id.
pub fn find(id: &str) -> Result<Scenario> {
    catalog()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| GradeError::UnknownScenario { id: id.to_owned() })
}
