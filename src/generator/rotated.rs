//! Banks of three identical cans whose only freedom is phase rotation: `T1` may start on any phase,
//! and the other cans follow in order.

use strum::VariantArray;

use crate::configuration::{AcceptanceConfiguration, GroupBuilder};
use crate::generator::{BankPhases, ConfigurationGenerator, Rotation};
use crate::terminal::{Bushing, Terminal};

const UNITS: [usize; 3] = [1, 2, 3];

/// Four-wire wye primary to four-wire wye secondary, neutrals tied on both sides.
#[derive(Clone, Debug, Default)]
pub struct WyeWyeBank {
    phases: BankPhases,
}

impl WyeWyeBank {
    /// A bank on the given buses.
    pub fn new(phases: BankPhases) -> Self {
        Self { phases }
    }
}

impl ConfigurationGenerator for WyeWyeBank {
    type Choice = Rotation;

    fn choices(&self) -> Vec<Rotation> {
        Rotation::VARIANTS.to_vec()
    }

    fn build(&self, rotation: Rotation) -> AcceptanceConfiguration {
        let phases = &self.phases;
        let mut groups = GroupBuilder::new();

        for (offset, unit) in UNITS.into_iter().enumerate() {
            let (phase, _) = rotation.advanced(offset).legs();
            groups
                .tie(&phases.primary_bus(phase), Terminal::bushing(unit, Bushing::H1))
                .tie(&phases.primary_neutral_bus(), Terminal::bushing(unit, Bushing::H2));
        }
        for (offset, unit) in UNITS.into_iter().enumerate() {
            let (phase, _) = rotation.advanced(offset).legs();
            groups
                .tie(&phases.secondary_bus(phase), Terminal::bushing(unit, Bushing::X1))
                .tie(&phases.secondary_neutral_bus(), Terminal::bushing(unit, Bushing::X2));
        }

        groups.build()
    }
}

/// Closed delta primary to four-wire wye secondary.
#[derive(Clone, Debug, Default)]
pub struct DeltaWyeBank {
    phases: BankPhases,
}

impl DeltaWyeBank {
    /// A bank on the given buses.
    pub fn new(phases: BankPhases) -> Self {
        Self { phases }
    }
}

impl ConfigurationGenerator for DeltaWyeBank {
    type Choice = Rotation;

    fn choices(&self) -> Vec<Rotation> {
        Rotation::VARIANTS.to_vec()
    }

    fn build(&self, rotation: Rotation) -> AcceptanceConfiguration {
        let phases = &self.phases;
        let mut groups = GroupBuilder::new();

        for (offset, unit) in UNITS.into_iter().enumerate() {
            let (lead, lag) = rotation.advanced(offset).legs();
            groups
                .tie(&phases.primary_bus(lead), Terminal::bushing(unit, Bushing::H1))
                .tie(&phases.primary_bus(lag), Terminal::bushing(unit, Bushing::H2));
        }
        for (offset, unit) in UNITS.into_iter().enumerate() {
            let (phase, _) = rotation.advanced(offset).legs();
            groups
                .tie(&phases.secondary_bus(phase), Terminal::bushing(unit, Bushing::X1))
                .tie(&phases.secondary_neutral_bus(), Terminal::bushing(unit, Bushing::X2));
        }

        groups.build()
    }
}
