//! The two-can open-wye / open-delta bank.

use itertools::iproduct;
use strum::VariantArray;

use crate::configuration::{AcceptanceConfiguration, GroupBuilder};
use crate::generator::{BankPhases, CommonLeg, ConfigurationGenerator, Polarity, Rotation};
use crate::terminal::{Bushing, Terminal};

/// An open-wye primary feeding an open-delta four-wire secondary from two cans with fixed roles:
/// a center-tapped lighting can and a power can.
#[derive(Clone, Debug)]
pub struct OpenDeltaBank {
    phases: BankPhases,
    lighting: usize,
    power: usize,
}

impl Default for OpenDeltaBank {
    fn default() -> Self {
        Self::new(BankPhases::default())
    }
}

impl OpenDeltaBank {
    /// `T1` is the lighting can and `T2` the power can.
    pub fn new(phases: BankPhases) -> Self {
        Self::with_roles(phases, 1, 2)
    }

    /// Numbered cans in fixed roles.
    pub fn with_roles(phases: BankPhases, lighting: usize, power: usize) -> Self {
        Self { phases, lighting, power }
    }
}

/// One point in the open delta's choice space.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct OpenDeltaChoice {
    /// Primary phases used; the lighting can takes the leading one, the power can the lagging one.
    pub primary_rotation: Rotation,
    /// Secondary buses spanned by the lighting can; the remaining bus is the high leg.
    pub lighting_span: Rotation,
    /// Lighting leg the power can shares.
    pub common: CommonLeg,
    /// Primary polarity of the lighting can.
    pub lighting_primary: Polarity,
    /// Primary polarity of the power can.
    pub power_primary: Polarity,
    /// Secondary polarity of the lighting can.
    pub lighting_secondary: Polarity,
    /// Secondary polarity of the power can.
    pub power_secondary: Polarity,
}

impl ConfigurationGenerator for OpenDeltaBank {
    type Choice = OpenDeltaChoice;

    fn choices(&self) -> Vec<OpenDeltaChoice> {
        iproduct!(
            Rotation::VARIANTS,
            Rotation::VARIANTS,
            CommonLeg::VARIANTS,
            Polarity::VARIANTS,
            Polarity::VARIANTS,
            Polarity::VARIANTS,
            Polarity::VARIANTS
        )
            .map(|(&primary_rotation, &lighting_span, &common, &lighting_primary, &power_primary, &lighting_secondary, &power_secondary)| OpenDeltaChoice {
                primary_rotation,
                lighting_span,
                common,
                lighting_primary,
                power_primary,
                lighting_secondary,
                power_secondary,
            })
            .collect()
    }

    fn build(&self, choice: OpenDeltaChoice) -> AcceptanceConfiguration {
        let phases = &self.phases;
        let mut groups = GroupBuilder::new();

        // both primaries run phase to neutral
        let (lead, lag) = choice.primary_rotation.legs();
        for (unit, phase, polarity) in [
            (self.lighting, lead, choice.lighting_primary),
            (self.power, lag, choice.power_primary),
        ] {
            let (h1, h2) = polarity.orient((phases.primary_bus(phase), phases.primary_neutral_bus()));
            groups
                .tie(&h1, Terminal::bushing(unit, Bushing::H1))
                .tie(&h2, Terminal::bushing(unit, Bushing::H2));
        }

        let (lead, lag) = choice.lighting_span.legs();
        let high_leg = phases.secondary_bus(choice.lighting_span.remaining());

        groups.tie(&phases.secondary_neutral_bus(), Terminal::bushing(self.lighting, Bushing::X2));
        let (x1, x3) = choice.lighting_secondary.orient((phases.secondary_bus(lead), phases.secondary_bus(lag)));
        groups
            .tie(&x1, Terminal::bushing(self.lighting, Bushing::X1))
            .tie(&x3, Terminal::bushing(self.lighting, Bushing::X3));

        let common = phases.secondary_bus(choice.common.pick((lead, lag)));
        let (x1, x3) = choice.power_secondary.orient((common, high_leg));
        groups
            .tie(&x1, Terminal::bushing(self.power, Bushing::X1))
            .tie(&x3, Terminal::bushing(self.power, Bushing::X3));

        groups.build()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::configuration::RequiredGroup;

    #[test]
    fn count_is_product_of_axes() {
        assert_eq!(OpenDeltaBank::default().generate().len(), 3 * 3 * 2 * 2 * 2 * 2 * 2);
    }

    #[test]
    fn every_configuration_is_a_partition() {
        for config in OpenDeltaBank::default().generate() {
            assert!(config.is_partition());
            // two primary phases, primary neutral, three secondary phases, secondary neutral
            assert_eq!(config.len(), 7);
            assert_eq!(config.groups().iter().map(RequiredGroup::len).sum::<usize>(), 7 + 4 + 3 + 2);
        }
    }

    #[test]
    fn choices_are_distinct_wirings() {
        let configs = OpenDeltaBank::default().generate();
        let distinct: HashSet<_> = configs.iter().map(AcceptanceConfiguration::canonical).collect();
        assert_eq!(distinct.len(), configs.len());
    }

    #[test]
    fn roles_can_be_swapped() {
        let bank = OpenDeltaBank::with_roles(BankPhases::default(), 2, 1);
        let config = bank.build(OpenDeltaChoice {
            primary_rotation: Rotation::Ab,
            lighting_span: Rotation::Ab,
            common: CommonLeg::Second,
            lighting_primary: Polarity::Normal,
            power_primary: Polarity::Normal,
            lighting_secondary: Polarity::Normal,
            power_secondary: Polarity::Normal,
        });

        assert!(config.groups().contains(&RequiredGroup::new(["BUS_S_n", "T2_X2"])));
        assert!(config.groups().contains(&RequiredGroup::new(["BUS_S_b", "T2_X3", "T1_X1"])));
        assert_eq!(bank.generate().len(), 288);
    }

    #[test]
    fn primary_neutral_collects_both_unmarked_bushings() {
        let config = OpenDeltaBank::default().build(OpenDeltaChoice {
            primary_rotation: Rotation::Ab,
            lighting_span: Rotation::Ab,
            common: CommonLeg::Second,
            lighting_primary: Polarity::Normal,
            power_primary: Polarity::Normal,
            lighting_secondary: Polarity::Normal,
            power_secondary: Polarity::Normal,
        });

        assert_eq!(config.groups(), &[
            RequiredGroup::new(["BUS_P_A", "T1_H1"]),
            RequiredGroup::new(["BUS_P_N", "T1_H2", "T2_H2"]),
            RequiredGroup::new(["BUS_P_B", "T2_H1"]),
            RequiredGroup::new(["BUS_S_n", "T1_X2"]),
            RequiredGroup::new(["BUS_S_a", "T1_X1"]),
            RequiredGroup::new(["BUS_S_b", "T1_X3", "T2_X1"]),
            RequiredGroup::new(["BUS_S_c", "T2_X3"]),
        ]);
    }
}
