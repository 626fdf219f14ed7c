//! The closed-loop delta bank: a lighting can and two power cans, any of the three in either role.

use itertools::iproduct;
use strum::VariantArray;

use crate::configuration::{AcceptanceConfiguration, GroupBuilder};
use crate::generator::{BankPhases, ConfigurationGenerator, Polarity, PowerOrder, Rotation};
use crate::terminal::{Bushing, Terminal};

/// A closed-loop three-can bank: delta primary, and a four-wire delta secondary with one center-tapped lighting can
/// and two power cans closing the delta through the high leg.
#[derive(Clone, Debug)]
pub struct ClosedDeltaBank {
    phases: BankPhases,
    // physical can numbers, in order
    units: [usize; 3],
}

impl Default for ClosedDeltaBank {
    fn default() -> Self {
        Self::new(BankPhases::default())
    }
}

impl ClosedDeltaBank {
    /// A bank of cans `T1`, `T2` and `T3` on the given buses; any can may be the lighting can.
    pub fn new(phases: BankPhases) -> Self {
        Self::with_units(phases, [1, 2, 3])
    }

    /// A bank of the three numbered cans `units`. Each takes a turn as the lighting can,
    /// and the other two fill the power positions in either order.
    pub fn with_units(phases: BankPhases, units: [usize; 3]) -> Self {
        Self { phases, units }
    }
}

/// One point in the closed delta's choice space.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClosedDeltaChoice {
    /// Position in the bank of the lighting can.
    pub lighting: usize,
    /// Primary pair of the lighting can; the power cans take the next two pairs round the delta.
    pub primary_rotation: Rotation,
    /// Primary polarity, shared by all three cans.
    pub primary_polarity: Polarity,
    /// Which power can sits on which side of the high leg.
    pub power_order: PowerOrder,
    /// Secondary buses spanned by the lighting can; the remaining bus is the high leg.
    pub lighting_span: Rotation,
    /// Secondary polarity of the lighting can.
    pub lighting_polarity: Polarity,
    /// Secondary polarity of the first power can.
    pub first_power_polarity: Polarity,
    /// Secondary polarity of the second power can.
    pub second_power_polarity: Polarity,
}

impl ConfigurationGenerator for ClosedDeltaBank {
    type Choice = ClosedDeltaChoice;

    fn choices(&self) -> Vec<ClosedDeltaChoice> {
        iproduct!(
            0..self.units.len(),
            Rotation::VARIANTS,
            Polarity::VARIANTS,
            PowerOrder::VARIANTS,
            Rotation::VARIANTS,
            Polarity::VARIANTS,
            Polarity::VARIANTS,
            Polarity::VARIANTS
        )
            .map(|(lighting, &primary_rotation, &primary_polarity, &power_order, &lighting_span, &lighting_polarity, &first_power_polarity, &second_power_polarity)| ClosedDeltaChoice {
                lighting,
                primary_rotation,
                primary_polarity,
                power_order,
                lighting_span,
                lighting_polarity,
                first_power_polarity,
                second_power_polarity,
            })
            .collect()
    }

    fn build(&self, choice: ClosedDeltaChoice) -> AcceptanceConfiguration {
        let phases = &self.phases;
        let lighting = self.units[choice.lighting % 3];
        let (first_power, second_power) = choice.power_order.arrange((
            self.units[(choice.lighting + 1) % 3],
            self.units[(choice.lighting + 2) % 3],
        ));

        let mut groups = GroupBuilder::new();

        for (unit, rotation) in [
            (lighting, choice.primary_rotation),
            (first_power, choice.primary_rotation.advanced(1)),
            (second_power, choice.primary_rotation.advanced(2)),
        ] {
            let (lead, lag) = rotation.legs();
            let (h1, h2) = choice.primary_polarity.orient((phases.primary_bus(lead), phases.primary_bus(lag)));
            groups
                .tie(&h1, Terminal::bushing(unit, Bushing::H1))
                .tie(&h2, Terminal::bushing(unit, Bushing::H2));
        }

        let (lead, lag) = choice.lighting_span.legs();
        let high_leg = phases.secondary_bus(choice.lighting_span.remaining());

        groups.tie(&phases.secondary_neutral_bus(), Terminal::bushing(lighting, Bushing::X2));
        let (x1, x3) = choice.lighting_polarity.orient((phases.secondary_bus(lead), phases.secondary_bus(lag)));
        groups
            .tie(&x1, Terminal::bushing(lighting, Bushing::X1))
            .tie(&x3, Terminal::bushing(lighting, Bushing::X3));

        // each power can runs from the high leg to one corner of the lighting winding
        let (first_corner, second_corner) = (x3, x1);

        let (x1, x3) = choice.first_power_polarity.orient((first_corner, high_leg.clone()));
        groups
            .tie(&x1, Terminal::bushing(first_power, Bushing::X1))
            .tie(&x3, Terminal::bushing(first_power, Bushing::X3));

        let (x1, x3) = choice.second_power_polarity.orient((high_leg, second_corner));
        groups
            .tie(&x1, Terminal::bushing(second_power, Bushing::X1))
            .tie(&x3, Terminal::bushing(second_power, Bushing::X3));

        groups.build()
    }
}
