//! Maps the three simulation parameters onto a catalog entry and a narrative.

use crate::catalog::{StellarKind, StellarTypeDef};
use crate::constants::*;
use crate::error::InputError;

/// Raw parameters supplied by the host controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationInput {
    /// Solar masses.
    pub mass: f64,
    /// Multiplier on gravitational influence; expected to be > 0.
    pub gravity_factor: f64,
    /// Remaining core hydrogen in percent, `[0, 100]`.
    pub hydrogen_percent: f64,
}

impl SimulationInput {
    pub fn new(mass: f64, gravity_factor: f64, hydrogen_percent: f64) -> Self {
        Self {
            mass,
            gravity_factor,
            hydrogen_percent,
        }
    }

    /// Parse the string values reported by range inputs.
    pub fn parse(mass: &str, gravity_factor: &str, hydrogen_percent: &str) -> Result<Self, InputError> {
        Ok(Self::new(
            parse_field("mass", mass)?,
            parse_field("gravity", gravity_factor)?,
            parse_field("hydrogen", hydrogen_percent)?,
        ))
    }

    #[inline]
    pub fn effective_mass(&self) -> f64 {
        effective_mass(self.mass, self.gravity_factor)
    }

    pub fn classify(&self) -> Classification {
        classify(self.mass, self.gravity_factor, self.hydrogen_percent)
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber {
            field,
            raw: raw.to_string(),
        }),
    }
}

#[inline]
pub fn effective_mass(mass: f64, gravity_factor: f64) -> f64 {
    mass * (1.0 + (gravity_factor - 1.0) * GRAVITY_MASS_WEIGHT)
}

/// Derived state read by the renderer every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StarState {
    pub stellar_type: &'static StellarTypeDef,
    pub effective_mass: f64,
    pub hydrogen_level: f64,
    pub gravity_influence: f64,
    pub mass: f64,
}

/// Which branch of the decision procedure produced the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifePhase {
    FuelExhausted,
    FailedStar,
    LowMassMainSequence,
    EvolvedMediumMass,
    MediumMassMainSequence,
    EvolvedHighMass,
    HighMassMainSequence,
    EvolvedVeryHighMass,
    ExtremeOType,
    VeryHighMassMainSequence,
}

impl LifePhase {
    pub fn header(self) -> &'static str {
        match self {
            LifePhase::FuelExhausted => "Nearing End of Life / Fuel Exhausted",
            LifePhase::FailedStar => "Failed Star",
            LifePhase::LowMassMainSequence => "Low-Mass Main Sequence Star",
            LifePhase::EvolvedMediumMass => "Evolved Medium-Mass Star",
            LifePhase::MediumMassMainSequence => "Medium-Mass Main Sequence Star",
            LifePhase::EvolvedHighMass => "Evolved High-Mass Star",
            LifePhase::HighMassMainSequence => "High-Mass Main Sequence Star",
            LifePhase::EvolvedVeryHighMass => "Evolved Very High-Mass Star",
            LifePhase::ExtremeOType => "Extreme O-Type Main Sequence Star",
            LifePhase::VeryHighMassMainSequence => "Very High-Mass Main Sequence Star",
        }
    }
}

/// Outcome of the neutron-star / black-hole tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemnantFate {
    NeutronStar,
    BlackHole,
}

impl RemnantFate {
    /// Collapse leaves a neutron star while `effective_mass < 25 / gravity`.
    pub fn for_collapse(effective_mass: f64, gravity_factor: f64) -> Self {
        if effective_mass < NEUTRON_STAR_MASS_LIMIT * gravity_factor.recip() {
            RemnantFate::NeutronStar
        } else {
            RemnantFate::BlackHole
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub state: StarState,
    pub phase: LifePhase,
    pub fate: String,
    /// Set whenever the collapse tie-break was evaluated.
    pub remnant: Option<RemnantFate>,
}

impl Classification {
    #[inline]
    pub fn kind(&self) -> StellarKind {
        self.state.stellar_type.kind
    }
}

/// Classify a star. Pure, total and deterministic; first matching branch wins.
pub fn classify(mass: f64, gravity_factor: f64, hydrogen_percent: f64) -> Classification {
    let m_eff = effective_mass(mass, gravity_factor);
    let h = hydrogen_percent;
    let mut remnant = None;

    let (kind, phase, mut fate) = if h < FUEL_EXHAUSTED_HYDROGEN {
        if m_eff < LOW_MASS_LIMIT {
            (
                StellarKind::RedDwarf,
                LifePhase::FuelExhausted,
                "Continues as a Red Dwarf, slowly converting remaining Hydrogen for eons. Eventually might become a (hypothetical) Blue Dwarf, then a Helium White Dwarf after trillions of years.".to_string(),
            )
        } else if m_eff < HIGH_MASS_LIMIT {
            (
                StellarKind::PlanetaryNebula,
                LifePhase::FuelExhausted,
                "Has shed its outer layers as a Planetary Nebula. The core remains as a cooling White Dwarf.".to_string(),
            )
        } else {
            let outcome = RemnantFate::for_collapse(m_eff, gravity_factor);
            remnant = Some(outcome);
            let mut fate =
                "Its core has collapsed, triggering a cataclysmic Supernova explosion!".to_string();
            // The visual switches to the remnant only below 2%, the narrative already at 5%
            let mut kind = StellarKind::SupernovaRemnant;
            match outcome {
                RemnantFate::NeutronStar => {
                    fate.push_str(" The remnant core is likely a dense Neutron Star.");
                    if h < REMNANT_VISIBLE_HYDROGEN {
                        kind = StellarKind::NeutronStar;
                    }
                }
                RemnantFate::BlackHole => {
                    fate.push_str(" The immense gravity of the collapsing core forms a Black Hole.");
                    if h < REMNANT_VISIBLE_HYDROGEN {
                        kind = StellarKind::BlackHole;
                    }
                }
            }
            (kind, LifePhase::FuelExhausted, fate)
        }
    } else if m_eff < FUSION_MIN_MASS {
        (
            StellarKind::Protostar,
            LifePhase::FailedStar,
            "This mass is too low to sustain nuclear fusion. It will likely become a Brown Dwarf, slowly cooling over billions of years.".to_string(),
        )
    } else if m_eff < LOW_MASS_LIMIT {
        (
            StellarKind::RedDwarf,
            LifePhase::LowMassMainSequence,
            format!("A Red Dwarf, characterized by its low mass and slow hydrogen fusion. It will have an incredibly long lifespan, potentially trillions of years. Hydrogen Level: {h:.0}%."),
        )
    } else if m_eff < MEDIUM_MASS_LIMIT {
        if h < MEDIUM_MASS_EVOLVED_HYDROGEN {
            (
                StellarKind::RedGiant,
                LifePhase::EvolvedMediumMass,
                format!("Having consumed much of its core hydrogen ({h:.0}%), it has expanded into a Red Giant. Future: Planetary Nebula, then White Dwarf."),
            )
        } else {
            (
                StellarKind::YellowDwarf,
                LifePhase::MediumMassMainSequence,
                format!("A Yellow Dwarf, similar to our Sun. Fuses hydrogen into helium in its core. Stable for billions of years. Hydrogen Level: {h:.0}%."),
            )
        }
    } else if m_eff < HIGH_MASS_LIMIT {
        if h < HIGH_MASS_EVOLVED_HYDROGEN {
            (
                StellarKind::RedSupergiant,
                LifePhase::EvolvedHighMass,
                format!("A massive star ({mass:.1} M☉) that has exhausted core hydrogen ({h:.0}%) and swelled into a Red Supergiant. Will end in a Supernova."),
            )
        } else {
            (
                StellarKind::BlueGiant,
                LifePhase::HighMassMainSequence,
                format!("A hot, luminous Blue Giant. Burns through its hydrogen ({h:.0}%) fuel rapidly compared to smaller stars."),
            )
        }
    } else if h < VERY_HIGH_MASS_EVOLVED_HYDROGEN {
        (
            StellarKind::RedSupergiant,
            LifePhase::EvolvedVeryHighMass,
            format!("An exceptionally massive star ({mass:.1} M☉, Eff: {m_eff:.1}) that has exhausted core hydrogen ({h:.0}%) and entered its late Supergiant phase. Destined for a powerful Supernova."),
        )
    } else {
        let (kind, phase, fate) = if h > O_TYPE_MIN_HYDROGEN
            && mass > O_TYPE_MIN_MASS
            && gravity_factor > O_TYPE_MIN_GRAVITY
        {
            (
                StellarKind::OTypeSupergiant,
                LifePhase::ExtremeOType,
                format!("With abundant hydrogen ({h:.0}%), immense mass ({mass:.1} M☉), and strong gravity ({gravity_factor:.1}x), this is an O-Type Supergiant. It's one of the hottest, brightest, and most massive types of stars, consuming fuel at an astonishing rate. Lifespan is very short."),
            )
        } else {
            (
                StellarKind::BlueGiant,
                LifePhase::VeryHighMassMainSequence,
                format!("An extremely massive ({mass:.1} M☉) Blue Giant on the main sequence. Its high hydrogen content ({h:.0}%) fuels a short but brilliant life."),
            )
        };
        let outcome = RemnantFate::for_collapse(m_eff, gravity_factor);
        remnant = Some(outcome);
        (kind, phase, fate)
    };

    // Eventual-fate clause for top-tier stars still on the main sequence
    if matches!(
        phase,
        LifePhase::ExtremeOType | LifePhase::VeryHighMassMainSequence
    ) {
        match remnant {
            Some(RemnantFate::NeutronStar) => {
                fate.push_str(" Eventual fate: Supernova, then Neutron Star.")
            }
            Some(RemnantFate::BlackHole) => {
                fate.push_str(" Eventual fate: Supernova, then Black Hole.")
            }
            None => {}
        }
    }

    log::debug!(
        "[classify] mass={:.2} gravity={:.2} hydrogen={:.0} eff={:.2} -> {:?}",
        mass,
        gravity_factor,
        h,
        m_eff,
        kind
    );

    Classification {
        state: StarState {
            stellar_type: kind.def(),
            effective_mass: m_eff,
            hydrogen_level: h,
            gravity_influence: gravity_factor,
            mass,
        },
        phase,
        fate,
        remnant,
    }
}
