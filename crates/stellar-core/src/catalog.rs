//! Static catalog of stellar types and their visual presentation.

use crate::color::Rgba;

/// Every stellar type/phase the explorer can present.
///
/// The discriminant doubles as the index into [`CATALOG`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StellarKind {
    Protostar,
    BrownDwarf,
    RedDwarf,
    YellowDwarf,
    BlueGiant,
    OTypeSupergiant,
    RedGiant,
    RedSupergiant,
    WhiteDwarf,
    PlanetaryNebula,
    NeutronStar,
    BlackHole,
    SupernovaRemnant,
}

impl StellarKind {
    pub const ALL: [StellarKind; 13] = [
        StellarKind::Protostar,
        StellarKind::BrownDwarf,
        StellarKind::RedDwarf,
        StellarKind::YellowDwarf,
        StellarKind::BlueGiant,
        StellarKind::OTypeSupergiant,
        StellarKind::RedGiant,
        StellarKind::RedSupergiant,
        StellarKind::WhiteDwarf,
        StellarKind::PlanetaryNebula,
        StellarKind::NeutronStar,
        StellarKind::BlackHole,
        StellarKind::SupernovaRemnant,
    ];

    /// Catalog entry for this kind.
    #[inline]
    pub fn def(self) -> &'static StellarTypeDef {
        let def = &CATALOG[self as usize];
        debug_assert_eq!(def.kind, self, "catalog order out of sync");
        def
    }
}

/// How a catalog entry is drawn. Chosen once per entry, never inferred at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderMode {
    /// Soft expanding gas shell around a tiny core.
    Nebula { color: Rgba, size_factor: f64 },
    /// Black hole: swirling disk, event horizon and lensing ring.
    AccretionDisk,
    /// Neutron star: rotating beams and a pulsing body.
    Pulsing,
    /// Ordinary star body with a glow; `corona` overrides the derived glow color.
    GenericCorona { corona: Option<Rgba> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct StellarTypeDef {
    pub kind: StellarKind,
    pub display_name: &'static str,
    pub base_color: Rgba,
    pub size_factor: f64,
    pub activity: f64,
    pub description: &'static str,
    pub mode: RenderMode,
}

impl StellarTypeDef {
    #[inline]
    pub fn corona_color(&self) -> Option<Rgba> {
        match self.mode {
            RenderMode::GenericCorona { corona } => corona,
            _ => None,
        }
    }
}

pub static CATALOG: [StellarTypeDef; 13] = [
    StellarTypeDef {
        kind: StellarKind::Protostar,
        display_name: "Protostar Cloud",
        base_color: Rgba::new(150, 100, 200, 0.4),
        size_factor: 2.0,
        activity: 0.1,
        description: "A collapsing cloud of gas and dust, not yet hot enough for fusion.",
        mode: RenderMode::GenericCorona { corona: None },
    },
    StellarTypeDef {
        kind: StellarKind::BrownDwarf,
        display_name: "Brown Dwarf",
        base_color: Rgba::rgb(0x8a, 0x4b, 0x38),
        size_factor: 0.2,
        activity: 0.05,
        description: "A substellar object too light to sustain hydrogen fusion, slowly cooling over billions of years.",
        mode: RenderMode::GenericCorona { corona: None },
    },
    StellarTypeDef {
        kind: StellarKind::RedDwarf,
        display_name: "Red Dwarf",
        base_color: Rgba::rgb(0xff, 0x66, 0x33),
        size_factor: 0.3,
        activity: 0.2,
        description: "A small, cool, very long-lived star.",
        mode: RenderMode::GenericCorona { corona: None },
    },
    StellarTypeDef {
        kind: StellarKind::YellowDwarf,
        display_name: "Yellow Dwarf (Main Sequence)",
        base_color: Rgba::rgb(0xff, 0xee, 0xaa),
        size_factor: 1.0,
        activity: 0.5,
        description: "A medium-sized star like our Sun.",
        mode: RenderMode::GenericCorona { corona: None },
    },
    StellarTypeDef {
        kind: StellarKind::BlueGiant,
        display_name: "Blue Giant (Main Sequence)",
        base_color: Rgba::rgb(0xaa, 0xdd, 0xff),
        size_factor: 2.5,
        activity: 1.0,
        description: "A large, hot, and bright star, burning fuel rapidly.",
        mode: RenderMode::GenericCorona { corona: None },
    },
    StellarTypeDef {
        kind: StellarKind::OTypeSupergiant,
        display_name: "O-Type Supergiant",
        base_color: Rgba::rgb(0xcc, 0xdd, 0xff),
        size_factor: 3.5,
        activity: 1.5,
        description: "An extremely luminous and massive star, burning incredibly hot and fast.",
        mode: RenderMode::GenericCorona {
            corona: Some(Rgba::new(200, 220, 255, 0.6)),
        },
    },
    StellarTypeDef {
        kind: StellarKind::RedGiant,
        display_name: "Red Giant",
        base_color: Rgba::rgb(0xff, 0x88, 0x44),
        size_factor: 3.5,
        activity: 0.4,
        description: "Evolved star, expanded after exhausting core hydrogen.",
        mode: RenderMode::GenericCorona {
            corona: Some(Rgba::new(255, 100, 0, 0.3)),
        },
    },
    StellarTypeDef {
        kind: StellarKind::RedSupergiant,
        display_name: "Red Supergiant",
        base_color: Rgba::rgb(0xcc, 0x44, 0x22),
        size_factor: 5.0,
        activity: 0.6,
        description: "A very massive star in its late stages.",
        mode: RenderMode::GenericCorona {
            corona: Some(Rgba::new(200, 0, 0, 0.4)),
        },
    },
    StellarTypeDef {
        kind: StellarKind::WhiteDwarf,
        display_name: "White Dwarf",
        base_color: Rgba::WHITE,
        size_factor: 0.1,
        activity: 0.05,
        description: "Dense remnant core of a low/medium-mass star.",
        mode: RenderMode::GenericCorona { corona: None },
    },
    StellarTypeDef {
        kind: StellarKind::PlanetaryNebula,
        display_name: "Planetary Nebula + White Dwarf",
        base_color: Rgba::WHITE,
        size_factor: 0.1,
        activity: 0.3,
        description: "Expanding gas shell from an old red giant, with a White Dwarf forming.",
        mode: RenderMode::Nebula {
            color: Rgba::new(0, 200, 180, 0.35),
            size_factor: 4.0,
        },
    },
    StellarTypeDef {
        kind: StellarKind::NeutronStar,
        display_name: "Neutron Star",
        base_color: Rgba::rgb(0xdd, 0xdd, 0xff),
        size_factor: 0.02,
        activity: 2.0,
        description: "Incredibly dense collapsed core of a massive star.",
        mode: RenderMode::Pulsing,
    },
    StellarTypeDef {
        kind: StellarKind::BlackHole,
        display_name: "Black Hole",
        base_color: Rgba::BLACK,
        size_factor: 0.05,
        activity: 2.5,
        description: "Region of spacetime with inescapable gravity.",
        mode: RenderMode::AccretionDisk,
    },
    StellarTypeDef {
        kind: StellarKind::SupernovaRemnant,
        display_name: "Supernova Event / Remnant",
        base_color: Rgba::rgb(0xff, 0xee, 0xcc),
        size_factor: 0.01,
        activity: 3.0,
        description: "Cataclysmic explosion of a massive star, leaving behind a nebula.",
        mode: RenderMode::Nebula {
            color: Rgba::new(255, 200, 80, 0.6),
            size_factor: 7.0,
        },
    },
];
