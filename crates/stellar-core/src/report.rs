//! Text shown next to the canvas: classification panel and control readouts.

use crate::classify::{Classification, SimulationInput};
use crate::naming::generate_name;

/// Content of the classification panel for one input change.
#[derive(Clone, Debug, PartialEq)]
pub struct StarReport {
    pub title: String,
    pub designation: String,
    pub description: &'static str,
    pub parameters: String,
    pub fate: String,
}

impl StarReport {
    pub fn new(classification: &Classification) -> Self {
        let state = &classification.state;
        let def = state.stellar_type;
        Self {
            title: format!("{}: {}", classification.phase.header(), def.display_name),
            designation: generate_name(state.mass, state.hydrogen_level, state.gravity_influence),
            description: def.description,
            parameters: format!(
                "Mass: {:.1} M☉, Gravity Inf: {:.1}x, Hydrogen: {:.0}%",
                state.mass, state.gravity_influence, state.hydrogen_level
            ),
            fate: classification.fate.clone(),
        }
    }

    /// Markup for the host's rich-text panel. Every field is generated text.
    pub fn to_html(&self) -> String {
        format!(
            "<h2>{}</h2>\
             <h3>Designation: {}</h3>\
             <p>{}</p>\
             <p><strong>Current Parameters:</strong> {}</p>\
             <p><strong>Probable Fate / Evolution:</strong> {}</p>",
            self.title, self.designation, self.description, self.parameters, self.fate
        )
    }
}

/// Numeric labels displayed beside each slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readouts {
    pub mass: String,
    pub gravity: String,
    pub hydrogen: String,
}

impl Readouts {
    pub fn from_input(input: &SimulationInput) -> Self {
        Self {
            mass: format!("{:.1}", input.mass),
            gravity: format!("{:.2}", input.gravity_factor),
            hydrogen: format!("{:.0}", input.hydrogen_percent),
        }
    }
}

#[inline]
pub fn zoom_label(zoom: f64) -> String {
    format!("Zoom: {:.1}x", zoom)
}
