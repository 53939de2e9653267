use thiserror::Error;

/// Failure to turn raw control values into a [`crate::SimulationInput`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: &'static str, raw: String },
}
