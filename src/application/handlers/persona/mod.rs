//! Persona quiz handler.

mod classify_persona;

pub use classify_persona::{ClassifyPersonaCommand, ClassifyPersonaHandler};
