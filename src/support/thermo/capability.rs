//! Capability traits used to query heat capacities and species data.

mod properties;
mod species;

pub use properties::HasMolarCp;
pub use species::ThermoSpecies;
