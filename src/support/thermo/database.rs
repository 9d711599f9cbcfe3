//! Named collections of solid species.
//!
//! A materials database groups species under names such as `"minerals"` or
//! `"refractories"`, and callers load a whole group at once before picking
//! species from it by position or name. [`SpeciesProvider`] is that seam;
//! [`MaterialsDatabase`] is an in-memory implementation.

use std::collections::BTreeMap;

use thiserror::Error;
use uom::si::f64::MolarMass;

use super::{SolidSpecies, capability::ThermoSpecies};

/// Errors raised by a [`SpeciesProvider`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("unknown species group: {group}")]
    UnknownGroup { group: String },

    #[error("unknown species: {name}")]
    UnknownSpecies { name: String },

    #[error("species already defined: {name}")]
    DuplicateSpecies { name: String },
}

/// Source of species definitions.
pub trait SpeciesProvider {
    /// Loads every species in `group`, in definition order.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::UnknownGroup`] if the group does not exist.
    fn load_species(&self, group: &str) -> Result<Vec<SolidSpecies>, DatabaseError>;

    /// Looks up the molar mass of a species by name.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::UnknownSpecies`] if the species does not exist.
    fn molar_mass(&self, name: &str) -> Result<MolarMass, DatabaseError>;
}

/// In-memory materials database.
///
/// # Example
///
/// ```
/// use twine_solids::support::{
///     sampling::TemperatureRanges,
///     thermo::{
///         SolidSpecies,
///         database::{MaterialsDatabase, SpeciesProvider},
///         model::{ConstantCp, PiecewiseFit},
///     },
/// };
/// use uom::si::{
///     f64::{MolarHeatCapacity, MolarMass},
///     molar_heat_capacity::joule_per_kelvin_mole,
///     molar_mass::gram_per_mole,
/// };
///
/// let fit = PiecewiseFit::new(
///     TemperatureRanges::new(vec![300.0, 1500.0], 200).unwrap(),
///     vec![ConstantCp::new(MolarHeatCapacity::new::<joule_per_kelvin_mole>(44.6))],
/// )
/// .unwrap();
/// let quartz = SolidSpecies::new("quartz", MolarMass::new::<gram_per_mole>(60.08), fit).unwrap();
///
/// let mut db = MaterialsDatabase::new();
/// db.insert(quartz).unwrap();
/// db.define_group("minerals", ["quartz"]).unwrap();
///
/// assert_eq!(db.load_species("minerals").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaterialsDatabase {
    species: BTreeMap<String, SolidSpecies>,
    groups: BTreeMap<String, Vec<String>>,
}

impl MaterialsDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a species, keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::DuplicateSpecies`] if the name is taken.
    pub fn insert(&mut self, species: SolidSpecies) -> Result<(), DatabaseError> {
        let name = species.name().to_owned();
        if self.species.contains_key(&name) {
            return Err(DatabaseError::DuplicateSpecies { name });
        }

        self.species.insert(name, species);
        Ok(())
    }

    /// Defines (or replaces) a group from species names, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::UnknownSpecies`] if a member is not defined;
    /// the group is left unchanged.
    pub fn define_group<I, S>(
        &mut self,
        group: impl Into<String>,
        members: I,
    ) -> Result<(), DatabaseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = members
            .into_iter()
            .map(|member| {
                let name: String = member.into();
                if self.species.contains_key(&name) {
                    Ok(name)
                } else {
                    Err(DatabaseError::UnknownSpecies { name })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.groups.insert(group.into(), members);
        Ok(())
    }

    /// Returns a species by name.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::UnknownSpecies`] if it is not defined.
    pub fn species(&self, name: &str) -> Result<&SolidSpecies, DatabaseError> {
        self.species
            .get(name)
            .ok_or_else(|| DatabaseError::UnknownSpecies {
                name: name.to_owned(),
            })
    }

    /// Iterates over group names in lexical order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

impl SpeciesProvider for MaterialsDatabase {
    fn load_species(&self, group: &str) -> Result<Vec<SolidSpecies>, DatabaseError> {
        let members = self
            .groups
            .get(group)
            .ok_or_else(|| DatabaseError::UnknownGroup {
                group: group.to_owned(),
            })?;

        members
            .iter()
            .map(|name| self.species(name).cloned())
            .collect()
    }

    fn molar_mass(&self, name: &str) -> Result<MolarMass, DatabaseError> {
        self.species(name).map(ThermoSpecies::molar_mass)
    }
}
