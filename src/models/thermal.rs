//! Thermal property models.
//!
//! This module contains models that check solid-phase heat capacity
//! correlations against reference thermodynamic data.

pub mod cp_check;
