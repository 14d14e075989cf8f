//! te-specie: specie records and mixing algebra for thermoeos.
//!
//! Provides:
//! - The `SpecieModel` capability that equation-of-state layers build upon
//! - `Specie`, the reference record (name, kmol amount, molar mass)
//! - Mole-weighted mixing, un-mixing and scaling
//! - YAML dictionary I/O for named specie entries
//! - A small catalog of common gases
//!
//! # Example
//!
//! ```
//! use te_specie::{Specie, SpecieModel};
//!
//! let n2 = Specie::new("N2", 1.0, 28.0);
//! let o2 = Specie::new("O2", 1.0, 32.0);
//! let mix = &n2 + &o2;
//! assert_eq!(mix.moles(), 2.0);
//! assert!((mix.molar_mass() - 30.0).abs() < 1e-12);
//! ```

pub mod catalog;
pub mod dict;
pub mod error;
pub mod model;
pub mod specie;

pub use catalog::KnownSpecie;
pub use dict::{Dict, parse_single_entry, write_single_entry};
pub use error::{SpecieError, SpecieResult};
pub use model::SpecieModel;
pub use specie::Specie;
