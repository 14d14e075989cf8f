//! te-eos: equation-of-state models for thermoeos.
//!
//! Provides:
//! - `EquationOfState` trait with a compile-time capability descriptor
//! - `PerfectGas<S>`, the ideal-gas model layered on any `SpecieModel`
//! - Mixture algebra on models (`+`, `-`, scalar `*` and compound forms)
//! - Configuration round-tripping through named YAML entries
//! - uom-typed accessors for callers working in SI quantities
//!
//! # Example
//!
//! ```
//! use te_eos::{EquationOfState, PerfectGas};
//! use te_specie::Specie;
//!
//! let n2 = PerfectGas::new(Specie::new("N2", 1.0, 28.0));
//! let rho = n2.rho(101_325.0, 300.0);
//! assert!((rho - 1.1374).abs() < 1e-3);
//! assert_eq!(n2.z(101_325.0, 300.0), 1.0);
//! ```

pub mod eos;
pub mod error;
pub mod perfect_gas;
pub mod units;

pub use eos::{EosCapabilities, EosPropertyPack, EquationOfState};
pub use error::{EosError, EosResult};
pub use perfect_gas::PerfectGas;
pub use units::EquationOfStateExt;
