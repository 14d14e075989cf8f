//! The specie capability consumed by equation-of-state layers.

use std::fmt;

use te_core::Real;

use crate::dict::Dict;
use crate::error::SpecieResult;

/// Identity and compositional bookkeeping of one chemical specie or mixture.
///
/// Equation-of-state models wrap a `SpecieModel` and forward identity,
/// mixing and configuration I/O to it. Implementations must be thread-safe
/// (Send + Sync) so wrapped models can be evaluated in parallel.
pub trait SpecieModel: Clone + fmt::Debug + Send + Sync + Sized {
    /// Descriptive label of the specie family, e.g. `"specie"`.
    fn type_name() -> &'static str;

    /// Entry name. Empty for anonymous mixtures.
    fn name(&self) -> &str;

    /// Copy of `self` carrying a different name.
    fn renamed(&self, name: &str) -> Self;

    /// Amount of substance [kmol].
    fn moles(&self) -> Real;

    /// Molar mass [kg/kmol].
    fn molar_mass(&self) -> Real;

    /// Mole-weighted combination of `self` and `other`.
    fn mix(&self, other: &Self) -> Self;

    /// Removes `other` from `self`; inverse of [`SpecieModel::mix`].
    fn unmix(&self, other: &Self) -> Self;

    /// Scales the amount of substance by `factor`.
    fn scaled(&self, factor: Real) -> Self;

    /// Equality within the specie layer's tolerance. Compares identity and
    /// molar mass, not amount.
    fn approx_eq(&self, other: &Self) -> bool;

    /// Reads the specie from the body of a named configuration entry.
    fn from_dict(name: &str, dict: &Dict) -> SpecieResult<Self>;

    /// Appends the specie's keys to an entry body.
    ///
    /// Fails for values [`SpecieModel::from_dict`] would reject, so anything
    /// written can be read back.
    fn write_dict(&self, dict: &mut Dict) -> SpecieResult<()>;
}
