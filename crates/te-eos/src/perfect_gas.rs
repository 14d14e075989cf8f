//! Perfect (ideal) gas equation of state.
//!
//! # Assumptions
//!
//! - Ideal gas law: `ρ = p·W / (R·T)`, so the compression factor is exactly 1
//! - No state beyond the wrapped specie
//!
//! Entropy is reported relative to the standard pressure
//! [`P_STD`](te_core::units::constants::P_STD).
//!
//! # Configuration
//!
//! The model reads and writes the wrapped specie's own entry. On output the
//! body is prefixed with a descriptive `type` key that readers ignore:
//!
//! ```yaml
//! N2:
//!   type: perfectGas<specie>
//!   specie:
//!     nMoles: 1.0
//!     molWeight: 28.0
//! ```

use std::fmt;
use std::io::{Read, Write};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use te_core::Real;
use te_core::units::constants::{P_STD, R_UNIVERSAL};
use te_specie::{Dict, SpecieError, SpecieModel, parse_single_entry, write_single_entry};
use tracing::debug;

use crate::eos::{EosCapabilities, EquationOfState};
use crate::error::{EosError, EosResult};

/// Placeholder entry name for errors raised before a name was read.
const STREAM_ENTRY: &str = "<stream>";

/// Perfect gas model over a specie `S`.
#[derive(Debug, Clone)]
pub struct PerfectGas<S> {
    specie: S,
}

impl<S: SpecieModel> PerfectGas<S> {
    /// Wrap a specie.
    pub fn new(specie: S) -> Self {
        Self { specie }
    }

    /// Copy of `other` under a new name.
    pub fn named(name: &str, other: &Self) -> Self {
        Self::new(other.specie.renamed(name))
    }

    /// Read from the body of a named dictionary entry.
    pub fn from_dict(name: &str, dict: &Dict) -> EosResult<Self> {
        let specie = S::from_dict(name, dict).map_err(|source| EosError::malformed(name, source))?;
        debug!(
            entry = name,
            molar_mass = specie.molar_mass(),
            "read {}",
            Self::type_name()
        );
        Ok(Self::new(specie))
    }

    /// Read a YAML document holding exactly one named entry.
    pub fn from_yaml_str(text: &str) -> EosResult<Self> {
        let (name, body) =
            parse_single_entry(text).map_err(|source| EosError::malformed(STREAM_ENTRY, source))?;
        Self::from_dict(&name, &body)
    }

    /// Read a YAML stream holding exactly one named entry.
    pub fn from_reader<R: Read>(mut reader: R) -> EosResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_yaml_str(&text)
    }

    /// Selector: owned model read from a stream.
    pub fn new_from_reader<R: Read>(reader: R) -> EosResult<Box<Self>> {
        Self::from_reader(reader).map(Box::new)
    }

    /// Selector: owned model read from a dictionary entry.
    pub fn new_from_dict(name: &str, dict: &Dict) -> EosResult<Box<Self>> {
        Self::from_dict(name, dict).map(Box::new)
    }

    /// Owned copy.
    pub fn clone_boxed(&self) -> Box<Self> {
        Box::new(self.clone())
    }

    /// Descriptive label, e.g. `perfectGas<specie>`.
    pub fn type_name() -> String {
        format!("perfectGas<{}>", S::type_name())
    }

    /// The wrapped specie.
    pub fn specie(&self) -> &S {
        &self.specie
    }

    /// Unwrap into the specie.
    pub fn into_specie(self) -> S {
        self.specie
    }

    /// Entry name. Empty for anonymous mixtures.
    pub fn name(&self) -> &str {
        self.specie.name()
    }

    /// Molar mass W [kg/kmol].
    pub fn molar_mass(&self) -> Real {
        self.specie.molar_mass()
    }

    /// Amount of substance [kmol].
    pub fn moles(&self) -> Real {
        self.specie.moles()
    }

    /// Specific gas constant R/W [J/(kg·K)].
    pub fn gas_constant(&self) -> Real {
        R_UNIVERSAL / self.specie.molar_mass()
    }

    /// Entry body: the `type` key followed by the specie's keys.
    ///
    /// Fails with [`EosError::Write`] when the specie holds values its reader
    /// would reject.
    pub fn to_dict(&self) -> EosResult<Dict> {
        let mut dict = Dict::new();
        dict.insert("type".into(), Self::type_name().into());
        self.specie
            .write_dict(&mut dict)
            .map_err(|source| self.write_error(source))?;
        Ok(dict)
    }

    /// Render as a YAML document holding one named entry.
    pub fn to_yaml_string(&self) -> EosResult<String> {
        write_single_entry(self.name(), self.to_dict()?).map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: SpecieError) -> EosError {
        EosError::Write {
            entry: self.name().to_owned(),
            source,
        }
    }

    /// Write as a YAML document holding one named entry.
    pub fn write<W: Write>(&self, mut writer: W) -> EosResult<()> {
        let text = self.to_yaml_string()?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

impl<S: SpecieModel> EquationOfState for PerfectGas<S> {
    const CAPABILITIES: EosCapabilities = EosCapabilities::COMPRESSIBLE;

    #[inline]
    fn rho(&self, p: Real, t: Real) -> Real {
        p / (self.gas_constant() * t)
    }

    #[inline]
    fn psi(&self, _p: Real, t: Real) -> Real {
        1.0 / (self.gas_constant() * t)
    }

    #[inline]
    fn z(&self, _p: Real, _t: Real) -> Real {
        1.0
    }

    #[inline]
    fn c_t_exp(&self, _p: Real, t: Real) -> Real {
        1.0 / t
    }

    #[inline]
    fn s(&self, p: Real, _t: Real) -> Real {
        -self.gas_constant() * (p / P_STD).ln()
    }

    #[inline]
    fn cp_m_cv(&self, _p: Real, _t: Real) -> Real {
        self.gas_constant()
    }
}

impl<S: SpecieModel> PartialEq for PerfectGas<S> {
    fn eq(&self, other: &Self) -> bool {
        self.specie.approx_eq(&other.specie)
    }
}

impl<S: SpecieModel> fmt::Display for PerfectGas<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_yaml_string().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<S: SpecieModel> Add for &PerfectGas<S> {
    type Output = PerfectGas<S>;

    fn add(self, rhs: &PerfectGas<S>) -> PerfectGas<S> {
        PerfectGas::new(self.specie.mix(&rhs.specie))
    }
}

impl<S: SpecieModel> Add for PerfectGas<S> {
    type Output = PerfectGas<S>;

    fn add(self, rhs: PerfectGas<S>) -> PerfectGas<S> {
        &self + &rhs
    }
}

impl<S: SpecieModel> Sub for &PerfectGas<S> {
    type Output = PerfectGas<S>;

    fn sub(self, rhs: &PerfectGas<S>) -> PerfectGas<S> {
        PerfectGas::new(self.specie.unmix(&rhs.specie))
    }
}

impl<S: SpecieModel> Sub for PerfectGas<S> {
    type Output = PerfectGas<S>;

    fn sub(self, rhs: PerfectGas<S>) -> PerfectGas<S> {
        &self - &rhs
    }
}

impl<S: SpecieModel> Mul<&PerfectGas<S>> for Real {
    type Output = PerfectGas<S>;

    fn mul(self, rhs: &PerfectGas<S>) -> PerfectGas<S> {
        PerfectGas::new(rhs.specie.scaled(self))
    }
}

impl<S: SpecieModel> Mul<PerfectGas<S>> for Real {
    type Output = PerfectGas<S>;

    fn mul(self, rhs: PerfectGas<S>) -> PerfectGas<S> {
        self * &rhs
    }
}

impl<S: SpecieModel> Mul<Real> for &PerfectGas<S> {
    type Output = PerfectGas<S>;

    fn mul(self, rhs: Real) -> PerfectGas<S> {
        rhs * self
    }
}

impl<S: SpecieModel> AddAssign<&PerfectGas<S>> for PerfectGas<S> {
    fn add_assign(&mut self, rhs: &PerfectGas<S>) {
        *self = &*self + rhs;
    }
}

impl<S: SpecieModel> SubAssign<&PerfectGas<S>> for PerfectGas<S> {
    fn sub_assign(&mut self, rhs: &PerfectGas<S>) {
        *self = &*self - rhs;
    }
}

impl<S: SpecieModel> MulAssign<Real> for PerfectGas<S> {
    fn mul_assign(&mut self, rhs: Real) {
        *self = rhs * &*self;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use te_core::numeric::{Tolerances, nearly_equal};
    use te_specie::Specie;

    const P: Real = 101_325.0;
    const T: Real = 300.0;

    fn n2() -> PerfectGas<Specie> {
        PerfectGas::new(Specie::new("N2", 1.0, 28.0))
    }

    fn close(a: Real, b: Real) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn nitrogen_like_scenario() {
        let gas = n2();

        // ρ = 101325·28 / (8314.47·300)
        let rho = gas.rho(P, T);
        assert!(close(rho, 2_837_100.0 / 2_494_341.0));
        assert!((rho - 1.1374).abs() < 1e-4);

        assert!(close(gas.psi(P, T), rho / P));
        assert_eq!(gas.z(P, T), 1.0);
        assert!((gas.cp_m_cv(P, T) - 296.95).abs() < 0.01);
        assert_eq!(gas.c_t_exp(P, T), 1.0 / 300.0);
    }

    #[test]
    fn entropy_is_zero_at_standard_pressure() {
        let gas = n2();
        assert_eq!(gas.s(P_STD, T), 0.0);
        assert!(gas.s(2.0 * P_STD, T) < 0.0);
        assert!(gas.s(0.5 * P_STD, T) > 0.0);
        assert!(close(
            gas.s(P, T),
            -gas.gas_constant() * (P / P_STD).ln()
        ));
    }

    #[test]
    fn zero_temperature_is_not_an_error() {
        let gas = n2();
        assert!(gas.rho(P, 0.0).is_infinite());
        assert!(gas.c_t_exp(P, 0.0).is_infinite());
    }

    #[test]
    fn capability_flags() {
        let caps = <PerfectGas<Specie> as EquationOfState>::CAPABILITIES;
        assert!(!caps.incompressible);
        assert!(!caps.isochoric);
    }

    #[test]
    fn type_name_wraps_specie_type() {
        assert_eq!(PerfectGas::<Specie>::type_name(), "perfectGas<specie>");
    }

    #[test]
    fn named_copy_replaces_only_name() {
        let air = PerfectGas::named("air", &n2());
        assert_eq!(air.name(), "air");
        assert_eq!(air.molar_mass(), 28.0);
        assert_eq!(air.moles(), 1.0);
    }

    #[test]
    fn mixing_two_gases() {
        let a = PerfectGas::new(Specie::new("A", 1.0, 28.0));
        let b = PerfectGas::new(Specie::new("B", 1.0, 32.0));
        let mix = &a + &b;

        assert_eq!(mix.moles(), 2.0);
        assert_eq!(mix.molar_mass(), 30.0);
        assert!(close(mix.cp_m_cv(P, T), R_UNIVERSAL / 30.0));
    }

    #[test]
    fn scaling_keeps_intensive_properties() {
        let gas = n2();
        let big = 5.0 * &gas;
        assert_eq!(big.moles(), 5.0);
        assert_eq!(big.rho(P, T), gas.rho(P, T));
        assert_eq!((&gas * 5.0).moles(), 5.0);
    }

    #[test]
    fn compound_forms_match_binary_forms() {
        let a = n2();
        let b = PerfectGas::new(Specie::new("O2", 0.5, 32.0));

        let mut c = a.clone();
        c += &b;
        assert_eq!(c, &a + &b);
        assert_eq!(c.moles(), 1.5);

        c -= &b;
        assert_eq!(c, a);
        assert_eq!(c.moles(), 1.0);

        c *= 3.0;
        assert_eq!(c, 3.0 * &a);
        assert_eq!(c.moles(), 3.0);
    }

    #[test]
    fn equality_ignores_amount() {
        let two = PerfectGas::new(Specie::new("N2", 2.0, 28.0));
        assert_eq!(n2(), two);
        assert_eq!(n2().rho(P, T), two.rho(P, T));
    }

    #[test]
    fn zero_amount_entry_added_to_itself() {
        let text = "N2:\n  specie:\n    nMoles: 0\n    molWeight: 28\n";
        let gas = PerfectGas::<Specie>::from_yaml_str(text).unwrap();
        let twice = &gas + &gas;
        assert!(twice.rho(P, T).is_finite());
        assert!(twice.cp_m_cv(P, T).is_finite());
    }

    #[test]
    fn emptied_gas_round_trips() {
        let empty = &n2() - &n2();
        let text = empty.to_yaml_string().unwrap();
        let back = PerfectGas::<Specie>::from_yaml_str(&text).unwrap();
        assert_eq!(back, empty);
        assert_eq!(back.moles(), empty.moles());
    }

    #[test]
    fn non_finite_gas_is_not_written() {
        let gas = PerfectGas::new(Specie::new("N2", 1.0, f64::NAN));
        match gas.to_yaml_string().unwrap_err() {
            EosError::Write { entry, .. } => assert_eq!(entry, "N2"),
            other => panic!("unexpected error: {other}"),
        }
        let mut sink = Vec::new();
        assert!(gas.write(&mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn equality_follows_specie() {
        let a = n2();
        let b = PerfectGas::new(Specie::new("N2", 1.0, 28.0 * (1.0 + 1e-12)));
        let c = PerfectGas::new(Specie::new("N2", 1.0, 29.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn written_body_starts_with_type() {
        let dict = n2().to_dict().unwrap();
        let (first_key, first_value) = dict.iter().next().unwrap();
        assert_eq!(first_key.as_str(), Some("type"));
        assert_eq!(first_value.as_str(), Some("perfectGas<specie>"));
        assert!(dict.get("specie").is_some());
    }

    #[test]
    fn display_matches_yaml() {
        let gas = n2();
        assert_eq!(gas.to_string(), gas.to_yaml_string().unwrap());
    }

    #[test]
    fn reads_plain_specie_entry() {
        let text = "N2:\n  specie:\n    nMoles: 1\n    molWeight: 28\n";
        let gas = PerfectGas::<Specie>::from_yaml_str(text).unwrap();
        assert_eq!(gas, n2());
    }

    #[test]
    fn malformed_entry_names_the_entry() {
        let text = "N2:\n  specie:\n    nMoles: 1\n";
        let err = PerfectGas::<Specie>::from_yaml_str(text).unwrap_err();
        match err {
            EosError::MalformedConfig { entry, .. } => assert_eq!(entry, "N2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clone_boxed_is_equal() {
        let gas = n2();
        let boxed = gas.clone_boxed();
        assert_eq!(*boxed, gas);
        assert_eq!(boxed.moles(), gas.moles());
    }
}
