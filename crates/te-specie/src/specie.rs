//! The reference specie record.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use serde::Deserialize;
use serde_yaml::Value;
use te_core::numeric::{Real, SMALL, Tolerances, ensure_finite, nearly_equal};

use crate::dict::{Dict, sub_dict};
use crate::error::{SpecieError, SpecieResult};
use crate::model::SpecieModel;

/// Keys of the `specie` sub-dictionary.
#[derive(Debug, Clone, Copy, Deserialize)]
struct SpecieCoeffs {
    #[serde(rename = "nMoles")]
    n_moles: Real,
    #[serde(rename = "molWeight")]
    mol_weight: Real,
}

/// A named amount of one specie (or an anonymous mixture of several).
///
/// Combination is mole-weighted:
/// - `a + b`: `n = nₐ + n_b` (floored at [`SMALL`]), `W = (nₐ·Wₐ + n_b·W_b) / n`
/// - `a - b`: `n = nₐ - n_b` (floored at [`SMALL`] in magnitude), `W = (nₐ·Wₐ - n_b·W_b) / n`
/// - `s * a`: `n = s·nₐ`, `W = Wₐ`
///
/// Equality is tolerance based, see [`SpecieModel::approx_eq`].
#[derive(Debug, Clone)]
pub struct Specie {
    name: String,
    n_moles: Real,
    mol_weight: Real,
}

impl Specie {
    /// Create a specie from components. Values are taken as given.
    pub fn new(name: impl Into<String>, n_moles: Real, mol_weight: Real) -> Self {
        Self {
            name: name.into(),
            n_moles,
            mol_weight,
        }
    }

    /// Name shared by both operands, otherwise empty.
    fn combined_name(&self, other: &Self) -> String {
        if self.name == other.name {
            self.name.clone()
        } else {
            String::new()
        }
    }

    fn names_compatible(&self, other: &Self) -> bool {
        self.name.is_empty() || other.name.is_empty() || self.name == other.name
    }
}

/// Reading and writing share one domain: both coefficients must be finite.
fn finite_coeff(value: Real, key: &'static str) -> SpecieResult<Real> {
    ensure_finite(value, key).map_err(|source| SpecieError::InvalidValue { key, source })
}

impl SpecieModel for Specie {
    fn type_name() -> &'static str {
        "specie"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..self.clone()
        }
    }

    fn moles(&self) -> Real {
        self.n_moles
    }

    fn molar_mass(&self) -> Real {
        self.mol_weight
    }

    fn mix(&self, other: &Self) -> Self {
        let n_moles = (self.n_moles + other.n_moles).max(SMALL);
        let mol_weight =
            (self.n_moles * self.mol_weight + other.n_moles * other.mol_weight) / n_moles;

        Self {
            name: self.combined_name(other),
            n_moles,
            mol_weight,
        }
    }

    fn unmix(&self, other: &Self) -> Self {
        let mut n_moles = self.n_moles - other.n_moles;
        if n_moles.abs() < SMALL {
            n_moles = SMALL;
        }
        let mol_weight =
            (self.n_moles * self.mol_weight - other.n_moles * other.mol_weight) / n_moles;

        Self {
            name: self.combined_name(other),
            n_moles,
            mol_weight,
        }
    }

    fn scaled(&self, factor: Real) -> Self {
        Self {
            name: self.name.clone(),
            n_moles: factor * self.n_moles,
            mol_weight: self.mol_weight,
        }
    }

    /// Names must be compatible (equal, or either anonymous) and the molar
    /// masses must agree under the default tolerances. Amounts are not compared.
    fn approx_eq(&self, other: &Self) -> bool {
        self.names_compatible(other)
            && nearly_equal(self.mol_weight, other.mol_weight, Tolerances::default())
    }

    fn from_dict(name: &str, dict: &Dict) -> SpecieResult<Self> {
        let coeffs = sub_dict(dict, "specie")?;
        let coeffs: SpecieCoeffs = serde_yaml::from_value(Value::Mapping(coeffs.clone()))?;

        let n_moles = finite_coeff(coeffs.n_moles, "nMoles")?;
        let mol_weight = finite_coeff(coeffs.mol_weight, "molWeight")?;

        Ok(Self::new(name, n_moles, mol_weight))
    }

    fn write_dict(&self, dict: &mut Dict) -> SpecieResult<()> {
        let mut coeffs = Dict::new();
        coeffs.insert(
            Value::from("nMoles"),
            Value::from(finite_coeff(self.n_moles, "nMoles")?),
        );
        coeffs.insert(
            Value::from("molWeight"),
            Value::from(finite_coeff(self.mol_weight, "molWeight")?),
        );
        dict.insert(Value::from("specie"), Value::Mapping(coeffs));
        Ok(())
    }
}

impl PartialEq for Specie {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl fmt::Display for Specie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = if self.name.is_empty() {
            "<mixture>"
        } else {
            &self.name
        };
        write!(
            f,
            "{} (n = {} kmol, W = {} kg/kmol)",
            name, self.n_moles, self.mol_weight
        )
    }
}

impl Add for &Specie {
    type Output = Specie;

    fn add(self, rhs: &Specie) -> Specie {
        self.mix(rhs)
    }
}

impl Add for Specie {
    type Output = Specie;

    fn add(self, rhs: Specie) -> Specie {
        self.mix(&rhs)
    }
}

impl Sub for &Specie {
    type Output = Specie;

    fn sub(self, rhs: &Specie) -> Specie {
        self.unmix(rhs)
    }
}

impl Sub for Specie {
    type Output = Specie;

    fn sub(self, rhs: Specie) -> Specie {
        self.unmix(&rhs)
    }
}

impl Mul<&Specie> for Real {
    type Output = Specie;

    fn mul(self, rhs: &Specie) -> Specie {
        rhs.scaled(self)
    }
}

impl Mul<Specie> for Real {
    type Output = Specie;

    fn mul(self, rhs: Specie) -> Specie {
        rhs.scaled(self)
    }
}

impl AddAssign<&Specie> for Specie {
    fn add_assign(&mut self, rhs: &Specie) {
        *self = self.mix(rhs);
    }
}

impl SubAssign<&Specie> for Specie {
    fn sub_assign(&mut self, rhs: &Specie) {
        *self = self.unmix(rhs);
    }
}

impl MulAssign<Real> for Specie {
    fn mul_assign(&mut self, rhs: Real) {
        self.n_moles *= rhs;
    }
}
