use std::{fmt, str::FromStr};

use uom::si::f64::{MassDensity, ThermodynamicTemperature};

use crate::support::{
    selector::{UnknownModelError, parse_keyword},
    thermo::{
        PropertyError,
        capability::{HasDensity, HasKinematicViscosity, ThermoModel},
        fluid::Air,
    },
    units::KinematicViscosity,
};

use super::Tabulated;

#[cfg(feature = "coolprop")]
use super::CoolProp;

/// Names one of the available air property models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropertyModel {
    /// Ideal-gas density with the handbook viscosity table.
    #[default]
    Tabulated,

    /// `CoolProp` equation of state for air.
    Reference,
}

impl FromStr for PropertyModel {
    type Err = UnknownModelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_keyword(
            "property model",
            text,
            &[
                ("tabulated", Self::Tabulated),
                ("idelchik", Self::Tabulated),
                ("reference", Self::Reference),
                ("thermo", Self::Reference),
                ("coolprop", Self::Reference),
            ],
        )
    }
}

impl fmt::Display for PropertyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tabulated => "tabulated",
            Self::Reference => "reference",
        })
    }
}

/// An air property model chosen at run time.
///
/// Dispatches each property query to the selected model.
pub enum AirModel {
    Tabulated(Tabulated),
    #[cfg(feature = "coolprop")]
    #[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
    Reference(CoolProp<Air>),
}

impl AirModel {
    /// Instantiates the model named by `model`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Unavailable`] when the reference model is
    /// requested from a build without the `coolprop` feature, or the mapped
    /// `CoolProp` error if its state cannot be created.
    pub fn select(model: PropertyModel) -> Result<Self, PropertyError> {
        tracing::debug!(%model, "selecting air property model");
        match model {
            PropertyModel::Tabulated => Ok(Self::Tabulated(Tabulated::default())),
            #[cfg(feature = "coolprop")]
            PropertyModel::Reference => Ok(Self::Reference(CoolProp::new()?)),
            #[cfg(not(feature = "coolprop"))]
            PropertyModel::Reference => Err(PropertyError::Unavailable {
                model: model.to_string(),
                reason: "built without the `coolprop` feature".to_string(),
            }),
        }
    }

    /// Which model this is.
    #[must_use]
    pub fn kind(&self) -> PropertyModel {
        match self {
            Self::Tabulated(_) => PropertyModel::Tabulated,
            #[cfg(feature = "coolprop")]
            Self::Reference(_) => PropertyModel::Reference,
        }
    }
}

impl fmt::Debug for AirModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AirModel").field(&self.kind()).finish()
    }
}

impl ThermoModel for AirModel {
    type Fluid = Air;
}

impl HasDensity for AirModel {
    fn density(&self, temperature: ThermodynamicTemperature) -> Result<MassDensity, PropertyError> {
        match self {
            Self::Tabulated(model) => model.density(temperature),
            #[cfg(feature = "coolprop")]
            Self::Reference(model) => model.density(temperature),
        }
    }
}

impl HasKinematicViscosity for AirModel {
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        match self {
            Self::Tabulated(model) => model.kinematic_viscosity(temperature),
            #[cfg(feature = "coolprop")]
            Self::Reference(model) => model.kinematic_viscosity(temperature),
        }
    }
}
