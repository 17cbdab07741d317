//! CoolProp-backed air property model.

mod error;

use std::{
    marker::PhantomData,
    sync::{Mutex, MutexGuard, PoisonError},
};

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{MassDensity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        ATMOSPHERIC_PRESSURE_PA, PropertyError,
        capability::{HasDensity, HasKinematicViscosity, ThermoModel},
    },
    units::KinematicViscosity,
};

use error::{Step, property_error};

/// Trait used to mark fluids as usable with the [`CoolProp`] model.
///
/// Implementors provide the backend and fluid identifiers needed to construct a
/// `CoolProp` `AbstractState`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub trait CoolPropFluid: Default + Send + Sync + 'static {
    const BACKEND: &'static str;
    const NAME: &'static str;
}

/// A property model backed by `CoolProp`, evaluated at atmospheric pressure.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolProp<F: CoolPropFluid> {
    state: Mutex<AbstractState>,
    _f: PhantomData<F>,
}

impl<F: CoolPropFluid> ThermoModel for CoolProp<F> {
    type Fluid = F;
}

impl<F: CoolPropFluid> CoolProp<F> {
    /// Construct a new CoolProp-backed model instance.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the underlying `AbstractState` cannot be
    /// created for the given `F::BACKEND` and `F::NAME`.
    pub fn new() -> Result<Self, PropertyError> {
        let state = AbstractState::new(F::BACKEND, F::NAME).map_err(|error| {
            property_error(
                Step::Create {
                    backend: F::BACKEND,
                    fluid: F::NAME,
                },
                &error.to_string(),
            )
        })?;
        Ok(Self {
            state: Mutex::new(state),
            _f: PhantomData,
        })
    }

    /// Locks the underlying `AbstractState` and updates it to `temperature`
    /// at atmospheric pressure.
    ///
    /// A poisoned lock is recovered, since the update below replaces
    /// whatever state the panicking holder left behind.
    fn lock_at(&self, temperature_k: f64) -> Result<MutexGuard<'_, AbstractState>, PropertyError> {
        let mut abstract_state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        abstract_state
            .update(FluidInputPair::PT, ATMOSPHERIC_PRESSURE_PA, temperature_k)
            .map_err(|error| property_error(Step::Update { temperature_k }, &error.to_string()))?;
        Ok(abstract_state)
    }
}

/// Reads `param` from an updated state.
fn output(
    abstract_state: &AbstractState,
    param: FluidParam,
    property: &'static str,
    temperature_k: f64,
) -> Result<f64, PropertyError> {
    abstract_state.keyed_output(param).map_err(|error| {
        property_error(
            Step::Output {
                property,
                temperature_k,
            },
            &error.to_string(),
        )
    })
}

impl<F: CoolPropFluid> HasDensity for CoolProp<F> {
    fn density(&self, temperature: ThermodynamicTemperature) -> Result<MassDensity, PropertyError> {
        let temperature_k = temperature.get::<kelvin>();
        let abstract_state = self.lock_at(temperature_k)?;
        let density = output(&abstract_state, FluidParam::DMass, "density", temperature_k)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(density))
    }
}

impl<F: CoolPropFluid> HasKinematicViscosity for CoolProp<F> {
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        let temperature_k = temperature.get::<kelvin>();
        let abstract_state = self.lock_at(temperature_k)?;
        let dynamic = output(
            &abstract_state,
            FluidParam::DynamicViscosity,
            "viscosity",
            temperature_k,
        )?;
        let density = output(&abstract_state, FluidParam::DMass, "density", temperature_k)?;
        Ok(KinematicViscosity::new::<square_meter_per_second>(
            dynamic / density,
        ))
    }
}

// CoolProp<F> must be Send + Sync for any CoolPropFluid. rfluids serializes
// FFI calls globally; the local mutex keeps update/query pairs atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check<F: CoolPropFluid>() {
        assert_send_sync::<CoolProp<F>>();
    }
};
