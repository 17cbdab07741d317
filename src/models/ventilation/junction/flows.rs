//! Volume conservation across a junction.
//!
//! `combined = Σ sides`. Exactly one of the `N + 1` port flows is unknown and
//! is solved from the others; the completed set is then checked again.

use uom::{
    ConstZero,
    si::{f64::VolumeRate, volume_rate::cubic_meter_per_hour},
};

use crate::{
    models::ventilation::FlowSpecificationError,
    support::constraint::{Constrained, StrictlyPositive},
};

/// Relative tolerance of the conservation check.
const CONSERVATION_TOLERANCE: f64 = 1e-9;

/// Port flows after reconciliation, all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedFlows<const N: usize> {
    pub combined: VolumeRate,
    pub sides: [VolumeRate; N],
}

type Positive = Constrained<VolumeRate, StrictlyPositive>;

fn checked(port: &'static str, flow: VolumeRate) -> Result<Positive, FlowSpecificationError> {
    StrictlyPositive::new(flow).map_err(|_| FlowSpecificationError::NonPositive {
        port,
        flow_m3_per_h: flow.get::<cubic_meter_per_hour>(),
    })
}

/// Solves the single missing flow of a junction with `N` side ports.
///
/// `names` labels the side ports in errors.
///
/// # Errors
///
/// - [`FlowSpecificationError::Overdetermined`] if every flow is given.
/// - [`FlowSpecificationError::Underdetermined`] if more than one is missing.
/// - [`FlowSpecificationError::NonPositive`] if a given or solved flow is not positive.
/// - [`FlowSpecificationError::Inconsistent`] if the completed set does not
///   conserve volume. The solved flow balances by construction, so this is a
///   post-condition check rather than an input error.
pub(crate) fn resolve<const N: usize>(
    combined: Option<VolumeRate>,
    sides: [Option<VolumeRate>; N],
    names: [&'static str; N],
) -> Result<ResolvedFlows<N>, FlowSpecificationError> {
    let missing = usize::from(combined.is_none()) + sides.iter().filter(|q| q.is_none()).count();
    match missing {
        0 => return Err(FlowSpecificationError::Overdetermined),
        1 => {}
        _ => return Err(FlowSpecificationError::Underdetermined { missing }),
    }

    let combined = combined.map(|q| checked("combined", q)).transpose()?;
    let mut known: [Option<Positive>; N] = [None; N];
    for (slot, (flow, name)) in known.iter_mut().zip(sides.into_iter().zip(names)) {
        *slot = flow.map(|q| checked(name, q)).transpose()?;
    }

    let known_sum = known
        .iter()
        .flatten()
        .fold(VolumeRate::ZERO, |sum, q| sum + q.get());

    let (combined, sides) = match combined {
        None => {
            let sides = known.map(|q| q.map_or(VolumeRate::ZERO, |q| q.get()));
            (known_sum, sides)
        }
        Some(combined) => {
            let combined = combined.get();
            let solved = checked_missing(&known, &names, combined - known_sum)?;
            let sides = known.map(|q| q.map_or(solved, |q| q.get()));
            (combined, sides)
        }
    };

    // Holds by construction up to rounding.
    let sum = sides.iter().fold(VolumeRate::ZERO, |sum, &q| sum + q);
    if (combined - sum).abs() > combined * CONSERVATION_TOLERANCE {
        return Err(FlowSpecificationError::Inconsistent {
            combined_m3_per_h: combined.get::<cubic_meter_per_hour>(),
            sum_m3_per_h: sum.get::<cubic_meter_per_hour>(),
        });
    }

    tracing::debug!(
        combined_m3_per_h = combined.get::<cubic_meter_per_hour>(),
        sides_m3_per_h = ?sides.map(|q| q.get::<cubic_meter_per_hour>()),
        "reconciled junction flows"
    );

    Ok(ResolvedFlows { combined, sides })
}

/// Validates the solved side flow, naming the port it belongs to.
fn checked_missing<const N: usize>(
    known: &[Option<Positive>; N],
    names: &[&'static str; N],
    solved: VolumeRate,
) -> Result<VolumeRate, FlowSpecificationError> {
    let port = known
        .iter()
        .zip(names)
        .find_map(|(q, name)| q.is_none().then_some(*name))
        .unwrap_or("side");
    Ok(checked(port, solved)?.into_inner())
}
