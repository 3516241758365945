use crate::error::{ContainerError, Result};
use num_traits::ToPrimitive;
use std::fmt::Display;

/// The initial capacity of a container created through `new()` or `default()`.
pub const DEFAULT_CAPACITY: usize = 1;

/// Converts a requested capacity of any primitive numeric type into a slot count.
///
/// Floating point requests are accepted only if they hold a whole number,
/// since `to_usize` would truncate them toward zero.
///
/// ## Returns
/// `ContainerError::InvalidCapacity` if the value is negative, fractional,
/// or does not fit into `usize`.
pub(crate) fn slots_from<C>(requested: C) -> Result<usize>
where
    C: ToPrimitive + Display,
{
    let whole = requested
        .to_f64()
        .is_some_and(|value| value >= 0.0 && value.fract() == 0.0);

    match requested.to_usize() {
        Some(slots) if whole => Ok(slots),
        _ => {
            tracing::debug!(%requested, "rejected container capacity");
            Err(ContainerError::InvalidCapacity(requested.to_string()))
        }
    }
}

/// Growth target for a single append into a full container.
///
/// Doubling stalls at zero, so an empty allocation grows to one slot.
#[inline]
pub(crate) fn doubled(capacity: usize) -> usize {
    match capacity {
        0 => 1,
        capacity => capacity.saturating_mul(2),
    }
}

/// Growth target for a bulk append: exactly enough slots for all elements.
#[inline]
pub(crate) fn exact_fit(len: usize, additional: usize) -> usize {
    len.saturating_add(additional)
}
