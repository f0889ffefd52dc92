//! Boolean generators.

use super::logic;
use fuzz_core::{constant, literals, Density, Thunk};

/// Always `value`.
pub fn always(value: bool) -> Thunk<bool> {
    constant(value)
}

/// Always `true`.
pub fn truth() -> Thunk<bool> {
    always(true)
}

/// Always `false`.
pub fn falsity() -> Thunk<bool> {
    always(false)
}

/// `true` or `false`, picked by `density`.
pub fn one_of<D: Density + 'static>(density: D) -> Thunk<bool> {
    logic::one_of(density, literals([true, false]))
}
