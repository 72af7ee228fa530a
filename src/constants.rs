//! Shared numeric constants.

/// Horizon used when none is given.
///
/// Large enough to be effectively unbounded for any realistic instance,
/// small enough that sums of a few horizons stay well inside `i64` and
/// inside the 32-bit ranges most CP engines use for interval bounds.
pub const MAX_VALUE: i64 = 1 << 25;
