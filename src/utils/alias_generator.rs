//! Random alias generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Generates a random alias of [`ALIAS_LENGTH`] characters drawn from
/// `[A-Za-z0-9]`.
///
/// There is no collision handling here; a generated alias that happens to
/// already exist fails at save time like any other taken alias.
pub fn generate_alias() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ALIAS_LENGTH)
        .map(char::from)
        .collect()
}
