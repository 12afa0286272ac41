use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Generates a 6-character code drawn uniformly from `[a-zA-Z0-9]`.
///
/// The thread-local RNG is seeded once from OS entropy, never per call.
/// Codes are not checked for collisions against existing rows.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
