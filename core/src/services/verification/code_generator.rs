//! Random verification code generation.

use rand::rngs::OsRng;
use rand::Rng;

/// Default length of a verification code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a string of independently-uniform random decimal digits
///
/// Codes come from the OS CSPRNG rather than a time-seeded generator so
/// they cannot be predicted from external state. There is no uniqueness
/// guarantee across calls; collisions are accepted.
pub fn generate_code(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
