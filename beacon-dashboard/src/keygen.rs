//! API key generation

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of generated API keys
pub const API_KEY_LENGTH: usize = 32;

/// Generates a random alphanumeric key of the given length
///
/// Uses the thread-local RNG; these keys identify, they do not authenticate
/// on their own, so a cryptographic source is not required here.
pub fn generate_random_key(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
