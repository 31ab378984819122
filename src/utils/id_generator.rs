//! Short identifier generation.

use rand::{distr::Alphanumeric, Rng};

/// Default identifier length.
///
/// Six symbols over the 62-character alphanumeric alphabet give roughly
/// 5.7e10 combinations, which keeps the birthday-collision probability
/// negligible relative to any realistic store size.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Generates a random identifier of `length` characters.
///
/// Each character is drawn independently and uniformly from `[a-zA-Z0-9]`.
/// The source is a general-purpose (non-cryptographic) RNG: collision
/// resistance, not unpredictability, is what the retry loop relies on.
///
/// # Examples
///
/// ```
/// use shortify::utils::id_generator::{generate_id, DEFAULT_ID_LENGTH};
///
/// let id = generate_id(DEFAULT_ID_LENGTH);
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_id(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
