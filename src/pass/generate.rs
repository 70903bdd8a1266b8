//! Password generation.

use rand::Rng;

use super::charset;
use crate::error::Error;
use crate::settings::Settings;

/// Generate a single password based on settings.
///
/// Each output position is sampled independently and uniformly over the
/// character pool, with replacement. Consecutive calls with the same
/// settings are statistically independent; there is no seeding.
pub fn generate(settings: &Settings) -> Result<String, Error> {
    if settings.pass_length == 0 {
        return Err(Error::InvalidConfiguration);
    }

    let chars = charset::build(settings);
    let mut rng = rand::rng();

    let bytes: Vec<u8> = (0..settings.pass_length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect();

    // Safety: charset is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

/// Generate `count` independent passwords with the same settings.
pub fn generate_batch(settings: &Settings, count: usize) -> Result<Vec<String>, Error> {
    (0..count).map(|_| generate(settings)).collect()
}
