// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const FORM_ID_BYTES: usize = 16;

/// Fresh id for one rendered login form, from the OS RNG.
pub fn generate_form_id() -> String {
    generate_token(&mut OsRng, FORM_ID_BYTES)
}

/// URL-safe base64 (no padding) of `nbytes` random bytes.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
