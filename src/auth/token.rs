// src/auth/token.rs
//! Session cookie tokens. The browser holds the raw value, the store only
//! ever sees its SHA-256.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const SESSION_TOKEN_BYTES: usize = 32;

pub fn new_session_token() -> String {
    encode_random(&mut OsRng, SESSION_TOKEN_BYTES)
}

fn encode_random<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(&buf)
}

/// Store key for a raw cookie value.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut key = [0u8; 32];
    key.copy_from_slice(&Sha256::digest(token.as_bytes()));
    key
}
