use num_bigint::BigUint;
use serde::Serialize;
use thiserror::Error;

use super::fields::ClaimSet;
use super::jwt::{CompactJwt, JwtError};
use crate::limbs::{self, LimbError, PUBKEY_CHUNKS, RSA_LIMBS};

/// Prover side capacities, ascii codes zero padded up to these.
pub const MAX_JWT_LEN: usize = 1536;
pub const MAX_HEADER_LEN: usize = 300;
pub const MAX_PAYLOAD_LEN: usize = 1472;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("jwt: {0}")]
    Jwt(#[from] JwtError),
    #[error("limbs: {0}")]
    Limb(#[from] LimbError),
    #[error("{what} is {len} bytes, capacity {max}")]
    TooLong {
        what: &'static str,
        len: usize,
        max: usize,
    },
    #[error("serialize: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full input record for the zklogin circuit.
///
/// Field names and value encodings match what the prover reads: every
/// scalar is a decimal string, byte vectors are ascii codes as strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitInput {
    #[serde(rename = "pubOPModulus")]
    pub pub_op_modulus: Vec<String>,
    pub expiry_time: String,
    pub pub_user: Vec<String>,
    pub jwt: Vec<String>,
    pub jwt_header: Vec<String>,
    pub jwt_payload: Vec<String>,
    pub salt: String,
    pub r: String,
    pub signature: Vec<String>,
    pub nonce_key_start_index: String,
    pub nonce_length: String,
    pub sub_key_start_index: String,
    pub sub_length: String,
    pub iss_key_start_index: String,
    pub iss_length: String,
    pub aud_key_start_index: String,
    pub aud_length: String,
}

impl CircuitInput {
    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assembles a [`CircuitInput`] from a raw compact token plus the scalars
/// the caller already holds (OP modulus from the provider JWKS, the user
/// public key, salt / r / expiry from the nonce commitment).
pub struct CircuitInputBuilder<'a> {
    token: &'a str,
    modulus: BigUint,
    pubkey: [u8; 64],
    expiry_time: u64,
    salt: String,
    r: String,
}

impl<'a> CircuitInputBuilder<'a> {
    pub fn new(token: &'a str, modulus: BigUint, pubkey: [u8; 64]) -> Self {
        Self {
            token,
            modulus,
            pubkey,
            expiry_time: 0,
            salt: "0".to_string(),
            r: "0".to_string(),
        }
    }

    pub fn expiry_time(mut self, expiry_time: u64) -> Self {
        self.expiry_time = expiry_time;
        self
    }

    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    pub fn r(mut self, r: impl Into<String>) -> Self {
        self.r = r.into();
        self
    }

    pub fn build(self) -> Result<CircuitInput, InputError> {
        let jwt = CompactJwt::parse(self.token)?;

        let signing_input = jwt.signing_input();
        let header_dot = format!("{}.", jwt.header);

        // capacity first, claims and limbs only on inputs that fit
        let jwt_codes = ascii_codes(&signing_input, MAX_JWT_LEN, "jwt")?;
        let header_codes = ascii_codes(&header_dot, MAX_HEADER_LEN, "jwt header")?;
        let payload_codes = ascii_codes(&jwt.payload, MAX_PAYLOAD_LEN, "jwt payload")?;

        let claims = ClaimSet::extract(&jwt.payload_text()?)?;

        let signature = BigUint::from_bytes_be(&jwt.decode_signature()?);
        log::debug!(
            "op modulus {} bits, signature {} bits",
            self.modulus.bits(),
            signature.bits()
        );

        Ok(CircuitInput {
            pub_op_modulus: limb_strings(&self.modulus)?,
            expiry_time: self.expiry_time.to_string(),
            pub_user: limbs::pubkey_chunks(&self.pubkey)
                .iter()
                .map(|chunk| chunk.to_string())
                .collect(),
            jwt: jwt_codes,
            jwt_header: header_codes,
            jwt_payload: payload_codes,
            salt: self.salt,
            r: self.r,
            signature: limb_strings(&signature)?,
            nonce_key_start_index: claims.nonce.start.to_string(),
            nonce_length: claims.nonce.len.to_string(),
            sub_key_start_index: claims.sub.start.to_string(),
            sub_length: claims.sub.len.to_string(),
            iss_key_start_index: claims.iss.start.to_string(),
            iss_length: claims.iss.len.to_string(),
            aud_key_start_index: claims.aud.start.to_string(),
            aud_length: claims.aud.len.to_string(),
        })
    }
}

fn limb_strings(x: &BigUint) -> Result<Vec<String>, InputError> {
    Ok(limbs::to_limbs_le(x, RSA_LIMBS)?
        .iter()
        .map(|limb| limb.to_string())
        .collect())
}

fn ascii_codes(text: &str, capacity: usize, what: &'static str) -> Result<Vec<String>, InputError> {
    if text.len() > capacity {
        return Err(InputError::TooLong {
            what,
            len: text.len(),
            max: capacity,
        });
    }

    let mut codes: Vec<String> = text.bytes().map(|b| b.to_string()).collect();
    codes.resize(capacity, "0".to_string());
    Ok(codes)
}
