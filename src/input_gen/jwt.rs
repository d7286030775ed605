use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("compact token has {0} segments, expected 3")]
    Malformed(usize),
    #[error("base64url decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded payload is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("claim {0:?} not found in payload")]
    ClaimNotFound(String),
    #[error("claim {0:?} has no readable value")]
    MalformedClaim(String),
}

/// A compact serialization split into its three base64url segments,
/// kept as raw text. Decoding is per segment and on demand.
#[derive(Debug, Clone)]
pub struct CompactJwt {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

impl CompactJwt {
    pub fn parse(token: &str) -> Result<Self, JwtError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(JwtError::Malformed(parts.len()));
        }

        log::debug!(
            "jwt segments: header {} / payload {} / signature {}",
            parts[0].len(),
            parts[1].len(),
            parts[2].len()
        );

        Ok(Self {
            header: parts[0].to_string(),
            payload: parts[1].to_string(),
            signature: parts[2].to_string(),
        })
    }

    /// `header '.' payload` in base64url text. This is the byte string the
    /// RS256 signature covers, and what the hash preprocessor pads.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }

    pub fn decode_header(&self) -> Result<Vec<u8>, JwtError> {
        Ok(URL_SAFE_NO_PAD.decode(&self.header)?)
    }

    pub fn decode_payload(&self) -> Result<Vec<u8>, JwtError> {
        Ok(URL_SAFE_NO_PAD.decode(&self.payload)?)
    }

    pub fn decode_signature(&self) -> Result<Vec<u8>, JwtError> {
        Ok(URL_SAFE_NO_PAD.decode(&self.signature)?)
    }

    /// Decoded payload as text, the form claims are located in.
    pub fn payload_text(&self) -> Result<String, JwtError> {
        Ok(String::from_utf8(self.decode_payload()?)?)
    }
}
