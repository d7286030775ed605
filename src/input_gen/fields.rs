use super::jwt::JwtError;

/// Where one claim sits inside the decoded payload text.
///
/// `start` is the byte index of the opening quote of the claim name,
/// `len` and `value` describe the claim value with quotes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSpan {
    pub start: usize,
    pub len: usize,
    pub value: String,
}

/// Locate a claim by scanning the raw payload text.
///
/// Works on quoted string values and bare values (numbers); a bare value
/// runs to the next `,`, a quoted one to the closing quote, either falls
/// back to the closing `}` for the last claim.
pub fn locate_claim(payload: &str, name: &str) -> Result<ClaimSpan, JwtError> {
    let needle = format!("\"{}\"", name);
    let start = payload
        .find(&needle)
        .ok_or_else(|| JwtError::ClaimNotFound(name.to_string()))?;

    let colon = payload[start..]
        .find(':')
        .map(|i| start + i)
        .ok_or_else(|| JwtError::MalformedClaim(name.to_string()))?;

    let bytes = payload.as_bytes();
    let mut value_start = colon + 1;
    while bytes.get(value_start) == Some(&b' ') {
        value_start += 1;
    }

    let quoted = bytes.get(value_start) == Some(&b'"');
    let value_start = if quoted { value_start + 1 } else { value_start };

    let terminator = if quoted { '"' } else { ',' };
    let value_end = payload[value_start..]
        .find(terminator)
        .or_else(|| payload[value_start..].find('}'))
        .map(|i| value_start + i)
        .ok_or_else(|| JwtError::MalformedClaim(name.to_string()))?;

    let value = payload[value_start..value_end].to_string();

    Ok(ClaimSpan {
        start,
        len: value.len(),
        value,
    })
}

/// The four claim spans the circuit takes as public/committed inputs.
#[derive(Debug, Clone)]
pub struct ClaimSet {
    pub nonce: ClaimSpan,
    pub sub: ClaimSpan,
    pub aud: ClaimSpan,
    pub iss: ClaimSpan,
}

impl ClaimSet {
    pub fn extract(payload: &str) -> Result<Self, JwtError> {
        Ok(Self {
            nonce: locate_claim(payload, "nonce")?,
            sub: locate_claim(payload, "sub")?,
            aud: locate_claim(payload, "aud")?,
            iss: locate_claim(payload, "iss")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_gen::jwt::CompactJwt;
    use crate::input_gen::SAMPLE_JWT;

    fn sample_payload() -> String {
        CompactJwt::parse(SAMPLE_JWT)
            .unwrap()
            .payload_text()
            .unwrap()
    }

    #[test]
    fn nonce_span_matches_the_token() {
        let payload = sample_payload();
        let nonce = locate_claim(&payload, "nonce").unwrap();

        assert_eq!(nonce.start, 229);
        assert_eq!(nonce.len, 64);
        assert_eq!(
            nonce.value,
            "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"
        );
    }

    #[test]
    fn string_claims_resolve() {
        let payload = sample_payload();
        let set = ClaimSet::extract(&payload).unwrap();

        assert_eq!(set.iss.start, 1);
        assert_eq!(set.iss.value, "https://accounts.google.com");
        assert_eq!(set.sub.start, 199);
        assert_eq!(set.sub.value, "112952360674205163439");
        assert_eq!(set.aud.start, 118);
        assert_eq!(set.aud.len, set.aud.value.len());
    }

    #[test]
    fn bare_number_claim_runs_to_the_comma() {
        let payload = sample_payload();
        let nbf = locate_claim(&payload, "nbf").unwrap();

        assert_eq!(nbf.value, "1744643144");
    }

    #[test]
    fn last_claim_without_comma_runs_to_the_brace() {
        let span = locate_claim("{\"a\":\"x\",\"exp\":1744647044}", "exp").unwrap();

        assert_eq!(span.value, "1744647044");
    }

    #[test]
    fn unknown_claim_is_an_error() {
        assert!(matches!(
            locate_claim("{\"a\":1}", "nonce"),
            Err(JwtError::ClaimNotFound(_))
        ));
    }
}
