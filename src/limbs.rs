use num_bigint::BigUint;
use thiserror::Error;

/// Limb count for 2048 bit RSA operands (modulus and signature).
pub const RSA_LIMBS: usize = 32;

/// Chunk count for an uncompressed secp256k1 public key (x || y).
pub const PUBKEY_CHUNKS: usize = 4;

const PUBKEY_CHUNK_BYTES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimbError {
    #[error("value needs {0} limbs, at most {1} allowed")]
    TooWide(usize, usize),
}

/// Little-endian 64 bit limbs of `x`, zero extended to exactly `count`.
///
/// A value wider than `count` limbs is an error, never truncated.
pub fn to_limbs_le(x: &BigUint, count: usize) -> Result<Vec<u64>, LimbError> {
    let mut limbs = x.to_u64_digits();
    if limbs.len() > count {
        return Err(LimbError::TooWide(limbs.len(), count));
    }
    limbs.resize(count, 0);
    Ok(limbs)
}

pub fn from_limbs_le(limbs: &[u64]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Big-endian 16 byte windows of an uncompressed public key, most
/// significant chunk first.
pub fn pubkey_chunks(pubkey: &[u8; PUBKEY_CHUNKS * PUBKEY_CHUNK_BYTES]) -> [BigUint; PUBKEY_CHUNKS] {
    std::array::from_fn(|i| {
        BigUint::from_bytes_be(&pubkey[i * PUBKEY_CHUNK_BYTES..(i + 1) * PUBKEY_CHUNK_BYTES])
    })
}

#[test]
fn test_limb_round_trip() {
    let x = BigUint::from(u64::MAX);
    let limbs = to_limbs_le(&x, RSA_LIMBS).unwrap();

    assert_eq!(limbs[0], u64::MAX);
    assert!(limbs[1..].iter().all(|&l| l == 0));
    assert_eq!(from_limbs_le(&limbs), x);
}

#[test]
fn test_rsa_operands_fit_32_limbs() {
    let (n, sig) = crate::input_gen::signature::sign(b"hello");

    let n = BigUint::from_bytes_be(&n);
    let sig = BigUint::from_bytes_be(&sig);
    assert_eq!(n.bits(), 2048);

    let n_limbs = to_limbs_le(&n, RSA_LIMBS).unwrap();
    let sig_limbs = to_limbs_le(&sig, RSA_LIMBS).unwrap();
    assert_eq!(n_limbs.len(), RSA_LIMBS);
    assert_eq!(from_limbs_le(&n_limbs), n);
    assert_eq!(from_limbs_le(&sig_limbs), sig);
}

#[test]
fn test_too_wide_is_rejected() {
    let x = BigUint::from(1u8) << (RSA_LIMBS * 64);

    assert_eq!(
        to_limbs_le(&x, RSA_LIMBS),
        Err(LimbError::TooWide(RSA_LIMBS + 1, RSA_LIMBS))
    );
}

#[test]
fn test_pubkey_chunks_are_big_endian_windows() {
    let mut pubkey = [0u8; 64];
    pubkey[15] = 1; // chunk 0 = 1
    pubkey[16] = 1; // chunk 1 = 1 << 120

    let chunks = pubkey_chunks(&pubkey);

    assert_eq!(chunks[0], BigUint::from(1u8));
    assert_eq!(chunks[1], BigUint::from(1u8) << 120);
    assert_eq!(chunks[2], BigUint::from(0u8));
    assert_eq!(chunks[3], BigUint::from(0u8));
}
