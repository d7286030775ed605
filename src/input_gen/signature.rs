use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

const KEY_BITS: usize = 2048;

/// RS256 test vector over `signing_input`: a fresh provider-shaped modulus
/// and the matching PKCS#1 v1.5 signature, both big-endian bytes.
pub fn sign(signing_input: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut rng = rand_core::OsRng;

    let private_key = RsaPrivateKey::new(&mut rng, KEY_BITS).expect("failed to generate a key");
    let signing_key = SigningKey::<Sha256>::new(private_key.clone());

    let sig = signing_key.sign_with_rng(&mut rng, signing_input);
    let pk = private_key.to_public_key();

    (pk.n().to_bytes_be(), sig.to_bytes().to_vec())
}

#[test]
fn test_rsa_vector_shapes() {
    let (n, sig) = sign(b"header.payload");

    assert_eq!(n.len(), KEY_BITS / 8);
    assert_eq!(sig.len(), KEY_BITS / 8);
}
