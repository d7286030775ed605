/*
    from a raw provider token to prover inputs:

    1. split the compact token, keep the base64url text as is
    2. signing input = header '.' payload is what rs256 actually covers,
       the hash side needs it padded and cut into 512 bit blocks
       (preprocess; the compression loop itself runs prover side)
    3. decode the payload, locate the nonce/sub/aud/iss spans for the
       selective disclosure checks
    4. modulus and signature -> 32 le u64 limbs, pubkey -> 4 be chunks
    5. assemble the fixed capacity record, serialize to json

    everything here is pure and synchronous, callers can fan out over
    independent tokens freely
*/

pub mod input_gen;
pub mod limbs;
pub mod preprocess;
