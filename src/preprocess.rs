use num_integer::Integer;
use thiserror::Error;

/*
    layout of a padded message of L bytes:

    | message (L) | 0x80 | 0x00 ... 0x00 | bit length, 8 bytes BE |

    the zero run is sized so the total lands exactly on a 64 byte boundary

    tightest fit: L = 55 -> 55 + 1 + 0 + 8 = 64, one block, no zeros
    spill:        L = 56 -> after 0x80 there is no room left for the
                  length field inside the current block, the tail moves
                  into a fresh block -> 128
    L % 64 == 0 -> always a full extra block, the marker is never dropped
*/

pub const BLOCK_BYTES: usize = 64;

const LEN_FIELD_BYTES: usize = 8;
const MARKER: u8 = 0x80;

/// One 512-bit chunk of padded message, consumed by a single compression round.
pub type Block = [u8; BLOCK_BYTES];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreprocessError {
    #[error("message of {0} bytes: bit length does not fit in 64 bits")]
    BitLengthOverflow(usize),
    #[error("padded length {0} is not a multiple of 64 bytes")]
    PaddingInvariant(usize),
    #[error("input of {0} bytes is not aligned to 64 byte blocks")]
    Misaligned(usize),
}

/// Merkle–Damgård padding as used by SHA-256.
///
/// Returns `message ++ 0x80 ++ zeros ++ bit_length_be`, the smallest
/// 64-byte-aligned buffer with room for the marker and the length field.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, PreprocessError> {
    let bit_len = u64::try_from(message.len())
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(PreprocessError::BitLengthOverflow(message.len()))?;

    // closed form for the padded size: one block past whatever the message
    // plus the length field already fills
    let (filled_blocks, _) = (message.len() + LEN_FIELD_BYTES).div_rem(&BLOCK_BYTES);
    let padded_len = (filled_blocks + 1) * BLOCK_BYTES;
    let zeros = padded_len - message.len() - 1 - LEN_FIELD_BYTES;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(MARKER);
    padded.resize(padded.len() + zeros, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    // guards the arithmetic above, not reachable unless it is wrong
    if padded.len() % BLOCK_BYTES != 0 {
        return Err(PreprocessError::PaddingInvariant(padded.len()));
    }

    log::trace!(
        "padded {} bytes into {} block(s)",
        message.len(),
        padded.len() / BLOCK_BYTES
    );

    Ok(padded)
}

/// Partition a padded buffer into 64 byte blocks, in order.
///
/// The input length must be a multiple of the block size; an unpadded
/// message fails here instead of producing a short final block.
pub fn split_blocks(padded: &[u8]) -> Result<Vec<Block>, PreprocessError> {
    if padded.len() % BLOCK_BYTES != 0 {
        return Err(PreprocessError::Misaligned(padded.len()));
    }

    Ok(padded
        .chunks_exact(BLOCK_BYTES)
        .map(|chunk| chunk.try_into().unwrap())
        .collect())
}

/// `pad` followed by `split_blocks`, the shape a compression loop consumes.
pub fn message_blocks(message: &[u8]) -> Result<Vec<Block>, PreprocessError> {
    split_blocks(&pad(message)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_field(padded: &[u8]) -> u64 {
        u64::from_be_bytes(padded[padded.len() - 8..].try_into().unwrap())
    }

    #[test]
    fn empty_message_is_one_block() {
        let padded = pad(b"").unwrap();

        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], [0u8; 8]);
    }

    #[test]
    fn abc_vector() {
        let padded = pad(b"abc").unwrap();

        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[3], 0x80);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(length_field(&padded), 24);
    }

    #[test]
    fn fifty_five_bytes_fit_one_block() {
        let padded = pad(&[0xaa; 55]).unwrap();

        assert_eq!(padded.len(), 64);
        assert_eq!(padded[55], 0x80);
        // no zero run at all between marker and length field
        assert_eq!(length_field(&padded), 55 * 8);
    }

    #[test]
    fn fifty_six_bytes_spill_into_second_block() {
        let padded = pad(&[0xaa; 56]).unwrap();

        assert_eq!(padded.len(), 128);
        assert_eq!(padded[56], 0x80);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(length_field(&padded), 56 * 8);
    }

    #[test]
    fn block_multiple_always_grows_by_a_block() {
        for blocks in 1..4 {
            let message = vec![0x5a; blocks * 64];
            let padded = pad(&message).unwrap();

            assert_eq!(padded.len(), (blocks + 1) * 64);
            assert_eq!(padded[message.len()], 0x80);
        }
    }

    #[test]
    fn alignment_length_and_marker_hold_for_all_small_sizes() {
        for len in 0..=300usize {
            let message = vec![0x17; len];
            let padded = pad(&message).unwrap();

            assert_eq!(padded.len() * 8 % 512, 0, "len {}", len);
            assert_eq!(padded[len], 0x80, "len {}", len);
            assert_eq!(length_field(&padded), (len * 8) as u64, "len {}", len);

            // minimality: one block shorter could not hold marker + length
            assert!(padded.len() > len);
            assert!(padded.len() - 64 < len + 1 + 8, "len {}", len);
        }
    }

    #[test]
    fn blocks_concatenate_back_to_padded() {
        let message = b"eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";
        let padded = pad(message).unwrap();
        let blocks = split_blocks(&padded).unwrap();

        assert_eq!(blocks.len(), padded.len() / 64);

        let rejoined: Vec<u8> = blocks.iter().flatten().copied().collect();
        assert_eq!(rejoined, padded);
    }

    #[test]
    fn split_rejects_misaligned_input() {
        assert_eq!(
            split_blocks(&[0u8; 100]),
            Err(PreprocessError::Misaligned(100))
        );
    }

    #[test]
    fn split_of_empty_input_is_empty() {
        assert_eq!(split_blocks(&[]).unwrap().len(), 0);
    }

    #[test]
    fn message_blocks_counts_match_pad() {
        let message = vec![0u8; 200];
        let blocks = message_blocks(&message).unwrap();

        assert_eq!(blocks.len(), pad(&message).unwrap().len() / 64);
    }
}
