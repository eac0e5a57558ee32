// src/crypto/padding.rs
//! PKCS7 padding
//!
//! Applied outside the cipher. A bad pad surfaces as
//! [`CodecError::InvalidPadding`], never as a cipher failure.

use crate::error::CodecError;

/// Append `n` copies of `n`, where `n = block_size - len % block_size`.
///
/// `n` is always in `1..=block_size`, so block-aligned input still gains a
/// full block.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));
    let n = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + n);
    padded.extend_from_slice(data);
    padded.resize(data.len() + n, n as u8);
    padded
}

/// Strip PKCS7 padding, validating every pad byte.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8], CodecError> {
    let n = match data.last() {
        Some(&last) => last as usize,
        None => return Err(CodecError::InvalidPadding),
    };
    if n == 0 || n > block_size || n > data.len() {
        return Err(CodecError::InvalidPadding);
    }

    let (body, tail) = data.split_at(data.len() - n);
    if tail.iter().any(|&b| b as usize != n) {
        return Err(CodecError::InvalidPadding);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BLOCK_SIZE;

    #[test]
    fn pad_short_input() {
        let padded = pad(b"hello world", BLOCK_SIZE);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[11..], &[5u8; 5]);
    }

    #[test]
    fn pad_aligned_input_adds_full_block() {
        let padded = pad(&[0xAA; 32], BLOCK_SIZE);
        assert_eq!(padded.len(), 48);
        assert_eq!(&padded[32..], &[16u8; 16]);
    }

    #[test]
    fn pad_empty_input() {
        assert_eq!(pad(b"", BLOCK_SIZE), vec![16u8; 16]);
    }

    #[test]
    fn unpad_strips_valid_padding() {
        let padded = pad(b"abc", BLOCK_SIZE);
        assert_eq!(unpad(&padded, BLOCK_SIZE).unwrap(), b"abc");
        assert_eq!(unpad(&[16u8; 16], BLOCK_SIZE).unwrap(), b"");
    }

    #[test]
    fn unpad_rejects_zero() {
        let mut block = [b'A'; 16];
        block[15] = 0;
        assert_eq!(unpad(&block, BLOCK_SIZE), Err(CodecError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_length_beyond_buffer() {
        assert_eq!(unpad(&[4, 4, 4], BLOCK_SIZE), Err(CodecError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_length_beyond_block() {
        let block = [17u8; 32];
        assert_eq!(unpad(&block, BLOCK_SIZE), Err(CodecError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_mismatched_bytes() {
        let mut block = [3u8; 16];
        block[14] = 2;
        assert_eq!(unpad(&block, BLOCK_SIZE), Err(CodecError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_empty() {
        assert_eq!(unpad(&[], BLOCK_SIZE), Err(CodecError::InvalidPadding));
    }
}
