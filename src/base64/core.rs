/// Standard Base64 alphabet (RFC 4648 Table 1): a 6-bit value 0..=63
/// indexes directly into this table.
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding byte for input lengths not divisible by 3.
const PAD: u8 = b'=';

/// Number of output bytes required to encode `len` input bytes:
/// every complete or partial group of 3 input bytes becomes 4 symbols.
#[inline]
pub const fn enc_length(len: usize) -> usize {
    (len + 2) / 3 * 4
}

/// Encode the window `input[offset..offset + length]` into `output`.
///
/// `output` must be exactly `enc_length(length)` bytes; callers reusing a
/// larger scratch buffer pass `&mut buf[..enc_length(length)]`. Every byte
/// of `output` is written, none is read. Returns the filled buffer so the
/// call composes with writers.
///
/// # Panics
///
/// Panics if the window exceeds `input` or if `output` has the wrong size.
/// Both are caller bugs, not recoverable conditions, so they fail fast here
/// rather than as an index panic deep in the loop.
pub fn encode_into<'a>(
    input: &[u8],
    offset: usize,
    length: usize,
    output: &'a mut [u8],
) -> &'a [u8] {
    let end = offset.checked_add(length);
    assert!(
        end.is_some_and(|end| end <= input.len()),
        "encode window {}..+{} out of bounds for input of {} bytes",
        offset,
        length,
        input.len()
    );
    assert!(
        output.len() == enc_length(length),
        "output buffer is {} bytes, need exactly {} for {} input bytes",
        output.len(),
        enc_length(length),
        length
    );

    let window = &input[offset..offset + length];
    let tail_len = length % 3;
    let (groups, tail) = window.split_at(length - tail_len);

    // Hot loop: 3 input bytes -> 4 symbols. chunks_exact lets the
    // optimizer drop the per-iteration bounds checks.
    for (src, dst) in groups.chunks_exact(3).zip(output.chunks_exact_mut(4)) {
        let (x, y, z) = (src[0], src[1], src[2]);
        dst[0] = ALPHABET[(x >> 2) as usize];
        dst[1] = ALPHABET[((x << 4 | y >> 4) & 0x3F) as usize];
        dst[2] = ALPHABET[((y << 2 | z >> 6) & 0x3F) as usize];
        dst[3] = ALPHABET[(z & 0x3F) as usize];
    }

    // Tail group: the last 4 output positions, padded with '='.
    let n = output.len();
    match *tail {
        [] => {}
        [x] => {
            output[n - 4] = ALPHABET[(x >> 2) as usize];
            output[n - 3] = ALPHABET[((x << 4) & 0x3F) as usize];
            output[n - 2] = PAD;
            output[n - 1] = PAD;
        }
        [x, y] => {
            output[n - 4] = ALPHABET[(x >> 2) as usize];
            output[n - 3] = ALPHABET[((x << 4 | y >> 4) & 0x3F) as usize];
            output[n - 2] = ALPHABET[((y << 2) & 0x3F) as usize];
            output[n - 1] = PAD;
        }
        _ => unreachable!(),
    }

    output
}

/// Encode an entire byte slice into a freshly allocated buffer.
#[inline]
pub fn encode(input: &[u8]) -> Vec<u8> {
    encode_window(input, 0, input.len())
}

/// Encode the window `input[offset..offset + length]` into a freshly
/// allocated buffer of exactly `enc_length(length)` bytes.
///
/// # Panics
///
/// Panics if the window exceeds `input` (see [`encode_into`]).
pub fn encode_window(input: &[u8], offset: usize, length: usize) -> Vec<u8> {
    let mut output = vec![0u8; enc_length(length)];
    encode_into(input, offset, length, &mut output);
    output
}
