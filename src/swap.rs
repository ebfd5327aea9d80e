use super::*;

/// Reverses the byte order of every 32-bit word in `data`, leaving the word
/// order alone. Mutates in place and hands the same buffer back, so callers
/// can chain on it. Nothing is written if the length is not a multiple of 4.
pub fn swap32(data: &mut [u8]) -> Result<&mut [u8]> {
    ensure!(
        data.len() % 4 == 0,
        InvalidLengthSnafu {
            expected: "a multiple of 4",
            actual: data.len(),
        }
    );

    for word in data.chunks_exact_mut(4) {
        let field = LittleEndian::read_u32(word);
        BigEndian::write_u32(word, field);
    }

    Ok(data)
}

/// [`swap32`] over a hex string. Accepts either case, returns lowercase.
pub fn swap32_hex(s: &str) -> Result<String> {
    let mut data = Vec::from_hex(s).map_err(|source| Error::InvalidEncoding { source })?;

    if data.len() % 4 != 0 {
        return Err(Error::InvalidEncoding {
            source: FromHexError::InvalidStringLength,
        });
    }

    Ok(hex::encode(swap32(&mut data)?))
}
