use super::*;

const B192: f64 = 6277101735386680763835789423207666416102355444464034512896.0;
const B128: f64 = 340282366920938463463374607431768211456.0;
const B64: f64 = 18446744073709551616.0;
const B32: f64 = 4294967296.0;

/// Approximates a 32-byte little-endian target as an `f64`.
///
/// Exact up to 2^53, rounded above. Only fit for reporting: consensus
/// comparisons go through [`rcmp`] or [`Target`]'s `Ord`.
pub fn double256(target: &[u8]) -> Result<f64> {
    let target = <&[u8; 32]>::try_from(target).map_err(|_| Error::InvalidLength {
        expected: "32",
        actual: target.len(),
    })?;

    Ok(to_double(target))
}

pub(crate) fn to_double(target: &[u8; 32]) -> f64 {
    let limb = |offset: usize| {
        let hi = LittleEndian::read_u32(&target[offset + 4..]);
        let lo = LittleEndian::read_u32(&target[offset..]);
        f64::from(hi) * B32 + f64::from(lo)
    };

    let mut n = 0.0;
    n += limb(24) * B192;
    n += limb(16) * B128;
    n += limb(8) * B64;
    n += limb(0);

    n
}

/// Difficulty of a little-endian target relative to [`DIFF_TARGET`].
///
/// Zero-valued and empty targets report [`DIFF`] instead of dividing by zero,
/// and targets easier than difficulty 1 are clamped to [`DIFF`] as well.
pub fn difficulty(target: &[u8]) -> Result<f64> {
    if target.is_empty() {
        return Ok(DIFF);
    }

    Ok(ratio(double256(target)?))
}

pub(crate) fn ratio(n: f64) -> f64 {
    if n == 0.0 || n > DIFF {
        return DIFF;
    }

    (DIFF / n).floor()
}
