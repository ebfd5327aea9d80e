use super::*;

/// Compares two little-endian unsigned integers of equal width, most
/// significant byte (the highest index) first.
pub fn rcmp(a: &[u8], b: &[u8]) -> Result<Ordering> {
    ensure!(
        a.len() == b.len(),
        LengthMismatchSnafu {
            left: a.len(),
            right: b.len(),
        }
    );

    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return Ok(other),
        }
    }

    Ok(Ordering::Equal)
}
