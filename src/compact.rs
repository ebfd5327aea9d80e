use super::*;

/// Converts between compact "bits" and arbitrary precision integers.
///
/// The target math only ever goes through this trait, so tests can hand it
/// a codec that produces negative, zero or oversized values on demand.
pub trait CompactCodec: Send + Sync {
    fn from_compact(&self, bits: u32) -> BigInt;

    fn to_compact(&self, value: &BigInt) -> u32;
}

/// The standard compact float encoding: an exponent byte counting the width
/// of the value in bytes, then a 3 byte mantissa whose top bit is a sign flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Consensus;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

impl CompactCodec for Consensus {
    fn from_compact(&self, bits: u32) -> BigInt {
        if bits == 0 {
            return BigInt::zero();
        }

        let exponent = bits >> 24;
        let mantissa = bits & MANTISSA_MASK;

        let magnitude = if exponent <= 3 {
            BigUint::from(mantissa >> (8 * (3 - exponent)))
        } else {
            BigUint::from(mantissa) << (8 * (exponent - 3))
        };

        // A negative zero normalizes to zero.
        let sign = if bits & SIGN_BIT != 0 {
            Sign::Minus
        } else {
            Sign::Plus
        };

        BigInt::from_biguint(sign, magnitude)
    }

    fn to_compact(&self, value: &BigInt) -> u32 {
        if value.is_zero() {
            return 0;
        }

        let magnitude = value.magnitude();
        let mut size = magnitude.bits().div_ceil(8) as u32;

        let mut mantissa = if size <= 3 {
            low_u32(magnitude) << (8 * (3 - size))
        } else {
            low_u32(&(magnitude >> (8 * (size - 3))))
        };

        if mantissa & SIGN_BIT != 0 {
            mantissa >>= 8;
            size += 1;
        }

        let mut bits = (size << 24) | mantissa;

        if value.sign() == Sign::Minus {
            bits |= SIGN_BIT;
        }

        bits
    }
}

fn low_u32(n: &BigUint) -> u32 {
    n.iter_u32_digits().next().unwrap_or(0)
}
