use super::*;

/// The difficulty 1 target, `0x00000000ffff0000...0000`.
pub const DIFF_TARGET: Target = {
    let mut bytes = [0u8; 32];
    bytes[26] = 0xff;
    bytes[27] = 0xff;
    Target(bytes)
};

/// [`DIFF_TARGET`] as an `f64`. Exactly representable.
pub const DIFF: f64 = 26959535291011309493156476344723991336010898738574164086137773096960.0;

/// A 256-bit proof-of-work target, stored little-endian.
///
/// Displays most significant digit first, the way block explorers and
/// `getblockheader` print targets. Ordering is exact unsigned comparison,
/// unlike [`Target::difficulty`] which is an `f64` approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Target([u8; 32]);

impl Target {
    pub const ZERO: Self = Self([0; 32]);

    pub const MAX: Self = Self([0xff; 32]);

    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn to_le_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_bits(codec: &impl CompactCodec, bits: u32) -> Result<Self> {
        bits_to_target(codec, bits)
    }

    pub fn to_bits(&self, codec: &impl CompactCodec) -> Result<u32> {
        target_to_bits(codec, &self.0)
    }

    /// Exact inverse of difficulty, `DIFF_TARGET / difficulty` in integers.
    pub fn from_difficulty(difficulty: u64) -> Result<Self> {
        ensure!(difficulty > 0, ZeroDifficultySnafu);

        Ok(Self::from(DIFF_TARGET.to_u256() / U256::from(difficulty)))
    }

    pub fn difficulty(&self) -> f64 {
        difficulty::ratio(difficulty::to_double(&self.0))
    }

    pub fn to_u256(self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

/// Decodes compact `bits` into a target, rejecting values that cannot be a
/// valid proof-of-work threshold.
pub fn bits_to_target(codec: &impl CompactCodec, bits: u32) -> Result<Target> {
    let value = codec.from_compact(bits);

    if value.sign() == Sign::Minus {
        debug!("Rejecting compact target {bits:08x}: negative");
        return NegativeTargetSnafu.fail();
    }

    if value.is_zero() {
        debug!("Rejecting compact target {bits:08x}: zero");
        return ZeroTargetSnafu.fail();
    }

    let (_, bytes) = value.to_bytes_le();

    if bytes.len() > 32 {
        debug!(
            "Rejecting compact target {bits:08x}: {} bytes wide",
            bytes.len()
        );
        return OverflowSnafu { bytes: bytes.len() }.fail();
    }

    let mut target = [0u8; 32];
    target[..bytes.len()].copy_from_slice(&bytes);

    Ok(Target(target))
}

/// Encodes a little-endian unsigned integer of any width as compact bits.
///
/// The exponent is a single byte, so a value wider than 255 bytes wraps
/// around and the bits no longer describe it.
pub fn target_to_bits(codec: &impl CompactCodec, target: &[u8]) -> Result<u32> {
    let value = BigUint::from_bytes_le(target);

    ensure!(!value.is_zero(), ZeroTargetSnafu);

    Ok(codec.to_compact(&BigInt::from(value)))
}

impl Ord for Target {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Target {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<[u8]> for Target {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Target {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes = <[u8; 32]>::try_from(bytes).map_err(|_| Error::InvalidLength {
            expected: "32",
            actual: bytes.len(),
        })?;

        Ok(Self(bytes))
    }
}

impl From<U256> for Target {
    fn from(value: U256) -> Self {
        Self(value.to_little_endian())
    }
}

impl From<Target> for U256 {
    fn from(target: Target) -> Self {
        target.to_u256()
    }
}

impl From<bitcoin::Target> for Target {
    fn from(target: bitcoin::Target) -> Self {
        Self(target.to_le_bytes())
    }
}

impl From<Target> for bitcoin::Target {
    fn from(target: Target) -> Self {
        bitcoin::Target::from_le_bytes(target.0)
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes =
            <[u8; 32]>::from_hex(s).map_err(|source| Error::InvalidEncoding { source })?;

        bytes.reverse();

        Ok(Self(bytes))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
