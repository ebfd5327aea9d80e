use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Decode {
    #[arg(value_parser = parse_bits, help = "Compact <BITS>, eight hex digits.")]
    bits: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) bits: String,
    pub(crate) target: Target,
    pub(crate) target_le: String,
    pub(crate) difficulty: f64,
}

impl Decode {
    pub(crate) fn run(self) -> anyhow::Result<Output> {
        debug!("Decoding bits {}", format_bits(self.bits));

        let target = Target::from_bits(&Consensus, self.bits)
            .with_context(|| format!("failed to decode bits {}", format_bits(self.bits)))?;

        Ok(Output {
            bits: format_bits(self.bits),
            target,
            target_le: hex::encode(target.as_bytes()),
            difficulty: target.difficulty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn genesis() {
        let output = Decode { bits: 0x1d00_ffff }.run().unwrap();
        assert_eq!(output.bits, "1d00ffff");
        assert_eq!(output.target, DIFF_TARGET);
        assert_eq!(
            output.target_le,
            "0000000000000000000000000000000000000000000000000000ffff00000000"
        );
        assert_eq!(output.difficulty, 1.0);
    }

    #[test]
    fn rejects_zero() {
        let err = Decode { bits: 0 }.run().unwrap_err();
        assert_eq!(err.to_string(), "failed to decode bits 00000000");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ZeroTarget)
        ));
    }
}
