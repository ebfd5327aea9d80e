use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Encode {
    #[arg(help = "<TARGET> as 64 hex digits, most significant first.")]
    target: String,
    #[arg(
        long,
        help = "Read <TARGET> as little-endian hex of any width instead."
    )]
    little_endian: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) bits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) target: Option<Target>,
}

impl Encode {
    pub(crate) fn run(self) -> anyhow::Result<Output> {
        let bits = if self.little_endian {
            let bytes = parse_hex(&self.target)?;
            debug!("Encoding {}-byte little-endian target", bytes.len());
            target_to_bits(&Consensus, &bytes)
        } else {
            self.target.parse::<Target>()?.to_bits(&Consensus)
        }
        .with_context(|| format!("failed to encode target {}", self.target))?;

        // Re-decoding shows the value the bits actually stand for. Wide
        // little-endian inputs can encode to bits with no 32-byte target.
        let target = match Target::from_bits(&Consensus, bits) {
            Ok(target) => Some(target),
            Err(err) => {
                debug!("Not echoing target for bits {bits:08x}: {err}");
                None
            }
        };

        Ok(Output {
            bits: format_bits(bits),
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn genesis() {
        let output = Encode {
            target: DIFF_TARGET.to_string(),
            little_endian: false,
        }
        .run()
        .unwrap();

        assert_eq!(output.bits, "1d00ffff");
        assert_eq!(output.target, Some(DIFF_TARGET));
    }

    #[test]
    fn lossy_target() {
        let output = Encode {
            target: "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff".into(),
            little_endian: false,
        }
        .run()
        .unwrap();

        assert_eq!(output.bits, "1d00ffff");
        assert_eq!(output.target, Some(DIFF_TARGET));
    }

    #[test]
    fn little_endian_any_width() {
        let output = Encode {
            target: "563412".into(),
            little_endian: true,
        }
        .run()
        .unwrap();

        assert_eq!(output.bits, "03123456");
        assert_eq!(output.target, Some(Target::from(U256::from(0x12_3456u64))));
    }

    #[test]
    fn little_endian_wider_than_32_bytes() {
        let output = Encode {
            target: format!("{}01", "00".repeat(32)),
            little_endian: true,
        }
        .run()
        .unwrap();

        assert_eq!(output.bits, "21010000");
        assert_eq!(output.target, None);
    }

    #[test]
    fn little_endian_wider_than_255_bytes() {
        let output = Encode {
            target: format!("{}01", "00".repeat(255)),
            little_endian: true,
        }
        .run()
        .unwrap();

        assert_eq!(output.bits, "00010000");
        assert_eq!(output.target, None);
    }

    #[test]
    fn zero() {
        let err = Encode {
            target: "0000".into(),
            little_endian: true,
        }
        .run()
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ZeroTarget)
        ));
    }
}
