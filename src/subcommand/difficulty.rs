use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Measure {
    #[arg(help = "<TARGET> as 64 hex digits, most significant first.")]
    target: String,
    #[arg(long, help = "Read <TARGET> as raw little-endian hex instead.")]
    little_endian: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) difficulty: f64,
    pub(crate) approximate: f64,
}

impl Measure {
    pub(crate) fn run(self) -> anyhow::Result<Output> {
        let bytes = if self.little_endian {
            parse_hex(&self.target)?
        } else {
            self.target.parse::<Target>()?.to_le_bytes().to_vec()
        };

        debug!("Measuring difficulty of {}-byte target", bytes.len());

        let difficulty = difficulty(&bytes)
            .with_context(|| format!("failed to measure target {}", self.target))?;

        let approximate = if bytes.is_empty() {
            0.0
        } else {
            double256(&bytes)?
        };

        Ok(Output {
            difficulty,
            approximate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_1() {
        let output = Measure {
            target: DIFF_TARGET.to_string(),
            little_endian: false,
        }
        .run()
        .unwrap();

        assert_eq!(output.difficulty, 1.0);
        assert_eq!(output.approximate, DIFF);
    }

    #[test]
    fn empty_little_endian_falls_back() {
        let output = Measure {
            target: String::new(),
            little_endian: true,
        }
        .run()
        .unwrap();

        assert_eq!(output.difficulty, DIFF);
        assert_eq!(output.approximate, 0.0);
    }

    #[test]
    fn wrong_width() {
        let err = Measure {
            target: "ffff".into(),
            little_endian: true,
        }
        .run()
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidLength { actual: 2, .. })
        ));
    }
}
