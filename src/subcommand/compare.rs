use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Compare {
    #[arg(help = "Little-endian hex integer <A>.")]
    a: String,
    #[arg(help = "Little-endian hex integer <B>, same width as <A>.")]
    b: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Comparison {
    #[display("less")]
    Less,
    #[display("equal")]
    Equal,
    #[display("greater")]
    Greater,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) ordering: Comparison,
    pub(crate) sign: i8,
}

impl Compare {
    pub(crate) fn run(self) -> anyhow::Result<Output> {
        let ordering = rcmp(&parse_hex(&self.a)?, &parse_hex(&self.b)?)?;

        debug!("{} is {} {}", self.a, Comparison::from(ordering), self.b);

        Ok(Output {
            ordering: ordering.into(),
            sign: ordering as i8,
        })
    }
}
