use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Swap {
    #[arg(help = "<HEX> whose length is a multiple of eight digits.")]
    hex: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) input: String,
    pub(crate) output: String,
}

impl Swap {
    pub(crate) fn run(self) -> anyhow::Result<Output> {
        let output = swap32_hex(&self.hex)?;

        Ok(Output {
            input: self.hex,
            output,
        })
    }
}
