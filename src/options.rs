use super::*;

#[derive(Clone, Default, Debug, Args)]
pub(crate) struct Options {
    #[arg(
        long,
        global = true,
        env = "POWTARGET_COMPACT",
        help = "Print single-line JSON instead of pretty JSON."
    )]
    pub(crate) compact: bool,
}

impl Options {
    pub(crate) fn print(&self, output: &impl Serialize) -> anyhow::Result<()> {
        let json = if self.compact {
            serde_json::to_string(output)?
        } else {
            serde_json::to_string_pretty(output)?
        };

        println!("{json}");

        Ok(())
    }
}
