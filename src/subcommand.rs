use super::*;

mod bits;
mod compare;
mod difficulty;
mod swap;
mod target;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
    #[command(about = "Decode compact <BITS> into a target")]
    Target(target::Decode),
    #[command(about = "Encode a <TARGET> as compact bits")]
    Bits(bits::Encode),
    #[command(about = "Report the difficulty of a <TARGET>")]
    Difficulty(difficulty::Measure),
    #[command(about = "Swap the byte order of every 32-bit word of <HEX>")]
    Swap32(swap::Swap),
    #[command(about = "Compare two little-endian integers <A> and <B>")]
    Compare(compare::Compare),
}

impl Subcommand {
    pub(crate) fn run(self, options: &Options) -> anyhow::Result<()> {
        match self {
            Self::Target(decode) => options.print(&decode.run()?),
            Self::Bits(encode) => options.print(&encode.run()?),
            Self::Difficulty(measure) => options.print(&measure.run()?),
            Self::Swap32(swap) => options.print(&swap.run()?),
            Self::Compare(compare) => options.print(&compare.run()?),
        }
    }
}

/// Compact bits as eight hex digits, with or without a `0x` prefix.
pub(crate) fn parse_bits(s: &str) -> Result<u32> {
    let digits = s.strip_prefix("0x").unwrap_or(s);

    let bytes =
        <[u8; 4]>::from_hex(digits).map_err(|source| Error::InvalidEncoding { source })?;

    Ok(u32::from_be_bytes(bytes))
}

pub(crate) fn format_bits(bits: u32) -> String {
    format!("{bits:08x}")
}

pub(crate) fn parse_hex(s: &str) -> Result<Vec<u8>> {
    Vec::from_hex(s).map_err(|source| Error::InvalidEncoding { source })
}
