use {
    anyhow::Context,
    arguments::Arguments,
    byteorder::{BigEndian, ByteOrder, LittleEndian},
    clap::{Args, Parser},
    derive_more::Display,
    error::{
        InvalidLengthSnafu, LengthMismatchSnafu, NegativeTargetSnafu, OverflowSnafu,
        ZeroDifficultySnafu, ZeroTargetSnafu,
    },
    hex::{FromHex, FromHexError},
    num_bigint::{BigInt, BigUint, Sign},
    num_traits::Zero,
    options::Options,
    primitive_types::U256,
    serde::Serialize,
    serde_with::{DeserializeFromStr, SerializeDisplay},
    snafu::{Snafu, ensure},
    std::{cmp::Ordering, env, fmt, io, process, str::FromStr},
    tracing::debug,
    tracing_appender::non_blocking,
    tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt},
};

pub use {
    compact::{CompactCodec, Consensus},
    compare::rcmp,
    difficulty::{difficulty, double256},
    error::{Error, Result},
    swap::{swap32, swap32_hex},
    target::{DIFF, DIFF_TARGET, Target, bits_to_target, target_to_bits},
};

mod arguments;
mod compact;
mod compare;
mod difficulty;
mod error;
mod logs;
mod options;
mod subcommand;
mod swap;
mod target;

pub fn main() {
    let guard = logs::init();

    let args = Arguments::parse();

    let code = match args.run() {
        Err(err) => {
            eprintln!("error: {err}");

            for (i, cause) in err.chain().skip(1).enumerate() {
                if i == 0 {
                    eprintln!();
                    eprintln!("because:");
                }
                eprintln!("- {cause}");
            }

            if env::var_os("RUST_BACKTRACE")
                .map(|val| val == "1")
                .unwrap_or_default()
            {
                eprintln!();
                eprintln!("{}", err.backtrace());
            }

            1
        }
        Ok(()) => 0,
    };

    drop(guard);

    process::exit(code);
}
