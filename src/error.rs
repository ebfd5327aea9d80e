use super::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("invalid buffer length {actual}, expected {expected}"))]
    InvalidLength {
        expected: &'static str,
        actual: usize,
    },

    #[snafu(display("invalid hex encoding: {source}"))]
    InvalidEncoding { source: hex::FromHexError },

    #[snafu(display("cannot compare buffers of length {left} and {right}"))]
    LengthMismatch { left: usize, right: usize },

    #[snafu(display("target is negative"))]
    NegativeTarget,

    #[snafu(display("target is zero"))]
    ZeroTarget,

    #[snafu(display("target is {bytes} bytes wide, exceeds 32"))]
    Overflow { bytes: usize },

    #[snafu(display("difficulty must be > 0"))]
    ZeroDifficulty,
}
