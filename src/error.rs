//! When building or editing a big integer goes wrong.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Alias for a `Result` with the error type `groupnum::Error`.
pub type Result<T> = result::Result<T, Error>;

/// This type represents all possible errors that can occur when parsing a
/// digit string or editing the limbs of a `BigInt`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The input was empty or held something other than ASCII digits.
    InvalidFormat,

    /// A limb position fell outside the sequence. The rejected call left
    /// the value untouched.
    PositionOutOfRange {
        /// The rejected position.
        position: usize,
        /// Number of limbs in the sequence at the time of the call.
        len: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidFormat => "invalid decimal digit string".fmt(f),
            Error::PositionOutOfRange { position, len } => {
                write!(f, "position {} out of range for {} limbs", position, len)
            }
        }
    }
}

impl error::Error for Error {}
