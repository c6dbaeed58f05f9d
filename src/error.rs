use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The codec primitives, the tagged integer types and the policy layer are total over their
/// inputs and never produce an error. Errors only arise at the edges of the crate: offset-based
/// access into caller buffers that are too short, fallible assignment of bounded settings, and
/// parsing of byte-order names.
///
/// Contract violations (an out-of-range bounded setting assigned through the infallible path, an
/// out-of-domain sign-extension width, overflowing a release guard) are programming defects and
/// are reported through `assert!` instead.
///
/// # Error Categories
///
/// ## Buffer Access Errors
/// - [`Error::OutOfBounds`] - Attempted to read or write beyond the end of a buffer
///
/// ## Configuration Errors
/// - [`Error::SettingOutOfRange`] - A bounded setting was given a value outside its range
/// - [`Error::UnknownByteOrder`] - A byte-order name could not be parsed
///
/// ## Misuse
/// - [`Error::Malformed`] - Internal misuse reported as a value, with source location
///
/// # Examples
///
/// ```rust
/// use endiscope::{io::read_le, Error};
///
/// let data = [0x01, 0x02];
/// match read_le::<u32>(&data) {
///     Ok(value) => println!("value: {value:#x}"),
///     Err(Error::OutOfBounds) => println!("buffer too short"),
///     Err(e) => println!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted on a caller supplied buffer.
    ///
    /// This error occurs when an offset-based read or write would touch bytes past the
    /// end of the slice. It's a safety check to prevent buffer overruns when walking
    /// foreign structures.
    #[error("Out of Bound access would have occurred!")]
    OutOfBounds,

    /// A bounded setting was assigned a value outside of its closed range.
    ///
    /// Only the fallible assignment path reports this; the infallible path treats it
    /// as a fatal assertion.
    ///
    /// # Fields
    ///
    /// * `value` - The rejected value
    /// * `min` - Lower bound of the setting (inclusive)
    /// * `max` - Upper bound of the setting (inclusive)
    #[error("Setting value {value} is outside of [{min}, {max}]")]
    SettingOutOfRange {
        /// The rejected value
        value: u32,
        /// Lower bound of the setting
        min: u32,
        /// Upper bound of the setting
        max: u32,
    },

    /// The provided name does not describe a byte order.
    #[error("Unknown byte order - {0}")]
    UnknownByteOrder(String),

    /// An operation was used in a way its contract does not allow.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of the misuse
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}
