//! When big integer arithmetic or conversion goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
use serde::de;

/// This type represents all possible errors that can occur when constructing,
/// converting or operating on a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `exactint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the offending byte when parsing decimal text.
    ///
    /// The first byte of the input, including a leading `-`, is in column 1.
    /// Errors that do not point at a byte of input report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::InvalidArgument` - the caller passed malformed text, a
    ///   negative exponent, an empty buffer, a zero divisor or asked for a
    ///   value that does not fit the requested type
    /// - `Category::Allocation` - a limb buffer could not be grown
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::AllocationFailure => Category::Allocation,
            ErrorCode::Message(_)
            | ErrorCode::EmptyInput
            | ErrorCode::InvalidDigit
            | ErrorCode::NegativeExponent
            | ErrorCode::ExponentTooLarge
            | ErrorCode::EmptyBuffer
            | ErrorCode::NumberOutOfRange
            | ErrorCode::DivisionByZero => Category::InvalidArgument,
        }
    }

    /// Returns true if this error was caused by an argument the operation
    /// cannot accept.
    pub fn is_invalid_argument(&self) -> bool {
        self.classify() == Category::InvalidArgument
    }

    /// Returns true if this error was caused by a failure to grow a limb
    /// buffer.
    ///
    /// No operand of the failed operation has been modified.
    pub fn is_allocation(&self) -> bool {
        self.classify() == Category::Allocation
    }
}

/// Categorizes the cause of an `exactint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by an argument the operation cannot accept.
    ///
    /// These are caller errors and retrying with the same input fails the
    /// same way.
    InvalidArgument,

    /// The error was caused by a failed limb buffer allocation.
    Allocation,
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describe all possible errors that can occur in this crate.
#[derive(PartialEq)]
pub enum ErrorCode {
    /// Catchall for messages raised through serde.
    Message(Box<str>),

    /// Decimal text had no digits.
    EmptyInput,

    /// Decimal text contained a byte that is not an ASCII digit.
    InvalidDigit,

    /// A power was requested with a negative exponent.
    NegativeExponent,

    /// A power was requested with an exponent too large to index.
    ExponentTooLarge,

    /// A two's-complement buffer was empty.
    EmptyBuffer,

    /// Number is bigger than the maximum value of its type.
    NumberOutOfRange,

    /// Division or remainder by zero.
    DivisionByZero,

    /// A limb buffer could not be grown.
    AllocationFailure,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Error {
    #[cold]
    pub(crate) fn at_column(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn invalid(code: ErrorCode) -> Self {
        Error::at_column(code, 0)
    }

    #[cold]
    pub(crate) fn alloc() -> Self {
        Error::invalid(ErrorCode::AllocationFailure)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(ref msg) => f.write_str(msg),
            ErrorCode::EmptyInput => f.write_str("empty decimal text"),
            ErrorCode::InvalidDigit => f.write_str("invalid decimal digit"),
            ErrorCode::NegativeExponent => f.write_str("negative exponent"),
            ErrorCode::ExponentTooLarge => f.write_str("exponent too large"),
            ErrorCode::EmptyBuffer => f.write_str("empty two's-complement buffer"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::AllocationFailure => f.write_str("memory allocation failed"),
        }
    }
}

impl de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        Error::invalid(ErrorCode::Message(msg.to_string().into_boxed_str()))
    }
}
