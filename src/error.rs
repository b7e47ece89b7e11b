use snafu::Snafu;
use std::path::PathBuf;

/// The public Error type for this library.
#[derive(Debug, Snafu)]
pub struct Error(LibError);

/// The public Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// The internal Result type for this library.
pub(crate) type LibResult<T> = std::result::Result<T, LibError>;

/// The internal Error type for this library.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum LibError {
    #[snafu(display("{} The chunk's declared length is violated: {}", site, source))]
    Budget {
        site: String,
        source: crate::budget::BudgetError,
    },

    #[snafu(display("{} The header chunk is invalid: {}", site, description))]
    InvalidHeader { site: String, description: String },

    #[snafu(display("unable to open '{}': {}", path.display(), source))]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("{} Error while reading data: {}", site, source))]
    Read {
        site: String,
        source: crate::byte_source::ByteError,
    },

    #[snafu(display("{} Error while writing the trace: {}", site, source))]
    Write {
        site: String,
        source: std::io::Error,
    },
}

impl Error {
    /// The process exit code that reports this error: 2 when the file cannot
    /// be opened, 3 for truncation or a violated chunk length, 4 for a bad
    /// header chunk.
    pub fn exit_code(&self) -> i32 {
        match &self.0 {
            LibError::Open { .. } => 2,
            LibError::Budget { .. } | LibError::Read { .. } | LibError::Write { .. } => 3,
            LibError::InvalidHeader { .. } => 4,
        }
    }
}

macro_rules! site {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

macro_rules! io {
    () => {
        crate::error::ReadSnafu { site: site!() }
    };
}

macro_rules! budget {
    () => {
        crate::error::BudgetSnafu { site: site!() }
    };
}

macro_rules! wr {
    () => {
        crate::error::WriteSnafu { site: site!() }
    };
}
