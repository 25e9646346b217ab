use crate::enums::SampleFormatCode;

/// Error type shared by the core, scanner and reader.
///
/// Following the rest of this crate family, this is a hand-rolled enum rather than a
/// `thiserror` derive: every variant maps onto one of the error kinds this library's
/// consumers actually need to distinguish (see the catalog/scanner/extractor modules),
/// plus the handful of I/O and parsing failures that the reader surfaces directly.
#[derive(Debug)]
pub enum SegyError {
    /// Propagated from `<&[u8]>::try_into::<[u8; N]>()`.
    TryFromSlice(std::array::TryFromSliceError),
    /// I/O error from the standard library.
    StdIoError(std::io::Error),
    /// Failure while memory-mapping the file.
    MapFile(std::io::Error),
    /// File is shorter than the minimum required to hold a reel header.
    FileTooShort,
    /// File is too short for the number of extended text headers it declares.
    SegyTooShort,
    /// A trace header was read cleanly but its declared sample count runs past EOF.
    IncompleteTrace,
    /// Binary header length should always be 400.
    BinHeaderLength { l: usize },
    /// Trace header length should always be 240.
    TraceHeaderLength { l: usize },
    /// A numeric code could not be mapped onto one of the enum's known variants.
    ParseEnum { f: &'static str, code: i64 },
    /// Rejected settings value (e.g. a byte index that would overrun the header).
    SettingsError { msg: String },
    /// A bit-level conversion (endian unpack, IBM float) could not proceed.
    BitConversionError { msg: String },
    /// Expected N bytes while unpacking a primitive, received fewer, and it was not a clean EOF.
    Underflow { expected: usize, got: usize },
    /// Catalog or reader lookup miss for a key that is not present.
    KeyNotFound { msg: String },
    /// Catalog construction rejected the input it was given (stride/range mismatch etc).
    Inconsistency { msg: String },
    /// An IBM/IEEE float conversion cannot represent the given input.
    Encoding { msg: String },
    /// The operation needs a catalog (usually the line catalog) that could not be built.
    OperationNotSupported { msg: String },
    /// Data vector length did not match what the headers declared.
    BadDataVector {
        l_data: usize,
        l_bin: usize,
        format: SampleFormatCode,
    },
    #[cfg(feature = "to_json")]
    /// Serialisation/deserialisation error.
    SerdeError(serde_json::Error),
}

impl From<std::array::TryFromSliceError> for SegyError {
    fn from(e: std::array::TryFromSliceError) -> Self {
        Self::TryFromSlice(e)
    }
}

impl From<std::io::Error> for SegyError {
    fn from(e: std::io::Error) -> Self {
        Self::StdIoError(e)
    }
}

impl std::fmt::Display for SegyError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use self::SegyError::*;
        match self {
            #[cfg(feature = "to_json")]
            SerdeError(x) => write!(fmt, "{}", x),
            TryFromSlice(x) => write!(fmt, "{}", x),
            StdIoError(x) => write!(fmt, "{}", x),
            MapFile(e) => write!(fmt, "could not map file: {}", e),
            FileTooShort => write!(fmt, "file is too short to be a SEG-Y"),
            SegyTooShort => write!(fmt, "mapped file is too short for its declared extended text headers"),
            IncompleteTrace => write!(fmt, "trailing trace is incomplete: file may be corrupt"),
            BinHeaderLength { l } => write!(fmt, "binary header length should be 400 but is {}", l),
            TraceHeaderLength { l } => write!(fmt, "trace header length should be 240 but is {}", l),
            ParseEnum { f, code } => write!(fmt, "could not parse {} (code {})", f, code),
            SettingsError { msg } => write!(fmt, "invalid settings: {}", msg),
            BitConversionError { msg } => write!(fmt, "bit conversion failed: {}", msg),
            Underflow { expected, got } => {
                write!(fmt, "expected {} bytes but only {} were available", expected, got)
            }
            KeyNotFound { msg } => write!(fmt, "key not found: {}", msg),
            Inconsistency { msg } => write!(fmt, "inconsistent catalog input: {}", msg),
            Encoding { msg } => write!(fmt, "encoding error: {}", msg),
            OperationNotSupported { msg } => write!(fmt, "operation not supported: {}", msg),
            BadDataVector { l_data, l_bin, format } => write!(
                fmt,
                "data length is {}, but binary header declares {} samples of {}",
                l_data, l_bin, format
            ),
        }
    }
}

impl From<SegyError> for String {
    fn from(e: SegyError) -> String {
        e.to_string()
    }
}

impl std::error::Error for SegyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use self::SegyError::*;
        match self {
            #[cfg(feature = "to_json")]
            SerdeError(x) => x.source(),
            StdIoError(x) | MapFile(x) => x.source(),
            TryFromSlice(x) => x.source(),
            _ => None,
        }
    }
}
