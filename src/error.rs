use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Error as IoError;
use std::io::ErrorKind as IoErrorKind;

/// Pipeline stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading or parsing the file header, the DIB header or the pixel array.
    HeaderRead,
    /// The DIB header variant is recognised but not implemented.
    FormatSupport,
    /// Headers parsed but the bitmap can't carry an LSB message.
    Decodability,
    /// Extracting the message from the pixel array.
    Decode,
    /// Opening or writing files outside of the bitmap itself.
    Io,
    /// Bad command line.
    Usage,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let name = match *self {
            Stage::HeaderRead => "header read",
            Stage::FormatSupport => "format support",
            Stage::Decodability => "decodability",
            Stage::Decode => "decode",
            Stage::Io => "i/o",
            Stage::Usage => "usage",
        };
        f.write_str(name)
    }
}

/// Why a parsed bitmap was rejected for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Signature(u16),
    UnsupportedHeader(u32),
    ColorPlanes(u16),
    BitsPerPixel(u16),
    Compression(u32),
    Palette(u32),
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            Reason::Signature(s) => write!(f, "signature 0x{:04X} is not BM", s),
            Reason::UnsupportedHeader(size) => write!(f, "DIB header of {} bytes", size),
            Reason::ColorPlanes(n) => write!(f, "{} color planes, expected 1", n),
            Reason::BitsPerPixel(n) => write!(f, "{} bits per pixel, expected 24", n),
            Reason::Compression(c) => write!(f, "compression method {}, expected 0", c),
            Reason::Palette(n) => write!(f, "{} palette colors, expected 0", n),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("short read while reading {stage}: needed {needed} bytes, got {available}")]
    ShortRead {
        stage: &'static str,
        needed: u64,
        available: u64,
    },

    #[error("unexpected end of input: {0}")]
    UnexpectedEof(IoError),

    #[error("bitmap format with header size {0} not yet supported")]
    UnsupportedDibVariant(u32),

    #[error("file not decodable: {0}")]
    NotDecodable(Reason),

    #[error("unable to allocate {bytes} bytes during {stage}")]
    Allocation { stage: Stage, bytes: u64 },

    #[error("{0}")]
    Io(IoError),

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn usage(message: &str) -> Error {
        Error::Usage(String::from(message))
    }

    pub fn short_read(stage: &'static str, needed: usize, available: usize) -> Error {
        Error::ShortRead {
            stage,
            needed: needed as u64,
            available: available as u64,
        }
    }

    pub fn stage(&self) -> Stage {
        match *self {
            Error::ShortRead { .. } | Error::UnexpectedEof(_) => Stage::HeaderRead,
            Error::UnsupportedDibVariant(_) => Stage::FormatSupport,
            Error::NotDecodable(_) => Stage::Decodability,
            Error::Allocation { stage, .. } => stage,
            Error::Io(_) => Stage::Io,
            Error::Usage(_) => Stage::Usage,
        }
    }
}

impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        match err.kind() {
            IoErrorKind::UnexpectedEof => Error::UnexpectedEof(err),
            _ => Error::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
