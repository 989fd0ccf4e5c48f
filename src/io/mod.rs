pub mod source;

pub use self::source::ByteSource;
