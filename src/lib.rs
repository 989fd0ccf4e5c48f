//! Reads Windows bitmap files and extracts messages hidden in the least
//! significant bit of their pixel bytes.
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use bmpunveil::Bitmap;
//!
//! fn main() -> bmpunveil::Result<()> {
//!     let mut input = BufReader::new(File::open("nothing_to_see_here.bmp")?);
//!     let bitmap = Bitmap::read(&mut input)?;
//!     print!("{}", bitmap);
//!     bitmap.check_decodable()?;
//!     let message = bmpunveil::decode_message(&bitmap)?;
//!     println!("{} bytes hidden", message.len());
//!     Ok(())
//! }
//! ```

#[macro_use]
extern crate log;

pub mod util;
pub mod error;
pub mod io;
pub mod bitmap;
pub mod secret;

pub use bitmap::Bitmap;
pub use bitmap::DibHeader;
pub use bitmap::FileHeader;
pub use error::Error;
pub use error::Reason;
pub use error::Result;
pub use error::Stage;
pub use secret::decode_message;
pub use secret::decode_message_with;
pub use secret::DecodeOptions;
pub use secret::MessageReader;
pub use secret::RowLayout;
