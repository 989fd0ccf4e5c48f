use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use super::super::error::Error;
use super::super::error::Result;
use super::super::error::Stage;

/// A seekable byte source that only hands out complete reads.
///
/// Every read either fills exactly the requested number of bytes or fails
/// with `Error::ShortRead`; a partially filled buffer never leaves this type.
pub struct ByteSource<T> where T: Read + Seek {
    buf: T,
}

impl<T: Read + Seek> ByteSource<T> {

    /// Wrap a `Read + Seek` with a `ByteSource`
    pub fn from(buf: T) -> ByteSource<T> {
        ByteSource { buf }
    }

    pub fn into_inner(self) -> T {
        self.buf
    }

    /// Fill `out` completely, `what` names the structure for diagnostics
    pub fn read_exact(&mut self, out: &mut [u8], what: &'static str) -> Result<()> {
        let mut filled = 0usize;
        while filled < out.len() {
            match self.buf.read(&mut out[filled..]) {
                Ok(0) => return Err(Error::short_read(what, out.len(), filled)),
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::from(e)),
            }
        }
        Ok(())
    }

    /// Read the next `len` bytes into a new buffer.
    ///
    /// The whole `len` is reserved up front with `try_reserve_exact`, so a
    /// lying length field fails with `Allocation` instead of aborting the
    /// process; a source that ends early fails with `ShortRead`.
    pub fn read_vec(&mut self, len: u64, what: &'static str) -> Result<Vec<u8>> {
        let wanted = usize_len(len)?;
        let mut data = Vec::new();
        if data.try_reserve_exact(wanted).is_err() {
            return Err(Error::Allocation {
                stage: Stage::HeaderRead,
                bytes: len,
            });
        }

        let read = (&mut self.buf).take(len).read_to_end(&mut data)?;
        if read != wanted {
            return Err(Error::short_read(what, wanted, read));
        }

        Ok(data)
    }

    ///
    /// Seek to absolute byte `pos`
    ///
    pub fn seek(&mut self, pos: u64) -> Result<u64> {
        debug!("seeking to {:#x}", pos);
        Ok(self.buf.seek(SeekFrom::Start(pos))?)
    }
}

fn usize_len(len: u64) -> Result<usize> {
    if len > usize::max_value() as u64 {
        return Err(Error::Allocation {
            stage: Stage::HeaderRead,
            bytes: len,
        });
    }
    Ok(len as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn exact_reads() {
        let mut src = ByteSource::from(Cursor::new(vec![1u8, 2, 3, 4, 5]));
        let mut head = [0u8; 2];
        src.read_exact(&mut head, "head").unwrap();
        assert_eq!(head, [1, 2]);
        assert_eq!(src.read_vec(3, "tail").unwrap(), vec![3, 4, 5]);
    }

    #[test]
    fn short_reads_fail() {
        let mut src = ByteSource::from(Cursor::new(vec![1u8, 2, 3]));
        let mut out = [0u8; 4];
        match src.read_exact(&mut out, "head") {
            Err(Error::ShortRead { needed, available, .. }) => {
                assert_eq!((needed, available), (4, 3));
            }
            other => panic!("unexpected {:?}", other),
        }

        src.seek(1).unwrap();
        match src.read_vec(8, "pixels") {
            Err(Error::ShortRead { needed, available, .. }) => {
                assert_eq!((needed, available), (8, 2));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn seek_is_absolute() {
        let mut src = ByteSource::from(Cursor::new((0u8..16).collect::<Vec<_>>()));
        src.seek(10).unwrap();
        src.seek(4).unwrap();
        assert_eq!(src.read_vec(2, "bytes").unwrap(), vec![4, 5]);
        assert_eq!(src.into_inner().position(), 6);
    }

    #[test]
    fn seek_past_end_reads_nothing() {
        let mut src = ByteSource::from(Cursor::new(vec![0u8; 4]));
        src.seek(100).unwrap();
        assert!(src.read_vec(1, "pixels").is_err());
        assert_eq!(src.read_vec(0, "pixels").unwrap(), Vec::<u8>::new());
    }
}
