#[cfg(feature = "std")]
pub mod std;

pub mod memory;

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{DataError, Error};
use crate::types::SectorID;

/// Sector size assumed before boot sector is decoded
pub const DEFAULT_SECTOR_SIZE: u16 = 512;

/// Read-only sector store backing a FAT12 volume
pub trait IO {
    type Error: Debug;

    /// Default to 512
    fn set_sector_size(&mut self, size: u16) -> Result<(), Self::Error>;
    /// Read `count` consecutive sectors starting at `id`.
    ///
    /// May return less than `count` sectors when the store runs out of data,
    /// caller treats that as a failed read.
    fn read(&mut self, id: SectorID, count: u32) -> Result<Vec<u8>, Self::Error>;
}

pub(crate) struct IOWrapper<IO> {
    io: IO,
    sector_size: u16,
}

impl<E: Debug, IO: crate::io::IO<Error = E>> IOWrapper<IO> {
    pub fn new(io: IO) -> Self {
        Self { io, sector_size: DEFAULT_SECTOR_SIZE }
    }

    pub fn set_sector_size(&mut self, size: u16) -> Result<(), Error<E>> {
        self.io.set_sector_size(size).map_err(|e| Error::IO(e))?;
        self.sector_size = size;
        Ok(())
    }

    pub fn read(&mut self, sector: SectorID, count: u32) -> Result<Vec<u8>, Error<E>> {
        let bytes = self.io.read(sector, count).map_err(|e| Error::IO(e))?;
        let expected = count as usize * self.sector_size as usize;
        if bytes.len() < expected {
            return Err(DataError::ShortRead { sector, expected, actual: bytes.len() }.into());
        }
        Ok(bytes)
    }

    pub fn unwrap(self) -> IO {
        self.io
    }
}

#[cfg(test)]
mod test {
    use super::memory::MemoryIO;
    use super::IOWrapper;
    use crate::error::{DataError, Error};

    #[test]
    fn test_short_read() {
        let mut io = IOWrapper::new(MemoryIO::new([0u8; 1000]));
        assert_eq!(io.read(0u64.into(), 1).unwrap().len(), 512);
        match io.read(1u64.into(), 1) {
            Err(Error::Data(DataError::ShortRead { expected, actual, .. })) => {
                assert_eq!((expected, actual), (512, 488))
            }
            _ => panic!("Short read expected"),
        }
    }

    #[test]
    fn test_sector_size() {
        let mut io = IOWrapper::new(MemoryIO::new(vec![0u8; 4096]));
        io.set_sector_size(1024).unwrap();
        assert_eq!(io.read(1u64.into(), 3).unwrap().len(), 3072);
        assert!(io.read(2u64.into(), 3).is_err());
    }
}
