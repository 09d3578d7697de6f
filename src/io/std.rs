use std::fs;
use std::io::prelude::*;
use std::io::SeekFrom;
use std::path::Path;

use crate::types::SectorID;

/// Disk image file opened read-only
#[derive(Debug)]
pub struct FileIO {
    file: fs::File,
    sector_size: u16,
}

impl FileIO {
    pub fn open<P: AsRef<Path>>(filepath: P) -> std::io::Result<Self> {
        let file = fs::File::options().read(true).open(filepath)?;
        Ok(Self { file, sector_size: super::DEFAULT_SECTOR_SIZE })
    }
}

impl super::IO for FileIO {
    type Error = std::io::Error;

    fn set_sector_size(&mut self, size: u16) -> Result<(), Self::Error> {
        self.sector_size = size;
        Ok(())
    }

    fn read(&mut self, sector: SectorID, count: u32) -> Result<Vec<u8>, Self::Error> {
        let sector_size = self.sector_size as u64;
        let seek = SeekFrom::Start(u64::from(sector) * sector_size);
        self.file.seek(seek)?;
        let length = count as u64 * sector_size;
        let mut buffer = Vec::with_capacity(length as usize);
        (&mut self.file).take(length).read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}
