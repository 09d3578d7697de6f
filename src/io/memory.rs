use alloc::vec::Vec;
use core::convert::Infallible;

use crate::types::SectorID;

/// Sector store over an in-memory image
#[derive(Clone, Debug)]
pub struct MemoryIO<T> {
    image: T,
    sector_size: u16,
}

impl<T: AsRef<[u8]>> MemoryIO<T> {
    pub fn new(image: T) -> Self {
        Self { image, sector_size: super::DEFAULT_SECTOR_SIZE }
    }
}

impl<T: AsRef<[u8]>> super::IO for MemoryIO<T> {
    type Error = Infallible;

    fn set_sector_size(&mut self, size: u16) -> Result<(), Self::Error> {
        self.sector_size = size;
        Ok(())
    }

    fn read(&mut self, id: SectorID, count: u32) -> Result<Vec<u8>, Self::Error> {
        let image = self.image.as_ref();
        let start = u64::from(id).saturating_mul(self.sector_size as u64);
        let length = count as u64 * self.sector_size as u64;
        let start = usize::try_from(start).unwrap_or(usize::MAX).min(image.len());
        let end = usize::try_from(length).map_or(image.len(), |n| start.saturating_add(n));
        Ok(image[start..end.min(image.len())].to_vec())
    }
}
