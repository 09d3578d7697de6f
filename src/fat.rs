use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{DataError, Error};
use crate::fs;
use crate::io::IOWrapper;
pub use crate::region::fat::Entry;
use crate::types::ClusterID;

/// In-memory copy of the first File Allocation Table, 12 bits per entry
#[derive(Clone, Debug)]
pub struct FAT {
    bytes: Vec<u8>,
}

impl FAT {
    pub(crate) fn load<E: Debug, IO: crate::io::IO<Error = E>>(
        io: &mut IOWrapper<IO>,
        fs_info: &fs::Info,
    ) -> Result<Self, Error<E>> {
        let offset = fs_info.fat_offset();
        debug!("FAT offset {} length {} sectors", offset, fs_info.sectors_per_fat);
        let mut bytes = io.read(offset, fs_info.sectors_per_fat as u32)?;
        bytes.truncate(fs_info.fat_size());
        Ok(Self { bytes })
    }

    /// Number of entries addressable in this table, including reserved entry 0 and 1
    pub fn entries(&self) -> usize {
        self.bytes.len() * 2 / 3
    }

    /// Number of data clusters this table is able to describe
    pub fn capacity(&self) -> usize {
        self.entries().saturating_sub(u16::from(ClusterID::FIRST) as usize)
    }

    /// Raw 12 bits value for `cluster`.
    ///
    /// Two entries share three bytes, an even cluster occupies the low 12 bits of the
    /// little endian word at `cluster * 3 / 2`, an odd cluster the high 12 bits.
    pub fn next(&self, cluster: u16) -> Result<u16, DataError> {
        if cluster as usize >= self.entries() {
            return Err(DataError::ClusterOutOfRange(cluster.into()));
        }
        let offset = cluster as usize * 3 / 2;
        let bytes = self.bytes.get(offset..offset + 2);
        let bytes = bytes.ok_or(DataError::ClusterOutOfRange(cluster.into()))?;
        let word = u16::from_le_bytes([bytes[0], bytes[1]]);
        Ok(match cluster % 2 {
            0 => word & 0x0FFF,
            _ => word >> 4,
        })
    }

    pub fn entry(&self, cluster_id: ClusterID) -> Result<Entry, DataError> {
        self.next(cluster_id.into()).map(Entry::from)
    }
}

impl From<Vec<u8>> for FAT {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::{Entry, FAT};
    use crate::error::DataError;

    /// Reference packer, `values[i]` goes to cluster `i`
    pub(crate) fn pack(values: &[u16]) -> Vec<u8> {
        let mut bytes = vec![0u8; (values.len() * 3).div_ceil(2) + 1];
        for (cluster, &value) in values.iter().enumerate() {
            let offset = cluster * 3 / 2;
            if cluster % 2 == 0 {
                bytes[offset] = value as u8;
                bytes[offset + 1] = (bytes[offset + 1] & 0xF0) | (value >> 8) as u8 & 0x0F;
            } else {
                bytes[offset] = (bytes[offset] & 0x0F) | ((value as u8 & 0x0F) << 4);
                bytes[offset + 1] = (value >> 4) as u8;
            }
        }
        bytes
    }

    #[test]
    fn test_next() {
        // media descriptor F0, cluster 2 -> 3 -> 4 -> EOC, cluster 5 EOC
        let fat = FAT::from(hex!("F0 FF FF 03 40 00 FF FF FF").to_vec());
        assert_eq!(fat.next(2).unwrap(), 3);
        assert_eq!(fat.next(3).unwrap(), 4);
        assert_eq!(fat.next(4).unwrap(), 0xFFF);
        assert_eq!(fat.next(5).unwrap(), 0xFFF);
        assert_eq!(fat.entry(3.into()).unwrap(), Entry::Next(4.into()));
        assert_eq!(fat.entry(4.into()).unwrap(), Entry::Last);
    }

    #[test]
    fn test_parity() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(600).collect();
        let fat = FAT::from(bytes.clone());
        for cluster in 0..fat.entries() as u16 {
            let offset = cluster as usize * 3 / 2;
            let word = u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);
            let expected = if cluster % 2 == 0 { word & 0xFFF } else { word >> 4 };
            assert_eq!(fat.next(cluster).unwrap(), expected);
        }
    }

    #[test]
    fn test_round_trip() {
        let values: Vec<u16> = vec![0xFF0, 0xFFF, 7, 0xFF8, 0, 0xABC, 0x123, 2, 0xFF7, 0xFFF];
        let fat = FAT::from(pack(&values));
        for (cluster, &value) in values.iter().enumerate() {
            assert_eq!(fat.next(cluster as u16).unwrap(), value);
        }
    }

    #[test]
    fn test_out_of_range() {
        let fat = FAT::from(vec![0u8; 512]);
        assert_eq!(fat.entries(), 341);
        assert_eq!(fat.capacity(), 339);
        assert!(fat.next(340).is_ok());
        assert_eq!(fat.next(341), Err(DataError::ClusterOutOfRange(341.into())));
        assert_eq!(fat.next(u16::MAX), Err(DataError::ClusterOutOfRange(u16::MAX.into())));
        let empty = FAT::from(vec![]);
        assert_eq!(empty.capacity(), 0);
        assert!(empty.next(0).is_err());
    }
}
