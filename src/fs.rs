use crate::error::DataError;
use crate::region::boot::BootSector;
use crate::region::directory::ENTRY_SIZE;
use crate::types::{ClusterID, SectorID};

/// Volume geometry decoded from boot sector, all region offsets derive from it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Info {
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub number_of_fats: u8,
    pub root_entries: u16,
    pub total_sectors: u32,
    pub sectors_per_fat: u16,
}

impl TryFrom<&BootSector> for Info {
    type Error = DataError;

    fn try_from(boot_sector: &BootSector) -> Result<Self, DataError> {
        let info = Self {
            bytes_per_sector: boot_sector.bytes_per_sector.to_ne(),
            sectors_per_cluster: boot_sector.sectors_per_cluster,
            reserved_sectors: boot_sector.reserved_sectors.to_ne(),
            number_of_fats: boot_sector.number_of_fats,
            root_entries: boot_sector.root_entries.to_ne(),
            total_sectors: boot_sector.total_sectors(),
            sectors_per_fat: boot_sector.sectors_per_fat.to_ne(),
        };
        if info.bytes_per_sector == 0 || info.sectors_per_cluster == 0 {
            return Err(DataError::Geometry);
        }
        Ok(info)
    }
}

impl Info {
    pub fn cluster_size(&self) -> u32 {
        self.bytes_per_sector as u32 * self.sectors_per_cluster as u32
    }

    pub fn fat_size(&self) -> usize {
        self.sectors_per_fat as usize * self.bytes_per_sector as usize
    }

    /// First sector of the first FAT
    pub fn fat_offset(&self) -> SectorID {
        SectorID::from(self.reserved_sectors as u64)
    }

    /// First sector of root directory, right after all FAT copies
    pub fn root_offset(&self) -> SectorID {
        self.fat_offset() + self.number_of_fats as u64 * self.sectors_per_fat as u64
    }

    pub fn root_sectors(&self) -> u32 {
        let size = self.root_entries as u32 * ENTRY_SIZE as u32;
        size.div_ceil(self.bytes_per_sector as u32)
    }

    /// First sector of cluster 2
    pub fn data_offset(&self) -> SectorID {
        self.root_offset() + self.root_sectors()
    }

    /// Number of clusters data region holds, 0 if total sectors is unknown
    pub fn cluster_count(&self) -> u32 {
        let data_offset = u64::from(self.data_offset());
        let data_sectors = (self.total_sectors as u64).saturating_sub(data_offset);
        (data_sectors / self.sectors_per_cluster as u64) as u32
    }

    /// First sector of given cluster, relative to `data_offset`
    pub fn cluster_offset(&self, data_offset: SectorID, cluster_id: ClusterID) -> SectorID {
        data_offset + cluster_id.offset() as u64 * self.sectors_per_cluster as u64
    }
}

#[cfg(test)]
mod test {
    use super::Info;
    use crate::error::DataError;
    use crate::region::boot::{BootSector, BOOT_SECTOR_SIZE};
    use crate::types::{ClusterID, SectorID};

    fn floppy() -> Info {
        Info {
            bytes_per_sector: 512,
            sectors_per_cluster: 1,
            reserved_sectors: 1,
            number_of_fats: 2,
            root_entries: 224,
            total_sectors: 2880,
            sectors_per_fat: 9,
        }
    }

    #[test]
    fn test_layout() {
        let info = floppy();
        assert_eq!(info.fat_offset(), SectorID::from(1));
        assert_eq!(info.root_offset(), SectorID::from(19));
        assert_eq!(info.root_sectors(), 14);
        assert_eq!(info.data_offset(), SectorID::from(33));
        assert_eq!(info.cluster_count(), 2847);
        assert_eq!(info.fat_size(), 4608);
        let data_offset = info.data_offset();
        assert_eq!(info.cluster_offset(data_offset, ClusterID::FIRST), SectorID::from(33));
        assert_eq!(info.cluster_offset(data_offset, ClusterID::from(10)), SectorID::from(41));
    }

    #[test]
    fn test_root_sectors_round_up() {
        let info = Info { root_entries: 17, ..floppy() };
        assert_eq!(info.root_sectors(), 2);
        let info = Info { bytes_per_sector: 1024, sectors_per_cluster: 4, ..floppy() };
        assert_eq!(info.root_sectors(), 7);
        assert_eq!(info.cluster_size(), 4096);
        let data_offset = SectorID::from(100);
        assert_eq!(info.cluster_offset(data_offset, ClusterID::from(3)), SectorID::from(104));
    }

    #[test]
    fn test_unknown_total_sectors() {
        let info = Info { total_sectors: 0, ..floppy() };
        assert_eq!(info.cluster_count(), 0);
    }

    #[test]
    fn test_geometry() {
        let mut bytes = [0u8; BOOT_SECTOR_SIZE];
        bytes[11..13].copy_from_slice(&512u16.to_le_bytes());
        let boot_sector = BootSector::decode(&bytes);
        assert_eq!(Info::try_from(&boot_sector), Err(DataError::Geometry));
        bytes[13] = 2;
        let info = Info::try_from(&BootSector::decode(&bytes)).unwrap();
        assert_eq!(info.cluster_size(), 1024);
    }
}
