// BIOS parameter block and extended boot record

use crate::endian::Little as LE;

pub(crate) const BOOT_SECTOR_SIZE: usize = 512;

#[derive(Copy, Clone, Debug)]
#[repr(C, packed)]
pub(crate) struct BootSector {
    pub jump_boot: [u8; 3],
    pub oem_id: [u8; 8],
    pub bytes_per_sector: LE<u16>,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: LE<u16>,
    pub number_of_fats: u8,
    pub root_entries: LE<u16>,
    pub sector_count: LE<u16>, // 0 means large_sector_count is used
    pub media_descriptor: u8,
    pub sectors_per_fat: LE<u16>,
    pub sectors_per_track: LE<u16>,
    pub number_of_heads: LE<u16>,
    pub hidden_sectors: LE<u32>,
    pub large_sector_count: LE<u32>,
    // extended boot record
    pub drive_number: u8,
    _reserved: u8,
    pub signature: u8,
    pub volume_id: LE<u32>,
    pub volume_label: [u8; 11],
    pub system_id: [u8; 8],
    pub bootcode: [u8; 448],
    pub boot_signature: [u8; 2],
}

impl BootSector {
    /// Caller guarantees bytes.len() >= BOOT_SECTOR_SIZE
    pub fn decode(bytes: &[u8]) -> Self {
        let bytes = &bytes[..BOOT_SECTOR_SIZE];
        unsafe { core::ptr::read_unaligned(bytes.as_ptr() as *const Self) }
    }

    pub fn is_fat12(&self) -> bool {
        let system_id = self.system_id;
        self.boot_signature == hex!("55 AA") && &system_id == b"FAT12   "
    }

    pub fn total_sectors(&self) -> u32 {
        match self.sector_count.to_ne() {
            0 => self.large_sector_count.to_ne(),
            count => count as u32,
        }
    }
}
