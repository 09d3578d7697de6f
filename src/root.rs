use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{Error, InputError};
use crate::fs;
use crate::io::IOWrapper;
use crate::region::directory::{DirectoryEntry, ENTRY_SIZE, NAME_SIZE};
use crate::types::SectorID;

/// In-memory copy of the fixed size root directory region
#[derive(Clone, Debug)]
pub struct RootDirectory {
    entries: Vec<DirectoryEntry>,
    data_offset: SectorID,
}

impl RootDirectory {
    pub(crate) fn load<E: Debug, IO: crate::io::IO<Error = E>>(
        io: &mut IOWrapper<IO>,
        fs_info: &fs::Info,
    ) -> Result<Self, Error<E>> {
        let offset = fs_info.root_offset();
        let num_sectors = fs_info.root_sectors();
        debug!("Root directory offset {} length {} sectors", offset, num_sectors);
        let bytes = io.read(offset, num_sectors)?;
        let chunks = bytes.chunks_exact(ENTRY_SIZE).take(fs_info.root_entries as usize);
        let entries = chunks.map(DirectoryEntry::decode).collect();
        let data_offset = offset + num_sectors;
        debug!("Data region starts at sector {}", data_offset);
        Ok(Self { entries, data_offset })
    }

    /// First sector of cluster 2, right after the root directory region
    pub fn data_offset(&self) -> SectorID {
        self.data_offset
    }

    /// Linear lookup by exact on-disk name, e.g. `b"KERNEL  BIN"`.
    ///
    /// Name is compared byte for byte, no case folding and no dot handling,
    /// the first match in directory order wins.
    pub fn find(&self, name: &[u8; NAME_SIZE]) -> Option<&DirectoryEntry> {
        self.entries().find(|entry| &entry.name == name)
    }

    /// Same as `find`, rejects names that are not exactly 11 bytes.
    ///
    /// Bytes above 0x7F are kept as is, on-disk names use the OEM code page.
    pub fn find_bytes(&self, name: &[u8]) -> Result<Option<&DirectoryEntry>, InputError> {
        let name: &[u8; NAME_SIZE] =
            name.try_into().map_err(|_| InputError::Filename(name.len()))?;
        Ok(self.find(name))
    }

    pub fn find_str(&self, name: &str) -> Result<Option<&DirectoryEntry>, InputError> {
        self.find_bytes(name.as_bytes())
    }

    /// Files and directories in directory order, stops at end of directory marker
    pub fn entries(&self) -> impl Iterator<Item = &DirectoryEntry> {
        let entries = self.entries.iter().take_while(|entry| !entry.is_end_of_directory());
        entries.filter(|entry| entry.in_use())
    }

    /// Number of records region holds, used or not
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod test {
    use super::RootDirectory;
    use crate::error::InputError;
    use crate::region::directory::test::raw_entry;
    use crate::region::directory::DirectoryEntry;
    use crate::types::SectorID;

    fn directory(raw: &[[u8; 32]], capacity: usize) -> RootDirectory {
        let mut entries: Vec<_> = raw.iter().map(|e| DirectoryEntry::decode(e)).collect();
        entries.resize(capacity, DirectoryEntry::default());
        RootDirectory { entries, data_offset: SectorID::from(3) }
    }

    #[test]
    fn test_find() {
        let root = directory(
            &[
                raw_entry(b"HELLO   TXT", 0x20, 2, 5),
                raw_entry(b"KERNEL  BIN", 0x20, 3, 1000),
                raw_entry(b"HELLO   TXT", 0x20, 9, 7),
            ],
            16,
        );
        let entry = root.find(b"KERNEL  BIN").unwrap();
        assert_eq!(entry.size(), 1000);
        let entry = root.find(b"HELLO   TXT").unwrap();
        assert_eq!(u16::from(entry.first_cluster_low()), 2);
        assert!(root.find(b"hello   txt").is_none());
        assert!(root.find(b"HELLO.TXT  ").is_none());
        assert!(root.find(b"MISSING    ").is_none());
        assert_eq!(root.capacity(), 16);
        assert_eq!(root.entries().count(), 3);
    }

    #[test]
    fn test_skip_unused() {
        let mut deleted = *b"OLD     TXT";
        deleted[0] = 0xE5;
        let root = directory(
            &[
                raw_entry(b"FLOPPY     ", 0x08, 0, 0),
                raw_entry(&deleted, 0x20, 4, 10),
                raw_entry(b"A\0b\0c\0d\0e\0f", 0x0F, 0, 0),
                raw_entry(b"NEW     TXT", 0x20, 5, 10),
                [0u8; 32],
                raw_entry(b"AFTER   TXT", 0x20, 6, 10),
            ],
            16,
        );
        assert!(root.find(b"FLOPPY     ").is_none());
        assert!(root.find(&deleted).is_none());
        assert!(root.find(b"NEW     TXT").is_some());
        assert!(root.find(b"AFTER   TXT").is_none());
        assert_eq!(root.entries().count(), 1);
    }

    #[test]
    fn test_find_str() {
        let root = directory(&[raw_entry(b"HELLO   TXT", 0x20, 2, 5)], 16);
        assert!(root.find_str("HELLO   TXT").unwrap().is_some());
        assert!(root.find_str("HELLO   DOC").unwrap().is_none());
        assert_eq!(root.find_str("HELLO.TXT").err(), Some(InputError::Filename(9)));
    }

    #[test]
    fn test_find_bytes() {
        let root = directory(&[raw_entry(b"CAF\x82    TXT", 0x20, 2, 5)], 16);
        assert!(root.find_bytes(b"CAF\x82    TXT").unwrap().is_some());
        assert_eq!(root.find_str("CAF\u{82}    TXT").err(), Some(InputError::Filename(12)));
        assert_eq!(root.find_bytes(b"").err(), Some(InputError::Filename(0)));
        assert_eq!(root.find_bytes(b"CAF\x82    TXT ").err(), Some(InputError::Filename(12)));
    }
}
