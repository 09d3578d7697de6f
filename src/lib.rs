#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[macro_use]
extern crate hex_literal;
extern crate heapless;
#[macro_use]
extern crate log;

pub mod chain;
mod endian;
pub mod error;
pub mod fat;
mod file;
pub mod fs;
pub mod io;
mod region;
pub mod root;
pub mod types;

use alloc::vec::Vec;
use core::fmt::Debug;

pub use chain::ClusterChain;
use error::{Error, OperationError};
pub use fat::FAT;
use io::IOWrapper;
pub use region::directory::{Attributes, Date, DirectoryEntry, Time, Timestamp};
pub use root::RootDirectory;
use types::SectorID;

/// A FAT12 volume, owns the sector store and decoded boot sector
pub struct FAT12<IO> {
    io: IOWrapper<IO>,
    fs_info: fs::Info,
}

impl<E: Debug, IO: io::IO<Error = E>> FAT12<IO> {
    /// Decode boot sector, geometry is fixed afterwards
    pub fn new(io: IO) -> Result<Self, Error<E>> {
        let mut io = IOWrapper::new(io);
        let bytes = io.read(SectorID::BOOT, 1)?;
        let boot_sector = region::boot::BootSector::decode(&bytes);
        if !boot_sector.is_fat12() {
            warn!("Boot signature or system id does not look like FAT12, continue anyway");
        }
        let fs_info = fs::Info::try_from(&boot_sector)?;
        debug!("Filesystem info: {:?}", fs_info);
        if fs_info.bytes_per_sector != io::DEFAULT_SECTOR_SIZE {
            io.set_sector_size(fs_info.bytes_per_sector)?;
        }
        Ok(Self { io, fs_info })
    }

    pub fn info(&self) -> &fs::Info {
        &self.fs_info
    }

    /// Load the first FAT copy into memory
    pub fn fat(&mut self) -> Result<FAT, Error<E>> {
        FAT::load(&mut self.io, &self.fs_info)
    }

    /// Load the whole root directory region into memory
    pub fn root_directory(&mut self) -> Result<RootDirectory, Error<E>> {
        RootDirectory::load(&mut self.io, &self.fs_info)
    }

    /// Cluster chain of `entry`, bounded by the number of clusters on this volume
    pub fn clusters<'a>(&self, fat: &'a FAT, entry: &DirectoryEntry) -> ClusterChain<'a> {
        let max_clusters = file::max_clusters(&self.fs_info, fat);
        ClusterChain::new(fat, entry.first_cluster_low(), max_clusters)
    }

    /// Every cluster of `entry` as read from disk, last cluster not trimmed to file size
    pub fn read_clusters(
        &mut self,
        fat: &FAT,
        root: &RootDirectory,
        entry: &DirectoryEntry,
    ) -> Result<Vec<u8>, Error<E>> {
        file::read_clusters(&mut self.io, &self.fs_info, fat, root.data_offset(), entry)
    }

    /// Content of `entry`, exactly `entry.size()` bytes
    pub fn read_file(
        &mut self,
        fat: &FAT,
        root: &RootDirectory,
        entry: &DirectoryEntry,
    ) -> Result<Vec<u8>, Error<E>> {
        file::read(&mut self.io, &self.fs_info, fat, root.data_offset(), entry)
    }

    /// Load FAT and root directory, then read file named `name` in on-disk form
    pub fn read(&mut self, name: &[u8; 11]) -> Result<Vec<u8>, Error<E>> {
        let fat = self.fat()?;
        let root = self.root_directory()?;
        let entry = root.find(name).ok_or(OperationError::NotFound)?;
        self.read_file(&fat, &root, entry)
    }

    /// Give back sector store
    pub fn free(self) -> IO {
        self.io.unwrap()
    }
}
