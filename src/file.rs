use alloc::vec::Vec;
use core::fmt::Debug;

use crate::chain::ClusterChain;
use crate::error::{DataError, Error};
use crate::fat::FAT;
use crate::fs;
use crate::io::IOWrapper;
use crate::region::directory::DirectoryEntry;
use crate::types::SectorID;

/// Upper bound of clusters any chain on this volume may span
pub(crate) fn max_clusters(fs_info: &fs::Info, fat: &FAT) -> usize {
    match fs_info.cluster_count() as usize {
        0 => fat.capacity(),
        count => count.min(fat.capacity()),
    }
}

/// Concatenated content of every cluster in the chain of `entry`,
/// a multiple of cluster size and possibly longer than file size.
pub(crate) fn read_clusters<E: Debug, IO: crate::io::IO<Error = E>>(
    io: &mut IOWrapper<IO>,
    fs_info: &fs::Info,
    fat: &FAT,
    data_offset: SectorID,
    entry: &DirectoryEntry,
) -> Result<Vec<u8>, Error<E>> {
    let first = entry.first_cluster_low();
    let mut bytes = Vec::new();
    if entry.size() == 0 || !first.valid() {
        return Ok(bytes);
    }
    let sectors_per_cluster = fs_info.sectors_per_cluster as u32;
    for cluster_id in ClusterChain::new(fat, first, max_clusters(fs_info, fat)) {
        let sector_id = fs_info.cluster_offset(data_offset, cluster_id?);
        bytes.extend_from_slice(&io.read(sector_id, sectors_per_cluster)?);
    }
    Ok(bytes)
}

/// Content of `entry`, exactly file size bytes
pub(crate) fn read<E: Debug, IO: crate::io::IO<Error = E>>(
    io: &mut IOWrapper<IO>,
    fs_info: &fs::Info,
    fat: &FAT,
    data_offset: SectorID,
    entry: &DirectoryEntry,
) -> Result<Vec<u8>, Error<E>> {
    let mut bytes = read_clusters(io, fs_info, fat, data_offset, entry)?;
    let size = entry.size();
    if bytes.len() < size as usize {
        return Err(DataError::TruncatedChain { expected: size, actual: bytes.len() }.into());
    }
    bytes.truncate(size as usize);
    Ok(bytes)
}
