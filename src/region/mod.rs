/// Boot region, BIOS parameter block followed by `reserved-sectors` - 1 sectors
pub(crate) mod boot;

/// FAT region, [`num-fats`][link] copies of [`sectors-per-fat`][link] sectors each,
/// only the first copy is consulted
///
/// [link]: boot::BootSector
pub(crate) mod fat;

/// Root directory region, fixed [`root-entries`][link] records of 32 bytes
///
/// [link]: boot::BootSector
pub(crate) mod directory;
