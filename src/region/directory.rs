use bitfield::bitfield;
#[cfg(feature = "chrono")]
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use derive_more::Into;

use crate::endian::Little as LE;
use crate::types::ClusterID;

pub(crate) const ENTRY_SIZE: usize = 32;
pub(crate) const NAME_SIZE: usize = 11;

pub(crate) const END_OF_DIRECTORY: u8 = 0x00;
pub(crate) const DELETED: u8 = 0xE5;

bitfield! {
    #[derive(Copy, Clone, Default, Debug, Into, PartialEq)]
    pub struct Attributes(u8);
    pub read_only, _: 0;
    pub hidden, _: 1;
    pub system, _: 2;
    pub volume_label, _: 3;
    pub directory, _: 4;
    pub archive, _: 5;
}

impl Attributes {
    /// VFAT long file name entries set read-only, hidden, system and volume label together
    pub fn long_name(&self) -> bool {
        self.0 & 0x0F == 0x0F
    }
}

bitfield! {
    #[derive(Copy, Clone, Default, Debug, Into, PartialEq)]
    pub struct Date(u16);
    year_offset, _: 15, 9;
    pub month, _: 8, 5;
    pub day, _: 4, 0;
}

impl Date {
    pub fn year(&self) -> u16 {
        self.year_offset() + 1980
    }
}

bitfield! {
    #[derive(Copy, Clone, Default, Debug, Into, PartialEq)]
    pub struct Time(u16);
    pub hour, _: 15, 11;
    pub minute, _: 10, 5;
    double_second, _: 4, 0;
}

impl Time {
    pub fn second(&self) -> u16 {
        self.double_second() * 2
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Timestamp {
    pub date: Date,
    pub time: Time,
}

#[cfg(feature = "chrono")]
impl TryFrom<Timestamp> for NaiveDateTime {
    type Error = ();

    fn try_from(timestamp: Timestamp) -> Result<Self, ()> {
        let Timestamp { date, time } = timestamp;
        let (year, month, day) = (date.year() as i32, date.month() as u32, date.day() as u32);
        let date = NaiveDate::from_ymd_opt(year, month, day);
        let (hour, minute) = (time.hour() as u32, time.minute() as u32);
        let time = NaiveTime::from_hms_opt(hour, minute, time.second() as u32);
        Ok(NaiveDateTime::new(date.ok_or(())?, time.ok_or(())?))
    }
}

/// On-disk 8.3 directory entry
#[derive(Copy, Clone, Debug, Default)]
#[repr(C, packed)]
pub struct DirectoryEntry {
    pub(crate) name: [u8; NAME_SIZE],
    pub(crate) attributes: u8,
    _reserved: u8,
    pub(crate) create_time_tenths: u8,
    pub(crate) create_time: LE<u16>,
    pub(crate) create_date: LE<u16>,
    pub(crate) last_accessed_date: LE<u16>,
    pub(crate) first_cluster_high: LE<u16>,
    pub(crate) last_modified_time: LE<u16>,
    pub(crate) last_modified_date: LE<u16>,
    pub(crate) first_cluster_low: LE<u16>,
    pub(crate) size: LE<u32>,
}

impl DirectoryEntry {
    /// Panics if `bytes` is shorter than 32 bytes
    pub fn decode(bytes: &[u8]) -> Self {
        let bytes = &bytes[..ENTRY_SIZE];
        unsafe { core::ptr::read_unaligned(bytes.as_ptr() as *const Self) }
    }

    /// Space padded on-disk name, 8 bytes name followed by 3 bytes extension
    pub fn name(&self) -> [u8; NAME_SIZE] {
        self.name
    }

    pub fn attributes(&self) -> Attributes {
        Attributes(self.attributes)
    }

    pub fn size(&self) -> u32 {
        self.size.to_ne()
    }

    /// Combined start cluster, FAT12 only uses lower half
    pub fn first_cluster(&self) -> u32 {
        (self.first_cluster_high.to_ne() as u32) << 16 | self.first_cluster_low.to_ne() as u32
    }

    pub fn first_cluster_low(&self) -> ClusterID {
        ClusterID::from(self.first_cluster_low.to_ne())
    }

    pub fn create_timestamp(&self) -> Timestamp {
        let date = Date(self.create_date.to_ne());
        Timestamp { date, time: Time(self.create_time.to_ne()) }
    }

    /// Creation time fine resolution, in 10ms units
    pub fn create_time_tenths(&self) -> u8 {
        self.create_time_tenths
    }

    pub fn last_modified_timestamp(&self) -> Timestamp {
        let date = Date(self.last_modified_date.to_ne());
        Timestamp { date, time: Time(self.last_modified_time.to_ne()) }
    }

    pub fn last_accessed_date(&self) -> Date {
        Date(self.last_accessed_date.to_ne())
    }

    pub(crate) fn is_end_of_directory(&self) -> bool {
        self.name[0] == END_OF_DIRECTORY
    }

    /// Whether entry describes a file or a directory,
    /// deleted, long name and volume label entries don't
    pub fn in_use(&self) -> bool {
        let attributes = self.attributes();
        let first = self.name[0];
        !(first == END_OF_DIRECTORY || first == DELETED || attributes.volume_label())
    }

    /// Human readable `NAME.EXT`, trailing spaces removed
    pub fn display_name(&self) -> heapless::String<12> {
        let mut output = heapless::String::new();
        let name = self.name;
        let (base, extension) = name.split_at(8);
        let trim = |part: &[u8]| part.len() - part.iter().rev().take_while(|&&b| b == b' ').count();
        for (i, &byte) in base[..trim(base)].iter().enumerate() {
            // 0x05 stands for a leading 0xE5 which marks deleted entries
            let byte = if i == 0 && byte == 0x05 { DELETED } else { byte };
            output.push(printable(byte)).ok();
        }
        let extension = &extension[..trim(extension)];
        if !extension.is_empty() {
            output.push('.').ok();
            for &byte in extension {
                output.push(printable(byte)).ok();
            }
        }
        output
    }
}

fn printable(byte: u8) -> char {
    match byte {
        0x20..=0x7E => byte as char,
        _ => '?',
    }
}
