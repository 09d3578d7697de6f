use crate::types::ClusterID;

pub(crate) const BAD_CLUSTER: u16 = 0xFF7;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Entry {
    Free,
    Next(ClusterID),
    /// Cluster 1 or 0xFF0..=0xFF6
    Reserved(u16),
    BadCluster,
    Last,
}

impl From<u16> for Entry {
    fn from(value: u16) -> Self {
        match value & 0xFFF {
            0 => Self::Free,
            1 => Self::Reserved(1),
            value @ 2..=0xFEF => Self::Next(value.into()),
            value @ 0xFF0..=0xFF6 => Self::Reserved(value),
            BAD_CLUSTER => Self::BadCluster,
            _ => Self::Last, // 0xFF8..=0xFFF
        }
    }
}

impl Entry {
    /// Whether a chain stops at this entry, reserved and bad clusters stop it too
    pub fn is_end_of_chain(&self) -> bool {
        matches!(self, Self::Last | Self::BadCluster | Self::Reserved(0xFF0..=0xFF6))
    }
}
