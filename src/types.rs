use derive_more::{Display, From, Into};

/// Logical block address, counted in sectors from the start of the volume
#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Ord, PartialOrd, PartialEq)]
pub struct SectorID(u64);

impl SectorID {
    pub(crate) const BOOT: Self = Self(0);
}

impl<I: Into<u64>> core::ops::Add<I> for SectorID {
    type Output = Self;

    fn add(self, rhs: I) -> Self {
        Self(self.0 + rhs.into())
    }
}

#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Ord, PartialOrd, PartialEq)]
pub struct ClusterID(u16);

impl ClusterID {
    /// Clusters 0 and 1 are reserved, data region begins with cluster 2
    pub const FIRST: Self = Self(2);

    pub fn valid(&self) -> bool {
        self.0 >= Self::FIRST.0
    }

    /// Index of this cluster inside data region
    pub(crate) fn offset(self) -> u16 {
        self.0 - Self::FIRST.0
    }
}
