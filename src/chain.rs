use crate::error::DataError;
use crate::fat::{Entry, FAT};
use crate::types::ClusterID;

/// Lazily walks a cluster chain through the FAT.
///
/// Yields at most `max_clusters` clusters, a chain still going beyond that is a loop.
/// Iteration ends for good after the last cluster or the first error.
pub struct ClusterChain<'a> {
    fat: &'a FAT,
    first: ClusterID,
    current: Option<ClusterID>,
    max_clusters: usize,
    visited: usize,
}

impl<'a> ClusterChain<'a> {
    /// Chain starting at `first`, empty if `first` is 0 or 1
    pub fn new(fat: &'a FAT, first: ClusterID, max_clusters: usize) -> Self {
        let current = if first.valid() { Some(first) } else { None };
        Self { fat, first, current, max_clusters, visited: 0 }
    }

    fn in_range(&self, cluster_id: ClusterID) -> bool {
        cluster_id.valid() && (cluster_id.offset() as usize) < self.max_clusters
    }

    fn advance(&mut self, cluster_id: ClusterID) -> Result<ClusterID, DataError> {
        if !self.in_range(cluster_id) {
            return Err(DataError::ClusterOutOfRange(cluster_id));
        }
        if self.visited >= self.max_clusters {
            return Err(DataError::CorruptChain(self.first));
        }
        self.visited += 1;
        let entry = self.fat.entry(cluster_id)?;
        if entry == Entry::BadCluster {
            warn!("Cluster {} marked bad, chain from {} ends there", cluster_id, self.first);
        }
        self.current = match entry {
            entry if entry.is_end_of_chain() => None,
            Entry::Next(next) => Some(next),
            // free or reserved cluster inside a chain, rejected on next step
            Entry::Free => Some(ClusterID::from(0)),
            Entry::Reserved(value) => Some(ClusterID::from(value)),
            Entry::BadCluster | Entry::Last => None,
        };
        trace!("Cluster {} next {:?}", cluster_id, self.current);
        Ok(cluster_id)
    }
}

impl<'a> Iterator for ClusterChain<'a> {
    type Item = Result<ClusterID, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cluster_id = self.current.take()?;
        Some(self.advance(cluster_id))
    }
}
