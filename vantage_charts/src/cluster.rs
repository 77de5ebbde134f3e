// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning series into depth clusters.
//!
//! Two series share a cluster when they occupy the same depth slot: stacked
//! series of one stack group draw on top of each other, and in clustered mode
//! side-by-side series of the same chart type share a slot instead of
//! receding into the scene. Everything else gets its own slot.
//!
//! Cluster indexes follow series enumeration order, first seen wins, so the
//! same input list always yields the same table. Reordering series keeps the
//! *set* of clusters but may renumber them; callers that cache per-cluster
//! state must invalidate on any series change.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::series::{ChartType, Series};

/// Key identifying the depth slot a series falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum SlotKey<'a> {
    /// Stacked series: one slot per (chart type, stack group).
    Stack(ChartType, Option<&'a str>),
    /// Clustered mode: one slot per side-by-side chart type.
    SideBySide(ChartType),
    /// Everything else: one slot per series.
    Single(usize),
}

/// A deterministic partition of a series list into depth clusters.
///
/// Invariant: every series belongs to exactly one cluster, and the cluster
/// count equals the number of distinct depth slots along the scene depth axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterTable {
    /// Member series indexes per cluster, in series enumeration order.
    clusters: Vec<Vec<usize>>,
    /// Cluster index per series.
    index_of: Vec<usize>,
}

impl ClusterTable {
    /// Builds the cluster partition for `series`.
    ///
    /// `clustered` controls rule (b): when set, side-by-side series of the
    /// same chart type share one depth slot.
    pub fn build(series: &[Series], clustered: bool) -> Self {
        let mut clusters: Vec<Vec<usize>> = Vec::new();
        let mut index_of = Vec::with_capacity(series.len());
        let mut slots: HashMap<SlotKey<'_>, usize> = HashMap::new();

        for (i, s) in series.iter().enumerate() {
            let key = if s.chart_type.is_stacked() {
                let group = s
                    .chart_type
                    .supports_stack_groups()
                    .then_some(s.stack_group.as_deref())
                    .flatten();
                SlotKey::Stack(s.chart_type, group)
            } else if clustered && s.draws_side_by_side() {
                SlotKey::SideBySide(s.chart_type)
            } else {
                SlotKey::Single(i)
            };

            let cluster = *slots.entry(key).or_insert_with(|| {
                clusters.push(Vec::new());
                clusters.len() - 1
            });
            clusters[cluster].push(i);
            index_of.push(cluster);
        }

        Self { clusters, index_of }
    }

    /// Number of clusters (distinct depth slots).
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if the table holds no series at all.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// The cluster index assigned to a series, or `None` for an index outside
    /// the series list the table was built from.
    pub fn cluster_of(&self, series: usize) -> Option<usize> {
        self.index_of.get(series).copied()
    }

    /// The member series indexes of one cluster.
    pub fn members(&self, cluster: usize) -> &[usize] {
        &self.clusters[cluster]
    }

    /// Iterates the clusters in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.clusters.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{ChartType, Series};

    fn stacked(name: &str, group: &str) -> Series {
        Series::new(name, ChartType::StackedColumn).with_stack_group(group)
    }

    #[test]
    fn stack_groups_share_a_cluster() {
        // Two of three series stack into group "A"; the third gets its own
        // slot with a different index.
        let series = [
            stacked("s1", "A"),
            Series::new("s2", ChartType::Column),
            stacked("s3", "A"),
        ];
        let table = ClusterTable::build(&series, false);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cluster_of(0), table.cluster_of(2));
        assert_ne!(table.cluster_of(0), table.cluster_of(1));
    }

    #[test]
    fn distinct_stack_groups_get_distinct_clusters() {
        let series = [stacked("s1", "A"), stacked("s2", "B"), stacked("s3", "A")];
        let table = ClusterTable::build(&series, false);
        assert_eq!(table.len(), 2);
        assert_eq!(table.members(0), &[0, 2]);
        assert_eq!(table.members(1), &[1]);
    }

    #[test]
    fn clustered_mode_merges_side_by_side_series() {
        let series = [
            Series::new("s1", ChartType::Column),
            Series::new("s2", ChartType::Column),
            Series::new("s3", ChartType::Line),
        ];
        assert_eq!(ClusterTable::build(&series, true).len(), 2);
        assert_eq!(ClusterTable::build(&series, false).len(), 3);
    }

    #[test]
    fn side_by_side_override_opts_a_series_out() {
        let series = [
            Series::new("s1", ChartType::Column),
            Series::new("s2", ChartType::Column)
                .with_side_by_side("false")
                .unwrap(),
        ];
        let table = ClusterTable::build(&series, true);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn every_series_lands_in_exactly_one_cluster() {
        let series = [
            stacked("s1", "A"),
            Series::new("s2", ChartType::Column),
            stacked("s3", "B"),
            Series::new("s4", ChartType::Line),
            Series::new("s5", ChartType::Column),
            stacked("s6", "A"),
        ];
        let table = ClusterTable::build(&series, true);

        let mut seen = [false; 6];
        for cluster in 0..table.len() {
            for &member in table.members(cluster) {
                assert!(!seen[member], "series {member} assigned twice");
                seen[member] = true;
                assert_eq!(table.cluster_of(member), Some(cluster));
            }
        }
        assert!(seen.iter().all(|&s| s), "series omitted from the partition");
    }

    #[test]
    fn empty_series_list_yields_zero_clusters() {
        let table = ClusterTable::build(&[], true);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.cluster_of(0), None);
    }

    #[test]
    fn reordering_renumbers_but_preserves_the_partition() {
        let a = [stacked("s1", "A"), Series::new("s2", ChartType::Line), stacked("s3", "A")];
        let b = [Series::new("s2", ChartType::Line), stacked("s1", "A"), stacked("s3", "A")];
        let ta = ClusterTable::build(&a, false);
        let tb = ClusterTable::build(&b, false);
        assert_eq!(ta.len(), tb.len());
        // In `a` the stack group is seen first; in `b` the line series is.
        assert_eq!(ta.cluster_of(0), Some(0));
        assert_eq!(tb.cluster_of(1), Some(1));
    }
}
