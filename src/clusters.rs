//! Predefined geographic cluster catalog and quota allocation
//!
//! Clusters are named sub-regions of a destination with a style profile,
//! used to bias collection: the scheduler asks each provider for places per
//! cluster, with per-cluster quotas proportional to how well the cluster
//! matches the user's style descriptor.

use tracing::{debug, info};

use crate::models::{Budget, Cluster};

/// Immutable registry of predefined clusters
///
/// Built once at startup and injected into whichever components need it;
/// reads are lock-free and safe from any number of threads.
#[derive(Debug, Clone)]
pub struct ClusterCatalog {
    clusters: Vec<Cluster>,
}

impl ClusterCatalog {
    /// Build a catalog from explicit entries, keeping insertion order
    pub fn new(clusters: Vec<Cluster>) -> Self {
        info!(count = clusters.len(), "cluster registry initialized");
        Self { clusters }
    }

    /// The predefined Seoul catalog
    pub fn seoul() -> Self {
        Self::new(vec![
            cluster(
                "hongdae",
                "Hongdae",
                37.5563,
                126.9234,
                2000,
                &["young", "active", "culture", "art"],
                "20s-30s",
                Budget::Medium,
                &["indie culture", "street performance", "club", "cafe"],
                "Youth culture, cafes, indie music scene",
            ),
            cluster(
                "gangnam",
                "Gangnam",
                37.5172,
                127.0473,
                2000,
                &["luxury", "shopping", "business"],
                "30s-40s",
                Budget::High,
                &["department store", "fine dining", "entertainment"],
                "Shopping, luxury, business district",
            ),
            cluster(
                "sungsu",
                "Seongsu",
                37.5446,
                127.0559,
                2000,
                &["trendy", "hip", "creative"],
                "20s-30s",
                Budget::Medium,
                &["cafe", "pop-up store", "gallery", "workshop"],
                "Trendy cafes and pop-up stores",
            ),
            cluster(
                "jongno",
                "Jongno",
                37.5735,
                126.9788,
                2000,
                &["tradition", "history", "culture"],
                "40s-50s",
                Budget::Medium,
                &["palace", "museum", "traditional market", "hanok"],
                "Tradition, history, cultural heritage",
            ),
            cluster(
                "itaewon",
                "Itaewon",
                37.5347,
                126.9947,
                2000,
                &["international", "diversity", "nightlife"],
                "20s-40s",
                Budget::Medium,
                &["global food", "club", "bar", "shopping"],
                "International food and nightlife",
            ),
            cluster(
                "bukchon",
                "Bukchon / Samcheong-dong",
                37.5838,
                126.9822,
                2000,
                &["tradition", "art", "healing"],
                "30s-50s",
                Budget::Medium,
                &["hanok", "gallery", "cafe", "workshop"],
                "Hanok village, galleries, quiet cafes",
            ),
        ])
    }

    /// Defensive copy of the full registry
    pub fn all(&self) -> Vec<Cluster> {
        self.clusters.clone()
    }

    /// Look up a single cluster by name
    pub fn get(&self, name: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Match scores for every cluster against a free-text style descriptor
    ///
    /// Returns (name, score) pairs sorted by descending score; ties keep
    /// registry insertion order.
    pub fn cluster_scores(&self, descriptor: &str) -> Vec<(String, f64)> {
        let mut scores: Vec<(String, f64)> = self
            .clusters
            .iter()
            .map(|c| (c.name.clone(), match_score(c, descriptor)))
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }

    /// Distribute a total place count across clusters proportionally to score
    ///
    /// Quotas are `round(total * score / score_sum)`. When every score is
    /// zero the total is split evenly instead, with the integer-division
    /// remainder going to clusters earliest in registry order. The quota sum
    /// stays within `clusters - 1` of the requested total.
    pub fn place_distribution(
        &self,
        scores: &[(String, f64)],
        total_places: usize,
    ) -> Vec<(String, usize)> {
        if scores.is_empty() {
            return Vec::new();
        }

        let score_sum: f64 = scores.iter().map(|(_, s)| s).sum();

        if score_sum > 0.0 {
            return scores
                .iter()
                .map(|(name, score)| {
                    let quota = (total_places as f64 * score / score_sum).round() as usize;
                    debug!(cluster = %name, quota, "proportional quota");
                    (name.clone(), quota)
                })
                .collect();
        }

        // Zero-sum fallback: even split, remainder to earlier registry entries
        let count = scores.len();
        let base = total_places / count;
        let remainder = total_places % count;

        let mut by_registry: Vec<usize> = (0..count).collect();
        by_registry.sort_by_key(|&i| self.registry_index(&scores[i].0));

        let mut quotas = vec![base; count];
        for &i in by_registry.iter().take(remainder) {
            quotas[i] += 1;
        }

        scores
            .iter()
            .zip(quotas)
            .map(|((name, _), quota)| (name.clone(), quota))
            .collect()
    }

    fn registry_index(&self, name: &str) -> usize {
        self.clusters
            .iter()
            .position(|c| c.name == name)
            .unwrap_or(usize::MAX)
    }
}

/// Match score between a cluster's style tags and a user style descriptor
///
/// The share of the cluster's tags appearing as case-insensitive substrings
/// of the descriptor; 0 for a cluster without tags.
pub fn match_score(cluster: &Cluster, descriptor: &str) -> f64 {
    if cluster.styles.is_empty() {
        return 0.0;
    }

    let descriptor = descriptor.to_lowercase();
    let hits = cluster
        .styles
        .iter()
        .filter(|tag| descriptor.contains(&tag.to_lowercase()))
        .count();

    hits as f64 / cluster.styles.len() as f64
}

#[allow(clippy::too_many_arguments)]
fn cluster(
    name: &str,
    display_name: &str,
    center_lat: f64,
    center_lng: f64,
    radius_m: u32,
    styles: &[&str],
    age_group: &str,
    budget: Budget,
    characteristics: &[&str],
    description: &str,
) -> Cluster {
    Cluster {
        name: name.to_string(),
        display_name: display_name.to_string(),
        center_lat,
        center_lng,
        radius_m,
        styles: styles.iter().map(|s| s.to_string()).collect(),
        age_group: age_group.to_string(),
        budget,
        characteristics: characteristics.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}
