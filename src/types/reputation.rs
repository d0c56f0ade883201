//! Reputation scoring result types

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Occurrences per raw transaction type label, in first-seen order
///
/// Serialises as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeCounts {
    counts: Vec<(String, usize)>,
}

impl TypeCounts {
    /// Add `count` occurrences of `label`; a new label goes to the end
    pub fn add(&mut self, label: &str, count: usize) {
        match self.counts.iter_mut().find(|(l, _)| l == label) {
            Some(slot) => slot.1 += count,
            None => self.counts.push((label.to_string(), count)),
        }
    }

    /// Set the count of `label`, keeping its position when already present
    pub fn insert(&mut self, label: String, count: usize) {
        match self.counts.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = count,
            None => self.counts.push((label, count)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&usize> {
        self.counts.iter().find(|(l, _)| l == label).map(|(_, c)| c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, usize)> {
        self.counts.iter()
    }

    /// Label with the highest count; the first seen wins ties
    pub fn most_common(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeCounts {
    type Item = &'a (String, usize);
    type IntoIter = std::slice::Iter<'a, (String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl FromIterator<(String, usize)> for TypeCounts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut counts = TypeCounts::default();
        for (label, count) in iter {
            counts.add(&label, count);
        }
        counts
    }
}

impl Serialize for TypeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, count) in &self.counts {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TypeCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = TypeCounts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of transaction type labels to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TypeCounts, A::Error> {
                let mut counts = TypeCounts::default();
                while let Some((label, count)) = access.next_entry::<String, usize>()? {
                    counts.add(&label, count);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Statistics derived from a whole transaction set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Distinct receivers across `pay` and `axfer` transactions
    pub unique_receivers: usize,
    /// Sum of payment amounts (algos) that carry a receiver
    pub total_volume: f64,
    /// `total_volume` divided by the count of all transactions
    pub avg_transaction_size: f64,
    /// Occurrences per raw type label
    pub transaction_types: TypeCounts,
    pub receiver_diversity_score: f64,
}

/// Additive components of a raw score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub transaction_score: f64,
    pub frequency_score: f64,
    pub decay_score: f64,
    pub asa_holding_score: f64,
    pub pattern_bonuses: f64,
}

impl ScoreComponents {
    pub fn total(&self) -> f64 {
        self.transaction_score
            + self.frequency_score
            + self.decay_score
            + self.pattern_bonuses
            + self.asa_holding_score
    }
}

/// Descriptive statistics reported alongside a score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAnalysis {
    pub total_transactions: usize,
    pub unique_receivers: usize,
    pub total_volume: f64,
    pub avg_transaction_size: f64,
    pub transaction_types: TypeCounts,
    pub asa_holdings_count: usize,
}

/// Full, explainable score of one account
///
/// A snapshot computed fresh from whatever the data source returned at call
/// time; nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Normalised score, capped at 100 and rounded to 2 decimals
    pub reputation_score: f64,
    pub raw_score: f64,
    pub breakdown: ScoreComponents,
    pub analysis: AccountAnalysis,
}

impl ScoreBreakdown {
    /// All-zero breakdown reported for accounts without transactions
    pub fn empty(asa_holdings_count: usize) -> Self {
        Self {
            analysis: AccountAnalysis {
                asa_holdings_count,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Inline failure recorded for one address of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub error: String,
    pub reputation_score: f64,
}

/// Per-address outcome of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Scored(ScoreBreakdown),
    Failed(BatchFailure),
}

impl BatchEntry {
    pub fn failed(error: impl ToString) -> Self {
        BatchEntry::Failed(BatchFailure {
            error: error.to_string(),
            reputation_score: 0.0,
        })
    }

    pub fn reputation_score(&self) -> f64 {
        match self {
            BatchEntry::Scored(score) => score.reputation_score,
            BatchEntry::Failed(failure) => failure.reputation_score,
        }
    }

    pub fn scored(&self) -> Option<&ScoreBreakdown> {
        match self {
            BatchEntry::Scored(score) => Some(score),
            BatchEntry::Failed(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, BatchEntry::Failed(_))
    }
}

/// Batch outcomes keyed by address, in first-seen input order
///
/// Serialises as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResults {
    entries: Vec<(String, BatchEntry)>,
    positions: HashMap<String, usize>,
}

impl BatchResults {
    /// Record an outcome; a repeated address keeps its first position and takes the newer entry
    pub fn insert(&mut self, address: String, entry: BatchEntry) {
        match self.positions.get(&address) {
            Some(&index) => self.entries[index].1 = entry,
            None => {
                self.positions.insert(address.clone(), self.entries.len());
                self.entries.push((address, entry));
            }
        }
    }

    pub fn get(&self, address: &str) -> Option<&BatchEntry> {
        self.positions
            .get(address)
            .map(|&index| &self.entries[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BatchEntry)> {
        self.entries.iter().map(|(a, e)| (a.as_str(), e))
    }

    /// Successfully scored accounts, in input order
    pub fn valid(&self) -> impl Iterator<Item = (&str, &ScoreBreakdown)> {
        self.iter()
            .filter_map(|(address, entry)| entry.scored().map(|s| (address, s)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BatchResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (address, entry) in &self.entries {
            map.serialize_entry(address, entry)?;
        }
        map.end()
    }
}

/// One line of a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub address: String,
    pub score: f64,
    /// 1-based position
    pub rank: usize,
}

/// Aggregates over the valid accounts of a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Addresses supplied, duplicates included
    pub total_accounts: usize,
    pub valid_accounts: usize,
    pub errors: usize,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub average_score: f64,
}

/// Ranked comparison of several accounts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountComparison {
    pub ranking: Vec<RankingEntry>,
    pub summary: ComparisonSummary,
    pub detailed_results: BatchResults,
}

/// Histogram of normalised scores
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDistribution {
    /// >= 90
    pub excellent: usize,
    /// [70, 90)
    pub good: usize,
    /// [50, 70)
    pub fair: usize,
    /// < 50
    pub poor: usize,
}

/// Cross-account reputation insights
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReputationInsights {
    pub total_accounts_analyzed: usize,
    pub high_score_accounts: usize,
    pub high_score_percentage: f64,
    pub transaction_type_distribution: TypeCounts,
    pub most_common_txn_type: Option<String>,
    pub score_distribution: ScoreDistribution,
}
