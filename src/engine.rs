//! The prioritization engine.
//!
//! Owns one session's scored items in insertion order and keeps their ranks
//! in step with their scores. Every mutation recomputes the full ranking
//! before it returns, so ranks always form a dense `1..=N` sequence.

use crate::error::{Result, VibefyError};
use crate::model::{ItemType, Quadrant, Score, ScoreInput, ScoredItem, ScoringMethod};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How value/effort items take part in a ranking shared with RICE and
/// custom scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Rank by value per unit of effort.
    #[default]
    Ratio,
    /// Rank as 0, below every positive score, in insertion order.
    Zero,
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingStrategy::Ratio => write!(f, "ratio"),
            RankingStrategy::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for RankingStrategy {
    type Err = VibefyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ratio" => Ok(RankingStrategy::Ratio),
            "zero" => Ok(RankingStrategy::Zero),
            _ => Err(VibefyError::Parse(format!("Invalid ranking strategy: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrioritizationEngine {
    items: Vec<ScoredItem>,
    strategy: RankingStrategy,
}

impl PrioritizationEngine {
    pub fn new(strategy: RankingStrategy) -> Self {
        Self {
            items: Vec::new(),
            strategy,
        }
    }

    /// Rebuild an engine from a saved item list.
    ///
    /// Derived fields are checked against their inputs and ranks are
    /// recomputed rather than trusted.
    pub fn from_items(items: Vec<ScoredItem>, strategy: RankingStrategy) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for item in &items {
                validation::validate_id(&item.id)?;
                if !seen.insert(item.id.as_str()) {
                    return Err(VibefyError::Storage(format!(
                        "Duplicate item id: {}",
                        item.id
                    )));
                }
                if !item.score.is_consistent() {
                    tracing::warn!(id = %item.id, "Rejecting inconsistent score");
                    return Err(VibefyError::InconsistentScore(item.id.clone()));
                }
            }
        }

        let mut engine = Self { items, strategy };
        engine.recalculate_ranks();
        Ok(engine)
    }

    pub fn strategy(&self) -> RankingStrategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[ScoredItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ScoredItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Insertion index of an item.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Create or replace the score of `id`.
    ///
    /// The payload must belong to `method`. A rescored item keeps its
    /// insertion slot; its previous payload is dropped, not merged. On error
    /// nothing changes.
    pub fn score_item(
        &mut self,
        id: &str,
        item_type: ItemType,
        method: ScoringMethod,
        payload: ScoreInput,
    ) -> Result<&ScoredItem> {
        validation::validate_id(id)?;
        payload.expect_method(method)?;
        validation::validate_input(&payload)?;
        let score = payload.compute()?;

        tracing::debug!(id = %id, method = %method, "Scoring item");
        let index = self.put(id, item_type, score);
        self.recalculate_ranks();
        Ok(&self.items[index])
    }

    /// Drop an item into `quadrant` using the quadrant's representative
    /// value/effort pair. The item must already exist.
    pub fn move_item(&mut self, id: &str, quadrant: Quadrant) -> Result<&ScoredItem> {
        let item_type = self
            .get(id)
            .map(|item| item.item_type)
            .ok_or_else(|| VibefyError::UnknownItem(id.to_string()))?;

        tracing::debug!(id = %id, quadrant = %quadrant, "Moving item");
        let (value, effort) = quadrant.representative();
        self.score_item(
            id,
            item_type,
            ScoringMethod::ValueEffort,
            ScoreInput::ValueEffort { value, effort },
        )
    }

    pub fn remove_item(&mut self, id: &str) -> Result<ScoredItem> {
        let index = self
            .position(id)
            .ok_or_else(|| VibefyError::UnknownItem(id.to_string()))?;

        tracing::debug!(id = %id, "Removing item");
        let mut removed = self.items.remove(index);
        removed.rank = 0;
        self.recalculate_ranks();
        Ok(removed)
    }

    /// Put a previously captured item back, at `position` if it is new.
    pub fn restore_item(&mut self, item: ScoredItem, position: usize) -> Result<()> {
        validation::validate_id(&item.id)?;
        if !item.score.is_consistent() {
            return Err(VibefyError::InconsistentScore(item.id));
        }
        match self.position(&item.id) {
            Some(index) => self.items[index] = item,
            None => {
                let index = position.min(self.items.len());
                self.items.insert(index, item);
            }
        }
        self.recalculate_ranks();
        Ok(())
    }

    /// Swap in a whole item set, validated like [`Self::from_items`].
    pub fn replace_all(&mut self, items: Vec<ScoredItem>) -> Result<()> {
        let rebuilt = Self::from_items(items, self.strategy)?;
        self.items = rebuilt.items;
        Ok(())
    }

    /// The scalar an item is ranked by under the current strategy.
    pub fn ranking_scalar(&self, item: &ScoredItem) -> f64 {
        match &item.score {
            Score::Rice(rice) => rice.score,
            Score::Custom(value) => *value,
            Score::ValueEffort(matrix) => match self.strategy {
                RankingStrategy::Ratio => matrix.ratio(),
                RankingStrategy::Zero => 0.0,
            },
        }
    }

    /// Reassign ranks across the whole set: descending scalar, ties keep
    /// insertion order.
    pub fn recalculate_ranks(&mut self) {
        let mut order: Vec<(usize, f64)> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (index, self.ranking_scalar(item)))
            .collect();
        // sort_by is stable, which is what keeps tied items in input order
        order.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (rank, (index, _)) in order.into_iter().enumerate() {
            self.items[index].rank = rank + 1;
        }
        tracing::debug!(items = self.items.len(), strategy = %self.strategy, "Recalculated ranks");
    }

    /// Items in rank order.
    pub fn ranked(&self) -> Vec<&ScoredItem> {
        let mut ranked: Vec<&ScoredItem> = self.items.iter().collect();
        ranked.sort_by_key(|item| item.rank);
        ranked
    }

    /// The best `limit` items by rank. A limit of 0 yields nothing.
    pub fn get_top_items(&self, limit: usize) -> Vec<&ScoredItem> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }

    /// Value/effort items in `quadrant`, in insertion order.
    pub fn get_items_by_quadrant(&self, quadrant: Quadrant) -> Vec<&ScoredItem> {
        self.items
            .iter()
            .filter(|item| item.quadrant() == Some(quadrant))
            .collect()
    }

    fn put(&mut self, id: &str, item_type: ItemType, score: Score) -> usize {
        match self.position(id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.item_type = item_type;
                item.score = score;
                index
            }
            None => {
                self.items
                    .push(ScoredItem::new(id.to_string(), item_type, score));
                self.items.len() - 1
            }
        }
    }
}
