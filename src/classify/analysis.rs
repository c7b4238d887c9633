use super::rank_counts::RankCounts;
use crate::cards::{Card, Rank, Suit};
use std::collections::HashSet;

/// Pre-computed analysis of a complete 5-card hand.
/// Built once per classification and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_counts: RankCounts,
    pub is_flush: bool,
    pub is_straight: bool,
}

impl HandAnalysis {
    /// Analyze a 5-card hand, computing all properties needed for
    /// classification.
    pub fn new(cards: &[Card; 5]) -> Self {
        let ranks = [
            cards[0].rank(),
            cards[1].rank(),
            cards[2].rank(),
            cards[3].rank(),
            cards[4].rank(),
        ];

        Self {
            rank_counts: RankCounts::from_cards(cards),
            is_flush: all_one_suit(cards),
            is_straight: is_rank_run(&ranks),
        }
    }
}

/// A flush holds exactly one distinct suit across all five cards.
fn all_one_suit(cards: &[Card; 5]) -> bool {
    let suits: HashSet<Suit> = cards.iter().map(|c| c.suit()).collect();
    suits.len() == 1
}

/// Five ranks form a straight iff, sorted, they are consecutive with no gaps.
/// Ace only plays high: A-2-3-4-5 is not a run and there is no wraparound.
fn is_rank_run(ranks: &[Rank; 5]) -> bool {
    let mut sorted = *ranks;
    sorted.sort();
    (0..4).all(|i| sorted[i].value() + 1 == sorted[i + 1].value())
}
