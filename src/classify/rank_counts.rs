use crate::cards::{Card, Rank};

/// Multiset of the ranks held in a hand: each distinct rank with its
/// occurrence count, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    groups: Vec<(Rank, u8)>,
}

impl RankCounts {
    /// Count rank occurrences across the given cards. Built fresh per query;
    /// nothing is cached between classifications.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let mut groups = Vec::new();
        for rank in Rank::ALL.iter().copied() {
            let count = counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// True iff some rank occurs exactly `n` times.
    pub fn has_count(&self, n: u8) -> bool {
        self.groups.iter().any(|(_, count)| *count == n)
    }

    /// True iff the multiplicities contain both a 3 and a 2.
    pub fn has_full_house(&self) -> bool {
        self.has_count(3) && self.has_count(2)
    }

    /// Returns the internal groups for debugging/testing.
    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
