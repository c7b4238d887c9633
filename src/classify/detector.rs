use super::analysis::HandAnalysis;
use crate::classify::HandType;

/// Strategy pattern: each category detector knows how to recognize its hand
/// shape. Exclusivity between overlapping shapes (a full house also contains
/// a three of a kind and a pair) comes solely from the chain order below,
/// never from the detectors themselves.
pub trait CategoryDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool;
    fn category(&self) -> HandType;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight && analysis.is_flush
    }

    fn category(&self) -> HandType {
        HandType::StraightFlush
    }
}

/// Four of a Kind: four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_counts.has_count(4)
    }

    fn category(&self) -> HandType {
        HandType::FourOfAKind
    }
}

/// Full House: three cards of one rank plus a pair of another
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_counts.has_full_house()
    }

    fn category(&self) -> HandType {
        HandType::FullHouse
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush
    }

    fn category(&self) -> HandType {
        HandType::Flush
    }
}

/// Straight: five consecutive ranks
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight
    }

    fn category(&self) -> HandType {
        HandType::Straight
    }
}

/// Three of a Kind: three cards of the same rank.
/// Also true of full houses; those are claimed earlier in the chain.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_counts.has_count(3)
    }

    fn category(&self) -> HandType {
        HandType::ThreeOfAKind
    }
}

/// Pair: two cards of the same rank.
/// Also true of full houses; those are claimed earlier in the chain.
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_counts.has_count(2)
    }

    fn category(&self) -> HandType {
        HandType::Pair
    }
}

/// High Card: no matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn matches(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn category(&self) -> HandType {
        HandType::HighCard
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 8] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &PairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn straight_flush_detector() {
        let cards = [
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(StraightFlushDetector.matches(&analysis));
        assert_eq!(StraightFlushDetector.category(), HandType::StraightFlush);
    }

    #[test]
    fn four_of_a_kind_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FourOfAKindDetector.matches(&analysis));
        assert!(!FullHouseDetector.matches(&analysis));
    }

    #[test]
    fn full_house_detector() {
        let cards = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FullHouseDetector.matches(&analysis));
    }

    #[test]
    fn full_house_also_satisfies_lower_detectors() {
        // Overlap is intended; the chain order keeps the categories exclusive.
        let cards = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FullHouseDetector.matches(&analysis));
        assert!(ThreeOfAKindDetector.matches(&analysis));
        assert!(PairDetector.matches(&analysis));
    }

    #[test]
    fn flush_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FlushDetector.matches(&analysis));
        assert!(!StraightFlushDetector.matches(&analysis));
    }

    #[test]
    fn straight_detector() {
        let cards = [
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Five, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(StraightDetector.matches(&analysis));
        assert!(!StraightFlushDetector.matches(&analysis));
    }

    #[test]
    fn pair_detector() {
        let cards = [
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Three, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(PairDetector.matches(&analysis));
        assert!(!ThreeOfAKindDetector.matches(&analysis));
    }

    #[test]
    fn high_card_detector_always_matches() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(HighCardDetector.matches(&analysis));
    }

    #[test]
    fn detector_priority_straight_flush_over_flush_and_straight() {
        let cards = [
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        // All three match; the chain order picks straight flush first.
        assert!(StraightFlushDetector.matches(&analysis));
        assert!(FlushDetector.matches(&analysis));
        assert!(StraightDetector.matches(&analysis));
    }
}
