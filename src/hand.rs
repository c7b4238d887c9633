use crate::cards::{parse_cards, Card, CardParseError};
use crate::classify::analysis::HandAnalysis;
use crate::classify::rank_counts::RankCounts;
use crate::classify::{classify_five, HandType};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

/// A player's hand: up to five distinct cards in insertion order.
///
/// Mutations never fail. `add` and `remove` are silent no-ops when their
/// precondition does not hold; callers query `can_add`/`can_remove` first
/// when they need to know the outcome in advance.
///
/// ```
/// use pokerhand::cards::{Card, Rank, Suit};
/// use pokerhand::classify::HandType;
/// use pokerhand::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(Card::new(Rank::King, Suit::Hearts));
/// hand.add(Card::new(Rank::King, Suit::Hearts)); // duplicate, ignored
/// assert_eq!(hand.len(), 1);
/// assert_eq!(hand.hand_type(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `card` may be added: fewer than five cards held and no held
    /// card with the same rank and suit. No side effects.
    pub fn can_add(&self, card: Card) -> bool {
        self.cards.len() < HAND_SIZE && !self.cards.contains(&card)
    }

    /// Append `card` if `can_add` allows it; otherwise do nothing.
    pub fn add(&mut self, card: Card) {
        if self.can_add(card) {
            self.cards.push(card);
        }
    }

    /// Whether `card` is currently held (by value equality).
    pub fn can_remove(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove the first held card equal to `card`, if any; otherwise do
    /// nothing.
    pub fn remove(&mut self, card: Card) {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
        }
    }

    /// The held cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The held cards as a fixed array, only when the hand is complete.
    fn complete(&self) -> Option<[Card; 5]> {
        if self.cards.len() == HAND_SIZE {
            Some([self.cards[0], self.cards[1], self.cards[2], self.cards[3], self.cards[4]])
        } else {
            None
        }
    }

    fn analysis(&self) -> Option<HandAnalysis> {
        self.complete().as_ref().map(HandAnalysis::new)
    }

    fn counts(&self) -> Option<RankCounts> {
        self.complete().map(|cards| RankCounts::from_cards(&cards))
    }

    /// All five ranks form an unbroken run. Ace only plays high.
    /// False unless the hand is complete.
    pub fn is_straight(&self) -> bool {
        self.analysis().map_or(false, |a| a.is_straight)
    }

    /// All five cards share one suit. False unless the hand is complete.
    pub fn is_flush(&self) -> bool {
        self.analysis().map_or(false, |a| a.is_flush)
    }

    /// Both a straight and a flush.
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// Three cards of one rank plus a pair of another.
    pub fn is_full_house(&self) -> bool {
        self.counts().map_or(false, |c| c.has_full_house())
    }

    /// Four cards of the same rank.
    pub fn is_four_of_a_kind(&self) -> bool {
        self.counts().map_or(false, |c| c.has_count(4))
    }

    /// Three cards of the same rank. True of full houses too; only the
    /// classification order in `hand_type` keeps the categories exclusive.
    pub fn is_three_of_a_kind(&self) -> bool {
        self.counts().map_or(false, |c| c.has_count(3))
    }

    /// Two cards of the same rank. True of full houses too.
    pub fn is_pair(&self) -> bool {
        self.counts().map_or(false, |c| c.has_count(2))
    }

    /// The hand's poker category, or `None` while fewer than five cards are
    /// held. An incomplete hand has no classification; that is not an error.
    ///
    /// ```
    /// use pokerhand::cards::{Card, Rank, Suit};
    /// use pokerhand::classify::HandType;
    /// use pokerhand::hand::Hand;
    ///
    /// let mut hand = Hand::new();
    /// for card in [
    ///     Card::new(Rank::Two, Suit::Diamonds),
    ///     Card::new(Rank::Four, Suit::Spades),
    ///     Card::new(Rank::Five, Suit::Clubs),
    ///     Card::new(Rank::Three, Suit::Diamonds),
    ///     Card::new(Rank::Six, Suit::Hearts),
    /// ] {
    ///     hand.add(card);
    /// }
    /// assert_eq!(hand.hand_type(), Some(HandType::Straight));
    /// ```
    pub fn hand_type(&self) -> Option<HandType> {
        self.complete().map(|cards| classify_five(&cards))
    }
}

/// Describes the hand. A complete hand names its category:
///
/// `I got a straight with cards: 2 of diamonds, 4 of spades, 5 of clubs, 3 of diamonds, 6 of hearts`
///
/// An incomplete hand lists whatever it holds:
///
/// `I'm holding 2 of diamonds, 4 of spades`
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list =
            self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
        match self.hand_type() {
            Some(hand_type) => write!(f, "I got a {hand_type} with cards: {list}"),
            None => write!(f, "I'm holding {list}"),
        }
    }
}

/// Parse a comma-separated card list into a hand. Parse failures are errors;
/// cards the hand would reject (duplicates, sixth card onward) are dropped
/// silently, per the admission contract.
impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        let mut hand = Hand::new();
        for card in cards {
            hand.add(card);
        }
        Ok(hand)
    }
}
