use crate::card::{Card, CardId, LandCard, LandColor};
use crate::error::ConsistencyError;

/// A land on the board and the turn it was played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedLand {
    pub land: LandCard,
    pub turn_played: u32,
}

/// Library (deck) - ordered stack of cards, index 0 is the top
#[derive(Debug, Clone, Default)]
pub struct Library {
    cards: Vec<Card>,
}

impl Library {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Library { cards }
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Draw `count` cards off the top, failing without side effects if
    /// the library is too small
    pub fn draw_n(&mut self, count: usize) -> Result<Vec<Card>, ConsistencyError> {
        if count > self.cards.len() {
            return Err(ConsistencyError::DrawPastEnd {
                requested: count,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn put_on_bottom(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn put_all_on_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Hand - cards in hand, in the order they arrived
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove_by_id(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(index))
    }

    /// Take the land with this id out of hand. Leaves the hand untouched
    /// if the card is missing or not a land.
    pub fn remove_land(&mut self, id: CardId) -> Option<LandCard> {
        let index = self
            .cards
            .iter()
            .position(|c| c.id() == id && c.is_land())?;
        match self.cards.remove(index) {
            Card::Land(land) => Some(land),
            other => {
                self.cards.insert(index, other);
                None
            }
        }
    }

    /// Empty the hand, keeping the target card (if any) aside.
    ///
    /// Returns the target and the remaining cards in hand order.
    pub fn take_all_but_target(&mut self) -> (Option<Card>, Vec<Card>) {
        let (targets, rest): (Vec<Card>, Vec<Card>) =
            self.cards.drain(..).partition(|c| c.is_target());
        (targets.into_iter().next(), rest)
    }

    /// First card in hand order matching the predicate
    pub fn find(&self, predicate: impl Fn(&Card) -> bool) -> Option<CardId> {
        self.cards.iter().find(|c| predicate(c)).map(Card::id)
    }

    pub fn count_lands_of(&self, color: LandColor) -> usize {
        self.cards.iter().filter(|c| c.is_land_of(color)).count()
    }

    pub fn count_lands(&self) -> usize {
        self.cards.iter().filter(|c| c.is_land()).count()
    }

    pub fn has_target(&self) -> bool {
        self.cards.iter().any(Card::is_target)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Board - lands committed to play. Append-only.
#[derive(Debug, Clone, Default)]
pub struct Board {
    lands: Vec<PlayedLand>,
}

impl Board {
    pub fn new() -> Self {
        Board { lands: Vec::new() }
    }

    pub fn play(&mut self, land: LandCard, turn_played: u32) {
        self.lands.push(PlayedLand { land, turn_played });
    }

    pub fn count_of(&self, color: LandColor) -> u32 {
        self.lands.iter().filter(|p| p.land.color == color).count() as u32
    }

    pub fn size(&self) -> usize {
        self.lands.len()
    }

    pub fn lands(&self) -> &[PlayedLand] {
        &self.lands
    }
}
