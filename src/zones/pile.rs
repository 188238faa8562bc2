//! Card piles: draw decks and discard piles.
//!
//! A `CardPile` is an ordered sequence where index 0 is the bottom and the
//! last element is the top. It supports:
//! - Drawing from the top (and, for epidemics, from the bottom)
//! - Uniform shuffling with the match RNG
//! - Splitting into `n` contiguous piles and merging piles back together
//!
//! Splitting and merging are how epidemic cards are seeded at setup and how
//! the infection discard pile is recycled after an epidemic.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};

/// Ordered pile of cards of one category.
///
/// ## Usage
///
/// ```
/// use pandemic_sim::zones::CardPile;
///
/// let mut pile = CardPile::from_cards(vec![1, 2, 3]);
/// pile.put(4);
///
/// // Top of the pile comes out first
/// assert_eq!(pile.draw(2), vec![4, 3]);
///
/// // Shortages are not errors
/// assert_eq!(pile.draw(5), vec![2, 1]);
/// assert!(pile.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPile<T> {
    /// Bottom to top.
    cards: Vec<T>,
}

impl<T> Default for CardPile<T> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<T> CardPile<T> {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<T>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look at the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.cards.last()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cards.iter()
    }

    /// Remove up to `n` cards from the top, topmost first.
    ///
    /// Returns fewer than `n` cards if the pile runs out; callers check the
    /// returned length.
    pub fn draw(&mut self, n: usize) -> Vec<T> {
        let keep = self.cards.len().saturating_sub(n);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    /// Remove the top card.
    pub fn draw_one(&mut self) -> Option<T> {
        self.cards.pop()
    }

    /// Remove the bottom card.
    pub fn draw_bottom(&mut self) -> Option<T> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Push a card onto the top.
    pub fn put(&mut self, card: T) {
        self.cards.push(card);
    }

    /// Uniformly permute the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Partition into exactly `n` contiguous piles.
    ///
    /// Each pile holds `ceil(len / n)` cards taken in order from the bottom,
    /// except the last non-empty one which holds the remainder. When there are
    /// too few cards the trailing piles are empty. Fails if `n` is zero.
    pub fn split(self, n: usize) -> Result<Vec<CardPile<T>>> {
        if n == 0 {
            return Err(GameError::rule("cannot split a pile into zero parts"));
        }

        let chunk = self.cards.len().div_ceil(n);
        let mut cards = self.cards.into_iter();
        let piles = (0..n)
            .map(|_| CardPile::from_cards(cards.by_ref().take(chunk).collect()))
            .collect();

        Ok(piles)
    }

    /// Drain `piles` into one pile.
    ///
    /// Sources are stacked in argument order: the first ends up at the
    /// bottom, the last on top. Order within each source is preserved.
    pub fn merge(piles: impl IntoIterator<Item = CardPile<T>>) -> CardPile<T> {
        let mut merged = Vec::new();
        for pile in piles {
            merged.extend(pile.cards);
        }
        CardPile::from_cards(merged)
    }
}

impl<T> FromIterator<T> for CardPile<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

/// Seed one epidemic into each of `epidemics.len()` segments of `pile`.
///
/// The pile is split into as many parts as there are epidemics, one epidemic
/// goes into each part, each part is shuffled on its own, and the parts are
/// merged back in split order. Every segment of the resulting deck therefore
/// surfaces exactly one epidemic.
pub fn seed_epidemics<T>(pile: CardPile<T>, epidemics: Vec<T>, rng: &mut GameRng) -> Result<CardPile<T>> {
    if epidemics.is_empty() {
        return Ok(pile);
    }

    let mut parts = pile.split(epidemics.len())?;
    for (part, epidemic) in parts.iter_mut().zip(epidemics) {
        part.put(epidemic);
        part.shuffle(rng);
    }

    Ok(CardPile::merge(parts))
}

/// Shuffle `discard` and stack it on top of `draw`, leaving `discard` empty.
///
/// Recycled cards are drawn before anything that was left in `draw`.
pub fn recycle_onto<T>(draw: &mut CardPile<T>, discard: &mut CardPile<T>, rng: &mut GameRng) {
    discard.shuffle(rng);
    let remaining = std::mem::take(draw);
    let recycled = std::mem::take(discard);
    *draw = CardPile::merge([remaining, recycled]);
}
