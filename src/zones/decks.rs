//! The four piles of a match.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, InfectionCard};
use crate::core::GameRng;

use super::pile::{recycle_onto, CardPile};

/// Player and infection draw piles with their discard piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decks {
    pub player: CardPile<Card>,
    pub player_discard: CardPile<Card>,
    pub infection: CardPile<InfectionCard>,
    pub infection_discard: CardPile<InfectionCard>,
}

impl Decks {
    #[must_use]
    pub fn new(player: CardPile<Card>, infection: CardPile<InfectionCard>) -> Self {
        Self {
            player,
            infection,
            ..Self::default()
        }
    }

    /// Top infection card. An empty draw pile is refilled from the shuffled
    /// discard pile first.
    pub fn draw_infection(&mut self, rng: &mut GameRng) -> Option<InfectionCard> {
        self.refill_infection(rng);
        self.infection.draw_one()
    }

    /// Bottom infection card, refilling like [`Decks::draw_infection`].
    pub fn draw_infection_bottom(&mut self, rng: &mut GameRng) -> Option<InfectionCard> {
        self.refill_infection(rng);
        self.infection.draw_bottom()
    }

    /// Shuffle the infection discards back on top of the infection pile.
    pub fn recycle_infection(&mut self, rng: &mut GameRng) {
        recycle_onto(&mut self.infection, &mut self.infection_discard, rng);
    }

    fn refill_infection(&mut self, rng: &mut GameRng) {
        if self.infection.is_empty() && !self.infection_discard.is_empty() {
            self.recycle_infection(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CityId;
    use crate::cards::CardId;
    use crate::disease::DiseaseColor;

    fn infection(id: u16) -> InfectionCard {
        InfectionCard {
            id: CardId::new(id),
            city: CityId::new(id),
            color: DiseaseColor::Blue,
        }
    }

    #[test]
    fn test_empty_infection_pile_refills_from_discard() {
        let mut rng = GameRng::new(5);
        let mut decks = Decks::new(CardPile::new(), CardPile::new());
        decks.infection_discard.put(infection(1));
        decks.infection_discard.put(infection(2));

        let card = decks.draw_infection(&mut rng).unwrap();

        assert!([1, 2].contains(&card.id.raw()));
        assert!(decks.infection_discard.is_empty());
        assert_eq!(decks.infection.len(), 1);
    }

    #[test]
    fn test_draw_bottom_takes_oldest() {
        let mut rng = GameRng::new(5);
        let pile: CardPile<_> = (1..=3).map(infection).collect();
        let mut decks = Decks::new(CardPile::new(), pile);

        assert_eq!(decks.draw_infection_bottom(&mut rng), Some(infection(1)));
        assert_eq!(decks.draw_infection(&mut rng), Some(infection(3)));
    }

    #[test]
    fn test_all_empty() {
        let mut rng = GameRng::new(5);
        let mut decks = Decks::default();
        assert_eq!(decks.draw_infection(&mut rng), None);
    }
}
