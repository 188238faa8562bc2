//! Card types.
//!
//! Three categories of card exist:
//! - **Player cards**: usually name a city and carry its color
//! - **Infection cards**: name the city to infect and the disease to place
//! - **Epidemic cards**: shuffled into the player deck at setup
//!
//! Cards are immutable once created. Ids are unique across all categories.

use serde::{Deserialize, Serialize};

use crate::board::{City, CityBoard, CityId};
use crate::core::{GameError, Result};
use crate::disease::DiseaseColor;

/// Unique card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card that can sit in a player's hand.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerCard {
    pub id: CardId,
    pub name: String,
    pub city: Option<CityId>,
    pub color: Option<DiseaseColor>,
}

impl PlayerCard {
    /// The city card for `city`.
    pub fn for_city(id: CardId, city: &City) -> Self {
        Self {
            id,
            name: city.name.clone(),
            city: Some(city.id),
            color: Some(city.color),
        }
    }

    /// Does this card name `city`?
    #[must_use]
    pub fn is_city(&self, city: CityId) -> bool {
        self.city == Some(city)
    }

    #[must_use]
    pub fn is_color(&self, color: DiseaseColor) -> bool {
        self.color == Some(color)
    }
}

/// A card from the infection deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InfectionCard {
    pub id: CardId,
    pub city: CityId,
    pub color: DiseaseColor,
}

impl InfectionCard {
    pub fn for_city(id: CardId, city: &City) -> Self {
        Self {
            id,
            city: city.id,
            color: city.color,
        }
    }
}

/// Any card.
///
/// The player deck holds `Player` and `Epidemic` cards; the infection deck
/// holds `InfectionCard`s directly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Player(PlayerCard),
    Infection(InfectionCard),
    Epidemic(CardId),
}

impl Card {
    #[must_use]
    pub fn id(&self) -> CardId {
        match self {
            Card::Player(card) => card.id,
            Card::Infection(card) => card.id,
            Card::Epidemic(id) => *id,
        }
    }

    #[must_use]
    pub fn is_epidemic(&self) -> bool {
        matches!(self, Card::Epidemic(_))
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Player(_) => CardKind::Player,
            Card::Infection(_) => CardKind::Infection,
            Card::Epidemic(_) => CardKind::Epidemic,
        }
    }

    /// Build a card from a loader record, resolving city names on `board`.
    ///
    /// A missing color defaults to the named city's color. Infection cards
    /// must name a city.
    pub fn from_record(board: &CityBoard, record: &CardRecord) -> Result<Self> {
        let id = CardId::new(record.id);
        let city = match &record.city {
            Some(name) => Some(board.city(board.id(name)?)),
            None => None,
        };
        let color = record.disease_type.or(city.map(|c| c.color));

        match record.kind {
            CardKind::Player => Ok(Card::Player(PlayerCard {
                id,
                name: city.map_or_else(|| format!("card {}", record.id), |c| c.name.clone()),
                city: city.map(|c| c.id),
                color,
            })),
            CardKind::Infection => {
                let city = city.ok_or_else(|| {
                    GameError::rule(format!("infection card {} names no city", record.id))
                })?;
                Ok(Card::Infection(InfectionCard {
                    id,
                    city: city.id,
                    color: color.unwrap_or(city.color),
                }))
            }
            CardKind::Epidemic => Ok(Card::Epidemic(id)),
        }
    }
}

/// Card category tag used by loader records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Player,
    Infection,
    Epidemic,
}

/// A card as supplied by a data loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: u16,
    #[serde(rename = "type")]
    pub kind: CardKind,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "diseaseType", alias = "disease_type")]
    pub disease_type: Option<DiseaseColor>,
}

/// One city card per city, ids `0..board.len()`.
#[must_use]
pub fn standard_player_cards(board: &CityBoard) -> Vec<PlayerCard> {
    board
        .iter()
        .map(|city| PlayerCard::for_city(CardId::new(city.id.0), city))
        .collect()
}

/// One infection card per city, ids following the player cards.
#[must_use]
pub fn standard_infection_cards(board: &CityBoard) -> Vec<InfectionCard> {
    let offset = board.len() as u16;
    board
        .iter()
        .map(|city| InfectionCard::for_city(CardId::new(offset + city.id.0), city))
        .collect()
}

/// `count` epidemic cards with ids starting at `first_id`.
#[must_use]
pub fn epidemic_cards(count: usize, first_id: u16) -> Vec<Card> {
    (0..count as u16)
        .map(|i| Card::Epidemic(CardId::new(first_id + i)))
        .collect()
}
