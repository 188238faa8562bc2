//! Per-player turn state machine.
//!
//! A `PlayerTurn` holds one player's pawn location, hand and stage, plus the
//! counters that bound a turn: four actions, two player cards, one round of
//! infection draws. Every operation checks its stage first and validates
//! completely before mutating anything, so a failed operation leaves the
//! player, the board and the piles as they were.
//!
//! Shared match state is lent in through a [`TurnContext`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{CityBoard, CityId};
use crate::cards::{Card, CardId, InfectionCard, PlayerCard};
use crate::core::config::{
    ACTIONS_PER_TURN, EPIDEMIC_CUBES, HAND_LIMIT, MAX_CUBES_PER_CITY, MAX_RESEARCH_STATIONS,
    PLAYER_CARDS_PER_TURN,
};
use crate::core::{GameError, GameRng, LossReason, MatchOutcome, PlayerId, Result, Role, ShareDirection};
use crate::disease::{DiseaseColor, DiseaseEngine, DiseaseState};
use crate::events::{EventQueue, GameEvent};
use crate::zones::Decks;

use super::stage::Stage;

/// Mutable match state lent to a turn operation.
pub struct TurnContext<'a> {
    pub board: &'a mut CityBoard,
    pub disease: &'a mut DiseaseEngine,
    pub decks: &'a mut Decks,
    pub events: &'a mut EventQueue,
    pub rng: &'a mut GameRng,
}

impl<'a> TurnContext<'a> {
    pub fn new(
        board: &'a mut CityBoard,
        disease: &'a mut DiseaseEngine,
        decks: &'a mut Decks,
        events: &'a mut EventQueue,
        rng: &'a mut GameRng,
    ) -> Self {
        Self {
            board,
            disease,
            decks,
            events,
            rng,
        }
    }
}

/// One player's state within the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTurn {
    id: PlayerId,
    name: String,
    role: Role,
    location: CityId,
    hand: Vec<PlayerCard>,
    stage: Stage,
    actions_taken: u8,
    cards_drawn: u8,
    infection_drawn: bool,
}

impl PlayerTurn {
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role, location: CityId) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            location,
            hand: Vec::new(),
            stage: Stage::Inactive,
            actions_taken: 0,
            cards_drawn: 0,
            infection_drawn: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn location(&self) -> CityId {
        self.location
    }

    #[must_use]
    pub fn hand(&self) -> &[PlayerCard] {
        &self.hand
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn actions_taken(&self) -> u8 {
        self.actions_taken
    }

    #[must_use]
    pub fn actions_remaining(&self) -> u8 {
        ACTIONS_PER_TURN.saturating_sub(self.actions_taken)
    }

    #[must_use]
    pub fn cards_drawn(&self) -> u8 {
        self.cards_drawn
    }

    #[must_use]
    pub fn infection_drawn(&self) -> bool {
        self.infection_drawn
    }

    /// Holding more cards than the hand limit allows.
    #[must_use]
    pub fn over_hand_limit(&self) -> bool {
        self.hand.len() > HAND_LIMIT
    }

    #[must_use]
    pub fn holds_city_card(&self, city: CityId) -> bool {
        self.hand.iter().any(|card| card.is_city(city))
    }

    /// Cards of `color` in hand.
    #[must_use]
    pub fn count_color(&self, color: DiseaseColor) -> usize {
        self.hand.iter().filter(|card| card.is_color(color)).count()
    }

    pub(crate) fn place_pawn(&mut self, city: CityId) {
        self.location = city;
    }

    pub(crate) fn receive(&mut self, card: PlayerCard) {
        self.hand.push(card);
    }

    // === Stage transitions ===

    /// Inactive -> Action. Resets the per-turn counters.
    pub fn start_turn(&mut self) -> Result<()> {
        self.expect_stage(Stage::Inactive)?;
        self.actions_taken = 0;
        self.cards_drawn = 0;
        self.infection_drawn = false;
        self.stage = self.stage.next();
        debug!(player = %self.id, "action stage");
        Ok(())
    }

    /// Action -> Draw, once every action has been spent.
    pub fn finish_action_stage(&mut self) -> Result<()> {
        self.expect_stage(Stage::Action)?;
        if self.actions_taken < ACTIONS_PER_TURN {
            return Err(GameError::state(format!(
                "{} has {} actions left",
                self.id,
                self.actions_remaining()
            )));
        }
        self.stage = self.stage.next();
        Ok(())
    }

    /// Draw -> Infector, once both player cards have been drawn.
    pub fn finish_draw_stage(&mut self) -> Result<()> {
        self.expect_stage(Stage::Draw)?;
        if self.cards_drawn < PLAYER_CARDS_PER_TURN {
            return Err(GameError::state(format!(
                "{} has drawn {} of {} player cards",
                self.id, self.cards_drawn, PLAYER_CARDS_PER_TURN
            )));
        }
        self.stage = self.stage.next();
        Ok(())
    }

    /// Infector -> Inactive, once infection cards have been drawn and the
    /// hand is back within the limit.
    pub fn end_turn(&mut self) -> Result<()> {
        self.expect_stage(Stage::Infector)?;
        if !self.infection_drawn {
            return Err(GameError::state(format!("{} has not drawn infection cards", self.id)));
        }
        self.check_hand_limit()?;
        self.stage = self.stage.next();
        Ok(())
    }

    // === Actions ===

    /// Move to an adjacent city.
    pub fn drive(&mut self, ctx: &mut TurnContext<'_>, to: CityId) -> Result<()> {
        self.check_action()?;
        self.check_destination(ctx.board, to)?;
        if !ctx.board.are_adjacent(self.location, to) {
            return Err(GameError::invalid(format!(
                "{} is not adjacent to {}",
                ctx.board.name(to),
                ctx.board.name(self.location)
            )));
        }

        self.move_to(ctx.board, to);
        self.spend_action();
        Ok(())
    }

    /// Discard the destination's card to fly there.
    pub fn direct_flight(&mut self, ctx: &mut TurnContext<'_>, to: CityId) -> Result<()> {
        self.check_action()?;
        self.check_destination(ctx.board, to)?;
        let index = self.city_card_index(ctx.board, to)?;

        self.discard_at(ctx, index);
        self.move_to(ctx.board, to);
        self.spend_action();
        Ok(())
    }

    /// Discard the current city's card to fly anywhere.
    pub fn charter_flight(&mut self, ctx: &mut TurnContext<'_>, to: CityId) -> Result<()> {
        self.check_action()?;
        self.check_destination(ctx.board, to)?;
        let index = self.city_card_index(ctx.board, self.location)?;

        self.discard_at(ctx, index);
        self.move_to(ctx.board, to);
        self.spend_action();
        Ok(())
    }

    /// Fly from one research station to another.
    pub fn shuttle_flight(&mut self, ctx: &mut TurnContext<'_>, to: CityId) -> Result<()> {
        self.check_action()?;
        self.check_destination(ctx.board, to)?;
        for city in [self.location, to] {
            if !ctx.board.city(city).has_research_station() {
                return Err(GameError::invalid(format!(
                    "no research station in {}",
                    ctx.board.name(city)
                )));
            }
        }

        self.move_to(ctx.board, to);
        self.spend_action();
        Ok(())
    }

    /// Build a research station in the current city.
    ///
    /// Costs the current city's card unless the role builds for free. Once
    /// every station is on the board, `relocate_from` names the station to
    /// move here.
    pub fn build_research_station(&mut self, ctx: &mut TurnContext<'_>, relocate_from: Option<CityId>) -> Result<()> {
        self.check_action()?;
        let here = self.location;
        if ctx.board.city(here).has_research_station() {
            return Err(GameError::invalid(format!(
                "{} already has a research station",
                ctx.board.name(here)
            )));
        }

        let card = if self.role.builds_without_card() {
            None
        } else {
            Some(self.city_card_index(ctx.board, here)?)
        };

        match relocate_from {
            Some(from) => {
                if !ctx.board.get(from)?.has_research_station() {
                    return Err(GameError::invalid(format!(
                        "no research station in {} to relocate",
                        ctx.board.name(from)
                    )));
                }
            }
            None if ctx.board.research_station_count() >= MAX_RESEARCH_STATIONS => {
                return Err(GameError::limit(format!(
                    "all {} research stations are built; choose one to relocate",
                    MAX_RESEARCH_STATIONS
                )));
            }
            None => {}
        }

        if let Some(index) = card {
            self.discard_at(ctx, index);
        }
        if let Some(from) = relocate_from {
            ctx.board.city_mut(from).set_research_station(false);
        }
        ctx.board.city_mut(here).set_research_station(true);
        debug!(player = %self.id, city = ctx.board.name(here), "research station built");
        self.spend_action();
        Ok(())
    }

    /// Discard cards of `color` at a research station to cure it.
    pub fn cure_disease(&mut self, ctx: &mut TurnContext<'_>, color: DiseaseColor) -> Result<()> {
        self.check_action()?;
        if !ctx.board.city(self.location).has_research_station() {
            return Err(GameError::invalid(format!(
                "no research station in {}",
                ctx.board.name(self.location)
            )));
        }
        if ctx.disease.state(color) != DiseaseState::Uncured {
            return Err(GameError::rule(format!("{} is already cured", color)));
        }

        let needed = self.role.cards_to_cure();
        let held = self.count_color(color);
        if held < needed {
            return Err(GameError::limit(format!(
                "curing {} needs {} cards, {} holds {}",
                color, needed, self.id, held
            )));
        }

        for _ in 0..needed {
            if let Some(index) = self.hand.iter().position(|card| card.is_color(color)) {
                self.discard_at(ctx, index);
            }
        }
        ctx.disease.cure_disease(ctx.events, color)?;
        self.spend_action();
        Ok(())
    }

    /// Remove cubes of `color` from the current city.
    ///
    /// A Medic removes every cube, and treats a cured color without spending
    /// an action.
    pub fn treat_disease(&mut self, ctx: &mut TurnContext<'_>, color: DiseaseColor) -> Result<()> {
        let free = self.role.treats_all_cubes() && ctx.disease.state(color).is_cured();
        if free {
            self.expect_stage(Stage::Action)?;
            self.check_hand_limit()?;
        } else {
            self.check_action()?;
        }

        let count = if self.role.treats_all_cubes() { MAX_CUBES_PER_CITY } else { 1 };
        ctx.disease
            .treat_disease_at(ctx.board, ctx.events, self.location, color, count)?;

        if !free {
            self.spend_action();
        }
        Ok(())
    }

    /// Pass the card for `city` between this player and `other`.
    ///
    /// Both pawns must share a city. The giver must hold the card, and unless
    /// the giver may share any card it must name the city they are in.
    pub fn share_knowledge(
        &mut self,
        other: &mut PlayerTurn,
        city: CityId,
        direction: ShareDirection,
    ) -> Result<()> {
        self.check_action()?;
        if other.id == self.id {
            return Err(GameError::invalid("cannot share knowledge with yourself"));
        }
        if other.location != self.location {
            return Err(GameError::invalid(format!("{} and {} are not in the same city", self.id, other.id)));
        }

        let here = self.location;
        let (giver, receiver) = match direction {
            ShareDirection::Give => (&mut *self, other),
            ShareDirection::Take => (other, &mut *self),
        };
        if city != here && !giver.role.shares_any_card() {
            return Err(GameError::invalid(format!(
                "{} may only give the card of the city they are in",
                giver.id
            )));
        }
        let index = giver
            .hand
            .iter()
            .position(|card| card.is_city(city))
            .ok_or_else(|| GameError::invalid(format!("{} does not hold that city card", giver.id)))?;

        let card = giver.hand.remove(index);
        debug!(from = %giver.id, to = %receiver.id, card = %card.name, "knowledge shared");
        receiver.hand.push(card);

        self.spend_action();
        Ok(())
    }

    /// Spend an action doing nothing.
    pub fn pass(&mut self) -> Result<()> {
        self.check_action()?;
        self.spend_action();
        Ok(())
    }

    // === Draws ===

    /// Draw up to `n` player cards, capped at what remains of this turn's
    /// allowance. Returns the ids of the cards drawn, epidemics included.
    ///
    /// Epidemics resolve immediately. Running out of player cards loses the
    /// match without failing the operation.
    pub fn draw_cards(&mut self, ctx: &mut TurnContext<'_>, n: usize) -> Result<Vec<CardId>> {
        self.expect_stage(Stage::Draw)?;

        let allowance = usize::from(PLAYER_CARDS_PER_TURN.saturating_sub(self.cards_drawn));
        let mut drawn = Vec::new();

        for _ in 0..n.min(allowance) {
            if ctx.events.is_over() {
                break;
            }
            let Some(card) = ctx.decks.player.draw_one() else {
                warn!(player = %self.id, "player deck exhausted");
                ctx.events.push(GameEvent::PlayerDeckExhausted { player: self.id });
                ctx.events
                    .conclude(MatchOutcome::Lost(LossReason::PlayerDeckExhausted));
                break;
            };

            self.cards_drawn += 1;
            drawn.push(card.id());
            ctx.events.push(GameEvent::CardDrawn {
                player: self.id,
                card: card.id(),
            });
            match card {
                Card::Player(card) => self.hand.push(card),
                Card::Epidemic(_) => self.resolve_epidemic(ctx, card),
                // Not a player-pile card
                Card::Infection(_) => ctx.decks.player_discard.put(card),
            }
        }

        debug!(player = %self.id, count = drawn.len(), "player cards drawn");
        Ok(drawn)
    }

    /// Draw as many infection cards as the infection rate says, placing one
    /// cube for each.
    pub fn draw_infection_cards(&mut self, ctx: &mut TurnContext<'_>) -> Result<Vec<InfectionCard>> {
        self.expect_stage(Stage::Infector)?;
        if self.infection_drawn {
            return Err(GameError::state(format!("{} already drew infection cards", self.id)));
        }

        let rate = ctx.disease.infection_rate();
        let mut drawn = Vec::with_capacity(usize::from(rate));
        for _ in 0..rate {
            if ctx.events.is_over() {
                break;
            }
            let Some(card) = ctx.decks.draw_infection(ctx.rng) else {
                break;
            };
            ctx.disease.infect(ctx.board, ctx.events, card.city, card.color, 1);
            ctx.decks.infection_discard.put(card);
            drawn.push(card);
        }

        self.infection_drawn = true;
        Ok(drawn)
    }

    // === Discards ===

    /// Discard a held card. Allowed at any stage, which is how a player
    /// returns to the hand limit.
    pub fn discard(&mut self, ctx: &mut TurnContext<'_>, card: CardId) -> Result<()> {
        let index = self
            .hand
            .iter()
            .position(|held| held.id == card)
            .ok_or_else(|| GameError::invalid(format!("{} does not hold {}", self.id, card)))?;
        self.discard_at(ctx, index);
        Ok(())
    }

    // === Helpers ===

    fn expect_stage(&self, stage: Stage) -> Result<()> {
        if self.stage != stage {
            return Err(GameError::state(format!(
                "{} is in the {} stage, not {}",
                self.id, self.stage, stage
            )));
        }
        Ok(())
    }

    fn check_hand_limit(&self) -> Result<()> {
        if self.over_hand_limit() {
            return Err(GameError::limit(format!(
                "{} holds {} cards and must discard down to {}",
                self.id,
                self.hand.len(),
                HAND_LIMIT
            )));
        }
        Ok(())
    }

    fn check_action(&self) -> Result<()> {
        self.expect_stage(Stage::Action)?;
        if self.actions_taken >= ACTIONS_PER_TURN {
            return Err(GameError::state(format!("{} has no actions left", self.id)));
        }
        self.check_hand_limit()
    }

    fn check_destination(&self, board: &CityBoard, to: CityId) -> Result<()> {
        board.get(to)?;
        if to == self.location {
            return Err(GameError::invalid(format!("{} is already in {}", self.id, board.name(to))));
        }
        Ok(())
    }

    fn city_card_index(&self, board: &CityBoard, city: CityId) -> Result<usize> {
        self.hand
            .iter()
            .position(|card| card.is_city(city))
            .ok_or_else(|| GameError::invalid(format!("{} does not hold the {} card", self.id, board.name(city))))
    }

    fn spend_action(&mut self) {
        self.actions_taken += 1;
    }

    fn move_to(&mut self, board: &CityBoard, to: CityId) {
        debug!(player = %self.id, from = board.name(self.location), to = board.name(to), "moved");
        self.location = to;
    }

    fn discard_at(&mut self, ctx: &mut TurnContext<'_>, index: usize) {
        let card = self.hand.remove(index);
        ctx.events.push(GameEvent::CardDiscarded {
            player: self.id,
            card: card.id,
        });
        ctx.decks.player_discard.put(Card::Player(card));
    }

    fn resolve_epidemic(&mut self, ctx: &mut TurnContext<'_>, epidemic: Card) {
        match ctx.decks.draw_infection_bottom(ctx.rng) {
            Some(card) => {
                ctx.disease
                    .epidemic_at(ctx.board, ctx.events, card.city, card.color, EPIDEMIC_CUBES);
                ctx.decks.infection_discard.put(card);
            }
            None => {
                let step = ctx.disease.raise_infection_rate();
                warn!(player = %self.id, step, "epidemic with no infection cards left");
            }
        }
        ctx.decks.recycle_infection(ctx.rng);
        ctx.decks.player_discard.put(epidemic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{epidemic_cards, standard_infection_cards, standard_player_cards};
    use crate::zones::CardPile;

    struct Fixture {
        board: CityBoard,
        disease: DiseaseEngine,
        decks: Decks,
        events: EventQueue,
        rng: GameRng,
    }

    impl Fixture {
        fn new() -> Self {
            let board = CityBoard::standard();
            let player = standard_player_cards(&board)
                .into_iter()
                .map(Card::Player)
                .collect();
            let infection = standard_infection_cards(&board).into_iter().collect();
            let atlanta = board.id("Atlanta").unwrap();

            let mut fixture = Self {
                board,
                disease: DiseaseEngine::new(),
                decks: Decks::new(player, infection),
                events: EventQueue::new(),
                rng: GameRng::new(11),
            };
            fixture.board.city_mut(atlanta).set_research_station(true);
            fixture
        }

        fn ctx(&mut self) -> TurnContext<'_> {
            TurnContext::new(
                &mut self.board,
                &mut self.disease,
                &mut self.decks,
                &mut self.events,
                &mut self.rng,
            )
        }

        fn city(&self, name: &str) -> CityId {
            self.board.id(name).unwrap()
        }

        /// Hand the named city cards to `player`, taking them out of the pile.
        fn give(&mut self, player: &mut PlayerTurn, names: &[&str]) {
            for name in names {
                let city = self.city(name);
                player.receive(PlayerCard::for_city(CardId::new(city.0), self.board.city(city)));
            }
        }
    }

    fn player(fixture: &Fixture, role: Role) -> PlayerTurn {
        PlayerTurn::new(PlayerId::new(0), "Ada", role, fixture.city("Atlanta"))
    }

    fn active(fixture: &Fixture, role: Role) -> PlayerTurn {
        let mut p = player(fixture, role);
        p.start_turn().unwrap();
        p
    }

    #[test]
    fn test_start_turn_only_when_inactive() {
        let fixture = Fixture::new();
        let mut p = player(&fixture, Role::Scientist);

        p.start_turn().unwrap();
        assert_eq!(p.stage(), Stage::Action);
        assert!(matches!(p.start_turn(), Err(GameError::IllegalStateTransition(_))));
    }

    #[test]
    fn test_drive_adjacent() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let chicago = f.city("Chicago");

        p.drive(&mut f.ctx(), chicago).unwrap();

        assert_eq!(p.location(), chicago);
        assert_eq!(p.actions_taken(), 1);
    }

    #[test]
    fn test_drive_not_adjacent_leaves_state() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let tokyo = f.city("Tokyo");

        let result = p.drive(&mut f.ctx(), tokyo);

        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert_eq!(p.location(), f.city("Atlanta"));
        assert_eq!(p.actions_taken(), 0);
    }

    #[test]
    fn test_drive_to_current_city_fails() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let atlanta = f.city("Atlanta");
        assert!(matches!(p.drive(&mut f.ctx(), atlanta), Err(GameError::InvalidMove(_))));
    }

    #[test]
    fn test_direct_flight_discards_destination_card() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        f.give(&mut p, &["Tokyo"]);
        let tokyo = f.city("Tokyo");

        p.direct_flight(&mut f.ctx(), tokyo).unwrap();

        assert_eq!(p.location(), tokyo);
        assert!(p.hand().is_empty());
        assert_eq!(f.decks.player_discard.len(), 1);
    }

    #[test]
    fn test_direct_flight_without_card() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let tokyo = f.city("Tokyo");
        assert!(matches!(p.direct_flight(&mut f.ctx(), tokyo), Err(GameError::InvalidMove(_))));
    }

    #[test]
    fn test_charter_flight_uses_current_city_card() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        f.give(&mut p, &["Atlanta"]);
        let lima = f.city("Lima");

        p.charter_flight(&mut f.ctx(), lima).unwrap();

        assert_eq!(p.location(), lima);
        assert!(p.hand().is_empty());
    }

    #[test]
    fn test_shuttle_flight_needs_both_stations() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let paris = f.city("Paris");

        assert!(matches!(p.shuttle_flight(&mut f.ctx(), paris), Err(GameError::InvalidMove(_))));

        f.board.city_mut(paris).set_research_station(true);
        p.shuttle_flight(&mut f.ctx(), paris).unwrap();
        assert_eq!(p.location(), paris);
    }

    #[test]
    fn test_build_station() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let chicago = f.city("Chicago");
        f.give(&mut p, &["Chicago"]);

        p.drive(&mut f.ctx(), chicago).unwrap();
        p.build_research_station(&mut f.ctx(), None).unwrap();

        assert!(f.board.city(chicago).has_research_station());
        assert_eq!(f.board.research_station_count(), 2);
        assert!(p.hand().is_empty());

        // Already there
        assert!(matches!(
            p.build_research_station(&mut f.ctx(), None),
            Err(GameError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_operations_expert_builds_without_card() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::OperationsExpert);
        let chicago = f.city("Chicago");

        p.drive(&mut f.ctx(), chicago).unwrap();
        p.build_research_station(&mut f.ctx(), None).unwrap();
        assert!(f.board.city(chicago).has_research_station());
    }

    #[test]
    fn test_build_at_station_limit_requires_relocation() {
        let mut f = Fixture::new();
        for name in ["Paris", "Tokyo", "Lima", "Cairo", "Delhi"] {
            let city = f.city(name);
            f.board.city_mut(city).set_research_station(true);
        }
        assert_eq!(f.board.research_station_count(), MAX_RESEARCH_STATIONS);

        let mut p = active(&f, Role::OperationsExpert);
        let chicago = f.city("Chicago");
        p.drive(&mut f.ctx(), chicago).unwrap();

        assert!(matches!(
            p.build_research_station(&mut f.ctx(), None),
            Err(GameError::ResourceLimit(_))
        ));

        let paris = f.city("Paris");
        p.build_research_station(&mut f.ctx(), Some(paris)).unwrap();
        assert!(!f.board.city(paris).has_research_station());
        assert!(f.board.city(chicago).has_research_station());
        assert_eq!(f.board.research_station_count(), MAX_RESEARCH_STATIONS);
    }

    #[test]
    fn test_cure_discards_five() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        f.give(&mut p, &["Atlanta", "Chicago", "Paris", "London", "Madrid", "Tokyo"]);

        p.cure_disease(&mut f.ctx(), DiseaseColor::Blue).unwrap();

        assert_eq!(f.disease.state(DiseaseColor::Blue), DiseaseState::Cured);
        assert_eq!(p.hand().len(), 1);
        assert_eq!(f.decks.player_discard.len(), 5);
        assert_eq!(p.actions_taken(), 1);
    }

    #[test]
    fn test_scientist_cures_with_four() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        f.give(&mut p, &["Atlanta", "Chicago", "Paris", "London"]);

        p.cure_disease(&mut f.ctx(), DiseaseColor::Blue).unwrap();
        assert!(p.hand().is_empty());
    }

    #[test]
    fn test_cure_errors() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        f.give(&mut p, &["Atlanta", "Chicago", "Paris", "London"]);

        assert!(matches!(
            p.cure_disease(&mut f.ctx(), DiseaseColor::Blue),
            Err(GameError::ResourceLimit(_))
        ));
        assert_eq!(p.hand().len(), 4);

        let chicago = f.city("Chicago");
        p.drive(&mut f.ctx(), chicago).unwrap();
        assert!(matches!(
            p.cure_disease(&mut f.ctx(), DiseaseColor::Blue),
            Err(GameError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_treat_spends_action() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Scientist);
        let atlanta = f.city("Atlanta");
        f.disease.infect(&mut f.board, &mut f.events, atlanta, DiseaseColor::Blue, 2);

        p.treat_disease(&mut f.ctx(), DiseaseColor::Blue).unwrap();

        assert_eq!(f.board.city(atlanta).cubes(DiseaseColor::Blue), 1);
        assert_eq!(p.actions_taken(), 1);
    }

    #[test]
    fn test_medic_treats_all_and_free_when_cured() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        let atlanta = f.city("Atlanta");
        let chicago = f.city("Chicago");
        f.disease.infect(&mut f.board, &mut f.events, atlanta, DiseaseColor::Blue, 3);
        f.disease.infect(&mut f.board, &mut f.events, chicago, DiseaseColor::Blue, 2);

        p.treat_disease(&mut f.ctx(), DiseaseColor::Blue).unwrap();
        assert_eq!(f.board.city(atlanta).cubes(DiseaseColor::Blue), 0);
        assert_eq!(p.actions_taken(), 1);

        f.disease.cure_disease(&mut f.events, DiseaseColor::Blue).unwrap();
        p.drive(&mut f.ctx(), chicago).unwrap();
        p.treat_disease(&mut f.ctx(), DiseaseColor::Blue).unwrap();

        assert_eq!(p.actions_taken(), 2);
        assert_eq!(f.disease.state(DiseaseColor::Blue), DiseaseState::Eradicated);
    }

    #[test]
    fn test_share_knowledge_give_and_take() {
        let mut f = Fixture::new();
        let mut a = active(&f, Role::Medic);
        let mut b = PlayerTurn::new(PlayerId::new(1), "Bo", Role::Scientist, f.city("Atlanta"));
        let atlanta = f.city("Atlanta");
        f.give(&mut a, &["Atlanta"]);

        a.share_knowledge(&mut b, atlanta, ShareDirection::Give).unwrap();
        assert!(b.holds_city_card(atlanta));
        assert!(!a.holds_city_card(atlanta));

        a.share_knowledge(&mut b, atlanta, ShareDirection::Take).unwrap();
        assert!(a.holds_city_card(atlanta));
        assert_eq!(a.actions_taken(), 2);
    }

    #[test]
    fn test_share_knowledge_rules() {
        let mut f = Fixture::new();
        let mut a = active(&f, Role::Medic);
        let mut b = PlayerTurn::new(PlayerId::new(1), "Bo", Role::Scientist, f.city("Atlanta"));
        let paris = f.city("Paris");
        f.give(&mut a, &["Paris"]);

        // Only the current city's card
        assert!(matches!(
            a.share_knowledge(&mut b, paris, ShareDirection::Give),
            Err(GameError::InvalidMove(_))
        ));

        let mut researcher = active(&f, Role::Researcher);
        f.give(&mut researcher, &["Paris"]);
        researcher.share_knowledge(&mut b, paris, ShareDirection::Give).unwrap();
        assert!(b.holds_city_card(paris));

        b.place_pawn(f.city("Chicago"));
        assert!(matches!(
            a.share_knowledge(&mut b, paris, ShareDirection::Take),
            Err(GameError::InvalidMove(_))
        ));
        assert_eq!(a.actions_taken(), 0);
    }

    #[test]
    fn test_action_budget() {
        let f = Fixture::new();
        let mut p = active(&f, Role::Medic);

        assert!(matches!(p.finish_action_stage(), Err(GameError::IllegalStateTransition(_))));
        for _ in 0..4 {
            p.pass().unwrap();
        }
        assert!(matches!(p.pass(), Err(GameError::IllegalStateTransition(_))));

        p.finish_action_stage().unwrap();
        assert_eq!(p.stage(), Stage::Draw);
    }

    #[test]
    fn test_over_hand_limit_blocks_actions() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        f.give(
            &mut p,
            &["Paris", "London", "Madrid", "Milan", "Essen", "Chicago", "Montreal", "Washington"],
        );

        assert!(matches!(p.pass(), Err(GameError::ResourceLimit(_))));

        let card = p.hand()[0].id;
        p.discard(&mut f.ctx(), card).unwrap();
        p.pass().unwrap();
    }

    #[test]
    fn test_draw_stage() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        for _ in 0..4 {
            p.pass().unwrap();
        }
        p.finish_action_stage().unwrap();

        let first = p.draw_cards(&mut f.ctx(), 1).unwrap();
        assert_eq!(first.len(), 1);
        assert!(matches!(p.finish_draw_stage(), Err(GameError::IllegalStateTransition(_))));

        // Capped at the per-turn allowance
        let rest = p.draw_cards(&mut f.ctx(), 5).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(p.hand().len(), 2);
        assert!(p.draw_cards(&mut f.ctx(), 1).unwrap().is_empty());

        p.finish_draw_stage().unwrap();
        assert_eq!(p.stage(), Stage::Infector);
    }

    #[test]
    fn test_epidemic_resolution() {
        let mut f = Fixture::new();
        let bottom = *f.decks.infection.cards().first().unwrap();
        f.decks.player = CardPile::from_cards(epidemic_cards(1, 96));

        let mut p = active(&f, Role::Medic);
        for _ in 0..4 {
            p.pass().unwrap();
        }
        p.finish_action_stage().unwrap();
        p.draw_cards(&mut f.ctx(), 1).unwrap();

        assert_eq!(f.disease.infection_rate_step(), 1);
        assert_eq!(f.board.city(bottom.city).cubes(bottom.color), 3);
        // The epidemic city is recycled onto the top of the infection pile
        assert!(f.decks.infection_discard.is_empty());
        assert_eq!(f.decks.infection.peek(), Some(&bottom));
        assert!(f.decks.player_discard.iter().any(Card::is_epidemic));
        assert!(p.hand().is_empty());
    }

    #[test]
    fn test_epidemic_without_infection_cards_still_raises_rate() {
        let mut f = Fixture::new();
        f.decks.infection = CardPile::new();
        f.decks.player = CardPile::from_cards(epidemic_cards(1, 96));

        let mut p = active(&f, Role::Medic);
        for _ in 0..4 {
            p.pass().unwrap();
        }
        p.finish_action_stage().unwrap();
        p.draw_cards(&mut f.ctx(), 1).unwrap();

        assert_eq!(f.disease.infection_rate_step(), 1);
        assert!(f.board.iter().all(|city| !city.is_infected()));
        assert!(f.decks.player_discard.iter().any(Card::is_epidemic));
    }

    #[test]
    fn test_end_turn_requires_hand_limit() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        f.give(&mut p, &["Paris", "London", "Madrid", "Milan", "Essen", "Chicago"]);
        for _ in 0..4 {
            p.pass().unwrap();
        }
        p.finish_action_stage().unwrap();
        p.draw_cards(&mut f.ctx(), 2).unwrap();
        p.finish_draw_stage().unwrap();
        p.draw_infection_cards(&mut f.ctx()).unwrap();
        assert_eq!(p.hand().len(), 8);

        assert!(matches!(p.end_turn(), Err(GameError::ResourceLimit(_))));
        assert_eq!(p.stage(), Stage::Infector);

        let card = p.hand()[0].id;
        p.discard(&mut f.ctx(), card).unwrap();
        p.end_turn().unwrap();
        assert_eq!(p.stage(), Stage::Inactive);
    }

    #[test]
    fn test_short_player_pile_loses() {
        let mut f = Fixture::new();
        let keep: Vec<Card> = f.decks.player.draw(1);
        f.decks.player = CardPile::from_cards(keep);

        let mut p = active(&f, Role::Medic);
        for _ in 0..4 {
            p.pass().unwrap();
        }
        p.finish_action_stage().unwrap();

        let drawn = p.draw_cards(&mut f.ctx(), 2).unwrap();
        assert_eq!(drawn.len(), 1);
        assert_eq!(
            f.events.outcome(),
            Some(MatchOutcome::Lost(LossReason::PlayerDeckExhausted))
        );
    }

    #[test]
    fn test_infector_stage() {
        let mut f = Fixture::new();
        let mut p = active(&f, Role::Medic);
        for _ in 0..4 {
            p.pass().unwrap();
        }
        p.finish_action_stage().unwrap();
        p.draw_cards(&mut f.ctx(), 2).unwrap();
        p.finish_draw_stage().unwrap();

        assert!(matches!(p.end_turn(), Err(GameError::IllegalStateTransition(_))));

        let cards = p.draw_infection_cards(&mut f.ctx()).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(f.decks.infection_discard.len(), 2);
        for card in &cards {
            assert_eq!(f.board.city(card.city).cubes(card.color), 1);
        }
        assert!(matches!(
            p.draw_infection_cards(&mut f.ctx()),
            Err(GameError::IllegalStateTransition(_))
        ));

        p.end_turn().unwrap();
        assert_eq!(p.stage(), Stage::Inactive);
    }
}
