//! Match controller: roster, setup, turn rotation and the terminal outcome.
//!
//! The controller owns every piece of match state. Turn operations borrow
//! what they need through a short-lived [`TurnContext`]; events they push are
//! delivered to listeners when the operation returns, successful or not.
//!
//! ## Usage
//!
//! ```
//! use pandemic_sim::core::{Action, MatchConfig};
//! use pandemic_sim::game::MatchController;
//!
//! let mut game = MatchController::new(MatchConfig::new(7)).unwrap();
//! let ada = game.add_player("Ada").unwrap();
//! let bo = game.add_player("Bo").unwrap();
//! game.start().unwrap();
//!
//! assert_eq!(game.active_player(), Some(ada));
//! game.start_turn(ada).unwrap();
//! for _ in 0..4 {
//!     game.apply_action(ada, Action::Pass).unwrap();
//! }
//! game.finish_action_stage(ada).unwrap();
//! game.draw_cards(ada, 2).unwrap();
//! if !game.is_over() {
//!     game.finish_draw_stage(ada).unwrap();
//!     game.draw_infection_cards(ada).unwrap();
//! }
//! if !game.is_over() {
//!     game.end_turn(ada).unwrap();
//!     assert_eq!(game.active_player(), Some(bo));
//! }
//! ```

use im::Vector;
use tracing::{debug, info};

use crate::board::{CityBoard, CityId};
use crate::cards::{
    epidemic_cards, standard_infection_cards, standard_player_cards, Card, CardId, InfectionCard, PlayerCard,
};
use crate::core::config::{starting_hand_size, INITIAL_INFECTIONS, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Action, ActionRecord, GameError, GameRng, MatchConfig, MatchOutcome, PlayerId, Result, Role, ShareDirection};
use crate::disease::{ColorMap, DiseaseColor, DiseaseEngine};
use crate::events::{EventQueue, GameEvent, ListenerId, ListenerRegistry};
use crate::turn::{PlayerTurn, TurnContext};
use crate::zones::{seed_epidemics, Decks};

use super::snapshot::{CityView, DiseaseView, MatchSnapshot, PlayerView};

/// Owns a match and drives it from setup to the outcome.
#[derive(Debug)]
pub struct MatchController {
    config: MatchConfig,
    board: CityBoard,
    disease: DiseaseEngine,
    decks: Decks,
    starting_city: CityId,

    /// Indexed by `PlayerId`.
    players: Vec<PlayerTurn>,
    turn_order: Vec<PlayerId>,
    /// Index into `turn_order` of the player whose turn it is.
    active: usize,
    turn: u32,
    started: bool,
    roles: Vec<Role>,

    events: EventQueue,
    listeners: ListenerRegistry,
    event_log: Vector<GameEvent>,
    history: Vector<ActionRecord>,
    sequence: u32,

    /// Stream for role assignment.
    role_rng: GameRng,
    /// Stream for infection-pile shuffles, at setup and during play.
    infection_rng: GameRng,
}

impl MatchController {
    /// A match on the standard map with the standard decks.
    pub fn new(config: MatchConfig) -> Result<Self> {
        let board = CityBoard::standard();
        let player_cards = standard_player_cards(&board);
        let infection_cards = standard_infection_cards(&board);
        Self::with_decks(config, board, player_cards, infection_cards)
    }

    /// A match on a custom board with custom decks. Epidemic cards are added
    /// at start.
    pub fn with_decks(
        config: MatchConfig,
        board: CityBoard,
        player_cards: Vec<PlayerCard>,
        infection_cards: Vec<InfectionCard>,
    ) -> Result<Self> {
        let starting_city = board.id(&config.starting_city)?;
        let rng = GameRng::new(config.seed);
        let player = player_cards.into_iter().map(Card::Player).collect();
        let infection = infection_cards.into_iter().collect();

        Ok(Self {
            board,
            disease: DiseaseEngine::new(),
            decks: Decks::new(player, infection),
            starting_city,
            players: Vec::new(),
            turn_order: Vec::new(),
            active: 0,
            turn: 0,
            started: false,
            roles: Role::ALL.to_vec(),
            events: EventQueue::new(),
            listeners: ListenerRegistry::new(),
            event_log: Vector::new(),
            history: Vector::new(),
            sequence: 0,
            role_rng: rng.for_context("roles"),
            infection_rng: rng.for_context("infection-deck"),
            config,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &CityBoard {
        &self.board
    }

    #[must_use]
    pub fn disease(&self) -> &DiseaseEngine {
        &self.disease
    }

    #[must_use]
    pub fn decks(&self) -> &Decks {
        &self.decks
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerTurn> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerTurn] {
        &self.players
    }

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Whose turn it is, once the match has started.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        if self.started {
            self.turn_order.get(self.active).copied()
        } else {
            None
        }
    }

    /// Turn number (starts at 1, 0 before start).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.events.outcome()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.events.is_over()
    }

    /// Successful actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Every event delivered so far, oldest first.
    #[must_use]
    pub fn event_log(&self) -> &Vector<GameEvent> {
        &self.event_log
    }

    // === Listeners ===

    /// Register a callback for every future event.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // === Setup ===

    /// Register a player and assign them a role nobody else has.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        if self.started {
            return Err(GameError::state("cannot add players after the match has started"));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::limit(format!("at most {} players", MAX_PLAYERS)));
        }

        let pick = self.role_rng.gen_range_usize(0..self.roles.len());
        let role = self.roles.remove(pick);
        let id = PlayerId::new(self.players.len() as u8);
        let player = PlayerTurn::new(id, name, role, self.starting_city);
        info!(player = %id, name = player.name(), %role, "player joined");

        self.players.push(player);
        self.turn_order.push(id);
        Ok(id)
    }

    /// Replace the registration-order rotation. `order` must name every
    /// player exactly once.
    pub fn set_turn_order(&mut self, order: Vec<PlayerId>) -> Result<()> {
        if self.started {
            return Err(GameError::state("turn order is fixed once the match has started"));
        }

        let mut seen = vec![false; self.players.len()];
        for id in &order {
            match seen.get_mut(id.index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(GameError::rule(format!("{} is not a valid turn-order entry", id))),
            }
        }
        if order.len() != self.players.len() {
            return Err(GameError::rule("turn order must include every player"));
        }

        self.turn_order = order;
        Ok(())
    }

    /// Deal hands, seed epidemics, run the setup infections and hand the
    /// first turn to the first player in the rotation.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::state("match already started"));
        }
        let count = self.players.len();
        let hand_size = match starting_hand_size(count) {
            Some(size) if count >= MIN_PLAYERS => size,
            _ => {
                return Err(GameError::rule(format!(
                    "a match needs {} to {} players, not {}",
                    MIN_PLAYERS, MAX_PLAYERS, count
                )))
            }
        };

        let base = GameRng::new(self.config.seed);

        // Deal from the shuffled player pile
        let mut deck_rng = base.for_context("player-deck");
        self.decks.player.shuffle(&mut deck_rng);
        for &id in &self.turn_order {
            for card in self.decks.player.draw(hand_size) {
                match card {
                    Card::Player(card) => self.players[id.index()].receive(card),
                    other => self.decks.player_discard.put(other),
                }
            }
        }

        // Seed epidemics into the rest
        let first_epidemic = self.next_card_id();
        let epidemics = epidemic_cards(self.config.difficulty.epidemic_count(), first_epidemic);
        let pile = std::mem::take(&mut self.decks.player);
        let mut epidemic_rng = base.for_context("epidemics");
        self.decks.player = seed_epidemics(pile, epidemics, &mut epidemic_rng)?;

        // Setup infections in decreasing severity
        self.decks.infection.shuffle(&mut self.infection_rng);
        for (cards, cubes) in INITIAL_INFECTIONS {
            for _ in 0..cards {
                let Some(card) = self.decks.draw_infection(&mut self.infection_rng) else {
                    break;
                };
                self.disease
                    .infect(&mut self.board, &mut self.events, card.city, card.color, cubes);
                self.decks.infection_discard.put(card);
            }
        }

        self.board
            .city_mut(self.starting_city)
            .set_research_station(true);
        for player in &mut self.players {
            player.place_pawn(self.starting_city);
        }

        self.started = true;
        self.active = 0;
        self.turn = 1;
        let first = self.turn_order[0];
        info!(players = count, difficulty = ?self.config.difficulty, %first, "match started");
        self.events.push(GameEvent::MatchStarted { first });
        self.flush();
        Ok(())
    }

    fn next_card_id(&self) -> u16 {
        let player = self.decks.player.iter().map(Card::id);
        let dealt = self.players.iter().flat_map(|p| p.hand().iter().map(|c| c.id));
        let discarded = self.decks.player_discard.iter().map(Card::id);
        let infection = self
            .decks
            .infection
            .iter()
            .chain(self.decks.infection_discard.iter())
            .map(|c| c.id);

        player
            .chain(dealt)
            .chain(discarded)
            .chain(infection)
            .map(CardId::raw)
            .max()
            .map_or(0, |max| max + 1)
    }

    // === Turn operations ===

    /// Begin the active player's action stage.
    pub fn start_turn(&mut self, player: PlayerId) -> Result<()> {
        let index = self.check_active(player)?;
        self.players[index].start_turn()?;
        info!(%player, turn = self.turn, "turn started");
        self.events.push(GameEvent::TurnStarted { player, turn: self.turn });
        self.flush();
        Ok(())
    }

    /// Perform one action-stage move, recording it on success.
    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<()> {
        let index = self.check_active(player)?;

        let result = match action {
            Action::ShareKnowledge { with, city, direction } => self.share(index, with, city, direction),
            Action::Pass => self.players[index].pass(),
            _ => {
                let (turn, mut ctx) = self.parts(index);
                match action {
                    Action::Drive { to } => turn.drive(&mut ctx, to),
                    Action::DirectFlight { to } => turn.direct_flight(&mut ctx, to),
                    Action::CharterFlight { to } => turn.charter_flight(&mut ctx, to),
                    Action::ShuttleFlight { to } => turn.shuttle_flight(&mut ctx, to),
                    Action::BuildResearchStation { relocate_from } => {
                        turn.build_research_station(&mut ctx, relocate_from)
                    }
                    Action::TreatDisease { color } => turn.treat_disease(&mut ctx, color),
                    Action::CureDisease { color } => turn.cure_disease(&mut ctx, color),
                    Action::ShareKnowledge { .. } | Action::Pass => Ok(()),
                }
            }
        };

        match &result {
            Ok(()) => {
                debug!(%player, ?action, "action");
                self.history
                    .push_back(ActionRecord::new(player, action, self.turn, self.sequence));
                self.sequence += 1;
            }
            Err(err) => debug!(%player, ?action, %err, "action rejected"),
        }
        self.flush();
        result
    }

    pub fn drive(&mut self, player: PlayerId, to: CityId) -> Result<()> {
        self.apply_action(player, Action::Drive { to })
    }

    pub fn direct_flight(&mut self, player: PlayerId, to: CityId) -> Result<()> {
        self.apply_action(player, Action::DirectFlight { to })
    }

    pub fn charter_flight(&mut self, player: PlayerId, to: CityId) -> Result<()> {
        self.apply_action(player, Action::CharterFlight { to })
    }

    pub fn shuttle_flight(&mut self, player: PlayerId, to: CityId) -> Result<()> {
        self.apply_action(player, Action::ShuttleFlight { to })
    }

    pub fn build_research_station(&mut self, player: PlayerId, relocate_from: Option<CityId>) -> Result<()> {
        self.apply_action(player, Action::BuildResearchStation { relocate_from })
    }

    pub fn treat_disease(&mut self, player: PlayerId, color: DiseaseColor) -> Result<()> {
        self.apply_action(player, Action::TreatDisease { color })
    }

    pub fn cure_disease(&mut self, player: PlayerId, color: DiseaseColor) -> Result<()> {
        self.apply_action(player, Action::CureDisease { color })
    }

    pub fn share_knowledge(
        &mut self,
        player: PlayerId,
        with: PlayerId,
        city: CityId,
        direction: ShareDirection,
    ) -> Result<()> {
        self.apply_action(player, Action::ShareKnowledge { with, city, direction })
    }

    pub fn pass(&mut self, player: PlayerId) -> Result<()> {
        self.apply_action(player, Action::Pass)
    }

    pub fn finish_action_stage(&mut self, player: PlayerId) -> Result<()> {
        let index = self.check_active(player)?;
        self.players[index].finish_action_stage()
    }

    /// Draw up to `n` player cards for the active player.
    pub fn draw_cards(&mut self, player: PlayerId, n: usize) -> Result<Vec<CardId>> {
        let index = self.check_active(player)?;
        let (turn, mut ctx) = self.parts(index);
        let result = turn.draw_cards(&mut ctx, n);
        self.flush();
        result
    }

    pub fn finish_draw_stage(&mut self, player: PlayerId) -> Result<()> {
        let index = self.check_active(player)?;
        self.players[index].finish_draw_stage()
    }

    pub fn draw_infection_cards(&mut self, player: PlayerId) -> Result<Vec<InfectionCard>> {
        let index = self.check_active(player)?;
        let (turn, mut ctx) = self.parts(index);
        let result = turn.draw_infection_cards(&mut ctx);
        self.flush();
        result
    }

    /// End the active player's turn and pass the turn to the next player.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<()> {
        let index = self.check_active(player)?;
        self.players[index].end_turn()?;
        self.events.push(GameEvent::TurnEnded { player, turn: self.turn });

        self.active = (self.active + 1) % self.turn_order.len();
        self.turn += 1;
        info!(next = %self.turn_order[self.active], turn = self.turn, "turn passed");
        self.flush();
        Ok(())
    }

    /// Discard a held card. Any player may do this at any point of the match.
    pub fn discard(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.check_running()?;
        let index = self.player_index(player)?;
        let (turn, mut ctx) = self.parts(index);
        let result = turn.discard(&mut ctx, card);
        self.flush();
        result
    }

    // === Snapshot ===

    /// Immutable view of the match as it stands.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            turn: self.turn,
            active_player: self.active_player(),
            players: self.players.iter().map(PlayerView::from).collect(),
            cities: self.board.iter().map(CityView::from).collect(),
            diseases: ColorMap::new(|color| DiseaseView {
                state: self.disease.state(color),
                cubes_on_board: self.disease.cubes_on_board(color),
            }),
            outbreaks: self.disease.outbreaks(),
            infection_rate: self.disease.infection_rate(),
            infection_rate_step: self.disease.infection_rate_step(),
            player_pile_len: self.decks.player.len(),
            player_discard: self.decks.player_discard.iter().map(Card::id).collect(),
            infection_pile_len: self.decks.infection.len(),
            infection_discard: self.decks.infection_discard.iter().copied().collect(),
            outcome: self.outcome(),
        }
    }

    // === Helpers ===

    fn check_running(&self) -> Result<()> {
        if !self.started {
            return Err(GameError::state("match has not started"));
        }
        if let Some(outcome) = self.events.outcome() {
            return Err(GameError::state(format!("match is over ({})", outcome)));
        }
        Ok(())
    }

    fn player_index(&self, player: PlayerId) -> Result<usize> {
        if player.index() < self.players.len() {
            Ok(player.index())
        } else {
            Err(GameError::invalid(format!("unknown player {}", player)))
        }
    }

    fn check_active(&self, player: PlayerId) -> Result<usize> {
        self.check_running()?;
        let index = self.player_index(player)?;
        if self.turn_order[self.active] != player {
            return Err(GameError::state(format!("it is not {}'s turn", player)));
        }
        Ok(index)
    }

    fn parts(&mut self, index: usize) -> (&mut PlayerTurn, TurnContext<'_>) {
        let ctx = TurnContext::new(
            &mut self.board,
            &mut self.disease,
            &mut self.decks,
            &mut self.events,
            &mut self.infection_rng,
        );
        (&mut self.players[index], ctx)
    }

    fn share(&mut self, index: usize, with: PlayerId, city: CityId, direction: ShareDirection) -> Result<()> {
        let other = self.player_index(with)?;
        if other == index {
            return Err(GameError::invalid("cannot share knowledge with yourself"));
        }
        self.board.get(city)?;

        let (actor, partner) = if index < other {
            let (left, right) = self.players.split_at_mut(other);
            (&mut left[index], &mut right[0])
        } else {
            let (left, right) = self.players.split_at_mut(index);
            (&mut right[0], &mut left[other])
        };
        actor.share_knowledge(partner, city, direction)
    }

    /// Deliver pending events to listeners.
    fn flush(&mut self) {
        let events = self.events.drain();
        self.listeners.dispatch(&events);
        self.event_log.extend(events);
    }
}
