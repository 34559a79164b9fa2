//! Game facade: press handling, move execution, run collection.
//!
//! The two-step "press a card, then press a destination" interaction is a
//! tiny explicit state machine: [`Mode::Idle`] or [`Mode::Moving`] with the
//! selected card inside the variant, so a selection without a mode cannot be
//! represented.
//!
//! ## Error routing
//!
//! Refused player actions reset the mode to `Idle`, go to the sink as
//! [`GameEvent::ActionRefused`], and come back as
//! [`GameError::Illegal`]. Untracked card ids are caller bugs: they abort
//! the operation without mutating, are logged at error level, and are *not*
//! sent to the presentation sink.

use im::Vector;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Deck;
use crate::core::errors::{GameError, Refusal};
use crate::core::events::{EventSink, GameEvent};
use crate::core::ids::{CardId, ColumnId};
use crate::core::rng::GameRng;
use crate::rules::{self, RuleConfig, SuitMatching};

/// Completed runs needed to win: eight 13-card runs exhaust the 104 cards.
pub const RUNS_TO_WIN: u8 = 8;

/// The press state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// No pending selection.
    Idle,
    /// A legal selection is armed and the next press places it.
    Moving(CardId),
}

/// What a successful press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// The card became the pending selection.
    Selected,
    /// The pending selection was placed.
    Moved,
}

/// An accepted player action, for history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Select(CardId),
    PlaceOn(CardId),
    PlaceOnEmpty(ColumnId),
    SupplementalDeal,
}

/// History entry: an accepted action and its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: PlayerAction,
    pub sequence: u32,
}

/// One game of spider.
#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    board: Board,
    rules: RuleConfig,
    mode: Mode,
    completed_runs: u8,
    seed: u64,
    history: Vector<ActionRecord>,
    next_sequence: u32,

    // Dealing cursors; see `deal.rs`.
    pub(super) deal_cursor: usize,
    pub(super) next_deal_column: usize,
    pub(super) initial_deal_done: bool,
    pub(super) stock_exhausted: bool,
}

/// Builder for a [`Game`].
///
/// Defaults: OS-entropy seed, suit-agnostic rules, freshly shuffled deck.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    rules: RuleConfig,
    deck: Option<Deck>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed, for reproducible games.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Select the suit-matching rule variant.
    #[must_use]
    pub fn suit_matching(mut self, suit_matching: SuitMatching) -> Self {
        self.rules.suit_matching = suit_matching;
        self
    }

    /// Use a pre-arranged deck instead of shuffling, for rigged layouts in
    /// tests and puzzles.
    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game: shuffled deck, empty board, opening deal pending.
    #[must_use]
    pub fn build(self) -> Game {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = self.deck.unwrap_or_else(|| Deck::shuffled(&mut rng));

        Game {
            deck,
            board: Board::new(),
            rules: self.rules,
            mode: Mode::Idle,
            completed_runs: 0,
            seed: rng.seed(),
            history: Vector::new(),
            next_sequence: 0,
            deal_cursor: 0,
            next_deal_column: 0,
            initial_deal_done: false,
            stock_exhausted: false,
        }
    }
}

impl Game {
    /// Start a new game from a seed. Deal ticks still have to be driven; see
    /// [`deal_tick`](Game::deal_tick) and
    /// [`run_initial_deal`](Game::run_initial_deal).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }

    // === Presses ===

    /// Handle a card press: a selection attempt in `Idle` mode, a placement
    /// attempt in `Moving` mode.
    pub fn select_or_place(
        &mut self,
        card: CardId,
        sink: &mut dyn EventSink,
    ) -> Result<Press, GameError> {
        match self.mode {
            Mode::Idle => self.try_select(card, sink),
            Mode::Moving(selected) => self.try_place(selected, card, sink),
        }
    }

    /// Handle a press on an empty column. Always a placement attempt, never
    /// a selection. If the column turns out to be occupied, the attempt is
    /// validated against its top card instead.
    pub fn select_or_place_on_empty_column(
        &mut self,
        column: ColumnId,
        sink: &mut dyn EventSink,
    ) -> Result<Press, GameError> {
        let Mode::Moving(selected) = self.mode else {
            return Err(self.refuse(Refusal::NoPendingSelection.into(), sink));
        };
        if !self.board.contains(selected) {
            self.mode = Mode::Idle;
            return Err(self.refuse(GameError::UntrackedCard(selected), sink));
        }
        if let Some(top) = self.board.top_of(column) {
            return self.try_place(selected, top, sink);
        }

        self.execute_move(selected, column, sink);
        self.record(PlayerAction::PlaceOnEmpty(column));
        self.mode = Mode::Idle;
        Ok(Press::Moved)
    }

    /// Drop the pending selection, if any.
    pub fn deselect(&mut self) {
        self.mode = Mode::Idle;
    }

    fn try_select(&mut self, card: CardId, sink: &mut dyn EventSink) -> Result<Press, GameError> {
        match rules::check_selection(&self.deck, &self.board, &self.rules, card) {
            Ok(()) => {
                self.mode = Mode::Moving(card);
                self.record(PlayerAction::Select(card));
                Ok(Press::Selected)
            }
            Err(err) => Err(self.refuse(err, sink)),
        }
    }

    fn try_place(
        &mut self,
        selected: CardId,
        destination: CardId,
        sink: &mut dyn EventSink,
    ) -> Result<Press, GameError> {
        // Any failed placement drops the selection.
        if !self.board.contains(selected) {
            self.mode = Mode::Idle;
            return Err(self.refuse(GameError::UntrackedCard(selected), sink));
        }
        match rules::check_destination(&self.deck, &self.board, selected, destination) {
            Ok(()) => {
                let Some(state) = self.board.state(destination).copied() else {
                    self.mode = Mode::Idle;
                    return Err(self.refuse(GameError::UntrackedCard(destination), sink));
                };
                self.execute_move(selected, state.column, sink);
                self.record(PlayerAction::PlaceOn(destination));
                self.mode = Mode::Idle;
                Ok(Press::Moved)
            }
            Err(err) => {
                self.mode = Mode::Idle;
                Err(self.refuse(err, sink))
            }
        }
    }

    // === Execution ===

    /// Move the contiguous stack starting at `selected` onto `to`, reveal
    /// the card exposed in the source column, and check the destination for
    /// a completed run.
    fn execute_move(&mut self, selected: CardId, to: ColumnId, sink: &mut dyn EventSink) {
        let Some(state) = self.board.state(selected).copied() else {
            error!("attempted to move {selected}, but it is not on the board");
            return;
        };
        let from = state.column;
        let Some(start) = self.board.position_in_column(selected) else {
            error!("attempted to move {selected}, but it is not in {from}");
            return;
        };

        let dest_start = self.board.column(to).len();
        let moved = self.board.transfer(from, start, to);
        sink.notify(GameEvent::CardsMoved {
            cards: moved,
            from,
            to,
            dest_start,
        });

        if let Some(top) = self.board.top_of(from) {
            if self.board.reveal(top) {
                sink.notify(GameEvent::CardRevealed { card: top });
            }
        }

        self.check_column(to, sink);
    }

    /// Collect a completed run from the column, if one has formed. At most
    /// one run is removed per call.
    fn check_column(&mut self, column: ColumnId, sink: &mut dyn EventSink) {
        let Some(start) =
            rules::completed_run_start(&self.deck, &self.board, &self.rules, column)
        else {
            return;
        };

        let cards = self.board.remove_suffix(column, start);
        self.completed_runs += 1;
        info!("run collected ({}/{})", self.completed_runs, RUNS_TO_WIN);
        sink.notify(GameEvent::RunCompleted {
            slot: self.completed_runs,
            cards,
        });

        if let Some(top) = self.board.top_of(column) {
            if self.board.reveal(top) {
                sink.notify(GameEvent::CardRevealed { card: top });
            }
        }

        if self.completed_runs == RUNS_TO_WIN {
            info!("all {RUNS_TO_WIN} runs collected");
            sink.notify(GameEvent::GameWon);
        }
    }

    /// Route a failure: log it, report player-facing refusals to the sink,
    /// and hand the error back for the caller to return.
    pub(super) fn refuse(&mut self, err: GameError, sink: &mut dyn EventSink) -> GameError {
        match err {
            GameError::Illegal(reason) => {
                warn!("refused: {reason}");
                sink.notify(GameEvent::ActionRefused { reason });
            }
            GameError::UntrackedCard(card) => {
                error!("no card with id {card} is tracked on the board");
            }
        }
        err
    }

    pub(super) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(super) fn record(&mut self, action: PlayerAction) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history.push_back(ActionRecord { action, sequence });
    }

    // === Queries ===

    /// The cards of a column, bottom to top.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> &[CardId] {
        self.board.column(column)
    }

    /// All columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[CardId]> {
        self.board.columns()
    }

    /// Read-only view of the whole board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The identity of a card by deck index.
    #[must_use]
    pub fn card_info(&self, card: CardId) -> &crate::cards::CardInfo {
        self.deck.get(card)
    }

    /// The board state of a dealt card.
    #[must_use]
    pub fn card_state(&self, card: CardId) -> Option<crate::board::CardState> {
        self.board.state(card).copied()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Runs collected so far (0..=8, never decreases).
    #[must_use]
    pub fn completed_run_count(&self) -> u8 {
        self.completed_runs
    }

    /// True once all eight runs are collected. Winning does not lock input;
    /// whether to stop accepting presses is a presentation decision.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.completed_runs >= RUNS_TO_WIN
    }

    /// Index of the next undealt card.
    #[must_use]
    pub fn deal_cursor(&self) -> usize {
        self.deal_cursor
    }

    #[must_use]
    pub fn is_initial_deal_complete(&self) -> bool {
        self.initial_deal_done
    }

    /// True once a supplemental deal was refused for lack of cards; the
    /// refusal is permanent.
    #[must_use]
    pub fn stock_exhausted(&self) -> bool {
        self.stock_exhausted
    }

    /// The shuffle seed, for reproducing this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Accepted player actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
