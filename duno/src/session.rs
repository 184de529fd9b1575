use std::mem;

use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::{
    card::{Card, Color, Rank},
    constants::DEFAULT_HAND_SIZE,
    controller::Controller,
    deck::{build_catalog, Piles},
    effect::{self, Effect},
    error::{Result, UnoError},
    event::GameEvent,
    player::{Hand, ParticipantKind, Player, Side},
    rules::is_playable,
    turn::{
        Decision, Direction, Disposition, PlayTurnResult, TurnActionResult, TurnController,
        TurnState,
    },
};

const DEFAULT_SEED: u64 = 0xD0_0D_5EED;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Builds a [`Session`], optionally from a stacked deck so tests can control
/// every card dealt.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    participants: Option<[ParticipantKind; 2]>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    /// Deals from `deck` front to front instead of a shuffled catalog: side A
    /// gets the first hand, side B the second, and the next card opens the
    /// discard pile.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_participants(mut self, a: ParticipantKind, b: ParticipantKind) -> Self {
        self.participants = Some([a, b]);
        self
    }

    pub fn build(self) -> Result<Session<StdRng>> {
        let rng = StdRng::seed_from_u64(self.config.seed);
        self.build_with_rng(rng)
    }

    pub fn build_with_rng<R: Rng>(self, mut rng: R) -> Result<Session<R>> {
        let hand_size = self.config.hand_size;
        if hand_size == 0 {
            return Err(UnoError::InvalidConfiguration("hand size must be at least one"));
        }

        let stacked = self.deck.is_some();
        let cards = self.deck.unwrap_or_else(build_catalog);
        if cards.len() <= 2 * hand_size {
            return Err(UnoError::InvalidConfiguration(
                "deck is too small to deal both hands and open the discard pile",
            ));
        }
        if cards[2 * hand_size..]
            .iter()
            .all(|card| card.rank() == Rank::DrawFour)
        {
            return Err(UnoError::InvalidConfiguration(
                "no card left after dealing can open the discard pile",
            ));
        }
        let total_cards = cards.len();

        let mut piles = Piles::new(cards);
        if !stacked {
            piles.shuffle(&mut rng);
        }

        let kinds = self
            .participants
            .unwrap_or([ParticipantKind::Human, ParticipantKind::Cpu]);
        let mut players = Vec::with_capacity(2);
        for side in Side::iter() {
            let mut cards = Vec::with_capacity(hand_size);
            for _ in 0..hand_size {
                cards.push(piles.draw(&mut rng)?);
            }
            players.push(Player::new(side, kinds[side.index()], cards));
        }
        let [a, b]: [Player; 2] = players
            .try_into()
            .map_err(|_| UnoError::InvalidConfiguration("expected exactly two players"))?;

        debug!(hand_size, total_cards, stacked, "dealt hands");

        Ok(Session {
            piles,
            players: [a, b],
            turns: TurnController::default(),
            rng,
            events: Vec::new(),
            total_cards,
            turns_taken: 0,
        })
    }
}

/// One two-party game, from the deal to a winner.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    piles: Piles,
    players: [Player; 2],
    turns: TurnController,
    rng: R,
    events: Vec<GameEvent>,
    total_cards: usize,
    turns_taken: usize,
}

impl Session<StdRng> {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self> {
        SessionBuilder::new().with_config(config).build()
    }
}

impl<R: Rng> Session<R> {
    /// Flips the opening card and hands the first turn to `starter`.
    ///
    /// A DrawFour never opens: it is shuffled back and another card flipped.
    /// Opening action cards hit `starter` straight away, and an opening
    /// ColorChange asks `controller`, which must speak for `starter`, to pick
    /// the color.
    pub fn start(&mut self, starter: Side, controller: &mut dyn Controller) -> Result<()> {
        if self.turns.state() != TurnState::Idle {
            return Err(UnoError::AlreadyStarted);
        }

        let opening = self.flip_opening_card()?;
        self.turns.begin(starter)?;
        info!(%opening, %starter, "session started");
        self.emit(GameEvent::OpeningCard(opening));

        let effects = effect::resolve_opening(&opening, starter);
        let skips = self.apply_effects(&effects, starter, controller)?;
        if skips > 0 {
            self.turns.skip_current(skips)?;
        }
        Ok(())
    }

    fn flip_opening_card(&mut self) -> Result<Card> {
        if !self
            .piles
            .draw_pile_has(|card| card.rank() != Rank::DrawFour)
        {
            return Err(UnoError::InvalidConfiguration(
                "no card left after dealing can open the discard pile",
            ));
        }
        loop {
            let card = self.piles.draw(&mut self.rng)?;
            if card.rank() == Rank::DrawFour {
                debug!(%card, "draw four cannot open, reshuffling it");
                self.piles.return_to_draw(card, &mut self.rng);
                continue;
            }
            self.piles.place_on_discard(card);
            return Ok(card);
        }
    }

    /// Asks the current actor for decisions until one can be applied, then
    /// applies it.
    pub fn take_turn(&mut self, controller: &mut dyn Controller) -> Result<PlayTurnResult> {
        loop {
            let actor = self.turns.awaiting()?;
            let top = self.piles.top_card()?;
            let decision = controller.turn_decision(actor, self.hand(actor), top);
            match self.apply_decision(decision, controller) {
                Err(error) if error.is_recoverable() => self.reject(actor, error),
                result => return result,
            }
        }
    }

    /// Applies one decision of the current actor. Rejected decisions leave
    /// the session untouched.
    pub fn apply_decision(
        &mut self,
        decision: Decision,
        controller: &mut dyn Controller,
    ) -> Result<PlayTurnResult> {
        let actor = self.turns.awaiting()?;
        let top = self.piles.top_card()?;

        match decision {
            Decision::PlayAt(index) => {
                let card = self.hand(actor).get(index)?;
                if !is_playable(&card, &top) {
                    return Err(UnoError::IllegalPlay { card, top });
                }
                self.hand_mut(actor).play(index)?;
                self.play_card(actor, card, controller)
            }
            Decision::DrawCard => {
                let Some(card) = self.draw_for(actor, false) else {
                    self.turns.pass()?;
                    self.turns_taken += 1;
                    return Ok(PlayTurnResult {
                        turn_action_result: TurnActionResult::NothingToDraw,
                        won: false,
                    });
                };

                if is_playable(&card, &top)
                    && controller.drawn_card_disposition(actor, card, top)
                        == Disposition::PlayImmediately
                {
                    let index = self.hand(actor).count() - 1;
                    self.hand_mut(actor).play(index)?;
                    return self.play_card(actor, card, controller);
                }

                self.turns.pass()?;
                self.turns_taken += 1;
                Ok(PlayTurnResult {
                    turn_action_result: TurnActionResult::SelfDraw,
                    won: false,
                })
            }
        }
    }

    /// Alternates between `a` and `b` until someone wins.
    pub fn run(&mut self, a: &mut dyn Controller, b: &mut dyn Controller) -> Result<Side> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.take_seated_turn(a, b)?;
        }
    }

    /// Like [`Session::run`], but gives up after `max_turns` turns.
    pub fn run_with_limit(
        &mut self,
        a: &mut dyn Controller,
        b: &mut dyn Controller,
        max_turns: usize,
    ) -> Result<Option<Side>> {
        for _ in 0..max_turns {
            if self.winner().is_some() {
                break;
            }
            self.take_seated_turn(a, b)?;
        }
        Ok(self.winner())
    }

    fn take_seated_turn(
        &mut self,
        a: &mut dyn Controller,
        b: &mut dyn Controller,
    ) -> Result<PlayTurnResult> {
        let controller: &mut dyn Controller = match self.turns.awaiting()? {
            Side::A => a,
            Side::B => b,
        };
        self.take_turn(controller)
    }

    fn play_card(
        &mut self,
        actor: Side,
        card: Card,
        controller: &mut dyn Controller,
    ) -> Result<PlayTurnResult> {
        self.piles.place_on_discard(card);
        self.turns_taken += 1;
        info!(%actor, %card, "card played");
        self.emit(GameEvent::CardPlayed { actor, card });

        let turn_action_result = card.rank().into();
        self.turns.begin_resolving(card)?;
        let against = actor.other();
        let effects = effect::resolve(&card, actor, against);

        if self.hand(actor).is_empty() {
            // The game ends here, but a wild card still gets its color.
            let color_choices = effects
                .into_iter()
                .filter(|effect| matches!(effect, Effect::RequireColorChoice { .. }))
                .collect::<Vec<_>>();
            self.apply_effects(&color_choices, against, controller)?;
            self.turns.finish_with_winner(actor);
            info!(winner = %actor, score = self.winner_score(), "game won");
            self.emit(GameEvent::GameWon(actor));
            return Ok(PlayTurnResult {
                turn_action_result,
                won: true,
            });
        }

        let skips = self.apply_effects(&effects, against, controller)?;
        self.turns.finish_resolving(skips)?;

        Ok(PlayTurnResult {
            turn_action_result,
            won: false,
        })
    }

    fn apply_effects(
        &mut self,
        effects: &[Effect],
        against: Side,
        controller: &mut dyn Controller,
    ) -> Result<usize> {
        let mut skips = 0;
        for effect in effects {
            match *effect {
                Effect::ForceDraw { target, count } => {
                    let drawn = (0..count)
                        .map_while(|_| self.draw_for(target, true))
                        .count();
                    info!(%target, drawn, "forced draw");
                    self.emit(GameEvent::EffectApplied {
                        kind: effect.kind(),
                        affected: target,
                        magnitude: drawn,
                    });
                }
                Effect::SkipNextTurn => {
                    skips += 1;
                    info!(skipped = %against, "turn skipped");
                    self.emit(GameEvent::TurnSkipped(against));
                }
                Effect::ToggleDirection => {
                    self.turns.toggle_direction();
                    info!(direction = %self.turns.direction(), "direction toggled");
                    self.emit(GameEvent::EffectApplied {
                        kind: effect.kind(),
                        affected: against,
                        magnitude: 1,
                    });
                }
                Effect::RequireColorChoice { by } => {
                    let color = self.request_color(by, controller);
                    self.piles.override_top_color(color)?;
                    info!(%by, %color, "color chosen");
                    self.emit(GameEvent::ColorChanged(color));
                }
            }
        }
        Ok(skips)
    }

    fn request_color(&mut self, by: Side, controller: &mut dyn Controller) -> Color {
        loop {
            let color = controller.color_choice(by);
            if !color.is_wild() {
                return color;
            }
            self.reject(by, UnoError::InvalidColorChoice(color));
        }
    }

    /// Draws one card into `actor`'s hand. An exhausted deck is not an error
    /// here: the draw just does not happen.
    fn draw_for(&mut self, actor: Side, forced: bool) -> Option<Card> {
        let player = &mut self.players[actor.index()];
        match player.hand.draw(&mut self.piles, &mut self.rng) {
            Ok(card) => {
                debug!(%actor, %card, forced, "card drawn");
                self.emit(GameEvent::CardDrawn {
                    actor,
                    card,
                    forced,
                });
                Some(card)
            }
            Err(error) => {
                debug!(%actor, %error, forced, "draw skipped");
                self.emit(GameEvent::DrawSkipped { actor });
                None
            }
        }
    }

    fn reject(&mut self, actor: Side, reason: UnoError) {
        warn!(%actor, %reason, "decision rejected");
        self.emit(GameEvent::DecisionRejected { actor, reason });
    }
}

impl<R> Session<R> {
    pub fn state(&self) -> TurnState {
        self.turns.state()
    }

    pub fn direction(&self) -> Direction {
        self.turns.direction()
    }

    pub fn current_actor(&self) -> Option<Side> {
        self.turns.awaiting().ok()
    }

    pub fn winner(&self) -> Option<Side> {
        self.turns.winner()
    }

    /// Points the winner collects from the cards left in the loser's hand.
    pub fn winner_score(&self) -> Option<u32> {
        self.winner()
            .map(|winner| self.hand(winner.other()).points())
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn hand(&self, side: Side) -> &Hand {
        &self.player(side).hand
    }

    fn hand_mut(&mut self, side: Side) -> &mut Hand {
        &mut self.players[side.index()].hand
    }

    pub fn top_card(&self) -> Result<Card> {
        self.piles.top_card()
    }

    pub fn draw_pile_count(&self) -> usize {
        self.piles.draw_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.piles.discard_count()
    }

    /// Cards currently in the piles and both hands. Always equal to
    /// [`Session::total_cards`].
    pub fn card_count(&self) -> usize {
        self.piles.draw_count()
            + self.piles.discard_count()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
