//! Snooker frame implementation.

use glam::Vec2;
use log::{debug, info, trace};

use crate::core::{
    Ball, BallId, BallKind, Breaker, Colour, FrameConfig, FramePhase, GameRng, MatchState, PlayerId,
    TableCommand, TableEvent,
};
use crate::error::{Result, RulesError};
use crate::rules::frame_end::{frame_decided, leader, points_remaining_on_table};
use crate::rules::{
    BallOn, FoulDetector, GameResult, PotLegality, RespotManager, RulesEngine, ShotContext,
    TurnSummary, COLOUR_SEQUENCE,
};
use crate::table::{balls_stationary, TableGeometry};

/// A snooker frame between two players.
///
/// Holds the configuration and the RNG used to pick the first breaker. The
/// frame itself lives in the `MatchState` returned by [`FrameBuilder::build`].
#[derive(Clone, Debug)]
pub struct SnookerFrame {
    config: FrameConfig,
    rng: GameRng,
    frames_started: u32,
}

/// Builder for creating a SnookerFrame.
#[derive(Clone, Debug, Default)]
pub struct FrameBuilder {
    config: FrameConfig,
    layout: Option<Vec<(BallKind, Vec2)>>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: FrameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn geometry(mut self, geometry: TableGeometry) -> Self {
        self.config = self.config.with_geometry(geometry);
        self
    }

    pub fn reds(mut self, reds: u8) -> Self {
        self.config = self.config.with_reds(reds);
        self
    }

    pub fn breaker(mut self, breaker: Breaker) -> Self {
        self.config = self.config.with_breaker(breaker);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Start from an explicit layout instead of the standard rack.
    ///
    /// Balls get ids in layout order. Used for practice positions and
    /// tests; `new_frame` always racks the standard layout.
    pub fn layout(mut self, layout: Vec<(BallKind, Vec2)>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Build the frame and initial state.
    ///
    /// Fails if the configuration or the explicit layout cannot start a
    /// frame: reds outside 1-15, more than one cue ball, or more than 15
    /// reds on the table.
    pub fn build(self) -> Result<(SnookerFrame, MatchState)> {
        self.config.validate()?;

        let mut rng = GameRng::new(self.config.seed);
        let breaker = match self.config.breaker {
            Breaker::Player(player) => player,
            Breaker::Random => rng.pick_player(),
        };

        let layout = self
            .layout
            .unwrap_or_else(|| self.config.geometry.rack(self.config.reds));
        let state = MatchState::with_layout(breaker, &layout)?;

        info!(
            "Frame started: {} balls on the table, {} to break",
            state.registry.len(),
            breaker
        );

        let frame = SnookerFrame {
            config: self.config,
            rng,
            frames_started: 1,
        };
        Ok((frame, state))
    }
}

impl SnookerFrame {
    /// Get the table geometry.
    #[must_use]
    pub fn geometry(&self) -> &TableGeometry {
        &self.config.geometry
    }

    /// Frames racked by this engine, including the current one.
    #[must_use]
    pub fn frames_started(&self) -> u32 {
        self.frames_started
    }

    /// Seed the breaker draw was made with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether the cue ball in hand may go at `position`.
    ///
    /// Pure; hosts poll this while the player drags the cue ball.
    #[must_use]
    pub fn can_place_cue_ball(&self, state: &MatchState, position: Vec2) -> bool {
        state.phase == FramePhase::BallInHand
            && RespotManager::can_place_cue_ball(&self.config.geometry, &state.registry, position)
    }

    /// Whether the host's velocity snapshot has settled, using the
    /// configured threshold.
    #[must_use]
    pub fn balls_stationary<I>(&self, velocities: I) -> bool
    where
        I: IntoIterator<Item = Vec2>,
    {
        balls_stationary(velocities, self.config.stationary_threshold)
    }

    /// Colours a player may nominate, in sequence order.
    #[must_use]
    pub fn nomination_options(&self) -> [Colour; 6] {
        COLOUR_SEQUENCE
    }

    /// Record a position reported by the host.
    pub fn update_position(
        &self,
        state: &mut MatchState,
        ball: BallId,
        position: Vec2,
    ) -> Result<()> {
        if state.registry.update_position(ball, position) {
            Ok(())
        } else {
            Err(RulesError::UnknownBall(ball))
        }
    }

    /// Record a batch of reported positions, skipping balls no longer on the
    /// table. Returns how many were updated.
    pub fn sync_positions<I>(&self, state: &mut MatchState, positions: I) -> usize
    where
        I: IntoIterator<Item = (BallId, Vec2)>,
    {
        state.registry.sync_positions(positions)
    }

    /// Rack a fresh frame in `state`.
    ///
    /// The other player breaks. Scores, histories, the endgame and the ball
    /// on all reset. The host is told to remove every old ball and spawn the
    /// new rack.
    pub fn new_frame(&mut self, state: &mut MatchState) {
        let breaker = state.breaker.opponent();
        let old: Vec<BallId> = state.registry.iter().map(|ball| ball.id).collect();
        for id in old {
            state.registry.remove(id);
            state.push_command(TableCommand::Remove(id));
        }

        state.ledger.reset();
        state.endgame.reset();
        state.phase = FramePhase::AwaitingShot;
        state.breaker = breaker;
        state.current_player = breaker;
        state.ball_on = BallOn::Red;
        state.nominated = None;
        state.shot = None;
        state.shot_number = 0;

        for (kind, position) in self.config.geometry.rack(self.config.reds) {
            state.spawn_ball(kind, position);
        }
        self.frames_started += 1;

        info!("Frame {} started, {} to break", self.frames_started, breaker);
    }

    /// The result, once the frame is over.
    #[must_use]
    pub fn result(&self, state: &MatchState) -> Option<GameResult> {
        self.is_terminal(state)
    }

    fn check_phase(state: &MatchState, expected: FramePhase, action: &'static str) -> Result<()> {
        match state.phase {
            phase if phase == expected => Ok(()),
            FramePhase::GameOver => Err(RulesError::FrameOver),
            phase => Err(RulesError::InvalidPhase { action, phase }),
        }
    }

    /// Colours that go back on the table after a shot.
    ///
    /// Everything potted goes back, except a colour potted legally in the
    /// endgame sequence.
    fn colours_to_respot(shot: &ShotContext, ball_on_before: BallOn, legal: bool) -> Vec<Colour> {
        if legal && ball_on_before.is_endgame() {
            return Vec::new();
        }
        shot.colours_potted().collect()
    }
}

impl RulesEngine for SnookerFrame {
    fn config(&self) -> &FrameConfig {
        &self.config
    }

    fn on_shot_released(&mut self, state: &mut MatchState) -> Result<()> {
        Self::check_phase(state, FramePhase::AwaitingShot, "release a shot")?;
        let cue = state.registry.cue_ball().ok_or(RulesError::CueBallMissing)?.id;

        state.shot_number += 1;
        state.shot = Some(ShotContext::new(state.current_player, cue));
        state.phase = FramePhase::BallsMoving;

        debug!(
            "Shot {} by {}, {} on",
            state.shot_number, state.current_player, state.ball_on
        );
        Ok(())
    }

    fn on_event(&mut self, state: &mut MatchState, event: TableEvent) -> Result<()> {
        if state.phase != FramePhase::BallsMoving {
            trace!("Ignoring {:?} while {}", event, state.phase);
            return Ok(());
        }
        let Some(shot) = state.shot.as_mut() else {
            return Err(RulesError::NoShotInProgress);
        };

        match event {
            TableEvent::Collision(collision) => {
                let Some(other) = collision.other(shot.cue_ball()) else {
                    return Ok(());
                };
                let ball = state
                    .registry
                    .get(other)
                    .copied()
                    .ok_or(RulesError::UnknownBall(other))?;
                if shot.record_contact(ball) {
                    trace!("First contact: {}", ball.kind);
                }
            }
            TableEvent::Potted(id) => {
                let ball = state.registry.remove(id).ok_or(RulesError::UnknownBall(id))?;
                shot.record_pot(ball);
                trace!("Potted: {}", ball.kind);
                state.push_command(TableCommand::Remove(id));
            }
        }
        Ok(())
    }

    fn on_balls_stationary(&mut self, state: &mut MatchState) -> Result<TurnSummary> {
        Self::check_phase(state, FramePhase::BallsMoving, "settle the table")?;
        let mut shot = state.shot.take().ok_or(RulesError::NoShotInProgress)?;
        state.phase = FramePhase::HandlingTurnEnd;

        let player = shot.player();
        let ball_on_before = state.ball_on;

        FoulDetector::evaluate(&mut shot, state.ball_on, state.nominated);
        let outcome = PotLegality::evaluate(&mut shot, state);

        let points_scored = state.ledger.process_turn(&shot, state.shot_number);
        let foul = shot.foul();
        if let Some(foul) = foul {
            state.ledger.add_foul(player, foul.points, foul.reason, state.shot_number);
        }

        let respotted = if outcome.frame_complete {
            Vec::new()
        } else {
            Self::colours_to_respot(&shot, ball_on_before, outcome.legal)
        };
        RespotManager::respot_colours(state, &self.config.geometry, &respotted);

        let continues = outcome.legal && !outcome.frame_complete;
        if !continues {
            let finished = state.ledger.end_break(player);
            state.current_player = player.opponent();
            if foul.is_none() && !state.endgame.is_active() {
                state.ball_on = BallOn::Red;
                state.nominated = None;
            }
            debug!("{} ends a break of {}, {} to play", player, finished, state.current_player);
        }

        let colour_owed = continues && state.ball_on == BallOn::Colour;
        if state.registry.reds_remaining() == 0 && !state.endgame.is_active() && !colour_owed {
            let first = state.endgame.activate();
            state.ball_on = BallOn::Sequence(first);
            state.nominated = None;
            info!("Reds cleared, colours in sequence from {}", first);
        }

        let remaining = points_remaining_on_table(&state.registry, state.ball_on);
        state.phase = if outcome.frame_complete || frame_decided(state.ledger.lead(), remaining) {
            if continues {
                state.ledger.end_break(player);
            }
            FramePhase::GameOver
        } else if shot.cue_potted() {
            FramePhase::BallInHand
        } else if outcome.nomination_required {
            FramePhase::AwaitingNomination
        } else {
            FramePhase::AwaitingShot
        };

        if state.phase == FramePhase::GameOver {
            info!(
                "Frame over at {}-{}, {} remaining",
                state.score(PlayerId::ONE),
                state.score(PlayerId::TWO),
                remaining
            );
        }

        Ok(TurnSummary {
            shot: state.shot_number,
            player,
            foul,
            points_scored,
            legal_pot: outcome.legal,
            respotted,
            next_player: state.current_player,
            phase: state.phase,
        })
    }

    fn nominate_colour(&mut self, state: &mut MatchState, colour: Colour) -> Result<()> {
        Self::check_phase(state, FramePhase::AwaitingNomination, "nominate a colour")?;
        state.nominated = Some(colour);
        state.phase = FramePhase::AwaitingShot;
        debug!("{} nominates {}", state.current_player, colour);
        Ok(())
    }

    fn place_cue_ball(&mut self, state: &mut MatchState, position: Vec2) -> Result<bool> {
        Self::check_phase(state, FramePhase::BallInHand, "place the cue ball")?;
        match RespotManager::place_cue_ball(state, &self.config.geometry, position) {
            Some(Ball { id, .. }) => {
                state.phase = FramePhase::AwaitingShot;
                debug!("Cue ball {} placed at ({:.1}, {:.1})", id, position.x, position.y);
                Ok(true)
            }
            None => {
                trace!("Rejected cue ball placement at ({:.1}, {:.1})", position.x, position.y);
                Ok(false)
            }
        }
    }

    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        if state.phase != FramePhase::GameOver {
            return None;
        }
        let result = match leader(state.score(PlayerId::ONE), state.score(PlayerId::TWO)) {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        };
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CollisionEvent;
    use crate::rules::{FoulReason, FOUL_MINIMUM};

    const CUE: BallId = BallId(0);

    /// Cue, two reds, all six colours on their spots.
    fn small_table() -> (SnookerFrame, MatchState) {
        let geometry = TableGeometry::default();
        let mut layout = vec![
            (BallKind::Cue, geometry.cue_start()),
            (BallKind::Red, Vec2::new(800.0, 100.0)),
            (BallKind::Red, Vec2::new(800.0, 400.0)),
        ];
        for colour in Colour::ALL {
            layout.push((BallKind::Colour(colour), geometry.spot(colour)));
        }
        FrameBuilder::new()
            .breaker(Breaker::Player(PlayerId::ONE))
            .layout(layout)
            .build()
            .unwrap()
    }

    fn colour_id(state: &MatchState, colour: Colour) -> BallId {
        state.registry.colour(colour).map(|b| b.id).unwrap()
    }

    fn play(
        frame: &mut SnookerFrame,
        state: &mut MatchState,
        hit: BallId,
        pots: &[BallId],
    ) -> TurnSummary {
        frame.on_shot_released(state).unwrap();
        frame.on_collision(state, CollisionEvent::new(CUE, hit)).unwrap();
        for &ball in pots {
            frame.on_ball_potted(state, ball).unwrap();
        }
        frame.on_balls_stationary(state).unwrap()
    }

    #[test]
    fn test_build_standard_rack() {
        let (frame, state) = FrameBuilder::new().seed(3).build().unwrap();
        assert_eq!(state.registry.len(), 22);
        assert_eq!(state.registry.reds_remaining(), 15);
        assert_eq!(state.phase(), FramePhase::AwaitingShot);
        assert_eq!(frame.frames_started(), 1);
        assert_eq!(frame.seed(), 3);
    }

    #[test]
    fn test_random_breaker_is_seeded() {
        let (_, a) = FrameBuilder::new().seed(11).build().unwrap();
        let (_, b) = FrameBuilder::new().seed(11).build().unwrap();
        assert_eq!(a.current_player, b.current_player);
    }

    #[test]
    fn test_red_then_nominated_colour() {
        let (mut frame, mut state) = small_table();

        let summary = play(&mut frame, &mut state, BallId(1), &[BallId(1)]);
        assert!(summary.legal_pot);
        assert_eq!(summary.points_scored, 1);
        assert_eq!(state.phase(), FramePhase::AwaitingNomination);
        assert_eq!(state.ball_on(), BallOn::Colour);

        frame.nominate_colour(&mut state, Colour::Black).unwrap();
        let black = colour_id(&state, Colour::Black);
        let summary = play(&mut frame, &mut state, black, &[black]);

        assert_eq!(summary.points_scored, 7);
        assert_eq!(summary.respotted, vec![Colour::Black]);
        assert_eq!(state.score(PlayerId::ONE), 8);
        assert_eq!(state.ledger.current_break(), 8);
        assert_eq!(state.current_player, PlayerId::ONE);
        assert_eq!(state.ball_on(), BallOn::Red);
        assert!(state.registry.colour(Colour::Black).is_some());
    }

    #[test]
    fn test_miss_passes_turn_and_closes_break() {
        let (mut frame, mut state) = small_table();
        play(&mut frame, &mut state, BallId(1), &[BallId(1)]);
        frame.nominate_colour(&mut state, Colour::Pink).unwrap();

        let pink = colour_id(&state, Colour::Pink);
        let summary = play(&mut frame, &mut state, pink, &[]);

        assert!(summary.foul.is_none());
        assert_eq!(summary.next_player, PlayerId::TWO);
        assert_eq!(state.ball_on(), BallOn::Red);
        assert_eq!(state.nominated, None);
        assert_eq!(state.ledger.highest_break(PlayerId::ONE), 1);
    }

    #[test]
    fn test_no_contact_foul() {
        let (mut frame, mut state) = small_table();
        frame.on_shot_released(&mut state).unwrap();
        let summary = frame.on_balls_stationary(&mut state).unwrap();

        let foul = summary.foul.unwrap();
        assert_eq!(foul.points, FOUL_MINIMUM);
        assert_eq!(foul.reason, FoulReason::NoContact);
        assert_eq!(state.score(PlayerId::TWO), 4);
        assert_eq!(state.current_player, PlayerId::TWO);
    }

    #[test]
    fn test_in_off_gives_ball_in_hand() {
        let (mut frame, mut state) = small_table();
        let summary = play(&mut frame, &mut state, BallId(1), &[BallId(1), CUE]);

        assert_eq!(summary.foul.map(|f| f.reason), Some(FoulReason::CueBallPotted));
        assert_eq!(summary.points_scored, 0);
        assert_eq!(state.phase(), FramePhase::BallInHand);
        assert!(state.registry.cue_ball().is_none());

        let commands = state.drain_commands();
        assert!(commands.contains(&TableCommand::Remove(CUE)));

        let d = frame.geometry().d_centre();
        assert!(!frame.place_cue_ball(&mut state, frame.geometry().centre).unwrap());
        assert_eq!(state.phase(), FramePhase::BallInHand);

        let spot = d - Vec2::new(30.0, 0.0);
        assert!(frame.can_place_cue_ball(&state, spot));
        assert!(frame.place_cue_ball(&mut state, spot).unwrap());
        assert_eq!(state.phase(), FramePhase::AwaitingShot);
        assert!(state.registry.cue_ball().is_some());
    }

    #[test]
    fn test_phase_errors() {
        let (mut frame, mut state) = small_table();

        assert_eq!(
            frame.nominate_colour(&mut state, Colour::Blue),
            Err(RulesError::InvalidPhase {
                action: "nominate a colour",
                phase: FramePhase::AwaitingShot
            })
        );
        assert!(frame.on_balls_stationary(&mut state).is_err());
        assert!(frame.place_cue_ball(&mut state, Vec2::ZERO).is_err());

        frame.on_shot_released(&mut state).unwrap();
        assert!(frame.on_shot_released(&mut state).is_err());
    }

    #[test]
    fn test_events_ignored_outside_shot() {
        let (mut frame, mut state) = small_table();
        frame.on_ball_potted(&mut state, BallId(1)).unwrap();
        assert_eq!(state.registry.reds_remaining(), 2);
    }

    #[test]
    fn test_unknown_ball_rejected() {
        let (mut frame, mut state) = small_table();
        frame.on_shot_released(&mut state).unwrap();
        assert_eq!(
            frame.on_ball_potted(&mut state, BallId(99)),
            Err(RulesError::UnknownBall(BallId(99)))
        );
    }

    #[test]
    fn test_missing_cue_ball() {
        let (mut frame, mut state) = FrameBuilder::new()
            .breaker(Breaker::Player(PlayerId::ONE))
            .layout(vec![(BallKind::Red, Vec2::new(800.0, 250.0))])
            .build()
            .unwrap();
        assert_eq!(frame.on_shot_released(&mut state), Err(RulesError::CueBallMissing));
    }

    #[test]
    fn test_build_rejects_bad_red_count() {
        let config: FrameConfig = serde_json::from_value(serde_json::json!({
            "geometry": TableGeometry::default(),
            "reds": 40,
            "breaker": "Random",
            "seed": 0,
            "stationary_threshold": 0.15,
        }))
        .unwrap();
        assert_eq!(
            FrameBuilder::new().config(config).build().err(),
            Some(RulesError::InvalidReds(40))
        );
        assert_eq!(FrameBuilder::new().reds(0).build().err(), Some(RulesError::InvalidReds(0)));
        assert!(FrameBuilder::new().reds(6).build().is_ok());
    }

    #[test]
    fn test_build_rejects_bad_layouts() {
        let cue = TableGeometry::default().cue_start();
        let two_cues = vec![(BallKind::Cue, cue), (BallKind::Cue, cue + Vec2::X * 30.0)];
        assert_eq!(
            FrameBuilder::new().layout(two_cues).build().err(),
            Some(RulesError::MultipleCueBalls(2))
        );

        let mut crowded = vec![(BallKind::Cue, cue)];
        for i in 0..16 {
            let (col, row) = ((i % 8) as f32, (i / 8) as f32);
            crowded.push((BallKind::Red, Vec2::new(600.0 + 30.0 * col, 200.0 + 50.0 * row)));
        }
        assert_eq!(
            FrameBuilder::new().layout(crowded).build().err(),
            Some(RulesError::TooManyReds(16))
        );
    }

    #[test]
    fn test_balls_stationary_uses_configured_threshold() {
        let (frame, _) = small_table();
        assert!(frame.balls_stationary([Vec2::ZERO, Vec2::new(0.1, -0.1)]));
        assert!(!frame.balls_stationary([Vec2::ZERO, Vec2::new(0.0, 0.2)]));

        let config = FrameConfig::default().with_stationary_threshold(0.5);
        let (loose, _) = FrameBuilder::new().config(config).build().unwrap();
        assert!(loose.balls_stationary([Vec2::new(0.0, 0.2)]));
        assert!(!loose.balls_stationary([Vec2::new(-0.6, 0.0)]));
    }

    #[test]
    fn test_update_position() {
        let (frame, mut state) = small_table();
        frame.update_position(&mut state, CUE, Vec2::new(150.0, 250.0)).unwrap();
        assert_eq!(state.registry.cue_ball().map(|b| b.position), Some(Vec2::new(150.0, 250.0)));
        assert!(frame.update_position(&mut state, BallId(42), Vec2::ZERO).is_err());
    }

    #[test]
    fn test_new_frame_alternates_breaker() {
        let (mut frame, mut state) = small_table();
        play(&mut frame, &mut state, BallId(1), &[BallId(1)]);
        state.drain_commands();

        frame.new_frame(&mut state);
        assert_eq!(state.breaker, PlayerId::TWO);
        assert_eq!(state.current_player, PlayerId::TWO);
        assert_eq!(state.score(PlayerId::ONE), 0);
        assert_eq!(state.registry.reds_remaining(), 15);
        assert_eq!(frame.frames_started(), 2);

        let commands = state.drain_commands();
        let removes = commands.iter().filter(|c| matches!(c, TableCommand::Remove(_))).count();
        let spawns = commands.iter().filter(|c| matches!(c, TableCommand::Spawn(_))).count();
        assert_eq!(removes, 8);
        assert_eq!(spawns, 22);
    }

    #[test]
    fn test_nomination_options() {
        let (frame, _) = small_table();
        assert_eq!(frame.nomination_options(), Colour::ALL);
    }
}
