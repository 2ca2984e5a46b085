//! Caller-owned game context.
//!
//! `Game` owns exactly one authoritative [`GameState`] and is the boundary the
//! board UI, promotion prompt and clock talk to. Moves are proposed as a
//! from/to pair; a pawn reaching the far rank suspends the move until
//! [`Game::complete_promotion`] supplies the piece. Nothing is committed to
//! the log before that.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::config::RulesConfig;
use crate::errors::{ChessError, ChessResult, IllegalMove};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_validated_move;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::move_generation::legal_move_validation::{check_move, ValidatedMove};
use crate::termination::detector::evaluate;
use crate::termination::verdict::{Verdict, WinReason};

/// Result of [`Game::propose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Refused; the game is unchanged and the caller should re-prompt.
    Rejected(IllegalMove),
    /// Legal so far, but a promotion piece must be chosen before it counts.
    AwaitingPromotion { from: Square, to: Square },
    Applied { verdict: Verdict },
}

impl MoveOutcome {
    #[inline]
    pub fn accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    #[inline]
    pub fn requires_promotion_choice(&self) -> bool {
        matches!(self, MoveOutcome::AwaitingPromotion { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    pending_promotion: Option<ValidatedMove>,
    verdict: Verdict,
    config: RulesConfig,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position with the default rules.
    pub fn new() -> Self {
        let game = Self::from_state(GameState::new_game(), RulesConfig::default());
        info!("new game started at {}", game.started_at);
        game
    }

    pub fn with_config(config: RulesConfig) -> ChessResult<Self> {
        let state = initial_state(&config)?;
        let game = Self::from_state(state, config);
        info!(
            "new game started at {} from {}",
            game.started_at,
            game.state.to_fen()
        );
        Ok(game)
    }

    fn from_state(state: GameState, config: RulesConfig) -> Self {
        let started_at = Utc::now();
        let verdict = evaluate(&state, &config);
        Self {
            state,
            pending_promotion: None,
            verdict,
            config,
            started_at,
            finished_at: verdict.is_over().then_some(started_at),
        }
    }

    /// Discards the current game and sets up a fresh one with the same rules.
    pub fn start_new_game(&mut self) -> ChessResult<&GameState> {
        let state = initial_state(&self.config)?;
        *self = Self::from_state(state, self.config.clone());
        info!("new game started at {}", self.started_at);
        Ok(&self.state)
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// The suspended promotion move, if any.
    pub fn pending_promotion(&self) -> Option<(Square, Square)> {
        self.pending_promotion.map(|mv| (mv.from, mv.to))
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.state.is_in_check(side)
    }

    /// Legal targets for the piece on `from`; empty once play has stopped.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.verdict.is_over() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        legal_destinations(&self.state, from)
    }

    pub fn propose_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        self.ensure_in_play()?;

        let mv = match check_move(&self.state, from, to) {
            Ok(mv) => mv,
            Err(reason) => {
                debug!("rejected {from}-{to}: {reason}");
                return Ok(MoveOutcome::Rejected(reason));
            }
        };

        if mv.requires_promotion() {
            debug!("{from}-{to} awaits a promotion choice");
            self.pending_promotion = Some(mv);
            return Ok(MoveOutcome::AwaitingPromotion { from, to });
        }

        let verdict = self.commit(&mv, None)?;
        Ok(MoveOutcome::Applied { verdict })
    }

    /// Finishes the suspended promotion with `kind`.
    ///
    /// An unsuitable kind is refused and the move stays pending.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> ChessResult<Verdict> {
        let Some(mv) = self.pending_promotion else {
            warn!("promotion to {kind:?} requested with none pending");
            return Err(ChessError::NoPendingPromotion);
        };
        if !kind.is_promotion_choice() {
            warn!("refused promotion to {kind:?}");
            return Err(ChessError::InvalidPromotionPiece(kind));
        }

        let verdict = self.commit(&mv, Some(kind))?;
        self.pending_promotion = None;
        Ok(verdict)
    }

    /// Drops a suspended promotion; the pawn stays where it was.
    pub fn cancel_promotion(&mut self) -> ChessResult<()> {
        match self.pending_promotion.take() {
            Some(mv) => {
                debug!("promotion {}-{} cancelled", mv.from, mv.to);
                Ok(())
            }
            None => Err(ChessError::NoPendingPromotion),
        }
    }

    /// `side` gives up; the other side wins.
    pub fn resign(&mut self, side: Side) -> ChessResult<Verdict> {
        self.end_by(side, WinReason::Resignation)
    }

    /// The clock reports that `side` ran out of time.
    pub fn report_timeout(&mut self, side: Side) -> ChessResult<Verdict> {
        self.end_by(side, WinReason::Timeout)
    }

    /// Moves the review cursor, clamped to the log.
    pub fn set_cursor(&mut self, index: usize) -> ChessResult<usize> {
        self.ensure_no_pending_promotion()?;
        Ok(self.state.set_cursor(index))
    }

    pub fn undo(&mut self) -> ChessResult<usize> {
        self.ensure_no_pending_promotion()?;
        Ok(self.state.step_back())
    }

    pub fn redo(&mut self) -> ChessResult<usize> {
        self.ensure_no_pending_promotion()?;
        Ok(self.state.step_forward())
    }

    /// Board at the review cursor.
    #[inline]
    pub fn displayed_board(&self) -> Board {
        self.state.displayed_board()
    }

    fn commit(&mut self, mv: &ValidatedMove, promotion: Option<PieceKind>) -> ChessResult<Verdict> {
        let next = apply_validated_move(&self.state, mv, promotion)?;
        self.verdict = evaluate(&next, &self.config);
        self.state = next;
        if self.verdict.is_over() {
            self.finish();
        }
        Ok(self.verdict)
    }

    fn end_by(&mut self, loser: Side, reason: WinReason) -> ChessResult<Verdict> {
        if self.verdict.is_over() {
            warn!("{loser} tried to end a game that is already over");
            return Err(ChessError::GameOver(self.verdict));
        }
        self.pending_promotion = None;
        self.verdict = Verdict::Win {
            winner: loser.opposite(),
            reason,
        };
        self.finish();
        Ok(self.verdict)
    }

    fn finish(&mut self) {
        let finished_at = Utc::now();
        self.finished_at = Some(finished_at);
        info!(
            "game over after {} plies: {} ({}s)",
            self.state.move_log.len(),
            self.verdict,
            (finished_at - self.started_at).num_seconds()
        );
    }

    fn ensure_in_play(&self) -> ChessResult<()> {
        if self.verdict.is_over() {
            warn!("move proposed after the game ended");
            return Err(ChessError::GameOver(self.verdict));
        }
        self.ensure_no_pending_promotion()
    }

    fn ensure_no_pending_promotion(&self) -> ChessResult<()> {
        match self.pending_promotion {
            Some(mv) => {
                warn!("{}-{} still awaits a promotion choice", mv.from, mv.to);
                Err(ChessError::PromotionPending {
                    from: mv.from,
                    to: mv.to,
                })
            }
            None => Ok(()),
        }
    }
}

fn initial_state(config: &RulesConfig) -> ChessResult<GameState> {
    match &config.start_fen {
        Some(fen) => GameState::from_fen(fen),
        None => Ok(GameState::new_game()),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Game, MoveOutcome};
    use crate::config::RulesConfig;
    use crate::errors::{ChessError, IllegalMove};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::termination::verdict::{DrawReason, Verdict, WinReason};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn game_from(fen: &str) -> Game {
        Game::with_config(RulesConfig::default().with_start_fen(fen)).expect("test FEN should parse")
    }

    fn play(game: &mut Game, from: &str, to: &str) -> MoveOutcome {
        game.propose_move(sq(from), sq(to))
            .expect("game should accept proposals")
    }

    fn play_all(game: &mut Game, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            let outcome = play(game, from, to);
            assert!(outcome.accepted(), "{from}-{to} should be legal, got {outcome:?}");
        }
    }

    #[test]
    fn new_game_starts_in_play() {
        init_logging();
        let game = Game::new();
        assert_eq!(game.verdict(), Verdict::Ongoing);
        assert_eq!(game.state(), &GameState::new_game());
        assert!(game.finished_at().is_none());
        assert_eq!(game.legal_destinations(sq("g1")), vec![sq("f3"), sq("h3")]);
    }

    #[test]
    fn rejected_move_leaves_the_game_untouched() {
        init_logging();
        let mut game = Game::new();
        let before = game.state().clone();

        assert_eq!(
            play(&mut game, "e2", "e5"),
            MoveOutcome::Rejected(IllegalMove::InvalidShape)
        );
        assert_eq!(
            play(&mut game, "e7", "e5"),
            MoveOutcome::Rejected(IllegalMove::WrongSide)
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        init_logging();
        let mut game = Game::new();
        play_all(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
        assert_eq!(
            play(&mut game, "d8", "h4"),
            MoveOutcome::Applied {
                verdict: Verdict::Win {
                    winner: Side::Black,
                    reason: WinReason::Checkmate,
                }
            }
        );
        assert!(game.finished_at().is_some());
        assert!(game.is_in_check(Side::White));
        assert!(matches!(
            game.propose_move(sq("a2"), sq("a3")),
            Err(ChessError::GameOver(_))
        ));
        assert!(game.legal_destinations(sq("a2")).is_empty());
    }

    #[test]
    fn threefold_repetition_on_the_third_occurrence() {
        init_logging();
        let mut game = Game::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];

        for round in 0..2 {
            for (from, to) in shuffle {
                assert_eq!(
                    play(&mut game, from, to),
                    MoveOutcome::Applied {
                        verdict: Verdict::Ongoing
                    },
                    "round {round}: {from}-{to}"
                );
            }
        }

        // The board after the first g1-f3 now stands for the third time.
        assert_eq!(
            play(&mut game, "g1", "f3"),
            MoveOutcome::Applied {
                verdict: Verdict::Draw(DrawReason::ThreefoldRepetition)
            }
        );
    }

    #[test]
    fn fifty_move_rule_and_its_reset() {
        init_logging();
        let mut game = game_from("4k3/8/8/8/8/8/8/R3K3 w - - 98 60");
        assert_eq!(
            play(&mut game, "a1", "a2"),
            MoveOutcome::Applied {
                verdict: Verdict::Ongoing
            }
        );
        assert_eq!(
            play(&mut game, "e8", "e7"),
            MoveOutcome::Applied {
                verdict: Verdict::Draw(DrawReason::FiftyMoveRule)
            }
        );

        let mut game = game_from("4k3/8/8/8/8/8/P7/R3K3 w - - 98 60");
        play_all(&mut game, &[("a2", "a3"), ("e8", "e7")]);
        assert_eq!(game.state().halfmove_clock, 1);
        assert_eq!(game.verdict(), Verdict::Ongoing);
    }

    /// Rook a1/a2 against king e8/d8, both sides shuffling back and forth.
    fn shuffle_once(game: &mut Game) -> MoveOutcome {
        let board = game.state().board;
        let (from, to) = match game.state().side_to_move {
            Side::White if board.is_empty_at(sq("a2")) => ("a1", "a2"),
            Side::White => ("a2", "a1"),
            Side::Black if board.is_empty_at(sq("d8")) => ("e8", "d8"),
            Side::Black => ("d8", "e8"),
        };
        play(game, from, to)
    }

    #[test]
    fn fifty_move_rule_after_a_hundred_quiet_plies() {
        init_logging();
        let config = RulesConfig::default()
            .with_start_fen("4k3/8/8/8/8/8/7P/R3K3 w - - 0 1")
            .with_repetition_threshold(usize::MAX);

        let mut game = Game::with_config(config.clone()).expect("test FEN should parse");
        for ply in 1..100 {
            assert_eq!(
                shuffle_once(&mut game),
                MoveOutcome::Applied {
                    verdict: Verdict::Ongoing
                },
                "ply {ply}"
            );
        }
        assert_eq!(
            shuffle_once(&mut game),
            MoveOutcome::Applied {
                verdict: Verdict::Draw(DrawReason::FiftyMoveRule)
            }
        );
        assert_eq!(game.state().halfmove_clock, 100);

        // A pawn push in the middle of the run starts the count again.
        let mut game = Game::with_config(config).expect("test FEN should parse");
        for _ in 0..60 {
            assert!(shuffle_once(&mut game).accepted());
        }
        assert!(play(&mut game, "h2", "h3").accepted());
        assert_eq!(game.state().halfmove_clock, 0);
        for ply in 1..100 {
            assert_eq!(
                shuffle_once(&mut game),
                MoveOutcome::Applied {
                    verdict: Verdict::Ongoing
                },
                "ply {ply} after the reset"
            );
        }
        assert_eq!(
            shuffle_once(&mut game),
            MoveOutcome::Applied {
                verdict: Verdict::Draw(DrawReason::FiftyMoveRule)
            }
        );
    }

    #[test]
    fn kingside_castling_conditions() {
        init_logging();
        let mut game = Game::new();
        assert_eq!(
            play(&mut game, "e1", "g1"),
            MoveOutcome::Rejected(IllegalMove::CastlingPathBlocked)
        );

        play_all(
            &mut game,
            &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")],
        );
        let mut moved_back = game.clone();

        assert!(play(&mut game, "e1", "g1").accepted());
        let board = game.state().board;
        assert_eq!(board.piece_at(sq("g1")), Some(Piece::new(PieceKind::King, Side::White)));
        assert_eq!(board.piece_at(sq("f1")), Some(Piece::new(PieceKind::Rook, Side::White)));
        assert!(game.state().last_move().expect("castle logged").is_castle);

        play_all(&mut moved_back, &[("e1", "e2"), ("a7", "a6"), ("e2", "e1"), ("a6", "a5")]);
        assert_eq!(
            play(&mut moved_back, "e1", "g1"),
            MoveOutcome::Rejected(IllegalMove::CastlingRightsLost)
        );

        let mut attacked = game_from("4k3/8/8/8/8/6r1/8/4K2R w K - 0 1");
        assert_eq!(
            play(&mut attacked, "e1", "g1"),
            MoveOutcome::Rejected(IllegalMove::CastlingThroughCheck)
        );
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        init_logging();
        let mut game = Game::new();
        play_all(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
        let mut late = game.clone();

        assert!(play(&mut game, "e5", "d6").accepted());
        assert!(game.state().board.is_empty_at(sq("d5")));
        assert!(game.state().last_move().expect("capture logged").is_en_passant_capture);

        play_all(&mut late, &[("h2", "h3"), ("h7", "h6")]);
        assert_eq!(
            play(&mut late, "e5", "d6"),
            MoveOutcome::Rejected(IllegalMove::NothingToCapture)
        );
    }

    #[test]
    fn promotion_is_two_step() {
        init_logging();
        let mut game = game_from("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let before = game.state().clone();

        assert_eq!(
            play(&mut game, "a7", "a8"),
            MoveOutcome::AwaitingPromotion {
                from: sq("a7"),
                to: sq("a8")
            }
        );
        assert_eq!(game.state(), &before);
        assert_eq!(game.pending_promotion(), Some((sq("a7"), sq("a8"))));
        assert!(matches!(
            game.propose_move(sq("e1"), sq("e2")),
            Err(ChessError::PromotionPending { .. })
        ));
        assert!(matches!(game.undo(), Err(ChessError::PromotionPending { .. })));
        assert_eq!(
            game.complete_promotion(PieceKind::King),
            Err(ChessError::InvalidPromotionPiece(PieceKind::King))
        );

        assert_eq!(
            game.complete_promotion(PieceKind::Queen),
            Ok(Verdict::Check(Side::Black))
        );
        let record = game.state().last_move().expect("promotion logged");
        assert_eq!(record.promoted_to, Some(PieceKind::Queen));
        assert_eq!(
            game.state().board.piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Queen, Side::White))
        );
        assert_eq!(
            game.complete_promotion(PieceKind::Queen),
            Err(ChessError::NoPendingPromotion)
        );
    }

    #[test]
    fn cancelled_promotion_commits_nothing() {
        init_logging();
        let mut game = game_from("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert!(play(&mut game, "a7", "a8").requires_promotion_choice());
        game.cancel_promotion().expect("a promotion is pending");
        assert!(game.state().move_log.is_empty());
        assert!(play(&mut game, "e1", "d2").accepted());
    }

    #[test]
    fn undo_and_redo_only_move_the_cursor() {
        init_logging();
        let mut game = Game::new();
        play_all(&mut game, &[("e2", "e4"), ("e7", "e5")]);
        let live = game.state().board;

        assert_eq!(game.undo(), Ok(1));
        assert_eq!(
            game.displayed_board().piece_at(sq("e7")),
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );
        assert_eq!(game.undo(), Ok(0));
        assert_eq!(game.displayed_board(), Board::standard());
        assert_eq!(game.undo(), Ok(0));
        assert_eq!(game.state().move_log.len(), 2);

        assert_eq!(game.set_cursor(42), Ok(2));
        assert_eq!(game.displayed_board(), live);
        assert_eq!(game.redo(), Ok(2));

        game.set_cursor(0).expect("no promotion pending");
        assert!(play(&mut game, "g1", "f3").accepted());
        assert_eq!(game.state().cursor, 3);
    }

    #[test]
    fn resignation_and_timeout_end_the_game() {
        init_logging();
        let mut game = Game::new();
        assert_eq!(
            game.resign(Side::White),
            Ok(Verdict::Win {
                winner: Side::Black,
                reason: WinReason::Resignation,
            })
        );
        assert!(matches!(game.report_timeout(Side::Black), Err(ChessError::GameOver(_))));

        let mut game = Game::new();
        assert_eq!(
            game.report_timeout(Side::Black),
            Ok(Verdict::Win {
                winner: Side::White,
                reason: WinReason::Timeout,
            })
        );
        assert!(game.finished_at() >= Some(game.started_at()));

        game.start_new_game().expect("default setup");
        assert_eq!(game.verdict(), Verdict::Ongoing);
    }

    #[test]
    fn bad_start_fen_is_reported() {
        let result = Game::with_config(RulesConfig::default().with_start_fen("not a fen"));
        assert!(matches!(result, Err(ChessError::InvalidFen(_))));
    }

    #[test]
    fn random_playouts_keep_the_invariants() {
        init_logging();
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new();

            for _ in 0..200 {
                if game.verdict().is_over() {
                    break;
                }
                let moves = legal_moves(game.state());
                assert!(!moves.is_empty(), "ongoing game must have a legal move");
                let mv = moves[rng.random_range(0..moves.len())];
                let mover = game.state().side_to_move;
                let before = game.state().board;

                let outcome = game
                    .propose_move(mv.from, mv.to)
                    .expect("generated move should be proposable");
                if outcome.requires_promotion_choice() {
                    let choice = PieceKind::PROMOTION_CHOICES
                        [rng.random_range(0..PieceKind::PROMOTION_CHOICES.len())];
                    game.complete_promotion(choice).expect("promotion pending");
                } else {
                    assert!(outcome.accepted(), "seed {seed}: {mv:?} was rejected");
                }

                let state = game.state();
                assert!(!state.is_in_check(mover), "seed {seed}: self-check");
                assert_eq!(state.position_history.len(), state.move_log.len());
                assert_eq!(state.cursor, state.move_log.len());

                let after = state.board;
                game.undo().expect("no promotion pending");
                assert_eq!(game.displayed_board(), before);
                game.redo().expect("no promotion pending");
                assert_eq!(game.displayed_board(), after);
            }
        }
    }
}
