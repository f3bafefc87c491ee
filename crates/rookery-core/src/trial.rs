//! Trial execution: apply a move to a scenario, then commit or roll back.
//!
//! The executor owns the staging and backup boards. A trial snapshots the
//! scenario into `backup`, applies the move on `staging`, and writes
//! `staging` back into the scenario. Reverting copies `backup` back.

use tracing::trace;

use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::position::Position;

/// Scratch boards for one in-flight trial at a time.
#[derive(Debug, Clone, Default)]
pub struct TrialExecutor {
    staging: Position,
    backup: Position,
    active: bool,
}

impl TrialExecutor {
    /// Create an idle executor with empty scratch boards.
    pub fn new() -> TrialExecutor {
        TrialExecutor::default()
    }

    /// Return `true` while a trial has begun and not yet been committed or reverted.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply `from` -> `to` to `scenario`, returning the captured piece.
    ///
    /// # Panics
    ///
    /// Panics if a trial is already active, if `from` does not hold `expected`,
    /// or if `to` holds a piece of the mover's color. These are caller bugs;
    /// the scenario is left untouched when they fire.
    pub fn begin_trial(
        &mut self,
        scenario: &mut Position,
        from: Coordinate,
        to: Coordinate,
        expected: Piece,
    ) -> Option<Piece> {
        assert!(!self.active, "trial {from}{to} begun while another trial is active");

        self.backup.clone_from(scenario);
        self.staging.clone_from(&self.backup);
        let captured = relocate(&mut self.staging, from, to, expected);
        scenario.clone_from(&self.staging);
        self.active = true;

        trace!(%from, %to, ?captured, "trial begun");
        captured
    }

    /// Restore `scenario` from the backup taken when the trial began.
    pub fn revert_trial(&mut self, scenario: &mut Position) {
        scenario.clone_from(&self.backup);
        self.active = false;
        trace!("trial reverted");
    }

    /// End the trial and keep the staged state.
    pub fn commit_trial(&mut self) {
        self.active = false;
        trace!("trial committed");
    }

    /// Begin a trial and return a guard that reverts on drop unless committed.
    pub fn trial<'a>(
        &'a mut self,
        scenario: &'a mut Position,
        from: Coordinate,
        to: Coordinate,
        expected: Piece,
    ) -> Trial<'a> {
        let captured = self.begin_trial(scenario, from, to, expected);
        Trial {
            executor: self,
            scenario,
            captured,
            committed: false,
        }
    }
}

/// Move `expected` from `from` to `to` on `board`, tallying any capture.
fn relocate(board: &mut Position, from: Coordinate, to: Coordinate, expected: Piece) -> Option<Piece> {
    let moving = board.piece_at(from);
    assert_eq!(
        moving,
        Some(expected),
        "trial source {from} does not hold {expected:?}"
    );

    let captured = board.take(to);
    if let Some(victim) = captured {
        assert!(
            victim.is_enemy_of(expected),
            "trial {from}{to} would capture friendly {victim:?}"
        );
        board.record_capture(victim);
    }

    board.clear(from);
    board.place_piece(to, expected);
    captured
}

/// Scoped trial. Dropping it without [`Trial::commit`] reverts the scenario,
/// including when the scope unwinds.
pub struct Trial<'a> {
    executor: &'a mut TrialExecutor,
    scenario: &'a mut Position,
    captured: Option<Piece>,
    committed: bool,
}

impl Trial<'_> {
    /// The scenario as it stands with the move applied.
    #[inline]
    pub fn position(&self) -> &Position {
        &*self.scenario
    }

    /// Piece captured by the trial move, if any.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Keep the applied move and return the captured piece.
    pub fn commit(mut self) -> Option<Piece> {
        self.committed = true;
        self.executor.commit_trial();
        self.captured
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.executor.revert_trial(self.scenario);
        }
    }
}
