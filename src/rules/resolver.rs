//! Move legality resolver.
//!
//! Decides which dice of a roll can be played. A die may be playable on
//! its own and still become unplayable once other dice are committed, so
//! the resolver searches every order in which the unused dice could be
//! played, trying each on a cloned board.
//!
//! ## Outcomes
//!
//! Only the deepest lines count. Each distinct set of dice those lines use
//! becomes one outcome: its dice are Used and every other unused die is
//! Blocked. Equal dice are always taken lowest index first, so reorderings
//! of a double collapse into one outcome.
//!
//! ```
//! use fevga_rules::board::LaneBoard;
//! use fevga_rules::core::PlayerId;
//! use fevga_rules::dice::DiceSet;
//! use fevga_rules::rules::resolver;
//!
//! let board = LaneBoard::new(&[17, 17, 17], &[1, 7]);
//! let dice = DiceSet::double(1).unwrap();
//!
//! assert!(resolver::check_if_any_move_is_possible(&board, PlayerId::ONE, &dice));
//! let choice = resolver::find_playable_dice(&board, PlayerId::ONE, &dice);
//! assert!(choice.is_single_option());
//! assert_eq!(choice.option1().used_count(), 1);
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::PlayerId;
use crate::dice::{DiceChoice, DiceSet};

/// Can `player` make at least one move with an unused die?
///
/// Never changes a die's status.
pub fn check_if_any_move_is_possible<B: Board>(board: &B, player: PlayerId, dice: &DiceSet) -> bool {
    distinct_values(dice, 0)
        .into_iter()
        .any(|(_, value)| !board.movable_from(player, value).is_empty())
}

/// Compute the maximal legal play for the unused dice.
///
/// Dice already Used or Blocked keep their status in every outcome. When
/// no move is possible the single outcome has every unused die Blocked.
pub fn find_playable_dice<B: Board>(board: &B, player: PlayerId, dice: &DiceSet) -> DiceChoice {
    let search = Search::run(board, player, dice);

    let mut masks: Vec<u8> = search.outcomes.into_iter().collect();
    // Most pips played first; ties by lowest dice.
    masks.sort_by_key(|&mask| (std::cmp::Reverse(pips(dice, mask)), mask));

    debug!(
        %player,
        dice = %dice,
        playable = search.best_depth,
        outcomes = masks.len(),
        "resolved playable dice"
    );

    match masks.as_slice() {
        [] => DiceChoice::Single(dice.with_plan(0)),
        [only] => DiceChoice::Single(dice.with_plan(*only)),
        [first, .., last] => DiceChoice::Dual(dice.with_plan(*first), dice.with_plan(*last)),
    }
}

/// Number of unused dice the maximal play uses.
pub fn playable_count<B: Board>(board: &B, player: PlayerId, dice: &DiceSet) -> usize {
    Search::run(board, player, dice).best_depth
}

/// Depth-first search over die order.
///
/// Dice taken on the current line are tracked in a bit mask, so
/// backtracking never touches the dice themselves.
struct Search<'a> {
    player: PlayerId,
    dice: &'a DiceSet,
    target: usize,
    best_depth: usize,
    outcomes: FxHashSet<u8>,
}

impl<'a> Search<'a> {
    fn run<B: Board>(board: &B, player: PlayerId, dice: &'a DiceSet) -> Self {
        let mut search = Search {
            player,
            dice,
            target: dice.unused_values().count(),
            best_depth: 0,
            outcomes: FxHashSet::default(),
        };
        search.explore(board, 0, 0);
        search
    }

    /// Returns true once a line has used every unused die.
    fn explore<B: Board>(&mut self, board: &B, depth: usize, used: u8) -> bool {
        let mut extended = false;

        for (index, value) in distinct_values(self.dice, used) {
            for from in board.movable_from(self.player, value) {
                let mut next = board.clone();
                if next.apply_move(self.player, from, value).is_err() {
                    continue;
                }
                extended = true;
                if self.explore(&next, depth + 1, used | (1 << index)) {
                    return true;
                }
            }
        }

        if !extended {
            self.record(depth, used);
        }
        depth == self.target
    }

    fn record(&mut self, depth: usize, used: u8) {
        if depth > self.best_depth {
            self.best_depth = depth;
            self.outcomes.clear();
        }
        if depth == self.best_depth {
            self.outcomes.insert(used);
        }
    }
}

/// First available die of each distinct value, as (index, value).
fn distinct_values(dice: &DiceSet, used: u8) -> SmallVec<[(usize, u8); 4]> {
    let mut values: SmallVec<[(usize, u8); 4]> = SmallVec::new();
    for (index, die) in dice.iter().enumerate() {
        let available = die.is_unused() && used & (1 << index) == 0;
        if available && !values.iter().any(|&(_, v)| v == die.value()) {
            values.push((index, die.value()));
        }
    }
    values
}

fn pips(dice: &DiceSet, mask: u8) -> u32 {
    dice.iter()
        .enumerate()
        .filter(|(index, _)| mask & (1 << *index) != 0)
        .map(|(_, die)| u32::from(die.value()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LaneBoard;
    use crate::dice::DieStatus;

    fn statuses(dice: &DiceSet) -> Vec<DieStatus> {
        dice.iter().map(|d| d.status()).collect()
    }

    #[test]
    fn test_all_dice_playable() {
        let board = LaneBoard::new(&[2, 10], &[20]);
        let dice = DiceSet::from_values(3, 5).unwrap();

        let choice = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert!(choice.is_single_option());
        assert!(choice.option1().all_used());
    }

    #[test]
    fn test_one_die_blocked() {
        // Player two's 1 is player one's 13: the single checker on 10 may
        // move 2 but never 4.
        let board = LaneBoard::new(&[10], &[1]);
        let dice = DiceSet::from_values(2, 4).unwrap();

        let choice = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert!(choice.is_single_option());
        assert_eq!(
            statuses(choice.option1()),
            vec![DieStatus::Used, DieStatus::Blocked]
        );
    }

    #[test]
    fn test_order_matters_two_outcomes() {
        // Checker on 10, opponent on 16 (player two's 4).
        // 3 alone: 10 -> 13, then 5 would pass 16.
        // 5 alone: 10 -> 15, then 3 would pass 16.
        let board = LaneBoard::new(&[10], &[4]);
        let dice = DiceSet::from_values(3, 5).unwrap();

        let choice = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert!(!choice.is_single_option());

        // Higher die first.
        assert_eq!(
            statuses(choice.option1()),
            vec![DieStatus::Blocked, DieStatus::Used]
        );
        assert_eq!(
            statuses(choice.option2()),
            vec![DieStatus::Used, DieStatus::Blocked]
        );
    }

    #[test]
    fn test_longer_line_wins() {
        // Playing the 1 from 22 first strands the 2; other orders play both.
        let board = LaneBoard::new(&[21, 22], &[1]);
        let dice = DiceSet::from_values(1, 2).unwrap();

        let choice = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert!(choice.is_single_option());
        assert!(choice.option1().all_used());
    }

    #[test]
    fn test_no_move_blocks_everything() {
        let board = LaneBoard::new(&[17, 17, 17], &[1, 6]);
        let dice = DiceSet::double(1).unwrap();

        assert!(!check_if_any_move_is_possible(&board, PlayerId::ONE, &dice));
        let choice = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert!(choice.is_single_option());
        assert_eq!(choice.option1().blocked_count(), 4);
    }

    #[test]
    fn test_check_does_not_mutate() {
        let board = LaneBoard::new(&[17, 17, 17], &[1, 7]);
        let dice = DiceSet::double(1).unwrap();
        let before = dice.clone();

        assert!(check_if_any_move_is_possible(&board, PlayerId::ONE, &dice));
        assert_eq!(dice, before);

        let _ = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert_eq!(dice, before);
    }

    #[test]
    fn test_double_uses_lowest_indices() {
        let board = LaneBoard::new(&[17, 17, 17], &[1, 7]);
        let dice = DiceSet::double(1).unwrap();

        let plan = find_playable_dice(&board, PlayerId::ONE, &dice).into_option(Default::default());
        assert_eq!(
            statuses(&plan),
            vec![
                DieStatus::Used,
                DieStatus::Blocked,
                DieStatus::Blocked,
                DieStatus::Blocked
            ]
        );
    }

    #[test]
    fn test_settled_dice_are_kept() {
        let board = LaneBoard::new(&[2], &[20]);
        let mut dice = DiceSet::double(2).unwrap();
        dice.mark_used(0).unwrap();
        dice.mark_used(1).unwrap();

        let choice = find_playable_dice(&board, PlayerId::ONE, &dice);
        assert!(choice.option1().all_used());
    }

    #[test]
    fn test_playable_count() {
        let board = LaneBoard::new(&[21, 22], &[1]);
        let dice = DiceSet::from_values(1, 2).unwrap();
        assert_eq!(playable_count(&board, PlayerId::ONE, &dice), 2);

        // After 22/23 the 2 has nowhere to go.
        let mut after = board.clone();
        after.apply_move(PlayerId::ONE, 22, 1).unwrap();
        let mut rest = dice.clone();
        rest.mark_used(0).unwrap();
        assert_eq!(playable_count(&after, PlayerId::ONE, &rest), 0);
    }
}
