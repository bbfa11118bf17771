//! Turn resolution properties.
//!
//! These tests drive the turn engine with scripted dice and input to check
//! the bust rule, human hold totals, and the computer stopping policy.

use pig_dice::core::{NullReporter, Player, RecordingReporter, ScriptedDie, ScriptedPrompter};
use pig_dice::core::Strategy as Kind;
use pig_dice::{stopping_bound, GameEvent, TurnEngine};
use proptest::prelude::*;

fn human() -> Player {
    Player::new("Player 1", Kind::Human)
}

fn computer(score: u32) -> Player {
    Player::new("Player 2", Kind::Computer).with_score(score)
}

fn scoring_faces(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(2u8..=6, 0..max_len)
}

/// Roll every scripted face, then hold.
fn roll_then_hold(rolls: usize) -> ScriptedPrompter {
    ScriptedPrompter::new(std::iter::repeat("r").take(rolls).chain(std::iter::once("h")))
}

fn die_for(faces: &[u8]) -> ScriptedDie {
    if faces.is_empty() {
        ScriptedDie::always(2)
    } else {
        ScriptedDie::new(faces.to_vec())
    }
}

proptest! {
    /// Without a 1, a human's turn total is the sum of the rolls.
    #[test]
    fn prop_human_total_is_sum_of_rolls(faces in scoring_faces(20)) {
        let mut die = die_for(&faces);
        let mut prompter = roll_then_hold(faces.len());

        let total = TurnEngine::new(&mut die, &mut prompter, &mut NullReporter)
            .resolve_human_turn(&human())
            .unwrap();

        prop_assert_eq!(total, faces.iter().map(|&f| u32::from(f)).sum::<u32>());
        prop_assert_eq!(die.rolls(), faces.len());
        prop_assert_eq!(prompter.remaining(), 0);
    }

    /// The first 1 zeroes the turn no matter what came before it.
    #[test]
    fn prop_human_bust_forfeits_turn(
        prefix in scoring_faces(15),
        suffix in prop::collection::vec(1u8..=6, 0..5),
    ) {
        let mut faces = prefix.clone();
        faces.push(1);
        faces.extend(suffix);
        let mut die = ScriptedDie::new(faces);
        let mut prompter = roll_then_hold(prefix.len() + 10);

        let total = TurnEngine::new(&mut die, &mut prompter, &mut NullReporter)
            .resolve_human_turn(&human())
            .unwrap();

        prop_assert_eq!(total, 0);
        prop_assert_eq!(die.rolls(), prefix.len() + 1);
    }

    /// Invalid tokens never move the turn forward.
    #[test]
    fn prop_invalid_input_is_ignored(
        faces in prop::collection::vec(2u8..=6, 1..6),
        junk in "[a-gi-qs-z]{1,3}",
    ) {
        let mut lines = Vec::new();
        for _ in &faces {
            lines.push(junk.clone());
            lines.push("r".to_string());
        }
        lines.push(junk.clone());
        lines.push("h".to_string());

        let mut die = ScriptedDie::new(faces.clone());
        let mut prompter = ScriptedPrompter::new(lines);
        let mut reporter = RecordingReporter::new();

        let total = TurnEngine::new(&mut die, &mut prompter, &mut reporter)
            .resolve_human_turn(&human())
            .unwrap();

        prop_assert_eq!(total, faces.iter().map(|&f| u32::from(f)).sum::<u32>());
        let rejected = reporter
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::InvalidChoice { .. }))
            .count();
        prop_assert_eq!(rejected, faces.len() + 1);
    }

    /// A computer player stops on the first roll that reaches its bound.
    #[test]
    fn prop_computer_stops_at_bound(
        score in 0u32..100,
        faces in prop::collection::vec(2u8..=6, 1..8),
    ) {
        let bound = stopping_bound(score);
        let mut die = ScriptedDie::new(faces.clone());
        let mut prompter = ScriptedPrompter::default();

        let total = TurnEngine::new(&mut die, &mut prompter, &mut NullReporter)
            .resolve_automated_turn(&computer(score));

        let rolls = die.rolls();
        let last = u32::from(faces[(rolls - 1) % faces.len()]);
        prop_assert!(bound >= 1 && bound <= 25);
        prop_assert!(total >= bound);
        prop_assert!(total - last < bound);
    }

    /// A computer player already at the target never rolls.
    #[test]
    fn prop_computer_at_target_holds(score in 100u32..10_000) {
        let mut die = ScriptedDie::always(6);
        let mut prompter = ScriptedPrompter::default();

        let total = TurnEngine::new(&mut die, &mut prompter, &mut NullReporter)
            .resolve_automated_turn(&computer(score));

        prop_assert_eq!(total, 0);
        prop_assert_eq!(die.rolls(), 0);
    }

    /// A 1 before the bound is reached busts a computer turn.
    #[test]
    fn prop_computer_bust(prefix in prop::collection::vec(2u8..=6, 0..4)) {
        let mut faces = prefix.clone();
        faces.push(1);
        let mut die = ScriptedDie::new(faces);
        let mut prompter = ScriptedPrompter::default();

        let total = TurnEngine::new(&mut die, &mut prompter, &mut NullReporter)
            .resolve_automated_turn(&computer(0));

        prop_assert_eq!(total, 0);
        prop_assert_eq!(die.rolls(), prefix.len() + 1);
    }
}

#[test]
fn test_invalid_token_then_bust() {
    let mut die = ScriptedDie::always(1);
    let mut prompter = ScriptedPrompter::new(["x", "r", "h"]);
    let mut reporter = RecordingReporter::new();

    let total = TurnEngine::new(&mut die, &mut prompter, &mut reporter)
        .resolve_human_turn(&human())
        .unwrap();

    assert_eq!(total, 0);
    assert_eq!(
        reporter.lines(),
        vec![
            "Invalid choice. Please enter 'r' to roll or 'h' to hold.".to_string(),
            "Player 1 rolled: 1".to_string(),
            "Rolled a 1! Turn ends with no points added.".to_string(),
        ]
    );
}

#[test]
fn test_computer_announces_rolls_and_hold() {
    let mut die = ScriptedDie::new(vec![6, 5, 4]);
    let mut prompter = ScriptedPrompter::default();
    let mut reporter = RecordingReporter::new();

    let total = TurnEngine::new(&mut die, &mut prompter, &mut reporter)
        .resolve_automated_turn(&computer(88));

    assert_eq!(total, 15);
    assert_eq!(
        reporter.lines(),
        vec![
            "Player 2 (Computer) rolled: 6".to_string(),
            "Player 2 (Computer) rolled: 5".to_string(),
            "Player 2 (Computer) rolled: 4".to_string(),
            "Player 2 holds with a turn total of 15.".to_string(),
        ]
    );
}
