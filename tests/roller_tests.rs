use std::io;

use alexandria::{CliRoller, DieRoller, PlayerId, Roller, ScriptedRoller};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn die_stays_within_its_faces() {
    let mut die = DieRoller::new(SmallRng::seed_from_u64(9), 4).unwrap();
    for _ in 0..200 {
        let roll = die.roll(PlayerId(1)).unwrap();
        assert!((1..=4).contains(&roll));
    }
}

#[test]
fn die_without_faces_is_rejected() {
    assert!(DieRoller::new(SmallRng::seed_from_u64(9), 0).is_err());
}

#[test]
fn default_die_is_six_sided() {
    assert_eq!(DieRoller::from_seed(1).faces(), 6);
}

#[test]
fn scripted_rolls_come_back_in_order() {
    let mut roller = ScriptedRoller::new(vec![3, -1, 6]);
    assert_eq!(roller.roll(PlayerId(1)).unwrap(), 3);
    assert_eq!(roller.roll(PlayerId(2)).unwrap(), -1);
    assert_eq!(roller.remaining(), 1);
    assert_eq!(roller.roll(PlayerId(1)).unwrap(), 6);
    assert!(roller.roll(PlayerId(1)).is_err());
}

#[test]
fn cli_rejects_garbage_then_accepts_number() {
    let input = io::Cursor::new("abc\n  4 \n");
    let mut output = Vec::new();
    let mut roller = CliRoller::with_io(input, &mut output);
    assert_eq!(roller.roll(PlayerId(2)).unwrap(), 4);

    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("Player 2, enter your roll: "));
    assert!(shown.contains("Invalid roll"));
}

#[test]
fn cli_closed_input_is_an_error() {
    let mut roller = CliRoller::with_io(io::Cursor::new(""), io::sink());
    assert!(roller.roll(PlayerId(1)).is_err());
}
