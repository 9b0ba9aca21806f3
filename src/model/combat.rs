use rand::Rng;

use crate::model::roster::{Roster, SortKey};

pub const D20: std::ops::RangeInclusive<i64> = 1..=20;

pub fn roll_d20<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(D20)
}

/// Next position in the turn order, wrapping at the end.
/// An empty roster keeps the current index.
pub fn next_turn(current: usize, count: usize) -> usize {
    if count == 0 {
        return current;
    }
    (current + 1) % count
}

/// Rolls initiative for everyone, then orders the roster highest first.
pub fn randomize_turn_rolls<R: Rng + ?Sized>(roster: &mut Roster, rng: &mut R) {
    for c in roster.iter_mut() {
        c.turn_roll = roll_d20(rng);
    }
    roster.sort(SortKey::TurnRoll);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::character::Character;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn empty_roster_keeps_index() {
        assert_eq!(next_turn(0, 0), 0);
        assert_eq!(next_turn(3, 0), 3);
    }

    #[test]
    fn randomize_rolls_in_range_and_sorts() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut roster = Roster::new(
            (0..25)
                .map(|i| Character::new(format!("c{i}"), 10, 10))
                .collect(),
        );

        randomize_turn_rolls(&mut roster, &mut rng);

        assert!(roster.iter().all(|c| D20.contains(&c.turn_roll)));
        assert!(roster
            .characters()
            .windows(2)
            .all(|w| w[0].turn_roll >= w[1].turn_roll));
    }

    proptest! {
        #[test]
        fn advancing_count_times_returns_to_start(count in 1usize..50, start in 0usize..50) {
            let start = start % count;
            let mut index = start;
            for _ in 0..count {
                index = next_turn(index, count);
                prop_assert!(index < count);
            }
            prop_assert_eq!(index, start);
        }

        #[test]
        fn damage_never_goes_negative(hp in 0i64..1000, amount in -1000i64..1000) {
            let mut c = Character::new("x", 10, hp);
            c.take_damage(amount);
            if amount > 0 {
                prop_assert_eq!(c.hp, (hp - amount).max(0));
            } else {
                prop_assert_eq!(c.hp, hp);
            }
            prop_assert!(c.hp >= 0);
        }
    }
}
