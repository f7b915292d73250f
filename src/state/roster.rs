//! Roster Selection
//!
//! The two-roster draft held by the team builder. Pure state machine:
//! `empty -> partial (1-2) -> full (3)` per side.

use super::types::HeroRef;

/// Maximum members per roster.
pub const ROSTER_SIZE: usize = 3;

/// Which side of the simulated match a roster belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// Team index as the API and the UI name it.
    pub fn index(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

/// Both roster selections for a simulated match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamDraft {
    team1: Vec<HeroRef>,
    team2: Vec<HeroRef>,
}

impl TeamDraft {
    pub fn team(&self, side: Team) -> &[HeroRef] {
        match side {
            Team::One => &self.team1,
            Team::Two => &self.team2,
        }
    }

    /// Whether a hero is already drafted on either side.
    pub fn contains(&self, id: u32) -> bool {
        self.team1.iter().chain(&self.team2).any(|h| h.id == id)
    }

    /// Add a hero to team 1 unless team 1 is already full, else team 2.
    /// Returns false (a no-op) for duplicates or when both rosters are full.
    pub fn add(&mut self, hero: HeroRef) -> bool {
        if self.contains(hero.id) {
            return false;
        }
        if self.team1.len() < ROSTER_SIZE {
            self.team1.push(hero);
            true
        } else if self.team2.len() < ROSTER_SIZE {
            self.team2.push(hero);
            true
        } else {
            false
        }
    }

    /// Remove a hero from the named roster. Unknown ids are ignored.
    pub fn remove(&mut self, id: u32, side: Team) {
        let roster = match side {
            Team::One => &mut self.team1,
            Team::Two => &mut self.team2,
        };
        roster.retain(|h| h.id != id);
    }

    /// The predict action is available iff both rosters are full.
    pub fn is_ready(&self) -> bool {
        self.team1.len() == ROSTER_SIZE && self.team2.len() == ROSTER_SIZE
    }

    /// Both rosters as id lists, present only when the draft is ready.
    pub fn full_rosters(&self) -> Option<(Vec<u32>, Vec<u32>)> {
        if !self.is_ready() {
            return None;
        }
        let ids = |roster: &[HeroRef]| roster.iter().map(|h| h.id).collect();
        Some((ids(&self.team1), ids(&self.team2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(id: u32) -> HeroRef {
        HeroRef { id }
    }

    #[test]
    fn first_three_heroes_auto_place_into_team_one() {
        let mut draft = TeamDraft::default();
        for id in 1..=3 {
            assert!(draft.add(h(id)));
        }
        assert_eq!(draft.team(Team::One).len(), 3);
        assert!(draft.team(Team::Two).is_empty());
    }

    #[test]
    fn overflow_spills_into_team_two_until_both_full() {
        let mut draft = TeamDraft::default();
        for id in 1..=6 {
            assert!(draft.add(h(id)));
        }
        assert_eq!(draft.team(Team::One).len(), ROSTER_SIZE);
        assert_eq!(draft.team(Team::Two).len(), ROSTER_SIZE);

        // A seventh add is a no-op.
        assert!(!draft.add(h(7)));
        assert_eq!(draft.team(Team::One).len(), ROSTER_SIZE);
        assert_eq!(draft.team(Team::Two).len(), ROSTER_SIZE);
    }

    #[test]
    fn drafted_hero_is_not_addable_to_the_other_side() {
        let mut draft = TeamDraft::default();
        for id in 1..=3 {
            draft.add(h(id));
        }
        // Team 1 is full, so hero 1 would land in team 2 if it were allowed.
        assert!(!draft.add(h(1)));
        assert!(draft.team(Team::Two).is_empty());
    }

    #[test]
    fn predict_is_available_iff_both_rosters_are_full() {
        let mut draft = TeamDraft::default();
        for id in 1..=3 {
            draft.add(h(id));
        }
        draft.add(h(4));
        assert!(!draft.is_ready());
        assert_eq!(draft.full_rosters(), None);

        draft.add(h(5));
        draft.add(h(6));
        assert!(draft.is_ready());
        assert_eq!(
            draft.full_rosters(),
            Some((vec![1, 2, 3], vec![4, 5, 6]))
        );
    }

    #[test]
    fn removal_reopens_the_roster() {
        let mut draft = TeamDraft::default();
        for id in 1..=6 {
            draft.add(h(id));
        }
        draft.remove(2, Team::One);
        assert!(!draft.is_ready());
        assert_eq!(draft.team(Team::One).len(), 2);

        // Removing from the wrong side is ignored.
        draft.remove(4, Team::One);
        assert_eq!(draft.team(Team::Two).len(), 3);

        // The freed hero can be drafted again, back into team 1.
        assert!(draft.add(h(2)));
        assert_eq!(draft.team(Team::One).len(), 3);
    }
}
