//! Running counters and derived ratios for a set or a whole game.
//!
//! # Invariants
//!
//! - For every skill: `total == point + neutral + error`
//! - For every skill: `effectiveness == point / total` (zero when `total` is zero)
//! - `totals.points == attack.point + block.point + serve.point + opponent.errors`
//! - `totals.opponent_points == opponent.attacks + opponent.blocks + opponent.serves + totals.errors`
//!
//! Counter fields are private; every mutation goes through `record` or a
//! constructor that recomputes the derived fields.

use serde::Serialize;

use super::action::{ActionCategory, OpponentAction, Outcome, Skill};
use crate::domain::foundation::Effectiveness;

/// Counters for one skill of the scouted team.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SkillStats {
    total: u32,
    point: u32,
    neutral: u32,
    error: u32,
    effectiveness: Effectiveness,
}

impl SkillStats {
    /// Builds skill counters from outcome counts, deriving total and effectiveness.
    pub fn from_counts(point: u32, neutral: u32, error: u32) -> Self {
        let total = point + neutral + error;
        Self {
            total,
            point,
            neutral,
            error,
            effectiveness: Effectiveness::ratio(point, total),
        }
    }

    /// Counts one execution of the skill.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Point => self.point += 1,
            Outcome::Neutral => self.neutral += 1,
            Outcome::Error => self.error += 1,
        }
        self.total += 1;
        self.effectiveness = Effectiveness::ratio(self.point, self.total);
    }

    /// Sums two counter sets.
    pub fn merge(&self, other: &SkillStats) -> Self {
        Self::from_counts(
            self.point + other.point,
            self.neutral + other.neutral,
            self.error + other.error,
        )
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn point(&self) -> u32 {
        self.point
    }

    pub fn neutral(&self) -> u32 {
        self.neutral
    }

    pub fn error(&self) -> u32 {
        self.error
    }

    pub fn effectiveness(&self) -> Effectiveness {
        self.effectiveness
    }
}

/// Counters for events credited to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OpponentStats {
    /// Opponent points scored by attack.
    pub attacks: u32,
    /// Opponent points scored by block.
    pub blocks: u32,
    /// Opponent points scored by serve (aces).
    pub serves: u32,
    /// Opponent faults, each one a point for the team.
    pub errors: u32,
}

impl OpponentStats {
    fn record(&mut self, action: OpponentAction) {
        match action {
            OpponentAction::AttackPoint => self.attacks += 1,
            OpponentAction::BlockPoint => self.blocks += 1,
            OpponentAction::ServePoint => self.serves += 1,
            OpponentAction::Error => self.errors += 1,
        }
    }

    fn merge(&self, other: &OpponentStats) -> Self {
        Self {
            attacks: self.attacks + other.attacks,
            blocks: self.blocks + other.blocks,
            serves: self.serves + other.serves,
            errors: self.errors + other.errors,
        }
    }
}

/// Aggregate counters derived from the per-skill and opponent counters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// Points won by the team.
    pub points: u32,
    /// Team actions across all skills.
    pub actions: u32,
    /// Successful team actions over all team actions.
    pub effectiveness: Effectiveness,
    /// Team errors across all skills.
    pub errors: u32,
    /// Points won by the opponent.
    pub opponent_points: u32,
}

/// Complete statistical record for a set (or the sum of several sets).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StatSheet {
    attack: SkillStats,
    block: SkillStats,
    serve: SkillStats,
    opponent: OpponentStats,
    totals: Totals,
}

impl StatSheet {
    /// Creates an empty sheet with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a sheet from its primary counters, deriving every aggregate.
    pub fn from_parts(
        attack: SkillStats,
        block: SkillStats,
        serve: SkillStats,
        opponent: OpponentStats,
    ) -> Self {
        let mut sheet = Self {
            attack,
            block,
            serve,
            opponent,
            totals: Totals::default(),
        };
        sheet.refresh_totals();
        sheet
    }

    /// Applies one classified action.
    pub fn record(&mut self, category: ActionCategory) {
        match category {
            ActionCategory::Own { skill, outcome } => self.skill_mut(skill).record(outcome),
            ActionCategory::Opponent(action) => self.opponent.record(action),
        }
        self.refresh_totals();
    }

    /// Sums two sheets, recomputing every ratio from the summed counters.
    pub fn merge(&self, other: &StatSheet) -> Self {
        Self::from_parts(
            self.attack.merge(&other.attack),
            self.block.merge(&other.block),
            self.serve.merge(&other.serve),
            self.opponent.merge(&other.opponent),
        )
    }

    pub fn skill(&self, skill: Skill) -> &SkillStats {
        match skill {
            Skill::Attack => &self.attack,
            Skill::Block => &self.block,
            Skill::Serve => &self.serve,
        }
    }

    pub fn attack(&self) -> &SkillStats {
        &self.attack
    }

    pub fn block(&self) -> &SkillStats {
        &self.block
    }

    pub fn serve(&self) -> &SkillStats {
        &self.serve
    }

    pub fn opponent(&self) -> &OpponentStats {
        &self.opponent
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Points won by the team.
    pub fn team_points(&self) -> u32 {
        self.totals.points
    }

    /// Points won by the opponent.
    pub fn opponent_points(&self) -> u32 {
        self.totals.opponent_points
    }

    fn skill_mut(&mut self, skill: Skill) -> &mut SkillStats {
        match skill {
            Skill::Attack => &mut self.attack,
            Skill::Block => &mut self.block,
            Skill::Serve => &mut self.serve,
        }
    }

    fn refresh_totals(&mut self) {
        let skills = [&self.attack, &self.block, &self.serve];
        let successes: u32 = skills.iter().map(|s| s.point()).sum();
        let actions: u32 = skills.iter().map(|s| s.total()).sum();
        let errors: u32 = skills.iter().map(|s| s.error()).sum();

        self.totals = Totals {
            points: successes + self.opponent.errors,
            actions,
            effectiveness: Effectiveness::ratio(successes, actions),
            errors,
            opponent_points: self.opponent.attacks
                + self.opponent.blocks
                + self.opponent.serves
                + errors,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statistics::action::classify;

    fn sheet_from(codes: &[&str]) -> StatSheet {
        let mut sheet = StatSheet::new();
        for code in codes {
            sheet.record(classify(code).unwrap());
        }
        sheet
    }

    #[test]
    fn empty_sheet_is_all_zero() {
        let sheet = StatSheet::new();
        assert_eq!(sheet.attack().total(), 0);
        assert_eq!(sheet.attack().effectiveness(), Effectiveness::ZERO);
        assert_eq!(sheet.totals().points, 0);
        assert_eq!(sheet.totals().effectiveness, Effectiveness::ZERO);
    }

    #[test]
    fn records_attack_and_serve_outcomes() {
        let sheet = sheet_from(&["ATK_POINT", "ATK_ERROR", "SRV_POINT"]);

        assert_eq!(sheet.attack().total(), 2);
        assert_eq!(sheet.attack().point(), 1);
        assert_eq!(sheet.attack().error(), 1);
        assert!((sheet.attack().effectiveness().value() - 0.5).abs() < f64::EPSILON);

        assert_eq!(sheet.serve().total(), 1);
        assert_eq!(sheet.serve().point(), 1);
        assert_eq!(sheet.serve().effectiveness(), Effectiveness::FULL);

        assert_eq!(sheet.totals().points, 2);
    }

    #[test]
    fn total_effectiveness_is_weighted_by_category_totals() {
        // attack 1/3, serve 1/1 -> 2 successes over 4 actions
        let sheet = sheet_from(&["ATK_POINT", "ATK_NEUTRAL", "ATK_ERROR", "SRV_POINT"]);
        assert_eq!(sheet.totals().actions, 4);
        assert!((sheet.totals().effectiveness.value() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn opponent_errors_count_as_team_points() {
        let sheet = sheet_from(&["OPP_ERROR", "OPP_ERROR", "BLK_POINT"]);
        assert_eq!(sheet.opponent().errors, 2);
        assert_eq!(sheet.team_points(), 3);
        assert_eq!(sheet.totals().actions, 1);
    }

    #[test]
    fn team_errors_count_as_opponent_points() {
        let sheet = sheet_from(&["SRV_ERROR", "OPP_ATK_POINT", "OPP_SRV_POINT", "BLK_NEUTRAL"]);
        assert_eq!(sheet.totals().errors, 1);
        assert_eq!(sheet.opponent_points(), 3);
        assert_eq!(sheet.team_points(), 0);
    }

    #[test]
    fn neutral_actions_do_not_score() {
        let sheet = sheet_from(&["ATK_NEUTRAL", "BLK_NEUTRAL", "SRV_NEUTRAL"]);
        assert_eq!(sheet.team_points(), 0);
        assert_eq!(sheet.opponent_points(), 0);
        assert_eq!(sheet.totals().actions, 3);
    }

    #[test]
    fn merge_recomputes_ratios_from_sums() {
        let first = sheet_from(&["ATK_POINT"]);
        let second = sheet_from(&["ATK_ERROR", "ATK_ERROR", "ATK_NEUTRAL"]);

        let merged = first.merge(&second);
        assert_eq!(merged.attack().total(), 4);
        assert!((merged.attack().effectiveness().value() - 0.25).abs() < f64::EPSILON);
        assert_eq!(merged.opponent_points(), 2);
    }

    #[test]
    fn from_parts_derives_totals() {
        let sheet = StatSheet::from_parts(
            SkillStats::from_counts(3, 1, 0),
            SkillStats::from_counts(1, 0, 1),
            SkillStats::from_counts(0, 4, 2),
            OpponentStats { attacks: 5, blocks: 0, serves: 1, errors: 2 },
        );
        assert_eq!(sheet.attack().total(), 4);
        assert_eq!(sheet.team_points(), 6);
        assert_eq!(sheet.totals().errors, 3);
        assert_eq!(sheet.opponent_points(), 9);
        assert_eq!(sheet.totals().actions, 12);
    }
}
