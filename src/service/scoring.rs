//! Pure scoring arithmetic for race settlement and the disciplinary tribunal.
//!
//! Everything here is deterministic and side-effect free. The settlement and
//! tribunal services call into this module so the same constants drive both
//! the charge and the refund of every penalty.

use entity::enums::{RaceKind, Verdict};

/// License points every pilot starts a season with. A pilot whose balance
/// reaches zero is banned from racing.
pub const STARTING_CNH: i32 = 25;

/// License points deducted for skipping a race without a justified excuse.
pub const UNJUSTIFIED_ABSENCE_PENALTY: i32 = 5;

/// Every third accumulated warning converts into a light license penalty.
pub const WARNINGS_PER_PENALTY: i32 = 3;

/// Championship points by finishing position, first place first. Positions
/// beyond the table score nothing.
pub const POINTS_TABLE: [f64; 20] = [
    35.0, 30.0, 27.0, 24.0, 22.0, 20.0, 18.0, 16.0, 14.0, 12.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0,
    4.0, 3.0, 2.0, 1.0,
];

const SPRINT_MULTIPLIER: f64 = 0.5;
const FINAL_MULTIPLIER: f64 = 2.0;

/// Extra point for fastest lap, driver of the day, or fan favorite.
const BONUS_POINT: f64 = 1.0;

/// A result line as entered by race direction, before points are computed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoredLine {
    pub position: i32,
    pub dnf: bool,
    pub dsq: bool,
    pub fastest_lap: bool,
    pub driver_of_the_day: bool,
    pub fan_favorite: bool,
}

/// Championship points for a finishing position alone.
///
/// Disqualified pilots score nothing regardless of where they crossed the
/// line. Retirements and unclassified positions also score nothing.
pub fn base_points(position: i32, dnf: bool, dsq: bool) -> f64 {
    if dsq || dnf || position <= 0 {
        return 0.0;
    }

    POINTS_TABLE
        .get(position as usize - 1)
        .copied()
        .unwrap_or(0.0)
}

/// Full points for one result line under the given race kind.
///
/// The race-kind multiplier applies to the position points only. Bonuses are
/// flat and stack, with the fastest-lap bonus withheld from pilots who did
/// not finish. A disqualification forfeits everything, bonuses included.
pub fn score(line: &ScoredLine, kind: RaceKind) -> f64 {
    if line.dsq {
        return 0.0;
    }

    let multiplier = match kind {
        RaceKind::Normal => 1.0,
        RaceKind::Sprint => SPRINT_MULTIPLIER,
        RaceKind::Final => FINAL_MULTIPLIER,
    };

    let mut points = base_points(line.position, line.dnf, line.dsq) * multiplier;

    if line.fastest_lap && !line.dnf {
        points += BONUS_POINT;
    }
    if line.driver_of_the_day {
        points += BONUS_POINT;
    }
    if line.fan_favorite {
        points += BONUS_POINT;
    }

    points
}

/// License points deducted for a verdict. Warnings carry no direct penalty;
/// they are handled through the warning counter instead.
pub fn verdict_penalty(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Dismissed => 0,
        Verdict::Warning => 0,
        Verdict::Light => 3,
        Verdict::Medium => 5,
        Verdict::Severe => 10,
    }
}

/// License penalty triggered by an accumulated warning count, applied when
/// the count is reached and refunded when it is undone.
pub fn warning_penalty(warnings: i32) -> i32 {
    if warnings > 0 && warnings % WARNINGS_PER_PENALTY == 0 {
        verdict_penalty(Verdict::Light)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_scores_thirty_five() {
        assert_eq!(base_points(1, false, false), 35.0);
    }

    #[test]
    fn last_scored_position_is_twentieth() {
        assert_eq!(base_points(20, false, false), 1.0);
        assert_eq!(base_points(21, false, false), 0.0);
    }

    #[test]
    fn dsq_scores_nothing_even_from_pole() {
        assert_eq!(base_points(1, false, true), 0.0);
    }

    #[test]
    fn dnf_scores_nothing() {
        assert_eq!(base_points(3, true, false), 0.0);
    }

    #[test]
    fn unclassified_position_scores_nothing() {
        assert_eq!(base_points(0, false, false), 0.0);
        assert_eq!(base_points(-1, false, false), 0.0);
    }

    #[test]
    fn sprint_halves_position_points() {
        let line = ScoredLine {
            position: 1,
            ..Default::default()
        };
        assert_eq!(score(&line, RaceKind::Sprint), 17.5);
    }

    #[test]
    fn final_doubles_position_points() {
        let line = ScoredLine {
            position: 2,
            ..Default::default()
        };
        assert_eq!(score(&line, RaceKind::Final), 60.0);
    }

    #[test]
    fn bonuses_stack_and_ignore_multiplier() {
        let line = ScoredLine {
            position: 1,
            fastest_lap: true,
            driver_of_the_day: true,
            fan_favorite: true,
            ..Default::default()
        };
        // 35 * 2 for the final, plus three flat bonus points.
        assert_eq!(score(&line, RaceKind::Final), 73.0);
    }

    #[test]
    fn fastest_lap_bonus_withheld_on_dnf() {
        let line = ScoredLine {
            position: 0,
            dnf: true,
            fastest_lap: true,
            driver_of_the_day: true,
            ..Default::default()
        };
        // Only the driver-of-the-day bonus survives a retirement.
        assert_eq!(score(&line, RaceKind::Normal), 1.0);
    }

    #[test]
    fn dsq_forfeits_bonus_points() {
        let line = ScoredLine {
            position: 1,
            dsq: true,
            fastest_lap: true,
            driver_of_the_day: true,
            fan_favorite: true,
            ..Default::default()
        };
        assert_eq!(score(&line, RaceKind::Normal), 0.0);
    }

    #[test]
    fn verdict_penalties_match_the_scale() {
        assert_eq!(verdict_penalty(Verdict::Dismissed), 0);
        assert_eq!(verdict_penalty(Verdict::Warning), 0);
        assert_eq!(verdict_penalty(Verdict::Light), 3);
        assert_eq!(verdict_penalty(Verdict::Medium), 5);
        assert_eq!(verdict_penalty(Verdict::Severe), 10);
    }

    #[test]
    fn every_third_warning_costs_points() {
        assert_eq!(warning_penalty(1), 0);
        assert_eq!(warning_penalty(2), 0);
        assert_eq!(warning_penalty(3), 3);
        assert_eq!(warning_penalty(4), 0);
        assert_eq!(warning_penalty(6), 3);
    }

    #[test]
    fn zero_warnings_cost_nothing() {
        assert_eq!(warning_penalty(0), 0);
    }
}
