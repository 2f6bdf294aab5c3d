//! Achievement and badge threshold checks
//!
//! Pure progression logic: given a player's running totals, decide which
//! rewards just unlocked. Persisting and displaying them is the backend's
//! and UI's business.

/// Completing a hunt faster than this unlocks the speed achievement (seconds)
const SPEED_DEMON_TIME_SECS: u64 = 600;

/// Hunts completed to unlock the explorer achievement
const EXPLORER_HUNT_COUNT: u32 = 10;

/// One-off achievements earned on a hunt completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCode {
    FirstHunt,
    SpeedDemon,
    PerfectRun,
    Explorer,
}

impl AchievementCode {
    pub fn rarity(&self) -> Rarity {
        match self {
            AchievementCode::FirstHunt => Rarity::Common,
            AchievementCode::SpeedDemon => Rarity::Rare,
            AchievementCode::PerfectRun => Rarity::Epic,
            AchievementCode::Explorer => Rarity::Rare,
        }
    }
}

/// Long-running badges earned from cumulative totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCode {
    BronzeHunter,
    SilverHunter,
    GoldHunter,
    ScoreMaster,
    WinStreak5,
    WinStreak10,
}

/// Reward rarity tiers, rarest last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A player's running totals, as maintained by the progress store
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerProgress {
    pub total_hunts: u32,
    pub total_score: u32,
    pub win_streak: u32,
    pub perfect_runs: u32,
    pub total_time_secs: u64,
}

/// Achievements unlocked by the hunt completion that produced `progress`
pub fn check_achievements(
    progress: &PlayerProgress,
    time_taken_secs: u64,
    perfect_run: bool,
) -> Vec<AchievementCode> {
    let mut achieved = Vec::new();

    if progress.total_hunts == 1 {
        achieved.push(AchievementCode::FirstHunt);
    }

    if time_taken_secs < SPEED_DEMON_TIME_SECS {
        achieved.push(AchievementCode::SpeedDemon);
    }

    if perfect_run {
        achieved.push(AchievementCode::PerfectRun);
    }

    if progress.total_hunts >= EXPLORER_HUNT_COUNT {
        achieved.push(AchievementCode::Explorer);
    }

    achieved
}

/// Badges the player qualifies for with the given totals
pub fn check_badges(progress: &PlayerProgress) -> Vec<BadgeCode> {
    let mut earned = Vec::new();

    if progress.total_hunts >= 5 {
        earned.push(BadgeCode::BronzeHunter);
    }
    if progress.total_hunts >= 25 {
        earned.push(BadgeCode::SilverHunter);
    }
    if progress.total_hunts >= 100 {
        earned.push(BadgeCode::GoldHunter);
    }
    if progress.total_score >= 10_000 {
        earned.push(BadgeCode::ScoreMaster);
    }
    if progress.win_streak >= 5 {
        earned.push(BadgeCode::WinStreak5);
    }
    if progress.win_streak >= 10 {
        earned.push(BadgeCode::WinStreak10);
    }

    earned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hunt_achievement() {
        let progress = PlayerProgress {
            total_hunts: 1,
            ..Default::default()
        };
        let achieved = check_achievements(&progress, 1200, false);
        assert!(achieved.contains(&AchievementCode::FirstHunt));
    }

    #[test]
    fn test_speed_demon_threshold() {
        let progress = PlayerProgress {
            total_hunts: 3,
            ..Default::default()
        };

        let fast = check_achievements(&progress, 599, false);
        assert!(fast.contains(&AchievementCode::SpeedDemon));

        let slow = check_achievements(&progress, 600, false);
        assert!(!slow.contains(&AchievementCode::SpeedDemon));
    }

    #[test]
    fn test_perfect_run_achievement() {
        let progress = PlayerProgress {
            total_hunts: 2,
            ..Default::default()
        };
        let achieved = check_achievements(&progress, 1200, true);
        assert!(achieved.contains(&AchievementCode::PerfectRun));
    }

    #[test]
    fn test_explorer_achievement() {
        let progress = PlayerProgress {
            total_hunts: 10,
            ..Default::default()
        };
        let achieved = check_achievements(&progress, 1200, false);
        assert!(achieved.contains(&AchievementCode::Explorer));
    }

    #[test]
    fn test_hunter_badge_tiers() {
        let newcomer = PlayerProgress {
            total_hunts: 4,
            ..Default::default()
        };
        assert!(check_badges(&newcomer).is_empty());

        let veteran = PlayerProgress {
            total_hunts: 25,
            ..Default::default()
        };
        let earned = check_badges(&veteran);
        assert!(earned.contains(&BadgeCode::BronzeHunter));
        assert!(earned.contains(&BadgeCode::SilverHunter));
        assert!(!earned.contains(&BadgeCode::GoldHunter));
    }

    #[test]
    fn test_score_and_streak_badges() {
        let progress = PlayerProgress {
            total_hunts: 1,
            total_score: 12_000,
            win_streak: 7,
            ..Default::default()
        };
        let earned = check_badges(&progress);
        assert!(earned.contains(&BadgeCode::ScoreMaster));
        assert!(earned.contains(&BadgeCode::WinStreak5));
        assert!(!earned.contains(&BadgeCode::WinStreak10));
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert_eq!(AchievementCode::PerfectRun.rarity(), Rarity::Epic);
    }
}
