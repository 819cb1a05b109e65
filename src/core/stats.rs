use crate::core::{AccountSnapshot, HeaderStats};
use chrono::{DateTime, Utc};

const MILLIS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// 以 365.25 天為一年，無條件捨去，最少為 1
pub fn years_active(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_ms = (now - created_at).num_milliseconds() as f64;
    let years = (elapsed_ms / MILLIS_PER_YEAR).floor() as i64;
    years.max(1)
}

pub fn derive_stats(snapshot: &AccountSnapshot, now: DateTime<Utc>) -> HeaderStats {
    HeaderStats {
        years_active: years_active(snapshot.created_at, now),
        repositories: snapshot.repository_count,
        commits: snapshot.total_commit_contributions,
    }
}

impl HeaderStats {
    pub fn years_display(&self) -> String {
        format!("{}+", self.years_active)
    }

    pub fn repositories_display(&self) -> String {
        format!("{}+", self.repositories)
    }

    pub fn commits_display(&self) -> String {
        if self.commits >= 1000 {
            format!("{}k+", self.commits / 1000)
        } else {
            format!("{}+", self.commits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContributionCalendar;
    use chrono::{Duration, TimeZone};

    fn stats_with_commits(commits: u64) -> HeaderStats {
        HeaderStats {
            years_active: 1,
            repositories: 0,
            commits,
        }
    }

    #[test]
    fn test_commits_display() {
        assert_eq!(stats_with_commits(0).commits_display(), "0+");
        assert_eq!(stats_with_commits(999).commits_display(), "999+");
        assert_eq!(stats_with_commits(1000).commits_display(), "1k+");
        assert_eq!(stats_with_commits(1999).commits_display(), "1k+");
        assert_eq!(stats_with_commits(4532).commits_display(), "4k+");
        assert_eq!(stats_with_commits(12_345).commits_display(), "12k+");
    }

    #[test]
    fn test_years_active_floors() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let created = now - Duration::days(3 * 365 + 364);
        assert_eq!(years_active(created, now), 3);

        let created = now - Duration::days(10 * 366);
        assert_eq!(years_active(created, now), 10);
    }

    #[test]
    fn test_years_active_clamps_to_one() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert_eq!(years_active(now, now), 1);
        assert_eq!(years_active(now - Duration::days(100), now), 1);
        // 時鐘偏差導致建立時間晚於現在
        assert_eq!(years_active(now + Duration::seconds(5), now), 1);
    }

    #[test]
    fn test_derive_stats() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let snapshot = AccountSnapshot {
            created_at: Utc.with_ymd_and_hms(2015, 3, 14, 9, 26, 53).unwrap(),
            repository_count: 42,
            total_commit_contributions: 4532,
            contribution_calendar: ContributionCalendar::default(),
        };

        let stats = derive_stats(&snapshot, now);

        assert_eq!(stats.years_active, 9);
        assert_eq!(stats.years_display(), "9+");
        assert_eq!(stats.repositories_display(), "42+");
        assert_eq!(stats.commits_display(), "4k+");
    }
}
