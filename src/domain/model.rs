use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 單一使用者的帳號統計快照，每次執行從 API 取得一次
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub created_at: DateTime<Utc>,
    pub repository_count: u64,
    pub total_commit_contributions: u64,
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<WeekRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub contribution_days: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub contribution_count: u32,
    pub date: NaiveDate,
    pub weekday: u8,
}

/// 模板中顯示的統計數字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStats {
    pub years_active: i64,
    pub repositories: u64,
    pub commits: u64,
}

/// 網格中的一個格子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedCell {
    pub x: u32,
    pub y: u32,
    pub fill: &'static str,
    pub opacity: f64,
    /// 動畫延遲，以百分之一秒為單位
    pub delay_centis: u32,
}

#[derive(Debug, Clone)]
pub struct HeaderRender {
    pub stats: HeaderStats,
    pub grid_markup: String,
    pub cell_count: usize,
}
