use crate::core::{ContributionCalendar, RenderedCell};
use std::fmt;

pub const WEEKS_SHOWN: usize = 52;
pub const CELL_X_STEP: u32 = 14;
pub const CELL_Y_STEP: u32 = 15;
pub const FIRST_DELAY_CENTIS: u32 = 10;

pub const DARK_BASE: &str = "#1a1a3e";
pub const DIM_ACCENT: &str = "#0d3d56";
pub const BRIGHT_ACCENT: &str = "#00d4ff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl ContributionLevel {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => ContributionLevel::None,
            1..=2 => ContributionLevel::Low,
            3..=5 => ContributionLevel::Medium,
            6..=8 => ContributionLevel::High,
            _ => ContributionLevel::Max,
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            ContributionLevel::None => DARK_BASE,
            ContributionLevel::Low => DIM_ACCENT,
            _ => BRIGHT_ACCENT,
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            ContributionLevel::Medium => 0.5,
            ContributionLevel::High => 0.8,
            _ => 1.0,
        }
    }
}

impl fmt::Display for RenderedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"      <rect class="contrib-cell" x="{}" y="{}" width="12" height="12" rx="2" fill="{}" opacity="{}" style="animation-delay: {}.{:02}s"/>"#,
            self.x,
            self.y,
            self.fill,
            self.opacity,
            self.delay_centis / 100,
            self.delay_centis % 100
        )
    }
}

/// 只取最後 52 週；延遲依處理順序遞增，跨週不重設
pub fn render_cells(calendar: &ContributionCalendar) -> Vec<RenderedCell> {
    let skip = calendar.weeks.len().saturating_sub(WEEKS_SHOWN);

    let (cells, _) = calendar
        .weeks
        .iter()
        .skip(skip)
        .enumerate()
        .flat_map(|(week_index, week)| {
            week.contribution_days
                .iter()
                .map(move |day| (week_index as u32, day))
        })
        .fold(
            (Vec::new(), FIRST_DELAY_CENTIS),
            |(mut cells, delay), (week_index, day)| {
                let level = ContributionLevel::from_count(day.contribution_count);
                cells.push(RenderedCell {
                    x: week_index * CELL_X_STEP,
                    y: u32::from(day.weekday) * CELL_Y_STEP,
                    fill: level.fill(),
                    opacity: level.opacity(),
                    delay_centis: delay,
                });
                (cells, delay + 1)
            },
        );

    cells
}

pub fn render_grid(cells: &[RenderedCell]) -> String {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DayRecord, WeekRecord};
    use chrono::{Duration, NaiveDate};

    fn calendar(weeks: usize, count_for: impl Fn(usize, u8) -> u32) -> ContributionCalendar {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let weeks: Vec<WeekRecord> = (0..weeks)
            .map(|w| WeekRecord {
                contribution_days: (0..7u8)
                    .map(|d| DayRecord {
                        contribution_count: count_for(w, d),
                        date: start + Duration::days((w * 7 + d as usize) as i64),
                        weekday: d,
                    })
                    .collect(),
            })
            .collect();
        ContributionCalendar {
            total_contributions: 0,
            weeks,
        }
    }

    #[test]
    fn test_level_boundaries() {
        let expected = [
            (0, ContributionLevel::None),
            (1, ContributionLevel::Low),
            (2, ContributionLevel::Low),
            (3, ContributionLevel::Medium),
            (5, ContributionLevel::Medium),
            (6, ContributionLevel::High),
            (8, ContributionLevel::High),
            (9, ContributionLevel::Max),
            (100, ContributionLevel::Max),
        ];
        for (count, level) in expected {
            assert_eq!(ContributionLevel::from_count(count), level, "count {}", count);
        }

        assert_eq!(ContributionLevel::None.fill(), DARK_BASE);
        assert_eq!(ContributionLevel::Low.fill(), DIM_ACCENT);
        assert_eq!(ContributionLevel::Medium.fill(), BRIGHT_ACCENT);
        assert_eq!(ContributionLevel::Medium.opacity(), 0.5);
        assert_eq!(ContributionLevel::High.opacity(), 0.8);
        assert_eq!(ContributionLevel::Max.opacity(), 1.0);
    }

    #[test]
    fn test_full_year_renders_364_cells_in_order() {
        let cells = render_cells(&calendar(52, |_, _| 0));

        assert_eq!(cells.len(), 364);
        assert_eq!((cells[0].x, cells[0].y), (0, 0));
        assert_eq!((cells[6].x, cells[6].y), (0, 90));
        assert_eq!((cells[7].x, cells[7].y), (14, 0));
        assert_eq!((cells[363].x, cells[363].y), (51 * 14, 90));
    }

    #[test]
    fn test_only_last_52_weeks_rendered() {
        // 最舊的 3 週全部有貢獻，應被捨棄
        let cells = render_cells(&calendar(55, |w, _| if w < 3 { 9 } else { 0 }));

        assert_eq!(cells.len(), 364);
        assert!(cells.iter().all(|cell| cell.fill == DARK_BASE));
        assert_eq!(cells[0].x, 0);
    }

    #[test]
    fn test_fewer_weeks_uses_all() {
        let cells = render_cells(&calendar(3, |_, _| 1));
        assert_eq!(cells.len(), 21);
    }

    #[test]
    fn test_delay_increments_across_weeks() {
        let cells = render_cells(&calendar(52, |_, _| 0));

        for (n, cell) in cells.iter().enumerate() {
            assert_eq!(cell.delay_centis, 10 + n as u32);
        }

        let markup = render_grid(&cells);
        assert!(markup.starts_with(r#"      <rect class="contrib-cell" x="0" y="0""#));
        assert!(markup.contains(r#"style="animation-delay: 0.10s"/>"#));
        assert!(markup.contains(r#"style="animation-delay: 0.17s"/>"#));
        // 第 363 個格子：0.10 + 3.63
        assert!(markup.contains(r#"style="animation-delay: 3.73s"/>"#));
    }

    #[test]
    fn test_cell_markup() {
        let cell = RenderedCell {
            x: 28,
            y: 45,
            fill: BRIGHT_ACCENT,
            opacity: 0.5,
            delay_centis: 105,
        };

        assert_eq!(
            cell.to_string(),
            "      <rect class=\"contrib-cell\" x=\"28\" y=\"45\" width=\"12\" height=\"12\" rx=\"2\" fill=\"#00d4ff\" opacity=\"0.5\" style=\"animation-delay: 1.05s\"/>\n"
        );

        let full = RenderedCell {
            opacity: 1.0,
            ..cell
        };
        assert!(full.to_string().contains(r#"opacity="1""#));
    }

    #[test]
    fn test_empty_calendar() {
        let cells = render_cells(&ContributionCalendar::default());
        assert!(cells.is_empty());
        assert_eq!(render_grid(&cells), "");
    }
}
