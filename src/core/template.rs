//! 模板替換。
//!
//! 模板必須包含網格起始標記 [`GRID_START_MARKER`] 及其後的結束標記
//! [`GRID_END_MARKER`]，兩者之間的內容會整段重新產生。統計佔位符則全域替換。

use crate::core::HeaderStats;
use crate::utils::error::{HeaderError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub const YEARS_PLACEHOLDER: &str = "{{YEARS_CODING}}";
pub const REPOSITORIES_PLACEHOLDER: &str = "{{REPOSITORIES}}";
pub const COMMITS_PLACEHOLDER: &str = "{{COMMITS}}";

pub const GRID_START_MARKER: &str = "    <!-- Contribution grid: 52 weeks";
pub const GRID_END_MARKER: &str = "    </g>\n\n    <!-- Month labels -->";

const GRID_HEADER: &str = "    <!-- Contribution grid: 52 weeks (auto-generated) -->\n";
const GRID_GROUP_OPEN: &str = "    <g transform=\"translate(266, 330)\">\n";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{[A-Z][A-Z0-9_]*\}\}").expect("valid placeholder regex"))
}

pub fn splice_template(template: &str, stats: &HeaderStats, grid_markup: &str) -> Result<String> {
    let start = template
        .find(GRID_START_MARKER)
        .ok_or_else(|| missing_marker(GRID_START_MARKER))?;
    let end = template[start..]
        .find(GRID_END_MARKER)
        .map(|offset| start + offset + GRID_END_MARKER.len())
        .ok_or_else(|| missing_marker(GRID_END_MARKER))?;

    let mut document = String::with_capacity(template.len() + grid_markup.len());
    document.push_str(&template[..start]);
    document.push_str(GRID_HEADER);
    document.push_str(GRID_GROUP_OPEN);
    document.push_str(grid_markup);
    document.push_str(GRID_END_MARKER);
    document.push_str(&template[end..]);

    let replacements = [
        (YEARS_PLACEHOLDER, stats.years_display()),
        (REPOSITORIES_PLACEHOLDER, stats.repositories_display()),
        (COMMITS_PLACEHOLDER, stats.commits_display()),
    ];
    for (placeholder, value) in &replacements {
        if !document.contains(placeholder) {
            tracing::debug!("Placeholder {} not present in template", placeholder);
            continue;
        }
        document = document.replace(placeholder, value);
    }

    let leftovers: Vec<&str> = placeholder_pattern()
        .find_iter(&document)
        .map(|m| m.as_str())
        .collect();
    if !leftovers.is_empty() {
        tracing::warn!("Template still contains unknown placeholders: {:?}", leftovers);
    }

    Ok(document)
}

fn missing_marker(marker: &str) -> HeaderError {
    HeaderError::FileFormatError {
        message: format!(
            "Could not find contribution grid marker {:?} in SVG template",
            marker
        ),
    }
}
