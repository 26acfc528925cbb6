//! Plain-text drawing for the terminal surface.

use crate::catalog::CountryEntry;
use crate::labels;
use crate::lifecycle::Session;
use crate::logging::{log, obj, v_num, Domain, Level};
use crate::projector::{project_session, SummaryCard, TrendPoint};

const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const ANSI_RESET: &str = "\x1b[0m";

/// Chart frame size in character cells.
#[derive(Debug, Clone, Copy)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self { width: 60, height: 12 }
    }
}

/// `2022: 0.851 (Very High - Tahmini)`
pub fn card_line(card: &SummaryCard, color: bool) -> String {
    let marker = if card.predicted {
        format!(" - {}", labels::PREDICTED_MARKER)
    } else {
        String::new()
    };
    let text = format!("{}: {} ({}{})", card.year, card.hdi, card.band.label(), marker);
    if color {
        format!("{}{}{}", card.style.ansi(), text, ANSI_RESET)
    } else {
        text
    }
}

pub fn sidebar_lines(entries: &[CountryEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{:>2}. {} {}", i, e.flag, e.name))
        .collect()
}

pub fn suggestion_lines(suggestions: &[String]) -> Vec<String> {
    suggestions.iter().enumerate().map(|(i, s)| format!("  [{}] {}", i, s)).collect()
}

/// One glyph per point, scaled over `domain`; out-of-domain points are blank.
pub fn sparkline(trend: &[TrendPoint], domain: (f64, f64)) -> String {
    let (lo, hi) = domain;
    trend
        .iter()
        .map(|p| {
            if p.hdi < lo || p.hdi > hi {
                return ' ';
            }
            let normalized = ((p.hdi - lo) / (hi - lo) * (SPARK_CHARS.len() - 1) as f64).round() as usize;
            SPARK_CHARS[normalized.min(SPARK_CHARS.len() - 1)]
        })
        .collect()
}

/// Continuous line chart over a fixed vertical domain.
///
/// Points map to evenly spaced columns; the gaps between neighbours are
/// filled by linear interpolation. Cells whose value falls outside `domain`
/// are left empty.
pub fn chart_lines(trend: &[TrendPoint], domain: (f64, f64), size: ChartSize) -> Vec<String> {
    if trend.is_empty() || size.width < 2 || size.height < 2 {
        return Vec::new();
    }
    let (lo, hi) = domain;
    let (w, h) = (size.width, size.height);
    let mut grid = vec![vec![' '; w]; h];

    let row_of = |v: f64| -> Option<usize> {
        if !(lo..=hi).contains(&v) {
            return None;
        }
        Some(((hi - v) / (hi - lo) * (h - 1) as f64).round() as usize)
    };
    let col_of = |i: usize| -> usize {
        if trend.len() == 1 {
            0
        } else {
            (i as f64 * (w - 1) as f64 / (trend.len() - 1) as f64).round() as usize
        }
    };

    for (i, pair) in trend.windows(2).enumerate() {
        let (c0, c1) = (col_of(i), col_of(i + 1));
        for c in c0..c1 {
            let t = (c - c0) as f64 / (c1 - c0) as f64;
            let v = pair[0].hdi + (pair[1].hdi - pair[0].hdi) * t;
            if let Some(r) = row_of(v) {
                grid[r][c] = '·';
            }
        }
    }
    for (i, p) in trend.iter().enumerate() {
        if let Some(r) = row_of(p.hdi) {
            grid[r][col_of(i)] = '•';
        }
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .enumerate()
        .map(|(r, row)| {
            let label = match r {
                0 => format!("{:.2}", hi),
                r if r == h - 1 => format!("{:.2}", lo),
                _ => String::new(),
            };
            format!("{:>5} │{}", label, row.into_iter().collect::<String>())
        })
        .collect();

    lines.push(format!("{:>5} └{}", "", "─".repeat(w)));
    let first = trend[0].year.to_string();
    if trend.len() == 1 {
        lines.push(format!("{:>5}  {}", "", first));
    } else {
        let last = trend[trend.len() - 1].year.to_string();
        let gap = w.saturating_sub(first.len() + last.len());
        lines.push(format!("{:>5}  {}{}{}", "", first, " ".repeat(gap), last));
    }
    lines
}

/// Full screen for the current session.
pub fn session_view(session: &Session, size: ChartSize, color: bool) -> String {
    let mut out = Vec::new();
    out.push(format!("== {} ==", labels::TITLE));
    if session.query().is_empty() {
        out.push(format!("> {}", labels::INPUT_PLACEHOLDER));
    } else {
        out.push(format!("> {}", session.query()));
    }
    out.extend(suggestion_lines(session.suggestions()));
    out.push(format!("[{}]", session.submit_label()));

    if !session.error_message().is_empty() {
        out.push(format!("! {}", session.error_message()));
    }

    let projection = project_session(session);
    if !projection.is_empty() {
        out.push(String::new());
        out.extend(projection.summary.iter().map(|c| card_line(c, color)));
        out.push(String::new());
        out.push(format!("{}  {}", labels::CHART_HEADING, sparkline(&projection.trend, projection.y_domain)));
        out.extend(chart_lines(&projection.trend, projection.y_domain, size));
        log(
            Level::Debug,
            Domain::Render,
            "chart",
            obj(&[
                ("points", v_num(projection.trend.len() as f64)),
                ("cards", v_num(projection.summary.len() as f64)),
            ]),
        );
    }
    out.join("\n")
}
