//! End-of-session report.
//!
//! Printed after a decided session. A cancelled session prints nothing.

use breach::{theme::ThemeColors, MatchResult, SessionState, Theme};

/// What the player achieved, captured when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub state: SessionState,
    pub uploaded: usize,
    pub targets: usize,
    pub used: usize,
    pub capacity: usize,
}

impl SessionSummary {
    pub fn new(state: SessionState, results: &[MatchResult], used: usize, capacity: usize) -> Self {
        Self {
            state,
            uploaded: results.iter().filter(|result| result.is_satisfied()).count(),
            targets: results.len(),
            used,
            capacity,
        }
    }
}

/// Format the summary for display on exit. Empty for cancelled or unfinished sessions.
pub fn format_summary(summary: &SessionSummary, theme: Theme) -> String {
    let colors = theme.colors();
    let headline = match summary.state {
        SessionState::Succeeded => format_headline(&colors, colors.success, "BREACH SUCCESSFUL"),
        SessionState::Exhausted => format_headline(&colors, colors.pending, "BUFFER EXHAUSTED"),
        SessionState::Cancelled | SessionState::Running => return String::new(),
    };
    let lines = [
        String::new(),
        headline,
        format_stat_line(
            "Uploaded",
            &format!("{}/{}", summary.uploaded, summary.targets),
        ),
        format_stat_line("Buffer", &format!("{}/{}", summary.used, summary.capacity)),
        String::new(),
    ];
    lines.join("\n")
}

fn format_headline(colors: &ThemeColors, color: &str, text: &str) -> String {
    format!("{color}{text}{}", colors.reset)
}

fn format_stat_line(label: &str, value: &str) -> String {
    format!("{:<10} {}", label, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_uploaded_targets() {
        let summary = SessionSummary::new(
            SessionState::Exhausted,
            &[MatchResult::Satisfied, MatchResult::Pending],
            6,
            6,
        );
        assert_eq!(summary.uploaded, 1);
        assert_eq!(summary.targets, 2);
    }

    #[test]
    fn cancelled_session_prints_nothing() {
        let summary = SessionSummary::new(SessionState::Cancelled, &[MatchResult::Pending], 0, 6);
        assert!(format_summary(&summary, Theme::Neon).is_empty());
    }

    #[test]
    fn succeeded_summary_reports_counts() {
        let summary = SessionSummary::new(
            SessionState::Succeeded,
            &[MatchResult::Satisfied; 3],
            4,
            6,
        );
        let output = format_summary(&summary, Theme::None);
        assert!(output.contains("BREACH SUCCESSFUL"));
        assert!(output.contains("Uploaded   3/3"));
        assert!(output.contains("Buffer     4/6"));
    }

    #[test]
    fn exhausted_summary_headline() {
        let summary = SessionSummary::new(SessionState::Exhausted, &[MatchResult::Pending], 6, 6);
        let output = format_summary(&summary, Theme::None);
        assert!(output.contains("BUFFER EXHAUSTED"));
        assert!(output.contains("Uploaded   0/1"));
    }
}
