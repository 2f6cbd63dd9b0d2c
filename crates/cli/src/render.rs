//! Text rendering for the session dashboard.

use std::fmt::Write;

use onegallon_core::AppState;
use onegallon_progress::IntakeSnapshot;

const BAR_WIDTH: usize = 30;

/// `[##########--------------------]  33%`
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        ratio * 100.0
    )
}

/// Title, metric, progress bar and bottle caption.
pub fn render_dashboard(snap: &IntakeSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "OneGallonTracker");
    let _ = writeln!(out, "Today's Water Intake: {}", snap.metric_label());
    let _ = writeln!(out, "{}", progress_bar(snap.progress(), BAR_WIDTH));
    let _ = write!(out, "{}", snap.equivalent_caption());
    if snap.achieved_today() {
        let _ = write!(out, "  (goal reached today)");
    }
    out
}

/// Today's records, then achievement days.
pub fn render_history(snap: &IntakeSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Today's records ({}):", snap.date);
    if snap.today_records.is_empty() {
        let _ = writeln!(out, "  none yet");
    }
    for record in &snap.today_records {
        let _ = writeln!(out, "  {}  {} ml", record.time.format("%H:%M:%S"), record.amount);
    }

    let _ = write!(out, "Achievement days:");
    if snap.history.is_empty() {
        let _ = write!(out, "\n  none yet");
    }
    for (date, total) in &snap.history {
        let _ = write!(out, "\n  {}  {} ml", date, total);
    }
    out
}

/// A saved state as read from disk, without any day rollover applied.
pub fn render_saved(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Saved day: {}", state.day.date);
    let _ = writeln!(out, "Total: {} ml", state.day.total_ml());
    for record in state.day.records() {
        let _ = writeln!(out, "  {}  {} ml", record.time.format("%Y-%m-%d %H:%M:%S"), record.amount);
    }
    let _ = write!(out, "Achievement days: {}", state.history.len());
    for (date, total) in state.history.newest_first() {
        let _ = write!(out, "\n  {}  {} ml", date, total);
    }
    out
}

pub const HELP: &str = "\
Commands:
  add [ml]   log an amount (default amount if omitted); a bare number also works
  status     redraw the dashboard
  history    show today's records and achievement days
  help       show this list
  quit       end the session";
