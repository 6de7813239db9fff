use std::fmt::Write as _;
use std::time::Duration;

use crossterm::style::{Color, Stylize, style};

use crate::metrics::{Extremes, Summary};

const SECS_PER_MIN: u64 = 60;

/// Semantic coloring of report lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Volume,
    Success,
    Failure,
}

impl Tone {
    const fn color(self) -> Color {
        match self {
            Tone::Volume => Color::Yellow,
            Tone::Success => Color::Green,
            Tone::Failure => Color::Red,
        }
    }
}

pub(crate) fn paint(text: &str, tone: Tone, no_color: bool) -> String {
    if no_color {
        return text.to_owned();
    }
    style(text).with(tone.color()).to_string()
}

/// `"1 minute(s) and 5 seconds"` from a minute upward, `"42 seconds"` below.
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let minutes = total_secs / SECS_PER_MIN;
    let seconds = total_secs % SECS_PER_MIN;
    if minutes > 0 {
        format!("{} minute(s) and {} seconds", minutes, seconds)
    } else {
        format!("{} seconds", seconds)
    }
}

pub(crate) fn summary_lines(summary: &Summary, no_color: bool) -> Vec<String> {
    let mut lines = vec![
        paint(
            &format!("Requests sent: {}", summary.requests_sent),
            Tone::Volume,
            no_color,
        ),
        paint(
            &format!("Requests succeeded: {}", summary.requests_succeeded),
            Tone::Success,
            no_color,
        ),
        paint(
            &format!("Requests failed: {}", summary.requests_failed),
            Tone::Failure,
            no_color,
        ),
        paint(
            &format!("Success rate: {:.2}%", summary.success_rate),
            Tone::Success,
            no_color,
        ),
        paint(
            &format!("Failure rate: {:.2}%", summary.failure_rate),
            Tone::Failure,
            no_color,
        ),
    ];

    push_extremes(&mut lines, "elapsed", summary.latency.as_ref(), no_color);
    push_extremes(&mut lines, "connect", summary.connect.as_ref(), no_color);

    if !summary.status_counts.is_empty() {
        let mut codes = String::new();
        for (status, count) in &summary.status_counts {
            if !codes.is_empty() {
                codes.push_str(", ");
            }
            drop(write!(codes, "{}={}", status, count));
        }
        lines.push(paint(
            &format!("Status codes: {}", codes),
            Tone::Volume,
            no_color,
        ));
    }

    lines
}

fn push_extremes(lines: &mut Vec<String>, label: &str, extremes: Option<&Extremes>, no_color: bool) {
    match extremes {
        Some(extremes) => {
            lines.push(paint(
                &format!(
                    "Fastest request {} time: {:.6} seconds",
                    label,
                    extremes.fastest.as_secs_f64()
                ),
                Tone::Success,
                no_color,
            ));
            lines.push(paint(
                &format!(
                    "Slowest request {} time: {:.6} seconds",
                    label,
                    extremes.slowest.as_secs_f64()
                ),
                Tone::Failure,
                no_color,
            ));
            lines.push(paint(
                &format!(
                    "Average request {} time: {:.6} seconds",
                    label,
                    extremes.average.as_secs_f64()
                ),
                Tone::Volume,
                no_color,
            ));
        }
        None => lines.push(paint(
            &format!("Request {} time: no data", label),
            Tone::Failure,
            no_color,
        )),
    }
}

pub(crate) fn print_summary(summary: &Summary, no_color: bool) {
    for line in summary_lines(summary, no_color) {
        println!(" {}", line);
    }
}
