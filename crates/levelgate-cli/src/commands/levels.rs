use colored::{ColoredString, Colorize};
use levelgate_core::Severity;

fn paint(severity: Severity) -> ColoredString {
    let name = severity.name();
    match severity {
        Severity::Trace => name.dimmed(),
        Severity::Debug => name.blue(),
        Severity::Info => name.green(),
        Severity::Warn => name.yellow(),
        Severity::Error => name.red(),
        Severity::Fatal => name.red().bold(),
    }
}

/// Renders the severity table, marking which levels pass `threshold`
pub fn render_levels(threshold: Severity) -> String {
    let mut out = String::new();
    for severity in Severity::ALL {
        let marker = if severity == threshold {
            "<- threshold"
        } else if severity > threshold {
            "forwarded"
        } else {
            "suppressed"
        };
        out.push_str(&format!(
            "{} {:<5} {}\n",
            severity.rank(),
            paint(severity),
            marker
        ));
    }
    out
}

pub fn execute_levels(threshold: Severity) {
    print!("{}", render_levels(threshold));
}
