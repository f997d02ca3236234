use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::view::DashboardView;

pub fn build_report(view: &DashboardView, generated_at: DateTime<Utc>) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Athlete Readiness Report");
    let _ = writeln!(
        output,
        "Generated for {} at {}",
        view.scope.label(),
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Averages");

    for gauge in view.chart.indicators.iter() {
        let _ = writeln!(
            output,
            "- {}: {:.2} (of {:.0})",
            gauge.title, gauge.value, gauge.range[1]
        );
    }

    if let Some(teams) = &view.team_names {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Teams");
        if teams.is_empty() {
            let _ = writeln!(output, "No teams recorded.");
        } else {
            let _ = writeln!(output, "{}", teams.join(", "));
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");

    if view.rows.is_empty() {
        let _ = writeln!(output, "No measurements recorded for this scope.");
    } else {
        let _ = writeln!(
            output,
            "| Name | Readiness | Sleep Hours | Sleep Quality | Calories |"
        );
        let _ = writeln!(output, "|---|---|---|---|---|");
        for row in view.rows.iter() {
            let _ = writeln!(
                output,
                "| {} | {:.1} | {:.1} | {:.1} | {:.1} |",
                row.key, row.readiness, row.hours, row.quality, row.calories
            );
        }
    }

    output
}
