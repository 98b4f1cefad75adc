//! Rendering helpers for command output

use anyhow::Result;
use chrono::DateTime;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use wattbook_core::{Assessment, UsageReading};

/// Render a logical timestamp (unix milliseconds) for humans
pub fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one assessment in full
pub fn print_assessment(assessment: &Assessment) {
    println!("  {} - {}", assessment.id, assessment.address);
    println!("    Owner: {}", assessment.owner);
    println!(
        "    Rating: {:.1}, Savings: {:.2}",
        assessment.efficiency_rating, assessment.cost_savings
    );
    if !assessment.recommendations.is_empty() {
        println!("    Recommendations: {}", assessment.recommendations);
    }
    println!("    Created: {}", format_timestamp(assessment.created_at));
    if let Some(updated_at) = assessment.updated_at {
        println!("    Updated: {}", format_timestamp(updated_at));
    }
    println!("    Usage readings: {}", assessment.usage_history.len());
}

/// Build a table over assessments
pub fn assessments_table(assessments: &[Assessment]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").fg(Color::Cyan),
        Cell::new("Address").fg(Color::Cyan),
        Cell::new("Rating").fg(Color::Cyan),
        Cell::new("Savings").fg(Color::Cyan),
        Cell::new("Owner").fg(Color::Cyan),
        Cell::new("Readings").fg(Color::Cyan),
    ]);

    for assessment in assessments {
        table.add_row(vec![
            Cell::new(&assessment.id),
            Cell::new(&assessment.address),
            Cell::new(format!("{:.1}", assessment.efficiency_rating)),
            Cell::new(format!("{:.2}", assessment.cost_savings)),
            Cell::new(&assessment.owner),
            Cell::new(assessment.usage_history.len()),
        ]);
    }
    table
}

/// Build a table over usage readings in append order
pub fn readings_table(readings: &[UsageReading]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Timestamp").fg(Color::Cyan),
        Cell::new("Consumption").fg(Color::Cyan),
    ]);

    for reading in readings {
        table.add_row(vec![
            Cell::new(reading.timestamp),
            Cell::new(format!("{:.2}", reading.consumption)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_assessments_table_contains_fields() {
        let assessment = Assessment {
            id: "a-1".into(),
            owner: "inspector-7".into(),
            address: "1 Main St".into(),
            assessment_date: 0,
            efficiency_rating: 7.5,
            recommendations: String::new(),
            cost_savings: 220.0,
            created_at: 0,
            updated_at: None,
            usage_history: Vec::new(),
        };

        let rendered = assessments_table(std::slice::from_ref(&assessment)).to_string();
        assert!(rendered.contains("1 Main St"));
        assert!(rendered.contains("inspector-7"));
        assert!(rendered.contains("7.5"));
    }
}
