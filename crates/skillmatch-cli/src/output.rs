//! Terminal output formatting.

use colored::Colorize;
use skillmatch_core::CompatibilityRecord;

/// Print the match results as a table, one row per scored pair.
pub fn print_match_table(records: &[CompatibilityRecord]) {
    if records.is_empty() {
        println!("{}", "No scorable candidate/project pairs.".dimmed());
        return;
    }

    println!(
        "{:<18} {:<18} {:>6} {:>6}  {}",
        "Candidate", "Project", "1st", "2nd", "Shared skills"
    );
    println!("{}", "─".repeat(80));

    for record in records {
        let first = format!("{:.2}", record.first_degree_compatibility);
        let second = if record.second_degree_compatibility == 1 {
            "1".green()
        } else {
            "0".dimmed()
        };
        let shared: Vec<&str> = record.match_skills1.iter().map(String::as_str).collect();

        println!(
            "{:<18} {:<18} {:>6} {:>6}  {}",
            truncate(&record.candidate, 16).cyan(),
            truncate(&record.project, 16).yellow(),
            first,
            second,
            shared.join(", ").dimmed()
        );
    }

    println!("\n{} pairs scored.", records.len().to_string().bold());
}

/// Print a titled list of names.
pub fn print_name_list(title: &str, names: &[String]) {
    if names.is_empty() {
        println!("{}", format!("No {} found.", title.to_lowercase()).dimmed());
        return;
    }

    println!("{} ({}):", title.bold(), names.len());
    for name in names {
        println!("  {} {}", "•".dimmed(), name);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
