// Colored terminal output for match rankings, keywords, and skill gaps.
//
// Only used with --pretty; the default output on stdout is JSON for the
// upstream consumer.

use colored::Colorize;

use crate::keywords::Keyword;
use crate::matching::Match;

/// Display a ranked match list with a relative score bar.
pub fn display_matches(matches: &[Match]) {
    if matches.is_empty() {
        println!("No records to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Match Ranking ({} records) ===", matches.len()).bold()
    );
    println!();

    let bar_width: usize = 20;
    let top_score = matches
        .first()
        .map(|m| m.score)
        .filter(|s| *s > 0.0)
        .unwrap_or(1.0);

    for (i, m) in matches.iter().enumerate() {
        let filled = ((m.score / top_score) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));

        let colored_bar = if m.score >= 0.75 * top_score {
            bar.bright_green()
        } else if m.score >= 0.25 * top_score {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>3}. {:<32} {} {:.4}",
            i + 1,
            m.id.bold(),
            colored_bar,
            m.score
        );
    }
    println!();
}

/// Display extracted keywords grouped as a score-sorted table.
pub fn display_keywords(keywords: &[Keyword]) {
    if keywords.is_empty() {
        println!("No keywords extracted.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Keywords ({}) ===", keywords.len()).bold()
    );
    println!();
    println!(
        "  {:<28} {:>6}  {}",
        "Keyword".dimmed(),
        "Score".dimmed(),
        "Source".dimmed()
    );
    println!("  {}", "-".repeat(54).dimmed());

    for keyword in keywords {
        println!(
            "  {:<28} {:>6}  {}",
            keyword.phrase,
            keyword.score,
            keyword.source.dimmed()
        );
    }
    println!();
}

/// Display the missing requirements from a skill gap run.
pub fn display_missing_skills(missing: &[String]) {
    if missing.is_empty() {
        println!("\n{}", "No skill gaps — every requirement is covered.".green());
        return;
    }

    println!(
        "\n{}",
        format!("=== Missing Skills ({}) ===", missing.len()).bold()
    );
    println!();
    for requirement in missing {
        println!("  {} {}", "!".yellow(), requirement);
    }
    println!();
}
