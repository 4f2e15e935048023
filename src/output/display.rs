//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{CorpusStats, PartitionReport, SimulationStats};
use colored::Colorize;

/// Print the buckets a guess would produce
pub fn print_partition_report(report: &PartitionReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} + {} ",
        "PARTITION:".bright_cyan().bold(),
        report.pattern.to_uppercase().bright_yellow().bold(),
        report.letter.to_ascii_uppercase().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let guessed = if report.guessed.is_empty() {
        "none".to_string()
    } else {
        report.guessed.to_uppercase()
    };
    println!("\n   Guessed:     {guessed}");
    println!("   Candidates:  {}", report.candidates);
    println!("   Buckets:     {}", report.buckets.len());

    if report.buckets.is_empty() {
        println!("\n{}", "No corpus word fits this pattern.".red().bold());
        return;
    }

    let largest = report.buckets.iter().map(|b| b.size).max().unwrap_or(1);

    println!();
    for (i, bucket) in report.buckets.iter().enumerate() {
        let bar = create_progress_bar(bucket.size as f64, largest as f64, 20);
        let marker = if report.chosen == Some(i) { "▶" } else { " " };
        let mut samples = bucket.samples.join(", ");
        if bucket.samples.len() < bucket.size {
            samples.push_str(", …");
        }

        let line = format!("{marker} {:<12} {bar} {:5}  {samples}", bucket.pattern, bucket.size);
        if report.chosen == Some(i) {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }

    if let Some(chosen) = report.chosen_bucket() {
        println!(
            "\n   Engine keeps {} ({} words)",
            chosen.pattern.bright_yellow().bold(),
            chosen.size
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", stats.guesser);
    println!("   Games played:     {}", stats.games);
    println!(
        "   Guesser wins:     {}",
        format!("{} ({:.1}%)", stats.wins, stats.win_rate() * 100.0).green()
    );
    println!("   Engine wins:      {}", format!("{}", stats.losses).yellow());
    if stats.errors > 0 {
        println!("   Aborted:          {}", format!("{}", stats.errors).red().bold());
    }
    println!(
        "   Average misses:   {}",
        format!("{:.2}/{}", stats.average_misses, stats.total_misses)
            .bright_yellow()
            .bold()
    );
    println!("   Average guesses:  {:.2}", stats.average_guesses);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", stats.games_per_second);

    println!("\n📈 {}", "Win rate by word length:".bright_cyan().bold());
    for (length, tally) in &stats.by_length {
        let bar = create_progress_bar(tally.win_rate(), 1.0, 40);
        println!(
            "   {length:2}: {} {:4}/{:<4} ({:5.1}%)",
            bar.green(),
            tally.wins,
            tally.games,
            tally.win_rate() * 100.0
        );
    }

    let hardest = stats.hardest_lengths(3);
    if !hardest.is_empty() {
        println!("\n🧱 {}", "Hardest lengths:".bright_cyan().bold());
        for (length, tally) in hardest {
            println!("   {length} letters: {:.1}% won", tally.win_rate() * 100.0);
        }
    }

    if !stats.toughest_words.is_empty() {
        println!("\n💀 {}", "Most disclosed on a loss:".bright_cyan().bold());
        for (word, count) in &stats.toughest_words {
            println!("   {:<10} {count}", word.to_uppercase());
        }
    }
}

/// Print the word list summary
pub fn print_corpus_stats(stats: &CorpusStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:           {}", format!("{}", stats.total_words).bright_yellow().bold());
    println!("   Shortest:        {}", stats.shortest);
    println!("   Longest:         {}", stats.longest);
    println!("   Average length:  {:.2}", stats.average_length);

    let largest = stats.histogram.values().copied().max().unwrap_or(1);

    println!("\n📈 {}", "Length distribution:".bright_cyan().bold());
    for (&length, &count) in &stats.histogram {
        let bar = create_progress_bar(count as f64, largest as f64, 40);
        println!(
            "   {length:2}: {} {count:5} ({:5.1}%)",
            bar.green(),
            stats.length_share(length) * 100.0
        );
    }
}
