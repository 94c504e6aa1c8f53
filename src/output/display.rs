//! Display functions for command results

use super::formatters::{distribution_bar, ladder_line, position_marker};
use crate::commands::{
    AllShortestResult, BenchmarkResult, LadderResult, NeighborReport, ShortestResult,
};
use crate::core::Ladder;
use crate::search::SearchState;
use colored::Colorize;

/// Print the result of a shortest-ladder query
pub fn print_shortest_result(result: &ShortestResult, verbose: bool) {
    print_header("LADDER", result);

    let ladder = &result.outcome.result;
    if ladder.is_empty() {
        print_no_path(result);
    } else {
        println!("\n  {}", ladder_line(ladder).bright_white().bold());
        println!(
            "\n{}",
            format!("✅ {} rungs", ladder.len()).green().bold()
        );
    }

    if verbose {
        print_search_details(result);
    }
}

/// Print the result of an all-shortest-ladders query
pub fn print_all_result(result: &AllShortestResult, verbose: bool) {
    print_header("ALL SHORTEST LADDERS", result);

    let ladders = &result.outcome.result;
    if ladders.is_empty() {
        print_no_path(result);
    } else {
        println!();
        for (i, ladder) in ladders.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, ladder_line(ladder));
        }
        let rungs = ladders.first().map_or(0, Ladder::len);
        println!(
            "\n{}",
            format!("✅ {} ladders of {rungs} rungs", ladders.len())
                .green()
                .bold()
        );
    }

    if verbose {
        print_search_details(result);
    }
}

fn print_header<T>(title: &str, result: &LadderResult<T>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        format!("{title}:").bright_cyan().bold(),
        result.start.text().to_uppercase().bright_yellow().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

fn print_no_path<T>(result: &LadderResult<T>) {
    let reason = if result.start == result.target {
        "start and target are the same word".to_string()
    } else if result.outcome.stats.cap_reached {
        format!(
            "no ladder within {} rungs (longer ladders are not searched)",
            result.max_rungs
        )
    } else {
        "the words are not connected".to_string()
    };
    println!("\n{}", format!("❌ No ladder: {reason}").red().bold());
}

fn print_search_details<T>(result: &LadderResult<T>) {
    let outcome = &result.outcome;
    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Corpus:          {} words", result.corpus_size);
    println!("   Final state:     {}", outcome.state.name());
    println!("   Paths expanded:  {}", outcome.stats.paths_expanded);
    println!("   Peak frontier:   {}", outcome.stats.peak_frontier);
    println!("   Rung cap:        {}", result.max_rungs);
    println!(
        "   Index build:     {:.2}ms",
        result.build_time.as_secs_f64() * 1000.0
    );
    println!(
        "   Search:          {:.2}ms",
        result.search_time.as_secs_f64() * 1000.0
    );
    if outcome.state == SearchState::Exhausted && outcome.stats.cap_reached {
        println!("   {}", "Stopped by the rung cap".yellow());
    }
}

/// Print the neighbors of a word
pub fn print_neighbor_report(report: &NeighborReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        report.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.neighbors.is_empty() {
        println!("\n  No one-letter neighbors");
    } else {
        println!();
        for (neighbor, position) in &report.neighbors {
            println!(
                "  {}  {}",
                neighbor.text().bright_white(),
                position_marker(neighbor.len(), *position).bright_black()
            );
        }
    }

    println!("\n📊 {}", "By position:".bright_cyan().bold());
    for (position, count) in report.by_position().iter().enumerate() {
        println!(
            "   {}  {count}",
            position_marker(report.word.len(), position)
        );
    }

    println!("\n📈 {}", "Index:".bright_cyan().bold());
    println!(
        "   {}-letter words:  {}",
        report.word.len(),
        report.corpus_size
    );
    println!("   Masks:           {}", report.mask_count);
    if let Some((mask, size)) = &report.largest_bucket {
        println!("   Largest bucket:  {mask} ({size} words)");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Found:            {}",
        format!("{}", result.found).green()
    );
    println!(
        "   No path:          {}",
        format!("{}", result.not_found).yellow()
    );
    if result.capped > 0 {
        println!("   Stopped by cap:   {}", result.capped);
    }
    println!(
        "   Average rungs:    {}",
        format!("{:.2}", result.average_rungs)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Shortest / longest: {} / {}",
        result.min_rungs, result.max_rungs
    );
    println!("   Paths expanded:   {}", result.paths_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rungs, &count) in &result.distribution {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = distribution_bar(count, result.found, 40);
        println!("   {rungs:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
