//! Ranking profiler for sift
//!
//! Loads launcher entries (one per line) and ranks every query with every
//! matching method, printing the best entries and the latency of each run.
//! Also replays the queries keystroke by keystroke the way a launcher sees them.
//!
//! Usage:
//!   cargo build --release --bin sift_profiler
//!   ./target/release/sift_profiler --entries entries.txt [--config sift.toml] [--log sift.log] QUERY...

use sift_core::{
    HighlightTheme, MatcherConfig, MatchingMethod, PaginationArgs, PatternSet, RankOptions,
    SharedPatterns, highlights, rank_candidates,
};
use std::time::{Duration, Instant};

const TOP: usize = 5;
const ITERATIONS: usize = 10;

fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us > 1_000_000 {
        format!("{:.2}s", d.as_secs_f64())
    } else if us > 1000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{}us", us)
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(|s| s.as_str())
}

/// Entry text with highlighted spans wrapped in brackets
fn mark_highlights(text: &str, patterns: &PatternSet) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for highlight in highlights(patterns, text, &HighlightTheme::default()) {
        let range = highlight.range;
        // spans of different tokens may overlap
        if range.start < last {
            continue;
        }
        out.push_str(&text[last..range.start]);
        out.push('[');
        out.push_str(&text[range.clone()]);
        out.push(']');
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let Some(entries_path) = arg_value(&args, "--entries") else {
        eprintln!("Usage: sift_profiler --entries FILE [--config FILE] [--log FILE] QUERY...");
        std::process::exit(1);
    };

    if let Some(log_path) = arg_value(&args, "--log") {
        if let Err(e) = sift_core::log::init_tracing(log_path, Some("sift_core=debug")) {
            eprintln!("Failed to initialize logging: {}", e);
        }
    }

    let base_config = match arg_value(&args, "--config") {
        Some(path) => match MatcherConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => MatcherConfig::default(),
    };

    let content = match std::fs::read_to_string(entries_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {}: {}", entries_path, e);
            std::process::exit(1);
        }
    };
    let entries: Vec<&str> = content.lines().filter(|l| !l.is_empty()).collect();

    // positional arguments are everything that is not a flag or a flag value
    let mut queries = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
        } else if arg.starts_with("--") {
            skip_next = true;
        } else {
            queries.push(arg.as_str());
        }
    }
    if queries.is_empty() {
        queries.push("");
    }

    eprintln!("=== Sift Ranking Profiler ===");
    eprintln!("Entries: {} from {}", entries.len(), entries_path);
    eprintln!("Case sensitive: {}\n", base_config.case_sensitive);

    let options = RankOptions {
        sort: true,
        pagination: PaginationArgs {
            offset: 0,
            limit: TOP,
        },
    };

    for query in &queries {
        eprintln!("Query: {:?}", query);

        for method in MatchingMethod::ALL {
            let config = MatcherConfig { method, ..base_config };
            let shared = SharedPatterns::new(config);
            let patterns = shared.update(query, &config);

            let mut best = Duration::MAX;
            let mut total = Duration::ZERO;
            let mut result = rank_candidates(&entries, query, &patterns, &config, &options);
            for _ in 0..ITERATIONS {
                let start = Instant::now();
                result = rank_candidates(&entries, query, &patterns, &config, &options);
                let elapsed = start.elapsed();
                best = best.min(elapsed);
                total += elapsed;
            }

            eprintln!(
                "  {:<7} | matched {:>7} | mean {:>8} | min {:>8}{}",
                method.as_str(),
                result.total_matched,
                fmt_dur(total / ITERATIONS as u32),
                fmt_dur(best),
                patterns
                    .fallback_error()
                    .map(|e| format!(" | literal fallback: {}", e))
                    .unwrap_or_default(),
            );
            for item in &result.items {
                eprintln!(
                    "      {:>12}  {}",
                    item.key.value(),
                    mark_highlights(item.text, &patterns)
                );
            }
        }

        eprintln!("  Typing simulation ({}):", base_config.method);
        let shared = SharedPatterns::new(base_config);
        let mut prefix = String::with_capacity(query.len());
        for c in query.chars() {
            prefix.push(c);
            let start = Instant::now();
            let patterns = shared.update(&prefix, &base_config);
            let result = rank_candidates(&entries, &prefix, &patterns, &base_config, &options);
            eprintln!(
                "    {:>20} | {:>8} | {:>7}",
                format!("{:?}", prefix),
                fmt_dur(start.elapsed()),
                result.total_matched
            );
        }
        eprintln!();
    }
}
