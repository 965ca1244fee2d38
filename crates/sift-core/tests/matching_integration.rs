use sift_core::{
    EDIT_DISTANCE_TOO_LONG, MatcherConfig, MatchingMethod, NO_MATCH_SCORE, PaginationArgs,
    RankOptions, SortKey, compile, edit_distance, fuzzy_score, highlight_spans, matches,
    rank_candidates,
};

/// Entries as a launcher would list them.
fn launcher_entries() -> Vec<&'static str> {
    vec![
        "firefox",
        "Firefox Developer Edition",
        "gnome-terminal",
        "GNOME System Monitor",
        "libreoffice-writer",
        "LibreOffice Calc",
        "xterm",
        "code",
        "code-insiders",
        "report.txt",
        "report.txt.bak",
        "notes.md",
    ]
}

fn config(method: MatchingMethod) -> MatcherConfig {
    MatcherConfig::new(method, false)
}

fn matching<'a>(entries: &[&'a str], query: &str, config: &MatcherConfig) -> Vec<&'a str> {
    let patterns = compile(query, config);
    entries
        .iter()
        .copied()
        .filter(|e| matches(&patterns, e))
        .collect()
}

#[test]
fn empty_query_matches_every_entry() {
    let entries = launcher_entries();
    for method in MatchingMethod::ALL {
        assert_eq!(matching(&entries, "", &config(method)), entries);
    }
}

#[test]
fn normal_mode_ands_tokens() {
    let entries = launcher_entries();
    assert_eq!(
        matching(&entries, "gnome term", &config(MatchingMethod::Normal)),
        vec!["gnome-terminal"]
    );
    assert_eq!(
        matching(&entries, "office", &config(MatchingMethod::Normal)),
        vec!["libreoffice-writer", "LibreOffice Calc"]
    );
}

#[test]
fn normal_mode_case_sensitive() {
    let entries = launcher_entries();
    let sensitive = MatcherConfig::new(MatchingMethod::Normal, true);
    assert_eq!(matching(&entries, "Office", &sensitive), vec!["LibreOffice Calc"]);
}

#[test]
fn glob_mode_wildcards() {
    let entries = launcher_entries();
    assert_eq!(
        matching(&entries, "*.txt", &config(MatchingMethod::Glob)),
        vec!["report.txt", "report.txt.bak"]
    );
    assert_eq!(
        matching(&entries, "c?de", &config(MatchingMethod::Glob)),
        vec!["code", "code-insiders"]
    );
    assert_eq!(
        matching(&entries, "lib*calc", &config(MatchingMethod::Glob)),
        vec!["LibreOffice Calc"]
    );
}

#[test]
fn regex_mode_and_fallback() {
    let entries = launcher_entries();
    assert_eq!(
        matching(&entries, "^code$", &config(MatchingMethod::Regex)),
        vec!["code"]
    );

    // unbalanced bracket: literal search for "txt["
    let patterns = compile("txt[", &config(MatchingMethod::Regex));
    assert!(patterns.fallback_error().is_some());
    assert!(entries.iter().all(|e| !matches(&patterns, e)));
    assert!(matches(&patterns, "a txt[1] file"));
}

#[test]
fn fuzzy_mode_subsequences() {
    let entries = launcher_entries();
    assert_eq!(
        matching(&entries, "gterm", &config(MatchingMethod::Fuzzy)),
        vec!["gnome-terminal"]
    );
    assert_eq!(
        matching(&entries, "ffx", &config(MatchingMethod::Fuzzy)),
        vec!["firefox", "Firefox Developer Edition"]
    );
    assert!(matching(&entries, "xff", &config(MatchingMethod::Fuzzy)).is_empty());
}

#[test]
fn highlight_spans_for_fuzzy_query() {
    let patterns = compile("gt", &config(MatchingMethod::Fuzzy));
    assert_eq!(highlight_spans(&patterns, "gnome-terminal"), vec![0..1, 6..7]);
}

#[test]
fn fuzzy_ranking_orders_best_first() {
    let entries = launcher_entries();
    let cfg = config(MatchingMethod::Fuzzy);
    let patterns = compile("term", &cfg);

    let result = rank_candidates(&entries, "term", &patterns, &cfg, &RankOptions::default());
    let texts: Vec<&str> = result.items.iter().map(|c| c.text).collect();

    // "term" starts a word in gnome-terminal, but sits after one leading char in xterm
    assert_eq!(texts, vec!["gnome-terminal", "xterm"]);
    assert!(result.items[0].key < result.items[1].key);
}

#[test]
fn edit_distance_ranking_in_normal_mode() {
    let entries = launcher_entries();
    let cfg = config(MatchingMethod::Normal);
    let patterns = compile("code", &cfg);

    let result = rank_candidates(&entries, "code", &patterns, &cfg, &RankOptions::default());
    assert_eq!(result.items[0].text, "code");
    assert_eq!(result.items[0].key, SortKey::EditDistance(0));
    assert_eq!(result.items[1].text, "code-insiders");
    assert_eq!(result.total_matched, 2);
}

#[test]
fn ranking_first_page_only() {
    let entries = launcher_entries();
    let cfg = config(MatchingMethod::Fuzzy);
    let patterns = compile("e", &cfg);
    let options = RankOptions {
        sort: true,
        pagination: PaginationArgs { offset: 0, limit: 3 },
    };

    let result = rank_candidates(&entries, "e", &patterns, &cfg, &options);
    assert_eq!(result.items.len(), 3);
    assert!(result.total_matched > 3);
    assert_eq!(result.total_candidates, entries.len());
}

#[test]
fn sentinels_sort_last() {
    let long = "a".repeat(300);
    assert_eq!(fuzzy_score("a", &long, false), NO_MATCH_SCORE);
    assert!(fuzzy_score("a", "a", false) < NO_MATCH_SCORE);
    assert!(edit_distance("kitten", "sitting", true) < EDIT_DISTANCE_TOO_LONG);
    assert_eq!(edit_distance("kitten", "sitting", true), 3);
}
