use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;
use usufy_core::{FuzzConfig, PatternRule};
use usufy_fuzz::{fuzz_usernames, Fuzzer};

fn pinned(year: i32) -> Fuzzer {
    Fuzzer::new(FuzzConfig::default())
        .expect("default config is valid")
        .with_reference_year(year)
}

fn write_patterns(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("patterns.txt");
    std::fs::write(&path, contents).expect("write pattern file");
    path
}

#[test]
fn test_deterministic_output() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = write_patterns(temp_dir.path(), "<USERNAME>_official\nthe<USERNAME>\n");

    let config = FuzzConfig {
        patterns_path: Some(path),
        reference_year: Some(2023),
        ..FuzzConfig::default()
    };

    let first = Fuzzer::new(config.clone()).expect("valid config").fuzz_all(["alice", "bob"]);
    let second = Fuzzer::new(config).expect("valid config").fuzz_all(["alice", "bob"]);

    assert_eq!(first, second);
}

#[test]
fn test_no_duplicates() {
    let fuzzer = pinned(2024).with_patterns(vec![
        PatternRule::new("<USERNAME>1").expect("valid pattern"),
        PatternRule::new("<USERNAME>").expect("valid pattern"),
    ]);

    for nick in ["alice", "ALICE", "a", "", "test", "Tess Tate", "0101"] {
        let variants: Vec<String> = fuzzer.fuzz(nick).into_vec();
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len(), "duplicates for {nick:?}");
    }
}

#[test]
fn test_case_coverage() {
    let results = fuzz_usernames(["Alice"], None);
    let variants = results.get("Alice").expect("entry for Alice");

    assert!(variants.contains("alice"));
    assert!(variants.contains("ALICE"));
    assert!(variants.contains("Alice"));
    assert_eq!(variants.iter().filter(|v| *v == "Alice").count(), 1);
}

#[test]
fn test_suffix_coverage() {
    let variants = pinned(2024).fuzz("bob");

    for sep in ["", ".", "_", "-"] {
        for n in 1..=10 {
            let candidate = format!("bob{sep}{n}");
            assert!(variants.contains(&candidate), "missing {candidate}");
        }
        for year in 2019..=2024 {
            let candidate = format!("bob{sep}{year}");
            assert!(variants.contains(&candidate), "missing {candidate}");
        }
        for word in ["dev", "test", "admin"] {
            let candidate = format!("bob{sep}{word}");
            assert!(variants.contains(&candidate), "missing {candidate}");
        }
    }

    assert!(!variants.contains("bob0"));
    assert!(!variants.contains("bob11"));
    assert!(!variants.contains("bob2018"));
}

#[test]
fn test_current_year_suffix_by_default() {
    use chrono::Datelike;

    let year = chrono::Local::now().year();
    let results = fuzz_usernames(["bob"], None);
    let variants = results.get("bob").expect("entry for bob");

    // Tolerate a calendar-year rollover between the two clock reads
    assert!(
        variants.contains(&format!("bob{year}")) || variants.contains(&format!("bob{}", year + 1))
    );
}

#[test]
fn test_leet_single_substitution() {
    let variants = pinned(2024).fuzz("test");

    for expected in ["7est", "t3st", "te5t", "tes7"] {
        assert!(variants.contains(expected), "missing {expected}");
    }
    assert!(!variants.contains("7354"));
    assert!(!variants.contains("73st"));
}

#[test]
fn test_custom_pattern() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = write_patterns(temp_dir.path(), "# comment\n<USERNAME>_official\n\n");

    let results = fuzz_usernames(["carol"], Some(&path));
    let variants = results.get("carol").expect("entry for carol");

    assert!(variants.contains("carol_official"));
    assert!(!variants.contains("# comment"));
    assert_eq!(variants.iter().last(), Some("carol_official"));
}

#[test]
fn test_missing_pattern_file_degrades_gracefully() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let missing = temp_dir.path().join("nope.txt");

    let config = FuzzConfig {
        reference_year: Some(2022),
        ..FuzzConfig::default()
    };
    let without = Fuzzer::new(config.clone())
        .expect("valid config")
        .fuzz_all(["dave"]);
    let with_missing = Fuzzer::new(FuzzConfig {
        patterns_path: Some(missing),
        ..config
    })
    .expect("valid config")
    .fuzz_all(["dave"]);

    assert_eq!(without, with_missing);
}

#[test]
fn test_independent_dedup_across_inputs() {
    let results = pinned(2024).fuzz_all(["a", "a"]);

    assert_eq!(results.len(), 2);
    let entries: Vec<_> = results.iter().collect();
    assert_eq!(entries[0].0, "a");
    assert_eq!(entries[1].0, "a");
    assert_eq!(entries[0].1, entries[1].1);
    assert!(!entries[0].1.is_empty());
}

#[test]
fn test_results_follow_input_order() {
    let results = pinned(2024).fuzz_all(vec!["zed".to_string(), "amy".to_string()]);
    let nicks: Vec<&str> = results.iter().map(|(nick, _)| nick).collect();
    assert_eq!(nicks, vec!["zed", "amy"]);

    let map = results.into_map();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zed", "amy"]);
}

#[test]
fn test_configured_alphabet() {
    let config = FuzzConfig {
        separators: vec!["x".to_string()],
        numeric_start: 7,
        numeric_end: 7,
        year_window: 0,
        common_words: vec!["real".to_string()],
        reference_year: Some(2001),
        ..FuzzConfig::default()
    };
    let variants = Fuzzer::new(config).expect("valid config").fuzz("kim");

    assert!(variants.contains("kimx7"));
    assert!(variants.contains("kimx2001"));
    assert!(variants.contains("kimxreal"));
    assert!(!variants.contains("kim7"));
    assert!(!variants.contains("kimx2000"));
}
