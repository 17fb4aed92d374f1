use std::collections::{BTreeSet, HashSet};

const EN_US: &str = include_str!("../i18n/en-US/ceylonmine-ui.ftl");
const SI_LK: &str = include_str!("../i18n/si-LK/ceylonmine-ui.ftl");
const TA_LK: &str = include_str!("../i18n/ta-LK/ceylonmine-ui.ftl");

/// Translated bundles, keyed by locale. Register new locales here.
const LOCALES: &[(&str, &str)] = &[("si-LK", SI_LK), ("ta-LK", TA_LK)];

/// Every non-fallback locale provides at least the keys present in the
/// fallback (en-US) `ceylonmine-ui.ftl`.
///
/// The parser is line based: comment lines and attribute lines are skipped and
/// any `key =` line counts as a message definition.
#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);

    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<String> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Translations must keep the variables the Rust side passes (`$year`,
/// `$number`, `$path`), otherwise Fluent renders an error placeholder.
#[test]
fn translated_messages_keep_their_variables() {
    let fallback = message_variables(EN_US);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let translated = message_variables(src);
        for (key, vars) in &fallback {
            let Some((_, theirs)) = translated.iter().find(|(k, _)| k == key) else {
                continue;
            };
            if theirs != vars {
                failures.push(format!("{locale}: {key} uses {theirs:?}, expected {vars:?}"));
            }
        }
    }

    assert!(failures.is_empty(), "Variable mismatches:\n{}", failures.join("\n"));
}

/// `(key, sorted variable names)` for every single-line message using `{ $var }`.
fn message_variables(src: &str) -> Vec<(String, BTreeSet<String>)> {
    src.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.starts_with('#') {
                return None;
            }
            let (key, value) = line.split_once('=')?;
            let vars: BTreeSet<String> = value
                .split("{ $")
                .skip(1)
                .filter_map(|rest| rest.split_whitespace().next())
                .map(|name| name.trim_end_matches('}').to_string())
                .collect();
            (!vars.is_empty()).then(|| (key.trim().to_string(), vars))
        })
        .collect()
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
