//! Search keyword generation

use std::collections::BTreeSet;

use crate::category::Category;

/// Name fragment → extra search terms. Matched as substrings of the lowercased name.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("back", &["previous", "return", "left"]),
    ("forward", &["next", "right"]),
    ("up", &["arrow", "top"]),
    ("down", &["arrow", "bottom"]),
    ("left", &["arrow", "back"]),
    ("right", &["arrow", "forward"]),
    ("add", &["plus", "create", "new", "insert"]),
    ("remove", &["delete", "minus", "trash", "erase"]),
    ("edit", &["modify", "change", "update"]),
    ("save", &["store", "keep", "disk"]),
    ("open", &["load", "folder"]),
    ("close", &["exit", "cancel", "x"]),
    ("search", &["find", "lookup", "magnifier"]),
    ("settings", &["config", "options", "preferences", "gear"]),
    ("home", &["house", "main", "start"]),
    ("calendar", &["date", "time", "schedule"]),
    ("mail", &["email", "message", "envelope"]),
    ("phone", &["call", "telephone", "mobile"]),
    ("camera", &["photo", "picture", "image"]),
    ("video", &["movie", "film", "play"]),
    ("music", &["audio", "sound", "song"]),
    ("volume", &["speaker", "audio", "sound"]),
    ("wifi", &["wireless", "network"]),
    ("bluetooth", &["bt", "wireless"]),
    ("battery", &["power", "charge", "energy"]),
    ("lock", &["secure", "protect", "key"]),
    ("unlock", &["open", "unsecure"]),
    ("cloud", &["sync", "upload", "download"]),
    ("folder", &["directory", "file"]),
    ("file", &["document", "page"]),
    ("print", &["printer", "paper"]),
    ("share", &["send", "transfer"]),
    ("copy", &["duplicate", "clone"]),
    ("cut", &["clip", "scissors"]),
    ("paste", &["insert", "place"]),
    ("undo", &["revert", "back"]),
    ("redo", &["repeat", "forward"]),
    ("zoom", &["magnify", "scale"]),
    ("refresh", &["reload", "update", "sync"]),
    ("favorite", &["star", "like", "bookmark"]),
    ("pin", &["attach", "fix"]),
    ("unpin", &["detach", "unfix"]),
];

/// Sorted, deduplicated search terms for an icon.
pub fn generate_keywords(name: &str, hex: &str, category: Category) -> Vec<String> {
    let mut keywords = BTreeSet::new();

    let hex_lower = hex.to_lowercase();
    keywords.insert(format!("u{hex_lower}"));
    keywords.insert(format!("0x{hex_lower}"));
    keywords.insert(hex_lower);

    let name_lower = name.to_lowercase();
    keywords.extend(split_words(name).into_iter().map(str::to_lowercase));

    for (key, values) in SYNONYMS {
        if name_lower.contains(key) {
            keywords.extend(values.iter().map(|v| v.to_string()));
        }
    }
    keywords.insert(name_lower);

    keywords.insert(category.key().to_string());

    keywords.into_iter().collect()
}

/// Split a PascalCase identifier into its words.
///
/// At each position this takes either an optional capital followed by
/// lowercase letters, or a run of capitals that ends at another capital or at
/// the end of the name. Anything else (digits, underscores, a lone capital
/// before a digit) is skipped. `SignalBarsVPN2` gives `Signal, Bars, VP`.
pub fn split_words(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let len = bytes.len();
    let mut words = Vec::new();
    let mut i = 0;

    while i < len {
        let at = bytes[i];

        let lower_start = if at.is_ascii_uppercase()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase)
        {
            Some(i + 1)
        } else if at.is_ascii_lowercase() {
            Some(i)
        } else {
            None
        };

        if let Some(start) = lower_start {
            let end = run_end(bytes, start, u8::is_ascii_lowercase);
            words.push(&name[i..end]);
            i = end;
            continue;
        }

        if at.is_ascii_uppercase() {
            let run = run_end(bytes, i, u8::is_ascii_uppercase);
            // the run must be followed by a capital or the end, so give back its last letter
            let end = if run == len { run } else { run - 1 };
            if end > i {
                words.push(&name[i..end]);
                i = end;
                continue;
            }
        }

        i += 1;
    }

    words
}

fn run_end(bytes: &[u8], start: usize, pred: fn(&u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !pred(b))
        .map_or(bytes.len(), |offset| start + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pascal_case() {
        assert_eq!(split_words("GlobalNavButton"), vec!["Global", "Nav", "Button"]);
    }

    #[test]
    fn splits_acronym_runs() {
        assert_eq!(split_words("VPNOverlay"), vec!["VPN", "Overlay"]);
        assert_eq!(split_words("OK"), vec!["OK"]);
        assert_eq!(split_words("ZoomIn"), vec!["Zoom", "In"]);
    }

    #[test]
    fn acronym_before_digit_loses_last_letter() {
        assert_eq!(split_words("SignalBarsVPN2"), vec!["Signal", "Bars", "VP"]);
        assert_eq!(split_words("Volume1"), vec!["Volume"]);
    }

    #[test]
    fn skips_digits_and_underscores() {
        assert_eq!(split_words("Battery_10"), vec!["Battery"]);
        assert_eq!(split_words("lowerStart"), vec!["lower", "Start"]);
    }

    #[test]
    fn keywords_include_hex_forms_name_and_category() {
        let kws = generate_keywords("Home", "E80F", Category::Navigation);

        for expected in ["e80f", "ue80f", "0xe80f", "home", "navigation", "house", "main", "start"] {
            assert!(kws.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn keywords_are_sorted_and_unique() {
        let kws = generate_keywords("BackToWindow", "E73F", Category::Navigation);

        let mut sorted = kws.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(kws, sorted);
        assert!(kws.contains(&"backtowindow".to_string()));
        assert!(kws.contains(&"previous".to_string()));
        assert!(kws.contains(&"to".to_string()));
    }

    #[test]
    fn synonyms_match_substrings() {
        // "unpin" also contains "pin"
        let kws = generate_keywords("Unpin", "E77A", Category::Navigation);
        for expected in ["attach", "fix", "detach", "unfix"] {
            assert!(kws.contains(&expected.to_string()), "missing {expected}");
        }
    }
}
