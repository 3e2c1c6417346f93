use crate::config::ChunkingConfig;
use crate::error::Result;
use std::sync::OnceLock;

/// Collapse every whitespace run to a single space and trim the ends.
///
/// Extractors feed this before chunking so word windows never straddle
/// formatting artifacts (page breaks, double newlines, tabs).
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    static WHITESPACE: OnceLock<regex::Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| regex::Regex::new(r"\s+").expect("static pattern"));
    re.replace_all(text.trim(), " ").into_owned()
}

/// Split `text` into overlapping word windows.
///
/// Starting at word 0, each chunk takes the next `max_tokens` words (or the
/// remainder). Emission stops as soon as a chunk ends on the final word, so
/// the last chunk may be shorter but no tail is ever dropped. Otherwise the
/// window start advances by `max_tokens - overlap`, leaving consecutive
/// chunks sharing exactly `overlap` words.
///
/// Empty input yields no chunks; input shorter than the window yields one.
pub fn chunk(text: &str, config: ChunkingConfig) -> Result<Vec<String>> {
    config.validate()?;

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    loop {
        let end = usize::min(start + config.max_tokens, words.len());
        chunks.push(words[start..end].join(" "));
        if end == words.len() {
            break;
        }
        start = end - config.overlap;
    }

    log::debug!(
        "Chunked {} words into {} chunks (window {}, overlap {})",
        words.len(),
        chunks.len(),
        config.max_tokens,
        config.overlap
    );

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    fn config(max_tokens: usize, overlap: usize) -> ChunkingConfig {
        ChunkingConfig::new(max_tokens, overlap).unwrap()
    }

    #[test]
    fn normalizes_whitespace_runs() {
        assert_eq!(
            normalize_whitespace("  a\tb\n\nc   d "),
            "a b c d".to_string()
        );
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk("", config(10, 2)).unwrap().is_empty());
        assert!(chunk("   ", config(10, 2)).unwrap().is_empty());
    }

    #[test]
    fn short_text_yields_single_chunk() {
        let text = words(5);
        let chunks = chunk(&text, config(10, 2)).unwrap();
        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn exact_window_yields_single_chunk() {
        let text = words(10);
        let chunks = chunk(&text, config(10, 3)).unwrap();
        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn consecutive_chunks_share_exactly_overlap_words() {
        let text = words(25);
        let chunks = chunk(&text, config(10, 3)).unwrap();

        for pair in chunks.windows(2) {
            let prev: Vec<&str> = pair[0].split(' ').collect();
            let next: Vec<&str> = pair[1].split(' ').collect();
            assert_eq!(prev[prev.len() - 3..], next[..3]);
        }
    }

    #[test]
    fn overlap_stripped_concatenation_rebuilds_source() {
        for (total, max_tokens, overlap) in
            [(25, 10, 3), (1000, 400, 60), (7, 3, 0), (99, 10, 9)]
        {
            let text = words(total);
            let cfg = config(max_tokens, overlap);
            let chunks = chunk(&text, cfg).unwrap();

            let mut rebuilt: Vec<String> = Vec::new();
            for (i, c) in chunks.iter().enumerate() {
                let ws = c.split(' ').map(str::to_string);
                if i == 0 {
                    rebuilt.extend(ws);
                } else {
                    rebuilt.extend(ws.skip(overlap));
                }
            }
            assert_eq!(rebuilt.join(" "), text, "({total}, {max_tokens}, {overlap})");
        }
    }

    #[test]
    fn chunk_count_matches_window_advance_rule() {
        // For len > max_tokens the count is ceil((len - overlap) / (max_tokens - overlap)).
        for (total, max_tokens, overlap) in [(1000, 400, 60), (25, 10, 3), (401, 400, 60)] {
            let chunks = chunk(&words(total), config(max_tokens, overlap)).unwrap();
            let step = max_tokens - overlap;
            let expected = (total - overlap).div_ceil(step);
            assert_eq!(chunks.len(), expected, "({total}, {max_tokens}, {overlap})");
        }
    }

    #[test]
    fn thousand_words_at_400_60_gives_three_chunks() {
        // Window starts land at 0, 340, 680: sizes 400, 400, 320.
        let chunks = chunk(&words(1000), config(400, 60)).unwrap();
        assert_eq!(chunks.len(), 3);

        let sizes: Vec<usize> = chunks
            .iter()
            .map(|c| c.split(' ').count())
            .collect();
        assert_eq!(sizes, vec![400, 400, 320]);

        assert!(chunks[0].starts_with("w0 "));
        assert!(chunks[1].starts_with("w340 "));
        assert!(chunks[2].starts_with("w680 "));
        assert!(chunks[2].ends_with(" w999"));
    }

    #[test]
    fn last_chunk_always_ends_on_final_word() {
        for total in [1, 9, 10, 11, 19, 20, 21, 100] {
            let text = words(total);
            let chunks = chunk(&text, config(10, 4)).unwrap();
            let last = chunks.last().unwrap();
            assert!(last.ends_with(&format!("w{}", total - 1)), "total={total}");
        }
    }

    #[test]
    fn invalid_window_is_rejected() {
        let result = chunk("a b c", ChunkingConfig {
            max_tokens: 5,
            overlap: 5,
        });
        assert!(result.is_err());
    }
}
