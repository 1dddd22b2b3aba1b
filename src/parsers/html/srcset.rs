use crate::utils::url::WHITESPACES;

/// One entry of a srcset-style candidate list: a URL plus an opaque
/// descriptor suffix (width or pixel-density hint) that is carried through
/// rewriting verbatim
pub struct SrcsetCandidate<'a> {
    pub url: &'a str,
    pub descriptor: &'a str,
}

/// Parses a comma-separated candidate list.
///
/// Each entry is trimmed; its first whitespace-delimited token is the URL
/// and whatever follows is the descriptor. Empty entries (stray commas,
/// trailing separators) are skipped.
pub fn parse_srcset(srcset: &str) -> Vec<SrcsetCandidate> {
    let mut candidates: Vec<SrcsetCandidate> = Vec::new();

    for entry in srcset.split(',') {
        let entry = entry.trim_matches(WHITESPACES);
        if entry.is_empty() {
            continue;
        }

        match entry.find(WHITESPACES) {
            Some(url_end) => candidates.push(SrcsetCandidate {
                url: &entry[..url_end],
                descriptor: entry[url_end..].trim_start_matches(WHITESPACES),
            }),
            None => candidates.push(SrcsetCandidate {
                url: entry,
                descriptor: "",
            }),
        }
    }

    candidates
}
