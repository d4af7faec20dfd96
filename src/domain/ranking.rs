use std::collections::HashMap;

use crate::domain::suggestions::RichCandidate;

/// Number of suggestions returned to the caller unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 8;

const EXACT_MATCH: u8 = 100;
const PREFIX_MATCH: u8 = 80;
const WORD_MATCH: u8 = 60;
const SUBSTRING_MATCH: u8 = 40;
const WORD_OVERLAP_WEIGHT: usize = 20;

/// Score how well `title` matches `query`, from 0 to 100.
///
/// The first matching rule wins: exact title (100), title prefix (80), query
/// as a space-separated word (60), substring (40), else the share of query
/// words found anywhere in the title scaled to 20 and rounded.
pub fn relevance_score(title: &str, query: &str) -> u8 {
    let title = title.trim().to_lowercase();
    let query = query.trim().to_lowercase();

    if title == query {
        return EXACT_MATCH;
    }
    if title.starts_with(&query) {
        return PREFIX_MATCH;
    }
    if title.contains(&format!(" {query}")) || title.contains(&format!("{query} ")) {
        return WORD_MATCH;
    }
    if title.contains(&query) {
        return SUBSTRING_MATCH;
    }

    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return 0;
    }
    let matched = words.iter().filter(|word| title.contains(*word)).count();
    // round(20 * matched / total), halves rounding up
    let score = (2 * WORD_OVERLAP_WEIGHT * matched + words.len()) / (2 * words.len());
    score.min(WORD_OVERLAP_WEIGHT) as u8
}

/// Collapse candidates sharing a normalized title into one entry.
///
/// Keeps first-seen order. A later contender replaces the kept entry only when
/// it brings a cover the kept one lacks; either way a missing ISBN is taken
/// from the other side. Candidates without a title are dropped.
pub fn deduplicate(candidates: Vec<RichCandidate>) -> Vec<RichCandidate> {
    let mut kept: Vec<RichCandidate> = Vec::with_capacity(candidates.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(candidates.len());

    for candidate in candidates {
        let key = candidate.title_key();
        if key.is_empty() {
            continue;
        }

        let Some(&index) = positions.get(&key) else {
            positions.insert(key, kept.len());
            kept.push(candidate);
            continue;
        };

        let existing = &mut kept[index];
        if !existing.has_cover() && candidate.has_cover() {
            let fallback_isbn = existing.isbn.take();
            *existing = candidate;
            if existing.isbn.is_none() {
                existing.isbn = fallback_isbn;
            }
        } else if existing.isbn.is_none() {
            existing.isbn = candidate.isbn;
        }
    }

    kept
}

/// Deduplicate, score against `query`, order best-first and keep `limit` entries.
///
/// Equal scores prefer the candidate with a cover; remaining ties keep their
/// deduplicated order, so the same input always ranks the same way.
pub fn rank(candidates: Vec<RichCandidate>, query: &str, limit: usize) -> Vec<RichCandidate> {
    let mut scored: Vec<(u8, RichCandidate)> = deduplicate(candidates)
        .into_iter()
        .map(|candidate| (relevance_score(&candidate.title, query), candidate))
        .collect();

    scored.sort_by(|(a_score, a), (b_score, b)| {
        b_score
            .cmp(a_score)
            .then_with(|| b.has_cover().cmp(&a.has_cover()))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate)
        .collect()
}
