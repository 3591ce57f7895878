//! Token-overlap fallback used when vector similarity is too weak to trust.

use crate::config::RankingConfig;
use crate::fuzzy::fuzzy_ratio;
use crate::pipeline::ScoredRow;
use internmatch_catalog::Posting;

/// Split skills on `,` and `;`, trim and lower-case, drop empty tokens
pub fn skill_tokens(skills: &str) -> Vec<String> {
    skills
        .to_lowercase()
        .split(|c| c == ',' || c == ';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Credit earned by `tokens` against one posting's requirement text
pub fn token_credit(tokens: &[String], requirement_text: &str, config: &RankingConfig) -> f64 {
    tokens
        .iter()
        .map(|token| {
            if requirement_text.contains(token.as_str()) {
                config.exact_token_credit
            } else if fuzzy_ratio(config.fuzzy_metric, token, requirement_text)
                >= config.fuzzy_ratio_threshold
            {
                config.fuzzy_token_credit
            } else {
                0.0
            }
        })
        .sum()
}

/// Re-rank `rows` by skill-token credit.
///
/// Rows without credit are dropped; the rest are ordered by credit
/// descending (ties keep their order in `rows`) with the credit as score.
/// Returns `None` when there are no tokens or no row earns credit, in which
/// case the caller keeps its similarity ranking.
pub fn fallback_rank(
    rows: &[ScoredRow],
    postings: &[Posting],
    skills: &str,
    config: &RankingConfig,
) -> Option<Vec<ScoredRow>> {
    let tokens = skill_tokens(skills);
    if tokens.is_empty() {
        return None;
    }

    let mut ranked: Vec<ScoredRow> = rows
        .iter()
        .filter_map(|row| {
            let text = postings[row.index].requirement_text();
            let credit = token_credit(&tokens, &text, config);
            (credit > 0.0).then_some(ScoredRow { index: row.index, score: credit })
        })
        .collect();
    if ranked.is_empty() {
        return None;
    }

    crate::pipeline::sort_by_score(&mut ranked);
    Some(ranked)
}
