use std::collections::HashSet;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::layout::PositionedItem;
use crate::radar::RadarItem;

use super::state::ViewState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Emphasis {
    Selected,
    SearchMatch,
    Normal,
    Dimmed,
}

impl Emphasis {
    pub(super) fn opacity(self) -> f32 {
        match self {
            Self::Selected | Self::SearchMatch | Self::Normal => 1.0,
            Self::Dimmed => 0.18,
        }
    }
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

/// Snapshot indices of items whose label fuzzy-matches `query`.
pub(super) fn search_matches(items: &[RadarItem], query: &str) -> HashSet<usize> {
    let query = query.trim();
    if query.is_empty() {
        return HashSet::new();
    }

    let matcher = SkimMatcherV2::default();
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            fuzzy_match_score(&matcher, &item.label, query).map(|_score| index)
        })
        .collect()
}

/// How strongly a placed item is drawn. Filters never move items, they only dim them.
pub(super) fn node_emphasis(
    node: &PositionedItem,
    view: &ViewState,
    search_matches: Option<&HashSet<usize>>,
) -> Emphasis {
    if view.selected == Some(node.index) {
        return Emphasis::Selected;
    }

    if !view.passes_filters(node.quadrant, node.ring) {
        return Emphasis::Dimmed;
    }

    match search_matches {
        Some(matches) if matches.contains(&node.index) => Emphasis::SearchMatch,
        Some(_) => Emphasis::Dimmed,
        None => Emphasis::Normal,
    }
}
