/// Shortens `label` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }

    let keep = max_chars.saturating_sub(1);
    let mut shortened = label.chars().take(keep).collect::<String>();
    shortened.push('…');
    shortened
}

#[cfg(test)]
mod tests {
    use super::truncate_label;

    #[test]
    fn keeps_short_labels() {
        assert_eq!(truncate_label("Rust", 8), "Rust");
        assert_eq!(truncate_label("", 0), "");
    }

    #[test]
    fn cuts_on_characters_not_bytes() {
        assert_eq!(truncate_label("Kubernetes", 5), "Kube…");
        assert_eq!(truncate_label("Größenwahn", 4), "Grö…");
    }
}
