use crate::store::TaskStateStore;

/// Compute the completed fraction for a displayed task list.
///
/// Always recomputed from the currently visible labels against the store,
/// never maintained incrementally, so it cannot drift if state is mutated
/// out of band. An empty list yields 0.
pub fn compute<'a, I>(labels: I, store: &TaskStateStore) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0usize;
    let mut checked = 0usize;

    for label in labels {
        total += 1;
        if store.get(label) {
            checked += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        checked as f64 / total as f64
    }
}

/// Checkbox glyph for a row
pub fn checkbox_glyph(checked: bool, use_emoji: bool) -> &'static str {
    if use_emoji {
        if checked {
            "☑"
        } else {
            "☐"
        }
    } else {
        if checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::FileGateway;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> TaskStateStore {
        TaskStateStore::load(FileGateway::new(dir.to_path_buf()))
    }

    #[test]
    fn test_compute_empty_list_is_zero() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(compute([], &store), 0.0);
    }

    #[test]
    fn test_compute_all_checked() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.set("a", true).unwrap();
        store.set("b", true).unwrap();
        assert_eq!(compute(["a", "b"], &store), 1.0);
    }

    #[test]
    fn test_compute_half_checked() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.set("a", true).unwrap();
        assert_eq!(compute(["a", "b"], &store), 0.5);
    }

    #[test]
    fn test_compute_only_counts_visible_labels() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.set("hidden", true).unwrap();
        assert_eq!(compute(["a", "b"], &store), 0.0);
    }

    #[test]
    fn test_checkbox_glyph() {
        assert_eq!(checkbox_glyph(true, true), "☑");
        assert_eq!(checkbox_glyph(false, true), "☐");
        assert_eq!(checkbox_glyph(true, false), "[x]");
        assert_eq!(checkbox_glyph(false, false), "[ ]");
    }
}
