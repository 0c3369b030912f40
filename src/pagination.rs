pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out the half-open window [(page - 1) * page_size, page * page_size).
///
/// Pages are 1-based; callers validate that upstream. A window starting past
/// the end yields an empty slice, which handlers treat as "not found".
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + page_size, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_partition_the_input() {
        let items: Vec<i64> = (0..19).collect();
        let mut collected = Vec::new();
        for page in 1..=2 {
            collected.extend_from_slice(paginate(&items, page, QUESTIONS_PER_PAGE));
        }
        assert_eq!(collected, items);
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<i64> = (0..19).collect();
        assert_eq!(paginate(&items, 2, QUESTIONS_PER_PAGE).len(), 9);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i64> = (0..19).collect();
        assert!(paginate(&items, 3, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 9999, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let items: Vec<i64> = (0..20).collect();
        assert_eq!(paginate(&items, 2, QUESTIONS_PER_PAGE).len(), 10);
        assert!(paginate(&items, 3, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn empty_input_is_empty_on_any_page() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1, QUESTIONS_PER_PAGE).is_empty());
    }
}
