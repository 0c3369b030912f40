use serde::Deserialize;

// The frontend encodes the quiz category selector as either the literal
// string "click" (the "all categories" button) or an object carrying the
// chosen category's id.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum CategorySelector {
    Sentinel(String),
    Category { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    One(i64),
}

impl CategorySelector {
    /// Resolve the selector to a category filter. Id 0 is the wire-level
    /// spelling of "all". `None` means the request is malformed: the only
    /// accepted string sentinel is "click".
    pub fn category_filter(&self) -> Option<CategoryFilter> {
        match self {
            CategorySelector::Sentinel(s) if s == "click" => Some(CategoryFilter::All),
            CategorySelector::Sentinel(_) => None,
            CategorySelector::Category { id: 0 } => Some(CategoryFilter::All),
            CategorySelector::Category { id } => Some(CategoryFilter::One(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_sentinel_means_all_categories() {
        let selector: CategorySelector = serde_json::from_str(r#""click""#).unwrap();
        assert_eq!(selector.category_filter(), Some(CategoryFilter::All));
    }

    #[test]
    fn object_selector_carries_an_id() {
        let selector: CategorySelector =
            serde_json::from_str(r#"{"id": 2, "type": "Art"}"#).unwrap();
        assert_eq!(selector.category_filter(), Some(CategoryFilter::One(2)));
    }

    #[test]
    fn id_zero_means_all_categories() {
        let selector: CategorySelector = serde_json::from_str(r#"{"id": 0}"#).unwrap();
        assert_eq!(selector.category_filter(), Some(CategoryFilter::All));
    }

    #[test]
    fn unknown_sentinel_is_rejected() {
        let selector: CategorySelector = serde_json::from_str(r#""hover""#).unwrap();
        assert_eq!(selector.category_filter(), None);
    }
}
