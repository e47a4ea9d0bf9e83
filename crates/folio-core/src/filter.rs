use std::cmp::Reverse;
use std::str::FromStr;

use crate::content::{ALL_CATEGORY, Category, ProjectRecord};

/// Secondary ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Descending by numeric year, later years first.
    #[default]
    Date,
    /// Ascending by title.
    Title,
    /// Featured projects first.
    Featured,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Title => "title",
            SortBy::Featured => "featured",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortBy::Date),
            "title" => Ok(SortBy::Title),
            "featured" => Ok(SortBy::Featured),
            other => Err(format!(
                "unknown sort order '{other}' (expected date, title, or featured)"
            )),
        }
    }
}

/// The host-owned filter selection, passed in on every evaluation.
#[derive(Clone, Debug)]
pub struct FilterState {
    /// Exact category to keep, or [`ALL_CATEGORY`] to keep everything.
    pub active_category: String,
    /// Free text matched case-insensitively against title, description, and
    /// tags. Leading and trailing whitespace is ignored.
    pub search_term: String,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            search_term: String::new(),
            sort_by: SortBy::default(),
        }
    }
}

/// Reduce `records` to the displayed subset: category pass, then search
/// pass, then a stable sort per `state.sort_by`.
///
/// Never fails: an unmatched filter yields an empty vec, and unparseable
/// years sort as 0. The input is not mutated.
pub fn filter_and_sort(records: &[ProjectRecord], state: &FilterState) -> Vec<ProjectRecord> {
    let term = state.search_term.trim().to_lowercase();

    let mut filtered: Vec<ProjectRecord> = records
        .iter()
        .filter(|p| state.active_category == ALL_CATEGORY || p.category == state.active_category)
        .filter(|p| matches_search(p, &term))
        .cloned()
        .collect();

    // All three orders use a stable sort so ties keep input order.
    match state.sort_by {
        SortBy::Date => filtered.sort_by_key(|p| Reverse(parse_year(&p.year))),
        SortBy::Title => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
        SortBy::Featured => filtered.sort_by_key(|p| Reverse(p.featured)),
    }

    filtered
}

/// True when any of title, description, or a tag contains the lowercased
/// term. An empty term matches everything.
fn matches_search(project: &ProjectRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(term)
        || project.description.to_lowercase().contains(term)
        || project.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Lenient year parse for sorting. Anything that is not an integer sorts
/// as 0, i.e. last under the descending date order.
fn parse_year(year: &str) -> i32 {
    year.trim().parse().unwrap_or(0)
}

/// Per-category project counts for the filter bar. [`ALL_CATEGORY`] counts
/// the whole collection.
pub fn category_counts(records: &[ProjectRecord], categories: &[String]) -> Vec<Category> {
    categories
        .iter()
        .map(|name| {
            let count = if name == ALL_CATEGORY {
                records.len()
            } else {
                records.iter().filter(|p| &p.category == name).count()
            };
            Category {
                name: name.clone(),
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, category: &str, tags: &[&str], year: &str, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            featured,
            year: year.to_string(),
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            record(1, "AR Shopping", "Web Development", &["React", "WebAR"], "2024", true),
            record(2, "Neural Visualizer", "Data Visualization", &["Python", "WebGL"], "2024", true),
            record(3, "Fashion App", "Mobile App", &["React Native", "Stripe"], "2023", false),
            record(4, "Portfolio Site", "Web Development", &["Next.js", "GSAP"], "2023", true),
            record(5, "VR Gallery", "VR/AR", &["WebXR", "Blockchain"], "2022", false),
        ]
    }

    fn state(category: &str, term: &str, sort_by: SortBy) -> FilterState {
        FilterState {
            active_category: category.to_string(),
            search_term: term.to_string(),
            sort_by,
        }
    }

    fn ids(records: &[ProjectRecord]) -> Vec<u32> {
        records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_with_empty_term_keeps_everything() {
        let records = sample();
        let result = filter_and_sort(&records, &FilterState::default());
        assert_eq!(result.len(), records.len());
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let records = sample();
        let result = filter_and_sort(&records, &state("Web Development", "", SortBy::Date));
        assert_eq!(ids(&result), vec![1, 4]);

        let lower = filter_and_sort(&records, &state("web development", "", SortBy::Date));
        assert!(lower.is_empty(), "category matching is case-sensitive");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        let upper = filter_and_sort(&records, &state(ALL_CATEGORY, "REACT", SortBy::Date));
        let lower = filter_and_sort(&records, &state(ALL_CATEGORY, "react", SortBy::Date));
        assert_eq!(ids(&upper), ids(&lower));
        assert!(upper.iter().any(|p| p.id == 1), "tag \"React\" should match");
    }

    #[test]
    fn test_search_matches_tag_only() {
        let records = sample();
        // "blockchain" appears only in project 5's tags
        let result = filter_and_sort(&records, &state(ALL_CATEGORY, "blockchain", SortBy::Date));
        assert_eq!(ids(&result), vec![5]);
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let records = sample();
        let padded = filter_and_sort(&records, &state(ALL_CATEGORY, "  gsap  ", SortBy::Date));
        assert_eq!(ids(&padded), vec![4]);
    }

    #[test]
    fn test_category_and_search_compose() {
        let records = sample();
        let result = filter_and_sort(
            &records,
            &state("Web Development", "react", SortBy::Date),
        );
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = sample();
        let result = filter_and_sort(&records, &state(ALL_CATEGORY, "zzz-nothing", SortBy::Date));
        assert!(result.is_empty());
    }

    #[test]
    fn test_date_sort_descending_with_stable_ties() {
        let records = vec![
            record(1, "a", "Web Development", &[], "2022", false),
            record(2, "b", "Web Development", &[], "2024", false),
            record(3, "c", "Web Development", &[], "2023", false),
            record(4, "d", "Web Development", &[], "2024", false),
        ];
        let result = filter_and_sort(&records, &state(ALL_CATEGORY, "", SortBy::Date));
        // 2024 ties keep input order: 2 before 4
        assert_eq!(ids(&result), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_title_sort_ascending() {
        let records = sample();
        let result = filter_and_sort(&records, &state(ALL_CATEGORY, "", SortBy::Title));
        let titles: Vec<&str> = result.iter().map(|p| p.title.as_str()).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_featured_sort_is_stable() {
        let records = vec![
            record(1, "a", "Web Development", &[], "2024", false),
            record(2, "b", "Web Development", &[], "2024", true),
            record(3, "c", "Web Development", &[], "2024", false),
        ];
        let result = filter_and_sort(&records, &state(ALL_CATEGORY, "", SortBy::Featured));
        assert_eq!(ids(&result), vec![2, 1, 3]);
    }

    #[test]
    fn test_malformed_year_sorts_last() {
        let records = vec![
            record(1, "a", "Web Development", &[], "soon", false),
            record(2, "b", "Web Development", &[], "2020", false),
        ];
        let result = filter_and_sort(&records, &state(ALL_CATEGORY, "", SortBy::Date));
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn test_input_not_mutated() {
        let records = sample();
        let before = records.clone();
        let _ = filter_and_sort(&records, &state("Mobile App", "stripe", SortBy::Title));
        assert_eq!(records, before);
    }

    #[test]
    fn test_idempotent() {
        let records = sample();
        let st = state(ALL_CATEGORY, "web", SortBy::Date);
        assert_eq!(filter_and_sort(&records, &st), filter_and_sort(&records, &st));
    }

    #[test]
    fn test_category_counts() {
        let records = sample();
        let categories: Vec<String> = ["All", "Web Development", "Mobile App", "VR/AR"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let counts = category_counts(&records, &categories);
        assert_eq!(counts[0], Category { name: "All".to_string(), count: 5 });
        assert_eq!(counts[1].count, 2);
        assert_eq!(counts[2].count, 1);
        assert_eq!(counts[3].count, 1);
    }

    #[test]
    fn test_sort_by_round_trips() {
        for sort in [SortBy::Date, SortBy::Title, SortBy::Featured] {
            assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), sort);
        }
        assert!("newest".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024"), 2024);
        assert_eq!(parse_year(" 1999 "), 1999);
        assert_eq!(parse_year("n/a"), 0);
        assert_eq!(parse_year(""), 0);
    }
}
