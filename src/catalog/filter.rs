use super::model::{Catalog, Occupation};

/// Sentinel category that disables the category constraint.
pub const ALL_CATEGORIES: &str = "all";

/// Returns the ordered subsequence of the catalog matching the free-text
/// query (case-insensitive substring over `name` and `name_en`; blank query
/// matches everything) and the category constraint (`"all"` or exact match).
/// An empty result is a valid outcome and renders as an empty graph.
pub fn filter_occupations(catalog: &Catalog, query: &str, category: &str) -> Vec<Occupation> {
    let needle = query.trim().to_lowercase();

    catalog
        .occupations
        .iter()
        .filter(|occupation| {
            let name_matches = needle.is_empty()
                || occupation.name.to_lowercase().contains(&needle)
                || occupation.name_en.to_lowercase().contains(&needle);
            let category_matches = category == ALL_CATEGORIES || occupation.category == category;
            name_matches && category_matches
        })
        .cloned()
        .collect()
}

/// Category choices offered to the user: the `"all"` sentinel followed by the
/// catalog's distinct categories in first-seen order.
pub fn category_options(catalog: &Catalog) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for occupation in &catalog.occupations {
        if !options.contains(&occupation.category) {
            options.push(occupation.category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{CareerPath, MarketValue, Occupation};

    fn occupation(id: &str, name: &str, name_en: &str, category: &str) -> Occupation {
        Occupation {
            id: id.to_string(),
            name: name.to_string(),
            name_en: name_en.to_string(),
            category: category.to_string(),
            description: String::new(),
            market_value_2040: MarketValue {
                score: 70,
                salary_range: "-".to_string(),
                growth_rate: 0.0,
                ai_risk: 0,
            },
            skills: Vec::new(),
            career_path: CareerPath::default(),
            tags: Vec::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            occupation("np", "ナースプラクティショナー", "Nurse Practitioner", "Healthcare"),
            occupation("se", "ソフトウェアエンジニア", "Software Engineer", "IT"),
            occupation("rn", "看護師", "Registered Nurse", "Healthcare"),
        ])
    }

    #[test]
    fn empty_query_matches_everything() {
        let catalog = sample_catalog();
        let subset = filter_occupations(&catalog, "", ALL_CATEGORIES);
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn query_is_case_insensitive_over_both_names() {
        let catalog = sample_catalog();
        let subset = filter_occupations(&catalog, "nurse", ALL_CATEGORIES);
        let ids = subset.iter().map(|o| o.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["np", "rn"]);

        let subset = filter_occupations(&catalog, "ソフトウェア", ALL_CATEGORIES);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].id, "se");
    }

    #[test]
    fn category_constraint_is_exact() {
        let catalog = sample_catalog();
        let subset = filter_occupations(&catalog, "", "Healthcare");
        assert_eq!(subset.len(), 2);

        let subset = filter_occupations(&catalog, "", "healthcare");
        assert!(subset.is_empty());
    }

    #[test]
    fn query_and_category_combine() {
        let catalog = sample_catalog();
        let subset = filter_occupations(&catalog, "nurse", "IT");
        assert!(subset.is_empty());
    }

    #[test]
    fn subset_preserves_catalog_order() {
        let catalog = sample_catalog();
        let subset = filter_occupations(&catalog, "", "Healthcare");
        let ids = subset.iter().map(|o| o.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["np", "rn"]);
    }

    #[test]
    fn categories_listed_in_first_seen_order_behind_all() {
        let catalog = sample_catalog();
        assert_eq!(category_options(&catalog), ["all", "Healthcare", "IT"]);
    }
}
