//! Gallery filtering.
//!
//! Pure helpers over the photo archive: the year dropdown, the combined
//! year/category filter and the per-category grouping of the tabbed view.

use crate::models::category::Category;
use crate::models::gallery::GalleryImage;

use super::pipeline::CategoryFilter;

/// Academic-year filter: the "all" sentinel or one exact year label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Only(String),
}

impl YearFilter {
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(code.to_string())
        }
    }

    pub fn matches(&self, year: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == year,
        }
    }
}

/// Distinct academic-year labels, most recent first.
pub fn years(images: &[GalleryImage]) -> Vec<String> {
    let mut years: Vec<String> = images.iter().map(|image| image.year.clone()).collect();
    years.sort();
    years.dedup();
    years.reverse();
    years
}

/// Filter the archive by year and category, preserving authored order.
pub fn filter_images(
    images: &[GalleryImage],
    year: &YearFilter,
    category: CategoryFilter,
) -> Vec<GalleryImage> {
    images
        .iter()
        .filter(|image| year.matches(&image.year) && category.matches(image.category))
        .cloned()
        .collect()
}

/// The subset of an already-filtered view belonging to one category.
pub fn by_category(images: &[GalleryImage], category: Category) -> Vec<GalleryImage> {
    images
        .iter()
        .filter(|image| image.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64, year: &str, category: Category) -> GalleryImage {
        GalleryImage {
            id,
            title: format!("Image {id}"),
            year: year.to_string(),
            category,
            url: String::new(),
            description: String::new(),
        }
    }

    fn archive() -> Vec<GalleryImage> {
        vec![
            image(1, "2023-24", Category::Academic),
            image(2, "2023-24", Category::Cultural),
            image(3, "2024-25", Category::Sports),
            image(4, "2024-25", Category::Academic),
        ]
    }

    #[test]
    fn test_years_are_unique_and_descending() {
        assert_eq!(years(&archive()), vec!["2024-25", "2023-24"]);
    }

    #[test]
    fn test_year_filter_parse() {
        assert_eq!(YearFilter::parse("all"), YearFilter::All);
        assert_eq!(YearFilter::parse("2024-25"), YearFilter::Only("2024-25".to_string()));
    }

    #[test]
    fn test_filter_by_year() {
        let filtered = filter_images(
            &archive(),
            &YearFilter::Only("2023-24".to_string()),
            CategoryFilter::All,
        );
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|image| image.year == "2023-24"));
    }

    #[test]
    fn test_filter_by_year_and_category() {
        let filtered = filter_images(
            &archive(),
            &YearFilter::Only("2024-25".to_string()),
            CategoryFilter::Only(Category::Academic),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 4);
    }

    #[test]
    fn test_filter_preserves_order() {
        let filtered = filter_images(&archive(), &YearFilter::All, CategoryFilter::All);
        let ids: Vec<i64> = filtered.iter().map(|image| image.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_by_category() {
        let academic = by_category(&archive(), Category::Academic);
        let ids: Vec<i64> = academic.iter().map(|image| image.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let filtered = filter_images(
            &archive(),
            &YearFilter::Only("2019-20".to_string()),
            CategoryFilter::All,
        );
        assert!(filtered.is_empty());
    }
}
