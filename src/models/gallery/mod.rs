// Gallery models
// Image metadata for the event photo archive

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Metadata for one archived event photo.
///
/// `year` is an academic-year label ("2024-25"), not a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub title: String,
    pub year: String,
    pub category: Category,
    pub url: String,
    pub description: String,
}
