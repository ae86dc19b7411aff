//! Read-only portal data source.
//!
//! The embedded records stand in for a backend: a real deployment would
//! swap `StaticCatalog` for a fetching implementation returning the same
//! record shapes. Data is authored once with `Localized` string pairs and
//! materialized per locale, replacing the original portal's duplicated
//! per-language arrays.

mod data;

use crate::models::event::Event;
use crate::models::gallery::GalleryImage;
use crate::models::locale::Locale;
use crate::models::staff::{Staff, University};

/// The portal's read-only data collaborator.
pub trait PortalCatalog {
    /// Every event, upcoming and past, in authored order.
    fn events(&self, locale: Locale) -> Vec<Event>;
    /// The event coordination staff directory.
    fn staff(&self, locale: Locale) -> Vec<Staff>;
    /// The university's own contact record.
    fn university(&self, locale: Locale) -> University;
    /// The photo archive.
    fn gallery(&self, locale: Locale) -> Vec<GalleryImage>;
}

/// Catalog backed by the embedded portal data.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl PortalCatalog for StaticCatalog {
    fn events(&self, locale: Locale) -> Vec<Event> {
        data::events(locale)
    }

    fn staff(&self, locale: Locale) -> Vec<Staff> {
        data::staff(locale)
    }

    fn university(&self, locale: Locale) -> University {
        data::university(locale)
    }

    fn gallery(&self, locale: Locale) -> Vec<GalleryImage> {
        data::gallery(locale)
    }
}
