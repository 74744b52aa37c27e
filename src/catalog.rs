//! Hand-authored content catalogs
//!
//! All catalogs ship inside the binary as JSON and are read-only after load.
//! The only invariant is that ids are unique within each catalog.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::models::{
    Artisan, BookingItem, BookingKind, Category, Coordinates, CrowdLevel, Diet, Place, Restaurant,
    TourPackage,
};
use crate::{Result, TravelGemsError};

const PLACES_JSON: &str = include_str!("../data/places.json");
const ARTISANS_JSON: &str = include_str!("../data/artisans.json");
const RESTAURANTS_JSON: &str = include_str!("../data/restaurants.json");
const BOOKINGS_JSON: &str = include_str!("../data/bookings.json");
const PACKAGES_JSON: &str = include_str!("../data/packages.json");

/// Anything keyed by an id inside a catalog
pub trait CatalogEntry {
    fn id(&self) -> &str;
}

macro_rules! catalog_entry {
    ($($ty:ty),*) => {
        $(impl CatalogEntry for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

catalog_entry!(Place, Artisan, Restaurant, BookingItem, TourPackage);

/// Place filters taken from the explore panel
#[derive(Debug, Default, Clone)]
pub struct PlaceQuery {
    pub category: Option<Category>,
    pub crowd: Option<CrowdLevel>,
    /// Sort by distance from this point; places without a coordinate go last
    pub near: Option<Coordinates>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    artisans: Vec<Artisan>,
    restaurants: Vec<Restaurant>,
    bookings: Vec<BookingItem>,
    packages: Vec<TourPackage>,
}

impl Catalog {
    /// Load the catalogs compiled into the binary
    pub fn embedded() -> Result<Self> {
        let catalog = Self {
            places: parse_catalog("places", PLACES_JSON)?,
            artisans: parse_catalog("artisans", ARTISANS_JSON)?,
            restaurants: parse_catalog("restaurants", RESTAURANTS_JSON)?,
            bookings: parse_catalog("bookings", BOOKINGS_JSON)?,
            packages: parse_catalog("packages", PACKAGES_JSON)?,
        };

        info!(
            places = catalog.places.len(),
            artisans = catalog.artisans.len(),
            restaurants = catalog.restaurants.len(),
            bookings = catalog.bookings.len(),
            packages = catalog.packages.len(),
            "Loaded embedded catalogs"
        );

        Ok(catalog)
    }

    /// Build a catalog from already-parsed entries, enforcing id uniqueness
    pub fn new(
        places: Vec<Place>,
        artisans: Vec<Artisan>,
        restaurants: Vec<Restaurant>,
        bookings: Vec<BookingItem>,
        packages: Vec<TourPackage>,
    ) -> Result<Self> {
        ensure_unique_ids("places", &places)?;
        ensure_unique_ids("artisans", &artisans)?;
        ensure_unique_ids("restaurants", &restaurants)?;
        ensure_unique_ids("bookings", &bookings)?;
        ensure_unique_ids("packages", &packages)?;

        Ok(Self {
            places,
            artisans,
            restaurants,
            bookings,
            packages,
        })
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    /// Filter places and optionally order them by distance
    pub fn search_places(&self, query: &PlaceQuery) -> Vec<&Place> {
        let mut matches: Vec<&Place> = self
            .places
            .iter()
            .filter(|place| query.category.is_none_or(|c| place.category == c))
            .filter(|place| query.crowd.is_none_or(|c| place.crowd_level == c))
            .collect();

        if let Some(origin) = &query.near {
            matches.sort_by(|a, b| {
                let da = a.distance_from(origin).unwrap_or(f64::INFINITY);
                let db = b.distance_from(origin).unwrap_or(f64::INFINITY);
                da.total_cmp(&db)
            });
        }

        debug!("{} places match {:?}", matches.len(), query);
        matches
    }

    pub fn artisans(&self) -> &[Artisan] {
        &self.artisans
    }

    pub fn restaurants(&self, diet: Option<Diet>) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|restaurant| diet.is_none_or(|wanted| restaurant.diet.serves(wanted)))
            .collect()
    }

    pub fn bookings(&self, kind: Option<BookingKind>) -> Vec<&BookingItem> {
        self.bookings
            .iter()
            .filter(|item| kind.is_none_or(|k| item.kind == k))
            .collect()
    }

    pub fn packages(&self) -> &[TourPackage] {
        &self.packages
    }
}

fn parse_catalog<T: DeserializeOwned + CatalogEntry>(name: &str, json: &str) -> Result<Vec<T>> {
    let entries: Vec<T> = serde_json::from_str(json)
        .map_err(|e| TravelGemsError::parse(format!("{name} catalog is malformed: {e}")))?;
    ensure_unique_ids(name, &entries)?;
    Ok(entries)
}

fn ensure_unique_ids<T: CatalogEntry>(name: &str, entries: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(TravelGemsError::validation(format!(
                "duplicate id '{}' in {name} catalog",
                entry.id()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog should load")
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog();
        assert!(!catalog.places().is_empty());
        assert!(!catalog.artisans().is_empty());
        assert!(!catalog.restaurants(None).is_empty());
        assert!(!catalog.bookings(None).is_empty());
        assert!(!catalog.packages().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = catalog();
        let mut places = catalog.places().to_vec();
        places.push(places[0].clone());

        let err = Catalog::new(places, vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, TravelGemsError::Validation { .. }));
        assert!(err.to_string().contains("places"));
    }

    #[test]
    fn test_place_lookup() {
        let catalog = catalog();
        assert_eq!(
            catalog.place("somanathapura").map(|p| p.category),
            Some(Category::Heritage)
        );
        assert!(catalog.place("no-such-place").is_none());
    }

    #[test]
    fn test_filter_places_by_category_and_crowd() {
        let catalog = catalog();
        let query = PlaceQuery {
            category: Some(Category::Village),
            crowd: Some(CrowdLevel::Low),
            near: None,
        };
        let places = catalog.search_places(&query);
        assert!(!places.is_empty());
        assert!(
            places
                .iter()
                .all(|p| p.category == Category::Village && p.crowd_level == CrowdLevel::Low)
        );
    }

    #[test]
    fn test_near_sorts_by_distance_with_unlocated_last() {
        let catalog = catalog();
        let origin = Coordinates::new(12.2756, 76.8818);
        let places = catalog.search_places(&PlaceQuery {
            near: Some(origin),
            ..PlaceQuery::default()
        });

        assert_eq!(places.first().map(|p| p.id.as_str()), Some("somanathapura"));
        assert!(places.last().is_some_and(|p| p.coordinates.is_none()));

        let distances: Vec<f64> = places
            .iter()
            .filter_map(|p| p.distance_from(&origin))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_restaurant_diet_filter_includes_mixed_kitchens() {
        let catalog = catalog();
        let veg = catalog.restaurants(Some(Diet::Veg));
        assert!(veg.iter().all(|r| r.diet != Diet::NonVeg));
        assert!(veg.iter().any(|r| r.diet == Diet::Both));
    }

    #[test]
    fn test_bookings_by_kind() {
        let catalog = catalog();
        let vehicles = catalog.bookings(Some(BookingKind::Vehicle));
        assert!(!vehicles.is_empty());
        assert!(vehicles.iter().all(|b| b.kind == BookingKind::Vehicle));
    }
}
