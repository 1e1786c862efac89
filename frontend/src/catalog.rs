//! Course date catalog and the filters behind the "Próximas Fechas" section.
//!
//! The catalog is configuration data: it is loaded once from the bundled JSON
//! and never mutated. Filtering keeps the catalog order; facet lists are the
//! sorted distinct values used to build the three selects.

use std::collections::{BTreeSet, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::config;

const BUNDLED_CATALOG: &str = include_str!("../content/course_dates.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    pub id: String,
    pub course_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub city: String,
    pub modality: String,
    pub price: String,
    pub available_slots: u32,
    pub total_slots: u32,
}

impl CourseOffering {
    /// Share of free slots, 0-100. An offering without capacity reads as 0.
    pub fn slots_percentage(&self) -> f64 {
        if self.total_slots == 0 {
            return 0.0;
        }
        f64::from(self.available_slots) / f64::from(self.total_slots) * 100.0
    }

    pub fn is_low_availability(&self) -> bool {
        self.available_slots <= config::LOW_AVAILABILITY_THRESHOLD
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse course catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate offering id {0}")]
    DuplicateId(String),
    #[error("offering {id} has {available} available slots out of {total}")]
    SlotsOutOfRange { id: String, available: u32, total: u32 },
}

/// One select's current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn from_value(value: &str) -> Self {
        if value == config::ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// The `<option value>` this selection corresponds to.
    pub fn value(&self) -> &str {
        match self {
            Selection::All => config::ALL,
            Selection::Only(value) => value.as_str(),
        }
    }

    pub fn matches(&self, field: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value == field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateFilter {
    pub course: Selection,
    pub city: Selection,
    pub modality: Selection,
}

impl DateFilter {
    pub fn matches(&self, offering: &CourseOffering) -> bool {
        self.course.matches(&offering.course_name)
            && self.city.matches(&offering.city)
            && self.modality.matches(&offering.modality)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets<'a> {
    pub courses: Vec<&'a str>,
    pub cities: Vec<&'a str>,
    pub modalities: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    offerings: Vec<CourseOffering>,
}

impl Catalog {
    pub fn new(offerings: Vec<CourseOffering>) -> Result<Self, CatalogError> {
        validate(&offerings)?;
        Ok(Self { offerings })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let offerings: Vec<CourseOffering> = serde_json::from_str(json)?;
        Self::new(offerings)
    }

    /// The catalog shipped inside the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn offerings(&self) -> &[CourseOffering] {
        &self.offerings
    }

    pub fn filter(&self, filter: &DateFilter) -> Vec<&CourseOffering> {
        self.offerings.iter().filter(|o| filter.matches(o)).collect()
    }

    pub fn unique_courses(&self) -> Vec<&str> {
        self.unique_by(|o| &o.course_name)
    }

    pub fn unique_cities(&self) -> Vec<&str> {
        self.unique_by(|o| &o.city)
    }

    pub fn unique_modalities(&self) -> Vec<&str> {
        self.unique_by(|o| &o.modality)
    }

    pub fn facets(&self) -> Facets<'_> {
        Facets {
            courses: self.unique_courses(),
            cities: self.unique_cities(),
            modalities: self.unique_modalities(),
        }
    }

    fn unique_by<'a>(&'a self, field: impl Fn(&'a CourseOffering) -> &'a String) -> Vec<&'a str> {
        self.offerings
            .iter()
            .map(|o| field(o).as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn validate(offerings: &[CourseOffering]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for offering in offerings {
        if !seen.insert(offering.id.as_str()) {
            return Err(CatalogError::DuplicateId(offering.id.clone()));
        }
        if offering.available_slots > offering.total_slots {
            return Err(CatalogError::SlotsOutOfRange {
                id: offering.id.clone(),
                available: offering.available_slots,
                total: offering.total_slots,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn offering(id: &str, course: &str, city: &str, modality: &str, available: u32, total: u32) -> CourseOffering {
        CourseOffering {
            id: id.to_string(),
            course_name: course.to_string(),
            date: "15 Noviembre 2025".to_string(),
            time: "09:00 - 18:00".to_string(),
            location: "Centro de Capacitación".to_string(),
            city: city.to_string(),
            modality: modality.to_string(),
            price: "$85.000".to_string(),
            available_slots: available,
            total_slots: total,
        }
    }

    fn ids(offerings: &[&CourseOffering]) -> Vec<String> {
        offerings.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.offerings().len(), 6);
        assert_eq!(catalog.offerings()[0].course_name, "Soporte Vital Básico");
    }

    #[test]
    fn bundled_facets_are_sorted_and_distinct() {
        let catalog = Catalog::bundled().unwrap();
        let facets = catalog.facets();
        assert_eq!(facets.cities, vec!["Concepción", "Santiago", "Valparaíso"]);
        assert_eq!(facets.modalities, vec!["Mixta", "Presencial"]);
        assert_eq!(facets.courses.len(), 6);
        assert_eq!(facets.courses[0], "Control de Hemorragias");
    }

    #[test]
    fn filter_by_city_keeps_catalog_order() {
        let catalog = Catalog::bundled().unwrap();
        let filter = DateFilter {
            city: Selection::from_value("Santiago"),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter(&filter)), vec!["1", "2", "5"]);
    }

    #[test]
    fn filters_are_combined_with_and() {
        let catalog = Catalog::bundled().unwrap();
        let filter = DateFilter {
            course: Selection::All,
            city: Selection::from_value("Valparaíso"),
            modality: Selection::from_value("Presencial"),
        };
        assert_eq!(ids(&catalog.filter(&filter)), vec!["4"]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let catalog = Catalog::bundled().unwrap();
        let filter = DateFilter {
            city: Selection::from_value("santiago"),
            ..Default::default()
        };
        assert!(catalog.filter(&filter).is_empty());
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let catalog = Catalog::bundled().unwrap();
        let filter = DateFilter {
            course: Selection::from_value("Trauma"),
            city: Selection::from_value("Concepción"),
            modality: Selection::All,
        };
        assert!(catalog.filter(&filter).is_empty());
    }

    #[test]
    fn selection_round_trips_the_sentinel() {
        assert_eq!(Selection::from_value("all"), Selection::All);
        assert_eq!(Selection::All.value(), "all");
        assert_eq!(Selection::from_value("Mixta").value(), "Mixta");
    }

    #[test]
    fn slot_display_fields() {
        let low = offering("5", "Inmovilización Selectiva", "Santiago", "Presencial", 2, 15);
        assert!((low.slots_percentage() - 13.33).abs() < 0.01);
        assert!(low.is_low_availability());

        let plenty = offering("2", "Trauma", "Santiago", "Presencial", 12, 15);
        assert!(!plenty.is_low_availability());

        let threshold = offering("7", "Trauma", "Santiago", "Presencial", 5, 15);
        assert!(threshold.is_low_availability());
    }

    #[test]
    fn zero_capacity_reads_as_zero_percent() {
        let empty = offering("1", "Trauma", "Santiago", "Presencial", 0, 0);
        assert_eq!(empty.slots_percentage(), 0.0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            offering("1", "Trauma", "Santiago", "Presencial", 1, 2),
            offering("1", "Primeros Auxilios", "Santiago", "Mixta", 1, 2),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn rejects_more_available_than_total() {
        let result = Catalog::new(vec![offering("1", "Trauma", "Santiago", "Presencial", 3, 2)]);
        assert!(matches!(result, Err(CatalogError::SlotsOutOfRange { available: 3, total: 2, .. })));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Catalog::from_json("[{\"id\": 1}]"), Err(CatalogError::Parse(_))));
    }

    const COURSES: [&str; 3] = ["Trauma", "Primeros Auxilios", "Soporte Vital Básico"];
    const CITIES: [&str; 3] = ["Santiago", "Valparaíso", "Concepción"];
    const MODALITIES: [&str; 2] = ["Presencial", "Mixta"];

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec((0..3usize, 0..3usize, 0..2usize, 0u32..30, 0u32..30), 0..12).prop_map(|rows| {
            let offerings = rows
                .into_iter()
                .enumerate()
                .map(|(i, (c, city, m, a, t))| {
                    offering(&i.to_string(), COURSES[c], CITIES[city], MODALITIES[m], a.min(t), t)
                })
                .collect();
            Catalog::new(offerings).unwrap()
        })
    }

    // Index past the end of the value table picks a value absent from every catalog.
    fn arb_selection(values: &'static [&'static str]) -> impl Strategy<Value = Selection> {
        prop::option::of(0..=values.len()).prop_map(move |pick| match pick {
            None => Selection::All,
            Some(i) => Selection::Only(values.get(i).copied().unwrap_or("Antofagasta").to_string()),
        })
    }

    fn arb_filter() -> impl Strategy<Value = DateFilter> {
        (arb_selection(&COURSES), arb_selection(&CITIES), arb_selection(&MODALITIES))
            .prop_map(|(course, city, modality)| DateFilter { course, city, modality })
    }

    fn check_facet<'a>(facet: &[&str], values: impl Iterator<Item = &'a str>) -> Result<(), TestCaseError> {
        prop_assert!(facet.windows(2).all(|w| w[0] < w[1]));
        let distinct: HashSet<&str> = values.collect();
        prop_assert_eq!(facet.len(), distinct.len());
        for value in facet {
            prop_assert!(distinct.contains(value));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn all_filters_return_whole_catalog(catalog in arb_catalog()) {
            let filtered: Vec<CourseOffering> =
                catalog.filter(&DateFilter::default()).into_iter().cloned().collect();
            prop_assert_eq!(filtered.as_slice(), catalog.offerings());
        }

        #[test]
        fn filter_is_sound_and_complete(catalog in arb_catalog(), filter in arb_filter()) {
            let filtered = catalog.filter(&filter);
            let kept: HashSet<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
            for offering in catalog.offerings() {
                let expected = filter.course.matches(&offering.course_name)
                    && filter.city.matches(&offering.city)
                    && filter.modality.matches(&offering.modality);
                prop_assert_eq!(kept.contains(offering.id.as_str()), expected);
            }
            let expected_order: Vec<&str> = catalog
                .offerings()
                .iter()
                .map(|o| o.id.as_str())
                .filter(|id| kept.contains(id))
                .collect();
            let actual_order: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
            prop_assert_eq!(actual_order, expected_order);
        }

        #[test]
        fn facets_hold_each_value_once_in_order(catalog in arb_catalog()) {
            let facets = catalog.facets();
            let offerings = catalog.offerings();
            check_facet(&facets.courses, offerings.iter().map(|o| o.course_name.as_str()))?;
            check_facet(&facets.cities, offerings.iter().map(|o| o.city.as_str()))?;
            check_facet(&facets.modalities, offerings.iter().map(|o| o.modality.as_str()))?;
        }
    }
}
