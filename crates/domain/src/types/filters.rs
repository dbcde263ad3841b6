//! List filters
//!
//! Each filter type is an immutable snapshot. Screens replace the whole value
//! on change, and every list call serializes the snapshot into query pairs.
//! Absent values are omitted; set-valued filters repeat their parameter.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contract::ContractState;

/// Date format used by every date query parameter.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered `(name, value)` query parameters.
pub type QueryPairs = Vec<(String, String)>;

fn push(pairs: &mut QueryPairs, name: &str, value: impl ToString) {
    pairs.push((name.to_string(), value.to_string()));
}

fn push_opt<V: ToString>(pairs: &mut QueryPairs, name: &str, value: Option<V>) {
    if let Some(value) = value {
        push(pairs, name, value);
    }
}

fn push_text(pairs: &mut QueryPairs, name: &str, value: Option<&String>) {
    if let Some(value) = value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        push(pairs, name, value);
    }
}

fn push_date(pairs: &mut QueryPairs, name: &str, value: Option<NaiveDate>) {
    push_opt(pairs, name, value.map(|date| date.format(QUERY_DATE_FORMAT)));
}

/// Catalogue filter set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueFilters {
    pub brands: BTreeSet<String>,
    pub model: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub body_type: Option<String>,
    pub car_classes: BTreeSet<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    /// Local search over loaded items. Never sent to the server.
    pub search_query: Option<String>,
}

impl CatalogueFilters {
    /// Number of filter groups in use, as shown on the filter badge.
    ///
    /// Year, price and date ranges count once each whichever bound is set.
    /// The search query is not a filter.
    pub fn active_count(&self) -> usize {
        [
            !self.brands.is_empty(),
            self.model.is_some(),
            self.body_type.is_some(),
            !self.car_classes.is_empty(),
            self.min_year.is_some() || self.max_year.is_some(),
            self.min_price.is_some() || self.max_price.is_some(),
            self.date_start.is_some() || self.date_end.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Same filters with a different search query.
    #[must_use]
    pub fn with_search(&self, query: Option<String>) -> Self {
        Self { search_query: query, ..self.clone() }
    }

    /// Parameters shared by the catalogue and price-bounds calls.
    fn push_selection(&self, pairs: &mut QueryPairs) {
        for brand in &self.brands {
            push(pairs, "brand", brand);
        }
        push_text(pairs, "model", self.model.as_ref());
        push_opt(pairs, "minYear", self.min_year);
        push_opt(pairs, "maxYear", self.max_year);
        push_text(pairs, "body_type", self.body_type.as_ref());
        for class in &self.car_classes {
            push(pairs, "car_class", class);
        }
        push_date(pairs, "date_start", self.date_start);
        push_date(pairs, "date_end", self.date_end);
    }

    /// Query for a catalogue page, without paging parameters.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.push_selection(&mut pairs);
        push_opt(&mut pairs, "min_cell", self.min_price);
        push_opt(&mut pairs, "max_cell", self.max_price);
        pairs
    }

    /// Query for the price-bounds call, which ignores the price range itself.
    pub fn price_bounds_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.push_selection(&mut pairs);
        pairs
    }
}

/// Admin car list filters: the catalogue set plus the car state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCarFilters {
    pub catalogue: CatalogueFilters,
    pub car_state: Option<String>,
}

impl AdminCarFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.catalogue.push_selection(&mut pairs);
        push_text(&mut pairs, "car_state", self.car_state.as_ref());
        push_opt(&mut pairs, "min_cell", self.catalogue.min_price);
        push_opt(&mut pairs, "max_cell", self.catalogue.max_price);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelFilters {
    pub brand: Option<String>,
    pub body_type: Option<String>,
    pub car_class: Option<String>,
}

impl ModelFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_text(&mut pairs, "brand", self.brand.as_ref());
        push_text(&mut pairs, "body_type", self.body_type.as_ref());
        push_text(&mut pairs, "car_class", self.car_class.as_ref());
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminContractFilters {
    pub status: Option<ContractState>,
    pub user_id: Option<i64>,
    pub car_id: Option<i64>,
    pub brand: Option<String>,
    pub body_type: Option<String>,
    pub car_class: Option<String>,
}

impl AdminContractFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "status", self.status);
        push_opt(&mut pairs, "idUser", self.user_id);
        push_opt(&mut pairs, "idCar", self.car_id);
        push_text(&mut pairs, "brand", self.brand.as_ref());
        push_text(&mut pairs, "body_type", self.body_type.as_ref());
        push_text(&mut pairs, "car_class", self.car_class.as_ref());
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilters {
    pub banned: Option<bool>,
    pub role_name: Option<String>,
}

impl UserFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "banned", self.banned);
        push_text(&mut pairs, "roleName", self.role_name.as_ref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn default_filters_send_nothing() {
        let filters = CatalogueFilters::default();
        assert!(filters.query_pairs().is_empty());
        assert_eq!(filters.active_count(), 0);
        assert!(filters.is_default());
    }

    #[test]
    fn set_filters_repeat_their_parameter() {
        let filters = CatalogueFilters {
            brands: ["Lada".to_string(), "Kia".to_string()].into_iter().collect(),
            car_classes: ["ECONOMY".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        let brands: Vec<_> = pairs.iter().filter(|(k, _)| k == "brand").map(|(_, v)| v.as_str()).collect();
        assert_eq!(brands, vec!["Kia", "Lada"]);
        assert!(pairs.contains(&("car_class".to_string(), "ECONOMY".to_string())));
    }

    #[test]
    fn ranges_count_once_and_search_is_ignored() {
        let filters = CatalogueFilters {
            min_year: Some(2015),
            max_year: Some(2020),
            max_price: Some(4000.0),
            date_start: Some(date(1)),
            search_query: Some("vesta".into()),
            ..Default::default()
        };
        assert_eq!(filters.active_count(), 3);
        assert!(filters.query_pairs().iter().all(|(_, v)| v != "vesta"));
    }

    #[test]
    fn dates_use_iso_format() {
        let filters = CatalogueFilters { date_start: Some(date(1)), date_end: Some(date(4)), ..Default::default() };
        let pairs = filters.query_pairs();
        assert!(pairs.contains(&("date_start".to_string(), "2024-06-01".to_string())));
        assert!(pairs.contains(&("date_end".to_string(), "2024-06-04".to_string())));
    }

    #[test]
    fn price_bounds_query_drops_price_range() {
        let filters = CatalogueFilters {
            model: Some("Vesta".into()),
            min_price: Some(500.0),
            ..Default::default()
        };
        assert_eq!(filters.price_bounds_query(), vec![("model".to_string(), "Vesta".to_string())]);
        assert!(filters.query_pairs().iter().any(|(k, _)| k == "min_cell"));
    }

    #[test]
    fn blank_text_filters_are_omitted() {
        let filters = CatalogueFilters { model: Some("   ".into()), ..Default::default() };
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn admin_filters_carry_extra_keys() {
        let cars = AdminCarFilters { car_state: Some("RENTED".into()), ..Default::default() };
        assert_eq!(cars.query_pairs(), vec![("car_state".to_string(), "RENTED".to_string())]);

        let contracts = AdminContractFilters {
            status: Some(ContractState::CancellationRequested),
            user_id: Some(9),
            ..Default::default()
        };
        assert_eq!(
            contracts.query_pairs(),
            vec![
                ("status".to_string(), "CANCELLATION_REQUESTED".to_string()),
                ("idUser".to_string(), "9".to_string()),
            ]
        );

        let users = UserFilters { banned: Some(false), role_name: None };
        assert_eq!(users.query_pairs(), vec![("banned".to_string(), "false".to_string())]);
    }
}
