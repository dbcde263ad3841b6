//! Rental contract wire types

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Contract state as reported by the server.
///
/// The server owns the lifecycle; the client only displays the value and
/// passes it back as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractState {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    /// Older backends spell this `AWAITING_CANCELLATION`.
    #[serde(alias = "AWAITING_CANCELLATION")]
    CancellationRequested,
    /// Any state this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl_wire_enum_conversions!(ContractState {
    Pending => "PENDING",
    Confirmed => "CONFIRMED",
    Active => "ACTIVE",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
    CancellationRequested => "CANCELLATION_REQUESTED",
    Unknown => "UNKNOWN",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResponse {
    pub id: i64,
    pub total_cost: f64,
    pub brand: String,
    pub model: String,
    pub body_type: String,
    pub car_class: String,
    pub year_of_issue: i32,
    pub last_name: String,
    pub start_date: String,
    pub end_date: String,
    pub vin: String,
    pub gos_number: String,
    #[serde(default)]
    pub state: Option<ContractState>,
}

/// Body of `POST api/contracts`. Dates are `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    pub car_id: i64,
    pub data_start: String,
    pub data_end: String,
    pub daily_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractRequest {
    pub data_start: String,
    pub data_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
}
