//! JSON DTOs returned by the API.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Role;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Generic confirmation response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Response for a successful registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisteredDto {
    pub message: String,
    pub auth_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_id: Option<i32>,
}

/// Response for a successful login
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub auth_id: i32,
    pub role: Role,
    pub name: String,
}

/// The identity currently stored in the session
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SessionIdentityDto {
    pub auth_id: i32,
    pub name: String,
    pub role: Role,
    pub verified: bool,
}

/// Admin view of a user account
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub user_id: i32,
    pub auth_id: i32,
    pub name: String,
    pub verified: bool,
    pub role: String,
}

/// Admin view of a cause
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminCauseDto {
    pub cause_id: i32,
    pub name: String,
    pub verified: bool,
    #[serde(rename = "type")]
    pub cause_type: CauseType,
}

/// Which subtype row is attached to a cause.
///
/// A cause with neither subtype row is a legitimate state and is reported as
/// `Unknown` rather than treated as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CauseType {
    #[serde(rename = "NGO")]
    Ngo,
    Event,
    Unknown,
}

/// Public listing entry for a verified cause.
///
/// Flattens the representative location's coordinates, all contact strings,
/// all social handles, and the subtype-specific fields into one object.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CauseSummaryDto {
    pub cause_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub email: Option<String>,
    pub if_online: bool,
    #[serde(rename = "type")]
    pub cause_type: CauseType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contacts: Vec<String>,
    pub socials: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_est: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_id: Option<i32>,
}

/// Detail view of a verified cause, with the full location list.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CauseDetailDto {
    #[serde(flatten)]
    pub summary: CauseSummaryDto,
    pub locations: Vec<LocationDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub loc_id: i32,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_no: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response for a newly created activity record
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub message: String,
    pub id: i32,
}
