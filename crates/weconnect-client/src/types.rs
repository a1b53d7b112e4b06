//! Request and response types for the WeConnect ID API
//!
//! Wire field names are fixed by the vendor and preserved exactly through
//! serde renames; the Rust identifiers are only a readability layer. Values
//! like charging or plug states are vendor-defined string vocabularies that
//! are not exhaustively known, so they stay plain `String`s. Timestamps are
//! vendor-formatted date-time strings passed through unparsed.

use serde::{Deserialize, Serialize};

// =============================================================================
// Vehicle List Types
// =============================================================================

/// Response of the account vehicle-list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleList {
    pub data: Vec<VehicleEntry>,
}

/// One vehicle associated with the account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEntry {
    #[serde(rename = "VIN")]
    pub vin: String,
    #[serde(rename = "Nickname", default)]
    pub nickname: String,
}

// =============================================================================
// Status Types
// =============================================================================

/// Wrapper the backend puts around the status aggregate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub data: VehicleStatus,
}

/// Full status snapshot for one vehicle.
///
/// Each section is independently optional on the wire; a section the backend
/// omits decodes to its zero value rather than failing the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleStatus {
    pub battery_status: BatteryStatus,
    pub charging_status: ChargingStatus,
    pub charging_settings: ChargingSettings,
    pub plug_status: PlugStatus,
    pub range_status: RangeStatus,
    pub climatisation_settings: ClimatisationSettings,
    /// Regularly missing from the backend response; absence is normal.
    pub climatisation_status: ClimatisationStatus,
}

/// Battery state of charge and electric range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatteryStatus {
    pub car_captured_timestamp: String,
    #[serde(rename = "currentSOC_pct")]
    pub current_soc_pct: u8,
    #[serde(rename = "cruisingRangeElectric_km")]
    pub cruising_range_electric_km: u32,
}

/// Active charging session state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChargingStatus {
    pub car_captured_timestamp: String,
    /// e.g. "readyForCharging"
    pub charging_state: String,
    #[serde(rename = "remainingChargingTimeToComplete_min")]
    pub remaining_charging_time_to_complete_min: u32,
    #[serde(rename = "chargePower_kW")]
    pub charge_power_kw: u32,
    #[serde(rename = "chargeRate_kmph")]
    pub charge_rate_kmph: u32,
}

/// Configured charging behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChargingSettings {
    pub car_captured_timestamp: String,
    /// e.g. "reduced", "maximum"
    #[serde(rename = "maxChargeCurrentAC")]
    pub max_charge_current_ac: String,
    /// The backend reports this flag as a string, not a boolean.
    pub auto_unlock_plug_when_charged: String,
    #[serde(rename = "targetSOC_pct")]
    pub target_soc_pct: u8,
}

/// Charge plug connection and lock state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlugStatus {
    pub car_captured_timestamp: String,
    /// e.g. "connected", "disconnected"
    pub plug_connection_state: String,
    pub plug_lock_state: String,
}

/// Running climatisation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClimatisationStatus {
    pub car_captured_timestamp: String,
    #[serde(rename = "remainingClimatisationTime_min")]
    pub remaining_climatisation_time_min: u32,
    /// e.g. "off"
    pub climatisation_state: String,
}

/// Configured climatisation behaviour.
///
/// The backend reports the target temperature in Kelvin and Celsius side by
/// side; the two are not guaranteed consistent, so both are kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClimatisationSettings {
    pub car_captured_timestamp: String,
    #[serde(rename = "targetTemperature_K")]
    pub target_temperature_k: f64,
    #[serde(rename = "targetTemperature_C")]
    pub target_temperature_c: f64,
    pub climatisation_without_external_power: bool,
    pub climatisation_at_unlock: bool,
    pub window_heating_enabled: bool,
    pub zone_front_left_enabled: bool,
    pub zone_front_right_enabled: bool,
    pub zone_rear_left_enabled: bool,
    pub zone_rear_right_enabled: bool,
}

/// Total and per-engine range figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeStatus {
    pub car_captured_timestamp: String,
    pub car_type: String,
    pub primary_engine: PrimaryEngine,
    #[serde(rename = "totalRange_km")]
    pub total_range_km: u32,
}

/// Range contribution of the primary engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrimaryEngine {
    #[serde(rename = "type")]
    pub engine_type: String,
    #[serde(rename = "currentSOC_pct")]
    pub current_soc_pct: u8,
    #[serde(rename = "remainingRange_km")]
    pub remaining_range_km: u32,
}

// =============================================================================
// Action Types
// =============================================================================

/// Vehicle subsystems that accept start/stop commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Charging,
    Climatisation,
}

impl Action {
    /// URL path segment for this action kind
    pub fn as_name(&self) -> &'static str {
        match self {
            Action::Charging => "charging",
            Action::Climatisation => "climatisation",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_name())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "charging" => Ok(Action::Charging),
            "climatisation" => Ok(Action::Climatisation),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// Command applied to an [`Action`] subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionValue {
    Start,
    Stop,
}

impl ActionValue {
    /// URL path segment for this action value
    pub fn as_name(&self) -> &'static str {
        match self {
            ActionValue::Start => "start",
            ActionValue::Stop => "stop",
        }
    }
}

impl std::fmt::Display for ActionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_name())
    }
}

impl std::str::FromStr for ActionValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(ActionValue::Start),
            "stop" => Ok(ActionValue::Stop),
            _ => Err(format!("Invalid action value: {}", s)),
        }
    }
}

/// Body of a charge-target change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargingSettingsRequest {
    #[serde(rename = "targetSOC_pct")]
    pub target_soc_pct: u8,
}
