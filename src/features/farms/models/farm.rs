use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::farms::errors::FarmError;
use crate::features::farms::models::{CropTypes, FarmStatus, GpsCoordinates, IrrigationType};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 255;
pub const LOCATION_MAX_CHARS: usize = 500;

/// Exclusive lower bound for a farm's size in acres
pub fn size_lower_bound() -> Decimal {
    Decimal::new(1, 2)
}

pub fn size_upper_bound() -> Decimal {
    Decimal::new(100_000, 0)
}

pub fn validate_name(name: &str) -> Result<String, FarmError> {
    let name = name.trim();
    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(FarmError::invalid_argument(format!(
            "Farm name must be {}-{} characters",
            NAME_MIN_CHARS, NAME_MAX_CHARS
        )));
    }
    Ok(name.to_string())
}

pub fn validate_location(location: &str) -> Result<String, FarmError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(FarmError::invalid_argument("Location is required"));
    }
    if location.chars().count() > LOCATION_MAX_CHARS {
        return Err(FarmError::invalid_argument(format!(
            "Location must not exceed {} characters",
            LOCATION_MAX_CHARS
        )));
    }
    Ok(location.to_string())
}

pub fn validate_size_in_acres(size: Decimal) -> Result<Decimal, FarmError> {
    if size <= size_lower_bound() || size > size_upper_bound() {
        return Err(FarmError::invalid_argument(format!(
            "Size in acres must be greater than {} and at most {}",
            size_lower_bound(),
            size_upper_bound()
        )));
    }
    Ok(size)
}

/// Descriptive attributes. None of them take part in the status lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmDetails {
    pub soil_type: Option<String>,
    pub irrigation_type: Option<IrrigationType>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub certification: Option<String>,
    pub water_source: Option<String>,
    pub description: Option<String>,
    pub average_rainfall: Option<Decimal>,
    pub elevation: Option<Decimal>,
}

/// Data for registering a new farm
#[derive(Debug, Clone)]
pub struct NewFarm {
    pub farmer_id: Uuid,
    pub name: String,
    pub location: String,
    pub size_in_acres: Decimal,
    pub crop_types: Option<Vec<String>>,
    pub status: Option<FarmStatus>,
    pub coordinates: Option<GpsCoordinates>,
    pub details: FarmDetails,
}

/// Field changes applied together by `Farm::apply_update`
#[derive(Debug, Clone, Default)]
pub struct FarmUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub size_in_acres: Option<Decimal>,
    pub details: Option<FarmDetails>,
}

/// A registered farm.
///
/// Identity and registration time are fixed at creation. Every other change
/// goes through a guarded method so the lifecycle invariants hold:
/// an `Archived` farm is always soft-deleted with a deletion timestamp, and
/// the crop list never holds blanks or duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Farm {
    id: Uuid,
    farmer_id: Uuid,
    name: String,
    location: String,
    size_in_acres: Decimal,
    crop_types: CropTypes,
    status: FarmStatus,
    coordinates: Option<GpsCoordinates>,
    details: FarmDetails,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted: bool,
    deleted_at: Option<DateTime<Utc>>,
}

impl Farm {
    /// Creation hook: validates the input, fills defaults and stamps both timestamps.
    pub fn create(id: Uuid, data: NewFarm, now: DateTime<Utc>) -> Result<Self, FarmError> {
        let status = data.status.unwrap_or_default();
        if status.is_terminal() {
            return Err(FarmError::transition(status, "register"));
        }

        let crop_types = match data.crop_types {
            Some(values) => CropTypes::from_values(values)?,
            None => CropTypes::new(),
        };

        Ok(Self {
            id,
            farmer_id: data.farmer_id,
            name: validate_name(&data.name)?,
            location: validate_location(&data.location)?,
            size_in_acres: validate_size_in_acres(data.size_in_acres)?,
            crop_types,
            status,
            coordinates: data.coordinates,
            details: data.details,
            registered_at: now,
            updated_at: now,
            deleted: false,
            deleted_at: None,
        })
    }

    /// Update hook, run by the persistence layer before every write.
    pub fn on_update(&mut self, now: DateTime<Utc>) {
        if self.status.is_terminal() {
            self.deleted = true;
        }
        if self.deleted && self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn set_status(&mut self, status: FarmStatus, now: DateTime<Utc>) {
        self.status = status;
        self.touch(now);
    }

    // =========================================================================
    // STATUS LIFECYCLE
    // =========================================================================

    pub fn activate(&mut self, now: DateTime<Utc>) -> Result<(), FarmError> {
        match self.status {
            FarmStatus::Archived | FarmStatus::Suspended => {
                Err(FarmError::transition(self.status, "activate"))
            }
            _ => {
                self.set_status(FarmStatus::Active, now);
                Ok(())
            }
        }
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) -> Result<(), FarmError> {
        if self.status.is_terminal() {
            return Err(FarmError::transition(self.status, "deactivate"));
        }
        self.set_status(FarmStatus::Inactive, now);
        Ok(())
    }

    pub fn suspend(&mut self, now: DateTime<Utc>) -> Result<(), FarmError> {
        if self.status.is_terminal() {
            return Err(FarmError::transition(self.status, "suspend"));
        }
        self.set_status(FarmStatus::Suspended, now);
        Ok(())
    }

    /// Lift a suspension straight back to `Active`. `activate` refuses suspended farms.
    pub fn reinstate(&mut self, now: DateTime<Utc>) -> Result<(), FarmError> {
        if self.status != FarmStatus::Suspended {
            return Err(FarmError::transition(self.status, "reinstate"));
        }
        self.set_status(FarmStatus::Active, now);
        Ok(())
    }

    pub fn begin_inspection(&mut self, now: DateTime<Utc>) -> Result<(), FarmError> {
        match self.status {
            FarmStatus::Archived | FarmStatus::Suspended => {
                Err(FarmError::transition(self.status, "inspect"))
            }
            _ => {
                self.set_status(FarmStatus::UnderInspection, now);
                Ok(())
            }
        }
    }

    /// Terminal transition. Repeated calls keep the first deletion timestamp.
    pub fn archive(&mut self, now: DateTime<Utc>) {
        self.status = FarmStatus::Archived;
        self.deleted = true;
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Raw soft-delete flag. The deletion timestamp is left to `on_update`.
    pub fn set_deleted(&mut self, deleted: bool, now: DateTime<Utc>) -> Result<(), FarmError> {
        if !deleted && self.status.is_terminal() {
            return Err(FarmError::transition(self.status, "restore"));
        }
        if self.deleted != deleted {
            self.deleted = deleted;
            self.touch(now);
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == FarmStatus::Active
    }

    pub fn is_operational(&self) -> bool {
        self.status.is_operational()
    }

    // =========================================================================
    // CROP TYPES
    // =========================================================================

    pub fn add_crop_type(
        &mut self,
        crop_type: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, FarmError> {
        let added = self.crop_types.add(crop_type)?;
        if added {
            self.touch(now);
        }
        Ok(added)
    }

    pub fn remove_crop_type(&mut self, crop_type: &str, now: DateTime<Utc>) -> bool {
        let removed = self.crop_types.remove(crop_type);
        if removed {
            self.touch(now);
        }
        removed
    }

    pub fn grows_crop(&self, crop_type: &str) -> bool {
        self.crop_types.contains(crop_type)
    }

    pub fn crop_type_count(&self) -> usize {
        self.crop_types.len()
    }

    // =========================================================================
    // COORDINATES
    // =========================================================================

    pub fn update_gps_coordinates(
        &mut self,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<(), FarmError> {
        self.coordinates = Some(GpsCoordinates::new(latitude, longitude)?);
        self.touch(now);
        Ok(())
    }

    pub fn clear_gps_coordinates(&mut self, now: DateTime<Utc>) {
        if self.coordinates.take().is_some() {
            self.touch(now);
        }
    }

    pub fn has_gps_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    // =========================================================================
    // DESCRIPTIVE ATTRIBUTES
    // =========================================================================

    pub fn is_organic_certified(&self) -> bool {
        self.details
            .certification
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains("organic"))
    }

    pub fn rename(&mut self, name: &str, now: DateTime<Utc>) -> Result<(), FarmError> {
        self.name = validate_name(name)?;
        self.touch(now);
        Ok(())
    }

    pub fn relocate(&mut self, location: &str, now: DateTime<Utc>) -> Result<(), FarmError> {
        self.location = validate_location(location)?;
        self.touch(now);
        Ok(())
    }

    pub fn resize(
        &mut self,
        size_in_acres: Decimal,
        now: DateTime<Utc>,
    ) -> Result<(), FarmError> {
        self.size_in_acres = validate_size_in_acres(size_in_acres)?;
        self.touch(now);
        Ok(())
    }

    pub fn update_details(&mut self, details: FarmDetails, now: DateTime<Utc>) {
        self.details = details;
        self.touch(now);
    }

    /// Apply several field changes at once. Nothing changes unless every field is valid.
    pub fn apply_update(
        &mut self,
        update: FarmUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FarmError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let location = update.location.as_deref().map(validate_location).transpose()?;
        let size = update.size_in_acres.map(validate_size_in_acres).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(size) = size {
            self.size_in_acres = size;
        }
        if let Some(details) = update.details {
            self.details = details;
        }
        self.touch(now);
        Ok(())
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn farmer_id(&self) -> Uuid {
        self.farmer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn size_in_acres(&self) -> Decimal {
        self.size_in_acres
    }

    pub fn crop_types(&self) -> &CropTypes {
        &self.crop_types
    }

    pub fn status(&self) -> FarmStatus {
        self.status
    }

    pub fn coordinates(&self) -> Option<GpsCoordinates> {
        self.coordinates
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude())
    }

    pub fn details(&self) -> &FarmDetails {
        &self.details
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Database model for farm
#[derive(Debug, Clone, FromRow)]
pub struct FarmRow {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub name: String,
    pub location: String,
    pub size_in_acres: Decimal,
    pub crop_types: Vec<String>,
    pub status: FarmStatus,
    pub soil_type: Option<String>,
    pub irrigation_type: Option<IrrigationType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub certification: Option<String>,
    pub water_source: Option<String>,
    pub description: Option<String>,
    pub average_rainfall: Option<Decimal>,
    pub elevation: Option<Decimal>,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<FarmRow> for Farm {
    type Error = FarmError;

    /// Rehydrate a stored farm. Stored values are trusted apart from the
    /// coordinate pairing and crop normalization, which the type enforces.
    fn try_from(row: FarmRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            farmer_id: row.farmer_id,
            name: row.name,
            location: row.location,
            size_in_acres: row.size_in_acres,
            crop_types: CropTypes::from_values(row.crop_types)?,
            status: row.status,
            coordinates: GpsCoordinates::from_parts(row.latitude, row.longitude)?,
            details: FarmDetails {
                soil_type: row.soil_type,
                irrigation_type: row.irrigation_type,
                contact_number: row.contact_number,
                email: row.email,
                certification: row.certification,
                water_source: row.water_source,
                description: row.description,
                average_rainfall: row.average_rainfall,
                elevation: row.elevation,
            },
            registered_at: row.registered_at,
            updated_at: row.updated_at,
            deleted: row.deleted,
            deleted_at: row.deleted_at,
        })
    }
}

impl From<&Farm> for FarmRow {
    fn from(farm: &Farm) -> Self {
        let details = farm.details.clone();
        Self {
            id: farm.id,
            farmer_id: farm.farmer_id,
            name: farm.name.clone(),
            location: farm.location.clone(),
            size_in_acres: farm.size_in_acres,
            crop_types: farm.crop_types.as_slice().to_vec(),
            status: farm.status,
            soil_type: details.soil_type,
            irrigation_type: details.irrigation_type,
            latitude: farm.latitude(),
            longitude: farm.longitude(),
            contact_number: details.contact_number,
            email: details.email,
            certification: details.certification,
            water_source: details.water_source,
            description: details.description,
            average_rainfall: details.average_rainfall,
            elevation: details.elevation,
            registered_at: farm.registered_at,
            updated_at: farm.updated_at,
            deleted: farm.deleted,
            deleted_at: farm.deleted_at,
        }
    }
}
