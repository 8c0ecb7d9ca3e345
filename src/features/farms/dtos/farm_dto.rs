use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::farms::errors::FarmError;
use crate::features::farms::models::{
    self, CropTypes, Farm, FarmDetails, FarmStatus, FarmUpdate, GpsCoordinates, IrrigationType,
    NewFarm,
};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::CONTACT_NUMBER_REGEX;

fn validate_size_in_acres(size: &Decimal) -> Result<(), ValidationError> {
    models::validate_size_in_acres(*size)
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("size_in_acres")
                .with_message("Size in acres must be greater than 0.01 and at most 100000".into())
        })
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative")
            .with_message("Value must not be negative".into()));
    }
    Ok(())
}

fn validate_crop_types(crops: &Vec<String>) -> Result<(), ValidationError> {
    if crops.iter().any(|c| c.trim().is_empty()) {
        return Err(ValidationError::new("crop_types")
            .with_message("Crop types must not contain blank entries".into()));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Value must not be blank".into()));
    }
    Ok(())
}

fn validate_coordinate_pair(dto: &CreateFarmDto) -> Result<(), ValidationError> {
    if dto.latitude.is_some() != dto.longitude.is_some() {
        return Err(ValidationError::new("coordinates")
            .with_message("Latitude and longitude must be provided together".into()));
    }
    Ok(())
}

fn validate_clear_fields(dto: &UpdateFarmDto) -> Result<(), ValidationError> {
    if dto.clear.iter().any(|field| dto.sets(*field)) {
        return Err(ValidationError::new("clear")
            .with_message("A field cannot be both set and cleared".into()));
    }
    Ok(())
}

/// Descriptive attributes that an update can reset to empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FarmDetailField {
    SoilType,
    IrrigationType,
    ContactNumber,
    Email,
    Certification,
    WaterSource,
    Description,
    AverageRainfall,
    Elevation,
}

/// Request DTO for registering a farm
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_coordinate_pair"))]
pub struct CreateFarmDto {
    /// Owner identity from the identity service. Not checked for existence here.
    pub farmer_id: Uuid,

    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 500, message = "Location must be 1-500 characters"),
        custom(function = "validate_not_blank")
    )]
    pub location: String,

    #[validate(custom(function = "validate_size_in_acres"))]
    pub size_in_acres: Decimal,

    #[validate(custom(function = "validate_crop_types"))]
    pub crop_types: Option<Vec<String>>,

    pub status: Option<FarmStatus>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,

    #[validate(length(max = 100, message = "Soil type must not exceed 100 characters"))]
    pub soil_type: Option<String>,

    pub irrigation_type: Option<IrrigationType>,

    #[validate(regex(
        path = *CONTACT_NUMBER_REGEX,
        message = "Contact number must be 7-14 digits with an optional leading +"
    ))]
    pub contact_number: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "Certification must not exceed 100 characters"))]
    pub certification: Option<String>,

    #[validate(length(max = 100, message = "Water source must not exceed 100 characters"))]
    pub water_source: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_non_negative"))]
    pub average_rainfall: Option<Decimal>,

    pub elevation: Option<Decimal>,
}

impl TryFrom<CreateFarmDto> for NewFarm {
    type Error = FarmError;

    fn try_from(dto: CreateFarmDto) -> Result<Self, Self::Error> {
        Ok(NewFarm {
            farmer_id: dto.farmer_id,
            name: dto.name,
            location: dto.location,
            size_in_acres: dto.size_in_acres,
            crop_types: dto.crop_types,
            status: dto.status,
            coordinates: GpsCoordinates::from_parts(dto.latitude, dto.longitude)?,
            details: FarmDetails {
                soil_type: dto.soil_type,
                irrigation_type: dto.irrigation_type,
                contact_number: dto.contact_number,
                email: dto.email,
                certification: dto.certification,
                water_source: dto.water_source,
                description: dto.description,
                average_rainfall: dto.average_rainfall,
                elevation: dto.elevation,
            },
        })
    }
}

/// Request DTO for updating farm fields. Absent fields are left unchanged;
/// fields named in `clear` are emptied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_clear_fields"))]
pub struct UpdateFarmDto {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 500, message = "Location must be 1-500 characters"),
        custom(function = "validate_not_blank")
    )]
    pub location: Option<String>,

    #[validate(custom(function = "validate_size_in_acres"))]
    pub size_in_acres: Option<Decimal>,

    #[validate(length(max = 100, message = "Soil type must not exceed 100 characters"))]
    pub soil_type: Option<String>,

    pub irrigation_type: Option<IrrigationType>,

    #[validate(regex(
        path = *CONTACT_NUMBER_REGEX,
        message = "Contact number must be 7-14 digits with an optional leading +"
    ))]
    pub contact_number: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "Certification must not exceed 100 characters"))]
    pub certification: Option<String>,

    #[validate(length(max = 100, message = "Water source must not exceed 100 characters"))]
    pub water_source: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_non_negative"))]
    pub average_rainfall: Option<Decimal>,

    pub elevation: Option<Decimal>,

    #[serde(default)]
    pub clear: Vec<FarmDetailField>,
}

impl UpdateFarmDto {
    fn sets(&self, field: FarmDetailField) -> bool {
        match field {
            FarmDetailField::SoilType => self.soil_type.is_some(),
            FarmDetailField::IrrigationType => self.irrigation_type.is_some(),
            FarmDetailField::ContactNumber => self.contact_number.is_some(),
            FarmDetailField::Email => self.email.is_some(),
            FarmDetailField::Certification => self.certification.is_some(),
            FarmDetailField::WaterSource => self.water_source.is_some(),
            FarmDetailField::Description => self.description.is_some(),
            FarmDetailField::AverageRainfall => self.average_rainfall.is_some(),
            FarmDetailField::Elevation => self.elevation.is_some(),
        }
    }

    fn touches_details(&self) -> bool {
        !self.clear.is_empty()
            || self.soil_type.is_some()
            || self.irrigation_type.is_some()
            || self.contact_number.is_some()
            || self.email.is_some()
            || self.certification.is_some()
            || self.water_source.is_some()
            || self.description.is_some()
            || self.average_rainfall.is_some()
            || self.elevation.is_some()
    }

    /// Merge the supplied fields over the farm's current details, then empty
    /// the cleared ones.
    pub fn into_update(self, current: &FarmDetails) -> FarmUpdate {
        if !self.touches_details() {
            return FarmUpdate {
                name: self.name,
                location: self.location,
                size_in_acres: self.size_in_acres,
                details: None,
            };
        }

        let mut details = FarmDetails {
            soil_type: self.soil_type.or_else(|| current.soil_type.clone()),
            irrigation_type: self.irrigation_type.or(current.irrigation_type),
            contact_number: self
                .contact_number
                .or_else(|| current.contact_number.clone()),
            email: self.email.or_else(|| current.email.clone()),
            certification: self.certification.or_else(|| current.certification.clone()),
            water_source: self.water_source.or_else(|| current.water_source.clone()),
            description: self.description.or_else(|| current.description.clone()),
            average_rainfall: self.average_rainfall.or(current.average_rainfall),
            elevation: self.elevation.or(current.elevation),
        };
        for field in self.clear {
            match field {
                FarmDetailField::SoilType => details.soil_type = None,
                FarmDetailField::IrrigationType => details.irrigation_type = None,
                FarmDetailField::ContactNumber => details.contact_number = None,
                FarmDetailField::Email => details.email = None,
                FarmDetailField::Certification => details.certification = None,
                FarmDetailField::WaterSource => details.water_source = None,
                FarmDetailField::Description => details.description = None,
                FarmDetailField::AverageRainfall => details.average_rainfall = None,
                FarmDetailField::Elevation => details.elevation = None,
            }
        }

        FarmUpdate {
            name: self.name,
            location: self.location,
            size_in_acres: self.size_in_acres,
            details: Some(details),
        }
    }
}

/// Request DTO for setting a farm's position
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGpsCoordinatesDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Filters for listing farms
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmListQuery {
    pub farmer_id: Option<Uuid>,
    pub status: Option<FarmStatus>,
    /// Matched after crop normalization, so "Wheat" finds "wheat"
    pub crop_type: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl FarmListQuery {
    pub fn normalized_crop_type(&self) -> Option<String> {
        self.crop_type.as_deref().and_then(CropTypes::normalize)
    }
}

/// Response DTO for farm
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmResponseDto {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub name: String,
    pub location: String,
    pub size_in_acres: Decimal,
    pub crop_types: Vec<String>,
    pub status: FarmStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub details: FarmDetails,
    pub organic_certified: bool,
    pub operational: bool,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Farm> for FarmResponseDto {
    fn from(farm: Farm) -> Self {
        Self {
            id: farm.id(),
            farmer_id: farm.farmer_id(),
            name: farm.name().to_string(),
            location: farm.location().to_string(),
            size_in_acres: farm.size_in_acres(),
            crop_types: farm.crop_types().as_slice().to_vec(),
            status: farm.status(),
            latitude: farm.latitude(),
            longitude: farm.longitude(),
            details: farm.details().clone(),
            organic_certified: farm.is_organic_certified(),
            operational: farm.is_operational(),
            registered_at: farm.registered_at(),
            updated_at: farm.updated_at(),
            deleted: farm.is_deleted(),
            deleted_at: farm.deleted_at(),
        }
    }
}
