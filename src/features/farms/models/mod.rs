mod coordinates;
mod crop_types;
mod farm;
mod farm_status;

pub use coordinates::{GpsCoordinates, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
pub use crop_types::CropTypes;
pub use farm::{
    size_lower_bound, size_upper_bound, validate_location, validate_name, validate_size_in_acres,
    Farm, FarmDetails, FarmRow, FarmUpdate, NewFarm, LOCATION_MAX_CHARS, NAME_MAX_CHARS,
    NAME_MIN_CHARS,
};
pub use farm_status::{FarmStatus, IrrigationType};
