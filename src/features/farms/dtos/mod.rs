mod farm_dto;

pub use farm_dto::{
    CreateFarmDto, FarmDetailField, FarmListQuery, FarmResponseDto, UpdateFarmDto,
    UpdateGpsCoordinatesDto,
};
