pub mod params_dto;
