pub mod generate_avatar_dto;
