pub mod generate_avatar_response;
