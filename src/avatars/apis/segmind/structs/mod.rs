pub mod segmind_generate_response;
