pub mod logging;
pub mod multipart;
