pub mod controller;
pub mod envy;
pub mod errors;
pub mod models;
pub mod router;
pub mod util;
