pub mod app;
pub mod zone;
