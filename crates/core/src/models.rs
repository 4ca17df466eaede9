pub mod appointment;
pub mod service;
pub mod technician;
pub mod time_slot;
