pub mod database;
pub mod entities;
pub mod memory;
pub mod repositories;
pub mod traits;
pub mod webhook;
