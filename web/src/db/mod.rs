pub mod appointments_repository;
pub mod entities;
pub mod pool;
pub mod slots_repository;
pub mod users_repository;
