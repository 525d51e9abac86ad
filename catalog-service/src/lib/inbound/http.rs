pub mod authorization;
pub mod handlers;
pub mod router;
