pub mod animal;
pub mod auth;
pub mod checkup;
pub mod dispatch;
pub mod history;
pub mod monitoring;
pub mod profile;
pub mod schema;
pub mod shared;
pub mod treatment;
pub mod vaccination;
pub mod vaccines;
