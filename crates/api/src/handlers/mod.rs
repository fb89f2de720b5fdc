pub mod accommodation;
pub mod activity;
pub mod dashboard;
pub mod destination;
pub mod lookup;
pub mod trip;
pub mod user;
