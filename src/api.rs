//! The data-loading layer: the three collections a deployment would
//! normally receive from a server, baked in as static fixtures.

pub mod categories;
pub mod products;
pub mod users;
