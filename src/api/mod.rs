//! Request extraction, pagination and response bodies shared by the routes

pub mod extract;
pub mod pagination;
pub mod response;

pub use extract::{JsonBody, PathParam};
pub use pagination::{paginate, PageQuery};
