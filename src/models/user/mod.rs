pub mod links;
pub mod types;

pub use links::generate_map_url;
pub use types::{Address, Company, Geo, User};
