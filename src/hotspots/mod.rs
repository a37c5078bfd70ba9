// Topic hotspots — where a search term is being discussed, and how much.

pub mod aggregate;
pub mod highlight;
pub mod models;
