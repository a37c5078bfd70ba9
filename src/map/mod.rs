// Map composition — uniform point lists for a map renderer.

pub mod marker;
pub mod points;
pub mod view;
