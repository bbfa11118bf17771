//! Game implementations built on the core types and `rules::Match`.

pub mod pig;
