pub mod relative_variation;
