pub mod slug;

pub use slug::{random_suffix, slugify, slugify_with_suffix};
