pub mod expire_old_advisories;

pub use expire_old_advisories::{expire_old_advisories, expire_old_advisories_at};
