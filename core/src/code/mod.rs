pub mod clock;
pub mod digest;
pub mod rolling;

pub use clock::ClockSource;
pub use digest::{generate_hash, make_code, sha256, sha256_hex};
pub use rolling::{make_rolling_code, rolling_window, RollingCodeGenerator};
