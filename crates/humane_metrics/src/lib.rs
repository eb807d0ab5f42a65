pub mod signals;
pub mod utils;
