pub mod mql5;

pub use mql5::{Fetcher, Mql5Client};
