//! Thread-pool setup for the `rayon` elimination path.
//!
//! Without the `rayon` feature the solver is purely sequential and
//! [`init_pool`] reports a single thread.

#[cfg(feature = "rayon")]
pub mod rayon_pool;
#[cfg(feature = "rayon")]
pub use rayon_pool::init_pool;

#[cfg(not(feature = "rayon"))]
pub fn init_pool(_threads: Option<usize>) -> usize {
    1
}
