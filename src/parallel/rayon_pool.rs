// rayon global pool used by the elimination loop

/// Build the global rayon pool with `threads` workers, or one per CPU.
///
/// The global pool can only be built once per process; later calls leave it
/// alone. Returns the number of threads the pool actually has.
pub fn init_pool(threads: Option<usize>) -> usize {
    let wanted = threads.unwrap_or_else(num_cpus::get).max(1);
    if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(wanted).build_global() {
        log::debug!("rayon pool already initialised: {e}");
    }
    rayon::current_num_threads()
}
