/// Initializes the global logger.
///
/// `Info` by default, `Debug` when `verbose` is set. `RUST_LOG` still overrides
/// both through env_logger's own parsing.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
