//! Terminal setup and restoration

/// Install a panic hook that restores the terminal before the panic report
/// is printed, and records the panic in the log file.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
