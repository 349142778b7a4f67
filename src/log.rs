//! Logging macros shared by the core modules.
//!
//! - `firmware` feature: forwards to defmt (RTT transport)
//! - host tests: `println!`
//! - host non-test builds: no-op

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "firmware")]
        defmt::info!($($arg)*);
        #[cfg(all(not(feature = "firmware"), test))]
        std::println!("[INFO] {}", format_args!($($arg)*));
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "firmware")]
        defmt::warn!($($arg)*);
        #[cfg(all(not(feature = "firmware"), test))]
        std::println!("[WARN] {}", format_args!($($arg)*));
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "firmware")]
        defmt::debug!($($arg)*);
        #[cfg(all(not(feature = "firmware"), test))]
        std::println!("[DEBUG] {}", format_args!($($arg)*));
    }};
}
