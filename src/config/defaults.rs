// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Logging, Paths};
use crate::consts::{DEFAULT_ANALYSIS_DIR, DEFAULT_LOG_FILTER};

pub fn default_paths() -> Paths {
    Paths {
        analysis_dir: default_analysis_dir(),
    }
}

pub fn default_analysis_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ANALYSIS_DIR)
}

pub fn default_logging() -> Logging {
    Logging {
        filter: default_log_filter(),
    }
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
