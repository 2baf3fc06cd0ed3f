//! CLI-specific progress handling for bridge-triage
//!
//! Shows a byte progress bar while the inventory CSV is loaded.

use std::sync::Arc;

use bridge_triage::ProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar for inventory loading
pub fn create_progress_bar(total_size: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({percent}%)")
            .expect("Failed to create progress style")
            .progress_chars("#>-"),
    );
    pb
}

/// Progress bar wired to ingestion callbacks
pub struct ProgressManager {
    pub pb: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_size: u64, message: &str) -> Self {
        let pb = create_progress_bar(total_size);

        // Print initial message to stderr
        eprintln!("{message}");

        Self { pb }
    }

    /// Callback that advances the bar and finishes it once everything is read
    pub fn callback(&self) -> ProgressCallback {
        let pb = self.pb.clone();
        Arc::new(move |read, total| {
            if pb.length().unwrap_or(0) != total {
                pb.set_length(total);
            }
            pb.set_position(read);
            if read >= total {
                pb.finish_with_message("Inventory loaded");
            }
        })
    }
}
