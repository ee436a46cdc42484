use std::path::{Path, PathBuf};

use listing_model::Surgeon;

/// "{last}_{first}.pdf" with path separators and control characters replaced.
pub fn listing_file_name(surgeon: &Surgeon) -> String {
    let stem: String = format!("{}_{}", surgeon.last_name, surgeon.first_name)
        .chars()
        .map(|ch| {
            if ch == '/' || ch == '\\' || ch.is_control() {
                '_'
            } else {
                ch
            }
        })
        .collect();
    format!("{stem}.pdf")
}

pub fn listing_path(output_dir: &Path, surgeon: &Surgeon) -> PathBuf {
    output_dir.join(listing_file_name(surgeon))
}
