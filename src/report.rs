//! Console report lines for the `analyze` and `thumbnails` commands.
//!
//! Purely informational; nothing parses this output.

use std::path::Path;

use crate::error::ThumbnailError;
use crate::inventory::InventoryEntry;
use crate::thumbnail::{BatchSummary, CompressionSettings, ScaleFactor, ThumbnailReport};

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Width of the rule printed above the batch summary.
pub const RULE_WIDTH: usize = 90;

/// `Found N images in 'DIR'`
pub fn found_images(count: usize, dir: &Path) -> String {
    format!("Found {} images in '{}'", count, dir.display())
}

/// `NAME HEIGHTxWIDTH` or `NAME ERROR: reason`
pub fn inventory_line(entry: &InventoryEntry) -> String {
    match &entry.dimensions {
        Ok(dims) => format!("{} {}", entry.name, dims),
        Err(e) => format!("{} ERROR: {}", entry.name, e),
    }
}

/// Lines printed before a thumbnail batch starts.
pub fn batch_header(
    count: usize,
    dir: &Path,
    scale: ScaleFactor,
    settings: &CompressionSettings,
) -> Vec<String> {
    vec![
        found_images(count, dir),
        format!(
            "Generating thumbnails at {}x resolution ({:.2}% area)...",
            scale.get(),
            scale.area_ratio() * 100.0
        ),
        format!(
            "Target size: ~{:.1}KB per image",
            settings.target_bytes as f64 / KIB
        ),
    ]
}

/// One line for a generated thumbnail.
pub fn thumbnail_line(report: &ThumbnailReport) -> String {
    format!(
        "✓ {:<30} {:>9} → {:>9} | {:6.1}KB → {:5.1}KB ({:.1}x smaller, {:.0}% reduced)",
        report.name,
        report.original_dimensions.to_string(),
        report.thumbnail_dimensions.to_string(),
        report.original_bytes as f64 / KIB,
        report.final_bytes as f64 / KIB,
        report.compression_ratio(),
        report.size_reduction_percent(),
    )
}

/// One line for a file that could not be processed.
pub fn failure_line(name: &str, error: &ThumbnailError) -> String {
    format!("✗ {}: ERROR - {}", name, error)
}

/// Closing summary for a batch.
pub fn batch_summary(summary: &BatchSummary, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        format!(
            "Generated {} thumbnails in '{}'",
            summary.generated(),
            output_dir.display()
        ),
    ];

    if let (Some(average), Some(saved)) =
        (summary.average_compression(), summary.space_saved_percent())
    {
        lines.push(format!(
            "Total original size: {:.1}MB",
            summary.total_original_bytes() as f64 / MIB
        ));
        lines.push(format!(
            "Total thumbnail size: {:.1}MB",
            summary.total_final_bytes() as f64 / MIB
        ));
        lines.push(format!("Average compression: {:.1}x smaller", average));
        lines.push(format!("Space saved: {:.0}%", saved));
    }

    lines
}
