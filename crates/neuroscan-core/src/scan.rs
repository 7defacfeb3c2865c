//! Selected scan file handle
//!
//! A scan is whatever file the user picked or dropped. Nothing is read from
//! it; the demo only displays its name and size while the simulated pipeline
//! runs. The extension allowlist is declared for the file dialog filter but
//! file contents are never validated.

use std::path::{Path, PathBuf};

/// File extensions offered by the scan picker
///
/// DICOM, NIfTI (plain and gzipped), and common image formats.
pub const SCAN_EXTENSIONS: [&str; 6] = ["dcm", "nii", "gz", "jpg", "jpeg", "png"];

/// Rough file-kind classification derived from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    Dicom,
    Nifti,
    Image,
    Unknown,
}

impl ScanKind {
    /// Display label for the upload card
    pub fn label(&self) -> &'static str {
        match self {
            ScanKind::Dicom => "DICOM",
            ScanKind::Nifti => "NIfTI",
            ScanKind::Image => "Image",
            ScanKind::Unknown => "File",
        }
    }
}

/// Handle to the file the user selected for analysis
///
/// Created on pick or drop, replaced or cleared by user action, never
/// persisted. Lost on restart by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedScan {
    /// File name shown in the upload card
    pub file_name: String,
    /// Size in bytes, from filesystem metadata (0 if unavailable)
    pub size_bytes: u64,
    /// Source path, when the scan came from the picker or a drop
    pub path: Option<PathBuf>,
}

impl SelectedScan {
    /// Create a scan handle from a name and size (used by tests and drops
    /// where no metadata is available)
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            path: None,
        }
    }

    /// Create a scan handle from a filesystem path
    ///
    /// Reads the size from metadata; a missing or unreadable file still
    /// yields a handle with size 0, since the pipeline never opens it.
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "scan".to_string());

        let size_bytes = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                log::warn!("Could not read metadata for {:?}: {}", path, e);
                0
            }
        };

        Self {
            file_name,
            size_bytes,
            path: Some(path.to_path_buf()),
        }
    }

    /// Kind derived from the file extension
    pub fn kind(&self) -> ScanKind {
        let lower = self.file_name.to_lowercase();
        if lower.ends_with(".dcm") {
            ScanKind::Dicom
        } else if lower.ends_with(".nii") || lower.ends_with(".nii.gz") {
            ScanKind::Nifti
        } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") || lower.ends_with(".png") {
            ScanKind::Image
        } else {
            ScanKind::Unknown
        }
    }

    /// Human-readable size, e.g. "2.00 MB"
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(SelectedScan::new("scan.dcm", 0).kind(), ScanKind::Dicom);
        assert_eq!(SelectedScan::new("brain.nii", 0).kind(), ScanKind::Nifti);
        assert_eq!(SelectedScan::new("brain.nii.gz", 0).kind(), ScanKind::Nifti);
        assert_eq!(SelectedScan::new("slice.PNG", 0).kind(), ScanKind::Image);
        assert_eq!(SelectedScan::new("notes.txt", 0).kind(), ScanKind::Unknown);
    }

    #[test]
    fn test_size_display() {
        let scan = SelectedScan::new("scan.dcm", 2 * 1024 * 1024);
        assert_eq!(scan.size_display(), "2.00 MB");
    }

    #[test]
    fn test_from_missing_path_has_zero_size() {
        let scan = SelectedScan::from_path(Path::new("/nonexistent/scan.dcm"));
        assert_eq!(scan.file_name, "scan.dcm");
        assert_eq!(scan.size_bytes, 0);
        assert!(scan.path.is_some());
    }
}
