//! The canned analysis result
//!
//! The "AI" never runs; every completed cycle produces this fixture. Values
//! match the demo's marketing copy so the dashboard renders a convincing
//! summary. The report can be exported as pretty JSON, which is the one
//! export format that does real work - the image/DICOM export buttons are
//! visual placeholders.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of slices in the multi-slice strip
pub const SLICE_COUNT: u8 = 8;

/// 1-based slice index carrying the tumor annotation
pub const ANNOTATED_SLICE: u8 = 4;

/// Per-class likelihood line in the classification panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassLikelihood {
    pub name: String,
    pub percent: u8,
}

/// Morphology block of the detailed view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TumorCharacteristics {
    pub shape: String,
    pub margins: String,
    pub enhancement: String,
    pub necrosis: String,
}

/// Normalized annotation geometry (fractions of the image square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TumorAnnotation {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// The placeholder result substituted for genuine analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub tumor_detected: bool,
    pub probability_percent: u8,
    pub size_cm2: f32,
    pub volume_cm3: f32,
    pub location: String,
    pub classification: String,
    pub confidence: String,
    pub likelihoods: Vec<ClassLikelihood>,
    pub characteristics: TumorCharacteristics,
    pub recommendation: String,
    pub annotation: TumorAnnotation,
}

impl AnalysisReport {
    /// The static report every cycle produces
    pub fn placeholder() -> Self {
        Self {
            tumor_detected: true,
            probability_percent: 87,
            size_cm2: 3.2,
            volume_cm3: 4.7,
            location: "Right Temporal Lobe".to_string(),
            classification: "Glioblastoma (Suspected)".to_string(),
            confidence: "High (0.92)".to_string(),
            likelihoods: vec![
                ClassLikelihood {
                    name: "Glioblastoma".to_string(),
                    percent: 87,
                },
                ClassLikelihood {
                    name: "Meningioma".to_string(),
                    percent: 8,
                },
                ClassLikelihood {
                    name: "Astrocytoma".to_string(),
                    percent: 3,
                },
                ClassLikelihood {
                    name: "Other".to_string(),
                    percent: 2,
                },
            ],
            characteristics: TumorCharacteristics {
                shape: "Irregular".to_string(),
                margins: "Poorly Defined".to_string(),
                enhancement: "Heterogeneous".to_string(),
                necrosis: "Present".to_string(),
            },
            recommendation: "The analysis suggests a high probability of glioblastoma. \
                Further clinical correlation and histopathological confirmation is \
                recommended. Consider advanced imaging such as perfusion MRI or \
                spectroscopy for additional characterization."
                .to_string(),
            // Circle at (300, 250) r=80 in the original's 600x600 view box
            annotation: TumorAnnotation {
                center_x: 0.5,
                center_y: 250.0 / 600.0,
                radius: 80.0 / 600.0,
            },
        }
    }

    /// Write the report as pretty JSON, creating parent directories
    pub fn write_json(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Report exported to {:?}", path);
        Ok(())
    }
}

/// Errors from report export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fixture_values() {
        let report = AnalysisReport::placeholder();
        assert!(report.tumor_detected);
        assert_eq!(report.probability_percent, 87);
        assert!((report.size_cm2 - 3.2).abs() < f32::EPSILON);
        assert!((report.volume_cm3 - 4.7).abs() < f32::EPSILON);
        assert_eq!(report.location, "Right Temporal Lobe");
        assert_eq!(report.classification, "Glioblastoma (Suspected)");
        assert_eq!(report.confidence, "High (0.92)");

        let total: u32 = report.likelihoods.iter().map(|l| l.percent as u32).sum();
        assert_eq!(total, 100);
        assert_eq!(report.likelihoods[0].name, "Glioblastoma");
    }

    #[test]
    fn test_annotation_inside_unit_square() {
        let a = AnalysisReport::placeholder().annotation;
        assert!(a.center_x - a.radius > 0.0 && a.center_x + a.radius < 1.0);
        assert!(a.center_y - a.radius > 0.0 && a.center_y + a.radius < 1.0);
    }

    #[test]
    fn test_export_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("scan-report.json");

        let report = AnalysisReport::placeholder();
        report.write_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: AnalysisReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded, report);
    }
}
