//! Dashboard screen
//!
//! The upload → analyze → results → export flow. All pipeline state lives
//! in [`ScanSession`]; this module renders it and translates widget events
//! into session calls (in `handlers::dashboard`).

use std::path::PathBuf;

use iced::widget::{button, column, container, progress_bar, row, text, Space};
use iced::{Alignment, Element, Length};

use neuroscan_core::config::{AppConfig, ProfileConfig};
use neuroscan_core::{ScanSession, SessionPhase, ViewerSettings};

use super::theme;
use super::viewer_panel;

/// Dashboard tabs; Results and Export unlock once a result exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Upload,
    Results,
    Export,
}

/// State for the dashboard screen
pub struct DashboardScreen {
    /// The simulated pipeline
    pub session: ScanSession,
    /// Display controls for the result viewer
    pub viewer: ViewerSettings,
    /// Active tab
    pub active_tab: DashboardTab,
    /// Sidebar visibility
    pub sidebar_open: bool,
    /// Result panel maximized over the whole content area
    pub fullscreen: bool,
    /// Status line shown under the content
    pub status: String,
}

/// Messages for dashboard interaction
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    /// Open the native scan picker
    PickScan,
    /// Picker closed (None = cancelled)
    ScanPicked(Option<PathBuf>),
    /// "Analyze Scan" pressed
    Analyze,
    /// "Remove" pressed
    RemoveScan,
    /// Tab selected
    SelectTab(DashboardTab),
    ToggleSidebar,
    ToggleFullscreen,
    /// Viewer controls
    ToggleOriginal(bool),
    ToggleAnnotations(bool),
    ZoomIn,
    ZoomOut,
    SetZoom(u16),
    SetContrast(u16),
    SetBrightness(u16),
    ResetViewer,
    /// Export the report as JSON (opens the save dialog)
    ExportReport,
    /// Save dialog closed (None = cancelled)
    ExportPathPicked(Option<PathBuf>),
    /// Back to the landing screen
    Logout,
}

impl DashboardScreen {
    /// Create the dashboard with viewer defaults from config
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: ScanSession::with_steps(
                config.simulation.upload_step,
                config.simulation.processing_step,
            ),
            viewer: ViewerSettings::from_config(&config.display),
            active_tab: DashboardTab::Upload,
            sidebar_open: true,
            fullscreen: false,
            status: "Ready. Select an MRI scan to begin.".to_string(),
        }
    }

    /// Build the dashboard view
    pub fn view<'a>(&'a self, profile: &'a ProfileConfig) -> Element<'a, DashboardMessage> {
        let header = self.view_header(profile);

        let content: Element<'a, DashboardMessage> = if self.fullscreen {
            // Maximized result panel replaces everything below the header
            viewer_panel::view(&self.viewer, &self.session, true)
        } else {
            let main = column![self.view_tabs(), self.view_active_tab()]
                .spacing(16)
                .padding(20)
                .width(Length::Fill);

            if self.sidebar_open {
                row![self.view_sidebar(), main].into()
            } else {
                main.into()
            }
        };

        let status_bar = container(text(&self.status).size(12).color(theme::TEXT_DIM)).padding(8);

        column![header, content, Space::new().height(Length::Fill), status_bar]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Header with brand, clinician identity, and logout
    fn view_header<'a>(&'a self, profile: &'a ProfileConfig) -> Element<'a, DashboardMessage> {
        let toggle = button(text(if self.sidebar_open { "×" } else { "≡" }).size(18))
            .style(button::text)
            .on_press(DashboardMessage::ToggleSidebar);

        row![
            toggle,
            text("NeuroScan AI").size(20),
            Space::new().width(Length::Fill),
            column![
                text(&profile.clinician_name).size(14),
                text(&profile.institution).size(11).color(theme::TEXT_DIM),
            ]
            .align_x(Alignment::End),
            button(text("Log out").size(13))
                .style(button::secondary)
                .on_press(DashboardMessage::Logout),
        ]
        .spacing(16)
        .align_y(Alignment::Center)
        .padding(14)
        .into()
    }

    /// Sidebar with navigation placeholders and recent scans
    fn view_sidebar(&self) -> Element<'_, DashboardMessage> {
        let nav = column![
            button(text("Upload & Analyze").size(14))
                .style(theme::accent_button)
                .width(Length::Fill)
                .on_press(DashboardMessage::SelectTab(DashboardTab::Upload)),
            button(text("My Scans").size(14))
                .style(button::text)
                .width(Length::Fill),
            button(text("Analytics").size(14))
                .style(button::text)
                .width(Length::Fill),
            button(text("Settings").size(14))
                .style(button::text)
                .width(Length::Fill),
        ]
        .spacing(4);

        let recent: Element<'_, DashboardMessage> = column![
            text("RECENT SCANS").size(11).color(theme::TEXT_DIM),
            recent_scan_row("Scan #1000"),
            recent_scan_row("Scan #1001"),
            recent_scan_row("Scan #1002"),
        ]
        .spacing(8)
        .into();

        let help = container(
            column![
                text("Need Help?").size(14),
                text("Our support team is available 24/7.")
                    .size(12)
                    .color(theme::TEXT_DIM),
            ]
            .spacing(6),
        )
        .style(theme::panel)
        .padding(12)
        .width(Length::Fill);

        container(
            column![nav, Space::new().height(24), recent, Space::new().height(Length::Fill), help]
                .spacing(8),
        )
        .padding(16)
        .width(230)
        .height(Length::Fill)
        .into()
    }

    /// Tab strip; Results/Export enabled only once a result exists
    fn view_tabs(&self) -> Element<'_, DashboardMessage> {
        let has_result = self.session.report().is_some();

        let tab = |label: &'static str, target: DashboardTab, enabled: bool| {
            let style = if self.active_tab == target {
                theme::accent_button
            } else {
                button::secondary
            };
            let mut b = button(text(label).size(14)).style(style).padding([8, 16]);
            if enabled {
                b = b.on_press(DashboardMessage::SelectTab(target));
            }
            b
        };

        row![
            tab("Upload & Analyze", DashboardTab::Upload, true),
            tab("Results", DashboardTab::Results, has_result),
            tab("Export", DashboardTab::Export, has_result),
        ]
        .spacing(8)
        .into()
    }

    fn view_active_tab(&self) -> Element<'_, DashboardMessage> {
        match self.active_tab {
            DashboardTab::Upload => self.view_upload_tab(),
            DashboardTab::Results => self.view_results_tab(),
            DashboardTab::Export => self.view_export_tab(),
        }
    }

    /// Upload tab: drop zone / progress / analyze controls, plus the result
    /// panel once the cycle completes
    fn view_upload_tab(&self) -> Element<'_, DashboardMessage> {
        let zone_content: Element<'_, DashboardMessage> = match self.session.scan() {
            None => column![
                text("Drag & Drop MRI Scan").size(18),
                text("or click to browse files").size(13).color(theme::TEXT_DIM),
                text("Supports DICOM, NIfTI, JPEG, and PNG formats")
                    .size(12)
                    .color(theme::TEXT_DIM),
                button(text("Select File").size(14))
                    .style(theme::accent_button)
                    .padding([10, 20])
                    .on_press(DashboardMessage::PickScan),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .into(),
            Some(scan) => {
                let file_card = row![
                    container(text(scan.kind().label()).size(12))
                        .style(theme::badge)
                        .padding([4, 10]),
                    column![
                        text(&scan.file_name).size(16),
                        text(scan.size_display()).size(12).color(theme::TEXT_DIM),
                    ]
                    .spacing(2),
                ]
                .spacing(12)
                .align_y(Alignment::Center);

                let stage: Element<'_, DashboardMessage> = match self.session.phase() {
                    SessionPhase::Uploading => self.view_progress(
                        "Uploading...",
                        self.session.upload_progress(),
                        None,
                    ),
                    SessionPhase::Processing | SessionPhase::Finalizing => self.view_progress(
                        "Processing...",
                        self.session.processing_progress(),
                        Some("Analyzing scan using AI algorithm"),
                    ),
                    _ => row![
                        button(text("Analyze Scan").size(14))
                            .style(theme::accent_button)
                            .padding([10, 20])
                            .on_press(DashboardMessage::Analyze),
                        button(text("Remove").size(14))
                            .style(button::secondary)
                            .padding([10, 20])
                            .on_press(DashboardMessage::RemoveScan),
                    ]
                    .spacing(12)
                    .into(),
                };

                column![file_card, stage]
                    .spacing(18)
                    .align_x(Alignment::Center)
                    .into()
            }
        };

        let drop_zone = container(zone_content)
            .style(theme::drop_zone)
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill);

        if self.session.report().is_some() {
            column![
                drop_zone,
                viewer_panel::view(&self.viewer, &self.session, false),
            ]
            .spacing(16)
            .into()
        } else {
            drop_zone.into()
        }
    }

    /// Shared progress block for the upload and processing stages
    fn view_progress(
        &self,
        label: &'static str,
        percent: u8,
        caption: Option<&'static str>,
    ) -> Element<'_, DashboardMessage> {
        let mut col = column![
            row![
                text(label).size(13),
                Space::new().width(Length::Fill),
                text(format!("{}%", percent)).size(13),
            ],
            progress_bar(0.0..=100.0, percent as f32)
                .style(theme::progress)
                .girth(8),
        ]
        .spacing(6)
        .width(360);

        if let Some(caption) = caption {
            col = col.push(
                text(caption)
                    .size(12)
                    .color(theme::TEXT_DIM)
                    .width(Length::Fill)
                    .align_x(Alignment::Center),
            );
        }
        col.into()
    }

    /// Results tab: detailed characteristics, classification, slices
    fn view_results_tab(&self) -> Element<'_, DashboardMessage> {
        let Some(report) = self.session.report() else {
            return text("No analysis yet").color(theme::TEXT_DIM).into();
        };

        let characteristics = container(
            column![
                text("Tumor Characteristics").size(15),
                detail_row("Size", format!("{} cm²", report.size_cm2)),
                detail_row("Volume", format!("{} cm³", report.volume_cm3)),
                detail_row("Shape", report.characteristics.shape.clone()),
                detail_row("Margins", report.characteristics.margins.clone()),
                detail_row("Enhancement", report.characteristics.enhancement.clone()),
                detail_row("Necrosis", report.characteristics.necrosis.clone()),
            ]
            .spacing(8),
        )
        .style(theme::panel)
        .padding(16)
        .width(Length::Fill);

        let likelihood_rows: Vec<Element<'_, DashboardMessage>> = report
            .likelihoods
            .iter()
            .map(|l| {
                column![
                    row![
                        text(&l.name).size(13),
                        Space::new().width(Length::Fill),
                        text(format!("{}%", l.percent)).size(13),
                    ],
                    progress_bar(0.0..=100.0, l.percent as f32)
                        .style(theme::progress)
                        .girth(6),
                ]
                .spacing(4)
                .into()
            })
            .collect();

        let classification = container(
            column![text("AI Classification").size(15), column(likelihood_rows).spacing(10)]
                .spacing(12),
        )
        .style(theme::panel)
        .padding(16)
        .width(Length::Fill);

        let recommendation = container(
            column![
                text("AI Recommendation").size(15),
                text(&report.recommendation).size(13).color(theme::TEXT_DIM),
            ]
            .spacing(8),
        )
        .style(theme::panel)
        .padding(16)
        .width(Length::Fill);

        let slices = container(
            column![
                text("Multi-Slice View").size(15),
                viewer_panel::slice_strip(report),
            ]
            .spacing(12),
        )
        .style(theme::panel)
        .padding(16)
        .width(Length::Fill);

        column![
            row![characteristics, classification].spacing(16),
            recommendation,
            slices,
        ]
        .spacing(16)
        .into()
    }

    /// Export tab: the JSON report export does real work; the image and
    /// clinical format buttons are placeholders like the original site
    fn view_export_tab(&self) -> Element<'_, DashboardMessage> {
        let report_card = container(
            column![
                text("Structured Report").size(15),
                text("Export the full analysis as a JSON report.")
                    .size(12)
                    .color(theme::TEXT_DIM),
                button(text("Export JSON").size(13))
                    .style(theme::accent_button)
                    .padding([8, 16])
                    .on_press(DashboardMessage::ExportReport),
            ]
            .spacing(10),
        )
        .style(theme::panel)
        .padding(16)
        .width(Length::Fill);

        let placeholder_card = |title: &'static str, body: &'static str, labels: [&'static str; 3]| {
            container(
                column![
                    text(title).size(15),
                    text(body).size(12).color(theme::TEXT_DIM),
                    column(
                        labels
                            .into_iter()
                            .map(|l| {
                                button(text(l).size(13))
                                    .style(button::secondary)
                                    .padding([8, 16])
                                    .width(Length::Fill)
                                    .into()
                            })
                            .collect::<Vec<Element<'_, DashboardMessage>>>(),
                    )
                    .spacing(6),
                ]
                .spacing(10),
            )
            .style(theme::panel)
            .padding(16)
            .width(Length::Fill)
        };

        let note = container(
            text(
                "The analysis results are intended for research and educational \
                 purposes only. Clinical decisions should not be based solely on \
                 these results without proper medical consultation.",
            )
            .size(12)
            .color(theme::TEXT_DIM),
        )
        .style(theme::panel)
        .padding(14)
        .width(Length::Fill);

        column![
            row![
                report_card,
                placeholder_card(
                    "Image Files",
                    "Export the processed scan as an image file.",
                    ["PNG Format", "JPEG Format", "TIFF Format"],
                ),
                placeholder_card(
                    "Medical Formats",
                    "Export in standard medical imaging formats.",
                    ["DICOM Format", "NIfTI Format", "Raw Data"],
                ),
            ]
            .spacing(16),
            note,
        ]
        .spacing(16)
        .into()
    }
}

fn recent_scan_row(label: &'static str) -> Element<'static, DashboardMessage> {
    row![
        container(text("◉").size(14)).padding(4),
        text(label).size(13),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn detail_row(label: &'static str, value: String) -> Element<'static, DashboardMessage> {
    row![
        text(label).size(13).color(theme::TEXT_DIM),
        Space::new().width(Length::Fill),
        text(value).size(13),
    ]
    .into()
}
