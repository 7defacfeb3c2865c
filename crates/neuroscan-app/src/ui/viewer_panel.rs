//! Result viewer panel
//!
//! Renders the placeholder scan with the tumor annotation overlay and the
//! display controls (zoom, contrast, brightness, toggles). There is no real
//! image: the "scan" is a stylized slice drawn on a canvas, with the levels
//! applied as color transforms and the zoom as a scale factor.

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{button, column, container, row, slider, text, toggler, Space};
use iced::{Alignment, Color, Element, Length, Point, Rectangle, Theme};

use neuroscan_core::report::{AnalysisReport, TumorAnnotation, ANNOTATED_SLICE, SLICE_COUNT};
use neuroscan_core::viewer::{LEVEL_MAX, LEVEL_MIN, ZOOM_MAX, ZOOM_MIN};
use neuroscan_core::{ScanSession, ViewerSettings};

use super::dashboard::DashboardMessage;
use super::theme;

/// Build the result panel (badge, canvas, controls, summary)
pub fn view<'a>(
    viewer: &'a ViewerSettings,
    session: &'a ScanSession,
    fullscreen: bool,
) -> Element<'a, DashboardMessage> {
    let Some(report) = session.report() else {
        return text("No analysis yet").color(theme::TEXT_DIM).into();
    };

    let badge = container(text("Tumor Detected").size(12))
        .style(theme::badge)
        .padding([4, 10]);

    let title_row = row![
        text("Analysis Results").size(17),
        Space::new().width(Length::Fill),
        badge,
        button(text(if fullscreen { "Minimize" } else { "Maximize" }).size(12))
            .style(button::secondary)
            .on_press(DashboardMessage::ToggleFullscreen),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let scan_canvas = scan_view(
        viewer,
        report.annotation,
        viewer.show_annotations && !viewer.show_original,
        if fullscreen { 520.0 } else { 340.0 },
    );

    let original_toggle = button(
        text(if viewer.show_original { "Original" } else { "Processed" }).size(12),
    )
    .style(button::secondary)
    .on_press(DashboardMessage::ToggleOriginal(!viewer.show_original));

    let zoom_buttons = row![
        button(text("−").size(14))
            .style(button::secondary)
            .on_press(DashboardMessage::ZoomOut),
        button(text("+").size(14))
            .style(button::secondary)
            .on_press(DashboardMessage::ZoomIn),
        button(text("Reset").size(12))
            .style(button::secondary)
            .on_press(DashboardMessage::ResetViewer),
    ]
    .spacing(6);

    let image_column = column![
        scan_canvas,
        row![original_toggle, Space::new().width(Length::Fill), zoom_buttons]
            .align_y(Alignment::Center),
    ]
    .spacing(10);

    let summary = container(
        column![
            text("Analysis Summary").size(15),
            summary_row("Tumor Probability", format!("{}%", report.probability_percent)),
            summary_row("Tumor Size", format!("{} cm²", report.size_cm2)),
            summary_row("Location", report.location.clone()),
            summary_row("Classification", report.classification.clone()),
            summary_row("Confidence Score", report.confidence.clone()),
        ]
        .spacing(8),
    )
    .style(theme::panel)
    .padding(14)
    .width(Length::Fill);

    let sliders = column![
        level_slider("Contrast", viewer.contrast(), DashboardMessage::SetContrast),
        level_slider("Brightness", viewer.brightness(), DashboardMessage::SetBrightness),
        column![
            row![
                text("Zoom").size(13),
                Space::new().width(Length::Fill),
                text(format!("{}%", viewer.zoom())).size(12).color(theme::TEXT_DIM),
            ],
            slider(ZOOM_MIN..=ZOOM_MAX, viewer.zoom(), DashboardMessage::SetZoom).step(5u16),
        ]
        .spacing(4),
    ]
    .spacing(12);

    let annotations_toggle = toggler(viewer.show_annotations)
        .label("Show Annotations")
        .on_toggle(DashboardMessage::ToggleAnnotations)
        .size(18);

    let controls_column = column![summary, sliders, annotations_toggle]
        .spacing(16)
        .width(Length::FillPortion(1));

    container(
        column![
            title_row,
            row![
                container(image_column).width(Length::FillPortion(1)),
                controls_column,
            ]
            .spacing(20),
        ]
        .spacing(16),
    )
    .style(theme::panel)
    .padding(18)
    .width(Length::Fill)
    .into()
}

/// Row of slice thumbnails for the Results tab; the annotated slice carries
/// the overlay marker
pub fn slice_strip(report: &AnalysisReport) -> Element<'_, DashboardMessage> {
    let thumbs: Vec<Element<'_, DashboardMessage>> = (1..=SLICE_COUNT)
        .map(|i| {
            column![
                Canvas::new(ScanCanvas {
                    zoom: 100,
                    contrast: 50,
                    brightness: 50,
                    annotation: (i == ANNOTATED_SLICE).then_some(report.annotation),
                    seed: i,
                })
                .width(96)
                .height(96),
                text(format!("{}", i)).size(11).color(theme::TEXT_DIM),
            ]
            .spacing(4)
            .align_x(Alignment::Center)
            .into()
        })
        .collect();

    row(thumbs).spacing(10).into()
}

fn summary_row(label: &'static str, value: String) -> Element<'static, DashboardMessage> {
    row![
        text(label).size(13).color(theme::TEXT_DIM),
        Space::new().width(Length::Fill),
        text(value).size(13),
    ]
    .into()
}

fn level_slider(
    label: &'static str,
    value: u16,
    on_change: fn(u16) -> DashboardMessage,
) -> Element<'static, DashboardMessage> {
    column![
        row![
            text(label).size(13),
            Space::new().width(Length::Fill),
            text(format!("{}%", value)).size(12).color(theme::TEXT_DIM),
        ],
        slider(LEVEL_MIN..=LEVEL_MAX, value, on_change),
    ]
    .spacing(4)
    .into()
}

/// Create the scan canvas element
fn scan_view(
    viewer: &ViewerSettings,
    annotation: TumorAnnotation,
    show_annotation: bool,
    height: f32,
) -> Element<'static, DashboardMessage> {
    Canvas::new(ScanCanvas {
        zoom: viewer.zoom(),
        contrast: viewer.contrast(),
        brightness: viewer.brightness(),
        annotation: show_annotation.then_some(annotation),
        seed: 0,
    })
    .width(Length::Fill)
    .height(height)
    .into()
}

/// Canvas program for the placeholder scan rendering
struct ScanCanvas {
    zoom: u16,
    contrast: u16,
    brightness: u16,
    annotation: Option<TumorAnnotation>,
    /// Varies the slice shape a little so thumbnails don't look identical
    seed: u8,
}

impl ScanCanvas {
    /// Apply the contrast/brightness levels to a base gray value.
    /// A level of 50 is neutral, matching the viewer defaults.
    fn level(&self, base: f32) -> Color {
        let contrast = self.contrast as f32 / 50.0;
        let brightness = self.brightness as f32 / 50.0;
        let v = (((base - 0.5) * contrast + 0.5) * brightness).clamp(0.0, 1.0);
        Color::from_rgb(v, v, v)
    }
}

impl canvas::Program<DashboardMessage> for ScanCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Background
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb(0.04, 0.04, 0.05));

        let side = bounds.width.min(bounds.height);
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let scale = (self.zoom as f32 / 100.0) * side / 2.0;
        let squish = 0.82 + 0.02 * (self.seed % 4) as f32;

        // Stylized axial slice: skull ring, parenchyma, ventricles
        let rings = [
            (1.0, 0.85),
            (0.94, 0.30),
            (0.55, 0.45),
            (0.20, 0.15),
        ];
        for &(radius, gray) in &rings {
            let path = ellipse(center, radius * scale, radius * scale * squish);
            frame.fill(&path, self.level(gray));
        }

        // Tumor annotation overlay, scaled with the slice
        if let Some(a) = self.annotation {
            let cx = center.x + (a.center_x - 0.5) * 2.0 * scale;
            let cy = center.y + (a.center_y - 0.5) * 2.0 * scale * squish;
            let radius = a.radius * 2.0 * scale;

            frame.fill(
                &Path::circle(Point::new(cx, cy), radius * 0.45),
                Color { a: 0.3, ..theme::accent() },
            );
            frame.stroke(
                &Path::circle(Point::new(cx, cy), radius),
                Stroke::default()
                    .with_color(Color { a: 0.8, ..theme::accent() })
                    .with_width(2.5),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Axis-aligned ellipse approximated with four bezier arcs
fn ellipse(center: Point, rx: f32, ry: f32) -> Path {
    // Magic constant for a cubic bezier circle approximation
    const K: f32 = 0.5523;
    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(center.x, center.y - ry));
    builder.bezier_curve_to(
        Point::new(center.x + rx * K, center.y - ry),
        Point::new(center.x + rx, center.y - ry * K),
        Point::new(center.x + rx, center.y),
    );
    builder.bezier_curve_to(
        Point::new(center.x + rx, center.y + ry * K),
        Point::new(center.x + rx * K, center.y + ry),
        Point::new(center.x, center.y + ry),
    );
    builder.bezier_curve_to(
        Point::new(center.x - rx * K, center.y + ry),
        Point::new(center.x - rx, center.y + ry * K),
        Point::new(center.x - rx, center.y),
    );
    builder.bezier_curve_to(
        Point::new(center.x - rx, center.y - ry * K),
        Point::new(center.x - rx * K, center.y - ry),
        Point::new(center.x, center.y - ry),
    );
    builder.close();
    builder.build()
}
