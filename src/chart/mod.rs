//! Chart rendering for the per-metric images.
//!
//! Rendering is split from file placement: [`render_bar_chart`] and
//! [`render_line_chart`] are pure functions producing encoded PNG bytes,
//! and [`save_chart`] is the thin sink that decides the path and writes
//! the artifact. Failures are typed so one metric's chart problem can be
//! contained without touching the others.

use chrono::{DateTime, Duration, Utc};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 480;

/// Failure while producing or persisting a chart artifact.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart drawing failed: {0}")]
    Draw(String),
    #[error("failed to encode chart image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write chart to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Draw(err.to_string())
}

/// The four chart artifacts the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TopAddresses,
    AttemptsOverTime,
    EventCodes,
    TopIdentities,
}

impl ChartKind {
    /// Fixed file-name stem for this chart kind.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::TopAddresses => "top_ips",
            ChartKind::AttemptsOverTime => "attempts_over_time",
            ChartKind::EventCodes => "eventid_breakdown",
            ChartKind::TopIdentities => "top_usernames",
        }
    }
}

/// Renders a bar chart over a ranked count series, returning PNG bytes.
///
/// Bars appear in series order, which is the rank order. Long categorical
/// labels (identities) read better rotated; addresses and event codes
/// stay horizontal.
pub fn render_bar_chart(
    title: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[(String, usize)],
    rotate_labels: bool,
) -> Result<Vec<u8>, ChartError> {
    if series.is_empty() {
        return Err(ChartError::Draw("empty series".to_string()));
    }

    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let max_count = series.iter().map(|(_, count)| *count).max().unwrap_or(0) as u64;
        let y_top = max_count + max_count / 10 + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(if rotate_labels { 110 } else { 60 })
            .y_label_area_size(60)
            .build_cartesian_2d(0u32..series.len() as u32, 0u64..y_top)
            .map_err(draw_error)?;

        let label_font = ("sans-serif", 13).into_font();
        let label_font = if rotate_labels {
            label_font.transform(FontTransform::Rotate90)
        } else {
            label_font
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(series.len())
            .x_label_formatter(&|index: &u32| {
                series
                    .get(*index as usize)
                    .map(|(key, _)| key.clone())
                    .unwrap_or_default()
            })
            .x_label_style(label_font)
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(draw_error)?;

        chart
            .draw_series(series.iter().enumerate().map(|(index, (_, count))| {
                Rectangle::new(
                    [(index as u32, 0u64), (index as u32 + 1, *count as u64)],
                    BLUE.mix(0.6).filled(),
                )
            }))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }
    encode_png(&buffer)
}

/// Renders a line chart over a minute-bucketed series, returning PNG bytes.
pub fn render_line_chart(
    title: &str,
    x_desc: &str,
    y_desc: &str,
    buckets: &BTreeMap<DateTime<Utc>, usize>,
) -> Result<Vec<u8>, ChartError> {
    let first = *buckets
        .keys()
        .next()
        .ok_or_else(|| ChartError::Draw("empty time series".to_string()))?;
    let last = buckets.keys().next_back().copied().unwrap_or(first);

    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let max_count = buckets.values().copied().max().unwrap_or(0) as u64;
        let y_top = max_count + max_count / 10 + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(first..last + Duration::minutes(1), 0u64..y_top)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_label_formatter(&|timestamp: &DateTime<Utc>| timestamp.format("%H:%M").to_string())
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(draw_error)?;

        chart
            .draw_series(LineSeries::new(
                buckets.iter().map(|(start, count)| (*start, *count as u64)),
                &BLUE,
            ))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }
    encode_png(&buffer)
}

fn encode_png(rgb: &[u8]) -> Result<Vec<u8>, ChartError> {
    let mut encoded = Vec::new();
    PngEncoder::new(&mut encoded).write_image(rgb, CHART_WIDTH, CHART_HEIGHT, ColorType::Rgb8)?;
    Ok(encoded)
}

/// Writes an encoded chart under `plots_dir` and returns the reference
/// reported in the result record.
///
/// The directory is created if absent. Files are named
/// `<kind>_<stamp>.png` so repeated or near-simultaneous analyses do not
/// collide; the returned reference is relative to the plots directory's
/// parent (`plots/<file>`).
pub fn save_chart(
    plots_dir: &Path,
    kind: ChartKind,
    stamp: i64,
    png: &[u8],
) -> Result<String, ChartError> {
    fs::create_dir_all(plots_dir).map_err(|source| ChartError::Write {
        path: plots_dir.to_path_buf(),
        source,
    })?;

    let file_name = format!("{}_{}.png", kind.file_stem(), stamp);
    let path = plots_dir.join(&file_name);
    fs::write(&path, png).map_err(|source| ChartError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(format!("plots/{file_name}"))
}
