use super::axis::{AxisFormatter, LabelProvider};
use super::{min_and_max, Error, Record, Result, SoftError, EMPTY_CAPTION, SERIES_LABEL};
use chrono::prelude::*;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

/// A labeled line, one (x, y) point per record.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw the heart-rate chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub series: Series,
    /// lowest value, used as the y axis floor; None without records
    pub axis_minimum: Option<f64>,
    /// records plotted at the fallback time
    pub soft_errors: Vec<SoftError>,
}

impl ChartData {
    /// Builds the single "hr value" series from the records.
    /// Timestamps that do not parse are placed at `fallback`,
    /// so the same records and fallback always give the same chart.
    pub fn assemble<Tz: TimeZone>(
        records: &[Record],
        fmt: &AxisFormatter<Tz>,
        fallback: &DateTime<Tz>,
    ) -> ChartData
    where
        Tz::Offset: Display,
    {
        let mut chart = ChartData {
            series: Series {
                label: SERIES_LABEL.to_string(),
                points: Vec::with_capacity(records.len()),
            },
            axis_minimum: None,
            soft_errors: Vec::new(),
        };
        if records.is_empty() {
            return chart;
        }
        let values: Vec<f64> = records.iter().map(|r| r.value).collect();
        chart.axis_minimum = min_and_max(&values[..]).map(|(min, _)| min);
        for (i, r) in records.iter().enumerate() {
            let t = match fmt.try_parse(&r.timestamp) {
                Some(t) => t,
                None => {
                    chart.soft_errors.push(SoftError::InvalidTimestamp {
                        record: i + 1,
                        raw: r.timestamp.clone(),
                    });
                    fallback.clone()
                }
            };
            chart.series.points.push((fmt.to_axis(&t), r.value));
        }
        tracing::debug!(
            "assembled {} points, axis minimum {:?}",
            chart.series.points.len(),
            chart.axis_minimum
        );
        chart
    }

    pub fn is_empty(&self) -> bool {
        self.series.points.is_empty()
    }

    pub fn x_range(&self) -> Option<(f64, f64)> {
        let x: Vec<f64> = self.series.points.iter().map(|p| p.0).collect();
        min_and_max(&x[..])
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        let y: Vec<f64> = self.series.points.iter().map(|p| p.1).collect();
        min_and_max(&y[..])
    }

    /// plots the series to svg, with the x ticks labeled by `labels`;
    /// without points only the placeholder caption is drawn
    pub fn plot_svg<L: LabelProvider>(
        &self,
        labels: &L,
        fout: &Path,
        size: (u32, u32),
    ) -> Result<()> {
        let root = SVGBackend::new(fout, size).into_drawing_area();
        root.fill(&WHITE).map_err(Error::plot)?;
        let ((xmin, xmax), (ymin, ymax)) = match (self.x_range(), self.y_range()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                root.titled(EMPTY_CAPTION, ("sans-serif", 30).into_font())
                    .map_err(Error::plot)?;
                root.present().map_err(Error::plot)?;
                return Ok(());
            }
        };
        let xspan = xmax - xmin;
        let xmargin = if xspan > 0. { xspan / 20. } else { 30. };
        let ymin = self.axis_minimum.unwrap_or(ymin);
        let yspan = if ymax > ymin { (ymax - ymin) / 10. } else { 1. };

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d((xmin - xmargin)..(xmax + xmargin), ymin..(ymax + yspan))
            .map_err(Error::plot)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .x_labels(10)
            .x_label_formatter(&|x: &f64| labels.format(*x))
            .y_label_formatter(&|y: &f64| format!("{:5}", y))
            .x_desc("time [H:M:S]")
            .y_desc(self.series.label.as_str())
            .draw()
            .map_err(Error::plot)?;
        chart
            .draw_series(LineSeries::new(
                self.series.points.iter().copied(),
                BLUE.stroke_width(2),
            ))
            .map_err(Error::plot)?
            .label(self.series.label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
        chart
            .configure_series_labels()
            .label_font(("sans-serif", 24))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(Error::plot)?;
        root.present().map_err(Error::plot)?;
        Ok(())
    }
}
