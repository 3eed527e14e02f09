//! Cuts a synthetic drillhole cloud along a line and prints both plots as
//! text commands.
//!
//! Usage:
//! ```text
//! cargo run --example section                 # corridor half-width 25
//! cargo run --example section -- 60           # custom half-width
//! cargo run --example section -- none         # keep every point
//! RUST_LOG=xsection=debug cargo run --example section
//! ```

use xsection::math::{Point2, Point3};
use xsection::render::{LineStyle, MarkerStyle, PatchStyle, PlotMap, PlotSection, RenderTarget};
use xsection::{LineSegment, PointCloud, Result, Slice};

/// Writes each draw command as one line on stdout.
struct TextTarget {
    name: &'static str,
}

impl RenderTarget for TextTarget {
    fn polygon_patch(&mut self, vertices: &[Point2], style: &PatchStyle) -> Result<()> {
        let ring: Vec<String> = vertices
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
            .collect();
        println!("[{}] patch alpha={} {}", self.name, style.alpha, ring.join(" "));
        Ok(())
    }

    fn scatter(&mut self, xs: &[f64], ys: &[f64], _style: &MarkerStyle) -> Result<()> {
        println!("[{}] scatter {} points", self.name, xs.len());
        for (x, y) in xs.iter().zip(ys) {
            println!("[{}]   {x:>8.2} {y:>8.2}", self.name);
        }
        Ok(())
    }

    fn polyline(&mut self, points: &[Point2], _style: &LineStyle) -> Result<()> {
        println!("[{}] line through {} points", self.name, points.len());
        Ok(())
    }

    fn annotate(&mut self, text: &str, at: Point2, _size: f64) -> Result<()> {
        println!("[{}] label {text:?} at ({:.1}, {:.1})", self.name, at.x, at.y);
        Ok(())
    }

    fn set_aspect_equal(&mut self) -> Result<()> {
        println!("[{}] aspect equal", self.name);
        Ok(())
    }

    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()> {
        println!("[{}] xlim {min:.1}..{max:.1}", self.name);
        Ok(())
    }

    fn invert_y_axis(&mut self) -> Result<()> {
        println!("[{}] y axis inverted", self.name);
        Ok(())
    }
}

/// Three vertical drillholes sampled every 10 m down to 100 m.
fn drillholes() -> PointCloud {
    let collars = [(120.0, 40.0), (180.0, 95.0), (260.0, 30.0)];
    let mut points = Vec::new();
    for (e, n) in collars {
        for step in 0..=10 {
            points.push(Point3::new(e, n, f64::from(step) * 10.0));
        }
    }
    PointCloud::from_points(&points)
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for xsection.
    // Override with RUST_LOG env var (e.g. RUST_LOG=xsection=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("section=info".parse().unwrap_or_default())
        .add_directive("xsection=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let half_width = match std::env::args().nth(1).as_deref() {
        None => Some(25.0),
        Some("none") => None,
        Some(arg) => match arg.parse::<f64>() {
            Ok(s) => Some(s),
            Err(err) => {
                tracing::warn!(%arg, %err, "unparsable half-width, using 25");
                Some(25.0)
            }
        },
    };

    let line = LineSegment::new(Point2::new(100.0, 50.0), Point2::new(300.0, 50.0))?;
    let slice = Slice::new(line, drillholes(), half_width)?;
    tracing::info!(
        kept = slice.len(),
        line_length = slice.line_length(),
        windowed = slice.is_windowed(),
        "slice built"
    );

    PlotMap::new(&slice).draw(&mut TextTarget { name: "map" })?;
    PlotSection::new(&slice).draw(&mut TextTarget { name: "section" })?;
    Ok(())
}
