//! SVG surface: collects stroked/filled paths into a standalone document.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::path::Path;
use crate::render::Surface;

/// Paint settings for [`SvgSurface`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    pub background: String,
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "gray".into(),
            stroke: "blue".into(),
            fill: "red".into(),
            stroke_width: 1.0,
        }
    }
}

pub struct SvgSurface {
    width: f64,
    height: f64,
    style: SvgStyle,
    body: String,
    paths: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, style: SvgStyle) -> Self {
        Self {
            width,
            height,
            style,
            body: String::new(),
            paths: 0,
        }
    }

    /// Number of `<path>` elements written so far.
    pub fn path_count(&self) -> usize {
        self.paths
    }

    fn push_path(&mut self, path: &Path, fill: &str, stroke: &str) {
        self.body.push_str(&format!(
            "  <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
            path,
            escape_attr(fill),
            escape_attr(stroke),
            self.style.stroke_width
        ));
        self.paths += 1;
    }

    /// The complete SVG document.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.2} {h:.2}\">\n",
            w = self.width,
            h = self.height
        ));
        out.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            escape_attr(&self.style.background)
        ));
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Escape a value for a double-quoted XML attribute.
fn escape_attr(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

impl Surface for SvgSurface {
    fn stroke_path(&mut self, path: &Path) {
        let stroke = self.style.stroke.clone();
        self.push_path(path, "none", &stroke);
    }

    fn fill_path(&mut self, path: &Path) {
        let fill = self.style.fill.clone();
        self.push_path(path, &fill, "none");
    }
}
