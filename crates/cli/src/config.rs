use anyhow::{Context, Result};
use jigsaw::grid::GridDims;
use jigsaw::render::RenderCfg;
use jigsaw::svg::SvgStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings file for `render`/`grid`; every section and field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub grid: GridDims,
    pub render: RenderCfg,
    pub style: SvgStyle,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.grid
            .validate()
            .with_context(|| format!("invalid grid section in {}", path.display()))?;
        cfg.render
            .validate()
            .with_context(|| format!("invalid render section in {}", path.display()))?;
        Ok(cfg)
    }

    /// Config file if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"grid": {"rows": 2}, "render": {"piece_width": 80.0}}"#).unwrap();
        let cfg = RunConfig::load(&path).unwrap();
        assert_eq!(cfg.grid, GridDims::new(2, 5));
        assert_eq!(cfg.render.piece_width, 80.0);
        assert_eq!(cfg.render.pitch, 100.0);
        assert_eq!(cfg.style, SvgStyle::default());
    }

    #[test]
    fn invalid_render_section_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"render": {"piece_width": -1.0}}"#).unwrap();
        let err = RunConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("piece_width must be positive"));
    }

    #[test]
    fn oversized_grid_section_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"grid": {"rows": 18446744073709551615, "cols": 3}}"#).unwrap();
        let err = RunConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid grid section"));
    }

    #[test]
    fn missing_file_is_an_error_and_none_is_default() {
        let dir = tempdir().unwrap();
        assert!(RunConfig::load(&dir.path().join("nope.json")).is_err());
        assert_eq!(RunConfig::load_or_default(None).unwrap(), RunConfig::default());
    }
}
