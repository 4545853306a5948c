use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use oaf_common::{Viewport, WindowSize};

/// oaf-panel: drive the panel layout core against an in-process host.
#[derive(Parser, Debug)]
#[command(name = "oaf-panel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `oaf=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Host page viewport as HEIGHTxWIDTH.
    #[arg(long, default_value = "1080x1920")]
    pub viewport: Dimensions,

    /// Panel window size as HEIGHTxWIDTH.
    #[arg(long, default_value = "500x400")]
    pub window: Dimensions,

    /// Run without a host bridge.
    #[arg(long)]
    pub standalone: bool,

    /// Steps to run in order: dock-left, dock-right, maximize, side-panel,
    /// minimize, expand, close, page-context, navigate=<path>.
    #[arg(value_name = "STEP")]
    pub steps: Vec<Step>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// A `HEIGHTxWIDTH` pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
}

impl Dimensions {
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.height, self.width)
    }

    pub fn window(self) -> WindowSize {
        WindowSize::new(self.height, self.width)
    }
}

impl FromStr for Dimensions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (height, width) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected HEIGHTxWIDTH, got '{s}'"))?;
        let parse = |part: &str| -> Result<f64, String> {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| format!("invalid dimension '{part}'"))?;
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(format!("dimension must be a non-negative number, got '{part}'"))
            }
        };
        Ok(Self {
            height: parse(height)?,
            width: parse(width)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    DockLeft,
    DockRight,
    Maximize,
    SidePanel,
    Minimize,
    Expand,
    Close,
    PageContext,
    Navigate(String),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(path) = s.strip_prefix("navigate=") {
            if path.is_empty() {
                return Err("navigate needs a path, e.g. navigate=/requisitions".into());
            }
            return Ok(Step::Navigate(path.to_string()));
        }
        match s {
            "dock-left" => Ok(Step::DockLeft),
            "dock-right" => Ok(Step::DockRight),
            "maximize" => Ok(Step::Maximize),
            "side-panel" => Ok(Step::SidePanel),
            "minimize" => Ok(Step::Minimize),
            "expand" => Ok(Step::Expand),
            "close" => Ok(Step::Close),
            "page-context" => Ok(Step::PageContext),
            other => Err(format!("unknown step '{other}'")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::DockLeft => f.write_str("dock-left"),
            Step::DockRight => f.write_str("dock-right"),
            Step::Maximize => f.write_str("maximize"),
            Step::SidePanel => f.write_str("side-panel"),
            Step::Minimize => f.write_str("minimize"),
            Step::Expand => f.write_str("expand"),
            Step::Close => f.write_str("close"),
            Step::PageContext => f.write_str("page-context"),
            Step::Navigate(path) => write!(f, "navigate={path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["oaf-panel"]).unwrap();
        assert_eq!(
            args.viewport,
            Dimensions {
                height: 1080.0,
                width: 1920.0
            }
        );
        assert_eq!(
            args.window,
            Dimensions {
                height: 500.0,
                width: 400.0
            }
        );
        assert!(!args.standalone);
        assert!(args.steps.is_empty());
    }

    #[test]
    fn steps_in_order() {
        let args = Args::try_parse_from([
            "oaf-panel",
            "--standalone",
            "dock-left",
            "navigate=/invoices",
            "expand",
        ])
        .unwrap();
        assert!(args.standalone);
        assert_eq!(
            args.steps,
            vec![
                Step::DockLeft,
                Step::Navigate("/invoices".into()),
                Step::Expand
            ]
        );
    }

    #[test]
    fn unknown_step_rejected() {
        assert!(Args::try_parse_from(["oaf-panel", "fullscreen"]).is_err());
        assert!("navigate=".parse::<Step>().is_err());
    }

    #[test]
    fn dimensions_parse() {
        let dims: Dimensions = "900X1600".parse().unwrap();
        assert_eq!(dims.viewport(), Viewport::new(900.0, 1600.0));
        assert!("900".parse::<Dimensions>().is_err());
        assert!("-1x5".parse::<Dimensions>().is_err());
    }

    #[test]
    fn step_display_round_trips() {
        for step in [Step::SidePanel, Step::Navigate("/a/b".into()), Step::PageContext] {
            assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
        }
    }
}
