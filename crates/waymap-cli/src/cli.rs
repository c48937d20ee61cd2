#![forbid(unsafe_code)]

//! Command-line argument parsing for the waymap renderer.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `WAYMAP_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

use waymap::LayoutConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
waymap — render a learning-roadmap persona to SVG

USAGE:
    waymap [OPTIONS]

OPTIONS:
    --input=FILE            Persona JSON file (default: built-in demo persona)
    --output=FILE           Write the SVG here instead of stdout
    --list                  Print the persona outline instead of rendering
    --spine                 Draw reading-order spine connections
    --start-y=N             First node's y position (default: 100)
    --topic-spacing=N       Vertical gap between main topics (default: 200)
    --detail-spacing=N      Vertical gap between detail nodes (default: 80)
    --help, -h              Show this help message
    --version, -V           Show version

ENVIRONMENT VARIABLES:
    WAYMAP_INPUT            Override --input
    WAYMAP_OUTPUT           Override --output";

/// Parsed command-line options.
#[derive(Default)]
pub struct Opts {
    /// Persona JSON file; `None` means the built-in demo persona.
    pub input: Option<PathBuf>,
    /// Output SVG file; `None` means stdout.
    pub output: Option<PathBuf>,
    /// Print the persona outline instead of rendering.
    pub list: bool,
    /// Emit spine connections.
    pub spine: bool,
    /// Layout overrides (None = config default).
    pub start_y: Option<f64>,
    pub topic_spacing: Option<f64>,
    pub detail_spacing: Option<f64>,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("WAYMAP_INPUT") {
            opts.input = Some(PathBuf::from(val));
        }
        if let Ok(val) = env::var("WAYMAP_OUTPUT") {
            opts.output = Some(PathBuf::from(val));
        }

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("waymap {VERSION}");
                    process::exit(0);
                }
                "--list" => {
                    opts.list = true;
                }
                "--spine" => {
                    opts.spine = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--input=") {
                        opts.input = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--output=") {
                        opts.output = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--start-y=") {
                        opts.start_y = Some(parse_f64("--start-y", val));
                    } else if let Some(val) = other.strip_prefix("--topic-spacing=") {
                        opts.topic_spacing = Some(parse_f64("--topic-spacing", val));
                    } else if let Some(val) = other.strip_prefix("--detail-spacing=") {
                        opts.detail_spacing = Some(parse_f64("--detail-spacing", val));
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }

    /// Apply the parsed overrides to a layout config.
    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        let mut config = LayoutConfig::DEFAULT.with_spine(self.spine);
        if let Some(start_y) = self.start_y {
            config = config.with_start_y(start_y);
        }
        if let Some(topic_spacing) = self.topic_spacing {
            config = config.with_topic_spacing(topic_spacing);
        }
        if let Some(detail_spacing) = self.detail_spacing {
            config = config.with_detail_spacing(detail_spacing);
        }
        config
    }
}

fn parse_f64(flag: &str, val: &str) -> f64 {
    match val.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid {flag} value: {val}");
            process::exit(1);
        }
    }
}
