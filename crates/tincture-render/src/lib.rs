//! # tincture-render
//!
//! Rendering half of tincture: takes the segments produced by
//! `tincture-markup` and builds [`StyledText`], substituting placeholder
//! arguments and applying named styles.
//!
//! ## Core Concepts
//!
//! - [`StyledText`]: text plus attribute runs, printable as ANSI or plain
//! - [`Style`]: anything that can decorate a range of a [`StyledText`];
//!   [`StyleAttributes`] is the usual one
//! - [`Styles`]: case-sensitive name → style registry, built in code or
//!   loaded from a YAML stylesheet
//! - [`FormatFunction`]: formats one [`FormatArg`] for one specifier;
//!   [`PrintfFormat`] is the default
//! - [`Renderer`]: converts and renders segments, reporting missing styles
//!   and arguments as warnings
//!
//! ## Quick Start
//!
//! ```rust
//! use console::Color;
//! use tincture_markup::{parse, CollectingSink};
//! use tincture_render::{ConvertMode, FormatArg, Renderer, StyleAttributes, Styles};
//!
//! let styles = Styles::new()
//!     .add("title", StyleAttributes::new().bold())
//!     .add("count", StyleAttributes::new().fg(Color::Cyan));
//!
//! let sink = CollectingSink::new();
//! let renderer = Renderer::new(&sink);
//! let segments = renderer.convert_segments(
//!     parse("<title>Report</title>: <count>%d</count> items"),
//!     ConvertMode::Simple,
//!     &styles,
//! );
//! let text = renderer.render_formatted(&segments, &[FormatArg::Int(42)], &styles);
//!
//! assert_eq!(text.to_plain(), "Report: 42 items");
//! assert!(sink.is_empty());
//! ```
//!
//! ## Stylesheets
//!
//! ```rust
//! use tincture_render::Styles;
//!
//! let styles = Styles::from_yaml(r#"
//! title:
//!   fg: cyan
//!   bold: true
//! warning: "yellow italic"
//! muted:
//!   dim: true
//! disabled: muted
//! "#).unwrap();
//!
//! assert!(styles.get("disabled").is_some());
//! ```
//!
//! ## Color Formats
//!
//! | Format | Example |
//! |--------|---------|
//! | Named | `red`, `green`, `blue`, `cyan`, `magenta`, `yellow`, `white`, `black` |
//! | Bright | `bright_red`, `bright_green`, etc. |
//! | 256-color | `208` (palette index) |
//! | RGB hex | `"#ff6b35"` or `"#fff"` |
//! | RGB tuple | `[255, 107, 53]` |

mod format;
mod renderer;
mod segment;
mod style;
mod text;
mod util;

pub use format::{FormatArg, FormatFunction, PrintfFormat};
pub use renderer::Renderer;
pub use segment::{ConvertMode, RenderSegment};
pub use style::{
    parse_shorthand, parse_stylesheet, ColorDef, FnStyle, Style, StyleAttributes,
    StyleDefinition, StyleValidationError, StyleValue, Styles, StylesheetError,
};
pub use text::StyledText;
pub use util::rgb_to_ansi256;
