//! Turns parsed segments into styled text.
//!
//! Rendering is a fold over [`RenderSegment`]s into one [`StyledText`]. Text
//! is styled by looking up each active style name in a [`Styles`] registry
//! and applying the hits in order, outer tag first, so inner tags win where
//! styles conflict. Names that are not registered are reported as
//! [`Warning::NoStyle`] and skipped.
//!
//! ```rust
//! use tincture_markup::{parse, NoopSink};
//! use tincture_render::{ConvertMode, FormatArg, Renderer, StyleAttributes, Styles};
//!
//! let styles = Styles::new().add("b", StyleAttributes::new().bold());
//! let renderer = Renderer::new(&NoopSink);
//!
//! let segments = renderer.convert_segments(parse("<b>%d</b> items"), ConvertMode::Simple, &styles);
//! let text = renderer.render_formatted(&segments, &[FormatArg::Int(3)], &styles);
//! assert_eq!(text.as_str(), "3 items");
//!
//! let literal = renderer.render_literal(&segments, &styles);
//! assert_eq!(literal.as_str(), "%d items");
//! ```

use tincture_markup::{Segment, Warning, WarningSink};

use crate::format::{FormatArg, FormatFunction, PrintfFormat};
use crate::segment::{ConvertMode, RenderSegment};
use crate::style::Styles;
use crate::text::StyledText;

/// Renders segments, reporting problems to a warning sink.
///
/// Cheap to copy: it only borrows its sink and format function.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    sink: &'a dyn WarningSink,
    format_fn: &'a dyn FormatFunction,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer that formats placeholders with [`PrintfFormat`].
    pub fn new(sink: &'a dyn WarningSink) -> Self {
        Self {
            sink,
            format_fn: &PrintfFormat,
        }
    }

    /// Replaces the function used to format placeholder arguments.
    pub fn with_format(mut self, format_fn: &'a dyn FormatFunction) -> Self {
        self.format_fn = format_fn;
        self
    }

    /// Wraps `text` and applies each named style over its full extent.
    pub fn apply_styles(&self, text: &str, names: &[String], styles: &Styles) -> StyledText {
        let mut result = StyledText::plain(text);
        let len = result.len();
        for name in names {
            match styles.get(name) {
                Some(style) => style.apply(0..len, &mut result),
                None => self.sink.warning(Warning::NoStyle { name: name.clone() }),
            }
        }
        result
    }

    /// Converts parsed segments for rendering.
    ///
    /// In [`ConvertMode::PreRender`] every text segment is styled right away,
    /// even if empty, and consecutive styled pieces are merged. Placeholders
    /// pass through unchanged in both modes and break up merging.
    pub fn convert_segments(
        &self,
        segments: Vec<Segment>,
        mode: ConvertMode,
        styles: &Styles,
    ) -> Vec<RenderSegment> {
        match mode {
            ConvertMode::Simple => segments.into_iter().map(RenderSegment::from).collect(),
            ConvertMode::PreRender => {
                let mut result: Vec<RenderSegment> = Vec::with_capacity(segments.len());
                for segment in segments {
                    let converted = match segment {
                        Segment::Text { content, styles: names } => {
                            RenderSegment::Rendered(self.apply_styles(&content, &names, styles))
                        }
                        placeholder => RenderSegment::from(placeholder),
                    };

                    if let RenderSegment::Rendered(next) = &converted {
                        if let Some(RenderSegment::Rendered(last)) = result.last_mut() {
                            last.append(next);
                            continue;
                        }
                    }
                    result.push(converted);
                }
                result
            }
        }
    }

    /// Renders without arguments: placeholders show their specifier exactly
    /// as written, styled like the surrounding text.
    pub fn render_literal(&self, segments: &[RenderSegment], styles: &Styles) -> StyledText {
        let mut result = StyledText::new();
        for segment in segments {
            match segment {
                RenderSegment::Text { content, styles: names } => {
                    result.append(&self.apply_styles(content, names, styles))
                }
                RenderSegment::Placeholder { raw, styles: names, .. } => {
                    result.append(&self.apply_styles(raw, names, styles))
                }
                RenderSegment::Rendered(rendered) => result.append(rendered),
            }
        }
        result
    }

    /// Renders with placeholder arguments.
    ///
    /// A placeholder whose index is past the end of `args` contributes
    /// nothing and is reported as [`Warning::MissingArgument`].
    pub fn render_formatted(
        &self,
        segments: &[RenderSegment],
        args: &[FormatArg],
        styles: &Styles,
    ) -> StyledText {
        let mut result = StyledText::new();
        for segment in segments {
            match segment {
                RenderSegment::Text { content, styles: names } => {
                    result.append(&self.apply_styles(content, names, styles))
                }
                RenderSegment::Placeholder {
                    format,
                    raw,
                    index,
                    styles: names,
                } => {
                    let Some(arg) = args.get(*index) else {
                        self.sink.warning(Warning::MissingArgument {
                            format: raw.clone(),
                            index: *index,
                        });
                        continue;
                    };
                    let formatted = self.format_fn.format(format, arg);
                    result.append(&self.apply_styles(&formatted, names, styles));
                }
                RenderSegment::Rendered(rendered) => result.append(rendered),
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleAttributes;
    use console::Color;
    use tincture_markup::{CollectingSink, NoopSink};

    fn styles() -> Styles {
        Styles::new()
            .add("bold", StyleAttributes::new().bold())
            .add("red", StyleAttributes::new().fg(Color::Red))
            .add("blue", StyleAttributes::new().fg(Color::Blue))
    }

    fn runs(text: &StyledText) -> Vec<(String, StyleAttributes)> {
        text.runs()
            .map(|(s, a)| (s.to_string(), a.clone()))
            .collect()
    }

    mod styling {
        use super::*;

        #[test]
        fn later_style_wins_on_conflict() {
            let text = Renderer::new(&NoopSink).apply_styles(
                "x",
                &["red".into(), "blue".into()],
                &styles(),
            );
            assert_eq!(
                runs(&text),
                vec![("x".into(), StyleAttributes::new().fg(Color::Blue))]
            );
        }

        #[test]
        fn styles_accumulate() {
            let text = Renderer::new(&NoopSink).apply_styles(
                "x",
                &["bold".into(), "red".into()],
                &styles(),
            );
            assert_eq!(
                runs(&text),
                vec![("x".into(), StyleAttributes::new().bold().fg(Color::Red))]
            );
        }

        #[test]
        fn unknown_style_warns_and_skips() {
            let sink = CollectingSink::new();
            let text = Renderer::new(&sink).apply_styles(
                "x",
                &["ghost".into(), "bold".into()],
                &styles(),
            );
            assert_eq!(runs(&text), vec![("x".into(), StyleAttributes::new().bold())]);
            assert_eq!(
                sink.take(),
                vec![Warning::NoStyle {
                    name: "ghost".into()
                }]
            );
        }

        #[test]
        fn duplicate_names_apply_twice() {
            let text = Renderer::new(&NoopSink).apply_styles(
                "x",
                &["bold".into(), "bold".into()],
                &styles(),
            );
            assert_eq!(runs(&text), vec![("x".into(), StyleAttributes::new().bold())]);
        }
    }

    mod converting {
        use super::*;

        #[test]
        fn simple_mode_passes_through() {
            let input = vec![
                Segment::text("Hello", &["bold"]),
                Segment::placeholder("%d", "%1$d", 0, &["italic"]),
                Segment::text("World", &[]),
            ];
            let converted =
                Renderer::new(&NoopSink).convert_segments(input, ConvertMode::Simple, &styles());
            assert_eq!(
                converted,
                vec![
                    RenderSegment::Text {
                        content: "Hello".into(),
                        styles: vec!["bold".into()],
                    },
                    RenderSegment::Placeholder {
                        format: "%d".into(),
                        raw: "%1$d".into(),
                        index: 0,
                        styles: vec!["italic".into()],
                    },
                    RenderSegment::Text {
                        content: "World".into(),
                        styles: vec![],
                    },
                ]
            );
        }

        #[test]
        fn pre_render_merges_adjacent_text() {
            let input = vec![
                Segment::text("Hello", &["bold", "red"]),
                Segment::text(" ", &[]),
                Segment::text("World", &["blue"]),
            ];
            let converted =
                Renderer::new(&NoopSink).convert_segments(input, ConvertMode::PreRender, &styles());

            assert_eq!(converted.len(), 1);
            let RenderSegment::Rendered(text) = &converted[0] else {
                panic!("expected rendered segment");
            };
            assert_eq!(
                runs(text),
                vec![
                    ("Hello".into(), StyleAttributes::new().bold().fg(Color::Red)),
                    (" ".into(), StyleAttributes::new()),
                    ("World".into(), StyleAttributes::new().fg(Color::Blue)),
                ]
            );
        }

        #[test]
        fn pre_render_keeps_empty_text() {
            let converted = Renderer::new(&NoopSink).convert_segments(
                vec![Segment::text("", &["bold"])],
                ConvertMode::PreRender,
                &styles(),
            );
            assert_eq!(converted, vec![RenderSegment::Rendered(StyledText::new())]);
        }

        #[test]
        fn pre_render_placeholder_breaks_merge() {
            let converted = Renderer::new(&NoopSink).convert_segments(
                vec![
                    Segment::text("a", &[]),
                    Segment::placeholder("%@", "%@", 0, &[]),
                    Segment::text("b", &[]),
                    Segment::text("c", &[]),
                ],
                ConvertMode::PreRender,
                &styles(),
            );
            assert_eq!(
                converted,
                vec![
                    RenderSegment::Rendered(StyledText::plain("a")),
                    RenderSegment::Placeholder {
                        format: "%@".into(),
                        raw: "%@".into(),
                        index: 0,
                        styles: vec![],
                    },
                    RenderSegment::Rendered(StyledText::plain("bc")),
                ]
            );
        }

        #[test]
        fn pre_render_warns_once_per_text_segment() {
            let sink = CollectingSink::new();
            Renderer::new(&sink).convert_segments(
                vec![Segment::text("a", &["ghost"]), Segment::text("b", &["ghost"])],
                ConvertMode::PreRender,
                &styles(),
            );
            assert_eq!(sink.len(), 2);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn literal_shows_raw_specifier() {
            let segments = vec![
                RenderSegment::Text {
                    content: "Score: ".into(),
                    styles: vec![],
                },
                RenderSegment::Placeholder {
                    format: "%04d".into(),
                    raw: "%2$04d".into(),
                    index: 1,
                    styles: vec!["red".into()],
                },
            ];
            let text = Renderer::new(&NoopSink).render_literal(&segments, &styles());
            assert_eq!(text.as_str(), "Score: %2$04d");
            assert_eq!(
                text.attributes_at(7),
                Some(&StyleAttributes::new().fg(Color::Red))
            );
        }

        #[test]
        fn formatted_substitutes_and_styles() {
            let segments = vec![
                RenderSegment::Text {
                    content: "Score: ".into(),
                    styles: vec!["bold".into()],
                },
                RenderSegment::Placeholder {
                    format: "%04d".into(),
                    raw: "%04d".into(),
                    index: 0,
                    styles: vec!["red".into()],
                },
            ];
            let text = Renderer::new(&NoopSink).render_formatted(
                &segments,
                &[FormatArg::Int(7)],
                &styles(),
            );
            assert_eq!(
                runs(&text),
                vec![
                    ("Score: ".into(), StyleAttributes::new().bold()),
                    ("0007".into(), StyleAttributes::new().fg(Color::Red)),
                ]
            );
        }

        #[test]
        fn missing_argument_warns_and_skips() {
            let sink = CollectingSink::new();
            let segments = vec![
                RenderSegment::Text {
                    content: "Hi ".into(),
                    styles: vec![],
                },
                RenderSegment::Placeholder {
                    format: "%@".into(),
                    raw: "%1$@".into(),
                    index: 0,
                    styles: vec![],
                },
            ];
            let text = Renderer::new(&sink).render_formatted(&segments, &[], &styles());
            assert_eq!(text.as_str(), "Hi ");
            assert_eq!(
                sink.take(),
                vec![Warning::MissingArgument {
                    format: "%1$@".into(),
                    index: 0,
                }]
            );
        }

        #[test]
        fn rendered_segments_are_appended_unchanged() {
            let pre = StyledText::styled("pre", StyleAttributes::new().italic());
            let segments = vec![RenderSegment::Rendered(pre.clone())];
            let renderer = Renderer::new(&NoopSink);
            assert_eq!(renderer.render_literal(&segments, &styles()), pre);
            assert_eq!(renderer.render_formatted(&segments, &[], &styles()), pre);
        }

        #[test]
        fn custom_format_function() {
            let shout = |_spec: &str, arg: &FormatArg| arg.to_string().to_uppercase();
            let segments = vec![RenderSegment::Placeholder {
                format: "%@".into(),
                raw: "%@".into(),
                index: 0,
                styles: vec![],
            }];
            let text = Renderer::new(&NoopSink).with_format(&shout).render_formatted(
                &segments,
                &[FormatArg::from("hey")],
                &styles(),
            );
            assert_eq!(text.as_str(), "HEY");
        }

        #[test]
        fn no_style_reported_per_segment() {
            let sink = CollectingSink::new();
            let segments = vec![
                RenderSegment::Text {
                    content: "a".into(),
                    styles: vec!["ghost".into()],
                },
                RenderSegment::Text {
                    content: "b".into(),
                    styles: vec!["ghost".into()],
                },
            ];
            Renderer::new(&sink).render_literal(&segments, &styles());
            let ghost = Warning::NoStyle {
                name: "ghost".into(),
            };
            assert_eq!(sink.take(), vec![ghost.clone(), ghost]);
        }
    }
}
