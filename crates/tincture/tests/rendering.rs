//! End-to-end rendering: styles, arguments and warnings.

use std::ops::Range;
use std::sync::Arc;

use console::Color;
use proptest::prelude::*;
use tincture::{
    args, styled_format, CollectingSink, FnStyle, FormatArg, RenderSegment, StyleAttributes,
    StyledText, Styles, Tincture, Warning,
};

fn collecting(styles: Styles) -> (Tincture, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    (Tincture::new(styles).with_sink(sink.clone()), sink)
}

fn missing_arguments(warnings: &[Warning]) -> usize {
    warnings
        .iter()
        .filter(|w| matches!(w, Warning::MissingArgument { .. }))
        .count()
}

mod styling {
    use super::*;

    #[test]
    fn inner_style_wins_conflicts_and_keeps_the_rest() {
        let styles = Styles::new()
            .add("a", StyleAttributes::new().fg(Color::Red).bold())
            .add("b", StyleAttributes::new().fg(Color::Blue).italic());
        let text = styled_format("<a><b>x</b></a>", &styles, &[]);

        assert_eq!(
            text.attributes_at(0),
            Some(&StyleAttributes::new().fg(Color::Blue).bold().italic())
        );
    }

    #[test]
    fn aliases_resolve_to_their_target() {
        let (tincture, sink) = collecting(
            Styles::new()
                .add("strong", StyleAttributes::new().bold())
                .add("title", "strong"),
        );
        let text = tincture.styled("<title>T</title>");
        assert_eq!(text.attributes_at(0), Some(&StyleAttributes::new().bold()));
        assert!(sink.is_empty());
    }

    #[test]
    fn custom_styles_decorate_their_range() {
        let first_char = FnStyle::new(|range: Range<usize>, text: &mut StyledText| {
            text.update(range.start..range.start + 1, |attrs| {
                attrs.underline = Some(true)
            })
        });
        let (tincture, _) = collecting(Styles::new().add("initial", first_char));
        let text = tincture.format("> <initial>%@</initial>", &args!["Ada"]);

        let runs: Vec<_> = text.runs().map(|(s, a)| (s.to_string(), a.clone())).collect();
        assert_eq!(
            runs,
            vec![
                ("> ".to_string(), StyleAttributes::new()),
                ("A".to_string(), StyleAttributes::new().underline()),
                ("da".to_string(), StyleAttributes::new()),
            ]
        );
    }

    #[test]
    fn unknown_styles_render_plain_with_a_warning() {
        let (tincture, sink) = collecting(Styles::new());
        let text = tincture.styled("<ghost>boo</ghost>");
        assert_eq!(text.to_plain(), "boo");
        assert_eq!(text.attributes_at(0), Some(&StyleAttributes::new()));
        assert_eq!(sink.take(), vec![Warning::NoStyle { name: "ghost".into() }]);
    }

    #[test]
    fn ansi_output_carries_escapes() {
        let styles = Styles::new().add("b", StyleAttributes::new().bold());
        let text = styled_format("<b>hi</b> there", &styles, &[]);
        let ansi = text.to_ansi();
        assert!(ansi.contains("\x1b["));
        assert!(ansi.ends_with(" there"));
        assert_eq!(text.to_plain(), "hi there");
    }
}

mod arguments {
    use super::*;

    #[test]
    fn literal_rendering_ignores_arguments() {
        let (tincture, sink) = collecting(Styles::new());
        let text = tincture.styled("%d %2$@ %s");
        assert_eq!(text.to_plain(), "%d %2$@ %s");
        assert!(sink.is_empty());
    }

    #[test]
    fn each_missing_argument_is_reported_once() {
        let (tincture, sink) = collecting(Styles::new());
        let text = tincture.format("[%d|%d|%3$d]", &args![1]);
        assert_eq!(text.to_plain(), "[1||]");
        assert_eq!(
            sink.take(),
            vec![
                Warning::MissingArgument {
                    format: "%d".into(),
                    index: 1
                },
                Warning::MissingArgument {
                    format: "%3$d".into(),
                    index: 2
                },
            ]
        );
    }

    #[test]
    fn oversized_fields_are_unknown_formats() {
        let (tincture, sink) = collecting(Styles::new());
        let text = tincture.format(
            "a%.70000fb%.4294967297gc%18446744073709551615d",
            &args![1.5, 2.5, 7],
        );
        assert_eq!(text.to_plain(), "abc");
        assert_eq!(
            sink.take(),
            vec![
                Warning::UnknownFormat {
                    format: "%.70000f".into()
                },
                Warning::UnknownFormat {
                    format: "%.4294967297g".into()
                },
                Warning::UnknownFormat {
                    format: "%18446744073709551615d".into()
                },
            ]
        );
        assert!(tincture.formatter("%65536d").segments().is_empty());
    }

    #[test]
    fn mixed_conversions() {
        let text = styled_format(
            "%s|%5.2f|%-3c|%+d|%o|%X|%e",
            &Styles::new(),
            &args!["str", 2.0, 'z', 5, 8, 255, 1234.5],
        );
        assert_eq!(text.to_plain(), "str| 2.00|z  |+5|10|FF|1.234500e+03");
    }
}

mod pre_rendering {
    use super::*;

    #[test]
    fn adjacent_text_collapses() {
        let (tincture, _) = collecting(Styles::new().add("a", StyleAttributes::new().bold()));
        let formatter = tincture.formatter("<a>x</a>y<a>z</a>");
        assert!(matches!(formatter.segments(), [RenderSegment::Rendered(_)]));
    }

    #[test]
    fn placeholders_break_collapsing() {
        let (tincture, _) = collecting(Styles::new().add("a", StyleAttributes::new().bold()));
        let formatter = tincture.formatter("<a>x</a>%d<a>z</a>");
        assert!(matches!(
            formatter.segments(),
            [
                RenderSegment::Rendered(_),
                RenderSegment::Placeholder { .. },
                RenderSegment::Rendered(_),
            ]
        ));
        assert_eq!(formatter.format(&args![7]).to_plain(), "x7z");
    }

    #[test]
    fn formatter_matches_one_shot_rendering() {
        let styles = Styles::new()
            .add("k", StyleAttributes::new().fg(Color::Yellow))
            .add("v", StyleAttributes::new().bold());
        let (tincture, _) = collecting(styles);
        let input = "<k>%@</k>=<v>%04d</v> (<k>%.1f</k>)";
        let values = args!["port", 80, 0.25];

        assert_eq!(
            tincture.formatter(input).format(&values),
            tincture.format(input, &values)
        );
    }
}

proptest! {
    #[test]
    fn decimal_matches_display(value in any::<i64>()) {
        let text = styled_format("%d", &Styles::new(), &[FormatArg::Int(value)]);
        prop_assert_eq!(text.to_plain(), value.to_string());
    }

    #[test]
    fn hex_matches_display(value in any::<u64>()) {
        let text = styled_format("%x", &Styles::new(), &[FormatArg::UInt(value)]);
        prop_assert_eq!(text.to_plain(), format!("{value:x}"));
    }

    #[test]
    fn missing_argument_count(placeholders in 0usize..8, supplied in 0usize..8) {
        let input = "%d ".repeat(placeholders);
        let values: Vec<FormatArg> = (0..supplied as i64).map(FormatArg::Int).collect();
        let (tincture, sink) = collecting(Styles::new());
        tincture.format(&input, &values);
        prop_assert_eq!(
            missing_arguments(&sink.take()),
            placeholders.saturating_sub(supplied)
        );
    }

    #[test]
    fn literal_never_reports_missing_arguments(placeholders in 0usize..8) {
        let input = "<b>%@</b>".repeat(placeholders);
        let (tincture, sink) = collecting(Styles::new().add("b", StyleAttributes::new().bold()));
        let text = tincture.styled(&input);
        prop_assert_eq!(text.to_plain(), "%@".repeat(placeholders));
        prop_assert_eq!(missing_arguments(&sink.take()), 0);
    }
}
