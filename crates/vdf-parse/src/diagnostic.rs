//! Diagnostic rendering for parse errors.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::{ParseError, ParseErrorKind};

impl ParseError {
    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    /// `source` must be the text that was parsed.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        if self.write_report(filename, source, &mut output).is_err() {
            return self.to_string();
        }
        String::from_utf8(output).unwrap_or_else(|_| self.to_string())
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(
        &self,
        filename: &str,
        source: &str,
        writer: W,
    ) -> std::io::Result<()> {
        self.build_report(filename)
            .finish()
            .write((filename, Source::from(source)), writer)
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();
        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_message(self.kind.to_string());

        match &self.kind {
            ParseErrorKind::UnterminatedString => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("string starts here")
                        .with_color(Color::Red),
                )
                .with_help("add a closing '\"'; a '\\' before a quote keeps it inside the string"),

            ParseErrorKind::MalformedKey { .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("expected a quoted key here")
                        .with_color(Color::Red),
                )
                .with_help("keys must be quoted, e.g. \"name\""),

            ParseErrorKind::UnexpectedCharacter { .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("expected a value here")
                        .with_color(Color::Red),
                )
                .with_help("a value is either a quoted string or a braced object"),

            ParseErrorKind::UnexpectedEndOfInput => report.with_label(
                Label::new((filename, range))
                    .with_message("input ends here")
                    .with_color(Color::Red),
            ),

            ParseErrorKind::NestingTooDeep { .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("this object is too deep")
                        .with_color(Color::Red),
                )
                .with_help("raise ParseOptions::max_depth to accept deeper documents"),

            ParseErrorKind::InvalidUtf8 => report.with_label(
                Label::new((filename, range))
                    .with_message("not valid UTF-8")
                    .with_color(Color::Red),
            ),

            ParseErrorKind::Io(_) => report,
        }
    }
}
