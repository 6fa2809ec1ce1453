//! HTML shell parsing.
//!
//! A shell is an HTML skeleton with two insertion points: the styles marker
//! and, after it, the script marker. The styles marker may appear a second
//! time before the script marker to close a bracketing construct; the text
//! between the two styles markers is dropped along with them.

use crate::{MARKER_SCRIPT, MARKER_STYLES, PLACEHOLDER_CONFIG};

/// Marker and placeholder tokens used during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Token in the script template replaced by the config JSON
    pub config_placeholder: String,

    /// Shell marker for the stylesheet
    pub styles: String,

    /// Shell marker for the script
    pub script: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            config_placeholder: PLACEHOLDER_CONFIG.to_string(),
            styles: MARKER_STYLES.to_string(),
            script: MARKER_SCRIPT.to_string(),
        }
    }
}

/// Errors that can occur when parsing a shell.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Shell markers must be non-empty and must not contain each other")]
    InvalidMarkers,

    #[error("Marker `{0}` not found in shell")]
    MissingMarker(String),

    #[error("Script marker `{script}` appears before styles marker `{styles}`")]
    MarkerOrder { styles: String, script: String },

    #[error("Unexpected extra `{marker}` at byte {offset}")]
    UnexpectedMarker { marker: String, offset: usize },
}

/// A shell split into its three fixed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTemplate<'a> {
    header: &'a str,
    between: &'a str,
    footer: &'a str,
}

impl<'a> ShellTemplate<'a> {
    /// Parse `source`, recording both marker positions in one pass.
    ///
    /// Every marker occurrence must be consumed by a slot boundary, so a
    /// successfully parsed shell never leaks a marker into the output.
    pub fn parse(source: &'a str, markers: &Markers) -> Result<Self, ShellError> {
        let styles = markers.styles.as_str();
        let script = markers.script.as_str();

        if styles.is_empty()
            || script.is_empty()
            || styles.contains(script)
            || script.contains(styles)
        {
            return Err(ShellError::InvalidMarkers);
        }

        let open = source
            .find(styles)
            .ok_or_else(|| ShellError::MissingMarker(styles.to_string()))?;

        if source[..open].contains(script) {
            return Err(ShellError::MarkerOrder {
                styles: styles.to_string(),
                script: script.to_string(),
            });
        }

        let styles_end = open + styles.len();
        let script_at = source[styles_end..]
            .find(script)
            .map(|i| styles_end + i)
            .ok_or_else(|| ShellError::MissingMarker(script.to_string()))?;

        // Optional closing styles marker.
        let between_start = source[styles_end..script_at]
            .find(styles)
            .map_or(styles_end, |i| styles_end + i + styles.len());

        if let Some(i) = source[between_start..script_at].find(styles) {
            return Err(ShellError::UnexpectedMarker {
                marker: styles.to_string(),
                offset: between_start + i,
            });
        }

        let footer_start = script_at + script.len();
        let footer = &source[footer_start..];
        for marker in [styles, script] {
            if let Some(i) = footer.find(marker) {
                return Err(ShellError::UnexpectedMarker {
                    marker: marker.to_string(),
                    offset: footer_start + i,
                });
            }
        }

        Ok(Self {
            header: &source[..open],
            between: &source[between_start..script_at],
            footer,
        })
    }

    /// Text before the styles marker.
    #[cfg(test)]
    fn header(&self) -> &'a str {
        self.header
    }

    /// Text between the (closing) styles marker and the script marker.
    #[cfg(test)]
    fn between(&self) -> &'a str {
        self.between
    }

    /// Text after the script marker.
    #[cfg(test)]
    fn footer(&self) -> &'a str {
        self.footer
    }

    /// Fill both slots: header + styles + between + script + footer.
    pub fn assemble(&self, styles: &str, script: &str) -> String {
        let mut html = String::with_capacity(
            self.header.len() + styles.len() + self.between.len() + script.len() + self.footer.len(),
        );
        html.push_str(self.header);
        html.push_str(styles);
        html.push_str(self.between);
        html.push_str(script);
        html.push_str(self.footer);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Result<ShellTemplate<'_>, ShellError> {
        ShellTemplate::parse(source, &Markers::default())
    }

    #[test]
    fn splits_single_styles_marker() {
        let shell = parse("<a>__STYLES__</style>mid<script>__SCRIPT__</script></a>").unwrap();

        assert_eq!(shell.header(), "<a>");
        assert_eq!(shell.between(), "</style>mid<script>");
        assert_eq!(shell.footer(), "</script></a>");
        assert_eq!(
            shell.assemble("body{}", "x=1;"),
            "<a>body{}</style>mid<script>x=1;</script></a>"
        );
    }

    #[test]
    fn consumes_closing_styles_marker() {
        let source =
            "<style>\n__STYLES__\n__STYLES__\n  </style>\n  <script>\n__SCRIPT__\n  </script>\n";

        let shell = parse(source).unwrap();

        assert_eq!(shell.header(), "<style>\n");
        assert_eq!(shell.between(), "\n  </style>\n  <script>\n");
        assert_eq!(shell.footer(), "\n  </script>\n");
    }

    #[test]
    fn adjacent_styles_markers() {
        let shell = parse("<style>__STYLES____STYLES__</style><script>__SCRIPT__</script>").unwrap();

        assert_eq!(
            shell.assemble("p{}", "go();"),
            "<style>p{}</style><script>go();</script>"
        );
    }

    #[test]
    fn errors_on_missing_styles_marker() {
        let result = parse("<style></style><script>__SCRIPT__</script>");

        assert_eq!(
            result,
            Err(ShellError::MissingMarker(MARKER_STYLES.to_string()))
        );
    }

    #[test]
    fn errors_on_missing_script_marker() {
        let result = parse("<style>__STYLES__</style><script></script>");

        assert_eq!(
            result,
            Err(ShellError::MissingMarker(MARKER_SCRIPT.to_string()))
        );
    }

    #[test]
    fn errors_when_script_precedes_styles() {
        let result = parse("<script>__SCRIPT__</script><style>__STYLES__</style>");

        assert!(matches!(result, Err(ShellError::MarkerOrder { .. })));
    }

    #[test]
    fn errors_on_third_styles_marker() {
        let result = parse("__STYLES__a__STYLES__b__STYLES__c__SCRIPT__");

        assert_eq!(
            result,
            Err(ShellError::UnexpectedMarker {
                marker: MARKER_STYLES.to_string(),
                offset: 22,
            })
        );
    }

    #[test]
    fn errors_on_markers_after_script() {
        let result = parse("__STYLES__x__SCRIPT__y__SCRIPT__");
        assert_eq!(
            result,
            Err(ShellError::UnexpectedMarker {
                marker: MARKER_SCRIPT.to_string(),
                offset: 22,
            })
        );

        let result = parse("__STYLES__x__SCRIPT__y__STYLES__");
        assert!(matches!(
            result,
            Err(ShellError::UnexpectedMarker { offset: 22, .. })
        ));
    }

    #[test]
    fn rejects_invalid_markers() {
        let empty = Markers {
            styles: String::new(),
            ..Markers::default()
        };
        assert_eq!(
            ShellTemplate::parse("x", &empty),
            Err(ShellError::InvalidMarkers)
        );

        let same = Markers {
            styles: "@@".to_string(),
            script: "@@".to_string(),
            ..Markers::default()
        };
        assert_eq!(
            ShellTemplate::parse("@@ @@", &same),
            Err(ShellError::InvalidMarkers)
        );
    }

    #[test]
    fn honors_custom_markers() {
        let markers = Markers {
            styles: "/*css*/".to_string(),
            script: "//js".to_string(),
            ..Markers::default()
        };

        let shell = ShellTemplate::parse("<style>/*css*/</style><script>//js</script>", &markers)
            .unwrap();

        assert_eq!(
            shell.assemble("a{}", "b()"),
            "<style>a{}</style><script>b()</script>"
        );
    }
}
