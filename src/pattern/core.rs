use regex::Regex;

use super::PatternError;

/// A compiled URL template
///
/// Owns the original template string, the compiled regex, and the ordered
/// parameter names. Immutable after compilation; matching is pure and may
/// run repeatedly and concurrently without side effects.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl PathPattern {
    /// Compile a URL template into a matcher
    ///
    /// Literal segments are regex-escaped; `:name` segments become capture
    /// groups. Empty segments in the template are skipped, so `/a//b`
    /// compiles the same as `/a/b`. The template `/` matches exactly `/`.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] for an empty template, a parameter marker
    /// without a name, an invalid parameter identifier, or a `:` appearing
    /// mid-segment.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        if template.is_empty() {
            return Err(PatternError::Empty);
        }

        if template == "/" {
            let regex = Self::build_regex(template, "^/$")?;
            return Ok(Self {
                template: template.to_string(),
                regex,
                param_names: Vec::new(),
            });
        }

        let mut source = String::with_capacity(template.len() + 8);
        source.push('^');
        let mut param_names = Vec::with_capacity(template.matches(':').count());

        for segment in template.split('/') {
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::MissingParameterName {
                        segment: segment.to_string(),
                    });
                }
                if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(PatternError::InvalidParameterName {
                        segment: segment.to_string(),
                    });
                }
                // Empty values are allowed here; the matching engine treats
                // an empty capture as a missing parameter.
                source.push_str("/([^/]*)");
                param_names.push(name.to_string());
            } else if segment.contains(':') {
                return Err(PatternError::StrayMarker {
                    segment: segment.to_string(),
                });
            } else if !segment.is_empty() {
                source.push('/');
                source.push_str(&regex::escape(segment));
            }
        }

        source.push('$');
        let regex = Self::build_regex(template, &source)?;

        Ok(Self {
            template: template.to_string(),
            regex,
            param_names,
        })
    }

    fn build_regex(template: &str, source: &str) -> Result<Regex, PatternError> {
        Regex::new(source).map_err(|e| PatternError::Compile {
            pattern: template.to_string(),
            message: e.to_string(),
        })
    }

    /// Test a concrete URL against this pattern
    ///
    /// Returns `None` when the URL does not match structurally. On a match,
    /// returns one entry per declared parameter, positionally aligned with
    /// [`param_names`](Self::param_names); an empty capture is reported as
    /// `None` (missing value).
    #[must_use]
    pub fn captures(&self, url: &str) -> Option<Vec<Option<String>>> {
        let caps = self.regex.captures(url)?;
        Some(
            (1..caps.len())
                .map(|i| {
                    caps.get(i)
                        .map(|m| m.as_str())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
                .collect(),
        )
    }

    /// Parameter names in declaration order
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// The original template string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }
}
