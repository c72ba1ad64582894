use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationSource {
    Ai,
    Template,
}

/// A generated artifact together with where it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Generated<T> {
    pub result: T,
    pub source: GenerationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T> Generated<T> {
    pub fn from_ai(result: T) -> Self {
        Self {
            result,
            source: GenerationSource::Ai,
            warning: None,
        }
    }

    pub fn from_template(result: T) -> Self {
        Self {
            result,
            source: GenerationSource::Template,
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Converts the result, keeping source and warning.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Generated<U> {
        Generated {
            result: f(self.result),
            source: self.source,
            warning: self.warning,
        }
    }
}
