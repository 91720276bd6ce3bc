use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of a catalog, used to attach source code to
/// diagnostics.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn missing_name_error(
        &self,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingName {
            src: self.named_source(),
            span,
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_namespace_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateNamespace {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    pub fn duplicate_method_error(
        &self,
        name: impl Into<String>,
        namespace: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateMethod {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
            namespace: namespace.into(),
        })
    }

    pub fn unknown_return_error(
        &self,
        target: impl Into<String>,
        method: impl Into<String>,
        available: &[&str],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownReturn {
            src: self.named_source(),
            span,
            target: target.into(),
            method: method.into(),
            available: available.join(", "),
        })
    }

    pub fn invalid_param_error(
        &self,
        param: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidParam {
            src: self.named_source(),
            span,
            param: param.into(),
            method: method.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'detroit import <scraped.json>' to create a catalog"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog")]
    #[diagnostic(code(detroit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize catalog")]
    #[diagnostic(code(detroit::serialize_error))]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("{context} has no name")]
    #[diagnostic(
        code(detroit::missing_name),
        help("every namespace and method needs a non-empty `name`")
    )]
    MissingName {
        #[source_code]
        src: NamedSource<String>,
        #[label("name missing here")]
        span: Option<SourceSpan>,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(detroit::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate namespace '{name}'")]
    #[diagnostic(
        code(detroit::duplicate_namespace),
        help("merge the methods into one [[namespaces]] table")
    )]
    DuplicateNamespace {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("duplicate method '{name}' in namespace '{namespace}'")]
    #[diagnostic(code(detroit::duplicate_method))]
    DuplicateMethod {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
        namespace: String,
    },

    #[error("method '{method}' returns unknown namespace '{target}'")]
    #[diagnostic(
        code(detroit::unknown_return),
        help("available namespaces are: {available}")
    )]
    UnknownReturn {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a namespace of this catalog")]
        span: Option<SourceSpan>,
        target: String,
        method: String,
        available: String,
    },

    #[error("invalid parameter '{param}' of method '{method}'")]
    #[diagnostic(code(detroit::invalid_param), help("{reason}"))]
    InvalidParam {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid parameter")]
        span: Option<SourceSpan>,
        param: String,
        method: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(detroit::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
