use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML at {line}:{column}")]
    Syntax {
        line: u32,
        column: u32,
        #[source]
        source: roxmltree::Error,
    },

    #[error("elements nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl LoadError {
    pub(crate) fn from_syntax(source: roxmltree::Error) -> Self {
        let pos = source.pos();
        LoadError::Syntax {
            line: pos.row,
            column: pos.col,
            source,
        }
    }
}
