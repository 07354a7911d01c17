use std::fmt;

/// The fixed set of metric files the gateway knows how to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsDocument {
    Serial,
    Parallel,
    Compare,
}

impl MetricsDocument {
    pub const ALL: [MetricsDocument; 3] = [
        MetricsDocument::Serial,
        MetricsDocument::Parallel,
        MetricsDocument::Compare,
    ];

    /// File name inside the results directory.
    pub fn file_name(self) -> &'static str {
        match self {
            MetricsDocument::Serial => "serial_metrics.json",
            MetricsDocument::Parallel => "parallel_metrics.json",
            MetricsDocument::Compare => "compare_metrics.json",
        }
    }

    /// HTTP path the document is served on.
    pub fn route(self) -> &'static str {
        match self {
            MetricsDocument::Serial => "/api/serial",
            MetricsDocument::Parallel => "/api/parallel",
            MetricsDocument::Compare => "/api/compare",
        }
    }

    /// Short name used in logs and metric labels.
    pub fn label(self) -> &'static str {
        match self {
            MetricsDocument::Serial => "serial",
            MetricsDocument::Parallel => "parallel",
            MetricsDocument::Compare => "compare",
        }
    }
}

impl fmt::Display for MetricsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn routes_and_files_are_one_to_one() {
        let files: HashSet<_> = MetricsDocument::ALL.iter().map(|d| d.file_name()).collect();
        let routes: HashSet<_> = MetricsDocument::ALL.iter().map(|d| d.route()).collect();

        assert_eq!(files.len(), 3);
        assert_eq!(routes.len(), 3);
        for document in MetricsDocument::ALL {
            assert!(document.route().ends_with(document.label()));
            assert!(document.file_name().starts_with(document.label()));
        }
    }
}
