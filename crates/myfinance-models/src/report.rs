//! Report vocabulary: the PDF reports the backend can generate.

/// A PDF report served by the backend.
///
/// Each kind maps to its own backend endpoint; the user-facing argument of
/// `/relatorio` is Portuguese while the endpoint names are English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Monthly,
    Annual,
    Categories,
}

impl ReportKind {
    /// Parses the user-facing argument of `/relatorio`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "mensal" => Some(Self::Monthly),
            "anual" => Some(Self::Annual),
            "categorias" => Some(Self::Categories),
            _ => None,
        }
    }

    /// Backend endpoint serving this report.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Monthly => "/reports/monthly",
            Self::Annual => "/reports/annual",
            Self::Categories => "/reports/categories",
        }
    }

    /// Portuguese label used in filenames and captions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "mensal",
            Self::Annual => "anual",
            Self::Categories => "categorias",
        }
    }
}
