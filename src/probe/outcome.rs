use reqwest::StatusCode;
use std::fmt;

/// The result of a single probe request. Request failures are data, not errors:
/// every variant is printed and the process exits normally.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The ERP answered with a 2xx status.
    Success,
    /// The ERP answered with a non-success status.
    Failed(StatusCode),
    /// The request never produced a response (DNS, refused, timeout, TLS).
    Unreachable(reqwest::Error),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success)
    }
}

// The diagnostic text is product behavior carried over verbatim, Spanish included.
impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Success => write!(f, "Conexión al ERP exitosa."),
            ProbeOutcome::Failed(status) => {
                write!(f, "Error al conectar al ERP. Código de estado: {status}")
            }
            ProbeOutcome::Unreachable(err) => {
                write!(f, "Excepción al conectar al ERP: {err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProbeOutcome;
    use reqwest::StatusCode;

    #[test]
    fn success_line() {
        assert_eq!(
            ProbeOutcome::Success.to_string(),
            "Conexión al ERP exitosa."
        );
        assert!(ProbeOutcome::Success.is_success());
    }

    #[test]
    fn failed_line_carries_status_code() {
        let outcome = ProbeOutcome::Failed(StatusCode::NOT_FOUND);
        assert!(outcome.to_string().contains("404"));
        assert!(outcome
            .to_string()
            .starts_with("Error al conectar al ERP. Código de estado:"));
        assert!(!outcome.is_success());
    }
}
