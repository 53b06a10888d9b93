//! Terminal outcomes for sites that could not be analyzed.

use std::error::Error as StdError;
use std::io;

use cuboleads_core::AnalysisResult;

/// Why a site fetch ended before its content could be checked.
///
/// Each variant maps to a fixed problem text and urgency; content checks are
/// never run for these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFailure {
    /// The site answered with a status other than 200.
    BadStatus(u16),
    /// TLS handshake or certificate failure.
    Tls,
    /// Refused connection, DNS failure or unreachable host.
    Connection,
    Timeout,
    Unknown,
}

impl SiteFailure {
    /// Maps a transport error to a failure kind.
    ///
    /// TLS is checked first, then connection errors (so a connect timeout
    /// counts as a connection failure), then timeouts.
    #[must_use]
    pub fn classify(err: &reqwest::Error) -> Self {
        if chain_has_tls_error(err.source()) {
            Self::Tls
        } else if err.is_connect() {
            Self::Connection
        } else if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn problem(self) -> String {
        match self {
            Self::BadStatus(status) => format!("SITE COM ERRO (Código {status})"),
            Self::Tls => "CERTIFICADO INVÁLIDO/EXPIRADO".to_string(),
            Self::Connection => "SITE NÃO ABRE / SERVIDOR OFF".to_string(),
            Self::Timeout => "SITE MUITO LENTO (Timeout)".to_string(),
            Self::Unknown => "ERRO DESCONHECIDO AO ACESSAR".to_string(),
        }
    }

    #[must_use]
    pub fn urgency(self) -> u8 {
        match self {
            Self::BadStatus(_) => 40,
            Self::Tls => 45,
            Self::Connection => 50,
            Self::Timeout | Self::Unknown => 30,
        }
    }

    #[must_use]
    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult::single(self.problem(), self.urgency())
    }
}

/// Walks an error's source chain looking for a `rustls` failure.
///
/// `rustls` errors surface wrapped in an `io::Error` from the TLS stream, so
/// each link is checked both directly and through `io::Error::get_ref`.
fn chain_has_tls_error(first: Option<&(dyn StdError + 'static)>) -> bool {
    let mut current = first;
    while let Some(err) = current {
        if is_tls_error(err) {
            return true;
        }
        current = err.source();
    }
    false
}

fn is_tls_error(err: &(dyn StdError + 'static)) -> bool {
    if err.is::<rustls::Error>() {
        return true;
    }
    err.downcast_ref::<io::Error>()
        .and_then(io::Error::get_ref)
        .is_some_and(|inner| inner.is::<rustls::Error>())
}
