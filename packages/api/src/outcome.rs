//! Classification of CGI responses.

/// Result of one request, as every call site consumes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// 200: the body is a pre-rendered fragment.
    Success(String),
    /// 400: the server rejected the input.
    ClientError(String),
    /// 403: the session is missing, expired or lacks privilege.
    Unauthorized,
    /// Anything else. `0` means no response arrived.
    ServerError(u16),
}

impl Outcome {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            200 => Outcome::Success(body),
            400 => Outcome::ClientError(body),
            403 => Outcome::Unauthorized,
            other => Outcome::ServerError(other),
        }
    }

    /// Status code the outcome was built from.
    pub fn status(&self) -> u16 {
        match self {
            Outcome::Success(_) => 200,
            Outcome::ClientError(_) => 400,
            Outcome::Unauthorized => 403,
            Outcome::ServerError(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(Outcome::from_status(200, "x".into()), Outcome::Success("x".into()));
        assert_eq!(Outcome::from_status(400, "bad".into()), Outcome::ClientError("bad".into()));
        assert_eq!(Outcome::from_status(403, String::new()), Outcome::Unauthorized);
        assert_eq!(Outcome::from_status(500, String::new()), Outcome::ServerError(500));
        assert_eq!(Outcome::from_status(204, String::new()), Outcome::ServerError(204));
        assert_eq!(Outcome::from_status(0, String::new()).status(), 0);
    }
}
