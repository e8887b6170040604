//! Typed construction of CGI query strings.
//!
//! A [`Query`] collects parameters for one [`Endpoint`] and is checked against
//! the endpoint's declared parameters when it is built into a [`Request`].

use rand::distributions::Alphanumeric;
use rand::Rng;
use store::config::EndpointsConfig;
use url::form_urlencoded;

use crate::endpoint::{Endpoint, Method};
use crate::error::ApiError;

/// Name of the cache-busting parameter added to every GET.
pub const CACHE_BUST_PARAM: &str = "random";

#[derive(Clone, Debug)]
pub struct Query {
    endpoint: Endpoint,
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            pairs: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Add the parameter only when a value is present.
    pub fn param_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Check the parameters against the endpoint and resolve its path.
    pub fn build(self, endpoints: &EndpointsConfig) -> Result<Request, ApiError> {
        let endpoint = self.endpoint;

        for (i, (name, _)) in self.pairs.iter().enumerate() {
            if endpoint.param(name).is_none() {
                return Err(ApiError::UnknownParam {
                    endpoint,
                    name: name.clone(),
                });
            }
            if self.pairs[..i].iter().any(|(seen, _)| seen == name) {
                return Err(ApiError::DuplicateParam {
                    endpoint,
                    name: name.clone(),
                });
            }
        }
        for declared in endpoint.params().iter().filter(|p| p.required) {
            if !self.pairs.iter().any(|(name, _)| name == declared.name) {
                return Err(ApiError::MissingParam {
                    endpoint,
                    name: declared.name,
                });
            }
        }

        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        if let Some(action) = endpoint.action() {
            pairs.push(("action".to_string(), action.to_string()));
        }
        pairs.extend(self.pairs);

        Ok(Request {
            endpoint,
            path: endpoints.cgi(endpoint.program().file()),
            pairs,
        })
    }
}

/// A validated request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    endpoint: Endpoint,
    path: String,
    pairs: Vec<(String, String)>,
}

impl Request {
    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Value of a parameter, `action` and `random` included.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn with_cache_bust(mut self, token: String) -> Self {
        self.pairs.retain(|(key, _)| key != CACHE_BUST_PARAM);
        self.pairs.push((CACHE_BUST_PARAM.to_string(), token));
        self
    }

    /// The encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        match (self.endpoint.flag(), encoded.is_empty()) {
            (Some(flag), true) => flag.to_string(),
            (Some(flag), false) => format!("{flag}&{encoded}"),
            (None, _) => encoded,
        }
    }

    /// Path and query, e.g. `/cgi-bin/admin.cgi?action=load_users&random=...`.
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}

/// Random alphanumeric token that keeps browsers from caching GET responses.
pub fn cache_bust_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
