//! Header allow-listing for forwarded requests.
//!
//! Only a fixed set of header names crosses from the inbound request to the
//! backend. Cookies, host, user-agent, tracing ids and every hop-by-hop
//! header are dropped.

use axum::http::{HeaderMap, HeaderName};

use crate::gateway::error::{GatewayError, GatewayResult};

/// Header names forwarded when no other list is configured.
pub const DEFAULT_ALLOWED_HEADERS: [&str; 3] = ["authorization", "content-type", "accept"];

#[derive(Debug, Clone)]
pub struct HeaderAllowList {
    names: Vec<HeaderName>,
}

impl HeaderAllowList {
    /// Build from header names, matched case-insensitively.
    pub fn new<I, S>(names: I) -> GatewayResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for name in names {
            let name = name.as_ref();
            // HeaderName::from_bytes lowercases
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| GatewayError::InvalidHeaderName(name.to_string()))?;
            if !parsed.contains(&header) {
                parsed.push(header);
            }
        }
        Ok(Self { names: parsed })
    }

    pub fn allows(&self, name: &HeaderName) -> bool {
        self.names.contains(name)
    }

    /// Copy every value of every allowed header; everything else is dropped.
    pub fn filter(&self, inbound: &HeaderMap) -> HeaderMap {
        let mut outbound = HeaderMap::new();
        for name in &self.names {
            for value in inbound.get_all(name) {
                outbound.append(name.clone(), value.clone());
            }
        }
        outbound
    }
}

impl Default for HeaderAllowList {
    fn default() -> Self {
        Self {
            names: DEFAULT_ALLOWED_HEADERS
                .into_iter()
                .map(HeaderName::from_static)
                .collect(),
        }
    }
}
