//! Reading the result of a login or bind flow from the final browser redirect.
//!
//! The server sends the browser back to `<origin>/#/login` with either
//! `ssoToken` (signed in) or `ssoError` (everything else, including the
//! "Bind success" notice) in the fragment's query string.

use url::{Url, form_urlencoded};

const TOKEN_PARAM: &str = "ssoToken";
const ERROR_PARAM: &str = "ssoError";
const BIND_SUCCESS: &str = "Bind success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsoRedirect {
    /// Signed in; `token` is the new session token.
    SignedIn { token: String },
    /// The external account was bound to the signed-in user.
    Bound,
    Failed { message: String },
}

impl SsoRedirect {
    /// Returns `None` when `url` is not a redirect produced by the login flow.
    ///
    /// The server does not escape `ssoError`, so a `+` in the message reads
    /// back as a space and an `&` truncates it, as it does in the browser.
    pub fn parse(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let query = url
            .fragment()
            .and_then(|fragment| fragment.split_once('?').map(|(_, q)| q))
            .or_else(|| url.query())?;

        let mut token = None;
        let mut error = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                TOKEN_PARAM if !value.is_empty() => token = Some(value.into_owned()),
                ERROR_PARAM => error = Some(value.into_owned()),
                _ => {}
            }
        }

        match (token, error) {
            (Some(token), _) => Some(Self::SignedIn { token }),
            (None, Some(message)) if message == BIND_SUCCESS => Some(Self::Bound),
            (None, Some(message)) => Some(Self::Failed { message }),
            (None, None) => None,
        }
    }
}
