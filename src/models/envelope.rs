use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// Wrapper every admin endpoint responds with. `code == 0` means success.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

impl ApiEnvelope {
    /// Returns the payload, or the envelope's error when `code` is non-zero.
    pub fn into_data(self) -> Result<Value, Error> {
        if self.code == 0 {
            Ok(self.data)
        } else {
            Err(Error::Api {
                code: self.code,
                msg: self.msg,
            })
        }
    }
}
