use crate::error::{Error, Result};

/// Everything a single run needs to know about the record it maintains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub hosted_zone: String,
    pub record_name: String,
    pub ttl: u32,
}

impl Config {
    pub(crate) fn new(hosted_zone: String, record_name: String, ttl: u32) -> Result<Self> {
        if hosted_zone.is_empty() {
            return Err(Error::config("hosted zone ID must not be empty"));
        }
        if record_name.is_empty() {
            return Err(Error::config("record name must not be empty"));
        }
        if ttl == 0 {
            return Err(Error::config("record TTL must be positive"));
        }
        Ok(Config {
            hosted_zone,
            record_name,
            ttl,
        })
    }
}
