use std::fmt;

use crate::config::Config;

/// Key/value context attached to every log line of a run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    config: &'a Config,
    ip: Option<&'a str>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Fields { config, ip: None }
    }

    pub(crate) fn with_ip(self, ip: &'a str) -> Self {
        Fields {
            ip: Some(ip),
            ..self
        }
    }
}

impl fmt::Display for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hosted_zone={zone} record_name={name} ttl={ttl}",
            zone = self.config.hosted_zone,
            name = self.config.record_name,
            ttl = self.config.ttl,
        )?;
        if let Some(ip) = self.ip {
            write!(f, " ip={}", ip)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("Z123".into(), "home.example.com.".into(), 300).unwrap()
    }

    #[test]
    fn renders_configuration_fields() {
        let config = config();
        assert_eq!(
            Fields::new(&config).to_string(),
            "hosted_zone=Z123 record_name=home.example.com. ttl=300"
        );
    }

    #[test]
    fn appends_ip_once_resolved() {
        let config = config();
        let fields = Fields::new(&config).with_ip("198.51.100.4");
        assert_eq!(
            fields.to_string(),
            "hosted_zone=Z123 record_name=home.example.com. ttl=300 ip=198.51.100.4"
        );
    }
}
