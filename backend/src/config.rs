use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Upper bound on debts accepted in one simulation request.
    pub max_debts: usize,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            max_debts: 50,
        }
    }
}
impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Config::default();
        if let Some(addr) = lookup("BIND_ADDR") {
            cfg.bind_addr = addr;
        }
        if let Some(raw) = lookup("MAX_DEBTS") {
            let n: usize = raw
                .trim()
                .parse()
                .map_err(|e| anyhow!("MAX_DEBTS must be a positive integer: {e}"))?;
            if n == 0 {
                return Err(anyhow!("MAX_DEBTS must be at least 1"));
            }
            cfg.max_debts = n;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.max_debts, 50);
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("MAX_DEBTS", " 12 "),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.max_debts, 12);
    }

    #[test]
    fn rejects_bad_max_debts() {
        assert!(Config::from_lookup(lookup(&[("MAX_DEBTS", "many")])).is_err());
        assert!(Config::from_lookup(lookup(&[("MAX_DEBTS", "0")])).is_err());
    }
}
