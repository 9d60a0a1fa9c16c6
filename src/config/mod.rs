use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

use crate::engine::ExecutionLimits;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .jslabrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).map(PathBuf::from)
    }

    pub fn tab_width(&self) -> usize {
        self.get_usize("EDITOR_TAB_WIDTH").unwrap_or(2).max(1)
    }

    pub fn snippet_save_path(&self) -> Option<PathBuf> {
        self.get_path("SNIPPET_SAVE_PATH")
    }

    /// Accent color for plain-text printing, restricted to the palette the
    /// text printer knows.
    pub fn default_color(&self) -> Option<&'static str> {
        match self.get("DEFAULT_COLOR").as_deref() {
            Some("green") => Some("green"),
            Some("cyan") => Some("cyan"),
            Some("magenta") => Some("magenta"),
            Some("yellow") => Some("yellow"),
            _ => None,
        }
    }

    /// Sandbox budgets with config overrides applied on top of the defaults.
    pub fn execution_limits(&self) -> ExecutionLimits {
        let mut limits = ExecutionLimits::default();
        if let Some(v) = self.get_u64("SANDBOX_LOOP_LIMIT") {
            limits.loop_iterations = v;
        }
        if let Some(v) = self.get_usize("SANDBOX_RECURSION_LIMIT") {
            limits.recursion_depth = v;
        }
        if let Some(v) = self.get_usize("SANDBOX_TIMER_CASCADE_LIMIT") {
            limits.timer_cascade = v;
        }
        limits
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or JSLAB_* for forward-compat
    const KEYS: &[&str] = &[
        "SANDBOX_LOOP_LIMIT",
        "SANDBOX_RECURSION_LIMIT",
        "SANDBOX_TIMER_CASCADE_LIMIT",
        "EDITOR_TAB_WIDTH",
        "DEFAULT_COLOR",
        "PRETTIFY_MARKDOWN",
        "SNIPPET_SAVE_PATH",
    ];

    KEYS.contains(&k) || k.starts_with("JSLAB_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("jslab").join(".jslabrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Numbers
    m.insert("SANDBOX_LOOP_LIMIT".into(), "5000000".into());
    m.insert("SANDBOX_RECURSION_LIMIT".into(), "512".into());
    m.insert("SANDBOX_TIMER_CASCADE_LIMIT".into(), "1000".into());
    m.insert("EDITOR_TAB_WIDTH".into(), "2".into());

    // Strings
    m.insert("DEFAULT_COLOR".into(), "magenta".into());

    // Bools as strings
    m.insert("PRETTIFY_MARKDOWN".into(), "true".into());

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_sandbox_budgets() {
        let m = default_map();
        assert_eq!(m.get("SANDBOX_LOOP_LIMIT").map(String::as_str), Some("5000000"));
        assert_eq!(m.get("SANDBOX_RECURSION_LIMIT").map(String::as_str), Some("512"));
        assert_eq!(m.get("SANDBOX_TIMER_CASCADE_LIMIT").map(String::as_str), Some("1000"));
    }

    #[test]
    fn default_color_is_restricted_to_known_names() {
        let mut inner = default_map();
        inner.insert("DEFAULT_COLOR".into(), "magenta".into());
        let cfg = Config { inner, config_path: default_config_path() };
        assert_eq!(cfg.default_color(), Some("magenta"));

        let mut inner = default_map();
        inner.insert("DEFAULT_COLOR".into(), "chartreuse".into());
        let cfg = Config { inner, config_path: default_config_path() };
        assert_eq!(cfg.default_color(), None);
    }

    #[test]
    fn jslab_prefixed_keys_are_accepted() {
        assert!(is_config_key("JSLAB_ANYTHING"));
        assert!(is_config_key("EDITOR_TAB_WIDTH"));
        assert!(!is_config_key("PATH"));
    }
}
