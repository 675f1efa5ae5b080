use chrono::DateTime;
use serde_json::Value;

/// Normalized view of one repository search result. Every field has a safe
/// default; a missing, null, or wrong-typed JSON key never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub language: String,
    pub url: String,
    pub updated_at: String,
    pub size_kb: u64,
}

fn str_or<'a>(item: &'a Value, key: &str, default: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn u64_or(item: &Value, key: &str) -> u64 {
    item.get(key).and_then(Value::as_u64).unwrap_or(0)
}

impl RepoRecord {
    pub fn from_json(item: &Value) -> Self {
        Self {
            name: str_or(item, "name", "N/A"),
            full_name: str_or(item, "full_name", "N/A"),
            description: str_or(item, "description", "No description available"),
            stars: u64_or(item, "stargazers_count"),
            forks: u64_or(item, "forks_count"),
            language: str_or(item, "language", "Unknown"),
            url: str_or(item, "html_url", ""),
            updated_at: str_or(item, "updated_at", ""),
            size_kb: u64_or(item, "size"),
        }
    }

    /// Last-update timestamp as DD/MM/YYYY, or "N/A" when absent or unparseable.
    pub fn updated_label(&self) -> String {
        DateTime::parse_from_rfc3339(&self.updated_at)
            .map(|t| t.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| "N/A".to_string())
    }

    pub fn size_label(&self) -> String {
        if self.size_kb < 1024 {
            format!("{} KB", self.size_kb)
        } else {
            format!("{:.1} MB", self.size_kb as f64 / 1024.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_maps_to_defaults() {
        let r = RepoRecord::from_json(&json!({}));
        assert_eq!(r.name, "N/A");
        assert_eq!(r.full_name, "N/A");
        assert_eq!(r.description, "No description available");
        assert_eq!(r.stars, 0);
        assert_eq!(r.forks, 0);
        assert_eq!(r.language, "Unknown");
        assert_eq!(r.url, "");
        assert_eq!(r.updated_at, "");
        assert_eq!(r.size_kb, 0);
    }

    #[test]
    fn populated_object_maps_all_fields() {
        let r = RepoRecord::from_json(&json!({
            "name": "metasploit",
            "full_name": "rapid7/metasploit-framework",
            "description": "Metasploit Framework",
            "stargazers_count": 33000,
            "forks_count": 14000,
            "language": "Ruby",
            "html_url": "https://github.com/rapid7/metasploit-framework",
            "updated_at": "2024-05-01T12:00:00Z",
            "size": 600000,
        }));
        assert_eq!(r.name, "metasploit");
        assert_eq!(r.full_name, "rapid7/metasploit-framework");
        assert_eq!(r.stars, 33000);
        assert_eq!(r.forks, 14000);
        assert_eq!(r.language, "Ruby");
        assert_eq!(r.updated_at, "2024-05-01T12:00:00Z");
        assert_eq!(r.size_kb, 600000);
    }

    #[test]
    fn null_and_wrong_typed_fields_fall_back_to_defaults() {
        // GitHub sends explicit nulls for description/language on some repos
        let r = RepoRecord::from_json(&json!({
            "name": "x",
            "description": null,
            "language": null,
            "stargazers_count": "not a number",
        }));
        assert_eq!(r.description, "No description available");
        assert_eq!(r.language, "Unknown");
        assert_eq!(r.stars, 0);
    }

    #[test]
    fn non_object_value_maps_to_defaults() {
        let r = RepoRecord::from_json(&json!(42));
        assert_eq!(r.name, "N/A");
        assert_eq!(r.stars, 0);
    }

    #[test]
    fn updated_label_formats_or_degrades() {
        let mut r = RepoRecord::from_json(&json!({"updated_at": "2024-05-01T12:00:00Z"}));
        assert_eq!(r.updated_label(), "01/05/2024");

        r.updated_at = String::new();
        assert_eq!(r.updated_label(), "N/A");

        r.updated_at = "yesterday".to_string();
        assert_eq!(r.updated_label(), "N/A");
    }

    #[test]
    fn size_label_switches_to_megabytes() {
        let mut r = RepoRecord::from_json(&json!({"size": 1023}));
        assert_eq!(r.size_label(), "1023 KB");

        r.size_kb = 2560;
        assert_eq!(r.size_label(), "2.5 MB");
    }
}
