use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "glossa.json";

fn default_dictionary_path() -> String {
    "dictionary.txt".to_string()
}

fn default_end_token() -> String {
    "FIN".to_string()
}

/// Configuração da sessão, lida uma vez no startup. Todos os campos
/// têm default para aceitar arquivos parciais de versões antigas.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,

    #[serde(default = "default_end_token")]
    pub end_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary_path: default_dictionary_path(),
            end_token: default_end_token(),
        }
    }
}

pub fn load() -> Config {
    load_from(Path::new(CONFIG_FILE))
}

/// Arquivo ausente é o caso normal (defaults); arquivo ilegível ou
/// inválido avisa e segue com defaults — config nunca derruba a sessão.
fn load_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[CONFIG] failed to read '{}': {e}", path.display());
            return Config::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[CONFIG] invalid '{}': {e}", path.display());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let cfg = load_from(&dir.path().join("glossa.json"));

        assert_eq!(cfg.dictionary_path, "dictionary.txt");
        assert_eq!(cfg.end_token, "FIN");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("glossa.json");
        fs::write(&path, r#"{ "end_token": "EOF" }"#).expect("write fixture");

        let cfg = load_from(&path);
        assert_eq!(cfg.end_token, "EOF");
        assert_eq!(cfg.dictionary_path, "dictionary.txt");
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("glossa.json");
        fs::write(&path, "{ not json").expect("write fixture");

        let cfg = load_from(&path);
        assert_eq!(cfg.end_token, "FIN");
    }
}
