use crate::model::entry::DictEntry;
use thiserror::Error;

pub mod store;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictError {
    #[error("keyword cannot be empty")]
    EmptyKeyword,

    #[error("keyword '{0}' already exists")]
    AlreadyExists(String),

    #[error("keyword '{0}' not found")]
    NotFound(String),
}

/// Coleção ordenada de entradas, dona exclusiva durante a sessão.
/// Lookup é scan linear por igualdade exata de keyword — a invariante
/// de unicidade (garantida em `add`) torna o primeiro match bem definido.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<DictEntry>) -> Self {
        Dictionary { entries }
    }

    /// Substituição total após um load (o ciclo de vida é wholesale:
    /// carrega no início, salva no fim).
    pub fn replace(&mut self, entries: Vec<DictEntry>) {
        self.entries = entries;
    }

    pub fn find(&self, keyword: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.keyword == keyword)
    }

    pub fn add(
        &mut self,
        keyword: &str,
        translation: &str,
        description: &str,
    ) -> Result<(), DictError> {
        let keyword = keyword.trim();

        if keyword.is_empty() {
            return Err(DictError::EmptyKeyword);
        }

        if self.find(keyword).is_some() {
            return Err(DictError::AlreadyExists(keyword.to_string()));
        }

        self.entries
            .push(DictEntry::new(keyword, translation, description));

        Ok(())
    }

    /// Keyword é imutável depois de criada; só translation/description mudam.
    pub fn update(
        &mut self,
        keyword: &str,
        translation: &str,
        description: &str,
    ) -> Result<(), DictError> {
        let idx = self
            .find(keyword)
            .ok_or_else(|| DictError::NotFound(keyword.to_string()))?;

        let entry = &mut self.entries[idx];
        entry.translation = translation.to_string();
        entry.description = description.to_string();

        Ok(())
    }

    pub fn remove(&mut self, keyword: &str) -> Result<(), DictError> {
        let idx = self
            .find(keyword)
            .ok_or_else(|| DictError::NotFound(keyword.to_string()))?;

        // Vec::remove preserva a ordem das entradas seguintes.
        self.entries.remove(idx);

        Ok(())
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Tradução vazia significa "sem tradução disponível", não
    /// "traduzir para vazio" — nesses casos devolve a palavra original.
    pub fn translate<'a>(&'a self, word: &'a str) -> &'a str {
        match self.find(word) {
            Some(idx) if !self.entries[idx].translation.is_empty() => {
                &self.entries[idx].translation
            }
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_find() {
        let mut dict = Dictionary::new();
        dict.add("if", "si", "conditional").unwrap();

        let idx = dict.find("if").expect("added keyword should be found");
        assert_eq!(dict.entries()[idx].translation, "si");
        assert_eq!(dict.entries()[idx].description, "conditional");
    }

    #[test]
    fn test_add_trims_keyword() {
        let mut dict = Dictionary::new();
        dict.add("  while \t", "mientras", "").unwrap();

        assert!(dict.find("while").is_some());
        assert!(dict.find("  while \t").is_none());
    }

    #[test]
    fn test_add_empty_keyword_rejected() {
        let mut dict = Dictionary::new();

        assert_eq!(dict.add("   ", "x", "y"), Err(DictError::EmptyKeyword));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_add_duplicate_never_mutates() {
        let mut dict = Dictionary::new();
        dict.add("for", "para", "loop").unwrap();

        let result = dict.add("for", "other", "other");
        assert_eq!(result, Err(DictError::AlreadyExists("for".to_string())));

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.entries()[0].translation, "para");
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut dict = Dictionary::new();
        dict.add("If", "Si", "").unwrap();

        assert!(dict.find("if").is_none());
        assert!(dict.find("If").is_some());
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut dict = Dictionary::new();
        dict.add("int", "entero", "type").unwrap();
        dict.add("char", "caracter", "type").unwrap();

        dict.update("int", "número", "numeric type").unwrap();

        assert_eq!(dict.entries()[0].keyword, "int");
        assert_eq!(dict.entries()[0].translation, "número");
        assert_eq!(dict.entries()[0].description, "numeric type");
        // a outra entrada não é tocada
        assert_eq!(dict.entries()[1].translation, "caracter");
    }

    #[test]
    fn test_update_missing_reports_not_found() {
        let mut dict = Dictionary::new();

        assert_eq!(
            dict.update("ghost", "x", "y"),
            Err(DictError::NotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut dict = Dictionary::new();
        dict.add("a", "1", "").unwrap();
        dict.add("b", "2", "").unwrap();
        dict.add("c", "3", "").unwrap();

        dict.remove("b").unwrap();

        let keywords: Vec<&str> = dict.entries().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let mut dict = Dictionary::new();
        dict.add("a", "1", "").unwrap();

        let result = dict.remove("zz");
        assert_eq!(result, Err(DictError::NotFound("zz".to_string())));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_translate_hit_and_miss() {
        let mut dict = Dictionary::new();
        dict.add("if", "si", "").unwrap();

        assert_eq!(dict.translate("if"), "si");
        assert_eq!(dict.translate("unknown"), "unknown");
    }

    #[test]
    fn test_translate_empty_translation_passes_through() {
        let mut dict = Dictionary::new();
        dict.add("for", "", "loop").unwrap();

        assert_eq!(dict.translate("for"), "for");
    }

    #[test]
    fn test_translate_is_idempotent_per_state() {
        let mut dict = Dictionary::new();
        dict.add("while", "mientras", "").unwrap();

        let first = dict.translate("while").to_string();
        let second = dict.translate("while").to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut dict = Dictionary::new();
        dict.add("old", "velho", "").unwrap();

        dict.replace(vec![DictEntry::new("new", "novo", "")]);

        assert!(dict.find("old").is_none());
        assert!(dict.find("new").is_some());
        assert_eq!(dict.len(), 1);
    }
}
