use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::entry::DictEntry;
use crate::services::encoding;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persistence target unavailable at '{path}': {source}")]
    Unavailable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Carrega o dicionário inteiro do arquivo flat (um registro por linha,
/// `keyword,translation,description`). Nunca falha o load inteiro:
/// registro malformado é pulado com warning, linha em branco é pulada
/// em silêncio, arquivo ausente vira dicionário vazio.
pub fn load(path: &Path) -> Vec<DictEntry> {
    if !path.exists() {
        eprintln!(
            "[DICT] '{}' not found, starting with an empty dictionary",
            path.display()
        );
        return Vec::new();
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("[DICT] failed to read '{}': {e}", path.display());
            return Vec::new();
        }
    };

    // Arquivos herdados da ferramenta antiga podem estar em codepage
    // de 8 bits; decodifica por detecção em vez de assumir UTF-8.
    let data = encoding::decode_bytes(&bytes);

    let mut entries = Vec::new();

    for line in data.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Some(entry) => entries.push(entry),
            None => {
                eprintln!("[DICT] skipping malformed record: {line}");
            }
        }
    }

    entries
}

/// Um registro válido tem exatamente três campos separados por vírgula;
/// vírgulas extras ficam dentro de description (leitura "resto da linha",
/// igual ao formato original).
fn parse_record(line: &str) -> Option<DictEntry> {
    let mut fields = line.splitn(3, ',');

    let keyword = fields.next()?;
    let translation = fields.next()?;
    let description = fields.next()?;

    Some(DictEntry::new(keyword, translation, description))
}

/// Serializa o dicionário inteiro, sobrescrevendo o conteúdo anterior.
/// A escrita é atômica (tmp + rename) para não deixar o arquivo pela
/// metade se algo falhar no meio.
pub fn save(path: &Path, entries: &[DictEntry]) -> Result<(), StoreError> {
    let mut out = String::new();

    for e in entries {
        out.push_str(&e.keyword);
        out.push(',');
        out.push_str(&e.translation);
        out.push(',');
        out.push_str(&e.description);
        out.push('\n');
    }

    write_atomic(path, out.as_bytes()).map_err(|e| StoreError::Unavailable {
        path: path.display().to_string(),
        source: e,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&tmp, bytes)?;

    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp, path)?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "dict".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
