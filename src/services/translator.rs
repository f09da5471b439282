use regex::Regex;

use crate::services::dictionary::Dictionary;

/// Run de palavra: span máximo de alfanuméricos/underscore. ASCII de
/// propósito — o tokenizador não faz análise léxica de verdade, então
/// `123abc` é um run só, igual a um identificador.
fn word_run_re() -> Regex {
    Regex::new(r"[0-9A-Za-z_]+").unwrap()
}

/// Traduz N linhas em exatamente N linhas, cada uma de forma
/// independente (nenhum estado atravessa linhas).
pub fn translate_lines(dict: &Dictionary, lines: &[String]) -> Vec<String> {
    let re = word_run_re();
    lines
        .iter()
        .map(|line| translate_with(&re, dict, line))
        .collect()
}

pub fn translate_line(dict: &Dictionary, line: &str) -> String {
    translate_with(&word_run_re(), dict, line)
}

// Passada única esquerda→direita: cada run de palavra passa por
// `translate`, todo o resto é copiado verbatim do intervalo entre runs.
fn translate_with(re: &Regex, dict: &Dictionary, line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    for m in re.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        out.push_str(dict.translate(m.as_str()));
        last = m.end();
    }

    out.push_str(&line[last..]);
    out
}
