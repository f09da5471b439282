use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::services::config::Config;
use crate::services::dictionary::{store, Dictionary};
use crate::services::translator;

mod command;
use command::{DictCommand, MainCommand};

/// Loop principal da sessão: um comando por vez, ler-modificar-mostrar.
/// Genérico sobre BufRead/Write para os testes dirigirem com buffers.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    cfg: &Config,
    dict: &mut Dictionary,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "==== glossa ====")?;
        writeln!(output, "1. manage dictionary")?;
        writeln!(output, "2. translate text")?;
        writeln!(output, "3. save & exit")?;

        let line = match prompt(input, output, "> ")? {
            Some(l) => l,
            // EOF equivale a sair: ainda tenta salvar, mas sem retry
            None => {
                if let Err(e) = store::save(Path::new(&cfg.dictionary_path), dict.entries()) {
                    writeln!(output, "error: {e}")?;
                }
                return Ok(());
            }
        };

        match MainCommand::from(line.trim()) {
            MainCommand::ManageDictionary => manage_dictionary(input, output, dict)?,
            MainCommand::Translate => translate_flow(input, output, cfg, dict)?,
            MainCommand::SaveAndExit => {
                match store::save(Path::new(&cfg.dictionary_path), dict.entries()) {
                    Ok(()) => {
                        writeln!(output, "dictionary saved, bye")?;
                        return Ok(());
                    }
                    Err(e) => {
                        // Não derruba a sessão: o usuário pode tentar
                        // salvar de novo ou seguir só com o estado em memória.
                        writeln!(output, "error: {e}")?;
                        writeln!(output, "dictionary NOT saved, choose 3 to retry")?;
                    }
                }
            }
            MainCommand::Unknown => writeln!(output, "invalid option, try again")?,
        }
    }
}

fn manage_dictionary<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    dict: &mut Dictionary,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "-- dictionary --")?;
        writeln!(output, "1. add entry")?;
        writeln!(output, "2. list entries")?;
        writeln!(output, "3. update entry")?;
        writeln!(output, "4. remove entry")?;
        writeln!(output, "5. back")?;

        let line = match prompt(input, output, "> ")? {
            Some(l) => l,
            None => return Ok(()),
        };

        match DictCommand::from(line.trim()) {
            DictCommand::Add => {
                let keyword = match prompt(input, output, "keyword: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };
                let translation = match prompt(input, output, "translation: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };
                let description = match prompt(input, output, "description: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };

                match dict.add(&keyword, &translation, &description) {
                    Ok(()) => writeln!(output, "entry added")?,
                    Err(e) => writeln!(output, "error: {e}")?,
                }
            }

            DictCommand::List => {
                if dict.is_empty() {
                    writeln!(output, "dictionary is empty")?;
                } else {
                    for (i, e) in dict.entries().iter().enumerate() {
                        writeln!(
                            output,
                            "{}. {} -> {} | {}",
                            i + 1,
                            e.keyword,
                            e.translation,
                            e.description
                        )?;
                    }
                }
            }

            DictCommand::Update => {
                let keyword = match prompt(input, output, "keyword: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };
                let translation = match prompt(input, output, "new translation: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };
                let description = match prompt(input, output, "new description: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };

                match dict.update(keyword.trim(), &translation, &description) {
                    Ok(()) => writeln!(output, "entry updated")?,
                    Err(e) => writeln!(output, "error: {e}")?,
                }
            }

            DictCommand::Remove => {
                let keyword = match prompt(input, output, "keyword: ")? {
                    Some(l) => l,
                    None => return Ok(()),
                };

                match dict.remove(keyword.trim()) {
                    Ok(()) => writeln!(output, "entry removed")?,
                    Err(e) => writeln!(output, "error: {e}")?,
                }
            }

            DictCommand::Back => return Ok(()),

            DictCommand::Unknown => writeln!(output, "invalid option, try again")?,
        }
    }
}

fn translate_flow<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    cfg: &Config,
    dict: &Dictionary,
) -> io::Result<()> {
    // Guarda de usabilidade: com dicionário vazio toda palavra passaria
    // intacta, então nem vale a pena ler o texto.
    if dict.is_empty() {
        writeln!(output, "dictionary is empty, add keywords first (option 1)")?;
        return Ok(());
    }

    writeln!(
        output,
        "enter lines to translate, end with '{}':",
        cfg.end_token
    )?;

    let mut lines: Vec<String> = Vec::new();

    loop {
        match read_line(input)? {
            // Linhas entram verbatim; só a comparação com o sentinel
            // é exata sobre o conteúdo da linha.
            Some(line) if line == cfg.end_token => break,
            Some(line) => lines.push(line),
            None => break,
        }
    }

    if lines.is_empty() {
        writeln!(output, "nothing to translate")?;
        return Ok(());
    }

    for line in translator::translate_lines(dict, &lines) {
        writeln!(output, "{line}")?;
    }

    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

/// None no EOF. Remove só o terminador de linha (LF ou CRLF),
/// preservando o resto verbatim.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;

    if n == 0 {
        return Ok(None);
    }

    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }

    Ok(Some(buf))
}
