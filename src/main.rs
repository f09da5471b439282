use std::io;
use std::path::Path;

mod cli;
mod model;
mod services;

use services::config;
use services::dictionary::{store, Dictionary};

fn main() {
    let cfg = config::load();

    // Carga única no início da sessão; o save único fica por conta
    // do fluxo de saída do CLI.
    let mut dict = Dictionary::from_entries(store::load(Path::new(&cfg.dictionary_path)));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = cli::run(&mut input, &mut output, &cfg, &mut dict) {
        eprintln!("[CLI] terminal i/o error: {e}");
    }
}
