//! docfind <document.json> <term> [replacement] [--regex] [--case-sensitive] [--whole-word]

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use docfind::kernel::services::adapters::load_settings_or_default;
use docfind::{DocumentHost, MemoryDocument, SearchController};

struct Args {
    document: PathBuf,
    term: String,
    replacement: Option<String>,
    use_regex: bool,
    case_sensitive: bool,
    whole_word: bool,
}

fn usage() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        "usage: docfind <document.json> <term> [replacement] [--regex] [--case-sensitive] [--whole-word]",
    )
}

fn parse_args(args: impl Iterator<Item = String>) -> io::Result<Args> {
    let mut positional = Vec::new();
    let mut use_regex = false;
    let mut case_sensitive = false;
    let mut whole_word = false;

    for arg in args {
        match arg.as_str() {
            "--regex" => use_regex = true,
            "--case-sensitive" => case_sensitive = true,
            "--whole-word" => whole_word = true,
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let document = positional.next().map(PathBuf::from).ok_or_else(usage)?;
    let term = positional.next().ok_or_else(usage)?;
    let replacement = positional.next();
    if positional.next().is_some() {
        return Err(usage());
    }

    Ok(Args {
        document,
        term,
        replacement,
        use_regex,
        case_sensitive,
        whole_word,
    })
}

fn main() -> io::Result<()> {
    let _logging = docfind::logging::init();
    let args = parse_args(std::env::args().skip(1))?;

    let data = std::fs::read_to_string(&args.document)?;
    let document = MemoryDocument::from_json(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let settings = load_settings_or_default();
    let mut controller = SearchController::with_host(document, settings);
    let now = Instant::now();
    controller.open();
    controller.set_case_sensitive(args.case_sensitive, now);
    controller.set_use_regex(args.use_regex, now);
    controller.set_whole_word(args.whole_word, now);
    controller.set_term(&args.term, now);
    controller.flush();

    let mut out = io::stdout().lock();
    if let Some(err) = controller.last_error() {
        writeln!(out, "error: {err}")?;
    }
    if let Some(host) = controller.host() {
        for m in &controller.state().matches {
            let text = host
                .root()
                .get(&m.path)
                .and_then(|node| node.text())
                .and_then(|text| text.get(m.anchor_offset..m.focus_offset))
                .unwrap_or_default();
            writeln!(
                out,
                "{} {}..{} {:?}",
                m.path, m.anchor_offset, m.focus_offset, text
            )?;
        }
    }
    writeln!(out, "{}", controller.summary())?;

    if let Some(replacement) = args.replacement {
        controller.set_replace_term(&replacement);
        controller.replace_all();
        if let Some(host) = controller.host() {
            let json = host
                .to_json_pretty()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(())
}
