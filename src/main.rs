// SPDX-License-Identifier: MPL-2.0
//! Command-line front end: selects image files from disk and prints the result.
//!
//! ```text
//! image_select [--lang L] [--config-dir D] [--max-files N] [--max-size-mb X]
//!              [--url U]... FILE...
//! ```

use image_select::config::{self, paths};
use image_select::domain::selection::{
    MaxFiles, MaxSizeMb, RemoteRef, SelectableItem, SelectionValue,
};
use image_select::i18n::I18n;
use image_select::infrastructure::{pick_files, BlobPreviewStore};
use image_select::ui::image_select::{Labels, Message, Options, State};
use std::path::PathBuf;
use std::process::ExitCode;

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    max_files: Option<usize>,
    max_size_mb: Option<f64>,
    urls: Vec<String>,
    files: Vec<PathBuf>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        max_files: args.opt_value_from_str("--max-files")?,
        max_size_mb: args.opt_value_from_str("--max-size-mb")?,
        urls: args.values_from_str("--url")?,
        files: args.finish().into_iter().map(PathBuf::from).collect(),
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("image_select: {err}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir);
    let (config, warning) = config::load();
    let i18n = I18n::new(flags.lang.as_deref(), config.general.language.as_deref());
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let mut options = Options::from(&config.selection);
    if let Some(max_files) = flags.max_files {
        options.max_files = MaxFiles::new(max_files);
    }
    if let Some(max_size_mb) = flags.max_size_mb {
        options.max_size_mb = MaxSizeMb::new(max_size_mb);
    }

    let labels = Labels::new(&i18n, &options);
    println!("{}", labels.prompt);
    println!("{}", labels.hint);
    println!("({})", options.accept.dialog_extensions().join(", "));

    let initial: Vec<SelectableItem> = flags
        .urls
        .into_iter()
        .map(|url| RemoteRef::new(url).into())
        .collect();
    let mut state = State::with_value(
        options.clone(),
        SelectionValue::from_items(initial),
        BlobPreviewStore::new(),
    );

    let candidates = pick_files(&flags.files, &options.accept);
    state.handle(Message::FilesChosen(candidates));

    let output = state.output();
    if output.value.is_empty() {
        println!("{}", labels.empty);
    }
    for (item, entry) in state.items().iter().zip(&output.previews) {
        println!("{:>3}. {}  [{}]", entry.index + 1, item.label(), entry.source.src());
    }
    if let Some(message) = &output.message {
        println!("{}", i18n.message(message));
    }
    log::info!(
        "{} preview(s) live, {} byte(s)",
        state.provider().live_count(),
        state.provider().live_bytes()
    );

    ExitCode::SUCCESS
}
