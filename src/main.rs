use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use taghelper::cli::{CliArgs, Command, ImportSource};
use taghelper::config::HelperConfig;
use taghelper::geometry::Rect;
use taghelper::host::Page;
use taghelper::runtime::Runtime;
use taghelper::store::{self, JsonFileStore, TagSet, TagStore};
use taghelper::surface::{ColumnMetrics, FlatSurface, StructuredSurface, Surface, SurfaceId};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    taghelper::tracing::init();

    let config = match &args.config {
        Some(path) => HelperConfig::load_from(path),
        None => HelperConfig::load(),
    };
    let store_path = args
        .store
        .clone()
        .or_else(|| config.store_path())
        .context("No tag store location available")?;

    match args.command {
        Command::List => {
            let store = JsonFileStore::open(store_path);
            for tag in store.list() {
                println!("{}{}", config.trigger, tag);
            }
        }
        Command::Add { tags } => {
            // Every change is written through by the store
            let mut store = JsonFileStore::open(store_path);
            for tag in tags.iter().filter_map(|t| store::clean_tag(t, config.trigger)) {
                store.add(&tag);
            }
        }
        Command::Remove { tags } => {
            let mut store = JsonFileStore::open(store_path);
            for tag in tags.iter().filter_map(|t| store::clean_tag(t, config.trigger)) {
                store.remove(&tag);
            }
        }
        Command::Search { query } => {
            let store = JsonFileStore::open(store_path);
            for tag in store::search(&store, &query) {
                println!("{}{}", config.trigger, tag);
            }
        }
        Command::Import { file } => {
            let text = read_import(ImportSource::from_arg(file))?;
            let mut store = JsonFileStore::open(store_path);
            let added = store::import_text(&mut store, &text, config.trigger);
            eprintln!("Imported {} new tags ({} total)", added, store.list().len());
        }
        Command::Export => {
            let store = JsonFileStore::open(store_path);
            println!("{}", store::export_text(&store));
        }
        Command::Replay {
            structured,
            tags,
            text,
            script,
        } => {
            let seed: TagSet = if tags.is_empty() {
                JsonFileStore::open(store_path).tags().clone()
            } else {
                tags.iter().collect()
            };
            replay(config, seed, structured, &text, &script)?;
        }
    }

    Ok(())
}

fn read_import(source: ImportSource) -> Result<String> {
    match source {
        ImportSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read import from stdin")?;
            Ok(text)
        }
        ImportSource::File(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Drive the engine against a single focused surface and report the outcome
fn replay(config: HelperConfig, seed: TagSet, structured: bool, text: &str, script: &str) -> Result<()> {
    let id = SurfaceId(1);
    let bounds = Rect::new(40.0, 40.0, 600.0, 28.0);
    let surface: Surface = if structured {
        let mut surface = StructuredSurface::editable_div(id).with_bounds(bounds);
        surface.type_text(text);
        surface.into()
    } else {
        FlatSurface::line(id, text)
            .with_bounds(bounds)
            .with_metrics(ColumnMetrics {
                char_width: 8.0,
                padding: 4.0,
            })
            .into()
    };

    let mut page = Page::default();
    page.add_surface(surface);
    page.focus(Some(id));

    let mut runtime = Runtime::new(config, page, seed);
    runtime
        .type_script(script)
        .with_context(|| format!("Invalid key script {:?}", script))?;

    let result = runtime
        .page
        .surface(id)
        .map(|s| s.text())
        .unwrap_or_default();
    println!("text: {:?}", result);
    if let Some(view) = runtime.suggestions() {
        println!("suggestions: {}", view.items.join(", "));
    }
    println!("tags: {}", runtime.store.list().join(", "));
    Ok(())
}
