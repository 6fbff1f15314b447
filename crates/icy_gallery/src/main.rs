#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::too_many_lines,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use icy_gallery::{
    CollectionClient, Command, Effect, Gallery, HttpCollectionClient, Options, Phase, SearchEvent, SearchSession,
    render::{RenderStyle, RgbaSurface, render_session},
    shell::{HELP, ShellCommand, parse_line},
};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

pub type GalleryAppResult<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(version, about = "Search a public art collection and browse the results as a thumbnail grid", long_about = None)]
pub struct Args {
    /// Keyword to search for. Without a keyword the interactive shell starts.
    #[arg(value_name = "KEYWORD")]
    keyword: Option<String>,

    /// Search a random keyword
    #[clap(long, default_value_t = false)]
    random: bool,

    /// Write the resulting grid as PNG
    #[clap(long, value_name = "PNG")]
    snapshot: Option<PathBuf>,

    /// Number of grid columns
    #[clap(long)]
    columns: Option<usize>,

    /// Maximum number of images per search
    #[clap(long)]
    max_items: Option<usize>,

    /// Read options from this file instead of the config directory
    #[clap(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Save the effective options to the config directory
    #[clap(long, default_value_t = false)]
    store_options: bool,
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Options::config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn main() -> GalleryAppResult<()> {
    let args = Args::parse();

    // keep the handle alive, dropping it stops file logging
    let _logger = if let Some(log_dir) = get_log_dir() {
        Logger::try_with_env_or_str("info, reqwest=warn, hyper=warn, hyper_util=warn")?
            .log_to_file(FileSpec::default().directory(&log_dir).basename("icy_gallery").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("icy_gallery.log"))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
            .ok()
    } else {
        eprintln!("Failed to create log file");
        None
    };

    log::info!("Starting {}", *icy_gallery::DEFAULT_TITLE);

    let mut options = match &args.options {
        Some(path) => Options::load_from(path).with_context(|| format!("loading {}", path.display()))?,
        None => Options::load_options(),
    };
    if let Some(columns) = args.columns {
        options.grid_columns = columns.max(1);
    }
    if let Some(max_items) = args.max_items {
        options.max_items = max_items;
    }
    if args.store_options {
        options.store_options();
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("icy-gallery")
        .enable_all()
        .build()
        .context("creating tokio runtime")?;

    let client: Arc<dyn CollectionClient> = Arc::new(HttpCollectionClient::new(&options)?);
    let gallery = Gallery::new(&options);

    let result = runtime.block_on(async {
        if args.random {
            run_once(gallery, client, &options, Command::RandomKeyword, args.snapshot.as_deref()).await
        } else if let Some(keyword) = args.keyword.clone() {
            run_once(gallery, client, &options, Command::Search(keyword), args.snapshot.as_deref()).await
        } else {
            run_shell(gallery, client, &options).await
        }
    });

    log::info!("Shutting down.");
    result
}

/// Run a single search to completion and print the grid
async fn run_once(
    mut gallery: Gallery,
    client: Arc<dyn CollectionClient>,
    options: &Options,
    command: Command,
    snapshot: Option<&Path>,
) -> GalleryAppResult<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let Effect::StartSearch(job) = gallery.dispatch(command) else {
        anyhow::bail!("nothing to search for");
    };
    tokio::spawn(job.run(client, tx));

    while let Some(event) = rx.recv().await {
        let finished = matches!(event, SearchEvent::Finished { .. });
        if gallery.apply(event) {
            eprintln!("{}", gallery.session().status_text);
        }
        if finished {
            break;
        }
    }

    print_tiles(gallery.session());
    if let Some(path) = snapshot {
        write_snapshot(&gallery, options, path)?;
    }

    match gallery.session().phase {
        Phase::Error => anyhow::bail!("{}", gallery.session().error_message.clone().unwrap_or_default()),
        _ => Ok(()),
    }
}

/// Interactive mode: stdin lines are turned into commands, search events are
/// applied as they arrive.
async fn run_shell(mut gallery: Gallery, client: Arc<dyn CollectionClient>, options: &Options) -> GalleryAppResult<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    println!("{}", *icy_gallery::DEFAULT_TITLE);
    println!("{}", HELP);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match parse_line(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                match command {
                    ShellCommand::Gallery(command) => {
                        let is_hover = matches!(command, Command::PointerMoved { .. });
                        match gallery.dispatch(command) {
                            Effect::StartSearch(job) => {
                                println!("{}", gallery.session().status_text);
                                tokio::spawn(job.run(client.clone(), tx.clone()));
                            }
                            Effect::OpenUrl(url) => {
                                println!("opening {}", url);
                                if let Err(err) = open::that(&url) {
                                    log::error!("Failed to open {}: {}", url, err);
                                }
                            }
                            Effect::None => {}
                        }
                        if is_hover {
                            match gallery.hovered() {
                                Some(tile) => println!("{} / {}", tile.record.title, tile.record.artist),
                                None => println!("(no tile)"),
                            }
                        }
                    }
                    ShellCommand::List => print_tiles(gallery.session()),
                    ShellCommand::Status => println!("{}", gallery.session().status_text),
                    ShellCommand::Snapshot(path) => {
                        if let Err(err) = write_snapshot(&gallery, options, &path) {
                            println!("snapshot failed: {:#}", err);
                        }
                    }
                    ShellCommand::Help => println!("{}", HELP),
                    ShellCommand::Quit => break,
                }
            }
            Some(event) = rx.recv() => {
                if gallery.apply(event) {
                    println!("{}", gallery.session().status_text);
                }
            }
        }
    }
    Ok(())
}

fn print_tiles(session: &SearchSession) {
    for (i, tile) in session.tiles.iter().enumerate() {
        let image = if tile.has_image() { "" } else { " [no image]" };
        println!(
            "{:2}  #{:<8} {} / {}{}  ({:.0},{:.0} {:.0}x{:.0})",
            i + 1,
            tile.id(),
            tile.record.caption(),
            tile.record.artist,
            image,
            tile.bounds.x,
            tile.bounds.y,
            tile.bounds.width,
            tile.bounds.height
        );
    }
}

fn write_snapshot(gallery: &Gallery, options: &Options, path: &Path) -> GalleryAppResult<()> {
    let mut surface = RgbaSurface::new(options.canvas_width, options.canvas_height);
    if let Some(font_path) = &options.font_path {
        if let Err(err) = surface.load_font(font_path) {
            log::warn!("Can't load font {}: {}", font_path.display(), err);
        }
    }
    render_session(gallery.session(), gallery.pointer(), &mut surface, &RenderStyle::default());
    surface.save_png(path).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
