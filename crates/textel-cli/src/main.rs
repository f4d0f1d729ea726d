//! Textel CLI - edit per-owner glyph canvases persisted in a JSON store.
//!
//! Each subcommand is one read-modify-write cycle against the store under
//! the owner key: load the record, restore the canvas, apply one drawing
//! operation, write the buffer back, print the rendering. The canvas itself
//! never sees the store or the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use textel_core::Glyph;
use textel_store::{
    validate_dimensions, validate_glyph, CanvasRecord, CanvasStore, JsonFileStore, StoreError,
    DEFAULT_RENDER_LIMIT,
};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "textel")]
#[command(about = "Glyph canvas editor with per-owner persistence")]
#[command(version)]
struct Cli {
    /// Path of the JSON store file
    #[arg(long, global = true, default_value = "textel.json")]
    store: PathBuf,

    /// Owner key of the canvas session
    #[arg(long, global = true, default_value = "default")]
    owner: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a fresh canvas for the owner
    Setup {
        /// Canvas width in cells
        #[arg(long)]
        width: u16,

        /// Canvas height in cells
        #[arg(long)]
        height: u16,

        /// Background glyph filling every cell
        #[arg(long, default_value = ":red_square:")]
        background: String,
    },

    /// Fill a rectangle, optionally with an inset border band
    Rect {
        /// Fill glyph
        glyph: String,

        /// Column of the top-left corner (may be negative, clips)
        x: i32,

        /// Row of the top-left corner (may be negative, clips)
        y: i32,

        /// Rectangle width in cells
        width: u32,

        /// Rectangle height in cells
        height: u32,

        /// Border band thickness inside the rectangle
        #[arg(long, default_value_t = 0)]
        line_width: u32,

        /// Glyph for the border band
        #[arg(long, default_value = " ")]
        line_glyph: String,
    },

    /// Blit a JSON 2-D array of glyphs, e.g. '[["#","O"],["/","\\"]]'
    Image {
        /// Column of the image's top-left corner
        x: i32,

        /// Row of the image's top-left corner
        y: i32,

        /// The image as a JSON array of rows of glyph strings
        image: String,
    },

    /// Set the render-time borders; omit both glyphs to reset
    Border {
        /// Glyph for the top and bottom rules
        x_border: Option<String>,

        /// Glyph flanking each row
        y_border: Option<String>,
    },

    /// Print the framed rendering
    Render,

    /// Print the rendering wrapped as a literal value
    RenderVal,

    /// Delete the owner's canvas
    Clear,
}

/// Errors surfaced to the user with a non-zero exit code.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no canvas for owner {0:?}; run `textel setup` first")]
    NoSession(String),

    #[error("image must be a JSON 2-D array of glyph strings: {0}")]
    BadImage(serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut store = JsonFileStore::new(&cli.store);
    match run(&mut store, &cli.owner, cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<S: CanvasStore>(store: &mut S, owner: &str, command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Setup {
            width,
            height,
            background,
        } => setup(store, owner, width, height, &background),
        Commands::Rect {
            glyph,
            x,
            y,
            width,
            height,
            line_width,
            line_glyph,
        } => rect(store, owner, &glyph, x, y, width, height, line_width, &line_glyph),
        Commands::Image { x, y, image } => draw_image(store, owner, x, y, &image),
        Commands::Border { x_border, y_border } => set_borders(store, owner, x_border, y_border),
        Commands::Render => render(store, owner),
        Commands::RenderVal => render_value(store, owner),
        Commands::Clear => clear(store, owner),
    }
}

fn setup<S: CanvasStore>(
    store: &mut S,
    owner: &str,
    width: u16,
    height: u16,
    background: &str,
) -> Result<String, CliError> {
    validate_glyph(background)?;
    validate_dimensions(width, height, background, DEFAULT_RENDER_LIMIT)?;
    let record = CanvasRecord::fresh(owner, width, height, background);
    store.save(&record)?;
    Ok(format!("Canvas ready: {width}x{height}, background {background:?}."))
}

fn load_record<S: CanvasStore>(store: &S, owner: &str) -> Result<CanvasRecord, CliError> {
    store
        .load(owner)?
        .ok_or_else(|| CliError::NoSession(owner.to_string()))
}

#[allow(clippy::too_many_arguments)]
fn rect<S: CanvasStore>(
    store: &mut S,
    owner: &str,
    glyph: &str,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    line_width: u32,
    line_glyph: &str,
) -> Result<String, CliError> {
    validate_glyph(glyph)?;
    if line_width > 0 {
        validate_glyph(line_glyph)?;
    }
    let mut record = load_record(store, owner)?;
    let mut canvas = record.to_canvas()?;
    canvas.rect(glyph, x, y, width, height, line_width, line_glyph);
    record.absorb(&canvas);
    store.save(&record)?;
    Ok(canvas.render())
}

/// Parse an image literal: JSON only, never evaluated, every glyph through
/// the allow-list validator.
fn parse_image(raw: &str) -> Result<Vec<Vec<Glyph>>, CliError> {
    let image: Vec<Vec<Glyph>> = serde_json::from_str(raw).map_err(CliError::BadImage)?;
    for row in &image {
        for glyph in row {
            validate_glyph(glyph)?;
        }
    }
    Ok(image)
}

fn draw_image<S: CanvasStore>(
    store: &mut S,
    owner: &str,
    x: i32,
    y: i32,
    raw: &str,
) -> Result<String, CliError> {
    let image = parse_image(raw)?;
    let mut record = load_record(store, owner)?;
    let mut canvas = record.to_canvas()?;
    canvas.draw_image(x, y, &image);
    record.absorb(&canvas);
    store.save(&record)?;
    Ok(canvas.render())
}

fn set_borders<S: CanvasStore>(
    store: &mut S,
    owner: &str,
    x_border: Option<String>,
    y_border: Option<String>,
) -> Result<String, CliError> {
    let mut record = load_record(store, owner)?;
    // One glyph without the other resets, as does omitting both.
    let (message, x_border, y_border) = match (x_border, y_border) {
        (Some(x), Some(y)) => {
            validate_glyph(&x)?;
            validate_glyph(&y)?;
            ("Borders set!", x, y)
        }
        _ => ("Borders reset!", String::new(), String::new()),
    };
    record.x_border = x_border;
    record.y_border = y_border;
    store.save(&record)?;
    Ok(message.to_string())
}

fn render<S: CanvasStore>(store: &S, owner: &str) -> Result<String, CliError> {
    let record = load_record(store, owner)?;
    Ok(record.to_canvas()?.render())
}

fn render_value<S: CanvasStore>(store: &S, owner: &str) -> Result<String, CliError> {
    let record = load_record(store, owner)?;
    Ok(format!("`{}`", record.to_canvas()?.render_value()))
}

fn clear<S: CanvasStore>(store: &mut S, owner: &str) -> Result<String, CliError> {
    if store.delete(owner)? {
        Ok("Canvas cleared. Run `textel setup` to start over.".to_string())
    } else {
        Err(CliError::NoSession(owner.to_string()))
    }
}
