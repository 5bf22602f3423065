//! Render the sign-in form to a PNG, optionally after replaying a script of
//! input events.

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbaImage;
use tracing::{Level, info};
use trellis::{Colour, Surface, Tree, dump::dump, geom::Expanse};
use trellis_demos::{form, script};
use trellis_widgets::{BoxFonts, FontdueService};

/// CLI flags for the form demo.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Where to write the rendered PNG.
    output: PathBuf,

    /// Root width in pixels.
    #[clap(long, default_value_t = 320)]
    width: u32,

    /// Root height in pixels.
    #[clap(long, default_value_t = 200)]
    height: u32,

    /// TrueType or OpenType font used for every family. Without it text is
    /// drawn as placeholder boxes.
    #[clap(long)]
    font: Option<PathBuf>,

    /// Input script to replay before drawing.
    #[clap(long)]
    script: Option<PathBuf>,

    /// Outline every window and its content area.
    #[clap(long)]
    debug_draw: bool,

    /// Print the window hierarchy after replaying the script.
    #[clap(long)]
    dump: bool,

    /// Maximum log level written to stderr.
    #[clap(long, default_value = "warn")]
    log_level: Level,
}

/// Build the tree with the requested font backend.
fn tree(args: &Args) -> Result<Tree> {
    let size = Expanse::new(args.width, args.height);
    Ok(match &args.font {
        Some(path) => {
            let mut fonts = FontdueService::new().with_fallback("Tahoma");
            fonts
                .register_file("Tahoma", path)
                .with_context(|| format!("loading font {}", path.display()))?;
            Tree::new(size, fonts)
        }
        None => Tree::new(size, BoxFonts),
    })
}

/// Run the form demo.
fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut tree = tree(&args)?;
    tree.debug_draw = args.debug_draw;
    let form = form::build(&mut tree)?;

    if let Some(path) = &args.script {
        let src = fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        let events = script::parse(&src)?;
        info!(count = events.len(), "replaying script");
        tree.process_events(events)?;
    }

    let mut canvas = Surface::filled(tree.rect(tree.root())?.expanse(), Colour::WHITE);
    tree.draw(&mut canvas)?;

    if args.dump {
        print!("{}", dump(&tree, form.panel)?);
    }

    let img = RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgba_bytes())
        .context("surface size does not match its pixel buffer")?;
    img.save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(path = %args.output.display(), "wrote image");
    Ok(())
}
