use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hero_slideshow::notices::{notice_list, notices_or_empty, NoticeBoard, EMPTY_PLACEHOLDER};
use hero_slideshow::site::inject_fragments;
use hero_slideshow::{HeroMarkup, HeroSlider, SliderConfig};

#[derive(Parser)]
#[command(name = "hero-slideshow", version, about = "Hero slider and static site helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the hero slides declared in an HTML page
    Show {
        page: PathBuf,
        /// Time between automatic slide changes
        #[arg(long, default_value_t = 5000)]
        interval_ms: u64,
        /// Duration of the slide + fade transition
        #[arg(long, default_value_t = 700)]
        transition_ms: u64,
        /// Completes a transition whose end signal never arrived
        #[arg(long, default_value_t = 900)]
        fallback_ms: u64,
    },
    /// Print the notice list, or the board with --board
    Notices {
        path: PathBuf,
        #[arg(long)]
        board: bool,
        #[arg(long)]
        limit: Option<usize>,
        /// Board row to open (1-based, as numbered on the board)
        #[arg(long, requires = "board")]
        open: Option<usize>,
    },
    /// Print a page with the shared header and footer injected
    Inject {
        page: PathBuf,
        #[arg(long)]
        header: PathBuf,
        #[arg(long)]
        footer: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Show { page, interval_ms, transition_ms, fallback_ms } => {
            let config = SliderConfig {
                auto_advance: Duration::from_millis(interval_ms),
                transition: Duration::from_millis(transition_ms),
                completion_fallback: Duration::from_millis(fallback_ms),
            };
            show(page, config)
        }
        Command::Notices { path, board, limit, open } => {
            print_notices(&path, board, limit, open);
            Ok(())
        }
        Command::Inject { page, header, footer } => {
            let html = fs::read_to_string(&page).with_context(|| format!("failed to read {}", page.display()))?;
            print!("{}", inject_fragments(&html, fs::read_to_string(&header), fs::read_to_string(&footer)));
            Ok(())
        }
    }
}

fn print_notices(path: &std::path::Path, board: bool, limit: Option<usize>, open: Option<usize>) {
    let notices = notices_or_empty(path);

    if !board {
        for item in notice_list(&notices, limit) {
            println!("{item}");
        }
        return;
    }

    let board = NoticeBoard::new(notices);
    if board.is_empty() {
        println!("{EMPTY_PLACEHOLDER}");
        return;
    }
    for row in board.rows() {
        println!("{:>4}  {:<48}  {}", row.number, row.title, row.date);
    }
    if let Some(number) = open {
        match number.checked_sub(1).and_then(|idx| board.open(idx)) {
            Some(detail) => println!("\n{}\n{}\n\n{}", detail.title, detail.date, detail.content),
            None => warn!(number, "no such notice"),
        }
    }
}

#[cfg(feature = "window")]
fn show(page: PathBuf, config: SliderConfig) -> Result<()> {
    use hero_slideshow::constants::*;
    use hero_slideshow::engine::Engine;
    use hero_slideshow::render::HeroEngine;
    use raylib::prelude::*;

    let markup = HeroMarkup::load(&page).context("failed to load hero markup")?;
    let Some(slider) = HeroSlider::initialize(markup.slides(), markup.layer_count, config) else {
        info!("no hero slides in {}, nothing to show", page.display());
        return Ok(());
    };
    let page_dir = page.parent().map(|p| p.to_path_buf()).unwrap_or_default();

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Hero Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = HeroEngine::new(slider, page_dir);
    engine.initialize(&mut rl, &thread);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        if !engine.render_frame(dt, &mut rl, &thread, &mut framebuffer) {
            break;
        }

        // Framebuffer is stored bottom-up, draw it flipped and scaled to the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}

#[cfg(not(feature = "window"))]
fn show(page: PathBuf, config: SliderConfig) -> Result<()> {
    let markup = HeroMarkup::load(&page).context("failed to load hero markup")?;
    if HeroSlider::initialize(markup.slides(), markup.layer_count, config).is_none() {
        info!("no hero slides in {}, nothing to show", page.display());
        return Ok(());
    }
    anyhow::bail!("built without the `window` feature, cannot open a window")
}
