use anyhow::Context;
use clap::Parser;
use log::info;

use tintview::{
    AnsiTerminal, ImageInfo, Renderer,
    cli::Args,
    decode,
    render::layout::plan_with_reserved,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config();

    let image = decode::open(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    let buffer = image.buffer().context("decoded image is inconsistent")?;

    let mut terminal = AnsiTerminal::stdout();
    let geometry = config.geometry_for(&terminal);
    let grid = plan_with_reserved(image.width, image.height, geometry, config.reserved_rows);
    info!(
        "{}: {}x{} -> {}x{} cells",
        args.display_name(),
        image.width,
        image.height,
        grid.width,
        grid.height
    );

    let mut renderer = Renderer::new(buffer, grid);
    if config.show_info {
        let summary = ImageInfo {
            name: args.display_name(),
            width: image.width,
            height: image.height,
            layout: image.layout,
            terminal: geometry,
            grid,
        };
        let lines = summary
            .lines()
            .into_iter()
            .take(usize::from(config.reserved_rows))
            .collect();
        renderer = renderer.with_caption(lines);
    }

    renderer
        .render(&mut terminal)
        .context("failed to write to the terminal")?;

    Ok(())
}
