//! Drives a morphing button against an in-memory host and logs every frame.
//!
//! Run with `RUST_LOG=debug cargo run --example headless`.

use std::time::{Duration, Instant};

use morph_button::prelude::*;

struct ConsoleHost {
    size: Size,
    text: Option<String>,
    background: Option<Background>,
    clickable: bool,
}

impl HostSurface for ConsoleHost {
    fn size(&self) -> Size {
        self.size
    }

    fn set_layout_width(&mut self, width: f32) {
        self.size.width = width;
    }

    fn set_layout_height(&mut self, height: f32) {
        self.size.height = height;
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: Option<String>) {
        log::info!("text -> {:?}", text);
        self.text = text;
    }

    fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    fn background_mut(&mut self) -> Option<&mut Background> {
        self.background.as_mut()
    }

    fn set_background(&mut self, background: Option<Background>) {
        self.background = background;
    }

    fn set_clickable(&mut self, clickable: bool) {
        log::info!("clickable -> {clickable}");
        self.clickable = clickable;
    }

    fn invalidate(&mut self) {}
}

fn run(button: &mut LoadingButton<ConsoleHost>, clock: &mut Instant, frames: u32) {
    let mut ctx = PaintContext::with_capacity(1);
    for _ in 0..frames {
        *clock += Duration::from_millis(16);
        let flags = button.on_frame(*clock);

        ctx.clear();
        button.paint(&mut ctx);

        let host = button.host();
        let radius = host
            .background
            .as_ref()
            .and_then(Background::as_shape)
            .map(|shape| shape.effective_radius(host.size.width, host.size.height));
        log::info!(
            "{:?} {:>6.1}x{:<5.1} radius={:?} flags={:?} morphing={} draws={:?}",
            button.state(),
            host.size.width,
            host.size.height,
            radius,
            flags,
            button.is_morphing(),
            ctx.commands()
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let host = ConsoleHost {
        size: Size::new(240.0, 56.0),
        text: Some("Upload".to_string()),
        background: Some(ShapeDrawable::new(Color::from_hex(0x3F51B5)).into()),
        clickable: true,
    };
    let config = ButtonConfig::new()
        .final_text("Uploaded")
        .final_background(ShapeDrawable::new(Color::from_hex(0x4CAF50)))
        .initial_corner_radius(8.0);

    let mut button = match LoadingButton::new(host, config) {
        Ok(button) => button,
        Err(err) => {
            log::error!("invalid button configuration: {err}");
            return;
        }
    };
    button.set_progress_colors([Color::WHITE, Color::from_hex(0xFFC107)]);

    let mut clock = Instant::now();
    button.start();
    run(&mut button, &mut clock, 30);

    button.finish(Some(Box::new(|| log::info!("finish settled"))));
    run(&mut button, &mut clock, 22);

    log::info!("clickable at rest: {}", button.host().clickable);
}
