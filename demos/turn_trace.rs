//! Drives a scripted page turn and prints what a rasterizer would receive.
//!
//! Usage:
//! ```text
//! cargo run --example turn_trace                      # strong drag, commits
//! cargo run --example turn_trace -- weak              # short drag, snaps back
//! RUST_LOG=dogear=trace cargo run --example turn_trace
//! ```

use std::time::Duration;

use dogear::{CurlConfig, PageCurl, PageTurnListener, Viewport};

/// Frame interval of a 60 Hz display.
const FRAME: Duration = Duration::from_millis(16);

struct Printer;

impl PageTurnListener for Printer {
    fn on_page_pre(&mut self) {
        println!("event: previous page");
    }

    fn on_page_next(&mut self) {
        println!("event: next page");
    }

    fn on_first_page(&mut self) {
        println!("event: already on first page");
    }

    fn on_last_page(&mut self) {
        println!("event: already on last page");
    }

    fn on_page_cancel(&mut self) {
        println!("event: cancelled");
    }
}

fn print_frame(curl: &PageCurl) {
    let frame = curl.frame();
    let geo = &frame.geometry;
    let vp = curl.viewport();
    let tolerance = curl.config().flatten_tolerance;
    println!(
        "{:?} a=({:.1}, {:.1}) c.x={:.1} front={:.0} exposed={:.0} folded={:.0} shadows={}",
        curl.phase(),
        geo.a().x,
        geo.a().y,
        geo.c().x,
        frame.regions.front.area(vp, tolerance),
        frame.regions.exposed.area(vp, tolerance),
        frame.regions.folded.area(vp, tolerance),
        frame.shadows.len(),
    );
}

fn main() -> dogear::Result<()> {
    // Default: WARN for everything, INFO for dogear.
    // Override with RUST_LOG env var (e.g. RUST_LOG=dogear=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("dogear=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let weak = std::env::args().nth(1).is_some_and(|arg| arg == "weak");

    let mut curl = PageCurl::new(Viewport::new(300.0, 600.0)?, 5, CurlConfig::default())?;
    let mut printer = Printer;

    curl.on_pointer_down(290.0, 590.0);
    let steps = if weak { 2 } else { 12 };
    for step in 1..=steps {
        let t = f64::from(step);
        curl.on_pointer_move(290.0 - 20.0 * t, 590.0 - 12.0 * t);
        print_frame(&curl);
    }
    curl.on_pointer_up();

    let mut elapsed = Duration::ZERO;
    while curl.tick_with(elapsed, &mut printer) {
        print_frame(&curl);
        elapsed += FRAME;
    }
    print_frame(&curl);
    println!("current page: {}", curl.current_index());

    Ok(())
}
