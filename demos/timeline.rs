//! Prints an open reveal that gets interrupted by a close, frame by frame.
//!
//! Run with `RUST_LOG=trace` to see the item's own logging.

use std::time::Duration;

use log::info;
use popup_reveal::{PopupItem, RevealConfig, RevealFrame, RevealUniforms};

const FRAME: Duration = Duration::from_millis(16);

fn print_frame(label: &str, elapsed: Duration, frame: &RevealFrame) {
    let r = frame.outline.rect;
    println!(
        "{label:>5} {:>4}ms  outline=({:6.1},{:6.1},{:6.1},{:6.1}) r={:4.1} scale={:.3} translate=({:6.1},{:6.1})",
        elapsed.as_millis(),
        r.left,
        r.top,
        r.right,
        r.bottom,
        frame.outline.radius,
        frame.icon_scale.unwrap_or(1.0),
        frame.translation.x,
        frame.translation.y,
    );
}

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("failed to read {path}: {e}");
                std::process::exit(1);
            });
            RevealConfig::from_json(&json).unwrap_or_else(|e| {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            })
        }
        None => RevealConfig::default(),
    };

    let mut item = PopupItem::new(config);
    item.measure(240.0, 56.0);
    info!("icon center {:?}", item.icon_center());

    let open = item.create_open_animation(true, true);
    let interrupt_at = open.duration() / 2;
    let mut elapsed = Duration::ZERO;
    while elapsed < interrupt_at {
        let frame = item.sample(&open, elapsed);
        print_frame("open", elapsed, &frame);
        elapsed += FRAME;
    }
    item.cancel(&open);
    info!("open interrupted at progress {:.3}", item.open_progress());

    let close = item.create_default_close_animation(true, true);
    let mut elapsed = Duration::ZERO;
    loop {
        let frame = item.sample(&close, elapsed);
        print_frame("close", elapsed, &frame);
        if close.is_finished(elapsed) {
            let bytes = RevealUniforms::from(&frame).as_bytes().len();
            info!("final uniforms: {bytes} bytes");
            break;
        }
        elapsed = (elapsed + FRAME).min(close.duration());
    }
    item.finish(&close);
    info!("open or opening: {}", item.is_open_or_opening());
}
