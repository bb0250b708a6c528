use instant::Instant;
use mapnav::prelude::*;
use std::time::Duration;

/// Drives a navigator from a wall-clock loop without any rendering
fn main() -> mapnav::Result<()> {
    env_logger::init();

    println!("🗺️ mapnav Headless Example");
    println!("==========================");

    let config = NavigatorConfig::from_json(r#"{ "default_duration_ms": 400 }"#)?;
    let map = MapOptions::with_resolution_pyramid(
        156_543.033_928,
        20,
        Some(Bounds::from_coords(
            -20_037_508.34,
            -20_037_508.34,
            20_037_508.34,
            20_037_508.34,
        )),
    );
    let viewport = LimitedViewport::new(Viewport::new(Point::default(), 1222.99, 1024.0, 768.0))
        .with_map(map);
    let mut navigator = Navigator::with_config(viewport, config);
    let changes = navigator.subscribe();

    println!("✅ Navigator created:");
    print_state(navigator.viewport());

    println!("\n🎯 Navigating:");
    navigator.navigate_to_full_extent(ScaleMethod::Fit, Some(Duration::ZERO), None);
    print_state(navigator.viewport());

    navigator.zoom_in_at(Point::new(800.0, 200.0), None, None);
    run(&mut navigator);
    print_state(navigator.viewport());

    println!("\n✈️ Flying to Tokyo:");
    navigator.fly_to(Point::new(15_545_922.0, 4_257_190.0), 9_783.94, Some(Duration::from_millis(1200)));
    run(&mut navigator);
    print_state(navigator.viewport());

    println!("\n🧭 Rotating:");
    navigator.rotate_to(-30.0, None, Some(EasingFunction::EaseInOutSine));
    run(&mut navigator);
    print_state(navigator.viewport());

    println!("\n👆 Fling:");
    navigator.fling_with(1800.0, -600.0, Duration::from_millis(800));
    run(&mut navigator);
    print_state(navigator.viewport());

    let (discrete, continuous) = changes
        .try_iter()
        .fold((0, 0), |(d, c), change| match change {
            ChangeType::Discrete => (d + 1, c),
            ChangeType::Continuous => (d, c + 1),
        });
    println!("\n📊 {} discrete and {} continuous changes", discrete, continuous);

    Ok(())
}

fn run(navigator: &mut Navigator<LimitedViewport>) {
    let started = Instant::now();
    let mut last = started;
    loop {
        std::thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let running = navigator.update_animations(now - last);
        last = now;
        if !running {
            break;
        }
    }
    println!("   ⏱️ animation took {:?}", started.elapsed());
}

fn print_state(viewport: &Viewport) {
    println!(
        "   Center: {:.1}, {:.1}  Resolution: {:.3}  Rotation: {:.1}°",
        viewport.center().x,
        viewport.center().y,
        viewport.resolution(),
        viewport.rotation()
    );
}
