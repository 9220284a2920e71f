use viewclip::colors;
use viewclip::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use viewclip::prelude::*;

/// Margin in pixels between the display edge and the viewport border.
const VIEWPORT_MARGIN: f32 = 20.0;
/// Pan step as a fraction of the current window size.
const PAN_STEP: f32 = 0.05;
const SNAPSHOT_PATH: &str = "snapshot.png";

/// A few objects of each kind, some straddling the initial window so the
/// clipper has something to do right away.
fn sample_scene() -> Scene {
    let mut scene = Scene::new();

    scene.insert(vec![Point2D::new(20.0, 20.0)]);
    scene.insert(vec![Point2D::new(80.0, 70.0)]);
    scene.insert(vec![Point2D::new(-30.0, 50.0)]);

    scene.insert(vec![Point2D::new(-10.0, 50.0), Point2D::new(50.0, 50.0)]);
    scene.insert(vec![Point2D::new(10.0, 110.0), Point2D::new(90.0, -10.0)]);

    scene.insert(vec![
        Point2D::new(30.0, 30.0),
        Point2D::new(70.0, 30.0),
        Point2D::new(50.0, 60.0),
    ]);
    scene.insert(vec![
        Point2D::new(80.0, 80.0),
        Point2D::new(130.0, 80.0),
        Point2D::new(130.0, 130.0),
        Point2D::new(80.0, 130.0),
    ]);

    scene
}

/// Viewport filling the display area with a fixed margin.
fn viewport_for(width: u32, height: u32) -> Rect {
    Rect::new(
        Point2D::new(VIEWPORT_MARGIN, VIEWPORT_MARGIN),
        Point2D::new(width as f32 - VIEWPORT_MARGIN, height as f32 - VIEWPORT_MARGIN),
    )
}

fn main() -> Result<(), String> {
    let mut display = Display::new("Window To Viewport Mapper", DISPLAY_WIDTH, DISPLAY_HEIGHT)?;
    let mut renderer = Renderer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let mut limiter = FrameLimiter::new(&display);

    let scene = sample_scene();
    let pipeline = Pipeline::new();

    let mut window = Rect::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0));
    let mut viewport = viewport_for(DISPLAY_WIDTH, DISPLAY_HEIGHT);

    let mut is_running = true;
    while is_running {
        // Process input
        match display.poll_events() {
            DisplayEvent::Quit => is_running = false,
            DisplayEvent::Resize(w, h) => {
                display.resize(w, h)?;
                renderer.resize(w, h);
                viewport = viewport_for(w, h);
            }
            DisplayEvent::Pan(dx, dy) => {
                window = window.translated(Point2D::new(
                    dx as f32 * PAN_STEP * window.width(),
                    dy as f32 * PAN_STEP * window.height(),
                ));
            }
            DisplayEvent::ZoomIn => window = window.scaled(0.9),
            DisplayEvent::ZoomOut => window = window.scaled(1.1),
            DisplayEvent::Snapshot => {
                renderer.save_png(SNAPSHOT_PATH).map_err(|e| e.to_string())?;
                println!("Snapshot saved to {SNAPSHOT_PATH}");
            }
            DisplayEvent::None => {}
        }

        // Clip + map the scene for the current window/viewport pair
        let snapshot = pipeline.run(&scene, &window, &viewport).map_err(|e| e.to_string())?;

        // Render
        renderer.clear(colors::BACKGROUND);
        renderer.draw_snapshot(&snapshot);
        display.present(renderer.as_bytes())?;

        limiter.wait_and_get_delta(&display);
    }

    Ok(())
}
