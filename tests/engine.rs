use inkstamp::draw::{DrawingSurface, color::WHITE};
use inkstamp::{
    BrushMode, BrushSettings, Config, DrawingEngine, EngineError, Point, RenderOutcome,
    StampCache, StampHandle,
};
use std::cell::RefCell;
use std::rc::Rc;

fn alpha_at(engine: &DrawingEngine, x: usize, y: usize) -> u32 {
    let stride = engine.surface().image_surface().stride() as usize;
    let pixels = engine.surface().pixels();
    let offset = y * stride + x * 4;
    u32::from_ne_bytes(pixels[offset..offset + 4].try_into().unwrap()) >> 24
}

fn checker_stamp() -> cairo::ImageSurface {
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();
    let ctx = cairo::Context::new(&image).unwrap();
    ctx.set_source_rgb(0.9, 0.1, 0.1);
    ctx.paint().unwrap();
    image
}

#[test]
fn horizontal_line_stroke_end_to_end() {
    let mut engine = DrawingEngine::with_size(40, 20).unwrap();
    engine.start_drawing(Point::new(0.0, 10.0));
    let outcome = engine.draw(Point::new(10.0, 10.0));
    engine.stop_drawing();

    assert!(matches!(outcome, RenderOutcome::Segment { .. }));
    assert!(alpha_at(&engine, 5, 10) > 0);
    assert_eq!(alpha_at(&engine, 30, 10), 0);

    let stroke = engine.history().last().unwrap();
    assert_eq!(stroke.len(), 2);
    assert!(!stroke.is_open());
}

#[test]
fn shared_stamp_cache_is_resolved_at_render_time() {
    let cache = Rc::new(RefCell::new(StampCache::new()));
    let surface = DrawingSurface::new(100, 100).unwrap();
    let settings = BrushSettings {
        stamp_footprint: 10.0,
        ..BrushSettings::default()
    };
    let mut engine = DrawingEngine::new(surface, settings, Rc::clone(&cache));
    engine.set_brush_mode(BrushMode::Stamp);
    engine.set_brush_image(Some(StampHandle::new("red")));

    engine.start_drawing(Point::new(20.0, 50.0));
    let before_insert = engine.draw(Point::new(45.0, 50.0));
    assert!(matches!(
        before_insert,
        RenderOutcome::Stamps { painted: 0, .. }
    ));
    assert_eq!(alpha_at(&engine, 30, 50), 0);

    // The host picks an image mid-stroke; the next segment uses it.
    cache.borrow_mut().insert("red", checker_stamp());
    let after_insert = engine.draw(Point::new(70.0, 50.0));
    assert!(matches!(
        after_insert,
        RenderOutcome::Stamps {
            placed: 3,
            painted: 3,
            ..
        }
    ));
    assert!(alpha_at(&engine, 70, 50) > 0);
    assert_eq!(alpha_at(&engine, 30, 50), 0);

    cache.borrow_mut().clear();
    assert!(matches!(
        engine.draw(Point::new(90.0, 50.0)),
        RenderOutcome::Stamps { painted: 0, .. }
    ));
}

#[test]
fn config_drives_surface_and_grid() {
    let config: Config = toml::from_str(
        r#"
        [surface]
        width = 50
        height = 30
        background = "white"

        [grid]
        enabled = true
        size = 10.0
        "#,
    )
    .unwrap();
    let engine = DrawingEngine::from_config(&config, StampCache::new()).unwrap();

    assert_eq!(engine.surface().width(), 50);
    assert_eq!(engine.surface().height(), 30);
    assert!(engine.show_grid());
    assert_eq!(engine.surface().grid_size(), 10.0);
    assert_eq!(engine.surface().background(), WHITE);
    assert_eq!(alpha_at(&engine, 5, 5), 255);
}

#[test]
fn invalid_surface_is_reported() {
    let mut config = Config::default();
    config.surface.width = 0;
    let err = DrawingEngine::from_config(&config, StampCache::new()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidSurface { width: 0, .. }));
    assert!(err.to_string().contains("Invalid drawing surface"));
}

#[test]
fn present_applies_filter_only_in_stamp_mode() {
    let mut engine = DrawingEngine::with_size(20, 20).unwrap();
    engine.start_drawing(Point::new(0.0, 10.0));
    engine.draw(Point::new(20.0, 10.0));
    engine.stop_drawing();

    let present = |engine: &DrawingEngine| {
        let host = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        let ctx = cairo::Context::new(&host).unwrap();
        engine.present(&ctx).unwrap();
        drop(ctx);
        let stride = host.stride() as usize;
        let mut alpha = 0;
        host.with_data(|data| {
            let offset = 10 * stride + 10 * 4;
            alpha = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap()) >> 24;
        })
        .unwrap();
        alpha
    };

    assert_eq!(present(&engine), 255);
    engine.set_stamp_mode(true);
    assert!(present(&engine) < 255);
    engine.set_stamp_mode(false);
    assert_eq!(present(&engine), 255);
}
