use cairo::{Context, Format, ImageSurface};
use lumina_canvas::draw::CairoContext;
use lumina_canvas::input::DrawingSurface;

const SIZE: i32 = 100;

/// Runs `draw` against a surface painting onto a fresh image, then hands back
/// the image once the drawing context has been released.
fn paint(draw: impl FnOnce(&mut DrawingSurface<CairoContext>)) -> ImageSurface {
    let image = ImageSurface::create(Format::ARgb32, SIZE, SIZE).unwrap();
    let ctx = Context::new(&image).unwrap();
    let mut surface = DrawingSurface::new(CairoContext::new(ctx));
    draw(&mut surface);
    drop(surface);
    image.flush();
    image
}

fn drag(surface: &mut DrawingSurface<CairoContext>, tool: &str, from: (f64, f64), to: (f64, f64)) {
    surface.set_tool(tool);
    surface.on_pointer_down(from.0, from.1);
    surface.on_pointer_move(to.0, to.1);
    surface.on_pointer_up(to.0, to.1);
}

/// Returns the pixel as `[b, g, r, a]` (native-endian ARGB32 on little-endian hosts).
fn pixel(image: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let i = y * stride + x * 4;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

fn pixels(image: &mut ImageSurface) -> Vec<u8> {
    image.data().unwrap().to_vec()
}

fn is_blank(image: &mut ImageSurface) -> bool {
    image.data().unwrap().iter().all(|byte| *byte == 0)
}

#[test]
fn rectangle_outline_is_stroked_in_diagram_blue() {
    let mut image = paint(|surface| drag(surface, "rectangle", (10.0, 10.0), (60.0, 50.0)));

    let [b, _g, r, a] = pixel(&mut image, 10, 30);
    assert_eq!(a, 255);
    assert!(b > r, "edge should be blue, got b={b} r={r}");

    assert_eq!(pixel(&mut image, 35, 30), [0, 0, 0, 0], "interior stays unfilled");
}

#[test]
fn negative_extent_rectangle_matches_normalized_one() {
    let mut forward = paint(|surface| drag(surface, "rectangle", (10.0, 10.0), (60.0, 50.0)));
    let mut backward = paint(|surface| drag(surface, "rectangle", (60.0, 50.0), (10.0, 10.0)));

    assert_eq!(pixels(&mut forward), pixels(&mut backward));
}

#[test]
fn circle_is_centered_on_press_point() {
    let mut image = paint(|surface| drag(surface, "circle", (50.0, 50.0), (70.0, 95.0)));

    // radius 10 from the horizontal drag only
    assert!(pixel(&mut image, 60, 50)[3] > 0);
    assert!(pixel(&mut image, 40, 50)[3] > 0);
    assert_eq!(pixel(&mut image, 50, 50)[3], 0);
    assert_eq!(pixel(&mut image, 50, 80)[3], 0);
}

#[test]
fn line_runs_between_gesture_points() {
    let mut image = paint(|surface| drag(surface, "line", (10.0, 50.0), (90.0, 50.0)));

    assert!(pixel(&mut image, 50, 50)[3] > 0);
    assert_eq!(pixel(&mut image, 50, 10)[3], 0);
}

#[test]
fn text_label_produces_pixels() {
    let mut image = paint(|surface| {
        surface.set_tool("text");
        surface.on_pointer_down(10.0, 60.0);
        surface.submit_label("API");
    });

    assert!(!is_blank(&mut image));
}

#[test]
fn discarded_gesture_erases_preview() {
    let mut image = paint(|surface| {
        surface.set_tool("rectangle");
        surface.on_pointer_down(10.0, 10.0);
        surface.on_pointer_move(80.0, 80.0);
        surface.on_pointer_up(12.0, 12.0);
    });

    assert!(is_blank(&mut image));
}

#[test]
fn clear_wipes_the_canvas() {
    let mut image = paint(|surface| {
        drag(surface, "rectangle", (10.0, 10.0), (60.0, 50.0));
        drag(surface, "line", (0.0, 0.0), (90.0, 90.0));
        surface.clear();
    });

    assert!(is_blank(&mut image));
}

#[test]
fn undo_repaints_remaining_elements() {
    let mut expected = paint(|surface| drag(surface, "line", (10.0, 50.0), (90.0, 50.0)));
    let mut actual = paint(|surface| {
        drag(surface, "line", (10.0, 50.0), (90.0, 50.0));
        drag(surface, "circle", (50.0, 50.0), (80.0, 50.0));
        surface.undo();
    });

    assert_eq!(pixels(&mut actual), pixels(&mut expected));
}
