use glam::vec2;
use sketchpad::geom::Rect;
use sketchpad::input::{InputEvent, Phase};
use sketchpad::render::SvgSurface;
use sketchpad::{Canvas, CanvasConfig, ResultExt};

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	// The SVG document goes to stdout, so logs go to stderr.
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.with_writer(std::io::stderr)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn main() -> anyhow::Result<()> {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	// Headless stand-in for a page: the surface sits at (8, 8) in client space.
	let surface = SvgSurface::new(Rect::from_origin_size(vec2(8.0, 8.0), vec2(400.0, 300.0)));
	let mut canvas = Canvas::new(surface, CanvasConfig::default())?;

	canvas.set_color("#e63946").ok_or_log();
	canvas.set_width(5.0).ok_or_log();
	canvas.handle(&InputEvent::pointer(Phase::Start, 18.0, 18.0));
	for i in 1..=8 {
		let x = 18.0 + 20.0 * i as f32;
		let y = if i % 2 == 0 { 18.0 } else { 48.0 };
		canvas.handle(&InputEvent::pointer(Phase::Move, x, y));
	}
	canvas.handle(&InputEvent::pointer(Phase::End, 0.0, 0.0));

	canvas.set_color("steelblue").ok_or_log();
	canvas.set_width(2.5).ok_or_log();
	canvas.handle(&InputEvent::touch(Phase::Start, [vec2(58.0, 208.0)]));
	for i in 1..=12 {
		let t = i as f32 / 12.0 * std::f32::consts::PI;
		canvas.handle(&InputEvent::touch(
			Phase::Move,
			[vec2(58.0 + 100.0 * t, 208.0 - 60.0 * t.sin())],
		));
	}
	canvas.handle(&InputEvent::touch(Phase::End, std::iter::empty::<glam::Vec2>()));

	tracing::info!(strokes = canvas.stroke_count(), width = %canvas.width_label(), "demo drawn");
	println!("{}", canvas.surface());
	Ok(())
}
