//! On-screen presentation of a rendered chart.

use log::info;
use minifb::{Key, Window, WindowOptions};

use crate::error::{PlotError, Result};

/// Redraw rate while the window sits open.
const FPS: usize = 30;

/// Pack RGB bytes into the `0RGB` words minifb expects.
pub fn rgb_to_frame(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}

/// Show a packed RGB image and block until the window is closed or Escape
/// is pressed.
///
/// # Errors
///
/// [`PlotError::Render`] when no window can be opened (no display, for
/// instance) or the frame can't be pushed to it.
pub fn present(title: &str, rgb: &[u8], size: (u32, u32)) -> Result<()> {
    let (w, h) = (size.0 as usize, size.1 as usize);
    assert_eq!(rgb.len(), w * h * 3, "rgb: expected {}x{}x3 bytes", w, h);

    let frame = rgb_to_frame(rgb);
    let mut window = Window::new(title, w, h, WindowOptions::default())
        .map_err(|e| PlotError::Render(format!("cannot open window: {}", e)))?;
    window.set_target_fps(FPS);

    info!("showing {}x{} figure, close the window to exit", w, h);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&frame, w, h)
            .map_err(|e| PlotError::Render(e.to_string()))?;
    }
    Ok(())
}
