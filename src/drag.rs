use eframe::egui::{Pos2, Vec2};

/// Moves a window without title-bar chrome by following the cursor.
///
/// Idle until [`on_press`](Self::on_press), dragging until [`on_release`](Self::on_release).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    captured: Option<Vec2>,
}

impl DragController {
    /// Starts a drag, capturing where in the window the cursor grabbed it.
    pub fn on_press(&mut self, cursor_in_window: Pos2) {
        self.captured = Some(cursor_in_window.to_vec2());
        tracing::trace!(offset = ?cursor_in_window, "window drag started");
    }

    /// Returns where the window's top-left corner should go, or `None` while idle.
    pub fn on_drag(&self, cursor_on_screen: Pos2) -> Option<Pos2> {
        let offset = self.captured?;
        Some(cursor_on_screen - offset)
    }

    pub fn on_release(&mut self) {
        if self.captured.take().is_some() {
            tracing::trace!("window drag ended");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.captured.is_some()
    }

    pub fn captured_offset(&self) -> Option<Vec2> {
        self.captured
    }
}
