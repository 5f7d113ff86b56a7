use macroquad::prelude::*;

const FILL: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const FILL_HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// Clickable toolbar button
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Left button pressed over this button during the current frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let fill = if self.is_hovered(mouse_pos) { FILL_HOVER } else { FILL };

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, BLACK);

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
