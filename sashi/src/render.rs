use sashi_ipc::RulerConfig;
use serde::{Deserialize, Serialize};

/// Horizontal position of the "N pixels" label.
pub const WIDTH_LABEL_X: i32 = 20;
/// Rulers at least this tall label major ticks along both long edges.
pub const DOUBLE_LABEL_MIN_HEIGHT: i32 = 60;

pub const MAJOR_TICK: i32 = 15;
pub const MINOR_TICK: i32 = 10;
pub const SUB_TICK: i32 = 5;

/// 2D drawing capability supplied by the host for one paint pass.
/// Transforms apply to everything drawn after them.
pub trait Surface {
    fn rotate(&mut self, degrees: f32);
    fn translate(&mut self, dx: i32, dy: i32);
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
    /// Line height of the label font.
    fn text_height(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Rotate {
        degrees: f32,
    },
    Translate {
        dx: i32,
        dy: i32,
    },
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
    },
}

/// Surface that records draw calls so they can be shipped to another
/// process or replayed onto a real surface.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    text_height: i32,
}

impl RecordingSurface {
    pub fn new(text_height: i32) -> Self {
        Self {
            ops: Vec::new(),
            text_height,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn replay<S: Surface>(&self, target: &mut S) {
        for op in &self.ops {
            match op {
                DrawOp::Rotate { degrees } => target.rotate(*degrees),
                DrawOp::Translate { dx, dy } => target.translate(*dx, *dy),
                DrawOp::Rectangle {
                    x,
                    y,
                    width,
                    height,
                } => target.draw_rectangle(*x, *y, *width, *height),
                DrawOp::Line { x1, y1, x2, y2 } => target.draw_line(*x1, *y1, *x2, *y2),
                DrawOp::Text { text, x, y } => target.draw_text(text, *x, *y),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn rotate(&mut self, degrees: f32) {
        self.ops.push(DrawOp::Rotate { degrees });
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(DrawOp::Rectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn text_height(&self) -> i32 {
        self.text_height
    }
}

/// Paint the ruler for the window described by `config`.
///
/// Vertical rulers are drawn as horizontal ones rotated 90° in place, so
/// ticks always run along the long axis.
pub fn render_ruler<S: Surface>(surface: &mut S, config: &RulerConfig) {
    let (mut width, mut height) = (config.width, config.height);

    if config.is_vertical {
        surface.rotate(90.0);
        surface.translate(0, -config.width + 1);
        std::mem::swap(&mut width, &mut height);
    }

    draw_ruler(surface, width, height);
}

fn draw_ruler<S: Surface>(surface: &mut S, form_width: i32, form_height: i32) {
    let text_height = surface.text_height();

    surface.draw_rectangle(0, 0, form_width - 1, form_height - 1);

    surface.draw_text(
        &format!("{} pixels", form_width),
        WIDTH_LABEL_X,
        form_height / 2 - text_height / 2,
    );

    for i in (0..form_width).step_by(2) {
        let tick = if i % 100 == 0 {
            draw_tick_label(surface, i, form_height, MAJOR_TICK);
            MAJOR_TICK
        } else if i % 10 == 0 {
            MINOR_TICK
        } else {
            SUB_TICK
        };
        draw_tick(surface, i, form_height, tick);
    }
}

fn draw_tick<S: Surface>(surface: &mut S, x: i32, form_height: i32, tick: i32) {
    surface.draw_line(x, 0, x, tick);
    surface.draw_line(x, form_height, x, form_height - tick);
}

fn draw_tick_label<S: Surface>(surface: &mut S, x: i32, form_height: i32, tick: i32) {
    let text = x.to_string();
    let text_height = surface.text_height();

    if form_height < DOUBLE_LABEL_MIN_HEIGHT {
        surface.draw_text(&text, x, form_height / 2 - text_height / 2);
    } else {
        surface.draw_text(&text, x, tick);
        surface.draw_text(&text, x, form_height - tick - text_height);
    }
}
