use crate::core::RulerState;
use crate::effect::Effect;
use crate::event::Event;
use crate::platform::Host;
use crate::render::{render_ruler, RecordingSurface};

use super::command::process_event;

/// Execute side effects. Returns true once the window has been closed.
pub fn execute_effects<H: Host>(effects: Vec<Effect>, state: &mut RulerState, host: &H) -> bool {
    let mut closed = false;

    for effect in effects {
        match effect {
            Effect::SetBounds(bounds) => {
                host.set_bounds(bounds);
            }
            Effect::SetOpacity(opacity) => {
                host.set_opacity(opacity);
            }
            Effect::SetTopMost(top_most) => {
                host.set_top_most(top_most);
            }
            Effect::SetCursor(cursor) => {
                host.set_cursor(cursor);
            }
            Effect::SetToolTip(text) => {
                host.set_tool_tip(text.as_deref());
            }
            Effect::Redraw => {
                host.redraw();
            }
            Effect::Paint => {
                let mut surface = RecordingSurface::new(host.text_height());
                render_ruler(&mut surface, &state.config);
                host.draw(surface.ops());
            }
            Effect::PromptSize(current) => {
                if let Some(size) = host.prompt_size(current) {
                    let followup = process_event(
                        state,
                        &Event::SizeEntered {
                            width: size.width,
                            height: size.height,
                        },
                    );
                    closed |= execute_effects(followup, state, host);
                }
            }
            Effect::Duplicate { params } => match host.spawn_duplicate(&params) {
                Ok(()) => {
                    tracing::info!("Spawned duplicate ruler: {}", params.join(" "));
                }
                Err(e) => {
                    tracing::warn!("Failed to spawn duplicate ruler: {}", e);
                    host.show_message(&format!("Failed to duplicate ruler: {}", e));
                }
            },
            Effect::ShowAbout => {
                host.show_about();
            }
            Effect::ShowMessage(message) => {
                host.show_message(&message);
            }
            Effect::Close => {
                tracing::info!("Closing ruler");
                host.close();
                closed = true;
            }
        }
    }

    closed
}
