use sashi_ipc::MenuCommand;

use crate::core::{DragUpdate, Rect, RulerState};
use crate::effect::Effect;
use crate::event::{Event, Key, Modifiers, MouseButton};

/// Turn one host event into state changes plus the effects the host must
/// carry out. Never touches the host itself.
pub fn process_event(state: &mut RulerState, event: &Event) -> Vec<Effect> {
    match event {
        Event::MouseDown {
            button,
            local,
            global,
        } => {
            if *button == MouseButton::Left {
                let bounds = state.bounds();
                let locked = state.config.is_locked;
                state.drag_mut().mouse_down(bounds, *local, *global, locked);
            }
            vec![]
        }
        Event::MouseMove { local, global } => {
            let bounds = state.bounds();
            let locked = state.config.is_locked;
            match state.drag_mut().mouse_move(bounds, *local, *global, locked) {
                DragUpdate::Nothing => vec![],
                DragUpdate::SetBounds(bounds) => apply_bounds(state, bounds),
                DragUpdate::SetCursor(cursor) => vec![Effect::SetCursor(cursor)],
            }
        }
        Event::MouseUp { .. } => {
            state.drag_mut().mouse_up();
            vec![]
        }
        Event::KeyDown { key, modifiers } => process_key(state, *key, *modifiers),
        Event::Paint => vec![Effect::Paint],
        Event::Resized { bounds } => {
            let previous = state.bounds();
            let applied = state.set_bounds(*bounds);
            let mut effects = Vec::new();
            if applied != *bounds {
                effects.push(Effect::SetBounds(applied));
            }
            if applied.size() != previous.size() {
                effects.extend(geometry_followups(state));
            }
            effects
        }
        Event::Menu { command } => process_menu_command(state, *command),
        Event::MenuLabel { label } => match label.parse::<MenuCommand>() {
            Ok(command) => process_menu_command(state, command),
            Err(e) => {
                tracing::warn!("{}", e);
                vec![Effect::ShowMessage("Unknown menu item.".to_string())]
            }
        },
        Event::SizeEntered { width, height } => {
            let bounds = state.bounds();
            apply_bounds(state, Rect::new(bounds.x, bounds.y, *width, *height))
        }
    }
}

pub fn process_menu_command(state: &mut RulerState, command: MenuCommand) -> Vec<Effect> {
    tracing::debug!("Menu command: {:?}", command);
    match command {
        MenuCommand::StayOnTop => vec![Effect::SetTopMost(state.toggle_top_most())],
        MenuCommand::Vertical => toggle_orientation(state),
        MenuCommand::ToolTip => {
            state.toggle_tool_tip();
            vec![Effect::SetToolTip(state.tool_tip())]
        }
        MenuCommand::Opacity { percent } => {
            vec![Effect::SetOpacity(state.set_opacity(percent as f64 / 100.0))]
        }
        MenuCommand::Lock => {
            state.toggle_locked();
            vec![]
        }
        MenuCommand::SetSize => vec![Effect::PromptSize(state.bounds().size())],
        MenuCommand::Duplicate => vec![Effect::Duplicate {
            params: state.snapshot().to_params(),
        }],
        MenuCommand::About => vec![Effect::ShowAbout],
        MenuCommand::Exit => vec![Effect::Close],
    }
}

/// Arrow keys move (5px, or 1px with Ctrl); Ctrl+Shift resizes by 1px.
/// Space flips the orientation.
fn process_key(state: &mut RulerState, key: Key, modifiers: Modifiers) -> Vec<Effect> {
    let (dx, dy) = match key {
        Key::Left => (-1, 0),
        Key::Right => (1, 0),
        Key::Up => (0, -1),
        Key::Down => (0, 1),
        Key::Space => return toggle_orientation(state),
        Key::Other => return vec![],
    };

    let mut bounds = state.bounds();
    if modifiers.ctrl && modifiers.shift {
        let step = state.settings.fine_step;
        bounds.width = bounds.width.saturating_add(step.saturating_mul(dx));
        bounds.height = bounds.height.saturating_add(step.saturating_mul(dy));
    } else {
        let step = if modifiers.ctrl {
            state.settings.fine_step
        } else {
            state.settings.key_step
        };
        bounds.x = bounds.x.saturating_add(step.saturating_mul(dx));
        bounds.y = bounds.y.saturating_add(step.saturating_mul(dy));
    }
    apply_bounds(state, bounds)
}

fn toggle_orientation(state: &mut RulerState) -> Vec<Effect> {
    state.toggle_orientation();
    let mut effects = vec![Effect::SetBounds(state.bounds()), Effect::Redraw];
    if let Some(text) = state.tool_tip() {
        effects.push(Effect::SetToolTip(Some(text)));
    }
    effects
}

/// Store the bounds and emit the single `SetBounds` the host needs, plus a
/// repaint and tooltip refresh when the size changed.
fn apply_bounds(state: &mut RulerState, bounds: Rect) -> Vec<Effect> {
    let previous = state.bounds();
    let applied = state.set_bounds(bounds);
    if applied == previous {
        return vec![];
    }

    let mut effects = vec![Effect::SetBounds(applied)];
    if applied.size() != previous.size() {
        effects.extend(geometry_followups(state));
    }
    effects
}

fn geometry_followups(state: &RulerState) -> Vec<Effect> {
    let mut effects = vec![Effect::Redraw];
    if let Some(text) = state.tool_tip() {
        effects.push(Effect::SetToolTip(Some(text)));
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CursorIcon, DragMode, Point, Settings, Size};
    use sashi_ipc::RulerConfig;

    fn setup_state() -> RulerState {
        RulerState::new(
            RulerConfig {
                x: 100,
                y: 200,
                width: 300,
                height: 50,
                ..RulerConfig::default()
            },
            Settings::default(),
        )
    }

    fn at(state: &RulerState, x: i32, y: i32) -> (Point, Point) {
        let local = Point::new(x, y);
        (local, local + state.bounds().origin())
    }

    fn press(state: &mut RulerState, x: i32, y: i32) {
        let (local, global) = at(state, x, y);
        process_event(
            state,
            &Event::MouseDown {
                button: MouseButton::Left,
                local,
                global,
            },
        );
    }

    fn move_to_global(state: &mut RulerState, global: Point) -> Vec<Effect> {
        let local = global - state.bounds().origin();
        process_event(state, &Event::MouseMove { local, global })
    }

    fn release(state: &mut RulerState) {
        process_event(
            state,
            &Event::MouseUp {
                button: MouseButton::Left,
                local: Point::default(),
                global: Point::default(),
            },
        );
    }

    fn key(state: &mut RulerState, key: Key, ctrl: bool, shift: bool) -> Vec<Effect> {
        process_event(
            state,
            &Event::KeyDown {
                key,
                modifiers: Modifiers {
                    ctrl,
                    shift,
                    alt: false,
                },
            },
        )
    }

    #[test]
    fn test_move_gesture_moves_by_delta() {
        let mut state = setup_state();
        press(&mut state, 150, 25);
        let effects = move_to_global(&mut state, Point::new(250 + 30, 225 - 12));
        assert_eq!(effects, vec![Effect::SetBounds(Rect::new(130, 188, 300, 50))]);
        release(&mut state);
        assert_eq!(state.drag().mode(), DragMode::None);
    }

    #[test]
    fn test_resize_east_gesture() {
        let mut state = setup_state();
        press(&mut state, 298, 25);
        assert_eq!(state.drag().mode(), DragMode::Resize);
        let effects = move_to_global(&mut state, Point::new(398 + 20, 225 + 9));
        assert_eq!(
            effects,
            vec![
                Effect::SetBounds(Rect::new(100, 200, 320, 50)),
                Effect::Redraw
            ]
        );
    }

    #[test]
    fn test_resize_north_east_gesture() {
        let mut state = setup_state();
        press(&mut state, 299, 0);
        move_to_global(&mut state, Point::new(399 + 10, 200 - 20));
        assert_eq!(state.bounds(), Rect::new(100, 180, 310, 70));
    }

    #[test]
    fn test_locked_resize_is_ignored() {
        let mut state = setup_state();
        press(&mut state, 298, 25);
        process_event(&mut state, &Event::Menu { command: MenuCommand::Lock });
        let effects = move_to_global(&mut state, Point::new(450, 240));
        assert!(effects.is_empty());
        assert_eq!(state.bounds(), Rect::new(100, 200, 300, 50));
    }

    #[test]
    fn test_locked_hover_keeps_default_cursor() {
        let mut state = setup_state();
        process_event(&mut state, &Event::Menu { command: MenuCommand::Lock });
        let (_, global) = at(&state, 0, 0);
        assert!(move_to_global(&mut state, global).is_empty());
        let (_, global) = at(&state, 298, 25);
        assert!(move_to_global(&mut state, global).is_empty());
    }

    #[test]
    fn test_hover_updates_cursor() {
        let mut state = setup_state();
        let (_, global) = at(&state, 150, 49);
        assert_eq!(
            move_to_global(&mut state, global),
            vec![Effect::SetCursor(CursorIcon::VerticalResize)]
        );
    }

    #[test]
    fn test_right_button_does_not_start_gesture() {
        let mut state = setup_state();
        let (local, global) = at(&state, 150, 25);
        process_event(
            &mut state,
            &Event::MouseDown {
                button: MouseButton::Right,
                local,
                global,
            },
        );
        assert_eq!(state.drag().mode(), DragMode::None);
    }

    #[test]
    fn test_arrow_keys_move() {
        let mut state = setup_state();
        key(&mut state, Key::Right, false, false);
        assert_eq!(state.bounds().origin(), Point::new(105, 200));
        key(&mut state, Key::Up, true, false);
        assert_eq!(state.bounds().origin(), Point::new(105, 199));
        // Shift alone is a plain move
        key(&mut state, Key::Down, false, true);
        assert_eq!(state.bounds().origin(), Point::new(105, 204));
    }

    #[test]
    fn test_ctrl_shift_arrows_resize() {
        let mut state = setup_state();
        key(&mut state, Key::Right, true, true);
        key(&mut state, Key::Down, true, true);
        assert_eq!(state.bounds(), Rect::new(100, 200, 301, 51));
        key(&mut state, Key::Left, true, true);
        key(&mut state, Key::Up, true, true);
        assert_eq!(state.bounds(), Rect::new(100, 200, 300, 50));
    }

    #[test]
    fn test_keyboard_resize_stops_at_min_size() {
        let mut state = RulerState::new(
            RulerConfig {
                width: 1,
                height: 1,
                ..RulerConfig::default()
            },
            Settings::default(),
        );
        assert!(key(&mut state, Key::Left, true, true).is_empty());
        assert_eq!(state.bounds().size(), Size::new(1, 1));
    }

    #[test]
    fn test_keys_and_press_at_coordinate_extremes() {
        let decoded = |params: &str| {
            let tokens: Vec<&str> = params.split_whitespace().collect();
            RulerState::new(
                RulerConfig::from_params(&tokens).unwrap(),
                Settings::default(),
            )
        };

        let mut state = decoded("2147483647 0 400 75 false false false 0.6 false");
        assert!(key(&mut state, Key::Right, false, false).is_empty());
        assert_eq!(state.bounds().x, i32::MAX);

        let mut state = decoded("0 -2147483648 400 75 false false false 0.6 false");
        assert!(key(&mut state, Key::Up, true, false).is_empty());
        assert_eq!(state.bounds().y, i32::MIN);

        let mut state = decoded("0 0 400 2147483647 false false false 0.6 false");
        assert!(key(&mut state, Key::Down, true, true).is_empty());
        assert_eq!(state.bounds().height, i32::MAX);

        let mut state = decoded("-2147483648 0 400 75 false false false 0.6 false");
        process_event(
            &mut state,
            &Event::MouseDown {
                button: MouseButton::Left,
                local: Point::new(150, 30),
                global: Point::new(10, 30),
            },
        );
        assert_eq!(state.drag().mode(), DragMode::Move);
        let effects = move_to_global(&mut state, Point::new(20, 30));
        assert_eq!(effects, vec![Effect::SetBounds(Rect::new(-2147483638, 0, 400, 75))]);
    }

    #[test]
    fn test_space_toggles_orientation() {
        let mut state = setup_state();
        let effects = key(&mut state, Key::Space, false, false);
        assert!(state.config.is_vertical);
        assert_eq!(
            effects,
            vec![
                Effect::SetBounds(Rect::new(100, 200, 50, 300)),
                Effect::Redraw
            ]
        );
        key(&mut state, Key::Space, false, false);
        assert_eq!(state.bounds(), Rect::new(100, 200, 300, 50));
        assert!(!state.config.is_vertical);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = setup_state();
        assert!(key(&mut state, Key::Other, true, true).is_empty());
    }

    #[test]
    fn test_tool_tip_follows_resize() {
        let mut state = setup_state();
        let effects = process_event(&mut state, &Event::Menu { command: MenuCommand::ToolTip });
        assert_eq!(
            effects,
            vec![Effect::SetToolTip(Some(
                "Width: 300 pixels\nHeight: 50 pixels".to_string()
            ))]
        );

        let effects = key(&mut state, Key::Right, true, true);
        assert_eq!(
            effects.last(),
            Some(&Effect::SetToolTip(Some(
                "Width: 301 pixels\nHeight: 50 pixels".to_string()
            )))
        );

        let effects = process_event(&mut state, &Event::Menu { command: MenuCommand::ToolTip });
        assert_eq!(effects, vec![Effect::SetToolTip(None)]);
    }

    #[test]
    fn test_menu_flags() {
        let mut state = setup_state();
        assert_eq!(
            process_event(&mut state, &Event::Menu { command: MenuCommand::StayOnTop }),
            vec![Effect::SetTopMost(true)]
        );
        assert_eq!(
            process_event(
                &mut state,
                &Event::Menu {
                    command: MenuCommand::Opacity { percent: 30 }
                }
            ),
            vec![Effect::SetOpacity(0.3)]
        );
        assert_eq!(state.config.opacity, 0.3);
    }

    #[test]
    fn test_menu_dialogs_and_exit() {
        let mut state = setup_state();
        assert_eq!(
            process_event(&mut state, &Event::Menu { command: MenuCommand::SetSize }),
            vec![Effect::PromptSize(Size::new(300, 50))]
        );
        assert_eq!(
            process_event(&mut state, &Event::Menu { command: MenuCommand::About }),
            vec![Effect::ShowAbout]
        );
        assert_eq!(
            process_event(&mut state, &Event::Menu { command: MenuCommand::Exit }),
            vec![Effect::Close]
        );
    }

    #[test]
    fn test_duplicate_encodes_current_config() {
        let mut state = setup_state();
        state.toggle_locked();
        let effects = process_event(&mut state, &Event::Menu { command: MenuCommand::Duplicate });
        let Effect::Duplicate { params } = &effects[0] else {
            panic!("expected duplicate effect, got {:?}", effects);
        };
        assert_eq!(RulerConfig::from_params(params).unwrap(), state.snapshot());
    }

    #[test]
    fn test_menu_label_dispatch() {
        let mut state = setup_state();
        process_event(
            &mut state,
            &Event::MenuLabel {
                label: "Lock resizing".to_string(),
            },
        );
        assert!(state.config.is_locked);

        let effects = process_event(
            &mut state,
            &Event::MenuLabel {
                label: "Bogus".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![Effect::ShowMessage("Unknown menu item.".to_string())]
        );
    }

    #[test]
    fn test_size_entered_is_clamped() {
        let mut state = setup_state();
        let effects = process_event(
            &mut state,
            &Event::SizeEntered {
                width: 0,
                height: 120,
            },
        );
        assert_eq!(effects[0], Effect::SetBounds(Rect::new(100, 200, 1, 120)));
    }

    #[test]
    fn test_host_resize_notification() {
        let mut state = setup_state();
        let effects = process_event(
            &mut state,
            &Event::Resized {
                bounds: Rect::new(0, 0, 640, 40),
            },
        );
        assert_eq!(effects, vec![Effect::Redraw]);
        assert_eq!(state.bounds(), Rect::new(0, 0, 640, 40));

        let effects = process_event(
            &mut state,
            &Event::Resized {
                bounds: Rect::new(0, 0, -5, 40),
            },
        );
        assert_eq!(effects[0], Effect::SetBounds(Rect::new(0, 0, 1, 40)));
    }

    #[test]
    fn test_paint_requests_render() {
        let mut state = setup_state();
        assert_eq!(process_event(&mut state, &Event::Paint), vec![Effect::Paint]);
    }
}
