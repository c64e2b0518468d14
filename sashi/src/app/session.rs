use std::io::{BufRead, Write};

use anyhow::Result;
use sashi_ipc::RulerConfig;

use crate::core::Settings;
use crate::event::Event;
use crate::platform::StdioHost;

use super::Ruler;

/// Headless session: one JSON event per input line, one JSON host call per
/// output line. Ends on EOF or when the ruler is closed. Malformed lines are
/// logged and skipped.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: RulerConfig,
    settings: Settings,
    text_height: i32,
) -> Result<W> {
    let host = StdioHost::new(output, text_height);
    let mut ruler = Ruler::new(config, settings, host);

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: Event = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping malformed event {:?}: {}", line, e);
                continue;
            }
        };

        ruler.handle_event(&event);
        if ruler.is_closed() {
            break;
        }
    }

    tracing::info!("Session ended");
    let Ruler { host, .. } = ruler;
    Ok(host.into_inner())
}
