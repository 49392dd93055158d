//! Render side: prints every new frame snapshot to stdout.

pub mod text;

use crate::shared::snapshot::FrameSnapshot;
use crate::system::bus::{RenderBus, SystemEvent};
use crossbeam_channel::select;
use std::io::{self, Write};

/// Blocks the calling thread until the logic thread reports shutdown or goes away.
pub fn run(bus: RenderBus) {
    log::info!("RENDER: Started");

    loop {
        select! {
            recv(bus.render_rx) -> frame => match frame {
                Ok(frame) => draw(&frame),
                Err(_) => {
                    log::warn!("RENDER: Logic thread is gone");
                    break;
                }
            },
            recv(bus.sys_rx) -> event => match event {
                Ok(SystemEvent::Quit) => {
                    if let Some(frame) = bus.render_rx.try_iter().last() {
                        draw(&frame);
                    }
                    break;
                }
                Err(_) => {
                    log::warn!("RENDER: Logic thread is gone");
                    break;
                }
            },
        }
    }

    log::info!("RENDER: Stopped");
}

fn draw(frame: &FrameSnapshot) {
    let mut stdout = io::stdout().lock();
    let mut output = String::from("\n");
    for line in text::render_frame(frame) {
        output.push_str(&line);
        output.push('\n');
    }
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        log::error!("RENDER: Failed to write frame: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::snapshot::{MenuSnapshot, RenderState};
    use crate::system::bus::SystemBus;
    use std::thread;
    use std::time::Duration;

    fn run_in_background(bus: RenderBus) -> crossbeam_channel::Receiver<()> {
        let (done_tx, done_rx) = crossbeam_channel::bounded(1);
        thread::spawn(move || {
            run(bus);
            let _ = done_tx.send(());
        });
        done_rx
    }

    #[test]
    fn test_exits_when_logic_end_is_dropped() {
        let (_input, logic, render) = SystemBus::new().split();
        let done = run_in_background(render);

        logic
            .render_tx
            .send(FrameSnapshot {
                active_user: None,
                notice: None,
                screen: RenderState::Menu(MenuSnapshot::default()),
            })
            .unwrap();
        drop(logic);

        assert!(done.recv_timeout(Duration::from_secs(2)).is_ok());
    }

    #[test]
    fn test_exits_on_quit() {
        let (_input, logic, render) = SystemBus::new().split();
        let done = run_in_background(render);

        logic.sys_tx.send(SystemEvent::Quit).unwrap();
        assert!(done.recv_timeout(Duration::from_secs(2)).is_ok());
    }
}
