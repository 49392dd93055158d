//! Shared channel infrastructure between system threads.
//!
//! The `SystemBus` creates every channel once and is then split into one end
//! per thread. Each end holds only the senders and receivers its thread uses,
//! so a thread that exits disconnects its channels for the others.

use crate::input::events::StampedAction;
use crate::shared::snapshot::FrameSnapshot;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// System-level events broadcast by the logic thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    /// Application shutdown completed on the logic side.
    Quit,
}

/// Aggregates the cross-thread communication channels.
pub struct SystemBus {
    /// Input → Logic: player actions.
    action_tx: Sender<StampedAction>,
    action_rx: Receiver<StampedAction>,

    /// Logic → Render: screen snapshots.
    render_tx: Sender<FrameSnapshot>,
    render_rx: Receiver<FrameSnapshot>,

    /// Logic → Main: system events.
    sys_tx: Sender<SystemEvent>,
    sys_rx: Receiver<SystemEvent>,
}

/// Input thread end.
pub struct InputBus {
    pub action_tx: Sender<StampedAction>,
}

/// Logic thread end.
pub struct LogicBus {
    pub action_rx: Receiver<StampedAction>,
    pub render_tx: Sender<FrameSnapshot>,
    pub sys_tx: Sender<SystemEvent>,
}

/// Render (main thread) end.
pub struct RenderBus {
    pub render_rx: Receiver<FrameSnapshot>,
    pub sys_rx: Receiver<SystemEvent>,
}

impl SystemBus {
    /// Creates a new system bus with all channels initialized.
    pub fn new() -> Self {
        let (action_tx, action_rx) = unbounded();
        // Snapshots are only sent when the screen changes, so none may be dropped.
        let (render_tx, render_rx) = unbounded();
        let (sys_tx, sys_rx) = unbounded();

        Self {
            action_tx,
            action_rx,
            render_tx,
            render_rx,
            sys_tx,
            sys_rx,
        }
    }

    /// Hands out the per-thread ends. No endpoint is kept anywhere else.
    pub fn split(self) -> (InputBus, LogicBus, RenderBus) {
        (
            InputBus {
                action_tx: self.action_tx,
            },
            LogicBus {
                action_rx: self.action_rx,
                render_tx: self.render_tx,
                sys_tx: self.sys_tx,
            },
            RenderBus {
                render_rx: self.render_rx,
                sys_rx: self.sys_rx,
            },
        )
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}
