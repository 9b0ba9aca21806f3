use std::sync::mpsc::{self, Receiver, Sender};

use crate::engine::catalog::load_monsters;
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Background worker. Owns nothing the UI thread touches; results go back
/// over `tx` and are applied by whoever drains the channel.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
}

impl Engine {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>) -> Self {
        Self { rx, tx }
    }

    /// Starts the worker thread and returns the UI side of both channels.
    pub fn spawn() -> (Sender<EngineCommand>, Receiver<EngineResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx);
            engine.run();
        });

        (cmd_tx, resp_rx)
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::LoadMonsters(path) => {
                    let monsters = load_monsters(&path);
                    if self
                        .tx
                        .send(EngineResponse::MonstersLoaded(monsters))
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }
        tracing::debug!("engine thread stopped");
    }
}
