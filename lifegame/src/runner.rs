// runner.rs - Cooperative playback on a single-threaded tokio LocalSet

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use egui::{PointerButton, Pos2};
use tracing::debug;

use crate::config::LifeConfig;
use crate::controller::LifeGame;
use crate::error::LifeResult;
use crate::patterns::Pattern;
use crate::surface::Surface;

/// A [`LifeGame`] shared between its input handlers and the playback task.
///
/// Everything runs on one thread, so a `RefCell` is the only guard needed:
/// each handler and each tick borrows the game for one synchronous turn.
pub struct Session<S> {
    game: Rc<RefCell<LifeGame<S>>>,
}

impl<S> Clone for Session<S> {
    fn clone(&self) -> Self {
        Self { game: Rc::clone(&self.game) }
    }
}

impl<S: Surface + 'static> Session<S> {
    pub fn new(config: LifeConfig, surface: S) -> LifeResult<Self> {
        Ok(Self {
            game: Rc::new(RefCell::new(LifeGame::new(config, surface)?)),
        })
    }

    pub fn game(&self) -> Ref<'_, LifeGame<S>> {
        self.game.borrow()
    }

    /// Starts or stops playback and returns the new running state.
    ///
    /// Starting spawns [`run_loop`] for the new run epoch. Stopping spawns
    /// nothing; the pending tick of the old loop exits on its own.
    ///
    /// # Panics
    ///
    /// Starting panics when called outside a [`tokio::task::LocalSet`].
    pub fn toggle_run(&self) -> bool {
        let (running, epoch) = {
            let mut game = self.game.borrow_mut();
            let running = game.toggle_run();
            (running, game.run_epoch())
        };
        if running {
            tokio::task::spawn_local(run_loop(Rc::clone(&self.game), epoch));
        }
        running
    }

    pub fn is_running(&self) -> bool {
        self.game.borrow().is_running()
    }

    pub fn step(&self) {
        self.game.borrow_mut().step();
    }

    pub fn clear(&self) {
        self.game.borrow_mut().clear();
    }

    pub fn paint_cell(&self, pos: Pos2, alive: bool) -> bool {
        self.game.borrow_mut().paint_cell(pos, alive)
    }

    pub fn apply_pattern(&self, pattern: &Pattern, origin: (usize, usize)) -> usize {
        self.game.borrow_mut().apply_pattern(pattern, origin)
    }

    pub fn on_pointer_down(&self, button: PointerButton, pos: Pos2) {
        self.game.borrow_mut().on_pointer_down(button, pos);
    }

    pub fn on_pointer_move(&self, pos: Pos2) {
        self.game.borrow_mut().on_pointer_move(pos);
    }

    pub fn on_pointer_up(&self, button: PointerButton) {
        self.game.borrow_mut().on_pointer_up(button);
    }

    pub fn on_pointer_leave(&self) {
        self.game.borrow_mut().on_pointer_leave();
    }
}

/// Steps `game` once per interval for as long as run `epoch` is current.
///
/// The flag is checked after each wait, before stepping and before waiting
/// again. A stop therefore takes effect at the next tick at the latest, and
/// that tick does nothing.
pub async fn run_loop<S: Surface>(game: Rc<RefCell<LifeGame<S>>>, epoch: u64) {
    debug!(epoch, "playback loop started");
    loop {
        let interval = game.borrow().config().interval;
        tokio::time::sleep(interval).await;

        let mut current = game.borrow_mut();
        if !current.is_current_run(epoch) {
            break;
        }
        current.step();
    }
    debug!(epoch, "playback loop finished");
}
