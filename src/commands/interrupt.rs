use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use colonize::services::cancellation::CancellationToken;

/// Exit status used when Ctrl-C ends the process.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Stop the running batch at its next boundary.
    CancelBatch,
    /// Terminate the process.
    Exit,
}

/// Routes Ctrl-C while a command runs.
///
/// The first Ctrl-C during a batch cancels it. Once the batch is finished,
/// or on a second Ctrl-C, the process exits with status 130. The tokio
/// signal handler stays installed for the life of the process, so the
/// listener keeps running and exits explicitly instead of being dropped.
pub struct InterruptHandler {
    cancel: CancellationToken,
    batches_done: Arc<AtomicBool>,
}

impl InterruptHandler {
    pub fn install() -> Self {
        let handler = Self::detached();
        let cancel = handler.cancel.clone();
        let batches_done = handler.batches_done.clone();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                match next_action(&cancel, &batches_done) {
                    InterruptAction::CancelBatch => {
                        tracing::warn!("Interrupt received, cancelling simulation");
                    }
                    InterruptAction::Exit => process::exit(INTERRUPTED_EXIT_CODE),
                }
            }
        });
        handler
    }

    fn detached() -> Self {
        Self {
            cancel: CancellationToken::new(),
            batches_done: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Called once every batch has returned; later interrupts exit.
    pub fn finish_batches(&self) {
        self.batches_done.store(true, Ordering::SeqCst);
    }
}

fn next_action(cancel: &CancellationToken, batches_done: &AtomicBool) -> InterruptAction {
    if batches_done.load(Ordering::SeqCst) || cancel.is_cancelled() {
        return InterruptAction::Exit;
    }
    cancel.cancel();
    InterruptAction::CancelBatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interrupt(handler: &InterruptHandler) -> InterruptAction {
        next_action(&handler.cancel, &handler.batches_done)
    }

    #[test]
    fn first_interrupt_cancels_running_batch() {
        let handler = InterruptHandler::detached();
        let token = handler.token();

        assert_eq!(interrupt(&handler), InterruptAction::CancelBatch);
        assert!(token.is_cancelled());
    }

    #[test]
    fn second_interrupt_exits() {
        let handler = InterruptHandler::detached();

        interrupt(&handler);
        assert_eq!(interrupt(&handler), InterruptAction::Exit);
    }

    #[test]
    fn interrupt_after_batches_finish_exits_without_cancelling() {
        let handler = InterruptHandler::detached();
        let token = handler.token();
        handler.finish_batches();

        assert_eq!(interrupt(&handler), InterruptAction::Exit);
        assert!(!token.is_cancelled());
    }
}
