use std::panic;
use std::process;

use super::handler::handlers_active;
use super::signal::{self, Signal};

/// What happens to a signaled error that no [`intercept`](super::intercept) frame will catch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Report the error and keep unwinding. Every owner on the stack is released before the thread
    /// dies. This is what Rust does out of the box.
    #[default]
    Unwind,
    /// Report the error and abort the process immediately, before any unwinding. Owners still on
    /// the stack are never released.
    Abort,
}

impl Policy {
    /// Installs this policy as the process-wide panic hook.
    ///
    /// Unwinds that an active handler is going to intercept are only logged. Anything that isn't a
    /// [`Signal`] and isn't going to be intercepted falls through to the previously installed hook
    /// (under [`Policy::Unwind`]) so ordinary panics still read the usual way.
    pub fn install(self) {
        let previous = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let payload = info.payload();
            let is_signal = Signal::from_payload(payload).is_some();
            let message = signal::describe(payload);

            if handlers_active() > 0 {
                tracing::debug!(%message, "unwinding towards a handler");
                if !is_signal {
                    previous(info);
                }
                return;
            }

            match self {
                Policy::Abort => {
                    let what = if is_signal { "signal" } else { "panic" };
                    eprintln!("terminate called after {what}: {message}");
                    process::abort();
                },
                Policy::Unwind if is_signal => {
                    tracing::error!(%message, "unhandled signal");
                    eprintln!("unhandled signal: {message}");
                },
                Policy::Unwind => previous(info),
            }
        }));
    }
}
