//! The form screen and its notifier.

use super::command::Command;
use super::console::Console;
use crate::domain::ContactField;
use crate::error::NotifyResult;
use crate::form::{FormController, Notification, Notifier};
use crate::models::ContactDraft;
use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::sync::oneshot;

const HELP: &str = "\
Commands:
  <field>=<value>   set a field (mobile, first_name, last_name, company)
  save              save the contact
  show              show the form again
  help              show this help
  quit              leave
";

/// Render the form as text.
pub fn render_form(draft: &ContactDraft) -> String {
    let mut out = String::from("\nContact Book\nCreate a new contact\n\n");
    for field in ContactField::ALL {
        let label = if field.is_required() {
            format!("{} *:", field.label())
        } else {
            format!("{}:", field.label())
        };
        let value = draft.get(field);
        if value.is_empty() {
            out.push_str(&format!("  {:<13} ({})\n", label, field.placeholder()));
        } else {
            out.push_str(&format!("  {:<13} {}\n", label, value));
        }
    }
    out.push_str("\n  [ Save Contact ]  type 'save'\n");
    out
}

/// Notifications shown on the console and still waiting for Enter.
///
/// The screen owns the input; an empty line it reads acknowledges the oldest
/// waiting notification. Once closed, notifications are acknowledged as soon
/// as they are shown.
#[derive(Debug, Default)]
pub struct Acknowledgements {
    state: Mutex<AckState>,
}

#[derive(Debug, Default)]
struct AckState {
    waiting: VecDeque<oneshot::Sender<()>>,
    closed: bool,
}

impl Acknowledgements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications waiting for Enter.
    pub fn pending(&self) -> usize {
        self.lock().waiting.len()
    }

    /// Acknowledge the oldest waiting notification. `false` if none was waiting.
    pub fn acknowledge_next(&self) -> bool {
        let mut state = self.lock();
        while let Some(waiter) = state.waiting.pop_front() {
            // A dropped receiver belongs to a submission that went away
            if waiter.send(()).is_ok() {
                return true;
            }
        }
        false
    }

    /// Acknowledge everything now and in the future.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        for waiter in state.waiting.drain(..) {
            let _ = waiter.send(());
        }
    }

    /// Register a notification. `None` when acknowledgments are closed.
    fn register(&self) -> Option<oneshot::Receiver<()>> {
        let mut state = self.lock();
        if state.closed {
            return None;
        }
        let (tx, rx) = oneshot::channel();
        state.waiting.push_back(tx);
        Some(rx)
    }

    fn lock(&self) -> MutexGuard<'_, AckState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shows notifications on the console and waits for Enter.
pub struct TerminalNotifier<R, W> {
    console: Arc<Console<R, W>>,
    acks: Arc<Acknowledgements>,
}

impl<R, W> TerminalNotifier<R, W> {
    pub fn new(console: Arc<Console<R, W>>, acks: Arc<Acknowledgements>) -> Self {
        Self { console, acks }
    }
}

#[async_trait]
impl<R, W> Notifier for TerminalNotifier<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn notify(&self, notification: &Notification) -> NotifyResult<()> {
        let text = format!("\n{}\nPress Enter to continue\n", notification);
        self.console.write(&text).await?;

        if let Some(ack) = self.acks.register() {
            // Sender dropped means the screen is gone; nothing left to wait for
            let _ = ack.await;
        }
        Ok(())
    }
}

/// Interactive loop over a [`FormController`].
///
/// Input keeps being read while saves are in flight, so fields can be edited
/// and `save` issued again before an earlier request answers.
pub struct FormScreen<R, W> {
    controller: Arc<FormController>,
    console: Arc<Console<R, W>>,
    acks: Arc<Acknowledgements>,
}

impl<R, W> FormScreen<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(
        controller: Arc<FormController>,
        console: Arc<Console<R, W>>,
        acks: Arc<Acknowledgements>,
    ) -> Self {
        Self {
            controller,
            console,
            acks,
        }
    }

    /// Run until `quit` or end of input, then wait for saves still in flight.
    pub async fn run(&self) -> io::Result<()> {
        let mut saves = FuturesUnordered::new();
        // Kept across iterations: a partially read line must not be dropped
        let mut next_line = Box::pin(self.console.read_line());

        self.render().await?;
        self.console.write("> ").await?;

        loop {
            tokio::select! {
                // Saves first, so each one snapshots the draft before later lines apply
                biased;

                Some(()) = saves.next(), if !saves.is_empty() => {
                    self.render().await?;
                    self.console.write("> ").await?;
                }
                line = &mut next_line => {
                    let Some(line) = line? else {
                        break;
                    };
                    next_line = Box::pin(self.console.read_line());

                    if line.trim().is_empty() && self.acks.acknowledge_next() {
                        continue;
                    }

                    match Command::parse(&line) {
                        Command::Set(field, value) => {
                            self.controller.update_field(field, value);
                            self.render().await?;
                        }
                        Command::Save => saves.push(self.save()),
                        Command::Show => self.render().await?,
                        Command::Help => self.console.write(HELP).await?,
                        Command::Quit => break,
                        Command::Empty => {}
                        Command::Unknown(input) => {
                            self.console
                                .write(&format!("Unknown command: {} (type 'help')\n", input))
                                .await?;
                        }
                    }
                    self.console.write("> ").await?;
                }
            }
        }

        // Nobody is left to press Enter
        self.acks.close();
        while saves.next().await.is_some() {}

        Ok(())
    }

    async fn save(&self) {
        // Outcomes were already shown by the notifier
        if let Err(e) = self.controller.submit().await {
            tracing::debug!("Submit ended with error: {}", e);
        }
    }

    async fn render(&self) -> io::Result<()> {
        self.console
            .write(&render_form(&self.controller.draft()))
            .await
    }
}
