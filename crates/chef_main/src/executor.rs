use std::ops::ControlFlow;

use chef_domain::MenuSource;
use chef_services::MenuLoader;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::domain::{Action, Command};

/// Runs [`Command`]s produced by the update loop. Fetches are spawned and
/// report back through the action channel; nothing here blocks.
pub struct Executor<S> {
    loader: MenuLoader<S>,
    tx: UnboundedSender<Action>,
}

impl<S: MenuSource + 'static> Executor<S> {
    pub fn new(loader: MenuLoader<S>, tx: UnboundedSender<Action>) -> Self {
        Self { loader, tx }
    }

    pub fn execute(&self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Empty => ControlFlow::Continue(()),
            Command::Exit => ControlFlow::Break(()),
            Command::FetchMenu { request_id, language } => {
                let loader = self.loader.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let response = loader.load_tagged(request_id, language).await;
                    if tx.send(response.into()).is_err() {
                        debug!(%request_id, "Menu response arrived after shutdown");
                    }
                });
                ControlFlow::Continue(())
            }
            Command::And(commands) => {
                for command in commands {
                    self.execute(command)?;
                }
                ControlFlow::Continue(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chef_domain::{FetchError, Language, MenuCategory, RequestId};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;

    struct StaticSource;

    #[async_trait::async_trait]
    impl MenuSource for StaticSource {
        async fn fetch_menu(&self, language: Language) -> Result<Vec<MenuCategory>, FetchError> {
            Ok(vec![MenuCategory::new("c1", format!("Menu {language}"))])
        }
    }

    fn executor() -> (Executor<StaticSource>, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Executor::new(MenuLoader::new(Arc::new(StaticSource)), tx), rx)
    }

    #[tokio::test]
    async fn test_fetch_reports_back_through_channel() {
        let (fixture, mut rx) = executor();

        let flow = fixture.execute(Command::FetchMenu {
            request_id: RequestId::new(4),
            language: Language::Fr,
        });

        assert_eq!(flow, ControlFlow::Continue(()));
        let Some(Action::MenuLoaded(actual)) = rx.recv().await else {
            panic!("expected menu response");
        };
        assert_eq!(actual.request_id, RequestId::new(4));
        assert_eq!(actual.result.unwrap()[0].name, "Menu fr");
    }

    #[tokio::test]
    async fn test_exit_breaks_sequence() {
        let (fixture, _rx) = executor();

        let actual = fixture.execute(Command::And(vec![Command::Empty, Command::Exit]));

        assert_eq!(actual, ControlFlow::Break(()));
    }
}
