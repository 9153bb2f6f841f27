use std::sync::Arc;

use crate::app::launcher::ProcessLauncher;
use crate::app::resolver::DecisionResolver;
use crate::ports::{ProcessSpawner, PromptPresenter};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PromptPresenter + ?Sized, S: ProcessSpawner> {
    resolver: DecisionResolver<P>,
    launcher: ProcessLauncher<S>,
}

impl<P: PromptPresenter + ?Sized + 'static, S: ProcessSpawner> AppContext<P, S> {
    /// Create a new application context.
    pub fn new(presenter: Arc<P>, spawner: S) -> Self {
        Self { resolver: DecisionResolver::new(presenter), launcher: ProcessLauncher::new(spawner) }
    }

    /// Get a reference to the decision resolver.
    pub fn resolver(&self) -> &DecisionResolver<P> {
        &self.resolver
    }

    /// Get a reference to the process launcher.
    pub fn launcher(&self) -> &ProcessLauncher<S> {
        &self.launcher
    }
}
