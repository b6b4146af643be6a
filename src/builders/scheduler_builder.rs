//! One-shot registration surface for an [`ActionScheduler`].

use crate::core::{Action, ActionScheduler, AuditSink, SchedulerError, SuppressionFn};

/// Collects the fixed action set, then validates it into a scheduler.
///
/// Duplicate names are only reported by [`SchedulerBuilder::build`], so a
/// misconfigured set never yields a scheduler that could be started.
pub struct SchedulerBuilder<S> {
    actions: Vec<Action<S>>,
    suppression: Option<SuppressionFn<S>>,
    audit: Option<Box<dyn AuditSink>>,
}

impl<S> Default for SchedulerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SchedulerBuilder<S> {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            suppression: None,
            audit: None,
        }
    }

    /// Add an action; evaluation order follows call order.
    #[must_use]
    pub fn action(mut self, action: Action<S>) -> Self {
        self.actions.push(action);
        self
    }

    /// Skip every pass while `predicate` holds.
    #[must_use]
    pub fn suppress_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.suppression = Some(Box::new(predicate));
        self
    }

    /// Record every attempt to `audit`.
    #[must_use]
    pub fn audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Names added so far, in order.
    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(Action::name).collect()
    }

    /// Register every action.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::DuplicateAction`] if two actions share a
    /// name.
    pub fn build(self) -> Result<ActionScheduler<S>, SchedulerError> {
        let mut scheduler = ActionScheduler::new();
        if let Some(predicate) = self.suppression {
            scheduler.set_suppression(predicate);
        }
        if let Some(audit) = self.audit {
            scheduler = scheduler.with_audit(audit);
        }
        for action in self.actions {
            scheduler.register(action)?;
        }
        tracing::info!(actions = scheduler.actions().len(), "scheduler built");
        Ok(scheduler)
    }
}
