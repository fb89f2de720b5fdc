//! Form state machine over an insert or update schema.
//!
//! ```text
//! Idle ──edit──▶ Validating ──▶ Editing ──submit──▶ Submitting ──ok──▶ Success
//!                                  ▲                     │
//!                                  │                   error
//!                                  │                     ▼
//!                                  └──────edit───── ServerError
//! ```
//!
//! A rejected submit lands in `ServerError` with the server's field errors
//! (or a general error) attached, and stays there so the messages can be
//! shown. The next edit returns to `Editing` and submission is allowed again.
//! A submit future dropped mid-flight restores the state it started from.
//!
//! The form never navigates or resets itself after a successful submit; the
//! caller receives the result and decides.

use std::future::Future;

use wayfarer_core::schema::{CreateActivity, Destination};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::{check_input, FieldErrors, InputSchema};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    /// Transient while field rules run inside [`Form::edit`].
    Validating,
    Submitting,
    Success,
    ServerError,
}

/// The submission step handed to [`Form::submit`], typically a hook call
/// such as `|v| async move { hooks.create(v).await }`.
pub trait Submit<S> {
    type Output;

    fn call(self, values: S) -> impl Future<Output = Result<Self::Output, ClientError>>;
}

impl<S, F, Fut, T> Submit<S> for F
where
    F: FnOnce(S) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    type Output = T;

    fn call(self, values: S) -> impl Future<Output = Result<T, ClientError>> {
        self(values)
    }
}

/// What a call to [`Form::submit`] did.
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// The form was invalid or already submitting; nothing was sent.
    NotSubmitted,
    Success(T),
    /// The error has been recorded on the form.
    Failed,
}

impl<T> SubmitOutcome<T> {
    pub fn into_success(self) -> Option<T> {
        match self {
            SubmitOutcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form<S> {
    values: S,
    field_errors: FieldErrors,
    general_error: Option<String>,
    state: FormState,
}

impl<S: InputSchema + Clone + Default> Default for Form<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: InputSchema + Clone + Default> Form<S> {
    /// Start from the schema's empty defaults.
    pub fn new() -> Self {
        Self::with_values(S::default())
    }

    /// Start from existing values, e.g. a row converted for editing.
    pub fn with_values(values: S) -> Self {
        Self {
            values,
            field_errors: FieldErrors::new(),
            general_error: None,
            state: FormState::Idle,
        }
    }

    pub fn values(&self) -> &S {
        &self.values
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Message of an unstructured server error.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Apply a change and revalidate every field.
    ///
    /// Ignored while a submission is in flight.
    pub fn edit(&mut self, change: impl FnOnce(&mut S)) {
        if self.state == FormState::Submitting {
            return;
        }
        change(&mut self.values);
        self.state = FormState::Validating;
        self.field_errors = check_input(&self.values);
        self.general_error = None;
        self.state = FormState::Editing;
    }

    /// True when the current values pass every rule and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.state != FormState::Submitting && check_input(&self.values).is_empty()
    }

    /// Run `submit` with the current values.
    ///
    /// Invalid values are surfaced as field errors and nothing is sent.
    pub async fn submit<F: Submit<S>>(&mut self, submit: F) -> SubmitOutcome<F::Output> {
        if self.state == FormState::Submitting {
            return SubmitOutcome::NotSubmitted;
        }
        let errors = check_input(&self.values);
        if !errors.is_empty() {
            self.field_errors = errors;
            self.state = FormState::Editing;
            return SubmitOutcome::NotSubmitted;
        }

        let values = self.values.clone();
        self.general_error = None;
        let result = {
            let in_flight = InFlight::enter(&mut self.state);
            let result = submit.call(values).await;
            in_flight.finish();
            result
        };
        match result {
            Ok(output) => {
                self.field_errors = FieldErrors::new();
                self.state = FormState::Success;
                SubmitOutcome::Success(output)
            }
            Err(err) => {
                self.record_error(err);
                SubmitOutcome::Failed
            }
        }
    }

    /// Return to the empty defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record_error(&mut self, err: ClientError) {
        tracing::debug!(error = %err, "Form submission failed");
        match err.field_errors() {
            Some(errors) => {
                self.field_errors = errors.clone();
                self.general_error = None;
            }
            None => {
                self.field_errors = FieldErrors::new();
                self.general_error = Some(match err {
                    ClientError::Server { message, .. } => message,
                    other => other.to_string(),
                });
            }
        }
        self.state = FormState::ServerError;
    }
}

/// Holds a form in `Submitting` while the submit future runs. Dropped
/// before [`finish`](Self::finish), it restores the previous state.
struct InFlight<'a> {
    state: &'a mut FormState,
    previous: FormState,
    done: bool,
}

impl<'a> InFlight<'a> {
    fn enter(state: &'a mut FormState) -> Self {
        let previous = std::mem::replace(state, FormState::Submitting);
        Self {
            state,
            previous,
            done: false,
        }
    }

    fn finish(mut self) {
        self.done = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            tracing::debug!(state = ?self.previous, "Submission abandoned");
            *self.state = self.previous;
        }
    }
}

type MissingDestinationCallback = Box<dyn FnMut(DbId) + Send>;
type NoDestinationsCallback = Box<dyn FnMut() + Send>;

/// Activity form that tells its owner when the selected destination no
/// longer exists, so the owner can refresh its destination picker, and when
/// there is no destination to pick at all, so the owner can offer to create
/// one.
pub struct ActivityForm {
    form: Form<CreateActivity>,
    on_missing_destination: Option<MissingDestinationCallback>,
    on_no_destinations: Option<NoDestinationsCallback>,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(),
            on_missing_destination: None,
            on_no_destinations: None,
        }
    }

    /// Preselect a destination (e.g. when opened from a destination page).
    pub fn for_destination(destination_id: DbId) -> Self {
        let mut this = Self::new();
        this.form.values.destination_id = destination_id;
        this
    }

    /// Register the callback receiving the id of a vanished destination.
    pub fn on_missing_destination(mut self, callback: impl FnMut(DbId) + Send + 'static) -> Self {
        self.on_missing_destination = Some(Box::new(callback));
        self
    }

    /// Register the callback fired when the destination list is empty.
    pub fn on_no_destinations(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_no_destinations = Some(Box::new(callback));
        self
    }

    pub fn form(&self) -> &Form<CreateActivity> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form<CreateActivity> {
        &mut self.form
    }

    /// Check the selection against the owner's current destinations.
    ///
    /// An empty list fires the no-destinations callback. A stale selection is
    /// cleared and fires the missing-destination callback. Returns whether
    /// the selection was still valid.
    pub fn sync_destinations(&mut self, destinations: &[Destination]) -> bool {
        if destinations.is_empty() {
            tracing::debug!("No destinations to choose from");
            if let Some(callback) = self.on_no_destinations.as_mut() {
                callback();
            }
        }
        let selected = self.form.values.destination_id;
        if selected <= 0 || destinations.iter().any(|d| d.id == selected) {
            return true;
        }
        self.destination_missing(selected);
        false
    }

    /// Submit and, when the server rejects the destination, clear it and
    /// fire the callback.
    pub async fn submit<F: Submit<CreateActivity>>(&mut self, submit: F) -> SubmitOutcome<F::Output> {
        let selected = self.form.values.destination_id;
        let outcome = self.form.submit(submit).await;
        if matches!(outcome, SubmitOutcome::Failed)
            && self.form.field_errors.contains("destinationId")
        {
            self.destination_missing(selected);
        }
        outcome
    }

    fn destination_missing(&mut self, destination_id: DbId) {
        tracing::debug!(destination_id, "Selected destination no longer exists");
        self.form.values.destination_id = 0;
        // Server messages stay until the next edit.
        if self.form.state != FormState::ServerError {
            self.form.field_errors = check_input(&self.form.values);
            self.form.state = FormState::Editing;
        }
        if let Some(callback) = self.on_missing_destination.as_mut() {
            callback(destination_id);
        }
    }
}
