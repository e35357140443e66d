use crate::{error::AppError, state::AppState, *};
use pizzamap_core::{
    usecases::{SubmissionOutcome, SubmitPlace},
    util::map_url::ParsedMapUrl,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Geocoding,
    Persisting,
    Succeeded(SubmissionOutcome),
    /// Holds the message shown next to the form.
    Failed(String),
}

impl SubmissionState {
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Geocoding | Self::Persisting)
    }
}

/// A single submission of a new or an edited place.
///
/// The draft survives failures so the user can retry
/// without entering everything again.
#[derive(Debug)]
pub struct SubmissionForm {
    draft: SubmitPlace,
    stored: Option<Place>,
    state: SubmissionState,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self {
            draft: SubmitPlace::default(),
            stored: None,
            state: SubmissionState::Idle,
        }
    }

    pub fn edit(place: &Place) -> Self {
        Self {
            draft: SubmitPlace::from_place(place),
            stored: Some(place.clone()),
            state: SubmissionState::Idle,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.stored.is_some()
    }

    pub fn draft(&self) -> &SubmitPlace {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SubmitPlace {
        &mut self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn apply_map_url(&mut self, url: &str) -> ParsedMapUrl {
        self.draft.apply_map_url(url)
    }

    fn transition(&mut self, state: SubmissionState) {
        debug!("Submission state: {:?} -> {state:?}", self.state);
        self.state = state;
    }

    fn fail<T>(&mut self, err: usecases::Error) -> Result<T> {
        info!("Submission failed: {err}");
        self.transition(SubmissionState::Failed(err.to_string()));
        Err(err.into())
    }

    /// Run the whole submission.
    ///
    /// A successful edit reloads the view state.
    /// Dropping the returned future before it completes
    /// puts the form back into [`SubmissionState::Idle`].
    pub async fn submit<B, G>(&mut self, app: &AppState<B, G>) -> Result<SubmissionOutcome>
    where
        B: PlaceRepo + CategoryRepo + CategoryLinkRepo,
        G: GeoCodingGateway,
    {
        match self.state {
            ref s if s.is_busy() => return Err(AppError::Busy),
            SubmissionState::Succeeded(_) => return Err(AppError::Completed),
            _ => {}
        }
        let mut in_flight = InFlight(self);
        let result = in_flight.0.run(app).await;
        drop(in_flight);
        result
    }

    async fn run<B, G>(&mut self, app: &AppState<B, G>) -> Result<SubmissionOutcome>
    where
        B: PlaceRepo + CategoryRepo + CategoryLinkRepo,
        G: GeoCodingGateway,
    {
        self.transition(SubmissionState::Validating);
        let stored = self.stored.clone();
        let stored = stored.as_ref();
        let source = usecases::PositionSource::of(&self.draft, stored);
        let validated = if self.is_edit() {
            usecases::validate_update(self.draft.clone())
        } else {
            usecases::validate_submission(self.draft.clone())
        };
        let draft = match validated {
            Ok(draft) => draft,
            Err(err) => return self.fail(err),
        };

        if source == usecases::PositionSource::Geocoder {
            self.transition(SubmissionState::Geocoding);
        }
        let resolved =
            usecases::resolve_position(app.geocoder(), app.region(), &draft.address, source).await;
        let pos = match resolved {
            Ok(pos) => pos,
            Err(err) => return self.fail(err),
        };

        self.transition(SubmissionState::Persisting);
        let written = usecases::store_submission(app.backend(), app.region(), draft, pos).await;
        let outcome = match written {
            Ok(outcome) => outcome,
            Err(err) => return self.fail(err),
        };
        if !outcome.category_linked {
            warn!("Place {} was stored without a category", outcome.place_id);
        }
        self.transition(SubmissionState::Succeeded(outcome.clone()));

        if outcome.updated {
            if let Err(err) = app.reload().await {
                warn!("Failed to reload after updating place {}: {err}", outcome.place_id);
            }
        }
        Ok(outcome)
    }
}

/// Releases the busy state of an abandoned submission.
struct InFlight<'a>(&'a mut SubmissionForm);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.0.state.is_busy() {
            info!("Submission abandoned while {:?}", self.0.state);
            self.0.transition(SubmissionState::Idle);
        }
    }
}
