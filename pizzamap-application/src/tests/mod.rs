pub mod prelude {
    pub use crate::{error::AppError, prelude as flows, state::AppState};
    pub use pizzamap_core::{
        entities::*,
        mocks::{category, Call, MockBackend, MockGeoCoder},
        store::LoadStatus,
        usecases::SubmitPlace,
    };
    pub use pizzamap_entities::builders::*;

    pub fn styles() -> Vec<Category> {
        vec![
            category("neapolitan", "Neapolitan"),
            category("new-york", "New York"),
            category("detroit", "Detroit"),
        ]
    }

    pub fn kens() -> Place {
        Place::build()
            .id("kens")
            .name("Ken's Artisan Pizza")
            .address("304 SE 28th Ave")
            .pos(MapPoint::from_lat_lng_deg(45.5215, -122.6372))
            .category(category("neapolitan", "Neapolitan"))
            .finish()
    }

    pub fn scotties() -> Place {
        Place::build()
            .id("scotties")
            .name("Scottie's Pizza Parlor")
            .address("2128 SE Division St")
            .category(category("new-york", "New York"))
            .finish()
    }

    pub fn new_draft() -> SubmitPlace {
        SubmitPlace {
            name: "Apizza Scholls".into(),
            address: "4741 SE Hawthorne Blvd".into(),
            category_id: Some("id-new-york".into()),
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub app: AppState<MockBackend, MockGeoCoder>,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self::with_geocoder(MockGeoCoder::resolving_to(45.5121, -122.6159))
        }

        pub fn with_geocoder(geocoder: MockGeoCoder) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let backend = MockBackend::new(vec![kens(), scotties()], styles());
            Self {
                app: AppState::new(backend, geocoder, Region::PORTLAND),
            }
        }

        pub fn backend(&self) -> &MockBackend {
            self.app.backend()
        }

        pub fn count_calls(&self, f: impl Fn(&Call) -> bool) -> usize {
            self.backend().calls().iter().filter(|c| f(c)).count()
        }
    }
}

use self::prelude::*;
use flows::{SubmissionForm, SubmissionState};

#[tokio::test]
async fn load_both_collections() {
    let fixture = BackendFixture::new();
    fixture.app.load().await.unwrap();
    let store = fixture.app.store();
    assert_eq!(&LoadStatus::Ready, store.status());
    assert_eq!(2, store.places().len());
    assert_eq!(3, store.categories().len());
    assert_eq!(1, fixture.count_calls(|c| matches!(c, Call::AllPlaces)));
    assert_eq!(1, fixture.count_calls(|c| matches!(c, Call::AllCategories)));
}

#[tokio::test]
async fn failed_load_keeps_no_partial_data() {
    let fixture = BackendFixture::new();
    fixture.backend().fail_reads();
    let err = fixture.app.load().await.unwrap_err();
    assert!(!err.is_validation());
    let store = fixture.app.store();
    assert!(matches!(store.status(), LoadStatus::Failed(msg) if msg == "connection refused"));
    assert!(store.places().is_empty());
    assert!(store.categories().is_empty());
}

#[tokio::test]
async fn load_fails_if_only_one_collection_fails() {
    let fixture = BackendFixture::new();
    fixture.backend().fail_category_reads.set(true);
    assert!(fixture.app.load().await.is_err());
    {
        let store = fixture.app.store();
        assert!(matches!(store.status(), LoadStatus::Failed(_)));
        assert!(store.places().is_empty());
        assert!(store.categories().is_empty());
    }

    fixture.backend().fail_category_reads.set(false);
    fixture.app.load().await.unwrap();
    fixture.backend().fail_place_reads.set(true);
    assert!(fixture.app.reload().await.is_err());
    let store = fixture.app.store();
    assert!(matches!(store.status(), LoadStatus::Failed(msg) if msg == "connection refused"));
    assert_eq!(2, store.places().len());
    assert_eq!(3, store.categories().len());
}

#[tokio::test]
async fn filter_and_select_loaded_places() {
    let fixture = BackendFixture::new();
    fixture.app.load().await.unwrap();
    fixture.app.store_mut().set_filter(Some("new-york".into()));
    fixture.app.store_mut().select_place(Some("kens".into()));
    let store = fixture.app.store();
    let visible: Vec<_> = store.filtered_places().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(vec!["scotties"], visible);
    assert_eq!(1, store.visible_count());
    assert_eq!(2, store.total());
    assert_eq!(
        Some("Ken's Artisan Pizza"),
        store.selected_place().map(|p| p.name.as_str())
    );
}

#[tokio::test]
async fn submit_new_place_without_reload() {
    let fixture = BackendFixture::new();
    fixture.app.load().await.unwrap();

    let mut form = SubmissionForm::new();
    *form.draft_mut() = new_draft();
    let outcome = form.submit(&fixture.app).await.unwrap();
    assert!(!outcome.updated);
    assert!(outcome.category_linked);
    assert_eq!(&SubmissionState::Succeeded(outcome), form.state());

    // a new place only becomes visible on the next load
    assert_eq!(1, fixture.count_calls(|c| matches!(c, Call::AllPlaces)));
    assert_eq!(2, fixture.app.store().places().len());
    assert_eq!(3, fixture.backend().places.borrow().len());
}

#[tokio::test]
async fn completed_submission_is_terminal() {
    let fixture = BackendFixture::new();
    let mut form = SubmissionForm::new();
    *form.draft_mut() = new_draft();
    form.submit(&fixture.app).await.unwrap();
    assert!(matches!(
        form.submit(&fixture.app).await,
        Err(AppError::Completed)
    ));
    assert_eq!(1, fixture.count_calls(|c| matches!(c, Call::CreatePlace(_))));
}

#[tokio::test]
async fn edit_place_and_reload() {
    let fixture = BackendFixture::new();
    fixture.app.load().await.unwrap();

    let place = fixture.app.store().places()[0].clone();
    let mut form = SubmissionForm::edit(&place);
    assert!(form.is_edit());
    form.draft_mut().name = "Ken's Artisan Pizza & Bakery".into();
    form.draft_mut().category_id = Some("id-detroit".into());
    let outcome = form.submit(&fixture.app).await.unwrap();
    assert!(outcome.updated);
    assert_eq!(place.id, outcome.place_id);

    // address unchanged
    assert_eq!(0, fixture.app.geocoder().invocations());
    assert_eq!(2, fixture.count_calls(|c| matches!(c, Call::AllPlaces)));

    let store = fixture.app.store();
    let reloaded = &store.places()[0];
    assert_eq!("Ken's Artisan Pizza & Bakery", reloaded.name);
    assert_eq!(place.pos, reloaded.pos);
    assert_eq!(
        Some("detroit"),
        store.style_for(reloaded).map(|c| c.slug.as_str())
    );
}

#[tokio::test]
async fn retry_after_validation_error_keeps_the_draft() {
    let fixture = BackendFixture::new();
    let mut form = SubmissionForm::new();
    *form.draft_mut() = SubmitPlace {
        name: String::new(),
        phone: "503 555 0100".into(),
        ..new_draft()
    };
    let err = form.submit(&fixture.app).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        &SubmissionState::Failed("Please enter the pizzeria name".into()),
        form.state()
    );
    assert_eq!(0, fixture.app.geocoder().invocations());
    assert!(fixture.backend().write_calls().is_empty());

    form.draft_mut().name = "Apizza Scholls".into();
    let outcome = form.submit(&fixture.app).await.unwrap();
    assert!(matches!(form.state(), SubmissionState::Succeeded(_)));
    let places = fixture.backend().places.borrow();
    let created = places.iter().find(|p| p.id == outcome.place_id).unwrap();
    assert_eq!(Some("503 555 0100"), created.contact.phone.as_deref());
}

#[tokio::test]
async fn out_of_region_address_is_not_stored() {
    let fixture = BackendFixture::with_geocoder(MockGeoCoder::resolving_to(47.6062, -122.3321));
    let mut form = SubmissionForm::new();
    *form.draft_mut() = new_draft();
    let err = form.submit(&fixture.app).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        &SubmissionState::Failed(
            "This address appears to be outside the Portland area. Please check the address."
                .into()
        ),
        form.state()
    );
    assert!(fixture.backend().write_calls().is_empty());
}

#[tokio::test]
async fn retry_after_backend_failure() {
    let fixture = BackendFixture::new();
    *fixture.backend().fail_place_writes.borrow_mut() = Some(None);
    let mut form = SubmissionForm::new();
    *form.draft_mut() = new_draft();
    form.submit(&fixture.app).await.unwrap_err();
    assert_eq!(
        &SubmissionState::Failed("Failed to submit. Please try again.".into()),
        form.state()
    );

    *fixture.backend().fail_place_writes.borrow_mut() = None;
    form.submit(&fixture.app).await.unwrap();
    assert_eq!(2, fixture.app.geocoder().invocations());
}

#[tokio::test]
async fn fill_draft_from_map_url() {
    let mut form = SubmissionForm::new();
    let parsed = form.apply_map_url(
        "https://www.google.com/maps/place/Apizza+Scholls/@45.5121,-122.6159,17z",
    );
    assert!(parsed.pos.is_some());
    assert_eq!("Apizza Scholls", form.draft().name);
    assert!(form.draft().address.is_empty());
}
