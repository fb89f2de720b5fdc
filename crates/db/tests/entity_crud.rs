//! Integration tests for the repository layer against a real database:
//! - Create the destination -> activity/accommodation hierarchy
//! - Cascade delete from destinations
//! - Restrict delete on referenced lookup rows
//! - Set-null on user delete
//! - Unique constraint violations
//! - Partial updates and list ordering

use chrono::NaiveDate;
use sqlx::PgPool;
use wayfarer_core::lookups::{PriorityLevelKind, TravelStatusKind};
use wayfarer_core::schema::{
    CreateAccommodation, CreateActivity, CreateDestination, CreateLookup, CreateTrip,
    UpdateDestination, UpdatePreferences, UpdateTrip,
};
use wayfarer_db::repositories::{
    AccommodationRepo, ActivityRepo, DestinationRepo, LookupRepo, LookupTable, NewUser,
    PreferencesRepo, TripDestinationRepo, TripRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_destination(name: &str) -> CreateDestination {
    CreateDestination {
        name: name.to_string(),
        country: "France".to_string(),
        region: "Europe".to_string(),
        description: String::new(),
        image: "https://x/1.jpg".to_string(),
        status_id: TravelStatusKind::Wishlist.id(),
        priority_id: PriorityLevelKind::Low.id(),
        user_id: None,
    }
}

fn new_activity(destination_id: i64, name: &str) -> CreateActivity {
    CreateActivity {
        name: name.to_string(),
        description: "Iconic tower".to_string(),
        category: "sightseeing".to_string(),
        destination_id,
        status_id: TravelStatusKind::Wishlist.id(),
        priority_id: PriorityLevelKind::High.id(),
        ..Default::default()
    }
}

fn new_accommodation(destination_id: i64, name: &str) -> CreateAccommodation {
    CreateAccommodation {
        name: name.to_string(),
        accommodation_type: "hotel".to_string(),
        destination_id,
        status_id: TravelStatusKind::Booked.id(),
        priority_id: PriorityLevelKind::Medium.id(),
        ..Default::default()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_trip(name: &str) -> CreateTrip {
    CreateTrip {
        name: name.to_string(),
        start_date: Some(date(2027, 5, 1)),
        end_date: Some(date(2027, 5, 10)),
        status_id: TravelStatusKind::Planned.id(),
        priority_id: PriorityLevelKind::High.id(),
        ..Default::default()
    }
}

fn new_user<'a>(username: &'a str, email: &'a str) -> NewUser<'a> {
    NewUser {
        username,
        email,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA",
        display_name: None,
        avatar_url: None,
        bio: None,
    }
}

fn db_code(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.code())
        .map(|c| c.to_string())
}

fn db_constraint(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Create and read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let paris = DestinationRepo::create(&pool, &new_destination("Paris"))
        .await
        .unwrap();
    assert!(paris.id > 0);
    assert_eq!(paris.name, "Paris");
    assert_eq!(paris.description, "");

    let tower = ActivityRepo::create(&pool, &new_activity(paris.id, "Eiffel Tower"))
        .await
        .unwrap();
    assert_eq!(tower.destination_id, paris.id);
    assert_eq!(tower.image, None);

    let hotel = AccommodationRepo::create(&pool, &new_accommodation(paris.id, "Hotel Lumiere"))
        .await
        .unwrap();
    assert_eq!(hotel.accommodation_type, "hotel");

    let activities = ActivityRepo::list_by_destination(&pool, paris.id).await.unwrap();
    assert_eq!(activities.len(), 1);
    let stays = AccommodationRepo::list_by_destination(&pool, paris.id)
        .await
        .unwrap();
    assert_eq!(stays.len(), 1);

    let found = DestinationRepo::find_by_id(&pool, paris.id).await.unwrap();
    assert_eq!(found, Some(paris));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(DestinationRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(TripRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(!DestinationRepo::delete(&pool, 999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_newest_first(pool: PgPool) {
    for name in ["Paris", "Rome", "Kyoto"] {
        DestinationRepo::create(&pool, &new_destination(name))
            .await
            .unwrap();
    }
    let names: Vec<String> = DestinationRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["Kyoto", "Rome", "Paris"]);
    assert_eq!(DestinationRepo::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_absent_fields(pool: PgPool) {
    let dest = DestinationRepo::create(&pool, &new_destination("Paris"))
        .await
        .unwrap();

    let update = UpdateDestination {
        name: Some("Paris, France".to_string()),
        status_id: Some(TravelStatusKind::Planned.id()),
        ..Default::default()
    };
    let updated = DestinationRepo::update(&pool, dest.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Paris, France");
    assert_eq!(updated.status_id, TravelStatusKind::Planned.id());
    assert_eq!(updated.country, dest.country);
    assert_eq!(updated.image, dest.image);
    assert!(updated.updated_at >= dest.updated_at);

    let missing = DestinationRepo::update(&pool, 999, &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trip_date_order_is_checked_by_database(pool: PgPool) {
    let trip = TripRepo::create(&pool, &new_trip("Spring")).await.unwrap();

    let update = UpdateTrip {
        end_date: Some(date(2027, 4, 1)),
        ..Default::default()
    };
    let err = TripRepo::update(&pool, trip.id, &update).await.unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23514"));
    assert_eq!(db_constraint(&err).as_deref(), Some("ck_trips_date_order"));
}

// ---------------------------------------------------------------------------
// Referential integrity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_destination_cascades(pool: PgPool) {
    let paris = DestinationRepo::create(&pool, &new_destination("Paris"))
        .await
        .unwrap();
    let tower = ActivityRepo::create(&pool, &new_activity(paris.id, "Eiffel Tower"))
        .await
        .unwrap();
    let hotel = AccommodationRepo::create(&pool, &new_accommodation(paris.id, "Hotel"))
        .await
        .unwrap();
    let trip = TripRepo::create(&pool, &new_trip("Spring")).await.unwrap();
    TripDestinationRepo::link(&pool, trip.id, paris.id)
        .await
        .unwrap();

    assert!(DestinationRepo::delete(&pool, paris.id).await.unwrap());

    assert!(ActivityRepo::find_by_id(&pool, tower.id).await.unwrap().is_none());
    assert!(AccommodationRepo::find_by_id(&pool, hotel.id)
        .await
        .unwrap()
        .is_none());
    assert!(TripDestinationRepo::list_links(&pool, trip.id)
        .await
        .unwrap()
        .is_empty());
    // The trip itself is untouched.
    assert!(TripRepo::find_by_id(&pool, trip.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_referenced_status_cannot_be_deleted(pool: PgPool) {
    let dest = DestinationRepo::create(&pool, &new_destination("Paris"))
        .await
        .unwrap();
    let wishlist = TravelStatusKind::Wishlist.id();

    let err = LookupRepo::delete(&pool, LookupTable::Statuses, wishlist)
        .await
        .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23503"));

    let still_there = LookupRepo::find_by_id(&pool, LookupTable::Statuses, wishlist)
        .await
        .unwrap();
    assert!(still_there.is_some());
    let dest_after = DestinationRepo::find_by_id(&pool, dest.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dest_after.status_id, wishlist);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookup_id_change_cascades_to_dependents(pool: PgPool) {
    let wishlist = TravelStatusKind::Wishlist.id();
    let dest = DestinationRepo::create(&pool, &new_destination("Paris"))
        .await
        .unwrap();
    let activity = ActivityRepo::create(&pool, &new_activity(dest.id, "Louvre"))
        .await
        .unwrap();
    let stay = AccommodationRepo::create(
        &pool,
        &CreateAccommodation {
            status_id: wishlist,
            ..new_accommodation(dest.id, "Hotel Lumiere")
        },
    )
    .await
    .unwrap();
    let trip = TripRepo::create(
        &pool,
        &CreateTrip {
            status_id: wishlist,
            priority_id: PriorityLevelKind::Low.id(),
            ..new_trip("Spring")
        },
    )
    .await
    .unwrap();

    sqlx::query("UPDATE travel_statuses SET id = 42 WHERE id = $1")
        .bind(wishlist)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE travel_priority_levels SET id = 40 WHERE id = $1")
        .bind(PriorityLevelKind::Low.id())
        .execute(&pool)
        .await
        .unwrap();

    let dest = DestinationRepo::find_by_id(&pool, dest.id).await.unwrap().unwrap();
    let activity = ActivityRepo::find_by_id(&pool, activity.id).await.unwrap().unwrap();
    let stay = AccommodationRepo::find_by_id(&pool, stay.id).await.unwrap().unwrap();
    let trip = TripRepo::find_by_id(&pool, trip.id).await.unwrap().unwrap();
    assert_eq!(dest.status_id, 42);
    assert_eq!(activity.status_id, 42);
    assert_eq!(stay.status_id, 42);
    assert_eq!(trip.status_id, 42);
    assert_eq!(dest.priority_id, 40);
    assert_eq!(trip.priority_id, 40);

    let old = LookupRepo::find_by_id(&pool, LookupTable::Statuses, wishlist)
        .await
        .unwrap();
    assert!(old.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreferenced_lookup_can_be_deleted(pool: PgPool) {
    let input = CreateLookup {
        label: "on_hold".to_string(),
        description: Some("Paused".to_string()),
        colour: Some("#aabbcc".to_string()),
    };
    let row = LookupRepo::create(&pool, LookupTable::Statuses, &input)
        .await
        .unwrap();
    assert!(row.id > TravelStatusKind::Cancelled.id());

    assert!(LookupRepo::delete(&pool, LookupTable::Statuses, row.id)
        .await
        .unwrap());
    let remaining = LookupRepo::list(&pool, LookupTable::Statuses).await.unwrap();
    assert_eq!(remaining.len(), TravelStatusKind::ALL.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_lookup_label_rejected(pool: PgPool) {
    let input = CreateLookup {
        label: "urgent".to_string(),
        ..Default::default()
    };
    LookupRepo::create(&pool, LookupTable::PriorityLevels, &input)
        .await
        .unwrap();
    let err = LookupRepo::create(&pool, LookupTable::PriorityLevels, &input)
        .await
        .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23505"));
    assert_eq!(
        db_constraint(&err).as_deref(),
        Some("uq_travel_priority_levels_label")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_destination_is_fk_violation(pool: PgPool) {
    let err = ActivityRepo::create(&pool, &new_activity(999, "Ghost"))
        .await
        .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23503"));
    assert_eq!(
        db_constraint(&err).as_deref(),
        Some("fk_activities_destination")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_clears_ownership(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ana", "ana@example.com"))
        .await
        .unwrap();
    let mut input = new_destination("Lisbon");
    input.user_id = Some(user.id);
    let dest = DestinationRepo::create(&pool, &input).await.unwrap();
    PreferencesRepo::get_or_create(&pool, user.id).await.unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    let dest_after = DestinationRepo::find_by_id(&pool, dest.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dest_after.user_id, None);
    assert!(PreferencesRepo::find_by_user(&pool, user.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Users and preferences
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_and_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("ana", "ana@example.com"))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("ana", "other@example.com"))
        .await
        .unwrap_err();
    assert_eq!(db_constraint(&err).as_deref(), Some("uq_users_username"));

    let err = UserRepo::create(&pool, &new_user("bea", "ana@example.com"))
        .await
        .unwrap_err();
    assert_eq!(db_constraint(&err).as_deref(), Some("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_login_bumps_counter(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ana", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(user.login_count, 0);
    assert!(user.last_login.is_none());

    let found = UserRepo::find_by_login(&pool, "ana@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);

    let after = UserRepo::record_login(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(after.login_count, 1);
    assert!(after.last_login.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preferences_default_then_partial_upsert(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ana", "ana@example.com"))
        .await
        .unwrap();

    let prefs = PreferencesRepo::get_or_create(&pool, user.id).await.unwrap();
    assert_eq!(prefs.currency, "USD");
    assert_eq!(prefs.distance_unit, "km");
    assert!(prefs.email_notifications);

    let update = UpdatePreferences {
        currency: Some("EUR".to_string()),
        ..Default::default()
    };
    let updated = PreferencesRepo::upsert(&pool, user.id, &update).await.unwrap();
    assert_eq!(updated.id, prefs.id);
    assert_eq!(updated.currency, "EUR");
    assert_eq!(updated.theme, prefs.theme);
}

// ---------------------------------------------------------------------------
// Trip destinations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_is_idempotent_and_unlink_reports(pool: PgPool) {
    let trip = TripRepo::create(&pool, &new_trip("Spring")).await.unwrap();
    let paris = DestinationRepo::create(&pool, &new_destination("Paris"))
        .await
        .unwrap();
    let rome = DestinationRepo::create(&pool, &new_destination("Rome"))
        .await
        .unwrap();

    let first = TripDestinationRepo::link(&pool, trip.id, paris.id)
        .await
        .unwrap();
    let again = TripDestinationRepo::link(&pool, trip.id, paris.id)
        .await
        .unwrap();
    assert_eq!(first.id, again.id);
    TripDestinationRepo::link(&pool, trip.id, rome.id)
        .await
        .unwrap();

    let names: Vec<String> = TripDestinationRepo::list_destinations(&pool, trip.id)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["Paris", "Rome"]);

    assert!(TripDestinationRepo::unlink(&pool, trip.id, paris.id)
        .await
        .unwrap());
    assert!(!TripDestinationRepo::unlink(&pool, trip.id, paris.id)
        .await
        .unwrap());

    assert!(TripRepo::delete(&pool, trip.id).await.unwrap());
    assert!(TripDestinationRepo::list_links(&pool, trip.id)
        .await
        .unwrap()
        .is_empty());
}
