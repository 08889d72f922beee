mod support;

use disco_core::{Album, AlbumSource, Artist, CatalogAlbumSource, FetchError};
use disco_ui::{
    strings, ArtistScreen, ArtistScreenBuilder, BuildError, ListDataSource, ViewUpdates,
};
use std::sync::Arc;
use std::time::Duration;
use support::{RecordingSurface, ScriptedSource};

fn taylor() -> Artist {
    Artist::named("abc123", "Taylor Swift")
}

fn build(
    artist: Artist,
    source: Arc<dyn AlbumSource>,
) -> (ArtistScreen<RecordingSurface>, ViewUpdates) {
    ArtistScreenBuilder::new(artist)
        .source(source)
        .build(RecordingSurface::default())
        .unwrap()
}

#[tokio::test]
async fn test_load_albums_from_catalog() {
    let source = CatalogAlbumSource::new().with_artist(
        "abc123",
        Some("Taylor Swift"),
        vec![Album::new("Red"), Album::new("1989")],
    );
    let (mut screen, mut updates) = build(taylor(), Arc::new(source));

    screen.on_appear();
    assert!(screen.is_refreshing());

    let update = updates.recv().await.unwrap();
    screen.apply(update);

    assert_eq!(screen.count(), 2);
    assert_eq!(screen.record_at(0).title, "Red");
    assert_eq!(screen.record_at(1).title, "1989");
    assert!(!screen.is_refreshing());
    assert!(!screen.surface().refreshing);
    assert_eq!(screen.surface().title.as_deref(), Some("Taylor Swift"));
}

#[tokio::test]
async fn test_unknown_artist_shows_not_found_notice() {
    let (mut screen, mut updates) = build(
        Artist::named("nobody", "Nobody"),
        Arc::new(CatalogAlbumSource::new()),
    );

    screen.on_appear();
    screen.apply(updates.recv().await.unwrap());

    let error = screen.state().error.clone().unwrap();
    assert_eq!(error.message, "This artist could not be found");
    assert_eq!(error.retry_label, None);
    assert_eq!(screen.count(), 0);
    assert!(!screen.is_refreshing());
}

#[tokio::test]
async fn test_missing_identity_never_reaches_source() {
    let source = Arc::new(ScriptedSource::new().then_albums(0, &["Red"]));
    let (mut screen, mut updates) = build(Artist::default(), source.clone());

    assert_eq!(screen.on_appear(), None);
    tokio::task::yield_now().await;

    assert!(source.requested().is_empty());
    assert!(updates.try_recv().is_err());
    assert_eq!(screen.count(), 0);
    assert!(screen.surface().presented.is_empty());
    assert_eq!(screen.title(), strings::ARTIST_SCREEN_TITLE);
}

#[tokio::test(start_paused = true)]
async fn test_failure_after_success_keeps_list() {
    let source = ScriptedSource::new()
        .then_albums(10, &["Red", "1989"])
        .then_error(10, FetchError::Network("Network unavailable".into()));
    let (mut screen, mut updates) = build(taylor(), Arc::new(source));

    screen.on_appear();
    screen.apply(updates.recv().await.unwrap());
    assert_eq!(screen.count(), 2);

    screen.on_refresh_triggered();
    screen.apply(updates.recv().await.unwrap());

    assert_eq!(screen.count(), 2);
    assert_eq!(screen.surface().rows, vec!["Red", "1989"]);
    assert_eq!(screen.surface().presented.len(), 1);
    assert_eq!(screen.surface().presented[0].message, "Network unavailable");
    assert_eq!(
        screen.surface().presented[0].retry_label.as_deref(),
        Some(strings::RETRY_LABEL)
    );
    assert!(!screen.is_refreshing());
}

#[tokio::test(start_paused = true)]
async fn test_superseded_fetch_never_overwrites_newer_result() {
    // The first request answers last
    let source = Arc::new(
        ScriptedSource::new()
            .then_albums(200, &["Stale"])
            .then_albums(10, &["Red", "1989"]),
    );
    let (mut screen, mut updates) = build(taylor(), source.clone());

    screen.on_appear();
    // Let the first request reach the source before superseding it
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(source.requested().len(), 1);
    let latest = screen.on_refresh_triggered().unwrap();

    let update = updates.recv().await.unwrap();
    assert_eq!(update.ticket(), latest);
    screen.apply(update);
    assert_eq!(screen.surface().rows, vec!["Red", "1989"]);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(screen.apply_pending(&mut updates), 0);
    assert_eq!(screen.surface().rows, vec!["Red", "1989"]);
    assert!(!screen.is_refreshing());
}

#[tokio::test(start_paused = true)]
async fn test_dismissed_screen_receives_nothing() {
    let source = ScriptedSource::new().then_albums(100, &["Red"]);
    let (mut screen, mut updates) = build(taylor(), Arc::new(source));

    screen.on_appear();
    screen.dismiss();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(screen.apply_pending(&mut updates), 0);
    assert_eq!(screen.count(), 0);
    assert!(screen.surface().rows.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_screen_is_safe() {
    let source = ScriptedSource::new().then_albums(100, &["Red"]);
    let (mut screen, mut updates) = build(taylor(), Arc::new(source));

    screen.on_appear();
    drop(screen);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(updates.try_recv().is_err());
}

#[tokio::test]
async fn test_build_without_source_fails() {
    let result = ArtistScreenBuilder::new(taylor()).build(RecordingSurface::default());
    assert!(matches!(result, Err(BuildError::MissingSource)));
}

#[test]
fn test_build_outside_runtime_fails() {
    let result = ArtistScreenBuilder::new(taylor())
        .source(Arc::new(CatalogAlbumSource::new()))
        .build(RecordingSurface::default());
    assert!(matches!(result, Err(BuildError::NoRuntime(_))));
}
