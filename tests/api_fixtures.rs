use spotify_webapi::codec;
use spotify_webapi::models::{Album, AlbumType, Playlist, ReleaseDatePrecision};
use spotify_webapi::{ApiConfig, Executors, SpotifyApi, SpotifyError};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALBUM: &str = include_str!("fixtures/album.json");
const PLAYLIST: &str = include_str!("fixtures/playlist.json");
const ERROR_401: &str = include_str!("fixtures/error_401.json");

fn client_for(server: &MockServer) -> SpotifyApi {
    let config = ApiConfig::default().with_base_url(format!("{}/v1/", server.uri()));
    SpotifyApi::with_config(config, Executors::current()).expect("build client")
}

#[test]
fn album_fixture_decodes_despite_unknown_fields() {
    let album: Album = assert_ok!(codec::decode(ALBUM.as_bytes()));

    assert_eq!(album.id, "4Mewe6A62ZpJKmVzcaOixy");
    assert_eq!(album.album_type, Some(AlbumType::Album));
    assert_eq!(album.release_date_precision, Some(ReleaseDatePrecision::Day));
    assert_eq!(album.tracks.items.len(), 2);
    assert_eq!(album.tracks.items[1].name, "Creep");
    assert_eq!(album.total_duration_ms(), 208666 + 238640);
    assert_eq!(album.largest_image().map(|i| i.width), Some(Some(640)));
    assert_eq!(album.release().map(|d| d.year), Some(1993));
}

#[test]
fn playlist_fixture_keeps_unavailable_entries() {
    let playlist: Playlist = assert_ok!(codec::decode(PLAYLIST.as_bytes()));

    assert_eq!(playlist.owner.name(), "Wizzler");
    assert_eq!(playlist.tracks.items.len(), 2);
    assert_eq!(playlist.tracks().count(), 1);

    let track = playlist.tracks().next().unwrap();
    assert_eq!(track.isrc(), Some("GBAYE9700138"));
    assert_eq!(track.album.album_type, Some(AlbumType::Single));
}

#[tokio::test]
async fn album_lookup_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/4Mewe6A62ZpJKmVzcaOixy"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ALBUM))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    api.set_access_token(Some("abc123"));

    let album = assert_ok!(api.service().get_album("4Mewe6A62ZpJKmVzcaOixy", &[]).await);
    assert_eq!(album.name, "Pablo Honey");
    assert_eq!(album.primary_artist(), Some("Radiohead"));
}

#[tokio::test]
async fn playlist_lookup_uses_user_scoped_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/wizzler/playlists/7oi0w0SLbJ4YyjrOxhZbUv"))
        .and(query_param("market", "SE"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PLAYLIST))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let playlist = assert_ok!(
        api.service()
            .get_playlist("wizzler", "7oi0w0SLbJ4YyjrOxhZbUv", &[("market", "SE")])
            .await
    );
    assert_eq!(playlist.snapshot_id.as_deref(), Some("MTIsYjQ2Mjc0"));
}

#[tokio::test]
async fn expired_token_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string(ERROR_401))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    api.set_access_token(Some("expired"));

    let err = assert_err!(api.service().get_me().await);
    assert!(err.is_unauthorized());
    match &err {
        SpotifyError::Http { body, .. } => assert_eq!(body.as_slice(), ERROR_401.as_bytes()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.error_details().map(|d| d.message),
        Some("The access token expired".to_string())
    );
}

#[tokio::test]
async fn enqueued_call_runs_on_dedicated_runtimes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/4Z8W4fKeB5YxbusRsdQVPb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "4Z8W4fKeB5YxbusRsdQVPb",
            "name": "Radiohead",
            "uri": "spotify:artist:4Z8W4fKeB5YxbusRsdQVPb",
            "followers": {"total": 9000000}
        })))
        .mount(&server)
        .await;

    let config = ApiConfig::default().with_base_url(format!("{}/v1/", server.uri()));
    let executors = assert_ok!(Executors::dedicated());
    let api = assert_ok!(SpotifyApi::with_config(config, executors));

    let (tx, rx) = tokio::sync::oneshot::channel();
    let _pending = api
        .service()
        .get_artist("4Z8W4fKeB5YxbusRsdQVPb")
        .enqueue(move |result| {
            let name = std::thread::current().name().map(str::to_string);
            let _ = tx.send((name, result));
        });

    let (thread, result) = assert_ok!(rx.await);
    assert_eq!(thread.as_deref(), Some("spotify-callback"));
    let artist = assert_ok!(result);
    assert_eq!(artist.follower_count(), 9_000_000);
}
