//! Provider client integration tests.
//!
//! These drive the EZTV and TPB clients through a scripted transport:
//! - Request parameters sent to each endpoint
//! - Season and quality filtering on raw items
//! - Sort order of the returned records
//! - Empty results and transport failures

use serde_json::json;

use tac_core::{
    testing::{fixtures, MockTransport},
    EztvClient, Provider, ProviderError, TpbCategory, TpbClient,
};

const EZTV_URL: &str = "http://eztv.test/api/get-torrents";
const TPB_URL: &str = "http://tpb.test/q.php";

fn eztv_client(transport: &MockTransport) -> EztvClient<MockTransport> {
    EztvClient::new(transport.clone(), EZTV_URL)
}

fn tpb_client(transport: &MockTransport) -> TpbClient<MockTransport> {
    TpbClient::new(transport.clone(), TPB_URL)
}

#[tokio::test]
async fn test_show_prefers_resolution_over_seeds() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("Show S01E01 720p HDTV", "1", "1", 10),
        fixtures::eztv_torrent("Show S01E01 1080p WEB", "1", "1", 5),
    ]));

    let records = eztv_client(&transport)
        .get_show_by_imdb("0903747", Some(1), false)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Show S01E01 1080p WEB");
    assert_eq!(records[0].resolution, "1080p");
    assert_eq!(records[1].title, "Show S01E01 720p HDTV");
}

#[tokio::test]
async fn test_show_request_params() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![]));

    eztv_client(&transport)
        .get_show_by_imdb("0903747", None, false)
        .await
        .unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, EZTV_URL);
    assert_eq!(requests[0].param("imdb_id"), Some("0903747"));
    assert_eq!(requests[0].param("limit"), Some("100"));
    assert_eq!(requests[0].param("page"), Some("1"));
}

#[tokio::test]
async fn test_show_season_filter_and_episode_order() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("Show S02E01 1080p", "2", "1", 50),
        fixtures::eztv_torrent("Show S01E03 1080p", "1", "3", 40),
        fixtures::eztv_torrent("Show S01E01 1080p", "1", "1", 30),
        fixtures::eztv_torrent("Show S01E02 2160p", "1", "2", 1),
        fixtures::eztv_torrent("Show S01E02 1080p", "1", "2", 90),
    ]));

    let records = eztv_client(&transport)
        .get_show_by_imdb("0903747", Some(1), false)
        .await
        .unwrap();

    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Show S01E01 1080p",
            "Show S01E02 2160p",
            "Show S01E02 1080p",
            "Show S01E03 1080p",
        ]
    );
    assert!(records.iter().all(|r| r.season == "1"));
}

#[tokio::test]
async fn test_show_quality_floor() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("Show S01E01 480p", "1", "1", 100),
        fixtures::eztv_torrent("Show S01E01 720p", "1", "1", 80),
        fixtures::eztv_torrent("Show S01E01 1440p", "1", "1", 2),
        fixtures::eztv_torrent("Show S01E01 UHD", "1", "1", 1),
    ]));

    let records = eztv_client(&transport)
        .get_show_by_imdb("0903747", None, true)
        .await
        .unwrap();

    let labels: Vec<_> = records.iter().map(|r| r.resolution.as_str()).collect();
    assert_eq!(labels, vec!["2160p", "1440p"]);
}

#[tokio::test]
async fn test_latest_keeps_api_order() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("Newest S03E07 720p", "3", "7", 1),
        fixtures::eztv_torrent("Older S01E01 1080p", "1", "1", 500),
    ]));

    let records = eztv_client(&transport).get_latest(50, 1, false).await.unwrap();

    assert_eq!(records[0].title, "Newest S03E07 720p");
    assert_eq!(records[1].title, "Older S01E01 1080p");
    assert!(records.iter().all(|r| r.source == Provider::Eztv));
    assert_eq!(records[0].size, "1.00 GB");
    assert_eq!(records[0].release_date, "2023-11-14 22:13:20");
}

#[tokio::test]
async fn test_latest_quality_floor() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("A 720p", "1", "1", 1),
        fixtures::eztv_torrent("B 1080p", "1", "1", 1),
    ]));

    let records = eztv_client(&transport).get_latest(50, 1, true).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "B 1080p");
}

#[tokio::test]
async fn test_top_seeded_sorts_and_truncates() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("low", "1", "1", 3),
        fixtures::eztv_torrent("high", "1", "2", 300),
        fixtures::eztv_torrent("tie-first", "1", "3", 30),
        fixtures::eztv_torrent("tie-second", "1", "4", 30),
    ]));

    let records = eztv_client(&transport)
        .get_top_seeded(100, 3, false)
        .await
        .unwrap();

    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["high", "tie-first", "tie-second"]);

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].param("limit"), Some("100"));
}

#[tokio::test]
async fn test_top_seeded_quality_floor_before_cut() {
    let transport = MockTransport::with_response(fixtures::eztv_payload(vec![
        fixtures::eztv_torrent("Popular S01E01 720p", "1", "1", 500),
        fixtures::eztv_torrent("Sharp S01E02 1080p", "1", "2", 5),
        fixtures::eztv_torrent("Sharper S01E03 2160p", "1", "3", 3),
    ]));

    let records = eztv_client(&transport)
        .get_top_seeded(100, 2, true)
        .await
        .unwrap();

    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Sharp S01E02 1080p", "Sharper S01E03 2160p"]);
}

#[tokio::test]
async fn test_eztv_missing_torrents_key_is_empty() {
    let transport = MockTransport::with_response(json!({"torrents_count": 0, "page": 1}));

    let records = eztv_client(&transport).get_latest(50, 1, false).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_eztv_transport_error_propagates() {
    let transport = MockTransport::new();
    transport.push_error(ProviderError::HttpStatus {
        status: 503,
        body: "down".to_string(),
    });

    let result = eztv_client(&transport).get_latest(50, 1, false).await;
    assert!(matches!(
        result,
        Err(ProviderError::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_tpb_movies_sorted_by_seeders() {
    let transport = MockTransport::with_response(json!([
        fixtures::tpb_torrent("Movie 2019 720p", 10, "AAAA"),
        fixtures::tpb_torrent("Movie 2019 1080p", 250, "BBBB"),
        fixtures::tpb_torrent("Movie 2019 2160p", 40, "CCCC"),
    ]));

    let records = tpb_client(&transport)
        .search_hd_movies("movie 2019", 10)
        .await
        .unwrap();

    let seeders: Vec<_> = records.iter().map(|r| r.seeders.as_str()).collect();
    assert_eq!(seeders, vec!["250", "40", "10"]);

    let best = &records[0];
    assert_eq!(best.year, "2019");
    assert_eq!(best.resolution, "1080p");
    assert_eq!(best.size, "2.00 GB");
    assert_eq!(best.uploaded_date, "2020-01-01");
    assert_eq!(best.magnet_link, "magnet:?xt=urn:btih:BBBB&dn=Movie%202019%201080p");
    assert_eq!(best.source, Provider::Tpb);

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].url, TPB_URL);
    assert_eq!(requests[0].param("q"), Some("movie 2019"));
    assert_eq!(requests[0].param("cat"), Some("207"));
}

#[tokio::test]
async fn test_tpb_tv_category_and_limit() {
    let transport = MockTransport::with_response(json!([
        fixtures::tpb_torrent("Show S01 1080p", 1, "AAAA"),
        fixtures::tpb_torrent("Show S02 1080p", 2, "BBBB"),
        fixtures::tpb_torrent("Show S03 1080p", 3, "CCCC"),
    ]));

    let records = tpb_client(&transport).search_hd_tv("show", 2).await.unwrap();

    // Limit applies to the raw list before sorting.
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Show S02 1080p", "Show S01 1080p"]);
    assert_eq!(transport.recorded_requests()[0].param("cat"), Some("208"));
}

#[tokio::test]
async fn test_tpb_no_results_placeholder() {
    let transport = MockTransport::with_response(fixtures::tpb_no_results());

    let records = tpb_client(&transport)
        .search_hd_movies("zzzzzz", 10)
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_tpb_raw_search() {
    let transport = MockTransport::with_response(json!([fixtures::tpb_torrent(
        "Raw 1080p", 5, "DDDD"
    )]));

    let raw = tpb_client(&transport)
        .search("raw", TpbCategory::HdMovies, 10)
        .await
        .unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0]["info_hash"], "DDDD");
}

#[tokio::test]
async fn test_tpb_invalid_json_propagates() {
    let transport = MockTransport::new();
    transport.push_error(ProviderError::InvalidJson("expected value".to_string()));

    let result = tpb_client(&transport).search_hd_tv("show", 10).await;
    assert!(matches!(result, Err(ProviderError::InvalidJson(_))));
}
