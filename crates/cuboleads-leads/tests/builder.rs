//! End-to-end tests for `LeadBuilder` against wiremock Places and site servers.

use cuboleads_analyzer::SiteAnalyzer;
use cuboleads_core::SearchQuery;
use cuboleads_leads::{DetailFailurePolicy, LeadBuilder, LeadSearchOutcome};
use cuboleads_places::PlacesClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALL_MARKERS: &str = r#"<a href="https://instagram.com/x"></a>
    <a href="https://wa.me/5519"></a>
    <script src="https://connect.facebook.net/en_US/fbevents.js"></script>"#;

fn builder(places_uri: &str) -> LeadBuilder {
    let places = PlacesClient::with_base_url("test-key", 5, places_uri)
        .expect("failed to build test PlacesClient");
    let analyzer =
        SiteAnalyzer::new(5, "cuboleads-test/0.1").expect("failed to build test SiteAnalyzer");
    LeadBuilder::new(places, analyzer)
}

async fn mount_search(server: &MockServer, place_ids: &[&str]) {
    let results: Vec<_> = place_ids.iter().map(|id| json!({ "place_id": id })).collect();
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "OK", "results": results })),
        )
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, place_id: &str, result: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", place_id))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "OK", "result": result })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn leads_are_ranked_by_urgency_with_no_site_first() {
    let places = MockServer::start().await;
    let sites = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/good"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ALL_MARKERS))
        .mount(&sites)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&sites)
        .await;

    mount_search(&places, &["good", "none", "broken"]).await;
    mount_detail(
        &places,
        "good",
        json!({
            "name": "Clínica Boa",
            "formatted_phone_number": "(19) 1111-1111",
            "website": format!("{}/good", sites.uri()),
            "formatted_address": "Rua Boa, 1"
        }),
    )
    .await;
    mount_detail(&places, "none", json!({ "name": "Dr. Sem Site" })).await;
    mount_detail(
        &places,
        "broken",
        json!({ "name": "Clínica Quebrada", "website": format!("{}/broken", sites.uri()) }),
    )
    .await;

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("Dentistas", "Sumaré, SP"))
        .await;

    let leads = match outcome {
        LeadSearchOutcome::Found(leads) => leads,
        LeadSearchOutcome::Failed { reason } => panic!("search failed: {reason}"),
    };

    let summary: Vec<(&str, u8)> = leads
        .iter()
        .map(|l| (l.company.as_str(), l.urgency))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Dr. Sem Site", 100),
            ("Clínica Quebrada", 40),
            ("Clínica Boa", 15),
        ]
    );

    assert_eq!(leads[0].website, "NÃO POSSUI");
    assert_eq!(leads[0].phone, "N/A");
    assert_eq!(leads[0].problems_joined, "SEM SITE (Oportunidade Alta)");
    assert_eq!(leads[1].problems_joined, "SITE COM ERRO (Código 500)");
    assert_eq!(leads[2].phone, "(19) 1111-1111");
    assert_eq!(leads[2].problems_joined, "SITE INSEGURO (Não usa HTTPS)");
}

#[tokio::test]
async fn equal_urgency_keeps_search_order() {
    let places = MockServer::start().await;
    let sites = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ALL_MARKERS))
        .mount(&sites)
        .await;

    mount_search(&places, &["p1", "p2", "p3"]).await;
    for (id, name) in [("p1", "Primeira"), ("p2", "Segunda"), ("p3", "Terceira")] {
        mount_detail(
            &places,
            id,
            json!({ "name": name, "website": format!("{}/{id}", sites.uri()) }),
        )
        .await;
    }

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("Padarias", "Campinas, SP"))
        .await;

    let names: Vec<&str> = outcome.leads().iter().map(|l| l.company.as_str()).collect();
    assert_eq!(names, vec!["Primeira", "Segunda", "Terceira"]);
}

#[tokio::test]
async fn zero_results_is_an_empty_success() {
    let places = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&places)
        .await;

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("Dentistas", "Lugar Nenhum"))
        .await;

    assert_eq!(outcome, LeadSearchOutcome::Found(Vec::new()));
}

#[tokio::test]
async fn search_api_failure_yields_failed_outcome() {
    let places = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&places)
        .await;

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("Dentistas", "Sumaré, SP"))
        .await;

    assert!(outcome.is_failed(), "expected Failed, got: {outcome:?}");
    assert!(outcome.leads().is_empty());
}

#[tokio::test]
async fn failed_reason_does_not_contain_api_key() {
    let places = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&places)
        .await;

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("Dentistas", "Sumaré, SP"))
        .await;

    match outcome {
        LeadSearchOutcome::Failed { reason } => {
            assert!(reason.contains("503"), "reason: {reason}");
            assert!(!reason.contains("test-key"), "reason leaks the API key: {reason}");
        }
        LeadSearchOutcome::Found(leads) => panic!("expected failure, got {leads:?}"),
    }
}

#[tokio::test]
async fn unreachable_search_api_yields_failed_outcome() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr").port()
    };

    let outcome = builder(&format!("http://127.0.0.1:{port}"))
        .build_leads(&SearchQuery::new("Dentistas", "Sumaré, SP"))
        .await;

    assert!(outcome.is_failed());
    assert!(outcome.leads().is_empty());
}

#[tokio::test]
async fn blank_query_fails_without_calling_the_api() {
    let places = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&places)
        .await;

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("", "Sumaré, SP"))
        .await;

    match outcome {
        LeadSearchOutcome::Failed { reason } => {
            assert!(reason.contains("category"), "unexpected reason: {reason}");
        }
        LeadSearchOutcome::Found(leads) => panic!("expected failure, got {leads:?}"),
    }
}

async fn mount_one_failing_detail(places: &MockServer) {
    mount_search(places, &["ok", "fails"]).await;
    mount_detail(places, "ok", json!({ "name": "Sem Site Ok" })).await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "fails"))
        .respond_with(ResponseTemplate::new(500))
        .mount(places)
        .await;
}

#[tokio::test]
async fn detail_failure_aborts_batch_by_default() {
    let places = MockServer::start().await;
    mount_one_failing_detail(&places).await;

    let outcome = builder(&places.uri())
        .build_leads(&SearchQuery::new("Dentistas", "Sumaré, SP"))
        .await;

    assert!(outcome.is_failed(), "expected Failed, got: {outcome:?}");
}

#[tokio::test]
async fn detail_failure_is_skipped_when_requested() {
    let places = MockServer::start().await;
    mount_one_failing_detail(&places).await;

    let outcome = builder(&places.uri())
        .with_detail_failure_policy(DetailFailurePolicy::SkipPlace)
        .build_leads(&SearchQuery::new("Dentistas", "Sumaré, SP"))
        .await;

    let leads = outcome.into_leads();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].company, "Sem Site Ok");
    assert_eq!(leads[0].urgency, 100);
}
