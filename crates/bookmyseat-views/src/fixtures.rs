use bookmyseat_client::testing::{RecordingNotifier, StubTransport};
use bookmyseat_client::{Pipeline, Services};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct Harness {
    pub stub: StubTransport,
    pub notifier: Arc<RecordingNotifier>,
    pub services: Services,
}

pub fn harness() -> Harness {
    let stub = StubTransport::new();
    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = Pipeline::new(stub.clone(), true, notifier.clone());
    let services = Services::from_pipeline(&pipeline, "http://catalog", "http://reviews");
    Harness { stub, notifier, services }
}

pub fn movie(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "A heist in Los Angeles",
        "durationMinutes": 170,
        "genre": "Crime",
        "language": "English",
        "releaseDate": "1995-12-15"
    })
}

pub fn movie_detail(id: u64, title: &str) -> Value {
    let mut value = movie(id, title);
    value["showtimes"] = json!([{
        "id": 1,
        "movieId": id,
        "showDateTime": "2025-11-02T19:30:00",
        "theater": "Screen 1",
        "availableSeats": 40
    }]);
    value
}

pub fn review(id: u64, movie_id: u64, rating: u8) -> Value {
    json!({
        "id": id,
        "movieId": movie_id,
        "userName": format!("user{}", id),
        "rating": rating,
        "comment": "Worth it",
        "reviewDate": "2025-10-01T12:00:00"
    })
}

pub fn review_page(movie_id: u64, page: u32, total_pages: u32, total_reviews: u64, ids: &[u64]) -> Value {
    let reviews: Vec<Value> = ids.iter().map(|id| review(*id, movie_id, 4)).collect();
    json!({
        "reviews": reviews,
        "averageRating": 4.0,
        "totalReviews": total_reviews,
        "page": page,
        "totalPages": total_pages,
        "size": 10,
        "first": page == 0,
        "last": total_pages == 0 || page + 1 == total_pages
    })
}

pub fn rating_summary(movie_id: u64, total: u64, distribution: Value) -> Value {
    json!({
        "movieId": movie_id,
        "movieTitle": "Heat",
        "averageRating": 4.1,
        "totalReviews": total,
        "ratingDistribution": distribution
    })
}
