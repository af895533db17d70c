use bytes::Bytes;
use chrono::{NaiveTime, Timelike, Weekday};
use chrono_tz::Tz;
use http_body_util::Full;
use hyper::{body::Incoming, service::Service, Method, Request, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};
use url_escape::decode;

use std::{collections::HashMap, future::Future, pin::Pin, str::FromStr, sync::Arc};

use crate::{
    status::engine::{classify, format_time},
    timing::{
        clock::{format_current_time, studio_now},
        sample::TimeSample,
        schedule::{day_name, WeeklySchedule},
    },
};

use super::response::{ScheduleEntry, StatusResponse};

/// The Server
///
/// Serves the studio status to the site front end. Every request samples the
/// clock again; nothing is cached between requests.
///
/// Implements hyper's `Service` so each connection task can hold its own clone.
#[derive(Clone)]
pub struct Server {
    schedule: Arc<WeeklySchedule>,
    timezone: Tz,
}

impl Server {
    pub fn setup(schedule: Arc<WeeklySchedule>, timezone: Tz) -> Self {
        Self { schedule, timezone }
    }

    /// Parses the query parameters and returns a `hashmap` of key pair values
    /// Returns `None` if the parameters are malformed
    fn parse_params(text: &str) -> Option<HashMap<String, String>> {
        let mut map: HashMap<String, String> = HashMap::new();
        for pairs in text.split('&') {
            let mut iterator = pairs.split('=');
            map.insert(
                iterator.next()?.to_string(),
                decode(iterator.next()?).to_string(),
            );
        }
        Some(map)
    }

    /// Dispatch on method and path. Split out of `call` so it can be driven
    /// without a live connection.
    pub fn route(&self, method: &Method, path: &str, query: Option<&str>) -> Response<Full<Bytes>> {
        debug!(%method, path, "Request");
        match (method, path) {
            (&Method::GET, "/api/status") => self.status(query),
            (&Method::GET, "/api/schedule") => self.weekly_schedule(),
            _ => Self::not_found(),
        }
    }

    /// The /api/status API endpoint.
    ///
    /// Without parameters this classifies the current instant in the studio's
    /// time zone. `day` and `time` (HH:MM) together evaluate any other
    /// instant of the week instead, which the site uses to preview the banner.
    fn status(&self, query: Option<&str>) -> Response<Full<Bytes>> {
        let Some(params) = query else {
            let now = studio_now(self.timezone);
            let sample = TimeSample::from_datetime(&now);
            return self.status_at(sample, format_current_time(&now));
        };

        let Some(map) = Self::parse_params(params) else {
            return Self::bad_request("Malformed Parameters.");
        };

        let (day, time) = match (map.get("day"), map.get("time")) {
            (Some(day), Some(time)) => (day, time),
            (None, None) => {
                let now = studio_now(self.timezone);
                let sample = TimeSample::from_datetime(&now);
                return self.status_at(sample, format_current_time(&now));
            }
            _ => return Self::bad_request("day and time must be provided together."),
        };

        let Ok(day) = Weekday::from_str(day) else {
            return Self::bad_request("Malformed Day");
        };
        let Ok(time) = NaiveTime::parse_from_str(time, "%H:%M") else {
            return Self::bad_request("Malformed Time");
        };

        let hour_of_day = f64::from(time.hour()) + f64::from(time.minute()) / 60.0;
        let sample = match TimeSample::new(day, hour_of_day) {
            Ok(sample) => sample,
            Err(err) => return Self::bad_request(&err.to_string()),
        };
        self.status_at(sample, time.format("%-I:%M %p").to_string())
    }

    fn status_at(&self, sample: TimeSample, current_time: String) -> Response<Full<Bytes>> {
        let status = classify(&self.schedule, &sample);
        Self::ok_data(StatusResponse::new(status, current_time, day_name(sample.day())))
    }

    /// The /api/schedule API endpoint. Sunday first, like the schedule itself.
    fn weekly_schedule(&self) -> Response<Full<Bytes>> {
        let entries: Vec<ScheduleEntry> = self
            .schedule
            .days()
            .map(|(day, timing)| {
                let hours = match timing {
                    Some(timing) => format!(
                        "{} - {}",
                        format_time(timing.open_hour()),
                        format_time(timing.close_hour())
                    ),
                    None => "Closed".to_string(),
                };
                ScheduleEntry::new(day_name(day), hours)
            })
            .collect();
        Self::ok_data(entries)
    }

    fn respond(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
        let mut res = Response::new(Full::new(body));
        *res.status_mut() = status;
        res
    }

    /// Return a 200 OK response with the data provided.
    fn ok_data<T: Serialize>(body: T) -> Response<Full<Bytes>> {
        match serde_json::to_string(&body) {
            Ok(data) => Self::respond(StatusCode::OK, Bytes::from(data)),
            Err(err) => Self::server_error(&err.to_string()),
        }
    }

    /// Return a 500 Internal Server Error response with the message provided.
    fn server_error(message: &str) -> Response<Full<Bytes>> {
        warn!(error = message, "Internal error");
        Self::respond(StatusCode::INTERNAL_SERVER_ERROR, Self::error_body(message))
    }

    /// Return a 400 Bad Request response with the message provided.
    fn bad_request(message: &str) -> Response<Full<Bytes>> {
        Self::respond(StatusCode::BAD_REQUEST, Self::error_body(message))
    }

    /// Return an empty 404 Not Found response.
    fn not_found() -> Response<Full<Bytes>> {
        Self::respond(StatusCode::NOT_FOUND, Bytes::new())
    }

    fn error_body(message: &str) -> Bytes {
        Bytes::from(serde_json::json!({ "error": message }).to_string())
    }
}

impl Service<Request<Incoming>> for Server {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let res = self.route(req.method(), req.uri().path(), req.uri().query());
        Box::pin(async { Ok(res) })
    }
}
