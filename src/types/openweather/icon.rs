//! Icon-code lookup and URL templating for OpenWeather condition ids.
//!
//! Icons are served from a CDN as `{base}{code}{d|n}.png`. The URL is
//! resolved when a [`Weather`](crate::Weather) entry is constructed, so the
//! serialized record carries the final URL.

/// Default CDN base for condition icons. Override it per client with
/// [`MeteoBridge::builder().icon_base_url(...)`](crate::MeteoBridge::builder).
pub const DEFAULT_ICON_BASE_URL: &str = "https://d1c40hpuz0tre6.cloudfront.net/weathers/";

/// The day/night marker appended to icon codes.
pub(crate) fn period_of_day(is_day: bool) -> &'static str {
    if is_day {
        "d"
    } else {
        "n"
    }
}

/// Icon code for an OpenWeather condition id. Ids without a dedicated icon
/// fall back to the clear-sky code.
pub(crate) fn icon_code(condition_id: u16) -> &'static str {
    match condition_id {
        800 => "113",
        801 | 802 | 803 => "116",
        804 => "119",
        701 => "143",
        500 => "176",
        600 => "179",
        300 | 321 => "263",
        301 => "266",
        313 | 520 => "293",
        302 | 310 | 311 | 312 => "296",
        314 | 521 => "299",
        501 => "302",
        502 => "308",
        611 => "317",
        602 => "320",
        601 => "332",
        511 => "350",
        522 => "356",
        503 | 504 | 531 => "359",
        612 => "362",
        613 => "365",
        620 => "368",
        621 | 622 => "371",
        200 | 210 | 230 | 231 => "386",
        201 | 202 | 211 | 212 | 221 | 232 => "389",
        615 => "615",
        616 => "616",
        711 => "701",
        721 | 731 => "731",
        741 => "741",
        751 => "751",
        761 => "761",
        _ => "800",
    }
}

pub(crate) fn icon_url(base_url: &str, condition_id: u16, is_day: bool) -> String {
    format!(
        "{}{}{}.png",
        base_url,
        icon_code(condition_id),
        period_of_day(is_day)
    )
}
